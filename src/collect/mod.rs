mod collector;
mod commit_filter;
mod organization;

pub use collector::Collector;
pub use commit_filter::{CommitFilter, Exclusion};
pub use organization::{fetch_org_members, fetch_org_repositories};
