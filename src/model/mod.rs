mod contribution;
mod repository;
mod user;

pub use contribution::ContributionRecord;
pub use repository::{Repository, RosterSource};
pub use user::{EnrichedUser, Identity};
