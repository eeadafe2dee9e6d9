mod aggregate;
mod markdown;

pub use aggregate::{format_contributors, rank, RankedContributor, TimeRange, ALL_TIME_START_YEAR};
pub use markdown::ContributorReport;
