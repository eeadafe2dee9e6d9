use crate::model::EnrichedUser;
use chrono::{DateTime, NaiveDate, Utc};
use itertools::Itertools;
use markdown_builder::Link;

/// First year covered by the all-time range.
pub const ALL_TIME_START_YEAR: i32 = 2014;

const SEPARATOR: &str = ", ";

/// A `[from, to)` window. Counting uses the open interval `(from, to)`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct TimeRange {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl TimeRange {
    pub fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self { from, to }
    }

    /// January 1st of `year` up to January 1st of the next year.
    pub fn year(year: i32) -> Option<Self> {
        Some(Self::new(new_year(year)?, new_year(year + 1)?))
    }

    pub fn all_time(now: DateTime<Utc>) -> Option<Self> {
        Some(Self::new(new_year(ALL_TIME_START_YEAR)?, now))
    }

    pub fn contains(&self, at: &DateTime<Utc>) -> bool {
        *at > self.from && *at < self.to
    }
}

fn new_year(year: i32) -> Option<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(year, 1, 1)?
        .and_hms_opt(0, 0, 0)
        .map(|naive| naive.and_utc())
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankedContributor<'a> {
    pub user: &'a EnrichedUser,
    pub count: usize,
}

impl RankedContributor<'_> {
    /// `[name](url) (count)`
    pub fn label(&self) -> String {
        let identity = &self.user.identity;
        let link = Link::from(identity.profile_url(), identity.display_name(), false, true);
        format!("{} ({})", link, self.count)
    }
}

/// Users with at least one commit in `range`, by count descending then login.
pub fn rank<'a, I>(users: I, range: &TimeRange) -> Vec<RankedContributor<'a>>
where
    I: IntoIterator<Item = &'a EnrichedUser>,
{
    users
        .into_iter()
        .map(|user| RankedContributor {
            user,
            count: user.contributions.iter().filter(|at| range.contains(at)).count(),
        })
        .filter(|ranked| ranked.count > 0)
        .sorted_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.user.login().cmp(b.user.login()))
        })
        .collect()
}

/// Summary line followed by the ranked labels of `range`.
pub fn format_contributors<'a, I>(users: I, range: &TimeRange) -> (String, String)
where
    I: IntoIterator<Item = &'a EnrichedUser>,
{
    let ranked = rank(users, range);
    let commits = ranked.iter().map(|r| r.count).sum::<usize>();
    let summary = format!("{} contributors, {} commits", ranked.len(), commits);
    let labels = ranked.iter().map(RankedContributor::label).join(SEPARATOR);
    (summary, labels)
}
