use chrono::{DateTime, Utc};
use indexmap::IndexMap;

/// Commit instants of every external login, in discovery order.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct ContributionRecord {
    contributions: IndexMap<String, Vec<DateTime<Utc>>>,
}

impl ContributionRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, login: impl Into<String>, at: DateTime<Utc>) {
        self.contributions.entry(login.into()).or_default().push(at);
    }

    pub fn get(&self, login: &str) -> Option<&[DateTime<Utc>]> {
        self.contributions.get(login).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<DateTime<Utc>>)> {
        self.contributions.iter()
    }

    pub fn len(&self) -> usize {
        self.contributions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contributions.is_empty()
    }

    pub fn total_commits(&self) -> usize {
        self.contributions.values().map(Vec::len).sum()
    }
}

impl FromIterator<(String, Vec<DateTime<Utc>>)> for ContributionRecord {
    fn from_iter<T: IntoIterator<Item = (String, Vec<DateTime<Utc>>)>>(iter: T) -> Self {
        let mut record = Self::new();
        for (login, times) in iter {
            record.contributions.entry(login).or_default().extend(times);
        }
        record
    }
}
