mod roster;

pub use roster::{parse_blocklist, parse_roster, Roster};

use crate::error::Result;
use crate::github::HostingApi;
use crate::model::RosterSource;
use std::collections::HashSet;
use tracing::info;

/// Identities recognised as internal for the duration of a run.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct FilterSet {
    pub emails: HashSet<String>,
    pub names: HashSet<String>,
    pub blocklist: HashSet<String>,
    /// Substring marking an internal email address, e.g. `@cockroachlabs.com`.
    pub internal_domain: String,
}

impl FilterSet {
    pub fn new(roster: Roster, blocklist: HashSet<String>, internal_domain: impl ToString) -> Self {
        Self {
            emails: roster.emails,
            names: roster.names,
            blocklist,
            internal_domain: internal_domain.to_string(),
        }
    }

    pub fn is_internal_email(&self, email: &str) -> bool {
        self.emails.contains(email)
            || (!self.internal_domain.is_empty() && email.contains(&self.internal_domain))
    }

    pub fn is_internal_name(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn is_blocklisted(&self, login: &str) -> bool {
        self.blocklist.contains(login)
    }
}

/// Fetches the roster document and builds the run's filter set from it.
pub async fn load_filter_set<A: HostingApi + ?Sized>(
    api: &A,
    source: &RosterSource,
    internal_domain: &str,
    blocklist: &str,
) -> Result<FilterSet> {
    let contents = api.get_file_contents(source).await?;
    let roster = parse_roster(&contents, internal_domain);
    info!(
        emails = roster.emails.len(),
        names = roster.names.len(),
        "Loaded roster {}/{}/{}",
        source.owner,
        source.repo,
        source.path
    );
    Ok(FilterSet::new(
        roster,
        parse_blocklist(blocklist),
        internal_domain,
    ))
}
