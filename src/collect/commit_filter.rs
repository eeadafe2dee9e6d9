use crate::filter::FilterSet;
use crate::github::RepoCommit;
use std::collections::HashSet;
use std::fmt;

const MERGE_PULL_REQUEST_MARKER: &str = "Merge pull request ";

/// Why a commit does not count as an external contribution.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Exclusion {
    RootCommit,
    NoLogin,
    OrganizationMember,
    MergePullRequest,
    InternalName,
    InternalEmail,
    InternalDomain,
}

impl fmt::Display for Exclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Exclusion::RootCommit => "root commit",
            Exclusion::NoLogin => "no author login",
            Exclusion::OrganizationMember => "organization member",
            Exclusion::MergePullRequest => "pull request merge",
            Exclusion::InternalName => "internal author name",
            Exclusion::InternalEmail => "internal author email",
            Exclusion::InternalDomain => "internal email domain",
        };
        f.write_str(reason)
    }
}

pub struct CommitFilter<'a> {
    members: &'a HashSet<String>,
    filters: &'a FilterSet,
}

impl<'a> CommitFilter<'a> {
    pub fn new(members: &'a HashSet<String>, filters: &'a FilterSet) -> Self {
        Self { members, filters }
    }

    /// Returns the first rule excluding `commit`, or `None` when it is an
    /// external contribution.
    pub fn exclusion(&self, commit: &RepoCommit) -> Option<Exclusion> {
        let login = commit.login();
        let email = commit.author_email();
        if commit.is_root() {
            Some(Exclusion::RootCommit)
        } else if login.is_empty() {
            Some(Exclusion::NoLogin)
        } else if self.members.contains(login) {
            Some(Exclusion::OrganizationMember)
        } else if commit.commit.message.starts_with(MERGE_PULL_REQUEST_MARKER) {
            Some(Exclusion::MergePullRequest)
        } else if self.filters.is_internal_name(commit.author_name()) {
            Some(Exclusion::InternalName)
        } else if self.filters.emails.contains(email) {
            Some(Exclusion::InternalEmail)
        } else if self.filters.is_internal_email(email) {
            Some(Exclusion::InternalDomain)
        } else {
            None
        }
    }

    pub fn is_external(&self, commit: &RepoCommit) -> bool {
        self.exclusion(commit).is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{parse_blocklist, parse_roster};
    use crate::github::{Account, CommitDetails, CommitParent, GitSignature};

    fn commit(login: &str, name: &str, email: &str, message: &str, parents: usize) -> RepoCommit {
        RepoCommit {
            sha: "0123abcd".to_string(),
            commit: CommitDetails {
                author: Some(GitSignature {
                    name: Some(name.to_string()),
                    email: Some(email.to_string()),
                    date: None,
                }),
                message: message.to_string(),
            },
            author: Some(Account {
                login: login.to_string(),
            }),
            parents: (0..parents)
                .map(|i| CommitParent { sha: format!("parent{i}") })
                .collect(),
        }
    }

    fn fixtures() -> (HashSet<String>, FilterSet) {
        let members = ["member1".to_string()].into_iter().collect();
        let roster = parse_roster("Jane Doe <jane@cockroachlabs.com>", "@cockroachlabs.com");
        let filters = FilterSet::new(roster, parse_blocklist(""), "@cockroachlabs.com");
        (members, filters)
    }

    #[test]
    fn external_commit_is_kept() {
        let (members, filters) = fixtures();
        let filter = CommitFilter::new(&members, &filters);
        let c = commit("external1", "External One", "external1@gmail.com", "Fix bug", 1);
        assert_eq!(filter.exclusion(&c), None);
        assert!(filter.is_external(&c));
    }

    #[test]
    fn root_commit_is_excluded_regardless_of_author() {
        let (members, filters) = fixtures();
        let filter = CommitFilter::new(&members, &filters);
        let c = commit("external1", "External One", "external1@gmail.com", "Fix bug", 0);
        assert_eq!(filter.exclusion(&c), Some(Exclusion::RootCommit));
    }

    #[test]
    fn each_rule_excludes() {
        let (members, filters) = fixtures();
        let filter = CommitFilter::new(&members, &filters);
        let cases = [
            (commit("", "Someone", "someone@gmail.com", "Fix", 1), Exclusion::NoLogin),
            (
                commit("member1", "Member", "member@gmail.com", "Fix", 1),
                Exclusion::OrganizationMember,
            ),
            (
                commit("external1", "External One", "external1@gmail.com", "Merge pull request #12 from a/b", 2),
                Exclusion::MergePullRequest,
            ),
            (
                commit("janedoe", "Jane Doe", "jane.doe@gmail.com", "Fix", 1),
                Exclusion::InternalName,
            ),
            (
                commit("jane", "J. Doe", "jane@cockroachlabs.com", "Fix", 1),
                Exclusion::InternalEmail,
            ),
            (
                commit("newhire", "New Hire", "newhire@cockroachlabs.com", "Fix", 1),
                Exclusion::InternalDomain,
            ),
        ];
        for (c, expected) in cases {
            assert_eq!(filter.exclusion(&c), Some(expected), "{}", c.login());
        }
    }

    #[test]
    fn merge_marker_must_prefix_message() {
        let (members, filters) = fixtures();
        let filter = CommitFilter::new(&members, &filters);
        let c = commit("external1", "External One", "external1@gmail.com", "Revert \"Merge pull request #1\"", 1);
        assert!(filter.is_external(&c));
    }
}
