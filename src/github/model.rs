use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Account {
    #[serde(default)]
    pub login: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RepositoryInfo {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub html_url: String,
}

/// Entry of a repository commit listing.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RepoCommit {
    pub sha: String,
    pub commit: CommitDetails,
    /// Hosting account the commit is attributed to, absent for unknown emails.
    #[serde(default)]
    pub author: Option<Account>,
    #[serde(default)]
    pub parents: Vec<CommitParent>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CommitDetails {
    #[serde(default)]
    pub author: Option<GitSignature>,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct GitSignature {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CommitParent {
    pub sha: String,
}

impl RepoCommit {
    pub fn login(&self) -> &str {
        self.author.as_ref().map(|a| a.login.as_str()).unwrap_or_default()
    }

    pub fn author_name(&self) -> &str {
        self.signature().and_then(|s| s.name.as_deref()).unwrap_or_default()
    }

    pub fn author_email(&self) -> &str {
        self.signature().and_then(|s| s.email.as_deref()).unwrap_or_default()
    }

    pub fn authored_at(&self) -> Option<DateTime<Utc>> {
        self.signature().and_then(|s| s.date)
    }

    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }

    fn signature(&self) -> Option<&GitSignature> {
        self.commit.author.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_commit_listing_entry() {
        let json = r#"{
            "sha": "abc123",
            "commit": {
                "author": {
                    "name": "External One",
                    "email": "external1@gmail.com",
                    "date": "2021-05-04T12:30:00Z"
                },
                "message": "Fix bug"
            },
            "author": { "login": "external1", "id": 1 },
            "parents": [{ "sha": "def456", "url": "https://example.invalid" }]
        }"#;
        let commit: RepoCommit = serde_json::from_str(json).unwrap();

        assert_eq!(commit.login(), "external1");
        assert_eq!(commit.author_name(), "External One");
        assert_eq!(commit.author_email(), "external1@gmail.com");
        assert_eq!(
            commit.authored_at(),
            Some(Utc.with_ymd_and_hms(2021, 5, 4, 12, 30, 0).unwrap())
        );
        assert!(!commit.is_root());
    }

    #[test]
    fn unattributed_commit_has_empty_login() {
        let json = r#"{
            "sha": "abc123",
            "commit": { "author": null, "message": "Initial commit" },
            "author": null,
            "parents": []
        }"#;
        let commit: RepoCommit = serde_json::from_str(json).unwrap();

        assert_eq!(commit.login(), "");
        assert_eq!(commit.author_email(), "");
        assert_eq!(commit.authored_at(), None);
        assert!(commit.is_root());
    }
}
