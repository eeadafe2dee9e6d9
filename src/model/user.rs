use crate::github::UserProfile;
use chrono::{DateTime, Utc};

/// A hosting account as shown in the report.
#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub struct Identity {
    pub login: String,
    pub name: Option<String>,
    pub html_url: Option<String>,
}

// Create
impl Identity {
    pub fn new(login: impl ToString) -> Self {
        Self {
            login: login.to_string(),
            name: None,
            html_url: None,
        }
    }

    pub fn from_profile(login: &str, profile: UserProfile) -> Self {
        Self {
            login: login.to_string(),
            name: profile.name.filter(|name| !name.is_empty()),
            html_url: Some(profile.html_url).filter(|url| !url.is_empty()),
        }
    }
}

// Display
impl Identity {
    /// Display name, falling back to the login when the profile has none.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.login)
    }

    pub fn profile_url(&self) -> &str {
        self.html_url.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedUser {
    pub identity: Identity,
    pub contributions: Vec<DateTime<Utc>>,
}

impl EnrichedUser {
    pub fn new(identity: Identity, contributions: Vec<DateTime<Utc>>) -> Self {
        Self {
            identity,
            contributions,
        }
    }

    pub fn login(&self) -> &str {
        &self.identity.login
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_falls_back_to_login() {
        let profile = UserProfile {
            login: "external1".to_string(),
            name: Some(String::new()),
            html_url: "https://github.com/external1".to_string(),
        };
        let identity = Identity::from_profile("external1", profile);
        assert_eq!(identity.display_name(), "external1");
        assert_eq!(identity.profile_url(), "https://github.com/external1");
    }

    #[test]
    fn display_name_prefers_profile_name() {
        let profile = UserProfile {
            login: "external1".to_string(),
            name: Some("External One".to_string()),
            html_url: String::new(),
        };
        let identity = Identity::from_profile("external1", profile);
        assert_eq!(identity.display_name(), "External One");
        assert_eq!(identity.profile_url(), "");
    }
}
