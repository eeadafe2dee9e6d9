use itertools::Itertools;

const GITHUB_URL: &str = "https://github.com";

#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub struct Repository {
    pub owner: String,
    pub name: String,
}

// New
impl Repository {
    pub fn new(owner: impl ToString, name: impl ToString) -> Self {
        Self {
            owner: owner.to_string(),
            name: name.to_string(),
        }
    }

    /// Builds the repositories of `owner` named in a comma separated list.
    /// Blank entries are skipped and duplicates keep their first position.
    pub fn from_list(owner: &str, list: &str) -> Vec<Self> {
        list.split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unique()
            .map(|name| Self::new(owner, name))
            .collect()
    }
}

// Links
impl Repository {
    pub fn html_url(&self) -> String {
        format!("{GITHUB_URL}/{}/{}", self.owner, self.name)
    }
}

/// Location of the roster document listing internal contributors.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RosterSource {
    pub owner: String,
    pub repo: String,
    pub path: String,
}

impl RosterSource {
    pub fn new(owner: impl ToString, repo: impl ToString, path: impl ToString) -> Self {
        Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
            path: path.to_string(),
        }
    }
}
