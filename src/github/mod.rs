//! Remote source hosting API consumed by the collector and the enricher.

mod client;
mod model;

pub use client::{GitHubClient, DEFAULT_API_URL};
pub use model::{Account, CommitDetails, CommitParent, GitSignature, RepoCommit, RepositoryInfo, UserProfile};

use crate::error::Result;
use crate::model::{Repository, RosterSource};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// One page of a paginated listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next_page: Option<u32>,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, next_page: Option<u32>) -> Self {
        Self { items, next_page }
    }

    pub fn last(items: Vec<T>) -> Self {
        Self::new(items, None)
    }
}

/// Restricts a commit listing to one page and an optional author date window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitQuery {
    pub page: u32,
    pub since: Option<DateTime<Utc>>,
    pub until: Option<DateTime<Utc>>,
}

impl CommitQuery {
    pub fn new(since: Option<DateTime<Utc>>, until: Option<DateTime<Utc>>) -> Self {
        Self {
            page: 1,
            since,
            until,
        }
    }

    pub fn with_page(self, page: u32) -> Self {
        Self { page, ..self }
    }
}

/// Operations of the hosting service. Every error is fatal to the run.
#[async_trait]
pub trait HostingApi: Send + Sync {
    async fn list_org_members(&self, org: &str, page: u32) -> Result<Page<Account>>;

    async fn list_org_repositories(&self, org: &str, page: u32) -> Result<Page<RepositoryInfo>>;

    async fn get_file_contents(&self, source: &RosterSource) -> Result<String>;

    async fn list_commits(&self, repo: &Repository, query: &CommitQuery)
        -> Result<Page<RepoCommit>>;

    async fn get_user(&self, login: &str) -> Result<UserProfile>;
}
