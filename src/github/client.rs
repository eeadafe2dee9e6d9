use super::{Account, CommitQuery, HostingApi, Page, RepoCommit, RepositoryInfo, UserProfile};
use crate::error::{Error, Result};
use crate::model::{Repository, RosterSource};
use async_trait::async_trait;
use chrono::SecondsFormat;
use reqwest::header::{ACCEPT, AUTHORIZATION, LINK, USER_AGENT};
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use tracing::trace;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

const PER_PAGE: u32 = 100;
const JSON_MEDIA_TYPE: &str = "application/vnd.github+json";
const RAW_MEDIA_TYPE: &str = "application/vnd.github.raw+json";
const CLIENT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// GitHub REST client. One instance (and one connection pool) per run.
pub struct GitHubClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl GitHubClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.is_empty()),
        })
    }

    fn get(&self, path: &str, media_type: &str) -> RequestBuilder {
        let request = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .header(ACCEPT, media_type)
            .header(USER_AGENT, CLIENT_USER_AGENT);
        match &self.token {
            Some(token) => request.header(AUTHORIZATION, format!("Bearer {token}")),
            None => request,
        }
    }

    async fn send(request: RequestBuilder) -> Result<Response> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                status,
                url: response.url().to_string(),
            });
        }
        Ok(response)
    }

    async fn get_page<T: DeserializeOwned>(
        &self,
        path: &str,
        page: u32,
        mut query: Vec<(&str, String)>,
    ) -> Result<Page<T>> {
        query.push(("per_page", PER_PAGE.to_string()));
        query.push(("page", page.to_string()));
        trace!(path, page, "GET page");

        let response = Self::send(self.get(path, JSON_MEDIA_TYPE).query(&query)).await?;
        let next_page = response
            .headers()
            .get(LINK)
            .and_then(|value| value.to_str().ok())
            .and_then(next_page_from_link);
        let items = response.json::<Vec<T>>().await?;
        Ok(Page::new(items, next_page))
    }
}

#[async_trait]
impl HostingApi for GitHubClient {
    async fn list_org_members(&self, org: &str, page: u32) -> Result<Page<Account>> {
        self.get_page(&format!("/orgs/{org}/members"), page, vec![])
            .await
    }

    async fn list_org_repositories(&self, org: &str, page: u32) -> Result<Page<RepositoryInfo>> {
        self.get_page(&format!("/orgs/{org}/repos"), page, vec![])
            .await
    }

    async fn get_file_contents(&self, source: &RosterSource) -> Result<String> {
        let path = format!(
            "/repos/{}/{}/contents/{}",
            source.owner,
            source.repo,
            source.path.trim_start_matches('/')
        );
        let response = Self::send(self.get(&path, RAW_MEDIA_TYPE)).await?;
        Ok(response.text().await?)
    }

    async fn list_commits(
        &self,
        repo: &Repository,
        query: &CommitQuery,
    ) -> Result<Page<RepoCommit>> {
        let mut params = vec![];
        if let Some(since) = query.since {
            params.push(("since", since.to_rfc3339_opts(SecondsFormat::Secs, true)));
        }
        if let Some(until) = query.until {
            params.push(("until", until.to_rfc3339_opts(SecondsFormat::Secs, true)));
        }
        let path = format!("/repos/{}/{}/commits", repo.owner, repo.name);
        self.get_page(&path, query.page, params).await
    }

    async fn get_user(&self, login: &str) -> Result<UserProfile> {
        let response = Self::send(self.get(&format!("/users/{login}"), JSON_MEDIA_TYPE)).await?;
        Ok(response.json::<UserProfile>().await?)
    }
}

/// Extracts the `page` parameter of the `rel="next"` entry of a `Link` header.
fn next_page_from_link(header: &str) -> Option<u32> {
    header
        .split(',')
        .find(|part| part.contains(r#"rel="next""#))
        .and_then(|part| {
            let start = part.find('<')? + 1;
            let end = part.find('>')?;
            Url::parse(part.get(start..end)?).ok()
        })
        .and_then(|url| {
            url.query_pairs()
                .find(|(key, _)| key == "page")
                .and_then(|(_, value)| value.parse().ok())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_page_is_read_from_link_header() {
        let header = concat!(
            r#"<https://api.github.com/repositories/1/commits?per_page=100&page=3>; rel="next", "#,
            r#"<https://api.github.com/repositories/1/commits?per_page=100&page=9>; rel="last""#
        );
        assert_eq!(next_page_from_link(header), Some(3));
    }

    #[test]
    fn last_page_has_no_next_link() {
        let header = concat!(
            r#"<https://api.github.com/repositories/1/commits?per_page=100&page=1>; rel="first", "#,
            r#"<https://api.github.com/repositories/1/commits?per_page=100&page=8>; rel="prev""#
        );
        assert_eq!(next_page_from_link(header), None);
    }

    #[test]
    fn empty_token_is_ignored() {
        let client = GitHubClient::new("https://api.github.com/", Some(String::new())).unwrap();
        assert!(client.token.is_none());
        assert_eq!(client.base_url, "https://api.github.com");
    }
}
