use super::CommitFilter;
use crate::error::Result;
use crate::github::{CommitQuery, HostingApi};
use crate::model::{ContributionRecord, Repository};
use crate::utils::{MultiProgressNew, ProgressStyleTemplate};
use chrono::{DateTime, SecondsFormat, Utc};
use indicatif::{MultiProgress, ProgressBar};
use tracing::{debug, info};

/// Walks the full commit history of each repository and records the
/// commits that pass the [`CommitFilter`].
pub struct Collector<'a, A: ?Sized> {
    api: &'a A,
    filter: CommitFilter<'a>,
    since: Option<DateTime<Utc>>,
    until: Option<DateTime<Utc>>,
}

impl<'a, A: HostingApi + ?Sized> Collector<'a, A> {
    pub fn new(api: &'a A, filter: CommitFilter<'a>) -> Self {
        Self {
            api,
            filter,
            since: None,
            until: None,
        }
    }

    pub fn with_window(self, since: Option<DateTime<Utc>>, until: Option<DateTime<Utc>>) -> Self {
        Self {
            since,
            until,
            ..self
        }
    }

    pub async fn collect(
        &self,
        repos: &[Repository],
        progress: &MultiProgress,
    ) -> Result<ContributionRecord> {
        let mut record = ContributionRecord::new();
        for repo in repos {
            info!("Looking at repo {}/{}", repo.owner, repo.name);
            let pb = progress.add_with_style(
                ProgressBar::new_spinner(),
                ProgressStyleTemplate::only_message(),
            );
            let found = self.collect_repository(repo, &pb, &mut record).await?;
            pb.finish_with_message(format!(
                "✅ Completed {} (find {} external commits)",
                repo.name, found
            ));
        }
        Ok(record)
    }

    async fn collect_repository(
        &self,
        repo: &Repository,
        pb: &ProgressBar,
        record: &mut ContributionRecord,
    ) -> Result<usize> {
        let mut query = CommitQuery::new(self.since, self.until);
        let mut found = 0;
        loop {
            pb.set_message(format!(
                "{}: fetch commits (#{} page) ...",
                repo.name, query.page
            ));
            let commits = self.api.list_commits(repo, &query).await?;
            for commit in &commits.items {
                if let Some(reason) = self.filter.exclusion(commit) {
                    debug!(sha = %commit.sha, %reason, "Skipping commit");
                    continue;
                }
                let Some(authored_at) = commit.authored_at() else {
                    debug!(sha = %commit.sha, "Skipping commit without author date");
                    continue;
                };
                info!(
                    "Found commit by {} ({}) on {}",
                    commit.login(),
                    commit.author_email(),
                    authored_at.to_rfc3339_opts(SecondsFormat::Secs, true)
                );
                record.push(commit.login(), authored_at);
                found += 1;
            }
            match commits.next_page {
                Some(next) => query = query.with_page(next),
                None => break,
            }
        }
        Ok(found)
    }
}
