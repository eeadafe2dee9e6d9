//! The two phases of a run: collect-and-store, then load-enrich-report.

use crate::checkpoint;
use crate::collect::{fetch_org_members, fetch_org_repositories, CommitFilter, Collector};
use crate::config::{Config, Mode};
use crate::enrich::Enricher;
use crate::error::{Error, Result};
use crate::filter::{load_filter_set, FilterSet};
use crate::github::HostingApi;
use crate::model::{ContributionRecord, Repository};
use crate::report::ContributorReport;
use crate::utils::progress_group;
use chrono::{DateTime, Utc};
use indicatif::MultiProgress;
use std::fs;
use std::sync::Arc;
use tracing::info;

/// Runs the phases selected by `config.mode` and returns the rendered report,
/// which has also been written to `config.output_path`.
pub async fn run<A: HostingApi + ?Sized + 'static>(
    api: Arc<A>,
    config: &Config,
    now: DateTime<Utc>,
) -> Result<String> {
    validate(config)?;
    let progress = progress_group(config.show_progress);
    let repos = resolve_repositories(api.as_ref(), config).await?;
    let filters = load_filter_set(
        api.as_ref(),
        &config.roster,
        &config.internal_domain,
        &config.blocklist,
    )
    .await?;

    if config.mode == Mode::Collect {
        let record = collect(api.as_ref(), config, &repos, &filters, &progress).await?;
        checkpoint::store(&config.checkpoint_path, &record)?;
    }

    let record = checkpoint::load(&config.checkpoint_path)?;
    report(api, config, &repos, &filters, &record, &progress, now).await
}

fn validate(config: &Config) -> Result<()> {
    if let (Some(since), Some(until)) = (config.since, config.until) {
        if since >= until {
            return Err(Error::Config(format!(
                "since ({since}) must be before until ({until})"
            )));
        }
    }
    if config.organization.is_empty() {
        return Err(Error::Config("organization must not be empty".to_string()));
    }
    Ok(())
}

async fn resolve_repositories<A: HostingApi + ?Sized>(
    api: &A,
    config: &Config,
) -> Result<Vec<Repository>> {
    let repos = Repository::from_list(&config.organization, &config.repositories);
    if !repos.is_empty() {
        return Ok(repos);
    }
    fetch_org_repositories(api, &config.organization).await
}

/// Scans every repository and returns the external contributions found.
pub async fn collect<A: HostingApi + ?Sized>(
    api: &A,
    config: &Config,
    repos: &[Repository],
    filters: &FilterSet,
    progress: &MultiProgress,
) -> Result<ContributionRecord> {
    let members = fetch_org_members(api, &config.organization).await?;
    let filter = CommitFilter::new(&members, filters);
    let record = Collector::new(api, filter)
        .with_window(config.since, config.until)
        .collect(repos, progress)
        .await?;
    info!(
        "Collected {} commits from {} external logins",
        record.total_commits(),
        record.len()
    );
    Ok(record)
}

/// Enriches `record`, renders the report and writes it to the output path.
pub async fn report<A: HostingApi + ?Sized + 'static>(
    api: Arc<A>,
    config: &Config,
    repos: &[Repository],
    filters: &FilterSet,
    record: &ContributionRecord,
    progress: &MultiProgress,
    now: DateTime<Utc>,
) -> Result<String> {
    let users = Enricher::new(api, config.lookup_pool_size)
        .enrich(record, filters, progress)
        .await?;
    let rendered = ContributorReport::new(&users, repos, now).render();
    fs::write(&config.output_path, &rendered)?;
    info!("Output to {}", config.output_path.display());
    Ok(rendered)
}
