//! Profile lookups for every collected login under a concurrency cap.

use crate::error::{Error, Result};
use crate::filter::FilterSet;
use crate::github::HostingApi;
use crate::model::{ContributionRecord, EnrichedUser, Identity};
use crate::utils::{MultiProgressNew, ProgressStyleTemplate};
use futures::future;
use indexmap::IndexMap;
use indicatif::{MultiProgress, ProgressBar};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{debug, info};

pub const DEFAULT_POOL_SIZE: usize = 20;

pub type EnrichedUsers = IndexMap<String, EnrichedUser>;

pub struct Enricher<A: ?Sized> {
    api: Arc<A>,
    pool_size: usize,
}

impl<A: HostingApi + ?Sized + 'static> Enricher<A> {
    pub fn new(api: Arc<A>, pool_size: usize) -> Self {
        Self {
            api,
            pool_size: pool_size.max(1),
        }
    }

    /// Looks up the profile of every login of `record`, at most `pool_size`
    /// at a time, and waits for all lookups before dropping blocklisted
    /// logins and internal names. The first failed lookup fails the whole
    /// enrichment once every task has finished.
    pub async fn enrich(
        &self,
        record: &ContributionRecord,
        filters: &FilterSet,
        progress: &MultiProgress,
    ) -> Result<EnrichedUsers> {
        let pb = progress.add_with_style(
            ProgressBar::new(record.len() as u64),
            ProgressStyleTemplate::number_bar(),
        );
        pb.set_message("Profiles");

        let semaphore = Arc::new(Semaphore::new(self.pool_size));
        let lookups = record
            .iter()
            .map(|(login, times)| {
                let api = Arc::clone(&self.api);
                let semaphore = Arc::clone(&semaphore);
                let pb = pb.clone();
                let login = login.clone();
                let times = times.clone();
                tokio::spawn(async move {
                    let _permit = semaphore
                        .acquire_owned()
                        .await
                        .map_err(|_| Error::PoolClosed)?;
                    debug!("Looking up {}", login);
                    let profile = api.get_user(&login).await;
                    pb.inc(1);
                    let identity = Identity::from_profile(&login, profile?);
                    Ok::<_, Error>(EnrichedUser::new(identity, times))
                })
            })
            .collect::<Vec<_>>();

        let results = future::join_all(lookups).await;
        pb.finish_with_message("✅ Profiles");

        let mut users = EnrichedUsers::with_capacity(results.len());
        for result in results {
            let user = result??;
            if filters.is_blocklisted(user.login()) {
                debug!("Dropping blocklisted {}", user.login());
                continue;
            }
            if filters.is_internal_name(user.identity.display_name()) {
                debug!(
                    "Dropping {} named {}",
                    user.login(),
                    user.identity.display_name()
                );
                continue;
            }
            users.insert(user.login().to_string(), user);
        }
        info!(
            "Enriched {} of {} external logins",
            users.len(),
            record.len()
        );
        Ok(users)
    }
}
