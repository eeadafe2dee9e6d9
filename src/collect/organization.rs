use crate::error::Result;
use crate::github::HostingApi;
use crate::model::Repository;
use std::collections::HashSet;
use tracing::info;

/// Logins of every member of `org`, gathered across all listing pages.
pub async fn fetch_org_members<A: HostingApi + ?Sized>(api: &A, org: &str) -> Result<HashSet<String>> {
    let mut logins = HashSet::new();
    let mut page = Some(1);
    while let Some(current) = page {
        let members = api.list_org_members(org, current).await?;
        logins.extend(members.items.into_iter().map(|m| m.login));
        page = members.next_page;
    }
    info!("Found {} members of {}", logins.len(), org);
    Ok(logins)
}

pub async fn fetch_org_repositories<A: HostingApi + ?Sized>(
    api: &A,
    org: &str,
) -> Result<Vec<Repository>> {
    let mut repos = vec![];
    let mut page = Some(1);
    while let Some(current) = page {
        let listed = api.list_org_repositories(org, current).await?;
        repos.extend(listed.items.into_iter().map(|r| Repository::new(org, r.name)));
        page = listed.next_page;
    }
    info!("Found {} repositories of {}", repos.len(), org);
    Ok(repos)
}
