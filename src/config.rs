use crate::enrich::DEFAULT_POOL_SIZE;
use crate::model::RosterSource;
use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// Which phases a run executes.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Mode {
    /// Collect commits, store the checkpoint, then report from it.
    Collect,
    /// Report from a previously stored checkpoint.
    FromCheckpoint,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub organization: String,
    pub roster: RosterSource,
    pub internal_domain: String,
    /// Comma separated repository names; empty means every org repository.
    pub repositories: String,
    /// Comma separated logins excluded from the report.
    pub blocklist: String,
    pub checkpoint_path: PathBuf,
    pub output_path: PathBuf,
    pub mode: Mode,
    pub since: Option<DateTime<Utc>>,
    pub until: Option<DateTime<Utc>>,
    pub lookup_pool_size: usize,
    pub show_progress: bool,
}

impl Config {
    pub fn new(organization: impl ToString, roster: RosterSource) -> Self {
        Self {
            organization: organization.to_string(),
            roster,
            internal_domain: String::new(),
            repositories: String::new(),
            blocklist: String::new(),
            checkpoint_path: PathBuf::from("intermediate_output.json"),
            output_path: PathBuf::from("output.md"),
            mode: Mode::Collect,
            since: None,
            until: None,
            lookup_pool_size: DEFAULT_POOL_SIZE,
            show_progress: true,
        }
    }
}
