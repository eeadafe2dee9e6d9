//! Persistence of collected contributions between the two phases.
//!
//! The checkpoint is a JSON object mapping each login to the RFC 3339
//! instants of its commits, e.g. `{"external1": ["2021-05-04T12:30:00Z"]}`.

use crate::error::{Error, Result};
use crate::model::ContributionRecord;
use chrono::{DateTime, SecondsFormat, Utc};
use indexmap::IndexMap;
use std::fs;
use std::path::Path;
use tracing::info;

type StoredContributions = IndexMap<String, Vec<String>>;

/// Writes `record` to `path`, replacing any previous checkpoint.
pub fn store(path: &Path, record: &ContributionRecord) -> Result<()> {
    let stored = record
        .iter()
        .map(|(login, times)| {
            let times = times
                .iter()
                .map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true))
                .collect();
            (login.clone(), times)
        })
        .collect::<StoredContributions>();
    let json = serde_json::to_string_pretty(&stored)?;
    fs::write(path, json).map_err(|source| Error::Checkpoint {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        "Stored {} logins ({} commits) to {}",
        record.len(),
        record.total_commits(),
        path.display()
    );
    Ok(())
}

/// Reads a checkpoint written by [`store`]. Any malformed instant fails the load.
pub fn load(path: &Path) -> Result<ContributionRecord> {
    let json = fs::read_to_string(path).map_err(|source| Error::Checkpoint {
        path: path.to_path_buf(),
        source,
    })?;
    let stored: StoredContributions = serde_json::from_str(&json)?;
    let record = parse(stored)?;
    info!(
        "Loaded {} logins ({} commits) from {}",
        record.len(),
        record.total_commits(),
        path.display()
    );
    Ok(record)
}

fn parse(stored: StoredContributions) -> Result<ContributionRecord> {
    stored
        .into_iter()
        .map(|(login, values)| {
            let times = values
                .into_iter()
                .map(|value| match DateTime::parse_from_rfc3339(&value) {
                    Ok(at) => Ok(at.with_timezone(&Utc)),
                    Err(source) => Err(Error::InvalidTimestamp {
                        login: login.clone(),
                        value,
                        source,
                    }),
                })
                .collect::<Result<Vec<_>>>()?;
            Ok((login, times))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    #[test]
    fn store_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("intermediate_output.json");

        let mut record = ContributionRecord::new();
        record.push("external1", at(2021, 5, 4, 12, 30, 0));
        record.push("external2", at(2015, 1, 1, 0, 0, 1));
        record.push("external1", at(2023, 12, 31, 23, 59, 59));

        store(&path, &record).unwrap();
        assert_eq!(load(&path).unwrap(), record);
    }

    #[test]
    fn empty_record_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.json");

        store(&path, &ContributionRecord::new()).unwrap();
        assert!(load(&path).unwrap().is_empty());
    }

    #[test]
    fn stores_utc_second_precision_strings() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("checkpoint.json");

        let mut record = ContributionRecord::new();
        record.push("external1", at(2021, 5, 4, 12, 30, 0));
        store(&path, &record).unwrap();

        let stored: StoredContributions =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(stored["external1"], vec!["2021-05-04T12:30:00Z".to_string()]);
    }

    #[test]
    fn offsets_are_normalized_to_utc() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("checkpoint.json");
        fs::write(&path, r#"{"external1": ["2021-05-04T14:30:00+02:00"]}"#).unwrap();

        let record = load(&path).unwrap();
        assert_eq!(record.get("external1"), Some(&[at(2021, 5, 4, 12, 30, 0)][..]));
    }

    #[test]
    fn malformed_timestamp_is_fatal() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("checkpoint.json");
        fs::write(&path, r#"{"external1": ["yesterday"]}"#).unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidTimestamp { ref login, ref value, .. } if login == "external1" && value == "yesterday"
        ));
    }

    #[test]
    fn missing_file_is_fatal() {
        let dir = tempdir().unwrap();
        let err = load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, Error::Checkpoint { .. }));
    }
}
