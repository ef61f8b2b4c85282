//! Raw statistics loading.
//!
//! The stats-search response groups each statistic into identification,
//! relation, and salary blocks; only the fields the pipeline consumes are
//! read, the rest of the payload is ignored. Salaries are passed through
//! untouched — deciding that `null`/`0` means "not reported" is the
//! aggregation step's contract, not the reader's.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use outcomes_model::{DisciplineId, Observation, RegionId};

use crate::error::{IngestError, Result};
use crate::raw::{id_string, id_strings, read_json};

/// File name of the serialized stats-search response inside a data
/// directory.
pub const STATS_FILE: &str = "stats.json";

#[derive(Debug, Deserialize)]
struct StatsResponse {
    #[serde(rename = "insertionsPro")]
    employment_entries: Vec<StatRecord>,
}

#[derive(Debug, Deserialize)]
struct StatRecord {
    #[serde(rename = "identifiants")]
    identifiers: Identifiers,
    relations: Relations,
    #[serde(rename = "salaire")]
    salary: SalaryBlock,
}

#[derive(Debug, Deserialize)]
struct Identifiers {
    #[serde(rename = "anneeCollecte")]
    collection_year: i32,
}

#[derive(Debug, Deserialize)]
struct Relations {
    #[serde(rename = "regionId", deserialize_with = "id_string")]
    region_id: String,
    #[serde(rename = "discIds", deserialize_with = "id_strings")]
    discipline_ids: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct SalaryBlock {
    #[serde(rename = "netMedianTempsPlein")]
    net_median_full_time: Option<f64>,
}

/// Read raw salary observations from a stats-search response file.
///
/// # Errors
///
/// Fails on unreadable or malformed files, and on structurally invalid
/// records (an empty discipline list, a blank id) with the record index in
/// the message.
pub fn read_stats(path: &Path) -> Result<Vec<Observation>> {
    let response: StatsResponse = read_json(path)?;
    let mut observations = Vec::with_capacity(response.employment_entries.len());
    for (index, record) in response.employment_entries.into_iter().enumerate() {
        if record.relations.discipline_ids.is_empty() {
            return Err(IngestError::Record {
                path: path.to_path_buf(),
                index,
                message: "empty discipline list".to_string(),
            });
        }
        let disciplines = record
            .relations
            .discipline_ids
            .into_iter()
            .map(DisciplineId::new)
            .collect::<outcomes_model::Result<Vec<_>>>()?;
        observations.push(Observation {
            year: record.identifiers.collection_year,
            region: RegionId::new(record.relations.region_id)?,
            disciplines,
            salary: record.salary.net_median_full_time,
        });
    }
    debug!(
        path = %path.display(),
        observation_count = observations.len(),
        "loaded raw statistics"
    );
    Ok(observations)
}
