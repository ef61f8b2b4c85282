//! Flat CSV observation reader for exported datasets.
//!
//! Expected header: `year,region_id,discipline_ids,salary`, with
//! `discipline_ids` holding one or more `;`-separated ids and an empty
//! salary column meaning "not reported".

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use outcomes_model::{DisciplineId, Observation, RegionId};

use crate::error::{IngestError, Result};

#[derive(Debug, Deserialize)]
struct CsvRow {
    year: i32,
    region_id: String,
    discipline_ids: String,
    salary: Option<f64>,
}

/// Read raw salary observations from a flat CSV export.
pub fn read_observations_csv(path: &Path) -> Result<Vec<Observation>> {
    let mut reader =
        csv::Reader::from_path(path).map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
    let mut observations = Vec::new();
    for (index, row) in reader.deserialize::<CsvRow>().enumerate() {
        let row = row.map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let disciplines = row
            .discipline_ids
            .split(';')
            .filter(|id| !id.trim().is_empty())
            .map(DisciplineId::new)
            .collect::<outcomes_model::Result<Vec<_>>>()?;
        if disciplines.is_empty() {
            return Err(IngestError::Record {
                path: path.to_path_buf(),
                index,
                message: "empty discipline list".to_string(),
            });
        }
        observations.push(Observation {
            year: row.year,
            region: RegionId::new(row.region_id)?,
            disciplines,
            salary: row.salary,
        });
    }
    debug!(
        path = %path.display(),
        observation_count = observations.len(),
        "loaded observation export"
    );
    Ok(observations)
}
