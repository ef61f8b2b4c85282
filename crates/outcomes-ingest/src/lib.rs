//! Employment-outcome data ingestion.
//!
//! Readers for the file-serialized data contracts of the external
//! retrieval collaborator:
//!
//! - **entities**: academies and discipline sectors, deduplicated into
//!   id → name dictionaries
//! - **stats**: the stats-search response carrying raw salary observations
//! - **csv_observations**: flat CSV observation exports
//!
//! Readers validate structure only; salary validity filtering belongs to
//! the transformation pipeline.

pub mod csv_observations;
pub mod entities;
pub mod error;
mod raw;
pub mod stats;

pub use csv_observations::read_observations_csv;
pub use entities::{
    ACADEMIES_FILE, DISCIPLINE_SECTORS_FILE, EntityDictionaries, read_academies,
    read_discipline_sectors, read_entities,
};
pub use error::{IngestError, Result};
pub use stats::{STATS_FILE, read_stats};
