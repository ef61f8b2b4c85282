//! Entity dictionary loading.
//!
//! The retrieval collaborator serves two entity resources: academies (each
//! carrying its parent region) and discipline sectors (each carrying its
//! parent discipline). Both are deduplicated into id → name dictionaries;
//! parent entities repeat once per child row, first name wins.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use outcomes_model::{DisciplineId, NameDictionary, RegionId};

use crate::error::Result;
use crate::raw::{id_string, read_json};

/// File name of the serialized academies resource inside a data directory.
pub const ACADEMIES_FILE: &str = "academies.json";
/// File name of the serialized discipline-sector resource.
pub const DISCIPLINE_SECTORS_FILE: &str = "secteurs-disciplinaires.json";

#[derive(Debug, Deserialize)]
struct AcademyRecord {
    #[serde(rename = "regionId", deserialize_with = "id_string")]
    region_id: String,
    #[serde(rename = "regionNom")]
    region_name: String,
}

#[derive(Debug, Deserialize)]
struct DisciplineSectorRecord {
    #[serde(rename = "disciplineId", deserialize_with = "id_string")]
    discipline_id: String,
    #[serde(rename = "disciplineNom")]
    discipline_name: String,
}

/// Both name dictionaries the builders consume.
#[derive(Debug, Clone)]
pub struct EntityDictionaries {
    pub regions: NameDictionary<RegionId>,
    pub disciplines: NameDictionary<DisciplineId>,
}

/// Read the region dictionary from an academies resource file.
pub fn read_academies(path: &Path) -> Result<NameDictionary<RegionId>> {
    let records: Vec<AcademyRecord> = read_json(path)?;
    let mut regions = NameDictionary::new();
    for record in records {
        regions.insert(RegionId::new(record.region_id)?, record.region_name);
    }
    debug!(path = %path.display(), region_count = regions.len(), "loaded academies");
    Ok(regions)
}

/// Read the discipline dictionary from a discipline-sector resource file.
pub fn read_discipline_sectors(path: &Path) -> Result<NameDictionary<DisciplineId>> {
    let records: Vec<DisciplineSectorRecord> = read_json(path)?;
    let mut disciplines = NameDictionary::new();
    for record in records {
        disciplines.insert(
            DisciplineId::new(record.discipline_id)?,
            record.discipline_name,
        );
    }
    debug!(
        path = %path.display(),
        discipline_count = disciplines.len(),
        "loaded discipline sectors"
    );
    Ok(disciplines)
}

/// Load both entity dictionaries from their conventional files in `data_dir`.
pub fn read_entities(data_dir: &Path) -> Result<EntityDictionaries> {
    Ok(EntityDictionaries {
        regions: read_academies(&data_dir.join(ACADEMIES_FILE))?,
        disciplines: read_discipline_sectors(&data_dir.join(DISCIPLINE_SECTORS_FILE))?,
    })
}
