//! Region × discipline cross-tabulation of latest-year average salaries.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use outcomes_model::{
    AverageRecord, CrossTabCell, CrossTabView, DisciplineId, NameDictionary, RegionId,
};

use crate::error::{Result, TransformError};

/// Pivot the aggregated dataset into an indexed region × discipline matrix.
///
/// Axis label order follows the dictionaries' iteration order (ascending
/// id). Each (region, discipline) pair present in `averages` produces
/// exactly one cell holding the most recent year's average; a
/// strictly-greater year replaces the retained entry.
///
/// # Errors
///
/// Fails with a missing-entry error when a record references an id the
/// corresponding dictionary does not contain; the caller must supply
/// dictionaries covering every id in `averages`.
pub fn build_cross_tab(
    averages: &[AverageRecord],
    regions: &NameDictionary<RegionId>,
    disciplines: &NameDictionary<DisciplineId>,
) -> Result<CrossTabView> {
    let region_index = regions.index_by_id();
    let discipline_index = disciplines.index_by_id();

    // Latest-year reduction per (region, discipline) pair. Keys are unique
    // per year upstream, so strictly-greater is the whole tie-break rule.
    let mut latest: BTreeMap<(RegionId, DisciplineId), (i32, i64)> = BTreeMap::new();
    for record in averages {
        let key = (record.region.clone(), record.discipline.clone());
        match latest.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert((record.year, record.average_salary));
            }
            Entry::Occupied(mut slot) => {
                if record.year > slot.get().0 {
                    slot.insert((record.year, record.average_salary));
                }
            }
        }
    }

    let mut cells = Vec::with_capacity(latest.len());
    for ((region, discipline), (_, salary)) in &latest {
        let region_index = *region_index
            .get(region)
            .ok_or_else(|| TransformError::MissingRegionName(region.clone()))?;
        let discipline_index = *discipline_index
            .get(discipline)
            .ok_or_else(|| TransformError::MissingDisciplineName(discipline.clone()))?;
        cells.push(CrossTabCell {
            region_index,
            discipline_index,
            salary: *salary,
        });
    }

    Ok(CrossTabView {
        region_names: regions.names(),
        discipline_names: disciplines.names(),
        cells,
    })
}
