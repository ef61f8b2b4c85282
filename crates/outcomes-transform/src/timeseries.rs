//! Year-aligned salary series for one selected region or discipline.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use outcomes_model::{
    AverageRecord, DisciplineId, NameDictionary, RegionId, Series, TimeSeriesView,
};

use crate::error::{Result, TransformError};
use crate::selection::Selection;

/// Pivot the aggregated dataset into one salary series per entity of the
/// non-selected dimension, aligned on a shared ascending year axis.
///
/// With a discipline selected the series are per region; with a region
/// selected they are per discipline. Legend entries are sorted by display
/// name and `series` follows legend order. Years without data for a series
/// are explicit `None` gaps. A selection matching no records yields the
/// well-formed empty view, not an error.
///
/// # Errors
///
/// Fails with a missing-entry error when a filtered record references an id
/// absent from the corresponding name dictionary.
pub fn build_time_series(
    averages: &[AverageRecord],
    regions: &NameDictionary<RegionId>,
    disciplines: &NameDictionary<DisciplineId>,
    selection: &Selection,
) -> Result<TimeSeriesView> {
    match selection {
        Selection::Discipline(discipline) => {
            let filtered: Vec<&AverageRecord> = averages
                .iter()
                .filter(|record| &record.discipline == discipline)
                .collect();
            align(&filtered, |record| &record.region, |region| {
                regions
                    .get(region)
                    .map(str::to_string)
                    .ok_or_else(|| TransformError::MissingRegionName(region.clone()))
            })
        }
        Selection::Region(region) => {
            let filtered: Vec<&AverageRecord> = averages
                .iter()
                .filter(|record| &record.region == region)
                .collect();
            align(&filtered, |record| &record.discipline, |discipline| {
                disciplines
                    .get(discipline)
                    .map(str::to_string)
                    .ok_or_else(|| TransformError::MissingDisciplineName(discipline.clone()))
            })
        }
    }
}

/// Shared alignment steps over the filtered subset, generic in the
/// non-selected dimension's key.
fn align<'a, K, KeyFn, NameFn>(
    records: &[&'a AverageRecord],
    key_of: KeyFn,
    name_of: NameFn,
) -> Result<TimeSeriesView>
where
    K: Ord + Hash + Clone + 'a,
    KeyFn: Fn(&'a AverageRecord) -> &'a K,
    NameFn: Fn(&K) -> Result<String>,
{
    let mut years: Vec<i32> = records.iter().map(|record| record.year).collect();
    years.sort_unstable();
    years.dedup();
    let year_index: HashMap<i32, usize> = years
        .iter()
        .enumerate()
        .map(|(index, year)| (*year, index))
        .collect();

    // Distinct entities in id order, then re-sorted by display name. The
    // sort is stable, so entities sharing a name keep their id order.
    let mut names_by_id: BTreeMap<K, String> = BTreeMap::new();
    for &record in records {
        let key = key_of(record);
        if !names_by_id.contains_key(key) {
            names_by_id.insert(key.clone(), name_of(key)?);
        }
    }
    let mut ordered: Vec<(K, String)> = names_by_id.into_iter().collect();
    ordered.sort_by(|left, right| left.1.cmp(&right.1));

    let series_index: HashMap<K, usize> = ordered
        .iter()
        .enumerate()
        .map(|(index, (id, _))| (id.clone(), index))
        .collect();
    let legend: Vec<String> = ordered.iter().map(|(_, name)| name.clone()).collect();
    let mut series: Vec<Series> = ordered
        .into_iter()
        .map(|(_, label)| Series {
            label,
            values: vec![None; years.len()],
        })
        .collect();

    for &record in records {
        let row = series_index[key_of(record)];
        let column = year_index[&record.year];
        series[row].values[column] = Some(record.average_salary);
    }

    Ok(TimeSeriesView {
        legend,
        years,
        series,
    })
}
