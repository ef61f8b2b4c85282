//! End-to-end tests over aggregate + both builders.

use outcomes_model::{DisciplineId, NameDictionary, Observation, RegionId};
use outcomes_transform::{
    Selection, TransformError, aggregate, build_cross_tab, build_time_series,
};

fn region(id: &str) -> RegionId {
    RegionId::new(id).unwrap()
}

fn discipline(id: &str) -> DisciplineId {
    DisciplineId::new(id).unwrap()
}

fn observation(year: i32, r: &str, ds: &[&str], salary: Option<f64>) -> Observation {
    Observation {
        year,
        region: region(r),
        disciplines: ds.iter().map(|d| discipline(d)).collect(),
        salary,
    }
}

fn dictionaries() -> (NameDictionary<RegionId>, NameDictionary<DisciplineId>) {
    let regions = NameDictionary::from_entries([
        (region("r1"), "Ile-de-France"),
        (region("r2"), "Bretagne"),
    ]);
    let disciplines = NameDictionary::from_entries([
        (discipline("d1"), "Droit"),
        (discipline("d2"), "Sciences"),
    ]);
    (regions, disciplines)
}

#[test]
fn full_refresh_produces_both_views() {
    let observations = vec![
        observation(2019, "r1", &["d1"], Some(30_000.0)),
        observation(2021, "r1", &["d1"], Some(32_000.0)),
        observation(2021, "r1", &["d1"], None),
        observation(2021, "r2", &["d1", "d2"], Some(27_000.0)),
        observation(2020, "r2", &["d2"], Some(0.0)),
    ];
    let (regions, disciplines) = dictionaries();
    let averages = aggregate(&observations);

    let cross_tab = build_cross_tab(&averages, &regions, &disciplines).unwrap();
    assert_eq!(cross_tab.cells.len(), 3);
    // (r1, d1) keeps the 2021 average, not 2019's and not a cross-year mean.
    let r1_d1 = cross_tab
        .cells
        .iter()
        .find(|cell| cell.region_index == 0 && cell.discipline_index == 0)
        .unwrap();
    assert_eq!(r1_d1.salary, 32_000);

    let selection = Selection::Discipline(discipline("d1"));
    let series = build_time_series(&averages, &regions, &disciplines, &selection).unwrap();
    assert_eq!(series.legend, vec!["Bretagne", "Ile-de-France"]);
    assert_eq!(series.years, vec![2019, 2021]);
    assert_eq!(series.series[0].values, vec![None, Some(27_000)]);
    assert_eq!(series.series[1].values, vec![Some(30_000), Some(32_000)]);
}

#[test]
fn both_or_neither_selection_always_fails() {
    // Dataset contents never rescue an invalid selection.
    for selection in [
        Selection::from_options(Some(discipline("d1")), Some(region("r1"))),
        Selection::from_options(None, None),
    ] {
        assert_eq!(selection, Err(TransformError::InvalidSelection));
    }
}

#[test]
fn empty_observations_flow_through_as_empty_views() {
    let (regions, disciplines) = dictionaries();
    let averages = aggregate(&[]);
    assert!(averages.is_empty());

    let cross_tab = build_cross_tab(&averages, &regions, &disciplines).unwrap();
    assert!(cross_tab.cells.is_empty());

    let selection = Selection::Region(region("r1"));
    let series = build_time_series(&averages, &regions, &disciplines, &selection).unwrap();
    assert!(series.legend.is_empty());
    assert!(series.years.is_empty());
    assert!(series.series.is_empty());
}
