//! Integration tests for the refresh pipeline.

use std::fs;

use outcomes_cli::pipeline::{RawDataset, RefreshGuard, load_dataset, refresh};
use outcomes_ingest::EntityDictionaries;
use outcomes_model::{DisciplineId, NameDictionary, Observation, RegionId};
use outcomes_transform::Selection;

fn region(id: &str) -> RegionId {
    RegionId::new(id).unwrap()
}

fn discipline(id: &str) -> DisciplineId {
    DisciplineId::new(id).unwrap()
}

fn sample_dataset() -> RawDataset {
    let entities = EntityDictionaries {
        regions: NameDictionary::from_entries([
            (region("11"), "Ile-de-France"),
            (region("53"), "Bretagne"),
        ]),
        disciplines: NameDictionary::from_entries([
            (discipline("4"), "Droit"),
            (discipline("5"), "Histoire"),
        ]),
    };
    let observations = vec![
        Observation {
            year: 2019,
            region: region("11"),
            disciplines: vec![discipline("4")],
            salary: Some(30_000.0),
        },
        Observation {
            year: 2021,
            region: region("11"),
            disciplines: vec![discipline("4"), discipline("5")],
            salary: Some(34_000.0),
        },
        Observation {
            year: 2021,
            region: region("53"),
            disciplines: vec![discipline("4")],
            salary: Some(0.0),
        },
    ];
    RawDataset {
        observations,
        entities,
    }
}

// Guard interactions stay inside this single test; the refresh slot is
// process-wide and parallel test threads would race on it otherwise.
#[test]
fn refresh_cycle_end_to_end_and_guard_rejects_overlap() {
    let dataset = sample_dataset();

    let outcome = refresh(&dataset, None).unwrap();
    assert_eq!(outcome.averages.len(), 3);
    assert!(outcome.time_series.is_none());
    // (11, 4) keeps the 2021 average; the zero-salary Bretagne row is gone.
    assert_eq!(outcome.cross_tab.cells.len(), 2);

    let selection = Selection::Discipline(discipline("4"));
    let outcome = refresh(&dataset, Some(&selection)).unwrap();
    let view = outcome.time_series.unwrap();
    assert_eq!(view.legend, vec!["Ile-de-France"]);
    assert_eq!(view.years, vec![2019, 2021]);
    assert_eq!(view.series[0].values, vec![Some(30_000), Some(34_000)]);

    // At most one in-flight cycle.
    let slot = RefreshGuard::acquire().unwrap();
    assert!(RefreshGuard::acquire().is_err());
    assert!(refresh(&dataset, None).is_err());
    drop(slot);
    assert!(refresh(&dataset, None).is_ok());
}

#[test]
fn load_dataset_reads_the_conventional_layout() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("academies.json"),
        r#"[{"id": 1, "nom": "Rennes", "regionId": 53, "regionNom": "Bretagne"}]"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("secteurs-disciplinaires.json"),
        r#"[{"id": 9, "nom": "Droit prive", "disciplineId": 4, "disciplineNom": "Droit"}]"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("stats.json"),
        r#"{"insertionsPro": [{
            "identifiants": {"anneeCollecte": 2020},
            "relations": {"regionId": 53, "discIds": [4]},
            "salaire": {"netMedianTempsPlein": 28000}
        }]}"#,
    )
    .unwrap();

    let dataset = load_dataset(dir.path(), None).unwrap();
    assert_eq!(dataset.observations.len(), 1);
    assert_eq!(dataset.entities.regions.len(), 1);
    assert_eq!(dataset.entities.disciplines.len(), 1);
}

#[test]
fn load_dataset_prefers_a_csv_export_when_given() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("academies.json"),
        r#"[{"id": 1, "nom": "Rennes", "regionId": 53, "regionNom": "Bretagne"}]"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("secteurs-disciplinaires.json"),
        r#"[{"id": 9, "nom": "Droit prive", "disciplineId": 4, "disciplineNom": "Droit"}]"#,
    )
    .unwrap();
    let csv_path = dir.path().join("observations.csv");
    fs::write(
        &csv_path,
        "year,region_id,discipline_ids,salary\n2020,53,4,28000\n2021,53,4,\n",
    )
    .unwrap();

    let dataset = load_dataset(dir.path(), Some(&csv_path)).unwrap();
    assert_eq!(dataset.observations.len(), 2);
    assert_eq!(dataset.observations[1].salary, None);
}