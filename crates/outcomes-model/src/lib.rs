pub mod dictionary;
pub mod error;
pub mod ids;
pub mod observation;
pub mod views;

pub use dictionary::NameDictionary;
pub use error::{ModelError, Result};
pub use ids::{DisciplineId, RegionId};
pub use observation::{AverageRecord, Observation};
pub use views::{CrossTabCell, CrossTabView, Series, TimeSeriesView};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_id_rejects_blank_input() {
        assert!(RegionId::new("  ").is_err());
        assert!(RegionId::new("").is_err());
        let id = RegionId::new(" 11 ").expect("valid id");
        assert_eq!(id.as_str(), "11");
    }

    #[test]
    fn reported_salary_treats_zero_as_missing() {
        let mut observation = Observation {
            year: 2020,
            region: RegionId::new("r1").unwrap(),
            disciplines: vec![DisciplineId::new("d1").unwrap()],
            salary: Some(0.0),
        };
        assert_eq!(observation.reported_salary(), None);
        observation.salary = None;
        assert_eq!(observation.reported_salary(), None);
        observation.salary = Some(28_500.0);
        assert_eq!(observation.reported_salary(), Some(28_500.0));
    }

    #[test]
    fn dictionary_iterates_in_id_order() {
        let mut regions = NameDictionary::new();
        regions.insert(RegionId::new("52").unwrap(), "Pays de la Loire");
        regions.insert(RegionId::new("11").unwrap(), "Ile-de-France");
        regions.insert(RegionId::new("24").unwrap(), "Centre-Val de Loire");
        assert_eq!(
            regions.names(),
            vec!["Ile-de-France", "Centre-Val de Loire", "Pays de la Loire"]
        );
        let index = regions.index_by_id();
        assert_eq!(index[&RegionId::new("24").unwrap()], 1);
    }

    #[test]
    fn dictionary_first_name_wins_on_repeat_insert() {
        let mut regions = NameDictionary::new();
        regions.insert(RegionId::new("11").unwrap(), "Ile-de-France");
        regions.insert(RegionId::new("11").unwrap(), "renamed");
        assert_eq!(regions.get(&RegionId::new("11").unwrap()), Some("Ile-de-France"));
        assert_eq!(regions.len(), 1);
    }

    #[test]
    fn dictionary_find_by_name() {
        let regions = NameDictionary::from_entries([
            (RegionId::new("11").unwrap(), "Ile-de-France"),
            (RegionId::new("52").unwrap(), "Pays de la Loire"),
        ]);
        assert_eq!(
            regions.find_by_name("Pays de la Loire"),
            Some(&RegionId::new("52").unwrap())
        );
        assert_eq!(regions.find_by_name("Bretagne"), None);
    }

    #[test]
    fn view_serializes() {
        let view = CrossTabView {
            region_names: vec!["Ile-de-France".to_string()],
            discipline_names: vec!["Droit".to_string()],
            cells: vec![CrossTabCell {
                region_index: 0,
                discipline_index: 0,
                salary: 31_000,
            }],
        };
        let json = serde_json::to_string(&view).expect("serialize view");
        let round: CrossTabView = serde_json::from_str(&json).expect("deserialize view");
        assert_eq!(round, view);
    }
}
