//! Grouped averaging of raw salary observations.

use std::collections::BTreeMap;

use outcomes_model::{AverageRecord, DisciplineId, Observation, RegionId};

#[derive(Debug, Default)]
struct Accumulator {
    sum: f64,
    count: u32,
}

/// Reduce raw observations to one average salary per distinct
/// (year, region, discipline) triple.
///
/// Observations without a reported salary are discarded up front. Each
/// remaining observation contributes one sample per discipline it carries,
/// every sample holding the observation's full salary value. The result is
/// independent of input order and emitted in ascending key order; empty or
/// all-invalid input yields an empty result.
pub fn aggregate(observations: &[Observation]) -> Vec<AverageRecord> {
    let mut groups: BTreeMap<(i32, RegionId, DisciplineId), Accumulator> = BTreeMap::new();
    for observation in observations {
        let Some(salary) = observation.reported_salary() else {
            continue;
        };
        for discipline in &observation.disciplines {
            let key = (
                observation.year,
                observation.region.clone(),
                discipline.clone(),
            );
            let group = groups.entry(key).or_default();
            group.sum += salary;
            group.count += 1;
        }
    }
    groups
        .into_iter()
        .map(|((year, region, discipline), group)| AverageRecord {
            year,
            region,
            discipline,
            average_salary: round_mean(group.sum, group.count),
        })
        .collect()
}

/// Arithmetic mean rounded half away from zero; half-up for the
/// non-negative salary domain.
fn round_mean(sum: f64, count: u32) -> i64 {
    (sum / f64::from(count)).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

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

    #[test]
    fn averages_one_group() {
        let records = aggregate(&[
            observation(2020, "r1", &["d1"], Some(30_000.0)),
            observation(2020, "r1", &["d1"], Some(34_000.0)),
        ]);
        assert_eq!(
            records,
            vec![AverageRecord {
                year: 2020,
                region: region("r1"),
                discipline: discipline("d1"),
                average_salary: 32_000,
            }]
        );
    }

    #[test]
    fn null_and_zero_salaries_are_excluded() {
        let records = aggregate(&[
            observation(2020, "r1", &["d1"], None),
            observation(2020, "r1", &["d1"], Some(0.0)),
            observation(2020, "r1", &["d1"], Some(30_000.0)),
        ]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].average_salary, 30_000);
    }

    #[test]
    fn multi_discipline_observation_fans_out_with_full_salary() {
        let records = aggregate(&[observation(2021, "r1", &["d1", "d2"], Some(28_000.0))]);
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.average_salary == 28_000));
        assert_eq!(records[0].discipline, discipline("d1"));
        assert_eq!(records[1].discipline, discipline("d2"));
    }

    #[test]
    fn mean_ties_round_upward() {
        // average 2.5 -> 3
        let records = aggregate(&[
            observation(2020, "r1", &["d1"], Some(2.0)),
            observation(2020, "r1", &["d1"], Some(3.0)),
        ]);
        assert_eq!(records[0].average_salary, 3);
    }

    #[test]
    fn groups_are_keyed_by_year_region_and_discipline() {
        let records = aggregate(&[
            observation(2019, "r1", &["d1"], Some(30_000.0)),
            observation(2020, "r1", &["d1"], Some(31_000.0)),
            observation(2020, "r2", &["d1"], Some(32_000.0)),
            observation(2020, "r2", &["d2"], Some(33_000.0)),
        ]);
        assert_eq!(records.len(), 4);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(aggregate(&[]).is_empty());
    }
}
