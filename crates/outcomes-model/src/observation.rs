use serde::{Deserialize, Serialize};

use crate::{DisciplineId, RegionId};

/// One raw salary statistic as supplied by the retrieval collaborator.
///
/// An observation is tied to a collection year, one region, and one or more
/// disciplines. A `salary` of `None` or `0.0` means "not reported" and marks
/// the observation invalid for aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub year: i32,
    pub region: RegionId,
    /// Non-empty by contract; an observation with N disciplines contributes
    /// N independent samples, each with the full salary value.
    pub disciplines: Vec<DisciplineId>,
    pub salary: Option<f64>,
}

impl Observation {
    /// The salary if it was actually reported.
    ///
    /// Zero is a sentinel for "not reported", not a real wage.
    pub fn reported_salary(&self) -> Option<f64> {
        self.salary.filter(|salary| *salary != 0.0)
    }
}

/// One averaged salary value for a unique (year, region, discipline) triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AverageRecord {
    pub year: i32,
    pub region: RegionId,
    pub discipline: DisciplineId,
    pub average_salary: i64,
}
