use thiserror::Error;

use outcomes_model::{DisciplineId, RegionId};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransformError {
    /// Caller contract violation: both or neither of discipline/region
    /// selected when building a time series.
    #[error("exactly one of discipline or region must be selected")]
    InvalidSelection,
    /// The region dictionary and the aggregated dataset are out of sync.
    #[error("no region name for id {0}")]
    MissingRegionName(RegionId),
    /// The discipline dictionary and the aggregated dataset are out of sync.
    #[error("no discipline name for id {0}")]
    MissingDisciplineName(DisciplineId),
}

pub type Result<T> = std::result::Result<T, TransformError>;
