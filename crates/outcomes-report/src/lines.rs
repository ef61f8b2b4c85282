//! Lines payload for the time-series view.

use serde::Serialize;

use outcomes_model::{DisciplineId, NameDictionary, RegionId, TimeSeriesView};
use outcomes_transform::{Selection, TransformError};

/// One rendered line: the entity name and its year-aligned values, `null`
/// marking years without data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineSeries {
    pub name: String,
    pub values: Vec<Option<i64>>,
}

/// Chart-ready lines data for one selection, with the derived heading
/// naming the selected entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinesPayload {
    pub title: String,
    pub legend: Vec<String>,
    pub years: Vec<i32>,
    pub series: Vec<LineSeries>,
}

impl LinesPayload {
    /// Build the payload, resolving the selected entity's display name.
    ///
    /// # Errors
    ///
    /// Fails with a missing-entry error when the selected id is absent from
    /// its dictionary.
    pub fn from_view(
        view: &TimeSeriesView,
        selection: &Selection,
        regions: &NameDictionary<RegionId>,
        disciplines: &NameDictionary<DisciplineId>,
    ) -> outcomes_transform::Result<Self> {
        let subject = match selection {
            Selection::Discipline(discipline) => {
                let name = disciplines
                    .get(discipline)
                    .ok_or_else(|| TransformError::MissingDisciplineName(discipline.clone()))?;
                format!("discipline {name}")
            }
            Selection::Region(region) => {
                let name = regions
                    .get(region)
                    .ok_or_else(|| TransformError::MissingRegionName(region.clone()))?;
                format!("region {name}")
            }
        };
        Ok(Self {
            title: format!("Average salary evolution for {subject}"),
            legend: view.legend.clone(),
            years: view.years.clone(),
            series: view
                .series
                .iter()
                .map(|series| LineSeries {
                    name: series.label.clone(),
                    values: series.values.clone(),
                })
                .collect(),
        })
    }
}
