//! Heatmap payload for the cross-tabulation view.

use serde::Serialize;

use outcomes_model::CrossTabView;

/// Inclusive salary bounds over the populated cells, for the rendering
/// collaborator's value scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueRange {
    pub min: i64,
    pub max: i64,
}

/// Chart-ready heatmap data: axis labels, `[regionIndex, disciplineIndex,
/// salary]` triplets, and the derived heading.
///
/// `value_range` is `None` when the cross-tab has no cells; consumers must
/// special-case the empty state instead of assuming at least one cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapPayload {
    pub title: String,
    pub region_names: Vec<String>,
    pub discipline_names: Vec<String>,
    pub cells: Vec<(usize, usize, i64)>,
    pub value_range: Option<ValueRange>,
}

impl HeatmapPayload {
    pub fn from_view(view: &CrossTabView) -> Self {
        let value_range = view
            .cells
            .iter()
            .map(|cell| cell.salary)
            .fold(None, |range, salary| {
                Some(match range {
                    None => ValueRange {
                        min: salary,
                        max: salary,
                    },
                    Some(ValueRange { min, max }) => ValueRange {
                        min: min.min(salary),
                        max: max.max(salary),
                    },
                })
            });
        Self {
            title: heatmap_title(view.region_names.len(), view.discipline_names.len()),
            region_names: view.region_names.clone(),
            discipline_names: view.discipline_names.clone(),
            cells: view
                .cells
                .iter()
                .map(|cell| (cell.region_index, cell.discipline_index, cell.salary))
                .collect(),
            value_range,
        }
    }
}

fn heatmap_title(region_count: usize, discipline_count: usize) -> String {
    format!(
        "Full-time average salary heatmap for {region_count} region{} and {discipline_count} discipline{}.",
        plural(region_count),
        plural(discipline_count),
    )
}

fn plural(count: usize) -> &'static str {
    if count > 1 { "s" } else { "" }
}
