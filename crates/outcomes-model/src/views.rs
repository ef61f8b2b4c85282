use serde::{Deserialize, Serialize};

/// One populated cell of a [`CrossTabView`].
///
/// Indices point into the view's `region_names` / `discipline_names`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossTabCell {
    pub region_index: usize,
    pub discipline_index: usize,
    pub salary: i64,
}

/// Region × discipline matrix of latest-year average salaries.
///
/// Exactly one cell exists per distinct (region, discipline) pair that has
/// any data; pairs with records in several years carry the most recent
/// year's average only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossTabView {
    pub region_names: Vec<String>,
    pub discipline_names: Vec<String>,
    pub cells: Vec<CrossTabCell>,
}

/// One line of a [`TimeSeriesView`]; `values` is aligned with the view's
/// `years` axis, `None` marking years without data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Series {
    pub label: String,
    pub values: Vec<Option<i64>>,
}

/// Salary evolution across years for every entity sharing the non-selected
/// dimension. `legend` is sorted by display name and `series` follows the
/// same order; `years` is ascending and duplicate-free.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSeriesView {
    pub legend: Vec<String>,
    pub years: Vec<i32>,
    pub series: Vec<Series>,
}
