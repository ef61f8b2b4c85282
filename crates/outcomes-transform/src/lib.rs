//! Employment-outcome transformation pipeline.
//!
//! This crate holds the pure core of the statistics pipeline:
//!
//! - **aggregate**: filter raw observations, fan out multi-discipline
//!   records, and average salaries per (year, region, discipline)
//! - **crosstab**: pivot averages into a region × discipline matrix of
//!   latest-year salaries
//! - **timeseries**: pivot averages into year-aligned series for one
//!   selected region or discipline
//! - **selection**: the mutually-exclusive discipline/region choice
//!
//! Every operation is a synchronous, side-effect-free transformation over
//! immutable inputs; identical inputs yield identical outputs.

pub mod aggregate;
pub mod crosstab;
pub mod error;
pub mod selection;
pub mod timeseries;

pub use aggregate::aggregate;
pub use crosstab::build_cross_tab;
pub use error::{Result, TransformError};
pub use selection::Selection;
pub use timeseries::build_time_series;
