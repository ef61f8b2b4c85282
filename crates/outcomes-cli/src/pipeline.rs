//! Refresh pipeline with explicit stages.
//!
//! One refresh cycle runs these stages in order:
//! 1. **Load**: read entity dictionaries and raw observations
//! 2. **Aggregate**: reduce observations to per-triple salary averages
//! 3. **Build**: pivot the averages into the requested views
//!
//! Every derived structure is recomputed in full on each cycle. A
//! process-wide guard admits at most one in-flight cycle, since an
//! overlapping cycle could read a partially-updated intermediate dataset.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use outcomes_ingest::{
    EntityDictionaries, STATS_FILE, read_entities, read_observations_csv, read_stats,
};
use outcomes_model::{AverageRecord, CrossTabView, Observation, TimeSeriesView};
use outcomes_transform::{Selection, aggregate, build_cross_tab, build_time_series};

/// Raw inputs of one refresh cycle.
#[derive(Debug)]
pub struct RawDataset {
    pub observations: Vec<Observation>,
    pub entities: EntityDictionaries,
}

/// Stage 1: read the entity dictionaries and raw observations from disk.
pub fn load_dataset(data_dir: &Path, csv: Option<&Path>) -> Result<RawDataset> {
    let span = info_span!("load", data_dir = %data_dir.display());
    let _guard = span.enter();
    let start = Instant::now();
    let entities = read_entities(data_dir).context("load entity dictionaries")?;
    let observations = match csv {
        Some(path) => read_observations_csv(path).context("load observation export")?,
        None => read_stats(&data_dir.join(STATS_FILE)).context("load raw statistics")?,
    };
    info!(
        observation_count = observations.len(),
        region_count = entities.regions.len(),
        discipline_count = entities.disciplines.len(),
        duration_ms = start.elapsed().as_millis(),
        "load complete"
    );
    Ok(RawDataset {
        observations,
        entities,
    })
}

static REFRESH_IN_FLIGHT: AtomicBool = AtomicBool::new(false);

/// Exclusive token for one refresh cycle, released on drop.
pub struct RefreshGuard(());

impl RefreshGuard {
    /// Claim the single refresh slot.
    ///
    /// # Errors
    ///
    /// Fails when another cycle already holds the slot.
    pub fn acquire() -> Result<Self> {
        if REFRESH_IN_FLIGHT
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            bail!("a refresh cycle is already in flight");
        }
        Ok(Self(()))
    }
}

impl Drop for RefreshGuard {
    fn drop(&mut self) {
        REFRESH_IN_FLIGHT.store(false, Ordering::Release);
    }
}

/// Everything one refresh cycle produces.
#[derive(Debug)]
pub struct RefreshOutcome {
    pub averages: Vec<AverageRecord>,
    pub cross_tab: CrossTabView,
    pub time_series: Option<TimeSeriesView>,
}

/// Stages 2–3: aggregate the raw dataset and build the views.
///
/// The cross-tab is always rebuilt; the time series only when a selection
/// is supplied.
pub fn refresh(dataset: &RawDataset, selection: Option<&Selection>) -> Result<RefreshOutcome> {
    let _slot = RefreshGuard::acquire()?;
    let span = info_span!("refresh");
    let _guard = span.enter();
    let start = Instant::now();

    let averages = aggregate(&dataset.observations);
    info!(
        observation_count = dataset.observations.len(),
        average_count = averages.len(),
        "aggregation complete"
    );

    let cross_tab = build_cross_tab(
        &averages,
        &dataset.entities.regions,
        &dataset.entities.disciplines,
    )
    .context("build cross-tab")?;

    let time_series = match selection {
        Some(selection) => Some(
            build_time_series(
                &averages,
                &dataset.entities.regions,
                &dataset.entities.disciplines,
                selection,
            )
            .context("build time series")?,
        ),
        None => None,
    };

    info!(
        cell_count = cross_tab.cells.len(),
        duration_ms = start.elapsed().as_millis(),
        "refresh complete"
    );
    Ok(RefreshOutcome {
        averages,
        cross_tab,
        time_series,
    })
}
