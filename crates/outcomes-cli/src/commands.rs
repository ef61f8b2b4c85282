use anyhow::{Context, Result, bail};

use outcomes_cli::pipeline::{load_dataset, refresh};
use outcomes_ingest::{EntityDictionaries, read_entities};
use outcomes_model::{DisciplineId, RegionId};
use outcomes_report::{HeatmapPayload, LinesPayload, write_json};
use outcomes_transform::Selection;

use crate::cli::{CrosstabArgs, EntitiesArgs, TimeseriesArgs};
use crate::summary::{print_cross_tab, print_entities, print_time_series};

pub fn run_crosstab(args: &CrosstabArgs) -> Result<()> {
    let dataset = load_dataset(&args.data_dir, args.csv.as_deref())?;
    let outcome = refresh(&dataset, None)?;
    println!(
        "Observations: {}  Averages: {}  Cells: {}",
        dataset.observations.len(),
        outcome.averages.len(),
        outcome.cross_tab.cells.len()
    );
    print_cross_tab(&outcome.cross_tab);
    if let Some(dir) = &args.output_dir {
        let payload = HeatmapPayload::from_view(&outcome.cross_tab);
        let path = dir.join("heatmap.json");
        write_json(&path, &payload)?;
        println!("Heatmap payload: {}", path.display());
    }
    Ok(())
}

pub fn run_timeseries(args: &TimeseriesArgs) -> Result<()> {
    let dataset = load_dataset(&args.data_dir, args.csv.as_deref())?;
    let discipline = args
        .discipline
        .as_deref()
        .map(|value| resolve_discipline(&dataset.entities, value))
        .transpose()?;
    let region = args
        .region
        .as_deref()
        .map(|value| resolve_region(&dataset.entities, value))
        .transpose()?;
    let selection = Selection::from_options(discipline, region)?;
    let outcome = refresh(&dataset, Some(&selection))?;
    let view = outcome
        .time_series
        .context("refresh returned no time series for the selection")?;
    print_time_series(&view);
    if let Some(dir) = &args.output_dir {
        let payload = LinesPayload::from_view(
            &view,
            &selection,
            &dataset.entities.regions,
            &dataset.entities.disciplines,
        )?;
        let path = dir.join("lines.json");
        write_json(&path, &payload)?;
        println!("Lines payload: {}", path.display());
    }
    Ok(())
}

pub fn run_entities(args: &EntitiesArgs) -> Result<()> {
    let entities = read_entities(&args.data_dir)?;
    print_entities(&entities.regions, &entities.disciplines);
    Ok(())
}

/// Resolve a `--discipline` argument given as an id or a display name.
fn resolve_discipline(entities: &EntityDictionaries, value: &str) -> Result<DisciplineId> {
    let id = DisciplineId::new(value)?;
    if entities.disciplines.contains(&id) {
        return Ok(id);
    }
    if let Some(id) = entities.disciplines.find_by_name(value) {
        return Ok(id.clone());
    }
    bail!("no discipline matches {value:?}");
}

/// Resolve a `--region` argument given as an id or a display name.
fn resolve_region(entities: &EntityDictionaries, value: &str) -> Result<RegionId> {
    let id = RegionId::new(value)?;
    if entities.regions.contains(&id) {
        return Ok(id);
    }
    if let Some(id) = entities.regions.find_by_name(value) {
        return Ok(id.clone());
    }
    bail!("no region matches {value:?}");
}
