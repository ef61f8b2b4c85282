use std::collections::HashMap;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use outcomes_model::{CrossTabView, DisciplineId, NameDictionary, RegionId, TimeSeriesView};

/// Render the cross-tab as a region-per-row matrix, empty pairs dimmed.
pub fn print_cross_tab(view: &CrossTabView) {
    if view.cells.is_empty() {
        println!("No averaged salaries to tabulate.");
        return;
    }
    let mut salaries: HashMap<(usize, usize), i64> = HashMap::new();
    for cell in &view.cells {
        salaries.insert((cell.region_index, cell.discipline_index), cell.salary);
    }
    let mut table = Table::new();
    let mut header = vec![header_cell("Region")];
    header.extend(view.discipline_names.iter().map(|name| header_cell(name)));
    table.set_header(header);
    apply_table_style(&mut table);
    for column in 1..=view.discipline_names.len() {
        align_column(&mut table, column, CellAlignment::Right);
    }
    for (region_index, region_name) in view.region_names.iter().enumerate() {
        let mut row = vec![
            Cell::new(region_name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
        ];
        for discipline_index in 0..view.discipline_names.len() {
            row.push(match salaries.get(&(region_index, discipline_index)) {
                Some(salary) => Cell::new(salary),
                None => dim_cell("-"),
            });
        }
        table.add_row(row);
    }
    println!("{table}");
}

/// Render the time series as a year-per-row table, gaps dimmed.
pub fn print_time_series(view: &TimeSeriesView) {
    if view.years.is_empty() {
        println!("No data points for this selection.");
        return;
    }
    let mut table = Table::new();
    let mut header = vec![header_cell("Year")];
    header.extend(view.legend.iter().map(|name| header_cell(name)));
    table.set_header(header);
    apply_table_style(&mut table);
    for column in 1..=view.legend.len() {
        align_column(&mut table, column, CellAlignment::Right);
    }
    for (year_index, year) in view.years.iter().enumerate() {
        let mut row = vec![Cell::new(year)];
        for series in &view.series {
            row.push(match series.values[year_index] {
                Some(salary) => Cell::new(salary),
                None => dim_cell("-"),
            });
        }
        table.add_row(row);
    }
    println!("{table}");
}

/// Render both entity dictionaries in iteration (id) order.
pub fn print_entities(
    regions: &NameDictionary<RegionId>,
    disciplines: &NameDictionary<DisciplineId>,
) {
    println!("Regions:");
    println!("{}", dictionary_table(regions.iter().map(|(id, name)| (id.to_string(), name))));
    println!();
    println!("Disciplines:");
    println!(
        "{}",
        dictionary_table(disciplines.iter().map(|(id, name)| (id.to_string(), name)))
    );
}

fn dictionary_table<'a>(entries: impl Iterator<Item = (String, &'a str)>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Id"), header_cell("Name")]);
    apply_table_style(&mut table);
    for (id, name) in entries {
        table.add_row(vec![Cell::new(id), Cell::new(name)]);
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
