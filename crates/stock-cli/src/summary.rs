use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use stock_cli::types::ExportOutcome;

/// Print the export summary to stderr so stdout stays pure CSV.
pub fn print_summary(outcome: &ExportOutcome) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Export"), header_cell("Value")]);
    apply_table_style(&mut table);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    let dynamic_label = if outcome.filtered {
        "Filtered columns"
    } else {
        "Item columns"
    };
    table.add_row(vec![Cell::new("Report"), Cell::new(outcome.report.label())]);
    table.add_row(vec![Cell::new("Records"), count_cell(outcome.records)]);
    table.add_row(vec![Cell::new("Columns"), Cell::new(outcome.columns)]);
    table.add_row(vec![
        Cell::new(dynamic_label),
        Cell::new(outcome.dynamic_columns),
    ]);
    let destination = outcome
        .destination
        .as_ref()
        .map_or_else(|| "stdout".to_string(), |path| path.display().to_string());
    table.add_row(vec![Cell::new("Destination"), Cell::new(destination)]);
    eprintln!("{table}");
}

pub fn print_items(names: &[String]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Item column")]);
    apply_table_style(&mut table);
    for (index, name) in names.iter().enumerate() {
        table.add_row(vec![Cell::new(index + 1), Cell::new(name)]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn count_cell(count: usize) -> Cell {
    if count == 0 {
        Cell::new(count).fg(Color::Yellow)
    } else {
        Cell::new(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
