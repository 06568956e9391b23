use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use survey_report::DimensionSummary;

use crate::types::ParseResult;

pub fn print_parse_result(result: &ParseResult) {
    eprintln!("Input: {}", result.input.display());
    eprintln!("Encoding: {}", result.encoding.as_str());
    if let Some(path) = &result.output {
        eprintln!("Output: {}", path.display());
    }
    let stats = &result.stats;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Physical lines"), Cell::new(stats.physical_lines)]);
    table.add_row(vec![
        Cell::new("Logical records"),
        Cell::new(stats.logical_records),
    ]);
    table.add_row(vec![
        Cell::new("Rejected"),
        count_cell(stats.rejected, Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Out of age range"),
        count_cell(stats.filtered_out, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Kept")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(result.records).add_attribute(Attribute::Bold),
    ]);
    eprintln!("{table}");
}

pub fn print_dimension_summary(summary: &DimensionSummary) {
    println!("{} ({} respondents)", summary.name, summary.respondents);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Answer"),
        header_cell("Count"),
        header_cell("%"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    if summary.rows.is_empty() {
        table.add_row(vec![dim_cell("(no answers)"), dim_cell("-"), dim_cell("-")]);
    }
    for row in &summary.rows {
        let label = if row.label == survey_ingest::NO_ANSWER {
            dim_cell(&row.label)
        } else {
            Cell::new(&row.label)
        };
        table.add_row(vec![
            label,
            Cell::new(row.count),
            Cell::new(format!("{}%", row.percent)),
        ]);
    }
    println!("{table}");
    println!();
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
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
