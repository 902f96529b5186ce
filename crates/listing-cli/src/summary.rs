use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use listing_cli::types::PipelineResult;

pub fn print_summary(result: &PipelineResult) {
    println!("Input: {}", result.input.display());
    println!("Output: {}", result.output.display());
    if let Some(path) = &result.artifacts_path {
        println!("Artifacts: {}", path.display());
    }
    if !result.renamed {
        println!("Column names kept as loaded (schema mismatch, lenient mode)");
    }

    let report = &result.report;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Step"), header_cell("Rows"), header_cell("Detail")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Loaded"),
        Cell::new(result.input_rows),
        dim_cell(format!("{} columns", result.input_columns)),
    ]);
    table.add_row(vec![
        Cell::new("Duplicates removed"),
        count_cell(report.duplicates_removed, Color::Yellow),
        dim_cell("-"),
    ]);
    table.add_row(vec![
        Cell::new("Columns dropped"),
        dim_cell("-"),
        dim_cell(report.dropped_columns.join(", ")),
    ]);
    let filled = report
        .filled
        .iter()
        .map(|fill| format!("{} ({})", fill.column, fill.filled))
        .collect::<Vec<_>>()
        .join(", ");
    table.add_row(vec![
        Cell::new("Missing set to 0"),
        count_cell(report.total_filled(), Color::Yellow),
        dim_cell(filled),
    ]);
    table.add_row(vec![
        Cell::new("Rows with missing values"),
        count_cell(report.rows_with_nulls_dropped, Color::Red),
        dim_cell(format!("max missing {:.2}%", report.max_missing_percent())),
    ]);
    let encoded = result
        .artifacts
        .one_hot
        .iter()
        .map(|encoding| format!("{} -> {} columns", encoding.column, encoding.cardinality()))
        .chain(
            result
                .artifacts
                .ordinal
                .iter()
                .map(|encoding| format!("{} -> {} codes", encoding.column, encoding.cardinality())),
        )
        .collect::<Vec<_>>()
        .join(", ");
    table.add_row(vec![Cell::new("Encoded"), dim_cell("-"), dim_cell(encoded)]);
    let scaled = result
        .artifacts
        .scale
        .iter()
        .map(|scale| format!("{} / {:.4}", scale.column, scale.factor))
        .collect::<Vec<_>>()
        .join(", ");
    table.add_row(vec![Cell::new("Scaled"), dim_cell("-"), dim_cell(scaled)]);
    table.add_row(vec![
        Cell::new("Written")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(result.output_rows).add_attribute(Attribute::Bold),
        Cell::new(format!(
            "{} columns in {} ms",
            result.output_columns.len(),
            result.duration_ms
        )),
    ]);
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

pub fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

pub fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
