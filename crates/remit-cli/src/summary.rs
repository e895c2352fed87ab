use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use remit_cli::commands::usage_label;
use remit_cli::types::GenerateResult;

/// Print the generation summary to stderr; stdout may carry the 835 itself.
pub fn print_summary(result: &GenerateResult) {
    eprintln!("Input: {}", result.input.display());
    match &result.output {
        Some(path) => eprintln!("Output: {} ({} bytes)", path.display(), result.bytes_written),
        None => eprintln!("Output: stdout ({} bytes)", result.bytes_written),
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    apply_summary_table_style(&mut table);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    table.add_row(vec![label_cell("Payer"), Cell::new(&result.payer_name)]);
    table.add_row(vec![label_cell("Payee"), Cell::new(&result.payee_name)]);
    table.add_row(vec![label_cell("Claims"), Cell::new(result.claim_count)]);
    table.add_row(vec![
        label_cell("Service lines"),
        Cell::new(result.service_line_count),
    ]);
    table.add_row(vec![
        label_cell("Segments (ST..SE)"),
        Cell::new(result.transaction_segment_count),
    ]);
    table.add_row(vec![
        label_cell("Segments (total)"),
        Cell::new(result.segment_count),
    ]);
    table.add_row(vec![
        label_cell("Total paid"),
        Cell::new(&result.total_paid)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![label_cell("Check amount"), check_amount_cell(result)]);
    table.add_row(vec![
        label_cell("ISA13 / GS06 / ST02"),
        Cell::new(format!(
            "{} / {} / {}",
            result.interchange_control_number,
            result.group_control_number,
            result.transaction_control_number
        )),
    ]);
    table.add_row(vec![label_cell("Usage"), usage_cell(result)]);
    table.add_row(vec![
        label_cell("Generated at"),
        Cell::new(result.generated_at.format("%Y-%m-%d %H:%M")),
    ]);
    eprintln!("{table}");
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn check_amount_cell(result: &GenerateResult) -> Cell {
    match &result.declared_check_amount {
        Some(amount) if result.check_amount_differs() => Cell::new(format!(
            "{amount} (ignored)"
        ))
        .fg(Color::Yellow),
        Some(amount) => Cell::new(amount),
        None => dim_cell("-"),
    }
}

fn usage_cell(result: &GenerateResult) -> Cell {
    let label = usage_label(result.usage);
    match result.usage {
        remit_x12::UsageIndicator::Test => Cell::new(label).fg(Color::Yellow),
        remit_x12::UsageIndicator::Production => Cell::new(label),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn label_cell(label: &str) -> Cell {
    Cell::new(label).fg(Color::Blue)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
