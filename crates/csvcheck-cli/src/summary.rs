//! Human-readable rendering of validation findings.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::commands::CheckResult;

pub fn print_summary(result: &CheckResult) {
    if result.failures.is_empty() {
        println!("OK: {} row(s) checked, no findings.", result.rows_checked);
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Column"),
        header_cell("Message"),
    ]);
    table
        .column_mut(0)
        .expect("row column")
        .set_cell_alignment(CellAlignment::Right);
    table
        .column_mut(1)
        .expect("column column")
        .set_cell_alignment(CellAlignment::Right);

    for failure in &result.failures {
        let row_label = if failure.is_header() {
            "header".to_string()
        } else {
            failure.row.to_string()
        };
        for error in &failure.errors {
            table.add_row(vec![
                Cell::new(&row_label).fg(Color::Red),
                Cell::new(error.position),
                Cell::new(&error.message),
            ]);
        }
    }

    println!("{table}");
    let suffix = if result.truncated {
        " (stopped at --max-errors)"
    } else {
        ""
    };
    println!(
        "{} failing row(s) out of {} checked{}.",
        result.failures.len(),
        result.rows_checked,
        suffix
    );
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}
