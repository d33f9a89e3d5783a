//! Rendering of the classification frequency report.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

use verbatim_stream::{Tally, TallyIssues};

/// Plain text report, one line per classification.
///
/// ```text
/// Total patient testimonials analyzed: 3
///
/// Number of unique classification categories found: 2
/// Classification counts:
/// - Heart Disease: 2
/// - Other: 1
/// ```
pub fn render_text(tally: &Tally) -> String {
    let mut out = format!("Total patient testimonials analyzed: {}\n", tally.total);
    out.push('\n');
    out.push_str(&format!(
        "Number of unique classification categories found: {}\n",
        tally.distinct()
    ));
    out.push_str("Classification counts:\n");
    for (label, count) in tally.sorted() {
        out.push_str(&format!("- {label}: {count}\n"));
    }
    out
}

/// Table report with each classification's share of the total.
pub fn render_table(tally: &Tally) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Classification"),
        header_cell("Count"),
        header_cell("Share"),
    ]);
    apply_table_style(&mut table);
    for (label, count) in tally.sorted() {
        table.add_row(vec![
            Cell::new(label),
            Cell::new(count),
            Cell::new(share(count, tally.total)),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(tally.total).add_attribute(Attribute::Bold),
        Cell::new(share(tally.total, tally.total)).add_attribute(Attribute::Bold),
    ]);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    table
}

#[derive(Serialize)]
struct ReportDocument<'a> {
    total: usize,
    unique_categories: usize,
    counts: Vec<LabelCount<'a>>,
    issues: TallyIssues,
}

#[derive(Serialize)]
struct LabelCount<'a> {
    classification: &'a str,
    count: usize,
}

/// JSON report, counts in report order.
pub fn render_json(tally: &Tally) -> serde_json::Result<String> {
    let document = ReportDocument {
        total: tally.total,
        unique_categories: tally.distinct(),
        counts: tally
            .sorted()
            .into_iter()
            .map(|(classification, count)| LabelCount {
                classification,
                count,
            })
            .collect(),
        issues: tally.issues,
    };
    serde_json::to_string_pretty(&document)
}

fn share(count: usize, total: usize) -> String {
    if total == 0 {
        return "-".to_string();
    }
    format!("{:.1}%", count as f64 * 100.0 / total as f64)
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
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

pub fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
