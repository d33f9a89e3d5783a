use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use verbatim_cli::report::{align_column, dim_cell, header_cell};
use verbatim_model::Category;
use verbatim_stream::RewriteStats;

pub fn print_rewrite_summary(input: &Path, output: &Path, stats: &RewriteStats) {
    println!("Input: {}", input.display());
    println!("Output: {}", output.display());

    let mut table = Table::new();
    table.set_header(vec![header_cell("Classification"), header_cell("Testimonials")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for category in Category::ALL {
        let count = stats.categories.get(&category).copied().unwrap_or(0);
        table.add_row(vec![category_cell(category), count_cell(count, Color::Reset)]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(stats.testimonials).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    println!(
        "Regions: {} read, {} written",
        stats.regions, stats.regions_written
    );

    if stats.has_issues() {
        print_issue_table(stats);
    }
}

fn print_issue_table(stats: &RewriteStats) {
    let issues = &stats.issues;
    let rows = [
        ("Region values that are not objects", issues.non_object_records),
        ("Verbatim fields that are not lists", issues.non_list_fields),
        ("Testimonials that are not objects", issues.non_object_testimonials),
        ("Records that could not be encoded", issues.unserializable_records),
    ];
    let mut table = Table::new();
    table.set_header(vec![header_cell("Issue"), header_cell("Count")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (label, count) in rows {
        table.add_row(vec![Cell::new(label), count_cell(count, Color::Yellow)]);
    }
    println!();
    println!("Issues (left unchanged in the output):");
    println!("{table}");
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn category_cell(category: Category) -> Cell {
    if category.is_catch_all() {
        Cell::new(category).fg(Color::DarkGrey)
    } else {
        Cell::new(category)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold)
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
    } else {
        dim_cell(count)
    }
}
