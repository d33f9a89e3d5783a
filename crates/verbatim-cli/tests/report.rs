//! Report rendering and end-to-end command tests.

use std::fs;
use std::process::Command;

use serde_json::{Value, json};
use verbatim_cli::report::{render_json, render_table, render_text};
use verbatim_stream::Tally;

fn tally_of(labels: &[&str]) -> Tally {
    let mut tally = Tally::default();
    for label in labels {
        tally.record(label);
    }
    tally
}

#[test]
fn single_heart_disease_report() {
    let tally = tally_of(&["Heart Disease"]);
    assert_eq!(
        render_text(&tally),
        "Total patient testimonials analyzed: 1\n\
         \n\
         Number of unique classification categories found: 1\n\
         Classification counts:\n\
         - Heart Disease: 1\n"
    );
}

#[test]
fn text_report_orders_ties_alphabetically() {
    let tally = tally_of(&[
        "Other",
        "Heart Disease",
        "Breast Cancer",
        "Heart Disease",
        "Other",
        "Sjögren's Syndrome",
    ]);
    insta::assert_snapshot!(render_text(&tally), @r"
    Total patient testimonials analyzed: 6

    Number of unique classification categories found: 4
    Classification counts:
    - Heart Disease: 2
    - Other: 2
    - Breast Cancer: 1
    - Sjögren's Syndrome: 1
    ");
}

#[test]
fn empty_dataset_report() {
    let tally = Tally::default();
    insta::assert_snapshot!(render_text(&tally), @r"
    Total patient testimonials analyzed: 0

    Number of unique classification categories found: 0
    Classification counts:
    ");
}

#[test]
fn json_report_lists_counts_in_report_order() {
    let mut tally = tally_of(&["Other", "Plaque Psoriasis", "Plaque Psoriasis"]);
    tally.issues.missing_classification = 1;
    let value: Value = serde_json::from_str(&render_json(&tally).unwrap()).unwrap();
    assert_eq!(value["total"], json!(3));
    assert_eq!(value["unique_categories"], json!(2));
    assert_eq!(
        value["counts"],
        json!([
            {"classification": "Plaque Psoriasis", "count": 2},
            {"classification": "Other", "count": 1}
        ])
    );
    assert_eq!(value["issues"]["missing_classification"], json!(1));
}

#[test]
fn table_report_has_a_row_per_label_and_a_total() {
    let tally = tally_of(&["Other", "Heart Disease"]);
    let rendered = render_table(&tally).to_string();
    assert!(rendered.contains("Heart Disease"));
    assert!(rendered.contains("50.0%"));
    assert!(rendered.contains("TOTAL"));
    assert!(rendered.contains("100.0%"));
}

#[test]
fn rewrite_then_analyze_from_the_command_line() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = dir.path().join("data.json");
    let output = dir.path().join("data-2.json");
    fs::write(
        &input,
        r#"{"12345": {"positive_verbatim": [{"disease": "Heart Disease", "nn_verbatim": "had a stent placed"}], "negative_verbatim": []}}"#,
    )
    .expect("write input");

    let binary = env!("CARGO_BIN_EXE_verbatim");
    let status = Command::new(binary)
        .args(["--color", "never", "rewrite", "--input"])
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .status()
        .expect("run rewrite");
    assert!(status.success());

    let analyzed = Command::new(binary)
        .args(["--color", "never", "analyze", "--input"])
        .arg(&output)
        .output()
        .expect("run analyze");
    assert!(analyzed.status.success());
    insta::assert_snapshot!(String::from_utf8_lossy(&analyzed.stdout), @r"
    Total patient testimonials analyzed: 1

    Number of unique classification categories found: 1
    Classification counts:
    - Heart Disease: 1
    ");
}

#[test]
fn missing_input_exits_non_zero() {
    let dir = tempfile::tempdir().expect("temp dir");
    let analyzed = Command::new(env!("CARGO_BIN_EXE_verbatim"))
        .args(["--color", "never", "analyze", "--input"])
        .arg(dir.path().join("absent.json"))
        .output()
        .expect("run analyze");
    assert_eq!(analyzed.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&analyzed.stderr).contains("error:"));
}

#[test]
fn rewrite_refuses_to_overwrite_its_input() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = dir.path().join("data.json");
    fs::write(&input, "{}").expect("write input");
    let status = Command::new(env!("CARGO_BIN_EXE_verbatim"))
        .args(["--color", "never", "rewrite", "--input"])
        .arg(&input)
        .arg("--output")
        .arg(&input)
        .status()
        .expect("run rewrite");
    assert_eq!(status.code(), Some(1));
    assert_eq!(fs::read_to_string(&input).unwrap(), "{}");
}
