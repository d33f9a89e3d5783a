use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use comfy_table::Table;
use tracing::{info, info_span, warn};

use verbatim_classify::Classifier;
use verbatim_classify::rules::Corroboration;
use verbatim_cli::report::{apply_table_style, header_cell, render_json, render_table, render_text};
use verbatim_model::Category;
use verbatim_stream::{
    Aggregator, DecimalMode, PreviewPolicy, RewriteOptions, RewriteStats, Rewriter,
};

use crate::cli::{AnalyzeArgs, ClassifyArgs, DecimalsArg, ReportFormatArg, RewriteArgs};
use crate::progress::SpinnerProgress;

pub fn run_rewrite(args: &RewriteArgs) -> Result<RewriteStats> {
    let span = info_span!("rewrite", input = %args.input.display());
    let _guard = span.enter();
    ensure_distinct_paths(&args.input, &args.output)?;

    let classifier = Classifier::builtin().context("compile keyword table")?;
    let options = RewriteOptions::default()
        .with_progress_interval(args.progress_every)
        .with_decimals(match args.decimals {
            DecimalsArg::Number => DecimalMode::Number,
            DecimalsArg::String => DecimalMode::String,
        })
        .with_preview(PreviewPolicy::default().with_redact(args.redact_previews));

    let start = Instant::now();
    let progress = SpinnerProgress::new("rewriting");
    let stats = Rewriter::new(&classifier)
        .with_options(options)
        .rewrite_file(&args.input, &args.output, &progress)
        .with_context(|| {
            format!(
                "rewrite {} into {}",
                args.input.display(),
                args.output.display()
            )
        })?;
    info!(
        regions = stats.regions,
        testimonials = stats.testimonials,
        duration_ms = start.elapsed().as_millis(),
        "rewrite finished"
    );
    Ok(stats)
}

pub fn run_analyze(args: &AnalyzeArgs) -> Result<()> {
    let span = info_span!("analyze", input = %args.input.display());
    let _guard = span.enter();

    let progress = SpinnerProgress::new("analyzing");
    let tally = Aggregator::new()
        .with_preview(PreviewPolicy::default().with_redact(args.redact_previews))
        .analyze_file(&args.input, &progress)
        .with_context(|| format!("analyze {}", args.input.display()))?;
    drop(progress);

    if tally.issues.total() > 0 {
        warn!(
            non_object_records = tally.issues.non_object_records,
            non_list_fields = tally.issues.non_list_fields,
            non_object_testimonials = tally.issues.non_object_testimonials,
            missing_classification = tally.issues.missing_classification,
            non_string_classification = tally.issues.non_string_classification,
            unrecognized_labels = tally.issues.unrecognized_labels,
            "dataset has malformed entries"
        );
    }

    match args.format {
        ReportFormatArg::Text => print!("{}", render_text(&tally)),
        ReportFormatArg::Table => println!("{}", render_table(&tally)),
        ReportFormatArg::Json => {
            println!("{}", render_json(&tally).context("encode report")?);
        }
    }
    Ok(())
}

pub fn run_classify(args: &ClassifyArgs) -> Result<()> {
    let classifier = Classifier::builtin().context("compile keyword table")?;
    let decision = classifier.decide(args.disease.as_deref(), args.text.as_deref());
    println!("{}", decision.category);
    println!("rule: {}", decision.rule);
    Ok(())
}

pub fn run_categories() -> Result<()> {
    let classifier = Classifier::builtin().context("compile keyword table")?;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category"),
        header_cell("Keywords"),
        header_cell("Also requires"),
    ]);
    apply_table_style(&mut table);
    for category in Category::ALL {
        let keywords = classifier
            .table()
            .patterns(category)
            .map(|patterns| patterns.sources().join(", "))
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            category.to_string(),
            keywords,
            requirement(&classifier, category),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn requirement(classifier: &Classifier, category: Category) -> String {
    let mut needs: Vec<String> = Vec::new();
    for rule in classifier.rules().iter().filter(|r| r.category == category) {
        let need = match rule.corroboration {
            Corroboration::None => continue,
            Corroboration::Always(cue) => format!("{} in text", cue.name()),
            Corroboration::WhenGeneric(cue) => {
                format!("{} in text for a bare \"psoriasis\"", cue.name())
            }
        };
        if !needs.contains(&need) {
            needs.push(need);
        }
    }
    if needs.is_empty() {
        "-".to_string()
    } else {
        needs.join("; ")
    }
}

fn ensure_distinct_paths(input: &Path, output: &Path) -> Result<()> {
    let Ok(output) = output.canonicalize() else {
        // Output does not exist yet.
        return Ok(());
    };
    if let Ok(input) = input.canonicalize()
        && input == output
    {
        bail!(
            "input and output are the same file ({}); write to a different path",
            input.display()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_file_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, "{}").unwrap();
        let alias = dir.path().join(".").join("data.json");
        assert!(ensure_distinct_paths(&path, &alias).is_err());
        assert!(ensure_distinct_paths(&path, &dir.path().join("out.json")).is_ok());
    }

    #[test]
    fn sjogrens_requirement_mentions_dry_symptoms() {
        let classifier = Classifier::builtin().unwrap();
        let need = requirement(&classifier, Category::SjogrensSyndrome);
        assert!(need.contains("dry symptom cue"));
        assert_eq!(requirement(&classifier, Category::HeartDisease), "-");
    }
}
