//! Streaming classification rewrite.
//!
//! Reads the region object one record at a time, tags every testimonial in
//! `positive_verbatim` and `negative_verbatim` with a `classification`, and
//! writes the record to the output before reading the next one. All other
//! fields pass through unchanged, in their original order and with their
//! original numeric digits.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;
use std::time::Instant;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, trace, warn};

use verbatim_classify::Classifier;
use verbatim_model::{CLASSIFICATION_FIELD, Category, DISEASE_FIELD, TEXT_FIELD, VerbatimList};

use crate::error::{Result, StreamError};
use crate::preview::{PreviewPolicy, value_kind};
use crate::progress::Progress;
use crate::reader::{for_each_region, open_input};
use crate::writer::ObjectWriter;

/// How non-integer numbers are written back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DecimalMode {
    /// Keep them as JSON numbers with their exact source digits.
    #[default]
    Number,
    /// Write them as JSON strings holding the exact source digits.
    String,
}

/// Options for a rewrite run.
#[derive(Debug, Clone)]
pub struct RewriteOptions {
    /// Log a progress line every this many regions (0 disables).
    pub progress_interval: usize,
    pub decimals: DecimalMode,
    pub preview: PreviewPolicy,
}

impl Default for RewriteOptions {
    fn default() -> Self {
        Self {
            progress_interval: 500,
            decimals: DecimalMode::default(),
            preview: PreviewPolicy::default(),
        }
    }
}

impl RewriteOptions {
    #[must_use]
    pub fn with_progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval;
        self
    }

    #[must_use]
    pub fn with_decimals(mut self, decimals: DecimalMode) -> Self {
        self.decimals = decimals;
        self
    }

    #[must_use]
    pub fn with_preview(mut self, preview: PreviewPolicy) -> Self {
        self.preview = preview;
        self
    }
}

/// Per-record problems, counted by kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RewriteIssues {
    /// Region values that are not objects (passed through).
    pub non_object_records: usize,
    /// Verbatim fields that are present but not lists (left untouched).
    pub non_list_fields: usize,
    /// List entries that are not objects (passed through, not classified).
    pub non_object_testimonials: usize,
    /// Records that could not be encoded (not written).
    pub unserializable_records: usize,
}

impl RewriteIssues {
    pub fn total(&self) -> usize {
        self.non_object_records
            + self.non_list_fields
            + self.non_object_testimonials
            + self.unserializable_records
    }
}

/// Counters of a rewrite run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RewriteStats {
    /// Regions read from the input.
    pub regions: usize,
    /// Regions written to the output.
    pub regions_written: usize,
    /// Testimonials that received a classification.
    pub testimonials: usize,
    pub categories: BTreeMap<Category, usize>,
    pub issues: RewriteIssues,
}

impl RewriteStats {
    fn record_classification(&mut self, category: Category) {
        self.testimonials += 1;
        *self.categories.entry(category).or_default() += 1;
    }

    pub fn has_issues(&self) -> bool {
        self.issues.total() > 0
    }
}

/// Applies a [`Classifier`] to every testimonial of a streamed dataset.
pub struct Rewriter<'c> {
    classifier: &'c Classifier,
    options: RewriteOptions,
}

impl<'c> Rewriter<'c> {
    pub fn new(classifier: &'c Classifier) -> Self {
        Self {
            classifier,
            options: RewriteOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: RewriteOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &RewriteOptions {
        &self.options
    }

    /// Rewrite the dataset at `input` into a new file at `output`.
    pub fn rewrite_file(
        &self,
        input: &Path,
        output: &Path,
        progress: &dyn Progress,
    ) -> Result<RewriteStats> {
        let reader = open_input(input)?;
        let file = File::create(output).map_err(|source| StreamError::FileCreate {
            path: output.to_path_buf(),
            source,
        })?;
        info!(input = %input.display(), output = %output.display(), "rewrite started");
        self.rewrite(reader, BufWriter::new(file), progress)
    }

    /// Rewrite a dataset stream. Only whole-stream failures are errors.
    pub fn rewrite<R: Read, W: Write>(
        &self,
        input: R,
        output: W,
        progress: &dyn Progress,
    ) -> Result<RewriteStats> {
        let start = Instant::now();
        let mut stats = RewriteStats::default();
        let mut writer = ObjectWriter::begin(output).map_err(StreamError::write)?;

        for_each_region(input, |region, mut record| {
            stats.regions += 1;
            self.rewrite_record(&region, &mut record, &mut stats);
            match self.encode(&mut record) {
                Ok(encoded) => {
                    writer
                        .write_entry(&region, &encoded)
                        .map_err(StreamError::write)?;
                    stats.regions_written += 1;
                }
                Err(error) => {
                    warn!(
                        region = %region,
                        error = %error,
                        "could not serialize record, skipping region"
                    );
                    stats.issues.unserializable_records += 1;
                }
            }
            let interval = self.options.progress_interval;
            if interval > 0 && stats.regions % interval == 0 {
                info!(
                    regions = stats.regions,
                    testimonials = stats.testimonials,
                    "rewrite progress"
                );
            }
            progress.region(stats.regions);
            Ok(())
        })?;

        writer.finish().map_err(StreamError::write)?;
        progress.finish(stats.regions);
        info!(
            regions = stats.regions,
            regions_written = stats.regions_written,
            testimonials = stats.testimonials,
            issues = stats.issues.total(),
            duration_ms = start.elapsed().as_millis(),
            "rewrite complete"
        );
        Ok(stats)
    }

    /// Classify the testimonials of one record in place.
    ///
    /// Malformed shapes are logged, counted in `stats`, and left unchanged.
    pub fn rewrite_record(&self, region: &str, record: &mut Value, stats: &mut RewriteStats) {
        let preview = &self.options.preview;
        let fields = match record {
            Value::Object(fields) => fields,
            other => {
                warn!(
                    region,
                    kind = value_kind(other),
                    preview = %preview.render(other),
                    "record is not an object, passing it through unchanged"
                );
                stats.issues.non_object_records += 1;
                return;
            }
        };

        for list in VerbatimList::ALL {
            match fields.get_mut(list.field_name()) {
                None | Some(Value::Null) => {}
                Some(Value::Array(items)) => {
                    for (index, item) in items.iter_mut().enumerate() {
                        let testimonial = match item {
                            Value::Object(testimonial) => testimonial,
                            other => {
                                warn!(
                                    region,
                                    field = list.field_name(),
                                    index,
                                    kind = value_kind(other),
                                    preview = %preview.render(other),
                                    "testimonial is not an object, passing it through unchanged"
                                );
                                stats.issues.non_object_testimonials += 1;
                                continue;
                            }
                        };
                        let decision = self.classifier.decide(
                            testimonial.get(DISEASE_FIELD).and_then(Value::as_str),
                            testimonial.get(TEXT_FIELD).and_then(Value::as_str),
                        );
                        trace!(
                            region,
                            field = list.field_name(),
                            index,
                            category = %decision.category,
                            rule = %decision.rule,
                            "classified testimonial"
                        );
                        testimonial.insert(
                            CLASSIFICATION_FIELD.to_string(),
                            Value::String(decision.category.as_str().to_string()),
                        );
                        stats.record_classification(decision.category);
                    }
                }
                Some(other) => {
                    warn!(
                        region,
                        field = list.field_name(),
                        kind = value_kind(other),
                        preview = %preview.render(other),
                        "verbatim field is not a list, leaving it untouched"
                    );
                    stats.issues.non_list_fields += 1;
                }
            }
        }
        debug!(region, testimonials = stats.testimonials, "record rewritten");
    }

    fn encode(&self, record: &mut Value) -> serde_json::Result<Vec<u8>> {
        if self.options.decimals == DecimalMode::String {
            stringify_decimals(record);
        }
        serde_json::to_vec(record)
    }
}

/// Replace every non-integer number with a string of its exact digits.
fn stringify_decimals(value: &mut Value) {
    match value {
        Value::Number(number) => {
            let digits = number.to_string();
            if digits.contains(|c| matches!(c, '.' | 'e' | 'E')) {
                *value = Value::String(digits);
            }
        }
        Value::Array(items) => items.iter_mut().for_each(stringify_decimals),
        Value::Object(fields) => fields.values_mut().for_each(stringify_decimals),
        Value::Null | Value::Bool(_) | Value::String(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn classifier() -> Classifier {
        Classifier::builtin().expect("builtin classifier")
    }

    #[test]
    fn record_testimonials_are_tagged() {
        let classifier = classifier();
        let rewriter = Rewriter::new(&classifier);
        let mut stats = RewriteStats::default();
        let mut record = json!({
            "positive_verbatim": [{"disease": "Heart Disease", "nn_verbatim": "stent"}],
            "negative_verbatim": [{"disease": null}],
        });
        rewriter.rewrite_record("01001", &mut record, &mut stats);
        assert_eq!(
            record["positive_verbatim"][0]["classification"],
            json!("Heart Disease")
        );
        assert_eq!(record["negative_verbatim"][0]["classification"], json!("Other"));
        assert_eq!(stats.testimonials, 2);
        assert_eq!(stats.categories.get(&Category::HeartDisease), Some(&1));
        assert!(!stats.has_issues());
    }

    #[test]
    fn malformed_shapes_are_counted_and_left_alone() {
        let classifier = classifier();
        let rewriter = Rewriter::new(&classifier);
        let mut stats = RewriteStats::default();
        let mut record = json!({
            "positive_verbatim": ["bare string", 7],
            "negative_verbatim": {"not": "a list"},
        });
        let before = record.clone();
        rewriter.rewrite_record("01001", &mut record, &mut stats);
        assert_eq!(record, before);
        assert_eq!(stats.issues.non_object_testimonials, 2);
        assert_eq!(stats.issues.non_list_fields, 1);
        assert_eq!(stats.testimonials, 0);
    }

    #[test]
    fn non_object_record_passes_through() {
        let classifier = classifier();
        let rewriter = Rewriter::new(&classifier);
        let mut stats = RewriteStats::default();
        let mut record = json!([1, 2, 3]);
        rewriter.rewrite_record("01001", &mut record, &mut stats);
        assert_eq!(record, json!([1, 2, 3]));
        assert_eq!(stats.issues.non_object_records, 1);
    }

    #[test]
    fn non_string_inputs_are_treated_as_absent() {
        let classifier = classifier();
        let rewriter = Rewriter::new(&classifier);
        let mut stats = RewriteStats::default();
        let mut record = json!({"positive_verbatim": [{"disease": 42, "nn_verbatim": ["stent"]}]});
        rewriter.rewrite_record("01001", &mut record, &mut stats);
        assert_eq!(record["positive_verbatim"][0]["classification"], json!("Other"));
    }

    #[test]
    fn decimals_can_be_written_as_strings() {
        let mut value: Value =
            serde_json::from_str(r#"{"rate": 0.10, "count": 3, "nested": [1e5, 2.50]}"#).unwrap();
        stringify_decimals(&mut value);
        assert_eq!(
            serde_json::to_string(&value).unwrap(),
            r#"{"rate":"0.10","count":3,"nested":["1e5","2.50"]}"#
        );
    }
}
