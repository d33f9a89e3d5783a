//! Classification frequency analysis of a rewritten dataset.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use verbatim_model::{CLASSIFICATION_FIELD, Category, VerbatimList};

use crate::error::Result;
use crate::preview::{PreviewPolicy, value_kind};
use crate::progress::Progress;
use crate::reader::{for_each_region, open_input};

/// Per-record problems met while counting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TallyIssues {
    /// Region values that are not objects (skipped).
    pub non_object_records: usize,
    /// Verbatim fields that are present but not lists (skipped).
    pub non_list_fields: usize,
    /// List entries that are not objects (skipped).
    pub non_object_testimonials: usize,
    /// Testimonials without a classification (counted as Other).
    pub missing_classification: usize,
    /// Classifications that are not strings (counted as Other).
    pub non_string_classification: usize,
    /// Classification labels outside the category set (counted as-is).
    pub unrecognized_labels: usize,
}

impl TallyIssues {
    pub fn total(&self) -> usize {
        self.non_object_records
            + self.non_list_fields
            + self.non_object_testimonials
            + self.missing_classification
            + self.non_string_classification
            + self.unrecognized_labels
    }
}

/// Classification counts over a dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub regions: usize,
    /// Testimonials counted (every object entry of a verbatim list).
    pub total: usize,
    pub counts: BTreeMap<String, usize>,
    pub issues: TallyIssues,
}

impl Tally {
    pub fn record(&mut self, label: &str) {
        self.total += 1;
        *self.counts.entry(label.to_string()).or_default() += 1;
    }

    /// Number of distinct labels seen.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Labels by count descending, ties alphabetically ascending.
    pub fn sorted(&self) -> Vec<(&str, usize)> {
        let mut sorted: Vec<(&str, usize)> = self
            .counts
            .iter()
            .map(|(label, count)| (label.as_str(), *count))
            .collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        sorted
    }
}

/// Counts classifications in a streamed, already classified dataset.
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    preview: PreviewPolicy,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_preview(mut self, preview: PreviewPolicy) -> Self {
        self.preview = preview;
        self
    }

    pub fn analyze_file(&self, input: &Path, progress: &dyn Progress) -> Result<Tally> {
        let reader = open_input(input)?;
        info!(input = %input.display(), "analysis started");
        self.analyze(reader, progress)
    }

    pub fn analyze<R: Read>(&self, input: R, progress: &dyn Progress) -> Result<Tally> {
        let mut tally = Tally::default();
        for_each_region(input, |region, record| {
            tally.regions += 1;
            self.tally_record(&region, &record, &mut tally);
            progress.region(tally.regions);
            Ok(())
        })?;
        progress.finish(tally.regions);
        info!(
            regions = tally.regions,
            testimonials = tally.total,
            categories = tally.distinct(),
            issues = tally.issues.total(),
            "analysis complete"
        );
        Ok(tally)
    }

    /// Count the classifications of one record.
    pub fn tally_record(&self, region: &str, record: &Value, tally: &mut Tally) {
        let Some(fields) = record.as_object() else {
            warn!(
                region,
                kind = value_kind(record),
                preview = %self.preview.render(record),
                "record is not an object, skipping"
            );
            tally.issues.non_object_records += 1;
            return;
        };

        for list in VerbatimList::ALL {
            let items = match fields.get(list.field_name()) {
                None | Some(Value::Null) => continue,
                Some(Value::Array(items)) => items,
                Some(other) => {
                    warn!(
                        region,
                        field = list.field_name(),
                        kind = value_kind(other),
                        "verbatim field is not a list, skipping"
                    );
                    tally.issues.non_list_fields += 1;
                    continue;
                }
            };
            for (index, item) in items.iter().enumerate() {
                let Some(testimonial) = item.as_object() else {
                    warn!(
                        region,
                        field = list.field_name(),
                        index,
                        kind = value_kind(item),
                        preview = %self.preview.render(item),
                        "testimonial is not an object, skipping"
                    );
                    tally.issues.non_object_testimonials += 1;
                    continue;
                };
                match testimonial.get(CLASSIFICATION_FIELD) {
                    Some(Value::String(label)) => {
                        if !is_known_label(label) {
                            warn!(
                                region,
                                field = list.field_name(),
                                index,
                                label = %label,
                                "unrecognized classification label"
                            );
                            tally.issues.unrecognized_labels += 1;
                        }
                        tally.record(label);
                    }
                    Some(other) => {
                        warn!(
                            region,
                            field = list.field_name(),
                            index,
                            kind = value_kind(other),
                            "classification is not a string, counting as Other"
                        );
                        tally.issues.non_string_classification += 1;
                        tally.record(Category::Other.as_str());
                    }
                    None => {
                        warn!(
                            region,
                            field = list.field_name(),
                            index,
                            preview = %self.preview.render(item),
                            "missing classification, counting as Other"
                        );
                        tally.issues.missing_classification += 1;
                        tally.record(Category::Other.as_str());
                    }
                }
            }
        }
    }
}

fn is_known_label(label: &str) -> bool {
    Category::ALL.iter().any(|category| category.as_str() == label)
}
