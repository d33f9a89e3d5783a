//! Streaming processing of region-keyed testimonial datasets.
//!
//! Datasets are single JSON objects too large to hold in memory, so both
//! passes work one region at a time:
//!
//! - **Rewrite**: classify every testimonial and write an augmented copy
//!   ([`Rewriter`]).
//! - **Analyze**: count classifications in a rewritten dataset
//!   ([`Aggregator`]).
//!
//! Record key order and numeric digits are preserved exactly
//! (`serde_json` with `preserve_order` and `arbitrary_precision`).
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use verbatim_classify::Classifier;
//! use verbatim_stream::{Aggregator, NoProgress, Rewriter};
//!
//! let classifier = Classifier::builtin()?;
//! let stats = Rewriter::new(&classifier).rewrite_file(
//!     Path::new("public/data.json"),
//!     Path::new("public/data-2.json"),
//!     &NoProgress,
//! )?;
//! let tally = Aggregator::new().analyze_file(Path::new("public/data-2.json"), &NoProgress)?;
//! assert_eq!(tally.total, stats.testimonials);
//! ```

mod aggregate;
mod error;
mod preview;
mod progress;
mod reader;
mod rewrite;
mod writer;

// === Error Types ===
pub use error::{Result, StreamError};

// === Streaming I/O ===
pub use reader::{for_each_region, open_input};
pub use writer::ObjectWriter;

// === Rewrite ===
pub use rewrite::{DecimalMode, RewriteIssues, RewriteOptions, RewriteStats, Rewriter};

// === Analysis ===
pub use aggregate::{Aggregator, Tally, TallyIssues};

// === Diagnostics ===
pub use preview::{PreviewPolicy, REDACTED_PREVIEW, value_kind};
pub use progress::{NoProgress, Progress};
