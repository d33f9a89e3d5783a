//! Rule-based disease classification of patient testimonials.
//!
//! A testimonial is classified from two inputs: its structured `disease`
//! field and its free text. Keywords are plain case-insensitive regular
//! expressions searched anywhere in the input; the decision procedure is an
//! ordered rule list (see [`rules`]) evaluated with early exit.
//!
//! # Example
//!
//! ```ignore
//! use verbatim_classify::Classifier;
//! use verbatim_model::Category;
//!
//! let classifier = Classifier::builtin()?;
//! let category = classifier.classify(Some("Psoriasis"), Some("my joints hurt badly"));
//! assert_eq!(category, Category::PsoriaticArthritis);
//! ```

mod classifier;
mod error;
pub mod patterns;
pub mod rules;

pub use classifier::{Classifier, Decision};
pub use error::{PatternError, Result};
pub use patterns::{CategoryPatterns, Cue, GENERIC_MENTION_TERM, PatternTable};
pub use rules::{RuleId, Stage};
