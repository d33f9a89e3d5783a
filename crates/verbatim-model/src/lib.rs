//! Data model for classified patient testimonials.
//!
//! A dataset maps region keys (FIPS codes) to records; each record carries
//! `positive_verbatim` and `negative_verbatim` testimonial lists. This crate
//! defines the closed [`Category`] set and the field names shared by the
//! classifier, the rewriter and the aggregator.

pub mod category;
pub mod error;
pub mod fields;

pub use category::Category;
pub use error::ParseCategoryError;
pub use fields::{CLASSIFICATION_FIELD, DISEASE_FIELD, TEXT_FIELD, VerbatimList};
