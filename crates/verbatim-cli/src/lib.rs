//! CLI library components for the testimonial classifier.

pub mod logging;
pub mod report;
