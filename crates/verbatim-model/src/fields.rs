//! Field names of region records and testimonials.

/// Testimonial field holding the reported disease.
pub const DISEASE_FIELD: &str = "disease";

/// Testimonial field holding the free-text testimonial.
pub const TEXT_FIELD: &str = "nn_verbatim";

/// Field injected into every classified testimonial.
pub const CLASSIFICATION_FIELD: &str = "classification";

/// The testimonial lists carried by a region record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerbatimList {
    Positive,
    Negative,
}

impl VerbatimList {
    /// Lists in the order they are processed.
    pub const ALL: [VerbatimList; 2] = [VerbatimList::Positive, VerbatimList::Negative];

    pub fn field_name(&self) -> &'static str {
        match self {
            VerbatimList::Positive => "positive_verbatim",
            VerbatimList::Negative => "negative_verbatim",
        }
    }
}

impl std::fmt::Display for VerbatimList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.field_name())
    }
}
