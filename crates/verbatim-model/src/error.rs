use thiserror::Error;

/// A label that does not name any known category.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown classification category '{value}'")]
pub struct ParseCategoryError {
    pub value: String,
}
