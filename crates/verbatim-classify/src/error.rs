use thiserror::Error;

/// Errors raised while compiling the pattern table.
#[derive(Debug, Error)]
pub enum PatternError {
    /// A category keyword failed to compile.
    #[error("invalid pattern '{pattern}' for {owner}: {source}")]
    Invalid {
        owner: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

pub type Result<T> = std::result::Result<T, PatternError>;
