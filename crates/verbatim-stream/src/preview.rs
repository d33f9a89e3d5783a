//! Previews of offending values for diagnostics.

use serde_json::Value;

/// Placeholder used when previews are redacted.
pub const REDACTED_PREVIEW: &str = "[REDACTED]";

/// How offending values are shown in warnings.
///
/// Testimonials are patient-reported text, so previews can be switched off
/// entirely with `redact`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewPolicy {
    /// Maximum number of characters shown.
    pub max_chars: usize,
    pub redact: bool,
}

impl Default for PreviewPolicy {
    fn default() -> Self {
        Self {
            max_chars: 100,
            redact: false,
        }
    }
}

impl PreviewPolicy {
    #[must_use]
    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars;
        self
    }

    #[must_use]
    pub fn with_redact(mut self, redact: bool) -> Self {
        self.redact = redact;
        self
    }

    /// Compact JSON text of `value`, cut at `max_chars` characters.
    pub fn render(&self, value: &Value) -> String {
        if self.redact {
            return REDACTED_PREVIEW.to_string();
        }
        let text = value.to_string();
        match text.char_indices().nth(self.max_chars) {
            Some((cut, _)) => format!("{}...", &text[..cut]),
            None => text,
        }
    }
}

/// JSON type name of a value, for diagnostics.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn short_values_are_shown_whole() {
        let policy = PreviewPolicy::default();
        assert_eq!(policy.render(&json!("oops")), "\"oops\"");
    }

    #[test]
    fn long_values_are_cut_on_char_boundaries() {
        let policy = PreviewPolicy::default().with_max_chars(4);
        assert_eq!(policy.render(&json!("ééééé")), "\"ééé...");
    }

    #[test]
    fn redaction_hides_content() {
        let policy = PreviewPolicy::default().with_redact(true);
        assert_eq!(policy.render(&json!({"nn_verbatim": "private"})), REDACTED_PREVIEW);
    }

    #[test]
    fn kinds_name_json_types() {
        assert_eq!(value_kind(&json!([1])), "array");
        assert_eq!(value_kind(&json!(null)), "null");
    }
}
