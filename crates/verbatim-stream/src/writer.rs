//! Incremental writer for the top-level region object.

use std::io::{self, Write};

/// Writes a JSON object one entry at a time.
///
/// The layout is one `"key": value` pair per line:
///
/// ```text
/// {
///   "01001": {...},
///   "01003": {...}
/// }
/// ```
///
/// Values arrive already encoded, and the separating comma is written
/// together with the entry it precedes, so the output stays valid JSON even
/// when the caller decides to skip an entry.
pub struct ObjectWriter<W: Write> {
    inner: W,
    entries: usize,
}

impl<W: Write> ObjectWriter<W> {
    /// Write the opening brace.
    pub fn begin(mut inner: W) -> io::Result<Self> {
        inner.write_all(b"{\n")?;
        Ok(Self { inner, entries: 0 })
    }

    /// Append one entry. `encoded` must be a complete JSON value.
    pub fn write_entry(&mut self, key: &str, encoded: &[u8]) -> io::Result<()> {
        if self.entries > 0 {
            self.inner.write_all(b",\n")?;
        }
        self.inner.write_all(b"  ")?;
        serde_json::to_writer(&mut self.inner, key)?;
        self.inner.write_all(b": ")?;
        self.inner.write_all(encoded)?;
        self.entries += 1;
        Ok(())
    }

    pub fn entries(&self) -> usize {
        self.entries
    }

    /// Write the closing brace, flush, and hand back the underlying writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.inner.write_all(b"\n}\n")?;
        self.inner.flush()?;
        Ok(self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(entries: &[(&str, &str)]) -> String {
        let mut writer = ObjectWriter::begin(Vec::new()).unwrap();
        for (key, value) in entries {
            writer.write_entry(key, value.as_bytes()).unwrap();
        }
        String::from_utf8(writer.finish().unwrap()).unwrap()
    }

    #[test]
    fn writes_one_entry_per_line() {
        let out = written(&[("01001", "{\"a\":1}"), ("01003", "[]")]);
        assert_eq!(out, "{\n  \"01001\": {\"a\":1},\n  \"01003\": []\n}\n");
    }

    #[test]
    fn empty_object_is_valid_json() {
        let out = written(&[]);
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, serde_json::json!({}));
    }

    #[test]
    fn keys_are_escaped() {
        let out = written(&[("a\"b", "1")]);
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["a\"b"], serde_json::json!(1));
    }
}
