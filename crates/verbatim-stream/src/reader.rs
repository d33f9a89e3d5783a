//! Incremental reader for the top-level region object.
//!
//! The dataset is one JSON object mapping region keys to records. Instead of
//! deserializing it whole, the deserializer is driven through a map visitor
//! that hands each `(key, record)` pair to a callback as soon as it has been
//! parsed, so at most one record is held in memory at a time.

use std::fmt;
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

use serde::de::{self, DeserializeSeed, MapAccess, Visitor};
use serde_json::Value;

use crate::error::{Result, StreamError};

/// Open an input dataset, distinguishing a missing file from other failures.
pub fn open_input(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            StreamError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            StreamError::FileOpen {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

/// Stream the region object from `reader`, calling `handle` once per entry
/// in document order. Returns the number of regions read.
///
/// An error returned by `handle` stops the stream and is returned as-is.
/// Anything that is not a single JSON object (followed only by whitespace)
/// fails with [`StreamError::Parse`].
pub fn for_each_region<R, F>(reader: R, mut handle: F) -> Result<usize>
where
    R: Read,
    F: FnMut(String, Value) -> Result<()>,
{
    let mut de = serde_json::Deserializer::from_reader(BufReader::new(reader));
    let mut cursor = Cursor::default();
    let outcome = RegionVisitor {
        handle: &mut handle,
        cursor: &mut cursor,
    }
    .deserialize(&mut de)
    .and_then(|()| de.end());

    if let Some(error) = cursor.aborted.take() {
        return Err(error);
    }
    match outcome {
        Ok(()) => Ok(cursor.regions_read),
        Err(error) if error.is_io() => Err(StreamError::Read {
            source: error.into(),
        }),
        Err(error) => Err(StreamError::Parse {
            line: error.line(),
            column: error.column(),
            regions_read: cursor.regions_read,
            source: error,
        }),
    }
}

#[derive(Default)]
struct Cursor {
    regions_read: usize,
    aborted: Option<StreamError>,
}

struct RegionVisitor<'a, F> {
    handle: &'a mut F,
    cursor: &'a mut Cursor,
}

impl<'de, F> DeserializeSeed<'de> for RegionVisitor<'_, F>
where
    F: FnMut(String, Value) -> Result<()>,
{
    type Value = ();

    fn deserialize<D>(self, deserializer: D) -> std::result::Result<(), D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_map(self)
    }
}

impl<'de, F> Visitor<'de> for RegionVisitor<'_, F>
where
    F: FnMut(String, Value) -> Result<()>,
{
    type Value = ();

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a JSON object keyed by region")
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<(), A::Error>
    where
        A: MapAccess<'de>,
    {
        while let Some(key) = map.next_key::<String>()? {
            let record: Value = map.next_value()?;
            self.cursor.regions_read += 1;
            if let Err(error) = (self.handle)(key, record) {
                self.cursor.aborted = Some(error);
                return Err(de::Error::custom("region handler aborted"));
            }
        }
        Ok(())
    }
}
