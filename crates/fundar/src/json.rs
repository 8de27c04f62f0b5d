//! JSON load/dump helpers.
//!
//! Paths are checked before opening: a missing path and a directory are
//! reported separately from other I/O failures. Records travel through their
//! dict form, so key order in the output follows the schema.

use crate::{error::RecordError, traits::Record, value::ValueMap};
use serde::{Serialize, de::DeserializeOwned};
use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Read, Write},
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;

///
/// JsonError
///

#[remain::sorted]
#[derive(Debug, ThisError)]
pub enum JsonError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("input is a folder, not a file: {path}")]
    NotAFile { path: PathBuf },

    #[error("file {path} not found")]
    NotFound { path: PathBuf },

    #[error(transparent)]
    Record(#[from] RecordError),
}

/// Deserialize a JSON file.
pub fn load<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, JsonError> {
    let file = open_existing(path.as_ref())?;

    load_reader(BufReader::new(file))
}

/// Deserialize JSON from any reader (in-memory buffers included).
pub fn load_reader<T: DeserializeOwned, R: Read>(reader: R) -> Result<T, JsonError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Serialize `value` to a JSON file, creating or truncating it.
pub fn dump<T: Serialize + ?Sized>(value: &T, path: impl AsRef<Path>) -> Result<(), JsonError> {
    let path = path.as_ref();
    if path.is_dir() {
        return Err(JsonError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    let mut writer = BufWriter::new(File::create(path)?);
    dump_writer(value, &mut writer)?;
    writer.flush()?;

    tracing::debug!(path = %path.display(), "wrote json");

    Ok(())
}

/// Serialize `value` as compact JSON into any writer.
pub fn dump_writer<T: Serialize + ?Sized, W: Write>(value: &T, writer: W) -> Result<(), JsonError> {
    Ok(serde_json::to_writer(writer, value)?)
}

/// Serialize `value` as indented JSON into any writer.
pub fn dump_writer_pretty<T: Serialize + ?Sized, W: Write>(
    value: &T,
    writer: W,
) -> Result<(), JsonError> {
    Ok(serde_json::to_writer_pretty(writer, value)?)
}

/// Read a record from a JSON object file; missing keys read as null.
pub fn load_record<R: Record>(path: impl AsRef<Path>) -> Result<R, JsonError> {
    let map: ValueMap = load(path)?;

    Ok(R::from_dict(&map)?)
}

/// Write a record's dict form to a JSON file.
pub fn dump_record<R: Record>(record: &R, path: impl AsRef<Path>) -> Result<(), JsonError> {
    dump(&record.to_dict(), path)
}

/// Parse a record from a JSON object string.
pub fn record_from_json<R: Record>(text: &str) -> Result<R, JsonError> {
    let map: ValueMap = serde_json::from_str(text)?;

    Ok(R::from_dict(&map)?)
}

/// Encode a record's dict form as a compact JSON string.
pub fn record_to_json<R: Record>(record: &R) -> Result<String, JsonError> {
    Ok(serde_json::to_string(&record.to_dict())?)
}

fn open_existing(path: &Path) -> Result<File, JsonError> {
    if !path.exists() {
        return Err(JsonError::NotFound {
            path: path.to_path_buf(),
        });
    }
    if !path.is_file() {
        return Err(JsonError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    Ok(File::open(path)?)
}
