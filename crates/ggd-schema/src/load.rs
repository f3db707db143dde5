//! # Loader — The File-to-Record Seam
//!
//! The single entry point the UI layer calls through: resolve a path
//! against the project root, read the file, parse it, map it to the
//! requested record kind. The loader never validates — validation is an
//! explicit, separate call made by the consumer once it holds a mapped
//! record (the contract detail view validates; the capsheet view does
//! not).
//!
//! Filesystem errors pass through unmodified; the loader adds no
//! translation a caller would have to unwrap.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use ggd_json::{parse, ParseError, Value};

use crate::capsheet::CapsheetRecord;
use crate::contract::ContractRecord;

/// A record kind the loader can dispatch to. Implementations must be
/// total — mapping degrades, it does not fail.
pub trait Record: Sized {
    /// Project a generic value tree into this record kind.
    fn from_value(value: &Value) -> Self;
}

impl Record for ContractRecord {
    fn from_value(value: &Value) -> Self {
        ContractRecord::from_value(value)
    }
}

impl Record for CapsheetRecord {
    fn from_value(value: &Value) -> Self {
        CapsheetRecord::from_value(value)
    }
}

/// Failure to load a data artifact.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be read; the underlying error is passed
    /// through unmodified.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The file was read but its text was structurally unrecoverable.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Load and map one data artifact.
///
/// `relative_path` is resolved against `project_root` with any leading
/// `/` stripped, matching the path convention of the artifacts the
/// simulation pipeline writes (e.g. `data/cap/capsheet_2025.json`).
/// The file handle is scoped to the read and released on every exit
/// path.
///
/// # Errors
///
/// Returns [`LoadError::Io`] when the file cannot be read and
/// [`LoadError::Parse`] when the text is structurally unrecoverable.
pub fn load<T: Record>(
    project_root: impl AsRef<Path>,
    relative_path: &str,
) -> Result<T, LoadError> {
    let full_path = resolve(project_root.as_ref(), relative_path);
    tracing::info!(path = %full_path.display(), "loading data artifact");
    let text = fs::read_to_string(&full_path)?;
    let value = parse(&text)?;
    Ok(T::from_value(&value))
}

fn resolve(root: &Path, relative: &str) -> PathBuf {
    root.join(relative.trim_start_matches('/'))
}
