// Copyright (C) 2026 ScientificallyFit
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! File-backed stash for per-lesson scratch data.
//!
//! Some lessons keep working data outside the course state proper: the
//! environment-audit lesson stores a photo reference, area ratings, and
//! notes under namespaced keys. The stash holds those opaque JSON values
//! in a single file, keyed by `lesson_key(prefix, week, day)` strings
//! such as `"audit-photo-2-1"`.
//!
//! Values are opaque to the stash; there is no versioning or migration.

use focus_course_domain::{DayId, WeekId};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors from loading or persisting the stash file.
#[derive(Debug, Error)]
pub enum StashError {
    /// Reading or writing the backing file failed.
    #[error("stash file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// The backing file held malformed JSON, or a value failed to encode.
    #[error("stash serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Builds the namespaced key for a lesson-scoped value.
///
/// # Arguments
///
/// * `prefix` - The value kind (e.g., "audit-photo", "audit-notes")
/// * `week` - The owning week
/// * `day` - The owning day
#[must_use]
pub fn lesson_key(prefix: &str, week: WeekId, day: DayId) -> String {
    format!("{prefix}-{week}-{day}")
}

/// A key-value stash persisted to one JSON file.
///
/// Every mutation writes the file through; `open` on the same path
/// restores the previous contents.
#[derive(Debug)]
pub struct LessonStash {
    path: PathBuf,
    entries: BTreeMap<String, Value>,
}

impl LessonStash {
    /// Opens the stash at the given path, loading existing contents.
    /// A missing file yields an empty stash.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StashError> {
        let path: PathBuf = path.as_ref().to_path_buf();
        let entries: BTreeMap<String, Value> = if path.exists() {
            let contents: String = fs::read_to_string(&path)?;
            serde_json::from_str(&contents)?
        } else {
            BTreeMap::new()
        };

        debug!(path = %path.display(), entries = entries.len(), "Opened lesson stash");
        Ok(Self { path, entries })
    }

    /// Looks up a stashed value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Stores a value under the key, replacing any previous value, and
    /// persists the stash.
    ///
    /// # Errors
    ///
    /// Returns an error if the stash file cannot be written.
    pub fn set(&mut self, key: &str, value: Value) -> Result<(), StashError> {
        self.entries.insert(String::from(key), value);
        self.persist()
    }

    /// Removes the value under the key, if present, and persists the
    /// stash.
    ///
    /// # Errors
    ///
    /// Returns an error if the stash file cannot be written.
    pub fn remove(&mut self, key: &str) -> Result<(), StashError> {
        self.entries.remove(key);
        self.persist()
    }

    /// Removes every stashed value and persists the empty stash.
    ///
    /// # Errors
    ///
    /// Returns an error if the stash file cannot be written.
    pub fn clear(&mut self) -> Result<(), StashError> {
        self.entries.clear();
        self.persist()
    }

    /// Number of stashed values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing is stashed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn persist(&self) -> Result<(), StashError> {
        let json: String = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
