//! File emission with overwrite protection
//!
//! New files are created along with any missing parent directories. When the
//! target already exists a [`DecisionSource`] is asked whether to replace it;
//! declining leaves the file byte-for-byte untouched.

use crate::error::{GeneratorError, Result};
use std::fmt;
use std::fs;
use std::path::Path;

/// Answers "overwrite this existing file?"
pub trait DecisionSource {
    /// Whether `path`, which already exists, may be overwritten
    ///
    /// # Errors
    ///
    /// Returns an error if no answer could be obtained; the emitter aborts
    /// instead of guessing.
    fn confirm_overwrite(&mut self, path: &Path) -> Result<bool>;
}

/// Always overwrite (`--force`)
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysOverwrite;

impl DecisionSource for AlwaysOverwrite {
    fn confirm_overwrite(&mut self, _path: &Path) -> Result<bool> {
        Ok(true)
    }
}

/// Never overwrite (`--skip-existing`)
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverOverwrite;

impl DecisionSource for NeverOverwrite {
    fn confirm_overwrite(&mut self, _path: &Path) -> Result<bool> {
        Ok(false)
    }
}

impl<F: FnMut(&Path) -> bool> DecisionSource for F {
    fn confirm_overwrite(&mut self, path: &Path) -> Result<bool> {
        Ok(self(path))
    }
}

/// Result of a single write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// File did not exist and was written
    Created,
    /// File existed and was replaced
    Overwritten,
    /// File existed and the decision source declined
    Skipped,
}

impl fmt::Display for WriteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Created => "created",
            Self::Overwritten => "overwritten",
            Self::Skipped => "skipped",
        })
    }
}

/// Writes artifacts to disk
pub struct FileEmitter<'a> {
    decisions: &'a mut dyn DecisionSource,
    dry_run: bool,
}

impl fmt::Debug for FileEmitter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileEmitter")
            .field("dry_run", &self.dry_run)
            .finish_non_exhaustive()
    }
}

impl<'a> FileEmitter<'a> {
    /// Create an emitter consulting `decisions` on overwrite
    pub fn new(decisions: &'a mut dyn DecisionSource) -> Self {
        Self {
            decisions,
            dry_run: false,
        }
    }

    /// Report outcomes without touching the filesystem
    #[must_use]
    pub const fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Whether this emitter is in dry-run mode
    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Write `content` to `path`
    ///
    /// In dry-run mode the decision source is still consulted so the reported
    /// outcome matches what a real run would do.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Io`] if a directory cannot be created or the
    /// file cannot be written, and propagates a failed overwrite decision
    /// without touching the file.
    pub fn write(&mut self, path: &Path, content: &str) -> Result<WriteOutcome> {
        let outcome = if path.exists() {
            if self.decisions.confirm_overwrite(path)? {
                WriteOutcome::Overwritten
            } else {
                tracing::info!(path = %path.display(), "keeping existing file");
                return Ok(WriteOutcome::Skipped);
            }
        } else {
            WriteOutcome::Created
        };

        if self.dry_run {
            tracing::info!(path = %path.display(), %outcome, "dry run, not written");
            return Ok(outcome);
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| GeneratorError::io(parent, e))?;
        }
        fs::write(path, content).map_err(|e| GeneratorError::io(path, e))?;

        tracing::info!(path = %path.display(), %outcome, bytes = content.len(), "artifact written");
        Ok(outcome)
    }
}
