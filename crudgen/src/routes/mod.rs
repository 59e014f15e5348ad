//! Route registration
//!
//! Appends one resource-route statement per run to the shared routes file.
//! Existing content is never rewritten, and repeated runs for the same table
//! append the same line again.

use crate::error::{GeneratorError, Result};
use crate::render::{render, Bindings};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Default statement pattern (Laravel resource route)
pub const DEFAULT_ROUTE_STATEMENT: &str =
    "Route::resource('/{{routeName}}', {{controllerQualifiedName}}::class);";

/// Builds and appends route lines
#[derive(Debug, Clone)]
pub struct RouteAppender {
    statement: String,
}

impl Default for RouteAppender {
    fn default() -> Self {
        Self::new(DEFAULT_ROUTE_STATEMENT)
    }
}

impl RouteAppender {
    /// Appender rendering `statement` with `{{routeName}}` and `{{controllerQualifiedName}}`
    pub fn new(statement: impl Into<String>) -> Self {
        Self {
            statement: statement.into(),
        }
    }

    /// The route statement for `route_name` bound to `controller`, without terminator
    #[must_use]
    pub fn build_line(&self, route_name: &str, controller: &str) -> String {
        let bindings = Bindings::new()
            .with("{{routeName}}", route_name)
            .with("{{controllerQualifiedName}}", controller);
        render(&self.statement, &bindings)
    }

    /// Append the route line plus a line terminator to `routes_file`
    ///
    /// The file (and its parent directory) is created when missing. The line
    /// goes out in a single append-mode write so concurrent appenders never
    /// interleave within a line.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Io`] if the file cannot be opened or written.
    pub fn append(&self, routes_file: &Path, route_name: &str, controller: &str) -> Result<String> {
        let line = self.build_line(route_name, controller);

        if let Some(parent) = routes_file.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| GeneratorError::io(parent, e))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(routes_file)
            .map_err(|e| GeneratorError::io(routes_file, e))?;
        file.write_all(format!("{line}\n").as_bytes())
            .map_err(|e| GeneratorError::io(routes_file, e))?;

        tracing::info!(path = %routes_file.display(), route = %line, "route appended");
        Ok(line)
    }
}
