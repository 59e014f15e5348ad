//! Table introspection
//!
//! The generator only needs two questions answered about the live schema:
//! does the table exist, and what are its columns in declared order. Both are
//! behind [`SchemaIntrospector`] so the pipeline runs the same against a real
//! database ([`SqlxIntrospector`]) or a fixed in-memory schema ([`StaticSchema`]).

mod database;

pub use database::SqlxIntrospector;

use crate::error::{GeneratorError, Result};
use std::collections::HashMap;

/// One column as reported by the database
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    /// Column name
    pub name: String,
    /// Raw declared type token (e.g. `varchar(255)`, `timestamp without time zone`)
    pub declared_type: String,
}

impl ColumnDescriptor {
    /// Create a column descriptor
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
        }
    }
}

/// Source of table metadata
///
/// Implementations must read the live schema on every call; nothing is cached
/// between runs.
pub trait SchemaIntrospector {
    /// Whether `table` exists
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    fn exists(&self, table: &str) -> Result<bool>;

    /// Columns of `table` in declared order
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Schema`] if the table is absent or its
    /// columns cannot be read.
    fn columns(&self, table: &str) -> Result<Vec<ColumnDescriptor>>;
}

/// Fixed in-memory schema
///
/// Useful for tests and for generating against a schema that is not reachable
/// from the current machine.
#[derive(Debug, Clone, Default)]
pub struct StaticSchema {
    tables: HashMap<String, Vec<ColumnDescriptor>>,
}

impl StaticSchema {
    /// Create an empty schema
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a table given `(name, declared_type)` pairs in declared order
    #[must_use]
    pub fn with_table(mut self, table: &str, columns: &[(&str, &str)]) -> Self {
        self.tables.insert(
            table.to_string(),
            columns
                .iter()
                .map(|&(name, declared_type)| ColumnDescriptor::new(name, declared_type))
                .collect(),
        );
        self
    }
}

impl SchemaIntrospector for StaticSchema {
    fn exists(&self, table: &str) -> Result<bool> {
        Ok(self.tables.contains_key(table))
    }

    fn columns(&self, table: &str) -> Result<Vec<ColumnDescriptor>> {
        self.tables
            .get(table)
            .cloned()
            .ok_or_else(|| GeneratorError::Schema(format!("table `{table}` does not exist")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_schema_preserves_column_order() {
        let schema = StaticSchema::new().with_table(
            "posts",
            &[("id", "bigint"), ("title", "varchar(255)"), ("body", "text")],
        );

        assert!(schema.exists("posts").unwrap());
        let names: Vec<String> = schema
            .columns("posts")
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["id", "title", "body"]);
    }

    #[test]
    fn test_static_schema_missing_table() {
        let schema = StaticSchema::new();
        assert!(!schema.exists("posts").unwrap());
        assert!(matches!(
            schema.columns("posts"),
            Err(GeneratorError::Schema(_))
        ));
    }
}
