//! crudgen: schema-driven CRUD generator
//!
//! Given an existing database table, crudgen introspects its columns, decides
//! which ones belong in forms and listings, and renders a controller, a
//! model, five view pages and a route registration line into a host project.
//!
//! # Pipeline
//!
//! - [`naming`]: class, route and plural forms from the table name
//! - [`schema`]: live table metadata (`PostgreSQL`, `MySQL`, `SQLite`)
//! - [`columns`]: eligibility filter and type-to-field mapping
//! - [`templates`] and [`render`]: template bodies and placeholder substitution
//! - [`emit`]: overwrite-safe file writes
//! - [`routes`]: route line append
//! - [`generator`]: the orchestrator tying it together
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use crudgen::config::GeneratorConfig;
//! use crudgen::emit::AlwaysOverwrite;
//! use crudgen::generator::{CrudGenerator, GenerationRequest};
//! use crudgen::schema::SqlxIntrospector;
//! use std::path::Path;
//!
//! # fn main() -> crudgen::error::Result<()> {
//! let root = Path::new(".");
//! let config = GeneratorConfig::load(root)?;
//! let schema = SqlxIntrospector::connect("sqlite://database/database.sqlite")?;
//!
//! let report = CrudGenerator::new(&schema, config, root)
//!     .run(&GenerationRequest::new("posts"), &mut AlwaysOverwrite)?;
//! println!("{} -> {}", report.class_name(), report.route_line);
//! # Ok(())
//! # }
//! ```

// Lint configuration is handled at the workspace level in Cargo.toml

pub mod columns;
pub mod config;
pub mod emit;
pub mod error;
pub mod generator;
pub mod naming;
pub mod observability;
pub mod render;
pub mod routes;
pub mod schema;
pub mod templates;

pub use error::{GeneratorError, Result};
pub use generator::{CrudGenerator, GenerationReport, GenerationRequest};
