//! crudgen CLI library
//!
//! Argument parsing, the interactive overwrite prompt and the `make:crud`
//! command. The `crudgen` binary is a thin wrapper around this crate.

pub mod commands;
pub mod prompt;

pub use commands::MakeCrudCommand;
pub use prompt::PromptDecision;

use clap::{ArgAction, Parser};
use crudgen::emit::{AlwaysOverwrite, DecisionSource, NeverOverwrite};
use crudgen::generator::GenerationRequest;
use std::path::PathBuf;

/// Command-line arguments
#[derive(Debug, Clone, Parser)]
#[command(name = "crudgen")]
#[command(version)]
#[command(about = "Create CRUD operations for an existing database table", long_about = None)]
pub struct Cli {
    /// Table name
    pub table: String,

    /// Custom route name (default: the lower-cased table name)
    #[arg(long)]
    pub route: Option<String>,

    /// Custom crud name (default: the singular of the table name)
    #[arg(long = "crud-name", value_name = "NAME")]
    pub crud_name: Option<String>,

    /// Pluralization language (en, fr, nb, pt, es, tr)
    #[arg(long, value_name = "LANG")]
    pub lang: Option<String>,

    /// Database connection string (postgres://, mysql:// or sqlite:)
    #[arg(long, env = "DATABASE_URL", value_name = "URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Root directory of the host project
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub project_root: PathBuf,

    /// Configuration file (default: <project-root>/crudgen.toml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Overwrite existing files without asking
    #[arg(long, conflicts_with = "skip_existing")]
    pub force: bool,

    /// Keep existing files without asking
    #[arg(long)]
    pub skip_existing: bool,

    /// Show what would be generated without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Emit logs as JSON on stderr
    #[arg(long)]
    pub log_json: bool,
}

impl Cli {
    /// Generation request described by the arguments
    #[must_use]
    pub fn request(&self) -> GenerationRequest {
        GenerationRequest {
            table_name: self.table.clone(),
            route_override: self.route.clone(),
            class_name_override: self.crud_name.clone(),
            language: self.lang.clone(),
        }
    }

    /// Overwrite policy selected by `--force` / `--skip-existing`
    #[must_use]
    pub fn decision_source(&self) -> Box<dyn DecisionSource> {
        if self.force {
            Box::new(AlwaysOverwrite)
        } else if self.skip_existing {
            Box::new(NeverOverwrite)
        } else {
            Box::new(PromptDecision::new())
        }
    }
}
