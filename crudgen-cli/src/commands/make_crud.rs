//! `make:crud`: generate the CRUD artifacts for one table
//!
//! ```bash
//! crudgen posts
//! crudgen blog_posts --route blog --crud-name Article
//! crudgen oturum --lang tr --database-url mysql://root@localhost/app
//! ```

use crate::Cli;
use anyhow::{Context, Result};
use console::style;
use crudgen::config::GeneratorConfig;
use crudgen::emit::WriteOutcome;
use crudgen::generator::{
    ArtifactRecord, CrudGenerator, GenerationReport, ProgressListener, Step,
};
use crudgen::schema::{SchemaIntrospector, SqlxIntrospector};

/// Generates controller, model, views and route for a table
pub struct MakeCrudCommand {
    cli: Cli,
}

impl MakeCrudCommand {
    /// Command for the parsed arguments
    #[must_use]
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Load configuration, connect to the database and generate
    ///
    /// # Errors
    ///
    /// Fails if the configuration cannot be loaded, no database is
    /// configured, the connection fails, or generation fails.
    pub fn execute(&self) -> Result<GenerationReport> {
        println!("{}", style("Running Crud Generator ...").cyan().bold());

        let config = self.load_config()?;
        // Reject unknown languages before opening a connection.
        self.cli.request().parsed_language()?;

        let url = config
            .database
            .url
            .clone()
            .context("No database configured; pass --database-url, set DATABASE_URL or add [database] url to crudgen.toml")?;
        let schema = SqlxIntrospector::connect(&url).context("Failed to connect to database")?;

        self.generate(&schema, config)
    }

    /// Generate using an already connected schema source
    ///
    /// # Errors
    ///
    /// Returns the generator error unchanged, so a missing table reports
    /// exactly "`<table>` table not exist".
    pub fn generate(
        &self,
        schema: &dyn SchemaIntrospector,
        config: GeneratorConfig,
    ) -> Result<GenerationReport> {
        let generator =
            CrudGenerator::new(schema, config, &self.cli.project_root).dry_run(self.cli.dry_run);
        let mut decisions = self.cli.decision_source();

        let report = generator.run_with_progress(
            &self.cli.request(),
            decisions.as_mut(),
            &mut ConsoleProgress,
        )?;

        print_summary(&report, self.cli.dry_run);
        Ok(report)
    }

    /// Configuration from `--config` or the project root, with CLI overrides applied
    fn load_config(&self) -> Result<GeneratorConfig> {
        let mut config = match &self.cli.config {
            Some(path) => GeneratorConfig::load_from(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
            None => GeneratorConfig::load(&self.cli.project_root)
                .context("Failed to load configuration")?,
        };

        if let Some(url) = &self.cli.database_url {
            config.database.url = Some(url.clone());
        }

        Ok(config)
    }
}

/// Prints one line per build step and per artifact
struct ConsoleProgress;

impl ProgressListener for ConsoleProgress {
    fn step(&mut self, step: Step) {
        let label = match step {
            Step::Controller => "Creating Controller ...",
            Step::Model => "Creating Model ...",
            Step::Views => "Creating Views ...",
            Step::Route => "Creating Route ...",
        };
        println!("{}", style(label).cyan());
    }

    fn artifact(&mut self, record: &ArtifactRecord) {
        let marker = match record.outcome {
            WriteOutcome::Created => style("✓").green(),
            WriteOutcome::Overwritten => style("↻").yellow(),
            WriteOutcome::Skipped => style("-").dim(),
        };
        println!(
            "  {} {} ({})",
            marker,
            style(record.path.display()).dim(),
            record.outcome
        );
    }
}

fn print_summary(report: &GenerationReport, dry_run: bool) {
    println!(
        "\n{} {} -> /{}",
        style("Resource").bold(),
        style(report.class_name()).green().bold(),
        report.route_name()
    );
    if report.fields.is_empty() {
        println!("  {}", style("no editable columns found").yellow());
    } else {
        for field in &report.fields {
            println!("  {} {}", style(field.name()).dim(), field.kind);
        }
    }

    if dry_run {
        println!(
            "\n{} {}\n  {}",
            style("Would append to").bold(),
            style(report.routes_file.display()).dim(),
            report.route_line
        );
        println!("\n{}", style("Dry run, nothing was written.").yellow().bold());
    } else {
        println!(
            "\n{} {}\n  {}",
            style("Appended to").bold(),
            style(report.routes_file.display()).dim(),
            report.route_line
        );
        println!("\n{}", style("Created Successfully.").green().bold());
    }
}
