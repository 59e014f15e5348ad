//! CRUD generation orchestrator
//!
//! Runs the pipeline for one table, strictly in order:
//!
//! 1. validate the request (language, table existence, column fetch)
//! 2. resolve names
//! 3. controller
//! 4. model
//! 5. views (`index`, `create`, `edit`, `form`, `show`)
//! 6. route line
//!
//! Nothing touches the filesystem until step 3. A declined overwrite is a
//! normal outcome and the run moves on; any error stops the run and files
//! written so far stay on disk.

use crate::columns::{ColumnFilter, FieldKind, FieldSpec};
use crate::config::GeneratorConfig;
use crate::emit::{DecisionSource, FileEmitter, WriteOutcome};
use crate::error::{GeneratorError, Result};
use crate::naming::{Language, NamingContext, Pluralizer};
use crate::render::{render, Bindings};
use crate::routes::RouteAppender;
use crate::schema::{ColumnDescriptor, SchemaIntrospector};
use crate::templates::{self, TemplateStore};
use std::fmt;
use std::path::{Path, PathBuf};

/// What the user asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Table to generate for
    pub table_name: String,
    /// Route segment replacing the lower-cased table name
    pub route_override: Option<String>,
    /// Class name replacing the singularized table name
    pub class_name_override: Option<String>,
    /// Pluralization language code or name
    pub language: Option<String>,
}

impl GenerationRequest {
    /// Request for `table_name` with no overrides
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            route_override: None,
            class_name_override: None,
            language: None,
        }
    }

    /// Override the route segment
    #[must_use]
    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route_override = Some(route.into());
        self
    }

    /// Override the class name
    #[must_use]
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name_override = Some(class_name.into());
        self
    }

    /// Select the pluralization language
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Parsed language, English when none was given
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Validation`] for an unknown language.
    pub fn parsed_language(&self) -> Result<Language> {
        self.language
            .as_deref()
            .filter(|code| !code.trim().is_empty())
            .map_or_else(|| Ok(Language::default()), str::parse)
    }
}

/// Pipeline state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Nothing checked yet
    Start,
    /// Table exists and its columns are known
    Validated,
    /// Naming context computed
    NamingResolved,
    /// Controller emitted or skipped
    ControllerBuilt,
    /// Model emitted or skipped
    ModelBuilt,
    /// All views emitted or skipped
    ViewsBuilt,
    /// Route line appended
    RouteAppended,
    /// Run finished
    Done,
    /// Table missing, nothing was written
    Aborted,
}

impl Stage {
    /// Whether no further transition is possible
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Aborted)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Kind of generated file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// Resource controller
    Controller,
    /// Model class
    Model,
    /// One view page
    View(&'static str),
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Controller => f.write_str("Controller"),
            Self::Model => f.write_str("Model"),
            Self::View(view) => write!(f, "View {view}"),
        }
    }
}

/// One emitted (or skipped) file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactRecord {
    /// What was generated
    pub kind: ArtifactKind,
    /// Target path
    pub path: PathBuf,
    /// Emitter outcome
    pub outcome: WriteOutcome,
}

/// Build steps announced to a [`ProgressListener`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Building the controller
    Controller,
    /// Building the model
    Model,
    /// Building the views
    Views,
    /// Appending the route
    Route,
}

/// Observer of a running generation
pub trait ProgressListener {
    /// A build step is about to start
    fn step(&mut self, _step: Step) {}

    /// An artifact was written or skipped
    fn artifact(&mut self, _record: &ArtifactRecord) {}
}

/// Listener that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl ProgressListener for Silent {}

/// Summary of a finished run
#[derive(Debug, Clone)]
pub struct GenerationReport {
    /// Resolved names
    pub naming: NamingContext,
    /// Eligible fields, in column order
    pub fields: Vec<FieldSpec>,
    /// Every artifact in generation order
    pub artifacts: Vec<ArtifactRecord>,
    /// Routes file the line was appended to
    pub routes_file: PathBuf,
    /// Route line, without terminator
    pub route_line: String,
    /// Whether the route line was actually appended
    pub route_appended: bool,
    /// Final pipeline state
    pub stage: Stage,
}

impl GenerationReport {
    /// Generated class name
    #[must_use]
    pub fn class_name(&self) -> &str {
        &self.naming.class_name
    }

    /// Generated route name
    #[must_use]
    pub fn route_name(&self) -> &str {
        &self.naming.route_name
    }

    /// Record for the given artifact kind
    #[must_use]
    pub fn artifact(&self, kind: ArtifactKind) -> Option<&ArtifactRecord> {
        self.artifacts.iter().find(|record| record.kind == kind)
    }
}

/// CRUD generator bound to a project and a schema source
pub struct CrudGenerator<'a> {
    introspector: &'a dyn SchemaIntrospector,
    config: GeneratorConfig,
    project_root: PathBuf,
    templates: TemplateStore,
    dry_run: bool,
}

impl fmt::Debug for CrudGenerator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CrudGenerator")
            .field("project_root", &self.project_root)
            .field("templates", &self.templates)
            .field("dry_run", &self.dry_run)
            .finish_non_exhaustive()
    }
}

impl<'a> CrudGenerator<'a> {
    /// Create a generator writing below `project_root`
    pub fn new(
        introspector: &'a dyn SchemaIntrospector,
        config: GeneratorConfig,
        project_root: impl Into<PathBuf>,
    ) -> Self {
        let project_root = project_root.into();
        let templates = TemplateStore::from_settings(&config.templates, &project_root);
        Self {
            introspector,
            config,
            project_root,
            templates,
            dry_run: false,
        }
    }

    /// Render and report without writing files or appending the route
    #[must_use]
    pub const fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Replace the template store
    #[must_use]
    pub fn with_templates(mut self, templates: TemplateStore) -> Self {
        self.templates = templates;
        self
    }

    /// Project root artifacts are written below
    #[must_use]
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Run the pipeline
    ///
    /// # Errors
    ///
    /// See [`CrudGenerator::run_with_progress`].
    pub fn run(
        &self,
        request: &GenerationRequest,
        decisions: &mut dyn DecisionSource,
    ) -> Result<GenerationReport> {
        self.run_with_progress(request, decisions, &mut Silent)
    }

    /// Run the pipeline, reporting each step to `progress`
    ///
    /// # Errors
    ///
    /// - [`GeneratorError::Validation`] for an unknown language
    /// - [`GeneratorError::TableNotFound`] if the table does not exist
    /// - schema, template and I/O errors from the individual steps
    pub fn run_with_progress(
        &self,
        request: &GenerationRequest,
        decisions: &mut dyn DecisionSource,
        progress: &mut dyn ProgressListener,
    ) -> Result<GenerationReport> {
        let mut stage = Stage::Start;
        tracing::info!(table = %request.table_name, dry_run = self.dry_run, "starting CRUD generation");

        // Validation: everything that can fail before side effects.
        let language = request.parsed_language()?;
        if !self.introspector.exists(&request.table_name)? {
            advance(&mut stage, Stage::Aborted);
            return Err(GeneratorError::TableNotFound {
                table: request.table_name.clone(),
            });
        }
        let columns = self.introspector.columns(&request.table_name)?;
        let fields = ColumnFilter::new(self.config.columns.all_excluded()).classify(&columns);
        advance(&mut stage, Stage::Validated);

        let naming = NamingContext::resolve(request, &Pluralizer::new(language));
        tracing::debug!(?naming, %language, "names resolved");
        advance(&mut stage, Stage::NamingResolved);

        let base = self.base_bindings(&naming);
        let layout = &self.config.layout;
        let root = &self.project_root;
        let mut emitter = FileEmitter::new(decisions).dry_run(self.dry_run);
        let mut artifacts = Vec::new();

        progress.step(Step::Controller);
        let content = render(&self.templates.get(templates::CONTROLLER)?, &base);
        let record = emit(
            &mut emitter,
            ArtifactKind::Controller,
            layout.controller_path(root, &naming),
            &content,
        )?;
        progress.artifact(&record);
        artifacts.push(record);
        advance(&mut stage, Stage::ControllerBuilt);

        progress.step(Step::Model);
        let bindings = base.merged(&model_bindings(&columns, &fields));
        let content = render(&self.templates.get(templates::MODEL)?, &bindings);
        let record = emit(
            &mut emitter,
            ArtifactKind::Model,
            layout.model_path(root, &naming),
            &content,
        )?;
        progress.artifact(&record);
        artifacts.push(record);
        advance(&mut stage, Stage::ModelBuilt);

        progress.step(Step::Views);
        let bindings = base.merged(&self.view_bindings(&base, &fields)?);
        for view in templates::VIEWS {
            let body = self.templates.get(&templates::view_template(view))?;
            let content = render(&body, &bindings);
            let record = emit(
                &mut emitter,
                ArtifactKind::View(view),
                layout.view_path(root, &naming, view),
                &content,
            )?;
            progress.artifact(&record);
            artifacts.push(record);
        }
        advance(&mut stage, Stage::ViewsBuilt);

        progress.step(Step::Route);
        let routes_file = layout.routes_path(root);
        let appender = RouteAppender::new(self.config.routes.statement.as_str());
        let controller = layout.controller_qualified_name(&naming);
        let route_line = if self.dry_run {
            appender.build_line(&naming.route_name, &controller)
        } else {
            appender.append(&routes_file, &naming.route_name, &controller)?
        };
        advance(&mut stage, Stage::RouteAppended);

        advance(&mut stage, Stage::Done);
        Ok(GenerationReport {
            naming,
            fields,
            artifacts,
            routes_file,
            route_line,
            route_appended: !self.dry_run,
            stage,
        })
    }

    /// Tokens shared by every artifact
    fn base_bindings(&self, naming: &NamingContext) -> Bindings {
        let layout = &self.config.layout;
        Bindings::new()
            .with("{{modelName}}", naming.class_name.as_str())
            .with("{{modelTitle}}", naming.title.as_str())
            .with("{{modelNameLowerCase}}", naming.camel.as_str())
            .with("{{modelNamePluralLowerCase}}", naming.plural_camel.as_str())
            .with("{{modelNamePluralUpperCase}}", naming.plural_pascal.as_str())
            .with("{{tableName}}", naming.table_name.as_str())
            .with("{{routeName}}", naming.route_name.as_str())
            .with("{{modelRoute}}", naming.route_name.as_str())
            .with("{{modelView}}", naming.view_dir.as_str())
            .with("{{controllerName}}", naming.controller_name.as_str())
            .with("{{controllerNamespace}}", layout.controller_namespace.as_str())
            .with("{{controllerQualifiedName}}", layout.controller_qualified_name(naming))
            .with("{{modelNamespace}}", layout.model_namespace.as_str())
            .with("{{layout}}", layout.layout.as_str())
    }

    /// `{{tableHeader}}`, `{{tableBody}}`, `{{viewRows}}` and `{{form}}`
    fn view_bindings(&self, base: &Bindings, fields: &[FieldSpec]) -> Result<Bindings> {
        let table_head = self.templates.get(templates::FRAGMENT_TABLE_HEAD)?;
        let table_body = self.templates.get(templates::FRAGMENT_TABLE_BODY)?;
        let view_field = self.templates.get(templates::FRAGMENT_VIEW_FIELD)?;
        let form_field = self.templates.get(templates::FRAGMENT_FORM_FIELD)?;
        let form_textarea = self.templates.get(templates::FRAGMENT_FORM_TEXTAREA)?;
        let form_checkbox = self.templates.get(templates::FRAGMENT_FORM_CHECKBOX)?;

        let mut header = String::new();
        let mut body = String::new();
        let mut rows = String::new();
        let mut form = String::new();

        for field in fields {
            let bindings = base.merged(&field_bindings(field));
            let form_fragment = match field.kind {
                FieldKind::Textarea => &form_textarea,
                FieldKind::Boolean => &form_checkbox,
                _ => &form_field,
            };

            header.push_str(&render(&table_head, &bindings));
            body.push_str(&render(&table_body, &bindings));
            rows.push_str(&render(&view_field, &bindings));
            form.push_str(&render(form_fragment, &bindings));
        }

        Ok(Bindings::new()
            .with("{{tableHeader}}", header.trim_end_matches('\n'))
            .with("{{tableBody}}", body.trim_end_matches('\n'))
            .with("{{viewRows}}", rows.trim_end_matches('\n'))
            .with("{{form}}", form.trim_end_matches('\n')))
    }
}

/// Record a state transition
fn advance(stage: &mut Stage, next: Stage) {
    tracing::debug!(from = %stage, to = %next, "stage transition");
    *stage = next;
}

fn emit(
    emitter: &mut FileEmitter<'_>,
    kind: ArtifactKind,
    path: PathBuf,
    content: &str,
) -> Result<ArtifactRecord> {
    let outcome = emitter.write(&path, content)?;
    Ok(ArtifactRecord {
        kind,
        path,
        outcome,
    })
}

/// Per-field tokens used by the view fragments
fn field_bindings(field: &FieldSpec) -> Bindings {
    Bindings::new()
        .with("{{fieldLabel}}", field.label.as_str())
        .with("{{fieldColumn}}", field.name())
        .with("{{fieldKind}}", field.kind.to_string())
        .with("{{inputType}}", field.kind.input_type())
}

/// `{{fillable}}`, `{{rules}}` and `{{properties}}`
fn model_bindings(columns: &[ColumnDescriptor], fields: &[FieldSpec]) -> Bindings {
    let fillable = fields
        .iter()
        .map(|field| format!("'{}'", field.name()))
        .collect::<Vec<_>>()
        .join(", ");

    let rules: String = fields
        .iter()
        .map(|field| format!("\n        '{}' => '{}',", field.name(), field.kind.validation_rule()))
        .collect();

    let properties: String = columns
        .iter()
        .map(|column| format!(" * @property ${}\n", column.name))
        .collect();

    Bindings::new()
        .with("{{fillable}}", fillable)
        .with("{{rules}}", rules)
        .with("{{properties}}", properties)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit::{AlwaysOverwrite, NeverOverwrite};
    use crate::schema::StaticSchema;
    use std::fs;
    use tempfile::TempDir;

    fn posts_schema() -> StaticSchema {
        StaticSchema::new().with_table(
            "posts",
            &[
                ("id", "bigint unsigned"),
                ("title", "varchar(255)"),
                ("body", "text"),
                ("published", "tinyint(1)"),
                ("created_at", "timestamp"),
                ("updated_at", "timestamp"),
            ],
        )
    }

    #[derive(Default)]
    struct Recorder {
        steps: Vec<Step>,
        artifacts: usize,
    }

    impl ProgressListener for Recorder {
        fn step(&mut self, step: Step) {
            self.steps.push(step);
        }

        fn artifact(&mut self, _record: &ArtifactRecord) {
            self.artifacts += 1;
        }
    }

    #[test]
    fn test_request_builders() {
        let request = GenerationRequest::new("posts")
            .with_route("articles")
            .with_class_name("Article")
            .with_language("tr");
        assert_eq!(request.route_override.as_deref(), Some("articles"));
        assert_eq!(request.class_name_override.as_deref(), Some("Article"));
        assert_eq!(request.parsed_language().unwrap(), Language::Turkish);
        assert_eq!(
            GenerationRequest::new("posts").parsed_language().unwrap(),
            Language::English
        );
    }

    #[test]
    fn test_full_run_reports_every_step() {
        let dir = TempDir::new().unwrap();
        let schema = posts_schema();
        let generator = CrudGenerator::new(&schema, GeneratorConfig::default(), dir.path());

        let mut recorder = Recorder::default();
        let report = generator
            .run_with_progress(&GenerationRequest::new("posts"), &mut AlwaysOverwrite, &mut recorder)
            .unwrap();

        assert_eq!(report.stage, Stage::Done);
        assert_eq!(report.class_name(), "Post");
        assert_eq!(report.route_name(), "posts");
        assert_eq!(report.artifacts.len(), 7);
        assert!(report.route_appended);
        assert_eq!(
            recorder.steps,
            vec![Step::Controller, Step::Model, Step::Views, Step::Route]
        );
        assert_eq!(recorder.artifacts, 7);

        let model = fs::read_to_string(dir.path().join("app/Models/Post.php")).unwrap();
        assert!(model.contains("protected $fillable = ['title', 'body', 'published'];"));
        assert!(model.contains("'published' => 'boolean',"));
        assert!(model.contains(" * @property $created_at\n"));
        assert!(model.contains("protected $table = 'posts';"));

        let controller =
            fs::read_to_string(dir.path().join("app/Http/Controllers/PostController.php")).unwrap();
        assert!(controller.contains("namespace App\\Http\\Controllers;"));
        assert!(controller.contains("use App\\Models\\Post;"));
        assert!(controller.contains("$posts = Post::paginate(10);"));
        assert!(!controller.contains("{{model"));
    }

    #[test]
    fn test_form_uses_kind_specific_fragments() {
        let dir = TempDir::new().unwrap();
        let schema = posts_schema();
        let generator = CrudGenerator::new(&schema, GeneratorConfig::default(), dir.path());
        generator
            .run(&GenerationRequest::new("posts"), &mut AlwaysOverwrite)
            .unwrap();

        let form = fs::read_to_string(dir.path().join("resources/views/post/form.blade.php")).unwrap();
        assert!(form.contains("<input type='text' name='title'"));
        assert!(form.contains("<textarea name='body'"));
        assert!(form.contains("<input type='checkbox' name='published'"));
        assert!(form.contains("$post->title"));
        assert!(!form.contains("name='id'"));
        assert!(!form.contains("created_at"));
    }

    #[test]
    fn test_missing_table_aborts_before_side_effects() {
        let dir = TempDir::new().unwrap();
        let schema = posts_schema();
        let generator = CrudGenerator::new(&schema, GeneratorConfig::default(), dir.path());

        let err = generator
            .run(&GenerationRequest::new("comments"), &mut AlwaysOverwrite)
            .unwrap_err();

        assert!(matches!(err, GeneratorError::TableNotFound { ref table } if table == "comments"));
        assert_eq!(err.to_string(), "`comments` table not exist");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_unknown_language_aborts_before_side_effects() {
        let dir = TempDir::new().unwrap();
        let schema = posts_schema();
        let generator = CrudGenerator::new(&schema, GeneratorConfig::default(), dir.path());

        let err = generator
            .run(
                &GenerationRequest::new("posts").with_language("klingon"),
                &mut AlwaysOverwrite,
            )
            .unwrap_err();

        assert!(matches!(err, GeneratorError::Validation(_)));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    /// Table is reported present but its columns cannot be read
    struct UnreadableColumns;

    impl SchemaIntrospector for UnreadableColumns {
        fn exists(&self, _table: &str) -> Result<bool> {
            Ok(true)
        }

        fn columns(&self, table: &str) -> Result<Vec<ColumnDescriptor>> {
            Err(GeneratorError::Schema(format!("permission denied for `{table}`")))
        }
    }

    #[test]
    fn test_schema_error_aborts_before_side_effects() {
        let dir = TempDir::new().unwrap();
        let generator =
            CrudGenerator::new(&UnreadableColumns, GeneratorConfig::default(), dir.path());

        let err = generator
            .run(&GenerationRequest::new("posts"), &mut AlwaysOverwrite)
            .unwrap_err();

        assert!(matches!(err, GeneratorError::Schema(_)));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_io_error_keeps_earlier_artifacts() {
        let dir = TempDir::new().unwrap();
        // A file where the view directory should be blocks every view write.
        let views = dir.path().join("resources/views/post");
        fs::create_dir_all(views.parent().unwrap()).unwrap();
        fs::write(&views, "not a directory").unwrap();

        let schema = posts_schema();
        let err = CrudGenerator::new(&schema, GeneratorConfig::default(), dir.path())
            .run(&GenerationRequest::new("posts"), &mut AlwaysOverwrite)
            .unwrap_err();

        assert!(matches!(err, GeneratorError::Io { .. }));
        assert!(dir.path().join("app/Http/Controllers/PostController.php").is_file());
        assert!(dir.path().join("app/Models/Post.php").is_file());
        assert!(!dir.path().join("routes/web.php").exists());
    }

    #[test]
    fn test_skips_still_advance() {
        let dir = TempDir::new().unwrap();
        let schema = posts_schema();
        let generator = CrudGenerator::new(&schema, GeneratorConfig::default(), dir.path());
        let request = GenerationRequest::new("posts");

        generator.run(&request, &mut AlwaysOverwrite).unwrap();
        let report = generator.run(&request, &mut NeverOverwrite).unwrap();

        assert_eq!(report.stage, Stage::Done);
        assert!(report
            .artifacts
            .iter()
            .all(|record| record.outcome == WriteOutcome::Skipped));
        assert!(report.route_appended);
    }

    #[test]
    fn test_dry_run_touches_nothing() {
        let dir = TempDir::new().unwrap();
        let schema = posts_schema();
        let generator =
            CrudGenerator::new(&schema, GeneratorConfig::default(), dir.path()).dry_run(true);

        let report = generator
            .run(&GenerationRequest::new("posts"), &mut AlwaysOverwrite)
            .unwrap();

        assert!(!report.route_appended);
        assert_eq!(
            report.route_line,
            r"Route::resource('/posts', App\Http\Controllers\PostController::class);"
        );
        assert!(report
            .artifacts
            .iter()
            .all(|record| record.outcome == WriteOutcome::Created));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_extra_excluded_columns() {
        let dir = TempDir::new().unwrap();
        let schema = StaticSchema::new().with_table(
            "users",
            &[("id", "int"), ("email", "varchar(255)"), ("password", "varchar(255)")],
        );
        let mut config = GeneratorConfig::default();
        config.columns.extra_excluded = vec!["password".to_string()];

        let report = CrudGenerator::new(&schema, config, dir.path())
            .run(&GenerationRequest::new("users"), &mut AlwaysOverwrite)
            .unwrap();

        let names: Vec<&str> = report.fields.iter().map(FieldSpec::name).collect();
        assert_eq!(names, vec!["email"]);
        assert_eq!(report.fields[0].kind, FieldKind::Email);
    }

    #[test]
    fn test_template_override_is_used() {
        let dir = TempDir::new().unwrap();
        let stubs = dir.path().join("stubs");
        fs::create_dir_all(stubs.join("views")).unwrap();
        fs::write(stubs.join("views/show.stub"), "{{modelTitle}}|{{viewRows}}|{{missing}}").unwrap();
        fs::create_dir_all(stubs.join("fragments")).unwrap();
        fs::write(stubs.join("fragments/view-field.stub"), "[{{fieldColumn}}]\n").unwrap();

        let schema = posts_schema();
        let mut config = GeneratorConfig::default();
        config.templates.dir = Some(PathBuf::from("stubs"));

        CrudGenerator::new(&schema, config, dir.path())
            .run(&GenerationRequest::new("posts"), &mut AlwaysOverwrite)
            .unwrap();

        let show = fs::read_to_string(dir.path().join("resources/views/post/show.blade.php")).unwrap();
        assert_eq!(show, "Post|[title]\n[body]\n[published]|{{missing}}");
    }
}
