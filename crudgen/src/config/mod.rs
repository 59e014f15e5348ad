//! Configuration management for crudgen
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `CRUDGEN_` prefix, `__` for nesting)
//! 2. `./crudgen.toml` in the project root
//! 3. `~/.config/crudgen/config.toml` (user config, XDG)
//! 4. Hardcoded defaults (fallback)
//!
//! Command-line flags are applied on top of the extracted value by the CLI.
//!
//! # Example Configuration
//!
//! ```toml
//! # crudgen.toml
//! [database]
//! url = "mysql://root@localhost/blog"
//!
//! [layout]
//! controllers_dir = "app/Http/Controllers/Admin"
//! controller_namespace = 'App\Http\Controllers\Admin'
//!
//! [templates]
//! dir = "./stubs/crud"
//!
//! [columns]
//! extra_excluded = ["password", "remember_token"]
//! ```

use crate::error::Result;
use crate::naming::NamingContext;
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the project-local configuration file
pub const LOCAL_CONFIG_FILE: &str = "crudgen.toml";

/// Database connection settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// Connection string (`postgres://`, `mysql://` or `sqlite:`)
    pub url: Option<String>,
}

/// Directory and namespace conventions of the host project
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectLayout {
    /// Directory receiving controllers
    pub controllers_dir: PathBuf,
    /// Directory receiving models
    pub models_dir: PathBuf,
    /// Root directory of view templates
    pub views_dir: PathBuf,
    /// File extension of view templates
    pub view_extension: String,
    /// File extension of controllers and models
    pub source_extension: String,
    /// Shared routes file the route line is appended to
    pub routes_file: PathBuf,
    /// Namespace of generated controllers
    pub controller_namespace: String,
    /// Namespace of generated models
    pub model_namespace: String,
    /// Layout the generated views extend
    pub layout: String,
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self {
            controllers_dir: PathBuf::from("app/Http/Controllers"),
            models_dir: PathBuf::from("app/Models"),
            views_dir: PathBuf::from("resources/views"),
            view_extension: ".blade.php".to_string(),
            source_extension: ".php".to_string(),
            routes_file: PathBuf::from("routes/web.php"),
            controller_namespace: r"App\Http\Controllers".to_string(),
            model_namespace: r"App\Models".to_string(),
            layout: "layouts.app".to_string(),
        }
    }
}

impl ProjectLayout {
    /// Controller target path, e.g. `app/Http/Controllers/PostController.php`
    #[must_use]
    pub fn controller_path(&self, root: &Path, naming: &NamingContext) -> PathBuf {
        root.join(&self.controllers_dir)
            .join(format!("{}{}", naming.controller_name, self.source_extension))
    }

    /// Model target path, e.g. `app/Models/Post.php`
    #[must_use]
    pub fn model_path(&self, root: &Path, naming: &NamingContext) -> PathBuf {
        root.join(&self.models_dir)
            .join(format!("{}{}", naming.class_name, self.source_extension))
    }

    /// View target path, e.g. `resources/views/post/index.blade.php`
    #[must_use]
    pub fn view_path(&self, root: &Path, naming: &NamingContext, view: &str) -> PathBuf {
        root.join(&self.views_dir)
            .join(&naming.view_dir)
            .join(format!("{view}{}", self.view_extension))
    }

    /// Routes file path
    #[must_use]
    pub fn routes_path(&self, root: &Path) -> PathBuf {
        root.join(&self.routes_file)
    }

    /// Fully qualified controller name, e.g. `App\Http\Controllers\PostController`
    #[must_use]
    pub fn controller_qualified_name(&self, naming: &NamingContext) -> String {
        if self.controller_namespace.is_empty() {
            naming.controller_name.clone()
        } else {
            format!("{}\\{}", self.controller_namespace, naming.controller_name)
        }
    }
}

/// Template store settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateSettings {
    /// Directory of `<name>.stub` overrides for the built-in templates
    pub dir: Option<PathBuf>,
}

/// Column filtering settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnSettings {
    /// Columns never rendered in forms or tables
    pub excluded: Vec<String>,
    /// Additional exclusions appended to `excluded`
    pub extra_excluded: Vec<String>,
}

impl Default for ColumnSettings {
    fn default() -> Self {
        Self {
            excluded: crate::columns::DEFAULT_EXCLUDED_COLUMNS
                .iter()
                .map(ToString::to_string)
                .collect(),
            extra_excluded: Vec::new(),
        }
    }
}

impl ColumnSettings {
    /// All excluded column names
    pub fn all_excluded(&self) -> impl Iterator<Item = &str> {
        self.excluded
            .iter()
            .chain(self.extra_excluded.iter())
            .map(String::as_str)
    }
}

/// Route registration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteSettings {
    /// Statement pattern rendered with `{{routeName}}` and `{{controllerQualifiedName}}`
    pub statement: String,
}

impl Default for RouteSettings {
    fn default() -> Self {
        Self {
            statement: crate::routes::DEFAULT_ROUTE_STATEMENT.to_string(),
        }
    }
}

/// Complete crudgen configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Database settings
    #[serde(default)]
    pub database: DatabaseSettings,

    /// Host project conventions
    #[serde(default)]
    pub layout: ProjectLayout,

    /// Template overrides
    #[serde(default)]
    pub templates: TemplateSettings,

    /// Column filtering
    #[serde(default)]
    pub columns: ColumnSettings,

    /// Route line pattern
    #[serde(default)]
    pub routes: RouteSettings,
}

impl GeneratorConfig {
    /// Load configuration for a project
    ///
    /// Searches, lowest priority first: defaults, the user config file,
    /// `<project_root>/crudgen.toml`, then `CRUDGEN_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be parsed or a value
    /// has the wrong type.
    pub fn load(project_root: &Path) -> Result<Self> {
        let mut figment = Figment::new().merge(Toml::string(&toml::to_string(&Self::default())?));

        let user_config = Self::recommended_path();
        if user_config.exists() {
            figment = figment.merge(Toml::file(&user_config));
        }

        let local_config = project_root.join(LOCAL_CONFIG_FILE);
        if local_config.exists() {
            figment = figment.merge(Toml::file(&local_config));
        }

        figment = figment.merge(Env::prefixed("CRUDGEN_").split("__").lowercase(true));

        let config = figment.extract()?;
        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }

    /// Load configuration from a specific file, with environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if the file contains invalid TOML or a value has the
    /// wrong type.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config = Figment::new()
            .merge(Toml::string(&toml::to_string(&Self::default())?))
            .merge(Toml::file(path))
            .merge(Env::prefixed("CRUDGEN_").split("__").lowercase(true))
            .extract()?;

        Ok(config)
    }

    /// User configuration path: `~/.config/crudgen/config.toml`
    #[must_use]
    pub fn recommended_path() -> PathBuf {
        dirs::config_dir().map_or_else(
            || PathBuf::from("./config.toml"),
            |config_dir| config_dir.join("crudgen").join("config.toml"),
        )
    }
}
