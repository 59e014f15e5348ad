//! Template store
//!
//! Resolves a template name (`controller`, `views/index`,
//! `fragments/form-field`, ...) to its body. A file `<dir>/<name>.stub` in the
//! configured override directory wins over the built-in body of the same name.

mod stubs;

use crate::config::TemplateSettings;
use crate::error::{GeneratorError, Result};
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

/// Controller template
pub const CONTROLLER: &str = "controller";

/// Model template
pub const MODEL: &str = "model";

/// View pages, in generation order
pub const VIEWS: [&str; 5] = ["index", "create", "edit", "form", "show"];

/// `<th>` fragment
pub const FRAGMENT_TABLE_HEAD: &str = "fragments/table-head";

/// `<td>` fragment
pub const FRAGMENT_TABLE_BODY: &str = "fragments/table-body";

/// Detail-page field fragment
pub const FRAGMENT_VIEW_FIELD: &str = "fragments/view-field";

/// Single-line input fragment
pub const FRAGMENT_FORM_FIELD: &str = "fragments/form-field";

/// Textarea fragment
pub const FRAGMENT_FORM_TEXTAREA: &str = "fragments/form-textarea";

/// Checkbox fragment
pub const FRAGMENT_FORM_CHECKBOX: &str = "fragments/form-checkbox";

/// File extension of override files
pub const OVERRIDE_EXTENSION: &str = "stub";

/// Store key of a view page, e.g. `views/index`
#[must_use]
pub fn view_template(view: &str) -> String {
    format!("views/{view}")
}

/// Built-in body for `name`
#[must_use]
pub fn builtin(name: &str) -> Option<&'static str> {
    let body = match name {
        CONTROLLER => stubs::CONTROLLER,
        MODEL => stubs::MODEL,
        "views/index" => stubs::VIEW_INDEX,
        "views/create" => stubs::VIEW_CREATE,
        "views/edit" => stubs::VIEW_EDIT,
        "views/form" => stubs::VIEW_FORM,
        "views/show" => stubs::VIEW_SHOW,
        FRAGMENT_TABLE_HEAD => stubs::FRAGMENT_TABLE_HEAD,
        FRAGMENT_TABLE_BODY => stubs::FRAGMENT_TABLE_BODY,
        FRAGMENT_VIEW_FIELD => stubs::FRAGMENT_VIEW_FIELD,
        FRAGMENT_FORM_FIELD => stubs::FRAGMENT_FORM_FIELD,
        FRAGMENT_FORM_TEXTAREA => stubs::FRAGMENT_FORM_TEXTAREA,
        FRAGMENT_FORM_CHECKBOX => stubs::FRAGMENT_FORM_CHECKBOX,
        _ => return None,
    };
    Some(body)
}

/// Source of template bodies keyed by name
#[derive(Debug, Clone, Default)]
pub struct TemplateStore {
    override_dir: Option<PathBuf>,
}

impl TemplateStore {
    /// Store serving only the built-in bodies
    #[must_use]
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Store that prefers `<dir>/<name>.stub` over built-in bodies
    #[must_use]
    pub fn with_override_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            override_dir: Some(dir.into()),
        }
    }

    /// Store configured from settings; relative directories resolve against `project_root`
    #[must_use]
    pub fn from_settings(settings: &TemplateSettings, project_root: &Path) -> Self {
        Self {
            override_dir: settings.dir.as_ref().map(|dir| project_root.join(dir)),
        }
    }

    /// Override directory, if any
    #[must_use]
    pub fn override_dir(&self) -> Option<&Path> {
        self.override_dir.as_deref()
    }

    /// Path an override for `name` would be read from
    #[must_use]
    pub fn override_path(&self, name: &str) -> Option<PathBuf> {
        self.override_dir
            .as_ref()
            .map(|dir| dir.join(format!("{name}.{OVERRIDE_EXTENSION}")))
    }

    /// Body of the template `name`
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Io`] if an override file exists but cannot be
    /// read, and [`GeneratorError::TemplateNotFound`] if neither an override
    /// nor a built-in body exists.
    pub fn get(&self, name: &str) -> Result<Cow<'static, str>> {
        if let Some(path) = self.override_path(name) {
            if path.is_file() {
                tracing::debug!(template = name, path = %path.display(), "using template override");
                let body = fs::read_to_string(&path).map_err(|e| GeneratorError::io(&path, e))?;
                return Ok(Cow::Owned(body));
            }
        }

        builtin(name)
            .map(Cow::Borrowed)
            .ok_or_else(|| GeneratorError::TemplateNotFound {
                name: name.to_string(),
            })
    }
}
