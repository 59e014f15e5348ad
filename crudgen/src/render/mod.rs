//! Placeholder substitution
//!
//! Templates are opaque text containing placeholder tokens such as
//! `{{modelName}}`. Rendering scans the body once, left to right, and at each
//! position replaces the longest bound token that starts there. Replacement
//! text is never scanned again, so a value that happens to contain another
//! token's literal form is emitted verbatim. Unbound tokens are left as-is.

use std::collections::{BTreeMap, HashMap};

/// Token → replacement mapping for one artifact
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    entries: BTreeMap<String, String>,
}

impl Bindings {
    /// Create an empty binding set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `token` to `value`, replacing any previous binding
    pub fn insert(&mut self, token: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(token.into(), value.into());
    }

    /// Builder form of [`Bindings::insert`]
    #[must_use]
    pub fn with(mut self, token: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(token, value);
        self
    }

    /// This binding set overlaid with `other`; `other` wins on conflicts
    #[must_use]
    pub fn merged(&self, other: &Self) -> Self {
        let mut entries = self.entries.clone();
        entries.extend(
            other
                .entries
                .iter()
                .map(|(token, value)| (token.clone(), value.clone())),
        );
        Self { entries }
    }

    /// Value bound to `token`
    #[must_use]
    pub fn get(&self, token: &str) -> Option<&str> {
        self.entries.get(token).map(String::as_str)
    }

    /// Bound tokens in lexical order
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of bound tokens
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no token is bound
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Bindings {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(token, value)| (token.into(), value.into()))
                .collect(),
        }
    }
}

/// Render `template` with `bindings`
///
/// # Examples
///
/// ```
/// # use crudgen::render::{render, Bindings};
/// let bindings = Bindings::new()
///     .with("{{modelName}}", "Post")
///     .with("{{routeName}}", "{{modelName}}s");
/// assert_eq!(
///     render("class {{modelName}} // {{routeName}} {{unknown}}", &bindings),
///     "class Post // {{modelName}}s {{unknown}}"
/// );
/// ```
#[must_use]
pub fn render(template: &str, bindings: &Bindings) -> String {
    // Candidates indexed by first byte, longest token first.
    let mut by_first_byte: HashMap<u8, Vec<(&str, &str)>> = HashMap::new();
    for (token, value) in &bindings.entries {
        if let Some(&first) = token.as_bytes().first() {
            by_first_byte
                .entry(first)
                .or_default()
                .push((token.as_str(), value.as_str()));
        }
    }
    for candidates in by_first_byte.values_mut() {
        candidates.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
    }

    let bytes = template.as_bytes();
    let mut output = String::with_capacity(template.len());
    let mut flushed = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        let matched = by_first_byte.get(&bytes[pos]).and_then(|candidates| {
            candidates
                .iter()
                .find(|(token, _)| bytes[pos..].starts_with(token.as_bytes()))
        });

        if let Some(&(token, value)) = matched {
            // Tokens are valid UTF-8, so a match always starts on a char boundary.
            output.push_str(&template[flushed..pos]);
            output.push_str(value);
            pos += token.len();
            flushed = pos;
        } else {
            pos += 1;
        }
    }
    output.push_str(&template[flushed..]);

    output
}
