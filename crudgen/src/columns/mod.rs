//! Column classification and filtering
//!
//! Projects introspected columns into the fields shown in generated tables and
//! forms. Bookkeeping columns (primary key, generated identifiers, timestamps,
//! soft-delete markers) are dropped; every other column becomes a
//! [`FieldSpec`] with a human label and a [`FieldKind`].
//!
//! # Type mapping
//!
//! Declared types are normalized before lookup: lower-cased, size/precision
//! arguments and `unsigned`/`zerofill` dropped.
//!
//! ```text
//! varchar(255), character varying, uuid  → text
//! text, longtext, json, jsonb            → textarea
//! int, bigint, smallint, serial          → number
//! decimal(8,2), numeric, double, real    → decimal
//! date                                   → date
//! datetime, timestamp [with time zone]   → datetime
//! time                                   → time
//! boolean, bool, bit, bit(1), tinyint(1) → boolean
//! anything else                          → text
//! ```

use crate::schema::ColumnDescriptor;
use std::collections::HashSet;
use std::fmt;

/// Columns excluded from generated forms and tables unless configured otherwise
pub const DEFAULT_EXCLUDED_COLUMNS: &[&str] =
    &["id", "uuid", "ulid", "created_at", "updated_at", "deleted_at"];

/// Semantic kind of a form/table field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Single-line text
    Text,
    /// Multi-line text
    Textarea,
    /// Integer
    Number,
    /// Fractional number
    Decimal,
    /// Calendar date
    Date,
    /// Date and time
    DateTime,
    /// Time of day
    Time,
    /// Checkbox
    Boolean,
    /// E-mail address
    Email,
}

/// Normalized declared type → field kind
const TYPE_KINDS: &[(&str, FieldKind)] = &[
    ("char", FieldKind::Text),
    ("character", FieldKind::Text),
    ("varchar", FieldKind::Text),
    ("character varying", FieldKind::Text),
    ("nchar", FieldKind::Text),
    ("nvarchar", FieldKind::Text),
    ("bpchar", FieldKind::Text),
    ("citext", FieldKind::Text),
    ("string", FieldKind::Text),
    ("uuid", FieldKind::Text),
    ("enum", FieldKind::Text),
    ("set", FieldKind::Text),
    ("inet", FieldKind::Text),
    ("text", FieldKind::Textarea),
    ("tinytext", FieldKind::Textarea),
    ("mediumtext", FieldKind::Textarea),
    ("longtext", FieldKind::Textarea),
    ("clob", FieldKind::Textarea),
    ("json", FieldKind::Textarea),
    ("jsonb", FieldKind::Textarea),
    ("xml", FieldKind::Textarea),
    ("int", FieldKind::Number),
    ("integer", FieldKind::Number),
    ("tinyint", FieldKind::Number),
    ("smallint", FieldKind::Number),
    ("mediumint", FieldKind::Number),
    ("bigint", FieldKind::Number),
    ("int2", FieldKind::Number),
    ("int4", FieldKind::Number),
    ("int8", FieldKind::Number),
    ("serial", FieldKind::Number),
    ("smallserial", FieldKind::Number),
    ("bigserial", FieldKind::Number),
    ("year", FieldKind::Number),
    ("decimal", FieldKind::Decimal),
    ("numeric", FieldKind::Decimal),
    ("float", FieldKind::Decimal),
    ("float4", FieldKind::Decimal),
    ("float8", FieldKind::Decimal),
    ("double", FieldKind::Decimal),
    ("double precision", FieldKind::Decimal),
    ("real", FieldKind::Decimal),
    ("money", FieldKind::Decimal),
    ("date", FieldKind::Date),
    ("datetime", FieldKind::DateTime),
    ("datetime2", FieldKind::DateTime),
    ("smalldatetime", FieldKind::DateTime),
    ("timestamp", FieldKind::DateTime),
    ("timestamptz", FieldKind::DateTime),
    ("timestamp with time zone", FieldKind::DateTime),
    ("timestamp without time zone", FieldKind::DateTime),
    ("time", FieldKind::Time),
    ("timetz", FieldKind::Time),
    ("time with time zone", FieldKind::Time),
    ("time without time zone", FieldKind::Time),
    ("bool", FieldKind::Boolean),
    ("boolean", FieldKind::Boolean),
];

/// Split a declared type into its normalized base and its argument list
///
/// `"DECIMAL(8,2) UNSIGNED"` → `("decimal", Some("8,2"))`,
/// `"timestamp(6) with time zone"` → `("timestamp with time zone", Some("6"))`
fn normalize_declared_type(declared: &str) -> (String, Option<String>) {
    let lowered = declared.trim().to_lowercase();
    let (without_args, args) = match lowered.split_once('(') {
        Some((before, rest)) => {
            let (args, after) = rest.split_once(')').unwrap_or((rest, ""));
            (format!("{before} {after}"), Some(args.trim().to_string()))
        }
        None => (lowered, None),
    };

    let base = without_args
        .split_whitespace()
        .filter(|word| !matches!(*word, "unsigned" | "signed" | "zerofill"))
        .collect::<Vec<_>>()
        .join(" ");
    (base, args)
}

impl FieldKind {
    /// Map a raw declared type to a field kind; unknown types are [`FieldKind::Text`]
    ///
    /// # Examples
    ///
    /// ```
    /// # use crudgen::columns::FieldKind;
    /// assert_eq!(FieldKind::from_declared_type("varchar(255)"), FieldKind::Text);
    /// assert_eq!(FieldKind::from_declared_type("tinyint(1)"), FieldKind::Boolean);
    /// assert_eq!(FieldKind::from_declared_type("geometry"), FieldKind::Text);
    /// ```
    #[must_use]
    pub fn from_declared_type(declared: &str) -> Self {
        let (base, args) = normalize_declared_type(declared);

        // Single-bit columns are booleans; wider bit fields are not.
        if matches!(
            (base.as_str(), args.as_deref()),
            ("tinyint", Some("1")) | ("bit", None | Some("1"))
        ) {
            return Self::Boolean;
        }

        TYPE_KINDS
            .iter()
            .find(|(token, _)| *token == base)
            .map_or(Self::Text, |&(_, kind)| kind)
    }

    /// HTML input type used in forms
    #[must_use]
    pub const fn input_type(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::Number | Self::Decimal => "number",
            Self::Date => "date",
            Self::DateTime => "datetime-local",
            Self::Time => "time",
            Self::Boolean => "checkbox",
            Self::Email => "email",
        }
    }

    /// Validation rule emitted into the generated model
    #[must_use]
    pub const fn validation_rule(self) -> &'static str {
        match self {
            Self::Text | Self::Textarea => "required|string",
            Self::Number => "required|integer",
            Self::Decimal => "required|numeric",
            Self::Date | Self::DateTime => "required|date",
            Self::Time => "required|date_format:H:i",
            Self::Boolean => "boolean",
            Self::Email => "required|email",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::Number => "number",
            Self::Decimal => "decimal",
            Self::Date => "date",
            Self::DateTime => "datetime",
            Self::Time => "time",
            Self::Boolean => "boolean",
            Self::Email => "email",
        };
        f.write_str(name)
    }
}

/// A column projected into a UI field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Title-cased label (e.g. `Published At`)
    pub label: String,
    /// Source column
    pub column: ColumnDescriptor,
    /// Field kind
    pub kind: FieldKind,
}

impl FieldSpec {
    /// Build the field for an eligible column
    #[must_use]
    pub fn from_column(column: &ColumnDescriptor) -> Self {
        let mut kind = FieldKind::from_declared_type(&column.declared_type);
        let lowered = column.name.to_lowercase();
        if kind == FieldKind::Text && (lowered == "email" || lowered.ends_with("_email")) {
            kind = FieldKind::Email;
        }

        Self {
            label: label_for(&column.name),
            column: column.clone(),
            kind,
        }
    }

    /// Column name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.column.name
    }
}

/// Human label for a column: underscores become spaces, each word title-cased
///
/// # Examples
///
/// ```
/// # use crudgen::columns::label_for;
/// assert_eq!(label_for("published_at"), "Published At");
/// assert_eq!(label_for("title"), "Title");
/// assert_eq!(label_for("a__b"), "A  B");
/// ```
#[must_use]
pub fn label_for(column: &str) -> String {
    column
        .replace('_', " ")
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Decides which columns appear in generated forms and tables
#[derive(Debug, Clone)]
pub struct ColumnFilter {
    excluded: HashSet<String>,
}

impl Default for ColumnFilter {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDED_COLUMNS.iter().copied())
    }
}

impl ColumnFilter {
    /// Create a filter excluding the given column names (case-insensitive)
    pub fn new<'a>(excluded: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            excluded: excluded.into_iter().map(str::to_lowercase).collect(),
        }
    }

    /// Whether a column is shown in forms and tables
    #[must_use]
    pub fn is_eligible(&self, column: &ColumnDescriptor) -> bool {
        !self.excluded.contains(&column.name.to_lowercase())
    }

    /// Eligible columns as fields, in column order
    #[must_use]
    pub fn classify(&self, columns: &[ColumnDescriptor]) -> Vec<FieldSpec> {
        columns
            .iter()
            .filter(|column| self.is_eligible(column))
            .map(FieldSpec::from_column)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(pairs: &[(&str, &str)]) -> Vec<ColumnDescriptor> {
        pairs
            .iter()
            .map(|&(name, declared)| ColumnDescriptor::new(name, declared))
            .collect()
    }

    #[test]
    fn test_normalize_declared_type() {
        assert_eq!(
            normalize_declared_type("DECIMAL(8,2) UNSIGNED"),
            ("decimal".to_string(), Some("8,2".to_string()))
        );
        assert_eq!(
            normalize_declared_type("timestamp(6) with time zone"),
            ("timestamp with time zone".to_string(), Some("6".to_string()))
        );
        assert_eq!(
            normalize_declared_type("  Character Varying "),
            ("character varying".to_string(), None)
        );
    }

    #[test]
    fn test_type_mapping() {
        let cases = [
            ("varchar(255)", FieldKind::Text),
            ("character varying", FieldKind::Text),
            ("TEXT", FieldKind::Textarea),
            ("longtext", FieldKind::Textarea),
            ("jsonb", FieldKind::Textarea),
            ("bigint unsigned", FieldKind::Number),
            ("int(11)", FieldKind::Number),
            ("tinyint(4)", FieldKind::Number),
            ("tinyint(1)", FieldKind::Boolean),
            ("decimal(8,2)", FieldKind::Decimal),
            ("double precision", FieldKind::Decimal),
            ("date", FieldKind::Date),
            ("timestamp without time zone", FieldKind::DateTime),
            ("DATETIME", FieldKind::DateTime),
            ("time", FieldKind::Time),
            ("boolean", FieldKind::Boolean),
            ("USER-DEFINED", FieldKind::Text),
            ("", FieldKind::Text),
        ];

        for (declared, expected) in cases {
            assert_eq!(
                FieldKind::from_declared_type(declared),
                expected,
                "declared type: {declared}"
            );
        }
    }

    #[test]
    fn test_only_single_bits_are_boolean() {
        assert_eq!(FieldKind::from_declared_type("bit"), FieldKind::Boolean);
        assert_eq!(FieldKind::from_declared_type("BIT(1)"), FieldKind::Boolean);
        assert_eq!(FieldKind::from_declared_type("bit(8)"), FieldKind::Text);
        assert_eq!(FieldKind::from_declared_type("bit varying(16)"), FieldKind::Text);
        assert_eq!(FieldKind::from_declared_type("tinyint(4)"), FieldKind::Number);
    }

    #[test]
    fn test_type_table_has_no_duplicate_tokens() {
        let tokens: HashSet<&str> = TYPE_KINDS.iter().map(|(token, _)| *token).collect();
        assert_eq!(tokens.len(), TYPE_KINDS.len());
    }

    #[test]
    fn test_labels() {
        assert_eq!(label_for("title"), "Title");
        assert_eq!(label_for("published_at"), "Published At");
        assert_eq!(label_for("USER_NAME"), "User Name");
        assert_eq!(label_for("a__b"), "A  B");
        assert_eq!(label_for("_token"), " Token");
        assert_eq!(label_for("name_"), "Name ");
        assert_eq!(label_for("çay_ocağı"), "Çay Ocağı");
    }

    #[test]
    fn test_default_filter_drops_bookkeeping_columns() {
        let fields = ColumnFilter::default().classify(&columns(&[
            ("id", "bigint"),
            ("title", "varchar(255)"),
            ("body", "text"),
            ("created_at", "timestamp"),
            ("updated_at", "timestamp"),
            ("deleted_at", "timestamp"),
        ]));

        let names: Vec<&str> = fields.iter().map(FieldSpec::name).collect();
        assert_eq!(names, vec!["title", "body"]);
        assert_eq!(fields[0].kind, FieldKind::Text);
        assert_eq!(fields[1].kind, FieldKind::Textarea);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let filter = ColumnFilter::new(["ID", "Password"]);
        assert!(!filter.is_eligible(&ColumnDescriptor::new("id", "int")));
        assert!(!filter.is_eligible(&ColumnDescriptor::new("PASSWORD", "varchar")));
        assert!(filter.is_eligible(&ColumnDescriptor::new("created_at", "timestamp")));
    }

    #[test]
    fn test_email_columns() {
        let field = FieldSpec::from_column(&ColumnDescriptor::new("contact_email", "varchar(191)"));
        assert_eq!(field.kind, FieldKind::Email);
        assert_eq!(field.kind.input_type(), "email");

        let field = FieldSpec::from_column(&ColumnDescriptor::new("email", "text"));
        assert_eq!(field.kind, FieldKind::Textarea);
    }

    #[test]
    fn test_preserves_order() {
        let fields = ColumnFilter::default().classify(&columns(&[
            ("zeta", "int"),
            ("id", "int"),
            ("alpha", "int"),
        ]));
        let names: Vec<&str> = fields.iter().map(FieldSpec::name).collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
    }
}
