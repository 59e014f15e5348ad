//! Naming resolution for generated artifacts
//!
//! Derives the class name, route segment and the singular/plural forms used by
//! every template from the table name and the optional overrides. One
//! [`NamingContext`] is computed per run and shared by all artifacts, so the
//! controller, model, views and route line always agree on naming.

mod pluralizer;

pub use pluralizer::{Language, Pluralizer};

use crate::generator::GenerationRequest;

/// Names shared by every artifact of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingContext {
    /// Singular, capitalized class name (e.g. `BlogPost`)
    pub class_name: String,
    /// Source table name (e.g. `blog_posts`)
    pub table_name: String,
    /// Route segment (e.g. `blog_posts`)
    pub route_name: String,
    /// Human-readable title (e.g. `Blog Post`)
    pub title: String,
    /// `camelCase` singular (e.g. `blogPost`)
    pub camel: String,
    /// `camelCase` plural (e.g. `blogPosts`)
    pub plural_camel: String,
    /// `PascalCase` plural (e.g. `BlogPosts`)
    pub plural_pascal: String,
    /// View directory (e.g. `blog-post`)
    pub view_dir: String,
    /// Controller class name (e.g. `BlogPostController`)
    pub controller_name: String,
}

impl NamingContext {
    /// Resolve names for a request
    ///
    /// - class name: the override with its first letter capitalized, otherwise
    ///   the singular of the table name in `PascalCase`
    /// - route name: the override, otherwise the lower-cased table name
    ///
    /// # Examples
    ///
    /// ```
    /// # use crudgen::generator::GenerationRequest;
    /// # use crudgen::naming::{NamingContext, Pluralizer};
    /// let naming = NamingContext::resolve(&GenerationRequest::new("blog_posts"), &Pluralizer::default());
    /// assert_eq!(naming.class_name, "BlogPost");
    /// assert_eq!(naming.route_name, "blog_posts");
    /// ```
    #[must_use]
    pub fn resolve(request: &GenerationRequest, pluralizer: &Pluralizer) -> Self {
        let class_name = request
            .class_name_override
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map_or_else(
                || pascal_case(&words(&pluralizer.singular(&request.table_name))),
                upper_first,
            );

        let route_name = request
            .route_override
            .as_deref()
            .map(str::trim)
            .filter(|route| !route.is_empty())
            .map_or_else(|| request.table_name.to_lowercase(), ToString::to_string);

        let class_words = words(&class_name);
        let plural_words = words(&pluralizer.plural(&class_words.join("_")));

        Self {
            title: class_words
                .iter()
                .map(|word| upper_first(word))
                .collect::<Vec<_>>()
                .join(" "),
            camel: camel_case(&class_words),
            plural_camel: camel_case(&plural_words),
            plural_pascal: pascal_case(&plural_words),
            view_dir: class_words.join("-"),
            controller_name: format!("{class_name}Controller"),
            table_name: request.table_name.clone(),
            route_name,
            class_name,
        }
    }
}

/// Lower-cased words of an identifier
///
/// Splits on any non-alphanumeric character and on case boundaries
/// (`blogPost`, `HTTPServer`). Case tests are Unicode-aware, so `öğrenci`
/// stays one word.
fn words(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (idx, &ch) in chars.iter().enumerate() {
        if !ch.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        // `current` is non-empty only when the previous char was alphanumeric.
        if ch.is_uppercase() && !current.is_empty() {
            let prev = chars[idx - 1];
            let next_is_lower = chars.get(idx + 1).is_some_and(|next| next.is_lowercase());
            if prev.is_lowercase() || prev.is_numeric() || (prev.is_uppercase() && next_is_lower) {
                words.push(std::mem::take(&mut current));
            }
        }
        current.extend(ch.to_lowercase());
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn pascal_case(words: &[String]) -> String {
    words.iter().map(|word| upper_first(word)).collect()
}

fn camel_case(words: &[String]) -> String {
    let mut iter = words.iter();
    iter.next().map_or_else(String::new, |first| {
        let mut camel = first.clone();
        camel.extend(iter.map(|word| upper_first(word)));
        camel
    })
}

/// Capitalize the first character, leaving the rest untouched
fn upper_first(input: &str) -> String {
    let mut chars = input.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn resolve(request: &GenerationRequest) -> NamingContext {
        NamingContext::resolve(request, &Pluralizer::default())
    }

    #[test]
    fn test_class_name_from_table() {
        let naming = resolve(&GenerationRequest::new("posts"));
        assert_eq!(naming.class_name, "Post");
        assert_eq!(naming.route_name, "posts");
        assert_eq!(naming.controller_name, "PostController");
    }

    #[test]
    fn test_compound_table_name() {
        let naming = resolve(&GenerationRequest::new("blog_posts"));
        assert_eq!(naming.class_name, "BlogPost");
        assert_eq!(naming.title, "Blog Post");
        assert_eq!(naming.camel, "blogPost");
        assert_eq!(naming.plural_camel, "blogPosts");
        assert_eq!(naming.plural_pascal, "BlogPosts");
        assert_eq!(naming.view_dir, "blog-post");
    }

    #[test]
    fn test_class_name_override_is_capitalized_only() {
        let naming = resolve(&GenerationRequest::new("posts").with_class_name("article"));
        assert_eq!(naming.class_name, "Article");

        let naming = resolve(&GenerationRequest::new("posts").with_class_name("newsArticle"));
        assert_eq!(naming.class_name, "NewsArticle");
    }

    #[test]
    fn test_blank_overrides_are_ignored() {
        let naming = resolve(
            &GenerationRequest::new("posts")
                .with_class_name("  ")
                .with_route(""),
        );
        assert_eq!(naming.class_name, "Post");
        assert_eq!(naming.route_name, "posts");
    }

    #[test]
    fn test_route_override() {
        let naming = resolve(&GenerationRequest::new("posts").with_route("admin/posts"));
        assert_eq!(naming.route_name, "admin/posts");
        assert_eq!(naming.class_name, "Post");
    }

    #[test]
    fn test_route_defaults_to_lowercase_table() {
        let naming = resolve(&GenerationRequest::new("BlogPosts"));
        assert_eq!(naming.route_name, "blogposts");
    }

    #[test]
    fn test_non_ascii_leading_letter() {
        let turkish = Pluralizer::new(Language::Turkish);

        let naming = NamingContext::resolve(&GenerationRequest::new("öğrenciler"), &turkish);
        assert_eq!(naming.class_name, "Öğrenci");
        assert_eq!(naming.title, "Öğrenci");
        assert_eq!(naming.camel, "öğrenci");
        assert_eq!(naming.plural_camel, "öğrenciler");
        assert_eq!(naming.plural_pascal, "Öğrenciler");
        assert_eq!(naming.view_dir, "öğrenci");
        assert_eq!(naming.controller_name, "ÖğrenciController");

        let naming = NamingContext::resolve(&GenerationRequest::new("ürün_kategoriler"), &turkish);
        assert_eq!(naming.class_name, "ÜrünKategori");
        assert_eq!(naming.title, "Ürün Kategori");
        assert_eq!(naming.camel, "ürünKategori");
        assert_eq!(naming.view_dir, "ürün-kategori");

        let naming = NamingContext::resolve(&GenerationRequest::new("şehirler"), &turkish);
        assert_eq!(naming.class_name, "Şehir");
    }

    #[test]
    fn test_word_splitting() {
        assert_eq!(words("blog_posts"), vec!["blog", "posts"]);
        assert_eq!(words("newsArticle"), vec!["news", "article"]);
        assert_eq!(words("HTTPServer"), vec!["http", "server"]);
        assert_eq!(words("çay-ocağı"), vec!["çay", "ocağı"]);
        assert_eq!(words("__a__"), vec!["a"]);
        assert!(words("").is_empty());
    }

    #[test]
    fn test_language_changes_singularization() {
        let request = GenerationRequest::new("oturumlar");
        let english = NamingContext::resolve(&request, &Pluralizer::new(Language::English));
        let turkish = NamingContext::resolve(&request, &Pluralizer::new(Language::Turkish));
        assert_eq!(turkish.class_name, "Oturum");
        assert_ne!(english.class_name, turkish.class_name);
    }

    proptest! {
        #[test]
        fn prop_resolution_is_deterministic(
            table in "[a-z]{1,8}(_[a-z]{1,8}){0,2}",
            language in prop::sample::select(Language::ALL.to_vec()),
        ) {
            let request = GenerationRequest::new(table.as_str());
            let pluralizer = Pluralizer::new(language);
            prop_assert_eq!(
                NamingContext::resolve(&request, &pluralizer),
                NamingContext::resolve(&request, &pluralizer)
            );
        }

        #[test]
        fn prop_class_override_ignores_language(
            table in "[a-z]{1,8}",
            class_name in "[A-Z][a-z]{0,10}",
            language in prop::sample::select(Language::ALL.to_vec()),
        ) {
            let request = GenerationRequest::new(table.as_str()).with_class_name(class_name.as_str());
            let naming = NamingContext::resolve(&request, &Pluralizer::new(language));
            prop_assert_eq!(naming.class_name, class_name);
            prop_assert_eq!(naming.route_name, table);
        }
    }
}
