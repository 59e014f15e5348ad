//! Language-aware pluralization rule sets
//!
//! English delegates to the `Inflector` crate. The other languages are
//! table-driven: an ordered list of suffix rules per direction, irregular
//! singular/plural pairs, and words that never inflect. The first matching
//! rule wins.
//!
//! The rule set is a value handed to the naming resolver, so two runs with
//! different languages never interfere with each other.

use crate::error::GeneratorError;
use inflector::Inflector;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// Languages with a pluralization rule set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// English (default)
    #[default]
    English,
    /// French
    French,
    /// Norwegian Bokmål
    NorwegianBokmal,
    /// Portuguese
    Portuguese,
    /// Spanish
    Spanish,
    /// Turkish
    Turkish,
}

impl Language {
    /// All supported languages
    pub const ALL: [Self; 6] = [
        Self::English,
        Self::French,
        Self::NorwegianBokmal,
        Self::Portuguese,
        Self::Spanish,
        Self::Turkish,
    ];

    /// Canonical short code
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::French => "fr",
            Self::NorwegianBokmal => "nb",
            Self::Portuguese => "pt",
            Self::Spanish => "es",
            Self::Turkish => "tr",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "en" | "english" => Some(Self::English),
            "fr" | "french" => Some(Self::French),
            "nb" | "no" | "norwegian-bokmal" | "norwegian_bokmal" | "norwegian" => {
                Some(Self::NorwegianBokmal)
            }
            "pt" | "portuguese" => Some(Self::Portuguese),
            "es" | "spanish" => Some(Self::Spanish),
            "tr" | "turkish" => Some(Self::Turkish),
            _ => None,
        }
    }
}

impl FromStr for Language {
    type Err = GeneratorError;

    /// Parse a language code or name (`tr`, `turkish`, `pt_BR`, ...)
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let normalized = input.trim().to_lowercase();
        Self::from_name(&normalized)
            .or_else(|| {
                normalized
                    .split(['-', '_'])
                    .next()
                    .and_then(Self::from_name)
            })
            .ok_or_else(|| {
                let supported: Vec<&str> = Self::ALL.iter().map(|l| l.code()).collect();
                GeneratorError::Validation(format!(
                    "Unknown language '{input}'. Supported: {}",
                    supported.join(", ")
                ))
            })
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One suffix transformation
struct Rule {
    pattern: Regex,
    replacement: &'static str,
}

/// Rules, irregular pairs and uninflected words for one language
struct RuleSet {
    plural: Vec<Rule>,
    singular: Vec<Rule>,
    /// (singular, plural)
    irregular: &'static [(&'static str, &'static str)],
    uninflected: &'static [&'static str],
}

fn rules(table: &[(&str, &'static str)]) -> Vec<Rule> {
    table
        .iter()
        .map(|&(pattern, replacement)| Rule {
            // Patterns are compile-time constants covered by tests.
            pattern: Regex::new(pattern).unwrap_or_else(|e| panic!("invalid rule {pattern}: {e}")),
            replacement,
        })
        .collect()
}

static FRENCH: Lazy<RuleSet> = Lazy::new(|| RuleSet {
    plural: rules(&[
        ("(?i)(s|x|z)$", "${1}"),
        ("(?i)(b|cor|ém|gemm|soupir|trav|vant|vitr)ail$", "${1}aux"),
        ("(?i)ail$", "ails"),
        ("(?i)(chacal|carnaval|festival|récital)$", "${1}s"),
        ("(?i)al$", "aux"),
        ("(?i)(bleu|émeu|landau|pneu|sarrau)$", "${1}s"),
        ("(?i)(bijou|caillou|chou|genou|hibou|joujou|lieu|pou)$", "${1}x"),
        ("(?i)(au|eu|eau)$", "${1}x"),
        ("$", "s"),
    ]),
    singular: rules(&[
        ("(?i)(b|cor|ém|gemm|soupir|trav|vant|vitr)aux$", "${1}ail"),
        ("(?i)ails$", "ail"),
        ("(?i)(journ|chev)aux$", "${1}al"),
        ("(?i)(bijou|caillou|chou|genou|hibou|joujou|pou|au|eu|eau)x$", "${1}"),
        ("(?i)s$", ""),
    ]),
    irregular: &[
        ("monsieur", "messieurs"),
        ("madame", "mesdames"),
        ("mademoiselle", "mesdemoiselles"),
    ],
    uninflected: &[],
});

static NORWEGIAN_BOKMAL: Lazy<RuleSet> = Lazy::new(|| RuleSet {
    plural: rules(&[("(?i)e$", "er"), ("(?i)r$", "re"), ("$", "er")]),
    singular: rules(&[("(?i)re$", "r"), ("(?i)er$", "")]),
    irregular: &[("konto", "konti")],
    uninflected: &["barn", "fjell", "hus"],
});

static PORTUGUESE: Lazy<RuleSet> = Lazy::new(|| RuleSet {
    plural: rules(&[
        ("(?i)^(alem|c|p)ao$", "${1}aes"),
        ("(?i)^(irm|m)ao$", "${1}aos"),
        ("(?i)ao$", "oes"),
        ("(?i)^(alem|c|p)ão$", "${1}ães"),
        ("(?i)^(irm|m)ão$", "${1}ãos"),
        ("(?i)ão$", "ões"),
        ("(?i)^(|g)ás$", "${1}ases"),
        ("(?i)^(japon|escoc|ingl|dinamarqu|fregu|portugu)ês$", "${1}eses"),
        ("(?i)m$", "ns"),
        ("(?i)([^aeou])il$", "${1}is"),
        ("(?i)ul$", "uis"),
        ("(?i)ol$", "ois"),
        ("(?i)el$", "eis"),
        ("(?i)al$", "ais"),
        ("(?i)(z|r)$", "${1}es"),
        ("(?i)(s)$", "${1}"),
        ("$", "s"),
    ]),
    singular: rules(&[
        ("(?i)^(g|)ases$", "${1}ás"),
        ("(?i)(japon|escoc|ingl|dinamarqu|fregu|portugu)eses$", "${1}ês"),
        ("(ae|ao|oe)s$", "ao"),
        ("(ãe|ão|õe)s$", "ão"),
        ("(?i)^(.*[^s]s)es$", "${1}"),
        ("(?i)sses$", "sse"),
        ("(?i)ns$", "m"),
        ("(?i)(r|t|f|v)is$", "${1}il"),
        ("(?i)uis$", "ul"),
        ("(?i)ois$", "ol"),
        ("(?i)eis$", "ei"),
        ("(?i)éis$", "el"),
        ("(?i)([^p])ôs$", "${1}ol"),
        ("(?i)(r|z)es$", "${1}"),
        ("(?i)^(á|gá|país)s$", "${1}"),
        ("(?i)^(m|p)ais$", "${1}ai"),
        ("(?i)([^ê])s$", "${1}"),
    ]),
    irregular: &[
        ("abdomen", "abdomens"),
        ("alemão", "alemães"),
        ("artesã", "artesãos"),
        ("álcool", "álcoois"),
        ("cão", "cães"),
        ("capitão", "capitães"),
        ("cidadão", "cidadãos"),
        ("cristão", "cristãos"),
        ("difícil", "difíceis"),
        ("email", "emails"),
        ("fóssil", "fósseis"),
        ("gás", "gases"),
        ("irmão", "irmãos"),
        ("mal", "males"),
        ("mão", "mãos"),
        ("país", "países"),
        ("pão", "pães"),
        ("réptil", "répteis"),
    ],
    uninflected: &["atlas", "lapis", "onibus", "pires", "virus", "torax"],
});

static SPANISH: Lazy<RuleSet> = Lazy::new(|| RuleSet {
    plural: rules(&[
        ("(?i)ú([sn])$", "u${1}es"),
        ("(?i)ó([sn])$", "o${1}es"),
        ("(?i)í([sn])$", "i${1}es"),
        ("(?i)é([sn])$", "e${1}es"),
        ("(?i)á([sn])$", "a${1}es"),
        ("(?i)z$", "ces"),
        ("(?i)([aeiou]s)$", "${1}"),
        ("(?i)([^aeéiou])$", "${1}es"),
        ("$", "s"),
    ]),
    singular: rules(&[
        ("(?i)ereses$", "erés"),
        ("(?i)iones$", "ión"),
        ("(?i)ces$", "z"),
        ("(?i)es$", ""),
        ("(?i)s$", ""),
    ]),
    irregular: &[
        ("el", "los"),
        ("papá", "papás"),
        ("mamá", "mamás"),
        ("sofá", "sofás"),
        ("mes", "meses"),
    ],
    uninflected: &["lunes", "rompecabezas", "crisis"],
});

static TURKISH: Lazy<RuleSet> = Lazy::new(|| RuleSet {
    plural: rules(&[
        ("([eöiü][^aoıueöiü]{0,6})$", "${1}ler"),
        ("([aoıu][^aoıueöiü]{0,6})$", "${1}lar"),
    ]),
    singular: rules(&[("l[ae]r$", "")]),
    irregular: &[("ben", "biz"), ("sen", "siz"), ("o", "onlar")],
    uninflected: &[],
});

impl RuleSet {
    fn inflect(&self, word: &str, to_plural: bool) -> String {
        let lower = word.to_lowercase();
        if self.uninflected.contains(&lower.as_str()) {
            return word.to_string();
        }

        let irregular = self.irregular.iter().find_map(|&(singular, plural)| {
            let (from, to) = if to_plural {
                (singular, plural)
            } else {
                (plural, singular)
            };
            (from == lower).then_some(to)
        });
        if let Some(target) = irregular {
            return match_leading_case(word, target);
        }

        let table = if to_plural { &self.plural } else { &self.singular };
        table
            .iter()
            .find(|rule| rule.pattern.is_match(word))
            .map_or_else(
                || word.to_string(),
                |rule| rule.pattern.replace(word, rule.replacement).into_owned(),
            )
    }
}

/// Copy the case of `source`'s first character onto `target`
fn match_leading_case(source: &str, target: &str) -> String {
    if source.chars().next().is_some_and(char::is_uppercase) {
        let mut chars = target.chars();
        chars.next().map_or_else(String::new, |first| {
            first.to_uppercase().chain(chars).collect()
        })
    } else {
        target.to_string()
    }
}

/// Pluralizer bound to one language
///
/// Compound `snake_case` names are inflected on their last segment only, so
/// `blog_posts` singularizes to `blog_post`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pluralizer {
    language: Language,
}

impl Pluralizer {
    /// Create a pluralizer for a language
    #[must_use]
    pub const fn new(language: Language) -> Self {
        Self { language }
    }

    /// Language of this rule set
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Singular form of a (possibly compound) word
    ///
    /// # Examples
    ///
    /// ```
    /// # use crudgen::naming::{Language, Pluralizer};
    /// assert_eq!(Pluralizer::default().singular("blog_posts"), "blog_post");
    /// assert_eq!(Pluralizer::new(Language::Turkish).singular("oturumlar"), "oturum");
    /// ```
    #[must_use]
    pub fn singular(&self, word: &str) -> String {
        self.inflect_last_segment(word, false)
    }

    /// Plural form of a (possibly compound) word
    ///
    /// # Examples
    ///
    /// ```
    /// # use crudgen::naming::{Language, Pluralizer};
    /// assert_eq!(Pluralizer::default().plural("blog_post"), "blog_posts");
    /// assert_eq!(Pluralizer::new(Language::Turkish).plural("kitap"), "kitaplar");
    /// ```
    #[must_use]
    pub fn plural(&self, word: &str) -> String {
        self.inflect_last_segment(word, true)
    }

    fn inflect_last_segment(&self, word: &str, to_plural: bool) -> String {
        let split_at = word.rfind(['_', '-', ' ']).map_or(0, |idx| idx + 1);
        let (head, last) = word.split_at(split_at);
        if last.is_empty() {
            return word.to_string();
        }
        format!("{head}{}", self.inflect_word(last, to_plural))
    }

    fn inflect_word(&self, word: &str, to_plural: bool) -> String {
        let rule_set: &RuleSet = match self.language {
            Language::English => {
                return if to_plural {
                    word.to_plural()
                } else {
                    word.to_singular()
                };
            }
            Language::French => &FRENCH,
            Language::NorwegianBokmal => &NORWEGIAN_BOKMAL,
            Language::Portuguese => &PORTUGUESE,
            Language::Spanish => &SPANISH,
            Language::Turkish => &TURKISH,
        };
        rule_set.inflect(word, to_plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_language_codes() {
        assert_eq!("tr".parse::<Language>().unwrap(), Language::Turkish);
        assert_eq!("Turkish".parse::<Language>().unwrap(), Language::Turkish);
        assert_eq!("pt_BR".parse::<Language>().unwrap(), Language::Portuguese);
        assert_eq!("norwegian-bokmal".parse::<Language>().unwrap(), Language::NorwegianBokmal);
        assert_eq!(" en ".parse::<Language>().unwrap(), Language::English);
    }

    #[test]
    fn test_parse_unknown_language() {
        let err = "klingon".parse::<Language>().unwrap_err();
        assert!(matches!(err, GeneratorError::Validation(_)));
        assert!(err.to_string().contains("klingon"));
    }

    #[test]
    fn test_all_rule_sets_compile() {
        for language in Language::ALL {
            let pluralizer = Pluralizer::new(language);
            let _ = pluralizer.plural("test");
            let _ = pluralizer.singular("tests");
        }
    }

    #[test]
    fn test_english_delegates_to_inflector() {
        let english = Pluralizer::default();
        assert_eq!(english.singular("posts"), "post");
        assert_eq!(english.singular("categories"), "category");
        assert_eq!(english.plural("comment"), "comments");
    }

    #[test]
    fn test_compound_names_inflect_last_segment() {
        let english = Pluralizer::default();
        assert_eq!(english.singular("blog_posts"), "blog_post");
        assert_eq!(english.singular("user_profile_categories"), "user_profile_category");
        assert_eq!(english.plural("blog_post"), "blog_posts");
    }

    #[test]
    fn test_turkish_rules() {
        let turkish = Pluralizer::new(Language::Turkish);
        assert_eq!(turkish.singular("oturumlar"), "oturum");
        assert_eq!(turkish.singular("öğrenciler"), "öğrenci");
        assert_eq!(turkish.singular("oturum"), "oturum");
        assert_eq!(turkish.plural("oturum"), "oturumlar");
        assert_eq!(turkish.plural("öğrenci"), "öğrenciler");
        assert_eq!(turkish.singular("biz"), "ben");
    }

    #[test]
    fn test_spanish_rules() {
        let spanish = Pluralizer::new(Language::Spanish);
        assert_eq!(spanish.singular("canciones"), "canción");
        assert_eq!(spanish.singular("luces"), "luz");
        assert_eq!(spanish.singular("mesas"), "mesa");
        assert_eq!(spanish.plural("luz"), "luces");
        assert_eq!(spanish.singular("lunes"), "lunes");
    }

    #[test]
    fn test_french_rules() {
        let french = Pluralizer::new(Language::French);
        assert_eq!(french.singular("journaux"), "journal");
        assert_eq!(french.singular("articles"), "article");
        assert_eq!(french.plural("cheval"), "chevaux");
        assert_eq!(french.plural("Monsieur"), "Messieurs");
    }

    #[test]
    fn test_portuguese_rules() {
        let portuguese = Pluralizer::new(Language::Portuguese);
        assert_eq!(portuguese.singular("pedidos"), "pedido");
        assert_eq!(portuguese.singular("irmãos"), "irmão");
        assert_eq!(portuguese.plural("animal"), "animais");
    }

    #[test]
    fn test_norwegian_rules() {
        let norwegian = Pluralizer::new(Language::NorwegianBokmal);
        assert_eq!(norwegian.singular("biler"), "bil");
        assert_eq!(norwegian.plural("bil"), "biler");
        assert_eq!(norwegian.singular("hus"), "hus");
    }
}
