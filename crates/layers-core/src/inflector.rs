//! Singular/plural word forms from ordered rule tables.
//!
//! Each language has two lists of `(pattern, replacement)` pairs. The first
//! pattern that matches wins; a word no pattern matches comes back unchanged.
//! Adding a language means adding a table, not code.
//!
//! The tables are lossy: `pluralize(singularize(w))` is not always `w`.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::LayerError;

/// Languages with rule tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// English.
    En,
    /// French.
    Fr,
    /// Portuguese.
    Pt,
}

impl Language {
    /// The language tag ("en", "fr", "pt").
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
            Self::Pt => "pt",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = LayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "fr" => Ok(Self::Fr),
            "pt" => Ok(Self::Pt),
            _ => Err(LayerError::UnknownLanguage(s.to_string())),
        }
    }
}

type RuleTable = &'static [(&'static str, &'static str)];

const EN_PLURAL: RuleTable = &[
    (r"(quiz)$", "${1}zes"),
    (r"^(ox)$", "${1}en"),
    (r"([m|l])ouse$", "${1}ice"),
    (r"(matr|vert|ind)(ix|ex)$", "${1}ices"),
    (r"(x|ch|ss|sh)$", "${1}es"),
    (r"([^aeiouy]|qu)y$", "${1}ies"),
    (r"(hive)$", "${1}s"),
    (r"(?:([^f])fe|([lr])f)$", "${1}${2}ves"),
    (r"sis$", "ses"),
    (r"([ti])um$", "${1}a"),
    (r"(buffal|tomat|potat)o$", "${1}oes"),
    (r"(bu)s$", "${1}ses"),
    (r"(alias|status)$", "${1}es"),
    (r"(octop|vir)us$", "${1}i"),
    (r"(ax|test)is$", "${1}es"),
    (r"s$", "s"),
    (r"$", "s"),
];

const EN_SINGULAR: RuleTable = &[
    (r"(quiz)zes$", "${1}"),
    (r"(matr|vert|ind)ices$", "${1}ix"),
    (r"^(ox)en$", "${1}"),
    (r"(alias|status)es$", "${1}"),
    (r"(octop|vir)i$", "${1}us"),
    (r"(cris|ax|test)es$", "${1}is"),
    (r"(shoe)s$", "${1}"),
    (r"(o)es$", "${1}"),
    (r"(bus)es$", "${1}"),
    (r"([m|l])ice$", "${1}ouse"),
    (r"(x|ch|ss|sh)es$", "${1}"),
    (r"(m)ovies$", "${1}ovie"),
    (r"(s)eries$", "${1}eries"),
    (r"([^aeiouy]|qu)ies$", "${1}y"),
    (r"([lr])ves$", "${1}f"),
    (r"(tive)s$", "${1}"),
    (r"(hive)s$", "${1}"),
    (r"([^f])ves$", "${1}fe"),
    (r"(^analy)ses$", "${1}sis"),
    (r"([ti])a$", "${1}um"),
    (r"s$", ""),
];

const FR_PLURAL: RuleTable = &[(r"al$", "aux"), (r"eau$", "eaux"), (r"$", "s")];

const FR_SINGULAR: RuleTable = &[(r"aux$", "al"), (r"eaux$", "eau"), (r"s$", "")];

const PT_PLURAL: RuleTable = &[
    (r"ão$", "ões"),
    (r"l$", "is"),
    (r"m$", "ns"),
    (r"r$", "res"),
    (r"s$", "ses"),
    (r"$", "s"),
];

const PT_SINGULAR: RuleTable = &[
    (r"ões$", "ão"),
    (r"is$", "l"),
    (r"ns$", "m"),
    (r"res$", "r"),
    (r"ses$", "s"),
    (r"s$", ""),
];

struct Rule {
    pattern: Regex,
    replacement: &'static str,
}

fn compile(table: RuleTable) -> Vec<Rule> {
    table
        .iter()
        .map(|(pattern, replacement)| Rule {
            pattern: Regex::new(&format!("(?i){pattern}"))
                .unwrap_or_else(|e| panic!("invalid built-in inflector rule {pattern:?}: {e}")),
            replacement,
        })
        .collect()
}

#[derive(Clone, Copy)]
enum Direction {
    Plural,
    Singular,
}

fn rules(lang: Language, direction: Direction) -> &'static [Rule] {
    static EN_P: OnceLock<Vec<Rule>> = OnceLock::new();
    static EN_S: OnceLock<Vec<Rule>> = OnceLock::new();
    static FR_P: OnceLock<Vec<Rule>> = OnceLock::new();
    static FR_S: OnceLock<Vec<Rule>> = OnceLock::new();
    static PT_P: OnceLock<Vec<Rule>> = OnceLock::new();
    static PT_S: OnceLock<Vec<Rule>> = OnceLock::new();

    let (cell, table) = match (lang, direction) {
        (Language::En, Direction::Plural) => (&EN_P, EN_PLURAL),
        (Language::En, Direction::Singular) => (&EN_S, EN_SINGULAR),
        (Language::Fr, Direction::Plural) => (&FR_P, FR_PLURAL),
        (Language::Fr, Direction::Singular) => (&FR_S, FR_SINGULAR),
        (Language::Pt, Direction::Plural) => (&PT_P, PT_PLURAL),
        (Language::Pt, Direction::Singular) => (&PT_S, PT_SINGULAR),
    };
    cell.get_or_init(|| compile(table))
}

fn apply(word: &str, rules: &[Rule]) -> String {
    rules
        .iter()
        .find(|rule| rule.pattern.is_match(word))
        .map_or_else(
            || word.to_string(),
            |rule| rule.pattern.replace(word, rule.replacement).into_owned(),
        )
}

/// Word-form conversion.
#[derive(Debug, Clone, Copy, Default)]
pub struct Inflector;

impl Inflector {
    /// Returns the plural form of `word`.
    #[must_use]
    pub fn pluralize(word: &str, lang: Language) -> String {
        apply(word, rules(lang, Direction::Plural))
    }

    /// Returns the singular form of `word`.
    #[must_use]
    pub fn singularize(word: &str, lang: Language) -> String {
        apply(word, rules(lang, Direction::Singular))
    }

    /// Derives the identifier column of a plural table name:
    /// `contas` becomes `conta_id`.
    #[must_use]
    pub fn id_column(table: &str, lang: Language) -> String {
        format!("{}_id", Self::singularize(table, lang))
    }
}
