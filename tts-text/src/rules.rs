//! Word tables for dash rewriting and clause splitting.
//!
//! The word lists are data, not behavior: a `RuleSet` compiles its matchers
//! from whatever lists it is given, so alternate lists (another language, a
//! different register) plug in without touching the segmentation code.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

/// Subordinating conjunctions that mark a clause boundary.
const SUBORDINATORS: &[&str] = &[
    "after", "although", "as", "because", "before", "if", "since", "though", "until", "when",
    "where", "while", "with",
];

/// Discourse markers that flag a dash-delimited aside.
const DISCOURSE_MARKERS: &[&str] = &[
    "additionally",
    "consequently",
    "especially",
    "furthermore",
    "however",
    "indeed",
    "instead",
    "meanwhile",
    "moreover",
    "nevertheless",
    "nonetheless",
    "otherwise",
    "particularly",
    "similarly",
    "therefore",
    "though",
    "thus",
];

static DEFAULT_RULES: Lazy<RuleSet> =
    Lazy::new(|| RuleSet::new(default_subordinators(), default_discourse_markers()));

/// The built-in subordinator list.
pub fn default_subordinators() -> Vec<String> {
    SUBORDINATORS.iter().map(|w| w.to_string()).collect()
}

/// The built-in discourse-marker list.
pub fn default_discourse_markers() -> Vec<String> {
    DISCOURSE_MARKERS.iter().map(|w| w.to_string()).collect()
}

/// Word tables plus the matchers compiled from them.
#[derive(Debug, Clone)]
pub struct RuleSet {
    subordinators: BTreeSet<String>,
    discourse_markers: BTreeSet<String>,
    subordinator_re: Regex,
    discourse_aside_re: Regex,
    dash_discourse_re: Regex,
}

impl RuleSet {
    /// Build a rule set from explicit word lists. Words are matched
    /// case-insensitively on whole-word boundaries.
    pub fn new(subordinators: Vec<String>, discourse_markers: Vec<String>) -> Self {
        let subordinators: BTreeSet<String> =
            subordinators.into_iter().map(|w| w.to_lowercase()).collect();
        let discourse_markers: BTreeSet<String> = discourse_markers
            .into_iter()
            .map(|w| w.to_lowercase())
            .collect();

        let subordinator_re = Regex::new(&format!(r"(?i)\b(?:{})\b", alternation(&subordinators)))
            .expect("subordinator matcher should compile");

        // "<marker> -span-" with the span free of dashes and line breaks
        let discourse_aside_re = Regex::new(&format!(
            r"(?i)\b({})[ \t]*[-–—]([^-–—\n]*)[-–—]",
            alternation(&discourse_markers)
        ))
        .expect("discourse aside matcher should compile");

        // "Asia-particularly" style: a dash directly between a word and a marker
        let dash_discourse_re = Regex::new(&format!(
            r"(?i)\b([A-Za-z]+)[-–—]({})\b",
            alternation(&discourse_markers)
        ))
        .expect("dash-discourse matcher should compile");

        Self {
            subordinators,
            discourse_markers,
            subordinator_re,
            discourse_aside_re,
            dash_discourse_re,
        }
    }

    /// The lazily-built default rule set.
    pub fn builtin() -> &'static RuleSet {
        &DEFAULT_RULES
    }

    /// Subordinator words in this set.
    pub fn subordinators(&self) -> impl Iterator<Item = &str> {
        self.subordinators.iter().map(String::as_str)
    }

    /// Discourse-marker words in this set.
    pub fn discourse_markers(&self) -> impl Iterator<Item = &str> {
        self.discourse_markers.iter().map(String::as_str)
    }

    pub(crate) fn subordinator_matcher(&self) -> &Regex {
        &self.subordinator_re
    }

    pub(crate) fn discourse_aside(&self) -> &Regex {
        &self.discourse_aside_re
    }

    pub(crate) fn dash_discourse(&self) -> &Regex {
        &self.dash_discourse_re
    }
}

/// Escaped alternation of a word set, or a never-matching class when empty.
fn alternation(words: &BTreeSet<String>) -> String {
    if words.is_empty() {
        return String::from(r"[^\s\S]");
    }
    words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|")
}
