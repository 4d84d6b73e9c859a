//! Raw-text normalization ahead of chunking.
//!
//! Two rewrites, both meaning-preserving:
//! - line breaks: a lone break becomes a space, a blank line becomes the
//!   paragraph separator
//! - dashes: discourse-flagged asides become comma-delimited clauses;
//!   hyphenated compounds stay untouched

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::rules::RuleSet;

/// A dash pair opening after whitespace, span free of dashes and line breaks.
static BARE_ASIDE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(^|[ \t])[-–—]([^-–—\n]*)[-–—]").expect("aside matcher should compile"));

/// Normalize text with the built-in rule set.
pub fn normalize(text: &str) -> String {
    normalize_with(text, RuleSet::builtin())
}

/// Normalize text with an explicit rule set (custom discourse-marker list).
///
/// Pure and idempotent; quotation marks, accents, and numerals pass through
/// unchanged.
pub fn normalize_with(text: &str, rules: &RuleSet) -> String {
    let text = collapse_line_breaks(text);
    rewrite_dash_asides(&text, rules)
}

/// Collapse line breaks: a single break becomes a space, a run containing two
/// or more breaks becomes exactly one paragraph separator.
fn collapse_line_breaks(text: &str) -> String {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");

    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        if chars[i] != '\n' {
            out.push(chars[i]);
            i += 1;
            continue;
        }

        // Measure the whole whitespace run around this break; blank lines
        // padded with spaces or tabs still count as paragraph separators.
        let mut newlines = 0;
        while i < chars.len() && matches!(chars[i], '\n' | ' ' | '\t') {
            if chars[i] == '\n' {
                newlines += 1;
            }
            i += 1;
        }

        while out.ends_with([' ', '\t']) {
            out.pop();
        }
        if !out.is_empty() && i < chars.len() {
            out.push_str(if newlines >= 2 { "\n\n" } else { " " });
        }
    }

    out.trim().to_string()
}

/// Rewrite dash asides to comma-delimited clauses.
fn rewrite_dash_asides(text: &str, rules: &RuleSet) -> String {
    // Discourse-led asides: "particularly -in summer-" -> "particularly, in summer,"
    let text = rules.discourse_aside().replace_all(text, |caps: &Captures| {
        let span = caps[2].trim();
        if span.is_empty() {
            return caps[0].to_string();
        }
        format!("{}, {},", &caps[1], span)
    });

    // Whitespace-led asides need a multi-word span; " -X-" alone stays as is
    let text = BARE_ASIDE.replace_all(&text, |caps: &Captures| {
        let span = caps[2].trim();
        if !span.contains(' ') {
            return caps[0].to_string();
        }
        if caps[1].is_empty() {
            format!("{},", span)
        } else {
            format!(", {},", span)
        }
    });

    // "Asia-particularly" -> "Asia, particularly"
    rules
        .dash_discourse()
        .replace_all(&text, "${1}, ${2}")
        .into_owned()
}
