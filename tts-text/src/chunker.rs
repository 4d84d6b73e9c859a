//! Cascading chunk segmentation for TTS.
//!
//! Paragraphs are hard boundaries. Inside a paragraph, each sentence is
//! emitted whole when it fits; oversized sentences fall through a fixed
//! cascade of finer split rules: minor punctuation, subordinate clause,
//! hard length cut. Every tier is a pure function; the per-paragraph
//! routine composes them and over-length pieces only ever move forward,
//! so the cascade runs without recursion.

use crate::error::{ChunkError, Result};
use crate::rules::RuleSet;
use crate::{ChunkRecord, SplitRule};

/// Default maximum chunk size in characters (exclusive).
pub const DEFAULT_CHUNK_LIMIT: usize = 200;

/// Split normalized text into TTS-ready chunks with the built-in rules.
pub fn chunk(text: &str, limit: usize) -> Result<Vec<ChunkRecord>> {
    chunk_with(text, limit, RuleSet::builtin())
}

/// Split normalized text into TTS-ready chunks.
///
/// Chunks are returned in reading order and never cross a paragraph
/// boundary. Every chunk produced by a linguistic tier is strictly shorter
/// than `limit`; only a hard cut through a whitespace-free run can reach
/// exactly `limit` characters.
pub fn chunk_with(text: &str, limit: usize, rules: &RuleSet) -> Result<Vec<ChunkRecord>> {
    if limit == 0 {
        return Err(ChunkError::InvalidLimit(limit));
    }

    let mut records = Vec::new();
    for paragraph in text.split("\n\n") {
        let paragraph = paragraph.trim();
        if paragraph.is_empty() {
            continue;
        }
        chunk_paragraph(paragraph, limit, rules, &mut records);
    }
    Ok(records)
}

/// Emit chunks for one paragraph.
fn chunk_paragraph(paragraph: &str, limit: usize, rules: &RuleSet, out: &mut Vec<ChunkRecord>) {
    for sentence in split_sentences(paragraph) {
        let sentence = sentence.trim();
        if sentence.is_empty() {
            continue;
        }
        if char_len(sentence) < limit {
            out.push(ChunkRecord::new(sentence.to_string(), SplitRule::Sentence));
        } else {
            log::debug!(
                "sentence of {} chars is over the {} limit, splitting at minor punctuation",
                char_len(sentence),
                limit
            );
            split_oversized(sentence, limit, rules, out);
        }
    }
}

/// Split a paragraph after each major terminator (`.`, `?`, `!`).
///
/// A terminator only ends a sentence when followed by whitespace or the end
/// of the paragraph, so decimals and abbreviation runs stay intact. The
/// terminator stays with the preceding sentence; a trailing remainder with
/// no terminator is its own candidate.
fn split_sentences(paragraph: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut iter = paragraph.char_indices().peekable();

    while let Some((i, c)) = iter.next() {
        if matches!(c, '.' | '?' | '!') {
            let at_boundary = match iter.peek() {
                Some(&(_, next)) => next.is_whitespace(),
                None => true,
            };
            if at_boundary {
                let end = i + c.len_utf8();
                parts.push(&paragraph[start..end]);
                start = end;
            }
        }
    }
    if start < paragraph.len() {
        parts.push(&paragraph[start..]);
    }
    parts
}

/// Cascade an oversized sentence through the fallback tiers.
fn split_oversized(sentence: &str, limit: usize, rules: &RuleSet, out: &mut Vec<ChunkRecord>) {
    for group in accumulate(split_minor(sentence), limit) {
        if char_len(&group) < limit {
            out.push(ChunkRecord::new(group, SplitRule::MinorPunct));
        } else {
            split_clause(&group, limit, rules, out);
        }
    }
}

/// Subordinator tier for a piece that minor punctuation could not resolve.
fn split_clause(piece: &str, limit: usize, rules: &RuleSet, out: &mut Vec<ChunkRecord>) {
    let parts = split_at_subordinators(piece, rules);
    if parts.len() <= 1 {
        hard_cut(piece, limit, out);
        return;
    }

    for group in accumulate(parts, limit) {
        if char_len(&group) < limit {
            out.push(ChunkRecord::new(group, SplitRule::ClauseSubordinator));
        } else {
            hard_cut(&group, limit, out);
        }
    }
}

/// Split after each `,` or `;`, keeping the punctuation with the preceding
/// piece. A piece with no minor punctuation comes back whole.
fn split_minor(text: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut start = 0;

    for (i, c) in text.char_indices() {
        if matches!(c, ',' | ';') {
            let end = i + c.len_utf8();
            let piece = text[start..end].trim();
            if !piece.is_empty() {
                parts.push(piece.to_string());
            }
            start = end;
        }
    }
    let tail = text[start..].trim();
    if !tail.is_empty() {
        parts.push(tail.to_string());
    }
    parts
}

/// Split immediately before every whole-word subordinator match that is not
/// the first word of the piece.
fn split_at_subordinators(text: &str, rules: &RuleSet) -> Vec<String> {
    let cuts: Vec<usize> = rules
        .subordinator_matcher()
        .find_iter(text)
        .map(|m| m.start())
        .filter(|&s| !text[..s].trim().is_empty())
        .collect();

    if cuts.is_empty() {
        return vec![text.to_string()];
    }

    let mut parts = Vec::new();
    let mut start = 0;
    for cut in cuts {
        let piece = text[start..cut].trim();
        if !piece.is_empty() {
            parts.push(piece.to_string());
        }
        start = cut;
    }
    let tail = text[start..].trim();
    if !tail.is_empty() {
        parts.push(tail.to_string());
    }
    parts
}

/// Greedy left-to-right regrouping: append the next piece while the joined
/// length stays under the limit, flush otherwise. Maximizes chunk size under
/// the limit, minimizing chunk count.
fn accumulate(parts: Vec<String>, limit: usize) -> Vec<String> {
    let mut groups = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for part in parts {
        let part_len = char_len(&part);
        if current.is_empty() {
            current = part;
            current_len = part_len;
        } else if current_len + 1 + part_len < limit {
            current.push(' ');
            current.push_str(&part);
            current_len += 1 + part_len;
        } else {
            groups.push(current);
            current = part;
            current_len = part_len;
        }
    }
    if !current.is_empty() {
        groups.push(current);
    }
    groups
}

/// Length-only last resort: cut at the last whitespace before the limit, or
/// at exactly the limit when the window has no whitespace at all.
fn hard_cut(text: &str, limit: usize, out: &mut Vec<ChunkRecord>) {
    let mut rest = text.trim();

    while char_len(rest) >= limit {
        let window_end = byte_at_char(rest, limit);
        let cut = rest[..window_end]
            .rfind(char::is_whitespace)
            .unwrap_or(window_end);

        let piece = rest[..cut].trim_end();
        if !piece.is_empty() {
            out.push(ChunkRecord::new(piece.to_string(), SplitRule::HardCut));
        }
        rest = rest[cut..].trim_start();
    }

    if !rest.is_empty() {
        out.push(ChunkRecord::new(rest.to_string(), SplitRule::HardCut));
    }
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Byte index of the given character position, clamped to the text length.
fn byte_at_char(text: &str, chars: usize) -> usize {
    text.char_indices()
        .nth(chars)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}
