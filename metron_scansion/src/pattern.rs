// Meter pattern builder: turns a line of text into a scanned `Line`.
//
// Runs the syllabifier, classifies each syllable's weight, and concatenates
// the weight symbols into the line's pattern string (`-` long, `U` short).
// Syllable count is the number of syllables produced (not the number of
// vowel letters) and mora count is the sum of the syllables' morae.
//
// Invariants for every `Line`:
// - `pattern.chars().count() == syllables.len() == syllable_count`
// - `mora_count == sum of syllable morae`
// - a non-empty pattern always ends in `-`

use serde::{Deserialize, Serialize};

use crate::syllabify::syllabify;
use crate::weight::{Weight, classify_weight};

/// A classified syllable. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Syllable {
    pub text: String,
    pub nucleus: char,
    pub weight: Weight,
    /// 1 for short, 2 for long.
    pub mora: u8,
    pub position: usize,
}

/// One scanned line of verse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub raw_text: String,
    pub syllables: Vec<Syllable>,
    /// Weight symbols in syllable order.
    pub pattern: String,
    pub syllable_count: usize,
    pub mora_count: u32,
}

impl Line {
    /// Whether the line produced no syllables at all.
    pub fn is_empty(&self) -> bool {
        self.syllables.is_empty()
    }
}

/// Scan one line of text into syllables, weights, and a pattern.
pub fn build_line(text: &str) -> Line {
    let spans = syllabify(text);
    let last = spans.len().saturating_sub(1);

    let syllables: Vec<Syllable> = spans
        .into_iter()
        .map(|span| {
            let weight = classify_weight(&span, span.position == last);
            Syllable {
                text: span.text,
                nucleus: span.nucleus,
                weight,
                mora: weight.mora(),
                position: span.position,
            }
        })
        .collect();

    let pattern: String = syllables.iter().map(|s| s.weight.symbol()).collect();
    let mora_count = syllables.iter().map(|s| u32::from(s.mora)).sum();

    Line {
        raw_text: text.to_string(),
        syllable_count: syllables.len(),
        syllables,
        pattern,
        mora_count,
    }
}

/// Sum of morae of a pattern string: `U` is one, `-` and the anceps `x` are two.
pub fn pattern_mora(pattern: &str) -> u32 {
    pattern
        .chars()
        .map(|c| match Weight::from_symbol(c) {
            Some(w) => u32::from(w.mora()),
            None => 2,
        })
        .sum()
}
