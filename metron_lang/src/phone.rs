// Letter-unit ("phone") tokenizer.
//
// Turns raw text into a flat sequence of vowel and consonant units. A unit is
// one letter, or one of the consonant digraphs from `orthography.rs` (`sz`,
// `cs`, `gy`, ...) which spell a single sound. Digraphs are only formed
// inside a word: the `s` ending one word and the `z` starting the next stay
// two units.
//
// Everything that is not alphabetic (punctuation, digits, apostrophes) is
// discarded before grouping. The output carries no word boundaries:
// metrical syllabification runs across them.

use serde::{Deserialize, Serialize};

use crate::orthography::{is_consonant_digraph, is_vowel};

/// Whether a unit is a vowel nucleus candidate or a consonant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhoneKind {
    Vowel,
    Consonant,
}

/// One letter unit of a line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phone {
    /// Lower-case spelling: one letter, or two for a digraph.
    pub text: String,
    pub kind: PhoneKind,
}

impl Phone {
    pub fn is_vowel(&self) -> bool {
        self.kind == PhoneKind::Vowel
    }

    /// The vowel letter, if this unit is a vowel.
    pub fn vowel(&self) -> Option<char> {
        match self.kind {
            PhoneKind::Vowel => self.text.chars().next(),
            PhoneKind::Consonant => None,
        }
    }
}

/// Lower-case `word` and keep only its alphabetic characters.
pub fn clean_word(word: &str) -> String {
    word.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_alphabetic())
        .collect()
}

/// Tokenize a whole line into letter units, word by word.
pub fn tokenize_line(text: &str) -> Vec<Phone> {
    let mut phones = Vec::new();
    for word in text.split_whitespace() {
        let letters: Vec<char> = clean_word(word).chars().collect();
        let mut i = 0;
        while i < letters.len() {
            let c = letters[i];
            if is_vowel(c) {
                phones.push(Phone {
                    text: c.to_string(),
                    kind: PhoneKind::Vowel,
                });
                i += 1;
            } else {
                let width = if i + 1 < letters.len()
                    && is_consonant_digraph(&format!("{}{}", c, letters[i + 1]))
                {
                    2
                } else {
                    1
                };
                phones.push(Phone {
                    text: letters[i..i + width].iter().collect(),
                    kind: PhoneKind::Consonant,
                });
                i += width;
            }
        }
    }
    phones
}

/// Split a run of consonant letters into units, treating digraphs as one.
pub fn consonant_units(cluster: &str) -> Vec<String> {
    let letters: Vec<char> = cluster.chars().collect();
    let mut units = Vec::new();
    let mut i = 0;
    while i < letters.len() {
        if i + 1 < letters.len() {
            let pair: String = letters[i..i + 2].iter().collect();
            if is_consonant_digraph(&pair) {
                units.push(pair);
                i += 2;
                continue;
            }
        }
        units.push(letters[i].to_string());
        i += 1;
    }
    units
}
