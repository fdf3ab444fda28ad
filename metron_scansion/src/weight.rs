// Syllable weight classification (long/short) and mora values.
//
// A non-final syllable is long when any of these hold:
// (a) its nucleus is a long vowel (á é í ó ő ú ű),
// (b) at least two consonants follow the nucleus before the next vowel
//     ("long by position"). Digraphs count once, and so do the aspirated
//     clusters kh/ph/th, which never lengthen,
// (c) its text contains a diphthong spelling (ai, au, ei, eu, oi, ou, ui).
// The last syllable of a line is always long (brevis in longo).

use metron_lang::{Phone, contains_diphthong, is_long_vowel, is_non_lengthening_cluster};
use serde::{Deserialize, Serialize};

use crate::syllabify::SyllableSpan;

/// Metrical weight of a syllable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weight {
    Long,
    Short,
}

impl Weight {
    pub const LONG_SYMBOL: char = '-';
    pub const SHORT_SYMBOL: char = 'U';

    /// Morae carried by a syllable of this weight.
    pub fn mora(self) -> u8 {
        match self {
            Weight::Long => 2,
            Weight::Short => 1,
        }
    }

    /// Pattern symbol: `-` for long, `U` for short.
    pub fn symbol(self) -> char {
        match self {
            Weight::Long => Self::LONG_SYMBOL,
            Weight::Short => Self::SHORT_SYMBOL,
        }
    }

    /// Parse a pattern symbol. Anything else (including the anceps `x`)
    /// has no definite weight.
    pub fn from_symbol(symbol: char) -> Option<Weight> {
        match symbol {
            Self::LONG_SYMBOL => Some(Weight::Long),
            Self::SHORT_SYMBOL => Some(Weight::Short),
            _ => None,
        }
    }
}

/// Decide the weight of one syllable.
pub fn classify_weight(syllable: &SyllableSpan, is_final: bool) -> Weight {
    if is_final {
        return Weight::Long;
    }
    if is_long_vowel(syllable.nucleus) {
        tracing::trace!(syllable = %syllable.text, "long by nature");
        return Weight::Long;
    }
    if count_position_consonants(&syllable.coda) >= 2 {
        tracing::trace!(syllable = %syllable.text, "long by position");
        return Weight::Long;
    }
    if contains_diphthong(&syllable.text) {
        tracing::trace!(syllable = %syllable.text, "long by diphthong");
        return Weight::Long;
    }
    Weight::Short
}

/// Count consonants after a nucleus for positional length. Digraph units
/// are already single phones; kh/ph/th pairs are merged here.
fn count_position_consonants(coda: &[Phone]) -> usize {
    let mut count = 0;
    let mut i = 0;
    while i < coda.len() {
        let merges = coda.get(i + 1).is_some_and(|next| {
            is_non_lengthening_cluster(&format!("{}{}", coda[i].text, next.text))
        });
        i += if merges { 2 } else { 1 };
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syllabify::syllabify;
    use metron_lang::PhoneKind;

    fn consonant(text: &str) -> Phone {
        Phone {
            text: text.to_string(),
            kind: PhoneKind::Consonant,
        }
    }

    fn weights(text: &str) -> Vec<Weight> {
        let syllables = syllabify(text);
        let last = syllables.len().saturating_sub(1);
        syllables
            .iter()
            .map(|s| classify_weight(s, s.position == last))
            .collect()
    }

    #[test]
    fn test_mora_and_symbol() {
        assert_eq!(Weight::Long.mora(), 2);
        assert_eq!(Weight::Short.mora(), 1);
        assert_eq!(Weight::Long.symbol(), '-');
        assert_eq!(Weight::Short.symbol(), 'U');
        assert_eq!(Weight::from_symbol('-'), Some(Weight::Long));
        assert_eq!(Weight::from_symbol('U'), Some(Weight::Short));
        assert_eq!(Weight::from_symbol('x'), None);
    }

    #[test]
    fn test_long_by_nature() {
        assert_eq!(weights("tára"), vec![Weight::Long, Weight::Long]);
    }

    #[test]
    fn test_long_by_position() {
        assert_eq!(weights("alma"), vec![Weight::Long, Weight::Long]);
        assert_eq!(weights("kapu"), vec![Weight::Short, Weight::Long]);
    }

    #[test]
    fn test_digraph_is_one_consonant() {
        // a + ny + a: one consonant, short.
        assert_eq!(weights("anya")[0], Weight::Short);
    }

    #[test]
    fn test_aspirated_cluster_does_not_lengthen() {
        let span = SyllableSpan {
            text: "a".to_string(),
            nucleus: 'a',
            position: 0,
            coda: vec![consonant("t"), consonant("h")],
        };
        assert_eq!(classify_weight(&span, false), Weight::Short);

        let span = SyllableSpan {
            coda: vec![consonant("r"), consonant("t")],
            ..span
        };
        assert_eq!(classify_weight(&span, false), Weight::Long);
    }

    #[test]
    fn test_diphthong_text_is_long() {
        let span = SyllableSpan {
            text: "kai".to_string(),
            nucleus: 'a',
            position: 0,
            coda: Vec::new(),
        };
        assert_eq!(classify_weight(&span, false), Weight::Long);
    }

    #[test]
    fn test_final_syllable_always_long() {
        let span = SyllableSpan {
            text: "ka".to_string(),
            nucleus: 'a',
            position: 3,
            coda: Vec::new(),
        };
        assert_eq!(classify_weight(&span, false), Weight::Short);
        assert_eq!(classify_weight(&span, true), Weight::Long);
    }

    #[test]
    fn test_consonants_count_across_words() {
        // "a" followed by "sz" + "k": two consonants across the word gap.
        assert_eq!(weights("a szkéne")[0], Weight::Long);
        assert_eq!(weights("a szép")[0], Weight::Short);
    }
}
