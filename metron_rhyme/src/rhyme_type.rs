// Rhyme pair classification.
//
// `classify_rhyme_type` compares two words (or short phrases) and names the
// kind of rhyme they form. Rules are tried in a fixed order and the first
// that holds wins:
//
//   empty input          -> NoRhyme
//   same rhyming part    -> CleanRhyme
//   anagram              -> GoatRhyme
//   same letters, other word breaks -> TortureRhyme
//   same vowels only     -> Assonance
//   same consonants only -> CrookedRhyme
//   both end `U-`        -> MasculineRhyme
//   both end `-U`        -> FeminineRhyme
//   otherwise            -> NoRhyme
//
// Goat and torture rhymes look at the raw (trimmed, lower-cased) strings;
// the skeleton rules look at letters only.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ending::{consonant_skeleton, final_rhythm, rhyming_part, vowel_skeleton};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RhymeType {
    NoRhyme,
    CleanRhyme,
    GoatRhyme,
    TortureRhyme,
    Assonance,
    CrookedRhyme,
    MasculineRhyme,
    FeminineRhyme,
}

impl RhymeType {
    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            RhymeType::NoRhyme => "no rhyme",
            RhymeType::CleanRhyme => "clean rhyme",
            RhymeType::GoatRhyme => "goat rhyme",
            RhymeType::TortureRhyme => "torture rhyme",
            RhymeType::Assonance => "assonance",
            RhymeType::CrookedRhyme => "crooked rhyme",
            RhymeType::MasculineRhyme => "masculine rhyme",
            RhymeType::FeminineRhyme => "feminine rhyme",
        }
    }
}

impl fmt::Display for RhymeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn letters(text: &str) -> String {
    text.chars().filter(|c| c.is_alphabetic()).collect()
}

fn is_anagram(a: &str, b: &str) -> bool {
    if a == b || a.chars().count() != b.chars().count() {
        return false;
    }
    let mut xs: Vec<char> = a.chars().collect();
    let mut ys: Vec<char> = b.chars().collect();
    xs.sort_unstable();
    ys.sort_unstable();
    xs == ys
}

fn is_resegmented(a: &str, b: &str) -> bool {
    let squash = |s: &str| s.chars().filter(|c| !c.is_whitespace()).collect::<String>();
    a != b && squash(a) == squash(b)
}

/// Classify the rhyme between two words or phrases.
pub fn classify_rhyme_type(a: &str, b: &str) -> RhymeType {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();
    let (letters_a, letters_b) = (letters(&a), letters(&b));
    let same_vowels = vowel_skeleton(&letters_a) == vowel_skeleton(&letters_b);
    let same_consonants = consonant_skeleton(&letters_a) == consonant_skeleton(&letters_b);

    let kind = if letters_a.is_empty() || letters_b.is_empty() {
        RhymeType::NoRhyme
    } else if rhyming_part(&a) == rhyming_part(&b) {
        RhymeType::CleanRhyme
    } else if is_anagram(&a, &b) {
        RhymeType::GoatRhyme
    } else if is_resegmented(&a, &b) {
        RhymeType::TortureRhyme
    } else if same_vowels && !same_consonants {
        RhymeType::Assonance
    } else if same_consonants && !same_vowels {
        RhymeType::CrookedRhyme
    } else {
        match (final_rhythm(&a).as_str(), final_rhythm(&b).as_str()) {
            ("U-", "U-") => RhymeType::MasculineRhyme,
            ("-U", "-U") => RhymeType::FeminineRhyme,
            _ => RhymeType::NoRhyme,
        }
    };
    tracing::debug!(a = %a, b = %b, kind = %kind, "classified rhyme pair");
    kind
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goat_rhyme() {
        assert_eq!(classify_rhyme_type("kupa", "kapu"), RhymeType::GoatRhyme);
    }

    #[test]
    fn test_assonance() {
        assert_eq!(classify_rhyme_type("alma", "falka"), RhymeType::Assonance);
    }

    #[test]
    fn test_crooked_rhyme() {
        assert_eq!(classify_rhyme_type("bolt", "belt"), RhymeType::CrookedRhyme);
    }

    #[test]
    fn test_clean_rhyme() {
        assert_eq!(classify_rhyme_type("alma", "palma"), RhymeType::CleanRhyme);
        assert_eq!(classify_rhyme_type("  Alma ", "alma"), RhymeType::CleanRhyme);
    }

    #[test]
    fn test_torture_rhyme() {
        assert_eq!(classify_rhyme_type("hajón", "haj ón"), RhymeType::TortureRhyme);
    }

    #[test]
    fn test_masculine_and_feminine() {
        assert_eq!(classify_rhyme_type("hazám", "kezén"), RhymeType::MasculineRhyme);
        assert_eq!(classify_rhyme_type("várta", "késve"), RhymeType::FeminineRhyme);
    }

    #[test]
    fn test_empty_is_no_rhyme() {
        assert_eq!(classify_rhyme_type("", "x"), RhymeType::NoRhyme);
        assert_eq!(classify_rhyme_type("kert", "   "), RhymeType::NoRhyme);
        assert_eq!(classify_rhyme_type("!!", "?"), RhymeType::NoRhyme);
    }

    #[test]
    fn test_unrelated_words() {
        assert_eq!(classify_rhyme_type("kert", "ló"), RhymeType::NoRhyme);
    }

    #[test]
    fn test_shorter_word_is_not_a_clean_rhyme() {
        // Keys `azám` and `ám` differ, and a one-syllable word has no
        // two-syllable rhythm to compare.
        assert_eq!(rhyming_part("hazám"), "azám");
        assert_eq!(rhyming_part("szám"), "ám");
        assert_eq!(classify_rhyme_type("hazám", "szám"), RhymeType::NoRhyme);
        assert_eq!(classify_rhyme_type("hazám", "szám"), classify_rhyme_type("szám", "hazám"));
    }

    #[test]
    fn test_names() {
        assert_eq!(RhymeType::GoatRhyme.to_string(), "goat rhyme");
        assert_eq!(RhymeType::NoRhyme.to_string(), "no rhyme");
        assert_eq!(
            serde_json::to_string(&RhymeType::CrookedRhyme).unwrap(),
            "\"crooked_rhyme\""
        );
    }
}
