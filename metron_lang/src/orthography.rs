// Hungarian orthography tables used by both analysis engines.
//
// Everything here is a static lookup: vowel inventory (short and long),
// consonant digraphs that spell a single sound, the aspirated clusters that
// never make a syllable heavy by position, diphthong spellings, and the
// voiced/voiceless consonant pairs that still count as a rhyme match.
//
// All tables are lower case. Callers lower-case their input before asking.

/// Every vowel letter, short and long.
pub const VOWELS: &[char] = &[
    'a', 'á', 'e', 'é', 'i', 'í', 'o', 'ó', 'ö', 'ő', 'u', 'ú', 'ü', 'ű',
];

/// Vowels that are long by nature.
pub const LONG_VOWELS: &[char] = &['á', 'é', 'í', 'ó', 'ő', 'ú', 'ű'];

/// Two-letter spellings of a single consonant.
pub const CONSONANT_DIGRAPHS: &[&str] = &["sz", "cs", "gy", "ny", "ty", "zs", "dz", "ly"];

/// Aspirated clusters (Greek loan spellings). They count as one consonant
/// when deciding whether a syllable is long by position.
pub const NON_LENGTHENING_CLUSTERS: &[&str] = &["kh", "ph", "th"];

/// Vowel pairs that make a syllable long when they appear in its text.
pub const DIPHTHONGS: &[&str] = &["ai", "au", "ei", "eu", "oi", "ou", "ui"];

/// Consonant pairs close enough in sound to rhyme with each other.
pub const SIMILAR_CONSONANTS: &[(&str, &str)] = &[
    ("b", "p"),
    ("d", "t"),
    ("g", "k"),
    ("v", "f"),
    ("z", "s"),
    ("zs", "sz"),
    ("gy", "ty"),
    ("ny", "n"),
];

pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

pub fn is_long_vowel(c: char) -> bool {
    LONG_VOWELS.contains(&c)
}

pub fn is_consonant_digraph(s: &str) -> bool {
    CONSONANT_DIGRAPHS.contains(&s)
}

pub fn is_non_lengthening_cluster(s: &str) -> bool {
    NON_LENGTHENING_CLUSTERS.contains(&s)
}

/// Whether `text` contains any diphthong spelling.
pub fn contains_diphthong(text: &str) -> bool {
    DIPHTHONGS.iter().any(|d| text.contains(d))
}

/// Whether two consonant units are identical or form a similarity pair
/// (in either order).
pub fn are_similar_consonants(a: &str, b: &str) -> bool {
    a == b
        || SIMILAR_CONSONANTS
            .iter()
            .any(|&(x, y)| (a == x && b == y) || (a == y && b == x))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_vowels_are_vowels() {
        for &v in LONG_VOWELS {
            assert!(is_vowel(v), "long vowel '{v}' missing from VOWELS");
        }
    }

    #[test]
    fn test_vowel_inventory() {
        assert_eq!(VOWELS.len(), 14);
        assert!(is_vowel('ö'));
        assert!(is_vowel('ű'));
        assert!(!is_vowel('y'));
        assert!(!is_long_vowel('ö'));
        assert!(is_long_vowel('ő'));
    }

    #[test]
    fn test_digraph_lookup() {
        assert!(is_consonant_digraph("sz"));
        assert!(is_consonant_digraph("ly"));
        assert!(!is_consonant_digraph("th"));
        assert!(is_non_lengthening_cluster("th"));
    }

    #[test]
    fn test_diphthong_detection() {
        assert!(contains_diphthong("kai"));
        assert!(contains_diphthong("eu"));
        assert!(!contains_diphthong("ia"));
    }

    #[test]
    fn test_similar_consonants_are_symmetric() {
        for &(a, b) in SIMILAR_CONSONANTS {
            assert!(are_similar_consonants(a, b));
            assert!(are_similar_consonants(b, a));
        }
        assert!(are_similar_consonants("r", "r"));
        assert!(!are_similar_consonants("r", "l"));
        assert!(!are_similar_consonants("b", "t"));
    }
}
