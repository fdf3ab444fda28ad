// Metrical syllabifier: splits a line into syllables around vowel nuclei.
//
// Works on the letter units from `metron_lang::phone`, across word
// boundaries (scansion treats a line as one continuous stream of sound).
// Boundary rules between two consecutive nuclei:
// - no consonant between them (hiatus): boundary right after the first vowel
// - one consonant: boundary before it, so it opens the next syllable
// - two or more: boundary after the first consonant, the rest open the next
// Consonants before the first nucleus belong to the first syllable and
// consonants after the last nucleus belong to the last one. A digraph such
// as `sz` or `ny` counts as a single consonant.
//
// The output `SyllableSpan` also carries the consonant units that follow its
// nucleus up to the next nucleus, which is the context `weight.rs` needs to
// decide length by position.
//
// This is the scansion-side splitter. The rhyme engine has its own, simpler
// word splitter (`metron_rhyme::ending::split_word_syllables`).

use metron_lang::{Phone, tokenize_line};

/// A syllable as cut by the syllabifier, before weight classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyllableSpan {
    /// Letters of the syllable, lower case, without spaces.
    pub text: String,
    /// The syllable's single vowel.
    pub nucleus: char,
    /// 0-based index of the syllable within its line.
    pub position: usize,
    /// Consonant units between this nucleus and the next one (or line end).
    pub coda: Vec<Phone>,
}

/// Split a line of text into ordered syllables.
///
/// Empty input, or input without any vowel, yields an empty list.
pub fn syllabify(text: &str) -> Vec<SyllableSpan> {
    let phones = tokenize_line(text);
    let nuclei: Vec<usize> = phones
        .iter()
        .enumerate()
        .filter(|(_, p)| p.is_vowel())
        .map(|(i, _)| i)
        .collect();

    if nuclei.is_empty() {
        return Vec::new();
    }

    let mut starts = Vec::with_capacity(nuclei.len());
    starts.push(0);
    for pair in nuclei.windows(2) {
        let between = pair[1] - pair[0] - 1;
        let boundary = if between < 2 { pair[0] + 1 } else { pair[0] + 2 };
        starts.push(boundary);
    }

    let mut syllables = Vec::with_capacity(nuclei.len());
    for (position, &nucleus_idx) in nuclei.iter().enumerate() {
        let start = starts[position];
        let end = starts.get(position + 1).copied().unwrap_or(phones.len());
        let next_nucleus = nuclei.get(position + 1).copied().unwrap_or(phones.len());

        let Some(nucleus) = phones[nucleus_idx].vowel() else {
            continue;
        };

        syllables.push(SyllableSpan {
            text: phones[start..end].iter().map(|p| p.text.as_str()).collect(),
            nucleus,
            position,
            coda: phones[nucleus_idx + 1..next_nucleus].to_vec(),
        });
    }

    syllables
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(text: &str) -> Vec<String> {
        syllabify(text).into_iter().map(|s| s.text).collect()
    }

    #[test]
    fn test_empty_and_vowelless() {
        assert!(syllabify("").is_empty());
        assert!(syllabify("   ").is_empty());
        assert!(syllabify("psszt, brr!").is_empty());
    }

    #[test]
    fn test_single_consonant_opens_next_syllable() {
        assert_eq!(texts("kapu"), vec!["ka", "pu"]);
    }

    #[test]
    fn test_two_consonants_split_after_first() {
        assert_eq!(texts("alma"), vec!["al", "ma"]);
        assert_eq!(texts("ontja"), vec!["on", "tja"]);
    }

    #[test]
    fn test_hiatus_forces_boundary() {
        assert_eq!(texts("Itália"), vec!["i", "tá", "li", "a"]);
        assert_eq!(texts("fiú"), vec!["fi", "ú"]);
    }

    #[test]
    fn test_digraph_counts_as_one_consonant() {
        // "ny" is one consonant, so "anya" splits like "ana".
        assert_eq!(texts("anya"), vec!["a", "nya"]);
        // "ny" + "v" is two consonants.
        assert_eq!(texts("könyvek"), vec!["köny", "vek"]);
    }

    #[test]
    fn test_runs_across_word_boundaries() {
        assert_eq!(texts("csak a"), vec!["csa", "ka"]);
        assert_eq!(texts("S most"), vec!["smost"]);
    }

    #[test]
    fn test_positions_and_nuclei() {
        let syllables = syllabify("Eddig Itália");
        assert_eq!(syllables.len(), 6);
        for (i, s) in syllables.iter().enumerate() {
            assert_eq!(s.position, i);
            assert_eq!(s.text.chars().filter(|&c| metron_lang::is_vowel(c)).count(), 1);
            assert!(s.text.contains(s.nucleus));
        }
        assert_eq!(syllables[3].nucleus, 'á');
    }

    #[test]
    fn test_coda_spans_to_next_nucleus() {
        let syllables = syllabify("Eddig");
        let coda: Vec<&str> = syllables[0].coda.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(coda, vec!["d", "d"]);
        let last: Vec<&str> = syllables[1].coda.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(last, vec!["g"]);
    }
}
