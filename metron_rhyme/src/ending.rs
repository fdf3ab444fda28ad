// Word endings and the sound comparisons built on them.
//
// Two different "tails" of a line are used:
// - `rhyme_ending`: from the last vowel of the last word to its end. Used by
//   the scheme analyzer, compared with `is_strong_rhyme`.
// - `rhyming_part`: from the second-to-last vowel of the last word. Used by
//   the pair classifier to decide a clean rhyme, so that words sharing only
//   a final vowel (`alma`/`falka`) do not count as clean.
//
// `split_word_syllables` is the rhyme engine's own syllable splitter. It
// works on single characters (no digraphs) and only serves to read off the
// rhythm of a word's last two syllables; metrical scansion of whole lines
// uses `metron_scansion::syllabify` instead.

use metron_lang::{are_similar_consonants, clean_word, consonant_units, is_long_vowel, is_vowel};

/// Rhythm symbol of a long (closed or long-vowelled) syllable.
pub const LONG_RHYTHM: char = '-';
/// Rhythm symbol of an open syllable with a short vowel.
pub const SHORT_RHYTHM: char = 'U';

/// The cleaned last word of a line: lower case, letters only. Trailing
/// tokens with no letters (a dash, an ellipsis) are skipped.
pub fn last_word(line: &str) -> String {
    line.split_whitespace()
        .rev()
        .map(clean_word)
        .find(|word| !word.is_empty())
        .unwrap_or_default()
}

/// Byte offsets of the vowels in `word`.
fn vowel_offsets(word: &str) -> Vec<usize> {
    word.char_indices()
        .filter(|&(_, c)| is_vowel(c))
        .map(|(i, _)| i)
        .collect()
}

/// Ending of a line for scheme analysis: the last word from its last vowel
/// onward. A word without vowels is kept whole.
pub fn rhyme_ending(line: &str) -> String {
    let word = last_word(line);
    match vowel_offsets(&word).last() {
        Some(&start) => word[start..].to_string(),
        None => word,
    }
}

/// Comparison key for clean rhymes: the last word from its second-to-last
/// vowel onward. One-vowel words start at that vowel; vowelless words are
/// kept whole. A one-vowel word therefore never shares its key with a longer
/// word ending in the same syllable (`szám` is `ám`, `hazám` is `azám`).
pub fn rhyming_part(text: &str) -> String {
    let word = last_word(text);
    let offsets = vowel_offsets(&word);
    let start = match offsets.len() {
        0 => 0,
        1 => offsets[0],
        n => offsets[n - 2],
    };
    word[start..].to_string()
}

/// The vowels of `text`, in order.
pub fn vowel_skeleton(text: &str) -> String {
    text.chars().filter(|&c| is_vowel(c)).collect()
}

/// The consonant letters of `text`, in order. Spaces and punctuation are
/// not consonants.
pub fn consonant_skeleton(text: &str) -> String {
    text.chars()
        .filter(|&c| c.is_alphabetic() && !is_vowel(c))
        .collect()
}

/// The letters after the last vowel of an ending.
fn trailing_cluster(ending: &str) -> &str {
    match ending.char_indices().rfind(|&(_, c)| is_vowel(c)) {
        Some((i, c)) => &ending[i + c.len_utf8()..],
        None => ending,
    }
}

/// Strong rhyme between two endings: identical vowel sequences, and
/// trailing consonant clusters that are identical or pairwise similar
/// unit by unit (`d`/`t`, `ny`/`n`, ...).
pub fn is_strong_rhyme(a: &str, b: &str) -> bool {
    if vowel_skeleton(a) != vowel_skeleton(b) {
        return false;
    }
    let (tail_a, tail_b) = (trailing_cluster(a), trailing_cluster(b));
    if tail_a == tail_b {
        return true;
    }
    let units_a = consonant_units(tail_a);
    let units_b = consonant_units(tail_b);
    units_a.len() == units_b.len()
        && units_a
            .iter()
            .zip(&units_b)
            .all(|(x, y)| are_similar_consonants(x, y))
}

/// Split a cleaned word into syllables, one vowel each. Between two vowels,
/// the last consonant opens the next syllable and any others close the
/// previous one. Leading consonants join the first syllable, trailing ones
/// the last.
pub fn split_word_syllables(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let nuclei: Vec<usize> = chars
        .iter()
        .enumerate()
        .filter(|&(_, &c)| is_vowel(c))
        .map(|(i, _)| i)
        .collect();
    if nuclei.is_empty() {
        return Vec::new();
    }

    let mut starts = vec![0];
    for pair in nuclei.windows(2) {
        let (prev, next) = (pair[0], pair[1]);
        starts.push(if next - prev > 1 { next - 1 } else { next });
    }

    let mut syllables = Vec::with_capacity(starts.len());
    for (i, &start) in starts.iter().enumerate() {
        let end = starts.get(i + 1).copied().unwrap_or(chars.len());
        syllables.push(chars[start..end].iter().collect());
    }
    syllables
}

/// Rhythm of one syllable: long if it ends in a consonant or holds a long
/// vowel, short otherwise.
pub fn rhythm_shape(syllable: &str) -> char {
    let closed = syllable.chars().next_back().is_some_and(|c| !is_vowel(c));
    if closed || syllable.chars().any(is_long_vowel) {
        LONG_RHYTHM
    } else {
        SHORT_RHYTHM
    }
}

/// Rhythm of the last two syllables of a text's last word, e.g. `"U-"`.
/// Shorter when the word has fewer than two syllables.
pub fn final_rhythm(text: &str) -> String {
    let syllables = split_word_syllables(&last_word(text));
    let skip = syllables.len().saturating_sub(2);
    syllables[skip..].iter().map(|s| rhythm_shape(s)).collect()
}
