// Shared Hungarian orthography crate.
//
// Provides the letter-level knowledge both analysis engines need:
// `metron_scansion` (syllabification and syllable weight) and `metron_rhyme`
// (rhyme endings and phonetic similarity). No analysis logic lives here.
//
// Architecture:
// - `orthography.rs`: Static tables: vowels, long vowels, digraphs,
//   aspirated clusters, diphthongs, similar consonant pairs
// - `phone.rs`: Tokenizer from raw text to vowel/consonant letter units
//
// Determinism constraint: every function is a pure function of its input.

pub mod orthography;
pub mod phone;

// Re-export key items at crate root for convenience.
pub use orthography::{
    are_similar_consonants, contains_diphthong, is_consonant_digraph, is_long_vowel,
    is_non_lengthening_cluster, is_vowel,
};
pub use phone::{Phone, PhoneKind, clean_word, consonant_units, tokenize_line};
