// Rhyme engine: stanza rhyme schemes and rhyme pair types.
//
// Independent of the scansion engine; shares only the orthography tables in
// `metron_lang`. Both entry points are pure functions of their input.
//
// Architecture:
// - `ending.rs`:     Rhyme endings, vowel/consonant skeletons, the strong
//                    rhyme test, and the word-level rhythm splitter
// - `scheme.rs`:     Stanza segmentation, rhyme-letter assignment and
//                    cleanup, template naming (`analyze_rhyme_scheme`)
// - `rhyme_type.rs`: `RhymeType` and the pair classifier cascade
//                    (`classify_rhyme_type`)

pub mod ending;
pub mod rhyme_type;
pub mod scheme;

// Re-export key items at crate root for convenience.
pub use ending::{is_strong_rhyme, rhyme_ending};
pub use rhyme_type::{RhymeType, classify_rhyme_type};
pub use scheme::{RhymeSchemeResult, SchemeName, StanzaScheme, analyze_rhyme_scheme};
