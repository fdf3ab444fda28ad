// Quantitative meter scansion for Hungarian (and classically named) verse.
//
// Takes lines of text and produces, per line, syllables with long/short
// weights, the weight pattern (`-` long, `U` short), syllable and mora
// counts, the best-matching verse form, and the rhythmic direction. A
// post-pass over the whole sequence relabels hexameter + pentameter pairs as
// distichs.
//
// Architecture (leaves first):
// - `syllabify.rs`: Splits a line into syllables around vowel nuclei
// - `weight.rs`:    `Weight` (long/short) and the per-syllable classifier
// - `pattern.rs`:   `Syllable`, `Line`: pattern, syllable count, morae
// - `forms.rs`:     `VerseForm`, `Catalog`: embedded verse-form table
// - `matcher.rs`:   Hexameter/pentameter detectors, catalog similarity,
//                   direction, display labels
// - `distichon.rs`: Couplet relabeling over a scanned sequence
// - `config.rs`:    `ScanConfig`: batch parallelism, distich pass, catalog path
// - `error.rs`:     `ScanError` for config/catalog loading
// - `lib.rs` (this file): `Scanner`: ties the stages together
//
// Analysis never fails: empty or vowel-less lines produce empty patterns and
// an "unknown form" label. Every operation is a pure function of its input
// and the catalog, so a `Scanner` can be shared freely across threads.

pub mod config;
pub mod distichon;
pub mod error;
pub mod forms;
pub mod matcher;
pub mod pattern;
pub mod syllabify;
pub mod weight;

use std::borrow::Cow;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

// Re-export key types at crate root for convenience.
pub use config::ScanConfig;
pub use error::ScanError;
pub use forms::{Catalog, FormCategory, VerseForm, default_catalog};
pub use matcher::{
    Direction, DistichonHalf, MatchResult, Substitution, VerseLabel, is_hexameter, is_pentameter,
};
pub use pattern::{Line, Syllable, build_line};
pub use weight::Weight;

/// A scanned line together with its verse-form match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScannedLine {
    pub line: Line,
    pub matched: MatchResult,
    /// What the line displays as. Starts as `matched.label()`; the distichon
    /// pass may overwrite it.
    pub label: VerseLabel,
    pub is_distichon_part: bool,
}

/// The scansion engine: a verse-form catalog plus execution settings.
#[derive(Debug, Clone)]
pub struct Scanner {
    catalog: Cow<'static, Catalog>,
    config: ScanConfig,
}

impl Default for Scanner {
    fn default() -> Self {
        Scanner {
            catalog: Cow::Borrowed(default_catalog()),
            config: ScanConfig::default(),
        }
    }
}

impl Scanner {
    pub fn new(catalog: Catalog, config: ScanConfig) -> Self {
        Scanner {
            catalog: Cow::Owned(catalog),
            config,
        }
    }

    /// Build a scanner from a config, loading the catalog it names (or
    /// using the embedded one).
    pub fn from_config(config: ScanConfig) -> Result<Self, ScanError> {
        let catalog = match &config.catalog_path {
            Some(path) => Cow::Owned(Catalog::load(path)?),
            None => Cow::Borrowed(default_catalog()),
        };
        Ok(Scanner { catalog, config })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Match a bare weight pattern against the elegiac detectors and catalog.
    pub fn classify_pattern(&self, pattern: &str) -> MatchResult {
        matcher::match_pattern(pattern, &self.catalog)
    }

    /// Scan one line: syllables, weights, pattern, verse form, direction.
    pub fn analyze_line(&self, text: &str) -> ScannedLine {
        let line = build_line(text);
        let matched = self.classify_pattern(&line.pattern);
        let label = matched.label();
        tracing::debug!(pattern = %line.pattern, label = %label, "scanned line");
        ScannedLine {
            line,
            matched,
            label,
            is_distichon_part: false,
        }
    }

    /// Scan a multi-line text: one result per non-blank line, in order,
    /// followed by the distichon pass.
    pub fn analyze_lines(&self, text: &str) -> Vec<ScannedLine> {
        let lines: Vec<&str> = text.lines().collect();
        self.analyze_batch(&lines)
    }

    /// Scan a batch of lines, skipping blank ones. Large batches run in
    /// parallel; the output order always follows the input order.
    pub fn analyze_batch<S: AsRef<str> + Sync>(&self, lines: &[S]) -> Vec<ScannedLine> {
        let texts: Vec<&str> = lines
            .iter()
            .map(AsRef::as_ref)
            .filter(|l| !l.trim().is_empty())
            .collect();

        let mut scanned: Vec<ScannedLine> = if texts.len() >= self.config.parallel_min_lines {
            tracing::debug!(lines = texts.len(), "scanning batch in parallel");
            texts.par_iter().map(|t| self.analyze_line(t)).collect()
        } else {
            texts.iter().map(|t| self.analyze_line(t)).collect()
        };

        if self.config.detect_distichs {
            distichon::mark_distichs(&mut scanned);
        }
        scanned
    }
}

/// Scan one line with the embedded catalog.
pub fn analyze_line(text: &str) -> ScannedLine {
    Scanner::default().analyze_line(text)
}

/// Scan a multi-line text with the embedded catalog and default settings.
pub fn analyze_lines(text: &str) -> Vec<ScannedLine> {
    Scanner::default().analyze_lines(text)
}

/// Match a weight pattern against the embedded catalog.
pub fn classify_pattern(pattern: &str) -> MatchResult {
    Scanner::default().classify_pattern(pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPIGRAM: &str = "Eddig Itália földjén termettek csak a könyvek,\n\
                           S most Pannónia is ontja a szép dalokat.";

    const COUPLET: &str = "Eddig Itália földjén termettek csak a könyvek\n\
                           Csak te maradsz nekem itt, csak te ragyogsz a homály";

    #[test]
    fn test_analyze_line_hexameter() {
        let scanned = analyze_line("Eddig Itália földjén termettek csak a könyvek");
        assert_eq!(scanned.line.pattern, "-UU-UU-----UU--");
        assert_eq!(scanned.line.syllable_count, 15);
        assert_eq!(scanned.label.to_string(), "+hexameter");
        assert!(!scanned.is_distichon_part);
    }

    #[test]
    fn test_analyze_lines_skips_blank_lines() {
        let scanned = analyze_lines("\nEddig Itália\n   \n\nföldjén\n");
        assert_eq!(scanned.len(), 2);
        assert_eq!(scanned[0].line.raw_text, "Eddig Itália");
        assert_eq!(scanned[1].line.raw_text, "földjén");
    }

    #[test]
    fn test_analyze_lines_marks_distichon() {
        let scanned = analyze_lines(COUPLET);
        assert_eq!(scanned.len(), 2);
        assert!(scanned[0].is_distichon_part);
        assert!(scanned[1].is_distichon_part);
        assert_eq!(scanned[0].label, VerseLabel::Distichon(DistichonHalf::Hexameter));
        assert_eq!(scanned[1].label, VerseLabel::Distichon(DistichonHalf::Pentameter));
        // The underlying match is kept.
        assert_eq!(scanned[1].matched.label().to_string(), "+pentameter");
    }

    #[test]
    fn test_epigram_second_line_is_not_pentameter() {
        let scanned = analyze_lines(EPIGRAM);
        assert_eq!(scanned.len(), 2);
        assert_eq!(scanned[1].line.syllable_count, 13);
        assert!(!scanned[0].is_distichon_part);
        assert!(!scanned[1].is_distichon_part);
        assert_eq!(scanned[0].label.to_string(), "+hexameter");
    }

    #[test]
    fn test_distich_pass_can_be_disabled() {
        let config = ScanConfig {
            detect_distichs: false,
            ..ScanConfig::default()
        };
        let scanner = Scanner::new(default_catalog().clone(), config);
        let scanned = scanner.analyze_lines(COUPLET);
        assert!(scanned.iter().all(|l| !l.is_distichon_part));
    }

    #[test]
    fn test_parallel_batch_matches_sequential() {
        let lines: Vec<String> = (0..40)
            .map(|i| match i % 3 {
                0 => "Eddig Itália földjén termettek csak a könyvek".to_string(),
                1 => "Csak te maradsz nekem itt, csak te ragyogsz a homály".to_string(),
                _ => format!("a kert {i}"),
            })
            .collect();

        let sequential = Scanner::new(
            default_catalog().clone(),
            ScanConfig {
                parallel_min_lines: usize::MAX,
                ..ScanConfig::default()
            },
        );
        let parallel = Scanner::new(
            default_catalog().clone(),
            ScanConfig {
                parallel_min_lines: 1,
                ..ScanConfig::default()
            },
        );
        assert_eq!(sequential.analyze_batch(&lines), parallel.analyze_batch(&lines));
    }

    #[test]
    fn test_vowelless_line_is_unknown() {
        let scanned = analyze_line("123 !?");
        assert!(scanned.line.is_empty());
        assert!(scanned.matched.form.is_none());
        assert_eq!(scanned.label.to_string(), "unknown form");
    }

    #[test]
    fn test_classify_pattern_free_function() {
        let result = classify_pattern("-UU-UU-UU-UU-UU--");
        assert_eq!(result.form, Some(VerseForm::hexameter()));
        assert_eq!(classify_pattern("U-").label().to_string(), "+iamb");
    }

    #[test]
    fn test_from_config_default_catalog() {
        let scanner = Scanner::from_config(ScanConfig::default()).unwrap();
        assert_eq!(scanner.catalog(), default_catalog());
        assert_eq!(scanner.config(), &ScanConfig::default());
    }

    #[test]
    fn test_from_config_missing_catalog_file() {
        let config = ScanConfig {
            catalog_path: Some("/nonexistent/forms.json".into()),
            ..ScanConfig::default()
        };
        assert!(matches!(Scanner::from_config(config), Err(ScanError::Io { .. })));
    }
}
