// Poem report: per-line scansion joined with the rhyme scheme.
//
// The scanner and the rhyme analyzer both skip blank lines, so their outputs
// line up one to one; `build_report` zips them. The report serializes to
// JSON as-is, and `render_text` lays it out as an aligned table followed by
// the scheme summary.

use std::fmt::Write as _;

use metron_rhyme::{RhymeSchemeResult, analyze_rhyme_scheme};
use metron_scansion::{ScannedLine, Scanner};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct LineReport {
    #[serde(flatten)]
    pub scan: ScannedLine,
    /// Rendered verse label, e.g. `+hexameter` or `~iamb`.
    pub display_label: String,
    /// Rhyme letter within the line's stanza.
    pub rhyme: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PoemReport {
    pub lines: Vec<LineReport>,
    pub rhyme: RhymeSchemeResult,
}

/// Scan and rhyme-analyze a whole poem.
pub fn build_report(scanner: &Scanner, text: &str) -> PoemReport {
    let scanned = scanner.analyze_lines(text);
    let raw_lines: Vec<&str> = text.lines().collect();
    let rhyme = analyze_rhyme_scheme(&raw_lines);

    let lines = scanned
        .into_iter()
        .zip(rhyme.per_line_pattern.iter())
        .map(|(scan, label)| LineReport {
            display_label: scan.label.to_string(),
            rhyme: label.clone(),
            scan,
        })
        .collect();

    PoemReport { lines, rhyme }
}

/// Render a report as a plain-text table.
pub fn render_text(report: &PoemReport) -> String {
    let width = report
        .lines
        .iter()
        .map(|l| l.scan.line.pattern.len())
        .max()
        .unwrap_or(0)
        .max("pattern".len());

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>3}  {:<width$}  {:>4}  {:>5}  {:<24}  {:<8}  {}",
        "#", "pattern", "syl", "morae", "label", "dir", "rhyme"
    );
    for (i, l) in report.lines.iter().enumerate() {
        let line = &l.scan.line;
        let _ = writeln!(
            out,
            "{:>3}  {:<width$}  {:>4}  {:>5}  {:<24}  {:<8}  {}",
            i + 1,
            line.pattern,
            line.syllable_count,
            line.mora_count,
            l.display_label,
            l.scan.matched.direction.to_string(),
            l.rhyme,
        );
        let _ = writeln!(out, "     {}", line.raw_text.trim());
    }

    let _ = writeln!(out);
    let _ = write!(out, "Rhyme scheme: {}", report.rhyme.scheme_name);
    if report.rhyme.stanzas.len() > 1 {
        for (i, stanza) in report.rhyme.stanzas.iter().enumerate() {
            let _ = write!(
                out,
                "\n  stanza {}: {} ({})",
                i + 1,
                stanza.labels.concat(),
                stanza.name
            );
        }
    }
    out
}
