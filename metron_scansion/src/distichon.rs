// Distichon detection: relabels hexameter + pentameter couplets.
//
// Runs once over the full, ordered sequence of scanned lines, after every
// line has been matched on its own. Lines are taken in fixed pairs
// (0,1), (2,3), ...; when the first line of a pair is a hexameter and the
// second a pentameter (by the same predicates the matcher uses), both are
// relabeled as halves of a distichon. Pairs are never re-examined, and a
// line that already belongs to an earlier pair is never reconsidered.

use crate::ScannedLine;
use crate::matcher::{DistichonHalf, VerseLabel, is_hexameter, is_pentameter};

/// Relabel elegiac couplets in place. Returns the number of couplets found.
pub fn mark_distichs(lines: &mut [ScannedLine]) -> usize {
    let mut found = 0;
    for pair in lines.chunks_exact_mut(2) {
        let [hexameter, pentameter] = pair else {
            continue;
        };
        if is_hexameter(&hexameter.line.pattern) && is_pentameter(&pentameter.line.pattern) {
            hexameter.label = VerseLabel::Distichon(DistichonHalf::Hexameter);
            hexameter.is_distichon_part = true;
            pentameter.label = VerseLabel::Distichon(DistichonHalf::Pentameter);
            pentameter.is_distichon_part = true;
            found += 1;
        }
    }
    tracing::debug!(lines = lines.len(), couplets = found, "distichon pass");
    found
}
