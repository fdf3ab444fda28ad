// Verse form matcher: names the meter of a weight pattern.
//
// Three detectors, tried in order:
// 1. Hexameter: four free feet (dactyl `-UU` or spondee `--`, at least one
//    dactyl), a fixed dactyl in the fifth foot, and a two-syllable close.
// 2. Pentameter: a first hemistich from a fixed shape list followed by the
//    fixed second hemistich `-UU-UU-`, 14 symbols in total.
// 3. Catalog fallback: positional similarity against every catalog entry
//    (matching symbols at equal positions / length of the longer string),
//    best score wins, earlier entry wins ties.
//
// The hexameter and pentameter predicates are public because the distichon
// pass (`distichon.rs`) applies exactly the same rules to line pairs.
//
// A pattern may end in the indifferent marker `x`; it is stripped before the
// hexameter/pentameter checks and compared literally by the catalog fallback.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::forms::{Catalog, HEXAMETER, PENTAMETER, VerseForm};
use crate::weight::Weight;

const DACTYL: &str = "-UU";
const SPONDEE: &str = "--";

/// Number of feet before the fixed fifth foot of a hexameter.
const HEXAMETER_FREE_FEET: usize = 4;

/// Second half of a pentameter, never substituted.
const PENTAMETER_SECOND_HEMISTICH: &str = "-UU-UU-";

/// Admitted first-hemistich shapes of a pentameter.
// TODO: only the first shape survives the 14-symbol length check; a prosodist
// should decide whether the spondaic shapes are admitted at lengths 12 and 13.
const PENTAMETER_FIRST_HEMISTICHS: &[&str] = &["-UU-UU-", "---UU-", "-UU---", "-----"];

const PENTAMETER_LENGTH: usize = 14;

/// Overall rhythmic movement of a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// More short-long steps than long-short ones.
    Rising,
    /// More long-short steps than short-long ones.
    Falling,
    Mixed,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Rising => "rising",
            Direction::Falling => "falling",
            Direction::Mixed => "mixed",
        };
        f.write_str(name)
    }
}

/// A position where the scanned pattern departs from the matched form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Substitution {
    pub position: usize,
    pub expected: Weight,
    pub actual: Weight,
}

/// Which half of an elegiac couplet a line is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistichonHalf {
    Hexameter,
    Pentameter,
}

/// Display label of a scanned line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum VerseLabel {
    Exact(String),
    Approximate(String),
    Unknown,
    Distichon(DistichonHalf),
}

impl fmt::Display for VerseLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerseLabel::Exact(name) => write!(f, "+{name}"),
            VerseLabel::Approximate(name) => write!(f, "~{name}"),
            VerseLabel::Unknown => f.write_str("unknown form"),
            VerseLabel::Distichon(DistichonHalf::Hexameter) => f.write_str("distichon (hexameter)"),
            VerseLabel::Distichon(DistichonHalf::Pentameter) => {
                f.write_str("distichon (pentameter)")
            }
        }
    }
}

/// Outcome of matching one pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub form: Option<VerseForm>,
    pub is_approximate: bool,
    /// Similarity score of the matched form, 1.0 for exact matches.
    pub score: f64,
    pub substitutions: Vec<Substitution>,
    pub direction: Direction,
}

impl MatchResult {
    /// The label this match renders as, before any distichon relabeling.
    pub fn label(&self) -> VerseLabel {
        match &self.form {
            None => VerseLabel::Unknown,
            Some(form) if self.is_approximate => VerseLabel::Approximate(form.name.clone()),
            Some(form) => VerseLabel::Exact(form.name.clone()),
        }
    }
}

/// Drop one trailing indifferent marker, if present.
fn strip_indifferent(pattern: &str) -> &str {
    pattern.strip_suffix(VerseForm::ANCEPS).unwrap_or(pattern)
}

fn is_definite(pattern: &str) -> bool {
    pattern.chars().all(|c| Weight::from_symbol(c).is_some())
}

/// Greedily split `prefix` into dactyls and spondees. Returns `None` when
/// some stretch is neither.
fn scan_feet(prefix: &str) -> Option<Vec<&str>> {
    let mut feet = Vec::new();
    let mut rest = prefix;
    while !rest.is_empty() {
        let foot = if rest.starts_with(DACTYL) {
            DACTYL
        } else if rest.starts_with(SPONDEE) {
            SPONDEE
        } else {
            return None;
        };
        feet.push(foot);
        rest = &rest[foot.len()..];
    }
    Some(feet)
}

/// Whether `pattern` scans as a dactylic hexameter.
pub fn is_hexameter(pattern: &str) -> bool {
    let p = strip_indifferent(pattern);
    if !is_definite(p) || !(13..=17).contains(&p.len()) {
        return false;
    }
    if !(p.ends_with("--") || p.ends_with("-U")) {
        return false;
    }
    // Pattern symbols are ASCII, so byte offsets are symbol offsets.
    let fifth_foot_start = p.len() - 5;
    if &p[fifth_foot_start..fifth_foot_start + 3] != DACTYL {
        return false;
    }
    match scan_feet(&p[..fifth_foot_start]) {
        Some(feet) => feet.len() == HEXAMETER_FREE_FEET && feet.contains(&DACTYL),
        None => false,
    }
}

/// Whether `pattern` scans as an elegiac pentameter.
pub fn is_pentameter(pattern: &str) -> bool {
    let p = strip_indifferent(pattern);
    if !is_definite(p) {
        return false;
    }
    let Some(first) = p.strip_suffix(PENTAMETER_SECOND_HEMISTICH) else {
        return false;
    };
    PENTAMETER_FIRST_HEMISTICHS.contains(&first) && p.len() == PENTAMETER_LENGTH
}

/// Rising/falling/mixed by counting `U-` against `-U` steps.
pub fn direction_of(pattern: &str) -> Direction {
    let rising = pattern.matches("U-").count();
    let falling = pattern.matches("-U").count();
    if rising > falling {
        Direction::Rising
    } else if falling > rising {
        Direction::Falling
    } else {
        Direction::Mixed
    }
}

/// Positional similarity of a scanned pattern to a canonical one, in [0, 1].
pub fn similarity(pattern: &str, canonical: &str) -> f64 {
    let longer = pattern.chars().count().max(canonical.chars().count());
    if longer == 0 {
        return 0.0;
    }
    let matching = canonical
        .chars()
        .zip(pattern.chars())
        .filter(|&(expected, actual)| VerseForm::symbol_matches(expected, actual))
        .count();
    matching as f64 / longer as f64
}

/// Positions where `pattern` has a definite weight that differs from a
/// definite weight in `canonical`.
pub fn substitutions(pattern: &str, canonical: &str) -> Vec<Substitution> {
    canonical
        .chars()
        .zip(pattern.chars())
        .enumerate()
        .filter_map(|(position, (e, a))| {
            let expected = Weight::from_symbol(e)?;
            let actual = Weight::from_symbol(a)?;
            (expected != actual).then_some(Substitution {
                position,
                expected,
                actual,
            })
        })
        .collect()
}

/// Match a pattern against the elegiac detectors, then the catalog.
pub fn match_pattern(pattern: &str, catalog: &Catalog) -> MatchResult {
    let direction = direction_of(pattern);

    let elegiac = if is_hexameter(pattern) {
        Some((HEXAMETER, VerseForm::hexameter as fn() -> VerseForm))
    } else if is_pentameter(pattern) {
        Some((PENTAMETER, VerseForm::pentameter as fn() -> VerseForm))
    } else {
        None
    };
    if let Some((name, builtin)) = elegiac {
        tracing::debug!(pattern, form = name, "elegiac detector matched");
        return MatchResult {
            form: Some(catalog.get(name).cloned().unwrap_or_else(builtin)),
            is_approximate: false,
            score: 1.0,
            substitutions: Vec::new(),
            direction,
        };
    }

    let mut best: Option<&VerseForm> = None;
    let mut best_score = 0.0;
    for form in catalog.forms() {
        let score = similarity(pattern, &form.pattern);
        if score > best_score {
            best_score = score;
            best = Some(form);
        }
    }

    match best {
        Some(form) => {
            tracing::debug!(pattern, form = %form.name, score = best_score, "catalog match");
            MatchResult {
                form: Some(form.clone()),
                is_approximate: best_score < 1.0,
                score: best_score,
                substitutions: substitutions(pattern, &form.pattern),
                direction,
            }
        }
        None => {
            tracing::debug!(pattern, "no verse form matched");
            MatchResult {
                form: None,
                is_approximate: false,
                score: 0.0,
                substitutions: Vec::new(),
                direction,
            }
        }
    }
}
