// Rhyme scheme analysis over stanzas.
//
// Pipeline per input:
// 1. Split the lines into stanzas at blank lines.
// 2. For each stanza, extract every line's rhyme ending and assign rhyme
//    classes in line order. A line joins the class of the first earlier
//    labeled line it strong-rhymes with. Otherwise it opens a new class if
//    it is one of the stanza's first two lines or some later line of the
//    stanza strong-rhymes with it; if neither, it stays unlabeled (`x`).
// 3. Classes with a single member are dropped to `x`, and the rest are
//    renamed `a`, `b`, ... in order of first appearance.
// 4. The label sequence is matched against the named four-line templates.
//
// Classes live in a per-stanza arena (`Vec<usize>` of member counts, indexed
// by class id); lines hold `Option<usize>` class ids. Nothing is removed
// from the arena during assignment, so ids stay stable until relabeling.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ending::{is_strong_rhyme, rhyme_ending};

/// Label of a line without a rhyme partner.
pub const UNRHYMED: &str = "x";

/// Label alphabet. `x` is reserved for unrhymed lines.
const LABEL_LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwyz";

/// Name of a stanza's rhyme scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SchemeName {
    #[serde(rename = "Half rhyme")]
    HalfRhyme,
    #[serde(rename = "Monorhyme")]
    Monorhyme,
    #[serde(rename = "Couplet rhyme")]
    CoupletRhyme,
    #[serde(rename = "Cross rhyme")]
    CrossRhyme,
    #[serde(rename = "Enclosed rhyme")]
    EnclosedRhyme,
    #[serde(rename = "Unknown rhyme form")]
    Unknown,
}

impl SchemeName {
    pub fn as_str(self) -> &'static str {
        match self {
            SchemeName::HalfRhyme => "Half rhyme",
            SchemeName::Monorhyme => "Monorhyme",
            SchemeName::CoupletRhyme => "Couplet rhyme",
            SchemeName::CrossRhyme => "Cross rhyme",
            SchemeName::EnclosedRhyme => "Enclosed rhyme",
            SchemeName::Unknown => "Unknown rhyme form",
        }
    }
}

impl fmt::Display for SchemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Templates tried in order. Upper-case letters are placeholders for
/// labels; `x` must match an unrhymed line.
const TEMPLATES: &[(&str, SchemeName)] = &[
    ("xAxA", SchemeName::HalfRhyme),
    ("AxAx", SchemeName::HalfRhyme),
    ("AAAA", SchemeName::Monorhyme),
    ("AABB", SchemeName::CoupletRhyme),
    ("ABAB", SchemeName::CrossRhyme),
    ("ABBA", SchemeName::EnclosedRhyme),
];

/// Labels and scheme name of one stanza.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StanzaScheme {
    pub labels: Vec<String>,
    pub name: SchemeName,
}

/// Result of analyzing a whole poem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RhymeSchemeResult {
    /// One label per non-blank input line, in input order.
    pub per_line_pattern: Vec<String>,
    /// The stanzas' common scheme name, or `Unknown` when they disagree or
    /// there are no stanzas.
    pub scheme_name: SchemeName,
    pub stanzas: Vec<StanzaScheme>,
}

/// Group lines into stanzas: maximal runs of non-blank lines.
pub fn split_stanzas<S: AsRef<str>>(lines: &[S]) -> Vec<Vec<&str>> {
    let mut stanzas = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in lines.iter().flat_map(|l| l.as_ref().lines()) {
        if line.trim().is_empty() {
            if !current.is_empty() {
                stanzas.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        stanzas.push(current);
    }
    stanzas
}

/// The display label of class number `index`: `a`..`z` without `x`, then
/// `aa`..`zz`, then `aaa`, ... Distinct indices give distinct labels.
pub fn class_label(index: usize) -> String {
    let n = LABEL_LETTERS.len();
    let mut rest = index + 1;
    let mut letters = Vec::new();
    while rest > 0 {
        rest -= 1;
        letters.push(char::from(LABEL_LETTERS[rest % n]));
        rest /= n;
    }
    letters.iter().rev().collect()
}

/// Assign rhyme labels to the lines of one stanza.
pub fn label_stanza(lines: &[&str]) -> Vec<String> {
    let endings: Vec<String> = lines.iter().map(|l| rhyme_ending(l)).collect();

    // Arena of rhyme classes: member count per class id.
    let mut class_sizes: Vec<usize> = Vec::new();
    let mut assigned: Vec<Option<usize>> = Vec::with_capacity(endings.len());

    for (i, ending) in endings.iter().enumerate() {
        // A line with no letters has nothing to rhyme on.
        if ending.is_empty() {
            assigned.push(None);
            continue;
        }
        let earlier = (0..i).find_map(|j| {
            let class = assigned[j]?;
            is_strong_rhyme(&endings[j], ending).then_some(class)
        });
        let class = match earlier {
            Some(class) => Some(class),
            None => {
                let has_partner = endings[i + 1..].iter().any(|e| is_strong_rhyme(ending, e));
                if i < 2 || has_partner {
                    class_sizes.push(0);
                    Some(class_sizes.len() - 1)
                } else {
                    None
                }
            }
        };
        if let Some(c) = class {
            class_sizes[c] += 1;
        }
        assigned.push(class);
    }

    // Dense relabel of the classes that found a partner.
    let mut renamed: Vec<Option<usize>> = vec![None; class_sizes.len()];
    let mut next = 0;
    assigned
        .iter()
        .map(|slot| match slot {
            Some(c) if class_sizes[*c] > 1 => {
                let index = *renamed[*c].get_or_insert_with(|| {
                    next += 1;
                    next - 1
                });
                class_label(index)
            }
            _ => UNRHYMED.to_string(),
        })
        .collect()
}

fn matches_template(labels: &[String], template: &str) -> bool {
    if labels.len() != template.chars().count() {
        return false;
    }
    // Placeholder letter -> the label it is bound to.
    let mut bound: Vec<(char, &str)> = Vec::new();
    for (placeholder, label) in template.chars().zip(labels) {
        let label = label.as_str();
        if placeholder == 'x' {
            if label != UNRHYMED {
                return false;
            }
            continue;
        }
        if label == UNRHYMED {
            return false;
        }
        match bound.iter().find(|(p, _)| *p == placeholder) {
            Some(&(_, l)) if l != label => return false,
            Some(_) => {}
            None => {
                if bound.iter().any(|&(_, l)| l == label) {
                    return false;
                }
                bound.push((placeholder, label));
            }
        }
    }
    true
}

/// Name a stanza's label sequence by the first template it fits.
pub fn name_scheme(labels: &[String]) -> SchemeName {
    TEMPLATES
        .iter()
        .find(|(template, _)| matches_template(labels, template))
        .map_or(SchemeName::Unknown, |&(_, name)| name)
}

/// Analyze the rhyme scheme of a poem given as lines. Blank lines separate
/// stanzas; each stanza is labeled on its own, starting again at `a`.
pub fn analyze_rhyme_scheme<S: AsRef<str>>(lines: &[S]) -> RhymeSchemeResult {
    let stanzas: Vec<StanzaScheme> = split_stanzas(lines)
        .iter()
        .map(|stanza| {
            let labels = label_stanza(stanza);
            let name = name_scheme(&labels);
            tracing::debug!(lines = stanza.len(), labels = %labels.join(""), %name, "stanza labeled");
            StanzaScheme { labels, name }
        })
        .collect();

    let per_line_pattern = stanzas.iter().flat_map(|s| s.labels.clone()).collect();
    let scheme_name = match stanzas.split_first() {
        Some((first, rest)) if rest.iter().all(|s| s.name == first.name) => first.name,
        _ => SchemeName::Unknown,
    };

    RhymeSchemeResult {
        per_line_pattern,
        scheme_name,
        stanzas,
    }
}
