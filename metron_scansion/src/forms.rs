// Verse-form catalog: the static table of named feet, cola, and periods.
//
// Each entry has a canonical weight pattern over `-` (long), `U` (short),
// and the wildcard `x` (anceps, either weight). The default catalog is
// embedded from `data/verse_forms.json` at compile time and parsed once per
// process. Callers can load a replacement catalog from JSON; it goes through
// the same validation (known symbols, unique names, consistent mora count).
//
// Entry order matters: the matcher's tie-break is "first entry wins", so the
// catalog is kept as an ordered Vec, never a map.

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::ScanError;
use crate::pattern::pattern_mora;
use crate::weight::Weight;

/// Name of the hexameter entry in the default catalog.
pub const HEXAMETER: &str = "hexameter";
/// Name of the pentameter entry in the default catalog.
pub const PENTAMETER: &str = "pentameter";

/// Structural size of a verse form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormCategory {
    /// A single metrical foot (dactyl, iamb, ...).
    Foot,
    /// A short fixed sequence below line length (adonic, hemiepes, ...).
    Colon,
    /// A full line (hexameter, sapphic hendecasyllable, ...).
    Period,
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseForm {
    pub name: String,
    /// Canonical pattern over `-`, `U`, and `x`.
    pub pattern: String,
    pub mora_count: u32,
    pub category: FormCategory,
}

impl VerseForm {
    /// Wildcard symbol: matches either weight.
    pub const ANCEPS: char = 'x';

    pub fn new(name: &str, pattern: &str, category: FormCategory) -> Self {
        VerseForm {
            name: name.to_string(),
            pattern: pattern.to_string(),
            mora_count: pattern_mora(pattern),
            category,
        }
    }

    /// Dactylic hexameter with five dactyls and a closing spondee.
    pub fn hexameter() -> Self {
        Self::new(HEXAMETER, "-UU-UU-UU-UU-UU--", FormCategory::Period)
    }

    /// Elegiac pentameter: two hemiepes.
    pub fn pentameter() -> Self {
        Self::new(PENTAMETER, "-UU-UU--UU-UU-", FormCategory::Period)
    }

    /// Whether `actual` satisfies the canonical symbol `expected`.
    pub fn symbol_matches(expected: char, actual: char) -> bool {
        expected == Self::ANCEPS || expected == actual
    }

    fn validate(&self) -> Result<(), ScanError> {
        if self.name.trim().is_empty() {
            return Err(ScanError::invalid_form(&self.name, "name is empty"));
        }
        if self.pattern.is_empty() {
            return Err(ScanError::invalid_form(&self.name, "pattern is empty"));
        }
        if let Some(bad) = self
            .pattern
            .chars()
            .find(|&c| c != Self::ANCEPS && Weight::from_symbol(c).is_none())
        {
            return Err(ScanError::invalid_form(
                &self.name,
                format!("unknown pattern symbol '{bad}'"),
            ));
        }
        let expected = pattern_mora(&self.pattern);
        if self.mora_count != expected {
            return Err(ScanError::invalid_form(
                &self.name,
                format!("mora_count is {} but the pattern sums to {expected}", self.mora_count),
            ));
        }
        Ok(())
    }
}

/// The top-level JSON structure for a catalog file.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    forms: Vec<VerseForm>,
}

/// An ordered, validated list of verse forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    forms: Vec<VerseForm>,
}

impl Catalog {
    /// Build a catalog from entries, validating each one.
    pub fn new(forms: Vec<VerseForm>) -> Result<Self, ScanError> {
        let mut seen = BTreeSet::new();
        for form in &forms {
            form.validate()?;
            if !seen.insert(form.name.as_str()) {
                return Err(ScanError::DuplicateForm {
                    name: form.name.clone(),
                });
            }
        }
        Ok(Catalog { forms })
    }

    /// Parse a catalog from a JSON string of the form `{"forms": [...]}`.
    pub fn from_json(json: &str) -> Result<Self, ScanError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.forms)
    }

    /// Read and parse a catalog JSON file.
    pub fn load(path: &Path) -> Result<Self, ScanError> {
        let data = std::fs::read_to_string(path).map_err(|source| ScanError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&data)?;
        tracing::debug!(path = %path.display(), forms = catalog.len(), "loaded verse-form catalog");
        Ok(catalog)
    }

    /// All entries, in catalog order.
    pub fn forms(&self) -> &[VerseForm] {
        &self.forms
    }

    /// Look up an entry by name.
    pub fn get(&self, name: &str) -> Option<&VerseForm> {
        self.forms.iter().find(|f| f.name == name)
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }
}

static DEFAULT_CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::from_json(include_str!("../data/verse_forms.json"))
        .expect("embedded verse_forms.json is malformed")
});

/// The catalog embedded at compile time.
pub fn default_catalog() -> &'static Catalog {
    &DEFAULT_CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_loads() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 43);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_default_catalog_category_counts() {
        let count = |cat: FormCategory| {
            default_catalog()
                .forms()
                .iter()
                .filter(|f| f.category == cat)
                .count()
        };
        assert_eq!(count(FormCategory::Foot), 24);
        assert_eq!(count(FormCategory::Colon), 7);
        assert_eq!(count(FormCategory::Period), 12);
    }

    #[test]
    fn test_default_catalog_has_elegiac_forms() {
        let catalog = default_catalog();
        assert_eq!(catalog.get(HEXAMETER), Some(&VerseForm::hexameter()));
        assert_eq!(catalog.get(PENTAMETER), Some(&VerseForm::pentameter()));
        assert!(catalog.get("limerick").is_none());
    }

    #[test]
    fn test_builtin_mora_counts() {
        assert_eq!(VerseForm::hexameter().mora_count, 24);
        assert_eq!(VerseForm::pentameter().mora_count, 20);
    }

    #[test]
    fn test_symbol_matches_wildcard() {
        assert!(VerseForm::symbol_matches('x', '-'));
        assert!(VerseForm::symbol_matches('x', 'U'));
        assert!(VerseForm::symbol_matches('-', '-'));
        assert!(!VerseForm::symbol_matches('-', 'U'));
        assert!(!VerseForm::symbol_matches('U', 'x'));
    }

    #[test]
    fn test_rejects_unknown_symbol() {
        let json = r#"{"forms": [{"name": "odd", "pattern": "-?-", "mora_count": 6, "category": "foot"}]}"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(matches!(err, ScanError::InvalidForm { .. }), "got {err:?}");
    }

    #[test]
    fn test_rejects_wrong_mora_count() {
        let json = r#"{"forms": [{"name": "iamb", "pattern": "U-", "mora_count": 4, "category": "foot"}]}"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(err.to_string().contains("mora_count"), "got {err}");
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let forms = vec![
            VerseForm::new("iamb", "U-", FormCategory::Foot),
            VerseForm::new("iamb", "U-", FormCategory::Foot),
        ];
        let err = Catalog::new(forms).unwrap_err();
        assert!(matches!(err, ScanError::DuplicateForm { ref name } if name == "iamb"));
    }

    #[test]
    fn test_rejects_empty_pattern_and_name() {
        assert!(Catalog::new(vec![VerseForm::new("", "U-", FormCategory::Foot)]).is_err());
        assert!(Catalog::new(vec![VerseForm::new("void", "", FormCategory::Foot)]).is_err());
    }

    #[test]
    fn test_malformed_json_is_json_error() {
        let err = Catalog::from_json("{not json").unwrap_err();
        assert!(matches!(err, ScanError::Json(_)));
    }

    #[test]
    fn test_category_serde() {
        let json = serde_json::to_string(&FormCategory::Colon).unwrap();
        assert_eq!(json, "\"colon\"");
    }
}
