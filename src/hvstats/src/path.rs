//! Range table path options
//!
//! Names are structured as `quality (prefix) (category) slot (suffix)`, but
//! the range table's keys do not line up with the name grammar: for weapons
//! the path to a `{min, max}` entry is
//!
//! ```text
//! slot -> quality -> stat -> "prefix | suffix"
//! ```
//!
//! and armor adds a leading category key:
//!
//! ```text
//! category -> slot -> quality -> stat -> "prefix | suffix"
//! ```
//!
//! Since most of the name is optional, which word is which key can be
//! ambiguous ("Average Axe of Slaughter" is quality + slot + suffix, "Average
//! Cotton Pants" is quality + category + slot). Instead of keeping a whitelist
//! of each key's words, every plausible grouping is produced here and the
//! percentile lookup keeps the first one that resolves against real data.

use serde::Serialize;

/// Tokens dropped before grouping. They show up inside compound type names
/// and never name a key of their own.
const CONNECTORS: &[&str] = &["of", "the", "shield", "staff"];

/// Name token count outside the 2..=5 range the grouping rules cover
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Equip name {name:?} has {tokens} significant words, expected 2 to 5")]
pub struct AmbiguityError {
    pub name: String,
    pub tokens: usize,
}

/// One candidate mapping of name tokens onto range table keys
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathOption {
    pub quality: String,
    pub prefix: Option<String>,
    pub category: Option<String>,
    pub slot: String,
    pub suffix: Option<String>,
}

impl PathOption {
    fn new(quality: &str, slot: &str) -> Self {
        Self {
            quality: quality.to_string(),
            prefix: None,
            category: None,
            slot: slot.to_string(),
            suffix: None,
        }
    }

    fn prefix(mut self, prefix: &str) -> Self {
        self.prefix = Some(prefix.to_string());
        self
    }

    fn category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    fn suffix(mut self, suffix: &str) -> Self {
        self.suffix = Some(suffix.to_string());
        self
    }

    /// Copy of this option with the quality replaced
    pub fn with_quality(&self, quality: &str) -> Self {
        Self {
            quality: quality.to_string(),
            ..self.clone()
        }
    }
}

impl std::fmt::Display for PathOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let opt = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".to_string());
        write!(
            f,
            "quality={} prefix={} category={} slot={} suffix={}",
            self.quality,
            opt(&self.prefix),
            opt(&self.category),
            self.slot,
            opt(&self.suffix)
        )
    }
}

/// Enumerate the candidate range table paths for an equip name.
///
/// Options come back in the order they should be tried. A suffix can appear
/// alone but a prefix always comes with a suffix, which is why four tokens
/// never produce a `(quality, prefix, category, slot)` grouping.
pub fn enumerate_path_options(name: &str) -> Result<Vec<PathOption>, AmbiguityError> {
    let parts: Vec<&str> = name
        .split_whitespace()
        .filter(|p| !CONNECTORS.iter().any(|c| c.eq_ignore_ascii_case(p)))
        .collect();

    let options = match parts.as_slice() {
        [quality, slot] => vec![PathOption::new(quality, slot)],
        [quality, a, b] => vec![
            PathOption::new(quality, b).category(a),
            PathOption::new(quality, a).suffix(b),
        ],
        [quality, a, b, c] => vec![
            PathOption::new(quality, b).prefix(a).suffix(c),
            PathOption::new(quality, b).category(a).suffix(c),
        ],
        [quality, prefix, category, slot, suffix] => vec![PathOption::new(quality, slot)
            .prefix(prefix)
            .category(category)
            .suffix(suffix)],
        _ => {
            return Err(AmbiguityError {
                name: name.to_string(),
                tokens: parts.len(),
            })
        }
    };

    Ok(options)
}
