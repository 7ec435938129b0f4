//! Stat range table
//!
//! Third-party snapshot of observed min/max natural rolls. Weapons are keyed
//! `slot -> quality -> stat -> "prefix | suffix"`, armor adds a leading
//! category: `category -> slot -> quality -> stat -> "prefix | suffix"`.
//!
//! ```json
//! {
//!   "Axe": {
//!     "Legendary": {
//!       "lastUpdate": 1580056121,
//!       "Attack Damage": {
//!         "all | Slaughter": { "min": 67.72, "max": 75.92 },
//!         "all | not!Slaughter": { "min": 53.39, "max": 59.87 }
//!       }
//!     }
//!   }
//! }
//! ```
//!
//! Key order is kept as written because affix entries are scanned first match
//! wins. All key comparisons ignore case so lower-cased names still resolve.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use crate::path::PathOption;

/// Errors that can occur while loading a range table
#[derive(Debug, thiserror::Error)]
pub enum RangeError {
    #[error("Failed to read range table {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid range table JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Range table root must be a JSON object")]
    NotAnObject,
}

/// Observed natural roll range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

/// A node of the range table
#[derive(Debug, Clone, PartialEq)]
pub enum RangeNode {
    Branch(Vec<(String, RangeNode)>),
    Bounds(Bounds),
}

impl RangeNode {
    /// Convert a JSON value. Scalars (like `lastUpdate`) have no node.
    fn from_value(value: Value) -> Option<Self> {
        let Value::Object(map) = value else {
            return None;
        };

        if let Some(bounds) = bounds_of(&map) {
            return Some(Self::Bounds(bounds));
        }

        Some(Self::Branch(
            map.into_iter()
                .filter_map(|(key, child)| Self::from_value(child).map(|node| (key, node)))
                .collect(),
        ))
    }

    /// Child whose key matches case-insensitively
    pub fn child(&self, key: &str) -> Option<&RangeNode> {
        match self {
            Self::Branch(children) => children
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(key))
                .map(|(_, node)| node),
            Self::Bounds(_) => None,
        }
    }

    pub fn as_bounds(&self) -> Option<Bounds> {
        match self {
            Self::Bounds(bounds) => Some(*bounds),
            Self::Branch(_) => None,
        }
    }

    fn non_empty_children(&self) -> Option<&[(String, RangeNode)]> {
        match self {
            Self::Branch(children) if !children.is_empty() => Some(children.as_slice()),
            _ => None,
        }
    }
}

fn bounds_of(map: &Map<String, Value>) -> Option<Bounds> {
    let min = map.get("min")?.as_f64()?;
    let max = map.get("max")?.as_f64()?;
    Some(Bounds { min, max })
}

/// One side of an affix requirement key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AffixReq {
    /// `all`: matches anything, including no affix
    All,
    /// Matches this affix only
    Exact(String),
    /// `not!X`: matches anything except X, including no affix
    Not(String),
}

impl AffixReq {
    pub fn parse(req: &str) -> Self {
        let req = req.trim();
        if req == "all" {
            Self::All
        } else if let Some(affix) = req.strip_prefix("not!") {
            Self::Not(affix.to_string())
        } else {
            Self::Exact(req.to_string())
        }
    }

    pub fn matches(&self, value: Option<&str>) -> bool {
        let is = |affix: &str| value.is_some_and(|v| v.eq_ignore_ascii_case(affix));
        match self {
            Self::All => true,
            Self::Exact(affix) => is(affix),
            Self::Not(affix) => !is(affix),
        }
    }
}

/// Parsed `"<prefixReq> | <suffixReq>"` key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffixRule {
    pub prefix: AffixReq,
    pub suffix: AffixReq,
}

impl AffixRule {
    pub fn parse(key: &str) -> Option<Self> {
        let (prefix, suffix) = key.split_once(" | ")?;
        Some(Self {
            prefix: AffixReq::parse(prefix),
            suffix: AffixReq::parse(suffix),
        })
    }

    pub fn matches(&self, option: &PathOption) -> bool {
        self.prefix.matches(option.prefix.as_deref())
            && self.suffix.matches(option.suffix.as_deref())
    }
}

/// Read-only range table snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct RangeTable {
    root: RangeNode,
}

impl RangeTable {
    pub fn from_value(value: Value) -> Result<Self, RangeError> {
        if !value.is_object() {
            return Err(RangeError::NotAnObject);
        }
        let root = RangeNode::from_value(value).ok_or(RangeError::NotAnObject)?;
        Ok(Self { root })
    }

    pub fn from_json_str(json: &str) -> Result<Self, RangeError> {
        Self::from_value(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, RangeError> {
        let json = std::fs::read_to_string(path).map_err(|source| RangeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Number of top-level keys (weapon slots and armor categories)
    pub fn len(&self) -> usize {
        match &self.root {
            RangeNode::Branch(children) => children.len(),
            RangeNode::Bounds(_) => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Follow `keys` from the root, ignoring case
    pub fn walk(&self, keys: &[&str]) -> Option<&RangeNode> {
        keys.iter().try_fold(&self.root, |node, key| node.child(key))
    }

    /// Affix entries for a stat along one path option: the weapon layout
    /// first, then the armor layout if the option has a category
    pub fn stat_entries(&self, option: &PathOption, alias: &str) -> Option<&[(String, RangeNode)]> {
        let weapon = self
            .walk(&[option.slot.as_str(), option.quality.as_str(), alias])
            .and_then(RangeNode::non_empty_children);

        weapon.or_else(|| {
            let category = option.category.as_deref()?;
            self.walk(&[category, option.slot.as_str(), option.quality.as_str(), alias])
                .and_then(RangeNode::non_empty_children)
        })
    }

    /// First `{min, max}` whose affix rule accepts the option
    pub fn find_bounds(&self, option: &PathOption, alias: &str) -> Option<Bounds> {
        self.stat_entries(option, alias)?
            .iter()
            .find_map(|(key, node)| match AffixRule::parse(key) {
                Some(rule) if rule.matches(option) => node.as_bounds(),
                Some(_) => None,
                None => {
                    tracing::debug!("Skipping malformed range key {:?} for {}", key, alias);
                    None
                }
            })
    }
}

/// Range table shared across concurrent inference calls.
///
/// Readers take an `Arc` snapshot; replacing the table swaps the whole
/// snapshot at once, so a reader never sees a partially loaded table.
#[derive(Debug)]
pub struct SharedRanges {
    path: Option<PathBuf>,
    current: RwLock<Arc<RangeTable>>,
}

impl SharedRanges {
    /// Load the table at `path`. Failure here is fatal for the caller.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, RangeError> {
        let path = path.into();
        let table = RangeTable::from_path(&path)?;
        tracing::info!("Loaded range table from {} ({} entries)", path.display(), table.len());
        Ok(Self {
            path: Some(path),
            current: RwLock::new(Arc::new(table)),
        })
    }

    /// Wrap an in-memory table (test override)
    pub fn from_table(table: RangeTable) -> Self {
        Self {
            path: None,
            current: RwLock::new(Arc::new(table)),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn snapshot(&self) -> Arc<RangeTable> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    pub fn replace(&self, table: RangeTable) {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::new(table);
    }

    /// Re-read the backing file. On error the current table stays in place.
    pub fn reload(&self) -> Result<(), RangeError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let table = RangeTable::from_path(path)?;
        self.replace(table);
        tracing::info!("Reloaded range table from {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = include_str!("../../../share/fixtures/ranges_sample.json");

    fn sample() -> RangeTable {
        RangeTable::from_json_str(SAMPLE).unwrap()
    }

    fn option(quality: &str, slot: &str) -> PathOption {
        PathOption {
            quality: quality.to_string(),
            prefix: None,
            category: None,
            slot: slot.to_string(),
            suffix: None,
        }
    }

    #[test]
    fn test_parse_sample() {
        let table = sample();
        assert_eq!(table.len(), 3);
        assert!(!table.is_empty());

        let legendary = table.walk(&["Axe", "Legendary"]).unwrap();
        // lastUpdate is dropped, both stats survive
        match legendary {
            RangeNode::Branch(children) => {
                let keys: Vec<_> = children.iter().map(|(k, _)| k.as_str()).collect();
                assert_eq!(keys, vec!["Attack Damage", "Attack Accuracy"]);
            }
            RangeNode::Bounds(_) => panic!("expected branch"),
        }
    }

    #[test]
    fn test_key_order_is_preserved() {
        let table = sample();
        let entries = table.walk(&["Willow", "Legendary", "Magic Damage"]).unwrap();
        let RangeNode::Branch(children) = entries else {
            panic!("expected branch");
        };
        assert_eq!(children[0].0, "all | Destruction");
        assert_eq!(children[1].0, "all | not!Destruction");
    }

    #[test]
    fn test_walk_ignores_case() {
        let table = sample();
        let node = table
            .walk(&["cotton", "SHOES", "legendary", "magic accuracy", "all | all"])
            .unwrap();
        assert_eq!(node.as_bounds(), Some(Bounds { min: 2.99, max: 3.49 }));
        assert!(table.walk(&["Cotton", "Hat"]).is_none());
    }

    #[test]
    fn test_affix_req_parse() {
        assert_eq!(AffixReq::parse("all"), AffixReq::All);
        assert_eq!(AffixReq::parse("Slaughter"), AffixReq::Exact("Slaughter".to_string()));
        assert_eq!(AffixReq::parse("not!Slaughter"), AffixReq::Not("Slaughter".to_string()));
        assert!(AffixRule::parse("all").is_none());
    }

    #[test]
    fn test_negated_requirement() {
        let req = AffixReq::parse("not!Slaughter");
        assert!(req.matches(None));
        assert!(req.matches(Some("Banshee")));
        assert!(!req.matches(Some("Slaughter")));
        assert!(!req.matches(Some("slaughter")));
    }

    #[test]
    fn test_exact_and_wildcard_requirements() {
        let exact = AffixReq::parse("Slaughter");
        assert!(exact.matches(Some("SLAUGHTER")));
        assert!(!exact.matches(Some("Banshee")));
        assert!(!exact.matches(None));

        assert!(AffixReq::All.matches(None));
        assert!(AffixReq::All.matches(Some("anything")));
    }

    #[test]
    fn test_find_bounds_by_suffix() {
        let table = sample();

        let mut axe = option("Legendary", "Axe");
        axe.suffix = Some("Slaughter".to_string());
        assert_eq!(
            table.find_bounds(&axe, "Attack Damage"),
            Some(Bounds { min: 67.72, max: 75.92 })
        );

        axe.suffix = Some("Banshee".to_string());
        assert_eq!(
            table.find_bounds(&axe, "Attack Damage"),
            Some(Bounds { min: 53.39, max: 59.87 })
        );

        axe.suffix = None;
        assert_eq!(
            table.find_bounds(&axe, "Attack Damage"),
            Some(Bounds { min: 53.39, max: 59.87 })
        );
    }

    #[test]
    fn test_find_bounds_armor_layout() {
        let table = sample();
        let mut shoes = option("Legendary", "Shoes");
        assert!(table.find_bounds(&shoes, "Magic Accuracy").is_none());

        shoes.category = Some("Cotton".to_string());
        assert_eq!(
            table.find_bounds(&shoes, "Magic Accuracy"),
            Some(Bounds { min: 2.99, max: 3.49 })
        );
    }

    #[test]
    fn test_find_bounds_prefix_requirement() {
        let table = sample();
        let mut staff = option("Legendary", "Willow");
        assert_eq!(
            table.find_bounds(&staff, "Dark EDB"),
            Some(Bounds { min: 0.0, max: 0.0 })
        );

        staff.prefix = Some("Demonic".to_string());
        assert_eq!(
            table.find_bounds(&staff, "Dark EDB"),
            Some(Bounds { min: 22.0, max: 30.0 })
        );
    }

    #[test]
    fn test_rejects_non_object_root() {
        assert!(matches!(
            RangeTable::from_json_str("[1, 2, 3]"),
            Err(RangeError::NotAnObject)
        ));
        assert!(matches!(
            RangeTable::from_json_str("{ not json"),
            Err(RangeError::Json(_))
        ));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let table = RangeTable::from_path(file.path()).unwrap();
        assert_eq!(table, sample());

        let missing = RangeTable::from_path(Path::new("/nonexistent/ranges.json"));
        assert!(matches!(missing, Err(RangeError::Io { .. })));
    }

    #[test]
    fn test_shared_ranges_replace() {
        let shared = SharedRanges::from_table(sample());
        let before = shared.snapshot();
        assert_eq!(before.len(), 3);

        shared.replace(RangeTable::from_json_str(r#"{"Axe": {}}"#).unwrap());

        // Old snapshots are untouched, new ones see the replacement
        assert_eq!(before.len(), 3);
        assert_eq!(shared.snapshot().len(), 1);
        assert!(shared.reload().is_ok());
        assert!(shared.path().is_none());
    }

    #[test]
    fn test_shared_ranges_reload_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ranges.json");
        std::fs::write(&path, SAMPLE).unwrap();

        let shared = SharedRanges::open(&path).unwrap();
        assert_eq!(shared.snapshot().len(), 3);

        std::fs::write(&path, r#"{"Axe": {}}"#).unwrap();
        shared.reload().unwrap();
        assert_eq!(shared.snapshot().len(), 1);

        // A corrupt file keeps the last good table
        std::fs::write(&path, "{").unwrap();
        assert!(shared.reload().is_err());
        assert_eq!(shared.snapshot().len(), 1);
    }

    #[test]
    fn test_open_missing_file_fails() {
        assert!(SharedRanges::open("/nonexistent/ranges.json").is_err());
    }
}
