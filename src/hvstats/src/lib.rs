//! # hvstats
//!
//! HentaiVerse equipment library - name parsing and stat percentile inference.
//!
//! This library provides functionality to:
//! - Parse equip names into tier, prefix, type and suffix
//! - Recover natural stat values from upgraded and enchanted stats
//! - Score natural values against a table of observed min/max rolls
//!
//! ## Example
//!
//! ```no_run
//! use std::fs;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let ranges = hvstats::RangeTable::from_path(std::path::Path::new("share/ranges.json"))?;
//! let record: hvstats::EquipRecord = serde_json::from_str(&fs::read_to_string("equip.json")?)?;
//!
//! let name = hvstats::EquipName::parse(&record.name)?;
//! println!("{} {}", name.tier, name.equip_type.name);
//!
//! let inferred = hvstats::infer_equip_stats(&record, &ranges)?;
//! println!("{}", serde_json::to_string_pretty(&inferred)?);
//! # Ok(())
//! # }
//! ```

pub mod downgrade;
pub mod infer;
pub mod name;
pub mod path;
pub mod percentile;
pub mod ranges;
pub mod record;
pub mod reference;

// Re-export commonly used items
#[doc(inline)]
pub use downgrade::{downgrade, explain_downgrade, Downgrade, DowngradeRule};
#[doc(inline)]
pub use infer::{infer_batch, infer_equip_stats, InferredStats, Percentiles};
#[doc(inline)]
pub use name::{EquipName, NameFormatError};
#[doc(inline)]
pub use path::{enumerate_path_options, AmbiguityError, PathOption};
#[doc(inline)]
pub use percentile::{calc_percentile, stat_alias};
#[doc(inline)]
pub use ranges::{Bounds, RangeError, RangeTable, SharedRanges};
#[doc(inline)]
pub use record::{EquipRecord, Level, Potency, StatCategory, StatValue, WeaponDamage};

// Reference data (tiers, affixes, equip types)
#[doc(inline)]
pub use reference::{
    ArmorSlot, EquipKind, EquipType, Tier, EQUIP_TYPES, PREFIXES, SUFFIXES, TIERS,
};
