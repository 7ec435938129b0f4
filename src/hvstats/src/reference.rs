//! Reference data for HentaiVerse equipment
//!
//! Closed vocabularies used to read equip names: quality tiers, prefixes,
//! equip types and suffixes. Every list is ordered and the order is
//! significant: name parsing accepts the first entry that matches, so
//! overlapping terms resolve by position (e.g. "Great Mace" before "Mace").

mod affix;
mod equip_type;
mod tier;

pub use affix::{PREFIXES, SUFFIXES, SUFFIX_ARTICLES};
pub use equip_type::{ArmorSlot, EquipKind, EquipType, EQUIP_TYPES};
pub use tier::{Tier, TIERS};

/// Stat names that carry an elemental alias in the damage mitigation table
pub const ELEMENTS: &[&str] = &["Holy", "Dark", "Wind", "Elec", "Cold", "Fire"];

/// Whether `stat` is one of the six elements
pub fn is_element(stat: &str) -> bool {
    ELEMENTS.contains(&stat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elements() {
        assert!(is_element("Fire"));
        assert!(is_element("Elec"));
        assert!(!is_element("Void"));
        assert!(!is_element("fire"));
    }
}
