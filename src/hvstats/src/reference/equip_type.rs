//! Equip type definitions
//!
//! An equip type is the slot archetype in the middle of a name, such as
//! "Phase Cap" or "Great Mace". Armor types carry the body slot they occupy.

use serde::{Deserialize, Serialize};

/// Broad kind of equip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipKind {
    Weapon,
    Staff,
    Shield,
    Armor,
}

impl std::fmt::Display for EquipKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Weapon => write!(f, "weapon"),
            Self::Staff => write!(f, "staff"),
            Self::Shield => write!(f, "shield"),
            Self::Armor => write!(f, "armor"),
        }
    }
}

/// Body slot occupied by an armor piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArmorSlot {
    Head,
    Body,
    Hands,
    Legs,
    Feet,
}

impl std::fmt::Display for ArmorSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Head => write!(f, "HEAD"),
            Self::Body => write!(f, "BODY"),
            Self::Hands => write!(f, "HANDS"),
            Self::Legs => write!(f, "LEGS"),
            Self::Feet => write!(f, "FEET"),
        }
    }
}

/// Equip type information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquipType {
    pub name: &'static str,
    pub kind: EquipKind,
    /// Only set for armor
    pub slot: Option<ArmorSlot>,
}

impl EquipType {
    /// Armor material ("Phase" for "Phase Cap"). None for non-armor types.
    pub fn material(&self) -> Option<&'static str> {
        match self.kind {
            EquipKind::Armor => self.name.split(' ').next(),
            _ => None,
        }
    }
}

const fn armor(name: &'static str, slot: ArmorSlot) -> EquipType {
    EquipType {
        name,
        kind: EquipKind::Armor,
        slot: Some(slot),
    }
}

const fn other(name: &'static str, kind: EquipKind) -> EquipType {
    EquipType {
        name,
        kind,
        slot: None,
    }
}

/// All equip types, in match order. "Great Mace" must precede "Mace".
pub const EQUIP_TYPES: &[EquipType] = &[
    // Kevlar
    armor("Kevlar Helmet", ArmorSlot::Head),
    armor("Kevlar Breastplate", ArmorSlot::Body),
    armor("Kevlar Gauntlets", ArmorSlot::Hands),
    armor("Kevlar Leggings", ArmorSlot::Legs),
    armor("Kevlar Boots", ArmorSlot::Feet),
    // Shade
    armor("Shade Helmet", ArmorSlot::Head),
    armor("Shade Breastplate", ArmorSlot::Body),
    armor("Shade Gauntlets", ArmorSlot::Hands),
    armor("Shade Leggings", ArmorSlot::Legs),
    armor("Shade Boots", ArmorSlot::Feet),
    // Leather
    armor("Leather Helmet", ArmorSlot::Head),
    armor("Leather Breastplate", ArmorSlot::Body),
    armor("Leather Gauntlets", ArmorSlot::Hands),
    armor("Leather Leggings", ArmorSlot::Legs),
    armor("Leather Boots", ArmorSlot::Feet),
    // Power
    armor("Power Helmet", ArmorSlot::Head),
    armor("Power Armor", ArmorSlot::Body),
    armor("Power Gauntlets", ArmorSlot::Hands),
    armor("Power Leggings", ArmorSlot::Legs),
    armor("Power Boots", ArmorSlot::Feet),
    // Plate
    armor("Plate Helmet", ArmorSlot::Head),
    armor("Plate Cuirass", ArmorSlot::Body),
    armor("Plate Gauntlets", ArmorSlot::Hands),
    armor("Plate Greaves", ArmorSlot::Legs),
    armor("Plate Sabatons", ArmorSlot::Feet),
    // Reactive
    armor("Reactive Helmet", ArmorSlot::Head),
    armor("Reactive Cuirass", ArmorSlot::Body),
    armor("Reactive Gauntlets", ArmorSlot::Hands),
    armor("Reactive Greaves", ArmorSlot::Legs),
    armor("Reactive Sabatons", ArmorSlot::Feet),
    // Cotton
    armor("Cotton Cap", ArmorSlot::Head),
    armor("Cotton Robe", ArmorSlot::Body),
    armor("Cotton Gloves", ArmorSlot::Hands),
    armor("Cotton Pants", ArmorSlot::Legs),
    armor("Cotton Shoes", ArmorSlot::Feet),
    // Chain
    armor("Chain Helmet", ArmorSlot::Head),
    armor("Chain Cuirass", ArmorSlot::Body),
    armor("Chain Gauntlets", ArmorSlot::Hands),
    armor("Chain Greaves", ArmorSlot::Legs),
    armor("Chain Sabatons", ArmorSlot::Feet),
    // Phase
    armor("Phase Cap", ArmorSlot::Head),
    armor("Phase Robe", ArmorSlot::Body),
    armor("Phase Gloves", ArmorSlot::Hands),
    armor("Phase Pants", ArmorSlot::Legs),
    armor("Phase Shoes", ArmorSlot::Feet),
    // Ironsilk
    armor("Ironsilk Cap", ArmorSlot::Head),
    armor("Ironsilk Robe", ArmorSlot::Body),
    armor("Ironsilk Gloves", ArmorSlot::Hands),
    armor("Ironsilk Pants", ArmorSlot::Legs),
    armor("Ironsilk Shoes", ArmorSlot::Feet),
    // Gossamer
    armor("Gossamer Cap", ArmorSlot::Head),
    armor("Gossamer Robe", ArmorSlot::Body),
    armor("Gossamer Gloves", ArmorSlot::Hands),
    armor("Gossamer Pants", ArmorSlot::Legs),
    armor("Gossamer Shoes", ArmorSlot::Feet),
    // Drakehide
    armor("Drakehide Helmet", ArmorSlot::Head),
    armor("Drakehide Breastplate", ArmorSlot::Body),
    armor("Drakehide Gauntlets", ArmorSlot::Hands),
    armor("Drakehide Leggings", ArmorSlot::Legs),
    armor("Drakehide Boots", ArmorSlot::Feet),
    // Staves
    other("Willow Staff", EquipKind::Staff),
    other("Redwood Staff", EquipKind::Staff),
    other("Oak Staff", EquipKind::Staff),
    other("Ebony Staff", EquipKind::Staff),
    other("Katalox Staff", EquipKind::Staff),
    // Shields
    other("Force Shield", EquipKind::Shield),
    other("Tower Shield", EquipKind::Shield),
    other("Kite Shield", EquipKind::Shield),
    other("Buckler", EquipKind::Shield),
    // Weapons
    other("Axe", EquipKind::Weapon),
    other("Scythe", EquipKind::Weapon),
    other("Shortsword", EquipKind::Weapon),
    other("Swordchucks", EquipKind::Weapon),
    other("Katana", EquipKind::Weapon),
    other("Dagger", EquipKind::Weapon),
    other("Wakizashi", EquipKind::Weapon),
    other("Longsword", EquipKind::Weapon),
    other("Estoc", EquipKind::Weapon),
    other("Rapier", EquipKind::Weapon),
    other("Club", EquipKind::Weapon),
    other("Great Mace", EquipKind::Weapon),
    other("Mace", EquipKind::Weapon),
];
