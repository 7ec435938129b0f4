//! Equip records
//!
//! The structured form of an equip page, as produced by the scraper. Field
//! names are camelCase on the wire; the snake_case spellings the scraper
//! used historically are accepted as aliases.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Stat group a stat is listed under on the equip page
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StatCategory {
    /// Synthetic group holding the weapon damage line
    #[serde(rename = "weapon_damage")]
    WeaponDamage,
    /// Ungrouped stats (Magic Damage, Burden, ...)
    #[serde(rename = "misc")]
    Misc,
    #[serde(rename = "Primary Attributes")]
    PrimaryAttributes,
    #[serde(rename = "Proficiency")]
    Proficiency,
    #[serde(rename = "Spell Damage")]
    SpellDamage,
    #[serde(rename = "Damage Mitigations")]
    DamageMitigations,
}

impl StatCategory {
    pub fn name(self) -> &'static str {
        match self {
            Self::WeaponDamage => "weapon_damage",
            Self::Misc => "misc",
            Self::PrimaryAttributes => "Primary Attributes",
            Self::Proficiency => "Proficiency",
            Self::SpellDamage => "Spell Damage",
            Self::DamageMitigations => "Damage Mitigations",
        }
    }
}

impl std::fmt::Display for StatCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for StatCategory {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            Self::WeaponDamage,
            Self::Misc,
            Self::PrimaryAttributes,
            Self::Proficiency,
            Self::SpellDamage,
            Self::DamageMitigations,
        ]
        .into_iter()
        .find(|c| c.name().eq_ignore_ascii_case(s))
        .ok_or_else(|| format!("Unknown stat category: {}", s))
    }
}

/// Equip level: a number, or one of two states without a number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Level {
    Assigned(u32),
    Status(LevelStatus),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelStatus {
    Soulbound,
    Unassigned,
}

impl Default for Level {
    fn default() -> Self {
        Self::Status(LevelStatus::Unassigned)
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Assigned(level) => write!(f, "{}", level),
            Self::Status(LevelStatus::Soulbound) => write!(f, "Soulbound"),
            Self::Status(LevelStatus::Unassigned) => write!(f, "Unassigned"),
        }
    }
}

/// A displayed stat and the in-game "Base" figure from its tooltip
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatValue {
    pub value: f64,
    /// Already inflated by forge upgrades and enchants
    pub base: f64,
}

/// Weapon damage line ("+895 Crushing Damage")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeaponDamage {
    #[serde(rename = "type")]
    pub damage_type: String,
    pub value: f64,
    pub base: f64,
    #[serde(default)]
    pub strikes: Vec<String>,
    #[serde(default, alias = "status_effects")]
    pub status_effects: Vec<String>,
}

/// Potency (item world leveling) state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Potency {
    /// 0..=10, 10 is maxed
    pub tier: u8,
    #[serde(default, alias = "current_xp")]
    pub current_xp: Option<u32>,
    /// PXP needed for the next tier; absent once maxed
    #[serde(default, alias = "max_xp")]
    pub max_xp: Option<u32>,
}

impl Potency {
    pub const MAX_TIER: u8 = 10;

    pub fn is_maxed(&self) -> bool {
        self.tier >= Self::MAX_TIER
    }
}

/// A scraped equip
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipRecord {
    pub name: String,
    /// Custom name shown above the real one on renamed equips
    #[serde(default, alias = "alt_name")]
    pub alt_name: Option<String>,
    /// Equip page category ("Staff", "One-handed Weapon", ...)
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub level: Level,
    #[serde(default, alias = "weapon_damage")]
    pub weapon_damage: Option<WeaponDamage>,
    #[serde(default)]
    pub stats: BTreeMap<StatCategory, BTreeMap<String, StatValue>>,
    #[serde(default)]
    pub upgrades: BTreeMap<String, u32>,
    #[serde(default)]
    pub enchants: BTreeMap<String, u32>,
    #[serde(default)]
    pub potency: Potency,
}

impl EquipRecord {
    /// Forge upgrade level, 0 when not upgraded
    pub fn upgrade_level(&self, upgrade: &str) -> u32 {
        self.upgrades.get(upgrade).copied().unwrap_or(0)
    }

    /// Item world enchant level, 0 when not enchanted
    pub fn enchant_level(&self, enchant: &str) -> u32 {
        self.enchants.get(enchant).copied().unwrap_or(0)
    }

    /// Iterate all `(category, stat name, value)` triples, grouped by category
    pub fn iter_stats(&self) -> impl Iterator<Item = (StatCategory, &str, &StatValue)> {
        self.stats.iter().flat_map(|(category, stats)| {
            stats
                .iter()
                .map(move |(name, value)| (*category, name.as_str(), value))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WILLOW_STAFF: &str = include_str!("../../../share/fixtures/legendary_willow_staff.json");
    const PEERLESS_STAFF: &str =
        include_str!("../../../share/fixtures/peerless_willow_staff_snake.json");

    #[test]
    fn test_parse_camel_case_record() {
        let record: EquipRecord = serde_json::from_str(WILLOW_STAFF).unwrap();
        assert_eq!(record.name, "Legendary Demonic Willow Staff of Destruction");
        assert_eq!(record.level, Level::Assigned(500));
        assert_eq!(record.potency.tier, 8);
        assert_eq!(record.potency.max_xp, Some(3777));
        assert_eq!(record.upgrade_level("Magical Damage"), 5);
        assert_eq!(record.upgrade_level("Physical Damage"), 0);
        assert_eq!(record.enchant_level("Penetrator"), 5);

        let damage = record.weapon_damage.as_ref().unwrap();
        assert_eq!(damage.damage_type, "Crushing");
        assert!((damage.base - 28.86).abs() < 1e-9);
        assert_eq!(damage.strikes, vec!["Dark"]);

        let misc = &record.stats[&StatCategory::Misc];
        assert!((misc["Magic Damage"].base - 52.6).abs() < 1e-9);
        assert_eq!(record.stats[&StatCategory::SpellDamage].len(), 3);
        assert_eq!(record.iter_stats().count(), 14);
    }

    #[test]
    fn test_parse_snake_case_record() {
        let record: EquipRecord = serde_json::from_str(PEERLESS_STAFF).unwrap();
        assert_eq!(record.level, Level::Status(LevelStatus::Soulbound));
        assert!(record.potency.is_maxed());
        assert_eq!(record.potency.max_xp, None);
        assert_eq!(record.weapon_damage.unwrap().damage_type, "Void");
        assert!(record.enchants.is_empty());
    }

    #[test]
    fn test_level_forms() {
        let level: Level = serde_json::from_str("120").unwrap();
        assert_eq!(level, Level::Assigned(120));
        assert_eq!(level.to_string(), "120");

        let level: Level = serde_json::from_str("\"Unassigned\"").unwrap();
        assert_eq!(level, Level::Status(LevelStatus::Unassigned));
        assert_eq!(level.to_string(), "Unassigned");

        assert!(serde_json::from_str::<Level>("\"Cursed\"").is_err());
    }

    #[test]
    fn test_stat_category_names() {
        assert_eq!(
            serde_json::to_string(&StatCategory::DamageMitigations).unwrap(),
            "\"Damage Mitigations\""
        );
        assert_eq!("spell damage".parse::<StatCategory>(), Ok(StatCategory::SpellDamage));
        assert!("Luck".parse::<StatCategory>().is_err());
    }
}
