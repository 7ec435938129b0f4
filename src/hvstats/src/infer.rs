//! Stat percentile inference
//!
//! Runs every stat of an equip record through downgrade and percentile
//! lookup, once at the equip's own quality and once as if it were Legendary
//! so equips of different qualities can be compared on one scale.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::downgrade::downgrade;
use crate::path::{enumerate_path_options, AmbiguityError, PathOption};
use crate::percentile::calc_percentile;
use crate::ranges::RangeTable;
use crate::record::{EquipRecord, StatCategory};
use crate::reference::Tier;

/// Stat name the weapon damage line is reported under
pub const WEAPON_DAMAGE_STAT: &str = "Attack Damage";

/// Percentile per stat, grouped by category. `None` marks a stat with no
/// usable range data.
pub type Percentiles = BTreeMap<StatCategory, BTreeMap<String, Option<f64>>>;

/// Inference result for one equip
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InferredStats {
    pub percentiles: Percentiles,
    /// Same stats scored against Legendary ranges
    pub legendary_percentiles: Percentiles,
}

/// Infer natural stat percentiles for one equip
pub fn infer_equip_stats(
    record: &EquipRecord,
    ranges: &RangeTable,
) -> Result<InferredStats, AmbiguityError> {
    let options = enumerate_path_options(&record.name)?;
    let legendary: Vec<PathOption> = options
        .iter()
        .map(|o| o.with_quality(Tier::Legendary.name()))
        .collect();

    Ok(InferredStats {
        percentiles: all_percentiles(record, ranges, &options),
        legendary_percentiles: all_percentiles(record, ranges, &legendary),
    })
}

/// Infer a batch of equips. A failed item is logged and yields `None`
/// without affecting the rest.
pub fn infer_batch(records: &[EquipRecord], ranges: &RangeTable) -> Vec<Option<InferredStats>> {
    records
        .iter()
        .map(|record| match infer_equip_stats(record, ranges) {
            Ok(stats) => Some(stats),
            Err(e) => {
                tracing::warn!("Skipping {}: {}", record.name, e);
                None
            }
        })
        .collect()
}

fn all_percentiles(
    record: &EquipRecord,
    ranges: &RangeTable,
    options: &[PathOption],
) -> Percentiles {
    let mut percentiles = Percentiles::new();

    if let Some(weapon) = &record.weapon_damage {
        let category = StatCategory::WeaponDamage;
        let natural = downgrade(category, WEAPON_DAMAGE_STAT, weapon.base, record);
        percentiles.entry(category).or_default().insert(
            WEAPON_DAMAGE_STAT.to_string(),
            calc_percentile(ranges, options, category, WEAPON_DAMAGE_STAT, natural),
        );
    }

    for (category, stat, value) in record.iter_stats() {
        let natural = downgrade(category, stat, value.base, record);
        let percentile = calc_percentile(ranges, options, category, stat, natural);
        percentiles
            .entry(category)
            .or_default()
            .insert(stat.to_string(), percentile);
    }

    percentiles
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = include_str!("../../../share/fixtures/ranges_sample.json");
    const WILLOW_STAFF: &str = include_str!("../../../share/fixtures/legendary_willow_staff.json");
    const PEERLESS_SNAKE: &str =
        include_str!("../../../share/fixtures/peerless_willow_staff_snake.json");

    fn sample() -> RangeTable {
        RangeTable::from_json_str(SAMPLE).unwrap()
    }

    fn get(p: &Percentiles, category: StatCategory, stat: &str) -> Option<f64> {
        *p.get(&category).unwrap().get(stat).unwrap()
    }

    fn assert_close(actual: Option<f64>, expected: f64, tolerance: f64) {
        let actual = actual.expect("expected a percentile");
        assert!(
            (actual - expected).abs() < tolerance,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_legendary_willow_staff() {
        let record: EquipRecord = serde_json::from_str(WILLOW_STAFF).unwrap();
        let inferred = infer_equip_stats(&record, &sample()).unwrap();
        let p = &inferred.percentiles;

        assert_close(get(p, StatCategory::Misc, "Magic Damage"), 0.22, 0.05);
        assert_close(get(p, StatCategory::Misc, "Counter-Resist"), 0.27, 1e-9);
        assert_eq!(get(p, StatCategory::Misc, "Burden"), Some(1.0));
        assert_close(get(p, StatCategory::Misc, "Magic Accuracy"), 0.64375, 1e-9);
        assert_close(get(p, StatCategory::SpellDamage, "Dark"), 0.2939, 0.001);
        assert_close(get(p, StatCategory::PrimaryAttributes, "Intelligence"), 0.5819, 0.001);

        // Listed on the equip but absent from the table
        assert_eq!(get(p, StatCategory::Misc, "Casting Speed"), None);
        assert_eq!(get(p, StatCategory::SpellDamage, "Wind"), None);
        assert_eq!(get(p, StatCategory::Proficiency, "Forbidden"), None);
        assert_eq!(get(p, StatCategory::WeaponDamage, WEAPON_DAMAGE_STAT), None);
    }

    #[test]
    fn test_every_stat_is_reported() {
        let record: EquipRecord = serde_json::from_str(WILLOW_STAFF).unwrap();
        let inferred = infer_equip_stats(&record, &sample()).unwrap();

        let reported: usize = inferred.percentiles.values().map(BTreeMap::len).sum();
        // 14 stats plus the weapon damage line
        assert_eq!(reported, 15);
        assert!(inferred.percentiles.contains_key(&StatCategory::WeaponDamage));
    }

    #[test]
    fn test_legendary_equip_scores_the_same_both_ways() {
        let record: EquipRecord = serde_json::from_str(WILLOW_STAFF).unwrap();
        let inferred = infer_equip_stats(&record, &sample()).unwrap();
        assert_eq!(inferred.percentiles, inferred.legendary_percentiles);
    }

    #[test]
    fn test_lower_case_peerless_record() {
        let record: EquipRecord = serde_json::from_str(PEERLESS_SNAKE).unwrap();
        let inferred = infer_equip_stats(&record, &sample()).unwrap();

        // No Peerless ranges in the table
        assert_eq!(get(&inferred.percentiles, StatCategory::Misc, "Magic Damage"), None);
        assert_eq!(get(&inferred.percentiles, StatCategory::Misc, "Counter-Resist"), None);

        // Legendary ranges still resolve through lower-cased keys. A Peerless
        // roll can sit above the Legendary max.
        let legendary = &inferred.legendary_percentiles;
        assert!(get(legendary, StatCategory::Misc, "Magic Damage").is_some());
        assert_close(
            get(legendary, StatCategory::Misc, "Counter-Resist"),
            (33.58 - 10.0) / 7.0,
            1e-9,
        );
    }

    #[test]
    fn test_weapon_damage_lookup() {
        let record = EquipRecord {
            name: "Average Axe".to_string(),
            weapon_damage: Some(crate::record::WeaponDamage {
                damage_type: "Slashing".to_string(),
                value: 120.0,
                base: 35.0,
                strikes: Vec::new(),
                status_effects: Vec::new(),
            }),
            ..Default::default()
        };
        let inferred = infer_equip_stats(&record, &sample()).unwrap();

        // Average PXP0 for an Axe exists, but with no upgrades the base is untouched
        assert_close(
            get(&inferred.percentiles, StatCategory::WeaponDamage, WEAPON_DAMAGE_STAT),
            0.5,
            1e-9,
        );
        // Legendary Axe without a suffix uses the not!Slaughter range
        assert_close(
            get(&inferred.legendary_percentiles, StatCategory::WeaponDamage, WEAPON_DAMAGE_STAT),
            (35.0 - 53.39) / (59.87 - 53.39),
            1e-9,
        );
    }

    #[test]
    fn test_ambiguous_name() {
        let record = EquipRecord {
            name: "Legendary".to_string(),
            ..Default::default()
        };
        let err = infer_equip_stats(&record, &sample()).unwrap_err();
        assert_eq!(err.tokens, 1);
    }

    #[test]
    fn test_batch_skips_failures() {
        let good: EquipRecord = serde_json::from_str(WILLOW_STAFF).unwrap();
        let bad = EquipRecord {
            name: "Legendary Onyx Extra Power Boots of Slaughter".to_string(),
            ..Default::default()
        };

        let results = infer_batch(&[good, bad], &sample());
        assert_eq!(results.len(), 2);
        assert!(results[0].is_some());
        assert!(results[1].is_none());
    }

    #[test]
    fn test_output_shape() {
        let record: EquipRecord = serde_json::from_str(WILLOW_STAFF).unwrap();
        let inferred = infer_equip_stats(&record, &sample()).unwrap();
        let json = serde_json::to_value(&inferred).unwrap();

        assert!(json["legendaryPercentiles"].is_object());
        assert!(json["percentiles"]["misc"]["Burden"].is_number());
        assert!(json["percentiles"]["Spell Damage"]["Wind"].is_null());
        assert!(json["percentiles"]["weapon_damage"]["Attack Damage"].is_null());
    }
}
