//! Stat downgrading
//!
//! Displayed stats include the player's Forge upgrades and Item World
//! enchants. The range table records natural rolls, so those bonuses are
//! divided back out first. Formulas follow the community LPR script and the
//! wiki pages for The Forge (upgrades and bindings) and Item World
//! (potencies).
//!
//! The in-game "Base" figure also scales with potency: part of it comes from
//! quality (PXP0) and is not multiplied by upgrades, so that share is removed
//! before dividing and added back afterwards.

use phf::phf_map;
use serde::Serialize;
use std::borrow::Cow;

use crate::percentile::stat_alias;
use crate::record::{EquipRecord, StatCategory};
use crate::reference::Tier;

/// Allowed rounding slack before a downgraded value counts as larger
const INCREASE_TOLERANCE: f64 = 0.01;

/// Forge multiplier for the two damage stats
const DAMAGE_LEVEL_MULT: f64 = 0.279575;
/// Forge multiplier for every other upgradeable stat
const DEFAULT_LEVEL_MULT: f64 = 0.2;

/// Stats that only exist through an enchant: (stat, enchant, flat bonus per level)
const COUNTER_STATS: &[(&str, &str, f64)] = &[
    ("Counter-Parry", "Overpower", 1.92),
    ("Counter-Resist", "Penetrator", 4.0),
];

/// Item World rates for elemental stats under Damage Mitigations:
/// (stat, enchant, bonus per level)
const MITIGATION_ENCHANTS: &[(&str, &str, f64)] = &[
    ("Cold", "Coldproof", 0.04),
    ("Dark", "Darkproof", 0.04),
    ("Elec", "Elecproof", 0.04),
    ("Fire", "Fireproof", 0.04),
    ("Holy", "Holyproof", 0.04),
    ("Wind", "Windproof", 0.04),
];

/// Item World rates for every other stat
const STAT_ENCHANTS: &[(&str, &str, f64)] = &[
    ("HP Bonus", "Juggernaut", 0.02),
    ("MP Bonus", "Capacitor", 0.02),
    ("Attack Damage", "Butcher", 0.02),
    ("Magic Damage", "Archmage", 0.02),
    ("Attack Crit Chance", "Fatality", 0.02),
    ("Spell Crit Damage", "Annihilator", 0.02),
    ("Attack Speed", "Swift Strike", 0.0192),
    ("Casting Speed", "Spellweaver", 0.014675),
    ("Counter-Parry", "Overpower", 0.04),
    ("Counter-Resist", "Penetrator", 0.04),
    ("Mana Conservation", "Economizer", 0.05),
];

/// Stat -> forge upgrade name, for stats whose upgrade isn't derived from
/// their category
static FORGE_UPGRADES: phf::Map<&'static str, &'static str> = phf_map! {
    "Attack Damage" => "Physical Damage",
    "Magic Damage" => "Magical Damage",
    "Attack Accuracy" => "Physical Hit Chance",
    "Magic Accuracy" => "Magical Hit Chance",
    "Attack Crit Chance" => "Physical Crit Chance",
    "Magic Crit Chance" => "Magical Crit Chance",
    "Physical Mitigation" => "Physical Defense",
    "Magical Mitigation" => "Magical Defense",
    "Evade Chance" => "Evade Chance",
    "Block Chance" => "Block Chance",
    "Parry Chance" => "Parry Chance",
    "Resist Chance" => "Resist Chance",
};

/// Base value gained per 25 PXP0 above 100, keyed by range table alias
static PXP_MULTIPLIERS: phf::Map<&'static str, f64> = phf_map! {
    "Attack Damage" => 0.0854,
    "Attack Crit Chance" => 0.0105,
    "Attack Crit Damage" => 0.01,
    "Attack Accuracy" => 0.06069,
    "Attack Speed" => 0.0481,
    "Magic Damage" => 0.082969,
    "Magic Crit Chance" => 0.0114,
    "Spell Crit Damage" => 0.01,
    "Magic Accuracy" => 0.0491,
    "Casting Speed" => 0.0489,
    "Strength" => 0.03,
    "Dexterity" => 0.03,
    "Endurance" => 0.03,
    "Agility" => 0.03,
    "Intelligence" => 0.03,
    "Wisdom" => 0.03,
    "Evade Chance" => 0.025,
    "Resist Chance" => 0.0804,
    "Physical Mitigation" => 0.021,
    "Magical Mitigation" => 0.0201,
    "Block Chance" => 0.0998,
    "Parry Chance" => 0.0894,
    "Mana Conservation" => 0.1,
    "Crushing" => 0.0155,
    "Slashing" => 0.0153,
    "Piercing" => 0.015,
    "Burden" => 0.0,
    "Interference" => 0.0,
    "Elemental" => 0.0306,
    "Divine" => 0.0306,
    "Forbidden" => 0.0306,
    "Deprecating" => 0.0306,
    "Supportive" => 0.0306,
    "Holy EDB" => 0.0804,
    "Dark EDB" => 0.0804,
    "Wind EDB" => 0.0804,
    "Elec EDB" => 0.0804,
    "Cold EDB" => 0.0804,
    "Fire EDB" => 0.0804,
    "Holy MIT" => 0.1,
    "Dark MIT" => 0.1,
    "Wind MIT" => 0.1,
    "Elec MIT" => 0.1,
    "Cold MIT" => 0.1,
    "Fire MIT" => 0.1,
    "Counter-Resist" => 0.1,
};

/// Average PXP0 of peerless equips, matched by substring of the name in
/// this order. " plate" keeps a leading space so it can't hit "Breastplate".
const AVERAGE_PXP_ZERO: &[(&str, f64)] = &[
    ("axe", 375.0),
    ("club", 375.0),
    ("rapier", 377.0),
    ("shortsword", 377.0),
    ("wakizashi", 378.0),
    ("estoc", 377.0),
    ("katana", 375.0),
    ("longsword", 375.0),
    ("mace", 375.0),
    ("katalox staff", 368.0),
    ("oak staff", 371.0),
    ("redwood staff", 371.0),
    ("willow staff", 371.0),
    ("buckler", 374.0),
    ("force shield", 374.0),
    ("kite shield", 374.0),
    ("phase", 377.0),
    ("cotton", 377.0),
    ("arcanist", 421.0),
    ("shade", 394.0),
    ("leather", 393.0),
    ("power", 382.0),
    (" plate", 377.0),
];

/// Which formula produced a downgrade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DowngradeRule {
    /// Flat per-level enchant bonus subtracted
    Linear,
    /// Forge and Item World multipliers divided out
    Multiplicative,
}

/// Every factor that went into a downgrade
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Downgrade {
    pub rule: DowngradeRule,
    pub displayed: f64,
    pub natural: f64,
    pub quality_bonus: f64,
    pub forge_coeff: f64,
    pub iw_coeff: f64,
}

/// Recover the natural value of a stat from its displayed base
pub fn downgrade(category: StatCategory, stat: &str, displayed: f64, record: &EquipRecord) -> f64 {
    explain_downgrade(category, stat, displayed, record).natural
}

/// Like [`downgrade`], returning every intermediate factor
pub fn explain_downgrade(
    category: StatCategory,
    stat: &str,
    displayed: f64,
    record: &EquipRecord,
) -> Downgrade {
    if let Some(&(_, enchant, per_level)) = COUNTER_STATS.iter().find(|(s, ..)| *s == stat) {
        let level = f64::from(record.enchant_level(enchant));
        return Downgrade {
            rule: DowngradeRule::Linear,
            displayed,
            natural: displayed - level * per_level,
            quality_bonus: 0.0,
            forge_coeff: 1.0,
            iw_coeff: 1.0,
        };
    }

    let iw = iw_coeff(category, stat, record);
    let forge = forge_coeff(category, stat, record);
    let quality_bonus = (pxp_zero(record) - 100.0) * (pxp_multiplier(category, stat) / 25.0);

    let divisor = forge * iw;
    // Nothing applied: keep the exact displayed value rather than a value
    // that went through a subtract/add round trip.
    let natural = if divisor == 1.0 {
        displayed
    } else {
        (displayed - quality_bonus) / divisor + quality_bonus
    };

    if natural > displayed + INCREASE_TOLERANCE {
        tracing::warn!(
            "Base value increased after downgrade {} / {}: {:.3} -> {:.3}",
            category,
            stat,
            displayed,
            natural
        );
    }

    Downgrade {
        rule: DowngradeRule::Multiplicative,
        displayed,
        natural,
        quality_bonus,
        forge_coeff: forge,
        iw_coeff: iw,
    }
}

/// Item World multiplier: 1 plus the per-level rate of every enchant that
/// boosts this stat
pub fn iw_coeff(category: StatCategory, stat: &str, record: &EquipRecord) -> f64 {
    let table = if category == StatCategory::DamageMitigations {
        MITIGATION_ENCHANTS
    } else {
        STAT_ENCHANTS
    };

    1.0 + table
        .iter()
        .filter(|(s, ..)| *s == stat)
        .map(|(_, enchant, rate)| rate * f64::from(record.enchant_level(enchant)))
        .sum::<f64>()
}

/// Name of the forge upgrade that boosts a stat, if any
pub fn forge_upgrade_key(category: StatCategory, stat: &str) -> Option<Cow<'static, str>> {
    if let Some(key) = FORGE_UPGRADES.get(stat) {
        return Some(Cow::Borrowed(*key));
    }

    let suffix = match category {
        StatCategory::DamageMitigations => "Mitigation",
        StatCategory::PrimaryAttributes => "Bonus",
        StatCategory::SpellDamage => "Spell Damage",
        StatCategory::Proficiency => "Proficiency",
        _ => return None,
    };
    Some(Cow::Owned(format!("{} {}", stat, suffix)))
}

/// Forge multiplier: `1 + mult * ln(0.1 * level + 1)`
pub fn forge_coeff(category: StatCategory, stat: &str, record: &EquipRecord) -> f64 {
    let level_mult = match stat {
        "Attack Damage" | "Magic Damage" => DAMAGE_LEVEL_MULT,
        _ => DEFAULT_LEVEL_MULT,
    };

    let level = forge_upgrade_key(category, stat).map_or(0, |key| record.upgrade_level(&key));

    1.0 + level_mult * (0.1 * f64::from(level) + 1.0).ln()
}

/// PXP0 of the equip: known exactly before the first potency tier, estimated
/// from the type average afterwards
pub fn pxp_zero(record: &EquipRecord) -> f64 {
    if record.potency.tier == 0 {
        if let Some(max_xp) = record.potency.max_xp {
            return f64::from(max_xp);
        }
    }
    average_pxp_zero(&record.name)
}

/// Estimated PXP0 for an equip name, scaled by its tier
pub fn average_pxp_zero(name: &str) -> f64 {
    let lower = name.to_lowercase();

    match AVERAGE_PXP_ZERO.iter().find(|(key, _)| lower.contains(key)) {
        Some(&(_, average)) => {
            let factor = Tier::from_equip_name(name).map_or(0.8, Tier::pxp_zero_factor);
            (factor * average).round()
        }
        None => {
            tracing::warn!("No average PXP0 for {}", name);
            0.0
        }
    }
}

/// Per-stat quality scaling constant
pub fn pxp_multiplier(category: StatCategory, stat: &str) -> f64 {
    let alias = stat_alias(category, stat);
    match PXP_MULTIPLIERS.get(&*alias) {
        Some(&mult) => mult,
        None => {
            tracing::warn!("No base multiplier for {} / {}", category, stat);
            1.0
        }
    }
}
