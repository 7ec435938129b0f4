//! Percentile lookup
//!
//! Places a natural stat value between the min and max natural rolls the
//! range table lists for the equip's slot, quality and affixes.

use std::borrow::Cow;

use crate::path::PathOption;
use crate::ranges::{Bounds, RangeTable};
use crate::record::StatCategory;
use crate::reference::is_element;

/// How far outside [0, 1] a percentile may land before it is reported
const PERCENTILE_TOLERANCE: f64 = 0.1;

/// Range table key for a stat.
///
/// Elemental mitigations are listed as `"<element> MIT"` and spell damage
/// as `"<element> EDB"`; every other stat uses its display name.
pub fn stat_alias(category: StatCategory, stat: &str) -> Cow<'_, str> {
    match category {
        StatCategory::DamageMitigations if is_element(stat) => Cow::Owned(format!("{} MIT", stat)),
        StatCategory::SpellDamage => Cow::Owned(format!("{} EDB", stat)),
        _ => Cow::Borrowed(stat),
    }
}

/// Percentile of a natural value within the first range that matches one of
/// `options`, tried in order. `None` when no range applies.
pub fn calc_percentile(
    ranges: &RangeTable,
    options: &[PathOption],
    category: StatCategory,
    stat: &str,
    natural: f64,
) -> Option<f64> {
    let alias = stat_alias(category, stat);

    for option in options {
        let Some(bounds) = ranges.find_bounds(option, &alias) else {
            continue;
        };
        tracing::trace!(
            "Range for {} [{}, {}] natural={} ({})",
            alias,
            bounds.min,
            bounds.max,
            natural,
            option
        );
        return percentile_in(bounds, natural, stat, option);
    }

    tracing::debug!("No range for {} / {}", category, alias);
    None
}

/// Position of `natural` within `bounds`.
///
/// A zero-width range at 0 means the stat can't roll on this equip, so there
/// is no percentile. Any other zero-width range is always a full roll.
pub fn percentile_in(bounds: Bounds, natural: f64, stat: &str, option: &PathOption) -> Option<f64> {
    let Bounds { min, max } = bounds;

    if min == max {
        if min == 0.0 {
            return None;
        }
        if natural != min {
            tracing::warn!(
                "Stat with zero-width range received value outside range: {} [{}, {}] {} ({})",
                stat,
                min,
                max,
                natural,
                option
            );
        }
        return Some(1.0);
    }

    let percentile = (natural - min) / (max - min);
    if percentile < -PERCENTILE_TOLERANCE || percentile > 1.0 + PERCENTILE_TOLERANCE {
        tracing::warn!(
            "Incorrect range for {}: {} [{}, {}] {} ({})",
            stat,
            percentile,
            min,
            max,
            natural,
            option
        );
    }
    Some(percentile)
}
