//! Inference command handlers

use anyhow::{bail, Context, Result};
use hvstats::{
    calc_percentile, enumerate_path_options, explain_downgrade, infer_batch, infer_equip_stats,
    EquipRecord, InferredStats, Potency, RangeTable, SharedRanges, StatCategory, Tier,
};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::resolve_ranges_path;
use crate::file_io::read_json;

/// Load the range table. Any failure here ends the command.
fn load_ranges(explicit: Option<PathBuf>) -> Result<Arc<RangeTable>> {
    let path = resolve_ranges_path(explicit)?;
    let shared = SharedRanges::open(path.clone())
        .with_context(|| format!("Failed to load range table {}", path.display()))?;
    Ok(shared.snapshot())
}

/// Handle `infer` command
pub fn infer(records: &Path, ranges: Option<PathBuf>, compact: bool) -> Result<()> {
    let input = read_json(records)?;
    let ranges = load_ranges(ranges)?;

    let output = infer_value(input, &ranges)?;

    let text = if compact {
        serde_json::to_string(&output)
    } else {
        serde_json::to_string_pretty(&output)
    }
    .context("Failed to serialize inference output")?;
    println!("{}", text);

    Ok(())
}

/// Infer a single record or an array of records. In an array, elements that
/// don't deserialize or can't be inferred become `null`.
fn infer_value(input: Value, ranges: &RangeTable) -> Result<Value> {
    match input {
        Value::Array(items) => {
            let parsed: Vec<Option<EquipRecord>> = items
                .into_iter()
                .enumerate()
                .map(|(i, item)| match serde_json::from_value(item) {
                    Ok(record) => Some(record),
                    Err(e) => {
                        tracing::warn!("Skipping record {}: {}", i, e);
                        None
                    }
                })
                .collect();

            let valid: Vec<EquipRecord> = parsed.iter().flatten().cloned().collect();
            let mut inferred = infer_batch(&valid, ranges).into_iter();

            let results: Vec<Option<InferredStats>> = parsed
                .iter()
                .map(|record| record.as_ref().and_then(|_| inferred.next().flatten()))
                .collect();
            serde_json::to_value(results).context("Failed to serialize inference output")
        }
        single => {
            let record: EquipRecord =
                serde_json::from_value(single).context("Invalid equip record")?;
            let inferred = infer_equip_stats(&record, ranges)?;
            serde_json::to_value(inferred).context("Failed to serialize inference output")
        }
    }
}

/// Handle `explain` command
pub fn explain(
    record: &Path,
    category: StatCategory,
    stat: &str,
    ranges: Option<PathBuf>,
) -> Result<()> {
    let record: EquipRecord =
        serde_json::from_value(read_json(record)?).context("Invalid equip record")?;
    let ranges = load_ranges(ranges)?;

    print!("{}", explain_stat(&record, category, stat, &ranges)?);
    Ok(())
}

fn displayed_base(record: &EquipRecord, category: StatCategory, stat: &str) -> Option<f64> {
    if category == StatCategory::WeaponDamage {
        return record.weapon_damage.as_ref().map(|w| w.base);
    }
    record
        .stats
        .get(&category)
        .and_then(|stats| stats.get(stat))
        .map(|v| v.base)
}

fn describe_potency(potency: &Potency) -> String {
    if potency.is_maxed() {
        return format!("tier {} (maxed)", potency.tier);
    }
    match (potency.current_xp, potency.max_xp) {
        (Some(current), Some(max)) => format!("tier {} ({}/{} PXP)", potency.tier, current, max),
        _ => format!("tier {}", potency.tier),
    }
}

fn explain_stat(
    record: &EquipRecord,
    category: StatCategory,
    stat: &str,
    ranges: &RangeTable,
) -> Result<String> {
    let Some(displayed) = displayed_base(record, category, stat) else {
        bail!("{} has no {} / {} stat", record.name, category, stat);
    };

    let options = enumerate_path_options(&record.name)?;
    let legendary: Vec<_> = options
        .iter()
        .map(|o| o.with_quality(Tier::Legendary.name()))
        .collect();

    let d = explain_downgrade(category, stat, displayed, record);
    let percentile = calc_percentile(ranges, &options, category, stat, d.natural);
    let legendary_percentile = calc_percentile(ranges, &legendary, category, stat, d.natural);

    let fmt_pct =
        |p: Option<f64>| p.map_or_else(|| "-".to_string(), |p| format!("{:.2}%", p * 100.0));

    let mut out = String::new();
    out.push_str(&format!("{} ({})\n", record.name, record.level));
    out.push_str(&format!("Potency: {}\n", describe_potency(&record.potency)));
    out.push_str(&format!("{} / {}\n", category, stat));
    out.push_str(&format!("  Rule:          {:?}\n", d.rule));
    out.push_str(&format!("  Displayed:     {:.4}\n", d.displayed));
    out.push_str(&format!("  Quality bonus: {:.4}\n", d.quality_bonus));
    out.push_str(&format!("  Forge coeff:   {:.4}\n", d.forge_coeff));
    out.push_str(&format!("  IW coeff:      {:.4}\n", d.iw_coeff));
    out.push_str(&format!("  Natural:       {:.4}\n", d.natural));
    out.push_str(&format!("  Percentile:    {}\n", fmt_pct(percentile)));
    out.push_str(&format!("  As Legendary:  {}\n", fmt_pct(legendary_percentile)));
    out.push_str("Paths tried:\n");
    for option in &options {
        out.push_str(&format!("  {}\n", option));
    }
    Ok(out)
}
