//! Equip name command handlers

use anyhow::{Context, Result};
use hvstats::{enumerate_path_options, EquipName};

/// Handle `name` command
pub fn name(name: &str, json: bool) -> Result<()> {
    let parsed = EquipName::parse(name)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&parsed).context("Failed to serialize name")?
        );
        return Ok(());
    }

    print!("{}", describe(&parsed));
    Ok(())
}

/// Handle `paths` command
pub fn paths(name: &str, json: bool) -> Result<()> {
    let options = enumerate_path_options(name)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&options).context("Failed to serialize path options")?
        );
        return Ok(());
    }

    for (i, option) in options.iter().enumerate() {
        println!("{}: {}", i, option);
    }
    Ok(())
}

fn describe(parsed: &EquipName) -> String {
    let or_none = |v: Option<&str>| v.unwrap_or("-").to_string();
    let suffix = match (parsed.suffix_article, parsed.suffix) {
        (Some(article), Some(suffix)) => format!("{} {}", article, suffix),
        (None, Some(suffix)) => suffix.to_string(),
        _ => "-".to_string(),
    };

    let mut out = String::new();
    out.push_str(&format!("Name:   {}\n", parsed));
    out.push_str(&format!("Tier:   {}\n", parsed.tier));
    out.push_str(&format!("Prefix: {}\n", or_none(parsed.prefix)));
    out.push_str(&format!("Type:   {}\n", parsed.equip_type.name));
    out.push_str(&format!("Kind:   {}\n", parsed.equip_type.kind));
    out.push_str(&format!(
        "Slot:   {}\n",
        parsed
            .equip_type
            .slot
            .map_or_else(|| "-".to_string(), |s| s.to_string())
    ));
    out.push_str(&format!("Material: {}\n", or_none(parsed.equip_type.material())));
    out.push_str(&format!("Suffix: {}\n", suffix));
    out
}
