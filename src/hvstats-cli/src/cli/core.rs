//! Core CLI definitions

use clap::{Parser, Subcommand};
use hvstats::StatCategory;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hvstats")]
#[command(about = "HentaiVerse equip stat percentiles", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Infer stat percentiles for one equip record or a JSON array of them
    #[command(visible_alias = "i")]
    Infer {
        /// Path to the record JSON ("-" for stdin)
        records: PathBuf,

        /// Range table (uses configured default if not provided)
        #[arg(short, long, env = "HVSTATS_RANGES")]
        ranges: Option<PathBuf>,

        /// Print single-line JSON
        #[arg(short, long)]
        compact: bool,
    },

    /// Show how one stat was downgraded and scored
    #[command(visible_alias = "e")]
    Explain {
        /// Path to the record JSON ("-" for stdin)
        record: PathBuf,

        /// Stat category (e.g. "misc", "Spell Damage", "weapon_damage")
        #[arg(short, long)]
        category: StatCategory,

        /// Stat name as listed on the equip (e.g. "Magic Damage", "Dark")
        #[arg(short, long)]
        stat: String,

        /// Range table (uses configured default if not provided)
        #[arg(short, long, env = "HVSTATS_RANGES")]
        ranges: Option<PathBuf>,
    },

    /// Parse an equip name into tier, prefix, type and suffix
    #[command(visible_alias = "n")]
    Name {
        /// Equip name (e.g. "Legendary Demonic Willow Staff of Destruction")
        name: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List the range table paths tried for an equip name
    #[command(visible_alias = "p")]
    Paths {
        /// Equip name
        name: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Configure default settings
    #[command(visible_alias = "c")]
    Configure {
        /// Set default range table path
        #[arg(long)]
        ranges: Option<PathBuf>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_explain_category_parsing() {
        let cli = Cli::try_parse_from([
            "hvstats",
            "explain",
            "equip.json",
            "--category",
            "spell damage",
            "--stat",
            "Dark",
        ])
        .unwrap();

        match cli.command {
            Commands::Explain { category, stat, .. } => {
                assert_eq!(category, StatCategory::SpellDamage);
                assert_eq!(stat, "Dark");
            }
            _ => panic!("expected explain"),
        }
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let result = Cli::try_parse_from([
            "hvstats", "explain", "equip.json", "--category", "Luck", "--stat", "Dark",
        ]);
        assert!(result.is_err());
    }
}
