//! Quality tier definitions

use serde::{Deserialize, Serialize};

/// Quality tier of an equip, lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    Crude,
    Fair,
    Average,
    Superior,
    Exquisite,
    Magnificent,
    Legendary,
    Peerless,
}

/// All tiers in order
pub const TIERS: &[Tier] = &[
    Tier::Crude,
    Tier::Fair,
    Tier::Average,
    Tier::Superior,
    Tier::Exquisite,
    Tier::Magnificent,
    Tier::Legendary,
    Tier::Peerless,
];

impl Tier {
    pub fn name(self) -> &'static str {
        match self {
            Self::Crude => "Crude",
            Self::Fair => "Fair",
            Self::Average => "Average",
            Self::Superior => "Superior",
            Self::Exquisite => "Exquisite",
            Self::Magnificent => "Magnificent",
            Self::Legendary => "Legendary",
            Self::Peerless => "Peerless",
        }
    }

    /// Case-insensitive lookup by display name
    pub fn from_name(name: &str) -> Option<Self> {
        TIERS
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(name))
    }

    /// Tier at the start of an equip name, if any
    pub fn from_equip_name(name: &str) -> Option<Self> {
        let first = name.split_whitespace().next()?;
        Self::from_name(first)
    }

    /// Scale applied to a type's average PXP0 for items of this tier.
    ///
    /// Averages are measured on peerless items; lower tiers level up faster.
    pub fn pxp_zero_factor(self) -> f64 {
        match self {
            Self::Peerless => 1.0,
            Self::Legendary => 0.95,
            Self::Magnificent => 0.89,
            _ => 0.8,
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
