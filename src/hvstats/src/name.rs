//! Equip name grammar
//!
//! Equip names follow a fixed five part grammar:
//!
//! ```text
//! tier (prefix) type (article) (suffix)
//! Legendary Demonic Willow Staff of Destruction
//! ```
//!
//! Each part is read from a closed vocabulary in [`crate::reference`]. Names
//! rendered without the game's custom font arrive fully lower-cased, so all
//! matching ignores case and parsed fields hold the canonical spelling.

use serde::{Serialize, Serializer};

use crate::reference::{EquipType, Tier, EQUIP_TYPES, PREFIXES, SUFFIXES, SUFFIX_ARTICLES, TIERS};

/// Errors that can occur while parsing an equip name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NameFormatError {
    #[error("No quality tier at the start of {name:?}")]
    MissingTier { name: String },

    #[error("No equip type in {name:?} (stopped at {remainder:?})")]
    MissingType { name: String, remainder: String },

    #[error("Unparsed text {remainder:?} left in {name:?}")]
    TrailingText { name: String, remainder: String },
}

/// A parsed equip name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipName {
    pub tier: Tier,
    pub prefix: Option<&'static str>,
    #[serde(rename = "type", serialize_with = "serialize_type_name")]
    pub equip_type: &'static EquipType,
    pub suffix_article: Option<&'static str>,
    pub suffix: Option<&'static str>,
}

fn serialize_type_name<S: Serializer>(t: &&'static EquipType, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(t.name)
}

impl EquipName {
    /// Parse a display name into its grammar parts.
    ///
    /// The five stages run in order and each accepts the first vocabulary
    /// entry (by list position) that is a prefix of the remaining text, so
    /// words need not be separated. Tier and type are required; anything left
    /// over after the suffix is an error.
    pub fn parse(name: &str) -> Result<Self, NameFormatError> {
        let normalized = normalize(name);
        let rem = normalized.as_str();

        let (tier, rem) = take(rem, TIERS.iter().copied(), |t| t.name()).ok_or_else(|| {
            NameFormatError::MissingTier {
                name: name.to_string(),
            }
        })?;

        let (prefix, rem) = take_optional(rem, PREFIXES.iter().copied(), |p| p);

        let (equip_type, rem) =
            take(rem, EQUIP_TYPES.iter(), |t| t.name).ok_or_else(|| {
                NameFormatError::MissingType {
                    name: name.to_string(),
                    remainder: rem.to_string(),
                }
            })?;

        let (suffix_article, rem) = take_optional(rem, SUFFIX_ARTICLES.iter().copied(), |a| a);
        let (suffix, rem) = take_optional(rem, SUFFIXES.iter().copied(), |s| s);

        if !rem.is_empty() {
            return Err(NameFormatError::TrailingText {
                name: name.to_string(),
                remainder: rem.to_string(),
            });
        }

        Ok(Self {
            tier,
            prefix,
            equip_type,
            suffix_article,
            suffix,
        })
    }

    fn parts(&self) -> impl Iterator<Item = &'static str> {
        [
            Some(self.tier.name()),
            self.prefix,
            Some(self.equip_type.name),
            self.suffix_article,
            self.suffix,
        ]
        .into_iter()
        .flatten()
    }

    /// Lower-cased name rebuilt from the parsed parts
    pub fn joined_lower(&self) -> String {
        self.to_string().to_lowercase()
    }

    /// Name without the suffix article, used as a deduplication key
    pub fn key(&self) -> String {
        [
            Some(self.tier.name()),
            self.prefix,
            Some(self.equip_type.name),
            self.suffix,
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ")
    }
}

impl std::fmt::Display for EquipName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for part in self.parts() {
            if !first {
                f.write_str(" ")?;
            }
            f.write_str(part)?;
            first = false;
        }
        Ok(())
    }
}

impl std::str::FromStr for EquipName {
    type Err = NameFormatError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Lower-case and collapse whitespace runs to single spaces
fn normalize(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Match `word` case-insensitively at the start of `rem`, returning the rest
/// with leading spaces trimmed
fn strip_word<'r>(rem: &'r str, word: &str) -> Option<&'r str> {
    let n = word.len();
    if rem.len() < n || !rem.is_char_boundary(n) || !rem[..n].eq_ignore_ascii_case(word) {
        return None;
    }
    Some(rem[n..].trim_start())
}

fn take<'r, T>(
    rem: &'r str,
    entries: impl IntoIterator<Item = T>,
    name: impl Fn(T) -> &'static str,
) -> Option<(T, &'r str)>
where
    T: Copy,
{
    entries
        .into_iter()
        .find_map(|entry| strip_word(rem, name(entry)).map(|rest| (entry, rest)))
}

fn take_optional<'r, T>(
    rem: &'r str,
    entries: impl IntoIterator<Item = T>,
    name: impl Fn(T) -> &'static str,
) -> (Option<T>, &'r str)
where
    T: Copy,
{
    match take(rem, entries, name) {
        Some((entry, rest)) => (Some(entry), rest),
        None => (None, rem),
    }
}
