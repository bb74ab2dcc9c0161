//! Persona types: the six fixed archetypes, their profile records, and the
//! sender classification used for relationship-aware replies.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Identifier of one of the six fixed character archetypes.
///
/// The string form (`flirty_boy`, `hustler_1`, ...) is used in config files,
/// the REST API, and log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArchetypeId {
    #[serde(rename = "flirty_boy")]
    FlirtyBoy,
    #[serde(rename = "girl")]
    Girl,
    #[serde(rename = "mature_guy")]
    MatureGuy,
    #[serde(rename = "curious_teen")]
    CuriousTeen,
    #[serde(rename = "hustler_1")]
    Hustler1,
    #[serde(rename = "hustler_2")]
    Hustler2,
}

impl ArchetypeId {
    /// All archetypes in catalog order.
    pub const ALL: [ArchetypeId; 6] = [
        ArchetypeId::FlirtyBoy,
        ArchetypeId::Girl,
        ArchetypeId::MatureGuy,
        ArchetypeId::CuriousTeen,
        ArchetypeId::Hustler1,
        ArchetypeId::Hustler2,
    ];

    /// Archetype used whenever a lookup misses.
    pub const DEFAULT: ArchetypeId = ArchetypeId::CuriousTeen;

    pub fn as_str(&self) -> &'static str {
        match self {
            ArchetypeId::FlirtyBoy => "flirty_boy",
            ArchetypeId::Girl => "girl",
            ArchetypeId::MatureGuy => "mature_guy",
            ArchetypeId::CuriousTeen => "curious_teen",
            ArchetypeId::Hustler1 => "hustler_1",
            ArchetypeId::Hustler2 => "hustler_2",
        }
    }
}

impl fmt::Display for ArchetypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArchetypeId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "flirty_boy" => Ok(ArchetypeId::FlirtyBoy),
            "girl" => Ok(ArchetypeId::Girl),
            "mature_guy" => Ok(ArchetypeId::MatureGuy),
            "curious_teen" => Ok(ArchetypeId::CuriousTeen),
            "hustler_1" => Ok(ArchetypeId::Hustler1),
            "hustler_2" => Ok(ArchetypeId::Hustler2),
            other => Err(format!("unknown archetype: '{other}'")),
        }
    }
}

/// Immutable profile of an archetype.
///
/// Profiles are static and never mutated at runtime; see
/// `banter_core::persona::catalog` for the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Archetype {
    pub id: ArchetypeId,
    /// Display name shown in logs and the CLI (e.g., "Flirty Boy").
    pub name: &'static str,
    /// Age bracket (e.g., "18-19").
    pub age: &'static str,
    /// Free-text role within the group.
    pub role: &'static str,
    /// Free-text tone descriptor.
    pub style: &'static str,
    /// Sample phrases used to bias generation.
    pub examples: &'static [&'static str],
}

/// Prompt-facing style of an archetype: how the character sounds when
/// replying. Distinct from the catalog's role description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Style {
    pub tone: &'static str,
    pub examples: &'static [&'static str],
}

/// Likely author of an inbound message, inferred from its wording.
///
/// Hustler messages are not split into the two hustler archetypes; the
/// classifier only knows "someone is talking business".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SenderKind {
    Girl,
    FlirtyBoy,
    MatureGuy,
    CuriousTeen,
    Hustler,
    Unknown,
}

impl SenderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SenderKind::Girl => "girl",
            SenderKind::FlirtyBoy => "flirty_boy",
            SenderKind::MatureGuy => "mature_guy",
            SenderKind::CuriousTeen => "curious_teen",
            SenderKind::Hustler => "hustler",
            SenderKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for SenderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
