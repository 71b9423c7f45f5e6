//! Archetype generators.
//!
//! Each generator maps a semantic configuration to a canonical generated
//! intent. Generators are pure and total: required parts are always emitted,
//! optional parts appear only when requested by the configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

mod bed;
mod chair;
mod door;
mod table;

pub use self::bed::{
    BedConfig, BedFramePart, FrameConfig, FrameType, GeneratedBed, SleepSurfaceConfig,
    SleepSurfacePart, SleepSurfaceType, generate_bed,
};
pub use self::chair::{ArmsConfig, ChairConfig, GeneratedChair, generate_chair};
pub use self::door::{DoorConfig, GeneratedDoor, HandleConfig, generate_door};
pub use self::table::{GeneratedTable, TableConfig, generate_table};

/// Uniform richness level applied to every part of one generated instance.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailTier {
    Basic,
    Profiled,
    Carved,
}

impl DetailTier {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Profiled => "profiled",
            Self::Carved => "carved",
        }
    }
}

impl fmt::Display for DetailTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DetailTier {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "basic" => Ok(Self::Basic),
            "profiled" => Ok(Self::Profiled),
            "carved" => Ok(Self::Carved),
            other => Err(format!("unknown detail tier: {other}")),
        }
    }
}

/// The generatable archetype families.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArchetypeKind {
    Chair,
    Table,
    Bed,
    Door,
}

impl ArchetypeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Chair => "chair",
            Self::Table => "table",
            Self::Bed => "bed",
            Self::Door => "door",
        }
    }
}

impl fmt::Display for ArchetypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArchetypeKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "chair" => Ok(Self::Chair),
            "table" => Ok(Self::Table),
            "bed" => Ok(Self::Bed),
            "door" => Ok(Self::Door),
            other => Err(format!("unknown archetype: {other}")),
        }
    }
}

/// Minimal part descriptor. Part identity is carried by the owning field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartDescriptor {
    pub kind: String,
}

impl PartDescriptor {
    pub fn new(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
        }
    }
}

/// Configuration for any archetype, tagged by family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "archetype", rename_all = "lowercase")]
pub enum ArchetypeConfig {
    Chair(ChairConfig),
    Table(TableConfig),
    Bed(BedConfig),
    Door(DoorConfig),
}

impl ArchetypeConfig {
    pub fn generate(&self) -> GeneratedIntent {
        match self {
            Self::Chair(config) => GeneratedIntent::Chair(generate_chair(config)),
            Self::Table(config) => GeneratedIntent::Table(generate_table(config)),
            Self::Bed(config) => GeneratedIntent::Bed(generate_bed(config)),
            Self::Door(config) => GeneratedIntent::Door(generate_door(config)),
        }
    }
}

/// Generated intent for any archetype, tagged by family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "archetype", rename_all = "lowercase")]
pub enum GeneratedIntent {
    Chair(GeneratedChair),
    Table(GeneratedTable),
    Bed(GeneratedBed),
    Door(GeneratedDoor),
}

impl GeneratedIntent {
    pub fn kind(&self) -> ArchetypeKind {
        match self {
            Self::Chair(_) => ArchetypeKind::Chair,
            Self::Table(_) => ArchetypeKind::Table,
            Self::Bed(_) => ArchetypeKind::Bed,
            Self::Door(_) => ArchetypeKind::Door,
        }
    }

    pub fn detail_tier(&self) -> DetailTier {
        match self {
            Self::Chair(intent) => intent.detail_tier,
            Self::Table(intent) => intent.detail_tier,
            Self::Bed(intent) => intent.detail_tier,
            Self::Door(intent) => intent.detail_tier,
        }
    }
}
