use serde::{Deserialize, Serialize};

use super::Extra;

/// Asset registry document (`assets/registry/assets.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetRegistry {
    pub registry_version: String,
    pub parts: Vec<PartDefinition>,
    pub archetypes: Vec<ArchetypeDefinition>,
    pub assets: Vec<AssetDefinition>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartDefinition {
    pub id: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchetypeDefinition {
    /// `<category>.<identity>`
    pub id: String,
    pub category: String,
    pub description: String,
    pub allowed_parts: Vec<String>,
    pub supported_detail_tiers: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetDefinition {
    /// `assets.<category>.<identity>`
    pub asset_id: String,
    pub category: String,
    pub archetype: String,
    pub allowed_parts: Vec<String>,
    pub supported_detail_tiers: Vec<String>,
    #[serde(default)]
    pub supported_variants: Vec<String>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}
