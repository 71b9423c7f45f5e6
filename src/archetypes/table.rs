use serde::{Deserialize, Serialize};

use super::{DetailTier, PartDescriptor};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableConfig {
    pub detail_tier: DetailTier,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedTable {
    pub detail_tier: DetailTier,
    pub supports: PartDescriptor,
    pub surface: PartDescriptor,
}

pub fn generate_table(config: &TableConfig) -> GeneratedTable {
    GeneratedTable {
        detail_tier: config.detail_tier,
        supports: PartDescriptor::new("supports"),
        surface: PartDescriptor::new("surface"),
    }
}
