use serde::{Deserialize, Serialize};

use super::{DetailTier, PartDescriptor};

/// Semantic marker for the optional arms part.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmsConfig {}

/// Chair configuration. Supports, seat and back are always generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChairConfig {
    pub detail_tier: DetailTier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arms: Option<ArmsConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedChair {
    pub detail_tier: DetailTier,
    pub supports: PartDescriptor,
    pub seat: PartDescriptor,
    pub back: PartDescriptor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arms: Option<PartDescriptor>,
}

pub fn generate_chair(config: &ChairConfig) -> GeneratedChair {
    GeneratedChair {
        detail_tier: config.detail_tier,
        supports: PartDescriptor::new("supports"),
        seat: PartDescriptor::new("seat"),
        back: PartDescriptor::new("back"),
        arms: config.arms.as_ref().map(|_| PartDescriptor::new("arms")),
    }
}
