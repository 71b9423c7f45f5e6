use serde::{Deserialize, Serialize};

use super::{DetailTier, PartDescriptor};

/// Semantic marker for the optional handle part.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandleConfig {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoorConfig {
    pub detail_tier: DetailTier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle: Option<HandleConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedDoor {
    pub detail_tier: DetailTier,
    pub frame: PartDescriptor,
    pub panel: PartDescriptor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle: Option<PartDescriptor>,
}

pub fn generate_door(config: &DoorConfig) -> GeneratedDoor {
    GeneratedDoor {
        detail_tier: config.detail_tier,
        frame: PartDescriptor::new("frame"),
        panel: PartDescriptor::new("panel"),
        handle: config
            .handle
            .as_ref()
            .map(|_| PartDescriptor::new("handle")),
    }
}
