use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Extra;

/// The scene document. Consumers treat it as read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreScene {
    pub scene: SceneMeta,
    pub view: ViewSpec,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ergonomics: Option<ErgonomicsSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets: Option<Vec<SceneAsset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lighting: Option<LightingSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<StyleSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputSpec>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl CoreScene {
    pub fn assets(&self) -> &[SceneAsset] {
        self.assets.as_deref().unwrap_or_default()
    }

    pub fn floors(&self) -> &[Floor] {
        self.layout
            .as_ref()
            .map(|layout| layout.floors.as_slice())
            .unwrap_or_default()
    }

    pub fn zones(&self) -> &[Zone] {
        self.layout
            .as_ref()
            .map(|layout| layout.zones.as_slice())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneMeta {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub mood: Vec<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewSpec {
    #[serde(rename = "type")]
    pub view_type: String,
    pub variant: String,
    pub camera_preset: String,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid: Option<GridSpec>,
    #[serde(default)]
    pub floors: Vec<Floor>,
    #[serde(default)]
    pub zones: Vec<Zone>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    #[serde(rename = "type")]
    pub grid_type: String,
    pub unit: String,
    pub snap: bool,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Floor {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Symbolic ergonomic selectors. Values are checked against the known
/// vocabulary by the planners, not by validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErgonomicsSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale_profile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub door_height: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stair_rise: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reach: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clutter: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneAsset {
    pub id: String,
    pub archetype: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
    #[serde(default)]
    pub state: Map<String, Value>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl SceneAsset {
    /// Floor reference, treating an empty string as absent.
    pub fn floor_ref(&self) -> Option<&str> {
        self.floor.as_deref().filter(|floor| !floor.is_empty())
    }

    /// Zone reference, treating an empty string as absent.
    pub fn zone_ref(&self) -> Option<&str> {
        self.zone.as_deref().filter(|zone| !zone.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightingSpec {
    pub time_of_day: String,
    pub key_direction: String,
    pub contrast: String,
    pub fog: String,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    /// Dot-path (`section.field`) to override value.
    #[serde(default)]
    pub overrides: Map<String, Value>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSpec {
    #[serde(default)]
    pub targets: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<[u32; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deterministic: Option<bool>,
    #[serde(flatten)]
    pub extra: Extra,
}
