use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Extra;

/// Krita style theme (`styles/themes/<id>/theme.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KritaTheme {
    pub id: String,
    pub name: String,
    pub version: String,
    pub description: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<ThemeTools>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colour_guidance: Option<ColourGuidance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub texture_guidance: Option<TextureGuidance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflow_hints: Option<WorkflowHints>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restrictions: Option<ThemeRestrictions>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl KritaTheme {
    /// Sections the theme declares, each with the fields it sets. Unknown
    /// object-valued top-level keys count as sections too.
    pub fn sections(&self) -> BTreeMap<String, BTreeSet<String>> {
        let Ok(Value::Object(document)) = serde_json::to_value(self) else {
            return BTreeMap::new();
        };

        document
            .into_iter()
            .filter_map(|(name, value)| match value {
                Value::Object(fields) => Some((name, fields.keys().cloned().collect())),
                _ => None,
            })
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeTools {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brush_presets: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub erasers: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blending_modes: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColourGuidance {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub palette: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contrast: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saturation: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextureGuidance {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_notes: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkflowHints {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_layers: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separate_lighting: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeRestrictions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disallowed_tools: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}
