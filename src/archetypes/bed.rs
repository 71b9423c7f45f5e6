use serde::{Deserialize, Serialize};

use super::DetailTier;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SleepSurfaceType {
    Mattress,
    Pallet,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameType {
    Low,
    Standard,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SleepSurfaceConfig {
    #[serde(rename = "type")]
    pub surface_type: SleepSurfaceType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameConfig {
    #[serde(rename = "type")]
    pub frame_type: FrameType,
}

/// Bed configuration. The sleep surface is required, the frame optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BedConfig {
    pub detail_tier: DetailTier,
    pub sleep_surface: SleepSurfaceConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame: Option<FrameConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SleepSurfacePart {
    pub kind: String,
    #[serde(rename = "type")]
    pub surface_type: SleepSurfaceType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BedFramePart {
    pub kind: String,
    #[serde(rename = "type")]
    pub frame_type: FrameType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedBed {
    pub detail_tier: DetailTier,
    pub sleep_surface: SleepSurfacePart,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame: Option<BedFramePart>,
}

pub fn generate_bed(config: &BedConfig) -> GeneratedBed {
    GeneratedBed {
        detail_tier: config.detail_tier,
        sleep_surface: SleepSurfacePart {
            kind: "sleepSurface".to_string(),
            surface_type: config.sleep_surface.surface_type,
        },
        frame: config.frame.as_ref().map(|frame| BedFramePart {
            kind: "frame".to_string(),
            frame_type: frame.frame_type,
        }),
    }
}
