//! Prefab generation.
//!
//! A resolved Blender plan names one placeholder prefab per asset. Dispatch
//! maps `<archetype>::<tier>::<variant>` to a registered generator; anything
//! else is reported as unsupported rather than approximated.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::adapters::AdapterInput;
use crate::interpreters::{BlenderPlanOptions, DestinationScale, build_blender_plan};
use crate::model::CoreScene;
use crate::registry::RegistryStatus;

mod dispatch;
mod furniture;

pub use self::dispatch::{generate_prefab, registered_prefab_keys};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrefabGenerationInput {
    /// Key chosen by the Blender plan (`<assetId>::<tier>::<variant>`).
    pub prefab_key: String,
    pub asset_id: String,
    pub archetype_id: String,
    pub structural_parts: Vec<String>,
    pub detail_tier: String,
    pub variant: String,
    pub ergonomics_profile: String,
    pub destination_scale: DestinationScale,
}

impl PrefabGenerationInput {
    /// Generator lookup key: `<archetypeId>::<detailTier>::<variant>`.
    pub fn dispatch_key(&self) -> String {
        format!(
            "{}::{}::{}",
            self.archetype_id, self.detail_tier, self.variant
        )
    }

    pub fn has_part(&self, part: &str) -> bool {
        self.structural_parts.iter().any(|name| name == part)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrefabCreation {
    pub summary: String,
    pub artefact_ids: Vec<String>,
    pub notes: Vec<String>,
    pub adapter_input: AdapterInput,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPrefab {
    pub prefab_key: String,
    pub created: PrefabCreation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrefabErrorCode {
    UnsupportedPrefab,
    PhysicalResolutionFailed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrefabError {
    pub code: PrefabErrorCode,
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[error("prefab {prefab_key} failed: {}", .error.message)]
#[serde(rename_all = "camelCase")]
pub struct PrefabFailure {
    pub prefab_key: String,
    pub error: PrefabError,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrefabOutcomes {
    pub generated: Vec<GeneratedPrefab>,
    pub failed: Vec<PrefabFailure>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrefabReport {
    pub scene_id: String,
    pub prefabs: PrefabOutcomes,
    pub warnings: Vec<String>,
}

/// Plans the scene for Blender, then runs every resolved prefab through
/// dispatch. Structural parts come from the registry asset definition.
pub fn build_prefab_report(
    scene: &CoreScene,
    registry: &RegistryStatus,
    destination_scale: DestinationScale,
) -> PrefabReport {
    let plan = build_blender_plan(
        scene,
        &BlenderPlanOptions {
            destination_scale,
            registry,
        },
    );
    let definitions = registry.registry();
    let mut prefabs = PrefabOutcomes::default();

    for resolved in &plan.asset_resolution_summary.resolved {
        let structural_parts = definitions
            .and_then(|registry| registry.asset(&resolved.asset_id))
            .map(|asset| asset.allowed_parts.clone())
            .unwrap_or_default();

        let input = PrefabGenerationInput {
            prefab_key: resolved.prefab_plan.prefab_key.clone(),
            asset_id: resolved.asset_id.clone(),
            archetype_id: resolved.archetype.clone(),
            structural_parts,
            detail_tier: resolved.prefab_plan.detail_tier.clone(),
            variant: resolved.prefab_plan.variant.clone(),
            ergonomics_profile: plan.scene_overview.ergonomics_profile.clone(),
            destination_scale: plan.scene_overview.destination_scale,
        };

        match generate_prefab(&input) {
            Ok(generated) => prefabs.generated.push(generated),
            Err(failure) => {
                debug!(prefab_key = %failure.prefab_key, error = %failure, "prefab not generated");
                prefabs.failed.push(failure);
            }
        }
    }

    info!(
        scene_id = %plan.scene_overview.scene_id,
        generated = prefabs.generated.len(),
        failed = prefabs.failed.len(),
        "prefab generation complete"
    );

    PrefabReport {
        scene_id: plan.scene_overview.scene_id,
        prefabs,
        warnings: plan.warnings,
    }
}
