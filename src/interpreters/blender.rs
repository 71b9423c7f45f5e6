use std::collections::BTreeSet;
use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::{PlanDiagnostics, resolve_ergonomics};
use crate::model::{CoreScene, SceneAsset};
use crate::registry::RegistryStatus;

const REASON_REGISTRY_UNAVAILABLE: &str = "Asset registry unavailable; resolution skipped.";
const REASON_NOT_FOUND: &str = "Asset id not found in registry.";
const REASON_NO_TIERS: &str = "No supported detail tiers available for prefab planning.";
const REASON_NO_VARIANTS: &str = "No supported variants available for prefab planning.";

const LINEAR_CATEGORIES: &[&str] = &["road", "water"];

/// Symbolic scale profile threaded through to realisation. No numeric
/// conversion happens in dry-run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DestinationScale {
    #[default]
    Neutral,
    Meters,
    Centimeters,
}

impl DestinationScale {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Meters => "meters",
            Self::Centimeters => "centimeters",
        }
    }
}

impl fmt::Display for DestinationScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BlenderPlanOptions<'a> {
    pub destination_scale: DestinationScale,
    pub registry: &'a RegistryStatus,
}

/// Inspectable summary of what a Blender realisation would create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DryRunExecutionPlan {
    pub scene_overview: SceneOverview,
    pub global_scale_resolution: GlobalScaleResolution,
    pub asset_plans: Vec<AssetPlan>,
    pub path_plans: Vec<PathPlan>,
    pub camera_plan: CameraPlan,
    pub lighting_plan: LightingPlan,
    pub asset_resolution_summary: AssetResolutionSummary,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneOverview {
    pub scene_id: String,
    pub view_type: String,
    pub view_variant: String,
    pub ergonomics_profile: String,
    pub destination_scale: DestinationScale,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalScaleResolution {
    pub ergonomic_baseline: String,
    pub symbolic_notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetPlan {
    pub id: String,
    pub archetype: String,
    pub category: String,
    pub placement_intent: PlacementIntent,
    pub ergonomic_adjustments_applied: Vec<String>,
    pub placeholder_representation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementIntent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathRepresentation {
    Spline,
    Strip,
}

/// Linear feature plan. Never produced: scenes carry no linear intent fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathPlan {
    pub id: String,
    pub archetype: String,
    pub category: String,
    pub representation_type: PathRepresentation,
    pub referenced_by: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraPlan {
    pub cameras: Vec<CameraSpec>,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraSpec {
    #[serde(rename = "type")]
    pub camera_type: String,
    pub preset: String,
    pub purpose: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightingPlan {
    pub summary: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetResolutionSummary {
    pub resolved: Vec<ResolvedAsset>,
    pub unresolved: Vec<UnresolvedAsset>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedAsset {
    pub asset_id: String,
    pub archetype: String,
    pub supported_detail_tiers: Vec<String>,
    pub supported_variants: Vec<String>,
    pub prefab_plan: PrefabPlan,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrefabPlan {
    pub prefab_key: String,
    pub detail_tier: String,
    pub variant: String,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnresolvedAsset {
    pub asset_id: String,
    pub reason: String,
}

/// Builds the Blender dry-run plan. Never fails: every missing or unknown
/// input becomes a warning and a documented default.
pub fn build_blender_plan(
    scene: &CoreScene,
    options: &BlenderPlanOptions<'_>,
) -> DryRunExecutionPlan {
    let destination_scale = options.destination_scale;
    let mut diagnostics = PlanDiagnostics::new();
    diagnostics.extend(options.registry.plan_warnings());

    let ergonomics = resolve_ergonomics(scene.ergonomics.as_ref(), &mut diagnostics);
    let adjustments = ergonomics.adjustments();

    let floor_ids: BTreeSet<&str> = scene
        .floors()
        .iter()
        .map(|floor| floor.id.as_str())
        .collect();
    let zone_ids: BTreeSet<&str> = scene.zones().iter().map(|zone| zone.id.as_str()).collect();

    let asset_plans = scene
        .assets()
        .iter()
        .map(|asset| plan_asset(asset, &floor_ids, &zone_ids, &adjustments, &mut diagnostics))
        .collect();

    let asset_resolution_summary =
        resolve_assets(scene.assets(), options.registry, &mut diagnostics);

    if scene
        .assets()
        .iter()
        .any(|asset| LINEAR_CATEGORIES.contains(&asset.category.as_str()))
    {
        diagnostics.warn(
            "Assets suggest possible linear features, but no explicit linear intent fields are defined; path planning skipped.",
        );
    }

    if scene.layout.is_none() {
        diagnostics.warn("No layout provided; spatial defaults will be used.");
    }

    let lighting_summary = match &scene.lighting {
        Some(lighting) => vec![
            format!("time_of_day: {}", lighting.time_of_day),
            format!("key_direction: {}", lighting.key_direction),
            format!("contrast: {}", lighting.contrast),
            format!("fog: {}", lighting.fog),
        ],
        None => {
            diagnostics.warn("No lighting intent provided; neutral lighting assumed.");
            vec!["No lighting intent provided.".to_string()]
        }
    };

    let mut symbolic_notes: Vec<String> = adjustments.iter().skip(1).cloned().collect();
    symbolic_notes.push(format!("Destination scale: {destination_scale}"));
    symbolic_notes.push("No numeric conversion applied in dry-run.".to_string());
    symbolic_notes.extend(ergonomics.notes.iter().cloned());

    let view = &scene.view;
    DryRunExecutionPlan {
        scene_overview: SceneOverview {
            scene_id: scene.scene.id.clone(),
            view_type: view.view_type.clone(),
            view_variant: view.variant.clone(),
            ergonomics_profile: ergonomics.scale_profile.clone(),
            destination_scale,
        },
        global_scale_resolution: GlobalScaleResolution {
            ergonomic_baseline: ergonomics.scale_profile.clone(),
            symbolic_notes,
        },
        asset_plans,
        path_plans: Vec::new(),
        camera_plan: CameraPlan {
            cameras: vec![CameraSpec {
                camera_type: view.view_type.clone(),
                preset: view.camera_preset.clone(),
                purpose: format!("View intent: {}.", view.view_type),
            }],
            notes: vec![format!("View variant: {}.", view.variant)],
        },
        lighting_plan: LightingPlan {
            summary: lighting_summary,
        },
        asset_resolution_summary,
        warnings: diagnostics.into_warnings(),
    }
}

fn plan_asset(
    asset: &SceneAsset,
    floor_ids: &BTreeSet<&str>,
    zone_ids: &BTreeSet<&str>,
    adjustments: &[String],
    diagnostics: &mut PlanDiagnostics,
) -> AssetPlan {
    let id = &asset.id;
    let floor = asset.floor_ref();
    let zone = asset.zone_ref();

    match floor {
        None => diagnostics.warn(format!("Asset {id} is missing a floor reference.")),
        Some(floor) if !floor_ids.is_empty() && !floor_ids.contains(floor) => {
            diagnostics.warn(format!("Asset {id} references unknown floor: {floor}."));
        }
        Some(_) => {}
    }

    match zone {
        None => diagnostics.warn(format!("Asset {id} is missing a zone reference.")),
        Some(zone) if !zone_ids.is_empty() && !zone_ids.contains(zone) => {
            diagnostics.warn(format!("Asset {id} references unknown zone: {zone}."));
        }
        Some(_) => {}
    }

    if asset.archetype.trim().is_empty() {
        diagnostics.warn(format!("Asset {id} has an empty archetype value."));
        diagnostics.warn(format!("Unsupported archetype for asset {id}: <empty>."));
    }

    let mut notes = Vec::new();
    if floor.is_none() {
        notes.push("No floor specified.".to_string());
    }
    if zone.is_none() {
        notes.push("No zone specified.".to_string());
    }
    if notes.is_empty() {
        notes.push("Placement intent derived from floor and zone only.".to_string());
    }

    AssetPlan {
        id: id.clone(),
        archetype: asset.archetype.clone(),
        category: asset.category.clone(),
        placement_intent: PlacementIntent {
            floor: asset.floor.clone(),
            zone: asset.zone.clone(),
            notes,
        },
        ergonomic_adjustments_applied: adjustments.to_vec(),
        placeholder_representation: format!(
            "Primitive placeholder for {} ({}).",
            asset.archetype, asset.category
        ),
    }
}

impl AssetResolutionSummary {
    fn skip(&mut self, asset_id: &str, reason: &str) {
        self.unresolved.push(UnresolvedAsset {
            asset_id: asset_id.to_string(),
            reason: reason.to_string(),
        });
    }
}

/// Selects a placeholder prefab per asset: the first declared tier and
/// variant, in registry order.
fn resolve_assets(
    assets: &[SceneAsset],
    registry: &RegistryStatus,
    diagnostics: &mut PlanDiagnostics,
) -> AssetResolutionSummary {
    let mut summary = AssetResolutionSummary::default();

    for asset in assets {
        let Some(registry) = registry.registry() else {
            summary.skip(&asset.id, REASON_REGISTRY_UNAVAILABLE);
            continue;
        };

        let Some(definition) = registry.asset(&asset.id) else {
            diagnostics.warn(format!("Unresolved asset reference: {}.", asset.id));
            summary.skip(&asset.id, REASON_NOT_FOUND);
            continue;
        };

        let Some(detail_tier) = definition.supported_detail_tiers.first() else {
            diagnostics.warn(format!(
                "Asset {} has no supported detail tiers; prefab planning skipped.",
                asset.id
            ));
            summary.skip(&asset.id, REASON_NO_TIERS);
            continue;
        };

        let Some(variant) = definition.supported_variants.first() else {
            diagnostics.warn(format!(
                "Asset {} has no supported variants; prefab planning skipped.",
                asset.id
            ));
            summary.skip(&asset.id, REASON_NO_VARIANTS);
            continue;
        };

        summary.resolved.push(ResolvedAsset {
            asset_id: asset.id.clone(),
            archetype: definition.archetype.clone(),
            supported_detail_tiers: definition.supported_detail_tiers.clone(),
            supported_variants: definition.supported_variants.clone(),
            prefab_plan: PrefabPlan {
                prefab_key: format!("{}::{detail_tier}::{variant}", asset.id),
                detail_tier: detail_tier.clone(),
                variant: variant.clone(),
                notes: vec![
                    "Prefab selection is provisional and ordering-based.".to_string(),
                    "First supported detail tier/variant chosen as a temporary placeholder."
                        .to_string(),
                    "No geometry or Blender assets are generated in dry-run.".to_string(),
                ],
            },
        });
    }

    summary
}
