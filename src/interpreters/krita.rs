use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{DryRunExecutionPlan, PlanDiagnostics, ThemeLookup, ThemeSource};
use crate::model::{CoreScene, KritaTheme};

const UNSORTED_GROUP: &str = "Assets/Unsorted";

#[derive(Debug, Clone, Copy, Default)]
pub struct KritaPlanOptions<'a> {
    pub include_blender_reference: bool,
    pub blender_plan: Option<&'a DryRunExecutionPlan>,
}

/// Inspectable summary of the Krita workspace a realisation would prepare.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KritaDryRunWorkspacePlan {
    pub document_overview: DocumentOverview,
    pub layer_hierarchy: Vec<LayerGroup>,
    pub asset_layer_mapping: Vec<AssetLayer>,
    pub style_theme_plan: StyleThemePlan,
    pub lighting_mood_plan: LightingMoodPlan,
    pub blender_reference_usage: BlenderReferenceUsage,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentOverview {
    pub scene_id: String,
    pub scene_title: String,
    pub output_resolution: OutputResolution,
    pub color_space: String,
    pub bit_depth: String,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputResolution {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub name: String,
    pub purpose: String,
}

impl Layer {
    fn new(name: impl Into<String>, purpose: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            purpose: purpose.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerGroup {
    pub name: String,
    pub purpose: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Layer>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepresentationType {
    #[serde(rename = "guide shape")]
    GuideShape,
    #[serde(rename = "blender reference")]
    BlenderReference,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetLayer {
    pub asset_id: String,
    pub archetype: String,
    pub assigned_group: String,
    pub representation_type: RepresentationType,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleThemePlan {
    pub theme: Option<String>,
    pub loaded_resources: Vec<String>,
    pub scope: String,
    pub notes: Vec<String>,
    pub applied_overrides: Vec<AppliedOverride>,
    pub ignored_overrides: Vec<IgnoredOverride>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedOverride {
    pub path: String,
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IgnoredOverride {
    pub path: String,
    pub value: Value,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightingMoodPlan {
    pub layers: Vec<Layer>,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlenderReferenceUsage {
    pub enabled: bool,
    pub references_used: Vec<String>,
    pub incorporation: Vec<String>,
    pub notes: Vec<String>,
}

/// Builds the Krita dry-run workspace plan. Never fails.
pub fn build_krita_plan(
    scene: &CoreScene,
    options: &KritaPlanOptions<'_>,
    themes: &dyn ThemeSource,
) -> KritaDryRunWorkspacePlan {
    let mut diagnostics = PlanDiagnostics::new();
    let use_blender_plan = options.include_blender_reference && options.blender_plan.is_some();

    let document_overview = document_overview(scene, &mut diagnostics);
    let layer_hierarchy = layer_hierarchy(scene, options.include_blender_reference);
    let asset_layer_mapping = asset_layers(scene, use_blender_plan, &mut diagnostics);
    let style_theme_plan = style_theme_plan(scene, themes, &mut diagnostics);
    let lighting_mood_plan = lighting_mood_plan(scene, &mut diagnostics);
    let blender_reference_usage = blender_reference_usage(options, &mut diagnostics);

    KritaDryRunWorkspacePlan {
        document_overview,
        layer_hierarchy,
        asset_layer_mapping,
        style_theme_plan,
        lighting_mood_plan,
        blender_reference_usage,
        warnings: diagnostics.into_warnings(),
    }
}

fn document_overview(scene: &CoreScene, diagnostics: &mut PlanDiagnostics) -> DocumentOverview {
    let resolution = scene.output.as_ref().and_then(|output| output.resolution);
    let mut notes = Vec::new();
    if resolution.is_none() {
        notes.push("Output resolution not provided; leaving resolution unspecified.".to_string());
        diagnostics.warn("Missing output.resolution; Krita document size is unspecified.");
    }

    DocumentOverview {
        scene_id: scene.scene.id.clone(),
        scene_title: scene.scene.title.clone(),
        output_resolution: OutputResolution {
            width: resolution.map(|[width, _]| width),
            height: resolution.map(|[_, height]| height),
        },
        color_space: "RGBA (default)".to_string(),
        bit_depth: "16-bit (default)".to_string(),
        notes,
    }
}

fn layer_hierarchy(scene: &CoreScene, include_blender_reference: bool) -> Vec<LayerGroup> {
    let zone_groups: Vec<Layer> = scene
        .zones()
        .iter()
        .map(|zone| Layer::new(&zone.id, format!("Assets assigned to zone: {}.", zone.id)))
        .collect();
    let asset_children = if zone_groups.is_empty() {
        vec![Layer::new(
            "Unsorted",
            "Assets without explicit zone grouping.",
        )]
    } else {
        zone_groups
    };

    vec![
        LayerGroup {
            name: "Guides".to_string(),
            purpose: "Non-destructive guide layers for layout reference.".to_string(),
            children: include_blender_reference.then(|| {
                vec![Layer::new(
                    "Blender Reference",
                    "Imported guide references (read-only).",
                )]
            }),
        },
        LayerGroup {
            name: "Assets".to_string(),
            purpose: "Asset placeholders grouped by intent.".to_string(),
            children: Some(asset_children),
        },
        LayerGroup {
            name: "Lighting".to_string(),
            purpose: "Symbolic lighting and mood guides.".to_string(),
            children: None,
        },
        LayerGroup {
            name: "Effects".to_string(),
            purpose: "Non-destructive atmosphere and adjustment guides.".to_string(),
            children: None,
        },
    ]
}

fn asset_layers(
    scene: &CoreScene,
    use_blender_plan: bool,
    diagnostics: &mut PlanDiagnostics,
) -> Vec<AssetLayer> {
    let zone_ids: BTreeSet<&str> = scene.zones().iter().map(|zone| zone.id.as_str()).collect();
    let representation_type = if use_blender_plan {
        RepresentationType::BlenderReference
    } else {
        RepresentationType::GuideShape
    };

    scene
        .assets()
        .iter()
        .map(|asset| {
            let assigned_group = match asset.zone_ref() {
                Some(zone) if zone_ids.contains(zone) => format!("Assets/{zone}"),
                Some(zone) => {
                    diagnostics.warn(format!(
                        "Asset {} references unknown zone {zone}; assigned to {UNSORTED_GROUP}.",
                        asset.id
                    ));
                    UNSORTED_GROUP.to_string()
                }
                None => {
                    diagnostics.warn(format!(
                        "Asset {} has no zone; assigned to {UNSORTED_GROUP}.",
                        asset.id
                    ));
                    UNSORTED_GROUP.to_string()
                }
            };

            AssetLayer {
                asset_id: asset.id.clone(),
                archetype: asset.archetype.clone(),
                assigned_group,
                representation_type,
                notes: vec![
                    "No spatial or layout decisions are made here.".to_string(),
                    "Representation remains a placeholder for paint-over.".to_string(),
                ],
            }
        })
        .collect()
}

fn loaded_resources(theme: &KritaTheme) -> Vec<String> {
    let mut resources = Vec::new();
    if theme.tools.is_some() {
        resources.push("brush presets".to_string());
    }
    if theme.colour_guidance.is_some() {
        resources.push("colour palettes".to_string());
    }
    if theme.texture_guidance.is_some() {
        resources.push("texture sets".to_string());
    }
    if theme.workflow_hints.is_some() {
        resources.push("workflow hints".to_string());
    }
    if theme.restrictions.is_some() {
        resources.push("tool restrictions".to_string());
    }
    resources
}

fn style_theme_plan(
    scene: &CoreScene,
    themes: &dyn ThemeSource,
    diagnostics: &mut PlanDiagnostics,
) -> StyleThemePlan {
    let empty = Map::new();
    let style = scene.style.as_ref();
    let overrides = style.map(|style| &style.overrides).unwrap_or(&empty);
    let requested = style.and_then(|style| style.theme.as_deref());

    let mut notes = Vec::new();
    let theme = match requested {
        None => {
            notes.push("No style.theme provided; using neutral defaults.".to_string());
            diagnostics.warn("Missing style.theme; using neutral tool availability.");
            None
        }
        Some(id) => match themes.lookup(id) {
            ThemeLookup::Found(theme) => {
                notes.push(format!("Loaded theme {} ({}).", theme.name, theme.version));
                Some(theme)
            }
            ThemeLookup::NotFound => {
                diagnostics.warn(format!(
                    "Unsupported style theme: {id}. Using neutral defaults."
                ));
                notes.push("Theme is unsupported; no theme resources loaded.".to_string());
                None
            }
            ThemeLookup::Invalid(issues) => {
                diagnostics.warn(format!(
                    "Style theme {id} failed validation ({} issues); using neutral defaults.",
                    issues.len()
                ));
                diagnostics.extend(
                    issues
                        .iter()
                        .map(|issue| format!("Style theme issue: {issue}")),
                );
                notes.push("Theme failed validation; no theme resources loaded.".to_string());
                None
            }
            ThemeLookup::Unavailable(message) => {
                diagnostics.warn(format!(
                    "Style theme {id} could not be loaded: {message}. Using neutral defaults."
                ));
                notes.push("Theme could not be loaded; no theme resources loaded.".to_string());
                None
            }
        },
    };

    let (applied_overrides, ignored_overrides) = match &theme {
        Some(theme) => apply_overrides(theme, overrides, diagnostics),
        None => ignore_all_overrides(overrides, diagnostics),
    };

    StyleThemePlan {
        theme: theme.as_ref().map(|theme| theme.id.clone()),
        loaded_resources: theme.as_ref().map(loaded_resources).unwrap_or_default(),
        scope: "Resources are made available only; no automatic application.".to_string(),
        notes,
        applied_overrides,
        ignored_overrides,
    }
}

fn ignore_all_overrides(
    overrides: &Map<String, Value>,
    diagnostics: &mut PlanDiagnostics,
) -> (Vec<AppliedOverride>, Vec<IgnoredOverride>) {
    if overrides.is_empty() {
        return (Vec::new(), Vec::new());
    }

    diagnostics.warn(format!(
        "Ignored {} style override(s): no theme loaded.",
        overrides.len()
    ));
    let ignored = overrides
        .iter()
        .map(|(path, value)| IgnoredOverride {
            path: path.clone(),
            value: value.clone(),
            reason: "No theme loaded.".to_string(),
        })
        .collect();
    (Vec::new(), ignored)
}

/// Overrides address `<section>.<field>` of the loaded theme.
fn apply_overrides(
    theme: &KritaTheme,
    overrides: &Map<String, Value>,
    diagnostics: &mut PlanDiagnostics,
) -> (Vec<AppliedOverride>, Vec<IgnoredOverride>) {
    let sections = theme.sections();
    let mut applied = Vec::new();
    let mut ignored = Vec::new();

    for (path, value) in overrides {
        let segments: Vec<&str> = path.split('.').collect();
        let reason = match segments.as_slice() {
            [section, field] if !section.is_empty() && !field.is_empty() => {
                match sections.get(*section) {
                    None => Some(format!("Unknown theme section: {section}.")),
                    Some(fields) if !fields.contains(*field) => {
                        Some(format!("Unknown field {field} in theme section {section}."))
                    }
                    Some(_) => None,
                }
            }
            _ => Some("Malformed override path; expected <section>.<field>.".to_string()),
        };

        match reason {
            None => applied.push(AppliedOverride {
                path: path.clone(),
                value: value.clone(),
            }),
            Some(reason) => {
                diagnostics.warn(format!("Ignored style override {path}: {reason}"));
                ignored.push(IgnoredOverride {
                    path: path.clone(),
                    value: value.clone(),
                    reason,
                });
            }
        }
    }

    (applied, ignored)
}

fn lighting_mood_plan(scene: &CoreScene, diagnostics: &mut PlanDiagnostics) -> LightingMoodPlan {
    let layers = vec![
        Layer::new("Key Light Guide", "Symbolic key light direction."),
        Layer::new("Shadow Guide", "Symbolic shadow guidance."),
        Layer::new("Atmosphere Guide", "Symbolic fog or mood guidance."),
    ];

    let notes = match &scene.lighting {
        Some(lighting) => vec![
            format!("time_of_day: {}", lighting.time_of_day),
            format!("key_direction: {}", lighting.key_direction),
            format!("contrast: {}", lighting.contrast),
            format!("fog: {}", lighting.fog),
        ],
        None => {
            diagnostics.warn("Missing lighting intent; lighting guides remain neutral.");
            vec![
                "No lighting intent provided; using neutral lighting guides.".to_string(),
                "Lighting guide layers are created by default for consistency across scenes."
                    .to_string(),
            ]
        }
    };

    LightingMoodPlan { layers, notes }
}

fn blender_reference_usage(
    options: &KritaPlanOptions<'_>,
    diagnostics: &mut PlanDiagnostics,
) -> BlenderReferenceUsage {
    let mut usage = BlenderReferenceUsage {
        enabled: options.include_blender_reference,
        references_used: Vec::new(),
        incorporation: Vec::new(),
        notes: Vec::new(),
    };

    match (options.include_blender_reference, options.blender_plan) {
        (true, Some(plan)) => {
            usage.references_used.push("blenderDryRunPlan".to_string());
            usage.incorporation = vec![
                "Guide layers only".to_string(),
                "No layout modifications".to_string(),
            ];
            usage.notes.push(format!(
                "Reference plan covers {} asset plan(s) for scene {}.",
                plan.asset_plans.len(),
                plan.scene_overview.scene_id
            ));
        }
        (true, None) => {
            diagnostics.warn("Blender reference requested but no blenderDryRunPlan provided.");
            usage
                .notes
                .push("Blender reference disabled due to missing plan.".to_string());
        }
        (false, Some(_)) => {
            diagnostics.warn(
                "Blender dry-run plan provided but includeBlenderReference is false; ignoring input.",
            );
        }
        (false, None) => {}
    }

    usage
}
