use std::collections::BTreeMap;
use std::fs;

use serde_json::{Value, json};
use tempfile::TempDir;

use super::*;
use crate::model::{CoreScene, KritaTheme};
use crate::registry::{RegistryStatus, ResolvedRegistry};
use crate::validation::{DocumentValidator, RegistryValidator, ThemeValidator};

fn scene(value: Value) -> CoreScene {
    serde_json::from_value(value).expect("fixture scene deserializes")
}

fn kitchen_scene() -> Value {
    json!({
        "scene": { "id": "scene.kitchen", "title": "Kitchen" },
        "view": { "type": "isometric", "variant": "fixed", "camera_preset": "iso_default" },
        "layout": {
            "grid": { "type": "logical", "unit": "meter", "snap": true },
            "floors": [{ "id": "ground", "active": true }],
            "zones": [{ "id": "dining", "purpose": "eating" }]
        },
        "ergonomics": {
            "scale_profile": "human_compact",
            "door_height": "tall",
            "stair_rise": "steep",
            "reach": "short",
            "clutter": "heavy"
        },
        "assets": [
            {
                "id": "assets.furniture.chair_simple",
                "archetype": "chair",
                "category": "furniture",
                "floor": "ground",
                "zone": "dining"
            }
        ],
        "lighting": { "time_of_day": "dusk", "key_direction": "left", "contrast": "high", "fog": "light" },
        "style": { "theme": "storybook_painterly" },
        "output": { "targets": ["blender", "krita"], "resolution": [1920, 1080] }
    })
}

fn available_registry(variants: &[&str]) -> RegistryStatus {
    let document = json!({
        "registry_version": "1.0.0",
        "parts": [
            { "id": "seat", "description": "Seat" },
            { "id": "back", "description": "Back" },
            { "id": "supports", "description": "Supports" }
        ],
        "archetypes": [{
            "id": "furniture.chair",
            "category": "furniture",
            "description": "Chair",
            "allowed_parts": ["seat", "back", "supports"],
            "supported_detail_tiers": ["basic", "profiled"]
        }],
        "assets": [{
            "asset_id": "assets.furniture.chair_simple",
            "category": "furniture",
            "archetype": "furniture.chair",
            "allowed_parts": ["seat", "back", "supports"],
            "supported_detail_tiers": ["basic", "profiled"],
            "supported_variants": variants,
            "description": "Chair"
        }]
    });
    let registry = RegistryValidator
        .validate(&document)
        .expect("fixture registry validates");
    let (registry, warnings) = ResolvedRegistry::index(registry);
    RegistryStatus::Available { registry, warnings }
}

fn unavailable_registry() -> RegistryStatus {
    RegistryStatus::Unavailable {
        message: "unable to read assets/registry/assets.json: not found".to_string(),
    }
}

fn blender(scene: &CoreScene, registry: &RegistryStatus) -> DryRunExecutionPlan {
    build_blender_plan(
        scene,
        &BlenderPlanOptions {
            destination_scale: DestinationScale::Neutral,
            registry,
        },
    )
}

struct MemoryThemes(BTreeMap<String, ThemeLookup>);

impl ThemeSource for MemoryThemes {
    fn lookup(&self, id: &str) -> ThemeLookup {
        self.0.get(id).cloned().unwrap_or(ThemeLookup::NotFound)
    }
}

fn painterly_theme() -> KritaTheme {
    ThemeValidator
        .validate(&json!({
            "id": "storybook_painterly",
            "name": "Storybook Painterly",
            "version": "1.0.0",
            "description": "Soft shapes",
            "target": "krita",
            "tools": { "brush_presets": ["soft_round"] },
            "colour_guidance": { "palette": "warm", "contrast": "soft" }
        }))
        .expect("fixture theme validates")
}

fn painterly_themes() -> MemoryThemes {
    MemoryThemes(BTreeMap::from([(
        "storybook_painterly".to_string(),
        ThemeLookup::Found(painterly_theme()),
    )]))
}

#[test]
fn missing_ergonomics_block_uses_baseline() {
    let mut diagnostics = PlanDiagnostics::new();
    let resolution = resolve_ergonomics(None, &mut diagnostics);

    assert_eq!(
        diagnostics.warnings(),
        ["No ergonomics provided; using default human_standard baseline."]
    );
    assert_eq!(
        resolution.notes,
        vec!["Ergonomics defaulted to human_standard baseline."]
    );
    for axis in ErgonomicAxis::ALL {
        assert_eq!(resolution.value(axis), axis.default_value());
    }
}

#[test]
fn unknown_axis_value_falls_back_for_that_axis_only() {
    let mut document = kitchen_scene();
    document["ergonomics"]["clutter"] = json!("extreme");
    let scene = scene(document);

    let mut diagnostics = PlanDiagnostics::new();
    let resolution = resolve_ergonomics(scene.ergonomics.as_ref(), &mut diagnostics);

    assert_eq!(resolution.clutter, "light");
    assert_eq!(resolution.scale_profile, "human_compact");
    assert_eq!(resolution.door_height, "tall");
    assert_eq!(resolution.stair_rise, "steep");
    assert_eq!(resolution.reach, "short");
    assert_eq!(
        diagnostics.warnings(),
        ["Unsupported ergonomics.clutter: extreme. Using light."]
    );
    assert_eq!(
        resolution.notes,
        vec!["Fallback applied: ergonomics.clutter -> light."]
    );
}

#[test]
fn ergonomics_notes_surface_through_the_plan() {
    let mut document = kitchen_scene();
    document["ergonomics"]["reach"] = json!("far");
    let scene = scene(document);
    let plan = blender(&scene, &available_registry(&["wooden"]));

    let json = serde_json::to_value(&plan).expect("plan serializes");
    let notes = &json["globalScaleResolution"]["symbolicNotes"];
    let expected = json!("Fallback applied: ergonomics.reach -> human_average.");
    assert!(notes.as_array().expect("symbolic notes").contains(&expected));
}

#[test]
fn omitted_axis_in_present_block_defaults_without_warning() {
    let mut document = kitchen_scene();
    document["ergonomics"] = json!({ "scale_profile": "human_large" });
    let scene = scene(document);

    let mut diagnostics = PlanDiagnostics::new();
    let resolution = resolve_ergonomics(scene.ergonomics.as_ref(), &mut diagnostics);

    assert!(diagnostics.warnings().is_empty());
    assert_eq!(resolution.scale_profile, "human_large");
    assert_eq!(resolution.reach, "human_average");
    assert_eq!(resolution.notes.len(), 4);
    assert_eq!(
        resolution.adjustments()[0],
        "Scale profile: human_large".to_string()
    );
}

#[test]
fn missing_registry_leaves_every_asset_unresolved() {
    let scene = scene(kitchen_scene());
    let plan = blender(&scene, &unavailable_registry());

    let summary = &plan.asset_resolution_summary;
    assert!(summary.resolved.is_empty());
    assert_eq!(
        summary.unresolved,
        vec![UnresolvedAsset {
            asset_id: "assets.furniture.chair_simple".to_string(),
            reason: "Asset registry unavailable; resolution skipped.".to_string(),
        }]
    );
    assert_eq!(
        plan.warnings,
        vec![
            "Asset registry load failed: unable to read assets/registry/assets.json: not found. Asset awareness disabled."
        ]
    );
}

#[test]
fn prefab_selection_uses_first_declared_tier_and_variant() {
    let scene = scene(kitchen_scene());
    let plan = blender(&scene, &available_registry(&["wooden", "metal"]));

    let resolved = &plan.asset_resolution_summary.resolved;
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].archetype, "furniture.chair");
    assert_eq!(
        resolved[0].prefab_plan.prefab_key,
        "assets.furniture.chair_simple::basic::wooden"
    );
    assert_eq!(resolved[0].prefab_plan.detail_tier, "basic");
    assert_eq!(resolved[0].prefab_plan.variant, "wooden");
    assert_eq!(resolved[0].supported_variants, vec!["wooden", "metal"]);
    assert!(plan.warnings.is_empty());
}

#[test]
fn registry_gaps_are_reported_per_asset() {
    let mut document = kitchen_scene();
    document["assets"]
        .as_array_mut()
        .expect("assets array")
        .push(json!({
            "id": "assets.furniture.sofa_simple",
            "archetype": "sofa",
            "category": "furniture",
            "floor": "ground",
            "zone": "dining"
        }));
    let scene = scene(document);
    let plan = blender(&scene, &available_registry(&[]));

    let unresolved = &plan.asset_resolution_summary.unresolved;
    assert_eq!(unresolved.len(), 2);
    assert_eq!(
        unresolved[0].reason,
        "No supported variants available for prefab planning."
    );
    assert_eq!(unresolved[1].reason, "Asset id not found in registry.");
    assert_eq!(
        plan.warnings,
        vec![
            "Asset assets.furniture.chair_simple has no supported variants; prefab planning skipped.",
            "Unresolved asset reference: assets.furniture.sofa_simple.",
        ]
    );
}

#[test]
fn placement_warnings_follow_declared_floors_and_zones() {
    let mut document = kitchen_scene();
    document["assets"] = json!([
        { "id": "assets.furniture.a", "archetype": "chair", "category": "furniture" },
        { "id": "assets.furniture.b", "archetype": "chair", "category": "furniture", "floor": "attic", "zone": "dining" }
    ]);
    let scene = scene(document);
    let plan = blender(&scene, &available_registry(&["wooden"]));

    let first = &plan.asset_plans[0].placement_intent;
    assert_eq!(
        first.notes,
        vec!["No floor specified.", "No zone specified."]
    );
    let second = &plan.asset_plans[1].placement_intent;
    assert_eq!(second.floor.as_deref(), Some("attic"));
    assert_eq!(
        second.notes,
        vec!["Placement intent derived from floor and zone only."]
    );

    let placement: Vec<&String> = plan
        .warnings
        .iter()
        .filter(|warning| warning.starts_with("Asset assets.furniture."))
        .collect();
    assert_eq!(
        placement,
        vec![
            "Asset assets.furniture.a is missing a floor reference.",
            "Asset assets.furniture.a is missing a zone reference.",
            "Asset assets.furniture.b references unknown floor: attic.",
        ]
    );
}

#[test]
fn blank_references_are_echoed_but_warned_as_missing() {
    let mut document = kitchen_scene();
    document["assets"][0]["floor"] = json!("");
    document["assets"][0]["zone"] = json!("");
    let scene = scene(document);
    let plan = blender(&scene, &available_registry(&["wooden"]));

    let placement = &plan.asset_plans[0].placement_intent;
    assert_eq!(placement.floor.as_deref(), Some(""));
    assert_eq!(placement.zone.as_deref(), Some(""));
    assert_eq!(
        placement.notes,
        vec!["No floor specified.", "No zone specified."]
    );
    assert_eq!(
        plan.warnings,
        vec![
            "Asset assets.furniture.chair_simple is missing a floor reference.",
            "Asset assets.furniture.chair_simple is missing a zone reference.",
        ]
    );

    let json = serde_json::to_value(&plan).expect("plan serializes");
    assert_eq!(json["assetPlans"][0]["placementIntent"]["floor"], "");
}

#[test]
fn undeclared_sets_do_not_constrain_references() {
    let mut document = kitchen_scene();
    document["layout"] = json!({ "floors": [], "zones": [] });
    document["assets"][0]["floor"] = json!("roof");
    let scene = scene(document);
    let plan = blender(&scene, &available_registry(&["wooden"]));

    assert!(plan.warnings.is_empty());
}

#[test]
fn sparse_scene_gets_neutral_sections_and_warnings() {
    let document = json!({
        "scene": { "id": "scene.road", "title": "Road" },
        "view": { "type": "top_down", "variant": "free", "camera_preset": "overhead" },
        "ergonomics": { "scale_profile": "human_standard" },
        "assets": [{
            "id": "assets.terrain.road_main",
            "archetype": "road",
            "category": "road",
            "floor": "ground",
            "zone": "street"
        }]
    });
    let scene = scene(document);
    let plan = build_blender_plan(
        &scene,
        &BlenderPlanOptions {
            destination_scale: DestinationScale::Meters,
            registry: &unavailable_registry(),
        },
    );

    assert!(plan.path_plans.is_empty());
    assert_eq!(
        plan.lighting_plan.summary,
        vec!["No lighting intent provided."]
    );
    assert_eq!(
        plan.scene_overview.destination_scale,
        DestinationScale::Meters
    );
    assert_eq!(plan.camera_plan.cameras[0].preset, "overhead");
    assert_eq!(plan.camera_plan.notes, vec!["View variant: free."]);
    assert!(
        plan.global_scale_resolution
            .symbolic_notes
            .contains(&"Destination scale: meters".to_string())
    );
    assert_eq!(
        &plan.warnings[1..],
        [
            "Assets suggest possible linear features, but no explicit linear intent fields are defined; path planning skipped.",
            "No layout provided; spatial defaults will be used.",
            "No lighting intent provided; neutral lighting assumed.",
        ]
    );
}

#[test]
fn blender_plan_is_deterministic_and_camel_cased() {
    let scene = scene(kitchen_scene());
    let registry = available_registry(&["wooden"]);

    let first = blender(&scene, &registry);
    let second = blender(&scene, &registry);
    assert_eq!(first, second);

    let json = serde_json::to_value(&first).expect("plan serializes");
    assert_eq!(json["sceneOverview"]["sceneId"], "scene.kitchen");
    assert_eq!(json["sceneOverview"]["destinationScale"], "neutral");
    assert_eq!(json["sceneOverview"]["ergonomicsProfile"], "human_compact");
    assert_eq!(json["pathPlans"], json!([]));
    assert_eq!(json["cameraPlan"]["cameras"][0]["type"], "isometric");
    assert_eq!(
        json["assetPlans"][0]["ergonomicAdjustmentsApplied"][4],
        "Clutter: heavy"
    );
    assert_eq!(
        json["lightingPlan"]["summary"],
        json!([
            "time_of_day: dusk",
            "key_direction: left",
            "contrast: high",
            "fog: light"
        ])
    );
}

#[test]
fn unknown_override_field_is_ignored_with_warning() {
    let mut document = kitchen_scene();
    document["style"]["overrides"] = json!({
        "colour_guidance.saturation": "muted",
        "colour_guidance.palette": "cool"
    });
    let scene = scene(document);
    let plan = build_krita_plan(&scene, &KritaPlanOptions::default(), &painterly_themes());

    let style = &plan.style_theme_plan;
    assert_eq!(style.theme.as_deref(), Some("storybook_painterly"));
    assert_eq!(
        style.loaded_resources,
        vec!["brush presets", "colour palettes"]
    );
    assert_eq!(
        style.applied_overrides,
        vec![AppliedOverride {
            path: "colour_guidance.palette".to_string(),
            value: json!("cool"),
        }]
    );
    assert_eq!(style.ignored_overrides.len(), 1);
    assert_eq!(
        style.ignored_overrides[0].path,
        "colour_guidance.saturation"
    );
    assert_eq!(
        plan.warnings,
        vec![
            "Ignored style override colour_guidance.saturation: Unknown field saturation in theme section colour_guidance."
        ]
    );
}

#[test]
fn malformed_and_unknown_section_overrides_are_ignored() {
    let mut document = kitchen_scene();
    document["style"]["overrides"] = json!({
        "palette": "cool",
        "lighting.key": "soft",
        "tools.brush_presets.extra": []
    });
    let scene = scene(document);
    let plan = build_krita_plan(&scene, &KritaPlanOptions::default(), &painterly_themes());

    let reasons: Vec<(&str, &str)> = plan
        .style_theme_plan
        .ignored_overrides
        .iter()
        .map(|ignored| (ignored.path.as_str(), ignored.reason.as_str()))
        .collect();
    assert_eq!(
        reasons,
        vec![
            ("lighting.key", "Unknown theme section: lighting."),
            ("palette", "Malformed override path; expected <section>.<field>."),
            (
                "tools.brush_presets.extra",
                "Malformed override path; expected <section>.<field>."
            ),
        ]
    );
    assert!(plan.style_theme_plan.applied_overrides.is_empty());
    assert_eq!(plan.warnings.len(), 3);
}

#[test]
fn overrides_without_a_theme_are_ignored_together() {
    let mut document = kitchen_scene();
    document["style"] = json!({
        "theme": "watercolour",
        "overrides": { "colour_guidance.palette": "cool", "tools.erasers": ["hard"] }
    });
    let scene = scene(document);
    let plan = build_krita_plan(&scene, &KritaPlanOptions::default(), &NoThemes);

    let style = &plan.style_theme_plan;
    assert_eq!(style.theme, None);
    assert!(style.loaded_resources.is_empty());
    assert_eq!(style.ignored_overrides.len(), 2);
    assert_eq!(
        plan.warnings,
        vec![
            "Unsupported style theme: watercolour. Using neutral defaults.",
            "Ignored 2 style override(s): no theme loaded.",
        ]
    );
}

#[test]
fn krita_groups_assets_by_declared_zone() {
    let mut document = kitchen_scene();
    document["assets"] = json!([
        { "id": "assets.furniture.a", "archetype": "chair", "category": "furniture", "zone": "dining" },
        { "id": "assets.furniture.b", "archetype": "chair", "category": "furniture", "zone": "garden" },
        { "id": "assets.furniture.c", "archetype": "chair", "category": "furniture" }
    ]);
    let scene = scene(document);
    let plan = build_krita_plan(&scene, &KritaPlanOptions::default(), &painterly_themes());

    let groups: Vec<&str> = plan
        .asset_layer_mapping
        .iter()
        .map(|layer| layer.assigned_group.as_str())
        .collect();
    assert_eq!(
        groups,
        vec!["Assets/dining", "Assets/Unsorted", "Assets/Unsorted"]
    );
    assert_eq!(
        plan.warnings,
        vec![
            "Asset assets.furniture.b references unknown zone garden; assigned to Assets/Unsorted.",
            "Asset assets.furniture.c has no zone; assigned to Assets/Unsorted.",
        ]
    );

    let assets_group = &plan.layer_hierarchy[1];
    assert_eq!(assets_group.name, "Assets");
    let children = assets_group.children.as_ref().expect("zone groups");
    assert_eq!(children[0].name, "dining");
    assert!(plan.layer_hierarchy[0].children.is_none());
}

#[test]
fn sparse_scene_produces_neutral_krita_plan() {
    let scene = scene(json!({
        "scene": { "id": "scene.empty", "title": "Empty" },
        "view": { "type": "text", "variant": "fixed", "camera_preset": "none" }
    }));
    let plan = build_krita_plan(&scene, &KritaPlanOptions::default(), &NoThemes);

    assert_eq!(plan.document_overview.output_resolution.width, None);
    assert_eq!(
        plan.layer_hierarchy[1].children.as_ref().map(Vec::len),
        Some(1)
    );
    assert_eq!(plan.lighting_mood_plan.layers.len(), 3);
    assert_eq!(
        plan.warnings,
        vec![
            "Missing output.resolution; Krita document size is unspecified.",
            "Missing style.theme; using neutral tool availability.",
            "Missing lighting intent; lighting guides remain neutral.",
        ]
    );

    let json = serde_json::to_value(&plan).expect("plan serializes");
    assert_eq!(
        json["documentOverview"]["outputResolution"],
        json!({ "width": null, "height": null })
    );
    assert_eq!(json["styleThemePlan"]["theme"], Value::Null);
}

#[test]
fn blender_reference_requires_a_plan() {
    let scene = scene(kitchen_scene());
    let registry = available_registry(&["wooden"]);
    let blender_plan = blender(&scene, &registry);

    let with_plan = build_krita_plan(
        &scene,
        &KritaPlanOptions {
            include_blender_reference: true,
            blender_plan: Some(&blender_plan),
        },
        &painterly_themes(),
    );
    assert!(with_plan.warnings.is_empty());
    assert_eq!(
        with_plan.asset_layer_mapping[0].representation_type,
        RepresentationType::BlenderReference
    );
    assert_eq!(
        with_plan.blender_reference_usage.references_used,
        vec!["blenderDryRunPlan"]
    );
    assert!(with_plan.layer_hierarchy[0].children.is_some());

    let without_plan = build_krita_plan(
        &scene,
        &KritaPlanOptions {
            include_blender_reference: true,
            blender_plan: None,
        },
        &painterly_themes(),
    );
    assert_eq!(
        without_plan.asset_layer_mapping[0].representation_type,
        RepresentationType::GuideShape
    );
    assert_eq!(
        without_plan.warnings,
        vec!["Blender reference requested but no blenderDryRunPlan provided."]
    );

    let unused = build_krita_plan(
        &scene,
        &KritaPlanOptions {
            include_blender_reference: false,
            blender_plan: Some(&blender_plan),
        },
        &painterly_themes(),
    );
    assert!(!unused.blender_reference_usage.enabled);
    assert_eq!(unused.warnings.len(), 1);
}

#[test]
fn filesystem_themes_are_validated() {
    let dir = TempDir::new().expect("temp dir");
    let good = dir.path().join("storybook_painterly");
    fs::create_dir_all(&good).expect("theme dir");
    fs::write(
        good.join("theme.json"),
        serde_json::to_string(&painterly_theme()).expect("theme serializes"),
    )
    .expect("theme written");

    let bad = dir.path().join("broken");
    fs::create_dir_all(&bad).expect("theme dir");
    fs::write(
        bad.join("theme.json"),
        json!({
            "id": "broken",
            "name": "Broken",
            "version": "1",
            "description": "x",
            "target": "krita"
        })
        .to_string(),
    )
    .expect("theme written");

    let source = FsThemeSource::new(dir.path());
    assert!(matches!(
        source.lookup("storybook_painterly"),
        ThemeLookup::Found(theme) if theme.id == "storybook_painterly"
    ));
    let ThemeLookup::Invalid(issues) = source.lookup("broken") else {
        panic!("expected an invalid theme");
    };
    assert_eq!(issues.len(), 1);
    assert_eq!(source.lookup("missing"), ThemeLookup::NotFound);
    assert_eq!(
        source.lookup("../storybook_painterly"),
        ThemeLookup::NotFound
    );
}
