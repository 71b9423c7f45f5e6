use serde_json::{Value, json};

use super::*;

fn minimal_scene() -> Value {
    json!({
        "scene": { "id": "scene.kitchen", "title": "Kitchen" },
        "view": { "type": "isometric", "variant": "fixed", "camera_preset": "iso_default" }
    })
}

fn messages(issues: &[ValidationIssue]) -> Vec<String> {
    issues.iter().map(ToString::to_string).collect()
}

fn registry_document() -> Value {
    json!({
        "registry_version": "0.1.0",
        "parts": [
            { "id": "seat", "description": "Seat" },
            { "id": "back", "description": "Back" },
            { "id": "supports", "description": "Legs" },
            { "id": "surface", "description": "Top" }
        ],
        "archetypes": [
            {
                "id": "furniture.chair",
                "category": "furniture",
                "description": "Chair",
                "allowed_parts": ["seat", "back", "supports"],
                "supported_detail_tiers": ["basic"]
            }
        ],
        "assets": [
            {
                "asset_id": "assets.furniture.chair_simple",
                "category": "furniture",
                "archetype": "furniture.chair",
                "allowed_parts": ["seat", "back"],
                "supported_detail_tiers": ["basic"],
                "description": "Simple chair"
            }
        ]
    })
}

fn theme_document() -> Value {
    json!({
        "id": "storybook_painterly",
        "name": "Storybook Painterly",
        "version": "1.0.0",
        "description": "Soft painterly look",
        "target": "krita",
        "colour_guidance": { "palette": "warm", "contrast": "soft" },
        "future_section": { "anything": 1 }
    })
}

#[test]
fn format_issue_path_renders_keys_and_indices() {
    assert_eq!(format_issue_path(&[]), "<root>");
    assert_eq!(
        format_issue_path(&["assets".into(), 0_usize.into(), "id".into()]),
        "assets[0].id"
    );
    assert_eq!(
        format_issue_path(&["output".into(), "resolution".into(), 1_usize.into()]),
        "output.resolution[1]"
    );
    assert_eq!(
        format_issue_path(&["a".into(), 0_usize.into(), "b".into(), 2_usize.into()]),
        "a[0].b[2]"
    );
}

#[test]
fn minimal_scene_is_valid() {
    let scene = SceneValidator
        .validate(&minimal_scene())
        .expect("minimal scene validates");
    assert_eq!(scene.scene.id, "scene.kitchen");
    assert_eq!(scene.view.view_type, "isometric");
    assert!(scene.assets().is_empty());
    assert!(scene.layout.is_none());
}

#[test]
fn unknown_scene_keys_survive_a_round_trip() {
    let mut document = minimal_scene();
    document["notes"] = json!({ "author": "studio" });
    document["view"]["fov_hint"] = json!("wide");

    let scene = SceneValidator.validate(&document).expect("scene validates");
    assert_eq!(scene.extra["notes"]["author"], "studio");

    let written = serde_json::to_value(&scene).expect("scene serializes");
    assert_eq!(written["notes"], document["notes"]);
    assert_eq!(written["view"]["fov_hint"], "wide");
}

#[test]
fn non_object_scene_reports_root_issue() {
    let issues = SceneValidator
        .validate(&json!([1, 2]))
        .expect_err("array is not a scene");
    assert_eq!(
        messages(&issues),
        vec!["<root>: Expected object, received array"]
    );
}

#[test]
fn missing_required_fields_are_reported_with_paths() {
    let document = json!({
        "scene": { "id": "scene.kitchen" },
        "view": { "type": "isometric", "camera_preset": 3 }
    });

    let issues = SceneValidator
        .validate(&document)
        .expect_err("scene is incomplete");
    assert_eq!(
        messages(&issues),
        vec![
            "scene.title: Required",
            "view.variant: Required",
            "view.camera_preset: Expected string, received number",
        ]
    );
}

#[test]
fn enum_violations_list_the_allowed_values() {
    let mut document = minimal_scene();
    document["view"]["variant"] = json!("orbit");
    document["lighting"] = json!({
        "time_of_day": "noon",
        "key_direction": "left",
        "contrast": "low",
        "fog": "none"
    });

    let issues = SceneValidator
        .validate(&document)
        .expect_err("enums are checked");
    assert_eq!(
        messages(&issues),
        vec![
            "view.variant: Invalid enum value. Expected 'fixed' | 'free', received 'orbit'",
            "lighting.time_of_day: Invalid enum value. Expected 'dawn' | 'day' | 'dusk' | 'night', received 'noon'",
        ]
    );
}

#[test]
fn unknown_ergonomics_values_pass_validation() {
    let mut document = minimal_scene();
    document["ergonomics"] = json!({ "scale_profile": "human_standard", "clutter": "extreme" });

    let scene = SceneValidator
        .validate(&document)
        .expect("unknown symbols are accepted");
    let ergonomics = scene.ergonomics.expect("ergonomics present");
    assert_eq!(ergonomics.clutter.as_deref(), Some("extreme"));
    assert_eq!(ergonomics.reach, None);
}

#[test]
fn non_string_ergonomics_values_are_rejected() {
    let mut document = minimal_scene();
    document["ergonomics"] = json!({ "reach": 2 });

    let issues = SceneValidator
        .validate(&document)
        .expect_err("reach must be a string");
    assert_eq!(
        messages(&issues),
        vec!["ergonomics.reach: Expected string, received number"]
    );
}

#[test]
fn asset_ids_must_follow_the_naming_scheme() {
    let mut document = minimal_scene();
    document["assets"] = json!([
        { "id": "assets.furniture.chair_simple", "archetype": "chair", "category": "furniture" },
        { "id": "chair_simple", "archetype": "chair", "category": "furniture" }
    ]);

    let issues = SceneValidator
        .validate(&document)
        .expect_err("second id is malformed");
    assert_eq!(issues.len(), 1);
    assert_eq!(format_issue_path(&issues[0].path), "assets[1].id");
    assert!(issues[0].message.starts_with("Invalid asset id"));
}

#[test]
fn output_resolution_requires_two_positive_integers() {
    let mut document = minimal_scene();
    document["output"] = json!({ "targets": ["krita", "maya"], "resolution": [0, 1.5] });

    let issues = SceneValidator
        .validate(&document)
        .expect_err("output is invalid");
    assert_eq!(
        messages(&issues),
        vec![
            "output.targets[1]: Invalid enum value. Expected 'blender' | 'krita', received 'maya'",
            "output.resolution[0]: Number must be greater than 0",
            "output.resolution[1]: Expected integer, received float",
        ]
    );

    document["output"] = json!({ "resolution": [1920, 1080, 3] });
    let issues = SceneValidator
        .validate(&document)
        .expect_err("three elements");
    assert_eq!(
        messages(&issues),
        vec!["output.resolution: Expected [width, height], received 3 element(s)"]
    );

    document["output"] = json!({ "resolution": [1920, 1080], "deterministic": true });
    let scene = SceneValidator.validate(&document).expect("valid output");
    let output = scene.output.expect("output present");
    assert_eq!(output.resolution, Some([1920, 1080]));
    assert!(output.targets.is_empty());
}

#[test]
fn layout_members_are_checked() {
    let mut document = minimal_scene();
    document["layout"] = json!({
        "grid": { "type": "logical", "unit": "feet", "snap": true },
        "floors": [{ "id": "ground", "active": "yes" }],
        "zones": [{ "purpose": "cooking" }]
    });

    let issues = SceneValidator
        .validate(&document)
        .expect_err("layout is invalid");
    assert_eq!(
        messages(&issues),
        vec![
            "layout.grid.unit: Invalid enum value. Expected 'meter', received 'feet'",
            "layout.floors[0].active: Expected boolean, received string",
            "layout.zones[0].id: Required",
        ]
    );
}

#[test]
fn registry_document_validates() {
    let registry = RegistryValidator
        .validate(&registry_document())
        .expect("registry validates");
    assert_eq!(registry.registry_version, "0.1.0");
    assert!(registry.assets[0].supported_variants.is_empty());
}

#[test]
fn registry_prefix_rules_are_enforced() {
    let mut document = registry_document();
    document["archetypes"][0]["category"] = json!("structure");
    document["assets"][0]["category"] = json!("props");

    let issues = RegistryValidator
        .validate(&document)
        .expect_err("prefixes mismatch");
    assert_eq!(
        messages(&issues),
        vec![
            "archetypes[0].id: Archetype id must start with \"structure.\" to match category.",
            "assets[0].asset_id: Asset id must start with \"assets.props.\" to match category.",
        ]
    );
}

#[test]
fn registry_lists_must_not_be_empty() {
    let mut document = registry_document();
    document["assets"][0]["supported_detail_tiers"] = json!([]);

    let issues = RegistryValidator
        .validate(&document)
        .expect_err("tiers are empty");
    assert_eq!(
        messages(&issues),
        vec!["assets[0].supported_detail_tiers: Array must contain at least 1 element(s)"]
    );
}

#[test]
fn registry_cross_references_are_issues() {
    let mut document = registry_document();
    document["archetypes"][0]["allowed_parts"] = json!(["seat", "back", "supports", "cushion"]);
    document["assets"][0]["allowed_parts"] = json!(["seat", "surface"]);
    document["assets"]
        .as_array_mut()
        .expect("assets array")
        .push(json!({
            "asset_id": "assets.furniture.table_simple",
            "category": "furniture",
            "archetype": "furniture.table",
            "allowed_parts": ["surface"],
            "supported_detail_tiers": ["basic"],
            "supported_variants": ["wooden"],
            "description": "Table"
        }));

    let issues = RegistryValidator
        .validate(&document)
        .expect_err("references are broken");
    assert_eq!(
        messages(&issues),
        vec![
            "archetypes[0].allowed_parts[3]: Unknown part id \"cushion\".",
            "assets[0].allowed_parts[1]: Part \"surface\" is not allowed by archetype \"furniture.chair\".",
            "assets[1].archetype: Unknown archetype \"furniture.table\".",
        ]
    );
}

#[test]
fn registry_version_must_look_like_semver() {
    let mut document = registry_document();
    document["registry_version"] = json!("v1");

    let issues = RegistryValidator
        .validate(&document)
        .expect_err("bad version");
    assert_eq!(format_issue_path(&issues[0].path), "registry_version");
}

#[test]
fn theme_document_validates_and_keeps_unknown_sections() {
    let theme = ThemeValidator
        .validate(&theme_document())
        .expect("theme validates");
    assert_eq!(theme.target, "krita");
    assert!(theme.extra.contains_key("future_section"));

    let sections = theme.sections();
    assert!(sections["colour_guidance"].contains("palette"));
    assert!(!sections["colour_guidance"].contains("saturation"));
    assert!(sections.contains_key("future_section"));
}

#[test]
fn theme_target_and_section_types_are_checked() {
    let mut document = theme_document();
    document["target"] = json!("photoshop");
    document["workflow_hints"] = json!({ "separate_lighting": "yes" });
    document["tools"] = json!(["brush"]);

    let issues = ThemeValidator
        .validate(&document)
        .expect_err("theme is invalid");
    assert_eq!(
        messages(&issues),
        vec![
            "target: Invalid literal value, expected \"krita\"",
            "tools: Expected object, received array",
            "workflow_hints.separate_lighting: Expected boolean, received string",
        ]
    );
}
