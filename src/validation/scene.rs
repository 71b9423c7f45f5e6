use serde_json::Value;

use super::checker::{ASSET_ID, Checker, Object, child};
use super::{DocumentValidator, PathSegment, ValidationIssue};
use crate::model::CoreScene;

const VIEW_TYPES: &[&str] = &[
    "text",
    "text_image",
    "scene_2_5d",
    "top_down",
    "isometric",
    "external_3d",
];
const VIEW_VARIANTS: &[&str] = &["fixed", "free"];
const ERGONOMIC_AXES: &[&str] = &[
    "scale_profile",
    "door_height",
    "stair_rise",
    "reach",
    "clutter",
];
const TIMES_OF_DAY: &[&str] = &["dawn", "day", "dusk", "night"];
const KEY_DIRECTIONS: &[&str] = &["left", "right", "front", "back"];
const CONTRASTS: &[&str] = &["low", "medium", "high"];
const FOG_LEVELS: &[&str] = &["none", "light", "medium", "heavy"];
const OUTPUT_TARGETS: &[&str] = &["blender", "krita"];

/// Validates core scene documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct SceneValidator;

impl DocumentValidator for SceneValidator {
    type Output = CoreScene;

    fn validate(&self, value: &Value) -> Result<CoreScene, Vec<ValidationIssue>> {
        let mut checker = Checker::default();
        if let Some(root) = checker.object(value, &[]) {
            check_meta(&mut checker, root);
            check_view(&mut checker, root);
            check_layout(&mut checker, root);
            check_ergonomics(&mut checker, root);
            check_assets(&mut checker, root);
            check_lighting(&mut checker, root);
            check_style(&mut checker, root);
            check_output(&mut checker, root);
        }
        checker.finish(value)
    }
}

fn check_meta(checker: &mut Checker, root: &Object) {
    let path = [PathSegment::from("scene")];
    let Some(meta) = checker.required_object(root, "scene", &[]) else {
        return;
    };

    checker.required_string(meta, "id", &path);
    checker.required_string(meta, "title", &path);
    checker.optional_string(meta, "description", &path);
    for key in ["tags", "mood"] {
        if let Some(list) = meta.get(key) {
            checker.string_list(list, &child(&path, key), false, None);
        }
    }
}

fn check_view(checker: &mut Checker, root: &Object) {
    let path = [PathSegment::from("view")];
    let Some(view) = checker.required_object(root, "view", &[]) else {
        return;
    };

    checker.required_one_of(view, "type", VIEW_TYPES, &path);
    checker.required_one_of(view, "variant", VIEW_VARIANTS, &path);
    checker.required_string(view, "camera_preset", &path);
}

fn check_layout(checker: &mut Checker, root: &Object) {
    let path = [PathSegment::from("layout")];
    let Some(layout) = checker.optional_object(root, "layout", &[]) else {
        return;
    };

    if let Some(grid) = checker.optional_object(layout, "grid", &path) {
        let grid_path = child(&path, "grid");
        checker.required_one_of(grid, "type", &["logical"], &grid_path);
        checker.required_one_of(grid, "unit", &["meter"], &grid_path);
        if let Some(snap) = checker.required(grid, "snap", &grid_path) {
            checker.boolean(snap, &child(&grid_path, "snap"));
        }
    }

    if let Some(floors) = layout.get("floors") {
        checker.object_list(floors, &child(&path, "floors"), |checker, floor, floor_path| {
            checker.required_string(floor, "id", floor_path);
            checker.optional_boolean(floor, "active", floor_path);
        });
    }

    if let Some(zones) = layout.get("zones") {
        checker.object_list(zones, &child(&path, "zones"), |checker, zone, zone_path| {
            checker.required_string(zone, "id", zone_path);
            checker.optional_string(zone, "purpose", zone_path);
        });
    }
}

fn check_ergonomics(checker: &mut Checker, root: &Object) {
    let path = [PathSegment::from("ergonomics")];
    let Some(ergonomics) = checker.optional_object(root, "ergonomics", &[]) else {
        return;
    };

    for axis in ERGONOMIC_AXES {
        checker.optional_string(ergonomics, axis, &path);
    }
}

fn check_assets(checker: &mut Checker, root: &Object) {
    let Some(assets) = root.get("assets") else {
        return;
    };

    checker.object_list(assets, &[PathSegment::from("assets")], |checker, asset, path| {
        checker.required_matching(
            asset,
            "id",
            &ASSET_ID,
            "asset id (expected assets.<category>.<identity>)",
            path,
        );
        checker.required_string(asset, "archetype", path);
        checker.required_string(asset, "category", path);
        checker.optional_string(asset, "floor", path);
        checker.optional_string(asset, "zone", path);
        checker.optional_object(asset, "state", path);
    });
}

fn check_lighting(checker: &mut Checker, root: &Object) {
    let path = [PathSegment::from("lighting")];
    let Some(lighting) = checker.optional_object(root, "lighting", &[]) else {
        return;
    };

    checker.required_one_of(lighting, "time_of_day", TIMES_OF_DAY, &path);
    checker.required_one_of(lighting, "key_direction", KEY_DIRECTIONS, &path);
    checker.required_one_of(lighting, "contrast", CONTRASTS, &path);
    checker.required_one_of(lighting, "fog", FOG_LEVELS, &path);
}

fn check_style(checker: &mut Checker, root: &Object) {
    let path = [PathSegment::from("style")];
    let Some(style) = checker.optional_object(root, "style", &[]) else {
        return;
    };

    checker.optional_string(style, "theme", &path);
    checker.optional_object(style, "overrides", &path);
}

fn check_output(checker: &mut Checker, root: &Object) {
    let path = [PathSegment::from("output")];
    let Some(output) = checker.optional_object(root, "output", &[]) else {
        return;
    };

    if let Some(targets) = output.get("targets") {
        let targets_path = child(&path, "targets");
        if let Some(items) = checker.array(targets, &targets_path) {
            for (index, item) in items.iter().enumerate() {
                checker.one_of(item, OUTPUT_TARGETS, &child(&targets_path, index));
            }
        }
    }

    if let Some(resolution) = output.get("resolution") {
        let resolution_path = child(&path, "resolution");
        if let Some(items) = checker.array(resolution, &resolution_path) {
            if items.len() == 2 {
                for (index, item) in items.iter().enumerate() {
                    checker.positive_integer(item, &child(&resolution_path, index));
                }
            } else {
                checker.issue(
                    resolution_path,
                    format!(
                        "Expected [width, height], received {} element(s)",
                        items.len()
                    ),
                );
            }
        }
    }

    checker.optional_boolean(output, "deterministic", &path);
}
