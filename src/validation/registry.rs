use std::collections::{BTreeMap, BTreeSet};

use serde_json::Value;

use super::checker::{ARCHETYPE_ID, ASSET_ID, Checker, LOWER_IDENT, Object, SEMVER, child};
use super::{DocumentValidator, PathSegment, ValidationIssue};
use crate::model::{ArchetypeDefinition, AssetRegistry};

/// Validates the asset registry, including cross-references between parts,
/// archetypes and assets.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegistryValidator;

impl DocumentValidator for RegistryValidator {
    type Output = AssetRegistry;

    fn validate(&self, value: &Value) -> Result<AssetRegistry, Vec<ValidationIssue>> {
        let mut checker = Checker::default();
        if let Some(root) = checker.object(value, &[]) {
            checker.required_matching(
                root,
                "registry_version",
                &SEMVER,
                "registry version (expected semver)",
                &[],
            );
            if let Some(parts) = checker.required(root, "parts", &[]) {
                checker.object_list(parts, &[PathSegment::from("parts")], check_part);
            }
            if let Some(archetypes) = checker.required(root, "archetypes", &[]) {
                checker.object_list(
                    archetypes,
                    &[PathSegment::from("archetypes")],
                    check_archetype,
                );
            }
            if let Some(assets) = checker.required(root, "assets", &[]) {
                checker.object_list(assets, &[PathSegment::from("assets")], check_asset);
            }
        }

        let registry: AssetRegistry = checker.finish(value)?;
        let issues = cross_reference_issues(&registry);
        if issues.is_empty() {
            Ok(registry)
        } else {
            Err(issues)
        }
    }
}

fn check_part(checker: &mut Checker, part: &Object, path: &[PathSegment]) {
    checker.required_matching(part, "id", &LOWER_IDENT, "part id", path);
    checker.required_string(part, "description", path);
    checker.optional_string(part, "notes", path);
}

fn check_identifier_list(
    checker: &mut Checker,
    object: &Object,
    key: &str,
    description: &str,
    path: &[PathSegment],
) {
    if let Some(list) = checker.required(object, key, path) {
        checker.string_list(
            list,
            &child(path, key),
            true,
            Some((&LOWER_IDENT, description)),
        );
    }
}

fn check_archetype(checker: &mut Checker, archetype: &Object, path: &[PathSegment]) {
    let id = checker.required_matching(
        archetype,
        "id",
        &ARCHETYPE_ID,
        "archetype id (expected <category>.<identity>)",
        path,
    );
    let category = checker.required_matching(archetype, "category", &LOWER_IDENT, "category", path);
    checker.required_string(archetype, "description", path);
    check_identifier_list(checker, archetype, "allowed_parts", "part id", path);
    check_identifier_list(
        checker,
        archetype,
        "supported_detail_tiers",
        "detail tier",
        path,
    );
    checker.optional_string(archetype, "notes", path);

    if let (Some(id), Some(category)) = (id, category) {
        let prefix = format!("{category}.");
        if !id.starts_with(&prefix) {
            checker.issue(
                child(path, "id"),
                format!("Archetype id must start with \"{prefix}\" to match category."),
            );
        }
    }
}

fn check_asset(checker: &mut Checker, asset: &Object, path: &[PathSegment]) {
    let asset_id = checker.required_matching(
        asset,
        "asset_id",
        &ASSET_ID,
        "asset id (expected assets.<category>.<identity>)",
        path,
    );
    let category = checker.required_matching(asset, "category", &LOWER_IDENT, "category", path);
    checker.required_matching(
        asset,
        "archetype",
        &ARCHETYPE_ID,
        "archetype id (expected <category>.<identity>)",
        path,
    );
    check_identifier_list(checker, asset, "allowed_parts", "part id", path);
    check_identifier_list(
        checker,
        asset,
        "supported_detail_tiers",
        "detail tier",
        path,
    );
    if let Some(variants) = asset.get("supported_variants") {
        checker.string_list(
            variants,
            &child(path, "supported_variants"),
            false,
            Some((&LOWER_IDENT, "variant")),
        );
    }
    checker.required_string(asset, "description", path);
    checker.optional_string(asset, "notes", path);

    if let (Some(asset_id), Some(category)) = (asset_id, category) {
        let prefix = format!("assets.{category}.");
        if !asset_id.starts_with(&prefix) {
            checker.issue(
                child(path, "asset_id"),
                format!("Asset id must start with \"{prefix}\" to match category."),
            );
        }
    }
}

fn cross_reference_issues(registry: &AssetRegistry) -> Vec<ValidationIssue> {
    let part_ids: BTreeSet<&str> = registry.parts.iter().map(|part| part.id.as_str()).collect();
    let mut archetypes: BTreeMap<&str, &ArchetypeDefinition> = BTreeMap::new();
    for archetype in &registry.archetypes {
        archetypes.entry(archetype.id.as_str()).or_insert(archetype);
    }

    let mut issues = Vec::new();
    for (index, archetype) in registry.archetypes.iter().enumerate() {
        for (part_index, part) in archetype.allowed_parts.iter().enumerate() {
            if !part_ids.contains(part.as_str()) {
                issues.push(ValidationIssue::new(
                    vec![
                        "archetypes".into(),
                        index.into(),
                        "allowed_parts".into(),
                        part_index.into(),
                    ],
                    format!("Unknown part id \"{part}\"."),
                ));
            }
        }
    }

    for (index, asset) in registry.assets.iter().enumerate() {
        let archetype = archetypes.get(asset.archetype.as_str()).copied();
        if archetype.is_none() {
            issues.push(ValidationIssue::new(
                vec!["assets".into(), index.into(), "archetype".into()],
                format!("Unknown archetype \"{}\".", asset.archetype),
            ));
        }

        for (part_index, part) in asset.allowed_parts.iter().enumerate() {
            let path = vec![
                "assets".into(),
                index.into(),
                "allowed_parts".into(),
                part_index.into(),
            ];
            if !part_ids.contains(part.as_str()) {
                issues.push(ValidationIssue::new(
                    path,
                    format!("Unknown part id \"{part}\"."),
                ));
            } else if let Some(archetype) = archetype {
                if !archetype.allowed_parts.contains(part) {
                    issues.push(ValidationIssue::new(
                        path,
                        format!(
                            "Part \"{part}\" is not allowed by archetype \"{}\".",
                            archetype.id
                        ),
                    ));
                }
            }
        }
    }

    issues
}
