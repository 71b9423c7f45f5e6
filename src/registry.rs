//! Asset registry loading and indexing.
//!
//! The registry arrays stay the source of truth; lookups go through indexes
//! of array positions rebuilt on every load.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::debug;

use crate::error::DocumentError;
use crate::model::{ArchetypeDefinition, AssetDefinition, AssetRegistry};
use crate::util::read_json_document;
use crate::validation::{DocumentValidator, RegistryValidator, ValidationIssue};


/// Validated registry plus lookup indexes.
#[derive(Debug, Clone)]
pub struct ResolvedRegistry {
    registry: AssetRegistry,
    archetypes_by_id: BTreeMap<String, usize>,
    assets_by_id: BTreeMap<String, usize>,
    assets_by_archetype: BTreeMap<String, Vec<usize>>,
}

impl ResolvedRegistry {
    /// Builds the indexes. Duplicate ids keep their first occurrence and
    /// produce one warning each.
    pub fn index(registry: AssetRegistry) -> (Self, Vec<String>) {
        let mut warnings = Vec::new();
        let archetypes_by_id = first_seen_index(
            "archetype",
            registry.archetypes.iter().map(|entry| entry.id.as_str()),
            &mut warnings,
        );
        let assets_by_id = first_seen_index(
            "asset",
            registry.assets.iter().map(|asset| asset.asset_id.as_str()),
            &mut warnings,
        );

        let mut assets_by_archetype: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        for (position, asset) in registry.assets.iter().enumerate() {
            assets_by_archetype
                .entry(asset.archetype.clone())
                .or_default()
                .push(position);
        }

        let resolved = Self {
            registry,
            archetypes_by_id,
            assets_by_id,
            assets_by_archetype,
        };
        (resolved, warnings)
    }

    pub fn registry(&self) -> &AssetRegistry {
        &self.registry
    }

    pub fn archetype(&self, id: &str) -> Option<&ArchetypeDefinition> {
        self.archetypes_by_id
            .get(id)
            .map(|&position| &self.registry.archetypes[position])
    }

    pub fn asset(&self, id: &str) -> Option<&AssetDefinition> {
        self.assets_by_id
            .get(id)
            .map(|&position| &self.registry.assets[position])
    }

    /// Every asset declaring `archetype_id`, duplicates included, in document order.
    pub fn assets_for_archetype(&self, archetype_id: &str) -> Vec<&AssetDefinition> {
        self.assets_by_archetype
            .get(archetype_id)
            .map(|positions| {
                positions
                    .iter()
                    .map(|&position| &self.registry.assets[position])
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn archetype_count(&self) -> usize {
        self.archetypes_by_id.len()
    }

    pub fn asset_count(&self) -> usize {
        self.assets_by_id.len()
    }
}

fn first_seen_index<'a>(
    kind: &str,
    ids: impl Iterator<Item = &'a str>,
    warnings: &mut Vec<String>,
) -> BTreeMap<String, usize> {
    let mut index: BTreeMap<String, usize> = BTreeMap::new();
    for (position, id) in ids.enumerate() {
        if let Some(&kept) = index.get(id) {
            warnings.push(format!(
                "Duplicate {kind} id \"{id}\" at index {position}; keeping first occurrence at index {kept}."
            ));
            continue;
        }
        index.insert(id.to_string(), position);
    }
    index
}

/// Outcome of reading a registry that was at least valid JSON.
#[derive(Debug, Clone)]
pub enum RegistryLoad {
    Loaded {
        registry: ResolvedRegistry,
        warnings: Vec<String>,
    },
    Invalid {
        issues: Vec<ValidationIssue>,
    },
}

/// Reads, validates and indexes the registry at `path`. Only I/O and JSON
/// syntax failures are errors.
pub fn load_asset_registry(path: &Path) -> Result<RegistryLoad, DocumentError> {
    let document = read_json_document(path)?;

    let load = match RegistryValidator.validate(&document) {
        Ok(registry) => {
            let (registry, warnings) = ResolvedRegistry::index(registry);
            debug!(
                path = %path.display(),
                archetypes = registry.archetype_count(),
                assets = registry.asset_count(),
                warnings = warnings.len(),
                "asset registry indexed"
            );
            RegistryLoad::Loaded { registry, warnings }
        }
        Err(issues) => {
            debug!(path = %path.display(), issues = issues.len(), "asset registry invalid");
            RegistryLoad::Invalid { issues }
        }
    };
    Ok(load)
}

/// Registry availability as seen by the planners, which degrade instead of failing.
#[derive(Debug, Clone)]
pub enum RegistryStatus {
    Available {
        registry: ResolvedRegistry,
        warnings: Vec<String>,
    },
    Invalid {
        issues: Vec<ValidationIssue>,
    },
    Unavailable {
        message: String,
    },
}

impl RegistryStatus {
    pub fn load(path: &Path) -> Self {
        match load_asset_registry(path) {
            Ok(RegistryLoad::Loaded { registry, warnings }) => {
                Self::Available { registry, warnings }
            }
            Ok(RegistryLoad::Invalid { issues }) => Self::Invalid { issues },
            Err(err) => {
                debug!(error = %err, "asset registry unavailable");
                Self::Unavailable {
                    message: err.to_string(),
                }
            }
        }
    }

    pub fn registry(&self) -> Option<&ResolvedRegistry> {
        match self {
            Self::Available { registry, .. } => Some(registry),
            Self::Invalid { .. } | Self::Unavailable { .. } => None,
        }
    }

    /// Plan warnings describing the load outcome.
    pub fn plan_warnings(&self) -> Vec<String> {
        match self {
            Self::Available { warnings, .. } => warnings
                .iter()
                .map(|warning| format!("Asset registry warning: {warning}"))
                .collect(),
            Self::Invalid { issues } => {
                let mut warnings = vec![format!(
                    "Asset registry validation failed ({} issues); asset awareness disabled.",
                    issues.len()
                )];
                warnings.extend(
                    issues
                        .iter()
                        .map(|issue| format!("Asset registry issue: {issue}")),
                );
                warnings
            }
            Self::Unavailable { message } => vec![format!(
                "Asset registry load failed: {message}. Asset awareness disabled."
            )],
        }
    }
}
