use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::archetypes::{
    DetailTier, GeneratedBed, GeneratedChair, GeneratedDoor, GeneratedIntent, GeneratedTable,
    PartDescriptor,
};
use crate::ergonomics::{PhysicalResolution, ReferenceBody, resolve_physical_for_tag};
use crate::error::AdapterError;

/// Serializable description of one generated asset. Adapters rely on these
/// fields only, never on archetype configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdapterInput {
    pub asset_id: String,
    pub archetype: String,
    pub detail_tier: DetailTier,
    pub parts: BTreeMap<String, PartDescriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub physical: Option<PhysicalResolution>,
}

#[derive(Debug, Clone)]
pub struct AdapterParams<'a, I> {
    pub asset_id: &'a str,
    pub intent: &'a I,
    /// Archetype label override; defaults to the builder's own archetype.
    pub archetype: Option<&'a str>,
}

impl<'a, I> AdapterParams<'a, I> {
    pub fn new(asset_id: &'a str, intent: &'a I) -> Self {
        Self {
            asset_id,
            intent,
            archetype: None,
        }
    }
}

fn part_map<'p>(
    parts: impl IntoIterator<Item = (&'p str, &'p str)>,
) -> BTreeMap<String, PartDescriptor> {
    parts
        .into_iter()
        .map(|(id, kind)| (id.to_string(), PartDescriptor::new(kind)))
        .collect()
}

fn grounded_input(
    asset_id: &str,
    archetype: &str,
    intent: GeneratedIntent,
    parts: BTreeMap<String, PartDescriptor>,
) -> Result<AdapterInput, AdapterError> {
    let reference_body = ReferenceBody::base_human();
    let physical = resolve_physical_for_tag(archetype, &intent, &reference_body).map_err(
        |source| AdapterError::MissingPhysical {
            archetype: archetype.to_string(),
            source,
        },
    )?;

    Ok(AdapterInput {
        asset_id: asset_id.to_string(),
        archetype: archetype.to_string(),
        detail_tier: intent.detail_tier(),
        parts,
        physical: Some(physical),
    })
}

pub fn build_chair_adapter_input(
    params: AdapterParams<'_, GeneratedChair>,
) -> Result<AdapterInput, AdapterError> {
    let intent = params.intent;
    let mut parts = part_map([
        ("supports", intent.supports.kind.as_str()),
        ("seat", intent.seat.kind.as_str()),
        ("back", intent.back.kind.as_str()),
    ]);
    if let Some(arms) = &intent.arms {
        parts.insert("arms".to_string(), arms.clone());
    }

    grounded_input(
        params.asset_id,
        params.archetype.unwrap_or("chair"),
        GeneratedIntent::Chair(intent.clone()),
        parts,
    )
}

pub fn build_table_adapter_input(
    params: AdapterParams<'_, GeneratedTable>,
) -> Result<AdapterInput, AdapterError> {
    let intent = params.intent;
    let parts = part_map([
        ("supports", intent.supports.kind.as_str()),
        ("surface", intent.surface.kind.as_str()),
    ]);

    grounded_input(
        params.asset_id,
        params.archetype.unwrap_or("table"),
        GeneratedIntent::Table(intent.clone()),
        parts,
    )
}

pub fn build_bed_adapter_input(
    params: AdapterParams<'_, GeneratedBed>,
) -> Result<AdapterInput, AdapterError> {
    let intent = params.intent;
    let mut parts = part_map([("sleepSurface", intent.sleep_surface.kind.as_str())]);
    if let Some(frame) = &intent.frame {
        parts.insert("frame".to_string(), PartDescriptor::new(&frame.kind));
    }

    grounded_input(
        params.asset_id,
        params.archetype.unwrap_or("bed"),
        GeneratedIntent::Bed(intent.clone()),
        parts,
    )
}

/// Doors carry no physical resolution.
pub fn build_door_adapter_input(params: AdapterParams<'_, GeneratedDoor>) -> AdapterInput {
    let intent = params.intent;
    let mut parts = part_map([
        ("frame", intent.frame.kind.as_str()),
        ("panel", intent.panel.kind.as_str()),
    ]);
    if let Some(handle) = &intent.handle {
        parts.insert("handle".to_string(), handle.clone());
    }

    AdapterInput {
        asset_id: params.asset_id.to_string(),
        archetype: params.archetype.unwrap_or("door").to_string(),
        detail_tier: intent.detail_tier,
        parts,
        physical: None,
    }
}
