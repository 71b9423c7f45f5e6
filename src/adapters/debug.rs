use serde::Serialize;

use super::AdapterInput;
use crate::ergonomics::PhysicalResolution;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DebugPart {
    pub id: String,
    pub kind: String,
}

/// Deterministic, human-readable view of an adapter input.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugAdapterSummary {
    pub asset_id: String,
    pub archetype: String,
    pub detail_tier: String,
    pub parts: Vec<DebugPart>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical: Option<PhysicalResolution>,
}

fn grounded_physical(input: &AdapterInput) -> Option<&PhysicalResolution> {
    match input.archetype.as_str() {
        "chair" | "table" | "bed" => input.physical.as_ref(),
        _ => None,
    }
}

pub fn debug_summary(input: &AdapterInput) -> DebugAdapterSummary {
    DebugAdapterSummary {
        asset_id: input.asset_id.clone(),
        archetype: input.archetype.clone(),
        detail_tier: input.detail_tier.to_string(),
        // BTreeMap iteration is already sorted by part id.
        parts: input
            .parts
            .iter()
            .map(|(id, part)| DebugPart {
                id: id.clone(),
                kind: part.kind.clone(),
            })
            .collect(),
        physical: grounded_physical(input).cloned(),
    }
}

pub fn debug_ascii(input: &AdapterInput) -> String {
    let mut lines = vec![
        format!("asset: {}", input.asset_id),
        format!("archetype: {}", input.archetype),
        format!("detailTier: {}", input.detail_tier),
        "parts:".to_string(),
    ];

    if let Some(physical) = grounded_physical(input) {
        let rendered = serde_json::to_string(physical).unwrap_or_else(|_| "<unavailable>".into());
        lines.push(format!("physical: {rendered}"));
    }

    for (id, part) in &input.parts {
        lines.push(format!("- {id} ({})", part.kind));
    }

    lines.join("\n")
}
