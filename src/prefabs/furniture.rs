use std::error::Error;

use tracing::debug;

use super::{PrefabCreation, PrefabError, PrefabErrorCode, PrefabGenerationInput};
use crate::adapters::{
    AdapterInput, AdapterParams, build_bed_adapter_input, build_chair_adapter_input,
    build_table_adapter_input,
};
use crate::archetypes::{
    ArmsConfig, BedConfig, ChairConfig, DetailTier, FrameConfig, FrameType, SleepSurfaceConfig,
    SleepSurfaceType, TableConfig, generate_bed, generate_chair, generate_table,
};
use crate::error::AdapterError;

fn physical_failure(input: &PrefabGenerationInput, err: AdapterError) -> PrefabError {
    let mut details = vec![err.to_string()];
    let mut source = err.source();
    while let Some(cause) = source {
        details.push(cause.to_string());
        source = cause.source();
    }

    PrefabError {
        code: PrefabErrorCode::PhysicalResolutionFailed,
        message: format!("Physical resolution failed for {}.", input.asset_id),
        details,
    }
}

fn placeholder(
    input: &PrefabGenerationInput,
    noun: &str,
    adapter_input: AdapterInput,
) -> PrefabCreation {
    debug!(
        prefab_key = %input.prefab_key,
        parts = adapter_input.parts.len(),
        "placeholder prefab assembled"
    );

    PrefabCreation {
        summary: format!(
            "Placeholder {} {noun} ({} tier) for {}.",
            input.variant, input.detail_tier, input.asset_id
        ),
        artefact_ids: vec![
            format!("{}::placeholder_mesh", input.prefab_key),
            format!("{}::placeholder_collection", input.prefab_key),
        ],
        notes: vec![
            "Placeholder generator; no geometry is created.".to_string(),
            format!("Ergonomics profile: {}.", input.ergonomics_profile),
            format!(
                "Destination scale: {} (symbolic, no conversion applied).",
                input.destination_scale
            ),
        ],
        adapter_input,
    }
}

pub(super) fn chair_basic_wooden(
    input: &PrefabGenerationInput,
) -> Result<PrefabCreation, PrefabError> {
    let intent = generate_chair(&ChairConfig {
        detail_tier: DetailTier::Basic,
        arms: input.has_part("arms").then(ArmsConfig::default),
    });
    let adapter_input = build_chair_adapter_input(AdapterParams::new(&input.asset_id, &intent))
        .map_err(|err| physical_failure(input, err))?;
    Ok(placeholder(input, "chair", adapter_input))
}

pub(super) fn table_basic_wooden(
    input: &PrefabGenerationInput,
) -> Result<PrefabCreation, PrefabError> {
    let intent = generate_table(&TableConfig {
        detail_tier: DetailTier::Basic,
    });
    let adapter_input = build_table_adapter_input(AdapterParams::new(&input.asset_id, &intent))
        .map_err(|err| physical_failure(input, err))?;
    Ok(placeholder(input, "table", adapter_input))
}

/// Mattress always; a standard frame only when the asset allows one.
pub(super) fn bed_basic_wooden(
    input: &PrefabGenerationInput,
) -> Result<PrefabCreation, PrefabError> {
    let intent = generate_bed(&BedConfig {
        detail_tier: DetailTier::Basic,
        sleep_surface: SleepSurfaceConfig {
            surface_type: SleepSurfaceType::Mattress,
        },
        frame: input.has_part("frame").then_some(FrameConfig {
            frame_type: FrameType::Standard,
        }),
    });
    let adapter_input = build_bed_adapter_input(AdapterParams::new(&input.asset_id, &intent))
        .map_err(|err| physical_failure(input, err))?;
    Ok(placeholder(input, "bed", adapter_input))
}
