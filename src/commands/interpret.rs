use anyhow::{Result, bail};
use artworkflow::interpreters::{
    BlenderPlanOptions, FsThemeSource, KritaPlanOptions, build_blender_plan, build_krita_plan,
};
use artworkflow::registry::RegistryStatus;
use tracing::info;

use super::{load_scene, write_json_stdout};
use crate::cli::{BlenderArgs, InterpretCommand, KritaArgs};

pub fn run(command: InterpretCommand) -> Result<()> {
    match command {
        InterpretCommand::Blender(args) => run_blender(args),
        InterpretCommand::Krita(args) => run_krita(args),
    }
}

fn run_blender(args: BlenderArgs) -> Result<()> {
    if !args.dry_run {
        bail!("Missing required flag: --dry-run");
    }

    let scene = load_scene(&args.file)?;
    let registry_path = args.project.registry_path();
    let registry = RegistryStatus::load(&registry_path);

    let plan = build_blender_plan(
        &scene,
        &BlenderPlanOptions {
            destination_scale: args.destination_scale,
            registry: &registry,
        },
    );

    info!(
        scene_id = %plan.scene_overview.scene_id,
        destination_scale = %args.destination_scale,
        registry = %registry_path.display(),
        resolved = plan.asset_resolution_summary.resolved.len(),
        unresolved = plan.asset_resolution_summary.unresolved.len(),
        warnings = plan.warnings.len(),
        "blender dry-run plan built"
    );

    write_json_stdout(&plan)
}

fn run_krita(args: KritaArgs) -> Result<()> {
    if !args.dry_run {
        bail!("Missing required flag: --dry-run");
    }

    let scene = load_scene(&args.file)?;
    let themes = FsThemeSource::new(args.themes_dir());

    let blender_plan = if args.include_blender_reference {
        let registry = RegistryStatus::load(&args.project.registry_path());
        Some(build_blender_plan(
            &scene,
            &BlenderPlanOptions {
                destination_scale: Default::default(),
                registry: &registry,
            },
        ))
    } else {
        None
    };

    let plan = build_krita_plan(
        &scene,
        &KritaPlanOptions {
            include_blender_reference: args.include_blender_reference,
            blender_plan: blender_plan.as_ref(),
        },
        &themes,
    );

    info!(
        scene_id = %plan.document_overview.scene_id,
        theme = %plan.style_theme_plan.theme.as_deref().unwrap_or("none"),
        blender_reference = plan.blender_reference_usage.enabled,
        warnings = plan.warnings.len(),
        "krita dry-run plan built"
    );

    write_json_stdout(&plan)
}
