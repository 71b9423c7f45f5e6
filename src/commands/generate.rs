use anyhow::Result;
use artworkflow::adapters::debug_ascii;
use artworkflow::prefabs::build_prefab_report;
use artworkflow::registry::RegistryStatus;
use tracing::{debug, warn};

use super::{load_scene, write_json_stdout};
use crate::cli::{GenerateCommand, PrefabArgs};

pub fn run(command: GenerateCommand) -> Result<()> {
    match command {
        GenerateCommand::Prefabs(args) => run_prefabs(args),
    }
}

fn run_prefabs(args: PrefabArgs) -> Result<()> {
    let scene = load_scene(&args.file)?;
    let registry = RegistryStatus::load(&args.project.registry_path());

    let report = build_prefab_report(&scene, &registry, args.destination_scale);

    for generated in &report.prefabs.generated {
        debug!(
            prefab_key = %generated.prefab_key,
            "generated prefab\n{}",
            debug_ascii(&generated.created.adapter_input)
        );
    }
    for failed in &report.prefabs.failed {
        warn!(
            prefab_key = %failed.prefab_key,
            code = ?failed.error.code,
            message = %failed.error.message,
            "prefab generation failed"
        );
    }

    write_json_stdout(&report)
}
