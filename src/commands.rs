pub mod generate;
pub mod interpret;
pub mod validate;

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Result, anyhow};
use artworkflow::model::CoreScene;
use artworkflow::util::read_json_document;
use artworkflow::validation::{DocumentValidator, SceneValidator, format_issues};
use serde::Serialize;
use tracing::info;

/// Reads and validates a scene; schema failures become a single error
/// listing every issue.
pub(crate) fn load_scene(path: &Path) -> Result<CoreScene> {
    let document = read_json_document(path)?;

    let scene = SceneValidator.validate(&document).map_err(|issues| {
        anyhow!(
            "Core Scene Schema validation failed ({} issues):\n{}",
            issues.len(),
            format_issues(&issues)
        )
    })?;

    info!(
        path = %path.display(),
        scene_id = %scene.scene.id,
        assets = scene.assets().len(),
        "scene validated"
    );
    Ok(scene)
}

pub(crate) fn write_json_stdout<T: Serialize>(value: &T) -> Result<()> {
    let mut output = io::BufWriter::new(io::stdout().lock());
    serde_json::to_writer_pretty(&mut output, value)?;
    writeln!(output)?;
    output.flush()?;
    Ok(())
}
