use std::io::{self, Write};
use std::path::absolute;

use anyhow::{Context, Result};

use super::load_scene;
use crate::cli::ValidateArgs;

pub fn run(args: ValidateArgs) -> Result<()> {
    load_scene(&args.file)?;

    let resolved = absolute(&args.file)
        .with_context(|| format!("failed to resolve {}", args.file.display()))?;
    let mut output = io::stdout().lock();
    writeln!(output, "Scene is valid: {}", resolved.display())?;
    Ok(())
}
