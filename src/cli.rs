use std::path::PathBuf;

use artworkflow::interpreters::DestinationScale;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "artworkflow",
    version,
    about = "Scene validation and dry-run planning for Blender and Krita"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a scene document.
    Validate(ValidateArgs),
    /// Build a dry-run plan for one target tool.
    #[command(subcommand)]
    Interpret(InterpretCommand),
    /// Run placeholder generators for a scene.
    #[command(subcommand)]
    Generate(GenerateCommand),
}

#[derive(Subcommand, Debug)]
pub enum InterpretCommand {
    Blender(BlenderArgs),
    Krita(KritaArgs),
}

#[derive(Subcommand, Debug)]
pub enum GenerateCommand {
    Prefabs(PrefabArgs),
}

/// Project locations shared by every command that reads registry or theme data.
#[derive(Args, Debug, Clone)]
pub struct ProjectArgs {
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    #[arg(long)]
    pub registry_path: Option<PathBuf>,
}

impl ProjectArgs {
    pub fn registry_path(&self) -> PathBuf {
        self.registry_path
            .clone()
            .unwrap_or_else(|| self.root.join("assets").join("registry").join("assets.json"))
    }
}

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    pub file: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct BlenderArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    #[arg(long, value_enum, default_value_t = DestinationScale::Neutral)]
    pub destination_scale: DestinationScale,

    pub file: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct KritaArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    #[arg(long)]
    pub themes_dir: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    #[arg(long, default_value_t = false)]
    pub include_blender_reference: bool,

    pub file: PathBuf,
}

impl KritaArgs {
    pub fn themes_dir(&self) -> PathBuf {
        self.themes_dir
            .clone()
            .unwrap_or_else(|| self.project.root.join("styles").join("themes"))
    }
}

#[derive(Args, Debug, Clone)]
pub struct PrefabArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    #[arg(long, value_enum, default_value_t = DestinationScale::Neutral)]
    pub destination_scale: DestinationScale,

    pub file: PathBuf,
}
