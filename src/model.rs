//! Typed documents read by the core: scenes, the asset registry and themes.
//!
//! Every document type keeps the fields it knows about typed and collects
//! everything else in an `extra` map that is written back verbatim.

use serde_json::{Map, Value};

mod registry;
mod scene;
mod theme;

pub use self::registry::{ArchetypeDefinition, AssetDefinition, AssetRegistry, PartDefinition};
pub use self::scene::{
    CoreScene, ErgonomicsSpec, Floor, GridSpec, Layout, LightingSpec, OutputSpec, SceneAsset,
    SceneMeta, StyleSpec, ViewSpec, Zone,
};
pub use self::theme::{
    ColourGuidance, KritaTheme, TextureGuidance, ThemeRestrictions, ThemeTools, WorkflowHints,
};

/// Unrecognized keys preserved for round-trip.
pub type Extra = Map<String, Value>;
