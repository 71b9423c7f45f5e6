//! Deterministic art-pipeline core.
//!
//! Scene documents describe intent symbolically; this crate validates them,
//! derives ergonomic dimensions for generated archetypes, and builds
//! inspectable dry-run plans for Blender and Krita without touching either
//! tool.

pub mod adapters;
pub mod archetypes;
pub mod ergonomics;
pub mod error;
pub mod interpreters;
pub mod model;
pub mod prefabs;
pub mod registry;
pub mod util;
pub mod validation;
