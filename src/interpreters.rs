//! Dry-run plan builders.
//!
//! Both planners are total: they read a validated scene plus optional
//! registry and theme data and always return a fully populated plan, with
//! every degradation recorded in `warnings`.

mod blender;
mod diagnostics;
mod ergonomics_profile;
mod krita;
mod theme;
#[cfg(test)]
mod tests;

pub use self::blender::{
    AssetPlan, AssetResolutionSummary, BlenderPlanOptions, CameraPlan, CameraSpec,
    DestinationScale, DryRunExecutionPlan, GlobalScaleResolution, LightingPlan, PathPlan,
    PathRepresentation, PlacementIntent, PrefabPlan, ResolvedAsset, SceneOverview,
    UnresolvedAsset, build_blender_plan,
};
pub use self::diagnostics::PlanDiagnostics;
pub use self::ergonomics_profile::{ErgonomicAxis, ErgonomicsResolution, resolve_ergonomics};
pub use self::krita::{
    AppliedOverride, AssetLayer, BlenderReferenceUsage, DocumentOverview, IgnoredOverride,
    KritaDryRunWorkspacePlan, KritaPlanOptions, Layer, LayerGroup, LightingMoodPlan,
    OutputResolution, RepresentationType, StyleThemePlan, build_krita_plan,
};
pub use self::theme::{FsThemeSource, NoThemes, ThemeLookup, ThemeSource};
