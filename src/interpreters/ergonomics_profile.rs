use super::PlanDiagnostics;
use crate::model::ErgonomicsSpec;

/// The five symbolic ergonomic selectors a scene may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErgonomicAxis {
    ScaleProfile,
    DoorHeight,
    StairRise,
    Reach,
    Clutter,
}

impl ErgonomicAxis {
    pub const ALL: [Self; 5] = [
        Self::ScaleProfile,
        Self::DoorHeight,
        Self::StairRise,
        Self::Reach,
        Self::Clutter,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::ScaleProfile => "scale_profile",
            Self::DoorHeight => "door_height",
            Self::StairRise => "stair_rise",
            Self::Reach => "reach",
            Self::Clutter => "clutter",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::ScaleProfile => "Scale profile",
            Self::DoorHeight => "Door height",
            Self::StairRise => "Stair rise",
            Self::Reach => "Reach",
            Self::Clutter => "Clutter",
        }
    }

    pub fn default_value(self) -> &'static str {
        match self {
            Self::ScaleProfile => "human_standard",
            Self::DoorHeight => "standard",
            Self::StairRise => "comfortable",
            Self::Reach => "human_average",
            Self::Clutter => "light",
        }
    }

    pub fn known_values(self) -> &'static [&'static str] {
        match self {
            Self::ScaleProfile => &["human_standard", "human_compact", "human_large"],
            Self::DoorHeight => &["low", "standard", "tall"],
            Self::StairRise => &["shallow", "comfortable", "steep"],
            Self::Reach => &["short", "human_average", "extended"],
            Self::Clutter => &["none", "light", "medium", "heavy"],
        }
    }

    fn declared(self, spec: &ErgonomicsSpec) -> Option<&str> {
        match self {
            Self::ScaleProfile => spec.scale_profile.as_deref(),
            Self::DoorHeight => spec.door_height.as_deref(),
            Self::StairRise => spec.stair_rise.as_deref(),
            Self::Reach => spec.reach.as_deref(),
            Self::Clutter => spec.clutter.as_deref(),
        }
    }
}

/// Resolved symbolic ergonomics. Values are always members of the known
/// vocabulary for their axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErgonomicsResolution {
    pub scale_profile: String,
    pub door_height: String,
    pub stair_rise: String,
    pub reach: String,
    pub clutter: String,
    /// Notes describing every default or fallback that was applied.
    pub notes: Vec<String>,
}

impl ErgonomicsResolution {
    pub fn value(&self, axis: ErgonomicAxis) -> &str {
        match axis {
            ErgonomicAxis::ScaleProfile => &self.scale_profile,
            ErgonomicAxis::DoorHeight => &self.door_height,
            ErgonomicAxis::StairRise => &self.stair_rise,
            ErgonomicAxis::Reach => &self.reach,
            ErgonomicAxis::Clutter => &self.clutter,
        }
    }

    /// `"<Label>: <value>"` for every axis.
    pub fn adjustments(&self) -> Vec<String> {
        ErgonomicAxis::ALL
            .iter()
            .map(|&axis| format!("{}: {}", axis.label(), self.value(axis)))
            .collect()
    }
}

/// Resolves each axis independently. An unknown value on one axis falls back
/// to that axis' default without touching the others.
pub fn resolve_ergonomics(
    spec: Option<&ErgonomicsSpec>,
    diagnostics: &mut PlanDiagnostics,
) -> ErgonomicsResolution {
    let mut notes = Vec::new();
    let mut values = ErgonomicAxis::ALL.map(|axis| axis.default_value().to_string());

    match spec {
        None => {
            diagnostics.warn("No ergonomics provided; using default human_standard baseline.");
            notes.push("Ergonomics defaulted to human_standard baseline.".to_string());
        }
        Some(spec) => {
            for (slot, axis) in values.iter_mut().zip(ErgonomicAxis::ALL) {
                let key = axis.key();
                let fallback = axis.default_value();
                match axis.declared(spec) {
                    None => {
                        notes.push(format!("Default applied: ergonomics.{key} -> {fallback}."));
                    }
                    Some(value) if axis.known_values().contains(&value) => {
                        *slot = value.to_string();
                    }
                    Some(value) => {
                        diagnostics.warn(format!(
                            "Unsupported ergonomics.{key}: {value}. Using {fallback}."
                        ));
                        notes.push(format!("Fallback applied: ergonomics.{key} -> {fallback}."));
                    }
                }
            }
        }
    }

    let [scale_profile, door_height, stair_rise, reach, clutter] = values;
    ErgonomicsResolution {
        scale_profile,
        door_height,
        stair_rise,
        reach,
        clutter,
        notes,
    }
}
