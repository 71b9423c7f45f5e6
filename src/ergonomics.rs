//! Ergonomics resolution.
//!
//! Every physical dimension is derived from a single [`ReferenceBody`], so
//! archetypes stay consistent with each other when the body is substituted.

use serde::{Deserialize, Serialize};

use crate::archetypes::GeneratedIntent;
use crate::error::ResolveError;

mod reference_body;
mod resolvers;
mod rounding;

pub use self::reference_body::{ReferenceBody, seat_height, table_height};
pub use self::resolvers::{
    BedPhysicalResolution, ChairPhysicalResolution, TablePhysicalResolution, resolve_bed,
    resolve_chair, resolve_table,
};
pub use self::rounding::{Footprint, compute_footprint, round_to};

/// Decimal places kept on every derived measurement.
pub const PRECISION: i32 = 3;

/// Derived dimensions for any archetype that supports physical resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PhysicalResolution {
    Chair(ChairPhysicalResolution),
    Table(TablePhysicalResolution),
    Bed(BedPhysicalResolution),
}

impl PhysicalResolution {
    pub fn footprint(&self) -> Footprint {
        match self {
            Self::Chair(resolution) => resolution.footprint,
            Self::Table(resolution) => resolution.footprint,
            Self::Bed(resolution) => resolution.footprint,
        }
    }

    /// All numeric fields in declaration order, footprint last.
    pub fn measurements(&self) -> Vec<(&'static str, f64)> {
        let mut values = match self {
            Self::Chair(r) => {
                let mut values = vec![
                    ("seatHeight", r.seat_height),
                    ("seatDepth", r.seat_depth),
                    ("seatWidth", r.seat_width),
                    ("backHeight", r.back_height),
                ];
                if let Some(arm_height) = r.arm_height {
                    values.push(("armHeight", arm_height));
                }
                values.push(("totalHeight", r.total_height));
                values
            }
            Self::Table(r) => vec![
                ("surfaceHeight", r.surface_height),
                ("surfaceWidth", r.surface_width),
                ("surfaceDepth", r.surface_depth),
                ("clearanceHeight", r.clearance_height),
            ],
            Self::Bed(r) => vec![
                ("sleepingHeight", r.sleeping_height),
                ("sleepingWidth", r.sleeping_width),
                ("sleepingLength", r.sleeping_length),
                ("mattressThickness", r.mattress_thickness),
                ("clearanceUnder", r.clearance_under),
                ("totalHeight", r.total_height),
            ],
        };
        let footprint = self.footprint();
        values.push(("footprint.width", footprint.width));
        values.push(("footprint.depth", footprint.depth));
        values
    }
}

/// Routes a generated intent to its resolver. Doors have no physical model.
pub fn resolve_physical_intent(
    intent: &GeneratedIntent,
    body: &ReferenceBody,
) -> Result<PhysicalResolution, ResolveError> {
    match intent {
        GeneratedIntent::Chair(chair) => Ok(PhysicalResolution::Chair(resolve_chair(chair, body))),
        GeneratedIntent::Table(table) => Ok(PhysicalResolution::Table(resolve_table(table, body))),
        GeneratedIntent::Bed(bed) => Ok(PhysicalResolution::Bed(resolve_bed(bed, body))),
        GeneratedIntent::Door(_) => {
            let kind = intent.kind().to_string();
            Err(ResolveError::UnsupportedArchetype(kind))
        }
    }
}

/// String-tag dispatch used by adapter builders that accept an archetype label.
pub fn resolve_physical_for_tag(
    tag: &str,
    intent: &GeneratedIntent,
    body: &ReferenceBody,
) -> Result<PhysicalResolution, ResolveError> {
    match tag {
        "chair" | "table" | "bed" => {}
        other => return Err(ResolveError::UnsupportedArchetype(other.to_string())),
    }

    if tag != intent.kind().as_str() {
        return Err(ResolveError::ArchetypeMismatch {
            tag: tag.to_string(),
            intent: intent.kind().to_string(),
        });
    }

    resolve_physical_intent(intent, body)
}
