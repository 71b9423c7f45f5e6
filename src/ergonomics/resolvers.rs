use serde::{Deserialize, Serialize};

use super::PRECISION;
use super::reference_body::{ReferenceBody, seat_height, table_height};
use super::rounding::{Footprint, compute_footprint, round_to};
use crate::archetypes::{GeneratedBed, GeneratedChair, GeneratedTable};

const CHAIR_FOOTPRINT_MARGIN: f64 = 0.08;
const CHAIR_MIN_BACK_HEIGHT: f64 = 0.4;
const CHAIR_MIN_ARM_HEIGHT: f64 = 0.18;

const TABLE_FOOTPRINT_MARGIN: f64 = 0.12;

const BED_FOOTPRINT_MARGIN: f64 = 0.12;
const BED_MATTRESS_THICKNESS: f64 = 0.22;
const BED_CLEARANCE_UNDER: f64 = 0.18;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChairPhysicalResolution {
    /// Floor to seat surface.
    pub seat_height: f64,
    pub seat_depth: f64,
    pub seat_width: f64,
    /// Backrest height above the seat surface.
    pub back_height: f64,
    /// Armrest height above the seat surface, only when the chair has arms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arm_height: Option<f64>,
    pub total_height: f64,
    pub footprint: Footprint,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TablePhysicalResolution {
    pub surface_height: f64,
    pub surface_width: f64,
    pub surface_depth: f64,
    /// Floor to underside clearance.
    pub clearance_height: f64,
    pub footprint: Footprint,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BedPhysicalResolution {
    /// Floor to top of mattress.
    pub sleeping_height: f64,
    pub sleeping_width: f64,
    pub sleeping_length: f64,
    pub mattress_thickness: f64,
    pub clearance_under: f64,
    pub total_height: f64,
    pub footprint: Footprint,
}

fn r3(value: f64) -> f64 {
    round_to(value, PRECISION)
}

pub fn resolve_chair(intent: &GeneratedChair, body: &ReferenceBody) -> ChairPhysicalResolution {
    let seat_height = r3(seat_height(body));
    let seat_depth = r3(body.hip_height * 0.5);
    let seat_width = r3(body.shoulder_width + 0.1);

    let back_reach = CHAIR_MIN_BACK_HEIGHT.max(body.seated_eye_height - seat_height - 0.2);
    let back_height = r3(back_reach);
    let arm_reach = CHAIR_MIN_ARM_HEIGHT.max(body.seated_elbow_height - seat_height - 0.05);
    let arm_height = intent.arms.as_ref().map(|_| r3(arm_reach));

    ChairPhysicalResolution {
        seat_height,
        seat_depth,
        seat_width,
        back_height,
        arm_height,
        total_height: r3(seat_height + back_height),
        footprint: compute_footprint(seat_width, seat_depth, CHAIR_FOOTPRINT_MARGIN),
    }
}

pub fn resolve_table(_intent: &GeneratedTable, body: &ReferenceBody) -> TablePhysicalResolution {
    let surface_width = r3(body.shoulder_width * 2.0);
    let surface_depth = r3(body.arm_length * 0.75);

    TablePhysicalResolution {
        surface_height: r3(table_height(body)),
        surface_width,
        surface_depth,
        clearance_height: r3(body.knee_height + 0.05),
        footprint: compute_footprint(surface_width, surface_depth, TABLE_FOOTPRINT_MARGIN),
    }
}

pub fn resolve_bed(_intent: &GeneratedBed, body: &ReferenceBody) -> BedPhysicalResolution {
    let mattress_thickness = r3(BED_MATTRESS_THICKNESS);
    let clearance_under = r3(BED_CLEARANCE_UNDER);
    let sleeping_height = r3(clearance_under + mattress_thickness);

    let sleeping_width = r3(body.shoulder_width * 1.8);
    let sleeping_length = r3(body.standing_height + 0.25);

    BedPhysicalResolution {
        sleeping_height,
        sleeping_width,
        sleeping_length,
        mattress_thickness,
        clearance_under,
        total_height: sleeping_height,
        footprint: compute_footprint(sleeping_width, sleeping_length, BED_FOOTPRINT_MARGIN),
    }
}
