use serde::Serialize;

use crate::error::ResolveError;

/// Canonical human measurements in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceBody {
    /// Floor to top of head.
    pub standing_height: f64,
    /// Floor to knee center.
    pub knee_height: f64,
    /// Floor to hip joint.
    pub hip_height: f64,
    pub standing_eye_height: f64,
    pub seated_eye_height: f64,
    /// Floor to elbow, neutral seated posture.
    pub seated_elbow_height: f64,
    /// Bi-acromial breadth.
    pub shoulder_width: f64,
    /// Shoulder to fingertip.
    pub arm_length: f64,
}

impl ReferenceBody {
    /// Modern 50th percentile adult.
    pub fn base_human() -> Self {
        Self {
            standing_height: 1.7,
            knee_height: 0.5,
            hip_height: 0.9,
            standing_eye_height: 1.6,
            seated_eye_height: 1.2,
            seated_elbow_height: 0.75,
            shoulder_width: 0.45,
            arm_length: 0.65,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn new(
        standing_height: f64,
        knee_height: f64,
        hip_height: f64,
        standing_eye_height: f64,
        seated_eye_height: f64,
        seated_elbow_height: f64,
        shoulder_width: f64,
        arm_length: f64,
    ) -> Result<Self, ResolveError> {
        let body = Self {
            standing_height,
            knee_height,
            hip_height,
            standing_eye_height,
            seated_eye_height,
            seated_elbow_height,
            shoulder_width,
            arm_length,
        };
        body.check()?;
        Ok(body)
    }

    fn check(&self) -> Result<(), ResolveError> {
        let fields = [
            ("standing_height", self.standing_height),
            ("knee_height", self.knee_height),
            ("hip_height", self.hip_height),
            ("standing_eye_height", self.standing_eye_height),
            ("seated_eye_height", self.seated_eye_height),
            ("seated_elbow_height", self.seated_elbow_height),
            ("shoulder_width", self.shoulder_width),
            ("arm_length", self.arm_length),
        ];

        for (field, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(ResolveError::InvalidReferenceBody { field, value });
            }
        }

        Ok(())
    }
}

/// Seat height for a neutral seated posture with feet flat on the floor.
pub fn seat_height(reference: &ReferenceBody) -> f64 {
    reference.knee_height * 0.95
}

/// Work surface height for seated tasks, just above the elbow.
pub fn table_height(reference: &ReferenceBody) -> f64 {
    reference.seated_elbow_height + 0.03
}
