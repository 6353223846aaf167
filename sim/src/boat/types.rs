use serde::{Deserialize, Serialize};

use crate::math::{heading_forward, Quatf, Vec3f, BODY_UP};
use crate::SurfaceSample;

/// Key-state snapshot for one step, supplied by the input collaborator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlInputs {
    pub throttle_up: bool,
    pub throttle_down: bool,
    pub rudder_left: bool,
    pub rudder_right: bool,
}

impl ControlInputs {
    /// +1 toward max throttle, -1 toward min, 0 when neither (or both) are held.
    pub fn throttle_command(&self) -> f32 {
        axis(self.throttle_up, self.throttle_down)
    }

    /// +1 = left (port) rudder, -1 = right.
    pub fn rudder_command(&self) -> f32 {
        axis(self.rudder_left, self.rudder_right)
    }
}

#[inline]
fn axis(pos: bool, neg: bool) -> f32 {
    match (pos, neg) {
        (true, false) => 1.0,
        (false, true) => -1.0,
        _ => 0.0,
    }
}

/// Initial placement of the boat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartTransform {
    pub position: Vec3f,
    /// Rotation about +Y in radians; 0 faces +Z.
    pub heading: f32,
    /// Initial forward speed in m/s, for scenes that start underway.
    pub speed: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoatPose {
    pub position: Vec3f,
    /// Yaw about world +Y in (-π, π]. Positive turns left (CCW seen from above).
    pub heading: f32,
    /// World-space tilt applied on top of the yaw to follow the surface.
    pub tilt: Quatf,
    /// Body→world rotation, `tilt * yaw(heading)`.
    /// Body axes: +Z forward, +Y up, +X port.
    pub orientation: Quatf,
    /// Signed forward speed in m/s (negative when reversing).
    pub speed: f32,
    /// Rudder angle in radians, positive = left.
    pub rudder: f32,
    /// Signed throttle level.
    pub throttle: f32,
}

impl BoatPose {
    pub fn at(start: &StartTransform) -> Self {
        let yaw = Quatf::from_rotation_y(start.heading);
        Self {
            position: start.position,
            heading: start.heading,
            tilt: Quatf::IDENTITY,
            orientation: yaw,
            speed: start.speed,
            rudder: 0.0,
            throttle: 0.0,
        }
    }

    /// Horizontal direction of travel.
    pub fn forward(&self) -> Vec3f {
        heading_forward(self.heading)
    }

    /// Hull up vector in world space.
    pub fn up(&self) -> Vec3f {
        self.orientation * BODY_UP
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BoatStepDebug {
    pub dt: f32,
    pub time: f32,
    pub inputs: ControlInputs,
    pub throttle: f32,
    pub rudder: f32,
    pub target_speed: f32,
    pub speed: f32,
    pub yaw_rate: f32,
    pub heading: f32,
    pub surface: SurfaceSample,
    // Tilt diagnostics (radians from vertical)
    pub tilt_target: f32,
    pub tilt: f32,
}

impl Default for BoatStepDebug {
    fn default() -> Self {
        Self {
            dt: 0.0,
            time: 0.0,
            inputs: ControlInputs::default(),
            throttle: 0.0,
            rudder: 0.0,
            target_speed: 0.0,
            speed: 0.0,
            yaw_rate: 0.0,
            heading: 0.0,
            surface: SurfaceSample::FLAT,
            tilt_target: 0.0,
            tilt: 0.0,
        }
    }
}
