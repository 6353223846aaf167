//! Spotlights rigidly mounted on the boat.
//!
//! All light placement goes through [`boat_mounted_light_transform`], so the
//! scene setup and every rendered frame agree on where the lights are.

use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_2;

use crate::error::ConfigError;
use crate::math::{Vec3f, BODY_FWD, BODY_PORT, BODY_UP};
use crate::BoatPose;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpotlightSlot {
    FrontLeft,
    FrontRight,
    BackLeft,
    BackRight,
}

impl SpotlightSlot {
    pub const ALL: [SpotlightSlot; 4] = [
        SpotlightSlot::FrontLeft,
        SpotlightSlot::FrontRight,
        SpotlightSlot::BackLeft,
        SpotlightSlot::BackRight,
    ];
}

/// Light fixture in the boat's body frame (+Z forward, +Y up, +X port).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpotlightMount {
    pub offset: Vec3f,
    pub direction: Vec3f,
    /// Half-angle of the cone in radians.
    pub cutoff_angle: f32,
    pub color: Vec3f,
}

impl SpotlightMount {
    fn on_cabin_roof(side: f32, facing: f32) -> Self {
        Self {
            // Cabin roof sits 2 m up, 1.2 m aft of the hull origin.
            offset: BODY_PORT * side + BODY_UP * 2.0 - BODY_FWD * 1.2,
            direction: BODY_FWD * facing,
            cutoff_angle: 45f32.to_radians(),
            color: Vec3f::ONE,
        }
    }

    fn validate(&self, name: &'static str) -> Result<(), ConfigError> {
        if !(self.offset.is_finite() && self.color.is_finite()) {
            return Err(ConfigError::NonFinite { name });
        }
        if self.direction.try_normalize().is_none() {
            return Err(ConfigError::ZeroVector { name });
        }
        if !(self.cutoff_angle > 0.0 && self.cutoff_angle <= FRAC_PI_2) {
            return Err(ConfigError::OutOfRange {
                name,
                expected: "(0, π/2] cutoff",
                value: self.cutoff_angle,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpotlightRig {
    pub front_left: SpotlightMount,
    pub front_right: SpotlightMount,
    pub back_left: SpotlightMount,
    pub back_right: SpotlightMount,
}

impl Default for SpotlightRig {
    fn default() -> Self {
        Self {
            front_left: SpotlightMount::on_cabin_roof(1.0, 1.0),
            front_right: SpotlightMount::on_cabin_roof(-1.0, 1.0),
            back_left: SpotlightMount::on_cabin_roof(1.0, -1.0),
            back_right: SpotlightMount::on_cabin_roof(-1.0, -1.0),
        }
    }
}

/// World-space placement of one light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightTransform {
    pub position: Vec3f,
    /// Unit vector along the cone axis.
    pub direction: Vec3f,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spotlight {
    pub slot: SpotlightSlot,
    pub position: Vec3f,
    pub direction: Vec3f,
    pub cutoff_angle: f32,
    pub color: Vec3f,
}

/// Place a body-frame mount in the world using the boat's full orientation.
pub fn boat_mounted_light_transform(pose: &BoatPose, mount: &SpotlightMount) -> LightTransform {
    let direction = (pose.orientation * mount.direction)
        .try_normalize()
        .unwrap_or_else(|| pose.forward());
    LightTransform {
        position: pose.position + pose.orientation * mount.offset,
        direction,
    }
}

impl SpotlightRig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.front_left.validate("spotlights.front_left")?;
        self.front_right.validate("spotlights.front_right")?;
        self.back_left.validate("spotlights.back_left")?;
        self.back_right.validate("spotlights.back_right")
    }

    pub fn mount(&self, slot: SpotlightSlot) -> &SpotlightMount {
        match slot {
            SpotlightSlot::FrontLeft => &self.front_left,
            SpotlightSlot::FrontRight => &self.front_right,
            SpotlightSlot::BackLeft => &self.back_left,
            SpotlightSlot::BackRight => &self.back_right,
        }
    }

    pub fn spotlights(&self, pose: &BoatPose) -> [Spotlight; 4] {
        SpotlightSlot::ALL.map(|slot| {
            let mount = self.mount(slot);
            let t = boat_mounted_light_transform(pose, mount);
            Spotlight {
                slot,
                position: t.position,
                direction: t.direction,
                cutoff_angle: mount.cutoff_angle,
                color: mount.color,
            }
        })
    }
}
