use serde::{Deserialize, Serialize};

use crate::error::{finite, non_negative, positive, ConfigError};

/// Handling parameters for one hull class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoatPhysicsSpec {
    /// Throttle change per second while a throttle key is held.
    pub throttle_rate: f32,
    /// Throttle decay toward zero per second when no throttle key is held.
    pub throttle_decay: f32,
    pub min_throttle: f32,
    pub max_throttle: f32,
    /// Rudder change in rad/s while a rudder key is held.
    pub rudder_rate: f32,
    /// Self-centering rate in rad/s.
    pub rudder_decay: f32,
    /// Rudder angle is clamped to [-rudder_limit, rudder_limit] (rad).
    pub rudder_limit: f32,
    /// m/s of target speed per unit throttle.
    pub speed_per_throttle: f32,
    /// First-order response of speed toward the throttle target (1/s).
    pub speed_response: f32,
    pub max_forward_speed: f32,
    pub max_reverse_speed: f32,
    /// Yaw rate per (rad of rudder · m/s of speed), in 1/m.
    pub turn_rate_gain: f32,
    /// Boat origin height above the sampled water surface (m).
    pub draft_offset: f32,
    /// Maximum hull tilt away from vertical (rad).
    pub max_tilt: f32,
    /// Rate at which the hull follows the surface normal (1/s).
    pub tilt_response: f32,
}

impl BoatPhysicsSpec {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("throttle_rate", self.throttle_rate)?;
        positive("throttle_decay", self.throttle_decay)?;
        let (min, max) = (
            finite("min_throttle", self.min_throttle)?,
            finite("max_throttle", self.max_throttle)?,
        );
        if min > max {
            return Err(ConfigError::InvertedRange { name: "throttle", min, max });
        }
        if min > 0.0 || max < 0.0 {
            return Err(ConfigError::RangeExcludesZero { name: "throttle", min, max });
        }
        positive("rudder_rate", self.rudder_rate)?;
        positive("rudder_decay", self.rudder_decay)?;
        positive("rudder_limit", self.rudder_limit)?;
        non_negative("speed_per_throttle", self.speed_per_throttle)?;
        positive("speed_response", self.speed_response)?;
        positive("max_forward_speed", self.max_forward_speed)?;
        non_negative("max_reverse_speed", self.max_reverse_speed)?;
        non_negative("turn_rate_gain", self.turn_rate_gain)?;
        finite("draft_offset", self.draft_offset)?;
        non_negative("max_tilt", self.max_tilt)?;
        if self.max_tilt >= std::f32::consts::FRAC_PI_2 {
            return Err(ConfigError::OutOfRange {
                name: "max_tilt",
                expected: "[0, π/2)",
                value: self.max_tilt,
            });
        }
        positive("tilt_response", self.tilt_response)?;
        Ok(())
    }
}

impl Default for BoatPhysicsSpec {
    fn default() -> Self {
        boatspecs::harbor_launch_spec()
    }
}

pub mod boatspecs {
    use super::*;

    // Small open launch with a cabin, tuned for a lively demo rather than realism.
    pub fn harbor_launch_spec() -> BoatPhysicsSpec {
        let max_forward_speed = 8.0; // m/s, ~15 kn
        BoatPhysicsSpec {
            throttle_rate: 0.6,
            throttle_decay: 0.35,
            min_throttle: -0.4,
            max_throttle: 1.0,
            rudder_rate: 1.2,
            rudder_decay: 0.9,
            rudder_limit: 0.6, // ~35 deg
            speed_per_throttle: max_forward_speed,
            speed_response: 1.2,
            max_forward_speed,
            max_reverse_speed: 3.0,
            // 0.6 rad rudder at full speed -> ~0.58 rad/s
            turn_rate_gain: 0.12,
            draft_offset: 0.15,
            max_tilt: 0.35, // ~20 deg
            tilt_response: 4.0,
        }
    }

    /// Snappy variant used by scripted scenarios: reaches full rudder in half a second.
    pub fn racing_skiff_spec() -> BoatPhysicsSpec {
        BoatPhysicsSpec {
            throttle_rate: 1.5,
            rudder_rate: 2.0,
            speed_response: 2.5,
            max_forward_speed: 12.0,
            speed_per_throttle: 12.0,
            turn_rate_gain: 0.08,
            max_tilt: 0.25,
            ..harbor_launch_spec()
        }
    }
}
