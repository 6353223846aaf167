use tracing::debug;

use super::terms::*;
use super::types::{BoatPose, BoatStepDebug, ControlInputs, StartTransform};
use crate::clock::sanitize_dt;
use crate::math::{clamp_tilt, heading_forward, tilt_angle, tilt_toward, wrap_angle, Quatf};
use crate::{BoatPhysicsSpec, ConfigError, WaveField};

/// Owns the boat pose and integrates control inputs plus wave feedback into it.
#[derive(Debug, Clone)]
pub struct BoatController {
    spec: BoatPhysicsSpec,
    pose: BoatPose,
}

impl BoatController {
    /// Validate `spec` and place the boat at `start`.
    pub fn initialize(spec: BoatPhysicsSpec, start: &StartTransform) -> Result<Self, ConfigError> {
        spec.validate()?;
        let mut pose = BoatPose::at(start);
        pose.speed = sanitize_speed(pose.speed).clamp(-spec.max_reverse_speed, spec.max_forward_speed);
        debug!(position = ?start.position, heading = start.heading, speed = pose.speed, "boat controller initialized");
        Ok(Self { spec, pose })
    }

    pub fn spec(&self) -> &BoatPhysicsSpec {
        &self.spec
    }

    pub fn pose(&self) -> &BoatPose {
        &self.pose
    }

    /// Advance the boat by `dt` seconds. `clock_time` is the simulation time
    /// at the end of the step and is used to sample the water surface.
    pub fn step(&mut self, inputs: ControlInputs, waves: &WaveField, clock_time: f32, dt: f32) -> &BoatPose {
        self.step_dbg(inputs, waves, clock_time, dt, None)
    }

    /// Variant of `step` that fills out an optional debug telemetry struct.
    pub fn step_dbg(
        &mut self,
        inputs: ControlInputs,
        waves: &WaveField,
        clock_time: f32,
        dt: f32,
        mut dbg: Option<&mut BoatStepDebug>,
    ) -> &BoatPose {
        let dt = sanitize_dt(dt);
        let spec = &self.spec;
        let pose = &mut self.pose;

        // Controls
        pose.throttle = integrate_throttle(spec, pose.throttle, inputs.throttle_command(), dt);
        pose.rudder = integrate_rudder(spec, pose.rudder, inputs.rudder_command(), dt);

        // Kinematics (semi-implicit: new speed drives heading and position)
        let target = target_speed(spec, pose.throttle);
        pose.speed = approach_speed(spec, pose.speed, target, dt);
        let r = yaw_rate(spec, pose.rudder, pose.speed);
        pose.heading = wrap_angle(pose.heading + r * dt);
        let fwd = heading_forward(pose.heading);
        pose.position.x += fwd.x * pose.speed * dt;
        pose.position.z += fwd.z * pose.speed * dt;

        // Ride the surface
        let surface = waves.sample(pose.position.x, pose.position.z, clock_time);
        pose.position.y = surface.height + spec.draft_offset;
        let tilt_target = tilt_toward(surface.normal, spec.max_tilt);
        let blended = pose.tilt.slerp(tilt_target, lag_alpha(spec.tilt_response, dt));
        pose.tilt = clamp_tilt(blended.normalize(), spec.max_tilt);
        pose.orientation = (pose.tilt * Quatf::from_rotation_y(pose.heading)).normalize();

        if let Some(d) = dbg.as_mut() {
            d.dt = dt;
            d.time = clock_time;
            d.inputs = inputs;
            d.throttle = pose.throttle;
            d.rudder = pose.rudder;
            d.target_speed = target;
            d.speed = pose.speed;
            d.yaw_rate = r;
            d.heading = pose.heading;
            d.surface = surface;
            d.tilt_target = tilt_angle(tilt_target);
            d.tilt = tilt_angle(pose.tilt);
        }

        &self.pose
    }
}

#[inline]
fn sanitize_speed(v: f32) -> f32 {
    if v.is_finite() { v } else { 0.0 }
}
