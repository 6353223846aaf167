use crate::BoatPhysicsSpec;

/// Move `value` toward `target` by at most `max_delta`, without overshoot.
#[inline]
pub(super) fn move_toward(value: f32, target: f32, max_delta: f32) -> f32 {
    let d = target - value;
    if d.abs() <= max_delta { target } else { value + max_delta.copysign(d) }
}

/// Fraction of the remaining gap closed by a first-order lag over `dt`.
#[inline]
pub(super) fn lag_alpha(rate: f32, dt: f32) -> f32 {
    1.0 - (-rate * dt).exp()
}

pub(super) fn integrate_throttle(spec: &BoatPhysicsSpec, throttle: f32, command: f32, dt: f32) -> f32 {
    let next = if command > 0.0 {
        move_toward(throttle, spec.max_throttle, spec.throttle_rate * dt)
    } else if command < 0.0 {
        move_toward(throttle, spec.min_throttle, spec.throttle_rate * dt)
    } else {
        move_toward(throttle, 0.0, spec.throttle_decay * dt)
    };
    next.clamp(spec.min_throttle, spec.max_throttle)
}

pub(super) fn integrate_rudder(spec: &BoatPhysicsSpec, rudder: f32, command: f32, dt: f32) -> f32 {
    let next = if command != 0.0 {
        move_toward(rudder, command * spec.rudder_limit, spec.rudder_rate * dt)
    } else {
        move_toward(rudder, 0.0, spec.rudder_decay * dt)
    };
    next.clamp(-spec.rudder_limit, spec.rudder_limit)
}

#[inline]
pub(super) fn target_speed(spec: &BoatPhysicsSpec, throttle: f32) -> f32 {
    throttle * spec.speed_per_throttle
}

pub(super) fn approach_speed(spec: &BoatPhysicsSpec, speed: f32, target: f32, dt: f32) -> f32 {
    let next = speed + (target - speed) * lag_alpha(spec.speed_response, dt);
    next.clamp(-spec.max_reverse_speed, spec.max_forward_speed)
}

/// Yaw rate from rudder and speed; zero when the boat is not moving.
#[inline]
pub(super) fn yaw_rate(spec: &BoatPhysicsSpec, rudder: f32, speed: f32) -> f32 {
    spec.turn_rate_gain * rudder * speed
}
