// Vec3f/Quatf are Bevy's math types (re-exported from bevy_math) so the host
// and any renderer can consume poses without conversion.
pub type Vec2f = bevy_math::Vec2;
pub type Vec3f = bevy_math::Vec3;
pub type Quatf = bevy_math::Quat;

use std::f32::consts::{PI, TAU};

// Body basis: +Z forward, +Y up, +X port (left).
pub const BODY_FWD: Vec3f = Vec3f::Z;
pub const BODY_UP: Vec3f = Vec3f::Y;
pub const BODY_PORT: Vec3f = Vec3f::X;

/// World-space forward vector for a heading about +Y.
/// Heading 0 faces +Z; positive heading turns toward +X (left, CCW seen from above).
#[inline]
pub fn heading_forward(heading: f32) -> Vec3f {
    let (s, c) = heading.sin_cos();
    Vec3f::new(s, 0.0, c)
}

/// Wrap an angle into (-π, π].
#[inline]
pub fn wrap_angle(a: f32) -> f32 {
    if a > -PI && a <= PI {
        return a;
    }
    let w = (a + PI).rem_euclid(TAU) - PI;
    if w <= -PI { w + TAU } else { w }
}

/// Rotation that takes +Y onto `normal`, limited to `max_angle` radians.
pub fn tilt_toward(normal: Vec3f, max_angle: f32) -> Quatf {
    let n = normal.try_normalize().unwrap_or(BODY_UP);
    clamp_tilt(Quatf::from_rotation_arc(BODY_UP, n), max_angle)
}

/// Limit the rotation angle of `q` to `max_angle`, keeping its axis.
pub fn clamp_tilt(q: Quatf, max_angle: f32) -> Quatf {
    // Keep w >= 0 so to_axis_angle reports the short rotation.
    let q = if q.w < 0.0 { -q } else { q };
    let (axis, angle) = q.normalize().to_axis_angle();
    if angle <= max_angle || !angle.is_finite() {
        return q;
    }
    Quatf::from_axis_angle(axis, max_angle)
}

/// Angle between the rotated up vector and world up.
#[inline]
pub fn tilt_angle(q: Quatf) -> f32 {
    (q * BODY_UP).dot(Vec3f::Y).clamp(-1.0, 1.0).acos()
}
