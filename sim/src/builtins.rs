use std::f32::consts::TAU;

use crate::math::Vec2f;
use crate::{WaveFieldSpec, WaveSpec};

/// Gentle swell with two shorter cross-chops, used by the demo harbor.
pub fn harbor_swell() -> WaveFieldSpec {
    WaveFieldSpec {
        components: vec![
            // Primary swell - long, slow
            WaveSpec::deep_water(0.35, 18.0, Vec2f::new(1.0, 0.2), 0.0),
            // Cross chop
            WaveSpec::deep_water(0.12, 7.0, Vec2f::new(0.6, 0.8), 1.1),
            // Ripples
            WaveSpec::deep_water(0.04, 2.5, Vec2f::new(-0.4, 0.9), 2.3),
        ],
    }
}

/// Steeper sea for exercising the tilt limit.
pub fn choppy_sea() -> WaveFieldSpec {
    WaveFieldSpec {
        components: vec![
            WaveSpec::deep_water(0.8, 9.0, Vec2f::new(1.0, 0.0), 0.0),
            WaveSpec::deep_water(0.45, 4.0, Vec2f::new(0.3, 1.0), 0.7),
        ],
    }
}

/// Single sine: amplitude 1, wavelength 2π (k = 1), ω = 1, phase 0.
pub fn unit_sine() -> WaveFieldSpec {
    WaveFieldSpec {
        components: vec![WaveSpec {
            amplitude: 1.0,
            wavelength: TAU,
            direction: Vec2f::X,
            angular_frequency: 1.0,
            phase: 0.0,
        }],
    }
}
