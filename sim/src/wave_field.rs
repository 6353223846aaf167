//! Procedural water surface built from traveling sine waves.
//!
//! The field is a pure function of horizontal position and time. Physics
//! (`BoatController`) and rendering (mesh displacement, shading time) sample
//! the same field, so what the boat rides is what the viewer sees.

use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use crate::error::{finite, non_negative, positive, ConfigError};
use crate::math::{Vec2f, Vec3f};

/// Gravity used for the deep-water dispersion relation (m/s²).
pub const GRAVITY: f32 = 9.81;

/// One traveling sine component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveSpec {
    /// Peak height in meters. Zero is allowed (flat component).
    pub amplitude: f32,
    /// Crest-to-crest distance in meters.
    pub wavelength: f32,
    /// Propagation direction in the XZ plane (normalized on construction).
    pub direction: Vec2f,
    /// Temporal phase rate in rad/s.
    pub angular_frequency: f32,
    /// Phase offset in radians.
    #[serde(default)]
    pub phase: f32,
}

impl WaveSpec {
    /// Component whose angular frequency follows deep-water dispersion, ω = sqrt(g·k).
    pub fn deep_water(amplitude: f32, wavelength: f32, direction: Vec2f, phase: f32) -> Self {
        let k = TAU / wavelength;
        Self {
            amplitude,
            wavelength,
            direction,
            angular_frequency: (GRAVITY * k).sqrt(),
            phase,
        }
    }

    fn validated(self) -> Result<Self, ConfigError> {
        non_negative("amplitude", self.amplitude)?;
        positive("wavelength", self.wavelength)?;
        finite("direction.x", self.direction.x)?;
        finite("direction.y", self.direction.y)?;
        finite("angular_frequency", self.angular_frequency)?;
        finite("phase", self.phase)?;
        Ok(Self {
            direction: self.direction.normalize_or_zero(),
            ..self
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WaveFieldSpec {
    #[serde(default)]
    pub components: Vec<WaveSpec>,
}

/// Height, orientation and slope of the surface at one point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSample {
    pub height: f32,
    /// Unit surface normal.
    pub normal: Vec3f,
    /// ∂height/∂x
    pub slope_x: f32,
    /// ∂height/∂z
    pub slope_z: f32,
}

impl SurfaceSample {
    pub const FLAT: Self = Self { height: 0.0, normal: Vec3f::Y, slope_x: 0.0, slope_z: 0.0 };

    pub fn tangent_x(&self) -> Vec3f {
        Vec3f::new(1.0, self.slope_x, 0.0).try_normalize().unwrap_or(Vec3f::X)
    }

    pub fn tangent_z(&self) -> Vec3f {
        Vec3f::new(0.0, self.slope_z, 1.0).try_normalize().unwrap_or(Vec3f::Z)
    }
}

/// Validated, immutable wave field.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveField {
    components: Vec<WaveSpec>,
}

impl WaveField {
    pub fn new(spec: &WaveFieldSpec) -> Result<Self, ConfigError> {
        let components = spec
            .components
            .iter()
            .enumerate()
            .map(|(index, w)| {
                w.validated()
                    .map_err(|e| ConfigError::Wave { index, source: Box::new(e) })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { components })
    }

    /// A field with no components: height 0, normal +Y everywhere.
    pub fn flat() -> Self {
        Self { components: Vec::new() }
    }

    pub fn components(&self) -> &[WaveSpec] {
        &self.components
    }

    /// Evaluate height, slope and normal at `(x, z)` and time `t`.
    pub fn sample(&self, x: f32, z: f32, t: f32) -> SurfaceSample {
        let mut height = 0.0_f32;
        let mut slope_x = 0.0_f32;
        let mut slope_z = 0.0_f32;
        for w in &self.components {
            let k = TAU / w.wavelength;
            let theta = k * (w.direction.x * x + w.direction.y * z)
                + w.angular_frequency * t
                + w.phase;
            let (s, c) = theta.sin_cos();
            height += w.amplitude * s;
            let dh = w.amplitude * k * c;
            slope_x += dh * w.direction.x;
            slope_z += dh * w.direction.y;
        }
        let normal = Vec3f::new(-slope_x, 1.0, -slope_z)
            .try_normalize()
            .unwrap_or(Vec3f::Y);
        SurfaceSample { height, normal, slope_x, slope_z }
    }

    #[inline]
    pub fn height(&self, x: f32, z: f32, t: f32) -> f32 {
        self.sample(x, z, t).height
    }

    /// Sample a regular XZ grid, row-major along X then Z.
    pub fn sample_grid(&self, grid: &GridSpec, t: f32) -> HeightGrid {
        let (nx, nz) = grid.vertex_counts();
        let step = grid.step();
        let mut samples = Vec::with_capacity(nx * nz);
        for iz in 0..nz {
            let z = grid.origin.y + step.y * iz as f32;
            for ix in 0..nx {
                let x = grid.origin.x + step.x * ix as f32;
                samples.push(self.sample(x, z, t));
            }
        }
        HeightGrid { nx, nz, samples }
    }
}

/// Regular grid in the XZ plane used for CPU-side mesh displacement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    /// Minimum corner (x, z).
    pub origin: Vec2f,
    /// Extent along x and z in meters.
    pub size: Vec2f,
    /// Number of cells along each axis; vertices are `resolution + 1`.
    pub resolution: u32,
}

impl GridSpec {
    fn vertex_counts(&self) -> (usize, usize) {
        let n = self.resolution.max(1) as usize + 1;
        (n, n)
    }

    fn step(&self) -> Vec2f {
        self.size / self.resolution.max(1) as f32
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeightGrid {
    pub nx: usize,
    pub nz: usize,
    pub samples: Vec<SurfaceSample>,
}

impl HeightGrid {
    pub fn get(&self, ix: usize, iz: usize) -> Option<&SurfaceSample> {
        if ix >= self.nx || iz >= self.nz {
            return None;
        }
        self.samples.get(iz * self.nx + ix)
    }
}
