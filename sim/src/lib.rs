//! Boat-on-waves simulation core.
//!
//! This crate intentionally avoids any ECS or I/O. It exposes the wave field,
//! the simulation clock and the boat controller as plain owned values, plus
//! the pure lighting helpers a renderer needs each frame.

mod math;
pub use math::{heading_forward, tilt_angle, wrap_angle, Quatf, Vec2f, Vec3f, BODY_FWD, BODY_PORT, BODY_UP};

mod error;
pub use error::ConfigError;

pub mod clock;
pub use clock::{sanitize_dt, SimClock};

pub mod wave_field;
pub use wave_field::{GridSpec, HeightGrid, SurfaceSample, WaveField, WaveFieldSpec, WaveSpec};

pub mod builtins;

mod boat_specs;
pub use boat_specs::boatspecs;
pub use boat_specs::BoatPhysicsSpec;

pub mod boat;
pub use boat::{BoatController, BoatPose, BoatStepDebug, ControlInputs, StartTransform};

pub mod lighting;
pub use lighting::{DayNightCommand, DirectionalLight, LightingSpec, SceneLighting, TimeOfDay};

pub mod spotlights;
pub use spotlights::{
    boat_mounted_light_transform, LightTransform, Spotlight, SpotlightMount, SpotlightRig,
    SpotlightSlot,
};
