//! Everything the boat demo owns between frames, updated in a fixed order.

use bevy::math::Mat4;
use sim::{
    BoatController, BoatStepDebug, ConfigError, DirectionalLight, Quatf, SceneLighting, SimClock,
    Spotlight, SpotlightRig, TimeOfDay, Vec3f, WaveField,
};
use tracing::{debug, info};

use crate::camera::CameraRig;
use crate::config::Config;
use crate::input::{Key, KeyAction, KeyboardState};

/// Per-frame snapshot handed to a renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderFrame {
    /// Shading time for the water surface.
    pub time: f32,
    pub boat_position: Vec3f,
    pub boat_orientation: Quatf,
    pub spotlights: [Spotlight; 4],
    pub sun: DirectionalLight,
    pub time_of_day: TimeOfDay,
    pub camera_look_at: Vec3f,
}

impl RenderFrame {
    /// Model matrix of the hull.
    pub fn boat_transform(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.boat_orientation, self.boat_position)
    }
}

pub struct Scene {
    clock: SimClock,
    waves: WaveField,
    boat: BoatController,
    lighting: SceneLighting,
    spotlights: SpotlightRig,
    camera: CameraRig,
    keys: KeyboardState,
}

impl Scene {
    pub fn from_config(cfg: &Config) -> Result<Self, ConfigError> {
        let waves = WaveField::new(&cfg.waves)?;
        let boat = BoatController::initialize(cfg.boat.clone(), &cfg.start)?;
        let lighting = SceneLighting::new(&cfg.lighting)?;
        cfg.spotlights.validate()?;
        let mut camera = cfg.camera;
        camera.track(boat.pose().position);
        Ok(Self {
            clock: SimClock::new(),
            waves,
            boat,
            lighting,
            spotlights: cfg.spotlights.clone(),
            camera,
            keys: KeyboardState::default(),
        })
    }

    pub fn handle_key(&mut self, key: Key, action: KeyAction) {
        debug!(?key, ?action, t = self.clock.current_time(), "key event");
        if let Some(cmd) = self.keys.apply(key, action) {
            self.camera.apply(cmd);
        }
    }

    /// Advance one frame: clock, boat, camera, then day/night.
    pub fn update(&mut self, dt: f32) -> BoatStepDebug {
        let dt = self.clock.advance(dt);
        let mut dbg = BoatStepDebug::default();
        let t = self.clock.current_time();
        let pose = *self
            .boat
            .step_dbg(self.keys.control_inputs(), &self.waves, t, dt, Some(&mut dbg));
        self.camera.track(pose.position);

        let before = self.lighting.time_of_day();
        let now = self.lighting.apply(self.keys.day_night_command());
        if now != before {
            info!(t, from = ?before, to = ?now, "time of day changed");
        }
        dbg
    }

    pub fn frame(&self) -> RenderFrame {
        let pose = self.boat.pose();
        RenderFrame {
            time: self.clock.current_time(),
            boat_position: pose.position,
            boat_orientation: pose.orientation,
            spotlights: self.spotlights.spotlights(pose),
            sun: self.lighting.directional_light(),
            time_of_day: self.lighting.time_of_day(),
            camera_look_at: self.camera.look_at,
        }
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    pub fn waves(&self) -> &WaveField {
        &self.waves
    }

    pub fn boat(&self) -> &BoatController {
        &self.boat
    }

    pub fn lighting(&self) -> &SceneLighting {
        &self.lighting
    }

    pub fn camera(&self) -> &CameraRig {
        &self.camera
    }

    pub fn keys(&self) -> &KeyboardState {
        &self.keys
    }
}
