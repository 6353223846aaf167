use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use sim::{
    builtins, BoatPhysicsSpec, LightingSpec, SpotlightRig, StartTransform, WaveFieldSpec,
};

use crate::camera::CameraRig;
use crate::input::ScriptEvent;
use crate::scene::Scene;

/// Run-loop settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostSection {
    /// Fixed simulation steps per second.
    pub tick_hz: f32,
    /// Simulated seconds before the host exits; 0 runs until interrupted.
    pub duration_secs: f32,
    /// Log a telemetry line every N steps (0 disables).
    pub report_every_steps: u32,
    /// Upper bound on steps taken in one frame after a stall.
    pub max_catch_up_steps: u32,
}

impl Default for HostSection {
    fn default() -> Self {
        Self {
            tick_hz: 60.0,
            duration_secs: 0.0,
            report_every_steps: 60,
            max_catch_up_steps: 8,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub host: HostSection,
    pub waves: WaveFieldSpec,
    pub boat: BoatPhysicsSpec,
    pub start: StartTransform,
    pub lighting: LightingSpec,
    pub spotlights: SpotlightRig,
    pub camera: CameraRig,
    pub script: Vec<ScriptEvent>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: HostSection::default(),
            waves: builtins::harbor_swell(),
            boat: BoatPhysicsSpec::default(),
            start: StartTransform::default(),
            lighting: LightingSpec::default(),
            spotlights: SpotlightRig::default(),
            camera: CameraRig::default(),
            script: Vec::new(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        let hz = self.host.tick_hz;
        ensure!(hz.is_finite() && hz > 0.0, "host.tick_hz must be > 0 (got {hz})");
        let d = self.host.duration_secs;
        ensure!(d.is_finite() && d >= 0.0, "host.duration_secs must be >= 0 (got {d})");
        for (i, ev) in self.script.iter().enumerate() {
            ensure!(
                ev.at.is_finite() && ev.at >= 0.0,
                "script[{i}].at must be a non-negative time (got {})",
                ev.at
            );
        }
        // Building the scene runs every core validation.
        Scene::from_config(self)?;
        Ok(())
    }

    /// Fixed step length in seconds.
    pub fn step_secs(&self) -> f32 {
        1.0 / self.host.tick_hz
    }
}

pub fn parse_config(text: &str) -> Result<Config> {
    let cfg: Config = toml::from_str(text).context("parsing scene config")?;
    cfg.validate()?;
    Ok(cfg)
}

pub fn load_config(path: &Path) -> Result<Config> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    parse_config(&text).with_context(|| format!("loading config {}", path.display()))
}
