use std::path::PathBuf;

use bevy::prelude::Resource;
use clap::Parser;

use crate::config::Config;

#[derive(Parser, Debug, Resource, Clone)]
#[command(name = "wavehost")]
#[command(about = "Headless host for the boat-on-waves simulation", long_about = None)]
pub struct Args {
    /// Scene configuration (TOML)
    #[arg(long, default_value = "config/harbor.toml")]
    pub config: PathBuf,
    /// Stop after this many simulated seconds (0 = run until interrupted)
    #[arg(long)]
    pub duration_secs: Option<f32>,
    /// Fixed simulation rate
    #[arg(long)]
    pub tick_hz: Option<f32>,
    /// Advance exactly one tick per frame instead of following the wall clock
    #[arg(long, default_value_t = false)]
    pub fast: bool,
}

impl Args {
    /// Apply command-line overrides. The result is validated when the app is built.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(d) = self.duration_secs {
            cfg.host.duration_secs = d;
        }
        if let Some(hz) = self.tick_hz {
            cfg.host.tick_hz = hz;
        }
    }
}
