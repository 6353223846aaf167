//! Time-of-day selection for the directional "sun" light.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::math::Vec3f;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    #[default]
    Day,
    Night,
}

/// What the day/night controls ask for this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DayNightCommand {
    Day,
    Night,
    /// Nothing held: keep whatever was selected last.
    #[default]
    Unset,
}

impl DayNightCommand {
    /// Day wins when both controls are held.
    pub fn from_keys(day_held: bool, night_held: bool) -> Self {
        if day_held {
            Self::Day
        } else if night_held {
            Self::Night
        } else {
            Self::Unset
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingSpec {
    /// Direction toward the light source (not required to be unit length).
    pub sun_direction: Vec3f,
    pub day_color: Vec3f,
    pub night_color: Vec3f,
    pub initial: TimeOfDay,
}

impl Default for LightingSpec {
    fn default() -> Self {
        Self {
            sun_direction: Vec3f::new(1.0, 1.0, 0.0),
            day_color: Vec3f::new(1.0, 1.0, 1.0),
            night_color: Vec3f::new(0.1, 0.1, 0.3),
            initial: TimeOfDay::Day,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    /// Unit vector toward the light.
    pub direction: Vec3f,
    pub color: Vec3f,
}

#[derive(Debug, Clone)]
pub struct SceneLighting {
    sun_direction: Vec3f,
    day_color: Vec3f,
    night_color: Vec3f,
    time_of_day: TimeOfDay,
}

impl SceneLighting {
    pub fn new(spec: &LightingSpec) -> Result<Self, ConfigError> {
        let sun_direction = spec
            .sun_direction
            .try_normalize()
            .ok_or(ConfigError::ZeroVector { name: "sun_direction" })?;
        if !(spec.day_color.is_finite() && spec.night_color.is_finite()) {
            return Err(ConfigError::NonFinite { name: "light color" });
        }
        Ok(Self {
            sun_direction,
            day_color: spec.day_color,
            night_color: spec.night_color,
            time_of_day: spec.initial,
        })
    }

    /// Apply this frame's command; `Unset` keeps the previous selection.
    pub fn apply(&mut self, cmd: DayNightCommand) -> TimeOfDay {
        match cmd {
            DayNightCommand::Day => self.time_of_day = TimeOfDay::Day,
            DayNightCommand::Night => self.time_of_day = TimeOfDay::Night,
            DayNightCommand::Unset => {}
        }
        self.time_of_day
    }

    pub fn time_of_day(&self) -> TimeOfDay {
        self.time_of_day
    }

    pub fn light_color(&self) -> Vec3f {
        match self.time_of_day {
            TimeOfDay::Day => self.day_color,
            TimeOfDay::Night => self.night_color,
        }
    }

    pub fn directional_light(&self) -> DirectionalLight {
        DirectionalLight { direction: self.sun_direction, color: self.light_color() }
    }
}
