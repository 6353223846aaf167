//! Keyboard state and scripted key replay.
//!
//! The host has no window, so key events come from the `[[script]]` section of
//! the scene config and are replayed against the simulation clock.

use serde::{Deserialize, Serialize};
use sim::{ControlInputs, DayNightCommand};

use crate::camera::CameraCommand;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    W,
    S,
    A,
    D,
    #[serde(rename = "0")]
    Digit0,
    #[serde(rename = "1")]
    Digit1,
    #[serde(rename = "2")]
    Digit2,
    #[serde(rename = "3")]
    Digit3,
    #[serde(rename = "4")]
    Digit4,
    Escape,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    #[default]
    Press,
    Repeat,
    Release,
}

/// Which controls are currently held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyboardState {
    pub throttle_up: bool,
    pub throttle_down: bool,
    pub rudder_left: bool,
    pub rudder_right: bool,
    pub day: bool,
    pub night: bool,
    pub quit_requested: bool,
}

impl KeyboardState {
    /// Record one key event. Camera keys act once on press and are returned
    /// to the caller instead of being held.
    pub fn apply(&mut self, key: Key, action: KeyAction) -> Option<CameraCommand> {
        let pressed = action == KeyAction::Press;
        let held = matches!(action, KeyAction::Press | KeyAction::Repeat);
        match key {
            Key::W => self.throttle_up = held,
            Key::S => self.throttle_down = held,
            Key::A => self.rudder_left = held,
            Key::D => self.rudder_right = held,
            // Day/night only count the initial press; a repeat clears them.
            Key::Digit3 => self.day = pressed,
            Key::Digit4 => self.night = pressed,
            Key::Digit0 if pressed => return Some(CameraCommand::Reset),
            Key::Digit1 if pressed => return Some(CameraCommand::Free),
            Key::Digit2 if pressed => return Some(CameraCommand::Follow),
            Key::Escape if pressed => self.quit_requested = true,
            _ => {}
        }
        None
    }

    pub fn control_inputs(&self) -> ControlInputs {
        ControlInputs {
            throttle_up: self.throttle_up,
            throttle_down: self.throttle_down,
            rudder_left: self.rudder_left,
            rudder_right: self.rudder_right,
        }
    }

    pub fn day_night_command(&self) -> DayNightCommand {
        DayNightCommand::from_keys(self.day, self.night)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScriptEvent {
    /// Simulation time in seconds at which the event fires.
    pub at: f32,
    pub key: Key,
    #[serde(default)]
    pub action: KeyAction,
}

/// Time-ordered key events, consumed as the clock passes them.
#[derive(Debug, Clone, Default)]
pub struct InputScript {
    events: Vec<ScriptEvent>,
    cursor: usize,
}

impl InputScript {
    pub fn new(mut events: Vec<ScriptEvent>) -> Self {
        // Stable sort keeps file order for events sharing a timestamp.
        events.sort_by(|a, b| a.at.total_cmp(&b.at));
        Self { events, cursor: 0 }
    }

    /// Events with `at <= now` that have not been returned yet.
    pub fn due(&mut self, now: f32) -> &[ScriptEvent] {
        let start = self.cursor;
        while self.cursor < self.events.len() && self.events[self.cursor].at <= now {
            self.cursor += 1;
        }
        &self.events[start..self.cursor]
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.events.len()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movement_keys_hold_through_repeat() {
        let mut keys = KeyboardState::default();
        keys.apply(Key::W, KeyAction::Press);
        keys.apply(Key::W, KeyAction::Repeat);
        assert!(keys.control_inputs().throttle_up);
        keys.apply(Key::W, KeyAction::Release);
        assert!(!keys.control_inputs().throttle_up);
    }

    #[test]
    fn day_night_keys_clear_on_repeat() {
        let mut keys = KeyboardState::default();
        keys.apply(Key::Digit4, KeyAction::Press);
        assert_eq!(keys.day_night_command(), DayNightCommand::Night);
        keys.apply(Key::Digit4, KeyAction::Repeat);
        assert_eq!(keys.day_night_command(), DayNightCommand::Unset);
    }

    #[test]
    fn camera_keys_fire_on_press_only() {
        let mut keys = KeyboardState::default();
        assert_eq!(keys.apply(Key::Digit0, KeyAction::Press), Some(CameraCommand::Reset));
        assert_eq!(keys.apply(Key::Digit1, KeyAction::Press), Some(CameraCommand::Free));
        assert_eq!(keys.apply(Key::Digit2, KeyAction::Press), Some(CameraCommand::Follow));
        assert_eq!(keys.apply(Key::Digit2, KeyAction::Repeat), None);
        assert_eq!(keys.apply(Key::Digit0, KeyAction::Release), None);
    }

    #[test]
    fn script_releases_events_in_time_order() {
        let ev = |at, key| ScriptEvent { at, key, action: KeyAction::Press };
        let mut script = InputScript::new(vec![ev(2.0, Key::A), ev(0.5, Key::W), ev(1.0, Key::D)]);
        assert_eq!(script.len(), 3);
        assert!(!script.is_empty());
        assert!(InputScript::default().is_empty());
        assert!(script.due(0.25).is_empty());
        let first: Vec<Key> = script.due(1.0).iter().map(|e| e.key).collect();
        assert_eq!(first, vec![Key::W, Key::D]);
        assert!(!script.is_finished());
        let rest: Vec<Key> = script.due(10.0).iter().map(|e| e.key).collect();
        assert_eq!(rest, vec![Key::A]);
        assert!(script.is_finished());
        assert!(script.due(20.0).is_empty());
    }
}
