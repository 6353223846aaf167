use serde::{Deserialize, Serialize};
use sim::Vec3f;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraCommand {
    /// Look at the world origin and stop following.
    Reset,
    /// Keep the current look-at point and stop following.
    Free,
    Follow,
}

/// Look-at target of the viewer camera. Orbit and projection belong to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraRig {
    pub follow_boat: bool,
    pub look_at: Vec3f,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self { follow_boat: true, look_at: Vec3f::ZERO }
    }
}

impl CameraRig {
    pub fn apply(&mut self, cmd: CameraCommand) {
        match cmd {
            CameraCommand::Reset => {
                self.follow_boat = false;
                self.look_at = Vec3f::ZERO;
            }
            CameraCommand::Free => self.follow_boat = false,
            CameraCommand::Follow => self.follow_boat = true,
        }
    }

    pub fn track(&mut self, boat_position: Vec3f) {
        if self.follow_boat {
            self.look_at = boat_position;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follows_only_when_enabled() {
        let mut cam = CameraRig::default();
        cam.track(Vec3f::new(3.0, 0.2, -1.0));
        assert_eq!(cam.look_at, Vec3f::new(3.0, 0.2, -1.0));

        cam.apply(CameraCommand::Free);
        cam.track(Vec3f::new(9.0, 0.0, 9.0));
        assert_eq!(cam.look_at, Vec3f::new(3.0, 0.2, -1.0));

        cam.apply(CameraCommand::Reset);
        assert_eq!(cam.look_at, Vec3f::ZERO);
        assert!(!cam.follow_boat);

        cam.apply(CameraCommand::Follow);
        cam.track(Vec3f::new(1.0, 0.0, 1.0));
        assert_eq!(cam.look_at, Vec3f::new(1.0, 0.0, 1.0));
    }
}
