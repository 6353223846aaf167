mod controller;
mod terms;
mod types;

pub use controller::BoatController;
pub use types::{BoatPose, BoatStepDebug, ControlInputs, StartTransform};
