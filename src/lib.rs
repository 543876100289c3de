pub mod constants;
pub mod control;
pub mod errors;
pub mod export;
pub mod fixed_step;
pub mod integrators;
pub mod models;
pub mod physics;
pub mod simulator;

pub use constants::PhysicalConstants;
pub use control::{ConstantThrust, ControlLaw, NoControl};
pub use errors::SimulationError;
pub use models::{PhysicalState, Satellite, Trajectory};
pub use simulator::{sample_count, Simulator};
