pub mod satellite;
pub mod trajectory;

pub use satellite::{PhysicalState, Satellite};
pub use trajectory::Trajectory;
