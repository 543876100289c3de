use nalgebra as na;

/// Instantaneous translational state of a spacecraft, in physical units.
#[derive(Debug, Clone, Copy)]
pub struct PhysicalState {
    /// Position (m)
    pub position: na::Vector3<f64>,
    /// Velocity (m/s)
    pub velocity: na::Vector3<f64>,
    /// Mass (kg)
    pub mass: f64,
}

/// A spacecraft participating in a simulation run.
#[derive(Debug, Clone)]
pub struct Satellite {
    pub id: String,
    pub position: na::Vector3<f64>,
    pub velocity: na::Vector3<f64>,
    pub mass: f64,
    /// Fixed thrust vector (N), used only by the fixed-step propagator. The
    /// adaptive pipeline takes its thrust from a control law instead.
    pub thrust: na::Vector3<f64>,
}

impl Satellite {
    pub fn new(
        id: impl Into<String>,
        position: na::Vector3<f64>,
        velocity: na::Vector3<f64>,
        mass: f64,
    ) -> Self {
        Satellite {
            id: id.into(),
            position,
            velocity,
            mass,
            thrust: na::Vector3::zeros(),
        }
    }

    pub fn with_thrust(mut self, thrust: na::Vector3<f64>) -> Self {
        self.thrust = thrust;
        self
    }

    /// Read-only snapshot taken at the start of a propagation. The satellite
    /// itself is never mutated by the adaptive pipeline.
    pub fn state(&self) -> PhysicalState {
        PhysicalState {
            position: self.position,
            velocity: self.velocity,
            mass: self.mass,
        }
    }
}
