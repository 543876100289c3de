use nalgebra as na;

/// Physical position history of one satellite, one entry per output sample
/// of the integrator. Coordinates are in meters.
#[derive(Debug, Clone)]
pub struct Trajectory {
    pub satellite_id: String,
    pub positions: Vec<na::Vector3<f64>>,
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn first(&self) -> Option<&na::Vector3<f64>> {
        self.positions.first()
    }

    pub fn last(&self) -> Option<&na::Vector3<f64>> {
        self.positions.last()
    }
}
