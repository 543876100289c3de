use crate::integrators::rkf45::IntegratorError;
use std::{error::Error, fmt, io};

#[derive(Debug)]
pub enum SimulationError {
    /// Initial position norm too close to the origin for the dynamics to be defined
    DegeneratePosition(f64),
    /// Initial mass is zero or negative
    NonPhysicalMass(f64),
    /// Propellant mass reached the floor during integration
    MassDepleted { tau: f64 },
    /// The adaptive solver failed to converge
    SolverFailure(IntegratorError),
    /// Fixed-step propagation dipped below the central body's surface
    SurfaceImpact { t: f64 },
    IoError(io::Error),
    CsvError(csv::Error),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::DegeneratePosition(r) => {
                write!(f, "initial position norm {} m is degenerate", r)
            }
            SimulationError::NonPhysicalMass(m) => {
                write!(f, "initial mass {} kg is not physical", m)
            }
            SimulationError::MassDepleted { tau } => {
                write!(f, "propellant depleted at tau = {}", tau)
            }
            SimulationError::SolverFailure(e) => write!(f, "solver failure: {}", e),
            SimulationError::SurfaceImpact { t } => {
                write!(f, "satellite crashed into the surface at t = {} s", t)
            }
            SimulationError::IoError(e) => write!(f, "I/O error: {}", e),
            SimulationError::CsvError(e) => write!(f, "CSV error: {}", e),
        }
    }
}

impl Error for SimulationError {}

// Implement `From<T>` conversions for automatic error mapping
impl From<io::Error> for SimulationError {
    fn from(err: io::Error) -> Self {
        SimulationError::IoError(err)
    }
}

impl From<csv::Error> for SimulationError {
    fn from(err: csv::Error) -> Self {
        SimulationError::CsvError(err)
    }
}
