use crate::constants::PhysicalConstants;
use crate::control::ControlLaw;
use crate::errors::SimulationError;
use crate::integrators::rkf45::{AdaptiveRkf, IntegratorError};
use crate::models::satellite::Satellite;
use crate::models::trajectory::Trajectory;
use crate::physics::atmosphere::{DensityModel, FixedDensity};
use crate::physics::dynamics::SatelliteDynamics;
use crate::physics::normalization::{normalize, redimensionalize};
use std::collections::HashMap;

/// Number of output samples for a propagation over `tf` reference orbits.
/// Longer propagations get proportionally denser output.
pub fn sample_count(tf: u32) -> usize {
    100 * tf as usize + 1
}

/// Propagates a set of satellites under gravity, J2, drag and open-loop
/// thrust. Each satellite gets its own normalization scales and integration
/// run; nothing mutable is shared between them.
pub struct Simulator {
    satellites: Vec<Satellite>,
    control: Box<dyn ControlLaw>,
    density: Box<dyn DensityModel>,
    constants: PhysicalConstants,
    integrator: AdaptiveRkf,
}

impl Simulator {
    pub fn new(satellites: Vec<Satellite>, control: Box<dyn ControlLaw>) -> Self {
        Simulator {
            satellites,
            control,
            density: Box::new(FixedDensity::default()),
            constants: PhysicalConstants::default(),
            integrator: AdaptiveRkf::default(),
        }
    }

    pub fn with_constants(mut self, constants: PhysicalConstants) -> Self {
        self.constants = constants;
        self
    }

    pub fn with_density_model(mut self, density: Box<dyn DensityModel>) -> Self {
        self.density = density;
        self
    }

    /// Propagates every satellite over roughly `tf` reference orbits.
    ///
    /// Failures are satellite-scoped: a satellite whose integration fails is
    /// reported through its map entry and never aborts the others.
    pub fn run(&self, tf: u32) -> HashMap<String, Result<Trajectory, SimulationError>> {
        self.satellites
            .iter()
            .map(|sat| (sat.id.clone(), self.propagate(sat, tf)))
            .collect()
    }

    fn propagate(&self, sat: &Satellite, tf: u32) -> Result<Trajectory, SimulationError> {
        let (y0, scale, constants) = normalize(&sat.state(), &self.constants)?;
        let dynamics = SatelliteDynamics::new(
            constants,
            self.control.as_ref(),
            self.density.as_ref(),
            tf as f64,
        );

        let samples = self
            .integrator
            .integrate(&dynamics, y0, 0.0, 1.0, sample_count(tf))
            .map_err(|e| match e {
                IntegratorError::TerminalCondition { t } => {
                    SimulationError::MassDepleted { tau: t }
                }
                other => SimulationError::SolverFailure(other),
            })?;

        Ok(Trajectory {
            satellite_id: sat.id.clone(),
            positions: redimensionalize(&samples, &scale),
        })
    }
}
