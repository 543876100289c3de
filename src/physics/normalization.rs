use crate::constants::{PhysicalConstants, PI};
use crate::errors::SimulationError;
use crate::models::satellite::PhysicalState;
use nalgebra as na;

/// Normalized state vector: [position (3), velocity (3), mass (1)].
pub type StateVector = na::SVector<f64, 7>;

/// Position norms below this are treated as degenerate input (m).
const MIN_POSITION_NORM: f64 = 1.0;

/// Characteristic scales for one satellite's propagation.
///
/// `s0` is the circular-orbit period at radius `r0`, so one unit of
/// normalized time spans roughly one orbit. Every other scale is an
/// algebraic function of `r0`, `s0` and `m0`; recomputing from the same
/// initial state always reproduces the same scales. Scales are derived
/// per satellite and must never be shared across satellites.
#[derive(Debug, Clone, Copy)]
pub struct NormalizationScale {
    /// Length scale: initial position norm (m)
    pub r0: f64,
    /// Time scale: reference circular-orbit period (s)
    pub s0: f64,
    /// Velocity scale r0/s0 (m/s)
    pub v0: f64,
    /// Acceleration scale r0/s0² (m/s²)
    pub a0: f64,
    /// Mass scale: initial mass (kg)
    pub m0: f64,
    /// Thrust scale m0·r0/s0² (N)
    pub t0: f64,
    /// Gravitational parameter scale r0³/s0² (m³/s²)
    pub mu0: f64,
}

impl NormalizationScale {
    pub fn from_state(state: &PhysicalState, mu: f64) -> Result<Self, SimulationError> {
        let r0 = state.position.magnitude();
        if r0 < MIN_POSITION_NORM {
            return Err(SimulationError::DegeneratePosition(r0));
        }
        if state.mass <= 0.0 {
            return Err(SimulationError::NonPhysicalMass(state.mass));
        }

        let s0 = 2.0 * PI * (r0.powi(3) / mu).sqrt();
        let v0 = r0 / s0;
        let a0 = r0 / s0.powi(2);
        let m0 = state.mass;
        let t0 = m0 * r0 / s0.powi(2);
        let mu0 = r0.powi(3) / s0.powi(2);

        Ok(NormalizationScale {
            r0,
            s0,
            v0,
            a0,
            m0,
            t0,
            mu0,
        })
    }
}

/// Dimensionless counterparts of [`PhysicalConstants`], plus the raw length
/// scale and reference density needed by the drag term, and the thrust
/// scale needed to normalize control output (control laws return newtons).
#[derive(Debug, Clone, Copy)]
pub struct NormalizedConstants {
    pub mu: f64,
    pub r_e: f64,
    pub j2: f64,
    pub c_d: f64,
    pub s: f64,
    pub g0: f64,
    pub isp: f64,
    /// Length scale (m), passed through for the density model
    pub r0: f64,
    /// Reference density m0/r0³ (kg/m³)
    pub rho: f64,
    /// Thrust scale (N)
    pub t0: f64,
}

/// Derives the scales from the initial state and produces the normalized
/// initial state vector and constant set. All unit bookkeeping lives here;
/// the dynamics model never converts dimensions.
pub fn normalize(
    state: &PhysicalState,
    constants: &PhysicalConstants,
) -> Result<(StateVector, NormalizationScale, NormalizedConstants), SimulationError> {
    let scale = NormalizationScale::from_state(state, constants.mu)?;

    let y0 = StateVector::from_column_slice(&[
        state.position.x / scale.r0,
        state.position.y / scale.r0,
        state.position.z / scale.r0,
        state.velocity.x / scale.v0,
        state.velocity.y / scale.v0,
        state.velocity.z / scale.v0,
        state.mass / scale.m0,
    ]);

    let normalized = NormalizedConstants {
        mu: constants.mu / scale.mu0,
        r_e: constants.r_earth / scale.r0,
        j2: constants.j2,
        c_d: constants.c_d,
        s: constants.reference_area / scale.r0.powi(2),
        g0: constants.g0 / scale.a0,
        isp: constants.isp / scale.s0,
        r0: scale.r0,
        rho: scale.m0 / scale.r0.powi(3),
        t0: scale.t0,
    };

    Ok((y0, scale, normalized))
}

/// Re-dimensionalizes sampled normalized states back into physical position
/// coordinates (m).
pub fn redimensionalize(
    samples: &[StateVector],
    scale: &NormalizationScale,
) -> Vec<na::Vector3<f64>> {
    samples
        .iter()
        .map(|y| na::Vector3::new(y[0], y[1], y[2]) * scale.r0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn leo_state() -> PhysicalState {
        PhysicalState {
            position: na::Vector3::new(7.0e6, 0.0, 0.0),
            velocity: na::Vector3::new(0.0, 7.546e3, 0.0),
            mass: 500.0,
        }
    }

    #[test]
    fn normalized_mu_is_four_pi_squared() {
        // s0 = 2*pi*sqrt(r0³/mu) makes mu/mu0 = (2*pi)² by construction.
        let constants = PhysicalConstants::default();
        let (_, _, norm) = normalize(&leo_state(), &constants).unwrap();
        assert_relative_eq!(norm.mu, 4.0 * PI * PI, max_relative = 1e-12);
    }

    #[test]
    fn round_trip_reproduces_the_physical_state() {
        let state = leo_state();
        let constants = PhysicalConstants::default();
        let (y0, scale, _) = normalize(&state, &constants).unwrap();

        let position = na::Vector3::new(y0[0], y0[1], y0[2]) * scale.r0;
        let velocity = na::Vector3::new(y0[3], y0[4], y0[5]) * scale.v0;
        assert_relative_eq!(position, state.position, max_relative = 1e-12);
        assert_relative_eq!(velocity, state.velocity, max_relative = 1e-12);
        assert_abs_diff_eq!(y0[6] * scale.m0, state.mass);
    }

    #[test]
    fn degenerate_position_is_rejected() {
        let mut state = leo_state();
        state.position = na::Vector3::zeros();
        let result = normalize(&state, &PhysicalConstants::default());
        assert!(matches!(
            result,
            Err(SimulationError::DegeneratePosition(_))
        ));
    }

    #[test]
    fn non_positive_mass_is_rejected() {
        let mut state = leo_state();
        state.mass = 0.0;
        let result = normalize(&state, &PhysicalConstants::default());
        assert!(matches!(result, Err(SimulationError::NonPhysicalMass(_))));
    }

    #[test]
    fn redimensionalized_first_sample_matches_initial_position() {
        let state = leo_state();
        let (y0, scale, _) = normalize(&state, &PhysicalConstants::default()).unwrap();
        let positions = redimensionalize(&[y0], &scale);
        assert_relative_eq!(positions[0], state.position, max_relative = 1e-12);
    }
}
