//! Forward-Euler reference propagator.
//!
//! A low-fidelity alternative to the adaptive pipeline that steps flat
//! physical units at a fixed dt. Useful as a coarse cross-check oracle for
//! the normalized integrator; not meant for accuracy.

use crate::constants::PhysicalConstants;
use crate::errors::SimulationError;
use crate::models::satellite::{PhysicalState, Satellite};
use nalgebra as na;

/// Advances a state by one Euler step under central-body gravity and the
/// given thrust. Pure: the input state is left untouched.
pub fn step(
    state: &PhysicalState,
    thrust: &na::Vector3<f64>,
    dt: f64,
    constants: &PhysicalConstants,
) -> PhysicalState {
    let r_norm = state.position.magnitude();
    let accel = -(constants.mu / r_norm.powi(3)) * state.position + thrust / state.mass;
    let mass_flow = thrust.magnitude() / (constants.g0 * constants.isp);

    PhysicalState {
        position: state.position + state.velocity * dt,
        velocity: state.velocity + accel * dt,
        mass: state.mass - mass_flow * dt,
    }
}

/// Propagates with fixed steps of `dt` seconds for `tf` seconds total,
/// folding [`step`] over the satellite's snapshot and collecting one state
/// per step. Stops with [`SimulationError::SurfaceImpact`] as soon as the
/// satellite dips below the central body's surface.
pub fn propagate(
    sat: &Satellite,
    dt: f64,
    tf: f64,
    constants: &PhysicalConstants,
) -> Result<Vec<PhysicalState>, SimulationError> {
    let n = (tf / dt) as usize;
    let mut states = Vec::with_capacity(n);
    let mut current = sat.state();

    for i in 0..n {
        current = step(&current, &sat.thrust, dt, constants);
        if current.position.magnitude() < constants.r_earth {
            return Err(SimulationError::SurfaceImpact {
                t: (i + 1) as f64 * dt,
            });
        }
        states.push(current);
    }
    Ok(states)
}
