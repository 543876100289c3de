use crate::models::satellite::PhysicalState;
use nalgebra as na;

/// Specific orbital energy (J/kg). Constant along a Keplerian orbit, which
/// makes it a convenient conservation oracle for propagator tests.
pub fn specific_energy(state: &PhysicalState, mu: f64) -> f64 {
    0.5 * state.velocity.magnitude_squared() - mu / state.position.magnitude()
}

/// Specific angular momentum vector (m²/s).
pub fn angular_momentum(state: &PhysicalState) -> na::Vector3<f64> {
    state.position.cross(&state.velocity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MU_EARTH;
    use approx::assert_relative_eq;

    #[test]
    fn circular_orbit_energy_is_minus_mu_over_two_a() {
        let r = 7.0e6;
        let v = (MU_EARTH / r).sqrt();
        let state = PhysicalState {
            position: na::Vector3::new(r, 0.0, 0.0),
            velocity: na::Vector3::new(0.0, v, 0.0),
            mass: 500.0,
        };
        assert_relative_eq!(
            specific_energy(&state, MU_EARTH),
            -MU_EARTH / (2.0 * r),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            angular_momentum(&state).z,
            r * v,
            max_relative = 1e-12
        );
    }
}
