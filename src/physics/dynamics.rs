use super::atmosphere::DensityModel;
use super::normalization::{NormalizedConstants, StateVector};
use crate::control::ControlLaw;
use crate::integrators::rkf45::OdeSystem;
use nalgebra as na;

/// Normalized mass below which propagation is aborted as non-physical.
pub const MASS_FLOOR: f64 = 1e-3;

/// Normalized translational dynamics of a single spacecraft.
///
/// The integration variable is tau in [0, 1]; `tf` stretches that unit
/// interval over `tf` reference orbits, so every derivative term carries a
/// factor of `tf`. Undefined at |r| = 0; the normalizer rejects degenerate
/// initial positions before this model is ever evaluated.
pub struct SatelliteDynamics<'a> {
    constants: NormalizedConstants,
    control: &'a dyn ControlLaw,
    density: &'a dyn DensityModel,
    tf: f64,
}

impl<'a> SatelliteDynamics<'a> {
    pub fn new(
        constants: NormalizedConstants,
        control: &'a dyn ControlLaw,
        density: &'a dyn DensityModel,
        tf: f64,
    ) -> Self {
        SatelliteDynamics {
            constants,
            control,
            density,
            tf,
        }
    }
}

impl OdeSystem<7> for SatelliteDynamics<'_> {
    fn derivative(&self, tau: f64, y: &StateVector) -> StateVector {
        let c = &self.constants;
        let r = na::Vector3::new(y[0], y[1], y[2]);
        let v = na::Vector3::new(y[3], y[4], y[5]);
        let m = y[6];
        let r_norm = r.magnitude();

        // Central-body gravity
        let a_g = -c.mu / r_norm.powi(3) * r;

        // J2 oblateness correction
        let z_ratio = 5.0 * (r.z / r_norm).powi(2);
        let j2_matrix = na::Matrix3::from_diagonal(&na::Vector3::new(
            z_ratio - 1.0,
            z_ratio - 1.0,
            z_ratio - 3.0,
        ));
        let a_j2 = 1.5 * c.j2 * c.mu * c.r_e.powi(2) / r_norm.powi(5) * (j2_matrix * r);

        // Thrust; the same control sample drives the mass flow below
        let thrust = self.control.thrust(tau) / c.t0;
        let a_u = thrust / m;

        // Atmospheric drag, quadratic in speed and opposing velocity
        let rho_ratio = self.density.density(&r, c.r0) / c.rho;
        let a_d = -0.5 * c.c_d * c.s * (1.0 / m) * rho_ratio * v.magnitude() * v;

        let m_dot = -thrust.magnitude() / (c.g0 * c.isp);

        let mut dy = StateVector::zeros();
        dy.fixed_rows_mut::<3>(0).copy_from(&v);
        dy.fixed_rows_mut::<3>(3).copy_from(&(a_g + a_j2 + a_u + a_d));
        dy[6] = m_dot;
        self.tf * dy
    }

    fn terminate(&self, _tau: f64, y: &StateVector) -> bool {
        y[6] <= MASS_FLOOR
    }
}
