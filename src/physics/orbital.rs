use crate::constants::PI;
use nalgebra as na;

/// Position and velocity of a circular orbit of the given radius and
/// inclination, with the ascending node on the +x axis.
pub fn circular_orbit_state(
    radius: f64,
    inclination: f64,
    mu: f64,
) -> (na::Vector3<f64>, na::Vector3<f64>) {
    let speed = (mu / radius).sqrt();
    let position = na::Vector3::new(radius, 0.0, 0.0);
    let velocity = speed * na::Vector3::new(0.0, inclination.cos(), inclination.sin());
    (position, velocity)
}

/// Keplerian period of a circular orbit (s).
pub fn orbital_period(radius: f64, mu: f64) -> f64 {
    2.0 * PI * (radius.powi(3) / mu).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MU_EARTH;
    use approx::assert_relative_eq;

    #[test]
    fn circular_speed_balances_gravity() {
        let (position, velocity) = circular_orbit_state(7.0e6, 0.0, MU_EARTH);
        // v² = mu / r for a circular orbit
        assert_relative_eq!(
            velocity.magnitude_squared(),
            MU_EARTH / position.magnitude(),
            max_relative = 1e-12
        );
        assert_relative_eq!(velocity.magnitude(), 7.546e3, max_relative = 1e-3);
    }

    #[test]
    fn inclination_tilts_the_velocity_out_of_plane() {
        let (_, velocity) = circular_orbit_state(7.0e6, 90.0_f64.to_radians(), MU_EARTH);
        assert_relative_eq!(velocity.y, 0.0, epsilon = 1e-9);
        assert!(velocity.z > 7.0e3);
    }

    #[test]
    fn leo_period_is_about_97_minutes() {
        let period = orbital_period(7.0e6, MU_EARTH);
        assert_relative_eq!(period, 5828.5, max_relative = 1e-3);
    }
}
