use crate::constants::{R_EARTH, RHO_500KM};
use nalgebra as na;

/// Atmospheric density strategy.
///
/// Implementations receive the current normalized position and the length
/// scale `r0` (meters) and return a physical density in kg/m³. The returned
/// value carries no validity flag: a caller querying outside a model's
/// stated altitude band gets a number that is not physically meaningful.
pub trait DensityModel {
    fn density(&self, r: &na::Vector3<f64>, r0: f64) -> f64;
}

/// Fixed density at the 500 km reference altitude.
///
/// Linearizing the tabulated Harris-Priester curve (Montenbruck & Gill,
/// p. 91) is only accurate between roughly 480 and 520 km, and the
/// altitude-dependent variants destabilized the step-size controller, so
/// this model returns the tabulated 500 km value regardless of altitude.
pub struct FixedDensity {
    rho: f64,
}

impl FixedDensity {
    pub fn new(rho: f64) -> Self {
        FixedDensity { rho }
    }
}

impl Default for FixedDensity {
    fn default() -> Self {
        FixedDensity { rho: RHO_500KM }
    }
}

impl DensityModel for FixedDensity {
    fn density(&self, _r: &na::Vector3<f64>, _r0: f64) -> f64 {
        self.rho
    }
}

/// Exponential fall-off from sea level. Coarse at orbital altitudes but
/// altitude-sensitive, unlike [`FixedDensity`].
pub struct ExponentialDensity {
    pub sea_level_density: f64,
    pub scale_height: f64,
}

impl Default for ExponentialDensity {
    fn default() -> Self {
        ExponentialDensity {
            sea_level_density: 1.225,
            scale_height: 7200.0,
        }
    }
}

impl DensityModel for ExponentialDensity {
    fn density(&self, r: &na::Vector3<f64>, r0: f64) -> f64 {
        let altitude = (r * r0).magnitude() - R_EARTH;
        self.sea_level_density * (-altitude / self.scale_height).exp()
    }
}
