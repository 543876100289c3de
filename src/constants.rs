use serde::{Deserialize, Serialize};

pub const MU_EARTH: f64 = 3.986004418e14; // Gravitational parameter of Earth (m³/s²)
pub const R_EARTH: f64 = 6.371e6; // Radius of Earth (m)
pub const EARTH_J2: f64 = 1.08263e-3; // Earth's J2 perturbation coefficient
pub const G0: f64 = 9.80665; // Gravitational acceleration at sea level (m/s²)
pub const RHO_500KM: f64 = 9.983e-13; // Tabulated atmospheric density at 500 km (kg/m³)

// Spacecraft property defaults
pub const C_D: f64 = 2.2;
pub const REFERENCE_AREA: f64 = 1.0; // m²
pub const ISP: f64 = 300.0; // seconds

// Math
pub const PI: f64 = std::f64::consts::PI;

/// Physical and environmental constants for a propagation run.
///
/// Passed to the simulator as an explicit value instead of being read from
/// module globals, so that runs are reproducible and tests can zero out
/// individual force terms.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PhysicalConstants {
    /// Gravitational parameter of the central body (m³/s²)
    pub mu: f64,
    /// Radius of the central body (m)
    pub r_earth: f64,
    /// Second zonal harmonic (oblateness) coefficient
    pub j2: f64,
    /// Drag coefficient
    pub c_d: f64,
    /// Drag reference area (m²)
    pub reference_area: f64,
    /// Gravitational acceleration at sea level (m/s²)
    pub g0: f64,
    /// Specific impulse (s)
    pub isp: f64,
    /// Tabulated density at the reference altitude (kg/m³)
    pub rho_ref: f64,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        PhysicalConstants {
            mu: MU_EARTH,
            r_earth: R_EARTH,
            j2: EARTH_J2,
            c_d: C_D,
            reference_area: REFERENCE_AREA,
            g0: G0,
            isp: ISP,
            rho_ref: RHO_500KM,
        }
    }
}
