use nalgebra as na;

/// Open-loop thrust profile.
///
/// Implementations map normalized time tau in [0, 1] to a physical thrust
/// vector in newtons. The evolving state is deliberately not an input;
/// feedback control belongs in a different layer.
pub trait ControlLaw {
    fn thrust(&self, tau: f64) -> na::Vector3<f64>;
}

/// Coasting profile: no thrust at any time.
pub struct NoControl;

impl ControlLaw for NoControl {
    fn thrust(&self, _tau: f64) -> na::Vector3<f64> {
        na::Vector3::zeros()
    }
}

/// Fixed inertial thrust vector, applied over a window of normalized time.
pub struct ConstantThrust {
    thrust: na::Vector3<f64>,
    start: f64,
    end: f64,
}

impl ConstantThrust {
    /// Thrust sustained over the whole propagation.
    pub fn new(thrust: na::Vector3<f64>) -> Self {
        Self::over_window(thrust, 0.0, 1.0)
    }

    pub fn over_window(thrust: na::Vector3<f64>, start: f64, end: f64) -> Self {
        ConstantThrust { thrust, start, end }
    }
}

impl ControlLaw for ConstantThrust {
    fn thrust(&self, tau: f64) -> na::Vector3<f64> {
        if tau >= self.start && tau <= self.end {
            self.thrust
        } else {
            na::Vector3::zeros()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn constant_thrust_respects_its_window() {
        let law = ConstantThrust::over_window(na::Vector3::new(1.0, 0.0, 0.0), 0.25, 0.5);
        assert_abs_diff_eq!(law.thrust(0.1), na::Vector3::zeros());
        assert_abs_diff_eq!(law.thrust(0.3), na::Vector3::new(1.0, 0.0, 0.0));
        assert_abs_diff_eq!(law.thrust(0.9), na::Vector3::zeros());
    }
}
