use nalgebra::SVector;
use std::{error::Error, fmt};

/// Right-hand side of a first-order ODE system in N variables.
pub trait OdeSystem<const N: usize> {
    fn derivative(&self, t: f64, y: &SVector<f64, N>) -> SVector<f64, N>;

    /// Terminal condition, checked after every accepted step. Returning true
    /// aborts the integration at the current point.
    fn terminate(&self, _t: f64, _y: &SVector<f64, N>) -> bool {
        false
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IntegratorError {
    /// The error tolerance could not be met within the step-size bounds
    StepSizeUnderflow { t: f64 },
    /// The step budget ran out before reaching the end of the span
    MaxStepsExceeded { t: f64 },
    /// The system's terminal condition fired
    TerminalCondition { t: f64 },
}

impl fmt::Display for IntegratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegratorError::StepSizeUnderflow { t } => {
                write!(f, "step size underflow at t = {}", t)
            }
            IntegratorError::MaxStepsExceeded { t } => {
                write!(f, "maximum step count exceeded at t = {}", t)
            }
            IntegratorError::TerminalCondition { t } => {
                write!(f, "terminal condition reached at t = {}", t)
            }
        }
    }
}

impl Error for IntegratorError {}

const SAFETY: f64 = 0.9;
const SHRINK_LIMIT: f64 = 0.2;
const GROWTH_LIMIT: f64 = 5.0;

/// Embedded Cash-Karp Runge-Kutta 4(5) integrator with step-size control.
///
/// Steps are capped at `h_max` so short-period perturbation terms stay
/// resolved even when the error estimate would allow larger strides.
pub struct AdaptiveRkf {
    pub rtol: f64,
    pub atol: f64,
    pub h_max: f64,
    pub h_min: f64,
    pub max_steps: usize,
}

impl Default for AdaptiveRkf {
    fn default() -> Self {
        AdaptiveRkf {
            rtol: 1e-9,
            atol: 1e-9,
            h_max: 1e-3,
            h_min: 1e-14,
            max_steps: 2_000_000,
        }
    }
}

impl AdaptiveRkf {
    /// Integrates `sys` from `t0` to `t1`, returning the solution sampled at
    /// `samples` equally spaced points, endpoints included. Sample points are
    /// stepped onto exactly, so the output range never leaves the integrated
    /// span.
    pub fn integrate<const N: usize, S: OdeSystem<N>>(
        &self,
        sys: &S,
        y0: SVector<f64, N>,
        t0: f64,
        t1: f64,
        samples: usize,
    ) -> Result<Vec<SVector<f64, N>>, IntegratorError> {
        let mut out = Vec::with_capacity(samples.max(1));
        out.push(y0);
        if samples < 2 {
            return Ok(out);
        }

        let dt_out = (t1 - t0) / (samples - 1) as f64;
        let mut t = t0;
        let mut y = y0;
        let mut h = self.h_max.min(dt_out);
        let mut steps = 0usize;

        for k in 1..samples {
            let t_target = t0 + k as f64 * dt_out;
            while t < t_target {
                // Never step past the next output point.
                let h_try = h.min(t_target - t);
                let (y_next, err) = self.step(sys, t, &y, h_try);

                steps += 1;
                if steps > self.max_steps {
                    return Err(IntegratorError::MaxStepsExceeded { t });
                }

                if err <= 1.0 {
                    t += h_try;
                    y = y_next;
                    if sys.terminate(t, &y) {
                        return Err(IntegratorError::TerminalCondition { t });
                    }
                }

                // Fifth-order step-size controller with clamped growth. A
                // step shortened to land on an output point leaves the
                // controller's size alone when accepted, and rescales from
                // that size (not the shortened one) when rejected.
                if err <= 1.0 && h_try < h {
                    continue;
                }
                let scale = if err > 0.0 {
                    (SAFETY * err.powf(-0.2)).clamp(SHRINK_LIMIT, GROWTH_LIMIT)
                } else {
                    GROWTH_LIMIT
                };
                h = (h * scale).min(self.h_max);
                if h < self.h_min {
                    return Err(IntegratorError::StepSizeUnderflow { t });
                }
            }
            out.push(y);
        }
        Ok(out)
    }

    /// Single Cash-Karp stage evaluation. Returns the fifth-order solution
    /// and the scaled error estimate against the embedded fourth-order one.
    fn step<const N: usize, S: OdeSystem<N>>(
        &self,
        sys: &S,
        t: f64,
        y: &SVector<f64, N>,
        h: f64,
    ) -> (SVector<f64, N>, f64) {
        let y = *y;
        let k1 = sys.derivative(t, &y);
        let k2 = sys.derivative(t + 0.2 * h, &(y + k1 * (h * 0.2)));
        let k3 = sys.derivative(
            t + 0.3 * h,
            &(y + k1 * (h * 3.0 / 40.0) + k2 * (h * 9.0 / 40.0)),
        );
        let k4 = sys.derivative(
            t + 0.6 * h,
            &(y + k1 * (h * 0.3) + k2 * (h * -0.9) + k3 * (h * 1.2)),
        );
        let k5 = sys.derivative(
            t + h,
            &(y + k1 * (h * -11.0 / 54.0)
                + k2 * (h * 2.5)
                + k3 * (h * -70.0 / 27.0)
                + k4 * (h * 35.0 / 27.0)),
        );
        let k6 = sys.derivative(
            t + 0.875 * h,
            &(y + k1 * (h * 1631.0 / 55296.0)
                + k2 * (h * 175.0 / 512.0)
                + k3 * (h * 575.0 / 13824.0)
                + k4 * (h * 44275.0 / 110592.0)
                + k5 * (h * 253.0 / 4096.0)),
        );

        let y5 = y
            + k1 * (h * 37.0 / 378.0)
            + k3 * (h * 250.0 / 621.0)
            + k4 * (h * 125.0 / 594.0)
            + k6 * (h * 512.0 / 1771.0);
        let y4 = y
            + k1 * (h * 2825.0 / 27648.0)
            + k3 * (h * 18575.0 / 48384.0)
            + k4 * (h * 13525.0 / 55296.0)
            + k5 * (h * 277.0 / 14336.0)
            + k6 * (h * 0.25);

        let mut err: f64 = 0.0;
        for i in 0..N {
            let sc = self.atol + self.rtol * y[i].abs().max(y5[i].abs());
            let ratio = (y5[i] - y4[i]).abs() / sc;
            if !ratio.is_finite() {
                return (y5, f64::INFINITY);
            }
            err = err.max(ratio);
        }
        (y5, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    struct HarmonicOscillator;

    impl OdeSystem<2> for HarmonicOscillator {
        fn derivative(&self, _t: f64, y: &SVector<f64, 2>) -> SVector<f64, 2> {
            SVector::<f64, 2>::new(y[1], -y[0])
        }
    }

    struct Decay;

    impl OdeSystem<1> for Decay {
        fn derivative(&self, _t: f64, y: &SVector<f64, 1>) -> SVector<f64, 1> {
            SVector::<f64, 1>::new(-y[0])
        }

        fn terminate(&self, _t: f64, y: &SVector<f64, 1>) -> bool {
            y[0] < 0.5
        }
    }

    #[test]
    fn oscillator_returns_to_start_after_one_period() {
        let solver = AdaptiveRkf {
            h_max: 0.1,
            ..Default::default()
        };
        let y0 = SVector::<f64, 2>::new(1.0, 0.0);
        let out = solver
            .integrate(&HarmonicOscillator, y0, 0.0, 2.0 * PI, 101)
            .unwrap();
        assert_eq!(out.len(), 101);
        let last = out.last().unwrap();
        assert_abs_diff_eq!(last[0], 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(last[1], 0.0, epsilon = 1e-6);
    }

    #[test]
    fn sample_points_are_equally_spaced_and_exact() {
        let solver = AdaptiveRkf {
            h_max: 0.05,
            ..Default::default()
        };
        let y0 = SVector::<f64, 2>::new(0.0, 1.0);
        // Against sin(t) at the quarter period
        let out = solver
            .integrate(&HarmonicOscillator, y0, 0.0, PI / 2.0, 51)
            .unwrap();
        for (k, y) in out.iter().enumerate() {
            let t = k as f64 * (PI / 2.0) / 50.0;
            assert_abs_diff_eq!(y[0], t.sin(), epsilon = 1e-6);
        }
    }

    struct FastOscillator;

    impl OdeSystem<2> for FastOscillator {
        fn derivative(&self, _t: f64, y: &SVector<f64, 2>) -> SVector<f64, 2> {
            SVector::<f64, 2>::new(y[1], -100.0 * y[0])
        }
    }

    #[test]
    fn controller_recovers_when_steps_shorten_at_output_points() {
        // Output spacing far above the tolerance-limited step size makes
        // the last step before every output point a shortened one; the
        // controller must carry its own step size through those and still
        // finish accurately within the step budget.
        let solver = AdaptiveRkf {
            h_max: 1.0,
            ..Default::default()
        };
        let period = 2.0 * PI / 10.0;
        let y0 = SVector::<f64, 2>::new(1.0, 0.0);
        let out = solver
            .integrate(&FastOscillator, y0, 0.0, period, 8)
            .unwrap();
        assert_eq!(out.len(), 8);
        let last = out.last().unwrap();
        assert_abs_diff_eq!(last[0], 1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(last[1], 0.0, epsilon = 1e-4);
    }

    #[test]
    fn terminal_condition_aborts_with_crossing_time() {
        let solver = AdaptiveRkf::default();
        let y0 = SVector::<f64, 1>::new(1.0);
        let result = solver.integrate(&Decay, y0, 0.0, 5.0, 501);
        match result {
            Err(IntegratorError::TerminalCondition { t }) => {
                // y(t) = exp(-t) crosses 0.5 at ln 2
                assert!((t - 2.0_f64.ln()).abs() < 2e-2, "t = {}", t);
            }
            other => panic!("expected terminal condition, got {:?}", other),
        }
    }
}
