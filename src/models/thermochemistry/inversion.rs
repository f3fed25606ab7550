//! Temperature from energy: a Newton iteration safeguarded by bisection.

use thiserror::Error;
use tracing::{debug, warn};

use crate::support::{
    constraint::{Constraint, NonNegative, StrictlyPositive},
    numeric::StateType,
};

/// Solver configuration for recovering temperature from an energy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InversionConfig {
    /// Maximum Newton/bisection iterations.
    pub max_iters: usize,

    /// Relative temperature tolerance on the step and the bracket width.
    ///
    /// Never tighter than a few machine epsilons of the state type.
    pub rel_tol: f64,

    /// Absolute temperature step tolerance, K.
    pub abs_tol: f64,

    /// Lower end of the search range, K.
    pub min_temperature: f64,

    /// Upper end of the search range, K.
    pub max_temperature: f64,
}

impl Default for InversionConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            rel_tol: 1e-12,
            abs_tol: 0.0,
            min_temperature: 1.0,
            max_temperature: 1e5,
        }
    }
}

impl InversionConfig {
    /// Checks that the configuration describes a usable search.
    ///
    /// # Errors
    ///
    /// Returns [`InversionError::InvalidConfig`] if `max_iters` is zero, a
    /// tolerance is negative, both tolerances are zero, or the temperature
    /// range is not `0 < min_temperature < max_temperature`.
    pub fn validate(&self) -> Result<(), InversionError> {
        let invalid = |context| Err(InversionError::InvalidConfig { context });

        if self.max_iters == 0 {
            return invalid("max_iters must be at least one");
        }
        if NonNegative::check(&self.rel_tol).is_err() || NonNegative::check(&self.abs_tol).is_err()
        {
            return invalid("tolerances must be non-negative");
        }
        if self.rel_tol == 0.0 && self.abs_tol == 0.0 {
            return invalid("at least one tolerance must be positive");
        }
        if StrictlyPositive::check(&self.min_temperature).is_err() {
            return invalid("min_temperature must be strictly positive");
        }
        if !(self.min_temperature < self.max_temperature) || !self.max_temperature.is_finite() {
            return invalid("max_temperature must be finite and above min_temperature");
        }
        Ok(())
    }
}

/// Which end of the configured temperature range a target energy lies beyond.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeBound {
    Min,
    Max,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum InversionError {
    #[error("invalid inversion config: {context}")]
    InvalidConfig { context: &'static str },

    #[error("target energy {target} J/kg is outside the range reachable at {bound:?} temperature {temperature} K")]
    OutOfRange {
        target: f64,
        bound: RangeBound,
        temperature: f64,
    },

    #[error("mixture has no vibrational-electronic energy capacity")]
    NoEnergyCapacity,

    #[error("energy is not finite at temperature {temperature} K")]
    NonFiniteEnergy { temperature: f64 },

    /// The iteration limit was reached before the step or bracket tolerance.
    #[error("temperature inversion did not converge after {iters} iterations: T={temperature} K, residual={residual} J/kg")]
    NonConvergence {
        iters: usize,

        /// Last temperature iterate, K.
        temperature: f64,

        /// Energy residual at the last iterate, J/kg.
        residual: f64,
    },
}

/// Finds `T` in the configured range with `energy(T) = target`.
///
/// `energy` returns the energy and its temperature derivative, and must be
/// increasing in `T`. A Newton step is taken only if it stays inside the
/// current bracket and at most halves the previous step; otherwise the
/// bracket is bisected. The search stops on an exact hit, when the step or
/// the bracket width falls below `abs_tol + rel_tol·T`.
pub(crate) fn solve<S: StateType>(
    target: S,
    initial_guess: S,
    config: &InversionConfig,
    mut energy: impl FnMut(S) -> (S, S),
) -> Result<S, InversionError> {
    config.validate()?;

    let mut lo = S::from_coeff(config.min_temperature);
    let mut hi = S::from_coeff(config.max_temperature);

    let (e_lo, _) = energy(lo);
    if !e_lo.is_finite() {
        return Err(non_finite(lo));
    }
    if e_lo > target {
        return Err(out_of_range(target, RangeBound::Min, lo));
    }
    let (e_hi, _) = energy(hi);
    if !e_hi.is_finite() {
        return Err(non_finite(hi));
    }
    if e_hi < target {
        return Err(out_of_range(target, RangeBound::Max, hi));
    }

    let rel_tol = S::from_coeff(config.rel_tol).max(S::from_coeff(4.0) * S::epsilon());
    let abs_tol = S::from_coeff(config.abs_tol);
    let two = S::from_coeff(2.0);

    let mut t = if initial_guess.is_finite() {
        initial_guess.max(lo).min(hi)
    } else {
        lo + (hi - lo) / two
    };
    let mut last_step = hi - lo;
    let mut residual = S::zero();

    for iter in 1..=config.max_iters {
        let (e, slope) = energy(t);
        residual = e - target;
        if residual == S::zero() {
            return Ok(t);
        }

        if residual > S::zero() {
            hi = t;
        } else {
            lo = t;
        }

        let newton = t - residual / slope;
        let next = if slope > S::zero()
            && newton >= lo
            && newton <= hi
            && two * (newton - t).abs() <= last_step
        {
            newton
        } else {
            debug!(
                iter,
                temperature = t.to_report(),
                newton = newton.to_report(),
                lo = lo.to_report(),
                hi = hi.to_report(),
                "newton step rejected, bisecting"
            );
            lo + (hi - lo) / two
        };

        let step = (next - t).abs();
        last_step = step;
        t = next;

        let tol = abs_tol + rel_tol * t.abs();
        if step <= tol || hi - lo <= tol {
            return Ok(t);
        }
    }

    warn!(
        iters = config.max_iters,
        temperature = t.to_report(),
        residual = residual.to_report(),
        "temperature inversion did not converge"
    );
    Err(InversionError::NonConvergence {
        iters: config.max_iters,
        temperature: t.to_report(),
        residual: residual.to_report(),
    })
}

fn non_finite<S: StateType>(temperature: S) -> InversionError {
    warn!(temperature = temperature.to_report(), "energy is not finite");
    InversionError::NonFiniteEnergy {
        temperature: temperature.to_report(),
    }
}

fn out_of_range<S: StateType>(target: S, bound: RangeBound, temperature: S) -> InversionError {
    InversionError::OutOfRange {
        target: target.to_report(),
        bound,
        temperature: temperature.to_report(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    /// Energy of a calorically perfect gas with `cv = 700 J/(kg·K)`.
    fn perfect(t: f64) -> (f64, f64) {
        (700.0 * t, 700.0)
    }

    /// A stiff, strongly curved energy that defeats plain Newton from a poor guess.
    fn stiff(t: f64) -> (f64, f64) {
        let x = 2000.0 / t;
        let e = 1.0e4 / (x.exp() - 1.0) + t;
        let de = 1.0e4 * x.exp() * x / t / (x.exp() - 1.0).powi(2) + 1.0;
        (e, de)
    }

    #[test]
    fn linear_energy_converges_immediately() {
        let t = solve(700.0 * 1234.5, 1000.0, &InversionConfig::default(), perfect).unwrap();
        assert_relative_eq!(t, 1234.5, max_relative = 1e-14);
    }

    #[test]
    fn bisection_rescues_a_poor_guess() {
        let (target, _) = stiff(800.0);
        let t = solve(target, 90_000.0, &InversionConfig::default(), stiff).unwrap();
        assert_relative_eq!(t, 800.0, max_relative = 1e-11);
    }

    #[test]
    fn overshooting_newton_steps_fall_back_to_bisection() {
        // A slope half the true one makes Newton hop between mirror points.
        let t = solve(700.0 * 300.0, 250.0, &InversionConfig::default(), |t: f64| {
            (700.0 * t, 350.0)
        })
        .unwrap();
        assert_relative_eq!(t, 300.0, max_relative = 1e-12);
    }

    #[test]
    fn single_precision_stops_on_a_narrow_bracket() {
        let energy = |t: f32| (5.4e6 + 740.0 * t, 370.0);
        let (target, _) = energy(301.7);
        let t = solve(target, 250.0, &InversionConfig::default(), energy).unwrap();
        assert_relative_eq!(t, 301.7_f32, max_relative = 1e-5);
    }

    #[test]
    fn reports_non_finite_energy() {
        let energy = |t: f64| ((t - 10.0).ln(), 1.0 / (t - 10.0));
        assert_eq!(
            solve(3.0, 50.0, &InversionConfig::default(), energy),
            Err(InversionError::NonFiniteEnergy { temperature: 1.0 })
        );
    }

    #[test]
    fn reports_out_of_range_targets() {
        let config = InversionConfig::default();
        assert!(matches!(
            solve(0.0, 300.0, &config, perfect),
            Err(InversionError::OutOfRange {
                bound: RangeBound::Min,
                ..
            })
        ));
        assert!(matches!(
            solve(1e12, 300.0, &config, perfect),
            Err(InversionError::OutOfRange {
                bound: RangeBound::Max,
                ..
            })
        ));
    }

    #[test]
    fn reports_non_convergence() {
        let config = InversionConfig {
            max_iters: 2,
            ..InversionConfig::default()
        };
        let (target, _) = stiff(800.0);
        let error = solve(target, 90_000.0, &config, stiff).unwrap_err();
        assert!(matches!(
            error,
            InversionError::NonConvergence { iters: 2, .. }
        ));
    }

    #[test]
    fn validates_config() {
        let zero_tol = InversionConfig {
            rel_tol: 0.0,
            ..InversionConfig::default()
        };
        assert!(matches!(
            zero_tol.validate(),
            Err(InversionError::InvalidConfig { .. })
        ));

        let inverted = InversionConfig {
            min_temperature: 500.0,
            max_temperature: 100.0,
            ..InversionConfig::default()
        };
        assert!(inverted.validate().is_err());

        assert!(InversionConfig::default().validate().is_ok());
    }

    #[test]
    fn single_precision_uses_its_own_epsilon() {
        let t = solve(700.0_f32 * 300.0, 250.0, &InversionConfig::default(), |t: f32| {
            (700.0 * t, 700.0)
        })
        .unwrap();
        assert_relative_eq!(t, 300.0_f32, max_relative = 1e-6);
    }
}
