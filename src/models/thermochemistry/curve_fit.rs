//! Piecewise-polynomial thermodynamic curve fits.
//!
//! A species' [`CurveFit`] is an ordered list of [`FitInterval`]s, each with a
//! fixed-length coefficient vector. The polynomial form is supplied by a
//! [`CurveFitFamily`]: [`Nasa7`] or [`Nasa9`].

mod nasa7;
mod nasa9;

use std::marker::PhantomData;

use thiserror::Error;

use crate::support::{
    constraint::{Constraint, StrictlyPositive},
    numeric::StateType,
};

use super::TempCache;

pub use nasa7::Nasa7;
pub use nasa9::Nasa9;

/// A polynomial form for dimensionless `cp/R`, `h/RT` and `s/R`.
///
/// Implementations must keep the three functions mutually consistent:
/// `d(h/RT · T)/dT = cp/R` and `d(s/R)/dT = cp/(R·T)`.
pub trait CurveFitFamily {
    /// Number of coefficients per temperature interval.
    const N_COEFFS: usize;

    /// Human-readable family name, used in error messages.
    const NAME: &'static str;

    fn cp_over_r<S: StateType>(a: &[f64], cache: &TempCache<S>) -> S;

    fn h_over_rt<S: StateType>(a: &[f64], cache: &TempCache<S>) -> S;

    fn s_over_r<S: StateType>(a: &[f64], cache: &TempCache<S>) -> S;
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CurveFitError {
    #[error("a curve fit needs at least one temperature interval")]
    Empty,
    #[error("interval {interval}: {family} fits need {expected} coefficients, got {found}")]
    CoefficientCount {
        interval: usize,
        family: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("interval {interval}: invalid bounds [{t_low}, {t_high}) K")]
    Bounds {
        interval: usize,
        t_low: f64,
        t_high: f64,
    },
    #[error("interval {interval} starts at {t_low} K, before the previous interval ends at {previous_t_high} K")]
    Overlap {
        interval: usize,
        t_low: f64,
        previous_t_high: f64,
    },
    #[error("interval {interval}: coefficient {coefficient} is not finite")]
    NonFiniteCoefficient { interval: usize, coefficient: usize },
}

/// One temperature interval `[t_low, t_high)` of a curve fit.
#[derive(Debug, Clone, PartialEq)]
pub struct FitInterval {
    pub t_low: f64,
    pub t_high: f64,
    pub coefficients: Vec<f64>,
}

impl FitInterval {
    #[must_use]
    pub fn new(t_low: f64, t_high: f64, coefficients: Vec<f64>) -> Self {
        Self {
            t_low,
            t_high,
            coefficients,
        }
    }
}

/// Direction in which a temperature falls outside a fitted interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extrapolation {
    Below,
    Above,
}

/// The interval a temperature evaluates in, and whether that is an extrapolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalSelection {
    pub index: usize,
    pub extrapolation: Option<Extrapolation>,
}

/// The curve fit of one species.
///
/// # Example
///
/// ```
/// use twine_thermochem::models::thermochemistry::{
///     CurveFit, Extrapolation, FitInterval, Nasa7,
/// };
///
/// // A monatomic gas: cp/R = 5/2 everywhere.
/// let flat = vec![2.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
/// let fit = CurveFit::<Nasa7>::new(vec![
///     FitInterval::new(200.0, 1000.0, flat.clone()),
///     FitInterval::new(1000.0, 6000.0, flat),
/// ])
/// .unwrap();
///
/// assert_eq!(fit.locate(999.9).index, 0);
/// assert_eq!(fit.locate(1000.0).index, 1);
/// assert_eq!(fit.locate(7000.0).extrapolation, Some(Extrapolation::Above));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CurveFit<F> {
    intervals: Vec<FitInterval>,
    _family: PhantomData<F>,
}

impl<F: CurveFitFamily> CurveFit<F> {
    /// Creates a curve fit from intervals sorted by temperature.
    ///
    /// Gaps between intervals are allowed; overlaps are not.
    ///
    /// # Errors
    ///
    /// Returns [`CurveFitError`] if the list is empty, any interval has the
    /// wrong number of coefficients or a non-finite coefficient, any interval
    /// has `t_low <= 0` or `t_low >= t_high`, or the intervals are unsorted or
    /// overlapping.
    pub fn new(intervals: Vec<FitInterval>) -> Result<Self, CurveFitError> {
        if intervals.is_empty() {
            return Err(CurveFitError::Empty);
        }

        for (interval, fit) in intervals.iter().enumerate() {
            if fit.coefficients.len() != F::N_COEFFS {
                return Err(CurveFitError::CoefficientCount {
                    interval,
                    family: F::NAME,
                    expected: F::N_COEFFS,
                    found: fit.coefficients.len(),
                });
            }

            if let Some(coefficient) = fit.coefficients.iter().position(|a| !a.is_finite()) {
                return Err(CurveFitError::NonFiniteCoefficient {
                    interval,
                    coefficient,
                });
            }

            let positive = StrictlyPositive::check(&fit.t_low).is_ok();
            if !positive || !(fit.t_low < fit.t_high) {
                return Err(CurveFitError::Bounds {
                    interval,
                    t_low: fit.t_low,
                    t_high: fit.t_high,
                });
            }
        }

        for (interval, pair) in intervals.windows(2).enumerate() {
            if pair[1].t_low < pair[0].t_high {
                return Err(CurveFitError::Overlap {
                    interval: interval + 1,
                    t_low: pair[1].t_low,
                    previous_t_high: pair[0].t_high,
                });
            }
        }

        Ok(Self {
            intervals,
            _family: PhantomData,
        })
    }

    #[must_use]
    pub fn intervals(&self) -> &[FitInterval] {
        &self.intervals
    }

    /// Lowest and highest fitted temperatures, K.
    #[must_use]
    pub fn domain(&self) -> (f64, f64) {
        let first = &self.intervals[0];
        let last = &self.intervals[self.intervals.len() - 1];
        (first.t_low, last.t_high)
    }

    /// Selects the interval `t` evaluates in.
    ///
    /// The interval containing `t` (`t_low <= t < t_high`) is chosen when one
    /// exists. Otherwise the nearest interval above `t` is used, or the last
    /// interval when `t` is at or beyond the end of the fitted domain, and the
    /// selection is flagged as an extrapolation.
    pub fn locate<S: StateType>(&self, t: S) -> IntervalSelection {
        let last = self.intervals.len() - 1;
        match self
            .intervals
            .iter()
            .position(|fit| t < S::from_coeff(fit.t_high))
        {
            Some(index) => IntervalSelection {
                index,
                extrapolation: (t < S::from_coeff(self.intervals[index].t_low))
                    .then_some(Extrapolation::Below),
            },
            None => IntervalSelection {
                index: last,
                extrapolation: Some(Extrapolation::Above),
            },
        }
    }

    /// Coefficients of interval `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[must_use]
    pub fn coefficients(&self, index: usize) -> &[f64] {
        &self.intervals[index].coefficients
    }

    /// Dimensionless `cp/R`.
    pub fn cp_over_r<S: StateType>(&self, cache: &TempCache<S>) -> S {
        F::cp_over_r(self.coefficients(self.locate(cache.t).index), cache)
    }

    /// Dimensionless `h/(R·T)`.
    pub fn h_over_rt<S: StateType>(&self, cache: &TempCache<S>) -> S {
        F::h_over_rt(self.coefficients(self.locate(cache.t).index), cache)
    }

    /// Dimensionless `s/R` at the reference pressure of the fit.
    pub fn s_over_r<S: StateType>(&self, cache: &TempCache<S>) -> S {
        F::s_over_r(self.coefficients(self.locate(cache.t).index), cache)
    }
}
