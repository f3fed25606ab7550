//! Construction-time numeric invariants for species and model data.
//!
//! Molar masses, characteristic temperatures, degeneracies and solver
//! tolerances all carry simple sign or range requirements. The marker types
//! in this module check those requirements once, when data enters a model,
//! so evaluation code never has to re-check them.
//!
//! # Provided constraints
//!
//! - [`StrictlyPositive`]: Greater than zero (molar masses, `θ_v`, tolerances)
//! - [`NonNegative`]: Zero or greater (`θ_el`, formation energies of reference species)
//! - [`UnitInterval`]: Closed unit interval `0 ≤ x ≤ 1` (mass and mole fractions)
//!
//! Each marker implements [`Constraint<T>`]; call `check` where the value
//! is accepted and map the [`ConstraintError`] into the caller's error.

use std::cmp::Ordering;

use num_traits::{One, Zero};
use thiserror::Error;

/// A trait for enforcing numeric invariants at construction time.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}

/// Marker type enforcing that a value is strictly positive.
///
/// ```
/// use twine_thermochem::support::constraint::{Constraint, StrictlyPositive};
///
/// assert!(StrictlyPositive::check(&3395.0).is_ok());
/// assert!(StrictlyPositive::check(&0.0).is_err());
/// assert!(StrictlyPositive::check(&f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

/// Marker type enforcing that a value is zero or greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

/// Marker type enforcing that a value lies in the closed unit interval `0 ≤ x ≤ 1`.
///
/// ```
/// use twine_thermochem::support::constraint::{Constraint, UnitInterval};
///
/// assert!(UnitInterval::check(&0.5).is_ok());
/// assert!(UnitInterval::check(&1.0).is_ok());
/// assert!(UnitInterval::check(&1.0001).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitInterval;

impl<T: PartialOrd + Zero + One> Constraint<T> for UnitInterval {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match (value.partial_cmp(&T::zero()), value.partial_cmp(&T::one())) {
            (None, _) | (_, None) => Err(ConstraintError::NotANumber),
            (Some(Ordering::Less), _) => Err(ConstraintError::BelowMinimum),
            (_, Some(Ordering::Greater)) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}
