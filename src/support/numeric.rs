//! The numeric element type used by every property evaluation.
//!
//! Coefficient data (molar masses, curve-fit coefficients, characteristic
//! temperatures) is stored as `f64`. Evaluations are generic over a
//! [`StateType`], so the same algorithm runs in `f32`, `f64`, or any other
//! floating-point-like type that implements the trait.

use std::fmt::Debug;

use num_traits::Float;

/// A floating-point-like value that temperatures, fractions and properties are computed in.
///
/// Beyond the arithmetic of [`Float`], a state type must be able to lift a
/// stored `f64` coefficient into itself.
///
/// ```
/// use twine_thermochem::support::numeric::StateType;
///
/// let theta: f32 = StateType::from_coeff(3395.0);
/// assert_eq!(theta, 3395.0_f32);
/// ```
pub trait StateType: Float + Debug {
    /// Converts a stored coefficient into this type.
    fn from_coeff(value: f64) -> Self;

    /// Converts this value to `f64` for diagnostics and error reporting.
    fn to_report(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

impl StateType for f64 {
    fn from_coeff(value: f64) -> Self {
        value
    }
}

impl StateType for f32 {
    #[allow(clippy::cast_possible_truncation)]
    fn from_coeff(value: f64) -> Self {
        value as f32
    }
}

/// Panics unless `t` is a strictly positive temperature.
///
/// Every temperature-dependent evaluation divides by `T` or takes `ln T`.
pub(crate) fn assert_positive_temperature<S: StateType>(t: S) {
    assert!(
        t > S::zero(),
        "temperature must be strictly positive, got {t:?} K"
    );
}
