use crate::{models::thermochemistry::TempCache, support::numeric::StateType};

use super::CurveFitFamily;

/// The 7-coefficient NASA polynomial family.
///
/// ```text
/// cp/R  = a0 + a1 T + a2 T² + a3 T³ + a4 T⁴
/// h/RT  = a0 + a1 T/2 + a2 T²/3 + a3 T³/4 + a4 T⁴/5 + a5/T
/// s/R   = a0 ln T + a1 T + a2 T²/2 + a3 T³/3 + a4 T⁴/4 + a6
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nasa7;

impl CurveFitFamily for Nasa7 {
    const N_COEFFS: usize = 7;
    const NAME: &'static str = "NASA7";

    fn cp_over_r<S: StateType>(coeffs: &[f64], c: &TempCache<S>) -> S {
        let a = |i: usize| S::from_coeff(coeffs[i]);
        a(0) + a(1) * c.t + a(2) * c.t2 + a(3) * c.t3 + a(4) * c.t4
    }

    fn h_over_rt<S: StateType>(coeffs: &[f64], c: &TempCache<S>) -> S {
        let a = |i: usize| S::from_coeff(coeffs[i]);
        a(0) + a(1) * c.t / S::from_coeff(2.0)
            + a(2) * c.t2 / S::from_coeff(3.0)
            + a(3) * c.t3 / S::from_coeff(4.0)
            + a(4) * c.t4 / S::from_coeff(5.0)
            + a(5) / c.t
    }

    fn s_over_r<S: StateType>(coeffs: &[f64], c: &TempCache<S>) -> S {
        let a = |i: usize| S::from_coeff(coeffs[i]);
        a(0) * c.ln_t
            + a(1) * c.t
            + a(2) * c.t2 / S::from_coeff(2.0)
            + a(3) * c.t3 / S::from_coeff(3.0)
            + a(4) * c.t4 / S::from_coeff(4.0)
            + a(6)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn constant_heat_capacity() {
        // Monatomic gas with h(0) = 0 and s chosen at 1 K.
        let a = [2.5, 0.0, 0.0, 0.0, 0.0, 0.0, 10.0];
        let c = TempCache::new(500.0);

        assert_relative_eq!(Nasa7::cp_over_r(&a, &c), 2.5);
        assert_relative_eq!(Nasa7::h_over_rt(&a, &c), 2.5);
        assert_relative_eq!(
            Nasa7::s_over_r(&a, &c),
            2.5 * 500.0_f64.ln() + 10.0,
            max_relative = 1e-14
        );
    }

    #[test]
    fn integration_constants() {
        let a = [0.0, 0.0, 0.0, 0.0, 0.0, -1000.0, 5.0];
        let c = TempCache::new(250.0_f32);

        assert_relative_eq!(Nasa7::cp_over_r(&a, &c), 0.0);
        assert_relative_eq!(Nasa7::h_over_rt(&a, &c), -4.0);
        assert_relative_eq!(Nasa7::s_over_r(&a, &c), 5.0);
    }
}
