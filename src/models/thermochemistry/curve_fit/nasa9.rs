use crate::{models::thermochemistry::TempCache, support::numeric::StateType};

use super::CurveFitFamily;

/// The 9-coefficient NASA Glenn (CEA) polynomial family.
///
/// ```text
/// cp/R  = a0/T² + a1/T + a2 + a3 T + a4 T² + a5 T³ + a6 T⁴
/// h/RT  = -a0/T² + a1 ln T/T + a2 + a3 T/2 + a4 T²/3 + a5 T³/4 + a6 T⁴/5 + a7/T
/// s/R   = -a0/(2T²) - a1/T + a2 ln T + a3 T + a4 T²/2 + a5 T³/3 + a6 T⁴/4 + a8
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nasa9;

impl CurveFitFamily for Nasa9 {
    const N_COEFFS: usize = 9;
    const NAME: &'static str = "NASA9";

    fn cp_over_r<S: StateType>(coeffs: &[f64], c: &TempCache<S>) -> S {
        let a = |i: usize| S::from_coeff(coeffs[i]);
        a(0) / c.t2 + a(1) / c.t + a(2) + a(3) * c.t + a(4) * c.t2 + a(5) * c.t3 + a(6) * c.t4
    }

    fn h_over_rt<S: StateType>(coeffs: &[f64], c: &TempCache<S>) -> S {
        let a = |i: usize| S::from_coeff(coeffs[i]);
        -a(0) / c.t2
            + a(1) * c.ln_t / c.t
            + a(2)
            + a(3) * c.t / S::from_coeff(2.0)
            + a(4) * c.t2 / S::from_coeff(3.0)
            + a(5) * c.t3 / S::from_coeff(4.0)
            + a(6) * c.t4 / S::from_coeff(5.0)
            + a(7) / c.t
    }

    fn s_over_r<S: StateType>(coeffs: &[f64], c: &TempCache<S>) -> S {
        let a = |i: usize| S::from_coeff(coeffs[i]);
        -a(0) / (S::from_coeff(2.0) * c.t2) - a(1) / c.t
            + a(2) * c.ln_t
            + a(3) * c.t
            + a(4) * c.t2 / S::from_coeff(2.0)
            + a(5) * c.t3 / S::from_coeff(3.0)
            + a(6) * c.t4 / S::from_coeff(4.0)
            + a(8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn reduces_to_constant_heat_capacity() {
        let a = [0.0, 0.0, 2.5, 0.0, 0.0, 0.0, 0.0, 0.0, 10.0];
        let c = TempCache::new(800.0);

        assert_relative_eq!(Nasa9::cp_over_r(&a, &c), 2.5);
        assert_relative_eq!(Nasa9::h_over_rt(&a, &c), 2.5);
        assert_relative_eq!(
            Nasa9::s_over_r(&a, &c),
            2.5 * 800.0_f64.ln() + 10.0,
            max_relative = 1e-14
        );
    }

    #[test]
    fn inverse_power_terms() {
        let t: f64 = 400.0;
        let a = [1.0e5, -200.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
        let c = TempCache::new(t);

        assert_relative_eq!(
            Nasa9::cp_over_r(&a, &c),
            1.0e5 / (t * t) - 200.0 / t,
            max_relative = 1e-14
        );
        assert_relative_eq!(
            Nasa9::h_over_rt(&a, &c),
            -1.0e5 / (t * t) - 200.0 * t.ln() / t,
            max_relative = 1e-14
        );
        assert_relative_eq!(
            Nasa9::s_over_r(&a, &c),
            -1.0e5 / (2.0 * t * t) + 200.0 / t,
            max_relative = 1e-14
        );
    }
}
