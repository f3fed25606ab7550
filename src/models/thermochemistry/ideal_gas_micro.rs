//! Energy-mode decomposition anchored to a curve fit.

use crate::{
    models::chemistry::ChemicalMixture,
    support::numeric::{StateType, assert_positive_temperature},
};

use super::{CurveFitFamily, MacroThermoEvaluator, MicroThermo};

/// Infers the vibrational heat capacity as what remains of the curve-fit
/// `cp/R` after the ideal-gas `R` and the translational-rotational part are
/// removed: `cv_vib/R = cp/R − 1 − n_tr_dofs`.
///
/// Electronic excitation is not resolved and reported as zero. Monatomic
/// species report zero vibrational heat capacity without consulting the fit.
#[derive(Debug, Clone, Copy)]
pub struct IdealGasMicroThermo<'a, F> {
    macro_thermo: MacroThermoEvaluator<'a, F>,
}

impl<'a, F: CurveFitFamily> IdealGasMicroThermo<'a, F> {
    #[must_use]
    pub fn new(macro_thermo: MacroThermoEvaluator<'a, F>) -> Self {
        Self { macro_thermo }
    }

    #[must_use]
    pub fn macro_thermo(&self) -> &MacroThermoEvaluator<'a, F> {
        &self.macro_thermo
    }
}

impl<S: StateType, F: CurveFitFamily> MicroThermo<S> for IdealGasMicroThermo<'_, F> {
    fn chemical_mixture(&self) -> &ChemicalMixture {
        self.macro_thermo.chemical_mixture()
    }

    fn cv_vib_over_r(&self, species: usize, t: S) -> S {
        assert_positive_temperature(t);
        if MicroThermo::<S>::chemical_mixture(self).species(species).is_monatomic() {
            return S::zero();
        }
        let cv_over_r = self.macro_thermo.cp_over_r(species, t) - S::one();
        cv_over_r - MicroThermo::<S>::cv_tr_over_r(self, species)
    }

    fn cv_el_over_r(&self, species: usize, t: S) -> S {
        assert_positive_temperature(t);
        let _ = MicroThermo::<S>::chemical_mixture(self).species(species);
        S::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::models::{
        test_support::{N, N2, NO, O, O2, air5, nasa7_intervals, nasa9_intervals},
        thermochemistry::{CurveFitMixture, Nasa7, Nasa9},
    };

    fn assert_within_eps(actual: f64, expected: f64, eps_multiple: f64) {
        let tol = eps_multiple * f64::EPSILON;
        assert!(
            (actual - expected).abs() <= tol * expected.abs(),
            "{actual} != {expected} within {eps_multiple} eps"
        );
    }

    fn check_residual_vibration<F: CurveFitFamily>(fits: &CurveFitMixture<'_, F>) {
        let macro_thermo = MacroThermoEvaluator::new(fits);
        let micro = IdealGasMicroThermo::new(macro_thermo);
        let mixture = fits.chemical_mixture();

        for t in [501.2, 1501.2] {
            for s in [N2, O2, NO] {
                let species = mixture.species(s);
                let cv_over_r = macro_thermo.cp_over_r(s, t) - 1.0;
                let expected = (cv_over_r - species.n_tr_dofs()) * species.gas_constant();
                assert_within_eps(micro.cv_vib(s, t), expected, 50.0);
            }

            assert_eq!(micro.cv_vib(N, t), 0.0);
            assert_eq!(micro.cv_vib(O, t), 0.0);

            for s in 0..5 {
                assert_eq!(micro.cv_el(s, t), 0.0);
            }
        }
    }

    #[test]
    fn nasa7_residual_vibration() {
        let mixture = air5();
        let fits =
            CurveFitMixture::<Nasa7>::from_intervals(&mixture, (0..5).map(nasa7_intervals).collect())
                .unwrap();
        check_residual_vibration(&fits);
    }

    #[test]
    fn nasa9_residual_vibration() {
        let mixture = air5();
        let fits =
            CurveFitMixture::<Nasa9>::from_intervals(&mixture, (0..5).map(nasa9_intervals).collect())
                .unwrap();
        check_residual_vibration(&fits);
    }

    #[test]
    fn single_precision_residual_vibration() {
        let mixture = air5();
        let fits =
            CurveFitMixture::<Nasa7>::from_intervals(&mixture, (0..5).map(nasa7_intervals).collect())
                .unwrap();
        let micro = IdealGasMicroThermo::new(MacroThermoEvaluator::new(&fits));
        let t: f32 = 1501.2;

        let cv_vib: f32 = micro.cv_vib(N2, t);
        let expected: f64 = micro.cv_vib(N2, f64::from(t));
        approx::assert_relative_eq!(cv_vib, expected as f32, max_relative = 1e-4);
        assert_eq!(micro.cv_vib(N, t), 0.0_f32);
        assert_eq!(micro.cv_el(O2, t), 0.0_f32);
    }

    #[test]
    fn total_heat_capacity_recovers_the_curve_fit() {
        let mixture = air5();
        let fits =
            CurveFitMixture::<Nasa7>::from_intervals(&mixture, (0..5).map(nasa7_intervals).collect())
                .unwrap();
        let macro_thermo = MacroThermoEvaluator::new(&fits);
        let micro = IdealGasMicroThermo::new(macro_thermo);

        let t = 2200.0;
        approx::assert_relative_eq!(
            micro.cp(O2, t),
            macro_thermo.cp(O2, t),
            max_relative = 1e-12
        );
    }
}
