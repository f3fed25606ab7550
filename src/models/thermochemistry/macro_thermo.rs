//! Curve-fit (macroscopic) thermodynamics of a mixture.

use tracing::debug;

use crate::{models::chemistry::ChemicalMixture, support::numeric::StateType};

use super::{CurveFitFamily, CurveFitMixture, Extrapolation, TempCache};

/// Evaluates species and mixture thermodynamics from a [`CurveFitMixture`].
///
/// Species quantities take a species index and a temperature in K; mixture
/// quantities take a temperature and mass fractions and are the
/// mass-fraction-weighted sums of the species quantities.
///
/// Temperatures outside a species' fitted range are evaluated with the
/// nearest interval and reported through a `tracing` debug event.
///
/// # Panics
///
/// Every method panics if a species index is out of range, a mass-fraction
/// slice has the wrong length, or the temperature is not strictly positive.
#[derive(Debug)]
pub struct MacroThermoEvaluator<'a, F> {
    fits: &'a CurveFitMixture<'a, F>,
}

impl<F> Clone for MacroThermoEvaluator<'_, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for MacroThermoEvaluator<'_, F> {}

impl<'a, F: CurveFitFamily> MacroThermoEvaluator<'a, F> {
    #[must_use]
    pub fn new(fits: &'a CurveFitMixture<'a, F>) -> Self {
        Self { fits }
    }

    #[must_use]
    pub fn chemical_mixture(&self) -> &'a ChemicalMixture {
        self.fits.chemical_mixture()
    }

    #[must_use]
    pub fn curve_fits(&self) -> &'a CurveFitMixture<'a, F> {
        self.fits
    }

    /// Whether evaluating species `species` at `t` extrapolates its fit.
    pub fn extrapolation<S: StateType>(&self, species: usize, t: S) -> Option<Extrapolation> {
        self.fits.fit(species).locate(t).extrapolation
    }

    pub fn cp_over_r<S: StateType>(&self, species: usize, t: S) -> S {
        self.cp_over_r_cached(species, &TempCache::new(t))
    }

    pub fn h_over_rt<S: StateType>(&self, species: usize, t: S) -> S {
        self.h_over_rt_cached(species, &TempCache::new(t))
    }

    pub fn s_over_r<S: StateType>(&self, species: usize, t: S) -> S {
        self.s_over_r_cached(species, &TempCache::new(t))
    }

    /// `h/RT − s/R`, the species term of `ln K_eq`.
    pub fn h_rt_minus_s_r<S: StateType>(&self, species: usize, t: S) -> S {
        let cache = TempCache::new(t);
        self.h_over_rt_cached(species, &cache) - self.s_over_r_cached(species, &cache)
    }

    /// Isobaric specific heat, J/(kg·K).
    pub fn cp<S: StateType>(&self, species: usize, t: S) -> S {
        self.gas_constant::<S>(species) * self.cp_over_r(species, t)
    }

    /// Isochoric specific heat `cp − R_s`, J/(kg·K).
    pub fn cv<S: StateType>(&self, species: usize, t: S) -> S {
        self.cp(species, t) - self.gas_constant::<S>(species)
    }

    /// Specific enthalpy, J/kg.
    pub fn h<S: StateType>(&self, species: usize, t: S) -> S {
        self.gas_constant::<S>(species) * t * self.h_over_rt(species, t)
    }

    /// Standard-state specific entropy, J/(kg·K).
    pub fn s<S: StateType>(&self, species: usize, t: S) -> S {
        self.gas_constant::<S>(species) * self.s_over_r(species, t)
    }

    pub fn cp_over_r_mix<S: StateType>(&self, t: S, mass_fractions: &[S]) -> S {
        let cache = TempCache::new(t);
        self.chemical_mixture()
            .mix(mass_fractions, |s| self.cp_over_r_cached(s, &cache))
    }

    pub fn h_over_rt_mix<S: StateType>(&self, t: S, mass_fractions: &[S]) -> S {
        let cache = TempCache::new(t);
        self.chemical_mixture()
            .mix(mass_fractions, |s| self.h_over_rt_cached(s, &cache))
    }

    pub fn s_over_r_mix<S: StateType>(&self, t: S, mass_fractions: &[S]) -> S {
        let cache = TempCache::new(t);
        self.chemical_mixture()
            .mix(mass_fractions, |s| self.s_over_r_cached(s, &cache))
    }

    pub fn cp_mix<S: StateType>(&self, t: S, mass_fractions: &[S]) -> S {
        let cache = TempCache::new(t);
        self.chemical_mixture().mix(mass_fractions, |s| {
            self.gas_constant::<S>(s) * self.cp_over_r_cached(s, &cache)
        })
    }

    pub fn cv_mix<S: StateType>(&self, t: S, mass_fractions: &[S]) -> S {
        self.cp_mix(t, mass_fractions) - self.chemical_mixture().mixture_gas_constant(mass_fractions)
    }

    pub fn h_mix<S: StateType>(&self, t: S, mass_fractions: &[S]) -> S {
        let cache = TempCache::new(t);
        self.chemical_mixture().mix(mass_fractions, |s| {
            self.gas_constant::<S>(s) * t * self.h_over_rt_cached(s, &cache)
        })
    }

    /// Mass-weighted standard-state entropy, without the entropy of mixing.
    pub fn s_mix<S: StateType>(&self, t: S, mass_fractions: &[S]) -> S {
        let cache = TempCache::new(t);
        self.chemical_mixture().mix(mass_fractions, |s| {
            self.gas_constant::<S>(s) * self.s_over_r_cached(s, &cache)
        })
    }

    fn gas_constant<S: StateType>(&self, species: usize) -> S {
        S::from_coeff(self.chemical_mixture().gas_constant(species))
    }

    fn coefficients<S: StateType>(&self, species: usize, t: S) -> &'a [f64] {
        let fit = self.fits.fit(species);
        let selection = fit.locate(t);
        if let Some(direction) = selection.extrapolation {
            let (t_min, t_max) = fit.domain();
            debug!(
                species = self.chemical_mixture().species(species).name(),
                temperature = t.to_report(),
                t_min,
                t_max,
                ?direction,
                "extrapolating curve fit"
            );
        }
        fit.coefficients(selection.index)
    }

    fn cp_over_r_cached<S: StateType>(&self, species: usize, cache: &TempCache<S>) -> S {
        F::cp_over_r(self.coefficients(species, cache.t), cache)
    }

    fn h_over_rt_cached<S: StateType>(&self, species: usize, cache: &TempCache<S>) -> S {
        F::h_over_rt(self.coefficients(species, cache.t), cache)
    }

    fn s_over_r_cached<S: StateType>(&self, species: usize, cache: &TempCache<S>) -> S {
        F::s_over_r(self.coefficients(species, cache.t), cache)
    }
}
