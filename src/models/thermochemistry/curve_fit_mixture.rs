use thiserror::Error;

use crate::models::chemistry::ChemicalMixture;

use super::{CurveFit, CurveFitError, CurveFitFamily, FitInterval};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CurveFitMixtureError {
    #[error("expected one curve fit per species ({expected}), got {found}")]
    SpeciesCount { expected: usize, found: usize },
    #[error("invalid curve fit for {name}: {source}")]
    Species {
        name: String,
        #[source]
        source: CurveFitError,
    },
}

/// One [`CurveFit`] per species of a [`ChemicalMixture`].
#[derive(Debug, Clone)]
pub struct CurveFitMixture<'a, F> {
    mixture: &'a ChemicalMixture,
    fits: Vec<CurveFit<F>>,
}

impl<'a, F: CurveFitFamily> CurveFitMixture<'a, F> {
    /// Pairs already-validated curve fits with the species of `mixture`, by index.
    ///
    /// # Errors
    ///
    /// Returns [`CurveFitMixtureError::SpeciesCount`] if the number of fits
    /// differs from the number of species.
    pub fn new(
        mixture: &'a ChemicalMixture,
        fits: Vec<CurveFit<F>>,
    ) -> Result<Self, CurveFitMixtureError> {
        if fits.len() != mixture.n_species() {
            return Err(CurveFitMixtureError::SpeciesCount {
                expected: mixture.n_species(),
                found: fits.len(),
            });
        }
        Ok(Self { mixture, fits })
    }

    /// Builds and validates every species' curve fit from raw intervals.
    ///
    /// # Errors
    ///
    /// Returns [`CurveFitMixtureError::Species`], naming the species, if any
    /// interval list is rejected by [`CurveFit::new`], or
    /// [`CurveFitMixtureError::SpeciesCount`] on a count mismatch.
    pub fn from_intervals(
        mixture: &'a ChemicalMixture,
        intervals: Vec<Vec<FitInterval>>,
    ) -> Result<Self, CurveFitMixtureError> {
        if intervals.len() != mixture.n_species() {
            return Err(CurveFitMixtureError::SpeciesCount {
                expected: mixture.n_species(),
                found: intervals.len(),
            });
        }

        let fits = intervals
            .into_iter()
            .zip(mixture.iter())
            .map(|(species_intervals, species)| {
                CurveFit::new(species_intervals).map_err(|source| CurveFitMixtureError::Species {
                    name: species.name().to_owned(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { mixture, fits })
    }

    #[must_use]
    pub fn chemical_mixture(&self) -> &'a ChemicalMixture {
        self.mixture
    }

    /// Curve fit of species `s`.
    ///
    /// # Panics
    ///
    /// Panics if `s` is out of range.
    #[must_use]
    pub fn fit(&self, s: usize) -> &CurveFit<F> {
        assert!(
            s < self.fits.len(),
            "species index {s} out of range for {} species",
            self.fits.len()
        );
        &self.fits[s]
    }

    /// Temperature range covered by at least one species' fit, K.
    #[must_use]
    pub fn domain(&self) -> (f64, f64) {
        self.fits
            .iter()
            .map(CurveFit::domain)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (t_low, t_high)| {
                (lo.min(t_low), hi.max(t_high))
            })
    }
}
