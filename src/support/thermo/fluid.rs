//! Fluid data for gas-mixture states.
//!
//! A mixture state is only well-defined together with its composition, so the
//! `Fluid` of every mixture model is a [`Composition`] of species mass fractions.

use thiserror::Error;

use crate::support::constraint::{Constraint, ConstraintError, UnitInterval};

/// Error returned when a composition contains an invalid mass fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid mass fraction for species {species}: {source}")]
pub struct CompositionError {
    pub species: usize,
    #[source]
    pub source: ConstraintError,
}

/// Species mass fractions, ordered by species index.
///
/// Each fraction lies in `[0, 1]`. The sum is not enforced; keeping the
/// fractions consistent is the caller's responsibility, as in the property engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    mass_fractions: Vec<f64>,
}

impl Composition {
    /// Creates a composition from mass fractions.
    ///
    /// # Errors
    ///
    /// Returns [`CompositionError`] if any fraction lies outside `[0, 1]` or is `NaN`.
    pub fn new(mass_fractions: Vec<f64>) -> Result<Self, CompositionError> {
        for (species, &fraction) in mass_fractions.iter().enumerate() {
            UnitInterval::check(&fraction).map_err(|source| CompositionError { species, source })?;
        }
        Ok(Self { mass_fractions })
    }

    /// Creates a single-species composition in a mixture of `n_species`.
    ///
    /// # Panics
    ///
    /// Panics if `species >= n_species`.
    #[must_use]
    pub fn pure(species: usize, n_species: usize) -> Self {
        assert!(
            species < n_species,
            "species index {species} out of range for {n_species} species"
        );
        let mut mass_fractions = vec![0.0; n_species];
        mass_fractions[species] = 1.0;
        Self { mass_fractions }
    }

    /// Returns the mass fractions as a slice.
    #[must_use]
    pub fn mass_fractions(&self) -> &[f64] {
        &self.mass_fractions
    }

    /// Returns the number of species.
    #[must_use]
    pub fn len(&self) -> usize {
        self.mass_fractions.len()
    }

    /// Returns `true` if the composition has no species.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mass_fractions.is_empty()
    }
}
