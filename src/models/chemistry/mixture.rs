use std::collections::HashMap;

use thiserror::Error;

use crate::support::{
    constraint::{Constraint, ConstraintError, StrictlyPositive},
    numeric::StateType,
};

use super::{Species, SpeciesDefinition};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum MixtureError {
    #[error("a chemical mixture needs at least one species")]
    Empty,
    #[error("duplicate species name: {name}")]
    DuplicateSpecies { name: String },
    #[error("invalid molar mass for {name}: {molar_mass} ({source})")]
    MolarMass {
        name: String,
        molar_mass: f64,
        #[source]
        source: ConstraintError,
    },
    #[error("invalid translational/rotational degrees of freedom for {name}: {n_tr_dofs} (must be >= 1.5)")]
    TrDofs { name: String, n_tr_dofs: f64 },
    #[error("non-finite formation energy for {name}: {formation_energy}")]
    FormationEnergy { name: String, formation_energy: f64 },
}

/// An ordered, non-empty set of unique species.
///
/// Mass-fraction slices passed to any operation are indexed like the species
/// and must have exactly [`n_species`](Self::n_species) entries; a length
/// mismatch is a programming error and panics.
///
/// # Example
///
/// ```
/// use twine_thermochem::models::chemistry::{ChemicalMixture, SpeciesDefinition};
///
/// let air = ChemicalMixture::new(vec![
///     SpeciesDefinition::new("N2", 28.016e-3, 2.5),
///     SpeciesDefinition::new("O2", 32.0e-3, 2.5),
/// ])
/// .unwrap();
///
/// assert_eq!(air.species_index("O2"), Some(1));
/// let m_mix: f64 = air.mean_molar_mass(&[0.77, 0.23]);
/// assert!(m_mix > 28.016e-3 && m_mix < 32.0e-3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ChemicalMixture {
    species: Vec<Species>,
    by_name: HashMap<String, usize>,
}

impl ChemicalMixture {
    /// Creates a mixture, assigning species indices in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`MixtureError`] if the list is empty, a name repeats, a molar
    /// mass is not strictly positive, `n_tr_dofs < 1.5`, or a formation energy
    /// is not finite.
    pub fn new(definitions: Vec<SpeciesDefinition>) -> Result<Self, MixtureError> {
        if definitions.is_empty() {
            return Err(MixtureError::Empty);
        }

        let mut species = Vec::with_capacity(definitions.len());
        let mut by_name = HashMap::with_capacity(definitions.len());

        for (index, definition) in definitions.into_iter().enumerate() {
            if let Err(source) = StrictlyPositive::check(&definition.molar_mass) {
                return Err(MixtureError::MolarMass {
                    name: definition.name,
                    molar_mass: definition.molar_mass,
                    source,
                });
            }

            // NaN fails the comparison as well.
            if !(definition.n_tr_dofs >= 1.5) || !definition.n_tr_dofs.is_finite() {
                return Err(MixtureError::TrDofs {
                    name: definition.name,
                    n_tr_dofs: definition.n_tr_dofs,
                });
            }

            if !definition.formation_energy.is_finite() {
                return Err(MixtureError::FormationEnergy {
                    name: definition.name,
                    formation_energy: definition.formation_energy,
                });
            }

            if by_name.insert(definition.name.clone(), index).is_some() {
                return Err(MixtureError::DuplicateSpecies {
                    name: definition.name,
                });
            }

            species.push(Species::from_definition(index, definition));
        }

        Ok(Self { species, by_name })
    }

    #[must_use]
    pub fn n_species(&self) -> usize {
        self.species.len()
    }

    /// Returns the species at index `s`.
    ///
    /// # Panics
    ///
    /// Panics if `s` is out of range.
    #[must_use]
    pub fn species(&self, s: usize) -> &Species {
        assert!(
            s < self.species.len(),
            "species index {s} out of range for {} species",
            self.species.len()
        );
        &self.species[s]
    }

    /// Iterates over the species in index order.
    pub fn iter(&self) -> impl Iterator<Item = &Species> {
        self.species.iter()
    }

    #[must_use]
    pub fn species_index(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    /// Molar mass of species `s`, kg/mol.
    ///
    /// # Panics
    ///
    /// Panics if `s` is out of range.
    #[must_use]
    pub fn molar_mass(&self, s: usize) -> f64 {
        self.species(s).molar_mass()
    }

    /// Specific gas constant of species `s`, J/(kg·K).
    ///
    /// # Panics
    ///
    /// Panics if `s` is out of range.
    #[must_use]
    pub fn gas_constant(&self, s: usize) -> f64 {
        self.species(s).gas_constant()
    }

    /// Mass-fraction-weighted sum `Σ_s Y_s·f(s)`.
    ///
    /// Every mixture-level quantity in this crate is formed this way.
    ///
    /// # Panics
    ///
    /// Panics if `mass_fractions.len() != n_species()`.
    pub fn mix<S: StateType>(&self, mass_fractions: &[S], mut f: impl FnMut(usize) -> S) -> S {
        self.assert_len(mass_fractions);
        mass_fractions
            .iter()
            .enumerate()
            .fold(S::zero(), |acc, (s, &y)| acc + y * f(s))
    }

    /// Mean molar mass `1 / Σ_s (Y_s / M_s)`, kg/mol.
    ///
    /// # Panics
    ///
    /// Panics if `mass_fractions.len() != n_species()`.
    pub fn mean_molar_mass<S: StateType>(&self, mass_fractions: &[S]) -> S {
        self.assert_len(mass_fractions);
        let inverse = self
            .species
            .iter()
            .zip(mass_fractions)
            .fold(S::zero(), |acc, (species, &y)| {
                acc + y / S::from_coeff(species.molar_mass())
            });
        inverse.recip()
    }

    /// Mixture gas constant `Σ_s Y_s·R_s`, J/(kg·K).
    ///
    /// # Panics
    ///
    /// Panics if `mass_fractions.len() != n_species()`.
    pub fn mixture_gas_constant<S: StateType>(&self, mass_fractions: &[S]) -> S {
        self.mix(mass_fractions, |s| S::from_coeff(self.gas_constant(s)))
    }

    /// Mole fraction `Y_s·M_mix / M_s` of species `s`.
    ///
    /// # Panics
    ///
    /// Panics if `s` is out of range.
    pub fn mole_fraction<S: StateType>(&self, s: usize, mean_molar_mass: S, mass_fraction: S) -> S {
        mass_fraction * mean_molar_mass / S::from_coeff(self.molar_mass(s))
    }

    /// Converts mass fractions to mole fractions.
    ///
    /// # Panics
    ///
    /// Panics if `mass_fractions.len() != n_species()`.
    pub fn mole_fractions<S: StateType>(&self, mass_fractions: &[S]) -> Vec<S> {
        let m_mix = self.mean_molar_mass(mass_fractions);
        mass_fractions
            .iter()
            .enumerate()
            .map(|(s, &y)| self.mole_fraction(s, m_mix, y))
            .collect()
    }

    /// Converts mole fractions to mass fractions, `Y_s = X_s·M_s / Σ_r X_r·M_r`.
    ///
    /// # Panics
    ///
    /// Panics if `mole_fractions.len() != n_species()`.
    pub fn mass_fractions_from_mole_fractions<S: StateType>(&self, mole_fractions: &[S]) -> Vec<S> {
        self.assert_len(mole_fractions);
        let weighted: Vec<S> = self
            .species
            .iter()
            .zip(mole_fractions)
            .map(|(species, &x)| x * S::from_coeff(species.molar_mass()))
            .collect();
        let total = weighted.iter().fold(S::zero(), |acc, &w| acc + w);
        weighted.into_iter().map(|w| w / total).collect()
    }

    pub(crate) fn assert_len<S>(&self, values: &[S]) {
        assert_eq!(
            values.len(),
            self.species.len(),
            "expected one value per species"
        );
    }
}
