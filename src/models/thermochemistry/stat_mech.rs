//! Statistical-mechanics thermodynamics from molecular structure data.

mod structure;

use crate::{
    models::chemistry::ChemicalMixture,
    support::numeric::{StateType, assert_positive_temperature},
};

use super::{InversionConfig, InversionError, MicroThermo, inversion};

pub use structure::{ElectronicLevel, MolecularStructure, StructureError, VibrationalMode};

/// Rigid-rotor, harmonic-oscillator thermodynamics with a full electronic
/// partition function.
///
/// Energies are specific (J/kg) and include each species' formation energy
/// `e_0`, so that `e_tot(T) = e_tr(T) + e_vib(T) + e_el(T) + e_0`.
///
/// # Panics
///
/// Every method panics if a species index is out of range, a mass-fraction
/// slice has the wrong length, or a temperature is not strictly positive.
#[derive(Debug, Clone)]
pub struct StatMechThermodynamics<'a> {
    mixture: &'a ChemicalMixture,
    structures: Vec<MolecularStructure>,
}

impl<'a> StatMechThermodynamics<'a> {
    /// Pairs one [`MolecularStructure`] with each species of `mixture`, by index.
    ///
    /// # Errors
    ///
    /// Returns [`StructureError`] if the count does not match the species
    /// count or any structure is invalid for its species.
    pub fn new(
        mixture: &'a ChemicalMixture,
        structures: Vec<MolecularStructure>,
    ) -> Result<Self, StructureError> {
        if structures.len() != mixture.n_species() {
            return Err(StructureError::SpeciesCount {
                expected: mixture.n_species(),
                found: structures.len(),
            });
        }

        for (species, structure) in mixture.iter().zip(&structures) {
            structure.validate(species.name(), species.is_monatomic())?;
        }

        Ok(Self {
            mixture,
            structures,
        })
    }

    /// Molecular structure of species `species`.
    #[must_use]
    pub fn structure(&self, species: usize) -> &MolecularStructure {
        let _ = self.mixture.species(species);
        &self.structures[species]
    }

    /// Translational-rotational energy `cv_tr·T`, J/kg.
    pub fn e_tr<S: StateType>(&self, species: usize, t: S) -> S {
        MicroThermo::<S>::cv_tr(self, species) * t
    }

    /// Vibrational energy `R_s Σ g θ / (exp(θ/T) − 1)`, J/kg.
    pub fn e_vib<S: StateType>(&self, species: usize, t: S) -> S {
        assert_positive_temperature(t);
        let sum = self
            .structure(species)
            .vibrational_modes
            .iter()
            .fold(S::zero(), |acc, mode| {
                let theta = S::from_coeff(mode.theta);
                acc + degeneracy::<S>(mode.degeneracy) * theta / ((theta / t).exp() - S::one())
            });
        MicroThermo::<S>::gas_constant(self, species) * sum
    }

    /// Electronic energy `R_s Σ θ g exp(−θ/T) / Σ g exp(−θ/T)`, J/kg.
    pub fn e_el<S: StateType>(&self, species: usize, t: S) -> S {
        assert_positive_temperature(t);
        let sums = self.electronic_sums(species, t);
        MicroThermo::<S>::gas_constant(self, species) * sums.num / sums.denom
    }

    /// Vibrational plus electronic energy, J/kg.
    pub fn e_ve<S: StateType>(&self, species: usize, t: S) -> S {
        self.e_vib(species, t) + self.e_el(species, t)
    }

    /// Formation energy, J/kg.
    pub fn e_0<S: StateType>(&self, species: usize) -> S {
        S::from_coeff(self.mixture.species(species).formation_energy())
    }

    /// Total internal energy `e_tr + e_ve + e_0`, J/kg.
    pub fn e_tot<S: StateType>(&self, species: usize, t: S) -> S {
        self.e_tr(species, t) + self.e_ve(species, t) + self.e_0(species)
    }

    /// Total enthalpy `e_tot + R_s T`, J/kg.
    pub fn h_tot<S: StateType>(&self, species: usize, t: S) -> S {
        self.e_tot(species, t) + MicroThermo::<S>::gas_constant(self, species) * t
    }

    pub fn e_tr_mix<S: StateType>(&self, t: S, mass_fractions: &[S]) -> S {
        self.mixture.mix(mass_fractions, |s| self.e_tr(s, t))
    }

    pub fn e_vib_mix<S: StateType>(&self, t: S, mass_fractions: &[S]) -> S {
        self.mixture.mix(mass_fractions, |s| self.e_vib(s, t))
    }

    pub fn e_el_mix<S: StateType>(&self, t: S, mass_fractions: &[S]) -> S {
        self.mixture.mix(mass_fractions, |s| self.e_el(s, t))
    }

    pub fn e_ve_mix<S: StateType>(&self, t: S, mass_fractions: &[S]) -> S {
        self.mixture.mix(mass_fractions, |s| self.e_ve(s, t))
    }

    pub fn e_0_mix<S: StateType>(&self, mass_fractions: &[S]) -> S {
        self.mixture.mix(mass_fractions, |s| self.e_0(s))
    }

    pub fn e_tot_mix<S: StateType>(&self, t: S, mass_fractions: &[S]) -> S {
        self.mixture.mix(mass_fractions, |s| self.e_tot(s, t))
    }

    pub fn h_tot_mix<S: StateType>(&self, t: S, mass_fractions: &[S]) -> S {
        self.mixture.mix(mass_fractions, |s| self.h_tot(s, t))
    }

    /// Temperature at which the mixture's total energy equals `e_tot`.
    ///
    /// The formation energy is removed first and the iteration runs on the
    /// sensible part `e_tr + e_ve`, starting from `(e_tot − e_0) / cv_tr` with
    /// `cv` as the derivative. Newton steps that leave the bracket or fail to
    /// halve the previous step are replaced by bisection.
    ///
    /// # Errors
    ///
    /// Returns [`InversionError`] if the configuration is invalid, the energy
    /// is not finite at an end of the range, the target lies outside the
    /// configured temperature range, or the iteration limit is reached.
    pub fn temperature_from_e_tot<S: StateType>(
        &self,
        e_tot: S,
        mass_fractions: &[S],
        config: &InversionConfig,
    ) -> Result<S, InversionError> {
        let e_sensible = e_tot - self.e_0_mix(mass_fractions);
        let guess = e_sensible / self.cv_tr_mix(mass_fractions);
        inversion::solve(e_sensible, guess, config, |t| {
            (
                self.mixture
                    .mix(mass_fractions, |s| self.e_tr(s, t) + self.e_ve(s, t)),
                self.cv_mix(t, mass_fractions),
            )
        })
        .map_err(|err| match err {
            InversionError::OutOfRange {
                bound, temperature, ..
            } => InversionError::OutOfRange {
                target: e_tot.to_report(),
                bound,
                temperature,
            },
            other => other,
        })
    }

    /// Temperature at which the translational-rotational energy equals `e_tr`.
    ///
    /// The result is not checked for positivity.
    pub fn temperature_from_e_tr<S: StateType>(&self, e_tr: S, mass_fractions: &[S]) -> S {
        e_tr / self.cv_tr_mix(mass_fractions)
    }

    /// Vibrational-electronic temperature at which `e_ve(T) = e_ve`.
    ///
    /// # Errors
    ///
    /// Returns [`InversionError::NoEnergyCapacity`] if no species present
    /// stores vibrational or electronic energy, otherwise as
    /// [`temperature_from_e_tot`](Self::temperature_from_e_tot).
    pub fn temperature_from_e_ve<S: StateType>(
        &self,
        e_ve: S,
        mass_fractions: &[S],
        config: &InversionConfig,
    ) -> Result<S, InversionError> {
        config.validate()?;
        let t_max = S::from_coeff(config.max_temperature);
        if !(self.e_ve_mix(t_max, mass_fractions) > S::zero()) {
            return Err(InversionError::NoEnergyCapacity);
        }

        let guess = (S::from_coeff(config.min_temperature) + t_max) / S::from_coeff(2.0);
        inversion::solve(e_ve, guess, config, |t| {
            (
                self.e_ve_mix(t, mass_fractions),
                self.cv_ve_mix(t, mass_fractions),
            )
        })
    }

    /// Boltzmann sums with weights taken relative to the lowest level, so
    /// the partition function never underflows to zero.
    fn electronic_sums<S: StateType>(&self, species: usize, t: S) -> ElectronicSums<S> {
        let levels = &self.structure(species).electronic_levels;
        let theta_min = S::from_coeff(
            levels
                .iter()
                .map(|level| level.theta)
                .fold(f64::INFINITY, f64::min),
        );
        let t2 = t * t;
        levels
            .iter()
            .fold(ElectronicSums::default(), |sums, level| {
                let theta = S::from_coeff(level.theta);
                let g = degeneracy::<S>(level.degeneracy);
                let weight = g * (-(theta - theta_min) / t).exp();
                ElectronicSums {
                    num: sums.num + theta * weight,
                    denom: sums.denom + weight,
                    dnum: sums.dnum + theta * theta * weight / t2,
                    ddenom: sums.ddenom + theta * weight / t2,
                }
            })
    }
}

impl<S: StateType> MicroThermo<S> for StatMechThermodynamics<'_> {
    fn chemical_mixture(&self) -> &ChemicalMixture {
        self.mixture
    }

    fn cv_vib_over_r(&self, species: usize, t: S) -> S {
        assert_positive_temperature(t);
        let t2 = t * t;
        self.structure(species)
            .vibrational_modes
            .iter()
            .fold(S::zero(), |acc, mode| {
                let theta = S::from_coeff(mode.theta);
                let ex = (theta / t).exp();
                let em1 = ex - S::one();
                let cv = (theta * theta * ex) / (t2 * (em1 * em1));
                // exp overflow leaves inf/inf; the mode is frozen.
                let cv = if cv.is_nan() { S::zero() } else { cv };
                acc + degeneracy::<S>(mode.degeneracy) * cv
            })
    }

    fn cv_el_over_r(&self, species: usize, t: S) -> S {
        assert_positive_temperature(t);
        let sums = self.electronic_sums(species, t);
        sums.dnum / sums.denom - sums.num / (sums.denom * sums.denom) * sums.ddenom
    }
}

/// Boltzmann-weighted sums over electronic levels and their `T` derivatives.
#[derive(Debug, Clone, Copy)]
struct ElectronicSums<S> {
    num: S,
    denom: S,
    dnum: S,
    ddenom: S,
}

impl<S: StateType> Default for ElectronicSums<S> {
    fn default() -> Self {
        Self {
            num: S::zero(),
            denom: S::zero(),
            dnum: S::zero(),
            ddenom: S::zero(),
        }
    }
}

fn degeneracy<S: StateType>(g: u32) -> S {
    S::from_coeff(f64::from(g))
}
