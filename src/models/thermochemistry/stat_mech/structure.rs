use thiserror::Error;

use crate::support::constraint::{Constraint, ConstraintError, NonNegative, StrictlyPositive};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum StructureError {
    #[error("expected one molecular structure per species ({expected}), got {found}")]
    SpeciesCount { expected: usize, found: usize },
    #[error("{name}: invalid characteristic vibrational temperature {theta} K ({source})")]
    VibrationalTemperature {
        name: String,
        theta: f64,
        #[source]
        source: ConstraintError,
    },
    #[error("{name}: invalid characteristic electronic temperature {theta} K ({source})")]
    ElectronicTemperature {
        name: String,
        theta: f64,
        #[source]
        source: ConstraintError,
    },
    #[error("{name}: degeneracy must be at least one")]
    ZeroDegeneracy { name: String },
    #[error("{name}: at least one electronic level is required")]
    NoElectronicLevels { name: String },
    #[error("{name}: monatomic species cannot have vibrational modes")]
    MonatomicVibration { name: String },
}

/// A harmonic vibrational mode with characteristic temperature `θ_v`, K.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VibrationalMode {
    pub theta: f64,
    pub degeneracy: u32,
}

impl VibrationalMode {
    #[must_use]
    pub fn new(theta: f64, degeneracy: u32) -> Self {
        Self { theta, degeneracy }
    }
}

/// An electronic energy level with characteristic temperature `θ_el`, K.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElectronicLevel {
    pub theta: f64,
    pub degeneracy: u32,
}

impl ElectronicLevel {
    #[must_use]
    pub fn new(theta: f64, degeneracy: u32) -> Self {
        Self { theta, degeneracy }
    }
}

/// Vibrational modes and electronic levels of one species.
///
/// Monatomic species have no vibrational modes. Every species has at least
/// one electronic level, conventionally the ground state at `θ_el = 0`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MolecularStructure {
    pub vibrational_modes: Vec<VibrationalMode>,
    pub electronic_levels: Vec<ElectronicLevel>,
}

impl MolecularStructure {
    /// Structure with only a non-degenerate electronic ground state.
    #[must_use]
    pub fn ground_state() -> Self {
        Self {
            vibrational_modes: Vec::new(),
            electronic_levels: vec![ElectronicLevel::new(0.0, 1)],
        }
    }

    #[must_use]
    pub fn with_vibrational_mode(mut self, theta: f64, degeneracy: u32) -> Self {
        self.vibrational_modes.push(VibrationalMode::new(theta, degeneracy));
        self
    }

    /// Replaces the electronic levels with `(θ_el, degeneracy)` pairs.
    #[must_use]
    pub fn with_electronic_levels(mut self, levels: &[(f64, u32)]) -> Self {
        self.electronic_levels = levels
            .iter()
            .map(|&(theta, degeneracy)| ElectronicLevel::new(theta, degeneracy))
            .collect();
        self
    }

    pub(super) fn validate(&self, name: &str, monatomic: bool) -> Result<(), StructureError> {
        if monatomic && !self.vibrational_modes.is_empty() {
            return Err(StructureError::MonatomicVibration { name: name.into() });
        }

        if self.electronic_levels.is_empty() {
            return Err(StructureError::NoElectronicLevels { name: name.into() });
        }

        for mode in &self.vibrational_modes {
            StrictlyPositive::check(&mode.theta).map_err(|source| {
                StructureError::VibrationalTemperature {
                    name: name.into(),
                    theta: mode.theta,
                    source,
                }
            })?;
        }

        for level in &self.electronic_levels {
            NonNegative::check(&level.theta).map_err(|source| {
                StructureError::ElectronicTemperature {
                    name: name.into(),
                    theta: level.theta,
                    source,
                }
            })?;
            if !level.theta.is_finite() {
                return Err(StructureError::ElectronicTemperature {
                    name: name.into(),
                    theta: level.theta,
                    source: ConstraintError::AboveMaximum,
                });
            }
        }

        let zero_degeneracy = self
            .vibrational_modes
            .iter()
            .map(|mode| mode.degeneracy)
            .chain(self.electronic_levels.iter().map(|level| level.degeneracy))
            .any(|g| g == 0);
        if zero_degeneracy {
            return Err(StructureError::ZeroDegeneracy { name: name.into() });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_diatomic() {
        let n2 = MolecularStructure::ground_state()
            .with_vibrational_mode(3395.0, 1)
            .with_electronic_levels(&[(0.0, 1), (7.223_16e4, 3)]);
        assert_eq!(n2.validate("N2", false), Ok(()));
    }

    #[test]
    fn rejects_invalid_data() {
        let atom_with_mode = MolecularStructure::ground_state().with_vibrational_mode(1000.0, 1);
        assert!(matches!(
            atom_with_mode.validate("N", true),
            Err(StructureError::MonatomicVibration { .. })
        ));

        let no_levels = MolecularStructure::default();
        assert!(matches!(
            no_levels.validate("N", true),
            Err(StructureError::NoElectronicLevels { .. })
        ));

        let bad_theta = MolecularStructure::ground_state().with_vibrational_mode(0.0, 1);
        assert!(matches!(
            bad_theta.validate("N2", false),
            Err(StructureError::VibrationalTemperature {
                source: ConstraintError::Zero,
                ..
            })
        ));

        let negative_level = MolecularStructure::ground_state().with_electronic_levels(&[(-1.0, 1)]);
        assert!(matches!(
            negative_level.validate("O", true),
            Err(StructureError::ElectronicTemperature { .. })
        ));

        let degenerate = MolecularStructure::ground_state().with_electronic_levels(&[(0.0, 0)]);
        assert!(matches!(
            degenerate.validate("O", true),
            Err(StructureError::ZeroDegeneracy { .. })
        ));
    }
}
