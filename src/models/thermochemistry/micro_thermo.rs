//! Decomposition of the heat capacity into energy modes.

use crate::{models::chemistry::ChemicalMixture, support::numeric::StateType};

/// Heat capacity split into translational, rotational, vibrational and
/// electronic contributions.
///
/// Implementors supply the temperature-dependent vibrational and electronic
/// parts. The translational and rotational parts follow from the species'
/// degrees of freedom alone and are provided, along with every dimensional
/// and mixture form.
///
/// Mixture forms (`*_mix`) are `Σ_s Y_s·q(s)` over the mass fractions `Y`.
///
/// # Panics
///
/// Every method panics if a species index is out of range, a mass-fraction
/// slice has the wrong length, or a temperature is not strictly positive.
pub trait MicroThermo<S: StateType> {
    fn chemical_mixture(&self) -> &ChemicalMixture;

    fn cv_vib_over_r(&self, species: usize, t: S) -> S;

    fn cv_el_over_r(&self, species: usize, t: S) -> S;

    /// Specific gas constant of `species`, J/(kg·K).
    fn gas_constant(&self, species: usize) -> S {
        S::from_coeff(self.chemical_mixture().gas_constant(species))
    }

    fn cv_trans_over_r(&self, species: usize) -> S {
        let _ = self.chemical_mixture().species(species);
        S::from_coeff(1.5)
    }

    fn cv_tr_over_r(&self, species: usize) -> S {
        S::from_coeff(self.chemical_mixture().species(species).n_tr_dofs())
    }

    fn cv_rot_over_r(&self, species: usize) -> S {
        self.cv_tr_over_r(species) - self.cv_trans_over_r(species)
    }

    fn cv_trans(&self, species: usize) -> S {
        self.gas_constant(species) * self.cv_trans_over_r(species)
    }

    fn cv_tr(&self, species: usize) -> S {
        self.gas_constant(species) * self.cv_tr_over_r(species)
    }

    fn cv_rot(&self, species: usize) -> S {
        self.gas_constant(species) * self.cv_rot_over_r(species)
    }

    fn cv_vib(&self, species: usize, t: S) -> S {
        self.gas_constant(species) * self.cv_vib_over_r(species, t)
    }

    fn cv_el(&self, species: usize, t: S) -> S {
        self.gas_constant(species) * self.cv_el_over_r(species, t)
    }

    /// Vibrational plus electronic heat capacity.
    fn cv_ve(&self, species: usize, t: S) -> S {
        self.cv_vib(species, t) + self.cv_el(species, t)
    }

    fn cv(&self, species: usize, t: S) -> S {
        self.cv_tr(species) + self.cv_ve(species, t)
    }

    fn cp(&self, species: usize, t: S) -> S {
        self.cv(species, t) + self.gas_constant(species)
    }

    fn cv_trans_mix(&self, mass_fractions: &[S]) -> S {
        self.chemical_mixture()
            .mix(mass_fractions, |s| self.cv_trans(s))
    }

    fn cv_tr_mix(&self, mass_fractions: &[S]) -> S {
        self.chemical_mixture().mix(mass_fractions, |s| self.cv_tr(s))
    }

    fn cv_rot_mix(&self, mass_fractions: &[S]) -> S {
        self.chemical_mixture().mix(mass_fractions, |s| self.cv_rot(s))
    }

    fn cv_vib_mix(&self, t: S, mass_fractions: &[S]) -> S {
        self.chemical_mixture()
            .mix(mass_fractions, |s| self.cv_vib(s, t))
    }

    fn cv_el_mix(&self, t: S, mass_fractions: &[S]) -> S {
        self.chemical_mixture()
            .mix(mass_fractions, |s| self.cv_el(s, t))
    }

    fn cv_ve_mix(&self, t: S, mass_fractions: &[S]) -> S {
        self.chemical_mixture()
            .mix(mass_fractions, |s| self.cv_ve(s, t))
    }

    fn cv_mix(&self, t: S, mass_fractions: &[S]) -> S {
        self.chemical_mixture().mix(mass_fractions, |s| self.cv(s, t))
    }

    fn cp_mix(&self, t: S, mass_fractions: &[S]) -> S {
        self.chemical_mixture().mix(mass_fractions, |s| self.cp(s, t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use proptest::prelude::*;

    use crate::models::{
        chemistry::SpeciesDefinition,
        test_support::{N2, O, air5},
    };

    /// A frozen gas: no vibrational or electronic excitation.
    struct Frozen(ChemicalMixture);

    impl<S: StateType> MicroThermo<S> for Frozen {
        fn chemical_mixture(&self) -> &ChemicalMixture {
            &self.0
        }

        fn cv_vib_over_r(&self, _species: usize, _t: S) -> S {
            S::zero()
        }

        fn cv_el_over_r(&self, _species: usize, _t: S) -> S {
            S::zero()
        }
    }

    #[test]
    fn structure_only_contributions() {
        let frozen = Frozen(air5());
        let r = frozen.0.gas_constant(N2);

        let cv_trans: f64 = frozen.cv_trans(N2);
        let cv_rot: f64 = frozen.cv_rot(N2);
        assert_relative_eq!(cv_trans, 1.5 * r);
        assert_relative_eq!(cv_rot, r, max_relative = 1e-15);

        let cv_rot_atom: f64 = frozen.cv_rot(O);
        assert_eq!(cv_rot_atom, 0.0);

        assert_relative_eq!(frozen.cp(N2, 500.0_f64), 3.5 * r, max_relative = 1e-15);
    }

    #[test]
    fn single_precision() {
        let frozen = Frozen(
            ChemicalMixture::new(vec![SpeciesDefinition::new("Ar", 39.948e-3, 1.5)]).unwrap(),
        );
        let cv: f32 = frozen.cv_mix(300.0, &[1.0]);
        assert_relative_eq!(cv, 1.5 * 8.314_462 / 39.948e-3, max_relative = 1e-6);
    }

    proptest! {
        #[test]
        fn heat_capacity_ratio_bounds(
            weights in proptest::collection::vec(0.0..1.0_f64, 5),
        ) {
            let total: f64 = weights.iter().sum();
            prop_assume!(total > 1e-6);
            let y: Vec<f64> = weights.iter().map(|w| w / total).collect();

            let frozen = Frozen(air5());
            let gamma = frozen.cp_mix(1000.0, &y) / frozen.cv_mix(1000.0, &y);
            prop_assert!(gamma >= 1.4 - 1e-12 && gamma <= 5.0 / 3.0 + 1e-12);
        }
    }
}
