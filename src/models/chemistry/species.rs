use super::R_UNIVERSAL;

/// Input data for one species, before it is placed in a [`ChemicalMixture`](super::ChemicalMixture).
///
/// # Example
///
/// ```
/// use twine_thermochem::models::chemistry::SpeciesDefinition;
///
/// let no = SpeciesDefinition::new("NO", 30.008e-3, 2.5).with_formation_energy(2.996_123e6);
/// assert_eq!(no.name, "NO");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesDefinition {
    pub name: String,

    /// Molar mass, kg/mol.
    pub molar_mass: f64,

    /// Translational plus rotational degrees of freedom, in units of `R`.
    ///
    /// `1.5` for atoms, `2.5` for linear molecules.
    pub n_tr_dofs: f64,

    /// Energy of formation at 0 K, J/kg.
    pub formation_energy: f64,
}

impl SpeciesDefinition {
    /// Creates a definition with zero formation energy.
    #[must_use]
    pub fn new(name: impl Into<String>, molar_mass: f64, n_tr_dofs: f64) -> Self {
        Self {
            name: name.into(),
            molar_mass,
            n_tr_dofs,
            formation_energy: 0.0,
        }
    }

    #[must_use]
    pub fn with_formation_energy(mut self, formation_energy: f64) -> Self {
        self.formation_energy = formation_energy;
        self
    }
}

/// An immutable species of a [`ChemicalMixture`](super::ChemicalMixture).
#[derive(Debug, Clone, PartialEq)]
pub struct Species {
    index: usize,
    name: String,
    molar_mass: f64,
    gas_constant: f64,
    n_tr_dofs: f64,
    formation_energy: f64,
}

impl Species {
    pub(super) fn from_definition(index: usize, definition: SpeciesDefinition) -> Self {
        Self {
            index,
            gas_constant: R_UNIVERSAL / definition.molar_mass,
            name: definition.name,
            molar_mass: definition.molar_mass,
            n_tr_dofs: definition.n_tr_dofs,
            formation_energy: definition.formation_energy,
        }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Molar mass, kg/mol.
    #[must_use]
    pub fn molar_mass(&self) -> f64 {
        self.molar_mass
    }

    /// Specific gas constant `R_u / M`, J/(kg·K).
    #[must_use]
    pub fn gas_constant(&self) -> f64 {
        self.gas_constant
    }

    #[must_use]
    pub fn n_tr_dofs(&self) -> f64 {
        self.n_tr_dofs
    }

    /// Rotational degrees of freedom, in units of `R`.
    #[must_use]
    pub fn n_rot_dofs(&self) -> f64 {
        self.n_tr_dofs - 1.5
    }

    /// Returns `true` if the species has no rotational degrees of freedom.
    #[must_use]
    pub fn is_monatomic(&self) -> bool {
        self.n_rot_dofs() <= 0.0
    }

    /// Energy of formation at 0 K, J/kg.
    #[must_use]
    pub fn formation_energy(&self) -> f64 {
        self.formation_energy
    }
}
