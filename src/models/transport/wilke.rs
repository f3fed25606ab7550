//! Wilke's semi-empirical mixing rule for viscosity.

mod mixture;

use crate::support::numeric::{StateType, assert_positive_temperature};

use super::{NoConductivity, SpeciesConductivity, SpeciesViscosity, TransportError};

pub use mixture::WilkeMixture;

/// Species-indexed working buffers for [`WilkeEvaluator::mu_with_scratch`].
///
/// Owned by the caller so repeated evaluations do not allocate.
#[derive(Debug, Clone, PartialEq)]
pub struct WilkeScratch<S> {
    mu: Vec<S>,
    chi: Vec<S>,
}

impl<S: StateType> WilkeScratch<S> {
    #[must_use]
    pub fn new(n_species: usize) -> Self {
        Self {
            mu: vec![S::zero(); n_species],
            chi: vec![S::zero(); n_species],
        }
    }

    /// Species viscosities from the last evaluation.
    #[must_use]
    pub fn mu(&self) -> &[S] {
        &self.mu
    }

    /// Mole fractions from the last evaluation.
    #[must_use]
    pub fn chi(&self) -> &[S] {
        &self.chi
    }
}

/// Mixture viscosity by Wilke's rule over a [`WilkeMixture`].
///
/// # Example
///
/// ```
/// use twine_thermochem::models::{
///     chemistry::{ChemicalMixture, SpeciesDefinition},
///     transport::{WilkeEvaluator, WilkeMixture},
/// };
///
/// let air = ChemicalMixture::new(vec![
///     SpeciesDefinition::new("N2", 28.016e-3, 2.5),
///     SpeciesDefinition::new("O2", 32.0e-3, 2.5),
/// ])
/// .unwrap();
/// let table = WilkeMixture::new(&air);
///
/// // Sutherland's law for both species.
/// let sutherland = |_species: usize, t: f64| 1.458e-6 * t.powf(1.5) / (t + 110.4);
/// let wilke = WilkeEvaluator::new(&table, &sutherland);
///
/// // A pure species keeps its own viscosity.
/// assert_eq!(wilke.mu(300.0, &[1.0, 0.0]), sutherland(0, 300.0));
///
/// let mu = wilke.mu(300.0, &[0.77, 0.23]);
/// assert!((mu / sutherland(0, 300.0) - 1.0).abs() < 1e-2);
/// assert!(wilke.k(300.0, &[0.77, 0.23]).is_err());
/// ```
#[derive(Debug)]
pub struct WilkeEvaluator<'a, V, K = NoConductivity> {
    mixture: &'a WilkeMixture<'a>,
    viscosity: &'a V,
    conductivity: Option<&'a K>,
}

impl<V, K> Clone for WilkeEvaluator<'_, V, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V, K> Copy for WilkeEvaluator<'_, V, K> {}

impl<'a, V> WilkeEvaluator<'a, V> {
    #[must_use]
    pub fn new(mixture: &'a WilkeMixture<'a>, viscosity: &'a V) -> Self {
        Self {
            mixture,
            viscosity,
            conductivity: None,
        }
    }

    /// Attaches a species conductivity model.
    #[must_use]
    pub fn with_conductivity<K>(self, conductivity: &'a K) -> WilkeEvaluator<'a, V, K> {
        WilkeEvaluator {
            mixture: self.mixture,
            viscosity: self.viscosity,
            conductivity: Some(conductivity),
        }
    }
}

impl<'a, V, K> WilkeEvaluator<'a, V, K> {
    #[must_use]
    pub fn mixture(&self) -> &'a WilkeMixture<'a> {
        self.mixture
    }

    #[must_use]
    pub fn conductivity_model(&self) -> Option<&'a K> {
        self.conductivity
    }

    /// Mixture viscosity, Pa·s.
    ///
    /// Allocates call-scoped buffers; see [`mu_with_scratch`](Self::mu_with_scratch).
    ///
    /// # Panics
    ///
    /// Panics if `mass_fractions` does not have one entry per species or `t`
    /// is not strictly positive.
    pub fn mu<S: StateType>(&self, t: S, mass_fractions: &[S]) -> S
    where
        V: SpeciesViscosity<S>,
    {
        let mut scratch = WilkeScratch::new(self.mixture.n_species());
        self.mu_with_scratch(t, mass_fractions, &mut scratch)
    }

    /// Mixture viscosity `Σ_s μ_s·χ_s/φ_s`, Pa·s, using caller-owned buffers.
    ///
    /// # Panics
    ///
    /// Panics if `mass_fractions` or the scratch buffers do not have one
    /// entry per species, or if `t` is not strictly positive.
    pub fn mu_with_scratch<S: StateType>(
        &self,
        t: S,
        mass_fractions: &[S],
        scratch: &mut WilkeScratch<S>,
    ) -> S
    where
        V: SpeciesViscosity<S>,
    {
        self.compute_mu_chi(t, mass_fractions, &mut scratch.mu, &mut scratch.chi);

        let mu = &scratch.mu;
        let chi = &scratch.chi;
        (0..mu.len()).fold(S::zero(), |acc, s| {
            let phi = self.compute_phi(mu, chi, s);
            acc + mu[s] * (chi[s] / phi)
        })
    }

    /// Fills species viscosities `mu` and mole fractions `chi`.
    ///
    /// # Panics
    ///
    /// Panics if any slice does not have one entry per species or `t` is not
    /// strictly positive.
    pub fn compute_mu_chi<S: StateType>(
        &self,
        t: S,
        mass_fractions: &[S],
        mu: &mut [S],
        chi: &mut [S],
    ) where
        V: SpeciesViscosity<S>,
    {
        assert_positive_temperature(t);
        let chemistry = self.mixture.chemical_mixture();
        chemistry.assert_len(mu);
        chemistry.assert_len(chi);

        let m_mix = chemistry.mean_molar_mass(mass_fractions);
        for (s, &y) in mass_fractions.iter().enumerate() {
            mu[s] = self.viscosity.viscosity(s, t);
            chi[s] = chemistry.mole_fraction(s, m_mix, y);
        }
    }

    /// Wilke's interaction sum
    /// `φ_s = Σ_r χ_r (1 + √(μ_s/μ_r)·(M_r/M_s)^¼)² / √(8(1 + M_s/M_r))`.
    ///
    /// # Panics
    ///
    /// Panics if `s` is out of range or the slices do not have one entry per
    /// species.
    pub fn compute_phi<S: StateType>(&self, mu: &[S], chi: &[S], s: usize) -> S {
        let chemistry = self.mixture.chemical_mixture();
        chemistry.assert_len(mu);
        chemistry.assert_len(chi);

        let one = S::one();
        (0..mu.len()).fold(S::zero(), |acc, r| {
            let mass_ratio = S::from_coeff(self.mixture.mass_ratio_term(r, s));
            let denom = S::from_coeff(self.mixture.denom(r, s));
            let numer = one + (mu[s] / mu[r]).sqrt() * mass_ratio;
            acc + chi[r] * numer * numer / denom
        })
    }

    /// Conductivity of a single species from the attached model, if any.
    pub fn species_conductivity<S: StateType>(&self, species: usize, t: S) -> Option<S>
    where
        K: SpeciesConductivity<S>,
    {
        self.conductivity
            .map(|model| model.conductivity(species, t))
    }

    /// Mixture thermal conductivity.
    ///
    /// # Errors
    ///
    /// Always returns [`TransportError::Unimplemented`]: no mixing rule for
    /// conductivity is provided.
    pub fn k<S: StateType>(&self, _t: S, _mass_fractions: &[S]) -> Result<S, TransportError> {
        Err(TransportError::Unimplemented {
            capability: "mixture thermal conductivity",
        })
    }

    /// Mixture viscosity and thermal conductivity together.
    ///
    /// # Errors
    ///
    /// Always returns [`TransportError::Unimplemented`], as [`k`](Self::k).
    pub fn mu_and_k<S: StateType>(
        &self,
        _t: S,
        _mass_fractions: &[S],
    ) -> Result<(S, S), TransportError> {
        Err(TransportError::Unimplemented {
            capability: "combined viscosity and thermal conductivity",
        })
    }
}
