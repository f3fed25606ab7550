use crate::models::chemistry::ChemicalMixture;

/// Temperature-independent pair terms of Wilke's rule.
///
/// For every ordered species pair `(r, s)`:
/// `mass_ratio_term(r, s) = (M_r/M_s)^(1/4)` and
/// `denom(r, s) = √(8(1 + M_s/M_r))`.
/// Built once per [`ChemicalMixture`] and shared by every evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct WilkeMixture<'a> {
    mixture: &'a ChemicalMixture,
    mass_ratio_term: Vec<f64>,
    denom: Vec<f64>,
}

impl<'a> WilkeMixture<'a> {
    #[must_use]
    pub fn new(mixture: &'a ChemicalMixture) -> Self {
        let n = mixture.n_species();
        let mut mass_ratio_term = Vec::with_capacity(n * n);
        let mut denom = Vec::with_capacity(n * n);

        for r in 0..n {
            let m_r = mixture.molar_mass(r);
            for s in 0..n {
                let m_s = mixture.molar_mass(s);
                mass_ratio_term.push((m_r / m_s).powf(0.25));
                denom.push((8.0 * (1.0 + m_s / m_r)).sqrt());
            }
        }

        Self {
            mixture,
            mass_ratio_term,
            denom,
        }
    }

    #[must_use]
    pub fn chemical_mixture(&self) -> &'a ChemicalMixture {
        self.mixture
    }

    #[must_use]
    pub fn n_species(&self) -> usize {
        self.mixture.n_species()
    }

    /// `(M_r/M_s)^(1/4)`.
    ///
    /// # Panics
    ///
    /// Panics if `r` or `s` is out of range.
    #[must_use]
    pub fn mass_ratio_term(&self, r: usize, s: usize) -> f64 {
        self.mass_ratio_term[self.pair(r, s)]
    }

    /// `√(8(1 + M_s/M_r))`.
    ///
    /// # Panics
    ///
    /// Panics if `r` or `s` is out of range.
    #[must_use]
    pub fn denom(&self, r: usize, s: usize) -> f64 {
        self.denom[self.pair(r, s)]
    }

    fn pair(&self, r: usize, s: usize) -> usize {
        let n = self.n_species();
        assert!(
            r < n && s < n,
            "species pair ({r}, {s}) out of range for {n} species"
        );
        r * n + s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::test_support::{N, N2, O, air5};

    #[test]
    fn pair_terms() {
        let mixture = air5();
        let table = WilkeMixture::new(&mixture);

        assert_eq!(table.mass_ratio_term(O, O), 1.0);
        assert_eq!(table.denom(O, O), 4.0);

        // N2 is exactly twice as heavy as N.
        assert_relative_eq!(table.mass_ratio_term(N2, N), 2.0_f64.powf(0.25));
        assert_relative_eq!(table.denom(N2, N), 12.0_f64.sqrt());
        assert_relative_eq!(table.denom(N, N2), 24.0_f64.sqrt());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn pair_out_of_range_panics() {
        let mixture = air5();
        let _ = WilkeMixture::new(&mixture).denom(0, 5);
    }
}
