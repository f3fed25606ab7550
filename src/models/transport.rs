//! Mixture transport properties from species-level models.
//!
//! Species viscosity and conductivity models (Sutherland, Blottner, kinetic
//! theory, ...) are supplied by the caller through [`SpeciesViscosity`] and
//! [`SpeciesConductivity`]. Any `Fn(usize, S) -> S` closure qualifies.

pub mod wilke;

use thiserror::Error;

pub use wilke::{WilkeEvaluator, WilkeMixture, WilkeScratch};

/// Viscosity `μ_s(T)` of a single species, Pa·s.
pub trait SpeciesViscosity<S> {
    fn viscosity(&self, species: usize, t: S) -> S;
}

impl<S, F: Fn(usize, S) -> S> SpeciesViscosity<S> for F {
    fn viscosity(&self, species: usize, t: S) -> S {
        self(species, t)
    }
}

/// Thermal conductivity `k_s(T)` of a single species, W/(m·K).
pub trait SpeciesConductivity<S> {
    fn conductivity(&self, species: usize, t: S) -> S;
}

impl<S, F: Fn(usize, S) -> S> SpeciesConductivity<S> for F {
    fn conductivity(&self, species: usize, t: S) -> S {
        self(species, t)
    }
}

/// Marker for an evaluator built without a species conductivity model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoConductivity;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TransportError {
    /// The requested mixture property has no mixing rule.
    #[error("{capability} is not implemented")]
    Unimplemented { capability: &'static str },
}
