//! Species identity and mixture-level composition helpers.
//!
//! A [`ChemicalMixture`] is built once at setup from [`SpeciesDefinition`]s
//! and then shared read-only by every evaluator in [`crate::models`].
//! Species are addressed by their index, which is their position in the mixture.

mod mixture;
mod species;

pub use mixture::{ChemicalMixture, MixtureError};
pub use species::{Species, SpeciesDefinition};

/// Universal gas constant, J/(mol·K).
pub const R_UNIVERSAL: f64 = 8.314_462_1;
