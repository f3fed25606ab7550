//! # Twine Thermochem
//!
//! Thermochemistry and transport property models for multi-species gas
//! mixtures, as used by compressible and reacting flow solvers.
//!
//! ## Crate layout
//!
//! - [`models`]: The property engine. Species data, curve-fit and
//!   statistical-mechanics thermodynamics, and mixture transport.
//! - [`support`]: Supporting utilities, including unit-aware mixture models
//!   built on the engine.
//!
//! ## Numeric conventions
//!
//! The engine works in plain SI numbers (K, J/kg, J/(kg·K), kg/mol, Pa·s) and
//! is generic over the element type through [`support::numeric::StateType`].
//! Species are addressed by index; mass-fraction slices are indexed like the
//! species of their [`ChemicalMixture`](models::chemistry::ChemicalMixture).
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.

pub mod models;
pub mod support;
