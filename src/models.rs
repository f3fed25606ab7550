//! The property engine.
//!
//! # Organization
//!
//! - [`chemistry`]: Species definitions and mixture composition arithmetic
//! - [`thermochemistry`]: Thermodynamic properties from curve fits or
//!   molecular structure, and temperature inversion
//! - [`transport`]: Mixture viscosity from species viscosities
//!
//! Every evaluation is a pure function of immutable model data and the
//! caller's temperature and mass fractions, so models can be shared freely
//! across threads.

pub mod chemistry;
pub mod thermochemistry;
pub mod transport;

#[cfg(test)]
pub(crate) mod test_support;
