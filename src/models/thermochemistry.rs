//! Thermodynamic state functions of multi-species gases.
//!
//! Two views of the same gas are provided:
//!
//! - **Macroscopic**: [`MacroThermoEvaluator`] evaluates piecewise-polynomial
//!   [`CurveFit`]s (NASA7 or NASA9) for `cp`, `h` and `s`.
//! - **Microscopic**: the [`MicroThermo`] trait splits the heat capacity into
//!   translational, rotational, vibrational and electronic contributions.
//!   [`StatMechThermodynamics`] computes them from molecular structure data;
//!   [`IdealGasMicroThermo`] infers the vibrational part from a curve fit.
//!
//! Mixture quantities are always mass-fraction-weighted sums of species quantities.

pub mod curve_fit;
pub mod ideal_gas_micro;
pub mod inversion;
pub mod macro_thermo;
pub mod micro_thermo;
pub mod stat_mech;

mod curve_fit_mixture;
mod temp_cache;

pub use curve_fit::{
    CurveFit, CurveFitError, CurveFitFamily, Extrapolation, FitInterval, Nasa7, Nasa9,
};
pub use curve_fit_mixture::{CurveFitMixture, CurveFitMixtureError};
pub use ideal_gas_micro::IdealGasMicroThermo;
pub use inversion::{InversionConfig, InversionError};
pub use macro_thermo::MacroThermoEvaluator;
pub use micro_thermo::MicroThermo;
pub use stat_mech::{
    ElectronicLevel, MolecularStructure, StatMechThermodynamics, StructureError, VibrationalMode,
};
pub use temp_cache::TempCache;
