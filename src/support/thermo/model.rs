//! Unit-aware mixture models.
//!
//! These wrap the property engine in [`crate::models`] behind the capability
//! traits of [`crate::support::thermo::capability`], taking and returning
//! [`uom`] quantities and reporting failures as [`PropertyError`](super::PropertyError).

pub mod curve_fit_gas;
pub mod stat_mech_gas;

pub(crate) mod ideal_gas_eos;

mod checks;

pub use curve_fit_gas::{CurveFitGas, EnthalpyInversionConfig};
pub use stat_mech_gas::StatMechGas;
