//! Capability traits used to query and construct mixture states.

mod base;
mod properties;
mod state_from;

pub use base::ThermoModel;
pub use properties::*;
pub use state_from::StateFrom;
