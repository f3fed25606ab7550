//! Unit-aware thermodynamic capabilities for gas mixtures.
//!
//! The evaluators in [`crate::models`] work in plain SI numbers and are generic
//! over the numeric [`StateType`](crate::support::numeric::StateType). This
//! module wraps them in [`uom`] quantities and capability traits so that a flow
//! solver can ask for `cp`, `u`, `h` or a state from `(ρ, u)` without tracking
//! units or species bookkeeping by hand.

mod error;
mod state;

pub mod capability;
pub mod fluid;
pub mod model;

pub use error::PropertyError;
pub use state::State;
