use crate::support::thermo::State;

use super::ThermoModel;

/// Capability for constructing a [`State`] from a typed input.
///
/// A mixture [`State`] carries its [`Composition`](crate::support::thermo::fluid::Composition)
/// as the `Fluid`, so every input names the composition explicitly.
/// `StateFrom<Input>` expresses, at compile time, which input combinations a
/// model can turn into a state. Common patterns are:
///
/// - `(Composition, ThermodynamicTemperature, Pressure)`
/// - `(Composition, Pressure, MassDensity)`
/// - `(Composition, Pressure, SpecificEnthalpy)`, which inverts `h(T)`
/// - `(Composition, MassDensity, SpecificInternalEnergy)`, the conservative
///   variables of a compressible flow solver, which inverts `e(T)`
///
/// If a model does not implement `StateFrom<Input>`, that input is simply not
/// supported; there are no runtime "not implemented" errors.
pub trait StateFrom<Input>: ThermoModel {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Create a mixture state from the provided input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the state cannot be created from `input`.
    fn state_from(&self, input: Input) -> Result<State<Self::Fluid>, Self::Error>;
}
