//! Ideal-gas equation of state `p = ρ·R_mix·T` for mixtures.

use uom::si::{
    f64::{MassDensity, Pressure, ThermodynamicTemperature},
    specific_heat_capacity::joule_per_kilogram_kelvin,
    temperature_interval, thermodynamic_temperature,
};

use crate::{models::chemistry::ChemicalMixture, support::units::SpecificGasConstant};

/// Mixture gas constant `Σ_s Y_s·R_s`.
#[must_use]
pub(crate) fn gas_constant(mixture: &ChemicalMixture, mass_fractions: &[f64]) -> SpecificGasConstant {
    SpecificGasConstant::new::<joule_per_kilogram_kelvin>(
        mixture.mixture_gas_constant(mass_fractions),
    )
}

#[must_use]
pub(crate) fn pressure(
    temperature: ThermodynamicTemperature,
    density: MassDensity,
    gas_constant: SpecificGasConstant,
) -> Pressure {
    density * gas_constant * temperature
}

#[must_use]
pub(crate) fn density(
    temperature: ThermodynamicTemperature,
    pressure: Pressure,
    gas_constant: SpecificGasConstant,
) -> MassDensity {
    pressure / (gas_constant * temperature)
}

/// Temperature from pressure and density.
///
/// `p / (ρ·R)` carries the dimension of a temperature interval, so it is
/// converted to an absolute temperature explicitly.
#[must_use]
pub(crate) fn temperature(
    pressure: Pressure,
    density: MassDensity,
    gas_constant: SpecificGasConstant,
) -> ThermodynamicTemperature {
    let temperature = pressure / (density * gas_constant);
    ThermodynamicTemperature::new::<thermodynamic_temperature::kelvin>(
        temperature.get::<temperature_interval::kelvin>(),
    )
}
