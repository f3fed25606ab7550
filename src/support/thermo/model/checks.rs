//! State validation shared by the mixture models.

use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    pressure::pascal,
    thermodynamic_temperature::kelvin,
};

use crate::{
    models::chemistry::ChemicalMixture,
    support::{
        constraint::{Constraint, StrictlyPositive},
        thermo::{PropertyError, fluid::Composition},
    },
};

/// Returns the composition's mass fractions if they fit `mixture`.
pub(super) fn mass_fractions<'c>(
    mixture: &ChemicalMixture,
    composition: &'c Composition,
) -> Result<&'c [f64], PropertyError> {
    if composition.len() != mixture.n_species() {
        return Err(PropertyError::invalid_state(format!(
            "composition has {} mass fractions, mixture has {} species",
            composition.len(),
            mixture.n_species()
        )));
    }
    Ok(composition.mass_fractions())
}

/// Returns the temperature in K if it is strictly positive.
pub(super) fn temperature(temperature: ThermodynamicTemperature) -> Result<f64, PropertyError> {
    let t = temperature.get::<kelvin>();
    StrictlyPositive::check(&t)
        .map_err(|_| PropertyError::out_of_domain(format!("temperature {t} K must be positive")))?;
    Ok(t)
}

/// Returns the pressure in Pa if it is strictly positive.
pub(super) fn pressure(pressure: Pressure) -> Result<f64, PropertyError> {
    let p = pressure.get::<pascal>();
    StrictlyPositive::check(&p)
        .map_err(|_| PropertyError::out_of_domain(format!("pressure {p} Pa must be positive")))?;
    Ok(p)
}
