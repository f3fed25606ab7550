//! Gas mixture over statistical-mechanics thermodynamics.
//!
//! # Assumptions
//!
//! - Ideal-gas equation of state: `p = ρ·R_mix·T`
//! - Thermal equilibrium: one temperature for every energy mode
//! - Energies include each species' formation energy

use uom::si::{
    available_energy::joule_per_kilogram,
    f64::{MassDensity, Pressure, SpecificHeatCapacity, ThermodynamicTemperature},
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::{
    models::{
        chemistry::ChemicalMixture,
        thermochemistry::{InversionConfig, MicroThermo, StatMechThermodynamics},
    },
    support::{
        thermo::{
            PropertyError, State,
            capability::{
                HasCp, HasCv, HasEnthalpy, HasGasConstant, HasInternalEnergy, HasPressure,
                StateFrom, ThermoModel,
            },
            fluid::Composition,
        },
        units::{SpecificEnthalpy, SpecificGasConstant, SpecificInternalEnergy},
    },
};

use super::{checks, ideal_gas_eos};

/// A gas mixture described by molecular structure data.
///
/// Its natural inputs are the conservative variables of a compressible flow
/// solver: composition, density and specific internal energy.
#[derive(Debug, Clone, Copy)]
pub struct StatMechGas<'a> {
    thermo: &'a StatMechThermodynamics<'a>,
    config: InversionConfig,
}

impl ThermoModel for StatMechGas<'_> {
    type Fluid = Composition;
}

impl<'a> StatMechGas<'a> {
    #[must_use]
    pub fn new(thermo: &'a StatMechThermodynamics<'a>) -> Self {
        Self {
            thermo,
            config: InversionConfig::default(),
        }
    }

    /// Sets the configuration used to recover temperature from internal energy.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::InvalidState`] if the configuration is unusable.
    pub fn with_config(mut self, config: InversionConfig) -> Result<Self, PropertyError> {
        config
            .validate()
            .map_err(|error| PropertyError::invalid_state(error.to_string()))?;
        self.config = config;
        Ok(self)
    }

    fn mixture(&self) -> &'a ChemicalMixture {
        MicroThermo::<f64>::chemical_mixture(self.thermo)
    }

    fn resolve<'s>(&self, state: &'s State<Composition>) -> Result<(f64, &'s [f64]), PropertyError> {
        let y = checks::mass_fractions(self.mixture(), &state.fluid)?;
        let t = checks::temperature(state.temperature)?;
        Ok((t, y))
    }
}

impl HasGasConstant for StatMechGas<'_> {
    fn gas_constant(&self, state: &State<Composition>) -> Result<SpecificGasConstant, PropertyError> {
        let y = checks::mass_fractions(self.mixture(), &state.fluid)?;
        Ok(ideal_gas_eos::gas_constant(self.mixture(), y))
    }
}

impl HasPressure for StatMechGas<'_> {
    fn pressure(&self, state: &State<Composition>) -> Result<Pressure, PropertyError> {
        let (_, y) = self.resolve(state)?;
        let r = ideal_gas_eos::gas_constant(self.mixture(), y);
        Ok(ideal_gas_eos::pressure(state.temperature, state.density, r))
    }
}

impl HasInternalEnergy for StatMechGas<'_> {
    /// Total internal energy `e_tot = e_tr + e_vib + e_el + e_0`.
    fn internal_energy(
        &self,
        state: &State<Composition>,
    ) -> Result<SpecificInternalEnergy, PropertyError> {
        let (t, y) = self.resolve(state)?;
        Ok(SpecificInternalEnergy::new::<joule_per_kilogram>(
            self.thermo.e_tot_mix(t, y),
        ))
    }
}

impl HasEnthalpy for StatMechGas<'_> {
    /// Total enthalpy `h_tot = e_tot + R_mix·T`.
    fn enthalpy(&self, state: &State<Composition>) -> Result<SpecificEnthalpy, PropertyError> {
        let (t, y) = self.resolve(state)?;
        Ok(SpecificEnthalpy::new::<joule_per_kilogram>(
            self.thermo.h_tot_mix(t, y),
        ))
    }
}

impl HasCv for StatMechGas<'_> {
    fn cv(&self, state: &State<Composition>) -> Result<SpecificHeatCapacity, PropertyError> {
        let (t, y) = self.resolve(state)?;
        Ok(SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(
            MicroThermo::<f64>::cv_mix(self.thermo, t, y),
        ))
    }
}

impl HasCp for StatMechGas<'_> {
    fn cp(&self, state: &State<Composition>) -> Result<SpecificHeatCapacity, PropertyError> {
        let (t, y) = self.resolve(state)?;
        Ok(SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(
            MicroThermo::<f64>::cp_mix(self.thermo, t, y),
        ))
    }
}

impl StateFrom<(Composition, ThermodynamicTemperature, Pressure)> for StatMechGas<'_> {
    type Error = PropertyError;

    fn state_from(
        &self,
        (fluid, temperature, pressure): (Composition, ThermodynamicTemperature, Pressure),
    ) -> Result<State<Composition>, Self::Error> {
        let y = checks::mass_fractions(self.mixture(), &fluid)?;
        checks::temperature(temperature)?;
        checks::pressure(pressure)?;
        let r = ideal_gas_eos::gas_constant(self.mixture(), y);
        let density = ideal_gas_eos::density(temperature, pressure, r);

        Ok(State::new(temperature, density, fluid))
    }
}

impl StateFrom<(Composition, MassDensity, SpecificInternalEnergy)> for StatMechGas<'_> {
    type Error = PropertyError;

    /// Recovers temperature from `e_tot` by a safeguarded Newton iteration.
    fn state_from(
        &self,
        (fluid, density, internal_energy): (Composition, MassDensity, SpecificInternalEnergy),
    ) -> Result<State<Composition>, Self::Error> {
        let y = checks::mass_fractions(self.mixture(), &fluid)?;
        let e = internal_energy.get::<joule_per_kilogram>();
        let t = self
            .thermo
            .temperature_from_e_tot(e, y, &self.config)
            .map_err(|error| PropertyError::calculation(error.to_string()))?;

        Ok(State::new(
            ThermodynamicTemperature::new::<kelvin>(t),
            density,
            fluid,
        ))
    }
}
