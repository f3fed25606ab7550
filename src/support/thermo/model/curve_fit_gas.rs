//! Thermally perfect gas mixture over curve-fit thermodynamics.
//!
//! # Assumptions
//!
//! - Ideal-gas equation of state: `p = ρ·R_mix·T`
//! - Thermally perfect: `cp(T)`, `h(T)` and `s°(T)` come from NASA curve fits
//! - Ideal mixing: properties are mass-fraction-weighted species properties,
//!   plus the entropy of mixing through each species' partial pressure

mod inversion;

use uom::si::{
    available_energy::joule_per_kilogram,
    f64::{MassDensity, Pressure, SpecificHeatCapacity, ThermodynamicTemperature},
    pressure::pascal,
    specific_heat_capacity::joule_per_kilogram_kelvin,
};

use crate::{
    models::{
        chemistry::ChemicalMixture,
        thermochemistry::{CurveFitFamily, MacroThermoEvaluator},
    },
    support::{
        constraint::{Constraint, StrictlyPositive},
        thermo::{
            PropertyError, State,
            capability::{
                HasCp, HasCv, HasEnthalpy, HasEntropy, HasGasConstant, HasInternalEnergy,
                HasPressure, StateFrom, ThermoModel,
            },
            fluid::Composition,
        },
        units::{SpecificEnthalpy, SpecificEntropy, SpecificGasConstant, SpecificInternalEnergy},
    },
};

use super::{checks, ideal_gas_eos};

pub use inversion::EnthalpyInversionConfig;

/// A thermally perfect gas mixture described by curve fits.
///
/// Enthalpy and entropy are absolute, on the scale of the curve fits
/// (enthalpy of formation included). Entropy is referred to
/// [`reference_pressure`](Self::reference_pressure), 1 bar by default.
#[derive(Debug)]
pub struct CurveFitGas<'a, F> {
    thermo: MacroThermoEvaluator<'a, F>,
    reference_pressure: Pressure,
    config: EnthalpyInversionConfig,
}

impl<F> Clone for CurveFitGas<'_, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for CurveFitGas<'_, F> {}

impl<F> ThermoModel for CurveFitGas<'_, F> {
    type Fluid = Composition;
}

impl<'a, F: CurveFitFamily> CurveFitGas<'a, F> {
    #[must_use]
    pub fn new(thermo: MacroThermoEvaluator<'a, F>) -> Self {
        Self {
            thermo,
            reference_pressure: Pressure::new::<pascal>(1.0e5),
            config: EnthalpyInversionConfig::default(),
        }
    }

    /// Sets the pressure at which the curve fits' standard entropy applies.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::OutOfDomain`] if the pressure is not strictly positive.
    pub fn with_reference_pressure(mut self, pressure: Pressure) -> Result<Self, PropertyError> {
        let p = pressure.get::<pascal>();
        StrictlyPositive::check(&p).map_err(|_| {
            PropertyError::out_of_domain(format!("reference pressure {p} Pa must be positive"))
        })?;
        self.reference_pressure = pressure;
        Ok(self)
    }

    #[must_use]
    pub fn with_config(mut self, config: EnthalpyInversionConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn reference_pressure(&self) -> Pressure {
        self.reference_pressure
    }

    fn mixture(&self) -> &'a ChemicalMixture {
        self.thermo.chemical_mixture()
    }

    /// Validated temperature (K) and mass fractions of `state`.
    fn resolve<'s>(&self, state: &'s State<Composition>) -> Result<(f64, &'s [f64]), PropertyError> {
        let y = checks::mass_fractions(self.mixture(), &state.fluid)?;
        let t = checks::temperature(state.temperature)?;
        Ok((t, y))
    }
}

impl<F: CurveFitFamily> HasGasConstant for CurveFitGas<'_, F> {
    fn gas_constant(&self, state: &State<Composition>) -> Result<SpecificGasConstant, PropertyError> {
        let y = checks::mass_fractions(self.mixture(), &state.fluid)?;
        Ok(ideal_gas_eos::gas_constant(self.mixture(), y))
    }
}

impl<F: CurveFitFamily> HasPressure for CurveFitGas<'_, F> {
    /// Computes pressure with `p = ρ·R_mix·T`.
    fn pressure(&self, state: &State<Composition>) -> Result<Pressure, PropertyError> {
        let (_, y) = self.resolve(state)?;
        let r = ideal_gas_eos::gas_constant(self.mixture(), y);
        Ok(ideal_gas_eos::pressure(state.temperature, state.density, r))
    }
}

impl<F: CurveFitFamily> HasEnthalpy for CurveFitGas<'_, F> {
    /// Computes enthalpy with `h = Σ Y_s·R_s·T·(h/RT)_s`.
    fn enthalpy(&self, state: &State<Composition>) -> Result<SpecificEnthalpy, PropertyError> {
        let (t, y) = self.resolve(state)?;
        Ok(SpecificEnthalpy::new::<joule_per_kilogram>(
            self.thermo.h_mix(t, y),
        ))
    }
}

impl<F: CurveFitFamily> HasInternalEnergy for CurveFitGas<'_, F> {
    /// Computes internal energy with `u = h − R_mix·T`.
    fn internal_energy(
        &self,
        state: &State<Composition>,
    ) -> Result<SpecificInternalEnergy, PropertyError> {
        let (t, y) = self.resolve(state)?;
        let u = self.thermo.h_mix(t, y) - self.mixture().mixture_gas_constant(y) * t;
        Ok(SpecificInternalEnergy::new::<joule_per_kilogram>(u))
    }
}

impl<F: CurveFitFamily> HasEntropy for CurveFitGas<'_, F> {
    /// Computes entropy with `s = Σ Y_s·R_s·(s°/R − ln(X_s·p/p_ref))` over
    /// the species present.
    fn entropy(&self, state: &State<Composition>) -> Result<SpecificEntropy, PropertyError> {
        let (t, y) = self.resolve(state)?;
        let mixture = self.mixture();

        let p = self.pressure(state)?.get::<pascal>();
        let p_ref = self.reference_pressure.get::<pascal>();
        let m_mix = mixture.mean_molar_mass(y);

        let s = mixture.mix(y, |species| {
            let x = mixture.mole_fraction(species, m_mix, y[species]);
            if x > 0.0 {
                self.thermo.s(species, t) - mixture.gas_constant(species) * (x * p / p_ref).ln()
            } else {
                0.0
            }
        });
        Ok(SpecificEntropy::new::<joule_per_kilogram_kelvin>(s))
    }
}

impl<F: CurveFitFamily> HasCp for CurveFitGas<'_, F> {
    fn cp(&self, state: &State<Composition>) -> Result<SpecificHeatCapacity, PropertyError> {
        let (t, y) = self.resolve(state)?;
        Ok(SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(
            self.thermo.cp_mix(t, y),
        ))
    }
}

impl<F: CurveFitFamily> HasCv for CurveFitGas<'_, F> {
    fn cv(&self, state: &State<Composition>) -> Result<SpecificHeatCapacity, PropertyError> {
        let (t, y) = self.resolve(state)?;
        Ok(SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(
            self.thermo.cv_mix(t, y),
        ))
    }
}

impl<F: CurveFitFamily> StateFrom<(Composition, ThermodynamicTemperature, Pressure)>
    for CurveFitGas<'_, F>
{
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

impl<F: CurveFitFamily> StateFrom<(Composition, Pressure, MassDensity)> for CurveFitGas<'_, F> {
    type Error = PropertyError;

    fn state_from(
        &self,
        (fluid, pressure, density): (Composition, Pressure, MassDensity),
    ) -> Result<State<Composition>, Self::Error> {
        let y = checks::mass_fractions(self.mixture(), &fluid)?;
        let r = ideal_gas_eos::gas_constant(self.mixture(), y);
        let temperature = ideal_gas_eos::temperature(pressure, density, r);
        checks::temperature(temperature)?;

        Ok(State::new(temperature, density, fluid))
    }
}

impl<F: CurveFitFamily> StateFrom<(Composition, Pressure, SpecificEnthalpy)>
    for CurveFitGas<'_, F>
{
    type Error = PropertyError;

    fn state_from(
        &self,
        (fluid, pressure, enthalpy): (Composition, Pressure, SpecificEnthalpy),
    ) -> Result<State<Composition>, Self::Error> {
        let y = checks::mass_fractions(self.mixture(), &fluid)?;
        checks::pressure(pressure)?;
        let temperature =
            inversion::temperature_from_enthalpy(&self.thermo, y, enthalpy, &self.config)?;
        let r = ideal_gas_eos::gas_constant(self.mixture(), y);
        let density = ideal_gas_eos::density(temperature, pressure, r);

        Ok(State::new(temperature, density, fluid))
    }
}
