//! Temperature from enthalpy by bisection over the curve fits' domain.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use twine_solvers::equation::bisection;
use uom::si::{
    available_energy::joule_per_kilogram,
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::{
    models::thermochemistry::{CurveFitFamily, MacroThermoEvaluator},
    support::{thermo::PropertyError, units::SpecificEnthalpy},
};

/// Solver configuration for recovering temperature from enthalpy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnthalpyInversionConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on temperature.
    pub temp_tol: TemperatureInterval,

    /// Absolute tolerance on the enthalpy residual.
    pub enthalpy_tol: SpecificEnthalpy,
}

impl Default for EnthalpyInversionConfig {
    fn default() -> Self {
        Self {
            max_iters: 200,
            temp_tol: TemperatureInterval::new::<delta_kelvin>(1e-10),
            enthalpy_tol: SpecificEnthalpy::new::<joule_per_kilogram>(1e-6),
        }
    }
}

impl EnthalpyInversionConfig {
    fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.temp_tol.get::<delta_kelvin>(),
            x_rel_tol: 0.0,
            residual_tol: self.enthalpy_tol.get::<joule_per_kilogram>(),
        }
    }
}

/// Mixture enthalpy at a temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
struct EnthalpyAt {
    temperature: ThermodynamicTemperature,
    enthalpy: SpecificEnthalpy,
}

/// Evaluates `h_mix(T)` for a fixed composition.
struct EnthalpyModel<'m, 'a, F> {
    thermo: &'m MacroThermoEvaluator<'a, F>,
    mass_fractions: &'m [f64],
}

impl<F: CurveFitFamily> Model for EnthalpyModel<'_, '_, F> {
    type Input = ThermodynamicTemperature;
    type Output = EnthalpyAt;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let h = self
            .thermo
            .h_mix(input.get::<kelvin>(), self.mass_fractions);
        Ok(EnthalpyAt {
            temperature: *input,
            enthalpy: SpecificEnthalpy::new::<joule_per_kilogram>(h),
        })
    }
}

/// Residual `h_mix(T) − h_target`.
struct EnthalpyProblem {
    target: SpecificEnthalpy,
}

impl EquationProblem<1> for EnthalpyProblem {
    type Input = ThermodynamicTemperature;
    type Output = EnthalpyAt;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(ThermodynamicTemperature::new::<kelvin>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        let h = output.enthalpy.get::<joule_per_kilogram>();
        let target = self.target.get::<joule_per_kilogram>();
        Ok([h - target])
    }
}

/// Finds the temperature at which the mixture enthalpy equals `target`,
/// searching the temperature range covered by the curve fits.
///
/// # Errors
///
/// Returns [`PropertyError::OutOfDomain`] if `target` is not reached within
/// that range, or [`PropertyError::Calculation`] if bisection fails or does
/// not converge.
pub(super) fn temperature_from_enthalpy<F: CurveFitFamily>(
    thermo: &MacroThermoEvaluator<'_, F>,
    mass_fractions: &[f64],
    target: SpecificEnthalpy,
    config: &EnthalpyInversionConfig,
) -> Result<ThermodynamicTemperature, PropertyError> {
    let (t_min, t_max) = thermo.curve_fits().domain();
    let h_target = target.get::<joule_per_kilogram>();
    let h_min = thermo.h_mix(t_min, mass_fractions);
    let h_max = thermo.h_mix(t_max, mass_fractions);
    if !(h_min..=h_max).contains(&h_target) {
        return Err(PropertyError::out_of_domain(format!(
            "enthalpy {h_target} J/kg outside [{h_min}, {h_max}] J/kg reached between {t_min} K and {t_max} K"
        )));
    }

    let model = EnthalpyModel {
        thermo,
        mass_fractions,
    };
    let problem = EnthalpyProblem { target };

    let solution = bisection::solve(
        &model,
        &problem,
        [t_min, t_max],
        &config.bisection(),
        |_: &bisection::Event<'_, _, _>| None,
    )
    .map_err(|error| PropertyError::calculation(format!("bisection solver error: {error}")))?;

    if solution.status != bisection::Status::Converged {
        return Err(PropertyError::calculation(format!(
            "enthalpy inversion hit the iteration limit after {} iterations, residual={} J/kg",
            solution.iters, solution.residual
        )));
    }

    Ok(solution.snapshot.output.temperature)
}
