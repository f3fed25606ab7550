//! Extensions to [`uom`] for specific (per unit mass) thermodynamic quantities.
//!
//! The property engine works in plain SI numbers; the unit-aware facade in
//! [`crate::support::thermo`] converts to and from [`uom`] quantities.
//! [`uom`] has no names for the specific quantities of gas thermochemistry,
//! so they are defined here.

use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, N2, P2, Z0},
};

/// Specific gas constant, J/kg·K in SI.
pub type SpecificGasConstant = Quantity<ISQ<P2, Z0, N2, Z0, N1, Z0, Z0>, SI<f64>, f64>;

/// Specific enthalpy, J/kg in SI.
pub type SpecificEnthalpy = Quantity<ISQ<P2, Z0, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Specific entropy, J/kg·K in SI.
pub type SpecificEntropy = Quantity<ISQ<P2, Z0, N2, Z0, N1, Z0, Z0>, SI<f64>, f64>;

/// Specific internal energy, J/kg in SI.
pub type SpecificInternalEnergy = Quantity<ISQ<P2, Z0, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{SpecificHeatCapacity, ThermodynamicTemperature},
        specific_heat_capacity::joule_per_kilogram_kelvin,
        thermodynamic_temperature::kelvin,
    };

    #[test]
    fn gas_constant_times_temperature_is_specific_energy() {
        let r = SpecificGasConstant::new::<joule_per_kilogram_kelvin>(296.8);
        let t = ThermodynamicTemperature::new::<kelvin>(1000.0);

        let rt: SpecificInternalEnergy = r * t;
        assert_relative_eq!(rt.value, 296_800.0);

        let cp: SpecificHeatCapacity = r * 3.5;
        assert_relative_eq!(cp.get::<joule_per_kilogram_kelvin>(), 1038.8);
    }
}
