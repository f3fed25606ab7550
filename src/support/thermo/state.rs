use uom::si::f64::{MassDensity, ThermodynamicTemperature};

/// The thermodynamic state of a gas mixture.
///
/// A `State<Fluid>` captures temperature, density and the state-defining
/// `Fluid` data. For the mixture models in this crate the fluid is a
/// [`Composition`](crate::support::thermo::fluid::Composition).
///
/// # Example
///
/// ```
/// use twine_thermochem::support::thermo::{State, fluid::Composition};
/// use uom::si::{
///     f64::{ThermodynamicTemperature, MassDensity},
///     thermodynamic_temperature::kelvin,
///     mass_density::kilogram_per_cubic_meter,
/// };
///
/// let state = State {
///     temperature: ThermodynamicTemperature::new::<kelvin>(3000.0),
///     density: MassDensity::new::<kilogram_per_cubic_meter>(0.05),
///     fluid: Composition::new(vec![0.77, 0.23]).unwrap(),
/// };
/// assert_eq!(state.fluid.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct State<Fluid> {
    pub temperature: ThermodynamicTemperature,
    pub density: MassDensity,
    pub fluid: Fluid,
}

impl<Fluid> State<Fluid> {
    /// Creates a new state with the given temperature, density, and fluid.
    #[must_use]
    pub fn new(temperature: ThermodynamicTemperature, density: MassDensity, fluid: Fluid) -> Self {
        Self {
            temperature,
            density,
            fluid,
        }
    }

    /// Returns a new state with the given temperature, keeping other fields unchanged.
    #[must_use]
    pub fn with_temperature(self, temperature: ThermodynamicTemperature) -> Self {
        Self {
            temperature,
            ..self
        }
    }

    /// Returns a new state with the given density, keeping other fields unchanged.
    #[must_use]
    pub fn with_density(self, density: MassDensity) -> Self {
        Self { density, ..self }
    }
}
