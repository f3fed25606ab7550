/// Base trait for every unit-aware mixture model.
///
/// `Fluid` is the state-defining data a model needs beyond temperature and
/// density; for gas mixtures this is the [`Composition`](crate::support::thermo::fluid::Composition).
pub trait ThermoModel {
    type Fluid;
}
