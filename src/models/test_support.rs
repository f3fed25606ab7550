//! Shared fixtures: five-species air {N2, O2, N, O, NO}.

use crate::models::{
    chemistry::{ChemicalMixture, SpeciesDefinition},
    thermochemistry::{FitInterval, MolecularStructure},
};

pub(crate) const N2: usize = 0;
pub(crate) const O2: usize = 1;
pub(crate) const N: usize = 2;
pub(crate) const O: usize = 3;
pub(crate) const NO: usize = 4;

pub(crate) const MASS_FRACTIONS: [f64; 5] = [0.5, 0.2, 0.1, 0.1, 0.1];

const M_N: f64 = 14.008e-3;
const M_O: f64 = 16.0e-3;

pub(crate) fn air5() -> ChemicalMixture {
    ChemicalMixture::new(vec![
        SpeciesDefinition::new("N2", 2.0 * M_N, 2.5),
        SpeciesDefinition::new("O2", 2.0 * M_O, 2.5),
        SpeciesDefinition::new("N", M_N, 1.5).with_formation_energy(3.362_161_0e7),
        SpeciesDefinition::new("O", M_O, 1.5).with_formation_energy(1.542_000_0e7),
        SpeciesDefinition::new("NO", M_N + M_O, 2.5).with_formation_energy(2.996_123_0e6),
    ])
    .unwrap()
}

/// Characteristic vibrational temperatures of N2, O2 and NO, K.
pub(crate) const THETA_V: [f64; 3] = [3395.0, 2239.0, 2817.0];

/// Electronic levels `(θ_el, degeneracy)` in species order.
pub(crate) const ELECTRONIC_LEVELS: [&[(f64, u32)]; 5] = [
    &[
        (0.0, 1),
        (7.223_16e4, 3),
        (8.577_86e4, 6),
        (8.605_03e4, 6),
        (9.535_12e4, 3),
        (9.805_64e4, 1),
        (9.968_27e4, 2),
        (1.048_98e5, 2),
        (1.116_49e5, 5),
        (1.225_84e5, 1),
        (1.248_86e5, 6),
        (1.282_48e5, 6),
        (1.338_06e5, 10),
        (1.404_30e5, 6),
        (1.504_96e5, 6),
    ],
    &[
        (0.0, 3),
        (1.139_16e4, 2),
        (1.898_47e4, 1),
        (4.755_97e4, 1),
        (4.991_24e4, 6),
        (5.092_27e4, 3),
        (7.189_86e4, 3),
    ],
    &[(0.0, 4), (2.766_47e4, 10), (4.149_31e4, 6)],
    &[
        (0.0, 5),
        (2.277_08e2, 3),
        (3.265_69e2, 1),
        (2.283_03e4, 5),
        (4.861_99e4, 1),
    ],
    &[
        (0.0, 4),
        (5.467_35e4, 8),
        (6.317_14e4, 2),
        (6.599_45e4, 4),
        (6.906_12e4, 4),
        (7.050_00e4, 4),
        (7.491_06e4, 4),
        (7.628_88e4, 2),
        (8.676_19e4, 4),
        (8.714_43e4, 2),
        (8.886_08e4, 4),
        (8.981_76e4, 4),
        (8.988_45e4, 2),
        (9.042_70e4, 2),
        (9.064_28e4, 2),
        (9.111_76e4, 4),
    ],
];

pub(crate) fn air5_structures() -> Vec<MolecularStructure> {
    let vibrational = [Some(THETA_V[0]), Some(THETA_V[1]), None, None, Some(THETA_V[2])];
    vibrational
        .into_iter()
        .zip(ELECTRONIC_LEVELS)
        .map(|(theta_v, levels)| {
            let structure = MolecularStructure::ground_state().with_electronic_levels(levels);
            match theta_v {
                Some(theta) => structure.with_vibrational_mode(theta, 1),
                None => structure,
            }
        })
        .collect()
}

/// NASA7 coefficients in species order, for `[200, 1000)` and `[1000, 6000)` K.
const NASA7: [[[f64; 7]; 2]; 5] = [
    [
        [3.298_677, 1.408_240_4e-3, -3.963_222e-6, 5.641_515e-9, -2.444_854e-12, -1020.8999, 3.950_372],
        [2.926_64, 1.487_976_8e-3, -5.684_76e-7, 1.009_703_8e-10, -6.753_351e-15, -922.7977, 5.980_528],
    ],
    [
        [3.782_456_36, -2.996_734_16e-3, 9.847_302_01e-6, -9.681_295_09e-9, 3.243_728_37e-12, -1063.943_56, 3.657_675_73],
        [3.282_537_84, 1.483_087_54e-3, -7.579_666_69e-7, 2.094_705_55e-10, -2.167_177_94e-14, -1088.457_72, 5.453_231_29],
    ],
    [
        [2.5, 0.0, 0.0, 0.0, 0.0, 5.610_463_7e4, 4.193_908_7],
        [2.415_942_9, 1.748_906_5e-4, -1.190_236_9e-7, 3.022_624_5e-11, -2.036_098_2e-15, 5.613_377_3e4, 4.649_609_6],
    ],
    [
        [3.168_267_1, -3.279_318_84e-3, 6.643_063_96e-6, -6.128_066_24e-9, 2.112_659_71e-12, 2.912_225_92e4, 2.051_933_46],
        [2.569_420_78, -8.597_411_37e-5, 4.194_845_89e-8, -1.001_777_99e-11, 1.228_336_91e-15, 2.921_757_91e4, 4.784_338_64],
    ],
    [
        [4.218_476_3, -4.638_976e-3, 1.104_102_2e-5, -9.336_135_4e-9, 2.803_577e-12, 9844.623, 2.280_846_4],
        [3.260_605_6, 1.191_104_3e-3, -4.291_704_8e-7, 6.945_766_9e-11, -4.033_609_9e-15, 9920.9746, 6.369_302_7],
    ],
];

/// NASA9 coefficients in species order, for `[200, 1000)` and `[1000, 6000)` K.
const NASA9: [[[f64; 9]; 2]; 5] = [
    [
        [2.210_371_22e4, -3.818_461_45e2, 6.082_738_15, -8.530_913_81e-3, 1.384_646_10e-5, -9.625_792_93e-9, 2.519_705_60e-12, 7.108_459_11e2, -1.076_003_20e1],
        [5.877_099_08e5, -2.239_242_55e3, 6.066_942_67, -6.139_652_96e-4, 1.491_798_19e-7, -1.923_094_42e-11, 1.061_948_71e-15, 1.283_206_18e4, -1.586_634_84e1],
    ],
    [
        [-3.425_562_69e4, 4.846_999_86e2, 1.119_011_59, 4.293_887_43e-3, -6.836_273_13e-7, -2.023_374_78e-9, 1.039_040_64e-12, -3.391_454_34e3, 1.849_699_12e1],
        [-1.037_939_94e6, 2.344_832_75e3, 1.819_729_49, 1.267_848_87e-3, -2.188_071_42e-7, 2.053_724_11e-11, -8.193_490_62e-16, -1.689_012_53e4, 1.738_718_35e1],
    ],
    [
        [0.0, 0.0, 2.5, 0.0, 0.0, 0.0, 0.0, 5.610_463_78e4, 4.193_905_036],
        [8.876_501_38e4, -1.071_231_5e2, 2.362_188_287, 2.916_720_081e-4, -1.729_515_1e-7, 4.012_657_88e-11, -2.677_227_571e-15, 5.697_351_33e4, 4.865_231_506],
    ],
    [
        [-7.953_611_3e3, 1.607_177_787e2, 1.966_226_438, 1.013_670_31e-3, -1.110_415_423e-6, 6.517_507_5e-10, -1.584_779_251e-13, 2.840_362_437e4, 8.404_241_82],
        [2.619_020_262e5, -7.298_722_03e2, 3.317_177_27, -4.281_334_36e-4, 1.036_104_594e-7, -9.438_304_33e-12, 2.725_038_297e-16, 3.392_428_06e4, -6.679_585_35e-1],
    ],
    [
        [-1.143_916_58e4, 1.536_467_74e2, 3.431_468_65, -2.668_592_13e-3, 8.481_398_77e-6, -7.685_110_79e-9, 2.386_797_58e-12, 9.097_949_74e3, 6.728_727_95],
        [2.239_037_08e5, -1.289_656_24e3, 5.433_940_39, -3.656_055_46e-4, 9.881_017_63e-8, -1.416_083_27e-11, 9.380_216_42e-16, 1.750_294_22e4, -8.501_699_08],
    ],
];

fn two_intervals(lower: &[f64], upper: &[f64]) -> Vec<FitInterval> {
    vec![
        FitInterval::new(200.0, 1000.0, lower.to_vec()),
        FitInterval::new(1000.0, 6000.0, upper.to_vec()),
    ]
}

pub(crate) fn nasa7_intervals(species: usize) -> Vec<FitInterval> {
    let [lower, upper] = &NASA7[species];
    two_intervals(lower, upper)
}

pub(crate) fn nasa9_intervals(species: usize) -> Vec<FitInterval> {
    let [lower, upper] = &NASA9[species];
    two_intervals(lower, upper)
}
