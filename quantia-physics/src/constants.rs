//! Physical constants (CODATA 2018) as quantities
//!
//! Each constant is built on first use from its amount and unit expression.

use std::f64::consts::TAU;
use std::sync::LazyLock;
use quantia_units::Quantity;

fn constant(amount: f64, units: &str) -> Quantity {
    Quantity::with_units(amount, units).expect("constant units must parse")
}

pub static ELEMENTARY_CHARGE: LazyLock<Quantity> =
    LazyLock::new(|| constant(1.602_176_634e-19, "C"));

pub static GRAVITATION: LazyLock<Quantity> =
    LazyLock::new(|| constant(6.674_30e-11, "m3/kg/s2"));

pub static PLANCK: LazyLock<Quantity> =
    LazyLock::new(|| constant(6.626_070_15e-34, "J*s"));

/// Reduced Planck constant, ħ = h / 2π
pub static DIRAC: LazyLock<Quantity> = LazyLock::new(|| {
    PLANCK
        .divide(&Quantity::new(TAU))
        .expect("dividing by a pure number cannot fail")
});

pub static SPEED_OF_LIGHT: LazyLock<Quantity> =
    LazyLock::new(|| constant(299_792_458.0, "m/s"));

pub static ELECTRIC_PERMITTIVITY: LazyLock<Quantity> =
    LazyLock::new(|| constant(8.854_187_812_8e-12, "F/m"));

pub static MAGNETIC_PERMEABILITY: LazyLock<Quantity> =
    LazyLock::new(|| constant(1.256_637_062_12e-6, "N/A2"));

pub static ELECTRON_MASS: LazyLock<Quantity> =
    LazyLock::new(|| constant(9.109_383_701_5e-31, "kg"));

pub static FINE_STRUCTURE: LazyLock<Quantity> =
    LazyLock::new(|| Quantity::new(7.297_352_569_3e-3));

pub static JOSEPHSON: LazyLock<Quantity> =
    LazyLock::new(|| constant(483_597.848_416_98e9, "Hz/V"));

pub static RYDBERG: LazyLock<Quantity> =
    LazyLock::new(|| constant(10_973_731.568_160, "m-1"));

pub static VON_KLITZING: LazyLock<Quantity> =
    LazyLock::new(|| constant(25_812.807_45, "Ω"));

pub static AVOGADRO: LazyLock<Quantity> =
    LazyLock::new(|| constant(6.022_140_76e23, "mol-1"));

/// Look up a constant by its snake_case name, e.g. `"speed_of_light"`
pub fn by_name(name: &str) -> Option<&'static Quantity> {
    let constant: &'static LazyLock<Quantity> = match name {
        "elementary_charge" => &ELEMENTARY_CHARGE,
        "gravitation" => &GRAVITATION,
        "planck" => &PLANCK,
        "dirac" => &DIRAC,
        "speed_of_light" => &SPEED_OF_LIGHT,
        "electric_permittivity" => &ELECTRIC_PERMITTIVITY,
        "magnetic_permeability" => &MAGNETIC_PERMEABILITY,
        "electron_mass" => &ELECTRON_MASS,
        "fine_structure" => &FINE_STRUCTURE,
        "josephson" => &JOSEPHSON,
        "rydberg" => &RYDBERG,
        "von_klitzing" => &VON_KLITZING,
        "avogadro" => &AVOGADRO,
        _ => return None,
    };
    Some(LazyLock::force(constant))
}

/// Names accepted by [`by_name`]
pub const NAMES: [&str; 13] = [
    "elementary_charge",
    "gravitation",
    "planck",
    "dirac",
    "speed_of_light",
    "electric_permittivity",
    "magnetic_permeability",
    "electron_mass",
    "fine_structure",
    "josephson",
    "rydberg",
    "von_klitzing",
    "avogadro",
];
