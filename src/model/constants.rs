//! Physical constants used alongside the atomic weight tables.
//!
//! The values are fixed literals. Units follow the conventions of the
//! surrounding tooling: the speed of light is in cm/s and lengths are in
//! metres, except for [`ANGSTROMS_PER_BOHR`].

use std::collections::HashMap;
use std::sync::LazyLock;

/// Planck's constant, J·s.
pub const PLANCK: f64 = 6.626070E-34;
/// Speed of light, cm/s.
pub const SPEED_OF_LIGHT: f64 = 2.997925E+10;
/// Energy of one hartree, J.
pub const HARTREE: f64 = 4.359745E-18;
/// Bohr radius, m.
pub const BOHR_RADIUS: f64 = 5.291772E-11;
/// Ångströms per bohr.
pub const ANGSTROMS_PER_BOHR: f64 = 5.291772E-01;
/// Atomic mass unit, kg.
pub const ATOMIC_MASS_UNIT: f64 = 1.660468E-27;
/// Boltzmann's constant, J/K.
pub const BOLTZMANN: f64 = 1.380649E-23;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalConstant {
    pub key: &'static str,
    pub value: f64,
    pub unit: &'static str,
    pub description: &'static str,
}

/// All constants, keyed by their short names (`h`, `c`, `Eh`, `a0`, `atb`,
/// `amu`, `kB`).
pub const PHYSICAL_CONSTANTS: &[PhysicalConstant] = &[
    PhysicalConstant {
        key: "h",
        value: PLANCK,
        unit: "J s",
        description: "Planck's constant",
    },
    PhysicalConstant {
        key: "c",
        value: SPEED_OF_LIGHT,
        unit: "cm/s",
        description: "speed of light",
    },
    PhysicalConstant {
        key: "Eh",
        value: HARTREE,
        unit: "J",
        description: "energy of a hartree",
    },
    PhysicalConstant {
        key: "a0",
        value: BOHR_RADIUS,
        unit: "m",
        description: "Bohr radius",
    },
    PhysicalConstant {
        key: "atb",
        value: ANGSTROMS_PER_BOHR,
        unit: "Å/bohr",
        description: "angstroms per bohr",
    },
    PhysicalConstant {
        key: "amu",
        value: ATOMIC_MASS_UNIT,
        unit: "kg",
        description: "atomic mass unit",
    },
    PhysicalConstant {
        key: "kB",
        value: BOLTZMANN,
        unit: "J/K",
        description: "Boltzmann's constant",
    },
];

static CONSTANTS_BY_KEY: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    PHYSICAL_CONSTANTS
        .iter()
        .map(|c| (c.key, c.value))
        .collect()
});

/// Name → value map of [`PHYSICAL_CONSTANTS`].
pub fn physical_constants() -> &'static HashMap<&'static str, f64> {
    &CONSTANTS_BY_KEY
}

/// Looks up a constant by its short key. Keys are case-sensitive.
pub fn physical_constant(key: &str) -> Option<f64> {
    CONSTANTS_BY_KEY.get(key).copied()
}
