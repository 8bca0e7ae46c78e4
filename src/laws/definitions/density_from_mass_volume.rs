//! Density from mass and volume
//!
//! The density (more precisely, the volumetric mass density) of a substance
//! is its mass per unit volume.
//!
//! Definition: `density = mass / volume`

use crate::core::dimension;
use crate::core::units::{self, Unit};
use crate::core::{printer, Bindings, Equation, Expr, Quantity, Symbol};
use crate::error::PhysicsResult;
use crate::laws::Law;
use std::sync::LazyLock;

pub const MASS: Symbol = Symbol::new("mass", dimension::MASS);
pub const VOLUME: Symbol = Symbol::new("volume", dimension::VOLUME);
pub const DENSITY: Symbol = Symbol::new("density", dimension::DENSITY);

static SYMBOLS: [Symbol; 3] = [MASS, VOLUME, DENSITY];

pub static DEFINITION: LazyLock<Equation> =
    LazyLock::new(|| Equation::new(DENSITY, Expr::from(MASS) / VOLUME));

/// kg/m^3
pub fn definition_units_si() -> Unit {
    units::KILOGRAM / units::METER.powi(3)
}

pub fn print(expr: &Expr) -> String {
    printer::pretty(expr)
}

pub fn calculate_density(mass: &Quantity, volume: &Quantity) -> PhysicsResult<Quantity> {
    let inputs = Bindings::from([(MASS, *mass), (VOLUME, *volume)]);
    DensityFromMassVolume.calculate(&DENSITY, &inputs)
}

pub struct DensityFromMassVolume;

impl Law for DensityFromMassVolume {
    fn name(&self) -> &'static str {
        "density_from_mass_volume"
    }

    fn description(&self) -> &'static str {
        "The density of a substance is its mass per unit volume."
    }

    fn symbols(&self) -> &'static [Symbol] {
        &SYMBOLS
    }

    fn output(&self) -> Symbol {
        DENSITY
    }

    fn equation(&self) -> &'static Equation {
        &DEFINITION
    }

    fn solve_for(&self, target: &Symbol) -> PhysicsResult<Expr> {
        match *target {
            DENSITY => Ok(Expr::from(MASS) / VOLUME),
            MASS => Ok(Expr::from(DENSITY) * VOLUME),
            VOLUME => Ok(Expr::from(MASS) / DENSITY),
            _ => Err(self.unknown_symbol(target.name())),
        }
    }
}
