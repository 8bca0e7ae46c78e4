//! Units of measurement
//!
//! A unit is a display symbol, a scale factor to the coherent SI unit and a
//! dimension. Units can be looked up by symbol or name, combined with `*`,
//! `/` and integer powers, and parsed from expressions like `kg/m^3`.

use super::dimension::{self, Dimension};
use crate::error::{PhysicsError, PhysicsResult};
use std::borrow::Cow;
use std::{fmt, ops};

#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    symbol: Cow<'static, str>,
    /// Multiply a value in this unit by `factor` to get the SI value
    factor: f64,
    dimension: Dimension,
}

impl Unit {
    #[must_use]
    pub const fn named(symbol: &'static str, factor: f64, dimension: Dimension) -> Self {
        Self {
            symbol: Cow::Borrowed(symbol),
            factor,
            dimension,
        }
    }

    /// The coherent SI unit for a dimension, e.g. `kg/m^3` for density.
    #[must_use]
    pub fn si(dimension: Dimension) -> Self {
        Self {
            symbol: Cow::Owned(dimension.si_unit_string()),
            factor: 1.0,
            dimension,
        }
    }

    #[must_use]
    pub const fn dimensionless() -> Self {
        Self::named("", 1.0, dimension::DIMENSIONLESS)
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    #[must_use]
    pub const fn factor(&self) -> f64 {
        self.factor
    }

    #[must_use]
    pub const fn dimension(&self) -> Dimension {
        self.dimension
    }

    #[must_use]
    pub fn powi(self, n: i8) -> Self {
        let dimension = self.dimension.powi(n);
        self.raised(n, dimension)
    }

    /// [`powi`](Self::powi) for exponents read from text.
    pub fn checked_powi(self, n: i8, whole: &str) -> PhysicsResult<Self> {
        let dimension = self
            .dimension
            .checked_powi(n)
            .ok_or_else(|| exponent_out_of_range(whole))?;
        Ok(self.raised(n, dimension))
    }

    fn raised(self, n: i8, dimension: Dimension) -> Self {
        let symbol = if n == 1 || self.symbol.is_empty() {
            self.symbol
        } else if is_compound(&self.symbol) {
            Cow::Owned(format!("({})^{}", self.symbol, n))
        } else {
            Cow::Owned(format!("{}^{}", self.symbol, n))
        };
        Self {
            symbol,
            factor: self.factor.powi(i32::from(n)),
            dimension,
        }
    }

    /// Product of two parsed units, failing if an exponent overflows.
    pub fn checked_mul(self, rhs: Self, whole: &str) -> PhysicsResult<Self> {
        self.dimension
            .checked_times(rhs.dimension)
            .ok_or_else(|| exponent_out_of_range(whole))?;
        Ok(self * rhs)
    }

    /// Quotient of two parsed units, failing if an exponent overflows.
    pub fn checked_div(self, rhs: Self, whole: &str) -> PhysicsResult<Self> {
        self.dimension
            .checked_per(rhs.dimension)
            .ok_or_else(|| exponent_out_of_range(whole))?;
        Ok(self / rhs)
    }

    /// Parse a unit expression such as `kg/m^3`, `g*cm^-3` or `1/s`.
    ///
    /// Factors are separated by `*` or `/`; a `/` divides by the single factor
    /// that follows it. A factor may carry an integer power (`m^3`), and a
    /// trailing 2 or 3 on a known unit is read as a power (`cm3`).
    /// An empty expression is dimensionless.
    pub fn parse(text: &str) -> PhysicsResult<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(Self::dimensionless());
        }

        let mut result: Option<Unit> = None;
        let mut divide = false;
        let mut token = String::new();

        for c in text.chars().chain(std::iter::once('*')) {
            match c {
                '*' | '/' => {
                    let factor = parse_factor(token.trim(), text)?;
                    result = Some(match result {
                        None if divide => Unit::dimensionless().checked_div(factor, text)?,
                        None => factor,
                        Some(acc) if divide => acc.checked_div(factor, text)?,
                        Some(acc) => acc.checked_mul(factor, text)?,
                    });
                    divide = c == '/';
                    token.clear();
                }
                c if c.is_whitespace() => {}
                c => token.push(c),
            }
        }

        // Keep the caller's spelling for display
        let mut unit = result.unwrap_or_else(Unit::dimensionless);
        unit.symbol = Cow::Owned(text.split_whitespace().collect());
        Ok(unit)
    }
}

fn exponent_out_of_range(whole: &str) -> PhysicsError {
    PhysicsError::Parse(format!("Exponent out of range in '{whole}'"))
}

fn is_compound(symbol: &str) -> bool {
    symbol.contains(['*', '/', '^'])
}

fn parse_factor(token: &str, whole: &str) -> PhysicsResult<Unit> {
    if token.is_empty() {
        return Err(PhysicsError::Parse(format!(
            "Missing unit factor in '{whole}'"
        )));
    }
    if token == "1" {
        return Ok(Unit::dimensionless());
    }

    if let Some((base, exponent)) = token.split_once('^') {
        let exponent = exponent
            .trim_start_matches('(')
            .trim_end_matches(')')
            .parse::<i8>()
            .map_err(|_| {
                PhysicsError::Parse(format!("Invalid exponent '{exponent}' in '{whole}'"))
            })?;
        let unit = lookup(base).ok_or_else(|| PhysicsError::UnknownUnit(base.to_string()))?;
        return unit.checked_powi(exponent, whole);
    }

    if let Some(unit) = lookup(token) {
        return Ok(unit);
    }

    // cm3, m2
    for (suffix, exponent) in [('2', 2), ('3', 3)] {
        if let Some(unit) = token.strip_suffix(suffix).and_then(lookup) {
            return Ok(unit.powi(exponent));
        }
    }

    Err(PhysicsError::UnknownUnit(token.to_string()))
}

/// Aliases, scale factor to SI, dimension. The first alias is the display symbol.
type UnitEntry = (&'static [&'static str], f64, Dimension);

static REGISTRY: &[UnitEntry] = &[
    // Mass
    (&["kg", "kilogram", "kilograms"], 1.0, dimension::MASS),
    (&["g", "gram", "grams"], 1e-3, dimension::MASS),
    (&["mg", "milligram", "milligrams"], 1e-6, dimension::MASS),
    (&["t", "tonne", "tonnes"], 1e3, dimension::MASS),
    (&["lb", "pound", "pounds"], 0.453_592_37, dimension::MASS),
    // Length
    (&["m", "meter", "meters", "metre", "metres"], 1.0, dimension::LENGTH),
    (&["km", "kilometer", "kilometers"], 1e3, dimension::LENGTH),
    (&["cm", "centimeter", "centimeters"], 1e-2, dimension::LENGTH),
    (&["mm", "millimeter", "millimeters"], 1e-3, dimension::LENGTH),
    (&["um", "µm", "micrometer", "micrometers"], 1e-6, dimension::LENGTH),
    (&["nm", "nanometer", "nanometers"], 1e-9, dimension::LENGTH),
    (&["in", "inch", "inches"], 0.0254, dimension::LENGTH),
    (&["ft", "foot", "feet"], 0.3048, dimension::LENGTH),
    // Time
    (&["s", "sec", "second", "seconds"], 1.0, dimension::TIME),
    (&["ms", "millisecond", "milliseconds"], 1e-3, dimension::TIME),
    (&["min", "minute", "minutes"], 60.0, dimension::TIME),
    (&["h", "hr", "hour", "hours"], 3600.0, dimension::TIME),
    // Volume
    (&["L", "l", "liter", "liters", "litre", "litres"], 1e-3, dimension::VOLUME),
    (&["mL", "ml", "milliliter", "milliliters"], 1e-6, dimension::VOLUME),
    // Remaining base units
    (&["A", "ampere", "amperes"], 1.0, dimension::CURRENT),
    (&["K", "kelvin"], 1.0, dimension::TEMPERATURE),
    (&["mol", "mole", "moles"], 1.0, dimension::AMOUNT),
    (&["cd", "candela"], 1.0, dimension::LUMINOUS_INTENSITY),
    // Derived
    (&["N", "newton", "newtons"], 1.0, dimension::FORCE),
    (&["J", "joule", "joules"], 1.0, dimension::ENERGY),
    (&["W", "watt", "watts"], 1.0, dimension::POWER),
    (&["Pa", "pascal", "pascals"], 1.0, dimension::PRESSURE),
    (&["Hz", "hertz"], 1.0, dimension::FREQUENCY),
];

/// Look up a single named unit by symbol or name.
pub fn lookup(name: &str) -> Option<Unit> {
    REGISTRY
        .iter()
        .find(|(aliases, _, _)| aliases.contains(&name))
        .map(|(aliases, factor, dimension)| Unit::named(aliases[0], *factor, *dimension))
}

pub const KILOGRAM: Unit = Unit::named("kg", 1.0, dimension::MASS);
pub const METER: Unit = Unit::named("m", 1.0, dimension::LENGTH);
pub const SECOND: Unit = Unit::named("s", 1.0, dimension::TIME);
pub const GRAM: Unit = Unit::named("g", 1e-3, dimension::MASS);
pub const CENTIMETER: Unit = Unit::named("cm", 1e-2, dimension::LENGTH);
pub const LITER: Unit = Unit::named("L", 1e-3, dimension::VOLUME);

impl ops::Mul for Unit {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let symbol = match (self.symbol.is_empty(), rhs.symbol.is_empty()) {
            (true, _) => rhs.symbol,
            (false, true) => self.symbol,
            (false, false) => Cow::Owned(format!("{}*{}", self.symbol, rhs.symbol)),
        };
        Self {
            symbol,
            factor: self.factor * rhs.factor,
            dimension: self.dimension * rhs.dimension,
        }
    }
}

impl ops::Div for Unit {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        let numerator: &str = if self.symbol.is_empty() {
            "1"
        } else {
            &self.symbol
        };
        let symbol = if rhs.symbol.is_empty() {
            self.symbol.to_string()
        } else if rhs.symbol.contains(['*', '/']) {
            format!("{numerator}/({})", rhs.symbol)
        } else {
            format!("{numerator}/{}", rhs.symbol)
        };
        Self {
            symbol: Cow::Owned(symbol),
            factor: self.factor / rhs.factor,
            dimension: self.dimension / rhs.dimension,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol)
    }
}
