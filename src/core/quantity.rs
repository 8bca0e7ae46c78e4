//! Numeric values carrying a physical dimension
//!
//! Values are normalized to coherent SI units when a quantity is created, so
//! arithmetic never has to reconcile scale factors. Conversion back to a
//! display unit happens only at the edges (`to_unit`, `format_in`).

use super::dimension::{self, Dimension};
use super::units::Unit;
use crate::error::{PhysicsError, PhysicsResult};
use regex::Regex;
use std::sync::LazyLock;
use std::{fmt, ops};

static QUANTITY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([-+]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][-+]?\d+)?)\s*(.*?)\s*$")
        .expect("quantity pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity {
    value: f64,
    dimension: Dimension,
}

impl Quantity {
    /// Create a quantity from a value already expressed in SI units.
    #[must_use]
    pub const fn new(value: f64, dimension: Dimension) -> Self {
        Self { value, dimension }
    }

    #[must_use]
    pub fn in_unit(value: f64, unit: &Unit) -> Self {
        Self {
            value: value * unit.factor(),
            dimension: unit.dimension(),
        }
    }

    #[must_use]
    pub const fn dimensionless(value: f64) -> Self {
        Self::new(value, dimension::DIMENSIONLESS)
    }

    /// Parse text like `2 kg`, `1.5e-3 m^3` or `0.25` (dimensionless).
    pub fn parse(text: &str) -> PhysicsResult<Self> {
        let captures = QUANTITY_PATTERN.captures(text).ok_or_else(|| {
            PhysicsError::Parse(format!("Expected '<number> <unit>', got '{text}'"))
        })?;
        let value = captures[1]
            .parse::<f64>()
            .map_err(|e| PhysicsError::Parse(format!("Invalid number in '{text}': {e}")))?;
        let unit = Unit::parse(&captures[2])?;
        Ok(Self::in_unit(value, &unit))
    }

    /// The magnitude in SI units
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub const fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// The magnitude expressed in `unit`.
    pub fn to_unit(&self, unit: &Unit) -> PhysicsResult<f64> {
        if self.dimension != unit.dimension() {
            return Err(PhysicsError::IncompatibleUnits {
                left: self.dimension,
                right: unit.dimension(),
            });
        }
        Ok(self.value / unit.factor())
    }

    pub fn format_in(&self, unit: &Unit) -> PhysicsResult<String> {
        let value = format_number(self.to_unit(unit)?);
        Ok(join_value_and_unit(&value, unit.symbol()))
    }

    pub fn checked_add(self, rhs: Self) -> PhysicsResult<Self> {
        if self.dimension != rhs.dimension {
            return Err(PhysicsError::IncompatibleUnits {
                left: self.dimension,
                right: rhs.dimension,
            });
        }
        Ok(Self::new(self.value + rhs.value, self.dimension))
    }

    pub fn checked_sub(self, rhs: Self) -> PhysicsResult<Self> {
        self.checked_add(-rhs)
    }

    #[must_use]
    pub fn powi(self, n: i8) -> Self {
        Self::new(self.value.powi(i32::from(n)), self.dimension.powi(n))
    }

    pub fn is_zero(&self) -> bool {
        self.value == 0.0
    }

    /// Equal dimensions and values within a relative tolerance.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, rel_tol: f64) -> bool {
        self.dimension == other.dimension
            && (self.value - other.value).abs()
                <= rel_tol * self.value.abs().max(other.value.abs())
    }
}

impl ops::Mul for Quantity {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(self.value * rhs.value, self.dimension * rhs.dimension)
    }
}

impl ops::Div for Quantity {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self::new(self.value / rhs.value, self.dimension / rhs.dimension)
    }
}

impl ops::Neg for Quantity {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.value, self.dimension)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = format_number(self.value);
        f.write_str(&join_value_and_unit(
            &value,
            &self.dimension.si_unit_string(),
        ))
    }
}

fn join_value_and_unit(value: &str, unit: &str) -> String {
    if unit.is_empty() {
        value.to_string()
    } else {
        format!("{value} {unit}")
    }
}

/// Format a number for display, removing unnecessary decimal places
///
/// Very large or very small magnitudes switch to scientific notation.
pub fn format_number(n: f64) -> String {
    let magnitude = n.abs();
    if n != 0.0 && !(1e-4..1e9).contains(&magnitude) {
        return format!("{n:e}");
    }
    let rounded = format!("{n:.9}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::units;

    #[test]
    fn test_parse_normalizes_to_si() {
        let q = Quantity::parse("2 kg").unwrap();
        assert_eq!(q.value(), 2.0);
        assert_eq!(q.dimension(), dimension::MASS);

        let q = Quantity::parse("500 g").unwrap();
        assert!((q.value() - 0.5).abs() < 1e-12);

        let q = Quantity::parse("1.5e-3 m^3").unwrap();
        assert!((q.value() - 1.5e-3).abs() < 1e-15);
        assert_eq!(q.dimension(), dimension::VOLUME);
    }

    #[test]
    fn test_parse_dimensionless_and_invalid() {
        let q = Quantity::parse("0.25").unwrap();
        assert!(q.dimension().is_dimensionless());

        assert!(matches!(Quantity::parse("kg"), Err(PhysicsError::Parse(_))));
        assert!(matches!(
            Quantity::parse("3 parsecs"),
            Err(PhysicsError::UnknownUnit(_))
        ));
    }

    #[test]
    fn test_liter_is_cubic_decimeter() {
        let liter = Quantity::parse("1 L").unwrap();
        let expected = Quantity::parse("0.001 m^3").unwrap();
        assert!(liter.approx_eq(&expected, 1e-12));
    }

    #[test]
    fn test_to_unit_converts_and_checks_dimension() {
        let density = Quantity::new(1000.0, dimension::DENSITY);
        let per_cc = units::GRAM / units::CENTIMETER.powi(3);
        assert!((density.to_unit(&per_cc).unwrap() - 1.0).abs() < 1e-12);
        assert!(matches!(
            density.to_unit(&units::METER),
            Err(PhysicsError::IncompatibleUnits { .. })
        ));
    }

    #[test]
    fn test_arithmetic_tracks_dimensions() {
        let mass = Quantity::new(2.0, dimension::MASS);
        let volume = Quantity::new(4.0, dimension::VOLUME);
        let density = mass / volume;
        assert_eq!(density.dimension(), dimension::DENSITY);
        assert_eq!(density.value(), 0.5);
        assert!(mass.checked_add(volume).is_err());
        assert_eq!(mass.checked_add(mass).unwrap().value(), 4.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Quantity::new(2.0, dimension::DENSITY).to_string(), "2 kg/m^3");
        assert_eq!(Quantity::dimensionless(0.5).to_string(), "0.5");
        assert_eq!(format_number(0.1 + 0.2), "0.3");
        assert_eq!(format_number(1.5e-9), "1.5e-9");
    }
}
