//! Physical dimensions
//!
//! A dimension is a product of integer powers of the seven SI base
//! dimensions, e.g. density is `mass^1 * length^-3`. Dimensions are plain
//! `Copy` values and every constructor is a `const fn`, so law modules can
//! declare their symbols as constants.

use std::{fmt, ops};

/// One of the SI base dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseDimension {
    /// Base unit is 'kilogram'
    Mass,
    /// Base unit is 'meter'
    Length,
    /// Base unit is 'second'
    Time,
    /// Base unit is 'ampere'
    Current,
    /// Base unit is 'kelvin'
    Temperature,
    /// Base unit is 'mole'
    Amount,
    /// Base unit is 'candela'
    LuminousIntensity,
}

const BASE_COUNT: usize = 7;

impl BaseDimension {
    pub const ALL: [BaseDimension; BASE_COUNT] = [
        BaseDimension::Mass,
        BaseDimension::Length,
        BaseDimension::Time,
        BaseDimension::Current,
        BaseDimension::Temperature,
        BaseDimension::Amount,
        BaseDimension::LuminousIntensity,
    ];

    const fn index(self) -> usize {
        self as usize
    }

    /// Lower-case name used when displaying a dimension
    pub fn name(self) -> &'static str {
        match self {
            BaseDimension::Mass => "mass",
            BaseDimension::Length => "length",
            BaseDimension::Time => "time",
            BaseDimension::Current => "current",
            BaseDimension::Temperature => "temperature",
            BaseDimension::Amount => "amount",
            BaseDimension::LuminousIntensity => "luminous_intensity",
        }
    }

    /// Symbol of the coherent SI unit for this dimension
    pub fn si_unit(self) -> &'static str {
        match self {
            BaseDimension::Mass => "kg",
            BaseDimension::Length => "m",
            BaseDimension::Time => "s",
            BaseDimension::Current => "A",
            BaseDimension::Temperature => "K",
            BaseDimension::Amount => "mol",
            BaseDimension::LuminousIntensity => "cd",
        }
    }
}

/// Exponents of each base dimension, indexed in `BaseDimension::ALL` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dimension {
    exponents: [i8; BASE_COUNT],
}

impl Dimension {
    pub const DIMENSIONLESS: Self = Self {
        exponents: [0; BASE_COUNT],
    };

    /// The dimension of a single base quantity raised to the first power.
    #[must_use]
    pub const fn base(base: BaseDimension) -> Self {
        let mut exponents = [0; BASE_COUNT];
        exponents[base.index()] = 1;
        Self { exponents }
    }

    /// Product of two dimensions (exponents are added).
    #[must_use]
    pub const fn times(self, other: Self) -> Self {
        let mut exponents = self.exponents;
        let mut i = 0;
        while i < BASE_COUNT {
            exponents[i] += other.exponents[i];
            i += 1;
        }
        Self { exponents }
    }

    /// Quotient of two dimensions (exponents are subtracted).
    #[must_use]
    pub const fn per(self, other: Self) -> Self {
        self.times(other.powi(-1))
    }

    #[must_use]
    pub const fn powi(self, n: i8) -> Self {
        let mut exponents = self.exponents;
        let mut i = 0;
        while i < BASE_COUNT {
            exponents[i] *= n;
            i += 1;
        }
        Self { exponents }
    }

    /// Like [`times`](Self::times), but `None` if an exponent leaves the `i8` range.
    #[must_use]
    pub fn checked_times(self, other: Self) -> Option<Self> {
        let mut exponents = self.exponents;
        for (exponent, rhs) in exponents.iter_mut().zip(other.exponents) {
            *exponent = exponent.checked_add(rhs)?;
        }
        Some(Self { exponents })
    }

    #[must_use]
    pub fn checked_per(self, other: Self) -> Option<Self> {
        self.checked_times(other.checked_powi(-1)?)
    }

    #[must_use]
    pub fn checked_powi(self, n: i8) -> Option<Self> {
        let mut exponents = self.exponents;
        for exponent in &mut exponents {
            *exponent = exponent.checked_mul(n)?;
        }
        Some(Self { exponents })
    }

    #[must_use]
    pub const fn exponent(self, base: BaseDimension) -> i8 {
        self.exponents[base.index()]
    }

    #[must_use]
    pub const fn is_dimensionless(self) -> bool {
        let mut i = 0;
        while i < BASE_COUNT {
            if self.exponents[i] != 0 {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Render the dimension in coherent SI units, e.g. `kg/m^3`.
    ///
    /// Returns an empty string for dimensionless values.
    pub fn si_unit_string(&self) -> String {
        if self.is_dimensionless() {
            return String::new();
        }
        self.render(BaseDimension::si_unit)
    }

    fn render(&self, label: fn(BaseDimension) -> &'static str) -> String {
        let factor = |base: BaseDimension, exponent: i8| {
            if exponent == 1 {
                label(base).to_string()
            } else {
                format!("{}^{}", label(base), exponent)
            }
        };

        let numerator: Vec<String> = BaseDimension::ALL
            .iter()
            .filter(|base| self.exponent(**base) > 0)
            .map(|base| factor(*base, self.exponent(*base)))
            .collect();
        let denominator: Vec<String> = BaseDimension::ALL
            .iter()
            .filter(|base| self.exponent(**base) < 0)
            .map(|base| factor(*base, -self.exponent(*base)))
            .collect();

        let mut out = if numerator.is_empty() {
            "1".to_string()
        } else {
            numerator.join("*")
        };
        for part in denominator {
            out.push('/');
            out.push_str(&part);
        }
        out
    }
}

impl ops::Mul for Dimension {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.times(rhs)
    }
}

impl ops::Div for Dimension {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        self.per(rhs)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            return write!(f, "dimensionless");
        }
        write!(f, "{}", self.render(BaseDimension::name))
    }
}

pub const DIMENSIONLESS: Dimension = Dimension::DIMENSIONLESS;
pub const MASS: Dimension = Dimension::base(BaseDimension::Mass);
pub const LENGTH: Dimension = Dimension::base(BaseDimension::Length);
pub const TIME: Dimension = Dimension::base(BaseDimension::Time);
pub const CURRENT: Dimension = Dimension::base(BaseDimension::Current);
pub const TEMPERATURE: Dimension = Dimension::base(BaseDimension::Temperature);
pub const AMOUNT: Dimension = Dimension::base(BaseDimension::Amount);
pub const LUMINOUS_INTENSITY: Dimension = Dimension::base(BaseDimension::LuminousIntensity);

pub const AREA: Dimension = LENGTH.powi(2);
pub const VOLUME: Dimension = LENGTH.powi(3);
pub const DENSITY: Dimension = MASS.per(VOLUME);
pub const FREQUENCY: Dimension = TIME.powi(-1);
pub const VELOCITY: Dimension = LENGTH.per(TIME);
pub const ACCELERATION: Dimension = VELOCITY.per(TIME);
pub const FORCE: Dimension = MASS.times(ACCELERATION);
pub const ENERGY: Dimension = FORCE.times(LENGTH);
pub const POWER: Dimension = ENERGY.per(TIME);
pub const PRESSURE: Dimension = FORCE.per(AREA);
