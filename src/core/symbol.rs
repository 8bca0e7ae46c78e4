//! Named placeholders for physical quantities

use super::Dimension;
use std::fmt;

/// A named physical quantity with the dimension every value bound to it must have.
///
/// Symbols are declared as constants by each law module and compared by
/// name and dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol {
    name: &'static str,
    dimension: Dimension,
}

impl Symbol {
    #[must_use]
    pub const fn new(name: &'static str, dimension: Dimension) -> Self {
        Self { name, dimension }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn dimension(&self) -> Dimension {
        self.dimension
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
