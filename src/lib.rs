//! physlaws - a catalog of physics laws with dimension-checked calculators
//!
//! Each law declares its symbols, one symbolic equation and a calculator that
//! solves the equation for a target symbol, substitutes quantities with units
//! and returns a dimensioned result.
//!
//! # Features
//!
//! - SI dimensions, units and unit-expression parsing (`kg/m^3`, `g*cm^-3`)
//! - Input and output dimension validation around every calculation
//! - Closed-form solutions for every symbol of every law
//! - YAML calculation sheets for batch runs
//!
//! # Example
//!
//! ```
//! use physlaws::core::Quantity;
//! use physlaws::laws::definitions::density_from_mass_volume::calculate_density;
//!
//! let mass = Quantity::parse("2 kg")?;
//! let volume = Quantity::parse("1 m^3")?;
//! let density = calculate_density(&mass, &volume)?;
//!
//! assert_eq!(density.to_string(), "2 kg/m^3");
//! # Ok::<(), physlaws::error::PhysicsError>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;
pub mod laws;
pub mod parser;
pub mod types;

// Re-export commonly used types
pub use core::{Dimension, Equation, Expr, Quantity, Symbol, Unit};
pub use error::{PhysicsError, PhysicsResult};
pub use laws::{catalog, find_law, Law};
pub use types::{CalculationReport, CalculationRequest, CalculationSheet};
