//! Dimensions, units, quantities and the symbolic layer shared by every law

pub mod calculator;
pub mod dimension;
pub mod expr;
pub mod printer;
pub mod quantity;
pub mod symbol;
pub mod unit_validator;
pub mod units;

pub use calculator::Calculator;
pub use dimension::Dimension;
pub use expr::{Bindings, Equation, Expr};
pub use quantity::Quantity;
pub use symbol::Symbol;
pub use units::Unit;
