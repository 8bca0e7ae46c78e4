//! Symbolic expressions and equations over [`Symbol`]s
//!
//! Expressions are small trees built with the usual arithmetic operators.
//! Binding quantities to symbols with [`Expr::subs`] and then calling
//! [`Expr::to_quantity`] evaluates an expression with full dimension tracking.

use super::dimension::{self, Dimension};
use super::printer;
use super::{Quantity, Symbol};
use crate::error::{PhysicsError, PhysicsResult};
use std::collections::HashMap;
use std::{fmt, ops};

/// Quantities bound to symbols for substitution
pub type Bindings = HashMap<Symbol, Quantity>;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A dimensionless constant
    Number(f64),
    Symbol(Symbol),
    /// A concrete value substituted for a symbol
    Quantity(Quantity),
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Pow(Box<Expr>, i8),
    Neg(Box<Expr>),
}

impl Expr {
    #[must_use]
    pub fn boxed(self) -> Box<Self> {
        Box::new(self)
    }

    /// `1 / self`
    #[must_use]
    pub fn recip(self) -> Self {
        Expr::Div(Expr::Number(1.0).boxed(), self.boxed())
    }

    #[must_use]
    pub fn powi(self, exponent: i8) -> Self {
        Expr::Pow(self.boxed(), exponent)
    }

    /// Symbols that still appear in the expression, in first-seen order.
    pub fn free_symbols(&self) -> Vec<Symbol> {
        fn collect(expr: &Expr, out: &mut Vec<Symbol>) {
            match expr {
                Expr::Symbol(symbol) => {
                    if !out.contains(symbol) {
                        out.push(*symbol);
                    }
                }
                Expr::Number(_) | Expr::Quantity(_) => {}
                Expr::Add(a, b) | Expr::Sub(a, b) | Expr::Mul(a, b) | Expr::Div(a, b) => {
                    collect(a, out);
                    collect(b, out);
                }
                Expr::Pow(a, _) | Expr::Neg(a) => collect(a, out),
            }
        }

        let mut out = Vec::new();
        collect(self, &mut out);
        out
    }

    /// Replace every bound symbol with its quantity. Unbound symbols are kept.
    #[must_use]
    pub fn subs(&self, bindings: &Bindings) -> Self {
        let sub = |e: &Expr| e.subs(bindings).boxed();
        match self {
            Expr::Symbol(symbol) => bindings
                .get(symbol)
                .map_or(Expr::Symbol(*symbol), |q| Expr::Quantity(*q)),
            Expr::Number(_) | Expr::Quantity(_) => self.clone(),
            Expr::Add(a, b) => Expr::Add(sub(a), sub(b)),
            Expr::Sub(a, b) => Expr::Sub(sub(a), sub(b)),
            Expr::Mul(a, b) => Expr::Mul(sub(a), sub(b)),
            Expr::Div(a, b) => Expr::Div(sub(a), sub(b)),
            Expr::Pow(a, n) => Expr::Pow(sub(a), *n),
            Expr::Neg(a) => Expr::Neg(sub(a)),
        }
    }

    /// Infer the dimension of the expression without evaluating it.
    ///
    /// Fails when a sum or difference mixes dimensions.
    pub fn dimension(&self) -> PhysicsResult<Dimension> {
        match self {
            Expr::Number(_) => Ok(dimension::DIMENSIONLESS),
            Expr::Symbol(symbol) => Ok(symbol.dimension()),
            Expr::Quantity(q) => Ok(q.dimension()),
            Expr::Add(a, b) | Expr::Sub(a, b) => {
                let (left, right) = (a.dimension()?, b.dimension()?);
                if left == right {
                    Ok(left)
                } else {
                    Err(PhysicsError::IncompatibleUnits { left, right })
                }
            }
            Expr::Mul(a, b) => Ok(a.dimension()? * b.dimension()?),
            Expr::Div(a, b) => Ok(a.dimension()? / b.dimension()?),
            Expr::Pow(a, n) => Ok(a.dimension()?.powi(*n)),
            Expr::Neg(a) => a.dimension(),
        }
    }

    /// Evaluate a fully substituted expression to a quantity.
    ///
    /// Fails on unbound symbols, division by zero, dimension mismatches in sums
    /// and non-finite results.
    pub fn to_quantity(&self) -> PhysicsResult<Quantity> {
        let result = self.evaluate()?;
        if result.value().is_finite() {
            Ok(result)
        } else {
            Err(PhysicsError::NonFinite(printer::pretty(self)))
        }
    }

    fn evaluate(&self) -> PhysicsResult<Quantity> {
        match self {
            Expr::Number(n) => Ok(Quantity::dimensionless(*n)),
            Expr::Symbol(symbol) => Err(PhysicsError::UnboundSymbol(symbol.name().to_string())),
            Expr::Quantity(q) => Ok(*q),
            Expr::Add(a, b) => a.evaluate()?.checked_add(b.evaluate()?),
            Expr::Sub(a, b) => a.evaluate()?.checked_sub(b.evaluate()?),
            Expr::Mul(a, b) => Ok(a.evaluate()? * b.evaluate()?),
            Expr::Div(a, b) => {
                let numerator = a.evaluate()?;
                let denominator = b.evaluate()?;
                if denominator.is_zero() {
                    return Err(PhysicsError::DivisionByZero(printer::pretty(self)));
                }
                Ok(numerator / denominator)
            }
            Expr::Pow(a, n) => {
                let base = a.evaluate()?;
                if *n < 0 && base.is_zero() {
                    return Err(PhysicsError::DivisionByZero(printer::pretty(self)));
                }
                Ok(base.powi(*n))
            }
            Expr::Neg(a) => Ok(-a.evaluate()?),
        }
    }
}

impl From<Symbol> for Expr {
    fn from(symbol: Symbol) -> Self {
        Expr::Symbol(symbol)
    }
}

impl From<Quantity> for Expr {
    fn from(quantity: Quantity) -> Self {
        Expr::Quantity(quantity)
    }
}

impl From<f64> for Expr {
    fn from(n: f64) -> Self {
        Expr::Number(n)
    }
}

impl<T: Into<Expr>> ops::Add<T> for Expr {
    type Output = Expr;

    fn add(self, rhs: T) -> Expr {
        Expr::Add(self.boxed(), rhs.into().boxed())
    }
}

impl<T: Into<Expr>> ops::Sub<T> for Expr {
    type Output = Expr;

    fn sub(self, rhs: T) -> Expr {
        Expr::Sub(self.boxed(), rhs.into().boxed())
    }
}

impl<T: Into<Expr>> ops::Mul<T> for Expr {
    type Output = Expr;

    fn mul(self, rhs: T) -> Expr {
        Expr::Mul(self.boxed(), rhs.into().boxed())
    }
}

impl<T: Into<Expr>> ops::Div<T> for Expr {
    type Output = Expr;

    fn div(self, rhs: T) -> Expr {
        Expr::Div(self.boxed(), rhs.into().boxed())
    }
}

impl ops::Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        Expr::Neg(self.boxed())
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&printer::pretty(self))
    }
}

/// `lhs = rhs`
#[derive(Debug, Clone, PartialEq)]
pub struct Equation {
    lhs: Expr,
    rhs: Expr,
}

impl Equation {
    pub fn new(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Self {
        Self {
            lhs: lhs.into(),
            rhs: rhs.into(),
        }
    }

    pub const fn lhs(&self) -> &Expr {
        &self.lhs
    }

    pub const fn rhs(&self) -> &Expr {
        &self.rhs
    }

    /// Symbols on either side, left side first.
    pub fn free_symbols(&self) -> Vec<Symbol> {
        let mut symbols = self.lhs.free_symbols();
        for symbol in self.rhs.free_symbols() {
            if !symbols.contains(&symbol) {
                symbols.push(symbol);
            }
        }
        symbols
    }

    /// The shared dimension of both sides.
    pub fn dimension(&self) -> PhysicsResult<Dimension> {
        let left = self.lhs.dimension()?;
        let right = self.rhs.dimension()?;
        if left == right {
            Ok(left)
        } else {
            Err(PhysicsError::IncompatibleUnits { left, right })
        }
    }

    /// Evaluate both sides with the given bindings and report whether they agree.
    pub fn holds(&self, bindings: &Bindings, rel_tol: f64) -> PhysicsResult<bool> {
        let left = self.lhs.subs(bindings).to_quantity()?;
        let right = self.rhs.subs(bindings).to_quantity()?;
        Ok(left.approx_eq(&right, rel_tol))
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&printer::pretty_equation(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: Symbol = Symbol::new("x", dimension::LENGTH);
    const T: Symbol = Symbol::new("t", dimension::TIME);

    #[test]
    fn test_subs_and_evaluate() {
        let speed = Expr::from(X) / T;
        let bindings = Bindings::from([
            (X, Quantity::new(10.0, dimension::LENGTH)),
            (T, Quantity::new(4.0, dimension::TIME)),
        ]);
        let result = speed.subs(&bindings).to_quantity().unwrap();
        assert_eq!(result.value(), 2.5);
        assert_eq!(result.dimension(), dimension::VELOCITY);
    }

    #[test]
    fn test_unbound_symbol_fails() {
        let expr = Expr::from(X) * 2.0;
        assert!(matches!(
            expr.to_quantity(),
            Err(PhysicsError::UnboundSymbol(name)) if name == "x"
        ));
    }

    #[test]
    fn test_partial_subs_keeps_unbound_symbols() {
        let expr = Expr::from(X) / T;
        let bindings = Bindings::from([(X, Quantity::new(1.0, dimension::LENGTH))]);
        assert_eq!(expr.subs(&bindings).free_symbols(), vec![T]);
    }

    #[test]
    fn test_division_by_zero() {
        let expr = Expr::from(X) / T;
        let bindings = Bindings::from([
            (X, Quantity::new(1.0, dimension::LENGTH)),
            (T, Quantity::new(0.0, dimension::TIME)),
        ]);
        assert!(matches!(
            expr.subs(&bindings).to_quantity(),
            Err(PhysicsError::DivisionByZero(_))
        ));
    }

    #[test]
    fn test_sum_of_mixed_dimensions_fails() {
        let expr = Expr::from(X) + T;
        assert!(matches!(
            expr.dimension(),
            Err(PhysicsError::IncompatibleUnits { .. })
        ));
    }

    #[test]
    fn test_dimension_inference() {
        let expr = (Expr::from(X) * X).recip();
        assert_eq!(expr.dimension().unwrap(), dimension::AREA.powi(-1));
        assert_eq!(Expr::from(X).powi(3).dimension().unwrap(), dimension::VOLUME);
    }

    #[test]
    fn test_equation_holds() {
        let equation = Equation::new(Expr::from(X) * 2.0, Expr::from(X) + X);
        let bindings = Bindings::from([(X, Quantity::new(3.0, dimension::LENGTH))]);
        assert!(equation.holds(&bindings, 1e-12).unwrap());
        assert_eq!(equation.dimension().unwrap(), dimension::LENGTH);
        assert_eq!(equation.free_symbols(), vec![X]);
    }
}
