//! Dimension validation for law calculations
//!
//! Calculators check every input against its symbol before solving and the
//! result against the target symbol afterwards. [`LawValidator`] checks a
//! whole law: both sides of its equation, and every hard-coded solution.

use super::{Bindings, Expr, Quantity, Symbol};
use crate::error::{PhysicsError, PhysicsResult};
use crate::laws::Law;

/// Fails unless `quantity` has the dimension declared by `symbol`.
pub fn validate_input_symbol(symbol: &Symbol, quantity: &Quantity) -> PhysicsResult<()> {
    if quantity.dimension() == symbol.dimension() {
        Ok(())
    } else {
        Err(PhysicsError::InputDimension {
            symbol: symbol.name().to_string(),
            expected: symbol.dimension(),
            found: quantity.dimension(),
        })
    }
}

pub fn validate_input_symbols(inputs: &[(Symbol, &Quantity)]) -> PhysicsResult<()> {
    inputs
        .iter()
        .try_for_each(|(symbol, quantity)| validate_input_symbol(symbol, quantity))
}

/// Passes `quantity` through if it has the dimension declared by `symbol`.
pub fn validate_output_symbol(symbol: &Symbol, quantity: Quantity) -> PhysicsResult<Quantity> {
    if quantity.dimension() == symbol.dimension() {
        Ok(quantity)
    } else {
        Err(PhysicsError::OutputDimension {
            symbol: symbol.name().to_string(),
            expected: symbol.dimension(),
            found: quantity.dimension(),
        })
    }
}

/// A law consistency finding
#[derive(Debug, Clone)]
pub struct UnitWarning {
    /// `law` or `law.symbol`
    pub location: String,
    /// The equation or solved form with the issue
    pub formula: String,
    pub message: String,
    pub severity: WarningSeverity,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WarningSeverity {
    Warning,
    Error,
}

impl std::fmt::Display for UnitWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match self.severity {
            WarningSeverity::Warning => "⚠️  Warning",
            WarningSeverity::Error => "❌ Error",
        };
        write!(
            f,
            "{}: {} - {} ({})",
            prefix, self.location, self.message, self.formula
        )
    }
}

/// Checks a law for dimensional consistency
pub struct LawValidator<'a> {
    law: &'a dyn Law,
}

impl<'a> LawValidator<'a> {
    pub fn new(law: &'a dyn Law) -> Self {
        Self { law }
    }

    /// Validate the equation and every solved form, returning all findings
    pub fn validate(&self) -> Vec<UnitWarning> {
        let mut warnings = Vec::new();
        let equation = self.law.equation();
        let formula = equation.to_string();

        if let Err(e) = equation.dimension() {
            warnings.push(self.error(self.law.name().to_string(), &formula, e.to_string()));
        }

        let used = equation.free_symbols();
        for symbol in self.law.symbols() {
            if !used.contains(symbol) {
                warnings.push(UnitWarning {
                    location: self.location(symbol),
                    formula: formula.clone(),
                    message: "Declared symbol does not appear in the equation".to_string(),
                    severity: WarningSeverity::Warning,
                });
            }
        }
        for symbol in &used {
            if !self.law.symbols().contains(symbol) {
                warnings.push(self.error(
                    self.location(symbol),
                    &formula,
                    "Equation uses an undeclared symbol".to_string(),
                ));
            }
        }

        for symbol in self.law.symbols() {
            if let Some(warning) = self.validate_solution(symbol) {
                warnings.push(warning);
            }
        }

        warnings
    }

    /// Check one solved form: it must be free of its target, have the target's
    /// dimension, and satisfy the equation at a sample point.
    fn validate_solution(&self, target: &Symbol) -> Option<UnitWarning> {
        let location = self.location(target);
        let solved = match self.law.solve_for(target) {
            Ok(solved) => solved,
            Err(e) => return Some(self.error(location, "", e.to_string())),
        };
        let formula = format!("{target} = {solved}");

        if solved.free_symbols().contains(target) {
            return Some(self.error(
                location,
                &formula,
                "Solution still depends on its target".to_string(),
            ));
        }

        match solved.dimension() {
            Ok(found) if found == target.dimension() => {}
            Ok(found) => {
                return Some(self.error(
                    location,
                    &formula,
                    format!(
                        "Solution has dimension {found}, expected {}",
                        target.dimension()
                    ),
                ));
            }
            Err(e) => return Some(self.error(location, &formula, e.to_string())),
        }

        match self.solution_satisfies_equation(target, &solved) {
            Ok(true) => None,
            Ok(false) => Some(self.error(
                location,
                &formula,
                "Solution does not satisfy the equation".to_string(),
            )),
            Err(e) => Some(self.error(location, &formula, e.to_string())),
        }
    }

    fn solution_satisfies_equation(
        &self,
        target: &Symbol,
        solved: &Expr,
    ) -> PhysicsResult<bool> {
        // Distinct sample values keep denominators like (f - F) away from zero
        let mut bindings: Bindings = self
            .law
            .symbols()
            .iter()
            .zip(2u8..)
            .filter(|(symbol, _)| *symbol != target)
            .map(|(symbol, sample)| {
                (*symbol, Quantity::new(f64::from(sample), symbol.dimension()))
            })
            .collect();
        let value = solved.subs(&bindings).to_quantity()?;
        bindings.insert(*target, value);
        self.law.equation().holds(&bindings, 1e-9)
    }

    fn location(&self, symbol: &Symbol) -> String {
        format!("{}.{}", self.law.name(), symbol.name())
    }

    fn error(&self, location: String, formula: &str, message: String) -> UnitWarning {
        UnitWarning {
            location,
            formula: formula.to_string(),
            message,
            severity: WarningSeverity::Error,
        }
    }
}

/// True if any finding is an error
pub fn has_errors(warnings: &[UnitWarning]) -> bool {
    warnings
        .iter()
        .any(|w| w.severity == WarningSeverity::Error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dimension;
    use crate::core::Equation;
    use std::sync::LazyLock;

    const X: Symbol = Symbol::new("x", dimension::LENGTH);
    const T: Symbol = Symbol::new("t", dimension::TIME);
    const V: Symbol = Symbol::new("v", dimension::VELOCITY);
    static SYMBOLS: [Symbol; 3] = [V, X, T];
    static SPEED: LazyLock<Equation> = LazyLock::new(|| Equation::new(V, Expr::from(X) / T));

    /// Deliberately wrong solution for `t`
    struct BrokenSpeed;

    impl Law for BrokenSpeed {
        fn name(&self) -> &'static str {
            "broken_speed"
        }

        fn description(&self) -> &'static str {
            "Speed law with a wrong solved form"
        }

        fn symbols(&self) -> &'static [Symbol] {
            &SYMBOLS
        }

        fn output(&self) -> Symbol {
            V
        }

        fn equation(&self) -> &'static Equation {
            &SPEED
        }

        fn solve_for(&self, target: &Symbol) -> PhysicsResult<Expr> {
            match *target {
                V => Ok(Expr::from(X) / T),
                X => Ok(Expr::from(V) * T),
                T => Ok(Expr::from(V) / X),
                _ => Err(self.unknown_symbol(target.name())),
            }
        }
    }

    #[test]
    fn test_validate_input_symbol() {
        let length = Quantity::new(1.0, dimension::LENGTH);
        assert!(validate_input_symbol(&X, &length).is_ok());
        let err = validate_input_symbol(&T, &length).unwrap_err();
        assert!(matches!(err, PhysicsError::InputDimension { ref symbol, .. } if symbol == "t"));
    }

    #[test]
    fn test_validate_input_symbols_stops_at_first_mismatch() {
        let length = Quantity::new(1.0, dimension::LENGTH);
        let time = Quantity::new(1.0, dimension::TIME);
        assert!(validate_input_symbols(&[(X, &length), (T, &time)]).is_ok());
        assert!(validate_input_symbols(&[(X, &length), (T, &length)]).is_err());
    }

    #[test]
    fn test_validate_output_symbol() {
        let speed = Quantity::new(3.0, dimension::VELOCITY);
        assert_eq!(validate_output_symbol(&V, speed).unwrap(), speed);
        assert!(matches!(
            validate_output_symbol(&X, speed),
            Err(PhysicsError::OutputDimension { .. })
        ));
    }

    #[test]
    fn test_law_validator_reports_wrong_solution() {
        let warnings = LawValidator::new(&BrokenSpeed).validate();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].location, "broken_speed.t");
        assert_eq!(warnings[0].severity, WarningSeverity::Error);
        assert!(warnings[0].message.contains("dimension"));
        assert!(has_errors(&warnings));
    }

    #[test]
    fn test_warning_display() {
        let warning = UnitWarning {
            location: "law.x".to_string(),
            formula: "x = v*t".to_string(),
            message: "problem".to_string(),
            severity: WarningSeverity::Warning,
        };
        assert_eq!(warning.to_string(), "⚠️  Warning: law.x - problem (x = v*t)");
    }
}
