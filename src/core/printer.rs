//! Plain ASCII rendering of expressions and equations
//!
//! Output is linear, with parentheses only where precedence requires them:
//! `1/focus_distance = 1/distance_to_object + 1/distance_to_image`.

use super::expr::{Equation, Expr};
use super::quantity::format_number;

pub fn pretty(expr: &Expr) -> String {
    fn pp(ctx: u8, expr: &Expr) -> String {
        match expr {
            Expr::Symbol(symbol) => symbol.name().to_string(),
            Expr::Number(n) if *n < 0.0 => bracket(ctx, 3, format_number(*n)),
            Expr::Number(n) => format_number(*n),
            Expr::Quantity(q) => {
                let body = q.to_string();
                if q.dimension().is_dimensionless() && q.value() >= 0.0 {
                    body
                } else {
                    bracket(ctx, 1, body)
                }
            }

            Expr::Add(a, b) => bracket(ctx, 1, format!("{} + {}", pp(1, a), pp(2, b))),
            Expr::Sub(a, b) => bracket(ctx, 1, format!("{} - {}", pp(1, a), pp(2, b))),
            Expr::Mul(a, b) => bracket(ctx, 2, format!("{}*{}", pp(2, a), pp(2, b))),
            Expr::Div(a, b) => bracket(ctx, 2, format!("{}/{}", pp(2, a), pp(3, b))),

            Expr::Pow(a, n) if *n < 0 => bracket(ctx, 3, format!("{}^({n})", pp(4, a))),
            Expr::Pow(a, n) => bracket(ctx, 3, format!("{}^{n}", pp(4, a))),

            Expr::Neg(a) => bracket(ctx, 3, format!("-{}", pp(4, a))),
        }
    }

    pp(0, expr)
}

pub fn pretty_equation(equation: &Equation) -> String {
    format!("{} = {}", pretty(equation.lhs()), pretty(equation.rhs()))
}

fn bracket(ctx: u8, prec: u8, body: String) -> String {
    if prec < ctx {
        format!("({body})")
    } else {
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dimension;
    use crate::core::{Quantity, Symbol};

    const A: Symbol = Symbol::new("a", dimension::LENGTH);
    const B: Symbol = Symbol::new("b", dimension::LENGTH);
    const C: Symbol = Symbol::new("c", dimension::LENGTH);

    #[test]
    fn test_precedence() {
        assert_eq!(pretty(&(Expr::from(A) + B)), "a + b");
        assert_eq!(pretty(&((Expr::from(A) + B) * C)), "(a + b)*c");
        assert_eq!(pretty(&(Expr::from(A) * B / (Expr::from(A) + B))), "a*b/(a + b)");
        assert_eq!(pretty(&(Expr::from(A) / (Expr::from(B) * C))), "a/(b*c)");
        assert_eq!(pretty(&(Expr::from(A) - (Expr::from(B) - C))), "a - (b - c)");
    }

    #[test]
    fn test_reciprocal_sum() {
        let expr = Expr::from(A).recip() + Expr::from(B).recip();
        assert_eq!(pretty(&expr), "1/a + 1/b");
        assert_eq!(pretty(&expr.recip()), "1/(1/a + 1/b)");
    }

    #[test]
    fn test_powers_and_negation() {
        assert_eq!(pretty(&Expr::from(A).powi(3)), "a^3");
        assert_eq!(pretty(&Expr::from(A).powi(-1)), "a^(-1)");
        assert_eq!(pretty(&(-(Expr::from(A) + B))), "-(a + b)");
    }

    #[test]
    fn test_substituted_quantities_are_bracketed() {
        let expr = Expr::from(Quantity::new(2.0, dimension::MASS))
            / Quantity::new(1.0, dimension::VOLUME);
        assert_eq!(pretty(&expr), "(2 kg)/(1 m^3)");
    }

    #[test]
    fn test_equation() {
        let equation = Equation::new(Expr::from(A).recip(), Expr::from(B).recip());
        assert_eq!(pretty_equation(&equation), "1/a = 1/b");
    }
}
