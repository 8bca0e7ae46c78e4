//! The law catalog
//!
//! Each law module declares its symbols as constants, its equation as a lazily
//! initialized static, a `print` function and a calculator. The hard-coded
//! closed-form solution for every symbol lives in the module's [`Law`] impl,
//! so no general equation solver is needed.

pub mod definitions;
pub mod optics;

use crate::core::unit_validator::{validate_input_symbols, validate_output_symbol};
use crate::core::{Bindings, Equation, Expr, Quantity, Symbol};
use crate::error::{PhysicsError, PhysicsResult};
use tracing::debug;

pub trait Law: Sync {
    /// Catalog key, e.g. `density_from_mass_volume`
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Every symbol of the law, in declaration order
    fn symbols(&self) -> &'static [Symbol];

    /// The symbol solved for when the caller doesn't pick one
    fn output(&self) -> Symbol;

    fn equation(&self) -> &'static Equation;

    /// The equation solved for `target`, in terms of the other symbols.
    fn solve_for(&self, target: &Symbol) -> PhysicsResult<Expr>;

    /// Look up one of the law's symbols by name.
    fn symbol(&self, name: &str) -> PhysicsResult<Symbol> {
        self.symbols()
            .iter()
            .find(|symbol| symbol.name() == name)
            .copied()
            .ok_or_else(|| self.unknown_symbol(name))
    }

    fn unknown_symbol(&self, name: &str) -> PhysicsError {
        PhysicsError::UnknownSymbol {
            law: self.name().to_string(),
            symbol: name.to_string(),
        }
    }

    /// The symbols that must be bound to solve for `target`.
    fn inputs_for(&self, target: &Symbol) -> Vec<Symbol> {
        self.symbols()
            .iter()
            .filter(|symbol| *symbol != target)
            .copied()
            .collect()
    }

    /// Solve for `target`, substitute `inputs`, and evaluate.
    ///
    /// Every input is checked against its symbol's dimension first, and the
    /// result against the target's dimension last.
    fn calculate(&self, target: &Symbol, inputs: &Bindings) -> PhysicsResult<Quantity> {
        let solved = self.solve_for(target)?;
        if inputs.contains_key(target) {
            return Err(PhysicsError::BoundTarget(target.name().to_string()));
        }

        let bound = self
            .inputs_for(target)
            .into_iter()
            .map(|symbol| match inputs.get(&symbol) {
                Some(quantity) => Ok((symbol, quantity)),
                None => Err(PhysicsError::UnboundSymbol(symbol.name().to_string())),
            })
            .collect::<PhysicsResult<Vec<_>>>()?;
        validate_input_symbols(&bound)?;

        let applied = solved.subs(inputs);
        debug!(
            law = self.name(),
            target = target.name(),
            solved = %solved,
            applied = %applied,
            "evaluating solved form"
        );
        validate_output_symbol(target, applied.to_quantity()?)
    }
}

static CATALOG: [&dyn Law; 2] = [
    &definitions::DensityFromMassVolume,
    &optics::LensFocusFromObjectAndImage,
];

/// All laws, in display order
pub fn catalog() -> &'static [&'static dyn Law] {
    &CATALOG
}

pub fn find_law(name: &str) -> PhysicsResult<&'static dyn Law> {
    catalog()
        .iter()
        .find(|law| law.name() == name)
        .copied()
        .ok_or_else(|| PhysicsError::UnknownLaw(name.to_string()))
}
