use crate::core::{Bindings, Quantity, Symbol, Unit};
use crate::error::PhysicsResult;
use crate::laws::{find_law, Law};
use crate::types::{
    CalculationFailure, CalculationOutcome, CalculationReport, CalculationRequest,
    CalculationSheet,
};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Runs every request of a calculation sheet
///
/// A failing request is recorded in the report and does not stop the others.
pub struct Calculator {
    sheet: CalculationSheet,
}

impl Calculator {
    #[must_use]
    pub fn new(sheet: CalculationSheet) -> Self {
        Self { sheet }
    }

    pub fn calculate_all(&self) -> CalculationReport {
        let mut report = CalculationReport::default();

        for (index, request) in self.sheet.calculations.iter().enumerate() {
            let label = request.label(index);
            match calculate_request(request, &label) {
                Ok(outcome) => {
                    debug!(name = %label, result = %outcome.display, "calculated");
                    report.results.push(outcome);
                }
                Err(e) => {
                    warn!(name = %label, error = %e, "calculation failed");
                    report.failures.push(CalculationFailure {
                        name: label,
                        law: request.law.clone(),
                        error: e.to_string(),
                    });
                }
            }
        }

        report
    }
}

/// Evaluate a single request against the law catalog.
pub fn calculate_request(
    request: &CalculationRequest,
    label: &str,
) -> PhysicsResult<CalculationOutcome> {
    let law = find_law(&request.law)?;
    let target = match &request.solve_for {
        Some(name) => law.symbol(name)?,
        None => law.output(),
    };
    let inputs = parse_inputs(law, &request.inputs)?;
    let result = law.calculate(&target, &inputs)?;

    let unit = match &request.unit {
        Some(unit) => Unit::parse(unit)?,
        None => Unit::si(target.dimension()),
    };

    Ok(CalculationOutcome {
        name: label.to_string(),
        law: law.name().to_string(),
        target: target.name().to_string(),
        value: result.to_unit(&unit)?,
        unit: unit.symbol().to_string(),
        display: result.format_in(&unit)?,
    })
}

/// Bind quantity texts to the law's symbols by name.
pub fn parse_inputs(law: &dyn Law, inputs: &BTreeMap<String, String>) -> PhysicsResult<Bindings> {
    inputs
        .iter()
        .map(|(name, text)| -> PhysicsResult<(Symbol, Quantity)> {
            Ok((law.symbol(name)?, Quantity::parse(text)?))
        })
        .collect()
}
