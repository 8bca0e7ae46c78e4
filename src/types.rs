use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

//==============================================================================
// Calculation sheets (YAML input)
//==============================================================================

/// A batch of calculations read from a YAML sheet
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculationSheet {
    #[serde(default)]
    pub calculations: Vec<CalculationRequest>,
}

/// One law evaluation: which law, what to solve for, and the known values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub law: String,
    /// Defaults to the law's output symbol
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solve_for: Option<String>,
    /// Symbol name -> quantity text, e.g. `mass: 2 kg`
    #[serde(default)]
    pub inputs: BTreeMap<String, String>,
    /// Output unit; defaults to the coherent SI unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl CalculationRequest {
    pub fn new(law: impl Into<String>) -> Self {
        Self {
            name: None,
            law: law.into(),
            solve_for: None,
            inputs: BTreeMap::new(),
            unit: None,
        }
    }

    #[must_use]
    pub fn with_input(mut self, symbol: impl Into<String>, quantity: impl Into<String>) -> Self {
        self.inputs.insert(symbol.into(), quantity.into());
        self
    }

    #[must_use]
    pub fn with_solve_for(mut self, symbol: impl Into<String>) -> Self {
        self.solve_for = Some(symbol.into());
        self
    }

    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Display label: the explicit name, or `#<position> <law>`
    pub fn label(&self, index: usize) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("#{} {}", index + 1, self.law))
    }
}

//==============================================================================
// Results
//==============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationOutcome {
    pub name: String,
    pub law: String,
    pub target: String,
    /// Value expressed in `unit`
    pub value: f64,
    pub unit: String,
    pub display: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationFailure {
    pub name: String,
    pub law: String,
    pub error: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CalculationReport {
    pub results: Vec<CalculationOutcome>,
    pub failures: Vec<CalculationFailure>,
}

impl CalculationReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}
