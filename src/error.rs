use crate::core::Dimension;
use thiserror::Error;

pub type PhysicsResult<T> = Result<T, PhysicsError>;

#[derive(Error, Debug)]
pub enum PhysicsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Input '{symbol}' expects dimension {expected}, got {found}")]
    InputDimension {
        symbol: String,
        expected: Dimension,
        found: Dimension,
    },

    #[error("Output '{symbol}' expects dimension {expected}, got {found}")]
    OutputDimension {
        symbol: String,
        expected: Dimension,
        found: Dimension,
    },

    #[error("Cannot combine {left} with {right}")]
    IncompatibleUnits { left: Dimension, right: Dimension },

    #[error("Division by zero while evaluating {0}")]
    DivisionByZero(String),

    #[error("Result of {0} is not a finite number")]
    NonFinite(String),

    #[error("No value bound for symbol '{0}'")]
    UnboundSymbol(String),

    #[error("Symbol '{0}' is being solved for and cannot also be given as an input")]
    BoundTarget(String),

    #[error("Law '{law}' has no symbol '{symbol}'")]
    UnknownSymbol { law: String, symbol: String },

    #[error("Unknown law '{0}' (run `physlaws list` to see the catalog)")]
    UnknownLaw(String),

    #[error("Unknown unit '{0}'")]
    UnknownUnit(String),
}
