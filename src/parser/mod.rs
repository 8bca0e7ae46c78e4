use crate::error::{PhysicsError, PhysicsResult};
use crate::types::CalculationSheet;
use std::path::Path;

/// Parse a YAML calculation sheet from disk.
///
/// # Example
/// ```no_run
/// use physlaws::parser::parse_sheet;
/// use std::path::Path;
///
/// let sheet = parse_sheet(Path::new("sheet.yaml"))?;
/// println!("Calculations: {}", sheet.calculations.len());
/// # Ok::<(), physlaws::error::PhysicsError>(())
/// ```
pub fn parse_sheet(path: &Path) -> PhysicsResult<CalculationSheet> {
    let content = std::fs::read_to_string(path)?;
    parse_sheet_str(&content)
}

/// Parse a calculation sheet from YAML text.
///
/// Every request must name a law; an empty sheet is rejected.
pub fn parse_sheet_str(content: &str) -> PhysicsResult<CalculationSheet> {
    let sheet: CalculationSheet = serde_yaml::from_str(content)?;

    if sheet.calculations.is_empty() {
        return Err(PhysicsError::Parse(
            "Sheet has no 'calculations' entries".to_string(),
        ));
    }
    if let Some(index) = sheet
        .calculations
        .iter()
        .position(|request| request.law.trim().is_empty())
    {
        return Err(PhysicsError::Parse(format!(
            "Calculation #{} has an empty 'law'",
            index + 1
        )));
    }

    Ok(sheet)
}
