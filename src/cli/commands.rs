use super::OutputFormat;
use crate::core::calculator::{calculate_request, Calculator};
use crate::core::unit_validator::{has_errors, LawValidator, WarningSeverity};
use crate::core::Unit;
use crate::error::{PhysicsError, PhysicsResult};
use crate::laws::{catalog, find_law};
use crate::parser;
use crate::types::{CalculationReport, CalculationRequest};
use colored::Colorize;
use std::path::PathBuf;
use tracing::info;

/// Split a `--set name=quantity` argument.
pub fn parse_assignment(text: &str) -> PhysicsResult<(String, String)> {
    match text.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() && !value.trim().is_empty() => {
            Ok((name.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(PhysicsError::Parse(format!(
            "Expected NAME=QUANTITY (e.g. mass=\"2 kg\"), got '{text}'"
        ))),
    }
}

/// Execute the list command
pub fn list() -> PhysicsResult<()> {
    println!("{}", "📚 Physics laws".bold().green());
    println!();
    for law in catalog() {
        println!("   {}", law.name().bright_blue().bold());
        println!("      {}", law.equation());
        println!("      {}", law.description().dimmed());
    }
    println!();
    Ok(())
}

/// Execute the show command
pub fn show(law_name: &str) -> PhysicsResult<()> {
    let law = find_law(law_name)?;

    println!("{}", format!("📐 {}", law.name()).bold().green());
    println!("   {}", law.description());
    println!();
    println!("   {}", law.equation().to_string().bold());
    println!();

    println!("   Symbols:");
    for symbol in law.symbols() {
        let si = Unit::si(symbol.dimension());
        println!(
            "      {} [{}] ({})",
            symbol.name().bright_blue(),
            symbol.dimension(),
            si
        );
    }
    println!();

    println!("   Solved forms:");
    for symbol in law.symbols() {
        let solved = law.solve_for(symbol)?;
        println!("      {} = {}", symbol.name().bright_blue(), solved);
    }
    println!();
    Ok(())
}

/// Execute the calculate command
pub fn calculate(
    law_name: String,
    assignments: Vec<String>,
    solve_for: Option<String>,
    unit: Option<String>,
    verbose: bool,
) -> PhysicsResult<()> {
    let mut request = CalculationRequest::new(law_name);
    for assignment in &assignments {
        let (name, value) = parse_assignment(assignment)?;
        request = request.with_input(name, value);
    }
    request.solve_for = solve_for;
    request.unit = unit;

    if verbose {
        let law = find_law(&request.law)?;
        let target = match &request.solve_for {
            Some(name) => law.symbol(name)?,
            None => law.output(),
        };
        println!("{}", "🧮 Solving".cyan());
        println!("   {}", law.equation());
        println!("   {} = {}", target, law.solve_for(&target)?);
        for (name, value) in &request.inputs {
            println!("   {} = {}", name.bright_blue(), value);
        }
        println!();
    }

    let outcome = calculate_request(&request, &request.law)?;
    println!(
        "{} {} = {}",
        "✅".green(),
        outcome.target.bright_blue().bold(),
        outcome.display.bold()
    );
    Ok(())
}

/// Execute the batch command
pub fn batch(file: PathBuf, format: OutputFormat) -> PhysicsResult<()> {
    let sheet = parser::parse_sheet(&file)?;
    info!(
        file = %file.display(),
        calculations = sheet.calculations.len(),
        "running calculation sheet"
    );

    let report = Calculator::new(sheet).calculate_all();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print_report(&file, &report),
    }

    if report.is_success() {
        Ok(())
    } else {
        Err(PhysicsError::Validation(format!(
            "{} of {} calculations failed",
            report.failures.len(),
            report.failures.len() + report.results.len()
        )))
    }
}

fn print_report(file: &std::path::Path, report: &CalculationReport) {
    println!("{}", "🔥 Calculation sheet".bold().green());
    println!("   File: {}", file.display());
    println!();

    for outcome in &report.results {
        println!(
            "   {} {}: {} = {}",
            "✅".green(),
            outcome.name.bright_blue(),
            outcome.target,
            outcome.display.bold()
        );
    }
    for failure in &report.failures {
        println!(
            "   {} {}: {}",
            "❌".red(),
            failure.name.bright_blue(),
            failure.error.red()
        );
    }
    println!();
}

/// Execute the check command
pub fn check() -> PhysicsResult<()> {
    println!("{}", "✅ Checking law catalog".bold().green());
    println!();

    let mut failed = Vec::new();
    for law in catalog() {
        let warnings = LawValidator::new(*law).validate();
        if warnings.is_empty() {
            println!("   {} {}", "✓".green(), law.name());
            continue;
        }

        for warning in &warnings {
            let line = warning.to_string();
            match warning.severity {
                WarningSeverity::Warning => println!("   {}", line.yellow()),
                WarningSeverity::Error => println!("   {}", line.red()),
            }
        }
        if has_errors(&warnings) {
            failed.push(law.name());
        }
    }
    println!();

    if failed.is_empty() {
        println!("{}", "✅ All laws are dimensionally consistent".bold().green());
        Ok(())
    } else {
        Err(PhysicsError::Validation(format!(
            "inconsistent laws: {}",
            failed.join(", ")
        )))
    }
}
