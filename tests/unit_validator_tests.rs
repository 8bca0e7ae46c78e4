//! Unit parsing and dimension validation integration tests

use physlaws::core::dimension;
use physlaws::core::unit_validator::{
    has_errors, validate_input_symbol, validate_input_symbols, validate_output_symbol,
    LawValidator, UnitWarning, WarningSeverity,
};
use physlaws::core::units::{self, Unit};
use physlaws::core::{Quantity, Symbol};
use physlaws::{catalog, Law, PhysicsError};
use pretty_assertions::assert_eq;

const WIDTH: Symbol = Symbol::new("width", dimension::LENGTH);
const WEIGHT: Symbol = Symbol::new("weight", dimension::FORCE);

// ═══════════════════════════════════════════════════════════════════════════
// UNIT PARSING TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_unit_parse_simple_units() {
    for (text, expected) in [
        ("kg", dimension::MASS),
        ("lb", dimension::MASS),
        ("ft", dimension::LENGTH),
        ("min", dimension::TIME),
        ("mL", dimension::VOLUME),
        ("N", dimension::FORCE),
        ("Pa", dimension::PRESSURE),
        ("Hz", dimension::FREQUENCY),
    ] {
        assert_eq!(Unit::parse(text).unwrap().dimension(), expected, "{text}");
    }
}

#[test]
fn test_unit_parse_compound_units() {
    assert_eq!(Unit::parse("kg/m^3").unwrap().dimension(), dimension::DENSITY);
    assert_eq!(Unit::parse("m/s^2").unwrap().dimension(), dimension::ACCELERATION);
    assert_eq!(Unit::parse("kg*m/s^2").unwrap().dimension(), dimension::FORCE);
    assert_eq!(Unit::parse("N*m").unwrap().dimension(), dimension::ENERGY);
    assert_eq!(Unit::parse("J/s").unwrap().dimension(), dimension::POWER);
}

#[test]
fn test_unit_parse_named_units() {
    let unit = Unit::parse("kilograms / liter").unwrap();
    assert_eq!(unit.dimension(), dimension::DENSITY);
    assert!((unit.factor() - 1000.0).abs() < 1e-9);
}

#[test]
fn test_unit_factor_conversions() {
    let one_gram_per_cc = Quantity::parse("1 g/cm^3").unwrap();
    let thousand_si = Quantity::parse("1000 kg/m^3").unwrap();
    assert!(one_gram_per_cc.approx_eq(&thousand_si, 1e-12));

    let inch = Quantity::in_unit(1.0, &units::lookup("in").unwrap());
    assert!((inch.to_unit(&units::CENTIMETER).unwrap() - 2.54).abs() < 1e-12);

    let liter = Quantity::in_unit(1.0, &units::LITER);
    assert!((liter.value() - 0.001).abs() < 1e-15);
}

#[test]
fn test_quantity_parse_rejects_exponent_overflow() {
    for text in ["1 kg^100*kg^100", "1 1/m^-128"] {
        match Quantity::parse(text) {
            Err(PhysicsError::Parse(message)) => assert!(message.contains("out of range")),
            other => panic!("{text}: expected parse error, got {other:?}"),
        }
    }
}

#[test]
fn test_unit_parse_unknown() {
    assert!(matches!(
        Unit::parse("kg/parsec"),
        Err(PhysicsError::UnknownUnit(u)) if u == "parsec"
    ));
}

// ═══════════════════════════════════════════════════════════════════════════
// INPUT / OUTPUT VALIDATION TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_validate_input_symbol_accepts_any_unit_of_the_dimension() {
    assert!(validate_input_symbol(&WIDTH, &Quantity::parse("3 ft").unwrap()).is_ok());
    assert!(validate_input_symbol(&WIDTH, &Quantity::parse("3 nm").unwrap()).is_ok());
    assert!(validate_input_symbol(&WEIGHT, &Quantity::parse("3 kg*m/s^2").unwrap()).is_ok());
}

#[test]
fn test_validate_input_symbol_rejects_wrong_dimension() {
    let err = validate_input_symbol(&WEIGHT, &Quantity::parse("3 kg").unwrap()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Input 'weight' expects dimension mass*length/time^2, got mass"
    );
}

#[test]
fn test_validate_input_symbols_all_or_nothing() {
    let width = Quantity::parse("1 m").unwrap();
    let weight = Quantity::parse("1 N").unwrap();
    assert!(validate_input_symbols(&[(WIDTH, &width), (WEIGHT, &weight)]).is_ok());
    assert!(validate_input_symbols(&[(WIDTH, &width), (WEIGHT, &width)]).is_err());
}

#[test]
fn test_validate_output_symbol() {
    let width = Quantity::parse("1 m").unwrap();
    assert_eq!(validate_output_symbol(&WIDTH, width).unwrap(), width);
    assert!(matches!(
        validate_output_symbol(&WEIGHT, width),
        Err(PhysicsError::OutputDimension { .. })
    ));
}

// ═══════════════════════════════════════════════════════════════════════════
// LAW VALIDATOR TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_catalog_has_no_findings() {
    for law in catalog() {
        let warnings = LawValidator::new(*law).validate();
        assert!(warnings.is_empty(), "{}: {:?}", law.name(), warnings);
    }
}

#[test]
fn test_has_errors_ignores_plain_warnings() {
    let warning = UnitWarning {
        location: "law.x".to_string(),
        formula: "x = y".to_string(),
        message: "unused".to_string(),
        severity: WarningSeverity::Warning,
    };
    assert!(!has_errors(std::slice::from_ref(&warning)));

    let error = UnitWarning {
        severity: WarningSeverity::Error,
        ..warning.clone()
    };
    assert!(has_errors(&[warning, error]));
}

#[test]
fn test_error_display() {
    let error = UnitWarning {
        location: "law.x".to_string(),
        formula: "x = y".to_string(),
        message: "mismatch".to_string(),
        severity: WarningSeverity::Error,
    };
    assert_eq!(error.to_string(), "❌ Error: law.x - mismatch (x = y)");
}
