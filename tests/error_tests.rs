//! Error message tests

use physlaws::core::dimension;
use physlaws::PhysicsError;
use pretty_assertions::assert_eq;

#[test]
fn test_input_dimension_message() {
    let err = PhysicsError::InputDimension {
        symbol: "mass".to_string(),
        expected: dimension::MASS,
        found: dimension::VOLUME,
    };
    assert_eq!(
        err.to_string(),
        "Input 'mass' expects dimension mass, got length^3"
    );
}

#[test]
fn test_output_dimension_message() {
    let err = PhysicsError::OutputDimension {
        symbol: "density".to_string(),
        expected: dimension::DENSITY,
        found: dimension::DIMENSIONLESS,
    };
    assert_eq!(
        err.to_string(),
        "Output 'density' expects dimension mass/length^3, got dimensionless"
    );
}

#[test]
fn test_incompatible_units_message() {
    let err = PhysicsError::IncompatibleUnits {
        left: dimension::LENGTH,
        right: dimension::TIME,
    };
    assert_eq!(err.to_string(), "Cannot combine length with time");
}

#[test]
fn test_lookup_messages() {
    assert_eq!(
        PhysicsError::UnknownLaw("ohm".to_string()).to_string(),
        "Unknown law 'ohm' (run `physlaws list` to see the catalog)"
    );
    assert_eq!(
        PhysicsError::UnknownSymbol {
            law: "density_from_mass_volume".to_string(),
            symbol: "speed".to_string(),
        }
        .to_string(),
        "Law 'density_from_mass_volume' has no symbol 'speed'"
    );
    assert_eq!(
        PhysicsError::BoundTarget("density".to_string()).to_string(),
        "Symbol 'density' is being solved for and cannot also be given as an input"
    );
    assert_eq!(
        PhysicsError::UnknownUnit("parsec".to_string()).to_string(),
        "Unknown unit 'parsec'"
    );
}

#[test]
fn test_io_error_converts() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.yaml");
    let err: PhysicsError = io.into();
    assert!(matches!(err, PhysicsError::Io(_)));
    assert_eq!(err.to_string(), "IO error: missing.yaml");
}

#[test]
fn test_yaml_error_converts() {
    let yaml = serde_yaml::from_str::<Vec<u32>>("{ not: a list }").unwrap_err();
    let err: PhysicsError = yaml.into();
    assert!(err.to_string().starts_with("YAML parsing error:"));
}
