//! Definitions of derived quantities

pub mod density_from_mass_volume;

pub use density_from_mass_volume::DensityFromMassVolume;
