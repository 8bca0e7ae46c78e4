//! Laws of geometric optics

pub mod lens_focus_from_object_and_image;

pub use lens_focus_from_object_and_image::LensFocusFromObjectAndImage;
