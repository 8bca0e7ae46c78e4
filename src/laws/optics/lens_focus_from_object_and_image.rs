//! Thin lens formula
//!
//! Any optic lens creates an image of an object. The distances lens-object
//! and lens-image depend on the optical strength of the lens.
//!
//! Law: `1/F = 1/d + 1/f`, where `F` is the focus distance of the lens, `d`
//! the distance from lens to object and `f` the distance from lens to image.
//!
//! Conditions: the lens is thin, i.e. its thickness is much less than F, f and d.

use crate::core::dimension;
use crate::core::{printer, Bindings, Equation, Expr, Quantity, Symbol};
use crate::error::PhysicsResult;
use crate::laws::Law;
use std::sync::LazyLock;

pub const FOCUS_DISTANCE: Symbol = Symbol::new("focus_distance", dimension::LENGTH);
pub const DISTANCE_TO_OBJECT: Symbol = Symbol::new("distance_to_object", dimension::LENGTH);
pub const DISTANCE_TO_IMAGE: Symbol = Symbol::new("distance_to_image", dimension::LENGTH);

static SYMBOLS: [Symbol; 3] = [FOCUS_DISTANCE, DISTANCE_TO_OBJECT, DISTANCE_TO_IMAGE];

pub static LAW: LazyLock<Equation> = LazyLock::new(|| {
    Equation::new(
        Expr::from(FOCUS_DISTANCE).recip(),
        Expr::from(DISTANCE_TO_OBJECT).recip() + Expr::from(DISTANCE_TO_IMAGE).recip(),
    )
});

pub fn print(expr: &Expr) -> String {
    printer::pretty(expr)
}

/// A zero distance gives a zero focus; distances summing to zero fail with
/// a division by zero.
pub fn calculate_focus(
    object_distance: &Quantity,
    image_distance: &Quantity,
) -> PhysicsResult<Quantity> {
    let inputs = Bindings::from([
        (DISTANCE_TO_OBJECT, *object_distance),
        (DISTANCE_TO_IMAGE, *image_distance),
    ]);
    LensFocusFromObjectAndImage.calculate(&FOCUS_DISTANCE, &inputs)
}

pub struct LensFocusFromObjectAndImage;

impl Law for LensFocusFromObjectAndImage {
    fn name(&self) -> &'static str {
        "lens_focus_from_object_and_image"
    }

    fn description(&self) -> &'static str {
        "Thin lens formula relating focus distance to object and image distances."
    }

    fn symbols(&self) -> &'static [Symbol] {
        &SYMBOLS
    }

    fn output(&self) -> Symbol {
        FOCUS_DISTANCE
    }

    fn equation(&self) -> &'static Equation {
        &LAW
    }

    fn solve_for(&self, target: &Symbol) -> PhysicsResult<Expr> {
        let focus = Expr::from(FOCUS_DISTANCE);
        let object = Expr::from(DISTANCE_TO_OBJECT);
        let image = Expr::from(DISTANCE_TO_IMAGE);
        match *target {
            FOCUS_DISTANCE => Ok(object.clone() * image.clone() / (object + image)),
            DISTANCE_TO_OBJECT => Ok(focus.clone() * image.clone() / (image - focus)),
            DISTANCE_TO_IMAGE => Ok(focus.clone() * object.clone() / (object - focus)),
            _ => Err(self.unknown_symbol(target.name())),
        }
    }
}
