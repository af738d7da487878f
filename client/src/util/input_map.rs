//! DOM event values mapped into engine input types.

#[cfg(test)]
#[path = "input_map_test.rs"]
mod input_map_test;

use canvas::camera::Point;
use canvas::input::{Modifiers, WheelDelta};
use canvas::viewport::Axis;

#[must_use]
pub fn map_modifiers(shift: bool, ctrl: bool) -> Modifiers {
    Modifiers { shift, ctrl }
}

#[must_use]
pub fn wheel_delta(dy: f64) -> WheelDelta {
    WheelDelta { dy }
}

/// Pointer position relative to the canvas element.
#[must_use]
pub fn canvas_point(offset_x: i32, offset_y: i32) -> Point {
    Point::new(f64::from(offset_x), f64::from(offset_y))
}

/// The pointer coordinate a scrollbar on `axis` tracks.
#[must_use]
pub fn axis_coordinate(axis: Axis, client_x: i32, client_y: i32) -> f64 {
    match axis {
        Axis::Horizontal => f64::from(client_x),
        Axis::Vertical => f64::from(client_y),
    }
}

/// Convert a CSS pixel length from the DOM to whole pixels, treating junk as zero.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn css_px(value: f64) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    value.round().min(f64::from(u32::MAX)) as u32
}
