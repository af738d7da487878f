//! The transform staged for the next placement.
//!
//! Wheel input adjusts one component per tick: Shift scales X, Ctrl scales Y,
//! neither rotates. The transform is copied into each placed sprite and is
//! not reset afterwards, so consecutive placements share it until the user
//! changes it again.

#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;

use crate::input::Modifiers;

/// Which component a wheel tick changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelAdjust {
    ScaleX,
    ScaleY,
    Rotation,
}

impl WheelAdjust {
    /// Pick the component for the held modifiers. Shift wins over Ctrl.
    #[must_use]
    pub fn for_modifiers(modifiers: Modifiers) -> Self {
        if modifiers.shift {
            Self::ScaleX
        } else if modifiers.ctrl {
            Self::ScaleY
        } else {
            Self::Rotation
        }
    }
}

/// Scale and rotation applied to the preview and copied into each placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingTransform {
    pub scale_x: f64,
    pub scale_y: f64,
    /// Radians, clockwise in screen space.
    pub rotation: f64,
}

impl Default for PendingTransform {
    fn default() -> Self {
        Self { scale_x: 1.0, scale_y: 1.0, rotation: 0.0 }
    }
}

impl PendingTransform {
    /// Apply one wheel tick. `delta_y > 0` (wheel down) increases, anything else decreases.
    pub fn apply_wheel(&mut self, delta_y: f64, modifiers: Modifiers, step: f64) -> WheelAdjust {
        let signed = if delta_y > 0.0 { step } else { -step };
        let adjust = WheelAdjust::for_modifiers(modifiers);
        match adjust {
            WheelAdjust::ScaleX => self.scale_x += signed,
            WheelAdjust::ScaleY => self.scale_y += signed,
            WheelAdjust::Rotation => self.rotation += signed,
        }
        adjust
    }
}
