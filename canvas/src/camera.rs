#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

/// A point in either viewport (screen) or logical (world) space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Scroll projection of the viewport onto the logical canvas.
///
/// `scroll_x` / `scroll_y` are the logical coordinates of the viewport's
/// top-left corner. There is no zoom: one logical unit is one CSS pixel.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Camera {
    pub scroll_x: f64,
    pub scroll_y: f64,
}

impl Camera {
    #[must_use]
    pub fn new(scroll_x: f64, scroll_y: f64) -> Self {
        Self { scroll_x, scroll_y }
    }

    /// Convert a viewport-relative point to logical canvas coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point {
            x: screen.x + self.scroll_x,
            y: screen.y + self.scroll_y,
        }
    }

    /// Convert a logical canvas point to viewport-relative coordinates.
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point {
            x: world.x - self.scroll_x,
            y: world.y - self.scroll_y,
        }
    }

    /// Translation applied to the scrolled container layer.
    #[must_use]
    pub fn container_translation(&self) -> Point {
        Point { x: -self.scroll_x, y: -self.scroll_y }
    }
}
