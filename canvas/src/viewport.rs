//! Virtual viewport: two independent scroll axes over the logical canvas.
//!
//! The visible window is a small rectangle of the 16384×16384 logical canvas.
//! Each axis owns its scroll offset, the maximum offset derived from the
//! visible length, and the geometry of the scrollbar widget that drives it.
//! The scrollbar thumb is a view of the offset while idle and the writer of
//! the offset while dragged.
//!
//! Every geometry-dependent computation early-returns on a degenerate
//! denominator (zero max scroll, track no longer than its thumb), so offsets
//! are never NaN or infinite and always stay within `[0, max]`.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use crate::camera::Camera;
use crate::config::EditorConfig;

/// One of the two scroll axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Left/right scrolling, driven by the bottom scrollbar.
    Horizontal,
    /// Up/down scrolling, driven by the side scrollbar.
    Vertical,
}

/// Pixel lengths of a scrollbar track and its thumb along the scroll axis.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TrackGeometry {
    pub track_len: f64,
    pub thumb_len: f64,
}

impl TrackGeometry {
    #[must_use]
    pub fn new(track_len: f64, thumb_len: f64) -> Self {
        Self { track_len, thumb_len }
    }

    /// Distance the thumb can travel. Zero or negative means the axis is inert.
    #[must_use]
    pub fn available(&self) -> f64 {
        self.track_len - self.thumb_len
    }
}

/// Where a thumb drag started: pointer coordinate and thumb offset, both in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragAnchor {
    start_pointer: f64,
    start_thumb: f64,
}

/// State for a single scroll axis.
#[derive(Debug, Clone)]
pub struct ScrollAxis {
    extent: u32,
    margin: u32,
    visible: i64,
    max: u32,
    offset: u32,
    track: TrackGeometry,
    thumb_px: f64,
    drag: Option<DragAnchor>,
}

impl ScrollAxis {
    /// Create an axis over `extent` logical units with `margin` pixels of chrome.
    ///
    /// Until the first resize the visible length is zero, so the whole extent is scrollable.
    #[must_use]
    pub fn new(extent: u32, margin: u32) -> Self {
        Self {
            extent,
            margin,
            visible: 0,
            max: extent,
            offset: 0,
            track: TrackGeometry::default(),
            thumb_px: 0.0,
            drag: None,
        }
    }

    /// Recompute the visible length and maximum offset from the window length.
    ///
    /// Does not touch the current offset; see [`ScrollAxis::clamp_offset`].
    pub fn recompute_bounds(&mut self, window_len: u32) {
        self.visible = i64::from(window_len) - i64::from(self.margin);
        let max = (i64::from(self.extent) - self.visible).max(0);
        self.max = u32::try_from(max).unwrap_or(u32::MAX);
    }

    /// Pull the offset back into `[0, max]`. Never increases it.
    pub fn clamp_offset(&mut self) {
        self.offset = self.offset.min(self.max);
    }

    /// Reposition the thumb from the current offset.
    ///
    /// Returns `false` and puts the thumb back at rest when the axis is inert.
    pub fn update_thumb(&mut self) -> bool {
        let available = self.track.available();
        if self.max == 0 || available <= 0.0 {
            self.thumb_px = 0.0;
            return false;
        }
        self.thumb_px = f64::from(self.offset) / f64::from(self.max) * available;
        true
    }

    /// Record the drag anchor. No-op (returns `false`) when there is nothing to scroll.
    pub fn begin_drag(&mut self, pointer: f64) -> bool {
        if self.max == 0 {
            return false;
        }
        // The thumb position is read back from the widget as whole pixels.
        self.drag = Some(DragAnchor { start_pointer: pointer, start_thumb: self.thumb_px.trunc() });
        true
    }

    /// Move the thumb with the pointer and write the derived offset back.
    ///
    /// Returns the new offset, or `None` when no drag is active on this axis,
    /// the axis has nothing to scroll, or the pointer coordinate is not finite.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn drag_move(&mut self, pointer: f64) -> Option<u32> {
        let anchor = self.drag?;
        let available = self.track.available();
        if self.max == 0 || available <= 0.0 || !pointer.is_finite() {
            return None;
        }

        let delta = pointer - anchor.start_pointer;
        let thumb = (anchor.start_thumb + delta).clamp(0.0, available);
        self.thumb_px = thumb;
        // thumb / available is in [0, 1], so the product lies in [0, max].
        self.offset = (thumb / available * f64::from(self.max)).round() as u32;
        Some(self.offset)
    }

    /// Drop any drag anchor.
    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    #[must_use]
    pub fn offset(&self) -> u32 {
        self.offset
    }

    #[must_use]
    pub fn max_scroll(&self) -> u32 {
        self.max
    }

    /// Visible length in logical units. Negative when the window is narrower than the chrome.
    #[must_use]
    pub fn visible_len(&self) -> i64 {
        self.visible
    }

    #[must_use]
    pub fn thumb_offset(&self) -> f64 {
        self.thumb_px
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }
}

/// The viewport controller: both scroll axes of the visible window.
#[derive(Debug, Clone)]
pub struct Viewport {
    horizontal: ScrollAxis,
    vertical: ScrollAxis,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::from_config(&EditorConfig::default())
    }
}

impl Viewport {
    #[must_use]
    pub fn new(extent: u32, margin_x: u32, margin_y: u32) -> Self {
        Self {
            horizontal: ScrollAxis::new(extent, margin_x),
            vertical: ScrollAxis::new(extent, margin_y),
        }
    }

    #[must_use]
    pub fn from_config(config: &EditorConfig) -> Self {
        Self::new(config.canvas_extent, config.chrome_margin_x, config.chrome_margin_y)
    }

    fn axis(&self, axis: Axis) -> &ScrollAxis {
        match axis {
            Axis::Horizontal => &self.horizontal,
            Axis::Vertical => &self.vertical,
        }
    }

    fn axis_mut(&mut self, axis: Axis) -> &mut ScrollAxis {
        match axis {
            Axis::Horizontal => &mut self.horizontal,
            Axis::Vertical => &mut self.vertical,
        }
    }

    // --- Resize ---

    /// Recompute both axes' visible lengths and max offsets from the window size.
    pub fn recompute_bounds(&mut self, window_w: u32, window_h: u32) {
        self.horizontal.recompute_bounds(window_w);
        self.vertical.recompute_bounds(window_h);
    }

    /// Re-clamp both offsets after a bounds change.
    pub fn clamp_after_resize(&mut self) {
        self.horizontal.clamp_offset();
        self.vertical.clamp_offset();
    }

    /// Full resize sequence: bounds, then clamp, then thumbs.
    pub fn resize(&mut self, window_w: u32, window_h: u32) {
        self.recompute_bounds(window_w, window_h);
        self.clamp_after_resize();
        self.update_thumb_visuals();
    }

    // --- Thumbs ---

    /// Record the scrollbar widget lengths measured by the host.
    pub fn set_track_geometry(&mut self, axis: Axis, geometry: TrackGeometry) {
        self.axis_mut(axis).track = geometry;
    }

    /// Reposition both thumbs from the current offsets, skipping inert axes.
    pub fn update_thumb_visuals(&mut self) {
        self.horizontal.update_thumb();
        self.vertical.update_thumb();
    }

    // --- Drag ---

    pub fn begin_drag(&mut self, axis: Axis, pointer: f64) -> bool {
        self.axis_mut(axis).begin_drag(pointer)
    }

    pub fn drag_move(&mut self, axis: Axis, pointer: f64) -> Option<u32> {
        self.axis_mut(axis).drag_move(pointer)
    }

    /// End any drag on either axis. Pointer release is axis-agnostic.
    pub fn end_drag(&mut self) {
        self.horizontal.end_drag();
        self.vertical.end_drag();
    }

    // --- Queries ---

    #[must_use]
    pub fn offset(&self, axis: Axis) -> u32 {
        self.axis(axis).offset()
    }

    #[must_use]
    pub fn max_scroll(&self, axis: Axis) -> u32 {
        self.axis(axis).max_scroll()
    }

    #[must_use]
    pub fn thumb_offset(&self, axis: Axis) -> f64 {
        self.axis(axis).thumb_offset()
    }

    #[must_use]
    pub fn visible_len(&self, axis: Axis) -> i64 {
        self.axis(axis).visible_len()
    }

    #[must_use]
    pub fn is_dragging(&self, axis: Axis) -> bool {
        self.axis(axis).is_dragging()
    }

    /// Visible drawing area in logical units, floored at zero.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn visible_size(&self) -> (f64, f64) {
        let w = self.visible_len(Axis::Horizontal).max(0);
        let h = self.visible_len(Axis::Vertical).max(0);
        (w as f64, h as f64)
    }

    /// The scroll projection used for coordinate conversion and layer translation.
    #[must_use]
    pub fn camera(&self) -> Camera {
        Camera::new(f64::from(self.horizontal.offset), f64::from(self.vertical.offset))
    }
}

#[cfg(test)]
impl Viewport {
    /// Place an axis at `offset`, clamped to its max, and resync its thumb.
    pub(crate) fn seek(&mut self, axis: Axis, offset: u32) {
        let scroll = self.axis_mut(axis);
        scroll.offset = offset.min(scroll.max);
        scroll.update_thumb();
    }
}
