#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// A 1280×800 window with 1000px tracks and 100px thumbs on both axes.
fn sized_viewport() -> Viewport {
    let mut vp = Viewport::default();
    vp.set_track_geometry(Axis::Horizontal, TrackGeometry::new(1000.0, 100.0));
    vp.set_track_geometry(Axis::Vertical, TrackGeometry::new(1000.0, 100.0));
    vp.resize(1280, 800);
    vp
}

fn drag(vp: &mut Viewport, axis: Axis, from: f64, to: f64) -> Option<u32> {
    vp.begin_drag(axis, from);
    let result = vp.drag_move(axis, to);
    vp.end_drag();
    result
}

// =============================================================
// TrackGeometry
// =============================================================

#[test]
fn track_available_is_track_minus_thumb() {
    assert_eq!(TrackGeometry::new(500.0, 40.0).available(), 460.0);
}

#[test]
fn track_available_can_be_negative() {
    assert!(TrackGeometry::new(10.0, 40.0).available() < 0.0);
}

// =============================================================
// Bounds
// =============================================================

#[test]
fn initial_max_is_full_extent() {
    let vp = Viewport::default();
    assert_eq!(vp.max_scroll(Axis::Horizontal), 16_384);
    assert_eq!(vp.max_scroll(Axis::Vertical), 16_384);
    assert_eq!(vp.offset(Axis::Horizontal), 0);
}

#[test]
fn max_scroll_subtracts_chrome_margins() {
    let mut vp = Viewport::default();
    vp.recompute_bounds(1280, 800);
    assert_eq!(vp.max_scroll(Axis::Horizontal), 16_384 - (1280 - 100));
    assert_eq!(vp.max_scroll(Axis::Vertical), 16_384 - (800 - 24));
}

#[test]
fn max_scroll_formula_holds_across_sizes() {
    let mut vp = Viewport::default();
    for w in [1_u32, 99, 100, 101, 640, 1920, 16_484, 20_000] {
        for h in [1_u32, 24, 25, 480, 1080, 16_408, 30_000] {
            vp.resize(w, h);
            let expected_x = (16_384_i64 - (i64::from(w) - 100)).max(0);
            let expected_y = (16_384_i64 - (i64::from(h) - 24)).max(0);
            assert_eq!(i64::from(vp.max_scroll(Axis::Horizontal)), expected_x, "w={w}");
            assert_eq!(i64::from(vp.max_scroll(Axis::Vertical)), expected_y, "h={h}");
        }
    }
}

#[test]
fn window_larger_than_canvas_has_zero_max() {
    let mut vp = Viewport::default();
    vp.resize(20_000, 20_000);
    assert_eq!(vp.max_scroll(Axis::Horizontal), 0);
    assert_eq!(vp.max_scroll(Axis::Vertical), 0);
}

#[test]
fn visible_size_subtracts_margins() {
    let mut vp = Viewport::default();
    vp.resize(1280, 800);
    assert_eq!(vp.visible_size(), (1180.0, 776.0));
}

#[test]
fn visible_size_floors_at_zero() {
    let mut vp = Viewport::default();
    vp.resize(50, 10);
    assert_eq!(vp.visible_size(), (0.0, 0.0));
}

#[test]
fn recompute_bounds_alone_does_not_clamp() {
    let mut vp = sized_viewport();
    vp.seek(Axis::Horizontal, 15_000);
    vp.recompute_bounds(16_000, 800);
    assert_eq!(vp.offset(Axis::Horizontal), 15_000);
    vp.clamp_after_resize();
    assert_eq!(vp.offset(Axis::Horizontal), vp.max_scroll(Axis::Horizontal));
}

// =============================================================
// Resize clamping
// =============================================================

#[test]
fn resize_clamps_offset_to_new_max() {
    let mut vp = sized_viewport();
    let max = vp.max_scroll(Axis::Horizontal);
    vp.seek(Axis::Horizontal, max);
    vp.resize(4000, 800);
    assert_eq!(vp.offset(Axis::Horizontal), 16_384 - 3900);
}

#[test]
fn resize_never_increases_offsets() {
    let mut vp = sized_viewport();
    vp.seek(Axis::Horizontal, 9000);
    vp.seek(Axis::Vertical, 12_000);
    let mut prev_x = vp.offset(Axis::Horizontal);
    let mut prev_y = vp.offset(Axis::Vertical);
    for (w, h) in [(800, 600), (2000, 2000), (9000, 6000), (640, 480), (16_000, 16_000), (300, 200)] {
        vp.resize(w, h);
        let x = vp.offset(Axis::Horizontal);
        let y = vp.offset(Axis::Vertical);
        assert!(x <= prev_x, "x grew from {prev_x} to {x}");
        assert!(y <= prev_y, "y grew from {prev_y} to {y}");
        assert!(x <= vp.max_scroll(Axis::Horizontal));
        assert!(y <= vp.max_scroll(Axis::Vertical));
        prev_x = x;
        prev_y = y;
    }
}

#[test]
fn resize_updates_thumb_from_offset() {
    let mut vp = sized_viewport();
    let max = vp.max_scroll(Axis::Horizontal);
    vp.seek(Axis::Horizontal, max / 2);
    vp.resize(1280, 800);
    let expected = f64::from(max / 2) / f64::from(max) * 900.0;
    assert!(approx_eq(vp.thumb_offset(Axis::Horizontal), expected));
}

// =============================================================
// Thumb visuals
// =============================================================

#[test]
fn thumb_at_rest_when_offset_zero() {
    let vp = sized_viewport();
    assert_eq!(vp.thumb_offset(Axis::Horizontal), 0.0);
}

#[test]
fn thumb_at_end_when_offset_max() {
    let mut vp = sized_viewport();
    let max = vp.max_scroll(Axis::Vertical);
    vp.seek(Axis::Vertical, max);
    assert!(approx_eq(vp.thumb_offset(Axis::Vertical), 900.0));
}

#[test]
fn thumb_rests_when_track_not_longer_than_thumb() {
    let mut vp = sized_viewport();
    vp.seek(Axis::Horizontal, 5000);
    assert!(vp.thumb_offset(Axis::Horizontal) > 0.0);
    vp.set_track_geometry(Axis::Horizontal, TrackGeometry::new(100.0, 100.0));
    vp.update_thumb_visuals();
    assert_eq!(vp.thumb_offset(Axis::Horizontal), 0.0);
    assert_eq!(vp.offset(Axis::Horizontal), 5000);
}

#[test]
fn thumb_rests_when_max_is_zero() {
    let mut vp = Viewport::default();
    vp.set_track_geometry(Axis::Horizontal, TrackGeometry::new(1000.0, 100.0));
    vp.resize(20_000, 800);
    assert_eq!(vp.thumb_offset(Axis::Horizontal), 0.0);
    assert!(!vp.begin_drag(Axis::Horizontal, 0.0));
}

#[test]
fn thumb_returns_to_rest_when_resize_leaves_nothing_to_scroll() {
    let mut vp = sized_viewport();
    drag(&mut vp, Axis::Horizontal, 0.0, 475.0);
    assert!(vp.thumb_offset(Axis::Horizontal) > 0.0);
    vp.resize(20_000, 800);
    assert_eq!(vp.offset(Axis::Horizontal), 0);
    assert_eq!(vp.thumb_offset(Axis::Horizontal), 0.0);
}

#[test]
fn drag_held_across_resize_to_zero_max_leaves_thumb_at_rest() {
    let mut vp = sized_viewport();
    vp.begin_drag(Axis::Horizontal, 0.0);
    vp.drag_move(Axis::Horizontal, 300.0);
    vp.resize(20_000, 800);
    assert!(vp.drag_move(Axis::Horizontal, 500.0).is_none());
    assert_eq!(vp.thumb_offset(Axis::Horizontal), 0.0);
    assert_eq!(vp.offset(Axis::Horizontal), 0);
}

// =============================================================
// Drag
// =============================================================

#[test]
fn begin_drag_sets_dragging_flag() {
    let mut vp = sized_viewport();
    assert!(vp.begin_drag(Axis::Horizontal, 10.0));
    assert!(vp.is_dragging(Axis::Horizontal));
    assert!(!vp.is_dragging(Axis::Vertical));
}

#[test]
fn begin_drag_noop_when_max_zero() {
    let mut vp = sized_viewport();
    vp.resize(20_000, 800);
    assert!(!vp.begin_drag(Axis::Horizontal, 10.0));
    assert!(!vp.is_dragging(Axis::Horizontal));
}

#[test]
fn drag_to_track_end_reaches_max() {
    let mut vp = sized_viewport();
    let offset = drag(&mut vp, Axis::Horizontal, 0.0, 900.0);
    assert_eq!(offset, Some(vp.max_scroll(Axis::Horizontal)));
}

#[test]
fn drag_half_way_rounds_offset() {
    let mut vp = sized_viewport();
    let max = vp.max_scroll(Axis::Horizontal);
    let offset = drag(&mut vp, Axis::Horizontal, 100.0, 550.0);
    let expected = (450.0 / 900.0 * f64::from(max)).round();
    assert_eq!(offset.map(f64::from), Some(expected));
}

#[test]
fn drag_clamps_thumb_to_track() {
    let mut vp = sized_viewport();
    vp.begin_drag(Axis::Vertical, 500.0);
    assert_eq!(vp.drag_move(Axis::Vertical, -5000.0), Some(0));
    assert_eq!(vp.thumb_offset(Axis::Vertical), 0.0);
    assert_eq!(vp.drag_move(Axis::Vertical, 50_000.0), Some(vp.max_scroll(Axis::Vertical)));
    assert_eq!(vp.thumb_offset(Axis::Vertical), 900.0);
}

#[test]
fn drag_is_relative_to_start_thumb() {
    let mut vp = sized_viewport();
    drag(&mut vp, Axis::Horizontal, 0.0, 300.0);
    vp.begin_drag(Axis::Horizontal, 1000.0);
    vp.drag_move(Axis::Horizontal, 1100.0);
    assert!(approx_eq(vp.thumb_offset(Axis::Horizontal), 400.0));
}

#[test]
fn drag_anchor_truncates_fractional_thumb() {
    let mut vp = sized_viewport();
    vp.set_track_geometry(Axis::Horizontal, TrackGeometry::new(1000.5, 100.0));
    drag(&mut vp, Axis::Horizontal, 0.0, 300.7);
    vp.begin_drag(Axis::Horizontal, 0.0);
    vp.drag_move(Axis::Horizontal, 0.0);
    assert_eq!(vp.thumb_offset(Axis::Horizontal), 300.0);
}

#[test]
fn drag_move_without_begin_is_ignored() {
    let mut vp = sized_viewport();
    assert_eq!(vp.drag_move(Axis::Horizontal, 400.0), None);
    assert_eq!(vp.offset(Axis::Horizontal), 0);
}

#[test]
fn drag_move_after_end_is_ignored() {
    let mut vp = sized_viewport();
    vp.begin_drag(Axis::Horizontal, 0.0);
    vp.drag_move(Axis::Horizontal, 100.0);
    let offset = vp.offset(Axis::Horizontal);
    vp.end_drag();
    assert_eq!(vp.drag_move(Axis::Horizontal, 800.0), None);
    assert_eq!(vp.offset(Axis::Horizontal), offset);
}

#[test]
fn drag_on_one_axis_leaves_other_untouched() {
    let mut vp = sized_viewport();
    drag(&mut vp, Axis::Horizontal, 0.0, 450.0);
    assert_eq!(vp.offset(Axis::Vertical), 0);
    assert_eq!(vp.drag_move(Axis::Vertical, 200.0), None);
}

#[test]
fn end_drag_clears_both_axes() {
    let mut vp = sized_viewport();
    vp.begin_drag(Axis::Horizontal, 0.0);
    vp.begin_drag(Axis::Vertical, 0.0);
    vp.end_drag();
    assert!(!vp.is_dragging(Axis::Horizontal));
    assert!(!vp.is_dragging(Axis::Vertical));
}

#[test]
fn drag_guard_track_equals_thumb() {
    let mut vp = sized_viewport();
    vp.set_track_geometry(Axis::Horizontal, TrackGeometry::new(100.0, 100.0));
    vp.begin_drag(Axis::Horizontal, 0.0);
    for x in [10.0, 50.0, 500.0, -40.0, 9999.0] {
        assert_eq!(vp.drag_move(Axis::Horizontal, x), None);
        assert_eq!(vp.offset(Axis::Horizontal), 0);
    }
}

#[test]
fn drag_guard_max_zero() {
    let mut vp = sized_viewport();
    vp.resize(1280, 20_000);
    vp.begin_drag(Axis::Vertical, 0.0);
    for y in [10.0, 500.0, 900.0] {
        assert_eq!(vp.drag_move(Axis::Vertical, y), None);
        assert_eq!(vp.offset(Axis::Vertical), 0);
    }
}

#[test]
fn drag_ignores_non_finite_pointer() {
    let mut vp = sized_viewport();
    vp.begin_drag(Axis::Horizontal, 0.0);
    assert_eq!(vp.drag_move(Axis::Horizontal, f64::NAN), None);
    assert_eq!(vp.drag_move(Axis::Horizontal, f64::INFINITY), None);
    assert_eq!(vp.offset(Axis::Horizontal), 0);
}

#[test]
fn offsets_stay_in_range_through_mixed_sequence() {
    let mut vp = sized_viewport();
    let steps: [(u32, u32, f64); 6] = [
        (1280, 800, 700.0),
        (3000, 900, -200.0),
        (900, 16_000, 1200.0),
        (16_484, 500, 450.0),
        (640, 480, 899.0),
        (2560, 1440, 30.0),
    ];
    for (w, h, pointer) in steps {
        vp.resize(w, h);
        for axis in [Axis::Horizontal, Axis::Vertical] {
            vp.begin_drag(axis, 0.0);
            vp.drag_move(axis, pointer);
            vp.end_drag();
            assert!(vp.offset(axis) <= vp.max_scroll(axis));
            assert!(vp.thumb_offset(axis).is_finite());
        }
    }
}

// =============================================================
// Camera
// =============================================================

#[test]
fn camera_reflects_offsets() {
    let mut vp = sized_viewport();
    vp.seek(Axis::Horizontal, 50);
    vp.seek(Axis::Vertical, 20);
    let cam = vp.camera();
    assert_eq!(cam.scroll_x, 50.0);
    assert_eq!(cam.scroll_y, 20.0);
}

#[test]
fn camera_translation_follows_drag() {
    let mut vp = sized_viewport();
    let offset = drag(&mut vp, Axis::Horizontal, 0.0, 90.0).unwrap_or_default();
    assert_eq!(vp.camera().container_translation().x, -f64::from(offset));
}
