#![allow(clippy::float_cmp)]

use super::*;

const MANIFEST: &str = r#"[
    {
        "source": "terrain.png",
        "width": 64,
        "height": 32,
        "frames": [
            { "x": 0, "y": 0, "width": 16, "height": 16 },
            { "x": 16, "y": 0, "width": 16, "height": 16 },
            { "x": 32, "y": 16, "width": 32, "height": 16 }
        ]
    },
    {
        "source": "props.png",
        "width": 16,
        "height": 16,
        "frames": [{ "x": 0, "y": 0, "width": 16, "height": 16 }]
    }
]"#;

// =============================================================
// Frame::uv
// =============================================================

#[test]
fn uv_full_atlas_frame_is_unit_square() {
    let uv = Frame::new(0.0, 0.0, 16.0, 16.0).uv(16.0, 16.0);
    assert_eq!(uv.start, Point::new(0.0, 0.0));
    assert_eq!(uv.end, Point::new(1.0, 1.0));
}

#[test]
fn uv_sub_frame_is_normalized() {
    let uv = Frame::new(32.0, 16.0, 32.0, 16.0).uv(64.0, 32.0);
    assert_eq!(uv.start, Point::new(0.5, 0.5));
    assert_eq!(uv.end, Point::new(1.0, 1.0));
}

#[test]
fn uv_zero_sized_atlas_is_zero_not_nan() {
    let uv = Frame::new(4.0, 4.0, 8.0, 8.0).uv(0.0, 10.0);
    assert_eq!(uv.start, Point::default());
    assert_eq!(uv.end, Point::default());
}

// =============================================================
// AtlasSet
// =============================================================

#[test]
fn single_has_one_default_frame() {
    let set = AtlasSet::single("sprites.png", 16);
    assert_eq!(set.len(), 1);
    let frame = set.resolve(TextureRef::default()).unwrap();
    assert_eq!(*frame, Frame::new(0.0, 0.0, 16.0, 16.0));
    assert_eq!(set.get(0).unwrap().source, "sprites.png");
}

#[test]
fn current_texture_is_first_frame_of_first_atlas() {
    let set = AtlasSet::from_json(MANIFEST).unwrap();
    assert_eq!(set.current_texture(), TextureRef::new(0, 0));
}

#[test]
fn from_json_preserves_order() {
    let set = AtlasSet::from_json(MANIFEST).unwrap();
    assert_eq!(set.len(), 2);
    assert_eq!(set.get(0).unwrap().source, "terrain.png");
    assert_eq!(set.get(1).unwrap().source, "props.png");
    let frame = set.resolve(TextureRef::new(0, 2)).unwrap();
    assert_eq!(frame.x, 32.0);
    assert_eq!(frame.width, 32.0);
}

#[test]
fn from_json_rejects_non_array() {
    let err = AtlasSet::from_json(r#"{ "source": "a.png" }"#).unwrap_err();
    assert!(matches!(err, EditorError::Json(_)));
}

#[test]
fn resolve_unknown_atlas_errors() {
    let set = AtlasSet::from_json(MANIFEST).unwrap();
    let err = set.resolve(TextureRef::new(5, 0)).unwrap_err();
    assert!(matches!(err, EditorError::UnknownAtlas(5)));
}

#[test]
fn resolve_unknown_frame_errors() {
    let set = AtlasSet::from_json(MANIFEST).unwrap();
    let err = set.resolve(TextureRef::new(1, 3)).unwrap_err();
    assert!(matches!(err, EditorError::UnknownFrame { atlas: 1, frame: 3 }));
    assert_eq!(err.to_string(), "unknown frame 3 in atlas 1");
}

#[test]
fn empty_set_resolves_nothing() {
    let set = AtlasSet::default();
    assert!(set.is_empty());
    assert!(set.resolve(set.current_texture()).is_err());
}

// =============================================================
// AtlasSet::source_rect
// =============================================================

#[test]
fn source_rect_matches_frame_at_declared_size() {
    let set = AtlasSet::from_json(MANIFEST).unwrap();
    let rect = set.source_rect(TextureRef::new(0, 2), 64.0, 32.0).unwrap();
    assert_eq!(rect, Frame::new(32.0, 16.0, 32.0, 16.0));
}

#[test]
fn source_rect_scales_with_loaded_image() {
    let set = AtlasSet::from_json(MANIFEST).unwrap();
    let rect = set.source_rect(TextureRef::new(0, 1), 128.0, 64.0).unwrap();
    assert_eq!(rect, Frame::new(32.0, 0.0, 32.0, 32.0));
}

#[test]
fn source_rect_unknown_frame_errors() {
    let set = AtlasSet::single("a.png", 16);
    let err = set.source_rect(TextureRef::new(0, 1), 16.0, 16.0).unwrap_err();
    assert!(matches!(err, EditorError::UnknownFrame { atlas: 0, frame: 1 }));
}
