#![allow(clippy::float_cmp)]

use super::*;

fn sprite_at(x: f64, y: f64) -> PlacedSprite {
    PlacedSprite::new(TextureRef::default(), Point::new(x, y), PendingTransform::default())
}

// =============================================================
// PlacedSprite
// =============================================================

#[test]
fn placed_sprite_copies_transform() {
    let t = PendingTransform { scale_x: 1.3, scale_y: 0.7, rotation: 0.4 };
    let s = PlacedSprite::new(TextureRef::new(0, 2), Point::new(60.0, 30.0), t);
    assert_eq!(s.position(), Point::new(60.0, 30.0));
    assert_eq!(s.scale_x, 1.3);
    assert_eq!(s.scale_y, 0.7);
    assert_eq!(s.rotation, 0.4);
    assert_eq!(s.texture, TextureRef::new(0, 2));
}

#[test]
fn placed_sprite_anchor_is_center() {
    let s = sprite_at(0.0, 0.0);
    assert_eq!(s.anchor, Anchor::CENTER);
    assert_eq!(s.anchor.x, 0.5);
    assert_eq!(s.anchor.y, 0.5);
}

#[test]
fn placed_sprites_get_distinct_ids() {
    assert_ne!(sprite_at(1.0, 1.0).id, sprite_at(1.0, 1.0).id);
}

// =============================================================
// Scene
// =============================================================

#[test]
fn scene_starts_empty() {
    let scene = Scene::new();
    assert!(scene.is_empty());
    assert!(scene.last().is_none());
}

#[test]
fn scene_push_returns_id_of_new_top() {
    let mut scene = Scene::new();
    let sprite = sprite_at(5.0, 6.0);
    let expected = sprite.id;
    let id = scene.push(sprite);
    assert_eq!(id, expected);
    let top = scene.last().unwrap();
    assert_eq!(top.id, id);
    assert_eq!(top.position(), Point::new(5.0, 6.0));
}

#[test]
fn scene_iterates_in_insertion_order() {
    let mut scene = Scene::new();
    let a = scene.push(sprite_at(1.0, 0.0));
    let b = scene.push(sprite_at(2.0, 0.0));
    let c = scene.push(sprite_at(3.0, 0.0));
    let order: Vec<SpriteId> = scene.iter().map(|s| s.id).collect();
    assert_eq!(order, vec![a, b, c]);
    assert_eq!(scene.last().map(|s| s.id), Some(c));
}

#[test]
fn scene_allows_duplicates_at_same_position() {
    let mut scene = Scene::new();
    scene.push(sprite_at(10.0, 10.0));
    scene.push(sprite_at(10.0, 10.0));
    assert_eq!(scene.len(), 2);
}

// =============================================================
// PreviewSprite
// =============================================================

#[test]
fn preview_starts_hidden_at_origin() {
    let p = PreviewSprite::new(TextureRef::default());
    assert!(!p.visible);
    assert_eq!(p.position, Point::default());
    assert_eq!(p.transform, PendingTransform::default());
}

#[test]
fn preview_sync_transform_mirrors() {
    let mut p = PreviewSprite::new(TextureRef::default());
    let t = PendingTransform { scale_x: 2.0, scale_y: 1.0, rotation: -0.3 };
    p.sync_transform(t);
    assert_eq!(p.transform, t);
}
