// Host-side tests for the inline CSS of projected elements.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod style {
    include!("../src/style.rs");
}

use sparkle_core::{CursorLayers, ParticleView, PointerView};
use style::*;

fn pointer(x: f32, y: f32, hovering: bool, pressing: bool) -> PointerView {
    PointerView {
        x,
        y,
        is_hovering: hovering,
        is_pressing: pressing,
    }
}

#[test]
fn dot_is_positioned_at_pointer_and_sized_by_hover() {
    let p = pointer(100.0, 42.5, false, false);
    let css = dot_css(&p, &CursorLayers::for_pointer(&p));
    assert!(css.contains("left:100.00px;top:42.50px;"));
    assert!(css.contains("width:24px;height:24px;"));
    assert!(css.contains("scale(1)"));
    assert!(css.contains("animation:none"));

    let p = pointer(100.0, 42.5, true, true);
    let css = dot_css(&p, &CursorLayers::for_pointer(&p));
    assert!(css.contains("width:50px;height:50px;"));
    assert!(css.contains("scale(0.8)"));
    assert!(css.contains("#06b6d4"), "hover adds the third gradient stop");
}

#[test]
fn dot_leaves_state_rules_to_the_stylesheet() {
    let idle = pointer(0.0, 0.0, false, false);
    let css = dot_css(&idle, &CursorLayers::for_pointer(&idle));
    assert!(css.contains("box-shadow:"));
    assert!(css.contains("animation:none"));

    // Hover animation comes from `.custom-cursor.hover`
    let hover = pointer(0.0, 0.0, true, false);
    let css = dot_css(&hover, &CursorLayers::for_pointer(&hover));
    assert!(!css.contains("animation:"));
    assert!(css.contains("box-shadow:"));

    // Pressed glow comes from `.custom-cursor.clicking`
    let pressed = pointer(0.0, 0.0, false, true);
    let css = dot_css(&pressed, &CursorLayers::for_pointer(&pressed));
    assert!(!css.contains("box-shadow:"));
    assert!(css.contains("scale(0.8)"));
}

#[test]
fn ring_trail_and_halo_follow_hover() {
    let idle = pointer(10.0, 20.0, false, false);
    let hover = pointer(10.0, 20.0, true, false);
    let li = CursorLayers::for_pointer(&idle);
    let lh = CursorLayers::for_pointer(&hover);

    assert!(ring_css(&idle, &li).contains("width:40px"));
    assert!(ring_css(&hover, &lh).contains("width:80px"));
    assert!(ring_css(&hover, &lh).contains("opacity:0.8;"));

    assert!(trail_css(&idle, &li).contains("width:60px"));
    assert!(trail_css(&idle, &li).contains("opacity:0.3;"));
    assert!(trail_css(&hover, &lh).contains("width:120px"));

    assert!(halo_css(&idle, &li).contains("opacity:0;"));
    assert!(halo_css(&hover, &lh).contains("opacity:1;"));
}

#[test]
fn layers_are_stacked_back_to_front() {
    let p = pointer(0.0, 0.0, false, false);
    let l = CursorLayers::for_pointer(&p);
    assert!(trail_css(&p, &l).contains("z-index:9997;"));
    assert!(halo_css(&p, &l).contains("z-index:9998;"));
    assert!(ring_css(&p, &l).contains("z-index:9999;"));
    assert!(dot_css(&p, &l).contains("z-index:10000;"));
}

#[test]
fn sparkle_css_carries_fade_glow_and_colour() {
    let s = ParticleView {
        id: 9,
        x: 12.0,
        y: 34.0,
        size: 4.0,
        color: "#ffd700",
        fade_ratio: 0.5,
    };
    let css = sparkle_css(&s);
    assert!(css.contains("left:12.00px;top:34.00px;"));
    assert!(css.contains("width:4.00px;height:4.00px;"));
    assert!(css.contains("background:#ffd700;"));
    assert!(css.contains("opacity:0.500;"));
    assert!(css.contains("0 0 12.00px #ffd700,0 0 24.00px #ffd700"));
    assert!(css.contains("z-index:10001;"));
}

#[test]
fn sparkle_opacity_is_clamped() {
    let s = ParticleView {
        id: 0,
        x: 0.0,
        y: 0.0,
        size: 1.0,
        color: "#ff4d8d",
        fade_ratio: 1.7,
    };
    assert!(sparkle_css(&s).contains("opacity:1.000;"));
}

#[test]
fn halo_dots_exist_only_for_configured_slots() {
    for i in 0..constants::HALO_DOTS.len() {
        let css = halo_dot_css(i).expect("configured dot");
        assert!(css.contains("position:absolute"));
        assert!(css.contains("particleFloat"));
    }
    assert!(halo_dot_css(constants::HALO_DOTS.len()).is_none());
    assert!(halo_dot_css(1).expect("second dot").contains("infinite 1s"));
}

#[test]
fn visibility_toggles_display() {
    assert_eq!(visibility_css(true), "");
    assert_eq!(visibility_css(false), "display:none");
}
