// Inline CSS for every projected element. Pure string building so it can be
// tested on the host.

use crate::constants::*;
use sparkle_core::{glow_radii, CursorLayers, ParticleView, PointerView};

pub fn dot_css(p: &PointerView, l: &CursorLayers) -> String {
    let i = l.dot_tricolor as usize;
    let mut css = format!(
        "{LAYER_BASE_CSS}left:{:.2}px;top:{:.2}px;width:{:.0}px;height:{:.0}px;z-index:{Z_DOT};\
         background:{};background-size:{};border:2px solid rgba(255,255,255,0.8);\
         transform:translate(-50%,-50%) scale({});\
         transition:width 0.2s ease,height 0.2s ease,transform 0.05s ease;will-change:transform;",
        p.x,
        p.y,
        l.dot_px,
        l.dot_px,
        DOT_GRADIENT[i],
        if l.dot_tricolor { "200% 200%" } else { "100% 100%" },
        l.dot_scale,
    );
    // Inline declarations beat class rules, so `.hover` and `.clicking`
    // only apply where these are left out.
    if !p.is_pressing {
        css.push_str(&format!("box-shadow:{};", DOT_GLOW[i]));
    }
    if !p.is_hovering {
        css.push_str("animation:none;");
    }
    css
}

pub fn ring_css(p: &PointerView, l: &CursorLayers) -> String {
    format!(
        "{LAYER_BASE_CSS}left:{:.2}px;top:{:.2}px;width:{:.0}px;height:{:.0}px;z-index:{Z_RING};\
         border:2px solid rgba(255,77,141,0.3);transition:all 0.1s ease;opacity:{};",
        p.x, p.y, l.ring_px, l.ring_px, l.ring_opacity,
    )
}

pub fn trail_css(p: &PointerView, l: &CursorLayers) -> String {
    format!(
        "{LAYER_BASE_CSS}left:{:.2}px;top:{:.2}px;width:{:.0}px;height:{:.0}px;z-index:{Z_TRAIL};\
         background:{TRAIL_GRADIENT};transition:all 0.3s ease;opacity:{};filter:blur(8px);\
         animation:trailGlow 2s ease-in-out infinite;",
        p.x, p.y, l.trail_px, l.trail_px, l.trail_opacity,
    )
}

pub fn halo_css(p: &PointerView, l: &CursorLayers) -> String {
    format!(
        "{LAYER_BASE_CSS}border-radius:0;left:{:.2}px;top:{:.2}px;width:{HALO_BOX_PX:.0}px;\
         height:{HALO_BOX_PX:.0}px;z-index:{Z_HALO};transition:all 0.2s ease;opacity:{};",
        p.x, p.y, l.halo_opacity,
    )
}

/// Static style of halo dot `i`; `None` past the last dot.
pub fn halo_dot_css(i: usize) -> Option<String> {
    let (left, top, size, color, delay) = *HALO_DOTS.get(i)?;
    Some(format!(
        "position:absolute;left:{left:.0}px;top:{top:.0}px;width:{size:.0}px;height:{size:.0}px;\
         border-radius:50%;background:{color};\
         animation:particleFloat 3s ease-in-out infinite {delay:.0}s;"
    ))
}

pub fn sparkle_css(s: &ParticleView) -> String {
    let (inner, outer) = glow_radii(s);
    format!(
        "{LAYER_BASE_CSS}left:{:.2}px;top:{:.2}px;width:{:.2}px;height:{:.2}px;z-index:{Z_SPARKLE};\
         background:{color};opacity:{:.3};box-shadow:0 0 {inner:.2}px {color},0 0 {outer:.2}px {color};\
         animation:sparkleGlow 0.3s ease-in-out infinite;filter:brightness(1.5) contrast(1.2);",
        s.x,
        s.y,
        s.size,
        s.size,
        s.fade_ratio.clamp(0.0, 1.0),
        color = s.color,
    )
}

#[inline]
pub fn visibility_css(visible: bool) -> &'static str {
    if visible {
        ""
    } else {
        "display:none"
    }
}
