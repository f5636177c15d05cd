//! Visual state of the cursor decorations.
//!
//! The renderer draws four layers around the pointer: a gradient dot, a thin
//! ring, a blurred trail and a halo of three floating dots. Their size and
//! opacity depend only on the pointer view, so they are computed here and the
//! renderer just applies them.

use crate::constants::*;
use crate::snapshot::{ParticleView, PointerView};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorLayers {
    pub dot_px: f32,
    pub dot_scale: f32,
    pub dot_tricolor: bool,
    pub ring_px: f32,
    pub ring_opacity: f32,
    pub trail_px: f32,
    pub trail_opacity: f32,
    pub halo_opacity: f32,
}

impl CursorLayers {
    pub fn for_pointer(p: &PointerView) -> Self {
        let i = p.is_hovering as usize;
        Self {
            dot_px: DOT_SIZE_PX[i],
            dot_scale: if p.is_pressing { PRESS_SCALE } else { 1.0 },
            dot_tricolor: p.is_hovering,
            ring_px: RING_SIZE_PX[i],
            ring_opacity: RING_OPACITY[i],
            trail_px: TRAIL_SIZE_PX[i],
            trail_opacity: TRAIL_OPACITY[i],
            halo_opacity: HALO_OPACITY[i],
        }
    }
}

/// Glow radii (inner, outer) of a sparkle's box shadow.
#[inline]
pub fn glow_radii(p: &ParticleView) -> (f32, f32) {
    (p.size * GLOW_INNER_MULT, p.size * GLOW_OUTER_MULT)
}
