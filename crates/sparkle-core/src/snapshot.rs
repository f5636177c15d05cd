//! Read-only views handed to the renderer.
//!
//! Two channels exist. [`ImmediatePaint`] is produced on every pointer move so
//! the renderer may reposition the cursor layers right away, outside the frame
//! cadence. [`FrameSnapshot`] is produced once per executed tick and is the
//! only way particle changes reach the renderer.

use crate::particles::Particle;
use crate::pointer::PointerState;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerView {
    pub x: f32,
    pub y: f32,
    pub is_hovering: bool,
    pub is_pressing: bool,
}

impl From<PointerState> for PointerView {
    fn from(s: PointerState) -> Self {
        Self {
            x: s.position.x,
            y: s.position.y,
            is_hovering: s.is_hovering,
            is_pressing: s.is_pressing,
        }
    }
}

/// Pointer view delivered immediately after a move event.
pub type ImmediatePaint = PointerView;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleView {
    pub id: u64,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub color: &'static str,
    pub fade_ratio: f32,
}

impl From<&Particle> for ParticleView {
    fn from(p: &Particle) -> Self {
        Self {
            id: p.id,
            x: p.position.x,
            y: p.position.y,
            size: p.size,
            color: p.color,
            fade_ratio: p.fade_ratio(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameSnapshot {
    pub pointer: PointerView,
    pub particles: Vec<ParticleView>,
}

impl FrameSnapshot {
    pub fn contains(&self, id: u64) -> bool {
        self.particles.iter().any(|p| p.id == id)
    }
}
