use crate::params::{ParamsError, SparkleParams};
use glam::Vec2;
use rand::prelude::*;
use smallvec::SmallVec;
use std::f32::consts::TAU;

/// Ids of one emission batch. Batches are small, so they stay inline.
pub type BatchIds = SmallVec<[u64; 4]>;

/// A short-lived sparkle emitted on pointer movement.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub id: u64,
    pub position: Vec2,
    pub velocity: Vec2,
    pub remaining_life: u32,
    pub max_life: u32,
    pub size: f32,
    pub color: &'static str,
}

impl Particle {
    /// Opacity ratio in \[0, 1\]; 1 at spawn, approaching 0 at expiry.
    #[inline]
    pub fn fade_ratio(&self) -> f32 {
        if self.max_life == 0 {
            return 0.0;
        }
        self.remaining_life as f32 / self.max_life as f32
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.remaining_life > 0
    }
}

/// Owns the live sparkle set and advances it one frame at a time.
///
/// Particles never interact, so update order is irrelevant. Culling happens
/// in the same tick a particle's life reaches zero: a particle ticked
/// `max_life` times is gone from the live set right after that tick.
pub struct ParticleSimulator {
    particles: Vec<Particle>,
    next_id: u64,
    rng: StdRng,
    params: SparkleParams,
}

impl ParticleSimulator {
    /// Rejects parameters that could make spawning panic, such as an empty
    /// palette or an inverted range.
    pub fn new(params: SparkleParams, seed: u64) -> Result<Self, ParamsError> {
        params.validate()?;
        Ok(Self {
            particles: Vec::with_capacity(64),
            next_id: 0,
            rng: StdRng::seed_from_u64(seed),
            params,
        })
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Next id that will be handed out.
    #[inline]
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn get(&self, id: u64) -> Option<&Particle> {
        self.particles.iter().find(|p| p.id == id)
    }

    /// Emits a radial burst around the origin with a random batch size.
    pub fn spawn_batch(&mut self, origin_x: f32, origin_y: f32) -> BatchIds {
        let n = self.rng.gen_range(self.params.spawn_count.clone());
        self.spawn_batch_of(n, origin_x, origin_y)
    }

    /// Emits exactly `n` sparkles with angles evenly spaced around the circle,
    /// each nudged by a small random jitter.
    pub fn spawn_batch_of(&mut self, n: usize, origin_x: f32, origin_y: f32) -> BatchIds {
        let mut ids = BatchIds::new();
        if n == 0 {
            return ids;
        }
        let origin = Vec2::new(origin_x, origin_y);
        let p = &self.params;
        for i in 0..n {
            let angle = TAU * i as f32 / n as f32 + self.rng.gen::<f32>() * p.angle_jitter_rad;
            let speed = sample(&mut self.rng, p.speed_min, p.speed_max);
            let offset = Vec2::new(
                (self.rng.gen::<f32>() - 0.5) * p.spawn_offset_span,
                (self.rng.gen::<f32>() - 0.5) * p.spawn_offset_span,
            );
            let max_life = self.rng.gen_range(p.life.clone());
            let size = sample(&mut self.rng, p.size_min, p.size_max);
            let color = p.palette[self.rng.gen_range(0..p.palette.len())];

            let id = self.next_id;
            self.next_id += 1;
            self.particles.push(Particle {
                id,
                position: origin + offset,
                velocity: Vec2::from_angle(angle) * speed,
                remaining_life: max_life,
                max_life,
                size,
                color,
            });
            ids.push(id);
        }
        ids
    }

    /// Advances every live sparkle by one frame, then drops the expired ones.
    pub fn tick(&mut self) {
        let gravity = self.params.gravity;
        let decay = self.params.size_decay;
        for p in &mut self.particles {
            p.position += p.velocity;
            p.velocity.y += gravity;
            p.remaining_life = p.remaining_life.saturating_sub(1);
            p.size *= decay;
        }
        self.particles.retain(Particle::is_alive);
    }

    /// Drops every live sparkle. The id counter is left untouched.
    pub fn clear(&mut self) {
        self.particles.clear();
    }
}

// Uniform in [min, max); collapses to `min` for a degenerate range.
#[inline]
fn sample(rng: &mut StdRng, min: f32, max: f32) -> f32 {
    if max > min {
        rng.gen_range(min..max)
    } else {
        min
    }
}
