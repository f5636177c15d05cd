//! Tunable engine parameters.
//!
//! Defaults mirror the constants in [`crate::constants`]. Nothing reads these
//! from the environment; the struct exists so tests and embedders can build an
//! engine with a deterministic shape (for example a fixed batch size).

use crate::constants::*;
use std::ops::RangeInclusive;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct SparkleParams {
    pub spawn_count: RangeInclusive<usize>,
    pub angle_jitter_rad: f32,
    pub spawn_offset_span: f32,
    pub speed_min: f32,
    pub speed_max: f32,
    pub size_min: f32,
    pub size_max: f32,
    pub life: RangeInclusive<u32>,
    pub gravity: f32,
    pub size_decay: f32,
    pub touch_width_threshold: f64,
    pub frame_interval_ms: f64,
    pub palette: &'static [&'static str],
}

impl Default for SparkleParams {
    fn default() -> Self {
        Self {
            spawn_count: SPAWN_COUNT_MIN..=SPAWN_COUNT_MAX,
            angle_jitter_rad: ANGLE_JITTER_RAD,
            spawn_offset_span: SPAWN_OFFSET_SPAN,
            speed_min: SPEED_MIN,
            speed_max: SPEED_MAX,
            size_min: SIZE_MIN,
            size_max: SIZE_MAX,
            life: LIFE_MIN..=LIFE_MAX,
            gravity: GRAVITY,
            size_decay: SIZE_DECAY,
            touch_width_threshold: TOUCH_WIDTH_THRESHOLD,
            frame_interval_ms: FRAME_INTERVAL_MS,
            palette: &SPARKLE_PALETTE,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParamsError {
    #[error("spawn count range {min}..={max} must be non-empty and start above zero")]
    SpawnCount { min: usize, max: usize },
    #[error("life range {min}..={max} must be non-empty and start above zero")]
    Life { min: u32, max: u32 },
    #[error("{name} range [{min}, {max}) is empty or negative")]
    Range {
        name: &'static str,
        min: f32,
        max: f32,
    },
    #[error("size decay {0} must lie in (0, 1]")]
    SizeDecay(f32),
    #[error("{name} must be finite and non-negative, got {value}")]
    NonNegative { name: &'static str, value: f64 },
    #[error("frame interval must be positive, got {0} ms")]
    FrameInterval(f64),
    #[error("palette must contain at least one colour")]
    EmptyPalette,
}

impl SparkleParams {
    /// Same defaults with a fixed batch size; handy for deterministic callers.
    pub fn with_fixed_batch(n: usize) -> Self {
        Self {
            spawn_count: n..=n,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ParamsError> {
        let (cmin, cmax) = (*self.spawn_count.start(), *self.spawn_count.end());
        if cmin == 0 || cmin > cmax {
            return Err(ParamsError::SpawnCount {
                min: cmin,
                max: cmax,
            });
        }
        let (lmin, lmax) = (*self.life.start(), *self.life.end());
        if lmin == 0 || lmin > lmax {
            return Err(ParamsError::Life {
                min: lmin,
                max: lmax,
            });
        }
        check_range("speed", self.speed_min, self.speed_max)?;
        check_range("size", self.size_min, self.size_max)?;
        if !(self.size_decay > 0.0 && self.size_decay <= 1.0) {
            return Err(ParamsError::SizeDecay(self.size_decay));
        }
        for (name, value) in [
            ("angle jitter", self.angle_jitter_rad as f64),
            ("spawn offset span", self.spawn_offset_span as f64),
            ("gravity", self.gravity as f64),
            ("touch width threshold", self.touch_width_threshold),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ParamsError::NonNegative { name, value });
            }
        }
        if !(self.frame_interval_ms.is_finite() && self.frame_interval_ms > 0.0) {
            return Err(ParamsError::FrameInterval(self.frame_interval_ms));
        }
        if self.palette.is_empty() {
            return Err(ParamsError::EmptyPalette);
        }
        Ok(())
    }
}

// Half-open ranges may be degenerate only when min == max (fixed value).
fn check_range(name: &'static str, min: f32, max: f32) -> Result<(), ParamsError> {
    if !min.is_finite() || !max.is_finite() || min < 0.0 || min > max {
        return Err(ParamsError::Range { name, min, max });
    }
    Ok(())
}
