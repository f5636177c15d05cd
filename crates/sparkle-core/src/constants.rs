// Sparkle emission and physics tuning. Units are CSS pixels and frames
// (one frame = one executed tick) unless stated otherwise.

// Batch size per pointer-move event (inclusive)
pub const SPAWN_COUNT_MIN: usize = 2;
pub const SPAWN_COUNT_MAX: usize = 4;

// Radial burst shape
pub const ANGLE_JITTER_RAD: f32 = 0.5; // added on top of 2π·i/N, in [0, jitter)
pub const SPAWN_OFFSET_SPAN: f32 = 20.0; // origin jitter box edge, centred on the pointer

// Initial kinematics
pub const SPEED_MIN: f32 = 2.0;
pub const SPEED_MAX: f32 = 5.0; // exclusive
pub const SIZE_MIN: f32 = 2.0;
pub const SIZE_MAX: f32 = 6.0; // exclusive

// Lifetime in ticks (inclusive)
pub const LIFE_MIN: u32 = 20;
pub const LIFE_MAX: u32 = 49;

// Per-tick integration
pub const GRAVITY: f32 = 0.1; // added to velocity.y every tick
pub const SIZE_DECAY: f32 = 0.98; // size multiplier every tick

// Device classification: viewports at or below this width are touch-inert
pub const TOUCH_WIDTH_THRESHOLD: f64 = 768.0;

// Frame throttle (milliseconds between executed ticks, ≈60Hz)
pub const FRAME_INTERVAL_MS: f64 = 16.0;

// Sparkle palette
pub const SPARKLE_PALETTE: [&str; 5] = ["#ff4d8d", "#8a4dff", "#06b6d4", "#ffd700", "#ff6b35"];

// Cursor decoration sizes (px): idle / hovering
pub const DOT_SIZE_PX: [f32; 2] = [24.0, 50.0];
pub const RING_SIZE_PX: [f32; 2] = [40.0, 80.0];
pub const TRAIL_SIZE_PX: [f32; 2] = [60.0, 120.0];

// Cursor decoration opacities: idle / hovering
pub const RING_OPACITY: [f32; 2] = [0.4, 0.8];
pub const TRAIL_OPACITY: [f32; 2] = [0.3, 0.8];
pub const HALO_OPACITY: [f32; 2] = [0.0, 1.0];

// Dot scale while a button is held
pub const PRESS_SCALE: f32 = 0.8;

// Sparkle glow radii as multiples of the sparkle size
pub const GLOW_INNER_MULT: f32 = 3.0;
pub const GLOW_OUTER_MULT: f32 = 6.0;
