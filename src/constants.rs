/// DOM projection constants.
///
/// Class names, stacking order and the static look of the cursor layers.
/// Sizes and opacities that depend on pointer state live in
/// `sparkle_core::constants`.

// Elements that count as interactive at mount time
pub const INTERACTIVE_SELECTOR: &str = "a, button, .nav-card, .contact-icon, .card-hover, \
     .btn-primary, input, textarea, .project-button, .cta-button, .modal-close-button, \
     .modal-home-button";

// Class names of the generated elements
pub const ROOT_CLASS: &str = "sparkle-cursor";
pub const DOT_CLASS: &str = "custom-cursor";
pub const RING_CLASS: &str = "cursor-ring";
pub const TRAIL_CLASS: &str = "cursor-trail";
pub const HALO_CLASS: &str = "cursor-particles";
pub const HALO_DOT_CLASS: &str = "particle";
pub const SPARKLE_CLASS: &str = "sparkle";

// Stacking order, back to front
pub const Z_TRAIL: i32 = 9997;
pub const Z_HALO: i32 = 9998;
pub const Z_RING: i32 = 9999;
pub const Z_DOT: i32 = 10000;
pub const Z_SPARKLE: i32 = 10001;

// Shared by every positioned layer: centred on its left/top, never hit-tested
pub const LAYER_BASE_CSS: &str =
    "position:fixed;pointer-events:none;border-radius:50%;transform:translate(-50%,-50%);";

// Dot fill and glow: idle / hovering
pub const DOT_GRADIENT: [&str; 2] = [
    "linear-gradient(135deg,#ff4d8d,#8a4dff)",
    "linear-gradient(135deg,#ff4d8d,#8a4dff,#06b6d4)",
];
pub const DOT_GLOW: [&str; 2] = [
    "0 0 40px rgba(255,77,141,0.7),0 0 80px rgba(138,77,255,0.5)",
    "0 0 80px rgba(255,77,141,0.9),0 0 160px rgba(138,77,255,0.7),0 0 240px rgba(6,182,212,0.5)",
];

pub const TRAIL_GRADIENT: &str = "radial-gradient(circle,rgba(255,77,141,0.4) 0%,\
     rgba(138,77,255,0.3) 30%,rgba(6,182,212,0.2) 60%,transparent 100%)";

// Halo box edge (px) and its three floating dots: left, top, size (px), colour, delay (s)
pub const HALO_BOX_PX: f32 = 100.0;
pub const HALO_DOTS: [(f32, f32, f32, &str, f32); 3] = [
    (20.0, 20.0, 4.0, "#ff4d8d", 0.0),
    (77.0, 60.0, 3.0, "#8a4dff", 1.0),
    (40.0, 78.0, 2.0, "#06b6d4", 2.0),
];

// Keyframes and dot state rules injected once per mount. The dot's inline
// style leaves `animation` to `.hover` and `box-shadow` to `.clicking`.
pub const KEYFRAMES_CSS: &str = "\
@keyframes gradientShift{0%{background-position:0% 50%}50%{background-position:100% 50%}100%{background-position:0% 50%}}\
@keyframes particleFloat{0%,100%{transform:translateY(0px) scale(1);opacity:1}50%{transform:translateY(-20px) scale(1.5);opacity:0.7}}\
@keyframes trailGlow{0%,100%{opacity:0.3;transform:translate(-50%,-50%) scale(1)}50%{opacity:0.6;transform:translate(-50%,-50%) scale(1.2)}}\
@keyframes sparkleGlow{0%,100%{transform:translate(-50%,-50%) scale(1);filter:brightness(1.5) contrast(1.2)}50%{transform:translate(-50%,-50%) scale(1.5);filter:brightness(2) contrast(1.5)}}\
@keyframes cursorPulse{0%,100%{transform:translate(-50%,-50%) scale(1)}50%{transform:translate(-50%,-50%) scale(1.1)}}\
.custom-cursor.hover{animation:gradientShift 2s ease infinite,cursorPulse 1s ease-in-out infinite}\
.custom-cursor.clicking{box-shadow:0 0 100px rgba(255,77,141,1),0 0 200px rgba(138,77,255,0.8)}";
