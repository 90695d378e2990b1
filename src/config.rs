//! Application-level configuration constants.

// Countdown behavior
pub const TICK_MS: u32 = 1_000;

/// Sound played at each work/break boundary.
pub const NOTIFICATION_SOUND_URL: &str =
    "https://assets.mixkit.co/active_storage/sfx/2869/2869-preview.mp3";

// Progress ring geometry. The dash length matches the circumference of the
// r = 88 circle (2 * pi * 88 is roughly 552.9).
pub const RING_SIZE: u32 = 192;
pub const RING_RADIUS: u32 = 88;
pub const RING_STROKE_WIDTH: u32 = 12;
pub const RING_CIRCUMFERENCE: f64 = 553.0;
