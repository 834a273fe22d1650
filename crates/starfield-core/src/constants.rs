// Simulation and rendering tuning constants shared by every scene variant.

use std::f32::consts::PI;

// Fade-in
pub const FADE_IN_STEP: f32 = 0.02; // opacity gained per frame until fully visible

// Off-screen recycling (CSS px)
pub const RECYCLE_MARGIN: f32 = 20.0; // how far past the bounds a particle may drift
pub const EDGE_SPAWN_INSET: f32 = 10.0; // recycled particles reappear this far outside an edge

// Fast mover heading band, as fractions of PI (screen-up is negative y)
pub const FAST_MOVER_ANGLE_MIN: f32 = 0.2 * PI;
pub const FAST_MOVER_ANGLE_MAX: f32 = 0.3 * PI;

// Twinkle
pub const TWINKLE_SPEED_MIN: f32 = 0.002; // radians per millisecond
pub const TWINKLE_SPEED_STAR_JITTER: f32 = 0.0005;
pub const TWINKLE_SPEED_POINT_JITTER: f32 = 0.00002;

// Pointer
pub const CLICK_BURST_COUNT: usize = 7;

// Connections
pub const CONNECTION_THRESHOLD_PX: f32 = 180.0;
pub const CONNECTION_BASE_ALPHA: f32 = 0.15;

// Trails
pub const MAIN_TRAIL_CAP: usize = 15;
pub const SIDEBAR_TRAIL_CAP: usize = 8;
