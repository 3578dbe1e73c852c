// Shared animation/simulation tuning constants used by the native frontend.

// Default helix shape
pub const DEFAULT_HEIGHT: f32 = 12.0;
pub const DEFAULT_RADIUS: f32 = 2.0;
pub const DEFAULT_TURNS: f32 = 3.5;
pub const DEFAULT_BASE_PAIRS: u32 = 40;
pub const STRAND_SAMPLES_PER_BASE_PAIR: u32 = 3; // backbone is finer than the rungs

// Frame updater speeds (0.01 rad and 0.1 rad per 16 ms tick)
pub const ROTATION_SPEED: f32 = 0.625; // rad/s
pub const PULSE_SPEED: f32 = 6.25; // rad/s
pub const SECONDARY_FREQUENCY: f32 = 5.0; // oscillations per radian of spin

// Derived scalar ranges
pub const HEARTBEAT_MIN: f32 = 0.4;
pub const HEARTBEAT_SPAN: f32 = 0.6;
pub const SECONDARY_MIN: f32 = 0.6;
pub const SECONDARY_SPAN: f32 = 0.4;

// Tilt
pub const TILT_GAIN: f32 = 0.02; // tilt units -> radians
pub const GRAVITY_TILT_SCALE: f32 = 50.0; // gravity component -> tilt units
pub const TILT_SMOOTHING_TAU_SEC: f32 = 0.2;

// Simulated vitals
pub const VITALS_INTERVAL_SEC: f32 = 2.0;
pub const VITALS_EASE_SEC: f32 = 1.5;
pub const BPM_MIN: u32 = 68;
pub const BPM_MAX: u32 = 78;
pub const OXYGEN_MIN: f32 = 97.0;
pub const OXYGEN_MAX: f32 = 99.5;
pub const OXYGEN_ACTIVE_THRESHOLD: f32 = 95.0;
pub const INITIAL_BPM: u32 = 72;
pub const INITIAL_OXYGEN: f32 = 98.5;
