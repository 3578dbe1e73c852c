use glam::Vec3;

// Visual tuning constants used by the native frontend.

// Camera
pub const CAMERA_EYE: Vec3 = Vec3::new(0.0, 0.0, 15.0);
pub const CAMERA_FOVY_DEG: f32 = 60.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Strand backbone spheres
pub const STRAND_SPHERE_RADIUS: f32 = 0.08;
pub const STRAND_HALO_RADIUS: f32 = 0.12;
pub const STRAND_EMISSION: f32 = 0.6;
pub const STRAND_HALO_ALPHA: f32 = 0.3;
pub const STRAND_HALO_EMISSION: f32 = 0.3;

// Nucleotides sitting on the base-pair endpoints
pub const NUCLEOTIDE_RADIUS: f32 = 0.15;
pub const NUCLEOTIDE_HALO_FACTOR: f32 = 1.5;
pub const NUCLEOTIDE_EMISSION: f32 = 0.8;
pub const NUCLEOTIDE_HALO_ALPHA: f32 = 0.5;
pub const NUCLEOTIDE_HALO_EMISSION: f32 = 0.4;

// Base-pair connectors
pub const CONNECTOR_RADIUS: f32 = 0.04;
pub const CONNECTOR_ALPHA: f32 = 0.9;
pub const CONNECTOR_EMISSION: f32 = 0.3;

// Palette (linear-ish RGB)
pub const CYAN: [f32; 3] = [0.0, 1.0, 1.0];
pub const TEAL: [f32; 3] = [0.19, 0.69, 0.78];
pub const MINT: [f32; 3] = [0.0, 0.78, 0.75];
pub const BLUE: [f32; 3] = [0.0, 0.48, 1.0];
pub const RED: [f32; 3] = [1.0, 0.23, 0.19];

// Heartbeat -> emission mapping
pub const EMISSION_BASE: f32 = 0.3;
pub const EMISSION_SPAN: f32 = 0.7;
pub const EMISSION_ALPHA: f32 = 0.8;

// Background layout (pixel units unless noted)
pub const BACKDROP_Z: f32 = -10.0; // world-space plane behind the helix
pub const OVERLAY_Z: f32 = 5.0; // world-space plane in front of the helix
pub const GRID_SPACING_PX: f32 = 40.0;
pub const GRID_WOBBLE_PX: f32 = 5.0;
pub const GRID_WOBBLE_FREQ: f32 = 0.01;
pub const GRID_DOT_DIAMETER_PX: f32 = 2.0;
pub const GRID_DOT_ALPHA: f32 = 0.1;
pub const GRID_PERIOD_SEC: f32 = 15.0;
pub const PARTICLE_COUNT: usize = 40;
pub const PARTICLE_PERIOD_SEC: f32 = 20.0;
pub const PARTICLE_DRIFT_X: f32 = 0.3;
pub const PARTICLE_ROW_STEP_PX: f32 = 17.0;
pub const PARTICLE_SWAY_PX: f32 = 30.0;
pub const BACKDROP_GLOW_RADIUS_PX: f32 = 400.0;
pub const BACKDROP_GLOW_ALPHA: f32 = 0.05;
pub const PULSE_GLOW_RADIUS_PX: f32 = 190.0; // 150 px disc plus blur
pub const PULSE_GLOW_ALPHA: f32 = 0.6;

// Input
pub const POINTER_GRAVITY_RANGE: f32 = 0.3; // cursor at the window edge

// Frame pacing
pub const MAX_FRAME_DT_SEC: f32 = 0.25;

// Clear color: middle stop of the backdrop gradient
pub const CLEAR_COLOR: [f64; 3] = [0.02, 0.04, 0.08];

pub const APP_TITLE: &str = "DNA Helix";
