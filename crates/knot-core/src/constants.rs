use glam::Vec3;

// Shared scene layout and motion tuning constants.

// Camera
pub const CAMERA_FOV_Y_DEG: f32 = 55.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;
pub const CAMERA_POSITION: [f32; 3] = [0.8, 0.6, 6.4];

// Centerpiece knot
pub const KNOT_POSITION: [f32; 3] = [0.0, 0.1, 0.0];
pub const KNOT_RADIUS: f32 = 0.85;
pub const KNOT_TUBE: f32 = 0.25;
pub const KNOT_TUBULAR_SEGMENTS: u32 = 180;
pub const KNOT_RADIAL_SEGMENTS: u32 = 24;
pub const KNOT_P: u32 = 2;
pub const KNOT_Q: u32 = 3;

// Skill nodes
pub const NODE_RADIUS: f32 = 0.16; // sphere radius, shared by mesh and picking
pub const NODE_WIDTH_SEGMENTS: u32 = 28;
pub const NODE_HEIGHT_SEGMENTS: u32 = 22;
pub const NODE_ORBIT_RADIUS: f32 = 1.65;
pub const NODE_ORBIT_Y_FREQ: f32 = 0.9;
pub const NODE_ORBIT_Y_AMPLITUDE: f32 = 0.55;

// Hover emphasis
pub const HOVER_SCALE: f32 = 1.22;
pub const HOVER_EMISSIVE_HEX: u32 = 0xffffff;
pub const HOVER_EMISSIVE_INTENSITY: f32 = 0.35;

// Starfield
pub const STAR_COUNT: usize = 900;
pub const STAR_EXTENT: [f32; 3] = [40.0, 26.0, 40.0];
pub const STAR_OPACITY: f32 = 0.55;

// Pointer parallax gains (radians per NDC unit)
pub const POINTER_YAW_GAIN: f32 = 0.35;
pub const POINTER_PITCH_GAIN: f32 = 0.18;
// Off-screen NDC used before the first pointer move so nothing is picked
pub const POINTER_NDC_SENTINEL: f32 = 999.0;

// Continuous motion
pub const MOTION_SPEED: f32 = 0.35;
pub const KNOT_SPIN_RATE_X: f32 = 0.24;
pub const KNOT_SPIN_RATE_Y: f32 = 0.34;
pub const STAR_SPIN_RATE: f32 = 0.02;
pub const WOBBLE_FREQ: f32 = 0.45; // rad/s
pub const WOBBLE_AMPLITUDE: f32 = 0.04;
pub const SMOOTHING_DECAY: f32 = 0.001; // fraction of the gap left after one second
pub const FLOAT_FREQ: f32 = 1.0; // rad/s
pub const FLOAT_AMPLITUDE: f32 = 0.32;
pub const FLOAT_PHASE_STEP: f32 = 0.8;

// Scroll-reactive motion
pub const SCROLL_RANGE_PX: f32 = 1200.0;
pub const SCROLL_PROGRESS_MAX: f32 = 1.25;
pub const SCROLL_YAW_GAIN: f32 = 0.55;
pub const SCROLL_PITCH_BASE: f32 = -0.12;
pub const SCROLL_PITCH_GAIN: f32 = 0.15;
pub const SCROLL_CAMERA_Z_GAIN: f32 = 0.75;

// Output surface
pub const PIXEL_RATIO_MIN: f32 = 1.0;
pub const PIXEL_RATIO_MAX: f32 = 2.0;

// Lighting and atmosphere
pub const AMBIENT_INTENSITY: f32 = 0.55;
pub const KEY_LIGHT_HEX: u32 = 0x7c5cff;
pub const KEY_LIGHT_INTENSITY: f32 = 1.1;
pub const KEY_LIGHT_POSITION: [f32; 3] = [3.0, 4.0, 4.0];
pub const RIM_LIGHT_HEX: u32 = 0x18d7ff;
pub const RIM_LIGHT_INTENSITY: f32 = 0.9;
pub const RIM_LIGHT_POSITION: [f32; 3] = [-4.0, 2.0, -2.0];
pub const FOG_HEX: u32 = 0x070a12;
pub const FOG_DENSITY: f32 = 0.065;

/// Label and base colour of each orbiting node, in orbit order.
pub const DEFAULT_SKILLS: [(&str, u32); 6] = [
    ("TypeScript", 0x18d7ff),
    ("React", 0x7c5cff),
    ("Three.js", 0xa78bfa),
    ("Node.js", 0x7dd3fc),
    ("Postgres", 0x93c5fd),
    ("Performance", 0xc4b5fd),
];

#[inline]
pub fn vec3_of(a: [f32; 3]) -> Vec3 {
    Vec3::new(a[0], a[1], a[2])
}
