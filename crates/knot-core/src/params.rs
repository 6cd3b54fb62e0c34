use crate::constants::*;

/// Runtime-tunable motion parameters.
///
/// `Default` reproduces the stock look exactly; every field maps to one of
/// the constants in [`crate::constants`].
#[derive(Clone, Debug, PartialEq)]
pub struct MotionParams {
    pub speed: f32,
    pub knot_spin_x: f32,
    pub knot_spin_y: f32,
    pub star_spin: f32,
    pub wobble_freq: f32,
    pub wobble_amplitude: f32,
    /// Fraction of the orientation gap still open after one second.
    pub smoothing_decay: f32,
    pub float_freq: f32,
    pub float_amplitude: f32,
    pub float_phase_step: f32,
    pub yaw_gain: f32,
    pub pitch_gain: f32,
    pub scroll: ScrollParams,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            speed: MOTION_SPEED,
            knot_spin_x: KNOT_SPIN_RATE_X,
            knot_spin_y: KNOT_SPIN_RATE_Y,
            star_spin: STAR_SPIN_RATE,
            wobble_freq: WOBBLE_FREQ,
            wobble_amplitude: WOBBLE_AMPLITUDE,
            smoothing_decay: SMOOTHING_DECAY,
            float_freq: FLOAT_FREQ,
            float_amplitude: FLOAT_AMPLITUDE,
            float_phase_step: FLOAT_PHASE_STEP,
            yaw_gain: POINTER_YAW_GAIN,
            pitch_gain: POINTER_PITCH_GAIN,
            scroll: ScrollParams::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollParams {
    pub range_px: f32,
    pub progress_max: f32,
    pub yaw_gain: f32,
    pub pitch_base: f32,
    pub pitch_gain: f32,
    pub camera_z_base: f32,
    pub camera_z_gain: f32,
}

impl Default for ScrollParams {
    fn default() -> Self {
        Self {
            range_px: SCROLL_RANGE_PX,
            progress_max: SCROLL_PROGRESS_MAX,
            yaw_gain: SCROLL_YAW_GAIN,
            pitch_base: SCROLL_PITCH_BASE,
            pitch_gain: SCROLL_PITCH_GAIN,
            camera_z_base: CAMERA_POSITION[2],
            camera_z_gain: SCROLL_CAMERA_Z_GAIN,
        }
    }
}

/// User preference for non-essential animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MotionPreference {
    #[default]
    Full,
    Reduced,
}

impl MotionPreference {
    /// Multiplier applied to every continuous motion term.
    #[inline]
    pub fn scale(self) -> f32 {
        match self {
            MotionPreference::Full => 1.0,
            MotionPreference::Reduced => 0.0,
        }
    }

    #[inline]
    pub fn is_reduced(self) -> bool {
        self == MotionPreference::Reduced
    }
}
