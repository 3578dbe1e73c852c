use crate::constants::*;

/// Per-frame animation scalars.
///
/// `rotation_angle` and `pulse_phase` grow without bound; the derived values
/// only ever see them through `sin`, so no explicit wrapping is needed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationState {
    pub rotation_angle: f32,
    pub pulse_phase: f32,
    pub heartbeat_intensity: f32,
    pub secondary_oscillation: f32,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl AnimationState {
    /// State at the given angles with its derived scalars filled in.
    pub fn new(rotation_angle: f32, pulse_phase: f32) -> Self {
        Self {
            rotation_angle,
            pulse_phase,
            heartbeat_intensity: heartbeat_intensity(pulse_phase),
            secondary_oscillation: secondary_oscillation(rotation_angle),
        }
    }

    #[must_use]
    pub fn advance(self, dt: f32) -> Self {
        Self::new(
            self.rotation_angle + ROTATION_SPEED * dt,
            self.pulse_phase + PULSE_SPEED * dt,
        )
    }
}

/// Advance `state` by `dt` seconds. `dt` must already be non-negative.
#[inline]
pub fn advance(state: AnimationState, dt: f32) -> AnimationState {
    state.advance(dt)
}

/// Pulse-derived glow scalar in \[0.4, 1.0\].
#[inline]
pub fn heartbeat_intensity(pulse_phase: f32) -> f32 {
    let unit = (pulse_phase.sin() + 1.0) / 2.0;
    (unit * HEARTBEAT_SPAN + HEARTBEAT_MIN).clamp(HEARTBEAT_MIN, HEARTBEAT_MIN + HEARTBEAT_SPAN)
}

/// Spin-derived oscillation in \[0.6, 1.0\].
///
/// The angle is scaled in f64: near `f32::MAX` the f32 product overflows to
/// infinity and `sin` would return NaN.
#[inline]
pub fn secondary_oscillation(rotation_angle: f32) -> f32 {
    let scaled = f64::from(rotation_angle) * f64::from(SECONDARY_FREQUENCY);
    let unit = (scaled.sin() as f32 + 1.0) / 2.0;
    (unit * SECONDARY_SPAN + SECONDARY_MIN).clamp(SECONDARY_MIN, SECONDARY_MIN + SECONDARY_SPAN)
}
