//! Device tilt input and its mapping onto the helix orientation.
//!
//! The motion sensor itself is an external collaborator behind [`TiltSource`];
//! this module only maps already-smoothed scalars to small pitch/roll offsets.

use crate::constants::*;
use crate::error::HelixError;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TiltReading {
    pub x: f32,
    pub y: f32,
}

impl TiltReading {
    pub const NEUTRAL: Self = Self { x: 0.0, y: 0.0 };

    /// Convert the horizontal components of a gravity vector into tilt units.
    pub fn from_gravity(gx: f32, gy: f32) -> Self {
        Self {
            x: gx * GRAVITY_TILT_SCALE,
            y: -gy * GRAVITY_TILT_SCALE,
        }
    }
}

/// Rotation offsets in radians, applied on top of the primary spin.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TiltOffsets {
    pub pitch: f32,
    pub roll: f32,
}

#[inline]
pub fn tilt_offsets(reading: TiltReading) -> TiltOffsets {
    TiltOffsets {
        pitch: reading.y * TILT_GAIN,
        roll: reading.x * TILT_GAIN,
    }
}

/// Supplier of tilt readings. Returns `SensorUnavailable` when there is no input.
pub trait TiltSource {
    fn poll(&mut self) -> Result<TiltReading, HelixError>;
}

/// Source for hosts without any motion hardware.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoTiltSensor;

impl TiltSource for NoTiltSensor {
    fn poll(&mut self) -> Result<TiltReading, HelixError> {
        Err(HelixError::SensorUnavailable)
    }
}

/// Exponential smoothing of raw tilt readings.
#[derive(Clone, Copy, Debug)]
pub struct TiltSmoother {
    pub value: TiltReading,
    pub tau_sec: f32,
}

impl Default for TiltSmoother {
    fn default() -> Self {
        Self {
            value: TiltReading::NEUTRAL,
            tau_sec: TILT_SMOOTHING_TAU_SEC,
        }
    }
}

impl TiltSmoother {
    pub fn step(&mut self, target: TiltReading, dt_sec: f32) -> TiltReading {
        let alpha = if self.tau_sec > 0.0 {
            1.0 - (-dt_sec.max(0.0) / self.tau_sec).exp()
        } else {
            1.0
        };
        self.value.x += (target.x - self.value.x) * alpha;
        self.value.y += (target.y - self.value.y) * alpha;
        self.value
    }
}
