//! Visual-side state types shared with the native frontend.
//!
//! These types avoid referencing platform-specific APIs. The frontend
//! consumes them to build camera and model matrices.

use crate::animation::AnimationState;
use crate::tilt::TiltOffsets;
use glam::{EulerRot, Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
    /// Half extents of the visible rectangle on the plane at world depth `z`.
    pub fn half_extents_at(&self, z: f32) -> (f32, f32) {
        let distance = (self.eye.z - z).abs();
        let half_h = distance * (self.fovy_radians * 0.5).tan();
        (half_h * self.aspect, half_h)
    }
}

/// Orientation of the helix node: spin around Y plus tilt offsets.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HelixPose {
    pub yaw: f32,
    pub pitch: f32,
    pub roll: f32,
}

impl HelixPose {
    pub fn new(animation: &AnimationState, tilt: TiltOffsets) -> Self {
        Self {
            yaw: animation.rotation_angle,
            pitch: tilt.pitch,
            roll: tilt.roll,
        }
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_euler(EulerRot::YXZ, self.yaw, self.pitch, self.roll)
    }
}
