//! Decorative backdrop: a wobbling dot grid, drifting particles and the
//! heartbeat glows. Layout is computed in pixels and projected onto fixed
//! world-space planes in front of and behind the helix.

use crate::constants::*;
use crate::scene::{InstanceData, InstanceKind};
use glam::Vec3;
use helix_core::Camera;
use std::f32::consts::TAU;

/// Surface size in physical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1) as f32,
            height: height.max(1) as f32,
        }
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }
}

/// Maps pixel coordinates onto the world plane at depth `z`.
#[derive(Clone, Copy, Debug)]
pub struct PixelPlane {
    pub z: f32,
    half_w: f32,
    half_h: f32,
    viewport: Viewport,
}

impl PixelPlane {
    pub fn new(camera: &Camera, viewport: Viewport, z: f32) -> Self {
        let (half_w, half_h) = camera.half_extents_at(z);
        Self {
            z,
            half_w,
            half_h,
            viewport,
        }
    }

    pub fn world_per_px(&self) -> f32 {
        2.0 * self.half_h / self.viewport.height
    }

    /// Pixel coordinates (origin top-left, y down) to world position.
    pub fn to_world(&self, x_px: f32, y_px: f32) -> Vec3 {
        let u = x_px / self.viewport.width;
        let v = y_px / self.viewport.height;
        Vec3::new(
            (u - 0.5) * 2.0 * self.half_w,
            (0.5 - v) * 2.0 * self.half_h,
            self.z,
        )
    }
}

/// Phase of the dot-grid wobble at `elapsed_sec`, cycling over [0, 2π).
#[inline]
pub fn grid_offset(elapsed_sec: f32) -> f32 {
    (elapsed_sec / GRID_PERIOD_SEC).fract() * TAU
}

/// Vertical particle drift at `elapsed_sec`, cycling over [0, height).
#[inline]
pub fn particle_offset(elapsed_sec: f32, viewport: Viewport) -> f32 {
    (elapsed_sec / PARTICLE_PERIOD_SEC).fract() * viewport.height
}

/// Dot-grid centers in pixels.
pub fn grid_points(viewport: Viewport, elapsed_sec: f32) -> Vec<[f32; 2]> {
    let offset = grid_offset(elapsed_sec);
    let cols = (viewport.width / GRID_SPACING_PX).floor() as usize + 1;
    let rows = (viewport.height / GRID_SPACING_PX).floor() as usize + 1;
    let mut out = Vec::with_capacity(cols * rows);
    for c in 0..cols {
        let x = c as f32 * GRID_SPACING_PX;
        for r in 0..rows {
            let y = r as f32 * GRID_SPACING_PX;
            out.push([
                x + (offset + y * GRID_WOBBLE_FREQ).sin() * GRID_WOBBLE_PX,
                y + (offset + x * GRID_WOBBLE_FREQ).cos() * GRID_WOBBLE_PX,
            ]);
        }
    }
    out
}

/// Drifting particle positions in pixels, wrapped into the viewport.
pub fn particle_points(viewport: Viewport, elapsed_sec: f32) -> Vec<[f32; 2]> {
    let offset = particle_offset(elapsed_sec, viewport);
    (0..PARTICLE_COUNT)
        .map(|i| {
            let fi = i as f32;
            let x = fi * viewport.width / PARTICLE_COUNT as f32 + offset * PARTICLE_DRIFT_X;
            let y = fi * PARTICLE_ROW_STEP_PX + offset + (fi * 0.5).sin() * PARTICLE_SWAY_PX;
            [x.rem_euclid(viewport.width), y.rem_euclid(viewport.height)]
        })
        .collect()
}

/// Particle diameter (px) and alpha for the current cell activity.
#[inline]
pub fn particle_style(activity: f32) -> (f32, f32) {
    (3.0 + activity * 2.0, activity * 0.4 + 0.2)
}

/// All backdrop and overlay instances for one frame.
pub fn instances(
    camera: &Camera,
    viewport: Viewport,
    elapsed_sec: f32,
    heartbeat: f32,
    activity: f32,
) -> Vec<InstanceData> {
    let back = PixelPlane::new(camera, viewport, BACKDROP_Z);
    let front = PixelPlane::new(camera, viewport, OVERLAY_Z);
    let back_px = back.world_per_px();

    let grid = grid_points(viewport, elapsed_sec);
    let mut out = Vec::with_capacity(grid.len() + PARTICLE_COUNT + 2);

    out.push(InstanceData::new(
        InstanceKind::Backdrop,
        back.to_world(viewport.width * 0.5, viewport.height * 0.5),
        BACKDROP_GLOW_RADIUS_PX * back_px,
        RED,
        heartbeat * BACKDROP_GLOW_ALPHA,
        0.0,
    ));

    let dot_radius = GRID_DOT_DIAMETER_PX * 0.5 * back_px;
    out.extend(grid.into_iter().map(|[x, y]| {
        InstanceData::new(
            InstanceKind::Backdrop,
            back.to_world(x, y),
            dot_radius,
            CYAN,
            GRID_DOT_ALPHA,
            0.0,
        )
    }));

    let (diameter, alpha) = particle_style(activity);
    out.extend(particle_points(viewport, elapsed_sec).into_iter().map(|[x, y]| {
        InstanceData::new(
            InstanceKind::Backdrop,
            back.to_world(x, y),
            diameter * 0.5 * back_px,
            MINT,
            alpha,
            0.0,
        )
    }));

    out.push(InstanceData::new(
        InstanceKind::Overlay,
        front.to_world(viewport.width * 0.5, viewport.height * 0.5),
        PULSE_GLOW_RADIUS_PX * front.world_per_px(),
        RED,
        heartbeat * PULSE_GLOW_ALPHA,
        0.0,
    ));
    out
}
