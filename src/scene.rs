//! Conversion of helix geometry into GPU instances.
//!
//! Every primitive is drawn as a camera-facing quad. Spheres and halos are
//! round impostors; connectors are quads stretched along their link axis.

use crate::constants::*;
use glam::{Mat4, Vec3};
use helix_core::{HelixGeometry, Strand};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum InstanceKind {
    /// Lit sphere in helix (model) space.
    Sphere = 0,
    /// Soft glow around a sphere, helix space.
    Halo = 1,
    /// Capsule along `axis`, helix space.
    Connector = 2,
    /// Soft dot on the world-space plane behind the helix.
    Backdrop = 3,
    /// Soft glow on the world-space plane in front of the helix.
    Overlay = 4,
}

impl InstanceKind {
    /// Whether the instance follows the helix model matrix.
    pub fn in_helix_space(self) -> bool {
        matches!(
            self,
            InstanceKind::Sphere | InstanceKind::Halo | InstanceKind::Connector
        )
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub pos: [f32; 3],
    pub scale: f32,
    pub color: [f32; 4],
    pub axis: [f32; 3],
    pub emission: f32,
    pub kind: u32,
}

impl InstanceData {
    pub fn sphere(pos: Vec3, radius: f32, rgb: [f32; 3], alpha: f32, emission: f32) -> Self {
        Self::new(InstanceKind::Sphere, pos, radius, rgb, alpha, emission)
    }

    pub fn halo(pos: Vec3, radius: f32, rgb: [f32; 3], alpha: f32, emission: f32) -> Self {
        Self::new(InstanceKind::Halo, pos, radius, rgb, alpha, emission)
    }

    pub fn new(
        kind: InstanceKind,
        pos: Vec3,
        scale: f32,
        rgb: [f32; 3],
        alpha: f32,
        emission: f32,
    ) -> Self {
        Self {
            pos: pos.to_array(),
            scale,
            color: [rgb[0], rgb[1], rgb[2], alpha],
            axis: [0.0; 3],
            emission,
            kind: kind as u32,
        }
    }

    pub fn kind(&self) -> InstanceKind {
        match self.kind {
            0 => InstanceKind::Sphere,
            1 => InstanceKind::Halo,
            2 => InstanceKind::Connector,
            3 => InstanceKind::Backdrop,
            _ => InstanceKind::Overlay,
        }
    }
}

/// Static helix instances, in helix space. Built once per geometry.
pub fn helix_instances(geometry: &HelixGeometry) -> Vec<InstanceData> {
    let mut out =
        Vec::with_capacity(geometry.strand_points.len() * 2 + geometry.base_pair_links.len() * 5);

    for p in &geometry.strand_points {
        let rgb = match p.strand {
            Strand::Left => CYAN,
            Strand::Right => TEAL,
        };
        out.push(InstanceData::sphere(
            p.position,
            STRAND_SPHERE_RADIUS,
            rgb,
            1.0,
            STRAND_EMISSION,
        ));
        out.push(InstanceData::halo(
            p.position,
            STRAND_HALO_RADIUS,
            rgb,
            STRAND_HALO_ALPHA,
            STRAND_HALO_EMISSION,
        ));
    }

    for link in &geometry.base_pair_links {
        let mut connector = InstanceData::new(
            InstanceKind::Connector,
            link.midpoint(),
            CONNECTOR_RADIUS,
            BLUE,
            CONNECTOR_ALPHA,
            CONNECTOR_EMISSION,
        );
        // half extent along the link
        connector.axis = (link.rotation() * Vec3::Y * (link.length() * 0.5)).to_array();
        out.push(connector);

        for (pos, rgb) in [(link.left, CYAN), (link.right, MINT)] {
            out.push(InstanceData::sphere(
                pos,
                NUCLEOTIDE_RADIUS,
                rgb,
                1.0,
                NUCLEOTIDE_EMISSION,
            ));
            out.push(InstanceData::halo(
                pos,
                NUCLEOTIDE_RADIUS * NUCLEOTIDE_HALO_FACTOR,
                rgb,
                NUCLEOTIDE_HALO_ALPHA,
                NUCLEOTIDE_HALO_EMISSION,
            ));
        }
    }
    out
}

/// Emission multiplier for the current heartbeat intensity.
#[inline]
pub fn emission_intensity(heartbeat: f32) -> f32 {
    (EMISSION_BASE + heartbeat * EMISSION_SPAN) * EMISSION_ALPHA
}

/// World-space depth of an instance once the helix model matrix is applied.
#[inline]
pub fn world_depth(instance: &InstanceData, model: &Mat4) -> f32 {
    let pos = Vec3::from(instance.pos);
    if instance.kind().in_helix_space() {
        model.transform_point3(pos).z
    } else {
        pos.z
    }
}

/// Sort so the farthest instance (most negative world z) is drawn first.
pub fn sort_back_to_front(instances: &mut [InstanceData], model: &Mat4) {
    instances.sort_by(|a, b| world_depth(a, model).total_cmp(&world_depth(b, model)));
}
