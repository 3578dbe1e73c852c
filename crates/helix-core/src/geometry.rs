//! Parametric double-helix geometry.
//!
//! The helix runs along the Y axis, centered on the origin. Positions are
//! derived analytically from a normalized progress value so the output is
//! fully deterministic for a given set of parameters.

use crate::constants::*;
use crate::error::HelixError;
use glam::{Quat, Vec3};
use std::f32::consts::{PI, TAU};

/// Structural parameters of the double helix.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HelixParameters {
    pub height: f32,
    pub radius: f32,
    pub turn_count: f32,
    pub base_pair_count: u32,
}

impl Default for HelixParameters {
    fn default() -> Self {
        Self {
            height: DEFAULT_HEIGHT,
            radius: DEFAULT_RADIUS,
            turn_count: DEFAULT_TURNS,
            base_pair_count: DEFAULT_BASE_PAIRS,
        }
    }
}

impl HelixParameters {
    pub fn validate(&self) -> Result<(), HelixError> {
        if self.base_pair_count == 0 {
            return Err(HelixError::InvalidParameters(
                "base pair count must be at least 1".into(),
            ));
        }
        let total_points = self
            .base_pair_count
            .checked_mul(STRAND_SAMPLES_PER_BASE_PAIR)
            .and_then(|samples| samples.checked_mul(2));
        if total_points.is_none() {
            return Err(HelixError::InvalidParameters(format!(
                "base pair count {} is too large",
                self.base_pair_count
            )));
        }
        let fields = [
            ("height", self.height),
            ("radius", self.radius),
            ("turn count", self.turn_count),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(HelixError::InvalidParameters(format!(
                    "{name} must be positive and finite, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Number of backbone samples on each strand. Saturates for counts that
    /// [`validate`](Self::validate) rejects.
    pub fn strand_samples(&self) -> u32 {
        self.base_pair_count.saturating_mul(STRAND_SAMPLES_PER_BASE_PAIR)
    }

    /// Position on `strand` at `progress` in \[0, 1).
    pub fn point_at(&self, progress: f32, strand: Strand) -> Vec3 {
        let angle = progress * TAU * self.turn_count + strand.phase();
        let y = -self.height / 2.0 + progress * self.height;
        Vec3::new(angle.cos() * self.radius, y, angle.sin() * self.radius)
    }
}

/// One of the two backbone curves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strand {
    Left,
    Right,
}

impl Strand {
    /// Angular offset of the strand around the axis.
    #[inline]
    pub fn phase(self) -> f32 {
        match self {
            Strand::Left => 0.0,
            Strand::Right => PI,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrandPoint {
    pub position: Vec3,
    pub strand: Strand,
    pub progress: f32,
}

/// Cross-connection between the strands at equal progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BasePairLink {
    pub left: Vec3,
    pub right: Vec3,
    pub progress: f32,
}

impl BasePairLink {
    pub fn midpoint(&self) -> Vec3 {
        (self.left + self.right) * 0.5
    }

    pub fn length(&self) -> f32 {
        self.left.distance(self.right)
    }

    /// Unit vector from the left endpoint to the right one.
    pub fn direction(&self) -> Vec3 {
        (self.right - self.left).normalize_or_zero()
    }

    /// Rotation taking a Y-aligned primitive (e.g. a cylinder) onto the link.
    pub fn rotation(&self) -> Quat {
        let dir = self.direction();
        if dir == Vec3::ZERO {
            Quat::IDENTITY
        } else {
            Quat::from_rotation_arc(Vec3::Y, dir)
        }
    }
}

/// Static geometry of the double helix, built once at scene setup.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HelixGeometry {
    /// Interleaved left/right backbone samples, ordered by progress.
    pub strand_points: Vec<StrandPoint>,
    pub base_pair_links: Vec<BasePairLink>,
}

impl HelixGeometry {
    pub fn build(params: HelixParameters) -> Result<Self, HelixError> {
        params.validate()?;

        let samples = params.strand_samples();
        let mut strand_points = Vec::with_capacity(samples as usize * 2);
        for i in 0..samples {
            let progress = i as f32 / samples as f32;
            for strand in [Strand::Left, Strand::Right] {
                strand_points.push(StrandPoint {
                    position: params.point_at(progress, strand),
                    strand,
                    progress,
                });
            }
        }

        let base_pair_links = (0..params.base_pair_count)
            .map(|i| {
                let progress = i as f32 / params.base_pair_count as f32;
                BasePairLink {
                    left: params.point_at(progress, Strand::Left),
                    right: params.point_at(progress, Strand::Right),
                    progress,
                }
            })
            .collect::<Vec<_>>();

        log::debug!(
            "built helix: {} strand points, {} base pairs",
            strand_points.len(),
            base_pair_links.len()
        );
        Ok(Self {
            strand_points,
            base_pair_links,
        })
    }

    pub fn strand(&self, strand: Strand) -> impl Iterator<Item = &StrandPoint> {
        self.strand_points.iter().filter(move |p| p.strand == strand)
    }
}

/// Build the helix geometry for `params`.
pub fn build(params: HelixParameters) -> Result<HelixGeometry, HelixError> {
    HelixGeometry::build(params)
}
