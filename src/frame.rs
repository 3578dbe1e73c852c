use crate::background::{self, Viewport};
use crate::constants::*;
use crate::overlay::MetricsOverlay;
use crate::scene::{self, InstanceData};
use helix_core::{
    tilt_offsets, AnimationState, Camera, HelixError, HelixGeometry, HelixParameters, HelixPose,
    TiltReading, TiltSmoother, TiltSource, VitalsSimulator,
};

/// Everything the renderer needs for one frame.
#[derive(Clone, Debug)]
pub struct FrameOutput {
    pub camera: Camera,
    pub pose: HelixPose,
    pub emission: f32,
    pub instances: Vec<InstanceData>,
    pub vitals_changed: bool,
    /// New window title, set only when the displayed readout changed.
    pub title: Option<String>,
}

/// What the title shows, at display precision. Cell activity is left out so
/// it does not force a title update every frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ReadoutKey {
    visible: bool,
    bpm: u32,
    oxygen_tenths: i32,
}

/// Presentation controller: owns all animation and cosmetic state.
pub struct FrameContext {
    pub params: HelixParameters,
    pub animation: AnimationState,
    pub vitals: VitalsSimulator,
    pub tilt: TiltSmoother,
    pub overlay: MetricsOverlay,
    pub elapsed_sec: f32,
    helix: Vec<InstanceData>,
    sensor_missing: bool,
    readout: Option<ReadoutKey>,
}

impl FrameContext {
    pub fn new(params: HelixParameters, seed: u64) -> Result<Self, HelixError> {
        let geometry = HelixGeometry::build(params)?;
        let helix = scene::helix_instances(&geometry);
        log::info!(
            "helix scene ready: {} strand points, {} base pairs, {} instances",
            geometry.strand_points.len(),
            geometry.base_pair_links.len(),
            helix.len()
        );
        Ok(Self {
            params,
            animation: AnimationState::default(),
            vitals: VitalsSimulator::new(seed),
            tilt: TiltSmoother::default(),
            overlay: MetricsOverlay::default(),
            elapsed_sec: 0.0,
            helix,
            sensor_missing: false,
            readout: None,
        })
    }

    /// Static helix instances, in helix space.
    pub fn helix_instances(&self) -> &[InstanceData] {
        &self.helix
    }

    pub fn camera(&self, viewport: Viewport) -> Camera {
        Camera {
            eye: CAMERA_EYE,
            target: glam::Vec3::ZERO,
            up: glam::Vec3::Y,
            aspect: viewport.aspect(),
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    pub fn step(
        &mut self,
        dt_sec: f32,
        viewport: Viewport,
        tilt_source: &mut dyn TiltSource,
    ) -> FrameOutput {
        let dt_sec = clamp_dt(dt_sec);
        self.elapsed_sec += dt_sec;
        self.animation = self.animation.advance(dt_sec);
        let vitals_changed = self.vitals.tick(dt_sec);

        let raw = self.poll_tilt(tilt_source);
        let smoothed = self.tilt.step(raw, dt_sec);
        let pose = HelixPose::new(&self.animation, tilt_offsets(smoothed));
        let model = pose.model_matrix();

        let camera = self.camera(viewport);
        let mut instances = background::instances(
            &camera,
            viewport,
            self.elapsed_sec,
            self.animation.heartbeat_intensity,
            self.animation.secondary_oscillation,
        );
        instances.extend_from_slice(&self.helix);
        scene::sort_back_to_front(&mut instances, &model);
        let title = self.refresh_title();

        FrameOutput {
            camera,
            pose,
            emission: scene::emission_intensity(self.animation.heartbeat_intensity),
            instances,
            vitals_changed,
            title,
        }
    }

    pub fn toggle_metrics(&mut self) {
        self.overlay.toggle();
        log::info!("metrics overlay: {}", self.overlay.visible);
    }

    pub fn title(&self) -> String {
        self.overlay
            .title(&self.vitals.current(), &self.animation, &self.params)
    }

    fn refresh_title(&mut self) -> Option<String> {
        let vitals = self.vitals.current();
        let key = if self.overlay.visible {
            ReadoutKey {
                visible: true,
                bpm: vitals.bpm_display(),
                oxygen_tenths: (vitals.oxygen_percent * 10.0).round() as i32,
            }
        } else {
            ReadoutKey {
                visible: false,
                bpm: 0,
                oxygen_tenths: 0,
            }
        };
        if self.readout == Some(key) {
            return None;
        }
        self.readout = Some(key);
        Some(self.title())
    }

    fn poll_tilt(&mut self, source: &mut dyn TiltSource) -> TiltReading {
        match source.poll() {
            Ok(reading) => {
                if self.sensor_missing {
                    log::info!("tilt input available");
                    self.sensor_missing = false;
                }
                reading
            }
            Err(e) => {
                if !self.sensor_missing {
                    log::warn!("{e}; using neutral tilt");
                    self.sensor_missing = true;
                }
                TiltReading::NEUTRAL
            }
        }
    }
}

/// Frame delta fed to the updater: never negative, capped after stalls.
#[inline]
pub fn clamp_dt(dt_sec: f32) -> f32 {
    if dt_sec.is_finite() {
        dt_sec.clamp(0.0, MAX_FRAME_DT_SEC)
    } else {
        0.0
    }
}
