// Host-side tests for scene instances, backdrop layout and the frame controller.

use glam::{Mat4, Vec3};
use helix_core::*;
use helix_view::background::{self, PixelPlane, Viewport};
use helix_view::constants::*;
use helix_view::frame::{clamp_dt, FrameContext};
use helix_view::scene::{self, InstanceData, InstanceKind};

struct FixedTilt(TiltReading);

impl TiltSource for FixedTilt {
    fn poll(&mut self) -> Result<TiltReading, HelixError> {
        Ok(self.0)
    }
}

fn viewport() -> Viewport {
    Viewport::new(540, 960)
}

#[test]
fn instance_layout_matches_vertex_attributes() {
    assert_eq!(std::mem::size_of::<InstanceData>(), 52);
    let i = InstanceData::sphere(Vec3::new(1.0, 2.0, 3.0), 0.5, CYAN, 1.0, 0.6);
    let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&i));
    assert_eq!(&floats[0..4], &[1.0, 2.0, 3.0, 0.5]);
    assert_eq!(floats[11], 0.6);
    assert_eq!(i.kind(), InstanceKind::Sphere);
}

#[test]
fn helix_instances_cover_every_primitive() {
    let g = build(HelixParameters::default()).unwrap();
    let inst = scene::helix_instances(&g);
    let count = |k: InstanceKind| inst.iter().filter(|i| i.kind() == k).count();
    // backbone spheres + nucleotides
    assert_eq!(count(InstanceKind::Sphere), 240 + 80);
    assert_eq!(count(InstanceKind::Halo), 240 + 80);
    assert_eq!(count(InstanceKind::Connector), 40);
    assert!(inst.iter().all(|i| i.kind().in_helix_space()));
}

#[test]
fn connectors_span_their_links() {
    let g = build(HelixParameters::default()).unwrap();
    let inst = scene::helix_instances(&g);
    let connectors: Vec<_> = inst
        .iter()
        .filter(|i| i.kind() == InstanceKind::Connector)
        .collect();
    for (c, link) in connectors.iter().zip(&g.base_pair_links) {
        let center = Vec3::from(c.pos);
        let half = Vec3::from(c.axis);
        assert!((center - link.midpoint()).length() < 1e-5);
        assert!(((center + half) - link.right).length() < 1e-3);
        assert!(((center - half) - link.left).length() < 1e-3);
        assert_eq!(c.scale, CONNECTOR_RADIUS);
    }
}

#[test]
fn emission_tracks_heartbeat() {
    assert!((scene::emission_intensity(0.4) - (0.3 + 0.28) * 0.8).abs() < 1e-6);
    assert!((scene::emission_intensity(1.0) - 0.8).abs() < 1e-6);
    assert!(scene::emission_intensity(0.9) > scene::emission_intensity(0.5));
}

#[test]
fn back_to_front_sort_respects_model_rotation() {
    let near = InstanceData::sphere(Vec3::new(0.0, 0.0, 2.0), 0.1, CYAN, 1.0, 0.0);
    let far = InstanceData::sphere(Vec3::new(0.0, 0.0, -2.0), 0.1, CYAN, 1.0, 0.0);
    let backdrop = InstanceData::new(
        InstanceKind::Backdrop,
        Vec3::new(0.0, 0.0, BACKDROP_Z),
        1.0,
        MINT,
        0.5,
        0.0,
    );

    let mut list = vec![near, backdrop, far];
    scene::sort_back_to_front(&mut list, &Mat4::IDENTITY);
    assert_eq!(list, vec![backdrop, far, near]);

    // half a turn swaps the helix-space instances but not the backdrop
    let mut list = vec![near, backdrop, far];
    scene::sort_back_to_front(&mut list, &Mat4::from_rotation_y(std::f32::consts::PI));
    assert_eq!(list, vec![backdrop, near, far]);
}

#[test]
fn grid_covers_the_viewport() {
    let vp = Viewport::new(400, 200);
    let pts = background::grid_points(vp, 0.0);
    assert_eq!(pts.len(), 11 * 6);
    for [x, y] in &pts {
        assert!(*x >= -GRID_WOBBLE_PX && *x <= 400.0 + GRID_WOBBLE_PX);
        assert!(*y >= -GRID_WOBBLE_PX && *y <= 200.0 + GRID_WOBBLE_PX);
    }
}

#[test]
fn grid_wobble_cycles_every_period() {
    let vp = viewport();
    assert!(background::grid_offset(0.0).abs() < 1e-6);
    assert!(background::grid_offset(GRID_PERIOD_SEC * 3.0).abs() < 1e-4);
    let a = background::grid_points(vp, 1.0);
    let b = background::grid_points(vp, 1.0 + GRID_PERIOD_SEC);
    for (p, q) in a.iter().zip(&b) {
        assert!((p[0] - q[0]).abs() < 1e-2 && (p[1] - q[1]).abs() < 1e-2);
    }
}

#[test]
fn particles_stay_inside_viewport_and_drift() {
    let vp = viewport();
    let start = background::particle_points(vp, 0.0);
    let later = background::particle_points(vp, 3.0);
    assert_eq!(start.len(), PARTICLE_COUNT);
    for [x, y] in start.iter().chain(&later) {
        assert!(*x >= 0.0 && *x < vp.width);
        assert!(*y >= 0.0 && *y < vp.height);
    }
    assert_ne!(start, later);
}

#[test]
fn particle_style_follows_activity() {
    let (d, a) = background::particle_style(0.6);
    assert!((d - 4.2).abs() < 1e-6 && (a - 0.44).abs() < 1e-6);
    let (d, a) = background::particle_style(1.0);
    assert!((d - 5.0).abs() < 1e-6 && (a - 0.6).abs() < 1e-6);
}

#[test]
fn pixel_plane_maps_corners_to_frustum_edges() {
    let ctx = FrameContext::new(HelixParameters::default(), 1).unwrap();
    let vp = viewport();
    let cam = ctx.camera(vp);
    let plane = PixelPlane::new(&cam, vp, BACKDROP_Z);
    let (hw, hh) = cam.half_extents_at(BACKDROP_Z);
    let tl = plane.to_world(0.0, 0.0);
    assert!((tl - Vec3::new(-hw, hh, BACKDROP_Z)).length() < 1e-4);
    let center = plane.to_world(vp.width / 2.0, vp.height / 2.0);
    assert!(center.truncate().length() < 1e-4);
    assert!((plane.world_per_px() * vp.height - 2.0 * hh).abs() < 1e-3);
}

#[test]
fn backdrop_glows_follow_heartbeat() {
    let ctx = FrameContext::new(HelixParameters::default(), 1).unwrap();
    let vp = viewport();
    let cam = ctx.camera(vp);
    let inst = background::instances(&cam, vp, 0.0, 1.0, 0.8);
    let overlay: Vec<_> = inst
        .iter()
        .filter(|i| i.kind() == InstanceKind::Overlay)
        .collect();
    assert_eq!(overlay.len(), 1);
    assert!((overlay[0].color[3] - PULSE_GLOW_ALPHA).abs() < 1e-6);
    assert!((inst[0].color[3] - BACKDROP_GLOW_ALPHA).abs() < 1e-6);
    assert!(inst.iter().all(|i| !i.kind().in_helix_space()));
}

#[test]
fn frame_step_spins_and_composes_scene() {
    let mut ctx = FrameContext::new(HelixParameters::default(), 11).unwrap();
    let vp = viewport();
    let mut tilt = NoTiltSensor;
    let out = ctx.step(0.016, vp, &mut tilt);
    assert!((out.pose.yaw - 0.016 * ROTATION_SPEED).abs() < 1e-6);
    assert_eq!(out.pose.pitch, 0.0);
    assert_eq!(out.pose.roll, 0.0);
    assert!(
        (out.emission - scene::emission_intensity(ctx.animation.heartbeat_intensity)).abs() < 1e-6
    );
    let helix = ctx.helix_instances().len();
    let backdrop = background::instances(&out.camera, vp, ctx.elapsed_sec, 0.5, 0.5).len();
    assert_eq!(out.instances.len(), helix + backdrop);

    let model = out.pose.model_matrix();
    let depths: Vec<f32> = out
        .instances
        .iter()
        .map(|i| scene::world_depth(i, &model))
        .collect();
    assert!(depths.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn frame_step_clamps_bad_dt() {
    let mut ctx = FrameContext::new(HelixParameters::default(), 2).unwrap();
    let mut tilt = NoTiltSensor;
    ctx.step(-1.0, viewport(), &mut tilt);
    assert_eq!(ctx.animation.rotation_angle, 0.0);
    ctx.step(10.0, viewport(), &mut tilt);
    assert!((ctx.animation.rotation_angle - MAX_FRAME_DT_SEC * ROTATION_SPEED).abs() < 1e-6);
    assert_eq!(clamp_dt(f32::NAN), 0.0);
}

#[test]
fn frame_step_applies_smoothed_tilt() {
    let mut ctx = FrameContext::new(HelixParameters::default(), 3).unwrap();
    let mut tilt = FixedTilt(TiltReading { x: 10.0, y: -10.0 });
    let mut out = ctx.step(0.016, viewport(), &mut tilt);
    assert!(out.pose.roll > 0.0 && out.pose.roll < 0.2);
    for _ in 0..300 {
        out = ctx.step(0.016, viewport(), &mut tilt);
    }
    assert!((out.pose.roll - 0.2).abs() < 1e-3);
    assert!((out.pose.pitch + 0.2).abs() < 1e-3);
}

#[test]
fn frame_context_rejects_invalid_geometry() {
    let bad = HelixParameters {
        base_pair_count: 0,
        ..HelixParameters::default()
    };
    assert!(matches!(
        FrameContext::new(bad, 0),
        Err(HelixError::InvalidParameters(_))
    ));
}

#[test]
fn vitals_change_reported_on_the_interval() {
    let mut ctx = FrameContext::new(HelixParameters::default(), 4).unwrap();
    let mut tilt = NoTiltSensor;
    let mut changes = 0;
    for _ in 0..(60 * 5) {
        if ctx.step(1.0 / 60.0, viewport(), &mut tilt).vitals_changed {
            changes += 1;
        }
    }
    assert_eq!(changes, 2);
}

#[test]
fn title_updates_only_when_the_readout_changes() {
    let mut ctx = FrameContext::new(HelixParameters::default(), 5).unwrap();
    let mut tilt = NoTiltSensor;
    let mut titles = Vec::new();
    // one second: cell activity moves every frame, vitals stay put
    for _ in 0..60 {
        if let Some(t) = ctx.step(1.0 / 60.0, viewport(), &mut tilt).title {
            titles.push(t);
        }
    }
    assert_eq!(titles.len(), 1);
    assert!(titles[0].starts_with("DNA Helix | Heart Rate 72 BPM"));

    ctx.toggle_metrics();
    let hidden = ctx.step(1.0 / 60.0, viewport(), &mut tilt).title;
    assert_eq!(hidden.as_deref(), Some("DNA Helix | M: Show Metrics"));
    assert_eq!(ctx.step(1.0 / 60.0, viewport(), &mut tilt).title, None);
}
