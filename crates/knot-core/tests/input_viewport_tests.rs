// Host-side tests for pointer normalisation, resize and scroll mapping.

use glam::Vec2;
use knot_core::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn in_viewport_pointer_moves_stay_in_ndc_range() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut input = InputTracker::default();
    for _ in 0..2000 {
        let vp = Viewport::new(rng.gen_range(1.0..4000.0), rng.gen_range(1.0..3000.0), 1.0);
        let client = Vec2::new(rng.gen_range(0.0..=vp.width), rng.gen_range(0.0..=vp.height));
        input.pointer_moved(client, &vp);
        let ndc = input.pointer().ndc;
        assert!((-1.0..=1.0).contains(&ndc.x), "ndc={:?}", ndc);
        assert!((-1.0..=1.0).contains(&ndc.y), "ndc={:?}", ndc);
        assert!(input.pointer().active);
        assert_eq!(input.pointer().pixel, client);
    }
}

#[test]
fn centre_of_viewport_means_no_parallax() {
    let vp = Viewport::new(1024.0, 768.0, 2.0);
    let mut input = InputTracker::default();
    input.pointer_moved(Vec2::new(512.0, 384.0), &vp);
    assert_eq!(input.pointer().ndc, Vec2::ZERO);
    assert_eq!(input.target(), TargetOrientation { yaw: 0.0, pitch: 0.0 });
}

#[test]
fn target_orientation_scales_with_ndc() {
    let vp = Viewport::new(1000.0, 1000.0, 1.0);
    let mut input = InputTracker::default();
    // top-left corner: ndc (-1, 1)
    input.pointer_moved(Vec2::ZERO, &vp);
    let t = input.target();
    assert!(approx(t.yaw, -POINTER_YAW_GAIN));
    assert!(approx(t.pitch, POINTER_PITCH_GAIN));
}

#[test]
fn custom_gains_are_respected() {
    let vp = Viewport::new(200.0, 200.0, 1.0);
    let mut input = InputTracker::with_gains(1.0, 2.0);
    input.pointer_moved(Vec2::new(200.0, 200.0), &vp);
    assert_eq!(input.target(), TargetOrientation { yaw: 1.0, pitch: -2.0 });
}

#[test]
fn resize_is_idempotent() {
    let vp = Viewport::new(1366.0, 768.0, 1.25);
    let mut cam_a = Camera::default();
    let first = apply_resize(&vp, &mut cam_a);
    let snapshot = cam_a.clone();
    let second = apply_resize(&vp, &mut cam_a);
    assert_eq!(first, second);
    assert_eq!(cam_a, snapshot);
    assert!(approx(cam_a.aspect, 1366.0 / 768.0));
    assert_eq!(first.physical_width, 1708);
    assert_eq!(first.physical_height, 960);
}

#[test]
fn resize_clamps_high_density_screens() {
    let mut cam = Camera::default();
    let s = apply_resize(&Viewport::new(400.0, 800.0, 3.5), &mut cam);
    assert_eq!(s.pixel_ratio(), 2.0);
    assert_eq!((s.physical_width, s.physical_height), (800, 1600));
    assert!(approx(cam.aspect, 0.5));
}

fn scene() -> SkillScene {
    SkillScene::new(&DEFAULT_SKILLS, Vec::new())
}

#[test]
fn scroll_at_range_end_reaches_full_progress() {
    let params = ScrollParams::default();
    let mut s = scene();
    let t = apply_scroll(1200.0, &params, &mut s);
    assert!(approx(t, 1.0));
    assert!(approx(s.group.rotation.y, 0.55));
    assert!(approx(s.group.rotation.x, 0.03));
    assert!(approx(s.camera.position.z, 7.15));
}

#[test]
fn scroll_beyond_range_is_clamped() {
    let params = ScrollParams::default();
    let mut s = scene();
    for y in [1500.0, 5000.0, 1.0e9] {
        let t = apply_scroll(y, &params, &mut s);
        assert!(approx(t, 1.25));
        assert!(approx(s.group.rotation.y, 0.6875));
        assert!(approx(s.camera.position.z, 7.3375));
    }
}

#[test]
fn top_of_page_restores_resting_pose() {
    let params = ScrollParams::default();
    let mut s = scene();
    apply_scroll(3000.0, &params, &mut s);
    apply_scroll(0.0, &params, &mut s);
    assert_eq!(s.group.rotation.y, 0.0);
    assert!(approx(s.group.rotation.x, -0.12));
    assert!(approx(s.camera.position.z, CAMERA_POSITION[2]));
    // x and y of the camera never move
    assert_eq!(s.camera.position.x, CAMERA_POSITION[0]);
    assert_eq!(s.camera.position.y, CAMERA_POSITION[1]);
}
