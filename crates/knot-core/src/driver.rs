use crate::camera::Ray;
use crate::input::InputTracker;
use crate::params::{MotionParams, MotionPreference};
use crate::pick::{HoverPicker, TooltipUpdate};
use crate::scene::{SceneRenderer, SkillScene};

/// Frame-rate independent blend factor: the share of the remaining gap to
/// close after `dt` seconds, given the share `decay` still open after one second.
#[inline]
pub fn smoothing_mix(decay: f32, dt: f32) -> f32 {
    1.0 - decay.powf(dt.max(0.0))
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// Per-tick scene update: time-driven spin and float, pointer parallax, hover.
#[derive(Debug)]
pub struct AnimationDriver {
    params: MotionParams,
    motion: MotionPreference,
    last_time: Option<f64>,
    picker: HoverPicker,
}

impl AnimationDriver {
    pub fn new(params: MotionParams, motion: MotionPreference) -> Self {
        Self {
            params,
            motion,
            last_time: None,
            picker: HoverPicker::new(),
        }
    }

    #[inline]
    pub fn params(&self) -> &MotionParams {
        &self.params
    }

    #[inline]
    pub fn motion(&self) -> MotionPreference {
        self.motion
    }

    #[inline]
    pub fn hovered(&self) -> Option<usize> {
        self.picker.hovered()
    }

    /// Advance every time-based transform to `now` (seconds). Returns the `dt` used.
    pub fn advance(&mut self, now: f64, scene: &mut SkillScene, input: &InputTracker) -> f32 {
        let dt = match self.last_time {
            Some(prev) => (now - prev).max(0.0) as f32,
            None => 0.0,
        };
        self.last_time = Some(now);

        let p = &self.params;
        let m = self.motion.scale();
        let speed = p.speed * m;

        scene.knot.rotation.x += dt * p.knot_spin_x * speed;
        scene.knot.rotation.y += dt * p.knot_spin_y * speed;
        // phases stay in f64; an f32 timestamp loses sub-frame steps after a long uptime
        scene.group.rotation.z = wave(now, p.wobble_freq, 0.0) * p.wobble_amplitude * m;
        scene.stars.rotation_y += dt * p.star_spin * speed;

        if !self.motion.is_reduced() && input.has_moved() {
            let mix = smoothing_mix(p.smoothing_decay, dt);
            let target = input.target();
            scene.group.rotation.y = lerp(scene.group.rotation.y, target.yaw, mix);
            scene.group.rotation.x = lerp(scene.group.rotation.x, target.pitch, mix);
        }

        for (i, node) in scene.nodes.iter_mut().enumerate() {
            let phase = i as f32 * p.float_phase_step;
            let base = node.base_position();
            node.position.y = base.y + wave(now, p.float_freq, phase) * p.float_amplitude * m;
        }

        dt
    }

    /// Re-run the hover picker against the current pointer and scene pose.
    pub fn update_hover(&mut self, scene: &mut SkillScene, input: &InputTracker) -> TooltipUpdate {
        let world_ray = scene.camera.ray_from_ndc(input.pointer().ndc);
        let to_group = scene.group.transform().inverse();
        let ray: Ray = world_ray.transformed(&to_group);
        self.picker.update(&ray, &mut scene.nodes);
        self.picker.tooltip(&scene.nodes, input.pointer())
    }

    /// One full tick: advance, pick, render. Render failures are logged and skipped.
    pub fn frame(
        &mut self,
        now: f64,
        scene: &mut SkillScene,
        input: &InputTracker,
        renderer: &mut dyn SceneRenderer,
    ) -> TooltipUpdate {
        self.advance(now, scene, input);
        let tooltip = self.update_hover(scene, input);
        if let Err(e) = renderer.render(scene) {
            if e.is_transient() {
                log::warn!("render skipped: {}", e);
            } else {
                log::error!("render error: {}", e);
            }
        }
        tooltip
    }
}

#[inline]
fn wave(now: f64, freq: f32, phase: f32) -> f32 {
    (now * freq as f64 + phase as f64).sin() as f32
}
