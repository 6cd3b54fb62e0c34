use crate::camera::Camera;
use crate::constants::{PIXEL_RATIO_MAX, PIXEL_RATIO_MIN};
use crate::params::ScrollParams;
use crate::scene::SkillScene;

/// Browser-reported window size in CSS pixels plus the device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub device_pixel_ratio: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32, device_pixel_ratio: f32) -> Self {
        Self {
            width,
            height,
            device_pixel_ratio,
        }
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width.max(1.0) / self.height.max(1.0)
    }
}

#[inline]
pub fn clamp_pixel_ratio(dpr: f32) -> f32 {
    if !dpr.is_finite() || dpr <= 0.0 {
        return PIXEL_RATIO_MIN;
    }
    dpr.clamp(PIXEL_RATIO_MIN, PIXEL_RATIO_MAX)
}

/// Output surface configuration derived from a viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceSize {
    pub css_width: u32,
    pub css_height: u32,
    /// Pixel ratio in hundredths, so the whole struct stays `Eq`.
    pub pixel_ratio_pct: u32,
    pub physical_width: u32,
    pub physical_height: u32,
}

impl SurfaceSize {
    pub fn for_viewport(viewport: &Viewport) -> Self {
        let ratio = clamp_pixel_ratio(viewport.device_pixel_ratio);
        let css_w = viewport.width.max(0.0);
        let css_h = viewport.height.max(0.0);
        Self {
            css_width: css_w.round() as u32,
            css_height: css_h.round() as u32,
            pixel_ratio_pct: (ratio * 100.0).round() as u32,
            physical_width: ((css_w * ratio).round() as u32).max(1),
            physical_height: ((css_h * ratio).round() as u32).max(1),
        }
    }

    #[inline]
    pub fn pixel_ratio(&self) -> f32 {
        self.pixel_ratio_pct as f32 / 100.0
    }
}

/// Fit the camera to a new viewport and return the surface the renderer should use.
pub fn apply_resize(viewport: &Viewport, camera: &mut Camera) -> SurfaceSize {
    camera.set_aspect(viewport.aspect());
    SurfaceSize::for_viewport(viewport)
}

/// Scroll offset mapped to `[0, progress_max]`.
#[inline]
pub fn scroll_progress(scroll_y: f32, params: &ScrollParams) -> f32 {
    let y = if scroll_y.is_finite() { scroll_y } else { 0.0 };
    (y / params.range_px).clamp(0.0, params.progress_max)
}

/// Drive group rotation and camera depth from the page scroll offset.
pub fn apply_scroll(scroll_y: f32, params: &ScrollParams, scene: &mut SkillScene) -> f32 {
    let t = scroll_progress(scroll_y, params);
    scene.group.rotation.y = t * params.yaw_gain;
    scene.group.rotation.x = params.pitch_base + t * params.pitch_gain;
    scene.camera.position.z = params.camera_z_base + t * params.camera_z_gain;
    t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_ratio_is_clamped() {
        assert_eq!(clamp_pixel_ratio(0.5), 1.0);
        assert_eq!(clamp_pixel_ratio(1.5), 1.5);
        assert_eq!(clamp_pixel_ratio(3.0), 2.0);
        assert_eq!(clamp_pixel_ratio(f32::NAN), 1.0);
        assert_eq!(clamp_pixel_ratio(0.0), 1.0);
    }

    #[test]
    fn surface_size_scales_by_clamped_ratio() {
        let s = SurfaceSize::for_viewport(&Viewport::new(1280.0, 720.0, 3.0));
        assert_eq!(s.physical_width, 2560);
        assert_eq!(s.physical_height, 1440);
        assert_eq!(s.pixel_ratio(), 2.0);
        let tiny = SurfaceSize::for_viewport(&Viewport::new(0.0, 0.0, 1.0));
        assert_eq!((tiny.physical_width, tiny.physical_height), (1, 1));
    }

    #[test]
    fn scroll_progress_clamps_both_ends() {
        let p = ScrollParams::default();
        assert_eq!(scroll_progress(-50.0, &p), 0.0);
        assert_eq!(scroll_progress(600.0, &p), 0.5);
        assert_eq!(scroll_progress(100_000.0, &p), 1.25);
        assert_eq!(scroll_progress(f32::NAN, &p), 0.0);
    }
}
