use crate::constants::{vec3_of, CAMERA_FAR, CAMERA_FOV_Y_DEG, CAMERA_NEAR, CAMERA_POSITION};
use glam::{Affine3A, Mat4, Vec2, Vec3, Vec4};

/// Perspective camera looking down -Z from `position`, with no extra rotation.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub fov_y_deg: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: vec3_of(CAMERA_POSITION),
            fov_y_deg: CAMERA_FOV_Y_DEG,
            aspect: 1.0,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
        }
    }
}

impl Camera {
    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    #[inline]
    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fov_y_deg.to_radians(),
            self.aspect,
            self.near,
            self.far,
        )
    }

    #[inline]
    pub fn view(&self) -> Mat4 {
        Mat4::from_translation(-self.position)
    }

    #[inline]
    pub fn view_proj(&self) -> Mat4 {
        self.projection() * self.view()
    }

    /// World-space ray from the eye through a point in normalized device coordinates.
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let inv = self.view_proj().inverse();
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        let ro = self.position;
        Ray::new(ro, p1 - ro)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    /// `dir` is normalized here; a zero direction stays zero and hits nothing.
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self {
            origin,
            dir: dir.normalize_or_zero(),
        }
    }

    /// Re-express this ray in the space reached by applying `to_space`.
    pub fn transformed(&self, to_space: &Affine3A) -> Ray {
        Ray::new(
            to_space.transform_point3(self.origin),
            to_space.transform_vector3(self.dir),
        )
    }

    #[inline]
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let oc = self.origin - center;
        let b = oc.dot(self.dir);
        let c = oc.dot(oc) - radius * radius;
        let disc = b * b - c;
        if disc < 0.0 {
            return None;
        }
        let t = -b - disc.sqrt();
        (t >= 0.0).then_some(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_ray_points_down_negative_z() {
        let cam = Camera::default();
        let ray = cam.ray_from_ndc(Vec2::ZERO);
        assert_eq!(ray.origin, cam.position);
        assert!((ray.dir - Vec3::NEG_Z).length() < 1e-4, "dir={:?}", ray.dir);
    }

    #[test]
    fn off_center_rays_tilt_toward_the_point() {
        let mut cam = Camera::default();
        cam.set_aspect(16.0 / 9.0);
        let right = cam.ray_from_ndc(Vec2::new(0.5, 0.0));
        let up = cam.ray_from_ndc(Vec2::new(0.0, 0.5));
        assert!(right.dir.x > 0.0 && right.dir.y.abs() < 1e-4);
        assert!(up.dir.y > 0.0 && up.dir.x.abs() < 1e-4);
    }

    #[test]
    fn ndc_edge_matches_vertical_fov() {
        let cam = Camera::default();
        let ray = cam.ray_from_ndc(Vec2::new(0.0, 1.0));
        let half_fov = (ray.dir.y / -ray.dir.z).atan();
        assert!((half_fov - (CAMERA_FOV_Y_DEG / 2.0).to_radians()).abs() < 1e-3);
    }

    #[test]
    fn invalid_aspect_is_ignored() {
        let mut cam = Camera::default();
        cam.set_aspect(2.0);
        cam.set_aspect(f32::NAN);
        cam.set_aspect(0.0);
        assert_eq!(cam.aspect, 2.0);
    }

    #[test]
    fn sphere_hit_and_miss() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let t = ray.intersect_sphere(Vec3::new(0.0, 0.0, 5.0), 2.0).unwrap();
        assert!((t - 3.0).abs() < 1e-5);
        assert!(ray.intersect_sphere(Vec3::new(5.0, 0.0, 5.0), 2.0).is_none());
        // behind the origin
        assert!(ray.intersect_sphere(Vec3::new(0.0, 0.0, -5.0), 2.0).is_none());
    }

    #[test]
    fn transformed_ray_follows_rotation() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);
        let rot = Affine3A::from_rotation_y(std::f32::consts::FRAC_PI_2);
        let r2 = ray.transformed(&rot);
        assert!((r2.origin - Vec3::new(5.0, 0.0, 0.0)).length() < 1e-4);
        assert!((r2.dir - Vec3::NEG_X).length() < 1e-4);
    }
}
