//! Procedural meshes for the scene: the centerpiece knot, node spheres and
//! the starfield point cloud.

use glam::Vec3;
use rand::Rng;
use std::f32::consts::{PI, TAU};

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    #[inline]
    fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.normalize_or_zero().to_array(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Point on the (p, q) torus-knot curve at parameter `u`.
#[inline]
fn knot_curve(u: f32, p: f32, q: f32, radius: f32) -> Vec3 {
    let qu_over_p = q / p * u;
    let cs = qu_over_p.cos();
    Vec3::new(
        radius * (2.0 + cs) * 0.5 * u.cos(),
        radius * (2.0 + cs) * u.sin() * 0.5,
        radius * qu_over_p.sin() * 0.5,
    )
}

/// Tube swept along a (p, q) torus knot.
pub fn torus_knot(
    radius: f32,
    tube: f32,
    tubular_segments: u32,
    radial_segments: u32,
    p: u32,
    q: u32,
) -> MeshData {
    let tubular = tubular_segments.max(3);
    let radial = radial_segments.max(3);
    let (pf, qf) = (p.max(1) as f32, q as f32);
    let mut mesh = MeshData {
        vertices: Vec::with_capacity(((tubular + 1) * (radial + 1)) as usize),
        indices: Vec::with_capacity((tubular * radial * 6) as usize),
    };

    for i in 0..=tubular {
        let u = i as f32 / tubular as f32 * pf * TAU;
        let p1 = knot_curve(u, pf, qf, radius);
        let p2 = knot_curve(u + 0.01, pf, qf, radius);
        // Frenet-like frame from the curve tangent
        let t = p2 - p1;
        let n = p2 + p1;
        let b = t.cross(n).normalize_or_zero();
        let n = b.cross(t).normalize_or_zero();

        for j in 0..=radial {
            let v = j as f32 / radial as f32 * TAU;
            let cx = -tube * v.cos();
            let cy = tube * v.sin();
            let pos = p1 + n * cx + b * cy;
            mesh.vertices.push(Vertex::new(pos, pos - p1));
        }
    }

    let row = radial + 1;
    for j in 1..=tubular {
        for i in 1..=radial {
            let a = row * (j - 1) + (i - 1);
            let b = row * j + (i - 1);
            let c = row * j + i;
            let d = row * (j - 1) + i;
            mesh.indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }
    mesh
}

/// Latitude/longitude sphere centred on the origin.
pub fn uv_sphere(radius: f32, width_segments: u32, height_segments: u32) -> MeshData {
    let width = width_segments.max(3);
    let height = height_segments.max(2);
    let mut mesh = MeshData::default();

    for iy in 0..=height {
        let v = iy as f32 / height as f32;
        for ix in 0..=width {
            let u = ix as f32 / width as f32;
            let dir = Vec3::new(
                -(u * TAU).cos() * (v * PI).sin(),
                (v * PI).cos(),
                (u * TAU).sin() * (v * PI).sin(),
            );
            mesh.vertices.push(Vertex::new(dir * radius, dir));
        }
    }

    let row = width + 1;
    for iy in 0..height {
        for ix in 0..width {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;
            // the pole rows collapse to a single point; skip their degenerate halves
            if iy != 0 {
                mesh.indices.extend_from_slice(&[a, b, d]);
            }
            if iy != height - 1 {
                mesh.indices.extend_from_slice(&[b, c, d]);
            }
        }
    }
    mesh
}

/// Uniformly scattered points inside an origin-centred box of the given extent.
pub fn starfield<R: Rng + ?Sized>(count: usize, extent: Vec3, rng: &mut R) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            Vec3::new(
                (rng.gen::<f32>() - 0.5) * extent.x,
                (rng.gen::<f32>() - 0.5) * extent.y,
                (rng.gen::<f32>() - 0.5) * extent.z,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn knot_has_expected_topology() {
        let m = torus_knot(0.85, 0.25, 180, 24, 2, 3);
        assert_eq!(m.vertices.len(), 181 * 25);
        assert_eq!(m.triangle_count(), 180 * 24 * 2);
        let max = m.vertices.len() as u32;
        assert!(m.indices.iter().all(|&i| i < max));
    }

    #[test]
    fn knot_surface_sits_one_tube_radius_from_the_curve() {
        let m = torus_knot(1.0, 0.2, 32, 8, 2, 3);
        let p0 = knot_curve(0.0, 2.0, 3.0, 1.0);
        for v in &m.vertices[0..9] {
            let d = (Vec3::from(v.position) - p0).length();
            assert!((d - 0.2).abs() < 1e-4, "d={d}");
        }
    }

    #[test]
    fn sphere_vertices_lie_on_radius() {
        let m = uv_sphere(0.16, 28, 22);
        assert_eq!(m.vertices.len(), 29 * 23);
        // two pole rows contribute one triangle per segment instead of two
        assert_eq!(m.triangle_count(), 28 * 22 * 2 - 2 * 28);
        for v in &m.vertices {
            let r = Vec3::from(v.position).length();
            assert!((r - 0.16).abs() < 1e-5);
        }
    }

    #[test]
    fn stars_stay_inside_the_box() {
        let mut rng = StdRng::seed_from_u64(7);
        let extent = Vec3::new(40.0, 26.0, 40.0);
        let stars = starfield(900, extent, &mut rng);
        assert_eq!(stars.len(), 900);
        for s in &stars {
            assert!(s.abs().cmple(extent * 0.5).all());
        }
    }
}
