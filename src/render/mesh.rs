use glam::Vec3;
use knot_core::geometry::{MeshData, Vertex};
use wgpu::util::DeviceExt;

/// Vertex (and optional index) buffers for one static mesh.
pub(crate) struct GpuMesh {
    vertices: wgpu::Buffer,
    indices: Option<wgpu::Buffer>,
    count: u32,
}

impl GpuMesh {
    pub(crate) fn indexed(device: &wgpu::Device, label: &str, mesh: &MeshData) -> Self {
        let vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let indices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            vertices,
            indices: Some(indices),
            count: mesh.indices.len() as u32,
        }
    }

    /// Unindexed point list; normals are unused by the point shader.
    pub(crate) fn points(device: &wgpu::Device, label: &str, points: &[Vec3]) -> Self {
        let verts: Vec<Vertex> = points
            .iter()
            .map(|p| Vertex {
                position: p.to_array(),
                normal: [0.0; 3],
            })
            .collect();
        let vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&verts),
            usage: wgpu::BufferUsages::VERTEX,
        });
        Self {
            vertices,
            indices: None,
            count: verts.len() as u32,
        }
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        if self.count == 0 {
            return;
        }
        rpass.set_vertex_buffer(0, self.vertices.slice(..));
        match &self.indices {
            Some(indices) => {
                rpass.set_index_buffer(indices.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..self.count, 0, 0..1);
            }
            None => rpass.draw(0..self.count, 0..1),
        }
    }
}
