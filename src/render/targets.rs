use super::helpers;

type Attachment = (wgpu::Texture, wgpu::TextureView);

/// Attachments sized to the swapchain: depth, plus a multisampled colour
/// buffer that resolves into the frame when antialiasing is on.
pub(crate) struct RenderTargets {
    pub(crate) color_format: wgpu::TextureFormat,
    pub(crate) depth_format: wgpu::TextureFormat,
    pub(crate) sample_count: u32,
    pub(crate) depth: Attachment,
    pub(crate) msaa: Option<Attachment>,
}

impl RenderTargets {
    pub(crate) fn new(
        device: &wgpu::Device,
        color_format: wgpu::TextureFormat,
        depth_format: wgpu::TextureFormat,
        sample_count: u32,
        width: u32,
        height: u32,
    ) -> Self {
        let (depth, msaa) =
            Self::create(device, color_format, depth_format, sample_count, width, height);
        Self {
            color_format,
            depth_format,
            sample_count,
            depth,
            msaa,
        }
    }

    fn create(
        device: &wgpu::Device,
        color_format: wgpu::TextureFormat,
        depth_format: wgpu::TextureFormat,
        sample_count: u32,
        width: u32,
        height: u32,
    ) -> (Attachment, Option<Attachment>) {
        let depth =
            helpers::create_attachment(device, "depth", width, height, depth_format, sample_count);
        let msaa = (sample_count > 1).then(|| {
            helpers::create_attachment(device, "msaa_color", width, height, color_format, sample_count)
        });
        (depth, msaa)
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.depth.0.destroy();
        if let Some((tex, _)) = &self.msaa {
            tex.destroy();
        }
        (self.depth, self.msaa) = Self::create(
            device,
            self.color_format,
            self.depth_format,
            self.sample_count,
            width,
            height,
        );
    }

    /// Where the pass draws and where it resolves to, for this frame's view.
    pub(crate) fn color_views<'a>(
        &'a self,
        frame: &'a wgpu::TextureView,
    ) -> (&'a wgpu::TextureView, Option<&'a wgpu::TextureView>) {
        match &self.msaa {
            Some((_, view)) => (view, Some(frame)),
            None => (frame, None),
        }
    }

    pub(crate) fn depth_view(&self) -> &wgpu::TextureView {
        &self.depth.1
    }
}
