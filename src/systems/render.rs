//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - Filing and magnet pipelines
//! - Frame rendering

use std::sync::Arc;
use winit::window::Window;
use filings_render::{
    context::RenderContext,
    pipeline::{FramePipeline, ViewUniforms},
    FrameGeometry, GpuError, Palette, Snapshot,
};

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// Surface was lost or outdated (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<wgpu::SurfaceError> for RenderError {
    fn from(e: wgpu::SurfaceError) -> Self {
        match e {
            wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => RenderError::SurfaceLost,
            wgpu::SurfaceError::OutOfMemory => RenderError::OutOfMemory,
            other => RenderError::Other(format!("{:?}", other)),
        }
    }
}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    pipeline: FramePipeline,
    palette: Palette,
}

impl RenderSystem {
    /// Create render system from window and palette
    pub fn new(window: Arc<Window>, palette: Palette, vsync: bool) -> Result<Self, GpuError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;
        let pipeline = FramePipeline::new(&context.device, context.config.format);

        Ok(Self {
            context,
            pipeline,
            palette,
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
    }

    /// Reconfigure the surface at its current size
    pub fn reconfigure(&mut self) {
        self.context.resize(self.context.size);
    }

    /// Build geometry from a snapshot and upload it to the GPU
    pub fn upload_snapshot(&mut self, snapshot: &Snapshot<'_>) {
        let geometry = FrameGeometry::from_snapshot(snapshot, &self.palette);
        self.pipeline
            .upload(&self.context.device, &self.context.queue, &geometry);
        self.pipeline.update_uniforms(
            &self.context.queue,
            &ViewUniforms::new(snapshot.bounds.width as f32, snapshot.bounds.height as f32),
        );
        log::trace!(
            "Uploaded {} filings and {} magnet vertices",
            geometry.filing_count(),
            geometry.magnet_vertices.len()
        );
    }

    /// Render a single frame
    pub fn render_frame(&mut self) -> Result<(), RenderError> {
        let output = self.context.surface.get_current_texture()?;

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        // Create command encoder
        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.pipeline
            .render(&mut encoder, &view, self.palette.clear_color());

        // Submit
        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Get current surface size
    pub fn size(&self) -> (u32, u32) {
        (self.context.size.width, self.context.size.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_display() {
        assert_eq!(format!("{}", RenderError::SurfaceLost), "Surface lost");
        assert_eq!(format!("{}", RenderError::OutOfMemory), "Out of memory");
        assert_eq!(
            format!("{}", RenderError::Other("test".to_string())),
            "Render error: test"
        );
    }

    #[test]
    fn test_surface_error_mapping() {
        assert!(matches!(
            RenderError::from(wgpu::SurfaceError::Lost),
            RenderError::SurfaceLost
        ));
        assert!(matches!(
            RenderError::from(wgpu::SurfaceError::Outdated),
            RenderError::SurfaceLost
        ));
        assert!(matches!(
            RenderError::from(wgpu::SurfaceError::OutOfMemory),
            RenderError::OutOfMemory
        ));
        assert!(matches!(
            RenderError::from(wgpu::SurfaceError::Timeout),
            RenderError::Other(_)
        ));
    }
}
