//! GPU presentation system
//!
//! Owns the software frame and everything needed to put it on screen:
//! - Render context and surface
//! - Present pipeline
//! - The pixel buffer the animation draws into

use std::sync::Arc;
use winit::window::Window;
use hypercube_render::{
    context::{RenderContext, RenderContextError},
    pipeline::PresentPipeline,
    PixelBuffer,
};

/// Color shown around the frame if the surface is larger than it
const CLEAR_COLOR: wgpu::Color = wgpu::Color::BLACK;

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// Surface was lost (window resized, minimized, etc.)
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

/// Manages GPU presentation of the software frame
pub struct RenderSystem {
    context: RenderContext,
    present_pipeline: PresentPipeline,
    buffer: PixelBuffer,
}

impl RenderSystem {
    /// Create render system for a `width` x `height` frame
    pub fn new(
        window: Arc<Window>,
        width: u32,
        height: u32,
        vsync: bool,
    ) -> Result<Self, RenderContextError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;

        let mut present_pipeline = PresentPipeline::new(&context.device, context.config.format);
        present_pipeline.ensure_frame_texture(&context.device, width, height);

        log::info!(
            "Allocated {}x{} {:?} frame",
            width,
            height,
            context.config.format
        );

        Ok(Self {
            context,
            present_pipeline,
            buffer: PixelBuffer::new(width, height),
        })
    }

    /// The frame the animation draws into
    pub fn buffer_mut(&mut self) -> &mut PixelBuffer {
        &mut self.buffer
    }

    /// Handle window resize
    ///
    /// Only the surface follows the window; the frame keeps its size and is
    /// stretched over the surface.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
    }

    /// Reconfigure the surface at its current size after it was lost
    pub fn reconfigure(&mut self) {
        let size = self.context.size;
        self.context.resize(size);
    }

    /// Upload the frame and show it
    pub fn present(&mut self) -> Result<(), RenderError> {
        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) => return Err(RenderError::SurfaceLost),
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        self.present_pipeline
            .upload(&self.context.device, &self.context.queue, &self.buffer);

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Present Encoder"),
            });

        self.present_pipeline.render(&mut encoder, &view, CLEAR_COLOR);

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
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
}
