//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - Line pipeline
//! - Frame rendering

use std::sync::Arc;
use winit::window::Window;
use hypermorph_core::TesseractFrame;
use hypermorph_render::{
    FixedCamera, LinePipeline, LineUniforms, RenderContext, RenderContextError,
};
use crate::config::{CameraConfig, RenderingConfig};

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// GPU setup failed
    Context(RenderContextError),
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
            RenderError::Context(e) => write!(f, "Render setup failed: {}", e),
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Context(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RenderContextError> for RenderError {
    fn from(e: RenderContextError) -> Self {
        RenderError::Context(e)
    }
}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    pipeline: LinePipeline,
    camera: FixedCamera,
    render_config: RenderingConfig,
}

impl RenderSystem {
    /// Create render system from window and config
    pub fn new(
        window: Arc<Window>,
        render_config: RenderingConfig,
        camera_config: &CameraConfig,
        vsync: bool,
    ) -> Result<Self, RenderError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;
        let pipeline = LinePipeline::new(&context.device, context.config.format);

        log::info!(
            "Renderer ready: {}x{}, {} edge indices",
            context.size.width,
            context.size.height,
            pipeline.index_count()
        );

        Ok(Self {
            context,
            pipeline,
            camera: camera_config.to_camera(),
            render_config,
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
    }

    /// Reconfigure the surface at its current size (after `SurfaceLost`)
    pub fn reconfigure(&mut self) {
        let size = self.context.size;
        self.context.resize(size);
    }

    /// Render a single frame
    pub fn render_frame(&mut self, frame: &TesseractFrame) -> Result<(), RenderError> {
        let uniforms = LineUniforms {
            view_projection: self.camera.view_projection(self.context.aspect_ratio()),
            model: frame.model_matrix(),
            line_color: self.render_config.line_color,
        };
        self.pipeline.update_uniforms(&self.context.queue, &uniforms);
        self.pipeline.upload_vertices(&self.context.queue, &frame.vertices);

        // Get surface texture
        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) => return Err(RenderError::SurfaceLost),
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.pipeline.render(&mut encoder, &view, clear_color(&self.render_config));

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

fn clear_color(config: &RenderingConfig) -> wgpu::Color {
    let bg = &config.background_color;
    wgpu::Color {
        r: bg[0] as f64,
        g: bg[1] as f64,
        b: bg[2] as f64,
        a: bg[3] as f64,
    }
}
