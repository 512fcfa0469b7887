//! GPU rendering system
//!
//! Owns the render context and scene pipeline, computes the view and
//! projection matrices from the camera configuration, and draws one frame
//! from a world transform.

use std::sync::Arc;
use winit::window::Window;

use spin3d_math::{Mat4, Vec3};
use spin3d_render::{
    context::RenderContext,
    geometry::Mesh,
    pipeline::{look_at_matrix, perspective_matrix, SceneUniforms, ScenePipeline},
};

use crate::config::{CameraConfig, RenderingConfig};

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

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    pipeline: ScenePipeline,
    camera_config: CameraConfig,
    rendering_config: RenderingConfig,
}

impl RenderSystem {
    /// Create render system from window and config
    pub fn new(
        window: Arc<Window>,
        camera_config: CameraConfig,
        rendering_config: RenderingConfig,
        vsync: bool,
    ) -> Self {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync));

        let mut pipeline = ScenePipeline::new(&context.device, context.config.format);

        // Ensure depth texture exists
        pipeline.ensure_depth_texture(&context.device, context.size.width, context.size.height);

        Self {
            context,
            pipeline,
            camera_config,
            rendering_config,
        }
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
        self.pipeline
            .ensure_depth_texture(&self.context.device, width, height);
    }

    /// Upload mesh to GPU
    pub fn upload_mesh(&mut self, mesh: &Mesh) {
        self.pipeline.upload_mesh(&self.context.device, mesh);
        log::info!(
            "Uploaded {} vertices and {} triangles",
            mesh.vertex_count(),
            mesh.triangle_count()
        );
    }

    /// Render a single frame with the given world transform
    pub fn render_frame(&mut self, world: Mat4) -> Result<(), RenderError> {
        // Create view and projection matrices from camera config
        let view_matrix = look_at_matrix(
            Vec3::from_array(self.camera_config.eye),
            Vec3::from_array(self.camera_config.target),
            Vec3::from_array(self.camera_config.up),
        );
        let proj_matrix = perspective_matrix(
            self.camera_config.fov.to_radians(),
            self.context.aspect_ratio(),
            self.camera_config.near,
            self.camera_config.far,
        );

        let uniforms = SceneUniforms {
            world,
            view: view_matrix,
            proj: proj_matrix,
        };
        self.pipeline.update_uniforms(&self.context.queue, &uniforms);

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

        // Create command encoder
        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        // Render pass
        let bg = &self.rendering_config.background_color;
        self.pipeline.render(
            &mut encoder,
            &view,
            wgpu::Color {
                r: bg[0] as f64,
                g: bg[1] as f64,
                b: bg[2] as f64,
                a: bg[3] as f64,
            },
        );

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
