//! 01 - Flat Shapes
//!
//! Draws the flat 2D demo shapes: a triangle, a square, and a hexagon.
//!
//! This demo shows:
//! - Setting up the render context and scene pipeline
//! - Building meshes from explicit vertex/color parameters
//! - Drawing a static frame (no animation loop)
//!
//! Keys: 1 = triangle, 2 = square, 3 = hexagon, C = flip the triangle
//! palette, Escape = exit.
//!
//! Run with: `cargo run --example 01_flat_shapes`

use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use spin3d_render::{
    context::RenderContext,
    geometry::{flip_channels, Mesh, TRIANGLE_COLORS},
    pipeline::{SceneUniforms, ScenePipeline},
};

#[derive(Clone, Copy, PartialEq)]
enum Shape {
    Triangle,
    Square,
    Hexagon,
}

/// Application state
struct App {
    window: Option<Arc<Window>>,
    context: Option<RenderContext>,
    pipeline: Option<ScenePipeline>,
    shape: Shape,
    triangle_colors: [[f32; 3]; 3],
}

impl App {
    fn new() -> Self {
        Self {
            window: None,
            context: None,
            pipeline: None,
            shape: Shape::Triangle,
            triangle_colors: TRIANGLE_COLORS,
        }
    }

    fn current_mesh(&self) -> Mesh {
        match self.shape {
            Shape::Triangle => Mesh::triangle(self.triangle_colors),
            Shape::Square => Mesh::square(),
            Shape::Hexagon => Mesh::hexagon(),
        }
    }

    fn reupload(&mut self) {
        let mesh = self.current_mesh();
        if let (Some(context), Some(pipeline)) = (&self.context, &mut self.pipeline) {
            pipeline.upload_mesh(&context.device, &mesh);
        }
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = Arc::new(
                event_loop
                    .create_window(
                        Window::default_attributes()
                            .with_title("spin3d - Flat Shapes")
                            .with_inner_size(winit::dpi::LogicalSize::new(600, 600)),
                    )
                    .expect("Failed to create window"),
            );

            let context = pollster::block_on(RenderContext::new(window.clone()));
            let mut pipeline = ScenePipeline::new(&context.device, context.config.format);
            pipeline.ensure_depth_texture(&context.device, context.size.width, context.size.height);
            pipeline.upload_mesh(&context.device, &self.current_mesh());

            window.request_redraw();

            self.window = Some(window);
            self.context = Some(context);
            self.pipeline = Some(pipeline);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(context) = &mut self.context {
                    context.resize(physical_size);
                }
                if let (Some(context), Some(pipeline)) = (&self.context, &mut self.pipeline) {
                    pipeline.ensure_depth_texture(
                        &context.device,
                        physical_size.width,
                        physical_size.height,
                    );
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return;
                }
                if let PhysicalKey::Code(key) = event.physical_key {
                    match key {
                        KeyCode::Escape => event_loop.exit(),
                        KeyCode::Digit1 => {
                            self.shape = Shape::Triangle;
                            self.reupload();
                        }
                        KeyCode::Digit2 => {
                            self.shape = Shape::Square;
                            self.reupload();
                        }
                        KeyCode::Digit3 => {
                            self.shape = Shape::Hexagon;
                            self.reupload();
                        }
                        KeyCode::KeyC => {
                            self.triangle_colors = flip_channels(self.triangle_colors);
                            if self.shape == Shape::Triangle {
                                self.reupload();
                            }
                        }
                        _ => {}
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                let (Some(context), Some(pipeline)) = (&mut self.context, &self.pipeline) else {
                    return;
                };

                // Flat shapes are authored directly in clip space; all
                // three matrices stay identity
                pipeline.update_uniforms(&context.queue, &SceneUniforms::default());

                let output = match context.surface.get_current_texture() {
                    Ok(output) => output,
                    Err(wgpu::SurfaceError::Lost) => {
                        context.resize(context.size);
                        if let Some(window) = &self.window {
                            window.request_redraw();
                        }
                        return;
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        event_loop.exit();
                        return;
                    }
                    Err(e) => {
                        log::warn!("Surface error: {:?}", e);
                        return;
                    }
                };

                let view = output
                    .texture
                    .create_view(&wgpu::TextureViewDescriptor::default());

                let mut encoder =
                    context
                        .device
                        .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                            label: Some("Flat Shapes Encoder"),
                        });

                pipeline.render(
                    &mut encoder,
                    &view,
                    wgpu::Color {
                        r: 0.5,
                        g: 0.5,
                        b: 0.9,
                        a: 1.0,
                    },
                );

                context.queue.submit(std::iter::once(encoder.finish()));
                output.present();
            }

            _ => {}
        }
    }
}

fn main() {
    env_logger::init();

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    // Static scene: only redraw on input or resize
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new();
    event_loop.run_app(&mut app).expect("Event loop error");
}
