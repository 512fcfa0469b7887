//! 02 - Spinning Cube
//!
//! The classic rotating cube: a steady spin about the (2, 1, 0) axis, one
//! full turn every 8 seconds, viewed from (0, 0, -8).
//!
//! This demo shows:
//! - Driving the frame transform updater from the window redraw loop
//! - Replacing the world transform wholesale every tick
//! - Rescheduling the next tick only while the updater is running
//!
//! Run with: `cargo run --example 02_spinning_cube`

use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use spin3d_core::{AnimationClock, FrameUpdater, Spin};
use spin3d_math::Vec3;
use spin3d_render::{
    context::RenderContext,
    geometry::Mesh,
    pipeline::{look_at_matrix, perspective_matrix, SceneUniforms, ScenePipeline},
    CUBE_FACE_COLORS,
};

/// Application state
struct App {
    window: Option<Arc<Window>>,
    context: Option<RenderContext>,
    pipeline: Option<ScenePipeline>,
    updater: FrameUpdater,
    clock: AnimationClock,
}

impl App {
    fn new() -> Self {
        // One turn every 8 seconds about a skewed axis, no translation
        let spin = Spin::new(Vec3::new(2.0, 1.0, 0.0), 8.0).expect("valid spin parameters");

        Self {
            window: None,
            context: None,
            pipeline: None,
            updater: FrameUpdater::new(spin),
            clock: AnimationClock::start(),
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
                            .with_title("spin3d - Spinning Cube")
                            .with_inner_size(winit::dpi::LogicalSize::new(800, 600)),
                    )
                    .expect("Failed to create window"),
            );

            let context = pollster::block_on(RenderContext::new(window.clone()));
            let mut pipeline = ScenePipeline::new(&context.device, context.config.format);
            pipeline.ensure_depth_texture(&context.device, context.size.width, context.size.height);
            pipeline.upload_mesh(&context.device, &Mesh::cube(2.0, CUBE_FACE_COLORS));

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
            }

            WindowEvent::RedrawRequested => {
                let (Some(context), Some(pipeline)) = (&mut self.context, &self.pipeline) else {
                    return;
                };

                // Tick the updater; a cancelled updater would end the chain
                let Some(world) = self.updater.advance(self.clock.elapsed_secs()) else {
                    return;
                };

                let uniforms = SceneUniforms {
                    world,
                    view: look_at_matrix(Vec3::new(0.0, 0.0, -8.0), Vec3::ZERO, Vec3::Y),
                    proj: perspective_matrix(
                        45.0f32.to_radians(),
                        context.aspect_ratio(),
                        0.1,
                        1000.0,
                    ),
                };
                pipeline.update_uniforms(&context.queue, &uniforms);

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
                            label: Some("Spinning Cube Encoder"),
                        });

                pipeline.render(
                    &mut encoder,
                    &view,
                    wgpu::Color {
                        r: 0.5,
                        g: 0.4,
                        b: 0.7,
                        a: 1.0,
                    },
                );

                context.queue.submit(std::iter::once(encoder.finish()));
                output.present();

                // Schedule the next tick
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

fn main() {
    env_logger::init();

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new();
    event_loop.run_app(&mut app).expect("Event loop error");
}
