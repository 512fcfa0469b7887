//! spin3d - Spinning Cube
//!
//! Renders a colored cube whose world transform is recomputed every frame
//! by the frame transform updater: a steady rotation about a fixed axis,
//! offset by a fixed translation. Space pauses and resumes the animation,
//! R restarts the clock, Escape exits.

use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Fullscreen, Window, WindowId},
};

use spin3d::config::AppConfig;
use spin3d::systems::render::{RenderError, RenderSystem};
use spin3d_core::{AnimationClock, FrameUpdater};
use spin3d_math::Mat4;
use spin3d_render::{Mesh, CUBE_FACE_COLORS};

/// Edge length of the demo cube
const CUBE_SIDE: f32 = 2.0;

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window: Option<Arc<Window>>,
    render: Option<RenderSystem>,
    /// Per-frame transform updater; owns the current world matrix
    updater: FrameUpdater,
    /// Monotonic time source for the animation
    clock: AnimationClock,
}

impl App {
    fn new() -> Self {
        // Load configuration
        let config = AppConfig::load().unwrap_or_else(|e| {
            log::warn!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        });

        // Spin parameters are validated here, before the loop ever runs
        let spin = config.spin.to_spin().unwrap_or_else(|e| {
            panic!("Invalid spin configuration: {}", e);
        });

        log::info!(
            "Spin: axis {:?}, period {}s, translation {:?}",
            spin.axis(),
            spin.period_secs(),
            spin.translation()
        );

        Self {
            config,
            window: None,
            render: None,
            updater: FrameUpdater::new(spin),
            clock: AnimationClock::start(),
        }
    }

    /// Update the title with the current animation state
    fn update_title(&self, elapsed_secs: f32) {
        if let Some(window) = &self.window {
            let angle = self.updater.spin().angle_at(elapsed_secs);
            let state = if self.updater.is_running() {
                "[Space to pause]"
            } else {
                "[paused - Space to resume]"
            };
            window.set_title(&format!(
                "{} - {:.2} rad {}",
                self.config.window.title, angle, state
            ));
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let mut attrs = Window::default_attributes()
                .with_title(&self.config.window.title)
                .with_inner_size(winit::dpi::LogicalSize::new(
                    self.config.window.width,
                    self.config.window.height,
                ));

            if self.config.window.fullscreen {
                attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
            }

            let window = Arc::new(
                event_loop
                    .create_window(attrs)
                    .expect("Failed to create window"),
            );

            let mut render = RenderSystem::new(
                window.clone(),
                self.config.camera.clone(),
                self.config.rendering.clone(),
                self.config.window.vsync,
            );
            render.upload_mesh(&Mesh::cube(CUBE_SIDE, CUBE_FACE_COLORS));

            window.request_redraw();

            self.window = Some(window);
            self.render = Some(render);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(render) = &mut self.render {
                    render.resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return;
                }
                if let PhysicalKey::Code(key) = event.physical_key {
                    match key {
                        KeyCode::Escape => {
                            event_loop.exit();
                        }
                        KeyCode::Space => {
                            if self.updater.is_running() {
                                // Cancellation is synchronous: the redraw
                                // chain stops with this tick
                                self.updater.cancel();
                                log::info!("Animation paused");
                            } else {
                                self.updater.resume();
                                log::info!("Animation resumed");
                                if let Some(window) = &self.window {
                                    window.request_redraw();
                                }
                            }
                        }
                        KeyCode::KeyR => {
                            self.clock.reset();
                            log::info!("Animation clock reset");
                        }
                        _ => {}
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                let elapsed = self.clock.elapsed_secs();

                let Some(render) = self.render.as_mut() else {
                    return;
                };

                // One tick: recompute the world transform and draw with it.
                // A cancelled updater skips the sink and ends the chain.
                let mut frame_result = Ok(());
                let scheduled = self.updater.tick(elapsed, &mut |world: Mat4| {
                    frame_result = render.render_frame(world);
                });

                match frame_result {
                    Ok(()) => {}
                    Err(RenderError::SurfaceLost) => {
                        let (width, height) = render.size();
                        render.resize(width, height);
                    }
                    Err(RenderError::OutOfMemory) => {
                        log::error!("GPU out of memory, exiting");
                        event_loop.exit();
                        return;
                    }
                    Err(e) => {
                        log::warn!("Render error: {}", e);
                    }
                }

                self.update_title(elapsed);

                // Keep the loop going only while the updater is running
                if scheduled {
                    if let Some(window) = &self.window {
                        window.request_redraw();
                    }
                }
            }

            _ => {}
        }
    }
}

fn main() {
    // Initialize logging
    env_logger::init();
    log::info!("Starting spin3d");

    // Create event loop
    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    // Create and run application
    let mut app = App::new();
    event_loop.run_app(&mut app).expect("Event loop error");
}
