//! Field builder and event loop.
//!
//! [`Field`] is the mount/unmount surface of the crate: configure, call
//! [`run`](Field::run), and the field animates until the window closes.
//! All mutable state lives inside the handler and is only touched from
//! event callbacks, so a mounted field is single-threaded by construction.

use std::sync::Arc;

use glam::Vec2;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::config::FieldConfig;
use crate::error::RunError;
use crate::field::ParticleField;
use crate::frame::FramePlan;
use crate::gpu::GpuState;
use crate::time::Time;

/// A runnable particle field.
///
/// ```ignore
/// use driftfield::{Field, FieldConfig};
///
/// Field::new(FieldConfig::hero())
///     .with_title("hero banner")
///     .run()?;
/// ```
pub struct Field {
    config: FieldConfig,
    title: String,
    size: (u32, u32),
}

impl Field {
    pub fn new(config: FieldConfig) -> Self {
        Self {
            config,
            title: "driftfield".to_string(),
            size: (1280, 720),
        }
    }

    /// Set the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the initial window size.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    /// Run the field. Blocks until the window is closed.
    pub fn run(self) -> Result<(), RunError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(self.config, self.title, self.size);
        event_loop.run_app(&mut app)?;
        Ok(())
    }
}

struct App {
    config: FieldConfig,
    title: String,
    size: (u32, u32),
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    field: Option<ParticleField>,
    plan: FramePlan,
    time: Time,
}

impl App {
    fn new(config: FieldConfig, title: String, size: (u32, u32)) -> Self {
        Self {
            config,
            title,
            size,
            window: None,
            gpu: None,
            field: None,
            plan: FramePlan::new(),
            time: Time::new(),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(winit::dpi::LogicalSize::new(self.size.0, self.size.1));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };
        self.window = Some(window.clone());

        // GPU unavailable is a soft failure: keep the window, draw nothing.
        match pollster::block_on(GpuState::new(window.clone(), &self.config)) {
            Ok(gpu) => {
                let size = window.inner_size();
                self.field = Some(ParticleField::new(
                    self.config.clone(),
                    size.width as f32,
                    size.height as f32,
                ));
                self.gpu = Some(gpu);
                log::info!(
                    "field mounted: {} particles on {}x{}",
                    self.config.particle_count,
                    size.width,
                    size.height
                );
            }
            Err(e) => {
                log::warn!("GPU unavailable, field will not render: {}", e);
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                if let Some(field) = &mut self.field {
                    field.stop();
                }
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(physical_size);
                }
                if let Some(field) = &mut self.field {
                    field.resize(physical_size.width as f32, physical_size.height as f32);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                if self.config.pointer_attraction {
                    if let Some(field) = &mut self.field {
                        field.set_pointer(Vec2::new(position.x as f32, position.y as f32));
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                if let (Some(gpu), Some(field)) = (&mut self.gpu, &mut self.field) {
                    let (elapsed, _delta) = self.time.update();
                    field.step(elapsed, &mut self.plan);

                    match gpu.render(&self.plan) {
                        Ok(_) => {}
                        Err(wgpu::SurfaceError::Lost) => {
                            gpu.resize(winit::dpi::PhysicalSize {
                                width: gpu.config.width,
                                height: gpu.config.height,
                            })
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            log::error!("GPU out of memory, exiting");
                            event_loop.exit();
                        }
                        Err(e) => log::warn!("Surface error: {:?}", e),
                    }

                    if self.time.frame() % 600 == 0 {
                        log::debug!("fps: {:.1}", self.time.fps());
                    }
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}
