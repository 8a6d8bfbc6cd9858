use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::engine::{Engine, EngineConfig};
use crate::error::ShellError;
use crate::gpu::GpuState;
use crate::time::Time;
use glam::Vec2;

const TITLE_REFRESH_FRAMES: u64 = 30;

pub struct App {
    window: Option<Arc<Window>>,
    gpu_state: Option<GpuState>,
    engine: Engine,
    time: Time,
}

impl App {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            window: None,
            gpu_state: None,
            engine: Engine::new(config),
            time: Time::new(),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window_attrs = Window::default_attributes()
                .with_title("glint - pointer particle trails")
                .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));

            let window = match event_loop.create_window(window_attrs) {
                Ok(window) => Arc::new(window),
                Err(e) => {
                    log::error!("failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };
            self.window = Some(window.clone());

            match pollster::block_on(GpuState::new(window)) {
                Ok(gpu_state) => self.gpu_state = Some(gpu_state),
                Err(e) => {
                    log::error!("GPU initialization failed: {}", e);
                    event_loop.exit();
                }
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.resize(physical_size);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                // Window-local pixels, which is the engine's surface space.
                self.engine
                    .pointer_moved(Vec2::new(position.x as f32, position.y as f32));
            }
            WindowEvent::RedrawRequested => {
                if let Some(gpu_state) = &mut self.gpu_state {
                    self.time.update();
                    self.engine.tick(gpu_state);

                    match gpu_state.render() {
                        Ok(_) => {}
                        Err(wgpu::SurfaceError::Lost) => gpu_state.resize(winit::dpi::PhysicalSize {
                            width: gpu_state.config.width,
                            height: gpu_state.config.height,
                        }),
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            log::error!("surface out of memory");
                            event_loop.exit();
                        }
                        Err(e) => log::warn!("render error: {:?}", e),
                    }
                }
                if let Some(window) = &self.window {
                    if self.time.frame() % TITLE_REFRESH_FRAMES == 0 {
                        window.set_title(&format!(
                            "glint - {} particles @ {:.0} fps",
                            self.engine.particle_count(),
                            self.time.fps(),
                        ));
                    }
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}

/// Run the windowed demo until the window is closed.
pub fn run(config: EngineConfig) -> Result<(), ShellError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;
    Ok(())
}
