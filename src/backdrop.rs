//! Backdrop builder and surface lifecycle.
//!
//! [`Backdrop`] owns the whole mount/unmount story: it creates the window,
//! acquires the GPU surface, builds the initial field, and drives the render
//! loop until the window closes. The per-frame cadence rides on winit's
//! redraw events — each completed tick requests the next redraw, and vsync
//! paces presentation to the display.
//!
//! The loop itself is modeled explicitly by [`RenderLoop`], a two-state
//! machine checked at the top of every tick, so cancellation is a state
//! change rather than a dangling callback handle.

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::error::BackdropError;
use crate::field::{Field, Viewport};
use crate::gpu::GpuState;
use crate::rules::Variant;
use crate::spawn::SpawnContext;
use crate::time::Time;
use crate::visuals::Theme;

/// Scheduling state of the per-frame loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopState {
    /// Not ticking; `begin_tick` refuses.
    #[default]
    Idle,
    /// Ticking once per redraw.
    Running,
}

/// Explicit Idle/Running gate for the per-frame tick.
///
/// `stop` takes effect before the next tick: the redraw handler asks
/// [`RenderLoop::begin_tick`] first and bails when the loop has been
/// cancelled, so no update or draw runs after `stop` returns.
#[derive(Debug, Default)]
pub struct RenderLoop {
    state: LoopState,
    ticks: u64,
}

impl RenderLoop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Enter `Running`. Starting a running loop is a no-op.
    pub fn start(&mut self) {
        self.state = LoopState::Running;
    }

    /// Enter `Idle`. Stopping an idle loop is a no-op.
    pub fn stop(&mut self) {
        self.state = LoopState::Idle;
    }

    /// Gate one tick: returns whether the tick may run, counting it if so.
    pub fn begin_tick(&mut self) -> bool {
        match self.state {
            LoopState::Running => {
                self.ticks += 1;
                true
            }
            LoopState::Idle => false,
        }
    }

    /// Ticks completed since creation.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

/// An ambient particle backdrop, ready to run.
///
/// # Example
///
/// ```no_run
/// use backdrop::{Backdrop, Variant};
///
/// Backdrop::new(Variant::Starfield).run().unwrap();
/// ```
pub struct Backdrop {
    variant: Variant,
    title: String,
}

impl Backdrop {
    /// Configure a backdrop for the given variant.
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            title: format!("backdrop - {}", variant.label()),
        }
    }

    /// Override the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Open the window and animate until it is closed.
    ///
    /// A machine without a usable GPU still gets a window; it just stays
    /// blank. Only event-loop failures surface as errors.
    pub fn run(self) -> Result<(), BackdropError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(self.variant, self.title);
        event_loop.run_app(&mut app)?;
        Ok(())
    }
}

struct App {
    variant: Variant,
    title: String,
    theme: Theme,
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    viewport: Viewport,
    field: Field,
    render_loop: RenderLoop,
    ctx: SpawnContext,
    time: Time,
}

impl App {
    fn new(variant: Variant, title: String) -> Self {
        let mut ctx = SpawnContext::new();
        let viewport = Viewport::new(0.0, 0.0);
        // Empty until the surface exists; resumed() rebuilds it for real.
        let field = Field::init(variant, viewport, &mut ctx);

        Self {
            variant,
            title,
            theme: Theme::for_variant(variant),
            window: None,
            gpu: None,
            viewport,
            field,
            render_loop: RenderLoop::new(),
            ctx,
            time: Time::new(),
        }
    }

    fn rebuild_field(&mut self) {
        self.field = Field::init(self.variant, self.viewport, &mut self.ctx);
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title(self.title.as_str())
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                eprintln!("Window creation failed, backdrop disabled: {}", e);
                return;
            }
        };
        self.window = Some(window.clone());

        match pollster::block_on(GpuState::new(window.clone())) {
            Ok(gpu) => {
                self.viewport =
                    Viewport::new(gpu.config.width as f32, gpu.config.height as f32);
                self.gpu = Some(gpu);
                self.rebuild_field();
                self.render_loop.start();
                window.request_redraw();
            }
            Err(e) => eprintln!("GPU unavailable, backdrop disabled: {}", e),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                self.render_loop.stop();
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(new_size);
                }
                self.viewport = Viewport::new(new_size.width as f32, new_size.height as f32);
                // No particle carries over to the new viewport.
                self.rebuild_field();
            }
            WindowEvent::RedrawRequested => {
                if !self.render_loop.begin_tick() {
                    return;
                }

                self.field.step(self.viewport, &mut self.ctx);

                if let Some(gpu) = &mut self.gpu {
                    match gpu.render(&self.field, &self.theme) {
                        Ok(_) => {}
                        Err(wgpu::SurfaceError::Lost) => {
                            gpu.resize(winit::dpi::PhysicalSize {
                                width: gpu.config.width,
                                height: gpu.config.height,
                            })
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            self.render_loop.stop();
                            event_loop.exit();
                        }
                        Err(e) => eprintln!("Render error: {:?}", e),
                    }
                }

                self.time.update();
                if let Some(window) = &self.window {
                    if self.time.frame() % 30 == 0 {
                        window.set_title(&format!(
                            "{} - {:.0} fps",
                            self.title,
                            self.time.fps()
                        ));
                    }
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.render_loop.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loop_starts_idle() {
        let mut render_loop = RenderLoop::new();
        assert_eq!(render_loop.state(), LoopState::Idle);
        assert!(!render_loop.begin_tick());
        assert_eq!(render_loop.ticks(), 0);
    }

    #[test]
    fn ticks_only_run_while_running() {
        let mut render_loop = RenderLoop::new();
        render_loop.start();
        assert!(render_loop.begin_tick());
        assert!(render_loop.begin_tick());
        assert_eq!(render_loop.ticks(), 2);

        render_loop.stop();
        assert!(!render_loop.begin_tick());
        assert_eq!(render_loop.ticks(), 2);
    }

    #[test]
    fn stop_is_idempotent() {
        let mut render_loop = RenderLoop::new();
        render_loop.start();
        render_loop.stop();
        render_loop.stop();
        assert_eq!(render_loop.state(), LoopState::Idle);

        render_loop.start();
        assert!(render_loop.begin_tick());
    }

    #[test]
    fn start_is_idempotent() {
        let mut render_loop = RenderLoop::new();
        render_loop.start();
        render_loop.start();
        assert!(render_loop.is_running());
    }
}
