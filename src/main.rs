//! Hypercube - rotating wireframe cube and tesseract
//!
//! Rotates a cube or tesseract through every rotation plane, projects it down
//! to 2D and draws the edges into a 16-bit software frame shown with wgpu.

use std::process::ExitCode;
use std::time::Instant;

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use hypercube::animation::{AnimationLoop, Termination};
use hypercube::config::AppConfig;
use hypercube::input::InputMapper;
use hypercube::systems::{RenderError, RenderSystem, WindowSystem};
use hypercube::InitError;
use hypercube_raster::PixelFormat;

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window: Option<WindowSystem>,
    render: Option<RenderSystem>,
    animation: AnimationLoop,
    /// Set if window or GPU setup failed inside the event loop
    init_error: Option<InitError>,
}

impl App {
    fn new(config: AppConfig) -> Result<Self, InitError> {
        let animation = AnimationLoop::new(
            &config.animation,
            config.window.width,
            config.window.height,
            PixelFormat::Rgb565,
        )?;

        Ok(Self {
            config,
            window: None,
            render: None,
            animation,
            init_error: None,
        })
    }

    /// Create the window and presenter
    fn initialize(&mut self, event_loop: &ActiveEventLoop) -> Result<(), InitError> {
        let window = WindowSystem::create(event_loop, &self.config.window)?;
        window.update_title(&self.animation.dimension().to_string());

        let render = RenderSystem::new(
            window.window().clone(),
            self.config.window.width,
            self.config.window.height,
            self.config.window.vsync,
        )?;

        self.window = Some(window);
        self.render = Some(render);
        Ok(())
    }

    /// Draw the due frame, if any, and present the buffer
    fn redraw(&mut self) {
        let Some(render) = &mut self.render else {
            return;
        };
        if !self.animation.is_rendering() {
            return;
        }

        // Redraws the system asks for between ticks show the previous frame
        self.animation.render_frame(render.buffer_mut());

        match render.present() {
            Ok(()) => {}
            Err(RenderError::SurfaceLost) => {
                log::debug!("Surface lost, reconfiguring");
                render.reconfigure();
            }
            Err(RenderError::OutOfMemory) => {
                log::error!("GPU out of memory");
                self.animation
                    .request_termination(Termination::RenderFailed(RenderError::OutOfMemory.to_string()));
            }
            Err(e) => {
                log::warn!("Surface error: {}", e);
            }
        }
    }

    /// How the loop ended, or the error that kept it from starting
    fn finish(self) -> Result<Termination, InitError> {
        if let Some(e) = self.init_error {
            return Err(e);
        }
        let frames = self.animation.frame();
        let termination = self
            .animation
            .termination()
            .cloned()
            .unwrap_or(Termination::WindowClosed);
        log::info!("Stopped after {} frames: {}", frames, termination);
        Ok(termination)
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        match self.initialize(event_loop) {
            Ok(()) => self.animation.start(),
            Err(e) => {
                self.init_error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                let action = InputMapper::map_close_requested();
                self.animation.request_termination(action.termination());
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(render) = &mut self.render {
                    render.resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if let Some(action) = InputMapper::map_keyboard(key, event.state) {
                        self.animation.request_termination(action.termination());
                    }
                }
            }

            WindowEvent::RedrawRequested => self.redraw(),

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        // Events are handled between frames, so a requested stop never cuts a frame short
        if self.animation.termination().is_some() {
            event_loop.exit();
            return;
        }
        if !self.animation.is_rendering() {
            return;
        }

        let now = Instant::now();
        if self.animation.time_left(now).is_zero() {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
        if let Some(next) = self.animation.next_tick() {
            event_loop.set_control_flow(ControlFlow::WaitUntil(next));
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        // GPU resources go before the window they present to
        self.render = None;
        self.window = None;
        log::debug!("Released window and GPU resources");
    }
}

fn run(config: AppConfig) -> Result<Termination, InitError> {
    let mut app = App::new(config)?;

    let event_loop = EventLoop::new().map_err(|e| InitError::EventLoop(e.to_string()))?;
    event_loop.set_control_flow(ControlFlow::Wait);
    event_loop
        .run_app(&mut app)
        .map_err(|e| InitError::EventLoop(e.to_string()))?;

    app.finish()
}

fn main() -> ExitCode {
    // Load configuration before logging so the configured level applies
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();

    if let Some(e) = config_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }
    log::info!("Starting Hypercube");

    match run(config) {
        Ok(termination) if termination.is_clean() => ExitCode::SUCCESS,
        Ok(termination) => {
            eprintln!("hypercube: {}", termination);
            ExitCode::FAILURE
        }
        Err(e) => {
            log::error!("{}", e);
            eprintln!("hypercube: {}", e);
            ExitCode::FAILURE
        }
    }
}
