//! Hypercube animation
//!
//! [`AnimationLoop`] owns the frame lifecycle: it starts in
//! [`LoopState::Initializing`], renders one tick per pacer interval while in
//! [`LoopState::Rendering`] and ends in [`LoopState::Terminating`] with the
//! reason the loop stopped. It knows nothing about windows or the GPU; the
//! application feeds it a pixel buffer and forwards termination requests.

mod pacer;
mod palette;
mod schedule;
mod state;

pub use pacer::{FramePacer, DEFAULT_TICK_INTERVAL};
pub use palette::Palette;
pub use schedule::RotationSchedule;
pub use state::{
    for_dimension, AnimationState, CubeAnimation, TesseractAnimation, Wireframe,
    CUBE_SCHEDULE, EYE_DISTANCE, FROZEN_FRAMES, TESSERACT_SCHEDULE,
};

use std::time::{Duration, Instant};

use hypercube_math::{Dimension, PerspectiveError};
use hypercube_raster::{PixelBuffer, PixelFormat};

use crate::config::AnimationConfig;

/// Why the animation stopped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Termination {
    /// Escape key pressed
    EscapePressed,
    /// Window closed by the user
    WindowClosed,
    /// Presenting failed in a way that can't be recovered from
    RenderFailed(String),
}

impl Termination {
    /// True if the user asked to stop
    pub fn is_clean(&self) -> bool {
        matches!(self, Termination::EscapePressed | Termination::WindowClosed)
    }
}

impl std::fmt::Display for Termination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Termination::EscapePressed => write!(f, "escape pressed"),
            Termination::WindowClosed => write!(f, "window closed"),
            Termination::RenderFailed(msg) => write!(f, "render failed: {}", msg),
        }
    }
}

/// Lifecycle of the animation loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoopState {
    Initializing,
    Rendering,
    Terminating(Termination),
}

/// Drives a [`Wireframe`] one frame per pacer tick
pub struct AnimationLoop {
    state: LoopState,
    wireframe: Box<dyn Wireframe>,
    palette: Palette,
    pacer: FramePacer,
    /// Set when the pacer reports a due tick, cleared when it is rendered
    tick_due: bool,
}

impl AnimationLoop {
    /// Build the configured animation for a `width` x `height` buffer
    pub fn new(
        config: &AnimationConfig,
        width: u32,
        height: u32,
        format: PixelFormat,
    ) -> Result<Self, PerspectiveError> {
        Ok(Self {
            state: LoopState::Initializing,
            wireframe: for_dimension(config.dimensions, width, height)?,
            palette: Palette::map(format),
            pacer: FramePacer::new(config.tick_interval()),
            tick_due: false,
        })
    }

    pub fn state(&self) -> &LoopState {
        &self.state
    }

    pub fn dimension(&self) -> Dimension {
        self.wireframe.dimension()
    }

    pub fn wireframe(&self) -> &dyn Wireframe {
        self.wireframe.as_ref()
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Frames rendered so far
    pub fn frame(&self) -> u64 {
        self.wireframe.frame()
    }

    /// Enter the rendering state once window and presenter exist
    pub fn start(&mut self) {
        if self.state == LoopState::Initializing {
            log::info!(
                "Animating {} ({} vertices, {} edges) every {:?}",
                self.wireframe.dimension(),
                self.wireframe.vertex_count(),
                self.wireframe.edge_count(),
                self.pacer.interval()
            );
            self.state = LoopState::Rendering;
        }
    }

    pub fn is_rendering(&self) -> bool {
        self.state == LoopState::Rendering
    }

    /// The termination reason, once the loop has stopped
    pub fn termination(&self) -> Option<&Termination> {
        match &self.state {
            LoopState::Terminating(reason) => Some(reason),
            _ => None,
        }
    }

    /// Stop the loop; the first reason given wins
    pub fn request_termination(&mut self, reason: Termination) {
        if self.termination().is_none() {
            log::debug!("Termination requested: {}", reason);
            self.state = LoopState::Terminating(reason);
        }
    }

    /// Render the due frame into `buffer`
    ///
    /// Returns false without touching the buffer unless the loop is rendering
    /// and [`time_left`](Self::time_left) has reported a tick since the last
    /// rendered frame. Redraws between ticks just show the previous frame.
    pub fn render_frame(&mut self, buffer: &mut PixelBuffer) -> bool {
        if !self.is_rendering() || !self.tick_due {
            return false;
        }
        self.tick_due = false;
        self.wireframe.tick(buffer, &self.palette);
        true
    }

    /// Whether a tick is waiting to be rendered
    pub fn is_tick_due(&self) -> bool {
        self.tick_due
    }

    /// Time until the next frame is due; zero means a frame should be rendered
    pub fn time_left(&mut self, now: Instant) -> Duration {
        let left = self.pacer.time_left(now);
        if left.is_zero() {
            self.tick_due = true;
        }
        left
    }

    pub fn next_tick(&self) -> Option<Instant> {
        self.pacer.next_tick()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cube_loop() -> AnimationLoop {
        let config = AnimationConfig {
            dimensions: Dimension::Three,
            tick_interval_ms: 30,
        };
        AnimationLoop::new(&config, 100, 100, PixelFormat::Rgb565).unwrap()
    }

    #[test]
    fn test_starts_initializing() {
        let mut anim = cube_loop();
        let mut buffer = PixelBuffer::new(100, 100);
        assert_eq!(anim.state(), &LoopState::Initializing);
        assert!(!anim.render_frame(&mut buffer));
        assert_eq!(anim.frame(), 0);
        assert_eq!(buffer.count_color(anim.palette().primary), 0);
    }

    #[test]
    fn test_renders_after_start() {
        let mut anim = cube_loop();
        let mut buffer = PixelBuffer::new(100, 100);
        let start = Instant::now();
        anim.start();
        assert!(anim.is_rendering());

        anim.time_left(start);
        assert!(anim.render_frame(&mut buffer));
        anim.time_left(start + Duration::from_millis(30));
        assert!(anim.render_frame(&mut buffer));
        assert_eq!(anim.frame(), 2);
        assert!(buffer.count_color(anim.palette().primary) > 0);
    }

    #[test]
    fn test_redraw_between_ticks_keeps_frame() {
        let mut anim = cube_loop();
        let mut buffer = PixelBuffer::new(100, 100);
        let start = Instant::now();
        anim.start();

        // No tick reported yet
        assert!(!anim.render_frame(&mut buffer));
        assert_eq!(anim.frame(), 0);

        assert_eq!(anim.time_left(start), Duration::ZERO);
        assert!(anim.is_tick_due());
        assert!(anim.render_frame(&mut buffer));
        assert!(!anim.is_tick_due());
        let drawn = buffer.as_slice().to_vec();

        // An extra redraw before the interval has passed
        assert!(anim.time_left(start + Duration::from_millis(10)) > Duration::ZERO);
        assert!(!anim.render_frame(&mut buffer));
        assert_eq!(anim.frame(), 1);
        assert_eq!(buffer.as_slice(), drawn.as_slice());
    }

    #[test]
    fn test_termination_stops_rendering() {
        let mut anim = cube_loop();
        let mut buffer = PixelBuffer::new(100, 100);
        let start = Instant::now();
        anim.start();
        anim.time_left(start);
        anim.render_frame(&mut buffer);

        anim.time_left(start + Duration::from_millis(30));
        anim.request_termination(Termination::EscapePressed);
        assert!(!anim.render_frame(&mut buffer));
        assert_eq!(anim.frame(), 1);
        assert_eq!(anim.termination(), Some(&Termination::EscapePressed));
    }

    #[test]
    fn test_first_termination_reason_wins() {
        let mut anim = cube_loop();
        anim.start();
        anim.request_termination(Termination::WindowClosed);
        anim.request_termination(Termination::EscapePressed);
        assert_eq!(anim.termination(), Some(&Termination::WindowClosed));
    }

    #[test]
    fn test_start_after_termination_is_ignored() {
        let mut anim = cube_loop();
        anim.request_termination(Termination::EscapePressed);
        anim.start();
        assert!(!anim.is_rendering());
    }

    #[test]
    fn test_termination_cleanliness() {
        assert!(Termination::EscapePressed.is_clean());
        assert!(Termination::WindowClosed.is_clean());
        assert!(!Termination::RenderFailed("out of memory".into()).is_clean());
    }

    #[test]
    fn test_pacing_uses_configured_interval() {
        let mut anim = cube_loop();
        let now = Instant::now();
        assert_eq!(anim.time_left(now), Duration::ZERO);
        assert_eq!(anim.next_tick(), Some(now + Duration::from_millis(30)));
    }
}
