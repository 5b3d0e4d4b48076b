//! Startup errors

use hypercube_math::PerspectiveError;
use hypercube_render::RenderContextError;

use crate::systems::WindowError;

/// Fatal error while bringing up the event loop, window or presenter
#[derive(Debug)]
pub enum InitError {
    /// Event loop could not be created or failed while running
    EventLoop(String),
    /// Window creation failed
    Window(WindowError),
    /// GPU presenter could not be set up
    Render(RenderContextError),
    /// Animation parameters were rejected
    Animation(PerspectiveError),
}

impl std::fmt::Display for InitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InitError::EventLoop(msg) => write!(f, "Event loop error: {}", msg),
            InitError::Window(e) => write!(f, "{}", e),
            InitError::Render(e) => write!(f, "Render setup failed: {}", e),
            InitError::Animation(e) => write!(f, "Animation setup failed: {}", e),
        }
    }
}

impl std::error::Error for InitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InitError::EventLoop(_) => None,
            InitError::Window(e) => Some(e),
            InitError::Render(e) => Some(e),
            InitError::Animation(e) => Some(e),
        }
    }
}

impl From<WindowError> for InitError {
    fn from(e: WindowError) -> Self {
        InitError::Window(e)
    }
}

impl From<RenderContextError> for InitError {
    fn from(e: RenderContextError) -> Self {
        InitError::Render(e)
    }
}

impl From<PerspectiveError> for InitError {
    fn from(e: PerspectiveError) -> Self {
        InitError::Animation(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_init_error_display() {
        let err = InitError::from(WindowError::CreationFailed("no display".to_string()));
        assert_eq!(err.to_string(), "Window creation failed: no display");
        assert!(err.source().is_some());

        let err = InitError::EventLoop("closed".to_string());
        assert_eq!(err.to_string(), "Event loop error: closed");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_render_error_wraps_context_error() {
        let err = InitError::from(RenderContextError::NoAdapter);
        assert!(err.to_string().starts_with("Render setup failed"));
    }
}
