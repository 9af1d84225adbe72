//! Error types for rendering and streaming.

/// Errors raised while rendering or streaming a page.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("No route matches path: {0}")]
    RouteNotFound(String),

    #[error("Unknown page handler: {0}")]
    UnknownPage(String),

    #[error("Shell not sent before sections")]
    ShellNotSent,

    #[error("Streaming error: {0}")]
    StreamError(String),

    #[error("Section '{0}' is not registered")]
    UnknownSection(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
