use crate::core::data::render_config::ConfigError;
use crate::core::data::viewport::ViewportError;
use std::error::Error;
use std::fmt;

/// Validation failure reported before any pixel is evaluated.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum FieldError {
    InvalidConfig(ConfigError),
    DegenerateViewport(ViewportError),
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig(err) => write!(f, "invalid config: {}", err),
            Self::DegenerateViewport(err) => write!(f, "degenerate viewport: {}", err),
        }
    }
}

impl Error for FieldError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidConfig(err) => Some(err),
            Self::DegenerateViewport(err) => Some(err),
        }
    }
}

impl From<ConfigError> for FieldError {
    fn from(err: ConfigError) -> Self {
        Self::InvalidConfig(err)
    }
}

impl From<ViewportError> for FieldError {
    fn from(err: ViewportError) -> Self {
        Self::DegenerateViewport(err)
    }
}
