use std::fmt;

#[derive(Debug)]
pub enum ProbeError {
    InitializationError(String),
    CaptureError(String),
    ControlError(String),
    DisplayError(String),
    ConfigError(String),
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ProbeError::InitializationError(msg) => write!(f, "Camera initialization error: {}", msg),
            ProbeError::CaptureError(msg) => write!(f, "Capture error: {}", msg),
            ProbeError::ControlError(msg) => write!(f, "Camera control error: {}", msg),
            ProbeError::DisplayError(msg) => write!(f, "Display error: {}", msg),
            ProbeError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for ProbeError {}
