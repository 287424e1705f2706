//! camprobe: USB camera latency probe
//!
//! Measures end-to-end camera latency by showing alternating black/white
//! solid fills in a window, classifying each captured frame by mean
//! intensity, and reporting the elapsed time and frame count between
//! consecutive black/white transitions.
//!
//! # Features
//! - Blocking single-device capture over nokhwa with MJPEG negotiation
//! - Fixed-threshold black/white classification with flip-flop detection
//! - Carriage-return overwritten console timing line
//! - Stimulus window toggling the opposite fill after each flip
//! - TOML configuration with documented defaults
//!
//! # Usage
//! ```rust,no_run
//! use camprobe::{LatencyProbe, ProbeConfig};
//! use std::sync::atomic::AtomicBool;
//!
//! fn main() -> Result<(), camprobe::ProbeError> {
//!     camprobe::init_logging();
//!     let config = ProbeConfig::default();
//!     let mut probe = LatencyProbe::new(&config)?;
//!     let stop = AtomicBool::new(false);
//!     let stats = probe.run(&stop)?;
//!     println!("{} transitions over {} frames", stats.transitions, stats.frames);
//!     Ok(())
//! }
//! ```
pub mod capture;
pub mod config;
pub mod detector;
pub mod errors;
pub mod frame;
pub mod probe;
pub mod report;
pub mod stimulus;
pub mod timing;

// Testing utilities - synthetic data for offline testing
pub mod testing;

// Re-exports for convenience
pub use capture::{list_devices, CaptureSession, DeviceInfo};
pub use config::{CameraConfig, DetectorConfig, ProbeConfig, WindowConfig};
pub use detector::{Classification, Transition, TransitionDetector};
pub use errors::ProbeError;
pub use frame::ProbeFrame;
pub use probe::{LatencyProbe, ProbeStats};
pub use timing::TickClock;

/// Initialize logging for the probe
pub fn init_logging() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "camprobe=info");
    }
    let _ = env_logger::try_init();
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
