//! Testing utilities - synthetic frames for offline testing

pub mod synthetic_frames;

pub use synthetic_frames::{gradient_frame, solid_frame, square_wave_means};
