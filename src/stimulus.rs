//! Stimulus window
//!
//! Presents the solid black/white fill that drives the next measurable
//! display change, and polls the quit key. The fill shown after a flip is
//! the opposite of the freshly detected state: a black reading puts white
//! on screen and vice versa, so the screen keeps toggling and every capture
//! round-trip produces the next transition.

use crate::config::WindowConfig;
use crate::detector::Classification;
use crate::errors::ProbeError;
use minifb::{Key, Window, WindowOptions};
use std::time::Duration;

const BLACK: u32 = 0x0000_0000;
const WHITE: u32 = 0x00FF_FFFF;

pub struct StimulusWindow {
    window: Window,
    black: Vec<u32>,
    white: Vec<u32>,
    size: usize,
}

impl StimulusWindow {
    /// Create the window and present the first stimulus
    ///
    /// The detector starts in the black state, so the initial fill is
    /// white, the same fill a first black reading would select.
    pub fn open(config: &WindowConfig) -> Result<Self, ProbeError> {
        let mut window = Window::new(
            &config.title,
            config.size,
            config.size,
            WindowOptions::default(),
        )
        .map_err(|e| ProbeError::DisplayError(format!("Failed to create window: {}", e)))?;

        // Bounded wait per update, standing in for the short key-poll delay
        window.limit_update_rate(Some(Duration::from_millis(1)));

        let pixel_count = config.size * config.size;
        let mut stimulus = Self {
            window,
            black: vec![BLACK; pixel_count],
            white: vec![WHITE; pixel_count],
            size: config.size,
        };
        stimulus.present(Classification::Black)?;
        Ok(stimulus)
    }

    /// Present the fill for a freshly detected state: the opposite color
    pub fn present(&mut self, state: Classification) -> Result<(), ProbeError> {
        let buffer = if state.is_black() {
            &self.white
        } else {
            &self.black
        };
        self.window
            .update_with_buffer(buffer, self.size, self.size)
            .map_err(|e| ProbeError::DisplayError(format!("Failed to update window: {}", e)))
    }

    /// Process window events without changing the fill
    pub fn pump(&mut self) {
        self.window.update();
    }

    /// Quit key pressed or window closed
    pub fn quit_requested(&self) -> bool {
        !self.window.is_open() || self.window.is_key_down(Key::Q)
    }
}
