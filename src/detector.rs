//! Black/white classification and transition detection
//!
//! Classification is a pure threshold test on a frame's mean intensity.
//! The detector is a two-state flip-flop: it remembers the previous
//! classification together with the tick and frame count at the last flip,
//! and produces a [`Transition`] each time the classification changes.
//! There is no debounce or hysteresis band beyond the single threshold.

/// Screen state derived from a frame's mean intensity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Black,
    White,
}

impl Classification {
    /// Classify a mean intensity against the threshold
    ///
    /// Black iff `mean < threshold` (strict); a mean exactly at the
    /// threshold classifies as white.
    pub fn from_mean(mean: f64, threshold: f64) -> Self {
        if mean < threshold {
            Classification::Black
        } else {
            Classification::White
        }
    }

    pub fn is_black(&self) -> bool {
        matches!(self, Classification::Black)
    }
}

/// One detected flip between consecutive frames
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    /// Seconds since the previous flip
    pub elapsed_seconds: f64,
    /// Frames captured since the previous flip
    pub elapsed_frames: u64,
    /// The classification after the flip
    pub state: Classification,
}

/// Flip-flop state tracker over a stream of classified frames
#[derive(Debug, Clone)]
pub struct TransitionDetector {
    threshold: f64,
    previous: Classification,
    previous_seconds: f64,
    previous_sequence: u64,
}

impl TransitionDetector {
    /// Create a detector with its initial state set to black
    ///
    /// `start_seconds` anchors the first elapsed-time measurement, so the
    /// first report covers the span from probe start to the first flip.
    pub fn new(threshold: f64, start_seconds: f64) -> Self {
        Self {
            threshold,
            previous: Classification::Black,
            previous_seconds: start_seconds,
            previous_sequence: 0,
        }
    }

    /// Feed one frame's mean intensity; returns a transition on a flip
    ///
    /// `seconds` must come from a non-decreasing clock and `sequence` is the
    /// frame counter value for this frame. Consecutive frames with the same
    /// classification never produce output.
    pub fn observe(&mut self, mean: f64, seconds: f64, sequence: u64) -> Option<Transition> {
        let current = Classification::from_mean(mean, self.threshold);
        if current == self.previous {
            return None;
        }

        let transition = Transition {
            elapsed_seconds: seconds - self.previous_seconds,
            elapsed_frames: sequence - self.previous_sequence,
            state: current,
        };

        self.previous = current;
        self.previous_seconds = seconds;
        self.previous_sequence = sequence;

        Some(transition)
    }

    /// The classification after the most recent flip
    pub fn current_state(&self) -> Classification {
        self.previous
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}
