//! Console output
//!
//! Two surfaces: the one-line startup banner with the granted resolution,
//! and the transition line that is continuously overwritten in place via a
//! carriage return.

use crate::detector::Transition;
use std::io::{self, Write};

/// The startup banner line, width and height as integers
pub fn resolution_banner(width: u32, height: u32) -> String {
    format!("actual video resolution:{}x{}", width, height)
}

/// The transition line body, both values to three decimal places
pub fn format_transition(transition: &Transition) -> String {
    format!(
        "{:.3} sec, {:.3} frames",
        transition.elapsed_seconds, transition.elapsed_frames as f64
    )
}

/// Writes transition reports over a single console line
pub struct TransitionReporter<W: Write> {
    out: W,
}

impl TransitionReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> TransitionReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Overwrite the current line with the latest flip timing
    pub fn report(&mut self, transition: &Transition) -> io::Result<()> {
        write!(self.out, "\r{}", format_transition(transition))?;
        self.out.flush()
    }

    /// Move off the overwritten line once reporting ends
    pub fn finish(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::Classification;

    #[test]
    fn test_resolution_banner_format() {
        assert_eq!(resolution_banner(1920, 1080), "actual video resolution:1920x1080");
    }

    #[test]
    fn test_transition_line_three_decimals() {
        let transition = Transition {
            elapsed_seconds: 0.12345,
            elapsed_frames: 7,
            state: Classification::White,
        };
        assert_eq!(format_transition(&transition), "0.123 sec, 7.000 frames");
    }

    #[test]
    fn test_report_overwrites_with_carriage_return() {
        let mut reporter = TransitionReporter::new(Vec::new());
        let transition = Transition {
            elapsed_seconds: 1.5,
            elapsed_frames: 45,
            state: Classification::Black,
        };
        reporter.report(&transition).unwrap();
        reporter.report(&transition).unwrap();

        let written = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(written, "\r1.500 sec, 45.000 frames\r1.500 sec, 45.000 frames");
        assert!(!written.contains('\n'));
    }
}
