//! The latency probe loop
//!
//! Wires the capture session, classifier, reporter, and stimulus window
//! into the capture/classify/report cycle. The loop is single-threaded and
//! synchronous; each iteration blocks on one frame capture and one bounded
//! window-event wait. The reporter and the stimulus window are independent
//! consumers of the same transition event.

use crate::capture::CaptureSession;
use crate::config::ProbeConfig;
use crate::detector::TransitionDetector;
use crate::errors::ProbeError;
use crate::report::{self, TransitionReporter};
use crate::stimulus::StimulusWindow;
use crate::timing::TickClock;
use std::sync::atomic::{AtomicBool, Ordering};

/// Counters accumulated over one probe run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeStats {
    pub frames: u64,
    pub transitions: u64,
}

pub struct LatencyProbe {
    session: CaptureSession,
    window: StimulusWindow,
    detector: TransitionDetector,
    clock: TickClock,
}

impl LatencyProbe {
    /// Open the device, print the resolution banner, and create the window
    ///
    /// A device-open failure propagates before any window exists; the
    /// session releases the device on every exit path through its `Drop`.
    pub fn new(config: &ProbeConfig) -> Result<Self, ProbeError> {
        let session = CaptureSession::open(&config.camera)?;

        let (width, height) = session.actual_resolution();
        println!("{}", report::resolution_banner(width, height));

        let window = StimulusWindow::open(&config.window)?;
        let clock = TickClock::new();
        let detector = TransitionDetector::new(config.detector.black_threshold, clock.seconds());

        Ok(Self {
            session,
            window,
            detector,
            clock,
        })
    }

    /// Run the capture/classify/report cycle until quit
    ///
    /// Stops on the quit key, window close, or the shared stop flag. The
    /// frame counter advances every iteration, including iterations whose
    /// capture failed and was skipped.
    pub fn run(&mut self, stop: &AtomicBool) -> Result<ProbeStats, ProbeError> {
        let mut reporter = TransitionReporter::stdout();
        let mut sequence: u64 = 0;
        let mut transitions: u64 = 0;

        while !stop.load(Ordering::Relaxed) {
            sequence += 1;

            match self.session.capture_frame(sequence) {
                Ok(frame) => {
                    let mean = frame.mean_intensity();
                    if let Some(transition) =
                        self.detector.observe(mean, self.clock.seconds(), sequence)
                    {
                        transitions += 1;
                        if let Err(e) = reporter.report(&transition) {
                            log::warn!("Failed to write transition report: {}", e);
                        }
                        self.window.present(transition.state)?;
                    }
                }
                Err(e) => {
                    // Empty capture: skip classification, keep counting
                    log::warn!("{}", e);
                }
            }

            self.window.pump();
            if self.window.quit_requested() {
                break;
            }
        }

        if transitions > 0 {
            if let Err(e) = reporter.finish() {
                log::warn!("Failed to finish transition report: {}", e);
            }
        }

        log::info!(
            "Probe finished: {} frames captured, {} transitions detected",
            sequence,
            transitions
        );

        Ok(ProbeStats {
            frames: sequence,
            transitions,
        })
    }
}
