//! Captured frame representation
//!
//! A frame holds single-channel intensity samples plus the metadata the
//! probe loop needs: a monotonically increasing sequence number and the
//! capture wall-clock timestamp.

use chrono::{DateTime, Utc};

/// A single captured frame, decoded to 8-bit luma
#[derive(Clone)]
pub struct ProbeFrame {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
    sequence: u64,
    captured_at: DateTime<Utc>,
}

impl ProbeFrame {
    pub fn new(pixels: Vec<u8>, width: u32, height: u32, sequence: u64) -> Self {
        Self {
            pixels,
            width,
            height,
            sequence,
            captured_at: Utc::now(),
        }
    }

    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    #[inline]
    pub fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }

    #[inline]
    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Buffer size matches the declared dimensions
    pub fn is_valid(&self) -> bool {
        self.pixels.len() == self.pixel_count()
    }

    /// Arithmetic mean intensity over all samples, on the 0-255 scale
    ///
    /// Returns 0.0 for an empty buffer rather than dividing by zero.
    pub fn mean_intensity(&self) -> f64 {
        if self.pixels.is_empty() {
            return 0.0;
        }
        let total: u64 = self.pixels.iter().map(|&p| p as u64).sum();
        total as f64 / self.pixels.len() as f64
    }
}

impl std::fmt::Debug for ProbeFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProbeFrame")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("sequence", &self.sequence)
            .field("pixel_bytes", &self.pixels.len())
            .finish()
    }
}
