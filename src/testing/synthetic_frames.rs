//! Synthetic frame generators
//!
//! Deterministic luma frames standing in for camera output, enabling
//! reliable offline testing of classification and transition detection
//! without requiring hardware.

use crate::frame::ProbeFrame;

/// A frame where every sample holds the same intensity
pub fn solid_frame(intensity: u8, width: u32, height: u32, sequence: u64) -> ProbeFrame {
    ProbeFrame::new(
        vec![intensity; (width * height) as usize],
        width,
        height,
        sequence,
    )
}

/// A frame sweeping horizontally from 0 to 255
///
/// Mean intensity lands near mid-scale, useful for exercising values on
/// both sides of a threshold within one image.
pub fn gradient_frame(width: u32, height: u32, sequence: u64) -> ProbeFrame {
    let mut pixels = vec![0u8; (width * height) as usize];
    for y in 0..height {
        for x in 0..width {
            pixels[(y * width + x) as usize] = (x * 255 / width.max(1)) as u8;
        }
    }
    ProbeFrame::new(pixels, width, height, sequence)
}

/// Mean-intensity sequence alternating between two levels in fixed blocks
///
/// `frames_per_phase` consecutive values of `low`, then of `high`,
/// repeated for `phases` blocks starting with `low`.
pub fn square_wave_means(frames_per_phase: usize, phases: usize, low: f64, high: f64) -> Vec<f64> {
    let mut means = Vec::with_capacity(frames_per_phase * phases);
    for phase in 0..phases {
        let level = if phase % 2 == 0 { low } else { high };
        means.extend(std::iter::repeat(level).take(frames_per_phase));
    }
    means
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_frame_mean_equals_intensity() {
        let frame = solid_frame(60, 320, 240, 1);
        assert!(frame.is_valid());
        assert_eq!(frame.mean_intensity(), 60.0);
    }

    #[test]
    fn test_gradient_frame_mean_near_midscale() {
        let frame = gradient_frame(256, 4, 1);
        let mean = frame.mean_intensity();
        assert!((120.0..135.0).contains(&mean), "unexpected mean {}", mean);
    }

    #[test]
    fn test_square_wave_shape() {
        let means = square_wave_means(3, 4, 10.0, 200.0);
        assert_eq!(means.len(), 12);
        assert_eq!(&means[0..3], &[10.0, 10.0, 10.0]);
        assert_eq!(&means[3..6], &[200.0, 200.0, 200.0]);
        assert_eq!(&means[6..9], &[10.0, 10.0, 10.0]);
    }
}
