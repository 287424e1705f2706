//! Camera capture session
//!
//! Wraps a nokhwa camera bound to a device index. The session negotiates
//! the requested pixel format and resolution in a single format request
//! (the backend fixes the pixel format first, then resolves dimensions),
//! applies the fixed exposure, and exposes blocking per-frame capture
//! decoded to 8-bit luma. The granted format may differ from the request;
//! it is reported, not enforced.

use crate::config::CameraConfig;
use crate::errors::ProbeError;
use crate::frame::ProbeFrame;
use nokhwa::{
    pixel_format::LumaFormat,
    query,
    utils::{
        ApiBackend, CameraFormat, CameraIndex, ControlValueSetter, FrameFormat,
        KnownCameraControl, RequestedFormat, RequestedFormatType, Resolution,
    },
    Camera,
};
use serde::Serialize;

/// A camera known to the capture backend
#[derive(Debug, Clone, Serialize)]
pub struct DeviceInfo {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// List available cameras
pub fn list_devices() -> Result<Vec<DeviceInfo>, ProbeError> {
    let cameras = query(ApiBackend::Auto)
        .map_err(|e| ProbeError::InitializationError(format!("Failed to query cameras: {}", e)))?;

    Ok(cameras
        .into_iter()
        .map(|info| DeviceInfo {
            id: info.index().to_string(),
            name: info.human_name(),
            description: info.description().to_string(),
        })
        .collect())
}

fn parse_frame_format(s: &str) -> Result<FrameFormat, ProbeError> {
    match s {
        "MJPEG" => Ok(FrameFormat::MJPEG),
        "YUYV" => Ok(FrameFormat::YUYV),
        "GRAY" => Ok(FrameFormat::GRAY),
        other => Err(ProbeError::ConfigError(format!(
            "Unsupported pixel format: {}",
            other
        ))),
    }
}

/// Open capture session holding exclusive ownership of the device
pub struct CaptureSession {
    camera: Camera,
    granted: CameraFormat,
}

impl CaptureSession {
    /// Open the configured device and start its stream
    ///
    /// Any failure here is a device-open failure: the caller reports it and
    /// terminates without retry.
    pub fn open(config: &CameraConfig) -> Result<Self, ProbeError> {
        let frame_format = parse_frame_format(&config.format)?;
        let requested = RequestedFormat::new::<LumaFormat>(RequestedFormatType::Closest(
            CameraFormat::new(
                Resolution::new(config.resolution[0], config.resolution[1]),
                frame_format,
                config.fps,
            ),
        ));

        let mut camera = Camera::new(CameraIndex::Index(config.device_index), requested)
            .map_err(|e| {
                ProbeError::InitializationError(format!(
                    "Failed to open device {}: {}",
                    config.device_index, e
                ))
            })?;

        if config.manual_exposure {
            apply_manual_exposure(&mut camera, config.exposure);
        }

        camera.open_stream().map_err(|e| {
            ProbeError::InitializationError(format!("Failed to start stream: {}", e))
        })?;

        let granted = camera.camera_format();
        log::info!(
            "Opened device {} at {}x{}@{} {}",
            config.device_index,
            granted.resolution().width(),
            granted.resolution().height(),
            granted.frame_rate(),
            granted.format()
        );
        if granted.resolution() != Resolution::new(config.resolution[0], config.resolution[1]) {
            log::info!(
                "Device granted {}x{} instead of requested {}x{}",
                granted.resolution().width(),
                granted.resolution().height(),
                config.resolution[0],
                config.resolution[1]
            );
        }

        Ok(Self { camera, granted })
    }

    /// The resolution the device actually granted
    pub fn actual_resolution(&self) -> (u32, u32) {
        let res = self.granted.resolution();
        (res.width(), res.height())
    }

    /// The full format the device actually granted
    pub fn granted_format(&self) -> CameraFormat {
        self.granted
    }

    /// Block for the next frame and decode it to luma
    ///
    /// `sequence` is the loop's frame counter value for this capture.
    pub fn capture_frame(&mut self, sequence: u64) -> Result<ProbeFrame, ProbeError> {
        let buffer = self
            .camera
            .frame()
            .map_err(|e| ProbeError::CaptureError(format!("Failed to capture frame: {}", e)))?;

        let decoded = buffer
            .decode_image::<LumaFormat>()
            .map_err(|e| ProbeError::CaptureError(format!("Failed to decode frame: {}", e)))?;

        let (width, height) = (decoded.width(), decoded.height());
        Ok(ProbeFrame::new(decoded.into_raw(), width, height, sequence))
    }
}

/// Set a fixed exposure value, turning off automatic exposure where the
/// backend supports it
///
/// Control support varies widely across devices; failures degrade to
/// whatever the device does by default and are only logged.
fn apply_manual_exposure(camera: &mut Camera, exposure: i64) {
    match camera.camera_control(KnownCameraControl::Exposure) {
        Ok(control) => {
            log::debug!("Exposure control reported: {:?}", control);
        }
        Err(e) => {
            log::warn!("Exposure control not readable: {}", e);
        }
    }

    if let Err(e) =
        camera.set_camera_control(KnownCameraControl::Exposure, ControlValueSetter::Integer(exposure))
    {
        log::warn!("Failed to set exposure to {}: {}", exposure, e);
    } else {
        log::info!("Exposure fixed at {}", exposure);
    }
}

// Ensure the device is released on every exit path
impl Drop for CaptureSession {
    fn drop(&mut self) {
        if let Err(e) = self.camera.stop_stream() {
            log::debug!("Error stopping stream during drop: {}", e);
        }
    }
}
