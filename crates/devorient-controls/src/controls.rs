use crate::source::{OrientationSource, OrientationStream};
use devorient_config::ControlsConfig;
use devorient_core::{DeviceOrientation, ScreenOrientation};
use glam::Quat;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum ControlsError {
    #[error(transparent)]
    Source(#[from] anyhow::Error),
    #[error("Controls are not connected to an orientation source")]
    NotConnected,
}

/// Drives a camera rotation from device orientation sensor samples.
///
/// While connected, the controls hold a subscription to the source and
/// `update` writes the camera rotation for the latest sample into a
/// caller-owned slot. Dropping the controls disconnects them.
pub struct DeviceOrientationControls<S: OrientationSource> {
    source: S,
    stream: Option<OrientationStream>,
    enabled: bool,
    /// Added to every heading, in radians.
    alpha_offset: f32,
    /// Last values seen on the stream.
    device: DeviceOrientation,
    screen: ScreenOrientation,
    feed_closed: bool,
}

impl<S: OrientationSource> DeviceOrientationControls<S> {
    /// Create controls and connect them to `source`.
    pub fn new(source: S) -> Result<Self, ControlsError> {
        let mut controls = Self::detached(source, 0.0);
        controls.connect()?;
        Ok(controls)
    }

    /// Create connected controls with the enabled flag and heading offset from `config`.
    pub fn with_config(source: S, config: &ControlsConfig) -> Result<Self, ControlsError> {
        let mut controls = Self::detached(source, config.alpha_offset_radians());
        controls.attach(config.enabled)?;
        Ok(controls)
    }

    fn detached(source: S, alpha_offset: f32) -> Self {
        Self {
            source,
            stream: None,
            enabled: false,
            alpha_offset,
            device: DeviceOrientation::default(),
            screen: ScreenOrientation::default(),
            feed_closed: false,
        }
    }

    /// Subscribe to the source, re-read the screen orientation and enable updates.
    ///
    /// Connecting while connected keeps the existing subscription.
    pub fn connect(&mut self) -> Result<(), ControlsError> {
        self.attach(true)
    }

    fn attach(&mut self, enabled: bool) -> Result<(), ControlsError> {
        match self.stream.as_mut() {
            Some(stream) => {
                self.screen = *stream.screen.borrow_and_update();
                debug!("Device orientation controls already connected");
            }
            None => {
                let mut stream = self.source.subscribe()?;
                self.screen = *stream.screen.borrow_and_update();
                self.stream = Some(stream);
                self.feed_closed = false;
                info!(
                    enabled,
                    screen_degrees = self.screen.degrees(),
                    "Device orientation controls connected"
                );
            }
        }
        self.enabled = enabled;
        Ok(())
    }

    /// Drop the subscription and disable updates.
    pub fn disconnect(&mut self) {
        if self.stream.take().is_some() {
            info!("Device orientation controls disconnected");
        }
        self.enabled = false;
    }

    pub fn is_connected(&self) -> bool {
        self.stream.is_some()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Heading offset in radians.
    pub fn alpha_offset(&self) -> f32 {
        self.alpha_offset
    }

    pub fn set_alpha_offset(&mut self, radians: f32) {
        self.alpha_offset = radians;
    }

    /// Make the current heading the zero heading.
    pub fn recenter(&mut self) -> Result<(), ControlsError> {
        if self.stream.is_none() {
            return Err(ControlsError::NotConnected);
        }
        self.refresh();
        self.alpha_offset = -self.device.heading_degrees().to_radians();
        debug!(alpha_offset = self.alpha_offset, "Heading recentered");
        Ok(())
    }

    /// Write the camera rotation for the latest sample into `target`.
    ///
    /// Returns `false` and leaves `target` untouched while disabled.
    pub fn update(&mut self, target: &mut Quat) -> bool {
        if !self.enabled {
            return false;
        }
        self.refresh();
        *target = self.device.camera_quaternion(self.screen, self.alpha_offset);
        true
    }

    /// Pull the latest values off the stream, if connected.
    fn refresh(&mut self) {
        let Some(stream) = self.stream.as_mut() else {
            return;
        };
        self.device = *stream.device.borrow_and_update();
        self.screen = *stream.screen.borrow_and_update();

        // A closed feed keeps its last values; warn once.
        let closed =
            stream.device.has_changed().is_err() || stream.screen.has_changed().is_err();
        if !self.feed_closed && closed {
            self.feed_closed = true;
            warn!("Orientation feed closed, holding last sample");
        }
    }
}

impl<S: OrientationSource> Drop for DeviceOrientationControls<S> {
    fn drop(&mut self) {
        self.disconnect();
    }
}
