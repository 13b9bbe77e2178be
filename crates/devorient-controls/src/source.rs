use anyhow::Result;
use devorient_core::{DeviceOrientation, ScreenOrientation};
use std::sync::Arc;
use tokio::sync::watch;

/// Latest-value receivers for one subscriber.
pub struct OrientationStream {
    pub device: watch::Receiver<DeviceOrientation>,
    pub screen: watch::Receiver<ScreenOrientation>,
}

/// Something that produces device orientation samples and screen rotation changes.
pub trait OrientationSource {
    fn subscribe(&self) -> Result<OrientationStream>;
}

impl<S: OrientationSource + ?Sized> OrientationSource for Arc<S> {
    fn subscribe(&self) -> Result<OrientationStream> {
        (**self).subscribe()
    }
}

impl<S: OrientationSource + ?Sized> OrientationSource for &S {
    fn subscribe(&self) -> Result<OrientationStream> {
        (**self).subscribe()
    }
}

struct FeedChannels {
    device_tx: watch::Sender<DeviceOrientation>,
    screen_tx: watch::Sender<ScreenOrientation>,
}

/// Publishing side of an orientation source.
///
/// The platform layer pushes sensor events and display rotation changes in;
/// subscribers only ever see the most recent value of each. Clones share
/// the same channels.
#[derive(Clone)]
pub struct OrientationFeed {
    channels: Arc<FeedChannels>,
}

impl Default for OrientationFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl OrientationFeed {
    pub fn new() -> Self {
        let (device_tx, _) = watch::channel(DeviceOrientation::default());
        let (screen_tx, _) = watch::channel(ScreenOrientation::default());
        Self {
            channels: Arc::new(FeedChannels {
                device_tx,
                screen_tx,
            }),
        }
    }

    /// Publish a new sensor reading.
    pub fn publish_orientation(&self, sample: DeviceOrientation) {
        // send_replace stores the value even while nobody is subscribed.
        self.channels.device_tx.send_replace(sample);
    }

    /// Publish a display rotation change.
    pub fn publish_screen_orientation(&self, screen: ScreenOrientation) {
        self.channels.screen_tx.send_replace(screen);
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.channels.device_tx.receiver_count()
    }
}

impl OrientationSource for OrientationFeed {
    fn subscribe(&self) -> Result<OrientationStream> {
        Ok(OrientationStream {
            device: self.channels.device_tx.subscribe(),
            screen: self.channels.screen_tx.subscribe(),
        })
    }
}

/// Source for hosts without an orientation sensor.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableSource;

impl OrientationSource for UnavailableSource {
    fn subscribe(&self) -> Result<OrientationStream> {
        Err(anyhow::anyhow!("Device orientation sensor unavailable"))
    }
}
