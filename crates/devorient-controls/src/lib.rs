pub mod controls;
pub mod source;

pub use controls::{ControlsError, DeviceOrientationControls};
pub use source::{OrientationFeed, OrientationSource, OrientationStream, UnavailableSource};
