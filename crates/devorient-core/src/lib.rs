pub mod camera;
pub mod transform;
pub mod types;

pub use camera::Camera;
pub use transform::{device_to_camera, DEVICE_TO_CAMERA};
pub use types::{DeviceAngles, DeviceOrientation, ScreenOrientation};
