use glam::{EulerRot, Quat, Vec3};
use std::f32::consts::FRAC_1_SQRT_2;

/// -90 degrees around the X axis.
///
/// The sensor frame has the device's top edge as "forward", while the camera
/// looks out of the back of the device.
pub const DEVICE_TO_CAMERA: Quat = Quat::from_xyzw(-FRAC_1_SQRT_2, 0.0, 0.0, FRAC_1_SQRT_2);

/// Convert device orientation angles (radians) into a world-space camera rotation.
///
/// `alpha`, `beta` and `gamma` are the sensor's Z-X'-Y'' intrinsic angles.
/// The engine composes camera rotations in YXZ order, so the triple is
/// remapped to (x = beta, y = alpha, z = -gamma) before conversion.
/// `screen` is the display rotation relative to the device's natural
/// orientation and is undone around the camera's Z axis.
pub fn device_to_camera(alpha: f32, beta: f32, gamma: f32, screen: f32) -> Quat {
    let device = Quat::from_euler(EulerRot::YXZ, alpha, beta, -gamma);
    let screen_correction = Quat::from_axis_angle(Vec3::Z, -screen);
    device * DEVICE_TO_CAMERA * screen_correction
}
