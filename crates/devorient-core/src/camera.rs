use glam::{EulerRot, Mat4, Quat, Vec3};

/// Rotation slot of a camera driven by the device orientation sensor.
///
/// The camera stays at the origin; only its orientation changes. Forward is
/// -Z and up is +Y in camera space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub orientation: Quat,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    pub fn new() -> Self {
        Self {
            orientation: Quat::IDENTITY,
        }
    }

    /// World-space viewing direction.
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    /// World-space up direction.
    pub fn up(&self) -> Vec3 {
        self.orientation * Vec3::Y
    }

    /// (yaw, pitch, roll) in radians, decomposed in YXZ order.
    pub fn euler_yxz(&self) -> (f32, f32, f32) {
        self.orientation.to_euler(EulerRot::YXZ)
    }

    /// View matrix (inverse of camera world rotation).
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_quat(self.orientation.conjugate())
    }
}
