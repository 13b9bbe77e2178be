use crate::transform::device_to_camera;
use glam::Quat;

/// One reading from the device orientation sensor, in degrees.
///
/// Every angle is optional: a sensor that has not produced a value yet (or
/// reports NaN) contributes zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DeviceOrientation {
    /// Compass heading, rotation about Z (0..360).
    pub alpha: Option<f32>,
    /// Front-back tilt, rotation about X' (-180..180).
    pub beta: Option<f32>,
    /// Left-right tilt, rotation about Y'' (-90..90).
    pub gamma: Option<f32>,
}

/// Sensor angles converted to radians with absent readings resolved to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DeviceAngles {
    pub alpha: f32,
    pub beta: f32,
    pub gamma: f32,
}

impl DeviceOrientation {
    pub fn new(alpha: f32, beta: f32, gamma: f32) -> Self {
        Self {
            alpha: Some(alpha),
            beta: Some(beta),
            gamma: Some(gamma),
        }
    }

    /// Heading in degrees, zero when absent.
    pub fn heading_degrees(&self) -> f32 {
        degrees_or_zero(self.alpha)
    }

    /// Resolve to radians. `alpha_offset` (radians) is added to the heading.
    pub fn radians(&self, alpha_offset: f32) -> DeviceAngles {
        DeviceAngles {
            alpha: degrees_or_zero(self.alpha).to_radians() + alpha_offset,
            beta: degrees_or_zero(self.beta).to_radians(),
            gamma: degrees_or_zero(self.gamma).to_radians(),
        }
    }

    /// Camera rotation for this reading on a display rotated by `screen`.
    pub fn camera_quaternion(&self, screen: ScreenOrientation, alpha_offset: f32) -> Quat {
        let angles = self.radians(alpha_offset);
        device_to_camera(angles.alpha, angles.beta, angles.gamma, screen.radians())
    }
}

fn degrees_or_zero(value: Option<f32>) -> f32 {
    value.filter(|v| !v.is_nan()).unwrap_or(0.0)
}

/// Display rotation relative to the device's natural orientation, in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScreenOrientation(pub f32);

impl ScreenOrientation {
    pub const PORTRAIT: Self = Self(0.0);
    pub const LANDSCAPE_LEFT: Self = Self(90.0);
    pub const PORTRAIT_UPSIDE_DOWN: Self = Self(180.0);
    pub const LANDSCAPE_RIGHT: Self = Self(-90.0);

    pub fn degrees(self) -> f32 {
        degrees_or_zero(Some(self.0))
    }

    pub fn radians(self) -> f32 {
        self.degrees().to_radians()
    }
}

impl From<f32> for ScreenOrientation {
    fn from(degrees: f32) -> Self {
        Self(degrees)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn missing_fields_are_zero() {
        let sample = DeviceOrientation::default();
        assert_eq!(sample.radians(0.0), DeviceAngles::default());
    }

    #[test]
    fn nan_reading_counts_as_missing() {
        let sample = DeviceOrientation {
            alpha: Some(f32::NAN),
            beta: Some(90.0),
            gamma: None,
        };
        let angles = sample.radians(0.0);
        assert_eq!(angles.alpha, 0.0);
        assert_relative_eq!(angles.beta, FRAC_PI_2, epsilon = 1e-6);
        assert_eq!(angles.gamma, 0.0);
    }

    #[test]
    fn offset_is_added_to_alpha_only() {
        let sample = DeviceOrientation::new(90.0, 10.0, -10.0);
        let plain = sample.radians(0.0);
        let shifted = sample.radians(0.5);
        assert_relative_eq!(shifted.alpha, plain.alpha + 0.5, epsilon = 1e-6);
        assert_eq!(shifted.beta, plain.beta);
        assert_eq!(shifted.gamma, plain.gamma);
    }

    #[test]
    fn offset_applies_without_heading() {
        let sample = DeviceOrientation {
            alpha: None,
            ..DeviceOrientation::new(0.0, 20.0, 0.0)
        };
        assert_relative_eq!(sample.radians(0.25).alpha, 0.25, epsilon = 1e-6);
    }

    #[test]
    fn screen_orientation_presets() {
        assert_eq!(ScreenOrientation::default(), ScreenOrientation::PORTRAIT);
        assert_relative_eq!(
            ScreenOrientation::LANDSCAPE_LEFT.radians(),
            FRAC_PI_2,
            epsilon = 1e-6
        );
        assert_eq!(ScreenOrientation(f32::NAN).radians(), 0.0);
    }
}
