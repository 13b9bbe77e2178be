use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Device orientation controls.
    pub controls: ControlsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    /// Whether updates are applied as soon as the controls connect.
    pub enabled: bool,
    /// Heading offset added to every sample, in degrees. Used to recenter the view.
    pub alpha_offset_degrees: f32,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            alpha_offset_degrees: 0.0,
        }
    }
}

impl ControlsConfig {
    /// Heading offset in radians, the unit the transform works in.
    pub fn alpha_offset_radians(&self) -> f32 {
        self.alpha_offset_degrees.to_radians()
    }
}
