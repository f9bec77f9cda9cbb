use serde::{Deserialize, Serialize};

/// Screen-space coordinate. Smaller `y` is higher on screen, i.e. higher energy.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub x: f32,
    pub y: f32,
}

impl CurvePoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }
}

/// Inputs of the curve model. `barrier` is nominally in [0, 1] but is never clamped.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurveInput {
    pub is_exothermic: bool,
    pub barrier: f32,
}

impl CurveInput {
    pub fn new(is_exothermic: bool, barrier: f32) -> Self {
        Self { is_exothermic, barrier }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb`
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Everything the host controls: the two curve inputs plus the overlay toggles.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiagramSettings {
    pub exothermic: bool,
    pub barrier: f32,
    #[serde(default)]
    pub catalyst_overlay: bool,
    #[serde(default)]
    pub heat_overlay: bool,
}

impl Default for DiagramSettings {
    fn default() -> Self {
        Self {
            exothermic: true,
            barrier: crate::config::DEFAULT_BARRIER,
            catalyst_overlay: false,
            heat_overlay: false,
        }
    }
}

impl DiagramSettings {
    pub fn curve_input(&self) -> CurveInput {
        CurveInput::new(self.exothermic, self.barrier)
    }
}
