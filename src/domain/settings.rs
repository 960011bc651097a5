use serde::{Deserialize, Serialize};

pub const DEFAULT_STEP_PX: f64 = 10.0;
pub const DEFAULT_ATTRACTION_FACTOR: f64 = 0.5;
pub const DEFAULT_IDLE_MS: u32 = 150;
/// The rocket sprite points up-right at rest; this turns it to face the cursor.
pub const DEFAULT_ROTATION_OFFSET_DEG: f64 = 53.0;

/// Tunables for the movement controller.
///
/// Every field is optional in JSON, missing ones fall back to the defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerSettings {
    pub step_px: f64,
    pub attraction_factor: f64,
    pub idle_ms: u32,
    pub rotation_offset_deg: f64,
    /// `KeyboardEvent.key` values that trigger the attraction move
    pub attract_keys: Vec<String>,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            step_px: DEFAULT_STEP_PX,
            attraction_factor: DEFAULT_ATTRACTION_FACTOR,
            idle_ms: DEFAULT_IDLE_MS,
            rotation_offset_deg: DEFAULT_ROTATION_OFFSET_DEG,
            attract_keys: vec![" ".to_string(), "Spacebar".to_string()],
        }
    }
}

impl ControllerSettings {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let settings: ControllerSettings = serde_json::from_str(json).map_err(|e| e.to_string())?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(self.step_px.is_finite() && self.step_px > 0.0) {
            return Err(format!("step_px must be a positive number, got {}", self.step_px));
        }
        if !self.attraction_factor.is_finite() {
            return Err("attraction_factor must be finite".to_string());
        }
        if self.idle_ms == 0 {
            return Err("idle_ms must be greater than zero".to_string());
        }
        if !self.rotation_offset_deg.is_finite() {
            return Err("rotation_offset_deg must be finite".to_string());
        }
        Ok(())
    }
}
