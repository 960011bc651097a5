use crate::domain::settings::ControllerSettings;

/// Keyboard commands understood by the controller
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    /// Fly toward the cursor
    Attract,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    ///
    /// Arrow keys are fixed; the attract binding comes from settings.
    pub fn from_key_name(name: &str, settings: &ControllerSettings) -> Self {
        match name {
            "ArrowUp" => Key::Up,
            "ArrowDown" => Key::Down,
            "ArrowLeft" => Key::Left,
            "ArrowRight" => Key::Right,
            _ if settings.attract_keys.iter().any(|k| k == name) => Key::Attract,
            _ => Key::Other,
        }
    }

    /// Unit direction of an arrow key as (d_top, d_left)
    pub fn direction(self) -> Option<(f64, f64)> {
        match self {
            Key::Up => Some((-1.0, 0.0)),
            Key::Down => Some((1.0, 0.0)),
            Key::Left => Some((0.0, -1.0)),
            Key::Right => Some((0.0, 1.0)),
            Key::Attract | Key::Other => None,
        }
    }

    pub fn is_recognized(self) -> bool {
        self != Key::Other
    }
}
