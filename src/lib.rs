//! Rocket Playground - keyboard-steered rocket with obstacle avoidance, in WASM
//!
//! Architecture:
//! - core/        - Geometry value types
//! - domain/      - Keys and tunable settings
//! - systems/     - Layout and timer capabilities the controller depends on
//! - controller/  - Movement rules (clamp, collide, commit, orientation, motion flag)
//! - web/         - DOM page, listeners and the JS API (wasm32 only)

pub mod core;
pub mod domain;
pub mod systems;
pub mod controller;

#[cfg(target_arch = "wasm32")]
pub mod web;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize panic hook and console logging
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    #[cfg(target_arch = "wasm32")]
    {
        // A second call keeps the logger that is already installed.
        let _ = console_log::init_with_level(log::Level::Debug);
        web_sys::console::log_1(&"🚀 Rocket playground initialized!".into());
    }
}

/// Get crate version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use controller::{ControllerCore, MoveOutcome, Position, RocketView};
pub use domain::input::Key;
pub use domain::settings::ControllerSettings;

#[cfg(target_arch = "wasm32")]
pub use web::Playground;
