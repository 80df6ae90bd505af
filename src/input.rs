//! Direction input over macroquad key polling
//!
//! Bindings map the four direction actions to key *names* (plain strings,
//! so they serialize into the RON settings file). Names are parsed to
//! [`KeyCode`]s once at startup; each frame a [`DirectionInput`] snapshot
//! is taken with `is_key_down` and handed to the systems.

use macroquad::prelude::{is_key_down, KeyCode};
use serde::{Deserialize, Serialize};

/// Key names bound to each direction action. Several keys may drive the
/// same action; any of them held triggers it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bindings {
    #[serde(default)]
    pub up: Vec<String>,
    #[serde(default)]
    pub down: Vec<String>,
    #[serde(default)]
    pub left: Vec<String>,
    #[serde(default)]
    pub right: Vec<String>,
}

impl Bindings {
    /// Arrow keys only.
    pub fn arrows() -> Self {
        Self {
            up: vec!["Up".into()],
            down: vec!["Down".into()],
            left: vec!["Left".into()],
            right: vec!["Right".into()],
        }
    }

    /// Arrow keys plus WASD.
    pub fn standard() -> Self {
        Self {
            up: vec!["Up".into(), "W".into()],
            down: vec!["Down".into(), "S".into()],
            left: vec!["Left".into(), "A".into()],
            right: vec!["Right".into(), "D".into()],
        }
    }

    /// Parse key names to key codes. Unknown names are logged and skipped;
    /// an action whose list ends up empty is simply never triggered.
    pub fn resolve(&self) -> ResolvedBindings {
        ResolvedBindings {
            up: resolve_action(&self.up, "up"),
            down: resolve_action(&self.down, "down"),
            left: resolve_action(&self.left, "left"),
            right: resolve_action(&self.right, "right"),
        }
    }
}

impl Default for Bindings {
    fn default() -> Self {
        Self::standard()
    }
}

fn resolve_action(names: &[String], action: &str) -> Vec<KeyCode> {
    let mut keys = Vec::with_capacity(names.len());
    for name in names {
        match key_from_name(name) {
            Some(key) => keys.push(key),
            None => log::warn!("unknown key name '{}' bound to {}, skipping", name, action),
        }
    }
    keys
}

/// Key names accepted in bindings. Extend the table when a demo needs
/// another key.
fn key_from_name(name: &str) -> Option<KeyCode> {
    let key = match name {
        "Up" => KeyCode::Up,
        "Down" => KeyCode::Down,
        "Left" => KeyCode::Left,
        "Right" => KeyCode::Right,
        "W" => KeyCode::W,
        "A" => KeyCode::A,
        "S" => KeyCode::S,
        "D" => KeyCode::D,
        "Space" => KeyCode::Space,
        "Escape" => KeyCode::Escape,
        _ => return None,
    };
    Some(key)
}

/// [`Bindings`] with key names parsed to key codes, ready to poll.
#[derive(Debug, Clone, Default)]
pub struct ResolvedBindings {
    pub up: Vec<KeyCode>,
    pub down: Vec<KeyCode>,
    pub left: Vec<KeyCode>,
    pub right: Vec<KeyCode>,
}

/// Per-frame snapshot of the four direction actions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectionInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl DirectionInput {
    /// Sample the keyboard. Call once per frame.
    pub fn poll(bindings: &ResolvedBindings) -> Self {
        Self {
            up: any_down(&bindings.up),
            down: any_down(&bindings.down),
            left: any_down(&bindings.left),
            right: any_down(&bindings.right),
        }
    }

    /// Horizontal axis: right minus left, so -1, 0 or +1. Opposing keys
    /// held together cancel.
    pub fn axis_x(&self) -> f32 {
        (self.right as i32 - self.left as i32) as f32
    }

    /// Vertical axis: down minus up. Positive points down the screen,
    /// matching the y-down pixel coordinates everything else uses.
    pub fn axis_y(&self) -> f32 {
        (self.down as i32 - self.up as i32) as f32
    }
}

fn any_down(keys: &[KeyCode]) -> bool {
    keys.iter().any(|&key| is_key_down(key))
}
