//! tilescroll: tile map, sprite and camera scrolling demos
//!
//! Small example programs built on macroquad (window, rendering, input),
//! hecs (entity-component storage) and rs-tiled (TMX parsing):
//! - Loading a tile map and spawning a drawable entity per tile
//! - Moving a player-controlled sprite with the keyboard
//! - Scrolling the camera, either following an entity or driven by keys
//!
//! The engine concerns live entirely in those crates; this library is the
//! glue between them: plain-data components, per-frame system functions,
//! map flattening, texture bookkeeping and RON settings.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod assets;
pub mod components;
pub mod input;
pub mod settings;
pub mod systems;
pub mod tilemap;

pub use assets::{AssetError, TextureStore};
pub use components::{CameraTarget, Character, Drawable, PlayerControlled, Render, Space, Tile};
pub use input::{Bindings, DirectionInput, ResolvedBindings};
pub use settings::{AssetSettings, ControlSettings, Settings, SettingsError, WindowSettings};
pub use systems::camera::{clamp_center, pixel_camera, FollowCamera, KeyScroller};
pub use systems::control::apply_movement;
pub use systems::render::draw_world;
pub use tilemap::{load_map, pixel_bounds, placements, sheet_names, spawn_tiles, MapError, Placement};
