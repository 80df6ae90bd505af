//! Components and entity bundles
//!
//! Plain data structs attached to hecs entities - behavior lives in the
//! system functions under [`crate::systems`]. Textures are referenced by
//! sheet name and resolved against the [`crate::assets::TextureStore`] at
//! draw time, so everything here stays `Send + Sync` and testable without
//! a window.

use hecs::Bundle;
use macroquad::prelude::{Color, Rect, Vec2, WHITE};

// =============================================================================
// Position / Size
// =============================================================================

/// Where an entity sits in the world and how much room it takes up.
///
/// Coordinates are y-down pixels, position is the top-left corner.
/// Tiles spawned from a map use zero width/height; only entities the
/// camera tracks need a real size.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Space {
    pub position: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Space {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        debug_assert!(
            width >= 0.0 && height >= 0.0,
            "space size must be non-negative, got {}x{}",
            width,
            height
        );
        Self {
            position: Vec2::new(x, y),
            width,
            height,
        }
    }

    /// Midpoint of the occupied rectangle. For a zero-sized space this is
    /// just the position.
    pub fn center(&self) -> Vec2 {
        self.position + Vec2::new(self.width, self.height) * 0.5
    }
}

// =============================================================================
// Rendering
// =============================================================================

/// What an entity is drawn as.
#[derive(Debug, Clone, PartialEq)]
pub enum Drawable {
    /// A texture from the store, optionally restricted to a sub-rectangle
    /// (one cell of a tileset). `None` means the whole texture.
    Region {
        sheet: String,
        source: Option<Rect>,
    },
    /// A solid rectangle sized by the entity's [`Space`].
    Rect,
}

/// Render descriptor: what to draw, how big, in which order, what tint.
#[derive(Debug, Clone, PartialEq)]
pub struct Render {
    pub drawable: Drawable,
    /// Multiplier applied to the drawable's natural size.
    pub scale: Vec2,
    /// Draw order. Lower values are drawn first (further back).
    pub z: i32,
    /// Tint for textures, fill color for rectangles.
    pub color: Color,
}

impl Render {
    /// Draw a whole texture by sheet name.
    pub fn sprite(sheet: &str) -> Self {
        Self {
            drawable: Drawable::Region {
                sheet: sheet.to_string(),
                source: None,
            },
            scale: Vec2::ONE,
            z: 0,
            color: WHITE,
        }
    }

    /// Draw a sub-rectangle of a texture (a tileset cell).
    pub fn region(sheet: &str, source: Rect) -> Self {
        Self {
            drawable: Drawable::Region {
                sheet: sheet.to_string(),
                source: Some(source),
            },
            scale: Vec2::ONE,
            z: 0,
            color: WHITE,
        }
    }

    /// Draw a solid rectangle sized by the entity's [`Space`].
    pub fn rect(color: Color) -> Self {
        Self {
            drawable: Drawable::Rect,
            scale: Vec2::ONE,
            z: 0,
            color,
        }
    }

    pub fn with_scale(mut self, scale: Vec2) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_z(mut self, z: i32) -> Self {
        self.z = z;
        self
    }
}

// =============================================================================
// Markers
// =============================================================================

/// Marks the entity moved by the control system.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayerControlled;

/// Marks the entity the follow camera keeps centered.
#[derive(Debug, Clone, Copy, Default)]
pub struct CameraTarget;

// =============================================================================
// Bundles
// =============================================================================

/// A static map tile or background image: drawn, never moved.
#[derive(Bundle)]
pub struct Tile {
    pub render: Render,
    pub space: Space,
}

/// The player sprite: drawn, keyboard-moved, camera-tracked.
#[derive(Bundle)]
pub struct Character {
    pub render: Render,
    pub space: Space,
    pub control: PlayerControlled,
    pub tracked: CameraTarget,
}
