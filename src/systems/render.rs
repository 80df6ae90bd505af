//! Z-sorted draw submission
//!
//! Collects every `(Space, Render)` pair, sorts back-to-front by `z` and
//! submits macroquad draw calls. Textures are resolved by sheet name at
//! this point and nowhere earlier, so the rest of the crate never holds a
//! GPU handle.

use std::collections::HashSet;

use hecs::World;
use macroquad::prelude::{draw_rectangle, draw_texture_ex, DrawTextureParams, Vec2};

use crate::assets::TextureStore;
use crate::components::{Drawable, Render, Space};

/// Draw every renderable entity under the current camera. A sheet name
/// with no texture in the store is logged once per frame and its entities
/// skipped; nothing here panics mid-frame.
pub fn draw_world(world: &World, textures: &TextureStore) {
    let mut query = world.query::<(&Space, &Render)>();
    let mut items: Vec<(&Space, &Render)> = query.iter().map(|(_, pair)| pair).collect();
    // Stable sort: entities sharing a z keep their relative order, so the
    // draw order is deterministic from frame to frame.
    items.sort_by_key(|(_, render)| render.z);

    let mut missing: HashSet<&str> = HashSet::new();
    for (space, render) in items {
        match &render.drawable {
            Drawable::Region { sheet, source } => {
                let Some(texture) = textures.get(sheet) else {
                    if missing.insert(sheet) {
                        log::warn!("no texture named '{}' loaded, skipping its draws", sheet);
                    }
                    continue;
                };
                let base = source
                    .map(|rect| Vec2::new(rect.w, rect.h))
                    .unwrap_or_else(|| texture.size());
                draw_texture_ex(
                    texture,
                    space.position.x,
                    space.position.y,
                    render.color,
                    DrawTextureParams {
                        dest_size: Some(base * render.scale),
                        source: *source,
                        ..Default::default()
                    },
                );
            }
            Drawable::Rect => {
                draw_rectangle(
                    space.position.x,
                    space.position.y,
                    space.width * render.scale.x,
                    space.height * render.scale.y,
                    render.color,
                );
            }
        }
    }
}
