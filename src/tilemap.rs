//! TMX map glue over rs-tiled
//!
//! The parser owns everything hard (encodings, external tilesets, chunked
//! data); this module only walks the parsed map and flattens it into draw
//! placements the demos can spawn entities from. Split so everything
//! except the final spawn is pure over `&Map` and testable headless.

use std::path::Path;

use hecs::World;
use macroquad::prelude::{vec2, Rect, Vec2};
use tiled::{LayerType, Loader, Map, TileLayer, Tileset};

use crate::components::{Render, Space, Tile};

/// Error type for map loading
#[derive(Debug)]
pub enum MapError {
    /// rs-tiled failed to read or parse the map (covers file IO too).
    Parse(tiled::Error),
    /// The map is marked infinite; the demos only handle finite maps.
    Infinite,
}

impl From<tiled::Error> for MapError {
    fn from(e: tiled::Error) -> Self {
        MapError::Parse(e)
    }
}

impl std::fmt::Display for MapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapError::Parse(e) => write!(f, "TMX parse error: {}", e),
            MapError::Infinite => write!(f, "infinite maps are not supported"),
        }
    }
}

impl std::error::Error for MapError {}

/// One thing the map wants drawn: a tileset cell or a whole image.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    /// Name of the layer this came from, for z assignment.
    pub layer: String,
    /// World position in pixels: tile grid position times tile size, plus
    /// the layer offset.
    pub pos: Vec2,
    /// Sheet name to draw from, the image file's stem.
    pub sheet: String,
    /// Pixel rectangle inside the sheet. `None` draws the whole image
    /// (image layers).
    pub source: Option<Rect>,
}

/// Parse a TMX file. Infinite maps are rejected.
pub fn load_map(path: impl AsRef<Path>) -> Result<Map, MapError> {
    let path = path.as_ref();
    let mut loader = Loader::new();
    let map = loader.load_tmx_map(path)?;
    if map.infinite() {
        return Err(MapError::Infinite);
    }
    log::info!(
        "loaded map {}: {}x{} tiles of {}x{} px, {} layers",
        path.display(),
        map.width,
        map.height,
        map.tile_width,
        map.tile_height,
        map.layers().len()
    );
    Ok(map)
}

/// Flatten a map into draw placements: one per present tile in each
/// finite tile layer, one per image layer with an image. Tiles whose
/// tileset has no image and image layers without an image are skipped,
/// as are invisible layers. Object and group layers are ignored.
pub fn placements(map: &Map) -> Vec<Placement> {
    let tile_size = vec2(map.tile_width as f32, map.tile_height as f32);
    let mut out = Vec::new();

    for layer in map.layers() {
        if !layer.visible {
            continue;
        }
        let offset = vec2(layer.offset_x, layer.offset_y);
        match layer.layer_type() {
            LayerType::Tiles(TileLayer::Finite(tiles)) => {
                for y in 0..tiles.height() {
                    for x in 0..tiles.width() {
                        let Some(tile) = tiles.get_tile(x as i32, y as i32) else {
                            continue;
                        };
                        let tileset = tile.get_tileset();
                        let Some(image) = &tileset.image else {
                            continue;
                        };
                        out.push(Placement {
                            layer: layer.name.clone(),
                            pos: vec2(x as f32, y as f32) * tile_size + offset,
                            sheet: sheet_stem(&image.source),
                            source: Some(tile_source(tileset, tile.id())),
                        });
                    }
                }
            }
            // load_map rejects infinite maps before we get here.
            LayerType::Tiles(TileLayer::Infinite(_)) => {}
            LayerType::Image(image_layer) => {
                if let Some(image) = &image_layer.image {
                    out.push(Placement {
                        layer: layer.name.clone(),
                        pos: offset,
                        sheet: sheet_stem(&image.source),
                        source: None,
                    });
                }
            }
            LayerType::Objects(_) | LayerType::Group(_) => {}
        }
    }
    out
}

/// The map's pixel rectangle, origin at (0, 0). The follow camera uses
/// this as its tracking bounds.
pub fn pixel_bounds(map: &Map) -> Rect {
    Rect::new(
        0.0,
        0.0,
        (map.width * map.tile_width) as f32,
        (map.height * map.tile_height) as f32,
    )
}

/// Every distinct sheet the map draws from (tileset images and image
/// layer images), in first-seen order, as `(name, file)` pairs: `name` is
/// the stem placements refer to, `file` is the image file name to hand
/// the texture loader, whatever its extension.
pub fn sheet_names(map: &Map) -> Vec<(String, String)> {
    let mut sheets: Vec<(String, String)> = Vec::new();
    for tileset in map.tilesets() {
        if let Some(image) = &tileset.image {
            push_sheet(&mut sheets, &image.source);
        }
    }
    for layer in map.layers() {
        if let LayerType::Image(image_layer) = layer.layer_type() {
            if let Some(image) = &image_layer.image {
                push_sheet(&mut sheets, &image.source);
            }
        }
    }
    sheets
}

fn push_sheet(sheets: &mut Vec<(String, String)>, source: &Path) {
    let name = sheet_stem(source);
    if sheets.iter().any(|(seen, _)| *seen == name) {
        return;
    }
    let file = source
        .file_name()
        .map(|file| file.to_string_lossy().into_owned())
        .unwrap_or_default();
    sheets.push((name, file));
}

/// Spawn one [`Tile`] bundle per placement. `zmap` assigns a z value per
/// layer name; that choice (grass behind trees behind clouds) is per-demo.
/// Returns how many entities were spawned.
pub fn spawn_tiles(
    world: &mut World,
    placements: Vec<Placement>,
    zmap: impl Fn(&str) -> i32,
) -> usize {
    let mut spawned = 0;
    for placement in placements {
        let z = zmap(&placement.layer);
        let render = match placement.source {
            Some(source) => Render::region(&placement.sheet, source),
            None => Render::sprite(&placement.sheet),
        }
        .with_z(z);
        // Map tiles occupy no space of their own, matching how the camera
        // bounds come from the map rectangle rather than tile extents.
        world.spawn(Tile {
            render,
            space: Space::new(placement.pos.x, placement.pos.y, 0.0, 0.0),
        });
        spawned += 1;
    }
    spawned
}

/// Pixel rectangle of one tile inside its tileset image, honoring the
/// tileset's margin, spacing and column count.
fn tile_source(tileset: &Tileset, id: u32) -> Rect {
    let columns = tileset.columns.max(1);
    let col = id % columns;
    let row = id / columns;
    Rect::new(
        (tileset.margin + col * (tileset.tile_width + tileset.spacing)) as f32,
        (tileset.margin + row * (tileset.tile_height + tileset.spacing)) as f32,
        tileset.tile_width as f32,
        tileset.tile_height as f32,
    )
}

fn sheet_stem(source: &Path) -> String {
    source
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
