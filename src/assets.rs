//! Texture bookkeeping
//!
//! Demos preload every texture they draw into a [`TextureStore`] during
//! startup; draw-time lookups are by sheet name. Textures get
//! `FilterMode::Nearest` on load, these are pixel-art demos and bilinear
//! filtering smears the tiles.

use std::collections::HashMap;

use macroquad::prelude::{load_texture, FilterMode, Texture2D};

/// A texture failed to load, with the path that was asked for.
#[derive(Debug)]
pub struct AssetError {
    pub path: String,
    pub source: macroquad::Error,
}

impl std::fmt::Display for AssetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "failed to load texture '{}': {}", self.path, self.source)
    }
}

impl std::error::Error for AssetError {}

/// Name to texture map filled during demo startup.
pub struct TextureStore {
    textures: HashMap<String, Texture2D>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self {
            textures: HashMap::new(),
        }
    }

    /// Load `file` (resolved under the configured asset folder) and store
    /// it under `name`. Replaces any texture already using that name.
    pub async fn load(&mut self, name: &str, file: &str) -> Result<(), AssetError> {
        let texture = load_texture(file).await.map_err(|source| AssetError {
            path: file.to_string(),
            source,
        })?;
        texture.set_filter(FilterMode::Nearest);
        log::info!(
            "loaded texture '{}' from {} ({}x{})",
            name,
            file,
            texture.width(),
            texture.height()
        );
        self.textures.insert(name.to_string(), texture);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Texture2D> {
        self.textures.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.textures.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

impl Default for TextureStore {
    fn default() -> Self {
        Self::new()
    }
}
