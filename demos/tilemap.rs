//! Tile map demo
//!
//! Loads a TMX map (grass and tree tile layers plus cloud image layers),
//! spawns one entity per tile, and drives an icon character over it with
//! the arrow keys. The camera follows the character without ever showing
//! anything outside the map.
//!
//! Run with: `cargo run --bin tilemap`

use std::path::Path;

use hecs::World;
use macroquad::prelude::*;

use tilescroll::{
    apply_movement, draw_world, load_map, pixel_bounds, placements, sheet_names, spawn_tiles,
    Bindings, CameraTarget, Character, DirectionInput, FollowCamera, PlayerControlled, Render,
    Settings, Space, TextureStore, VERSION,
};

fn demo_settings() -> Settings {
    let mut fallback = Settings::default();
    fallback.window.title = "Tile Map".to_string();
    fallback.controls.bindings = Bindings::arrows();
    Settings::load_or("tilemap.ron", fallback)
}

fn window_conf() -> Conf {
    demo_settings().window.conf()
}

/// Draw order for map layers: grass under everything, the character in
/// between, trees and clouds above.
fn layer_z(layer: &str) -> i32 {
    match layer {
        "grass" => 0,
        "trees" => 2,
        name if name.contains("clouds") => 3,
        _ => 0,
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let _ = env_logger::try_init();
    let settings = demo_settings();
    log::info!(
        "tilemap demo (tilescroll v{}): {}x{} window, step {} px per frame",
        VERSION,
        settings.window.width,
        settings.window.height,
        settings.controls.step
    );

    set_pc_assets_folder(&settings.assets.root);
    let bindings = settings.controls.bindings.resolve();

    let map = match load_map(Path::new(&settings.assets.root).join("example.tmx")) {
        Ok(map) => map,
        Err(e) => {
            log::error!("cannot start without a map: {}", e);
            return;
        }
    };

    let mut textures = TextureStore::new();
    for (sheet, file) in sheet_names(&map) {
        if let Err(e) = textures.load(&sheet, &file).await {
            log::warn!("{}", e);
        }
    }
    if let Err(e) = textures.load("icon", "icon.png").await {
        log::warn!("{}", e);
    }

    let mut world = World::new();
    let spawned = spawn_tiles(&mut world, placements(&map), layer_z);
    log::info!("spawned {} tile entities", spawned);

    let icon_scale = 5.0;
    let icon_size = textures
        .get("icon")
        .map(|texture| texture.size() * icon_scale)
        .unwrap_or(vec2(80.0, 80.0));
    world.spawn(Character {
        render: Render::sprite("icon")
            .with_scale(Vec2::splat(icon_scale))
            .with_z(1),
        space: Space::new(
            settings.window.width as f32 / 2.0,
            settings.window.height as f32 / 2.0,
            icon_size.x,
            icon_size.y,
        ),
        control: PlayerControlled,
        tracked: CameraTarget,
    });

    let follow = FollowCamera::new(pixel_bounds(&map));

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        let input = DirectionInput::poll(&bindings);
        apply_movement(&mut world, &input, settings.controls.step);

        clear_background(BLACK);
        let view = vec2(screen_width(), screen_height());
        set_camera(&follow.camera(&world, view));
        draw_world(&world, &textures);

        set_default_camera();
        draw_text("arrow keys move the character", 16.0, 24.0, 20.0, LIGHTGRAY);

        next_frame().await;
    }
}
