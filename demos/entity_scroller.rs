//! Entity scrolling demo
//!
//! The follow-camera arrangement over a plain rectangle field instead of
//! a tile map: an icon character moves with arrows or WASD, the camera
//! keeps it centered and never leaves the 800x800 world rectangle. The
//! window shows a 500x500 cut of the world, leaving the camera a 300 px
//! band of travel per axis.
//!
//! Run with: `cargo run --bin entity_scroller`

use hecs::World;
use macroquad::prelude::*;

use tilescroll::{
    apply_movement, draw_world, CameraTarget, Character, DirectionInput, FollowCamera,
    PlayerControlled, Render, Settings, Space, TextureStore, Tile, VERSION,
};

const WORLD_SIZE: f32 = 800.0;
const CELL: f32 = 40.0;

fn demo_settings() -> Settings {
    // The 500x500 default window stays: the world must outsize the view
    // or the clamped follow camera has nowhere to travel.
    let mut fallback = Settings::default();
    fallback.window.title = "Entity Scroller".to_string();
    Settings::load_or("entity_scroller.ron", fallback)
}

fn window_conf() -> Conf {
    demo_settings().window.conf()
}

/// Two-color checkerboard covering the world, so camera motion is
/// visible against the background.
fn spawn_checkerboard(world: &mut World, size: f32, cell: f32, colors: [Color; 2]) {
    let cells = (size / cell) as i32;
    for row in 0..cells {
        for col in 0..cells {
            world.spawn(Tile {
                render: Render::rect(colors[((row + col) % 2) as usize]),
                space: Space::new(col as f32 * cell, row as f32 * cell, cell, cell),
            });
        }
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let _ = env_logger::try_init();
    let settings = demo_settings();
    log::info!(
        "entity scroller demo (tilescroll v{}): {}x{} window, step {} px per frame",
        VERSION,
        settings.window.width,
        settings.window.height,
        settings.controls.step
    );

    set_pc_assets_folder(&settings.assets.root);
    let bindings = settings.controls.bindings.resolve();

    let mut textures = TextureStore::new();
    if let Err(e) = textures.load("icon", "icon.png").await {
        log::warn!("{}", e);
    }

    let mut world = World::new();
    spawn_checkerboard(
        &mut world,
        WORLD_SIZE,
        CELL,
        [
            Color::from_rgba(90, 105, 136, 255),
            Color::from_rgba(62, 76, 106, 255),
        ],
    );

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
            WORLD_SIZE / 2.0,
            WORLD_SIZE / 2.0,
            icon_size.x,
            icon_size.y,
        ),
        control: PlayerControlled,
        tracked: CameraTarget,
    });

    let follow = FollowCamera::new(Rect::new(0.0, 0.0, WORLD_SIZE, WORLD_SIZE));

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
        draw_text("arrows or WASD move the character", 16.0, 24.0, 20.0, LIGHTGRAY);

        next_frame().await;
    }
}
