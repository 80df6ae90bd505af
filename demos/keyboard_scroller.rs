//! Keyboard scrolling demo
//!
//! An 800x800 checkerboard world with no player entity; arrows or WASD
//! pan the camera itself at a fixed speed in pixels per second. The pan
//! is unbounded, scroll far enough and the field recedes into the void.
//!
//! Run with: `cargo run --bin keyboard_scroller`

use hecs::World;
use macroquad::prelude::*;

use tilescroll::{
    draw_world, DirectionInput, KeyScroller, Render, Settings, Space, TextureStore, Tile, VERSION,
};

const WORLD_SIZE: f32 = 800.0;
const CELL: f32 = 40.0;

fn demo_settings() -> Settings {
    let mut fallback = Settings::default();
    fallback.window.title = "Keyboard Scroller".to_string();
    fallback.window.width = 800;
    fallback.window.height = 800;
    Settings::load_or("keyboard_scroller.ron", fallback)
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
        "keyboard scroller demo (tilescroll v{}): {}x{} window, {} px/s scroll",
        VERSION,
        settings.window.width,
        settings.window.height,
        settings.controls.scroll_speed
    );

    let bindings = settings.controls.bindings.resolve();
    let textures = TextureStore::new();

    let mut world = World::new();
    spawn_checkerboard(
        &mut world,
        WORLD_SIZE,
        CELL,
        [
            Color::from_rgba(88, 129, 87, 255),
            Color::from_rgba(58, 90, 64, 255),
        ],
    );

    let mut scroller = KeyScroller::new(
        vec2(WORLD_SIZE / 2.0, WORLD_SIZE / 2.0),
        settings.controls.scroll_speed,
    );

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        let input = DirectionInput::poll(&bindings);
        scroller.update(&input, get_frame_time());

        clear_background(BLACK);
        let view = vec2(screen_width(), screen_height());
        set_camera(&scroller.camera(view));
        draw_world(&world, &textures);

        set_default_camera();
        draw_text("arrows or WASD scroll the camera", 16.0, 24.0, 20.0, LIGHTGRAY);

        next_frame().await;
    }
}
