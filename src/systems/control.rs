//! Keyboard movement for player-controlled entities

use hecs::World;

use crate::components::{PlayerControlled, Space};
use crate::input::DirectionInput;

/// Move every [`PlayerControlled`] entity by `step` pixels per held
/// direction. The delta is per frame, not time-scaled: holding a key
/// moves the entity a fixed number of pixels each update.
pub fn apply_movement(world: &mut World, input: &DirectionInput, step: f32) {
    for (_entity, space) in world.query_mut::<&mut Space>().with::<&PlayerControlled>() {
        space.position.x += input.axis_x() * step;
        space.position.y += input.axis_y() * step;
    }
}
