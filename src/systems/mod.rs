//! Per-frame systems over the hecs world
//!
//! Free functions and small camera state structs, run once per frame by
//! the demos: movement from direction input, camera tracking/scrolling,
//! z-sorted draw submission.

pub mod camera;
pub mod control;
pub mod render;

pub use camera::{FollowCamera, KeyScroller};
pub use control::apply_movement;
pub use render::draw_world;
