//! Camera tracking and scrolling
//!
//! Two ways to steer a macroquad `Camera2D` over the pixel world:
//! [`FollowCamera`] keeps a tracked entity centered without ever showing
//! the void outside the world bounds, [`KeyScroller`] pans freely at a
//! fixed speed while direction keys are held.

use hecs::World;
use macroquad::prelude::{Camera2D, Rect, Vec2};

use crate::components::{CameraTarget, Space};
use crate::input::DirectionInput;

/// A `Camera2D` showing `view.x` by `view.y` world pixels around `center`,
/// y pointing down the screen like everything else in this crate.
pub fn pixel_camera(center: Vec2, view: Vec2) -> Camera2D {
    Camera2D {
        target: center,
        // Negative y zoom flips macroquad's y-up clip space to y-down pixels.
        zoom: Vec2::new(2.0 / view.x, -2.0 / view.y),
        ..Default::default()
    }
}

/// Clamp a camera center so a viewport of `2 * half_view` stays inside
/// `bounds`. On an axis where the bounds are smaller than the viewport the
/// clamp range collapses; the camera centers on the bounds midpoint there.
pub fn clamp_center(center: Vec2, half_view: Vec2, bounds: Rect) -> Vec2 {
    let clamp_axis = |center: f32, half: f32, lo: f32, hi: f32| {
        if hi - lo <= half * 2.0 {
            (lo + hi) * 0.5
        } else {
            center.clamp(lo + half, hi - half)
        }
    };
    Vec2::new(
        clamp_axis(center.x, half_view.x, bounds.left(), bounds.right()),
        clamp_axis(center.y, half_view.y, bounds.top(), bounds.bottom()),
    )
}

/// Keeps the [`CameraTarget`] entity centered, clamped to world bounds.
#[derive(Debug, Clone, Copy)]
pub struct FollowCamera {
    /// World rectangle the view may never leave.
    pub bounds: Rect,
}

impl FollowCamera {
    pub fn new(bounds: Rect) -> Self {
        Self { bounds }
    }

    /// Center the camera would use this frame: the tracked entity's
    /// [`Space::center`] clamped to the bounds, or the bounds midpoint if
    /// nothing carries a [`CameraTarget`].
    pub fn center(&self, world: &World, view: Vec2) -> Vec2 {
        let mut query = world.query::<&Space>().with::<&CameraTarget>();
        let target = query
            .iter()
            .next()
            .map(|(_, space)| space.center())
            .unwrap_or_else(|| self.bounds.center());
        clamp_center(target, view * 0.5, self.bounds)
    }

    /// The camera for this frame, for a viewport of `view` pixels.
    pub fn camera(&self, world: &World, view: Vec2) -> Camera2D {
        pixel_camera(self.center(world, view), view)
    }
}

/// Pans the camera center while direction keys are held. Unbounded.
#[derive(Debug, Clone, Copy)]
pub struct KeyScroller {
    pub center: Vec2,
    /// Scroll speed in pixels per second.
    pub speed: f32,
}

impl KeyScroller {
    pub fn new(center: Vec2, speed: f32) -> Self {
        Self { center, speed }
    }

    /// Move the center by the held directions. `dt` is the frame time in
    /// seconds, so scrolling covers `speed` pixels per second regardless
    /// of frame rate.
    pub fn update(&mut self, input: &DirectionInput, dt: f32) {
        self.center.x += input.axis_x() * self.speed * dt;
        self.center.y += input.axis_y() * self.speed * dt;
    }

    /// The camera for this frame, for a viewport of `view` pixels.
    pub fn camera(&self, view: Vec2) -> Camera2D {
        pixel_camera(self.center, view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Character, PlayerControlled, Render};

    const BOUNDS: Rect = Rect {
        x: 0.0,
        y: 0.0,
        w: 512.0,
        h: 512.0,
    };

    #[test]
    fn test_clamp_center_inside_bounds_is_identity() {
        // Valid band per axis is [200, 312] for a 400 px view in 512 px
        // bounds; a center inside it passes through untouched.
        let center = Vec2::new(256.0, 300.0);
        assert_eq!(clamp_center(center, Vec2::new(200.0, 200.0), BOUNDS), center);
    }

    #[test]
    fn test_clamp_center_stops_at_edges() {
        let half = Vec2::new(250.0, 250.0);
        // Pushing far past the top-left corner pins the view at the corner.
        let clamped = clamp_center(Vec2::new(-1000.0, -1000.0), half, BOUNDS);
        assert_eq!(clamped, Vec2::new(250.0, 250.0));
        // Same on the far side.
        let clamped = clamp_center(Vec2::new(1000.0, 1000.0), half, BOUNDS);
        assert_eq!(clamped, Vec2::new(262.0, 262.0));
    }

    #[test]
    fn test_clamp_center_collapses_to_midpoint_when_bounds_fit_in_view() {
        // 512 px world, 600 px viewport: no valid clamp range, center on
        // the world midpoint on both axes.
        let clamped = clamp_center(Vec2::new(0.0, 512.0), Vec2::new(300.0, 300.0), BOUNDS);
        assert_eq!(clamped, Vec2::new(256.0, 256.0));
    }

    #[test]
    fn test_clamp_center_mixed_axes() {
        // Narrow, tall world: x collapses to midpoint, y clamps normally.
        let bounds = Rect::new(0.0, 0.0, 100.0, 1000.0);
        let clamped = clamp_center(Vec2::new(90.0, 950.0), Vec2::new(200.0, 200.0), bounds);
        assert_eq!(clamped, Vec2::new(50.0, 800.0));
    }

    #[test]
    fn test_follow_camera_tracks_target_center() {
        let mut world = World::new();
        world.spawn(Character {
            render: Render::sprite("icon"),
            space: Space::new(200.0, 220.0, 20.0, 20.0),
            control: PlayerControlled,
            tracked: CameraTarget,
        });

        let follow = FollowCamera::new(BOUNDS);
        let view = Vec2::new(100.0, 100.0);
        assert_eq!(follow.center(&world, view), Vec2::new(210.0, 230.0));

        let camera = follow.camera(&world, view);
        assert_eq!(camera.target, Vec2::new(210.0, 230.0));
        assert_eq!(camera.zoom, Vec2::new(0.02, -0.02));
    }

    #[test]
    fn test_follow_camera_clamps_target_near_edge() {
        let mut world = World::new();
        world.spawn(Character {
            render: Render::sprite("icon"),
            space: Space::new(2.0, 2.0, 10.0, 10.0),
            control: PlayerControlled,
            tracked: CameraTarget,
        });

        let follow = FollowCamera::new(BOUNDS);
        assert_eq!(
            follow.center(&world, Vec2::new(200.0, 200.0)),
            Vec2::new(100.0, 100.0)
        );
    }

    #[test]
    fn test_follow_camera_travels_when_bounds_exceed_view() {
        // The scroller demos pair a 500 px view with an 800 px world, so
        // the camera has a [250, 550] band to travel per axis. A world no
        // bigger than the view would pin the camera on the midpoint and
        // tracking would never be visible.
        let bounds = Rect::new(0.0, 0.0, 800.0, 800.0);
        let view = Vec2::new(500.0, 500.0);
        let mut world = World::new();
        let player = world.spawn(Character {
            render: Render::sprite("icon"),
            space: Space::new(400.0, 400.0, 0.0, 0.0),
            control: PlayerControlled,
            tracked: CameraTarget,
        });

        let follow = FollowCamera::new(bounds);
        assert_eq!(follow.center(&world, view), Vec2::new(400.0, 400.0));

        // Walking toward a corner moves the camera with the player...
        world.get::<&mut Space>(player).unwrap().position = Vec2::new(300.0, 320.0);
        assert_eq!(follow.center(&world, view), Vec2::new(300.0, 320.0));

        // ...until the view edge reaches the world edge.
        world.get::<&mut Space>(player).unwrap().position = Vec2::new(0.0, 0.0);
        assert_eq!(follow.center(&world, view), Vec2::new(250.0, 250.0));
    }

    #[test]
    fn test_follow_camera_without_target_centers_on_bounds() {
        let world = World::new();
        let follow = FollowCamera::new(BOUNDS);
        assert_eq!(
            follow.center(&world, Vec2::new(100.0, 100.0)),
            Vec2::new(256.0, 256.0)
        );
    }

    #[test]
    fn test_key_scroller_scales_with_dt() {
        let mut scroller = KeyScroller::new(Vec2::new(400.0, 400.0), 700.0);
        let input = DirectionInput {
            right: true,
            up: true,
            ..Default::default()
        };
        scroller.update(&input, 0.1);
        assert_eq!(scroller.center, Vec2::new(470.0, 330.0));

        // No keys held: stays put.
        scroller.update(&DirectionInput::default(), 0.1);
        assert_eq!(scroller.center, Vec2::new(470.0, 330.0));
    }

    #[test]
    fn test_pixel_camera_is_y_down() {
        let camera = pixel_camera(Vec2::new(250.0, 250.0), Vec2::new(500.0, 500.0));
        assert!(camera.zoom.y < 0.0);
        assert_eq!(camera.zoom.x, 2.0 / 500.0);
    }
}
