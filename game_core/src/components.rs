use glam::Vec2;
use rand::Rng;
use serde::Serialize;

use crate::config::Config;
use crate::geometry::Aabb;
use crate::params::Params;
use crate::resources::GameRng;

/// Which end of the arena an entity belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Side {
    /// Human-controlled, left edge
    Player,
    /// Computer-controlled, right edge
    Opponent,
}

impl Side {
    /// Horizontal sign of travel toward this side
    pub fn direction(self) -> f32 {
        match self {
            Side::Player => -1.0,
            Side::Opponent => 1.0,
        }
    }
}

/// Display colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Paddle component - shared state of both paddles
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub x: f32, // left edge, fixed
    pub y: f32, // top edge, clamped to arena
    pub width: f32,
    pub height: f32,
    pub speed: f32,
}

impl Paddle {
    /// Paddle at its side's fixed x, centred vertically
    pub fn spawn(side: Side, config: &Config) -> Self {
        Self {
            side,
            x: config.paddle_x(side),
            y: config.paddle_spawn_y(),
            width: config.paddle_width,
            height: config.paddle_height,
            speed: config.paddle_speed,
        }
    }

    pub fn rect(&self) -> Aabb {
        Aabb::from_top_left(Vec2::new(self.x, self.y), Vec2::new(self.width, self.height))
    }

    /// Move vertically by `dy`, then clamp to the arena
    pub fn shift(&mut self, dy: f32, config: &Config) {
        self.y = config.clamp_paddle_y(self.y + dy);
    }
}

/// Marker for the human-controlled paddle
#[derive(Debug, Clone, Copy, Default)]
pub struct Player;

/// Movement intent for the player paddle
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = up, 0 = stop, 1 = down
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Aiming state of the computer-controlled paddle
#[derive(Debug, Clone, Copy)]
pub struct Opponent {
    /// Ball arrival y at the paddle face. `None` once the ball has been
    /// returned, until the player hits it again.
    pub predicted_y: Option<f32>,
    /// Distance from the paddle top where the opponent tries to meet the ball
    pub hit_offset: i32,
}

impl Opponent {
    /// Start out holding the centre of the arena
    pub fn new(config: &Config) -> Self {
        Self {
            predicted_y: Some(config.paddle_spawn_y()),
            hit_offset: 0,
        }
    }

    /// Paddle top edge the opponent is steering toward
    pub fn target_y(&self) -> Option<f32> {
        self.predicted_y.map(|y| y - self.hit_offset as f32)
    }

    pub fn clear_target(&mut self) {
        self.predicted_y = None;
    }
}

/// Ball component - the pong ball
///
/// `pos` is the top-left corner of the ball's bounding box and `vel` is a
/// direction; the distance covered per second is `speed`.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub speed: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, speed: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            speed,
        }
    }

    pub fn diameter(&self) -> f32 {
        self.radius * 2.0
    }

    pub fn rect(&self) -> Aabb {
        Aabb::from_top_left(self.pos, Vec2::splat(self.diameter()))
    }

    pub fn top_right(&self) -> Vec2 {
        Vec2::new(self.pos.x + self.diameter(), self.pos.y)
    }

    /// Integrate position over `dt` and bounce off the top and bottom walls.
    ///
    /// `floor_y` is the lowest valid top edge. Returns true if the ball was
    /// clamped to a wall, in which case `vel.y` has been negated once.
    pub fn advance(&mut self, dt: f32, floor_y: f32) -> bool {
        self.pos += self.vel * self.speed * dt;

        if self.pos.y < 0.0 {
            self.pos.y = 0.0;
            self.vel.y = -self.vel.y;
            true
        } else if self.pos.y > floor_y {
            self.pos.y = floor_y;
            self.vel.y = -self.vel.y;
            true
        } else {
            false
        }
    }

    /// Serve from the middle of the arena toward `toward`
    pub fn reset(&mut self, config: &Config, toward: Side, rng: &mut GameRng) {
        let h = config.arena_height;
        let appear_y = rng.0.gen_range((h / 4.0) as i32..=(h * 3.0 / 4.0) as i32) as f32;

        self.pos.x = config.ball_spawn_x();
        self.pos.y = (appear_y - self.radius).clamp(0.0, config.ball_floor());

        let angle: f32 = rng
            .0
            .gen_range(-Params::MAX_LAUNCH_ANGLE..=Params::MAX_LAUNCH_ANGLE);
        self.vel = Vec2::new(angle.cos() * toward.direction(), -angle.sin());
    }

    /// Remap direction from where the ball struck the paddle face.
    ///
    /// `hit_position` runs from 0 (paddle top, -45°) to `paddle_height`
    /// (paddle bottom, +45°). The x component is always positive, so this is
    /// only correct for returns off the player paddle.
    pub fn change_angle(&mut self, hit_position: f32, paddle_height: f32) {
        let angle = std::f32::consts::FRAC_PI_2 * (hit_position / paddle_height)
            - std::f32::consts::FRAC_PI_4;

        self.vel.x = angle.cos();
        self.vel.y = angle.sin();

        if self.vel.y == 0.0 {
            self.vel.y = (angle + Params::ANGLE_NUDGE).sin();
        }
    }
}
