//! Opponent aiming
//!
//! The opponent does not track the ball continuously. When the player
//! returns the ball it unfolds the straight-line path across wall bounces
//! once, picks a random spot on its own face to meet the ball with, and
//! steers there until the rally turns around.

use glam::Vec2;
use rand::Rng;

use crate::{Ball, GameRng, Opponent, Paddle, Params};

/// Y at which a ball travelling from `origin` along `vel` crosses `target_x`.
///
/// `origin` and the result are top edges of the ball's box, so the walls sit
/// at `0` and `floor_y`. The path is reflected off each wall it meets before
/// reaching `target_x`; paddles in between are ignored.
///
/// # Panics
///
/// Panics if `vel.x` is zero, since such a ball never arrives.
pub fn predict_arrival_y(origin: Vec2, vel: Vec2, target_x: f32, floor_y: f32) -> f32 {
    assert!(
        vel.x != 0.0,
        "cannot predict arrival of a ball with no horizontal velocity ({vel})"
    );

    let (mut cx, mut cy) = (origin.x, origin.y);
    let (vx, mut vy) = (vel.x, vel.y);

    // Horizontal flight never meets a wall
    if vy != 0.0 {
        loop {
            let wall_y = if vy < 0.0 { 0.0 } else { floor_y };
            let collision_x = cx + vx * (wall_y - cy) / vy;

            cx = collision_x;
            cy = wall_y;
            vy = -vy;

            if (target_x - collision_x) * vx <= 0.0 {
                break;
            }
        }
    }

    cy - vy * (target_x - cx) / vx
}

/// Recompute where the opponent should meet the ball.
///
/// Called once per player return; draws a fresh hit offset each time.
pub fn retarget(
    opponent: &mut Opponent,
    paddle: &Paddle,
    ball: &Ball,
    floor_y: f32,
    rng: &mut GameRng,
) {
    let predicted_y = predict_arrival_y(ball.top_right(), ball.vel, paddle.x, floor_y);

    let margin = Params::HIT_OFFSET_MARGIN;
    opponent.hit_offset = rng.0.gen_range(margin..=paddle.height as i32 - margin);
    opponent.predicted_y = Some(predicted_y);

    tracing::debug!(
        predicted_y,
        hit_offset = opponent.hit_offset,
        "opponent retargeted"
    );
}
