use crate::{Ball, Config, Events, Opponent, Paddle, PaddleIntent, Time};
use hecs::World;

/// Apply player paddle movement based on intents
pub fn move_player(world: &mut World, time: &Time, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        if intent.dir != 0 {
            let delta = intent.dir as f32 * paddle.speed * time.dt;
            paddle.shift(delta, config);
        }
    }
}

/// Step the opponent paddle toward its current target
///
/// Both directions are checked against the paddle position at the start of
/// the tick, so at most one of them fires. Without a target the paddle
/// holds still.
pub fn move_opponent(world: &mut World, time: &Time, config: &Config) {
    for (_entity, (paddle, opponent)) in world.query_mut::<(&mut Paddle, &Opponent)>() {
        let Some(target) = opponent.target_y() else {
            continue;
        };

        let y = paddle.y;
        let step = paddle.speed * time.dt;
        if target < y {
            paddle.shift(-step, config);
        }
        if target > y {
            paddle.shift(step, config);
        }
    }
}

/// Move ball based on velocity, bouncing off top and bottom walls
pub fn move_ball(world: &mut World, time: &Time, config: &Config, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.advance(time.dt, config.ball_floor()) {
            events.wall_bounce = true;
            tracing::trace!(x = ball.pos.x, y = ball.pos.y, "ball bounced off wall");
        }
    }
}
