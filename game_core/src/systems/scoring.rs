use crate::{Ball, Config, Events, GameRng, Score, Side};
use hecs::World;

/// Check if ball left the arena (scoring)
///
/// A ball leaving past the left edge scores for the player and is served
/// again. A ball leaving past the right edge scores for the opponent and
/// stays in flight unless `serve_after_opponent_point` is set, so it keeps
/// scoring on every update until something moves it back.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.x <= 0.0 {
            score.increment_player();
            events.player_scored = true;
            tracing::info!(player = score.player, opponent = score.opponent, "player scored");

            serve(ball, config, rng);
        } else if ball.pos.x + ball.diameter() >= config.arena_width {
            score.increment_opponent();
            events.opponent_scored = true;
            tracing::info!(player = score.player, opponent = score.opponent, "opponent scored");

            if config.serve_after_opponent_point {
                serve(ball, config, rng);
            }
        }
    }
}

fn serve(ball: &mut Ball, config: &Config, rng: &mut GameRng) {
    ball.reset(config, Side::Player, rng);
    tracing::debug!(
        x = ball.pos.x,
        y = ball.pos.y,
        vx = ball.vel.x,
        vy = ball.vel.y,
        "ball served"
    );
}
