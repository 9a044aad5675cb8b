pub mod ai;
pub mod components;
pub mod config;
pub mod game;
pub mod geometry;
pub mod params;
pub mod resources;
pub mod snapshot;
pub mod systems;

pub use components::*;
pub use config::*;
pub use game::*;
pub use geometry::*;
pub use params::*;
pub use resources::*;
pub use snapshot::*;

use hecs::World;
use systems::*;

/// Run one deterministic Pong simulation tick
///
/// Every motion is scaled by `time.dt`, so a zero step moves nothing.
/// Negative steps are treated as zero.
pub fn step(
    world: &mut World,
    time: &mut Time,
    config: &Config,
    input: &PlayerInput,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    let dt = time.dt.max(0.0);
    let step_time = Time::new(dt, time.now);

    // Clear events at start of tick
    events.clear();

    // 1. Ingest input (apply to player intent)
    ingest_input(world, input);

    // 2. Move paddles, then the ball
    move_player(world, &step_time, config);
    move_opponent(world, &step_time, config);
    move_ball(world, &step_time, config, events);

    // 3. Check collisions (ball vs paddles)
    check_collisions(world, config, events, rng);

    // 4. Check scoring (ball exited arena)
    check_scoring(world, config, score, events, rng);

    // Update time
    time.now += dt;
}

/// Helper to create the human-controlled paddle
pub fn create_player(world: &mut World, config: &Config) -> hecs::Entity {
    world.spawn((
        Paddle::spawn(Side::Player, config),
        Player,
        PaddleIntent::new(),
    ))
}

/// Helper to create the computer-controlled paddle
pub fn create_opponent(world: &mut World, config: &Config) -> hecs::Entity {
    world.spawn((Paddle::spawn(Side::Opponent, config), Opponent::new(config)))
}

/// Helper to create the ball entity
pub fn create_ball(
    world: &mut World,
    config: &Config,
    pos: glam::Vec2,
    vel: glam::Vec2,
) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, config.ball_radius, config.ball_speed),))
}

/// Helper to create a ball already served toward the player
pub fn serve_ball(world: &mut World, config: &Config, rng: &mut GameRng) -> hecs::Entity {
    let mut ball = Ball::new(
        glam::Vec2::ZERO,
        glam::Vec2::ZERO,
        config.ball_radius,
        config.ball_speed,
    );
    ball.reset(config, Side::Player, rng);
    world.spawn((ball,))
}
