use crate::ai::retarget;
use crate::{Ball, Config, Events, GameRng, Opponent, Paddle, Player};
use hecs::World;

/// Check ball collisions with both paddles
///
/// A paddle only catches a ball travelling toward it, so a ball still
/// overlapping a paddle after being returned is not hit twice.
pub fn check_collisions(
    world: &mut World,
    config: &Config,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // First, collect ball and paddle data without holding borrows
    let ball_data = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(entity, ball)| (entity, *ball));

    let (ball_entity, mut ball) = match ball_data {
        Some(data) => data,
        None => return, // No ball in world
    };

    let player = world
        .query::<(&Paddle, &Player)>()
        .iter()
        .next()
        .map(|(_e, (paddle, _))| *paddle);

    let opponent = world
        .query::<(&Paddle, &Opponent)>()
        .iter()
        .next()
        .map(|(entity, (paddle, aim))| (entity, *paddle, *aim));

    let ball_rect = ball.rect();
    let hits_player = player.filter(|p| ball.vel.x < 0.0 && ball_rect.intersects(&p.rect()));
    let hits_opponent =
        opponent.filter(|(_, p, _)| ball.vel.x > 0.0 && ball_rect.intersects(&p.rect()));

    let new_aim = if let Some(paddle) = hits_player {
        ball.pos.x = paddle.x + paddle.width;

        // Where on the paddle face the ball landed, 0 at the top
        let hit_relative_y = (ball.pos.y - paddle.y).clamp(0.0, paddle.height);
        ball.change_angle(hit_relative_y, paddle.height);
        events.player_hit = true;

        opponent.map(|(entity, opp_paddle, mut aim)| {
            retarget(&mut aim, &opp_paddle, &ball, config.ball_floor(), rng);
            events.retargeted = true;
            (entity, aim)
        })
    } else if let Some((entity, paddle, mut aim)) = hits_opponent {
        ball.pos.x = paddle.x - ball.diameter();
        ball.vel.x = -ball.vel.x;
        aim.clear_target();
        events.opponent_hit = true;
        Some((entity, aim))
    } else {
        return;
    };

    if let Ok(mut stored) = world.get::<&mut Ball>(ball_entity) {
        *stored = ball;
    }
    if let Some((entity, aim)) = new_aim {
        if let Ok(mut stored) = world.get::<&mut Opponent>(entity) {
            *stored = aim;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_opponent, create_player, Side};
    use glam::Vec2;

    fn setup_world() -> (World, Config, Events, GameRng) {
        let world = World::new();
        let config = Config::new();
        let events = Events::new();
        let rng = GameRng::new(12345); // Fixed seed for deterministic tests
        (world, config, events, rng)
    }

    #[test]
    fn test_ball_collides_with_player_paddle() {
        let (mut world, config, mut events, mut rng) = setup_world();
        create_player(&mut world, &config);
        let opponent = create_opponent(&mut world, &config);

        // Paddle spans x 20..40, y 190..290; ball overlaps its face
        let ball = create_ball(&mut world, &config, Vec2::new(35.0, 215.0), Vec2::new(-1.0, 0.0));

        check_collisions(&mut world, &config, &mut events, &mut rng);

        let ball = *world.get::<&Ball>(ball).unwrap();
        assert_eq!(ball.pos.x, 40.0, "Ball snapped to the paddle's right edge");
        assert!(ball.vel.x > 0.0, "Ball now travels toward the opponent");

        // Hit 25 units below the paddle top: 90° * 25/100 - 45° = -22.5°
        let angle = ball.vel.y.atan2(ball.vel.x);
        assert!((angle + std::f32::consts::FRAC_PI_8).abs() < 1e-4);

        assert!(events.player_hit);
        assert!(events.retargeted);
        assert!(!events.opponent_hit);

        let aim = *world.get::<&Opponent>(opponent).unwrap();
        assert!(aim.predicted_y.is_some());
        assert!((10..=90).contains(&aim.hit_offset));
    }

    #[test]
    fn test_player_hit_offset_is_clamped() {
        let (mut world, config, mut events, mut rng) = setup_world();
        create_player(&mut world, &config);

        // Ball top is above the paddle top: clamps to 0, i.e. -45°
        let ball = create_ball(&mut world, &config, Vec2::new(30.0, 170.0), Vec2::new(-1.0, 0.0));

        check_collisions(&mut world, &config, &mut events, &mut rng);

        let ball = *world.get::<&Ball>(ball).unwrap();
        let angle = ball.vel.y.atan2(ball.vel.x);
        assert!((angle + std::f32::consts::FRAC_PI_4).abs() < 1e-4);
    }

    #[test]
    fn test_no_player_collision_when_moving_away() {
        let (mut world, config, mut events, mut rng) = setup_world();
        create_player(&mut world, &config);
        let ball = create_ball(&mut world, &config, Vec2::new(35.0, 215.0), Vec2::new(1.0, 0.0));

        check_collisions(&mut world, &config, &mut events, &mut rng);

        let ball = *world.get::<&Ball>(ball).unwrap();
        assert_eq!(ball.pos, Vec2::new(35.0, 215.0), "Ball untouched");
        assert_eq!(ball.vel, Vec2::new(1.0, 0.0));
        assert!(!events.player_hit);
    }

    #[test]
    fn test_ball_collides_with_opponent_paddle() {
        let (mut world, config, mut events, mut rng) = setup_world();
        create_player(&mut world, &config);
        let opponent = create_opponent(&mut world, &config);

        // Paddle spans x 600..620
        let ball = create_ball(&mut world, &config, Vec2::new(580.0, 200.0), Vec2::new(0.8, 0.6));

        check_collisions(&mut world, &config, &mut events, &mut rng);

        let ball = *world.get::<&Ball>(ball).unwrap();
        assert_eq!(ball.pos.x, 600.0 - 24.0, "Ball snapped to the paddle's left edge");
        assert_eq!(ball.vel, Vec2::new(-0.8, 0.6), "Plain horizontal reflection");

        assert!(events.opponent_hit);
        assert!(!events.retargeted);
        assert_eq!(world.get::<&Opponent>(opponent).unwrap().predicted_y, None);
    }

    #[test]
    fn test_no_opponent_collision_when_moving_away() {
        let (mut world, config, mut events, mut rng) = setup_world();
        let opponent = create_opponent(&mut world, &config);
        create_ball(&mut world, &config, Vec2::new(590.0, 200.0), Vec2::new(-0.8, 0.6));

        check_collisions(&mut world, &config, &mut events, &mut rng);

        assert!(!events.opponent_hit);
        assert!(world.get::<&Opponent>(opponent).unwrap().predicted_y.is_some());
    }

    #[test]
    fn test_touching_paddle_edge_is_not_a_hit() {
        let (mut world, config, mut events, mut rng) = setup_world();
        create_player(&mut world, &config);
        create_ball(
            &mut world,
            &config,
            Vec2::new(config.paddle_x(Side::Player) + config.paddle_width, 215.0),
            Vec2::new(-1.0, 0.0),
        );

        check_collisions(&mut world, &config, &mut events, &mut rng);

        assert!(!events.player_hit);
    }

    #[test]
    fn test_no_ball_is_fine() {
        let (mut world, config, mut events, mut rng) = setup_world();
        create_player(&mut world, &config);
        check_collisions(&mut world, &config, &mut events, &mut rng);
        assert_eq!(events, Events::new());
    }
}
