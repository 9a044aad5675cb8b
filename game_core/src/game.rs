use hecs::{Entity, World};

use crate::geometry::Aabb;
use crate::snapshot::{take_snapshot, Snapshot};
use crate::{
    create_opponent, create_player, serve_ball, step, Ball, Config, ConfigError, Events, GameRng,
    Opponent, Paddle, PlayerInput, Score, Time,
};

/// One player-versus-computer match
///
/// Owns the world and every resource the simulation needs. Drive it with one
/// [`Match::update`] per rendered frame.
pub struct Match {
    pub world: World,
    pub time: Time,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub rng: GameRng,
    pub midline: Vec<Aabb>,
    pub player: Entity,
    pub opponent: Entity,
    pub ball: Entity,
}

impl Match {
    /// Set up paddles at the vertical centre and serve the first ball
    pub fn new(config: Config, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        let player = create_player(&mut world, &config);
        let opponent = create_opponent(&mut world, &config);
        let ball = serve_ball(&mut world, &config, &mut rng);
        let midline = config.midline();

        tracing::debug!(seed, ?config, "match created");

        Ok(Self {
            world,
            time: Time::default(),
            config,
            score: Score::new(),
            events: Events::new(),
            rng,
            midline,
            player,
            opponent,
            ball,
        })
    }

    /// Advance the match by `dt` seconds with the given keys held
    pub fn update(&mut self, dt: f32, input: PlayerInput) -> &Events {
        self.time.dt = dt;
        step(
            &mut self.world,
            &mut self.time,
            &self.config,
            &input,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
        );
        &self.events
    }

    /// Current frame, or `None` if one of the match entities was despawned
    pub fn snapshot(&self) -> Option<Snapshot> {
        take_snapshot(&self.world, &self.score, &self.midline)
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world.get::<&Ball>(self.ball).ok().map(|ball| *ball)
    }

    pub fn player_paddle(&self) -> Option<Paddle> {
        self.world.get::<&Paddle>(self.player).ok().map(|paddle| *paddle)
    }

    pub fn opponent_paddle(&self) -> Option<Paddle> {
        self.world.get::<&Paddle>(self.opponent).ok().map(|paddle| *paddle)
    }

    pub fn opponent_aim(&self) -> Option<Opponent> {
        self.world.get::<&Opponent>(self.opponent).ok().map(|aim| *aim)
    }
}
