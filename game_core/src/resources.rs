/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u32,
    pub opponent: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_player(&mut self) {
        self.player += 1;
    }

    pub fn increment_opponent(&mut self) {
        self.opponent += 1;
    }
}

/// Random number generator
///
/// The only source of nondeterminism in a match: serve heights, launch
/// angles and the opponent's hit offset all draw from it.
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub player_hit: bool,
    pub opponent_hit: bool,
    pub wall_bounce: bool,
    pub player_scored: bool,
    pub opponent_scored: bool,
    pub retargeted: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Movement keys held this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerInput {
    pub up: bool,
    pub down: bool,
}

impl PlayerInput {
    pub const IDLE: Self = Self {
        up: false,
        down: false,
    };
    pub const UP: Self = Self {
        up: true,
        down: false,
    };
    pub const DOWN: Self = Self {
        up: false,
        down: true,
    };

    /// Paddle direction: -1 = up, 0 = stop, 1 = down. Down wins when both
    /// keys are held.
    pub fn dir(&self) -> i8 {
        if self.down {
            1
        } else if self.up {
            -1
        } else {
            0
        }
    }
}
