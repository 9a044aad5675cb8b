use crate::components::Rgb;

/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: f32 = 640.0;
    pub const ARENA_HEIGHT: f32 = 480.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 500.0; // units per second
    pub const PADDLE_MARGIN: f32 = 20.0; // gap between arena edge and paddle

    // Ball
    pub const BALL_RADIUS: f32 = 12.0;
    pub const BALL_SPEED: f32 = 600.0; // units per second
    pub const MAX_LAUNCH_ANGLE: f32 = std::f32::consts::FRAC_PI_4;
    pub const ANGLE_NUDGE: f32 = 0.02; // radians, keeps paddle returns off the horizontal

    // Opponent
    pub const HIT_OFFSET_MARGIN: i32 = 10; // keep the aim point this far inside the paddle

    // Mid-line decoration
    pub const MIDLINE_WIDTH: f32 = 5.0;
    pub const MIDLINE_SEGMENTS: usize = 15;

    // Frame pacing
    pub const FRAME_RATE: u32 = 60;

    // Palette
    pub const BACKGROUND_COLOR: Rgb = Rgb::new(16, 50, 56);
    pub const PLAYER_COLOR: Rgb = Rgb::new(57, 127, 219);
    pub const OPPONENT_COLOR: Rgb = Rgb::new(193, 52, 27);
    pub const BALL_COLOR: Rgb = Rgb::new(81, 114, 16);
    pub const MIDLINE_COLOR: Rgb = Rgb::new(175, 158, 22);
    pub const SCORE_COLOR: Rgb = Rgb::new(224, 109, 33);
}
