use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::components::Side;
use crate::geometry::Aabb;
use crate::params::Params;

/// Game configuration
///
/// Built once at startup and shared by reference with every system. Missing
/// fields in a serialized config fall back to [`Params`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub ball_radius: f32,
    pub ball_speed: f32,
    pub paddle_margin: f32,
    /// Serve a new ball after the opponent scores as well. Off by default:
    /// an opponent point leaves the ball travelling out of the arena.
    pub serve_after_opponent_point: bool,
}

/// Reasons a [`Config`] cannot drive a match
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be a positive finite number, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("paddle_margin must be a non-negative finite number, got {0}")]
    InvalidMargin(f32),

    #[error("paddle height {paddle} does not fit in arena height {arena}")]
    PaddleTooTall { paddle: f32, arena: f32 },

    #[error("paddle height {0} leaves no room for the opponent hit offset (minimum {1})")]
    PaddleTooShort(f32, i32),

    #[error("ball diameter {diameter} does not fit in arena height {arena}")]
    BallTooLarge { diameter: f32, arena: f32 },

    #[error("paddles overlap: two margins plus two paddle widths exceed arena width {0}")]
    PaddlesOverlap(f32),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            ball_radius: Params::BALL_RADIUS,
            ball_speed: Params::BALL_SPEED,
            paddle_margin: Params::PADDLE_MARGIN,
            serve_after_opponent_point: false,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that the configuration describes a playable arena
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_radius", self.ball_radius),
            ("ball_speed", self.ball_speed),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        if !self.paddle_margin.is_finite() || self.paddle_margin < 0.0 {
            return Err(ConfigError::InvalidMargin(self.paddle_margin));
        }

        if self.paddle_height > self.arena_height {
            return Err(ConfigError::PaddleTooTall {
                paddle: self.paddle_height,
                arena: self.arena_height,
            });
        }

        let min_height = Params::HIT_OFFSET_MARGIN * 2;
        if (self.paddle_height as i32) < min_height {
            return Err(ConfigError::PaddleTooShort(self.paddle_height, min_height));
        }

        // A ball as tall as the arena has no room to bounce
        if self.ball_radius * 2.0 >= self.arena_height {
            return Err(ConfigError::BallTooLarge {
                diameter: self.ball_radius * 2.0,
                arena: self.arena_height,
            });
        }

        if 2.0 * (self.paddle_margin + self.paddle_width) > self.arena_width {
            return Err(ConfigError::PaddlesOverlap(self.arena_width));
        }

        Ok(())
    }

    /// Get the fixed left edge of a paddle
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Player => self.paddle_margin,
            Side::Opponent => self.arena_width - self.paddle_margin - self.paddle_width,
        }
    }

    /// Top edge of a vertically centred paddle
    pub fn paddle_spawn_y(&self) -> f32 {
        (self.arena_height - self.paddle_height) / 2.0
    }

    /// Clamp paddle top edge to arena bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.arena_height - self.paddle_height)
    }

    /// Lowest valid top edge for the ball
    pub fn ball_floor(&self) -> f32 {
        self.arena_height - self.ball_radius * 2.0
    }

    /// Left edge of a ball centred horizontally
    pub fn ball_spawn_x(&self) -> f32 {
        self.arena_width / 2.0 - self.ball_radius
    }

    /// Dashed centre line segments
    pub fn midline(&self) -> Vec<Aabb> {
        let segments = Params::MIDLINE_SEGMENTS;
        let height = self.arena_height / segments as f32 / 2.0;
        let x = (self.arena_width - Params::MIDLINE_WIDTH) / 2.0;

        (0..segments)
            .map(|i| {
                let y = i as f32 * height * 2.0 + height / 2.0;
                Aabb::from_top_left(Vec2::new(x, y), Vec2::new(Params::MIDLINE_WIDTH, height))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(Config::new().validate(), Ok(()));
    }

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(Side::Player), 20.0, "Player paddle X position");
        assert_eq!(config.paddle_x(Side::Opponent), 600.0, "Opponent paddle X position");
    }

    #[test]
    fn test_config_clamp_paddle_y() {
        let config = Config::new();
        assert_eq!(config.clamp_paddle_y(-50.0), 0.0);
        assert_eq!(
            config.clamp_paddle_y(1000.0),
            config.arena_height - config.paddle_height
        );
        let valid_y = 120.0;
        assert_eq!(config.clamp_paddle_y(valid_y), valid_y);
    }

    #[test]
    fn test_spawn_positions() {
        let config = Config::new();
        assert_eq!(config.paddle_spawn_y(), 190.0);
        assert_eq!(config.ball_spawn_x(), 308.0);
        assert_eq!(config.ball_floor(), 456.0);
    }

    #[test]
    fn test_midline_segments() {
        let config = Config::new();
        let midline = config.midline();
        assert_eq!(midline.len(), Params::MIDLINE_SEGMENTS);

        // 480 / 15 / 2 = 16 units per dash, one dash every 32 units
        let first = midline[0];
        assert_eq!(first.min, Vec2::new(317.5, 8.0));
        assert_eq!(first.height(), 16.0);
        assert_eq!(first.width(), Params::MIDLINE_WIDTH);
        assert_eq!(midline[1].min.y, 40.0);

        for dash in &midline {
            assert!(dash.min.y >= 0.0 && dash.max.y <= config.arena_height);
        }
    }

    #[test]
    fn test_rejects_non_positive_values() {
        let config = Config {
            ball_speed: 0.0,
            ..Config::new()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NotPositive {
                field: "ball_speed",
                value: 0.0
            })
        );

        let config = Config {
            arena_width: f32::NAN,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive {
                field: "arena_width",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_bad_margin() {
        let config = Config {
            paddle_margin: -1.0,
            ..Config::new()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidMargin(-1.0)));
    }

    #[test]
    fn test_rejects_paddle_taller_than_arena() {
        let config = Config {
            paddle_height: 500.0,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PaddleTooTall { .. })
        ));
    }

    #[test]
    fn test_rejects_paddle_too_short_for_hit_offset() {
        let config = Config {
            paddle_height: 19.0,
            ..Config::new()
        };
        assert_eq!(config.validate(), Err(ConfigError::PaddleTooShort(19.0, 20)));

        let config = Config {
            paddle_height: 20.0,
            ..Config::new()
        };
        assert_eq!(config.validate(), Ok(()), "Exactly two margins is enough");
    }

    #[test]
    fn test_rejects_oversized_ball() {
        let config = Config {
            ball_radius: 300.0,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BallTooLarge { .. })
        ));
    }

    #[test]
    fn test_rejects_overlapping_paddles() {
        let config = Config {
            arena_width: 70.0,
            ..Config::new()
        };
        assert_eq!(config.validate(), Err(ConfigError::PaddlesOverlap(70.0)));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "arena_width": 800.0, "ball_speed": 450.0 }"#).unwrap();
        assert_eq!(config.arena_width, 800.0);
        assert_eq!(config.ball_speed, 450.0);
        assert_eq!(config.arena_height, Params::ARENA_HEIGHT);
        assert_eq!(config.paddle_height, Params::PADDLE_HEIGHT);
        assert!(!config.serve_after_opponent_point);
    }

    #[test]
    fn test_error_messages() {
        let err = ConfigError::PaddleTooShort(12.0, 20);
        assert_eq!(
            err.to_string(),
            "paddle height 12 leaves no room for the opponent hit offset (minimum 20)"
        );
    }
}
