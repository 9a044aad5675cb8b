use hecs::World;
use serde::Serialize;

use crate::geometry::Aabb;
use crate::{Ball, Opponent, Paddle, Params, Player, Rgb, Score};

/// A coloured rectangle to draw
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sprite {
    pub rect: Aabb,
    pub color: Rgb,
}

/// Read-only view of a match for the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub background_color: Rgb,
    pub player: Sprite,
    pub opponent: Sprite,
    pub ball: Sprite,
    pub midline: Vec<Aabb>,
    pub midline_color: Rgb,
    pub player_score: u32,
    pub opponent_score: u32,
    pub score_color: Rgb,
}

/// Collect everything a frame needs to be drawn
///
/// Returns `None` unless the world holds a player paddle, an opponent paddle
/// and a ball.
pub fn take_snapshot(world: &World, score: &Score, midline: &[Aabb]) -> Option<Snapshot> {
    let player = world
        .query::<(&Paddle, &Player)>()
        .iter()
        .next()
        .map(|(_e, (paddle, _))| paddle.rect())?;
    let opponent = world
        .query::<(&Paddle, &Opponent)>()
        .iter()
        .next()
        .map(|(_e, (paddle, _))| paddle.rect())?;
    let ball = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| ball.rect())?;

    Some(Snapshot {
        background_color: Params::BACKGROUND_COLOR,
        player: Sprite {
            rect: player,
            color: Params::PLAYER_COLOR,
        },
        opponent: Sprite {
            rect: opponent,
            color: Params::OPPONENT_COLOR,
        },
        ball: Sprite {
            rect: ball,
            color: Params::BALL_COLOR,
        },
        midline: midline.to_vec(),
        midline_color: Params::MIDLINE_COLOR,
        player_score: score.player,
        opponent_score: score.opponent,
        score_color: Params::SCORE_COLOR,
    })
}
