//! Live obstacle set: spawn with an overlap guard, fall, prune.

use rand::Rng;

use crate::core::assets::OBSTACLE_VARIANTS;
use crate::core::lanes::{self, HEIGHT, LANE_COUNT};
use crate::core::rect::Rect;

pub const OBSTACLE_W: i32 = 60;
pub const OBSTACLE_H: i32 = 120;
pub const OBSTACLE_SPEED: i32 = 5;
/// Per-frame spawn trigger, in percent.
pub const SPAWN_CHANCE_PERCENT: u32 = 5;

#[derive(Debug, Clone)]
pub struct Obstacle {
    pub rect: Rect,
    pub lane: usize,
    pub sprite: usize,
}

/// Overlap is guarded at spawn time only; live obstacles all fall at
/// the same speed.
#[derive(Debug, Default)]
pub struct Obstacles {
    live: Vec<Obstacle>,
}

impl Obstacles {
    pub fn new() -> Self {
        Self { live: Vec::new() }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.live.iter()
    }

    pub fn as_slice(&self) -> &[Obstacle] {
        &self.live
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Rolls the per-frame spawn trigger. On trigger, places a new
    /// obstacle at the top of a uniformly random lane with a uniformly
    /// random sprite; the frame's spawn is silently skipped when the
    /// candidate would overlap a live obstacle.
    pub fn try_spawn<R: Rng>(&mut self, rng: &mut R) -> Option<&Obstacle> {
        if rng.random_range(0..100) >= SPAWN_CHANCE_PERCENT {
            return None;
        }
        let lane = rng.random_range(0..LANE_COUNT);
        let sprite = rng.random_range(0..OBSTACLE_VARIANTS);
        self.place(lane, sprite)
    }

    /// Spawn-time overlap guard: the candidate starts just above the
    /// play area and is dropped when it intersects any live obstacle.
    pub(crate) fn place(&mut self, lane: usize, sprite: usize) -> Option<&Obstacle> {
        let candidate = Rect::new(
            lanes::lane_x(lane, OBSTACLE_W),
            -OBSTACLE_H,
            OBSTACLE_W,
            OBSTACLE_H,
        );
        if self.live.iter().any(|o| o.rect.intersects(&candidate)) {
            return None;
        }
        self.live.push(Obstacle {
            rect: candidate,
            lane,
            sprite,
        });
        self.live.last()
    }

    /// Everything falls one step.
    pub fn advance(&mut self) {
        for obstacle in &mut self.live {
            obstacle.rect.y += OBSTACLE_SPEED;
        }
    }

    /// Drops obstacles whose top edge has passed the bottom of the play
    /// area.
    pub fn prune(&mut self) {
        self.live.retain(|o| o.rect.y <= HEIGHT);
    }
}
