//! Autopilot: pick the nearest safe lane, preferring to stay put.

use crate::core::lanes::LANE_COUNT;
use crate::game::obstacles::Obstacle;
use crate::game::state::CART_Y;

/// Vertical band ahead of the cart within which an obstacle marks its
/// lane unsafe. Tuning values carried over from the original game.
pub const DANGER_ABOVE: i32 = 150;
pub const DANGER_BELOW: i32 = 50;

/// Lane the cart should occupy this frame.
///
/// A lane is unsafe while any obstacle in it sits inside the danger
/// window. A safe current lane is kept. Otherwise the closest safe lane
/// wins, lower index on ties. With every lane blocked there is no
/// evasion left and the current lane is returned.
pub fn choose_lane(current_lane: usize, obstacles: &[Obstacle]) -> usize {
    let mut safe = [true; LANE_COUNT];
    for obstacle in obstacles {
        let y = obstacle.rect.y;
        if CART_Y - DANGER_ABOVE < y && y < CART_Y + DANGER_BELOW {
            safe[obstacle.lane] = false;
        }
    }

    if safe[current_lane] {
        return current_lane;
    }

    (0..LANE_COUNT)
        .filter(|&lane| safe[lane])
        .min_by_key(|&lane| lane.abs_diff(current_lane))
        .unwrap_or(current_lane)
}
