//! The whole mutable game world as one explicit value, threaded through
//! the engine loop by reference.

use rand::Rng;

use crate::core::lanes::{self, HEIGHT, LANE_WIDTH, WIDTH};
use crate::core::rect::Rect;
use crate::game::autopilot;
use crate::game::obstacles::{Obstacles, OBSTACLE_SPEED};

pub const CART_W: i32 = 80;
pub const CART_H: i32 = 50;
pub const CART_Y: i32 = HEIGHT - CART_H - 50;
pub const CART_SPEED: i32 = 5;
pub const START_LANE: usize = 2;

/// Lane marker stripes scroll at the obstacle speed.
pub const MARKER_LEN: i32 = 20;
pub const MARKER_GAP: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NameEntry,
    Playing,
    GameOver,
}

pub struct GameState {
    pub player_name: String,
    pub cart: Rect,
    pub obstacles: Obstacles,
    pub marker_offsets: Vec<i32>,
    pub score: u32,
    pub high_score: u32,
    pub autopilot: bool,
    pub autopilot_target: Option<usize>,
    pub phase: Phase,
}

impl GameState {
    pub fn new(high_score: u32) -> Self {
        Self {
            player_name: String::new(),
            cart: Rect::new(lanes::lane_x(START_LANE, CART_W), CART_Y, CART_W, CART_H),
            obstacles: Obstacles::new(),
            marker_offsets: (0..HEIGHT)
                .step_by((MARKER_LEN + MARKER_GAP) as usize)
                .collect(),
            score: 0,
            high_score,
            autopilot: false,
            autopilot_target: None,
            phase: Phase::NameEntry,
        }
    }

    pub fn start(&mut self) {
        self.phase = Phase::Playing;
    }

    /// Flips autopilot and reports the new setting.
    pub fn toggle_autopilot(&mut self) -> bool {
        self.autopilot = !self.autopilot;
        if !self.autopilot {
            self.autopilot_target = None;
        }
        self.autopilot
    }

    /// Manual steering, clamped to the drivable span: the outermost
    /// half-lane margins are off limits.
    pub fn steer(&mut self, dx: i32) {
        self.cart.x = (self.cart.x + dx).clamp(LANE_WIDTH, WIDTH - LANE_WIDTH - CART_W);
    }

    /// One Playing frame of simulation: autopilot, spawn, fall, prune,
    /// collision, score.
    pub fn step<R: Rng>(&mut self, rng: &mut R) {
        if self.phase != Phase::Playing {
            return;
        }

        if self.autopilot {
            let target =
                autopilot::choose_lane(lanes::lane_of(self.cart.x), self.obstacles.as_slice());
            self.cart.x = lanes::lane_x(target, CART_W);
            self.autopilot_target = Some(target);
        }

        self.obstacles.try_spawn(rng);
        self.obstacles.advance();
        self.advance_markers();
        self.obstacles.prune();

        if self.obstacles.iter().any(|o| o.rect.intersects(&self.cart)) {
            self.phase = Phase::GameOver;
            return;
        }

        self.score += 1;
    }

    fn advance_markers(&mut self) {
        for offset in &mut self.marker_offsets {
            *offset += OBSTACLE_SPEED;
            if *offset > HEIGHT {
                *offset -= HEIGHT + MARKER_LEN + MARKER_GAP;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::obstacles::OBSTACLE_H;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn playing_state() -> GameState {
        let mut state = GameState::new(0);
        state.player_name = "tester".into();
        state.start();
        state
    }

    #[test]
    fn score_advances_by_one_per_playing_frame() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut state = playing_state();
        // obstacles spawn far above the cart, so the first 50 frames
        // cannot collide
        for frame in 1..=50 {
            state.step(&mut rng);
            assert_eq!(state.phase, Phase::Playing);
            assert_eq!(state.score, frame);
        }
    }

    #[test]
    fn score_does_not_advance_outside_playing() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut state = GameState::new(0);
        state.step(&mut rng);
        assert_eq!(state.score, 0);
        assert_eq!(state.phase, Phase::NameEntry);
    }

    #[test]
    fn first_nonzero_overlap_ends_the_run_that_frame() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut state = playing_state();
        state.obstacles.place(START_LANE, 0);
        // bring the obstacle's bottom edge flush with the cart's top:
        // touching, not yet colliding
        while state.obstacles.as_slice()[0].rect.y + OBSTACLE_H < CART_Y {
            state.obstacles.advance();
        }
        assert!(!state.obstacles.as_slice()[0].rect.intersects(&state.cart));

        // the next frame advances it into the cart
        state.step(&mut rng);
        assert_eq!(state.phase, Phase::GameOver);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn a_full_run_eventually_collides_and_freezes() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut state = playing_state();
        for _ in 0..200_000 {
            state.step(&mut rng);
            if state.phase == Phase::GameOver {
                break;
            }
        }
        assert_eq!(state.phase, Phase::GameOver);
        assert!(state
            .obstacles
            .iter()
            .any(|o| o.rect.intersects(&state.cart)));

        let final_score = state.score;
        state.step(&mut rng);
        assert_eq!(state.score, final_score);
    }

    #[test]
    fn manual_steering_is_clamped_to_the_drivable_span() {
        let mut state = playing_state();
        for _ in 0..1_000 {
            state.steer(-CART_SPEED);
        }
        assert_eq!(state.cart.x, LANE_WIDTH);
        for _ in 0..1_000 {
            state.steer(CART_SPEED);
        }
        assert_eq!(state.cart.x, WIDTH - LANE_WIDTH - CART_W);
    }

    #[test]
    fn autopilot_moves_the_cart_to_the_nearest_safe_lane() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut state = playing_state();
        state.toggle_autopilot();

        // block the cart's lane inside the danger window
        state.obstacles.place(START_LANE, 0);
        while state.obstacles.as_slice()[0].rect.y < CART_Y - 100 {
            state.obstacles.advance();
        }

        state.step(&mut rng);
        // lanes 1 and 3 tie at distance one; the stable minimum picks 1
        assert_eq!(state.autopilot_target, Some(1));
        assert_eq!(state.cart.x, lanes::lane_x(1, CART_W));
    }

    #[test]
    fn autopilot_stays_put_in_a_safe_lane() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut state = playing_state();
        state.toggle_autopilot();
        let home = state.cart.x;

        state.step(&mut rng);
        assert_eq!(state.autopilot_target, Some(START_LANE));
        assert_eq!(state.cart.x, home);
    }

    #[test]
    fn toggling_autopilot_off_clears_the_target() {
        let mut state = playing_state();
        assert!(state.toggle_autopilot());
        state.autopilot_target = Some(3);
        assert!(!state.toggle_autopilot());
        assert_eq!(state.autopilot_target, None);
    }

    #[test]
    fn markers_scroll_and_wrap() {
        let mut state = playing_state();
        let count = state.marker_offsets.len();
        let period = MARKER_LEN + MARKER_GAP;
        assert_eq!(count as i32, HEIGHT / period);

        for _ in 0..10_000 {
            state.advance_markers();
            for &offset in &state.marker_offsets {
                assert!(offset > -period);
                assert!(offset <= HEIGHT);
            }
        }
    }
}
