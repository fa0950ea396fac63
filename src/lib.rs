pub mod cli;

pub mod core {
	pub mod assets;
	pub mod audio;
	pub mod engine;
	pub mod highscore;
	pub mod lanes;
	pub mod rect;
}

pub mod game {
	pub mod autopilot;
	pub mod obstacles;
	pub mod renderer;
	pub mod state;
}

// Re-export for convenience
pub use crate::core::engine::Engine;
pub use crate::game::state::{GameState, Phase};
