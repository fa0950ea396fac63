use anyhow::{Context, Result};
use tracing::{info, warn};

use autocart::cli::Options;
use autocart::core::assets::SpriteSet;
use autocart::core::audio::AudioSystem;
use autocart::core::engine::Engine;
use autocart::core::highscore::HighScoreStore;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::INFO)
        .init();

    let opts = Options::parse(std::env::args())?;
    info!(assets = %opts.assets_dir.display(), "starting autocart");

    // Required art: bail out before the terminal enters raw mode.
    let sprites = SpriteSet::load(&opts.assets_dir).context("required sprite assets missing")?;

    // Optional audio: the autopilot toggle just goes silent without it.
    let audio = match AudioSystem::new(&opts.assets_dir.join("autopilot.ogg")) {
        Ok(audio) => Some(audio),
        Err(err) => {
            warn!(%err, "autopilot sound unavailable, continuing without audio");
            None
        }
    };

    let store = HighScoreStore::new(opts.high_score_file.clone());
    let engine = Engine::new(sprites, audio, store);

    let terminal = ratatui::init();
    let result = engine.run(terminal);
    ratatui::restore();
    result
}
