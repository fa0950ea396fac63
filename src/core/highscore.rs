//! Best-score persistence: one decimal integer in a text file.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Missing or unreadable storage means "no prior score", never an error.
    pub fn load(&self) -> u32 {
        match fs::read_to_string(&self.path) {
            Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
                debug!(path = %self.path.display(), "high score file is not a number, starting at 0");
                0
            }),
            Err(err) => {
                debug!(path = %self.path.display(), %err, "no prior high score, starting at 0");
                0
            }
        }
    }

    pub fn save(&self, score: u32) -> Result<()> {
        fs::write(&self.path, score.to_string())
            .with_context(|| format!("failed to write high score to {}", self.path.display()))
    }

    /// Persists `score` only when it strictly beats `prior`. Returns
    /// whether a save happened.
    pub fn record(&self, score: u32, prior: u32) -> Result<bool> {
        if score > prior {
            self.save(score)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_store() -> HighScoreStore {
        let id = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        HighScoreStore::new(std::env::temp_dir().join(format!("autocart_hs_{id}.txt")))
    }

    #[test]
    fn absent_file_loads_zero() {
        let store = temp_store();
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn garbage_file_loads_zero() {
        let store = temp_store();
        fs::write(&store.path, "not a score").unwrap();
        assert_eq!(store.load(), 0);
        fs::remove_file(&store.path).ok();
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = temp_store();
        store.save(1234).unwrap();
        assert_eq!(store.load(), 1234);
        fs::remove_file(&store.path).ok();
    }

    #[test]
    fn record_saves_only_on_improvement() {
        let store = temp_store();
        store.save(30).unwrap();

        assert!(store.record(50, 30).unwrap());
        assert_eq!(store.load(), 50);

        assert!(!store.record(10, 30).unwrap());
        assert_eq!(store.load(), 50);

        // equal score is not an improvement
        assert!(!store.record(50, 50).unwrap());

        fs::remove_file(&store.path).ok();
    }
}
