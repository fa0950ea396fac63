//! Sprite assets, loaded once at startup from the asset directory.
//! Every sprite here is required; a missing file aborts the program
//! before the terminal enters raw mode.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

pub const OBSTACLE_VARIANTS: usize = 5;

/// A text sprite. Lines are drawn top-left aligned into the projected
/// rectangle of the entity and clipped to it.
#[derive(Debug, Clone)]
pub struct Sprite {
    lines: Vec<String>,
}

impl Sprite {
    pub fn parse(raw: &str) -> Self {
        let mut lines: Vec<String> = raw.lines().map(|l| l.trim_end().to_string()).collect();
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// The cart and the five obstacle variants.
#[derive(Debug)]
pub struct SpriteSet {
    pub cart: Sprite,
    pub obstacles: [Sprite; OBSTACLE_VARIANTS],
}

impl SpriteSet {
    pub fn load(dir: &Path) -> Result<Self> {
        let cart = load_sprite(dir, "cart.txt")?;
        let obstacles = [
            load_sprite(dir, "ob1.txt")?,
            load_sprite(dir, "ob2.txt")?,
            load_sprite(dir, "ob3.txt")?,
            load_sprite(dir, "ob4.txt")?,
            load_sprite(dir, "ob5.txt")?,
        ];
        Ok(Self { cart, obstacles })
    }
}

fn load_sprite(dir: &Path, name: &str) -> Result<Sprite> {
    let path = dir.join(name);
    let raw = fs::read_to_string(&path)
        .with_context(|| format!("failed to load required sprite {}", path.display()))?;
    Ok(Sprite::parse(&raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn temp_asset_dir() -> PathBuf {
        let id = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("autocart_assets_{id}"))
    }

    #[test]
    fn parse_trims_trailing_blank_lines() {
        let sprite = Sprite::parse(" /\\ \n/__\\\n\n\n");
        assert_eq!(sprite.lines(), &[" /\\".to_string(), "/__\\".to_string()]);
        assert_eq!(sprite.text(), " /\\\n/__\\");
    }

    #[test]
    fn load_fails_when_a_sprite_is_missing() {
        let dir = temp_asset_dir();
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("cart.txt"), "<=>").unwrap();
        // ob1..ob5 absent
        let err = SpriteSet::load(&dir).unwrap_err();
        assert!(err.to_string().contains("ob1.txt"));
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn load_reads_all_six_sprites() {
        let dir = temp_asset_dir();
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("cart.txt"), "<=>").unwrap();
        for i in 1..=OBSTACLE_VARIANTS {
            fs::write(dir.join(format!("ob{i}.txt")), format!("[{i}]")).unwrap();
        }
        let set = SpriteSet::load(&dir).unwrap();
        assert_eq!(set.cart.text(), "<=>");
        assert_eq!(set.obstacles[4].text(), "[5]");
        fs::remove_dir_all(&dir).ok();
    }
}
