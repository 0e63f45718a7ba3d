//! Sprite loading.
//!
//! Each choice is drawn from a small ASCII-art file in the asset directory.
//! All three files must be present and non-empty before a session starts.
use std::io;
use std::path::{Path, PathBuf};

use game_core::Choice;
use thiserror::Error;

/// Errors raised while loading sprites. All of them are fatal at startup.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset directory {0} does not exist")]
    MissingDir(PathBuf),

    #[error("failed to read sprite {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("sprite {0} contains no drawable lines")]
    Empty(PathBuf),
}

/// ASCII-art sprite with trailing whitespace stripped from every line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sprite {
    lines: Vec<String>,
    width: usize,
}

impl Sprite {
    /// Parses sprite text, dropping blank leading and trailing lines.
    ///
    /// Returns `None` when nothing drawable is left.
    pub fn parse(text: &str) -> Option<Self> {
        let lines: Vec<&str> = text.lines().map(str::trim_end).collect();
        let first = lines.iter().position(|line| !line.is_empty())?;
        let last = lines.iter().rposition(|line| !line.is_empty())?;

        let lines: Vec<String> = lines[first..=last]
            .iter()
            .map(|line| line.replace('\t', "    "))
            .collect();
        let width = lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or_default();

        Some(Self { lines, width })
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Widest line, in characters.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }
}

/// One sprite per choice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpriteSet {
    sprites: [Sprite; 3],
}

impl SpriteSet {
    /// Loads `rock.txt`, `paper.txt` and `scissors.txt` from `dir`.
    pub fn load(dir: &Path) -> Result<Self, AssetError> {
        if !dir.is_dir() {
            return Err(AssetError::MissingDir(dir.to_path_buf()));
        }

        let [rock, paper, scissors] = Choice::ALL.map(|choice| load_sprite(dir, choice));
        let set = Self {
            sprites: [rock?, paper?, scissors?],
        };

        tracing::debug!(dir = %dir.display(), "Loaded sprites");
        Ok(set)
    }

    /// File name expected for a choice's sprite.
    pub fn file_name(choice: Choice) -> String {
        format!("{}.txt", choice.as_ref().to_ascii_lowercase())
    }

    pub fn get(&self, choice: Choice) -> &Sprite {
        &self.sprites[choice.index()]
    }
}

fn load_sprite(dir: &Path, choice: Choice) -> Result<Sprite, AssetError> {
    let path = dir.join(SpriteSet::file_name(choice));
    let text = std::fs::read_to_string(&path).map_err(|source| AssetError::Unreadable {
        path: path.clone(),
        source,
    })?;
    Sprite::parse(&text).ok_or(AssetError::Empty(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_all(dir: &Path) {
        for choice in Choice::ALL {
            let art = format!("  [{}]  \n\n", choice.as_ref());
            std::fs::write(dir.join(SpriteSet::file_name(choice)), art).unwrap();
        }
    }

    #[test]
    fn parse_trims_blank_edges() {
        let sprite = Sprite::parse("\n\n  __  \n (  )\n\n").unwrap();
        assert_eq!(sprite.lines(), &["  __".to_string(), " (  )".to_string()]);
        assert_eq!(sprite.width(), 5);
        assert_eq!(sprite.height(), 2);
    }

    #[test]
    fn parse_rejects_whitespace_only() {
        assert_eq!(Sprite::parse(""), None);
        assert_eq!(Sprite::parse(" \n\t\n"), None);
    }

    #[test]
    fn loads_all_three() {
        let temp = TempDir::new().unwrap();
        write_all(temp.path());

        let set = SpriteSet::load(temp.path()).unwrap();
        assert_eq!(set.get(Choice::Paper).lines(), &["  [Paper]".to_string()]);
        assert_eq!(set.get(Choice::Scissors).width(), 12);
    }

    #[test]
    fn missing_file_is_fatal() {
        let temp = TempDir::new().unwrap();
        write_all(temp.path());
        std::fs::remove_file(temp.path().join("paper.txt")).unwrap();

        let err = SpriteSet::load(temp.path()).unwrap_err();
        assert!(matches!(
            err,
            AssetError::Unreadable { ref path, .. } if path.ends_with("paper.txt")
        ));
    }

    #[test]
    fn empty_file_is_fatal() {
        let temp = TempDir::new().unwrap();
        write_all(temp.path());
        std::fs::write(temp.path().join("rock.txt"), "\n   \n").unwrap();

        let err = SpriteSet::load(temp.path()).unwrap_err();
        assert!(matches!(err, AssetError::Empty(ref path) if path.ends_with("rock.txt")));
    }

    #[test]
    fn missing_directory_is_fatal() {
        let temp = TempDir::new().unwrap();
        let err = SpriteSet::load(&temp.path().join("nope")).unwrap_err();
        assert!(matches!(err, AssetError::MissingDir(_)));
    }
}
