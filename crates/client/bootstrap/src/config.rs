//! Session configuration structures and loaders.
use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Configuration required to bootstrap a game session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BootstrapConfig {
    /// Directory holding `rock.txt`, `paper.txt` and `scissors.txt`.
    pub asset_dir: PathBuf,
    /// Fixed match seed. A random one is drawn when absent.
    pub seed: Option<u64>,
    /// Identifier used to name the session's log directory.
    pub session_id: String,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            asset_dir: PathBuf::from(Self::DEFAULT_ASSET_DIR),
            seed: None,
            session_id: default_session_id(),
        }
    }
}

impl BootstrapConfig {
    pub const DEFAULT_ASSET_DIR: &'static str = "assets";

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `MINUS_ONE_ASSET_DIR` - Sprite directory (default: `assets`)
    /// - `MINUS_ONE_SEED` - Match seed (default: random)
    /// - `GAME_SESSION_ID` - Session identifier (default: `session_<unix ts>`)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Self::from_env`] but reads values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = lookup("MINUS_ONE_ASSET_DIR").filter(|dir| !dir.trim().is_empty()) {
            config.asset_dir = PathBuf::from(dir);
        }

        config.seed = parse(&lookup, "MINUS_ONE_SEED");

        if let Some(session_id) = lookup("GAME_SESSION_ID").filter(|id| !id.trim().is_empty()) {
            config.session_id = session_id;
        }

        config
    }

    pub fn with_asset_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.asset_dir = dir.into();
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

fn parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}

fn default_session_id() -> String {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    format!("session_{timestamp}")
}
