//! Assembles a [`GameSession`] from configuration.
use anyhow::{Context, Result};
use game_core::{GameConfig, GameModel, PcgRng, RngOracle};

use crate::assets::SpriteSet;
use crate::config::BootstrapConfig;
use crate::session::GameSession;

/// Builder that loads sprites, fixes the match seed and wires the random source.
pub struct SessionBuilder {
    config: BootstrapConfig,
    rng: Option<Box<dyn RngOracle>>,
}

impl SessionBuilder {
    pub fn new(config: BootstrapConfig) -> Self {
        Self { config, rng: None }
    }

    /// Provide a custom random source (e.g., a scripted oracle in tests).
    pub fn rng(mut self, rng: impl RngOracle + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    pub fn build(self) -> Result<GameSession> {
        let sprites = SpriteSet::load(&self.config.asset_dir).with_context(|| {
            format!(
                "failed to load sprites from {}",
                self.config.asset_dir.display()
            )
        })?;

        let seed = self.config.seed.unwrap_or_else(rand::random);
        let model = GameModel::new(&GameConfig::with_seed(seed));
        let rng: Box<dyn RngOracle> = match self.rng {
            Some(rng) => rng,
            None => Box::new(PcgRng),
        };

        tracing::info!(
            session_id = %self.config.session_id,
            seed,
            "Session ready"
        );

        Ok(GameSession::new(
            model,
            rng,
            sprites,
            self.config.session_id,
        ))
    }
}
