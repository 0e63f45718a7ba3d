use std::path::Path;

use client_bootstrap::{BootstrapConfig, SessionBuilder, SpriteSet};
use game_core::{Choice, Command, MatchFormat, Phase, RngOracle};

/// Always draws zero: the computer reveals [Rock, Paper] and drops Rock.
struct ZeroRng;

impl RngOracle for ZeroRng {
    fn next_u32(&self, _seed: u64) -> u32 {
        0
    }
}

fn write_sprites(dir: &Path) {
    for choice in Choice::ALL {
        let art = format!(" _\n({})\n", choice.hotkey());
        std::fs::write(dir.join(SpriteSet::file_name(choice)), art).unwrap();
    }
}

#[test]
fn builds_with_fixed_seed() {
    let temp = tempfile::TempDir::new().unwrap();
    write_sprites(temp.path());

    let config = BootstrapConfig::default()
        .with_asset_dir(temp.path())
        .with_seed(1234);
    let session = SessionBuilder::new(config).build().unwrap();

    assert_eq!(session.model().seed, 1234);
    assert_eq!(session.model().phase, Phase::Menu);
    assert_eq!(session.sprites().get(Choice::Scissors).height(), 2);
}

#[test]
fn missing_assets_fail_with_context() {
    let temp = tempfile::TempDir::new().unwrap();
    let config = BootstrapConfig::default().with_asset_dir(temp.path().join("missing"));

    let err = match SessionBuilder::new(config).build() {
        Ok(_) => panic!("build should fail without sprites"),
        Err(err) => err,
    };
    assert!(err.to_string().contains("failed to load sprites"));
    assert!(format!("{err:#}").contains("does not exist"));
}

#[test]
fn injected_rng_drives_the_computer() {
    let temp = tempfile::TempDir::new().unwrap();
    write_sprites(temp.path());

    let config = BootstrapConfig::default().with_asset_dir(temp.path());
    let mut session = SessionBuilder::new(config).rng(ZeroRng).build().unwrap();

    session.dispatch(Command::StartMatch(MatchFormat::BEST_OF_ONE));
    session.dispatch(Command::Pick(Choice::Scissors));
    session.dispatch(Command::Pick(Choice::Paper));
    session.dispatch(Command::Confirm);
    assert_eq!(
        session.model().round.computer_hands.as_slice(),
        &[Choice::Rock, Choice::Paper]
    );

    session.dispatch(Command::Confirm);
    session.dispatch(Command::Keep(0));
    assert_eq!(session.model().round.computer_removed, Some(Choice::Rock));
    assert_eq!(session.model().round.computer_hands.as_slice(), &[Choice::Paper]);
}
