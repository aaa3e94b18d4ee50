#![allow(dead_code)]

// tests/common/mod.rs
use rotation_engine::PlayerId;

// Logging is auto-installed for every test binary that declares `mod common`
#[ctor::ctor]
fn init_logging() {
    rotation_test_support::logging::init();
}

pub fn players(n: usize) -> Vec<PlayerId> {
    rotation_test_support::fixtures::player_names(n)
        .into_iter()
        .map(PlayerId::from)
        .collect()
}
