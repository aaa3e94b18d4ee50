//! Proptest configuration for rotation property suites.
//!
//! Unit suites run more cases than the integration binaries, so each caller
//! names its own default. `PROPTEST_CASES` overrides either one and
//! `PROPTEST_MAX_SHRINK_MS` caps shrinking.

use proptest::prelude::ProptestConfig;

/// Cases for the integration binaries when `PROPTEST_CASES` is unset.
pub const INTEGRATION_CASES: u32 = 32;

fn parse_env(name: &str) -> Option<u32> {
    std::env::var(name).ok().and_then(|s| s.trim().parse::<u32>().ok())
}

fn build(default_cases: u32, cases: Option<u32>, max_shrink_ms: Option<u32>) -> ProptestConfig {
    let base = ProptestConfig::default();
    ProptestConfig {
        cases: cases.unwrap_or(default_cases).max(1),
        max_shrink_time: max_shrink_ms.unwrap_or(base.max_shrink_time),
        failure_persistence: None,
        ..base
    }
}

/// Config with `default_cases` unless the environment says otherwise.
pub fn proptest_config_with_default(default_cases: u32) -> ProptestConfig {
    build(
        default_cases,
        parse_env("PROPTEST_CASES"),
        parse_env("PROPTEST_MAX_SHRINK_MS"),
    )
}

pub fn proptest_prelude_config() -> ProptestConfig {
    proptest_config_with_default(INTEGRATION_CASES)
}
