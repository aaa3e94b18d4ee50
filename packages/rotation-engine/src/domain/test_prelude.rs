//! Proptest configuration for domain property tests.

use proptest::prelude::ProptestConfig;

/// Domain suites default to 64 cases; `PROPTEST_CASES` overrides.
pub fn proptest_config() -> ProptestConfig {
    rotation_test_support::proptest_prelude::proptest_config_with_default(64)
}
