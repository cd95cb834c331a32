use std::path::PathBuf;
use std::sync::Once;

use core_automaton::CONFIG_PATH_ENV;

static FIXTURE_ENV: Once = Once::new();

/// Small wildfire grid with a fixed seed.
pub fn fixture_path() -> PathBuf {
    [env!("CARGO_MANIFEST_DIR"), "tests", "fixtures", "test_simulation_config.json"]
        .iter()
        .collect()
}

/// Point [`CONFIG_PATH_ENV`] at the fixture once per test binary.
pub fn use_fixture_config() {
    FIXTURE_ENV.call_once(|| {
        let path = fixture_path();
        assert!(path.is_file(), "fixture config not found: {}", path.display());
        std::env::set_var(CONFIG_PATH_ENV, path);
    });
}
