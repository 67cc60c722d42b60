// SPDX-License-Identifier: MPL-2.0
//! Resolution of the two directories the application writes to.
//!
//! - the **data** directory holds `state.cbor`, the local key-value store
//!   that remembers the theme preference;
//! - the **config** directory holds `settings.toml`.
//!
//! Each directory is resolved in this order:
//! 1. explicit override passed to a `*_with_override()` function (tests)
//! 2. CLI flag (`--data-dir` / `--config-dir`), registered with [`init_cli_overrides`]
//! 3. environment variable (`TIKSAVER_DATA_DIR` / `TIKSAVER_CONFIG_DIR`), if non-empty
//! 4. platform directory from the `dirs` crate, with the app name appended

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "TikSaver";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "TIKSAVER_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "TIKSAVER_CONFIG_DIR";

static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Registers the `--data-dir` / `--config-dir` values given on the command line.
///
/// Only the first call has an effect; later calls are logged and ignored.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    if CLI_DATA_DIR.set(data_dir.map(PathBuf::from)).is_err()
        || CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err()
    {
        log::warn!("CLI directory overrides were already initialized");
    }
}

/// Where a kind of directory can come from, in priority order.
struct DirSource {
    cli: &'static OnceLock<Option<PathBuf>>,
    env_var: &'static str,
    platform: fn() -> Option<PathBuf>,
}

static DATA_SOURCE: DirSource = DirSource {
    cli: &CLI_DATA_DIR,
    env_var: ENV_DATA_DIR,
    platform: dirs::data_dir,
};

static CONFIG_SOURCE: DirSource = DirSource {
    cli: &CLI_CONFIG_DIR,
    env_var: ENV_CONFIG_DIR,
    platform: dirs::config_dir,
};

fn resolve(source: &DirSource, override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = source.cli.get().and_then(Clone::clone) {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(source.env_var) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    (source.platform)().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the data directory, preferring `override_path` when given.
///
/// Without any override this is `~/.local/share/TikSaver` on Linux.
pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(&DATA_SOURCE, override_path)
}

/// Returns the config directory, preferring `override_path` when given.
///
/// Without any override this is `~/.config/TikSaver` on Linux.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(&CONFIG_SOURCE, override_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Env vars are process-global; serialize the tests that touch them.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn data_dir_defaults_to_platform_dir_with_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_DATA_DIR);

        if let Some(path) = get_app_data_dir_with_override(None) {
            assert!(path.ends_with(APP_NAME));
            assert!(path.is_absolute());
        }
    }

    #[test]
    fn config_dir_defaults_to_platform_dir_with_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(path) = get_app_config_dir_with_override(None) {
            assert!(path.ends_with(APP_NAME));
            assert!(path.is_absolute());
        }
    }

    #[test]
    fn env_var_overrides_platform_dirs() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_DATA_DIR, "/test/data/dir");
        std::env::set_var(ENV_CONFIG_DIR, "/test/config/dir");

        assert_eq!(
            get_app_data_dir_with_override(None),
            Some(PathBuf::from("/test/data/dir"))
        );
        assert_eq!(
            get_app_config_dir_with_override(None),
            Some(PathBuf::from("/test/config/dir"))
        );

        std::env::remove_var(ENV_DATA_DIR);
        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn empty_env_var_is_ignored() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_DATA_DIR, "");

        if let Some(path) = get_app_data_dir_with_override(None) {
            assert!(path.ends_with(APP_NAME));
        }

        std::env::remove_var(ENV_DATA_DIR);
    }

    #[test]
    fn explicit_override_beats_env_var() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_DATA_DIR, "/env/path");

        let override_path = PathBuf::from("/override/path");
        assert_eq!(
            get_app_data_dir_with_override(Some(override_path.clone())),
            Some(override_path)
        );

        std::env::remove_var(ENV_DATA_DIR);
    }
}
