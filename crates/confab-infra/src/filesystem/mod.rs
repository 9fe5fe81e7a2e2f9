//! Filesystem layout for Confab.
//!
//! Resolves the data directory holding the conversation snapshot and
//! `config.toml`, and hosts the JSON snapshot store.

pub mod snapshot;

use std::path::PathBuf;

/// Resolve the data directory from environment or platform defaults.
///
/// Priority:
/// 1. `CONFAB_DATA_DIR` environment variable
/// 2. `~/.confab`
/// 3. `./.confab` when no home directory can be determined
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("CONFAB_DATA_DIR") {
        if !dir.is_empty() {
            return PathBuf::from(dir);
        }
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".confab");
    }

    PathBuf::from(".confab")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_data_dir_is_nonempty() {
        let dir = resolve_data_dir();
        assert!(!dir.as_os_str().is_empty());
    }
}
