//! Configuration file lookup.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from current directory
///
/// Absolute paths are returned as-is when they exist. Otherwise starts from
/// cwd and walks up parent directories until finding `config_name`.
///
/// # Example
/// ```text
/// /home/jane/portfolio/dist/      ← cwd
/// /home/jane/portfolio/folio.toml ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let cwd = std::env::current_dir().ok()?;
    cwd.ancestors()
        .map(|dir| dir.join(config_name))
        .find(|candidate| candidate.exists())
}
