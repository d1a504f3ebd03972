use crate::core::error::GitTreeStatusError;
use std::path::PathBuf;

pub fn get_config_directory() -> Result<PathBuf, GitTreeStatusError> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .ok()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config"))),
        "macos" => dirs::home_dir().map(|home| home.join("Library/Application Support")),
        _ => dirs::config_dir(),
    };

    base.map(|base| base.join("git-tree-status"))
        .ok_or(GitTreeStatusError::ConfigDirectoryNotFound)
}
