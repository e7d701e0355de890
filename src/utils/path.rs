use std::path::PathBuf;

/// Get the home directory, with fallback to "/"
pub fn get_home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"))
}

/// Get the config directory path (always ~/.config/foodsplit, regardless of OS)
pub fn get_config_dir() -> PathBuf {
    get_home_dir().join(".config").join("foodsplit")
}

/// Get the config file path (always ~/.config/foodsplit/config.toml, regardless of OS)
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

/// Directory for the log file: the platform cache dir, or the config dir
/// when the platform has none.
pub fn get_log_dir() -> PathBuf {
    dirs::cache_dir()
        .map(|dir| dir.join("foodsplit"))
        .unwrap_or_else(get_config_dir)
}
