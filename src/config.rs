//! Configuration constants and utilities for armpanel
//!
//! This module contains the location of the panel's configuration file;
//! the file format itself lives with the panel persistence layer.

/// Default configuration file path for armpanel
pub const DEFAULT_CONFIG_PATH: &str = "~/.armpanel/panel";

/// Environment variable name for overriding the configuration path
pub const CONFIG_PATH_ENV_VAR: &str = "ARMPANEL_CONFIG_PATH";

/// Get the configuration file path with the tilde expanded, checking the
/// environment variable first and falling back to the default
pub fn get_config_path() -> String {
    let raw = std::env::var_os(CONFIG_PATH_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    shellexpand::tilde(&raw).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_path() {
        assert_eq!(DEFAULT_CONFIG_PATH, "~/.armpanel/panel");
    }

    #[test]
    fn test_env_var_name() {
        assert_eq!(CONFIG_PATH_ENV_VAR, "ARMPANEL_CONFIG_PATH");
    }

    #[test]
    fn test_get_config_path_env_override() {
        // Save current env var state
        let original = std::env::var_os(CONFIG_PATH_ENV_VAR);

        let test_path = "/custom/config/path";
        std::env::set_var(CONFIG_PATH_ENV_VAR, test_path);
        assert_eq!(get_config_path(), test_path);

        // Restore original state
        match original {
            Some(val) => std::env::set_var(CONFIG_PATH_ENV_VAR, val),
            None => std::env::remove_var(CONFIG_PATH_ENV_VAR),
        }
    }

    #[test]
    fn test_get_config_path_expands_tilde() {
        let original = std::env::var_os(CONFIG_PATH_ENV_VAR);

        std::env::remove_var(CONFIG_PATH_ENV_VAR);
        let path = get_config_path();
        assert!(!path.starts_with('~'));
        assert!(path.ends_with(".armpanel/panel"));

        if let Some(val) = original {
            std::env::set_var(CONFIG_PATH_ENV_VAR, val);
        }
    }
}
