//! Runner settings read from the environment, and config loading.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::Context;

use railshot_core::config::SimConfig;

// Runner settings (not gameplay tuning).

pub const DEFAULT_TICKS: u64 = 600;
pub const AUTOPILOT_SWEEP_TICKS: u64 = 90;

pub fn config_path() -> Option<PathBuf> {
    env::var_os("RAILSHOT_CONFIG").map(PathBuf::from)
}

pub fn tick_limit() -> u64 {
    env::var("RAILSHOT_TICKS")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_TICKS)
}

pub fn paced() -> bool {
    !matches!(
        env::var("RAILSHOT_UNPACED").as_deref(),
        Ok("1") | Ok("true")
    )
}

/// Load and validate the simulation config, falling back to defaults.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<SimConfig> {
    let config = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            SimConfig::from_json_str(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => SimConfig::default(),
    };
    config.validate().context("invalid simulation config")?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = env::temp_dir().join(format!("railshot-{}-{name}", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_defaults_without_path() {
        let config = load_config(None).unwrap();
        assert_eq!(config.seed, SimConfig::default().seed);
    }

    #[test]
    fn test_loads_partial_file() {
        let path = temp_file("partial.json", r#"{ "seed": 9, "tick_rate": 30.0 }"#);
        let config = load_config(Some(&path)).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(config.seed, 9);
        assert_eq!(config.tick_rate, 30.0);
    }

    #[test]
    fn test_rejects_invalid_file() {
        let path = temp_file("invalid.json", r#"{ "weapon": { "reload_time": -1.0 } }"#);
        let err = load_config(Some(&path)).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(err.to_string().contains("invalid simulation config"));
    }

    #[test]
    fn test_missing_file_names_path() {
        let path = env::temp_dir().join("railshot-does-not-exist.json");
        let err = load_config(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("railshot-does-not-exist.json"));
    }
}
