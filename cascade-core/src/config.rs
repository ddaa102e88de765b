//! Engine configuration, loaded from JSON5.

use std::{fs, io, path::Path};

use cascade_registry::FluidKind;
use cascade_utils::random::RandomKind;
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_CONFIG: &str = include_str!("../../package-content/cascade_config.json5");

/// Errors raised while loading a [`FluidConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading or writing the config file failed.
    #[error("config io error: {0}")]
    Io(#[from] io::Error),
    /// The file is not valid JSON5 for this config.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json5::Error),
    /// The file parsed but holds an unusable value.
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

/// Settings of a fluid world.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FluidConfig {
    /// Seed for throttle draws. `None` draws an entropy seed per world.
    pub random_seed: Option<u64>,
    /// Generator used for throttle draws.
    pub random_source: RandomKind,
    /// Upper bound on fluid evaluations run in one world tick.
    pub max_fluid_ticks_per_tick: usize,
    /// Whether water forms new sources.
    pub water_source_conversion: bool,
    /// Whether lava forms new sources.
    pub lava_source_conversion: bool,
    /// Lowest y inside the world.
    pub min_y: i32,
    /// Highest y inside the world.
    pub max_y: i32,
}

impl FluidConfig {
    /// Parses and validates a config from JSON5 text.
    pub fn from_json5(text: &str) -> Result<Self, ConfigError> {
        let config: FluidConfig = serde_json5::from_str(text)?;
        config.validate().map_err(ConfigError::Invalid)?;
        Ok(config)
    }

    /// Loads the config at `path`, writing the default file first if it is
    /// missing.
    pub fn load_or_create(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let text = fs::read_to_string(path)?;
            return Self::from_json5(&text);
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_CONFIG)?;
        log::info!("Wrote default fluid config to {}", path.display());
        Ok(Self::default())
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.min_y > self.max_y {
            return Err("min_y must not be greater than max_y");
        }
        if self.max_fluid_ticks_per_tick == 0 {
            return Err("max_fluid_ticks_per_tick must be at least 1");
        }
        Ok(())
    }

    /// The source-conversion rule for `kind`.
    #[must_use]
    pub const fn source_conversion(&self, kind: FluidKind) -> bool {
        match kind {
            FluidKind::Water => self.water_source_conversion,
            FluidKind::Lava => self.lava_source_conversion,
        }
    }
}

impl Default for FluidConfig {
    fn default() -> Self {
        Self {
            random_seed: None,
            random_source: RandomKind::Legacy,
            max_fluid_ticks_per_tick: 65536,
            water_source_conversion: true,
            lava_source_conversion: false,
            min_y: -64,
            max_y: 319,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_file_matches_default() {
        let parsed = FluidConfig::from_json5(DEFAULT_CONFIG).expect("default config parses");
        assert_eq!(parsed, FluidConfig::default());
    }

    #[test]
    fn test_rejects_inverted_bounds() {
        let text = r#"{
            random_seed: 7,
            random_source: "xoroshiro",
            max_fluid_ticks_per_tick: 10,
            water_source_conversion: false,
            lava_source_conversion: true,
            min_y: 10,
            max_y: 0,
        }"#;
        assert!(matches!(
            FluidConfig::from_json5(text),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_rejects_malformed_text() {
        assert!(matches!(
            FluidConfig::from_json5("{ min_y: }"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_source_conversion_per_kind() {
        let config = FluidConfig::default();
        assert!(config.source_conversion(FluidKind::Water));
        assert!(!config.source_conversion(FluidKind::Lava));
    }

    #[test]
    fn test_load_or_create_writes_default() {
        let dir = std::env::temp_dir().join(format!("cascade-config-{}", std::process::id()));
        let path = dir.join("cascade_config.json5");
        let _ = fs::remove_file(&path);

        let created = FluidConfig::load_or_create(&path).expect("default written");
        assert_eq!(created, FluidConfig::default());
        assert!(path.exists());

        let loaded = FluidConfig::load_or_create(&path).expect("written file loads");
        assert_eq!(loaded, created);

        let _ = fs::remove_dir_all(&dir);
    }
}
