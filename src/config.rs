use serde::{Deserialize, Serialize};
use std::{fmt, fs, path::Path};

use crate::{error::GeometryError, selector::Selection};

/// Geometry printed when the input did not list any monitor.
pub const FALLBACK_GEOMETRY: &str = "1920x1080+0+0";

/// How the first line of the input, the `Monitors: N` header, is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderPolicy {
    /// Skip the header and parse every following line. The count is not looked at.
    #[default]
    Skip,
    /// Parse exactly as many lines as the header announces and ignore the rest.
    Counted,
    /// Like `Counted`, but the number of listed monitors must match the header.
    Strict,
}

impl fmt::Display for HeaderPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderPolicy::Skip => f.write_str("skip"),
            HeaderPolicy::Counted => f.write_str("counted"),
            HeaderPolicy::Strict => f.write_str("strict"),
        }
    }
}

/// Options that are taken verbatim from the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Printed instead of a monitor geometry when no monitor was listed.
    pub fallback_geometry: String,
    /// Treatment of the header line.
    pub header: HeaderPolicy,
    /// Pick the largest monitor even without `--largest`.
    pub largest: bool,
}

impl Config {
    pub fn fallback_geometry(&self) -> &str {
        &self.fallback_geometry
    }

    pub fn header(&self) -> HeaderPolicy {
        self.header
    }

    /// The selection to use, a `--largest` flag on the command line always wins.
    pub fn selection(&self, largest_flag: bool) -> Selection {
        if largest_flag || self.largest {
            Selection::Largest
        } else {
            Selection::First
        }
    }

    /// Read a config from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, GeometryError> {
        let config = fs::read_to_string(path)?;
        Ok(toml::from_str(&config)?)
    }

    /// Serialize config in TOML format.
    pub fn to_toml_string(&self) -> Result<String, GeometryError> {
        Ok(toml::to_string_pretty(&self)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fallback_geometry: String::from(FALLBACK_GEOMETRY),
            header: HeaderPolicy::default(),
            largest: false,
        }
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Fallback geometry: {}.\n\
            Header line: {}.\n\
            Default selection: {}.",
            self.fallback_geometry,
            self.header,
            self.selection(false),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempdir::TempDir;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str("header = \"strict\"").unwrap();

        assert_eq!(HeaderPolicy::Strict, config.header());
        assert_eq!(FALLBACK_GEOMETRY, config.fallback_geometry());
        assert_eq!(Selection::First, config.selection(false));
    }

    #[test]
    fn test_flag_wins_over_config() {
        let config = Config::default();
        assert_eq!(Selection::Largest, config.selection(true));

        let config = Config {
            largest: true,
            ..Config::default()
        };
        assert_eq!(Selection::Largest, config.selection(false));
    }

    #[test]
    fn test_toml_round_trip_through_file() {
        let dir = TempDir::new("xrandr_geometry").unwrap();
        let path = dir.path().join("config.toml");
        let config = Config {
            fallback_geometry: String::from("1280x1024+0+0"),
            header: HeaderPolicy::Counted,
            largest: true,
        };

        let mut file = fs::File::create(&path).unwrap();
        file.write_all(config.to_toml_string().unwrap().as_bytes())
            .unwrap();
        drop(file);

        assert_eq!(config, Config::from_file(&path).unwrap());
    }

    #[test]
    fn test_invalid_config() {
        let dir = TempDir::new("xrandr_geometry").unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "header = \"sometimes\"").unwrap();

        assert!(matches!(
            Config::from_file(&path),
            Err(GeometryError::ParseConfig(_))
        ));
    }
}
