use anyhow::Context;
use clap::Parser;
use const_format::formatcp;
use std::{
    fmt,
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

use crate::{config::Config, error::GeometryError, selector::Selection};

pub const CONFIG_NAME: &str = "config.toml";
pub const DEFAULT_CONFIG_PATH: &str = formatcp!("/etc/xrandr_geometry/{}", CONFIG_NAME);

/// Choose a monitor from `xrandr --listactivemonitors` output and print its X geometry.
///
/// GEO=`xrandr --listactivemonitors | xrandr-geometry -l`
/// your-x-app -geometry $GEO
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct ProgramArgs {
    /// Pick the largest monitor, else the first monitor.
    #[arg(short, long)]
    largest: bool,
    /// Path to the config file. Looked up in the XDG config directories and /etc/xrandr_geometry if not given.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Read the xrandr output from FILE instead of stdin.
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,
}

pub struct ProgramResources {
    /// Where the xrandr output is read from.
    pub input: Box<dyn BufRead>,
    /// Config file, or the default config.
    pub config: Config,
}

impl fmt::Display for ProgramArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.input() {
            Some(input) => writeln!(f, "Input: {}", input.display())?,
            None => writeln!(f, "Input: (stdin)")?,
        }
        match self.config() {
            Some(config) => writeln!(f, "Config file: {}", config.display())?,
            None => writeln!(f, "Config file: (default config)")?,
        }
        write!(f, "Largest: {}", self.largest)
    }
}

impl ProgramArgs {
    pub fn largest(&self) -> bool {
        self.largest
    }

    pub fn config(&self) -> Option<&Path> {
        self.config.as_deref()
    }

    pub fn input(&self) -> Option<&Path> {
        self.input.as_deref()
    }

    /// Parse the command line arguments and fill in the config path following XDG conventions.
    /// Exits the program if program arguments cannot be parsed correctly.
    pub fn get() -> Self {
        Self::parse().with_config_lookup()
    }

    /// If config was not defined via CLI arg, try to set it via XDG config directory or `/etc/xrandr_geometry`.
    #[must_use]
    pub fn with_config_lookup(mut self) -> Self {
        if self.config.is_some() {
            return self;
        }

        self.config = match xdg::BaseDirectories::with_prefix("xrandr_geometry") {
            Ok(xdg_dirs) => {
                // First try to find an existing file in XDG_CONFIG_HOME and then XDG_CONFIG_DIRS.
                xdg_dirs.find_config_file(CONFIG_NAME)
            }
            Err(e) => {
                log::warn!("Failed to access XDG directories: {:?}.", e);
                None
            }
        };
        self.config = self.config.or_else(|| {
            let config_path = PathBuf::from(DEFAULT_CONFIG_PATH);
            if config_path.exists() {
                Some(config_path)
            } else {
                log::debug!("No config.toml found, using default configuration.");
                None
            }
        });
        self
    }

    /// The monitor selection requested by the flags, taking the config's default into account.
    pub fn selection(&self, config: &Config) -> Selection {
        config.selection(self.largest)
    }

    /// Opens the files given in the program arguments.
    pub fn acquire_resources(&self) -> Result<ProgramResources, GeometryError> {
        log::trace!("Entering ProgramArgs::acquire_resources.");

        let input: Box<dyn BufRead> = if let Some(input_path) = self.input() {
            let file = File::open(input_path)
                .with_context(|| format!("Unable to open input file {}", input_path.display()))?;
            log::info!("Opened input file {}.", input_path.display());
            Box::new(BufReader::new(file))
        } else {
            log::info!("Reading xrandr output from stdin.");
            Box::new(io::stdin().lock())
        };

        let config = if let Some(config_path) = self.config() {
            let config = Config::from_file(config_path)
                .with_context(|| format!("Failed to read config file {}", config_path.display()))?;
            log::info!("Opened config file {}.", config_path.display());
            config
        } else {
            log::info!("No config file found, using default configuration.");
            Config::default()
        };
        log::info!("Using config:\n{}", config);

        log::trace!("Leaving ProgramArgs::acquire_resources.");
        Ok(ProgramResources { input, config })
    }
}
