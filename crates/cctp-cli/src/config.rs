//! Configuration handling for cctp-inspect
//!
//! Priority: CLI flags > environment variables > config file > defaults

use anyhow::{Context, Result};
use sc_cctp_core::{CheckedLibrary, SidechainFieldConfigs};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{CommonArgs, OutputFormat};

#[cfg(feature = "zendoo")]
pub type Library = sc_cctp_core::ZendooLibrary;

#[cfg(all(feature = "software", not(feature = "zendoo")))]
pub type Library = sc_cctp_core::SoftwareLibrary;

#[cfg(not(any(feature = "software", feature = "zendoo")))]
compile_error!("cctp-inspect needs a CCTP library: enable the `software` or `zendoo` feature");

/// Resolved configuration for CLI commands
#[derive(Debug)]
pub struct Config {
    pub quiet: bool,
    pub json_output: bool,
    /// Sidechain config file used when a command does not name one
    pub sidechain_config: Option<PathBuf>,
}

impl Config {
    /// Load configuration from file, environment, and CLI args
    pub fn load(common: &CommonArgs) -> Result<Self> {
        let file_config = ConfigFile::load().ok();
        Ok(Self::resolve(common, file_config.as_ref()))
    }

    fn resolve(common: &CommonArgs, file_config: Option<&ConfigFile>) -> Self {
        let output = common
            .output
            .or_else(|| file_config.and_then(|c| c.output))
            .unwrap_or(OutputFormat::Human);

        let sidechain_config = std::env::var_os("CCTP_SIDECHAIN_CONFIG")
            .map(PathBuf::from)
            .or_else(|| {
                file_config
                    .and_then(|c| c.sidechain_config.as_deref())
                    .map(expand_tilde)
            });

        Self {
            quiet: common.quiet,
            json_output: output == OutputFormat::Json,
            sidechain_config,
        }
    }

    /// Library used for validation, size-checked against the compiled constants
    pub fn library(&self) -> Result<CheckedLibrary<Library>> {
        CheckedLibrary::new(Library::new()).context("CCTP library failed its startup check")
    }

    /// Sidechain field configs from `explicit`, falling back to the configured file
    pub fn sidechain_configs(&self, explicit: Option<&Path>) -> Result<SidechainFieldConfigs> {
        let path = explicit
            .or(self.sidechain_config.as_deref())
            .context("No sidechain config. Use --sidechain or set CCTP_SIDECHAIN_CONFIG")?;
        load_sidechain_configs(path)
    }
}

/// Configuration file structure
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    output: Option<OutputFormat>,
    sidechain_config: Option<String>,
}

impl ConfigFile {
    fn load() -> Result<Self> {
        let path = config_file_path()?;
        if !path.exists() {
            anyhow::bail!("Config file not found");
        }
        let content = fs::read_to_string(&path)?;
        let config: ConfigFile = toml::from_str(&content)?;
        Ok(config)
    }
}

/// Parse a sidechain TOML listing `[[field_element]]` and `[[bit_vector]]` configs
pub fn load_sidechain_configs(path: &Path) -> Result<SidechainFieldConfigs> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read sidechain config {:?}", path))?;
    parse_sidechain_configs(&content)
        .with_context(|| format!("Invalid sidechain config {:?}", path))
}

fn parse_sidechain_configs(content: &str) -> Result<SidechainFieldConfigs> {
    let configs: SidechainFieldConfigs = toml::from_str(content)?;
    if !configs.check_valid() {
        anyhow::bail!("sidechain declares an invalid certificate field config");
    }
    Ok(configs)
}

/// Get config file path
fn config_file_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir().context("Could not find config directory")?;
    Ok(config_dir.join("cctp-inspect").join("config.toml"))
}

/// Expand ~ to home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}
