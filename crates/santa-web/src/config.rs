use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;
use tracing::info;

pub const DEFAULT_PORT: u16 = 8501;
pub const DEFAULT_ASSETS_DIR: &str = "assets";
pub const DEFAULT_SESSION_TTL_SECS: u64 = 60 * 60;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("assets directory not found: {0}")]
    MissingAssetsDir(PathBuf),

    #[error("session TTL must be greater than zero")]
    ZeroSessionTtl,

    #[error("unknown page variant '{0}' (expected 'analysis' or 'plain')")]
    UnknownVariant(String),
}

/// Which of the two page layouts to serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Shows the extracted text statistics and the model verdict.
    #[default]
    Analysis,
    /// Shows only Santa's message and the score.
    Plain,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Analysis => "analysis",
            Self::Plain => "plain",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "analysis" => Ok(Self::Analysis),
            "plain" => Ok(Self::Plain),
            _ => Err(ConfigError::UnknownVariant(s.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind: IpAddr,
    pub port: u16,
    pub assets_dir: PathBuf,
    pub variant: Variant,
    /// Idle time after which a session's last result is discarded.
    pub session_ttl: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            variant: Variant::default(),
            session_ttl: Duration::from_secs(DEFAULT_SESSION_TTL_SECS),
        }
    }
}

impl Config {
    pub fn address(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.assets_dir.is_dir() {
            return Err(ConfigError::MissingAssetsDir(self.assets_dir.clone()));
        }
        if self.session_ttl.is_zero() {
            return Err(ConfigError::ZeroSessionTtl);
        }

        info!(
            address = %self.address(),
            assets_dir = %self.assets_dir.display(),
            variant = %self.variant,
            session_ttl_secs = self.session_ttl.as_secs(),
            "configuration loaded"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_parses_case_insensitively() {
        assert_eq!("Analysis".parse::<Variant>().unwrap(), Variant::Analysis);
        assert_eq!(" plain ".parse::<Variant>().unwrap(), Variant::Plain);
        assert!(matches!(
            "fancy".parse::<Variant>(),
            Err(ConfigError::UnknownVariant(v)) if v == "fancy"
        ));
    }

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.port, 8501);
        assert_eq!(config.variant, Variant::Analysis);
        assert_eq!(config.address().to_string(), "0.0.0.0:8501");
    }

    #[test]
    fn validate_rejects_missing_assets_dir() {
        let config = Config {
            assets_dir: PathBuf::from("/definitely/not/here"),
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingAssetsDir(_))
        ));
    }

    #[test]
    fn validate_rejects_zero_ttl() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            assets_dir: dir.path().to_path_buf(),
            session_ttl: Duration::ZERO,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::ZeroSessionTtl)));

        let config = Config {
            session_ttl: Duration::from_secs(1),
            ..config
        };
        assert!(config.validate().is_ok());
    }
}
