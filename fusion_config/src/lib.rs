use std::{
    net::IpAddr,
    path::{Path, PathBuf},
};

use anyhow::Context;
use config::{File, FileFormat};
use fusion_models::email_address::EmailAddress;
use serde::Deserialize;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Loads the configuration from the paths in the `FUSION_CONFIG` environment
/// variable (colon-separated, later files override earlier ones) or from the
/// default `config.toml` at the repository root.
pub fn load() -> anyhow::Result<Config> {
    let paths = match std::env::var("FUSION_CONFIG") {
        Ok(var) => var.split(':').map(PathBuf::from).collect(),
        Err(_) => vec![PathBuf::from(DEFAULT_CONFIG_PATH)],
    };
    load_paths(&paths)
}

pub fn load_paths(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    let config: Config = paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?
        .build()?
        .try_deserialize()
        .context("Failed to load config")?;

    anyhow::ensure!(
        !config.contact.recipients.is_empty(),
        "contact.recipients must contain at least one address"
    );

    Ok(config)
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub database: DatabaseConfig,
    pub email: EmailConfig,
    pub health: HealthConfig,
    pub contact: ContactConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout: Duration,
    pub idle_timeout: Option<Duration>,
    pub max_lifetime: Option<Duration>,
}

#[derive(Debug, Deserialize)]
pub struct EmailConfig {
    pub smtp_url: String,
    pub from: EmailAddress,
    pub send_timeout: Duration,
}

#[derive(Debug, Deserialize)]
pub struct HealthConfig {
    pub cache_ttl: Duration,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    pub recipients: Vec<EmailAddress>,
    pub reply_to: Option<EmailAddress>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duration(pub std::time::Duration);

impl From<Duration> for std::time::Duration {
    fn from(value: Duration) -> Self {
        value.0
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let mut out = std::time::Duration::default();
        for part in s.split_whitespace() {
            let mut bytes = part.bytes();
            let mut seconds = 0;
            for b in bytes.by_ref() {
                match b {
                    b'0'..=b'9' => seconds = seconds * 10 + (b - b'0') as u64,
                    b's' => break,
                    b'm' => {
                        seconds *= 60;
                        break;
                    }
                    b'h' => {
                        seconds *= 3600;
                        break;
                    }
                    b'd' => {
                        seconds *= 24 * 3600;
                        break;
                    }
                    _ => return Err(serde::de::Error::custom("Invalid duration")),
                }
            }
            if bytes.next().is_some() {
                return Err(serde::de::Error::custom("Invalid duration"));
            }
            out += std::time::Duration::from_secs(seconds);
        }
        Ok(Self(out))
    }
}
