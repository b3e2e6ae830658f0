use anyhow::{anyhow, Context};
use serde::Deserialize;
use std::{collections::HashMap, net::SocketAddr, time::Duration};
use url::Url;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Clone)]
pub struct Config {
    /// Base address of the HR API. `None` means every proxied call answers 500.
    pub api_base: Option<Url>,
    pub bind_addr: SocketAddr,
    pub upstream_timeout: Duration,
    pub cors_allow_origins: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    api_base: Option<String>,
    public_api_base: Option<String>,
    bind_addr: String,
    upstream_timeout_secs: u64,
    #[serde(default)]
    cors_allow_origins: Vec<String>,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_environment(config::Environment::default())
    }

    /// Builds a config from an explicit variable map instead of the process environment.
    pub fn from_vars(vars: HashMap<String, String>) -> anyhow::Result<Self> {
        Self::from_environment(config::Environment::default().source(Some(vars)))
    }

    pub fn with_api_base(api_base: Option<Url>) -> Self {
        Self {
            api_base,
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            upstream_timeout: Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
            cors_allow_origins: Vec::new(),
        }
    }

    fn from_environment(environment: config::Environment) -> anyhow::Result<Self> {
        let settings = config::Config::builder()
            .set_default("bind_addr", DEFAULT_BIND_ADDR)?
            .set_default("upstream_timeout_secs", DEFAULT_UPSTREAM_TIMEOUT_SECS)?
            .add_source(
                environment
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("cors_allow_origins"),
            )
            .build()
            .context("Failed to read configuration from environment")?;
        let raw: RawConfig = settings
            .try_deserialize()
            .context("Invalid configuration values")?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> anyhow::Result<Self> {
        let api_base = [raw.api_base, raw.public_api_base]
            .into_iter()
            .flatten()
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty())
            .map(|value| parse_base_url(&value))
            .transpose()?;

        let bind_addr: SocketAddr = raw
            .bind_addr
            .parse()
            .map_err(|_| anyhow!("Invalid BIND_ADDR value: {}", raw.bind_addr))?;

        let cors_allow_origins = raw
            .cors_allow_origins
            .into_iter()
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        Ok(Config {
            api_base,
            bind_addr,
            upstream_timeout: Duration::from_secs(raw.upstream_timeout_secs.max(1)),
            cors_allow_origins,
        })
    }
}

fn parse_base_url(value: &str) -> anyhow::Result<Url> {
    let url = Url::parse(value).map_err(|e| anyhow!("Invalid API_BASE value {}: {}", value, e))?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(anyhow!("API_BASE must be an http(s) URL: {}", value));
    }
    Ok(url)
}
