use std::sync::Arc;

use crate::{config::Config, upstream::UpstreamClient};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub upstream: UpstreamClient,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let upstream = UpstreamClient::new(config.api_base.clone(), config.upstream_timeout)?;
        Ok(Self {
            config: Arc::new(config),
            upstream,
        })
    }
}
