use crate::domain::dashboard::DashboardContent;
use serde::Deserialize;
use std::net::SocketAddr;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct DashboardConfig {
    pub server: ServerSettings,
    pub content: DashboardContent,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerSettings {
    pub bind: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3001".to_string(),
        }
    }
}

impl ServerSettings {
    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        self.bind
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid server.bind `{}`: {}", self.bind, e))
    }
}

/// Loads `config/dashboard.*` (optional) with `DASHBOARD__` environment overrides.
pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    load_dashboard_config_with(dashboard_environment())
}

/// `DASHBOARD__SERVER__BIND` maps to `server.bind`.
fn dashboard_environment() -> config::Environment {
    config::Environment::with_prefix("DASHBOARD").separator("__")
}

fn load_dashboard_config_with(
    environment: config::Environment,
) -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(environment)
        .build()?;

    Ok(settings.try_deserialize()?)
}

pub fn parse_dashboard_config(toml: &str) -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::from_str(toml, config::FileFormat::Toml))
        .build()?;

    Ok(settings.try_deserialize()?)
}
