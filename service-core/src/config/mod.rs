use crate::error::AppError;
use config::{Config as Cfg, ConfigBuilder, File, builder::DefaultState};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    8000
}

/// Layered sources shared by every service: optional `configuration` file,
/// then `APP__*` variables, then the bare `PORT` variable used by hosting
/// platforms.
pub fn builder() -> Result<ConfigBuilder<DefaultState>, AppError> {
    dotenvy::dotenv().ok();

    Ok(Cfg::builder()
        .add_source(File::with_name("configuration").required(false))
        .add_source(config::Environment::with_prefix("APP").separator("__"))
        .set_override_option("port", std::env::var("PORT").ok())?)
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        let config = builder()?.build()?;

        Ok(config.try_deserialize()?)
    }
}
