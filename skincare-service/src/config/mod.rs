use crate::models::{FieldSpec, LeadSchema};
use config::{builder::DefaultState, ConfigBuilder};
use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

pub const DEFAULT_LEAD_COLLECTION: &str = "lead";

#[derive(Debug, Clone)]
pub struct SkincareConfig {
    pub common: core_config::Config,
    pub database: DatabaseConfig,
    pub lead: LeadConfig,
    pub otlp_endpoint: Option<String>,
}

/// Document store location. Both values must be present for the store to be
/// used at all.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub name: Option<String>,
}

impl DatabaseConfig {
    pub fn is_configured(&self) -> bool {
        self.url.is_some() && self.name.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct LeadConfig {
    pub collection: String,
    pub schema: LeadSchema,
}

impl Default for LeadConfig {
    fn default() -> Self {
        Self {
            collection: DEFAULT_LEAD_COLLECTION.to_string(),
            schema: LeadSchema::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct Settings {
    #[serde(default)]
    database: DatabaseConfig,
    #[serde(default)]
    lead: LeadSettings,
    otlp_endpoint: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct LeadSettings {
    collection: Option<String>,
    #[serde(default)]
    fields: Vec<FieldSpec>,
}

impl SkincareConfig {
    /// Loads from the optional `configuration` file and `APP__*` variables,
    /// with the plain `DATABASE_URL`, `DATABASE_NAME`, `LEAD_COLLECTION`,
    /// `LEAD_FIELDS` and `OTLP_ENDPOINT` variables taking precedence.
    pub fn load() -> Result<Self, AppError> {
        Self::from_builder(core_config::Config::load()?, core_config::builder()?)
    }

    fn from_builder(
        common: core_config::Config,
        builder: ConfigBuilder<DefaultState>,
    ) -> Result<Self, AppError> {
        let settings: Settings = builder
            .set_override_option("database.url", non_empty_env("DATABASE_URL"))?
            .set_override_option("database.name", non_empty_env("DATABASE_NAME"))?
            .set_override_option("lead.collection", non_empty_env("LEAD_COLLECTION"))?
            .set_override_option("otlp_endpoint", non_empty_env("OTLP_ENDPOINT"))?
            .build()?
            .try_deserialize()?;

        let schema = match non_empty_env("LEAD_FIELDS") {
            Some(spec) => spec.parse()?,
            None if settings.lead.fields.is_empty() => LeadSchema::default(),
            None => LeadSchema::new(settings.lead.fields)?,
        };

        Ok(SkincareConfig {
            common,
            database: settings.database,
            lead: LeadConfig {
                collection: settings
                    .lead
                    .collection
                    .unwrap_or_else(|| DEFAULT_LEAD_COLLECTION.to_string()),
                schema,
            },
            otlp_endpoint: settings.otlp_endpoint,
        })
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
