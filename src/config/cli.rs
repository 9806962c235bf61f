use crate::config::toml_config::TomlConfig;
use crate::config::Settings;
use crate::core::countries::{DEFAULT_COUNTRIES_ENDPOINT, DEFAULT_COUNTRIES_TITLE};
use crate::core::universities::DEFAULT_UNIVERSITIES_ENDPOINT;
use crate::utils::error::Result;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "uni-finder")]
#[command(about = "Browse countries by flag and list their universities", version)]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_COUNTRIES_ENDPOINT)]
    pub countries_endpoint: String,

    #[arg(long, default_value = DEFAULT_UNIVERSITIES_ENDPOINT)]
    pub universities_endpoint: String,

    #[arg(long, short = 'c', help = "Country code to open directly, e.g. UA")]
    pub country: Option<String>,

    #[arg(long, help = "Request timeout in seconds (transport default when unset)")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Show domains and web pages under each university")]
    pub details: bool,

    #[arg(long, help = "TOML file whose values override the flags above")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

impl CliConfig {
    pub fn to_settings(&self) -> Result<Settings> {
        let mut settings = Settings {
            countries_endpoint: self.countries_endpoint.clone(),
            universities_endpoint: self.universities_endpoint.clone(),
            timeout_seconds: self.timeout_seconds,
            countries_title: DEFAULT_COUNTRIES_TITLE.to_string(),
            show_details: self.details,
            country: self.country.clone(),
            ..Settings::default()
        };

        if let Some(path) = &self.config {
            tracing::debug!("Loading config file: {}", path.display());
            TomlConfig::from_file(path)?.apply_to(&mut settings);
        }

        Ok(settings)
    }
}
