#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::countries::{DEFAULT_COUNTRIES_ENDPOINT, DEFAULT_COUNTRIES_TITLE};
use crate::core::universities::DEFAULT_UNIVERSITIES_ENDPOINT;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Fully resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub countries_endpoint: String,
    pub universities_endpoint: String,
    pub timeout_seconds: Option<u64>,
    pub user_agent: Option<String>,
    pub countries_title: String,
    pub show_details: bool,
    pub country: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            countries_endpoint: DEFAULT_COUNTRIES_ENDPOINT.to_string(),
            universities_endpoint: DEFAULT_UNIVERSITIES_ENDPOINT.to_string(),
            timeout_seconds: None,
            user_agent: Some(concat!("uni-finder/", env!("CARGO_PKG_VERSION")).to_string()),
            countries_title: DEFAULT_COUNTRIES_TITLE.to_string(),
            show_details: false,
            country: None,
        }
    }
}

impl ConfigProvider for Settings {
    fn countries_endpoint(&self) -> &str {
        &self.countries_endpoint
    }

    fn universities_endpoint(&self) -> &str {
        &self.universities_endpoint
    }

    fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }

    fn countries_title(&self) -> &str {
        &self.countries_title
    }

    fn show_details(&self) -> bool {
        self.show_details
    }

    fn preselected_country(&self) -> Option<&str> {
        self.country.as_deref()
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_url("countries_endpoint", &self.countries_endpoint)?;
        validation::validate_url("universities_endpoint", &self.universities_endpoint)?;

        if let Some(timeout) = self.timeout_seconds {
            validation::validate_positive_number("timeout_seconds", timeout, 1)?;
        }
        if let Some(country) = &self.country {
            validation::validate_non_empty_string("country", country)?;
        }

        Ok(())
    }
}
