pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use config::{toml_config::TomlConfig, Settings};
pub use domain::model::{CountryEntry, CountryRow, Region, UniversityEntry};
pub use crate::core::{
    app::{App, RunSummary},
    countries::{CountryListScreen, CountrySource},
    flag::flag_emoji,
    screen::{ListScreen, ScreenState},
    universities::{UniversityListScreen, UniversitySource},
};
pub use utils::error::{AppError, Result};
