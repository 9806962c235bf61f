use crate::adapters::http::ApiClient;
use crate::core::flag::flag_emoji;
use crate::core::screen::ListScreen;
use crate::core::universities::{UniversityListScreen, UniversitySource};
use crate::domain::model::{CountriesEnvelope, CountryRow};
use crate::domain::ports::ListSource;
use crate::utils::error::{AppError, Result};
use async_trait::async_trait;

pub const DEFAULT_COUNTRIES_ENDPOINT: &str = "https://api.first.org/data/v1/countries";
pub const DEFAULT_COUNTRIES_TITLE: &str = "Countries of the World";

/// Fetches the country dataset and labels each row with its flag.
pub struct CountrySource {
    client: ApiClient,
    endpoint: String,
    title: String,
}

impl CountrySource {
    pub fn new(client: ApiClient, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            title: DEFAULT_COUNTRIES_TITLE.to_string(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

#[async_trait]
impl ListSource for CountrySource {
    type Item = CountryRow;

    fn title(&self) -> String {
        self.title.clone()
    }

    async fn fetch(&self) -> Result<Vec<CountryRow>> {
        tracing::info!("🌍 Fetching countries from: {}", self.endpoint);
        let envelope: CountriesEnvelope = self.client.get_json(&self.endpoint, &[]).await?;

        if envelope.status_code != 200 {
            return Err(AppError::ApiStatusError {
                status_code: envelope.status_code,
            });
        }

        Ok(envelope
            .data
            .into_iter()
            .map(|(code, entry)| CountryRow { code, entry })
            .collect())
    }

    fn format_row(&self, item: &CountryRow) -> String {
        flag_emoji(&item.code)
    }

    fn format_details(&self, item: &CountryRow) -> Vec<String> {
        vec![format!("{} · {} · {}", item.code, item.entry.country, item.entry.region)]
    }
}

pub type CountryListScreen = ListScreen<CountrySource>;

impl CountryListScreen {
    /// Finds a row by its dataset code, ignoring case.
    pub fn position_of_code(&self, code: &str) -> Option<usize> {
        let code = code.trim();
        self.rows()
            .iter()
            .position(|row| row.code.eq_ignore_ascii_case(code))
    }

    /// Builds the university screen for the row at `index`.
    pub fn select(&self, index: usize, universities_endpoint: &str) -> Option<UniversityListScreen> {
        let row = self.row(index)?;
        tracing::info!("➡️ Selected {} ({})", row.entry.country, row.code);
        let source = UniversitySource::new(
            self.source().client.clone(),
            universities_endpoint,
            row.entry.clone(),
        );
        Some(ListScreen::new(source))
    }
}
