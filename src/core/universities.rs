use crate::adapters::http::ApiClient;
use crate::core::screen::ListScreen;
use crate::domain::model::{CountryEntry, UniversityEntry};
use crate::domain::ports::ListSource;
use crate::utils::error::Result;
use async_trait::async_trait;

pub const DEFAULT_UNIVERSITIES_ENDPOINT: &str = "http://universities.hipolabs.com/search";

/// Searches universities for one country.
pub struct UniversitySource {
    client: ApiClient,
    endpoint: String,
    country: CountryEntry,
}

impl UniversitySource {
    pub fn new(client: ApiClient, endpoint: impl Into<String>, country: CountryEntry) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            country,
        }
    }

    pub fn country(&self) -> &CountryEntry {
        &self.country
    }
}

#[async_trait]
impl ListSource for UniversitySource {
    type Item = UniversityEntry;

    fn title(&self) -> String {
        self.country.country.clone()
    }

    async fn fetch(&self) -> Result<Vec<UniversityEntry>> {
        tracing::info!("🎓 Fetching universities for: {}", self.country.country);
        self.client
            .get_json(&self.endpoint, &[("country", self.country.country.as_str())])
            .await
    }

    fn format_row(&self, item: &UniversityEntry) -> String {
        format!("{} ({})", item.name, item.alpha_two_code)
    }

    fn format_details(&self, item: &UniversityEntry) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(state) = item.state_province.as_deref().filter(|s| !s.is_empty()) {
            lines.push(format!("region: {}", state));
        }
        if !item.domains.is_empty() {
            lines.push(format!("domains: {}", item.domains.join(", ")));
        }
        for page in &item.web_pages {
            lines.push(format!("web: {}", page));
        }
        lines
    }
}

pub type UniversityListScreen = ListScreen<UniversitySource>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::screen::ScreenState;
    use crate::domain::model::Region;
    use crate::domain::ports::ListDataProvider;
    use httpmock::prelude::*;

    fn ukraine() -> CountryEntry {
        CountryEntry {
            country: "Ukraine".to_string(),
            region: Region::Europe,
        }
    }

    fn screen_for(server: &MockServer, country: CountryEntry) -> UniversityListScreen {
        ListScreen::new(UniversitySource::new(
            ApiClient::default(),
            server.url("/search"),
            country,
        ))
    }

    #[tokio::test]
    async fn test_rows_use_name_and_code() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/search")
                .query_param("country", "Ukraine");
            then.status(200).json_body(serde_json::json!([
                {
                    "name": "Kyiv Polytechnic Institute",
                    "domains": ["kpi.ua"],
                    "alpha_two_code": "UA",
                    "state-province": null,
                    "web_pages": ["https://kpi.ua/"],
                    "country": "Ukraine"
                },
                {
                    "name": "Lviv Polytechnic National University",
                    "domains": ["lp.edu.ua"],
                    "alpha_two_code": "UA",
                    "state-province": "Lviv",
                    "web_pages": ["https://lpnu.ua/"],
                    "country": "Ukraine"
                }
            ]));
        });

        let mut screen = screen_for(&server, ukraine());
        let state = screen.load().await;

        api_mock.assert();
        assert_eq!(state, ScreenState::Populated);
        assert_eq!(screen.row_count(), 2);
        assert_eq!(
            screen.row_label(0),
            Some("Kyiv Polytechnic Institute (UA)".to_string())
        );
        assert_eq!(
            screen.row_details(1),
            vec![
                "region: Lviv".to_string(),
                "domains: lp.edu.ua".to_string(),
                "web: https://lpnu.ua/".to_string(),
            ]
        );
        assert_eq!(screen.title(), "Ukraine");
    }

    #[tokio::test]
    async fn test_empty_array_gives_no_rows() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/search");
            then.status(200).json_body(serde_json::json!([]));
        });

        let mut screen = screen_for(&server, ukraine());

        assert_eq!(screen.load().await, ScreenState::Empty);
        assert_eq!(screen.row_count(), 0);
        assert!(screen.last_error().is_none());
    }

    #[tokio::test]
    async fn test_country_name_with_spaces_is_encoded() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/search")
                .query_param("country", "Bosnia and Herzegovina");
            then.status(200).json_body(serde_json::json!([
                {
                    "name": "University of Sarajevo",
                    "domains": ["unsa.ba"],
                    "alpha_two_code": "BA",
                    "web_pages": ["https://www.unsa.ba/"],
                    "country": "Bosnia and Herzegovina"
                }
            ]));
        });

        let country = CountryEntry {
            country: "Bosnia and Herzegovina".to_string(),
            region: Region::Europe,
        };
        let mut screen = screen_for(&server, country);
        screen.load().await;

        api_mock.assert();
        assert_eq!(
            screen.row_label(0),
            Some("University of Sarajevo (BA)".to_string())
        );
    }

    #[tokio::test]
    async fn test_malformed_json_keeps_prior_rows() {
        let server = MockServer::start();
        let mut good = server.mock(|when, then| {
            when.method(GET).path("/search");
            then.status(200).json_body(serde_json::json!([
                {
                    "name": "Kyiv Polytechnic Institute",
                    "domains": [],
                    "alpha_two_code": "UA",
                    "web_pages": [],
                    "country": "Ukraine"
                }
            ]));
        });

        let mut screen = screen_for(&server, ukraine());
        screen.load().await;
        assert_eq!(screen.row_count(), 1);

        good.delete();
        server.mock(|when, then| {
            when.method(GET).path("/search");
            then.status(200).body("[{\"name\": ");
        });

        assert_eq!(screen.load().await, ScreenState::Populated);
        assert_eq!(screen.row_count(), 1);
        assert!(screen.last_error().is_some());
    }
}
