use crate::adapters::http::ApiClient;
use crate::adapters::terminal::TerminalRenderer;
use crate::core::countries::{CountryListScreen, CountrySource};
use crate::domain::model::CountryEntry;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{AppError, Result};
use std::io::{BufRead, Write};

/// What a run ended up showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub countries: usize,
    pub selected: Option<CountryEntry>,
    pub universities: usize,
}

/// Drives the country screen, the selection and the university screen.
pub struct App<C: ConfigProvider> {
    config: C,
    client: ApiClient,
}

impl<C: ConfigProvider> App<C> {
    pub fn new(config: C) -> Result<Self> {
        let client = ApiClient::from_config(&config)?;
        Ok(Self { config, client })
    }

    pub fn with_client(config: C, client: ApiClient) -> Self {
        Self { config, client }
    }

    pub async fn run<R: BufRead, W: Write>(&self, input: R, output: W) -> Result<RunSummary> {
        let mut renderer = TerminalRenderer::new(output).with_details(self.config.show_details());

        let source = CountrySource::new(self.client.clone(), self.config.countries_endpoint())
            .with_title(self.config.countries_title());
        let mut countries = CountryListScreen::new(source);
        countries.load().await;
        renderer.render(&countries)?;

        let mut summary = RunSummary {
            countries: countries.row_count(),
            selected: None,
            universities: 0,
        };

        if countries.row_count() == 0 {
            tracing::warn!("No countries to choose from");
            return Ok(summary);
        }

        let index = match self.config.preselected_country() {
            Some(code) => countries
                .position_of_code(code)
                .ok_or_else(|| AppError::SelectionError {
                    selection: code.to_string(),
                })?,
            None => match prompt_selection(&countries, input, &mut renderer)? {
                Some(index) => index,
                None => {
                    tracing::debug!("No selection made");
                    return Ok(summary);
                }
            },
        };

        let Some(mut universities) =
            countries.select(index, self.config.universities_endpoint())
        else {
            return Err(AppError::SelectionError {
                selection: (index + 1).to_string(),
            });
        };

        universities.load().await;
        renderer.render(&universities)?;

        summary.selected = Some(universities.source().country().clone());
        summary.universities = universities.row_count();
        Ok(summary)
    }
}

/// Reads lines until one names a row (1-based index or code). `None` on a
/// blank line or end of input.
fn prompt_selection<R: BufRead, W: Write>(
    countries: &CountryListScreen,
    input: R,
    renderer: &mut TerminalRenderer<W>,
) -> Result<Option<usize>> {
    let count = countries.row_count();
    let prompt = format!("\nSelect a country [1-{}] or code (blank to quit): ", count);
    renderer.prompt(&prompt)?;

    for line in input.lines() {
        let line = line?;
        let choice = line.trim();
        if choice.is_empty() {
            return Ok(None);
        }

        if let Ok(number) = choice.parse::<usize>() {
            if (1..=count).contains(&number) {
                return Ok(Some(number - 1));
            }
        } else if let Some(index) = countries.position_of_code(choice) {
            return Ok(Some(index));
        }

        renderer.line(&format!("No country matches '{}'", choice))?;
        renderer.prompt(&prompt)?;
    }

    Ok(None)
}
