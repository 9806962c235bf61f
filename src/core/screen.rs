use crate::domain::ports::{ListDataProvider, ListSource};
use crate::utils::error::{AppError, Result};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState {
    Loading,
    Populated,
    Empty,
}

/// A list screen backed by a [`ListSource`].
///
/// `load` runs the fetch on a runtime worker and applies the outcome on the
/// calling task, so the rows are only ever touched by the screen's owner.
/// Failed or empty fetches never clear rows that are already shown.
pub struct ListScreen<S: ListSource> {
    source: Arc<S>,
    title: String,
    rows: Vec<S::Item>,
    state: ScreenState,
    last_error: Option<AppError>,
}

impl<S: ListSource> ListScreen<S> {
    pub fn new(source: S) -> Self {
        let title = source.title();
        Self {
            source: Arc::new(source),
            title,
            rows: Vec::new(),
            state: ScreenState::Loading,
            last_error: None,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub async fn load(&mut self) -> ScreenState {
        tracing::debug!("Loading screen '{}'", self.title);
        self.state = ScreenState::Loading;

        let source = Arc::clone(&self.source);
        let outcome = match tokio::spawn(async move { source.fetch().await }).await {
            Ok(result) => result,
            Err(join_error) => Err(AppError::TaskError(join_error)),
        };

        self.apply(outcome);
        self.state
    }

    pub fn apply(&mut self, outcome: Result<Vec<S::Item>>) {
        match outcome {
            Ok(rows) if !rows.is_empty() => {
                tracing::info!("📋 '{}': {} rows", self.title, rows.len());
                self.rows = rows;
                self.last_error = None;
            }
            Ok(_) => {
                tracing::info!("📭 '{}': nothing returned", self.title);
                self.last_error = None;
            }
            Err(e) => {
                tracing::warn!("⚠️ '{}' failed to load: {}", self.title, e);
                self.last_error = Some(e);
            }
        }

        self.state = if self.rows.is_empty() {
            ScreenState::Empty
        } else {
            ScreenState::Populated
        };
    }

    pub fn state(&self) -> ScreenState {
        self.state
    }

    pub fn last_error(&self) -> Option<&AppError> {
        self.last_error.as_ref()
    }

    pub fn rows(&self) -> &[S::Item] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&S::Item> {
        self.rows.get(index)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

impl<S: ListSource> ListDataProvider for ListScreen<S> {
    fn title(&self) -> &str {
        &self.title
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn row_label(&self, index: usize) -> Option<String> {
        self.rows.get(index).map(|item| self.source.format_row(item))
    }

    fn row_details(&self, index: usize) -> Vec<String> {
        self.rows
            .get(index)
            .map(|item| self.source.format_details(item))
            .unwrap_or_default()
    }
}
