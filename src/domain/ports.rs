use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn countries_endpoint(&self) -> &str;
    fn universities_endpoint(&self) -> &str;
    fn timeout(&self) -> Option<Duration>;
    fn user_agent(&self) -> Option<&str>;
    fn countries_title(&self) -> &str;
    fn show_details(&self) -> bool;
    fn preselected_country(&self) -> Option<&str>;
}

/// What a list screen shows: a fetch function plus a row formatter.
#[async_trait]
pub trait ListSource: Send + Sync + 'static {
    type Item: Clone + Send + 'static;

    fn title(&self) -> String;

    async fn fetch(&self) -> Result<Vec<Self::Item>>;

    fn format_row(&self, item: &Self::Item) -> String;

    fn format_details(&self, _item: &Self::Item) -> Vec<String> {
        Vec::new()
    }
}

/// Read side of a list, consumed by renderers.
pub trait ListDataProvider {
    fn title(&self) -> &str;

    fn row_count(&self) -> usize;

    fn row_label(&self, index: usize) -> Option<String>;

    fn row_details(&self, _index: usize) -> Vec<String> {
        Vec::new()
    }
}
