pub mod app;
pub mod countries;
pub mod flag;
pub mod screen;
pub mod universities;

pub use crate::domain::model::{CountryEntry, CountryRow, Region, UniversityEntry};
pub use crate::domain::ports::{ConfigProvider, ListDataProvider, ListSource};
pub use crate::utils::error::Result;
