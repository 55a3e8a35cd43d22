//! Client-side access to the COVID-19 reports API.
//!
//! Reports come back with English country names; [`i18n`] maps them to
//! Portuguese for display and maps user input back for queries. The
//! [`fetcher::ReportFetcher`] drives requests and publishes results, a
//! loading flag and an error message through a [`store::ReportStore`].

pub mod config;
pub mod covid_api;
pub mod fetcher;
pub mod i18n;
pub mod report;
pub mod store;

pub use covid_api::CovidApi;
pub use fetcher::{FetchError, ReportFetcher};
pub use report::{Region, Report, SortOrder};
pub use store::ReportStore;
