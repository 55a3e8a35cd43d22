use crate::report::SortOrder;
use anyhow::{Context, Result};

pub const DEFAULT_API_URL: &str = "https://covid-api.com/api/reports";
pub const DEFAULT_COUNTRIES: &str = "BRA,USA,CHN,IND,JPN";

#[derive(Debug, Clone)]
pub struct Config {
    // Reports API
    pub api_url: String,

    // Listing
    pub default_countries: Vec<String>,
    pub sort_order: SortOrder,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            api_url: std::env::var("COVID_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),

            default_countries: parse_iso_list(
                &std::env::var("DEFAULT_COUNTRIES")
                    .unwrap_or_else(|_| DEFAULT_COUNTRIES.to_string()),
            ),

            sort_order: match std::env::var("SORT_ORDER") {
                Ok(value) => value.parse().context("Invalid SORT_ORDER")?,
                Err(_) => SortOrder::default(),
            },
        })
    }
}

/// Split a comma-separated list of ISO codes, upper-casing and dropping blanks.
fn parse_iso_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|code| code.trim().to_uppercase())
        .filter(|code| !code.is_empty())
        .collect()
}
