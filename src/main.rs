//! Terminal front end for the reports store.
//!
//! Usage:
//!   covid-reports                  # Latest reports for DEFAULT_COUNTRIES
//!   covid-reports Nova Zelândia    # Latest report for one country, by display name
//!
//! Optional environment variables:
//! - COVID_API_URL (defaults to https://covid-api.com/api/reports)
//! - DEFAULT_COUNTRIES (defaults to BRA,USA,CHN,IND,JPN)
//! - SORT_ORDER: alphabetical | confirmed | none (defaults to alphabetical)

use anyhow::Result;
use covid_reports::config::Config;
use covid_reports::i18n::MessageStrings;
use covid_reports::report::sort_reports;
use covid_reports::{CovidApi, Report, ReportFetcher, ReportStore};
use std::fmt::Write;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("covid_reports=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let strings = MessageStrings::portuguese();

    let store = ReportStore::new();
    let fetcher = ReportFetcher::new(CovidApi::new(config.api_url.as_str()), store.clone(), strings);

    let mut loading = store.subscribe_loading();
    tokio::spawn(async move {
        while loading.changed().await.is_ok() {
            if *loading.borrow_and_update() {
                eprintln!("{}", strings.loading);
            }
        }
    });

    let query = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    let outcome = if query.trim().is_empty() {
        info!("Fetching default countries: {}", config.default_countries.join(", "));
        fetcher.fetch_by_codes(&config.default_countries).await
    } else {
        fetcher.fetch_by_country_name(query.trim()).await
    };

    if outcome.is_err() {
        eprintln!("{}", store.error().unwrap_or_default());
        std::process::exit(1);
    }

    let mut reports = store.reports();
    sort_reports(&mut reports, config.sort_order);
    print!("{}", render_listing(&reports, strings));

    Ok(())
}

fn render_listing(reports: &[Report], strings: &MessageStrings) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", strings.listing_header);

    if reports.is_empty() {
        let _ = writeln!(out, "{}", strings.no_reports);
        return out;
    }

    for report in reports {
        let _ = writeln!(out);
        let _ = writeln!(out, "{} ({})", report.region.name, report.region.iso);
        if !report.region.province.is_empty() {
            let _ = writeln!(out, "  {}", report.region.province);
        }
        let _ = writeln!(out, "  {}: {}", strings.label_date, report.date);
        let _ = writeln!(out, "  {}: {}", strings.label_confirmed, report.confirmed);
        let _ = writeln!(out, "  {}: {}", strings.label_deaths, report.deaths);
        let _ = writeln!(out, "  {}: {}", strings.label_recovered, report.recovered);
        let _ = writeln!(out, "  {}: {}", strings.label_active, report.active);
        let _ = writeln!(
            out,
            "  {}: {:.4}",
            strings.label_fatality_rate, report.fatality_rate
        );
    }

    out
}
