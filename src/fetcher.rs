use crate::covid_api::CovidApi;
use crate::i18n::{to_canonical, MessageStrings};
use crate::report::Report;
use crate::store::ReportStore;
use anyhow::Context;
use futures::future::try_join_all;
use thiserror::Error;
use tracing::{info, warn};

/// Why a fetch ended without new reports.
///
/// The store only ever sees the `Display` text of this error.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The API answered, but had no records for the requested country.
    #[error("{message}")]
    NotFound { name: String, message: &'static str },

    /// Network, HTTP status or decoding failure. Displays the full context chain.
    #[error("{0:#}")]
    Transport(anyhow::Error),
}

/// Runs fetches against the reports API and publishes their outcome to a
/// [`ReportStore`].
///
/// Every operation goes `begin -> (succeed | fail) -> finish` on the store,
/// so `is_loading()` is false again once the returned future resolves.
/// Overlapping calls are not coordinated: whichever finishes last wins.
#[derive(Debug, Clone)]
pub struct ReportFetcher {
    api: CovidApi,
    store: ReportStore,
    strings: &'static MessageStrings,
}

impl ReportFetcher {
    pub fn new(api: CovidApi, store: ReportStore, strings: &'static MessageStrings) -> Self {
        Self { api, store, strings }
    }

    pub fn store(&self) -> &ReportStore {
        &self.store
    }

    /// Fetch the latest report for every region code, concurrently.
    ///
    /// On success the store holds one report per code, in input order, with
    /// display names. If any single request fails the whole batch fails and
    /// the previous reports stay in place.
    pub async fn fetch_by_codes<S>(&self, codes: &[S]) -> Result<(), FetchError>
    where
        S: AsRef<str>,
    {
        self.store.begin();
        info!("Fetching reports for {} region code(s)", codes.len());

        let requests = codes.iter().map(|code| async move {
            let code = code.as_ref();
            let reports = self.api.reports_by_iso(code).await?;
            reports
                .into_iter()
                .next()
                .map(Report::with_display_name)
                .with_context(|| format!("No report data returned for ISO code {}", code))
        });

        let outcome = try_join_all(requests).await.map_err(FetchError::Transport);
        self.publish(outcome)
    }

    /// Fetch the latest report for one country given by its display name
    /// (accents and case are ignored; unknown names are queried as typed).
    ///
    /// An empty answer is reported as [`FetchError::NotFound`].
    pub async fn fetch_by_country_name(&self, name: &str) -> Result<(), FetchError> {
        self.store.begin();

        let canonical = to_canonical(name);
        info!("Fetching reports for '{}' (queried as '{}')", name, canonical);

        let outcome = match self.api.reports_by_region_name(canonical).await {
            Ok(reports) => match reports.into_iter().next() {
                Some(report) => Ok(vec![report.with_display_name()]),
                None => Err(FetchError::NotFound {
                    name: name.to_string(),
                    message: self.strings.country_not_found,
                }),
            },
            Err(e) => Err(FetchError::Transport(e)),
        };

        self.publish(outcome)
    }

    fn publish(&self, outcome: Result<Vec<Report>, FetchError>) -> Result<(), FetchError> {
        let result = match outcome {
            Ok(reports) => {
                info!("Fetched {} report(s)", reports.len());
                self.store.succeed(reports);
                Ok(())
            }
            Err(e) => {
                warn!("Fetch failed: {}", e);
                self.store.fail(e.to_string());
                Err(e)
            }
        };
        self.store.finish();
        result
    }
}
