//! Observable fetch state: the current reports, a loading flag and the last
//! error message.
//!
//! Each field is its own `tokio::sync::watch` channel, so an observer can
//! follow just the one it renders. Cloning a store hands out another handle
//! to the same channels.

use crate::report::Report;
use std::sync::Arc;
use tokio::sync::watch;

#[derive(Debug, Clone)]
pub struct ReportStore {
    inner: Arc<Channels>,
}

#[derive(Debug)]
struct Channels {
    reports: watch::Sender<Vec<Report>>,
    loading: watch::Sender<bool>,
    error: watch::Sender<Option<String>>,
}

impl ReportStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Channels {
                reports: watch::Sender::new(Vec::new()),
                loading: watch::Sender::new(false),
                error: watch::Sender::new(None),
            }),
        }
    }

    // ==================== Snapshots ====================

    pub fn reports(&self) -> Vec<Report> {
        self.inner.reports.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        *self.inner.loading.borrow()
    }

    pub fn error(&self) -> Option<String> {
        self.inner.error.borrow().clone()
    }

    // ==================== Subscriptions ====================

    pub fn subscribe_reports(&self) -> watch::Receiver<Vec<Report>> {
        self.inner.reports.subscribe()
    }

    pub fn subscribe_loading(&self) -> watch::Receiver<bool> {
        self.inner.loading.subscribe()
    }

    pub fn subscribe_error(&self) -> watch::Receiver<Option<String>> {
        self.inner.error.subscribe()
    }

    // ==================== Transitions ====================
    // `send_replace` is used throughout: it stores the value even when no
    // receiver is alive.

    /// Entering a fetch: clear the previous error and raise the loading flag.
    pub(crate) fn begin(&self) {
        self.inner.error.send_replace(None);
        self.inner.loading.send_replace(true);
    }

    pub(crate) fn succeed(&self, reports: Vec<Report>) {
        self.inner.reports.send_replace(reports);
    }

    /// Publish a failure. Reports already in the store are left as they are.
    pub(crate) fn fail(&self, message: String) {
        self.inner.error.send_replace(Some(message));
    }

    pub(crate) fn finish(&self) {
        self.inner.loading.send_replace(false);
    }
}

impl Default for ReportStore {
    fn default() -> Self {
        Self::new()
    }
}
