//! Shared application state for the API server

use crate::calendar::DateRange;
use crate::config::DashboardConfig;
use crate::dashboard::DashboardView;
use crate::pipeline::FeatureTable;
use std::borrow::Cow;
use std::sync::Arc;

/// Shared application state
///
/// The reservation table is prepared once before the server starts and is
/// never modified afterwards, so handlers read it without locking.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Prepared reservation rows
    pub table: Arc<FeatureTable>,
    /// Cutoff, peak days and locale used to build views
    pub config: Arc<DashboardConfig>,
}

impl AppState {
    /// Creates a new application state
    pub fn new(table: FeatureTable, config: DashboardConfig) -> Self {
        AppState {
            table: Arc::new(table),
            config: Arc::new(config),
        }
    }

    /// Rows checking in inside `range`, or every row when no range is given.
    pub fn select(&self, range: Option<&DateRange>) -> Cow<'_, FeatureTable> {
        match range {
            Some(range) => Cow::Owned(self.table.filter_range(range)),
            None => Cow::Borrowed(self.table.as_ref()),
        }
    }

    /// Dashboard view of the selected rows.
    pub fn view(&self, range: Option<&DateRange>) -> DashboardView {
        DashboardView::build(&self.select(range), &self.config)
    }
}
