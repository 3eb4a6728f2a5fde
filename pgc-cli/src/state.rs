//! Session state for the dashboard front end.
//!
//! Tracks which period is active and the analysis produced for it. The
//! analysis is ephemeral by design: any change to the underlying history
//! discards it, so a stale narrative is never shown against fresh numbers.

use chrono::NaiveDate;
use pgc_analysis::AnalysisResponse;

#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    active_period: Option<NaiveDate>,
    analysis: Option<AnalysisResponse>,
}

impl DashboardState {
    /// Starts a session with the latest period of `history` active.
    pub fn new(history: &[NaiveDate]) -> Self {
        Self {
            active_period: history.last().copied(),
            analysis: None,
        }
    }

    pub fn active_period(&self) -> Option<NaiveDate> {
        self.active_period
    }

    pub fn analysis(&self) -> Option<&AnalysisResponse> {
        self.analysis.as_ref()
    }

    /// Makes `period` the active one. Switching periods invalidates the
    /// cached analysis.
    pub fn select(&mut self, period: NaiveDate) {
        if self.active_period != Some(period) {
            self.analysis = None;
        }
        self.active_period = Some(period);
    }

    /// Stores the analysis produced for the active period.
    pub fn set_analysis(&mut self, analysis: AnalysisResponse) {
        self.analysis = Some(analysis);
    }

    /// A record was added or edited: the narrative no longer matches the
    /// numbers, so drop it.
    pub fn on_record_saved(&mut self, period: NaiveDate) {
        self.analysis = None;
        self.active_period = Some(period);
    }

    /// A record was deleted. If it was the active one, fall back to the
    /// last remaining period, or to none when the history is empty.
    pub fn on_record_deleted(&mut self, deleted: NaiveDate, remaining: &[NaiveDate]) {
        self.analysis = None;
        if self.active_period == Some(deleted) || self.active_period.is_none() {
            self.active_period = remaining.last().copied();
        }
    }
}
