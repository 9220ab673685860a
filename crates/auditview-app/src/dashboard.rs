//! Dashboard state and the actions that mutate it.
//!
//! Every state change goes through [`Dashboard::commit`], which bumps the revision counter and
//! notifies listeners. Actions toggle `busy` on entry and always clear it on exit; failures
//! become [`Notice`]s and leave the previous state in place.

use crate::download::{Download, prepare_download};
use crate::engine::AuditEngine;
use crate::error::{DashboardError, GENERIC_LOAD_ERROR};
use auditview_domain::compliance::{AssessmentView, normalize_assessment};
use auditview_domain::gauge::{ScoreBand, gauge_dash_offset, score_band};
use auditview_domain::model::{DisplayRow, SummaryCounts};
use auditview_domain::normalize;
use auditview_domain::policy::EffectiveConfig;
use auditview_domain::sort::{SortColumn, SortDirection, SortSpec, sort_rows};
use auditview_domain::trend::{TrendView, TrendWindow, summarize_trend};
use auditview_types::ids::SNAPSHOT_TEMPLATE_NONE;
use auditview_types::{
    AuditSummaryPayload, ComplianceTemplate, EngineError, ExportKind, TrendSummary,
};
use futures::future::{join3, try_join};
use tracing::{debug, info, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Warning,
    Error,
}

/// A transient, user-facing notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    fn new(kind: NoticeKind, title: &str, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.to_string(),
            message: message.into(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardState {
    pub summary: SummaryCounts,
    /// Sorted according to `sort`.
    pub rows: Vec<DisplayRow>,
    pub sort: SortSpec,
    pub loading: bool,
    pub busy: bool,
    /// Set when the initial summary load fails; the error panel shows it.
    pub load_error: Option<String>,
    pub trend_window: TrendWindow,
    pub trend: Option<TrendView>,
    pub templates: Vec<ComplianceTemplate>,
    pub selected_template: Option<String>,
    pub assessment: Option<AssessmentView>,
    /// Incremented on every committed change.
    pub revision: u64,
}

impl DashboardState {
    pub fn has_data(&self) -> bool {
        !self.loading && self.load_error.is_none()
    }

    pub fn score_band(&self) -> ScoreBand {
        score_band(self.summary.score)
    }

    pub fn gauge_offset(&self) -> f64 {
        gauge_dash_offset(self.summary.score)
    }
}

/// Identifies one trend fetch. A response is applied only while its ticket is current.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrendTicket {
    pub window: TrendWindow,
    generation: u64,
}

type Listener = Box<dyn FnMut(&DashboardState) + Send>;

pub struct Dashboard<E> {
    engine: E,
    state: DashboardState,
    notices: Vec<Notice>,
    listeners: Vec<Listener>,
    trend_generation: u64,
}

impl<E: AuditEngine> Dashboard<E> {
    pub fn new(engine: E, config: &EffectiveConfig) -> Self {
        Self {
            engine,
            state: DashboardState {
                sort: config.sort.clone(),
                trend_window: config.trend_window,
                selected_template: config.template.clone(),
                loading: true,
                ..DashboardState::default()
            },
            notices: Vec::new(),
            listeners: Vec::new(),
            trend_generation: 0,
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Register a callback run after every committed change.
    pub fn subscribe(&mut self, listener: impl FnMut(&DashboardState) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Take all pending notices, oldest first.
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Initial retrieval of summary, templates, and trend.
    ///
    /// A failed summary resets the derived fields and sets `load_error`. A failed template or
    /// trend fetch only clears that part.
    pub async fn load(&mut self) {
        self.state.loading = true;
        self.commit();

        let ticket = self.begin_trend_fetch(self.state.trend_window);
        let (summary, templates, trend) = join3(
            self.engine.audit_summary(),
            self.engine.compliance_templates(),
            self.engine.trend_summary(ticket.window.days()),
        )
        .await;

        match summary {
            Ok(raw) => {
                self.apply_summary(&raw);
                info!(rows = self.state.rows.len(), "audit summary loaded");
            }
            Err(e) => {
                warn!(error = %e, "audit summary load failed");
                self.state.summary = SummaryCounts::default();
                self.state.rows.clear();
                self.state.load_error = Some(e.message_or(GENERIC_LOAD_ERROR));
            }
        }

        match templates {
            Ok(list) => self.state.templates = list,
            Err(e) => {
                warn!(error = %e, "compliance templates load failed");
                self.state.templates.clear();
            }
        }

        if let Err(e) = self.apply_trend(ticket, trend) {
            warn!(error = %e, "trend load failed");
            self.state.trend = None;
        }

        self.state.loading = false;
        self.commit();
    }

    /// Refetch summary and trend concurrently; the first failure wins.
    pub async fn refresh(&mut self) -> Result<(), DashboardError> {
        self.begin_action();
        let ticket = self.begin_trend_fetch(self.state.trend_window);
        let fetched = try_join(
            self.engine.audit_summary(),
            self.engine.trend_summary(ticket.window.days()),
        )
        .await;

        let result = match fetched {
            Ok((summary, trend)) => {
                self.apply_summary(&summary);
                self.apply_trend(ticket, Ok(trend)).map(|_| {
                    info!(rows = self.state.rows.len(), "audit refreshed");
                })
            }
            Err(e) => Err(e.into()),
        };
        self.end_action("Refresh failed", result)
    }

    /// Reorder the table by `column` (any key; unknown keys compare as empty text).
    pub fn sort_by(&mut self, column: &str, direction: SortDirection) {
        self.state.sort = SortSpec {
            column: SortColumn::parse(column),
            direction,
        };
        self.state.rows = sort_rows(&self.state.rows, &self.state.sort);
        self.commit();
    }

    /// Start a trend fetch for `window`, superseding any fetch in flight.
    pub fn begin_trend_fetch(&mut self, window: TrendWindow) -> TrendTicket {
        self.trend_generation += 1;
        if self.state.trend_window != window {
            self.state.trend_window = window;
            self.commit();
        }
        TrendTicket {
            window,
            generation: self.trend_generation,
        }
    }

    pub fn is_current(&self, ticket: TrendTicket) -> bool {
        ticket.generation == self.trend_generation && ticket.window == self.state.trend_window
    }

    /// Apply a trend response. Returns `Ok(false)` when the ticket is stale and the response
    /// was discarded.
    pub fn apply_trend(
        &mut self,
        ticket: TrendTicket,
        fetched: Result<TrendSummary, EngineError>,
    ) -> Result<bool, DashboardError> {
        if !self.is_current(ticket) {
            debug!(days = ticket.window.days(), "discarding stale trend response");
            return Ok(false);
        }
        let raw = fetched?;
        self.state.trend = Some(summarize_trend(&raw, ticket.window));
        self.commit();
        Ok(true)
    }

    pub async fn change_trend_window(&mut self, days: u32) -> Result<(), DashboardError> {
        let window = match TrendWindow::try_from(days) {
            Ok(w) => w,
            Err(e) => return self.end_action("Trend update failed", Err(e.into())),
        };

        self.begin_action();
        let ticket = self.begin_trend_fetch(window);
        let fetched = self.engine.trend_summary(window.days()).await;
        let result = self.apply_trend(ticket, fetched).map(|_| ());
        self.end_action("Trend update failed", result)
    }

    pub fn select_template(&mut self, template_id: Option<String>) {
        self.state.selected_template = template_id.filter(|t| !t.trim().is_empty());
        self.commit();
    }

    /// Run the selected compliance template.
    pub async fn run_assessment(&mut self) -> Result<(), DashboardError> {
        let Some(template_id) = self.state.selected_template.clone() else {
            self.notices.push(Notice::new(
                NoticeKind::Warning,
                "No template selected",
                "Select a compliance template before running an assessment.",
            ));
            return Err(DashboardError::NoTemplate);
        };

        self.begin_action();
        let result = match self.engine.run_assessment(&template_id).await {
            Ok(raw) => {
                let view = normalize_assessment(&template_id, &raw);
                info!(
                    template = %template_id,
                    controls = view.controls.len(),
                    "assessment complete"
                );
                self.state.assessment = Some(view);
                Ok(())
            }
            Err(e) => Err(e.into()),
        };
        self.end_action("Assessment failed", result)
    }

    /// Persist a snapshot tagged with the selected template (or `"None"`). Returns its id.
    pub async fn save_snapshot(&mut self) -> Result<String, DashboardError> {
        let template_name = self
            .state
            .selected_template
            .clone()
            .unwrap_or_else(|| SNAPSHOT_TEMPLATE_NONE.to_string());

        self.begin_action();
        let result = self
            .engine
            .save_snapshot(&template_name)
            .await
            .map_err(DashboardError::from);
        if let Ok(id) = &result {
            info!(snapshot = %id, template = %template_name, "snapshot saved");
            self.notices.push(Notice::new(
                NoticeKind::Success,
                "Snapshot saved",
                format!("Snapshot {id} saved."),
            ));
        }
        self.end_action("Snapshot failed", result)
    }

    /// Produce a download for `kind`. Trend exports use the current trend window.
    pub async fn export(&mut self, kind: ExportKind) -> Result<Download, DashboardError> {
        self.begin_action();
        let result = match self.engine.export(kind, self.state.trend_window.days()).await {
            Ok(raw) => prepare_download(kind, raw),
            Err(e) => Err(e.into()),
        };
        if let Ok(download) = &result {
            self.notices.push(Notice::new(
                NoticeKind::Success,
                "Export ready",
                format!("{} is ready to download.", download.file_name),
            ));
        }
        self.end_action("Export failed", result)
    }

    fn apply_summary(&mut self, raw: &AuditSummaryPayload) {
        let normalized = normalize(raw);
        self.state.summary = normalized.summary;
        self.state.rows = sort_rows(&normalized.rows, &self.state.sort);
        self.state.load_error = None;
    }

    fn begin_action(&mut self) {
        self.state.busy = true;
        self.commit();
    }

    fn end_action<T>(
        &mut self,
        title: &str,
        result: Result<T, DashboardError>,
    ) -> Result<T, DashboardError> {
        if let Err(e) = &result {
            warn!(action = title, error = %e, "dashboard action failed");
            self.notices
                .push(Notice::new(NoticeKind::Error, title, e.user_message()));
        }
        self.state.busy = false;
        self.commit();
        result
    }

    fn commit(&mut self) {
        self.state.revision += 1;
        for listener in &mut self.listeners {
            listener(&self.state);
        }
    }
}
