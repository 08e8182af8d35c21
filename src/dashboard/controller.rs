//! Dashboard controller
//!
//! Owns the per-widget state machines and drives a `DashboardView`. A
//! submission is split in two halves so the request itself can run on a
//! separate task: `begin_submission` validates the input and takes a loading
//! guard, `complete_submission` applies whatever came back.

use super::loading::{LoadingGuard, LoadingIndicator};
use super::toast::Toast;
use super::view::DashboardView;
use super::widget::StatWidget;
use crate::analysis::error::ApiError;
use crate::analysis::{Analysis, AnalysisApi, AnalysisRequest, Interval, Ticker, ValidationError};
use crate::consts::dashboard_consts::{MAX_ACTIVITY_LOGS, chart, timing};
use crate::error_classifier::ErrorClassifier;
use crate::events::{Event, EventType};
use crate::logging::LogLevel;
use crate::render::{
    PredictionsPanel, StatValue, build_figure, format_price_change, price_stat, rsi_stat,
    signal_stat,
};
use std::collections::VecDeque;
use std::time::Instant;

#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// An accepted submission. Dropping it releases its share of the loading indicator.
#[derive(Debug)]
pub struct Submission {
    pub request: AnalysisRequest,
    pub seq: u64,
    _guard: LoadingGuard,
}

/// What `complete_submission` did with a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Rendered,
    /// A newer submission had already been applied.
    Stale,
}

pub struct DashboardController<V: DashboardView> {
    view: V,
    price: StatWidget<StatValue>,
    signal: StatWidget<StatValue>,
    toast: Toast,
    loading: LoadingIndicator,
    loading_shown: bool,
    next_seq: u64,
    latest_applied_seq: u64,
    last_rendered: Option<Analysis>,
    activity: VecDeque<Event>,
    classifier: ErrorClassifier,
}

impl<V: DashboardView> DashboardController<V> {
    pub fn new(view: V) -> Self {
        Self {
            view,
            price: StatWidget::new(timing::stat_transition()),
            signal: StatWidget::new(timing::stat_transition()),
            toast: Toast::new(timing::toast_visible()),
            loading: LoadingIndicator::default(),
            loading_shown: false,
            next_seq: 0,
            latest_applied_seq: 0,
            last_rendered: None,
            activity: VecDeque::new(),
            classifier: ErrorClassifier::new(),
        }
    }

    /// Validates the input and, when it is usable, registers a new in-flight submission.
    pub fn begin_submission(
        &mut self,
        ticker_input: &str,
        interval: Interval,
    ) -> Result<Submission, ValidationError> {
        let ticker = match Ticker::parse(ticker_input) {
            Ok(ticker) => ticker,
            Err(e) => {
                self.view.set_input_error(Some(e.to_string()));
                self.add_event(Event::controller_with_level(
                    e.to_string(),
                    EventType::Error,
                    LogLevel::Warn,
                ));
                return Err(e);
            }
        };
        self.view.set_input_error(None);

        self.next_seq += 1;
        let submission = Submission {
            request: AnalysisRequest::new(ticker, interval),
            seq: self.next_seq,
            _guard: self.loading.acquire(),
        };
        self.sync_loading();

        self.add_event(Event::network_with_level(
            format!(
                "Analyzing {} ({})",
                submission.request.ticker, submission.request.interval
            ),
            EventType::Refresh,
            LogLevel::Info,
        ));
        Ok(submission)
    }

    /// Applies the result of a submission. Failures are shown as a toast and
    /// handed back to the caller.
    pub fn complete_submission(
        &mut self,
        submission: Submission,
        result: Result<Analysis, ApiError>,
        now: Instant,
    ) -> Result<Completion, ApiError> {
        let seq = submission.seq;
        let outcome = if seq < self.latest_applied_seq {
            log::debug!(
                "Dropping stale response #{} for {} (latest applied #{})",
                seq,
                submission.request.ticker,
                self.latest_applied_seq
            );
            Ok(Completion::Stale)
        } else {
            self.latest_applied_seq = seq;
            match result {
                Ok(analysis) => {
                    self.render(analysis, now);
                    Ok(Completion::Rendered)
                }
                Err(error) => {
                    self.surface_error(&error, now);
                    Err(error)
                }
            }
        };

        drop(submission);
        self.sync_loading();
        outcome
    }

    /// Runs one full submission against `api` on the current task.
    pub async fn submit<A: AnalysisApi + ?Sized>(
        &mut self,
        api: &A,
        ticker_input: &str,
        interval: Interval,
    ) -> Result<Completion, DashboardError> {
        let submission = self.begin_submission(ticker_input, interval)?;
        let result = api.analyze(&submission.request).await;
        Ok(self.complete_submission(submission, result, Instant::now())?)
    }

    /// Advances the stat transitions and the toast timer.
    pub fn tick(&mut self, now: Instant) {
        if let Some(stat) = self.price.poll(now) {
            self.view.set_price(&stat);
        }
        if let Some(stat) = self.signal.poll(now) {
            self.view.set_signal(&stat);
        }
        if self.toast.poll(now) {
            self.view.hide_toast();
        }
        // guards released by aborted tasks only show up here
        self.sync_loading();
    }

    fn render(&mut self, analysis: Analysis, now: Instant) {
        if self.price.schedule(price_stat(&analysis), now) {
            log::debug!("Price update replaced a pending value");
        }
        self.view.set_price_change(&format_price_change(
            analysis.price_change,
            analysis.price_change_percent,
        ));
        self.signal.schedule(signal_stat(analysis.signal), now);
        self.view.set_rsi(&rsi_stat(analysis.rsi));
        self.view
            .set_predictions(&PredictionsPanel::from_analysis(&analysis));

        match analysis
            .chart
            .as_ref()
            .and_then(|data| build_figure(&analysis.ticker, data))
        {
            Some(figure) => {
                self.view.new_plot(
                    chart::CONTAINER_ID,
                    &figure.traces,
                    &figure.layout,
                    &figure.config,
                );
            }
            None => {
                self.add_event(Event::renderer_with_level(
                    format!("No chart data available for {}", analysis.ticker),
                    EventType::Warning,
                    LogLevel::Warn,
                ));
            }
        }

        self.add_event(Event::renderer_with_level(
            format!("Rendered analysis for {}", analysis.ticker),
            EventType::Success,
            LogLevel::Info,
        ));
        self.last_rendered = Some(analysis);
    }

    fn surface_error(&mut self, error: &ApiError, now: Instant) {
        if let ApiError::Http { status, body } = error {
            log::debug!("HTTP {} response body: {}", status, body);
        }
        let message = error.user_message();
        self.toast.show(message.clone(), now);
        self.view.show_toast(&message);
        self.add_event(Event::network_with_level(
            error.to_string(),
            EventType::Error,
            self.classifier.classify_api_error(error),
        ));
    }

    fn sync_loading(&mut self) {
        let visible = self.loading.is_visible();
        if visible != self.loading_shown {
            self.loading_shown = visible;
            self.view.set_loading_visible(visible);
        }
    }

    fn add_event(&mut self, event: Event) {
        log::log!(log::Level::from(event.log_level), "{}", event.msg);
        if self.activity.len() >= MAX_ACTIVITY_LOGS {
            self.activity.pop_front();
        }
        self.activity.push_back(event);
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn last_rendered(&self) -> Option<&Analysis> {
        self.last_rendered.as_ref()
    }

    pub fn activity(&self) -> &VecDeque<Event> {
        &self.activity
    }

    pub fn toast(&self) -> &Toast {
        &self.toast
    }

    pub fn is_price_transitioning(&self) -> bool {
        self.price.is_transitioning()
    }

    pub fn is_signal_transitioning(&self) -> bool {
        self.signal.is_transitioning()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::MockAnalysisApi;
    use crate::analysis::response::decode_analysis;
    use crate::dashboard::view::MockDashboardView;
    use crate::render::{CandlestickTrace, ChartLayout, PlotConfig, StatColor};
    use serde_json::json;
    use std::time::Duration;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Loading(bool),
        InputError(Option<String>),
        Price(StatValue),
        Change(String),
        Signal(StatValue),
        Rsi(StatValue),
        Predictions(PredictionsPanel),
        Plot {
            container: String,
            title: String,
            candles: usize,
        },
        ShowToast(String),
        HideToast,
    }

    #[derive(Default)]
    struct RecordingView {
        calls: Vec<Call>,
    }

    impl RecordingView {
        fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
            self.calls.iter().filter(|c| pred(c)).count()
        }
    }

    impl DashboardView for RecordingView {
        fn set_loading_visible(&mut self, visible: bool) {
            self.calls.push(Call::Loading(visible));
        }
        fn set_input_error(&mut self, message: Option<String>) {
            self.calls.push(Call::InputError(message));
        }
        fn set_price(&mut self, stat: &StatValue) {
            self.calls.push(Call::Price(stat.clone()));
        }
        fn set_price_change(&mut self, line: &str) {
            self.calls.push(Call::Change(line.to_string()));
        }
        fn set_signal(&mut self, stat: &StatValue) {
            self.calls.push(Call::Signal(stat.clone()));
        }
        fn set_rsi(&mut self, stat: &StatValue) {
            self.calls.push(Call::Rsi(stat.clone()));
        }
        fn set_predictions(&mut self, panel: &PredictionsPanel) {
            self.calls.push(Call::Predictions(panel.clone()));
        }
        fn new_plot(
            &mut self,
            container_id: &str,
            traces: &[CandlestickTrace],
            layout: &ChartLayout,
            _config: &PlotConfig,
        ) {
            self.calls.push(Call::Plot {
                container: container_id.to_string(),
                title: layout.title.text.clone(),
                candles: traces.iter().map(|t| t.len()).sum(),
            });
        }
        fn show_toast(&mut self, message: &str) {
            self.calls.push(Call::ShowToast(message.to_string()));
        }
        fn hide_toast(&mut self) {
            self.calls.push(Call::HideToast);
        }
    }

    fn analysis(ticker: &str, body: serde_json::Value) -> Analysis {
        let request = AnalysisRequest::new(
            Ticker::parse(ticker).expect("valid ticker"),
            Interval::OneDay,
        );
        decode_analysis(200, body.to_string().as_bytes(), &request).expect("decodes")
    }

    fn full_body() -> serde_json::Value {
        json!({
            "current_price": 187.25,
            "price_change": 2.3,
            "price_change_percent": 1.25,
            "signal": "BUY",
            "rsi": 72.5,
            "chart_data": {
                "dates": ["2024-01-02", "2024-01-03"],
                "open": [185.0, 186.0],
                "high": [188.0, 189.0],
                "low": [184.0, 185.5],
                "close": [186.0, 187.25]
            }
        })
    }

    #[test]
    fn whitespace_ticker_is_rejected_inline() {
        let mut controller = DashboardController::new(RecordingView::default());
        let result = controller.begin_submission("   ", Interval::OneDay);

        assert_eq!(result.unwrap_err(), ValidationError::EmptyTicker);
        assert_eq!(
            controller.view().calls,
            vec![Call::InputError(Some(
                "Please enter a stock ticker".to_string()
            ))]
        );
        assert!(!controller.loading.is_visible());
    }

    #[tokio::test]
    async fn empty_ticker_never_reaches_the_network() {
        let mut api = MockAnalysisApi::new();
        api.expect_analyze().times(0);

        let mut controller = DashboardController::new(RecordingView::default());
        let result = controller.submit(&api, "", Interval::OneDay).await;
        assert!(matches!(result, Err(DashboardError::Validation(_))));
    }

    #[test]
    fn render_commits_stats_after_transition_delay() {
        let t0 = Instant::now();
        let mut controller = DashboardController::new(RecordingView::default());
        let submission = controller
            .begin_submission(" aapl ", Interval::OneHour)
            .unwrap();
        assert_eq!(submission.request.ticker.as_str(), "AAPL");
        assert!(controller.loading.is_visible());

        let completion = controller
            .complete_submission(submission, Ok(analysis("AAPL", full_body())), t0)
            .unwrap();
        assert_eq!(completion, Completion::Rendered);
        assert!(!controller.loading.is_visible());

        let calls = &controller.view().calls;
        assert!(calls.contains(&Call::Change("+1.25% (+$2.30)".to_string())));
        assert!(calls.contains(&Call::Rsi(StatValue::new("72.50", StatColor::Red))));
        assert!(calls.contains(&Call::Plot {
            container: "chart".to_string(),
            title: "AAPL - Candlestick Chart".to_string(),
            candles: 2,
        }));
        assert_eq!(controller.view().count(|c| matches!(c, Call::Price(_))), 0);
        assert!(controller.is_price_transitioning());

        controller.tick(t0 + Duration::from_millis(149));
        assert_eq!(controller.view().count(|c| matches!(c, Call::Price(_))), 0);

        controller.tick(t0 + timing::stat_transition());
        let calls = &controller.view().calls;
        assert!(calls.contains(&Call::Price(StatValue::new("$187.25", StatColor::Green))));
        assert!(calls.contains(&Call::Signal(StatValue::new("BUY 🟢", StatColor::Green))));
        assert!(!controller.is_price_transitioning());
        assert_eq!(
            controller.last_rendered().map(|a| a.ticker.as_str()),
            Some("AAPL")
        );
    }

    #[test]
    fn loading_indicator_brackets_submission() {
        let t0 = Instant::now();
        let mut controller = DashboardController::new(RecordingView::default());
        let submission = controller.begin_submission("MSFT", Interval::OneDay).unwrap();
        controller
            .complete_submission(submission, Ok(analysis("MSFT", full_body())), t0)
            .unwrap();

        let loading: Vec<_> = controller
            .view()
            .calls
            .iter()
            .filter_map(|c| match c {
                Call::Loading(v) => Some(*v),
                _ => None,
            })
            .collect();
        assert_eq!(loading, vec![true, false]);
    }

    #[test]
    fn loading_stays_visible_while_any_submission_is_in_flight() {
        let t0 = Instant::now();
        let mut controller = DashboardController::new(RecordingView::default());
        let first = controller.begin_submission("AAPL", Interval::OneDay).unwrap();
        let second = controller.begin_submission("MSFT", Interval::OneDay).unwrap();

        let _ = controller.complete_submission(
            first,
            Err(ApiError::Http {
                status: 500,
                body: String::new(),
            }),
            t0,
        );
        assert!(controller.loading.is_visible());

        controller
            .complete_submission(second, Ok(analysis("MSFT", full_body())), t0)
            .unwrap();
        assert!(!controller.loading.is_visible());
    }

    #[test]
    fn error_payload_toasts_exact_message_and_renders_nothing() {
        let t0 = Instant::now();
        let mut controller = DashboardController::new(RecordingView::default());
        let submission = controller.begin_submission("ZZZZ", Interval::OneDay).unwrap();

        let error = ApiError::Application {
            message: "Failed to fetch data for ZZZZ".to_string(),
        };
        let result = controller.complete_submission(submission, Err(error), t0);
        assert!(matches!(result, Err(ApiError::Application { .. })));

        let view = controller.view();
        assert!(
            view.calls
                .contains(&Call::ShowToast("Failed to fetch data for ZZZZ".to_string()))
        );
        assert_eq!(
            view.count(|c| matches!(
                c,
                Call::Change(_) | Call::Rsi(_) | Call::Predictions(_) | Call::Plot { .. }
            )),
            0
        );
        assert!(controller.last_rendered().is_none());

        controller.tick(t0 + Duration::from_millis(4999));
        assert_eq!(controller.view().count(|c| *c == Call::HideToast), 0);
        controller.tick(t0 + timing::toast_visible());
        assert_eq!(controller.view().count(|c| *c == Call::HideToast), 1);
    }

    #[test]
    fn transport_failure_uses_generic_message() {
        let t0 = Instant::now();
        let mut controller = DashboardController::new(RecordingView::default());
        let submission = controller.begin_submission("AAPL", Interval::OneDay).unwrap();
        let decode_error = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();

        let _ = controller.complete_submission(submission, Err(decode_error.into()), t0);
        assert_eq!(
            controller.toast().message.as_deref(),
            Some("Failed to fetch data. Please try again.")
        );
    }

    #[test]
    fn second_error_restarts_toast_window() {
        let t0 = Instant::now();
        let mut controller = DashboardController::new(RecordingView::default());
        for (offset, message) in [(0, "first"), (3000, "second")] {
            let submission = controller.begin_submission("AAPL", Interval::OneDay).unwrap();
            let _ = controller.complete_submission(
                submission,
                Err(ApiError::Application {
                    message: message.to_string(),
                }),
                t0 + Duration::from_millis(offset),
            );
        }

        controller.tick(t0 + Duration::from_millis(5000));
        assert_eq!(controller.toast().message.as_deref(), Some("second"));
        assert_eq!(controller.view().count(|c| *c == Call::HideToast), 0);

        controller.tick(t0 + Duration::from_millis(8000));
        assert!(controller.toast().message.is_none());
        assert_eq!(controller.view().count(|c| *c == Call::HideToast), 1);
    }

    #[test]
    fn stale_response_is_ignored() {
        let t0 = Instant::now();
        let mut controller = DashboardController::new(RecordingView::default());
        let older = controller.begin_submission("AAPL", Interval::OneDay).unwrap();
        let newer = controller.begin_submission("MSFT", Interval::OneDay).unwrap();

        controller
            .complete_submission(newer, Ok(analysis("MSFT", full_body())), t0)
            .unwrap();
        let completion = controller
            .complete_submission(older, Ok(analysis("AAPL", full_body())), t0)
            .unwrap();

        assert_eq!(completion, Completion::Stale);
        assert_eq!(
            controller.last_rendered().map(|a| a.ticker.as_str()),
            Some("MSFT")
        );
        assert_eq!(
            controller.view().count(|c| matches!(c, Call::Plot { .. })),
            1
        );
        assert!(!controller.loading.is_visible());
    }

    #[test]
    fn missing_chart_dates_skip_plot_but_render_other_panels() {
        let mut view = MockDashboardView::new();
        view.expect_set_loading_visible().return_const(());
        view.expect_set_input_error().return_const(());
        view.expect_set_price_change()
            .withf(|line| line == "-0.83% ($1.50)")
            .times(1)
            .return_const(());
        view.expect_set_rsi().times(1).return_const(());
        view.expect_set_predictions().times(1).return_const(());
        view.expect_new_plot().times(0);

        let mut controller = DashboardController::new(view);
        let submission = controller.begin_submission("TSLA", Interval::OneDay).unwrap();
        let body = json!({
            "current_price": 180.0,
            "price_change": -1.5,
            "price_change_percent": -0.83,
            "chart_data": {"dates": [], "open": [], "high": [], "low": [], "close": []}
        });
        controller
            .complete_submission(submission, Ok(analysis("TSLA", body)), Instant::now())
            .unwrap();

        assert!(
            controller
                .activity()
                .iter()
                .any(|e| e.event_type == EventType::Warning)
        );
    }

    #[tokio::test]
    async fn submit_runs_request_and_renders() {
        let mut api = MockAnalysisApi::new();
        api.expect_analyze()
            .withf(|request| request.ticker.as_str() == "NVDA")
            .times(1)
            .returning(|_| Ok(analysis("NVDA", full_body())));

        let mut controller = DashboardController::new(RecordingView::default());
        let completion = controller
            .submit(&api, "nvda", Interval::FiveMinutes)
            .await
            .unwrap();

        assert_eq!(completion, Completion::Rendered);
        assert!(controller.is_signal_transitioning());
        assert_eq!(
            controller.last_rendered().map(|a| a.ticker.as_str()),
            Some("NVDA")
        );
    }

    #[tokio::test]
    async fn submit_surfaces_api_errors() {
        let mut api = MockAnalysisApi::new();
        api.expect_analyze().times(1).returning(|_| {
            Err(ApiError::Http {
                status: 502,
                body: "bad gateway".to_string(),
            })
        });

        let mut controller = DashboardController::new(RecordingView::default());
        let result = controller.submit(&api, "AAPL", Interval::OneDay).await;

        assert!(matches!(
            result,
            Err(DashboardError::Api(ApiError::Http { status: 502, .. }))
        ));
        assert_eq!(
            controller.toast().message.as_deref(),
            Some("HTTP error! status: 502")
        );
    }

    #[test]
    fn activity_log_is_bounded() {
        let mut controller = DashboardController::new(RecordingView::default());
        for _ in 0..(MAX_ACTIVITY_LOGS + 10) {
            let _ = controller.begin_submission("", Interval::OneDay);
        }
        assert_eq!(controller.activity().len(), MAX_ACTIVITY_LOGS);
    }
}
