//! Page state for the dashboard.

use pulse_client::ClientResult;
use pulse_core::{normalize_ticker, Analysis, CacheStats, HealthReport};

pub const DEFAULT_TICKER: &str = "NVDA";

/// Quick picks offered on the landing view, cycled with Tab.
pub const POPULAR_TICKERS: [&str; 8] = ["NVDA", "TSLA", "AAPL", "MSFT", "GOOGL", "AMZN", "META", "NFLX"];

/// The one piece of view state. Loading and failure cannot coexist.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Idle,
    Loading,
    Loaded(Box<Analysis>),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum BackendStatus {
    Checking,
    Online {
        version: Option<String>,
        degraded: Vec<String>,
    },
    Offline(String),
}

/// Results delivered by background tasks.
#[derive(Debug)]
pub enum AppEvent {
    AnalysisFinished(ClientResult<Analysis>),
    StatusChecked {
        health: ClientResult<HealthReport>,
        cache: Option<CacheStats>,
    },
}

pub struct App {
    /// Raw input, uppercased as typed
    pub ticker: String,
    pub view: ViewState,
    pub backend: BackendStatus,
    pub cache: Option<CacheStats>,
    pub backend_name: &'static str,
    pub api_url: String,
    pub should_quit: bool,
    popular_cursor: Option<usize>,
}

impl App {
    pub fn new(api_url: impl Into<String>, backend_name: &'static str) -> Self {
        Self {
            ticker: DEFAULT_TICKER.to_string(),
            view: ViewState::Idle,
            backend: BackendStatus::Checking,
            cache: None,
            backend_name,
            api_url: api_url.into(),
            should_quit: false,
            popular_cursor: None,
        }
    }

    pub fn with_ticker(mut self, ticker: &str) -> Self {
        self.ticker = ticker.to_uppercase();
        self
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.view, ViewState::Loading)
    }

    /// The analyze action is available unless a request is in flight or the
    /// input is blank.
    pub fn can_analyze(&self) -> bool {
        !self.is_loading() && !self.ticker.trim().is_empty()
    }

    /// Enter `Loading` and return the ticker to request, clearing any previous
    /// error or result. `None` when the action is disabled.
    pub fn begin_analysis(&mut self) -> Option<String> {
        if !self.can_analyze() {
            return None;
        }
        let ticker = normalize_ticker(&self.ticker).ok()?;
        self.view = ViewState::Loading;
        Some(ticker)
    }

    pub fn finish_analysis(&mut self, result: ClientResult<Analysis>) {
        self.view = match result {
            Ok(analysis) => ViewState::Loaded(Box::new(analysis)),
            Err(err) => ViewState::Failed(err.to_string()),
        };
    }

    pub fn error_banner(&self) -> Option<String> {
        match &self.view {
            ViewState::Failed(message) => Some(format!("Error: {}", message)),
            _ => None,
        }
    }

    pub fn analysis(&self) -> Option<&Analysis> {
        match &self.view {
            ViewState::Loaded(analysis) => Some(analysis.as_ref()),
            _ => None,
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.ticker.extend(c.to_uppercase());
        self.popular_cursor = None;
    }

    pub fn pop_char(&mut self) {
        self.ticker.pop();
        self.popular_cursor = None;
    }

    pub fn clear_input(&mut self) {
        self.ticker.clear();
        self.popular_cursor = None;
    }

    pub fn next_popular(&mut self) {
        let next = match self.popular_cursor {
            Some(i) => (i + 1) % POPULAR_TICKERS.len(),
            None => POPULAR_TICKERS
                .iter()
                .position(|t| *t == self.ticker.trim())
                .map(|i| (i + 1) % POPULAR_TICKERS.len())
                .unwrap_or(0),
        };
        self.select_popular(next);
    }

    pub fn previous_popular(&mut self) {
        let len = POPULAR_TICKERS.len();
        let previous = match self.popular_cursor {
            Some(i) => (i + len - 1) % len,
            None => len - 1,
        };
        self.select_popular(previous);
    }

    fn select_popular(&mut self, index: usize) {
        self.popular_cursor = Some(index);
        self.ticker = POPULAR_TICKERS[index].to_string();
    }

    pub fn selected_popular(&self) -> Option<&'static str> {
        self.popular_cursor.map(|i| POPULAR_TICKERS[i])
    }

    pub fn mark_checking(&mut self) {
        self.backend = BackendStatus::Checking;
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::AnalysisFinished(result) => self.finish_analysis(result),
            AppEvent::StatusChecked { health, cache } => {
                self.backend = match health {
                    Ok(report) => BackendStatus::Online {
                        version: report.version.clone(),
                        degraded: report
                            .degraded_components()
                            .into_iter()
                            .map(str::to_string)
                            .collect(),
                    },
                    Err(err) => BackendStatus::Offline(err.to_string()),
                };
                self.cache = cache;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_client::ClientError;
    use pulse_core::{decode_response, HealthReport};

    fn app() -> App {
        App::new("http://localhost:8000", "http")
    }

    fn sample_analysis() -> Analysis {
        let body = r#"{"ticker": "NVDA", "source": "live_analysis",
            "data": {"🎪 TRADING SIGNAL": "🚀 STRONG BUY - Momentum Breakout"}}"#;
        Analysis::from(decode_response(body).unwrap())
    }

    #[test]
    fn test_starts_idle_with_default_ticker() {
        let app = app();
        assert_eq!(app.view, ViewState::Idle);
        assert_eq!(app.ticker, "NVDA");
        assert!(app.can_analyze());
    }

    #[test]
    fn test_disabled_exactly_when_loading_or_blank() {
        let mut app = app();
        for (ticker, view, expected) in [
            ("NVDA", ViewState::Idle, true),
            ("NVDA", ViewState::Failed("x".into()), true),
            ("NVDA", ViewState::Loaded(Box::new(sample_analysis())), true),
            ("NVDA", ViewState::Loading, false),
            ("   ", ViewState::Idle, false),
            ("", ViewState::Failed("x".into()), false),
        ] {
            app.ticker = ticker.to_string();
            app.view = view;
            assert_eq!(app.can_analyze(), expected, "ticker {:?}", ticker);
        }
    }

    #[test]
    fn test_begin_analysis_normalizes_and_clears_error() {
        let mut app = app();
        app.ticker = "nvda ".to_string();
        app.view = ViewState::Failed("Analysis failed: Not Found".into());

        assert_eq!(app.begin_analysis().as_deref(), Some("NVDA"));
        assert!(app.is_loading());
        assert_eq!(app.error_banner(), None);

        // second press while loading is ignored
        assert_eq!(app.begin_analysis(), None);
    }

    #[test]
    fn test_begin_analysis_blank_is_noop() {
        let mut app = app();
        app.clear_input();
        assert_eq!(app.begin_analysis(), None);
        assert_eq!(app.view, ViewState::Idle);
    }

    #[test]
    fn test_http_failure_banner() {
        let mut app = app();
        app.begin_analysis();
        app.handle_event(AppEvent::AnalysisFinished(Err(ClientError::Http {
            status: 404,
            status_text: "Not Found".into(),
        })));
        assert!(!app.is_loading());
        assert_eq!(
            app.error_banner().as_deref(),
            Some("Error: Analysis failed: Not Found")
        );
    }

    #[test]
    fn test_request_failure_banner() {
        let mut app = app();
        app.begin_analysis();
        app.finish_analysis(Err(ClientError::request("")));
        assert_eq!(app.error_banner().as_deref(), Some("Error: Analysis failed"));
    }

    #[test]
    fn test_success_replaces_view() {
        let mut app = app();
        app.begin_analysis();
        app.finish_analysis(Ok(sample_analysis()));
        assert!(!app.is_loading());
        assert_eq!(app.analysis().unwrap().signal.headline, "STRONG BUY");

        app.begin_analysis();
        assert!(app.analysis().is_none());
    }

    #[test]
    fn test_typing_uppercases() {
        let mut app = app();
        app.clear_input();
        for c in "brk.b".chars() {
            app.push_char(c);
        }
        assert_eq!(app.ticker, "BRK.B");
        app.pop_char();
        assert_eq!(app.ticker, "BRK.");
    }

    #[test]
    fn test_popular_cycle() {
        let mut app = app();
        app.next_popular();
        assert_eq!(app.ticker, "TSLA");
        app.next_popular();
        assert_eq!(app.selected_popular(), Some("AAPL"));
        app.previous_popular();
        assert_eq!(app.ticker, "TSLA");

        app.clear_input();
        app.previous_popular();
        assert_eq!(app.ticker, "NFLX");
        app.next_popular();
        assert_eq!(app.ticker, "NVDA");
    }

    #[test]
    fn test_status_checked() {
        let mut app = app();
        let report: HealthReport = serde_json::from_str(
            r#"{"status": "healthy", "version": "2.1.0", "components": {"algorithm": "error"}}"#,
        )
        .unwrap();
        app.handle_event(AppEvent::StatusChecked {
            health: Ok(report),
            cache: None,
        });
        assert_eq!(
            app.backend,
            BackendStatus::Online {
                version: Some("2.1.0".into()),
                degraded: vec!["algorithm".into()],
            }
        );

        app.mark_checking();
        app.handle_event(AppEvent::StatusChecked {
            health: Err(ClientError::request("connection refused")),
            cache: None,
        });
        assert_eq!(app.backend, BackendStatus::Offline("connection refused".into()));
    }
}
