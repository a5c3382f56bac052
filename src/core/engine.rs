use crate::core::page::{LoadState, PageComposer};
use crate::core::progress::{ProgressPresenter, ProgressReport};
use crate::core::theme::{RootClassMarker, ThemeController};
use crate::core::{ConfigProvider, DataSource, ProgressSink, StepSource, Storage};
use crate::render::layout::PageContext;
use crate::utils::error::Result;

pub const INDEX_FILE: &str = "index.html";

#[derive(Debug, Clone)]
pub struct RenderOutcome {
    pub output_path: String,
    pub state: LoadState,
    pub progress: ProgressReport,
}

impl RenderOutcome {
    pub fn is_ready(&self) -> bool {
        matches!(self.state, LoadState::Ready(_))
    }
}

/// Runs one page load: fetch and progress side by side, then render and store.
pub struct FolioEngine<D: DataSource, S: Storage, C: ConfigProvider> {
    source: D,
    storage: S,
    config: C,
    presenter: ProgressPresenter,
}

impl<D: DataSource, S: Storage, C: ConfigProvider> FolioEngine<D, S, C> {
    pub fn new(source: D, storage: S, config: C) -> Self {
        Self {
            source,
            storage,
            config,
            presenter: ProgressPresenter::default(),
        }
    }

    pub fn with_presenter(mut self, presenter: ProgressPresenter) -> Self {
        self.presenter = presenter;
        self
    }

    /// A failed load is not an error here: the error view is rendered and
    /// stored, and the outcome's state says what happened.
    pub async fn run<P, T>(&self, sink: &P, steps: &mut T) -> Result<RenderOutcome>
    where
        P: ProgressSink + ?Sized,
        T: StepSource + ?Sized,
    {
        tracing::info!("Loading portfolio from {}", self.config.api_endpoint());

        let page = PageComposer::new();
        let mut theme = ThemeController::new(RootClassMarker::default());
        if !self.config.start_dark() {
            theme.toggle();
        }

        // Both futures run on this task; they meet only through the page state.
        let load = async {
            let result = self.source.fetch().await;
            page.settle(result);
        };
        let (_, progress) = tokio::join!(load, self.presenter.run(page.subscribe(), sink, steps));

        let ctx = PageContext::new(self.config.site(), &theme).with_progress(progress.final_value);
        let html = page.render(&ctx).into_string();

        tracing::debug!("Writing rendered page ({} bytes) to storage", html.len());
        self.storage.write_file(INDEX_FILE, html.as_bytes()).await?;

        let state = page.state().clone();
        match &state {
            LoadState::Ready(data) => tracing::info!(
                "Page ready: {} timeline rows, {} cards",
                data.experience.len(),
                data.work.len()
            ),
            LoadState::Error(message) => tracing::warn!("Page rendered in error state: {}", message),
            LoadState::Loading => {}
        }

        Ok(RenderOutcome {
            output_path: format!(
                "{}/{}",
                self.config.output_path().trim_end_matches('/'),
                INDEX_FILE
            ),
            state,
            progress,
        })
    }
}
