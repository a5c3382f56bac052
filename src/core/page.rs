use crate::domain::model::PortfolioData;
use crate::render::layout::{self, PageContext};
use crate::utils::error::{Result, GENERIC_LOAD_FAILURE};
use maud::Markup;
use tokio::sync::watch;

/// Lifecycle of the one data fetch behind the page.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Error(String),
    Ready(PortfolioData),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}

/// Owns the page state and publishes it on a watch channel.
///
/// The state starts as `Loading` and settles exactly once; the progress
/// presenter follows it through [`PageComposer::subscribe`].
pub struct PageComposer {
    state: watch::Sender<LoadState>,
}

impl Default for PageComposer {
    fn default() -> Self {
        Self::new()
    }
}

impl PageComposer {
    pub fn new() -> Self {
        let (state, _) = watch::channel(LoadState::Loading);
        Self { state }
    }

    pub fn subscribe(&self) -> watch::Receiver<LoadState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> watch::Ref<'_, LoadState> {
        self.state.borrow()
    }

    /// Applies the loader's outcome. Returns `false` if the page had already settled.
    pub fn settle(&self, result: Result<PortfolioData>) -> bool {
        let applied = self.state.send_if_modified(|state| {
            if !state.is_loading() {
                return false;
            }
            *state = match result {
                Ok(data) => LoadState::Ready(data),
                Err(e) => {
                    tracing::error!("Page load failed: {}", e);
                    LoadState::Error(GENERIC_LOAD_FAILURE.to_string())
                }
            };
            true
        });

        if !applied {
            tracing::warn!("Ignoring second settlement; page state is terminal");
        }
        applied
    }

    pub fn render(&self, ctx: &PageContext<'_>) -> Markup {
        layout::render_document(&self.state.borrow(), ctx)
    }
}
