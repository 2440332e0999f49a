//! Event loop tying the page loader, categories and render target together
//!
//! Scroll events, category selections and fetch completions are all handled on
//! one task and each runs to completion before the next is looked at. The only
//! suspension point is the fetch itself.

use crate::feed::source::PageSource;
use crate::io::configuration::WallConfig;
use crate::io::error::Result;
use crate::wall::category::CategoryState;
use crate::wall::dice::ShapeDice;
use crate::wall::fragment::{ImageDescriptor, TileSizing};
use crate::wall::loader::{FetchTicket, LoadSignal, PageLoader, RequestOutcome};
use crate::wall::render::RenderTarget;
use crate::wall::sequencer::TileSequencer;
use crate::wall::viewport::{ScrollMetrics, ScrollTrigger, TileHeights};
use futures::future::BoxFuture;
use futures::stream::FuturesUnordered;
use futures::{FutureExt, StreamExt};
use log::debug;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Input events of the wall
#[derive(Clone, Debug, PartialEq)]
pub enum WallEvent {
    /// The viewport scrolled
    Scroll(ScrollMetrics),
    /// A category was clicked
    SelectCategory(String),
    /// Reload the current category from the start
    Reload,
    /// The container changed width
    Resize {
        /// New container width
        container_width: f64,
    },
}

type PendingFetch = BoxFuture<'static, (FetchTicket, Result<Vec<ImageDescriptor>>)>;

/// One wall on one page
pub struct WallSession<S, T, D>
where
    S: PageSource + 'static,
    T: RenderTarget,
    D: ShapeDice,
{
    source: Arc<S>,
    target: T,
    loader: PageLoader<D>,
    categories: CategoryState,
    trigger: ScrollTrigger,
    ratio: f64,
    container_width: f64,
    pending: FuturesUnordered<PendingFetch>,
}

impl<S, T, D> WallSession<S, T, D>
where
    S: PageSource + 'static,
    T: RenderTarget,
    D: ShapeDice,
{
    /// Create a session; nothing is fetched until [`Self::start`]
    pub fn new(
        source: Arc<S>,
        target: T,
        dice: D,
        categories: CategoryState,
        config: &WallConfig,
    ) -> Self {
        let sizing = TileSizing::new(config.viewport_width, config.ratio);
        let sequencer = TileSequencer::new(sizing, dice);
        let loader = PageLoader::new(categories.selected(), config.page_size, sequencer);
        Self {
            source,
            target,
            loader,
            categories,
            trigger: ScrollTrigger::new(config.scroll_threshold, config.min_scroll_top),
            ratio: config.ratio,
            container_width: f64::from(config.viewport_width),
            pending: FuturesUnordered::new(),
        }
    }

    /// Show the categories and request the first page of the selected one
    pub fn start(&mut self) -> RequestOutcome {
        self.target.show_categories(&self.categories);
        let selected = self.categories.selected().to_string();
        let outcome = self.open_category(&selected);
        self.target.apply_tile_heights(self.tile_heights());
        outcome
    }

    /// Handle one event to completion
    ///
    /// Returns the fetch outcome when the event asked for more images.
    pub fn handle(&mut self, event: WallEvent) -> Option<RequestOutcome> {
        match event {
            WallEvent::Scroll(metrics) => {
                if !self.trigger.should_load(&metrics) {
                    return None;
                }
                let outcome = self.loader.request_more(&mut self.target);
                self.dispatch(&outcome);
                Some(outcome)
            }
            WallEvent::SelectCategory(id) => {
                self.categories.select(&id);
                self.target.show_categories(&self.categories);
                Some(self.open_category(&id))
            }
            WallEvent::Reload => {
                let selected = self.categories.selected().to_string();
                Some(self.open_category(&selected))
            }
            WallEvent::Resize { container_width } => {
                self.container_width = container_width;
                self.target.apply_tile_heights(self.tile_heights());
                None
            }
        }
    }

    /// Wait for the next fetch to finish and apply it
    ///
    /// Returns `None` when no fetch is outstanding.
    pub async fn next_settlement(&mut self) -> Option<LoadSignal> {
        let (ticket, result) = self.pending.next().await?;
        Some(self.settle(&ticket, result))
    }

    /// Process events until the channel closes and every fetch has settled
    pub async fn run(&mut self, mut events: mpsc::UnboundedReceiver<WallEvent>) {
        let mut open = true;
        while open || !self.pending.is_empty() {
            tokio::select! {
                Some((ticket, result)) = self.pending.next(), if !self.pending.is_empty() => {
                    self.settle(&ticket, result);
                }
                event = events.recv(), if open => match event {
                    Some(event) => {
                        self.handle(event);
                    }
                    None => open = false,
                },
                else => break,
            }
        }
    }

    /// Render target
    pub const fn target(&self) -> &T {
        &self.target
    }

    /// Page loader
    pub const fn loader(&self) -> &PageLoader<D> {
        &self.loader
    }

    /// Category list and selection
    pub const fn categories(&self) -> &CategoryState {
        &self.categories
    }

    /// Fetches started and not yet settled, including superseded ones
    pub fn outstanding_fetches(&self) -> usize {
        self.pending.len()
    }

    /// Give the render target back
    pub fn into_target(self) -> T {
        self.target
    }

    fn open_category(&mut self, id: &str) -> RequestOutcome {
        self.target.set_title(&self.categories.title());
        let outcome = self.loader.switch_category(id, &mut self.target);
        self.dispatch(&outcome);
        outcome
    }

    fn dispatch(&self, outcome: &RequestOutcome) {
        if let RequestOutcome::Started(ticket) = outcome {
            let source = Arc::clone(&self.source);
            let ticket = ticket.clone();
            self.pending.push(
                async move {
                    let result = source.fetch_page(&ticket.request).await;
                    (ticket, result)
                }
                .boxed(),
            );
        }
    }

    fn settle(&mut self, ticket: &FetchTicket, result: Result<Vec<ImageDescriptor>>) -> LoadSignal {
        let signal = self.loader.settle(ticket, result, &mut self.target);
        debug!("fetch settled: {signal:?}");
        if matches!(signal, LoadSignal::MoreAvailable { .. }) {
            self.target.apply_tile_heights(self.tile_heights());
        }
        signal
    }

    fn tile_heights(&self) -> TileHeights {
        TileHeights::for_container(self.container_width, self.ratio)
    }
}
