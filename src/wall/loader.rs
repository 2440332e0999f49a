//! Pagination with an in-flight guard against overlapping fetches
//!
//! A fetch is split into two steps so the caller can suspend in between:
//! [`PageLoader::request_more`] claims the guard and hands out a ticket, and
//! [`PageLoader::settle`] consumes the fetch result and releases the guard.

use crate::feed::source::PageRequest;
use crate::io::error::{FailureKind, Result};
use crate::wall::dice::ShapeDice;
use crate::wall::fragment::ImageDescriptor;
use crate::wall::render::RenderTarget;
use crate::wall::sequencer::TileSequencer;
use log::{debug, info, warn};

/// Pagination state for the active category
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadState {
    /// Category being paged through
    pub category: String,
    /// Number of images already received for this category
    pub offset: usize,
    /// A fetch has started and not yet settled
    pub in_flight: bool,
    /// An empty page was received; no further automatic loads
    pub exhausted: bool,
    /// Bumped on every reset so late results from older fetches can be told apart
    pub generation: u64,
}

impl LoadState {
    /// Fresh state for a category
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            ..Self::default()
        }
    }
}

/// Handle for a started fetch, returned to [`PageLoader::settle`] on completion
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    /// Generation of the load state that issued this fetch
    pub generation: u64,
    /// Page to fetch
    pub request: PageRequest,
}

/// Result of asking for more images
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestOutcome {
    /// A fetch should be issued for the ticket's request
    Started(FetchTicket),
    /// A fetch is already in flight
    Busy,
    /// The category has no more images
    Exhausted,
}

/// What a settled fetch means for the wall
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadSignal {
    /// A page of images was added; more may be available
    MoreAvailable {
        /// Images received in this page
        received: usize,
    },
    /// The category has no further images
    EndOfData,
    /// The fetch failed; the guard is released and the offset unchanged
    RecoverableError(FailureKind),
    /// The fetch belonged to a category or load that has since been reset
    Stale,
}

/// Inline status shown below the wall
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadStatus {
    /// A fetch is running
    Loading,
    /// Nothing to show
    Hidden,
    /// Every image has been loaded
    EndOfData,
    /// The response was malformed
    FormatError,
    /// The server could not be reached
    NetworkError,
}

impl LoadStatus {
    /// User-facing message, `None` when hidden
    pub const fn message(self) -> Option<&'static str> {
        match self {
            Self::Loading => Some("Loading…"),
            Self::Hidden => None,
            Self::EndOfData => Some("All wallpapers have been loaded!"),
            Self::FormatError => Some("Loading failed, please refresh and retry"),
            Self::NetworkError => Some("Network error, please check the server"),
        }
    }
}

impl From<FailureKind> for LoadStatus {
    fn from(kind: FailureKind) -> Self {
        match kind {
            FailureKind::Network => Self::NetworkError,
            FailureKind::Format => Self::FormatError,
        }
    }
}

/// Drives page fetches and feeds their images through the tile sequencer
pub struct PageLoader<D: ShapeDice> {
    state: LoadState,
    sequencer: TileSequencer<D>,
    page_size: usize,
}

impl<D: ShapeDice> PageLoader<D> {
    /// Create a loader for `category` requesting `page_size` images at a time
    pub fn new(category: impl Into<String>, page_size: usize, sequencer: TileSequencer<D>) -> Self {
        Self {
            state: LoadState::new(category),
            sequencer,
            page_size,
        }
    }

    /// Claim the in-flight guard and describe the next page to fetch
    ///
    /// Returns `Busy` without side effects while a fetch is in flight, and
    /// `Exhausted` once the category reported end of data.
    pub fn request_more<T: RenderTarget + ?Sized>(&mut self, target: &mut T) -> RequestOutcome {
        if self.state.in_flight {
            debug!("fetch already in flight for '{}'", self.state.category);
            return RequestOutcome::Busy;
        }
        if self.state.exhausted {
            return RequestOutcome::Exhausted;
        }

        self.state.in_flight = true;
        target.set_status(LoadStatus::Loading);

        let request = PageRequest {
            category: self.state.category.clone(),
            offset: self.state.offset,
            count: self.page_size,
        };
        debug!(
            "requesting {} images of '{}' from offset {}",
            request.count, request.category, request.offset
        );
        RequestOutcome::Started(FetchTicket {
            generation: self.state.generation,
            request,
        })
    }

    /// Apply a fetch result and release the in-flight guard
    ///
    /// Images are placed strictly in response order and every completed tile
    /// is appended to `target`.
    pub fn settle<T: RenderTarget + ?Sized>(
        &mut self,
        ticket: &FetchTicket,
        result: Result<Vec<ImageDescriptor>>,
        target: &mut T,
    ) -> LoadSignal {
        if ticket.generation != self.state.generation {
            info!(
                "dropping late result for '{}' at offset {}",
                ticket.request.category, ticket.request.offset
            );
            return LoadSignal::Stale;
        }
        self.state.in_flight = false;

        let images = match result {
            Ok(images) => images,
            Err(error) => {
                let kind = error.failure_kind();
                warn!("fetch for '{}' failed: {error}", self.state.category);
                target.set_status(kind.into());
                return LoadSignal::RecoverableError(kind);
            }
        };

        if images.is_empty() {
            self.state.exhausted = true;
            if let Some(fragment) = self.sequencer.flush() {
                target.append(fragment);
            }
            info!(
                "'{}' has no more images after {}",
                self.state.category, self.state.offset
            );
            target.set_status(LoadStatus::EndOfData);
            return LoadSignal::EndOfData;
        }

        let received = images.len();
        if received < ticket.request.count {
            debug!(
                "partial page for '{}': {received} of {}",
                self.state.category, ticket.request.count
            );
        }
        for image in images {
            if let Some(fragment) = self.sequencer.place(image) {
                target.append(fragment);
            }
        }
        self.state.offset += received;
        debug_assert_eq!(self.state.offset, self.sequencer.count());

        info!(
            "'{}' page settled: {received} images, offset now {}",
            self.state.category, self.state.offset
        );
        target.set_status(LoadStatus::Hidden);
        LoadSignal::MoreAvailable { received }
    }

    /// Reset paging and placement for `category` without requesting anything
    ///
    /// Any fetch still in flight is left to finish; its result will settle as
    /// [`LoadSignal::Stale`].
    pub fn reset(&mut self, category: impl Into<String>) {
        let generation = self.state.generation.wrapping_add(1);
        self.state = LoadState {
            generation,
            ..LoadState::new(category)
        };
        self.sequencer.reset();
    }

    /// Switch to `category`: reset, clear the wall, and request the first page
    pub fn switch_category<T: RenderTarget + ?Sized>(
        &mut self,
        category: impl Into<String>,
        target: &mut T,
    ) -> RequestOutcome {
        self.reset(category);
        target.clear_all();
        self.request_more(target)
    }

    /// Current pagination state
    pub const fn state(&self) -> &LoadState {
        &self.state
    }

    /// Sequencer used for placement
    pub const fn sequencer(&self) -> &TileSequencer<D> {
        &self.sequencer
    }
}
