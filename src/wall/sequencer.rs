//! Tile placement state machine giving the wall its jigsaw rhythm
//!
//! Every image becomes either a large half-width tile or one half of a stacked
//! quarter pair. A held-back quarter always consumes the very next image, and
//! each group of five consecutive images contains exactly one large tile.

use crate::io::configuration::GROUP_SIZE;
use crate::wall::dice::ShapeDice;
use crate::wall::fragment::{ImageDescriptor, RenderFragment, TileCell, TileShape, TileSizing};
use log::debug;

/// Mutable placement state carried across calls
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SequencerState {
    /// Images processed since the last reset
    pub count: usize,
    /// Quarter cell waiting for its pair
    pub pending_half: Option<TileCell>,
    /// Whether the current group of five already holds its large tile
    pub big_tile_placed: bool,
}

impl SequencerState {
    /// Fresh state
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide the shape of `image` and return a fragment if one is complete
    ///
    /// Returns `None` when the image was held back as the first half of a
    /// quarter pair.
    pub fn place(
        &mut self,
        image: ImageDescriptor,
        sizing: &TileSizing,
        dice: &mut dyn ShapeDice,
    ) -> Option<RenderFragment> {
        self.count += 1;

        // A held half always takes the next image, whatever its odds
        if let Some(first) = self.pending_half.take() {
            let second = TileCell::new(TileShape::QuarterPairSecond, image, sizing);
            debug!("image #{} completes a quarter pair", self.count);
            return Some(RenderFragment::Merged { first, second });
        }

        if (self.count - 1).is_multiple_of(GROUP_SIZE) {
            self.big_tile_placed = false;
        }

        if !self.big_tile_placed && (dice.roll_big() || self.count.is_multiple_of(GROUP_SIZE)) {
            self.big_tile_placed = true;
            debug!("image #{} placed as a large tile", self.count);
            return Some(RenderFragment::Single(TileCell::new(
                TileShape::FullHalf,
                image,
                sizing,
            )));
        }

        debug!("image #{} held back as a quarter", self.count);
        self.pending_half = Some(TileCell::new(TileShape::QuarterPairFirst, image, sizing));
        None
    }

    /// Release a held-back quarter as a plain tile
    ///
    /// Used when no further images will arrive, so the last image still renders.
    pub fn flush(&mut self) -> Option<RenderFragment> {
        self.pending_half.take().map(|mut cell| {
            cell.shape = TileShape::DefaultItem;
            RenderFragment::Single(cell)
        })
    }

    /// Zero the counter and drop any held-back quarter and group flag
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether a quarter is waiting for its pair
    pub const fn has_pending(&self) -> bool {
        self.pending_half.is_some()
    }
}

/// Sequencer state bundled with its sizing policy and random source
pub struct TileSequencer<D: ShapeDice> {
    state: SequencerState,
    sizing: TileSizing,
    dice: D,
}

impl<D: ShapeDice> TileSequencer<D> {
    /// Create a sequencer with fresh state
    pub fn new(sizing: TileSizing, dice: D) -> Self {
        Self {
            state: SequencerState::new(),
            sizing,
            dice,
        }
    }

    /// Place one image; see [`SequencerState::place`]
    pub fn place(&mut self, image: ImageDescriptor) -> Option<RenderFragment> {
        self.state.place(image, &self.sizing, &mut self.dice)
    }

    /// Release a held-back quarter as a plain tile
    pub fn flush(&mut self) -> Option<RenderFragment> {
        self.state.flush()
    }

    /// Reset placement state; the random source keeps its position
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Current placement state
    pub const fn state(&self) -> &SequencerState {
        &self.state
    }

    /// Images processed since the last reset
    pub const fn count(&self) -> usize {
        self.state.count
    }
}
