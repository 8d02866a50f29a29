//! Presentation engine state machine.

use log::{debug, warn};

use crate::{
    document::{segment, LayoutHint, PageMap, SegmentError, SlideNode},
    input::{InputEvent, InputProvider},
    labels::{progress_label, PROGRESS_LABEL_BYTES},
    location::{format_page, parse_page, FragmentStore},
    notes::marked_notes,
    render::{NodeDisplay, Stage},
    sync::{PageChannel, SyncMessage},
};

/// Default token wrapping presenter notes inside node text.
pub const DEFAULT_NOTE_MARKER: &str = "%%";

/// Outcome of one [`Presentation::pump`] call.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PumpResult {
    /// No pending event changed the page.
    Idle,
    /// At least one transition was applied and rendered.
    Updated,
}

/// Engine tunables.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DeckConfig {
    /// Token that opens and closes a presenter note in node text.
    pub note_marker: &'static str,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            note_marker: DEFAULT_NOTE_MARKER,
        }
    }
}

/// One presentation instance: the exclusive owner of the current page.
///
/// Built over a borrowed document, it segments once, restores the page
/// from the fragment store, and from then on every accepted transition
/// renders, rewrites the fragment, and (for local transitions only)
/// publishes to sibling views, in that order, before returning.
pub struct Presentation<'doc, ST, FS, CH, IN>
where
    ST: Stage,
    FS: FragmentStore,
    CH: PageChannel,
    IN: InputProvider,
{
    nodes: &'doc [SlideNode<'doc>],
    pages: PageMap,
    page: u16,
    stage: ST,
    fragment: FS,
    channel: CH,
    input: IN,
    config: DeckConfig,
}

include!("view.rs");
include!("navigation.rs");
include!("runtime.rs");
