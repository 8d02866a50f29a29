//! Core engine for paginated talk decks.
//!
//! A host hands over one document as a slice of [`document::SlideNode`]s
//! (header first, footer last, horizontal-rule separators between body
//! pages), implements the [`render::Stage`], [`location::FragmentStore`],
//! [`sync::PageChannel`], and [`input::InputProvider`] seams, and drives
//! [`Presentation::pump`] from its event loop.
//!
//! The engine owns the current page: it segments the document once,
//! keeps every transition inside bounds, mirrors the page into the
//! fragment store for deep links and reloads, and keeps sibling views
//! of the same deck aligned over the sync channel without echoing
//! inbound updates back out.

#![cfg_attr(not(test), no_std)]

pub mod app;
pub mod document;
pub mod input;
pub mod labels;
pub mod location;
pub mod notes;
pub mod render;
pub mod sync;

pub use app::{DeckConfig, Presentation, PumpResult, DEFAULT_NOTE_MARKER};
pub use document::{
    LayoutHint, NodeKind, NodeRole, PageGroup, PageMap, SegmentError, SlideNode,
};
pub use input::{InputEvent, InputProvider};
pub use location::{FragmentStore, FragmentText};
pub use render::{NodeDisplay, Stage};
pub use sync::{NullChannel, PageChannel, SyncMessage};
