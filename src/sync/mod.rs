//! Cross-view page synchronization over message passing.
//!
//! Views of one deck never share memory; they exchange the current
//! page over a publish/subscribe channel the host constructs, already
//! scoped to that deck (one in-process bus, or one named platform
//! channel per document). Delivery is best-effort with no
//! acknowledgement and no retry: a lost message leaves a view stale
//! until the next transition on either side.

pub mod local_bus;

/// Sole payload exchanged between views of one deck.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SyncMessage {
    /// 1-based page the sending view moved to.
    pub page: u16,
}

/// Publish/poll handle on a channel scoped to one deck.
pub trait PageChannel {
    type Error;

    /// Announce a local page change to every sibling view.
    fn publish(&mut self, message: SyncMessage) -> Result<(), Self::Error>;

    /// Next undelivered message from a sibling view, if any.
    fn poll_message(&mut self) -> Result<Option<SyncMessage>, Self::Error>;
}

/// Channel for hosts without a broadcast primitive.
///
/// Publishing is silently skipped and nothing ever arrives; a deck
/// holding this channel presents exactly like a synchronized one.
#[derive(Default, Debug, Clone, Copy)]
pub struct NullChannel;

impl NullChannel {
    pub const fn new() -> Self {
        Self
    }
}

impl PageChannel for NullChannel {
    type Error = core::convert::Infallible;

    fn publish(&mut self, _message: SyncMessage) -> Result<(), Self::Error> {
        Ok(())
    }

    fn poll_message(&mut self) -> Result<Option<SyncMessage>, Self::Error> {
        Ok(None)
    }
}
