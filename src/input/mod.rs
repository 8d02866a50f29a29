//! Input abstraction layer.

pub mod mock;

/// Logical page-turn actions consumed by the engine.
///
/// Mapping raw host input (arrow keys, rotary detents, swipes) onto
/// these is the host's job; anything it does not map never reaches the
/// engine.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputEvent {
    NextPage,
    PrevPage,
}

/// Polled input provider.
pub trait InputProvider {
    type Error;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error>;
}
