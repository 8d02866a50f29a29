//! Stage contract between the engine and a host renderer.

/// Display state applied to a single document node.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NodeDisplay {
    /// The node belongs to an inactive page.
    Hidden,
    /// Default flow for nodes of the active page.
    Block,
    /// Side-by-side flow for nodes carrying the columns hint.
    Columns,
}

/// Host surface the engine renders into.
///
/// Display and progress updates may fail (a detached host region, a
/// stale handle); the engine logs such failures and finishes the pass.
/// The note methods feed a presenter-facing side channel with no effect
/// on visible output and must not fail.
pub trait Stage {
    type Error;

    /// Apply the display state for the node at `node_index`.
    fn set_node_display(&mut self, node_index: u16, display: NodeDisplay)
        -> Result<(), Self::Error>;

    /// Replace the progress indicator text.
    fn set_progress(&mut self, label: &str) -> Result<(), Self::Error>;

    /// Drop the notes of the previous pass.
    fn clear_notes(&mut self);

    /// Append one presenter note extracted from the active page.
    fn push_note(&mut self, note: &str);
}
