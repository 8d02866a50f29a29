//! Document node model and page segmentation.

mod segment;

pub use segment::segment;

/// Maximum page groups in one deck, header and footer included.
pub const MAX_PAGE_GROUPS: usize = 64;

/// Element class of a document node as reported by the host.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NodeKind {
    /// Regular content element.
    Text,
    /// Horizontal-rule-equivalent separator element.
    Rule,
}

/// Static per-node layout mode applied while the node is visible.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LayoutHint {
    #[default]
    Block,
    /// Side-by-side flow for nodes authored as multi-column.
    Columns,
}

/// Structural role decided for each node when the deck is segmented.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NodeRole {
    Header,
    Content,
    Delimiter,
    Footer,
}

/// One document node as handed over by the host.
///
/// The engine never parses markup; it only needs the separator class,
/// the layout hint, and the node text (for presenter notes).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SlideNode<'a> {
    pub kind: NodeKind,
    pub layout: LayoutHint,
    pub text: &'a str,
}

impl<'a> SlideNode<'a> {
    /// Content node with the default block layout.
    pub const fn text(text: &'a str) -> Self {
        Self {
            kind: NodeKind::Text,
            layout: LayoutHint::Block,
            text,
        }
    }

    /// Separator node; carries no content of its own.
    pub const fn rule() -> Self {
        Self {
            kind: NodeKind::Rule,
            layout: LayoutHint::Block,
            text: "",
        }
    }

    /// Flag this node for side-by-side rendering.
    pub const fn with_columns(mut self) -> Self {
        self.layout = LayoutHint::Columns;
        self
    }
}

/// Contiguous node range shown or hidden as one navigational page.
///
/// Groups are fixed at segmentation time and never contain separator
/// nodes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PageGroup {
    role: NodeRole,
    start: u16,
    end: u16,
}

impl PageGroup {
    /// Role shared by the nodes of this group.
    pub fn role(&self) -> NodeRole {
        self.role
    }

    /// Indices into the document node slice, in document order.
    pub fn nodes(&self) -> core::ops::Range<usize> {
        self.start as usize..self.end as usize
    }

    /// Nodes in this group; always at least one.
    pub fn node_count(&self) -> u16 {
        self.end - self.start
    }
}

/// Ordered page groups for one deck. Built once, read on every render.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PageMap {
    groups: heapless::Vec<PageGroup, MAX_PAGE_GROUPS>,
}

impl PageMap {
    /// Total pages, header and footer included.
    pub fn page_count(&self) -> u16 {
        self.groups.len() as u16
    }

    /// Group for a 1-based page number.
    pub fn group(&self, page: u16) -> Option<&PageGroup> {
        if page == 0 {
            return None;
        }
        self.groups.get(page as usize - 1)
    }

    /// Whether `page` addresses a group in this deck.
    pub fn contains_page(&self, page: u16) -> bool {
        page >= 1 && page <= self.page_count()
    }

    /// Groups in page order.
    pub fn iter(&self) -> impl Iterator<Item = &PageGroup> {
        self.groups.iter()
    }
}

/// Fatal document-shape errors detected during segmentation.
///
/// The deck cannot be constructed over a malformed document; there is
/// no degraded single-page fallback.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SegmentError {
    /// Fewer than header, one body node, and footer.
    TooFewNodes,
    /// More nodes than the engine indexes.
    TooManyNodes,
    /// A separator sits where the header or footer must be.
    RuleAtEdge,
    /// A separator opens or closes the body, or two separators touch.
    EmptySegment,
    /// More page groups than [`MAX_PAGE_GROUPS`].
    TooManyGroups,
}
