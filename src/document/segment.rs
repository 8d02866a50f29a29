use log::debug;

use super::{NodeKind, NodeRole, PageGroup, PageMap, SegmentError, SlideNode};

/// Split a document into header, body, and footer page groups.
///
/// Runs exactly once per deck. The first and last nodes are the header
/// and footer and form singleton groups; `Rule` nodes separate the body
/// into groups and are consumed. A body without separators yields a
/// single body group, so the smallest valid deck has three pages.
pub fn segment(nodes: &[SlideNode<'_>]) -> Result<PageMap, SegmentError> {
    if nodes.len() < 3 {
        return Err(SegmentError::TooFewNodes);
    }
    if nodes.len() > u16::MAX as usize {
        return Err(SegmentError::TooManyNodes);
    }

    let last = nodes.len() - 1;
    if nodes[0].kind == NodeKind::Rule || nodes[last].kind == NodeKind::Rule {
        return Err(SegmentError::RuleAtEdge);
    }

    let mut map = PageMap::default();
    push_group(&mut map, NodeRole::Header, 0, 1)?;

    // Start of the body group currently being scanned.
    let mut open = 1u16;
    for index in 1..last {
        if nodes[index].kind != NodeKind::Rule {
            continue;
        }
        if index as u16 == open {
            return Err(SegmentError::EmptySegment);
        }
        push_group(&mut map, NodeRole::Content, open, index as u16)?;
        open = index as u16 + 1;
    }
    if open as usize == last {
        return Err(SegmentError::EmptySegment);
    }
    push_group(&mut map, NodeRole::Content, open, last as u16)?;

    push_group(&mut map, NodeRole::Footer, last as u16, last as u16 + 1)?;

    debug!(
        "deck-segment: {} nodes -> {} pages",
        nodes.len(),
        map.page_count()
    );
    Ok(map)
}

fn push_group(map: &mut PageMap, role: NodeRole, start: u16, end: u16) -> Result<(), SegmentError> {
    map.groups
        .push(PageGroup { role, start, end })
        .map_err(|_| SegmentError::TooManyGroups)
}
