//! Forwarding target resolution.
//!
//! Scans a children sequence for the marker wrapper and resolves the
//! single element the forwarded props/ref should land on. With a marker,
//! the marker's sole child becomes the target and the sibling sequence is
//! rebuilt with the marker's position replaced by that child's own
//! children.

use trellis_core::{ElementNode, MarkerNode, Node, SlotError};

/// Resolve the forwarding target for a children sequence.
///
/// The returned element already carries its rewritten children when a
/// marker was involved.
pub fn resolve_target(children: &[Node]) -> Result<ElementNode, SlotError> {
    // Hosts flatten absent children out of the sequence before counting.
    let present: Vec<&Node> = children.iter().filter(|node| !node.is_empty()).collect();

    let mut markers = present.iter().enumerate().filter_map(|(index, node)| match node {
        Node::Marker(marker) => Some((index, marker)),
        _ => None,
    });

    match markers.next() {
        None => resolve_only_child(&present),
        Some((index, marker)) => {
            let extra = markers.count();
            if extra > 0 {
                return Err(SlotError::AmbiguousMarker { count: extra + 1 });
            }
            resolve_through_marker(&present, index, marker)
        }
    }
}

/// No marker: the entire children value must be exactly one element.
fn resolve_only_child(present: &[&Node]) -> Result<ElementNode, SlotError> {
    match present {
        [] => Err(SlotError::NoTarget),
        [Node::Element(element)] => Ok(element.clone()),
        [_] => Err(SlotError::NonElementTarget),
        more => Err(SlotError::MultipleTargets { count: more.len() }),
    }
}

/// One marker: unwrap its sole child and splice that child's children
/// into the marker's sibling position.
fn resolve_through_marker(
    present: &[&Node],
    marker_index: usize,
    marker: &MarkerNode,
) -> Result<ElementNode, SlotError> {
    let contents: Vec<&Node> = marker
        .children
        .iter()
        .filter(|node| !node.is_empty())
        .collect();

    let target = match contents.as_slice() {
        [] => return Err(SlotError::NoTarget),
        [Node::Element(element)] => element,
        [_] => return Err(SlotError::NonElementTarget),
        more => return Err(SlotError::MultipleTargets { count: more.len() }),
    };

    let mut rebuilt = Vec::with_capacity(present.len() - 1 + target.children.len());
    for (index, node) in present.iter().enumerate() {
        if index == marker_index {
            rebuilt.extend(target.children.iter().cloned());
        } else {
            rebuilt.push((*node).clone());
        }
    }

    Ok(target.clone().with_children(rebuilt))
}
