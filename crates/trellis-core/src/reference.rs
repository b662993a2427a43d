//! Render references and their bindings.
//!
//! A `NodeRef` is a per-render cell the host populates with the handle of
//! the rendered artifact after mount and clears on unmount. A `RefBinding`
//! is what actually sits on an element: an ordered list of holder cells
//! that all receive the same handle when the host commits.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use smallvec::SmallVec;

/// Handle to a rendered artifact, assigned by the host after mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderHandle(pub u64);

/// A shared cell populated by the host with the rendered handle.
#[derive(Clone, Default)]
pub struct NodeRef {
    cell: Rc<RefCell<Option<RenderHandle>>>,
}

impl NodeRef {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current handle, if mounted.
    pub fn get(&self) -> Option<RenderHandle> {
        *self.cell.borrow()
    }

    pub fn set(&self, handle: RenderHandle) {
        *self.cell.borrow_mut() = Some(handle);
    }

    pub fn clear(&self) {
        *self.cell.borrow_mut() = None;
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.cell, &other.cell)
    }
}

impl fmt::Debug for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodeRef").field(&self.get()).finish()
    }
}

/// The reference slot of an element: one or more holder cells, assigned
/// in registration order on mount and on unmount alike.
#[derive(Debug, Clone, PartialEq)]
pub struct RefBinding {
    holders: SmallVec<[NodeRef; 2]>,
}

impl RefBinding {
    /// Bind a single holder.
    pub fn new(holder: NodeRef) -> Self {
        let mut holders = SmallVec::new();
        holders.push(holder);
        Self { holders }
    }

    /// Registered holders, in registration order.
    pub fn holders(&self) -> &[NodeRef] {
        &self.holders
    }

    /// Append another binding's holders after this one's.
    pub fn join(&self, other: &RefBinding) -> RefBinding {
        let mut holders = self.holders.clone();
        holders.extend(other.holders.iter().cloned());
        RefBinding { holders }
    }

    /// Host commit path: fan the mounted handle out to every holder.
    pub fn mount(&self, handle: RenderHandle) {
        for holder in &self.holders {
            holder.set(handle);
        }
    }

    /// Host commit path: fan the clearing signal out to every holder.
    pub fn unmount(&self) {
        for holder in &self.holders {
            holder.clear();
        }
    }
}

impl From<NodeRef> for RefBinding {
    fn from(holder: NodeRef) -> Self {
        RefBinding::new(holder)
    }
}
