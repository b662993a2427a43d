//! Node tree types handed to the slot engine by the host renderer.

use crate::props::Props;
use crate::reference::RefBinding;

/// A node in the rendered tree snapshot.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A renderable element.
    Element(ElementNode),
    /// Transparent marker wrapper; renders as its own children.
    Marker(MarkerNode),
    /// A plain text node.
    Text(String),
    /// Absent content, dropped when candidates are counted.
    Empty,
}

impl Node {
    /// Build an element node.
    pub fn element(element: ElementNode) -> Self {
        Node::Element(element)
    }

    /// Build a marker node wrapping the given children.
    pub fn marker(children: Vec<Node>) -> Self {
        Node::Marker(MarkerNode { children })
    }

    /// Build a text node.
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    pub fn is_marker(&self) -> bool {
        matches!(self, Node::Marker(_))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Node::Empty)
    }
}

/// Element type identifier: a primitive tag or a named component.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tag {
    Primitive(String),
    Component(String),
}

impl Tag {
    pub fn primitive(name: impl Into<String>) -> Self {
        Tag::Primitive(name.into())
    }

    pub fn component(name: impl Into<String>) -> Self {
        Tag::Component(name.into())
    }
}

/// An immutable element descriptor.
///
/// Elements are value objects; every transformation produces a new element
/// rather than mutating in place.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementNode {
    /// Element type identifier.
    pub tag: Tag,
    /// Declared props, in declaration order.
    pub props: Props,
    /// Reference slot, populated by the host after mount.
    pub node_ref: Option<RefBinding>,
    /// Ordered children.
    pub children: Vec<Node>,
}

impl ElementNode {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            props: Props::new(),
            node_ref: None,
            children: Vec::new(),
        }
    }

    pub fn with_props(mut self, props: Props) -> Self {
        self.props = props;
        self
    }

    pub fn with_ref(mut self, binding: RefBinding) -> Self {
        self.node_ref = Some(binding);
        self
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    /// Clone this element with overridden props and reference slot.
    pub fn clone_with(&self, props: Props, node_ref: Option<RefBinding>) -> ElementNode {
        ElementNode {
            tag: self.tag.clone(),
            props,
            node_ref,
            children: self.children.clone(),
        }
    }
}

/// The transparent marker wrapper: renders as exactly its children and
/// carries no props of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerNode {
    pub children: Vec<Node>,
}
