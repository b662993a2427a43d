//! Slot engine entry points.

use trellis_core::{Node, Props, RefBinding, SlotError};

use crate::compose_refs::compose_refs;
use crate::merge::merge_props;
use crate::resolve::resolve_target;

/// Compose forwarded props and reference onto the single child element.
///
/// Pure per-render transform: resolves the forwarding target among
/// `children`, merges `outer_props` onto it, composes `outer_ref` with
/// the target's own reference, and returns the resulting clone.
pub fn compose(
    children: &[Node],
    outer_props: &Props,
    outer_ref: Option<RefBinding>,
) -> Result<Node, SlotError> {
    let target = resolve_target(children)?;
    let props = merge_props(outer_props, &target.props);
    let node_ref = compose_refs(outer_ref, target.node_ref.clone());
    Ok(Node::Element(target.clone_with(props, node_ref)))
}

/// Render-facing wrapper: any misuse renders nothing instead of failing
/// the host tree.
pub fn render_slot(children: &[Node], outer_props: &Props, outer_ref: Option<RefBinding>) -> Node {
    compose(children, outer_props, outer_ref).unwrap_or(Node::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_core::{
        ElementNode, Event, Handler, NodeRef, PropValue, RenderHandle, Tag,
    };

    fn make_element(tag: &str) -> ElementNode {
        ElementNode::new(Tag::primitive(tag))
    }

    fn make_props(entries: &[(&str, PropValue)]) -> Props {
        entries
            .iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn test_forwards_props_onto_single_child() {
        let child = make_element("button")
            .with_props(make_props(&[("id", PropValue::from("inner"))]));
        let outer = make_props(&[("data-state", PropValue::from("open"))]);

        let merged = compose(&[Node::Element(child)], &outer, None).unwrap();
        let Node::Element(element) = merged else {
            panic!("expected element");
        };
        assert_eq!(element.tag, Tag::primitive("button"));
        assert_eq!(element.props.get("id"), Some(&PropValue::from("inner")));
        assert_eq!(
            element.props.get("data-state"),
            Some(&PropValue::from("open"))
        );
    }

    #[test]
    fn test_child_declarations_survive_forwarding() {
        let child = make_element("input").with_props(make_props(&[
            ("id", PropValue::from("keep")),
            ("disabled", PropValue::from(true)),
        ]));
        let outer = make_props(&[("id", PropValue::from("dropped"))]);

        let merged = compose(&[Node::Element(child)], &outer, None).unwrap();
        let Node::Element(element) = merged else {
            panic!("expected element");
        };
        assert_eq!(element.props.get("id"), Some(&PropValue::from("keep")));
        assert_eq!(element.props.get("disabled"), Some(&PropValue::from(true)));
    }

    #[test]
    fn test_marker_redirects_forwarding() {
        let target = make_element("a")
            .with_props(make_props(&[("href", PropValue::from("/docs"))]))
            .with_children(vec![Node::text("docs")]);
        let children = vec![
            Node::text("prefix"),
            Node::marker(vec![Node::Element(target)]),
        ];
        let outer = make_props(&[("class", PropValue::from("link"))]);

        let merged = compose(&children, &outer, None).unwrap();
        let Node::Element(element) = merged else {
            panic!("expected element");
        };
        assert_eq!(element.tag, Tag::primitive("a"));
        assert_eq!(element.props.get("class"), Some(&PropValue::from("link")));
        assert_eq!(element.props.get("href"), Some(&PropValue::from("/docs")));
        assert_eq!(
            element.children,
            vec![Node::text("prefix"), Node::text("docs")]
        );
    }

    #[test]
    fn test_composed_ref_reaches_both_holders() {
        let outer_ref = NodeRef::new();
        let inner_ref = NodeRef::new();
        let child = make_element("button").with_ref(inner_ref.clone().into());

        let merged = compose(
            &[Node::Element(child)],
            &Props::new(),
            Some(outer_ref.clone().into()),
        )
        .unwrap();
        let Node::Element(element) = merged else {
            panic!("expected element");
        };

        let binding = element.node_ref.expect("composed binding");
        binding.mount(RenderHandle(5));
        assert_eq!(outer_ref.get(), Some(RenderHandle(5)));
        assert_eq!(inner_ref.get(), Some(RenderHandle(5)));

        binding.unmount();
        assert_eq!(outer_ref.get(), None);
        assert_eq!(inner_ref.get(), None);
    }

    #[test]
    fn test_merged_handler_runs_on_forwarded_event() {
        let log = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let log_inner = std::rc::Rc::clone(&log);
        let inner = Handler::new(move |_: &Event| log_inner.borrow_mut().push("inner"));
        let log_outer = std::rc::Rc::clone(&log);
        let outer = Handler::new(move |_: &Event| log_outer.borrow_mut().push("outer"));

        let child =
            make_element("button").with_props(make_props(&[("onClick", PropValue::Handler(inner))]));
        let forwarded = make_props(&[("onClick", PropValue::Handler(outer))]);

        let merged = compose(&[Node::Element(child)], &forwarded, None).unwrap();
        let Node::Element(element) = merged else {
            panic!("expected element");
        };
        match element.props.get("onClick") {
            Some(PropValue::Handler(handler)) => handler.call(&Event::new("click")),
            other => panic!("expected handler, got {other:?}"),
        }
        assert_eq!(*log.borrow(), vec!["inner", "outer"]);
    }

    #[test]
    fn test_render_slot_maps_misuse_to_empty() {
        let two = vec![
            Node::Element(make_element("a")),
            Node::Element(make_element("b")),
        ];
        assert_eq!(render_slot(&two, &Props::new(), None), Node::Empty);
        assert_eq!(render_slot(&[], &Props::new(), None), Node::Empty);
        assert_eq!(
            render_slot(&[Node::text("x")], &Props::new(), None),
            Node::Empty
        );
    }

    #[test]
    fn test_render_slot_passes_valid_input_through() {
        let child = make_element("span");
        let rendered = render_slot(&[Node::Element(child)], &Props::new(), None);
        assert!(matches!(rendered, Node::Element(_)));
    }
}
