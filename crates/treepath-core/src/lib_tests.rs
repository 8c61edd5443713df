use crate::memory::MemoryTree;
use crate::{Colors, Node, Root, all_parameter_names};

#[test]
fn root_children_of_node_and_detached() {
    let mut builder = MemoryTree::builder();
    let window = builder.node("Window");
    let ok = builder.node("OK");
    let cancel = builder.node("Cancel");
    builder.child(window, ok).child(window, cancel);
    let tree = builder.build();

    let names = |root: &Root<_>| -> Vec<String> {
        root.children().iter().map(Node::node_name).collect()
    };

    assert_eq!(names(&Root::Node(tree.node(window))), ["OK", "Cancel"]);
    assert_eq!(names(&tree.desktop()), ["Window"]);
}

#[test]
fn singleton_adapter_exposes_the_node_itself() {
    let mut builder = MemoryTree::builder();
    let window = builder.node("Window");
    let tree = builder.build();

    let adapted = Root::from(tree.node(window)).into_singleton();
    assert_eq!(adapted.children(), vec![tree.node(window)]);

    let synthetic = tree.desktop().into_singleton();
    assert!(synthetic.children().is_empty());
}

#[test]
fn parent_of_detached_root_is_none() {
    let tree = MemoryTree::builder().build();
    assert!(tree.desktop().parent().is_none());
    assert!(tree.desktop().as_node().is_none());
}

#[test]
fn parameter_names_expand_flag_lists() {
    let mut builder = MemoryTree::builder();
    let window = builder.node("Window");
    builder
        .param(window, "title", "Untitled")
        .param(window, "style_", "VISIBLE  CHILD")
        .param(window, "exstyle_", "");
    let tree = builder.build();

    let names = all_parameter_names(&tree.node(window));
    insta::assert_debug_snapshot!(names, @r#"
    [
        "title",
        "style_",
        "exstyle_",
        "style_VISIBLE",
        "style_CHILD",
    ]
    "#);
}

#[test]
fn parameter_names_without_flags_are_unchanged() {
    let mut builder = MemoryTree::builder();
    let edit = builder.node("Edit");
    builder.param(edit, "id", "10");
    let tree = builder.build();

    assert_eq!(all_parameter_names(&tree.node(edit)), ["id"]);
}

#[test]
fn colors_off_renders_plain_text() {
    let colors = Colors::new(false);
    assert!(!colors.is_enabled());
    assert_eq!(colors.name("Edit"), "Edit");
    assert_eq!(colors.param("id", "15"), "id=15");
}

#[test]
fn colors_on_wraps_in_escapes() {
    let colors = Colors::new(true);
    assert!(colors.is_enabled());
    assert_eq!(colors.name("Edit"), "\x1b[34mEdit\x1b[0m");
    assert_eq!(colors.param("id", "15"), "\x1b[2mid=\x1b[0m\x1b[32m15\x1b[0m");
}
