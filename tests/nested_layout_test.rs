//! Nested layout tests: sums, sorting, padding and placement over trees.
//!
//! Run: cargo test --test nested_layout_test

#![allow(clippy::unwrap_used)]

use approx::assert_relative_eq;
use tracing_subscriber::EnvFilter;

use squarify::geometry::Rect;
use squarify::nested::{
    force_nested_sum, normalize_nested, sort_nested, squarify_nested, AttrValue, NestedLayout,
    Node, Padding,
};
use squarify::Error;

fn project_tree() -> Vec<Node> {
    vec![
        Node::new("docs", 0.0).with_children(vec![
            Node::new("guide.md", 40.0),
            Node::new("api.md", 60.0),
        ]),
        Node::new("src", 10.0).with_children(vec![
            Node::new("parser", 0.0).with_children(vec![
                Node::new("lexer.rs", 150.0),
                Node::new("ast.rs", 250.0),
            ]),
            Node::new("main.rs", 90.0),
        ]),
        Node::new("LICENSE", 20.0),
    ]
}

fn all_rects(forest: &[Node]) -> Vec<(String, Rect)> {
    let mut out = Vec::new();
    for root in forest {
        root.walk(|node, _| out.push((node.name().to_string(), node.rect().unwrap())));
    }
    out
}

#[test]
fn test_two_level_ratio() {
    let mut forest = vec![Node::new("root", 0.0).with_children(vec![
        Node::new("seventy", 70.0),
        Node::new("thirty", 30.0),
    ])];
    let bounds = Rect::new(0.0, 0.0, 10.0, 10.0);
    squarify_nested(&mut forest, bounds, &[0.0, 0.0, 0.0, 0.0]).unwrap();

    let children = forest[0].children();
    let a = children[0].rect().unwrap().area();
    let b = children[1].rect().unwrap().area();
    assert_relative_eq!(a + b, 100.0, epsilon = 1e-9);
    assert_relative_eq!(a / b, 7.0 / 3.0, epsilon = 1e-9);
}

#[test]
fn test_every_node_gets_a_rect_inside_its_parent() {
    let mut forest = project_tree();
    sort_nested(&mut forest);
    force_nested_sum(&mut forest);
    forest.sort_by(|a, b| b.cached_sum().unwrap().total_cmp(&a.cached_sum().unwrap()));
    let bounds = Rect::new(0.0, 0.0, 200.0, 120.0);
    NestedLayout::new().layout(&mut forest, bounds).unwrap();

    fn check(parent: &Node) {
        let outer = parent.rect().unwrap();
        for child in parent.children() {
            let inner = child.rect().unwrap();
            assert!(outer.encloses(&inner, 1e-9), "{} escapes {}", child.name(), parent.name());
            check(child);
        }
    }
    for root in &forest {
        assert!(bounds.encloses(&root.rect().unwrap(), 1e-9));
        check(root);
    }
    assert_eq!(all_rects(&forest).len(), 9);
}

#[test]
fn test_top_level_areas_follow_nested_sums() {
    let mut forest = project_tree();
    force_nested_sum(&mut forest);
    // src = 10 + (150 + 250) + 90, docs = 100, LICENSE = 20
    let sums: Vec<f64> = forest.iter_mut().map(|n| n.nested_sum(false)).collect();
    assert_eq!(sums, vec![100.0, 500.0, 20.0]);

    forest.swap(0, 1);
    let bounds = Rect::new(0.0, 0.0, 62.0, 10.0);
    NestedLayout::new().layout(&mut forest, bounds).unwrap();

    let areas: Vec<f64> = forest.iter().map(|n| n.rect().unwrap().area()).collect();
    assert_relative_eq!(areas[0], 500.0, epsilon = 1e-9);
    assert_relative_eq!(areas[1], 100.0, epsilon = 1e-9);
    assert_relative_eq!(areas[2], 20.0, epsilon = 1e-9);
}

#[test]
fn test_normalize_nested_sets_top_level() {
    let mut forest = project_tree();
    normalize_nested(&mut forest, 10.0, 62.0).unwrap();
    assert_eq!(forest[0].normalized_value(), Some(100.0));
    assert_eq!(forest[1].normalized_value(), Some(500.0));
    assert!(forest[1].children()[0].normalized_value().is_none());
}

#[test]
fn test_padding_arity_errors() {
    let mut forest = project_tree();
    let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
    for pad in [&[][..], &[1.0][..], &[1.0, 2.0, 3.0][..], &[1.0; 5][..]] {
        assert_eq!(
            squarify_nested(&mut forest, bounds, pad),
            Err(Error::InvalidPadding { len: pad.len() })
        );
    }
    assert!(forest.iter().all(|n| n.rect().is_none()));
}

#[test]
fn test_explicit_padding_offsets_children() {
    let mut forest = vec![Node::new("box", 0.0).with_children(vec![Node::new("only", 1.0)])];
    NestedLayout::new()
        .padding(Padding::Explicit {
            left: 1.0,
            right: 2.0,
            bottom: 3.0,
            top: 4.0,
        })
        .layout(&mut forest, Rect::new(0.0, 0.0, 20.0, 20.0))
        .unwrap();

    let only = forest[0].children()[0].rect().unwrap();
    assert_relative_eq!(only.x, 1.0);
    assert_relative_eq!(only.y, 3.0);
    assert_relative_eq!(only.dx, 17.0);
    assert_relative_eq!(only.dy, 13.0);
}

#[test]
fn test_placeholder_children_stay_visible() {
    let mut forest = vec![Node::new("root", 0.0).with_children(vec![
        Node::new("known", 3.0),
        Node::new("unknown", 0.0),
    ])];
    squarify_nested(&mut forest, Rect::new(0.0, 0.0, 8.0, 8.0), &[0.0, 0.0, 0.0, 0.0]).unwrap();

    let unknown = forest[0].children()[1].rect().unwrap();
    assert_relative_eq!(unknown.area(), 16.0, epsilon = 1e-9);
}

#[test]
fn test_attributes_survive_layout() {
    let leaf = Node::try_new("leaf", 5.0, Vec::new(), [("color", "teal")]).unwrap();
    let mut forest = vec![leaf];
    squarify_nested(&mut forest, Rect::new(0.0, 0.0, 4.0, 4.0), &[2.0, 5.0]).unwrap();

    assert_eq!(forest[0].attr("color"), Some(&AttrValue::Text("teal".to_string())));
    assert_eq!(forest[0].rect(), Some(Rect::new(0.0, 0.0, 4.0, 4.0)));
}

#[test]
fn test_relayout_after_value_change() {
    let mut forest = vec![Node::new("root", 0.0).with_children(vec![
        Node::new("a", 1.0),
        Node::new("b", 1.0),
    ])];
    let bounds = Rect::new(0.0, 0.0, 10.0, 10.0);
    let layout = NestedLayout::new().pad(&[0.0, 0.0, 0.0, 0.0]).unwrap();
    layout.layout(&mut forest, bounds).unwrap();

    forest[0].children_mut()[0].set_value(3.0);
    layout.layout(&mut forest, bounds).unwrap();

    let a = forest[0].children()[0].rect().unwrap().area();
    assert_relative_eq!(a, 75.0, epsilon = 1e-9);
}

/// Route layout events to the test output; `RUST_LOG=squarify=debug` shows
/// every level and `warn` shows collapsed subtrees.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_cramped_parent_collapses_subtree() {
    init_tracing();
    // "tiny" gets a 2 x 5 cell, and (2, 5) padding leaves no interior.
    let mut forest = vec![
        Node::new("big", 0.0).with_children(vec![Node::new("file", 90.0)]),
        Node::new("tiny", 0.0).with_children(vec![
            Node::new("dir", 0.0).with_children(vec![Node::new("leaf", 10.0)]),
        ]),
    ];
    NestedLayout::new()
        .layout(&mut forest, Rect::new(0.0, 0.0, 20.0, 5.0))
        .unwrap();

    let tiny = forest[1].rect().unwrap();
    assert_relative_eq!(tiny.area(), 10.0, epsilon = 1e-9);
    let origin = (tiny.x + 1.0, tiny.y + 1.0);
    forest[1].walk(|node, depth| {
        if depth > 0 {
            let rect = node.rect().unwrap();
            assert_eq!(rect.area(), 0.0, "{} kept area", node.name());
            assert_relative_eq!(rect.x, origin.0, epsilon = 1e-9);
            assert_relative_eq!(rect.y, origin.1, epsilon = 1e-9);
            assert_eq!(node.normalized_value(), Some(0.0));
        }
    });
    assert!(forest[0].children()[0].rect().unwrap().area() > 0.0);
}

#[cfg(feature = "serde")]
#[test]
fn test_layout_config_from_json() {
    let layout: NestedLayout =
        serde_json::from_str(r#"{ "padding": { "Symmetric": { "x": 4.0, "y": 6.0 } } }"#).unwrap();
    assert_eq!(layout.padding, Padding::Symmetric { x: 4.0, y: 6.0 });
    assert_eq!(layout.max_depth, 256);
    assert!(layout.refresh_sums);
    assert!(!layout.legacy_compat);

    let rect = serde_json::to_value(Rect::new(1.0, 2.0, 3.0, 4.0)).unwrap();
    assert_eq!(rect["dx"], 3.0);
}
