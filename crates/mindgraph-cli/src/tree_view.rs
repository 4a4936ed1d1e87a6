//! Plain-text drawing of a mind-map tree.

use std::fmt::Write;

use mindgraph::{identifier::Id, tree::Tree};

/// Draw `tree` with box-drawing connectors, one node label per line.
pub fn render(tree: &Tree) -> String {
    let mut out = String::new();
    let root = tree.root_id();
    let _ = writeln!(out, "{}", tree.label(root).unwrap_or_default());
    render_children(tree, root, "", &mut out);
    out
}

fn render_children(tree: &Tree, id: Id, prefix: &str, out: &mut String) {
    let children: Vec<Id> = tree.children(id).map(|node| node.id()).collect();
    let last = children.len().saturating_sub(1);

    for (i, child) in children.into_iter().enumerate() {
        let (connector, indent) = if i == last {
            ("└── ", "    ")
        } else {
            ("├── ", "│   ")
        };
        let label = tree.label(child).unwrap_or_default();
        let _ = writeln!(out, "{prefix}{connector}{label}");
        render_children(tree, child, &format!("{prefix}{indent}"), out);
    }
}
