use super::types::PrintChild;
use crate::types::{Color, Node, NodeId, NodeStore, RbNode};

/// Lays out the present children under `tab`, left (`←`) before right (`→`).
/// Each child renders itself one indent level deeper.
pub fn print_binary(tab: Option<&str>, children: [Option<&PrintChild>; 2]) -> String {
    let tab = tab.unwrap_or("");
    let child_tab = format!("{tab}  ");
    ["← ", "→ "]
        .into_iter()
        .zip(children)
        .filter_map(|(arrow, child)| {
            child.map(|render| format!("\n{tab}{arrow}{}", render(&child_tab)))
        })
        .collect()
}

fn color_tag(color: Color) -> &'static str {
    match color {
        Color::Red => "[red]",
        Color::Black => "[black]",
    }
}

/// Renders the subtree at `node` as `label [color]` lines.
pub fn print_node<S, F>(store: &S, node: Option<NodeId>, tab: &str, label: &F) -> String
where
    S: NodeStore + ?Sized,
    F: Fn(NodeId) -> String,
{
    let Some(id) = node else {
        return "∅".to_string();
    };
    let n = store.node(id);
    let (l, r) = (n.l(), n.r());
    let left = |tab: &str| print_node(store, l, tab, label);
    let right = |tab: &str| print_node(store, r, tab, label);
    let children: [Option<&PrintChild>; 2] = [
        l.is_some().then_some(&left as &PrintChild),
        r.is_some().then_some(&right as &PrintChild),
    ];
    format!(
        "{} {}{}",
        label(id),
        color_tag(n.color()),
        print_binary(Some(tab), children)
    )
}
