#![allow(dead_code)]

use std::fmt::Display;

use rbtree_core::{Color, Node, NodeId, RbNode, RbTree};
use simplelog::{Config, LevelFilter, TestLogger};

/// Routes engine `debug!`/`trace!` output through the test harness. Safe to
/// call from every test; only the first call installs the logger.
pub fn init_logging() {
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
}

/// Compact shape: `key` + `R`/`B`, children in parentheses, `-` for a
/// missing child. Leaves print without parentheses.
pub fn shape<K, V, C>(tree: &RbTree<K, V, C>) -> String
where
    K: Display,
    C: Fn(&K, &K) -> i32,
{
    fn walk<K: Display, V, C: Fn(&K, &K) -> i32>(
        tree: &RbTree<K, V, C>,
        id: Option<NodeId>,
    ) -> String {
        let Some(id) = id else {
            return "-".to_string();
        };
        let node = tree.node(id);
        let color = match node.color() {
            Color::Red => 'R',
            Color::Black => 'B',
        };
        if node.l().is_none() && node.r().is_none() {
            return format!("{}{color}", node.key());
        }
        format!(
            "{}{color}({},{})",
            node.key(),
            walk(tree, node.l()),
            walk(tree, node.r())
        )
    }
    walk(tree, tree.header().root())
}

pub fn keys<K: Clone, V, C: Fn(&K, &K) -> i32>(tree: &RbTree<K, V, C>) -> Vec<K> {
    tree.iter().map(|(k, _)| k.clone()).collect()
}

pub fn next_pseudo(seed: &mut u64, modulo: u64) -> i32 {
    *seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
    ((*seed >> 33) % modulo) as i32
}
