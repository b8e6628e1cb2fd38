//! Arena-backed red-black tree engine.
//!
//! The engine ([`red_black`], [`traversal`]) rebalances nodes that live in
//! any [`NodeStore`] and keeps a [`Header`] with the root, both extremes and
//! the node count current. It never compares keys. [`RbTree`] is an ordered
//! map built on top of it with its own [`NodeArena`].

pub mod arena;
pub mod error;
pub mod header;
pub mod node;
pub mod print;
pub mod red_black;
pub mod traversal;
pub mod tree;
pub mod types;
pub mod util;
pub mod verify;

pub use arena::{NodeArena, NodeHandle};
pub use error::InvariantError;
pub use header::Header;
pub use node::RbTreeNode;
pub use traversal::{decrement, increment};
pub use tree::{Cursor, Iter, RbTree};
pub use types::{Color, Node, NodeId, NodeStore, Position, RbNode, Side};
pub use verify::{height, verify};
