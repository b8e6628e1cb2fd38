//! Link-chasing helpers over a [`NodeStore`](crate::types::NodeStore).

pub mod first;
pub mod next;

pub use first::{first, last, leftmost, rightmost};
pub use next::{next, prev};
