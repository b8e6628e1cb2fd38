//! Cursor movement over [`Position`]s.
//!
//! `End` sits one past the maximum going forward and one before the minimum
//! going backward, so a walk in either direction terminates there.

use crate::header::Header;
use crate::types::{NodeStore, Position};
use crate::util::{next, prev};

/// Moves to the in-order successor. The maximum steps to `End`; `End` stays
/// at `End`.
pub fn increment<S: NodeStore + ?Sized>(store: &S, pos: Position) -> Position {
    match pos {
        Position::Node(id) => next(store, id).into(),
        Position::End => Position::End,
    }
}

/// Moves to the in-order predecessor. `End` steps to the cached maximum; the
/// minimum steps to `End`.
pub fn decrement<S: NodeStore + ?Sized>(store: &S, header: &Header, pos: Position) -> Position {
    match pos {
        Position::Node(id) => prev(store, id).into(),
        Position::End => header.rightmost().into(),
    }
}
