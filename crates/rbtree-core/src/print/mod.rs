//! Text dumps of tree shape for debugging and test diagnostics.

pub mod binary;
pub mod types;

pub use binary::{print_binary, print_node};
pub use types::{PrintChild, Printable};
