//! Owned syntax tree produced by the builder.
//!
//! Every node is exclusively owned by its parent, so dropping the root
//! releases the whole tree exactly once.

mod keyword;
mod node;

/// Reserved words recognized by the builder.
pub use keyword::Keyword;
/// Tree nodes, their kinds and the children storage of host nodes.
pub use node::{Host, Node, NodeKind};
