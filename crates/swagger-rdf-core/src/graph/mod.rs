//! Graph model: nodes, triples and the triple store.

mod node;
mod store;

pub use node::{LiteralNode, LiteralTag, Node, Triple, UriNode};
pub use store::Graph;
