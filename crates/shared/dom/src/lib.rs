//! World Clocks DOM
//!
//! A small arena-backed element tree with just the operations the clock
//! engine and the page skeleton need:
//!
//! - element creation, id / class / data attributes
//! - text content and inline style properties
//! - append / prepend of children (inserting moves a node)
//! - id lookup and class queries in document order
//! - HTML serialization with escaping
//!
//! Nodes are never freed. An element that was created but never inserted
//! stays in the arena unconnected, and id lookup does not see it.

mod document;
mod html;
mod node;

pub use document::{Document, SharedDocument};
pub use html::escape_html;
pub use node::{Element, NodeId};
