//! In-memory node tree and its numbering walk.
//!
//! A [`Node`] owns its children outright, so a tree can never contain a cycle.
//! Identifiers are not known until a [`TreeWalker`] visits the node; the walker
//! draws them from an [`IdCounter`] that belongs to the caller, never to the process.

mod id_counter;
mod node;
#[cfg(test)]
pub mod samples;
mod walker;

pub use id_counter::{IdCounter, NodeId};
pub use node::Node;
pub use walker::TreeWalker;
