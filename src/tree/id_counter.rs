use derive_more::{Display, From, Into};

/// Identifier handed out to a node when a traversal visits it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into)]
pub struct NodeId(u64);

impl NodeId {
    pub const FIRST: NodeId = NodeId(1);

    pub fn get(self) -> u64 {
        self.0
    }
}

/// Source of sequential node identifiers.
///
/// Every traversal gets its own counter unless the caller deliberately passes
/// one along, in which case numbering carries on where the last walk stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdCounter {
    next: NodeId,
}

impl Default for IdCounter {
    fn default() -> Self {
        Self::starting_at(NodeId::FIRST)
    }
}

impl IdCounter {
    pub fn starting_at(first: NodeId) -> Self {
        Self { next: first }
    }

    /// Returns the current identifier and advances the counter by one.
    pub fn next_id(&mut self) -> NodeId {
        let id = self.next;
        self.next = NodeId(id.0 + 1);
        id
    }

    pub fn peek(&self) -> NodeId {
        self.next
    }
}
