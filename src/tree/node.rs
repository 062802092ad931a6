use super::NodeId;

/// A vertex of the tree together with the subtree it owns.
///
/// `kind` is a free-form classification such as `"root"`, `"branch"` or `"leaf"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub(super) id: Option<NodeId>,
    pub(super) name: String,
    pub(super) kind: String,
    pub(super) children: Vec<Node>,
}

impl Node {
    pub fn new(name: impl Into<String>, kind: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            id: None,
            name: name.into(),
            kind: kind.into(),
            children,
        }
    }

    pub fn leaf(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self::new(name, kind, Vec::new())
    }

    /// Appends `node` after the existing children. Duplicates are not checked.
    pub fn add_child(&mut self, node: Node) {
        self.children.push(node);
    }

    /// `None` until a walk has visited this node.
    pub fn id(&self) -> Option<NodeId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }
}
