//! Fixed trees used by the walker and application tests.

use super::Node;

/// A root with nothing under it.
pub fn seedling() -> Node {
    Node::leaf("root", "root")
}

/// A root with a single shoot.
pub fn sprout() -> Node {
    Node::new("root", "root", vec![Node::leaf("shoot", "shoot")])
}

/// root -> trunk -> [branch -> [leaf], branch -> [leaf, leaf]]
pub fn sapling() -> Node {
    Node::new(
        "root",
        "root",
        vec![Node::new(
            "trunk",
            "trunk",
            vec![
                Node::new("branch", "branch", vec![Node::leaf("leaf", "leaf")]),
                Node::new(
                    "branch",
                    "branch",
                    vec![Node::leaf("leaf", "leaf"), Node::leaf("leaf", "leaf")],
                ),
            ],
        )],
    )
}
