use tracing::debug;

use super::{IdCounter, Node, NodeId};

const INDENT: &str = "  ";

fn format_line(level: usize, name: &str, kind: &str, id: NodeId) -> String {
    format!("{}{name} ({kind} : {id})", INDENT.repeat(level))
}

/// Lazy pre-order walk that numbers nodes as it reaches them.
///
/// Every call to `next` assigns the next identifier to the visited node and
/// yields its printed line, indented two spaces per level below the root.
/// Siblings are visited left to right, each subtree before the next sibling.
/// The walk keeps its own stack, so tree height is not limited by the call stack.
pub struct TreeWalker<'a> {
    stack: Vec<(&'a mut Node, usize)>,
    counter: IdCounter,
}

impl<'a> TreeWalker<'a> {
    /// Walks `root` with a fresh counter, so numbering starts at 1.
    pub fn new(root: &'a mut Node) -> Self {
        Self::with_counter(root, IdCounter::default())
    }

    /// Walks `root` continuing from `counter`.
    pub fn with_counter(root: &'a mut Node, counter: IdCounter) -> Self {
        debug!("Walking tree '{}' from id {}", root.name, counter.peek());
        Self {
            stack: vec![(root, 0)],
            counter,
        }
    }

    /// Hands back the counter, positioned after the last visited node.
    pub fn into_counter(self) -> IdCounter {
        self.counter
    }
}

impl Iterator for TreeWalker<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let (node, level) = self.stack.pop()?;
        let Node {
            id,
            name,
            kind,
            children,
        } = node;

        let assigned = self.counter.next_id();
        *id = Some(assigned);

        // Reversed so the leftmost child is popped first
        self.stack
            .extend(children.iter_mut().rev().map(|child| (child, level + 1)));

        Some(format_line(level, name, kind, assigned))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::samples;
    use rstest::*;

    fn ids_in_pre_order(node: &Node, out: &mut Vec<Option<u64>>) {
        out.push(node.id().map(NodeId::get));
        for child in node.children() {
            ids_in_pre_order(child, out);
        }
    }

    fn leading_spaces(line: &str) -> usize {
        line.len() - line.trim_start_matches(' ').len()
    }

    #[test]
    fn single_node_gets_id_one() {
        let mut node = samples::seedling();

        let lines: Vec<_> = TreeWalker::new(&mut node).collect();

        assert_eq!(lines, ["root (root : 1)"]);
        assert!(lines[0].contains(": 1)"));
        assert_eq!(node.id(), Some(NodeId::FIRST));
    }

    #[test]
    fn direct_children_are_numbered_in_order() {
        let mut root = Node::new(
            "root",
            "root",
            vec![
                Node::leaf("A", "leaf"),
                Node::leaf("B", "leaf"),
                Node::leaf("C", "leaf"),
            ],
        );

        let lines: Vec<_> = TreeWalker::new(&mut root).collect();

        assert_eq!(
            lines,
            [
                "root (root : 1)",
                "  A (leaf : 2)",
                "  B (leaf : 3)",
                "  C (leaf : 4)",
            ]
        );
    }

    #[test]
    fn nested_children_are_indented_by_depth() {
        let grandchild = Node::leaf("grandchild", "leaf");
        let child = Node::new("child", "branch", vec![grandchild]);
        let mut parent = Node::new("parent", "root", vec![child]);

        let lines: Vec<_> = TreeWalker::new(&mut parent).collect();

        assert_eq!(
            lines,
            [
                "parent (root : 1)",
                "  child (branch : 2)",
                "    grandchild (leaf : 3)",
            ]
        );
    }

    #[test]
    fn sapling_is_walked_in_pre_order() {
        let mut tree = samples::sapling();

        let lines: Vec<_> = TreeWalker::new(&mut tree).collect();

        assert_eq!(
            lines,
            [
                "root (root : 1)",
                "  trunk (trunk : 2)",
                "    branch (branch : 3)",
                "      leaf (leaf : 4)",
                "    branch (branch : 5)",
                "      leaf (leaf : 6)",
                "      leaf (leaf : 7)",
            ]
        );
        let levels: Vec<_> = lines.iter().map(|l| leading_spaces(l) / 2).collect();
        assert_eq!(levels, [0, 1, 2, 3, 2, 3, 3]);
    }

    #[rstest]
    #[case(samples::seedling(), 1)]
    #[case(samples::sprout(), 2)]
    #[case(samples::sapling(), 7)]
    fn ids_are_stored_on_nodes_in_pre_order(#[case] tree: Node, #[case] count: u64) {
        let mut tree = tree;
        let walked = TreeWalker::new(&mut tree).count() as u64;
        assert_eq!(walked, count);

        let mut ids = Vec::new();
        ids_in_pre_order(&tree, &mut ids);

        let expected: Vec<_> = (1..=count).map(Some).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn fresh_walks_are_reproducible() {
        let mut tree = samples::sapling();

        let first: Vec<_> = TreeWalker::new(&mut tree).collect();
        let second: Vec<_> = TreeWalker::new(&mut tree).collect();

        assert_eq!(first, second);
    }

    #[test]
    fn shared_counter_continues_across_walks() {
        let mut seedling = samples::seedling();
        let mut sprout = samples::sprout();
        let mut sapling = samples::sapling();

        let mut walker = TreeWalker::new(&mut seedling);
        let seedling_lines: Vec<_> = walker.by_ref().collect();
        let mut walker = TreeWalker::with_counter(&mut sprout, walker.into_counter());
        let sprout_lines: Vec<_> = walker.by_ref().collect();
        let mut walker = TreeWalker::with_counter(&mut sapling, walker.into_counter());
        let sapling_lines: Vec<_> = walker.by_ref().collect();

        assert_eq!(seedling_lines, ["root (root : 1)"]);
        assert_eq!(sprout_lines, ["root (root : 2)", "  shoot (shoot : 3)"]);
        assert_eq!(sapling_lines.first().map(String::as_str), Some("root (root : 4)"));
        assert_eq!(sapling_lines.last().map(String::as_str), Some("      leaf (leaf : 10)"));
        assert_eq!(walker.into_counter().peek().get(), 11);
    }

    #[test]
    fn stopping_early_leaves_unvisited_nodes_unnumbered() {
        let mut tree = samples::sprout();

        let mut walker = TreeWalker::new(&mut tree);
        assert_eq!(walker.next().as_deref(), Some("root (root : 1)"));
        drop(walker);

        assert_eq!(tree.id(), Some(NodeId::FIRST));
        assert_eq!(tree.children()[0].id(), None);
    }

    #[test]
    fn duplicate_children_print_twice_with_distinct_ids() {
        let mut root = Node::leaf("root", "root");
        let child = Node::leaf("twin", "leaf");
        root.add_child(child.clone());
        root.add_child(child);

        let lines: Vec<_> = TreeWalker::new(&mut root).collect();

        assert_eq!(lines, ["root (root : 1)", "  twin (leaf : 2)", "  twin (leaf : 3)"]);
    }

    #[test]
    fn deep_trees_do_not_exhaust_the_call_stack() {
        let depth = 20_000;
        let mut tree = Node::leaf("leaf", "leaf");
        for _ in 0..depth {
            tree = Node::new("link", "branch", vec![tree]);
        }

        let last = TreeWalker::new(&mut tree).last();

        let expected = format!("{}leaf (leaf : {})", INDENT.repeat(depth), depth + 1);
        assert_eq!(last, Some(expected));

        // Drop iteratively; the derived drop glue recurses per level
        let mut next = Some(tree);
        while let Some(mut node) = next {
            next = node.children.pop();
        }
    }
}
