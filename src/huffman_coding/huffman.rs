use log::{debug, trace};

use crate::tools::freq_count::FreqTable;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Eq, PartialEq, Debug, Clone)]
pub enum NodeData {
    /// Merge point of two subtrees. The left one is reached with a "0" step.
    Kids(Box<Node>, Box<Node>),
    /// Only built above a lone leaf, so a one-symbol alphabet still gets a one-step code.
    Kid(Box<Node>),
    Leaf(char),
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Node {
    /// Summed frequency of every leaf below this node.
    pub weight: u64,
    /// Longest path from this node down to a leaf.
    pub depth: u32,
    /// Creation order, used to break weight ties.
    pub seq: u32,
    pub node_data: NodeData,
}

impl Node {
    /// Create a new node
    pub fn new(weight: u64, depth: u32, seq: u32, node_data: NodeData) -> Node {
        Node {
            weight,
            depth,
            seq,
            node_data,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.node_data, NodeData::Leaf(_))
    }
}

impl Ord for Node {
    /// Reversed on (weight, seq) so that BinaryHeap hands back the lightest, oldest node first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A finished Huffman tree. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: Node,
}

impl HuffmanTree {
    /// Build the tree for a frequency table. Returns None for the empty table.
    ///
    /// Leaves are created in ascending symbol order and every node gets the next sequence number.
    /// The two lightest nodes are merged each round, ties going to the node created first, and the
    /// first node popped becomes the left child.
    pub fn from_freqs(freqs: &FreqTable) -> Option<HuffmanTree> {
        let mut seq = 0_u32;
        let mut heap = freqs
            .sorted()
            .into_iter()
            .map(|(sym, weight)| {
                seq += 1;
                Node::new(weight, 0, seq - 1, NodeData::Leaf(sym))
            })
            .collect::<BinaryHeap<Node>>();
        debug!("Building tree from {} leaves", heap.len());

        // Pare the heap down to one single node with child nodes.
        while heap.len() > 1 {
            let (Some(left_child), Some(right_child)) = (heap.pop(), heap.pop()) else {
                break;
            };
            trace!(
                "merge {} (w{}) + {} (w{})",
                left_child.seq,
                left_child.weight,
                right_child.seq,
                right_child.weight
            );
            heap.push(Node::new(
                left_child.weight + right_child.weight,
                left_child.depth.max(right_child.depth) + 1,
                seq,
                NodeData::Kids(Box::new(left_child), Box::new(right_child)),
            ));
            seq += 1;
        }

        let root = heap.pop()?;
        let root = if root.is_leaf() {
            debug!("Single symbol alphabet, adding a one-step stem");
            Node::new(root.weight, 1, seq, NodeData::Kid(Box::new(root)))
        } else {
            root
        };
        debug!("Tree built: weight {}, depth {}", root.weight, root.depth);
        Some(HuffmanTree { root })
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Length of the longest code the tree produces.
    pub fn depth(&self) -> u32 {
        self.root.depth
    }

    /// Sum of all leaf weights.
    pub fn weight(&self) -> u64 {
        self.root.weight
    }

    /// Walk the tree and return how far (deep) from the root each leaf is, in left-to-right order.
    /// Depth is the same as the code length.
    #[cfg(test)]
    pub(crate) fn leaf_depths(&self) -> Vec<(char, u32)> {
        let mut leaves = vec![];
        return_leaves(&self.root, 0, &mut leaves);
        leaves
    }
}

#[cfg(test)]
fn return_leaves(node: &Node, depth: u32, leaves: &mut Vec<(char, u32)>) {
    match &node.node_data {
        NodeData::Kids(left_child, right_child) => {
            return_leaves(left_child, depth + 1, leaves);
            return_leaves(right_child, depth + 1, leaves);
        }
        NodeData::Kid(child) => return_leaves(child, depth + 1, leaves),
        NodeData::Leaf(sym) => leaves.push((*sym, depth)),
    }
}

#[cfg(test)]
mod test {
    use super::{HuffmanTree, NodeData};
    use crate::tools::freq_count::FreqTable;

    fn tree(text: &str) -> HuffmanTree {
        HuffmanTree::from_freqs(&FreqTable::from_text(text)).unwrap()
    }

    #[test]
    fn empty_has_no_tree_test() {
        assert!(HuffmanTree::from_freqs(&FreqTable::from_text("")).is_none());
    }

    #[test]
    fn single_symbol_gets_stem_test() {
        let t = tree("aaaa");
        assert_eq!(t.weight(), 4);
        assert_eq!(t.depth(), 1);
        assert!(matches!(t.root().node_data, NodeData::Kid(_)));
        assert_eq!(t.leaf_depths(), vec![('a', 1)]);
    }

    #[test]
    fn two_symbols_test() {
        let t = tree("abb");
        assert_eq!(t.weight(), 3);
        // 'a' is lighter, so it is popped first and goes left.
        assert_eq!(t.leaf_depths(), vec![('a', 1), ('b', 1)]);
    }

    #[test]
    fn mixed_fixture_test() {
        // a:2 and c:2 merge first (a created before c), then b:3 pairs with that subtree.
        let t = tree("aabbbcc");
        assert_eq!(t.weight(), 7);
        assert_eq!(t.depth(), 2);
        assert_eq!(t.leaf_depths(), vec![('b', 1), ('a', 2), ('c', 2)]);
    }

    #[test]
    fn weighted_path_length_test() {
        // Textbook distribution, optimal cost 224.
        let freqs: FreqTable = [
            ('a', 45),
            ('b', 13),
            ('c', 12),
            ('d', 16),
            ('e', 9),
            ('f', 5),
        ]
        .into_iter()
        .collect();
        let t = HuffmanTree::from_freqs(&freqs).unwrap();
        let cost: u64 = t
            .leaf_depths()
            .iter()
            .map(|&(s, d)| freqs.get(s).unwrap() * d as u64)
            .sum();
        assert_eq!(cost, 224);
        assert_eq!(t.weight(), 100);
    }

    #[test]
    fn weights_past_u32_test() {
        let freqs: FreqTable = [('a', u32::MAX), ('b', 1), ('c', u32::MAX)]
            .into_iter()
            .collect();
        let t = HuffmanTree::from_freqs(&freqs).unwrap();
        assert_eq!(t.weight(), 2 * u32::MAX as u64 + 1);
        // b pairs with a (older than c), then c goes left as the lighter node.
        assert_eq!(t.leaf_depths(), vec![('c', 1), ('b', 2), ('a', 2)]);
    }

    #[test]
    fn equal_weights_are_balanced_test() {
        let t = tree("abcd");
        assert!(t.leaf_depths().iter().all(|&(_, d)| d == 2));
    }

    #[test]
    fn deterministic_test() {
        let text = "the quick brown fox jumps over the lazy dog";
        assert_eq!(tree(text), tree(text));
    }
}
