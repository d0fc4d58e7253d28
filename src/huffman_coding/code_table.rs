use log::{debug, trace};
use rustc_hash::FxHashMap;

use super::bit_string::BitString;
use super::huffman::{HuffmanTree, Node, NodeData};

/// The two directions of a symbol/code mapping, built together from one tree and never changed after.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    sym_to_code: FxHashMap<char, BitString>,
    code_to_sym: FxHashMap<BitString, char>,
    max_len: usize,
}

impl CodeTable {
    /// Walk the tree, recording the path to every leaf. No tree (empty input) gives the empty table.
    pub fn from_tree(tree: Option<&HuffmanTree>) -> Self {
        let mut table = CodeTable::default();
        if let Some(tree) = tree {
            let mut path = BitString::with_capacity(tree.depth() as usize);
            table.walk(tree.root(), &mut path);
            debug!(
                "Code table built: {} codes, longest {} steps",
                table.len(),
                table.max_len
            );
        }
        table
    }

    fn walk(&mut self, node: &Node, path: &mut BitString) {
        match &node.node_data {
            NodeData::Kids(left_child, right_child) => {
                path.push(false);
                self.walk(left_child, path);
                path.pop();
                path.push(true);
                self.walk(right_child, path);
                path.pop();
            }
            NodeData::Kid(child) => {
                path.push(false);
                self.walk(child, path);
                path.pop();
            }
            NodeData::Leaf(sym) => {
                trace!("{:?} -> {}", sym, path);
                self.max_len = self.max_len.max(path.len());
                self.sym_to_code.insert(*sym, path.clone());
                self.code_to_sym.insert(path.clone(), *sym);
            }
        }
    }

    pub fn code(&self, symbol: char) -> Option<&BitString> {
        self.sym_to_code.get(&symbol)
    }

    pub fn symbol(&self, code: &BitString) -> Option<char> {
        self.code_to_sym.get(code).copied()
    }

    /// Number of symbols (and codes) in the table.
    pub fn len(&self) -> usize {
        self.sym_to_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sym_to_code.is_empty()
    }

    /// Length of the longest code. Zero for the empty table.
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// (symbol, code) pairs sorted by code length, then symbol.
    pub fn entries(&self) -> Vec<(char, &BitString)> {
        let mut entries = self
            .sym_to_code
            .iter()
            .map(|(&s, c)| (s, c))
            .collect::<Vec<_>>();
        entries.sort_unstable_by(|a, b| a.1.len().cmp(&b.1.len()).then(a.0.cmp(&b.0)));
        entries
    }
}
