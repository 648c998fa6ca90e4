//! Huffman tree representation and greedy construction.
//!
//! # Structure
//!
//! A [`TreeNode`] is either a `Leaf` holding a symbol and its count, or an
//! `Internal` node that exclusively owns exactly two children. There are no
//! parent pointers, so a cycle cannot be expressed. Once built the tree is
//! only read: code derivation and decoding both borrow it.
//!
//! # Construction
//!
//! [`TreeBuilder::build`] runs the classic greedy algorithm:
//! 1. Queue one leaf per frequency entry, in seed order.
//! 2. While more than one node is queued, pop the two smallest (`lo`, then
//!    `hi`) and queue `Internal { lo.weight + hi.weight, left: lo, right: hi }`.
//! 3. The last node left is the root.
//!
//! Queue order is weight, then the [`TieBreakPolicy`], then insertion
//! sequence, so identical input always produces an identical tree. Runs in
//! O(n log n) for n distinct symbols.
//!
//! A single distinct symbol yields a lone `Leaf` root with no internal node.

use tracing::{debug, trace};

use crate::error::{CodeError, Result};
use crate::frequency::FrequencyTable;
use crate::min_heap::MinHeap;
use crate::symbol::Symbol;
use crate::tie_break::{queue_order, Candidate, InsertionOrder, TieBreakPolicy};

/// A node of a Huffman tree.
///
/// # Invariants
/// - every `Internal` node has exactly two children
/// - `weight` of an `Internal` node is the sum of its children's weights
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode<S> {
    Leaf {
        symbol: S,
        weight: usize,
    },
    Internal {
        weight: usize,
        left: Box<TreeNode<S>>,
        right: Box<TreeNode<S>>,
    },
}

impl<S> TreeNode<S> {
    /// Occurrence count (leaf) or subtree total (internal).
    pub fn weight(&self) -> usize {
        match self {
            TreeNode::Leaf { weight, .. } => *weight,
            TreeNode::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, TreeNode::Leaf { .. })
    }

    /// Combine two subtrees; `lo` becomes the left (bit 0) child.
    pub fn merge(lo: Self, hi: Self) -> Self {
        TreeNode::Internal {
            weight: lo.weight() + hi.weight(),
            left: Box::new(lo),
            right: Box::new(hi),
        }
    }

    /// Length of the longest root-to-leaf path. A lone leaf has depth 0.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 0usize)];
        while let Some((node, level)) = stack.pop() {
            match node {
                TreeNode::Leaf { .. } => deepest = deepest.max(level),
                TreeNode::Internal { left, right, .. } => {
                    stack.push((&**left, level + 1));
                    stack.push((&**right, level + 1));
                }
            }
        }
        deepest
    }

    /// Number of leaves, i.e. distinct symbols.
    pub fn leaf_count(&self) -> usize {
        let mut leaves = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                TreeNode::Leaf { .. } => leaves += 1,
                TreeNode::Internal { left, right, .. } => {
                    stack.push(left);
                    stack.push(right);
                }
            }
        }
        leaves
    }
}

impl<S: Symbol> TreeNode<S> {
    /// The symbol of a leaf, `None` for internal nodes.
    pub fn symbol(&self) -> Option<S> {
        match self {
            TreeNode::Leaf { symbol, .. } => Some(*symbol),
            TreeNode::Internal { .. } => None,
        }
    }

    /// Symbols of all leaves, left to right.
    pub fn symbols(&self) -> Vec<S> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                TreeNode::Leaf { symbol, .. } => out.push(*symbol),
                TreeNode::Internal { left, right, .. } => {
                    stack.push(right);
                    stack.push(left);
                }
            }
        }
        out
    }

    /// Indented text dump of the tree, one node per line.
    ///
    /// ```text
    /// root -> internal [weight: 3]
    ///   L -> leaf 'a' [weight: 2]
    ///   R -> leaf 'b' [weight: 1]
    /// ```
    pub fn render(&self) -> String {
        let mut out = String::new();
        let mut stack = vec![(self, 0usize, "root")];
        while let Some((node, indent, label)) = stack.pop() {
            let pad = "  ".repeat(indent);
            let line = match node {
                TreeNode::Leaf { symbol, weight } => {
                    format!("{pad}{label} -> leaf {symbol:?} [weight: {weight}]\n")
                }
                TreeNode::Internal {
                    weight,
                    left,
                    right,
                } => {
                    stack.push((&**right, indent + 1, "R"));
                    stack.push((&**left, indent + 1, "L"));
                    format!("{pad}{label} -> internal [weight: {weight}]\n")
                }
            };
            out.push_str(&line);
        }
        out
    }
}

/// A queued node tagged with its insertion sequence.
struct Pending<S> {
    seq: usize,
    node: TreeNode<S>,
}

impl<S> Pending<S> {
    fn candidate(&self) -> Candidate<'_, S> {
        Candidate {
            seq: self.seq,
            node: &self.node,
        }
    }
}

/// Builds a Huffman tree under a chosen tie-break policy.
#[derive(Debug, Clone, Default)]
pub struct TreeBuilder<P = InsertionOrder> {
    policy: P,
}

impl TreeBuilder<InsertionOrder> {
    /// Builder using the default [`InsertionOrder`] policy.
    pub fn new() -> Self {
        Self {
            policy: InsertionOrder,
        }
    }
}

impl<P> TreeBuilder<P> {
    /// Builder using `policy` for equal-weight ties.
    pub fn with_policy(policy: P) -> Self {
        Self { policy }
    }

    /// Count `symbols` and build their tree.
    ///
    /// # Errors
    /// Returns `CodeError::EmptyInput` if `symbols` is empty.
    pub fn build_from_symbols<S>(&self, symbols: &[S]) -> Result<TreeNode<S>>
    where
        S: Symbol,
        P: TieBreakPolicy<S>,
    {
        let frequencies = FrequencyTable::from_symbols(symbols)?;
        self.build(&frequencies)
    }

    /// Build the tree for a frequency table.
    ///
    /// # Errors
    /// Returns `CodeError::EmptyInput` if the table has no entries.
    pub fn build<S>(&self, frequencies: &FrequencyTable<S>) -> Result<TreeNode<S>>
    where
        S: Symbol,
        P: TieBreakPolicy<S>,
    {
        let leaves: Vec<Pending<S>> = frequencies
            .seed_order()
            .into_iter()
            .enumerate()
            .map(|(seq, entry)| Pending {
                seq,
                node: TreeNode::Leaf {
                    symbol: entry.symbol,
                    weight: entry.count,
                },
            })
            .collect();
        let mut next_seq = leaves.len();

        let policy = &self.policy;
        let mut heap = MinHeap::build(leaves, |a: &Pending<S>, b: &Pending<S>| {
            queue_order(policy, &a.candidate(), &b.candidate())
        });

        while heap.len() > 1 {
            let (Some(lo), Some(hi)) = (heap.pop(), heap.pop()) else {
                break;
            };
            trace!(
                lo_weight = lo.node.weight(),
                hi_weight = hi.node.weight(),
                seq = next_seq,
                "merging nodes"
            );
            heap.push(Pending {
                seq: next_seq,
                node: TreeNode::merge(lo.node, hi.node),
            });
            next_seq += 1;
        }

        let root = heap.pop().ok_or(CodeError::EmptyInput)?.node;
        debug!(
            policy = TieBreakPolicy::<S>::name(policy),
            symbols = frequencies.len(),
            weight = root.weight(),
            depth = root.depth(),
            "built huffman tree"
        );
        Ok(root)
    }
}

/// Build a tree for `symbols` with the default tie-break policy.
///
/// # Errors
/// Returns `CodeError::EmptyInput` on an empty sequence.
pub fn build_tree<S: Symbol>(symbols: &[S]) -> Result<TreeNode<S>> {
    TreeBuilder::new().build_from_symbols(symbols)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::tie_break::LeavesBySymbol;

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    /// Check the weight-sum invariant at every internal node.
    fn weights_consistent<S>(node: &TreeNode<S>) -> bool {
        match node {
            TreeNode::Leaf { weight, .. } => *weight >= 1,
            TreeNode::Internal {
                weight,
                left,
                right,
            } => {
                *weight == left.weight() + right.weight()
                    && weights_consistent(left)
                    && weights_consistent(right)
            }
        }
    }

    #[test]
    fn test_single_symbol_is_lone_leaf() {
        let root = build_tree(&chars("aaaa")).unwrap();
        assert_eq!(
            root,
            TreeNode::Leaf {
                symbol: 'a',
                weight: 4
            }
        );
        assert_eq!(root.depth(), 0);
        assert_eq!(root.leaf_count(), 1);
    }

    #[test]
    fn test_two_symbols() {
        let root = build_tree(&chars("ab")).unwrap();
        match &root {
            TreeNode::Internal {
                weight,
                left,
                right,
            } => {
                assert_eq!(*weight, 2);
                assert_eq!(left.symbol(), Some('a'));
                assert_eq!(right.symbol(), Some('b'));
            }
            TreeNode::Leaf { .. } => panic!("expected an internal root"),
        }
    }

    #[test]
    fn test_root_weight_is_input_length() {
        let text = chars("the quick brown fox jumps over the lazy dog");
        let root = build_tree(&text).unwrap();
        assert_eq!(root.weight(), text.len());
        assert!(weights_consistent(&root));
    }

    #[test]
    fn test_abracadabra_shape() {
        // seed: c1 d1 b2 r2 a5
        // c+d=2, b+r=4, (cd)+(br)=6, a+6=11
        let root = build_tree(&chars("abracadabra")).unwrap();
        assert_eq!(root.symbols(), vec!['a', 'c', 'd', 'b', 'r']);
        assert_eq!(root.depth(), 3);
        assert_eq!(root.leaf_count(), 5);
        assert!(weights_consistent(&root));
    }

    #[test]
    fn test_policy_changes_equal_weight_order() {
        // 'b' occurs first, both once
        let text = chars("ba");

        let by_insertion = TreeBuilder::new().build_from_symbols(&text).unwrap();
        assert_eq!(by_insertion.symbols(), vec!['b', 'a']);

        let by_symbol = TreeBuilder::with_policy(LeavesBySymbol)
            .build_from_symbols(&text)
            .unwrap();
        assert_eq!(by_symbol.symbols(), vec!['a', 'b']);
    }

    #[test]
    fn test_leaf_wins_tie_against_internal() {
        // x1 y1 -> (xy)2; z2 ties with (xy)2 and the leaf goes left
        let root = build_tree(&chars("xyzz")).unwrap();
        match &root {
            TreeNode::Internal { left, right, .. } => {
                assert_eq!(left.symbol(), Some('z'));
                assert!(!right.is_leaf());
            }
            TreeNode::Leaf { .. } => panic!("expected an internal root"),
        }
    }

    #[test]
    fn test_deterministic() {
        let text = chars("mississippi river banks");
        let first = build_tree(&text).unwrap();
        for _ in 0..10 {
            assert_eq!(build_tree(&text).unwrap(), first);
        }
    }

    #[test]
    fn test_empty_input() {
        let result = build_tree::<char>(&[]);
        assert!(matches!(result, Err(Error::Code(CodeError::EmptyInput))));
    }

    #[test]
    fn test_render() {
        let root = build_tree(&chars("aab")).unwrap();
        let text = root.render();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "root -> internal [weight: 3]");
        assert_eq!(lines[1], "  L -> leaf 'b' [weight: 1]");
        assert_eq!(lines[2], "  R -> leaf 'a' [weight: 2]");
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_render_single_leaf() {
        let root = build_tree(&chars("aaaa")).unwrap();
        assert_eq!(root.render(), "root -> leaf 'a' [weight: 4]\n");
    }
}
