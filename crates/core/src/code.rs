//! Codeword derivation.
//!
//! [`derive_codes`] walks a tree depth-first, appending `0` for every step
//! into a left child and `1` for every step into a right child, and records
//! the accumulated path at each leaf. The decoder uses the same convention
//! (0 = left, 1 = right).
//!
//! Because every leaf has a unique path and no leaf is an ancestor of
//! another, the resulting [`CodeTable`] is injective and prefix-free.
//!
//! # Single-symbol Alphabets
//!
//! A lone-leaf tree has an empty path. An empty codeword would make every
//! input encode to zero bits, so that leaf is assigned `"0"` instead.

use std::collections::BTreeMap;
use std::fmt;

use tracing::debug;

use crate::bit::Bit;
use crate::frequency::FrequencyTable;
use crate::symbol::Symbol;
use crate::tree::TreeNode;

/// A non-empty sequence of bits assigned to one symbol.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Codeword(Vec<Bit>);

impl Codeword {
    pub fn bits(&self) -> &[Bit] {
        &self.0
    }

    /// Number of bits. Never zero for a derived codeword.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `self` is a (non-strict) prefix of `other`.
    pub fn is_prefix_of(&self, other: &Codeword) -> bool {
        other.0.starts_with(&self.0)
    }
}

impl fmt::Display for Codeword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.0 {
            write!(f, "{bit}")?;
        }
        Ok(())
    }
}

/// Mapping from symbol to codeword, built once from a tree.
///
/// Iteration is in ascending symbol order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable<S> {
    codes: BTreeMap<S, Codeword>,
}

impl<S: Symbol> CodeTable<S> {
    /// Codeword for `symbol`, if the symbol was in the tree.
    pub fn get(&self, symbol: &S) -> Option<&Codeword> {
        self.codes.get(symbol)
    }

    /// Number of symbols with a codeword.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// `(symbol, codeword)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, &Codeword)> {
        self.codes.iter()
    }

    /// Length of the longest codeword.
    pub fn max_len(&self) -> usize {
        self.codes.values().map(Codeword::len).max().unwrap_or(0)
    }

    /// Whether no codeword is a prefix of another (and none repeats).
    ///
    /// After sorting, any prefix relation shows up between neighbours, so
    /// this is O(n log n) rather than pairwise.
    pub fn is_prefix_free(&self) -> bool {
        let mut words: Vec<&Codeword> = self.codes.values().collect();
        words.sort();
        words.windows(2).all(|pair| !pair[0].is_prefix_of(pair[1]))
    }

    /// Total encoded length of the counted input: Σ count × codeword length.
    ///
    /// Symbols of `frequencies` missing from this table contribute nothing.
    pub fn weighted_length(&self, frequencies: &FrequencyTable<S>) -> usize {
        frequencies
            .entries()
            .iter()
            .filter_map(|entry| self.get(&entry.symbol).map(|code| entry.count * code.len()))
            .sum()
    }
}

/// Derive the code table of a tree.
///
/// The walk keeps its path on an explicit stack, so tree depth never turns
/// into call-stack depth.
pub fn derive_codes<S: Symbol>(root: &TreeNode<S>) -> CodeTable<S> {
    let mut codes = BTreeMap::new();
    let mut stack: Vec<(&TreeNode<S>, Vec<Bit>)> = vec![(root, Vec::new())];

    while let Some((node, path)) = stack.pop() {
        match node {
            TreeNode::Leaf { symbol, .. } => {
                let bits = if path.is_empty() { vec![Bit::Zero] } else { path };
                codes.insert(*symbol, Codeword(bits));
            }
            TreeNode::Internal { left, right, .. } => {
                let mut right_path = path.clone();
                right_path.push(Bit::One);
                let mut left_path = path;
                left_path.push(Bit::Zero);
                // left is popped first
                stack.push((&**right, right_path));
                stack.push((&**left, left_path));
            }
        }
    }

    debug!(symbols = codes.len(), "derived code table");
    CodeTable { codes }
}
