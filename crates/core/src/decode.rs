//! Bit sequence → symbol sequence, by walking the tree.
//!
//! # State Machine
//!
//! The [`Decoder`] holds a cursor that starts at the root. Each bit moves
//! the cursor left (`0`) or right (`1`). Landing on a leaf emits its symbol
//! and resets the cursor to the root. When input ends the cursor must be
//! back at the root; anything else is a truncated codeword.
//!
//! The cursor lives in the decoder, never in the tree, so one tree can back
//! any number of decoders.
//!
//! # Single-leaf Trees
//!
//! With one symbol there is nothing to branch on. Every bit decodes to that
//! symbol (the encoder emits `0` per symbol).
//!
//! # Limits
//!
//! Only truncation is detected. A flipped bit that still lands on leaf
//! boundaries decodes to a different, well-formed sequence.

use tracing::debug;

use crate::bit::Bit;
use crate::error::{CodeError, Result};
use crate::symbol::Symbol;
use crate::tree::TreeNode;

/// Incremental tree-walking decoder.
///
/// # Example
/// ```
/// use huffcode_core::{build_tree, decode::Decoder, bit::Bit};
///
/// let root = build_tree(&['a', 'b']).unwrap();
/// let mut decoder = Decoder::new(&root);
/// assert_eq!(decoder.push_bit(Bit::One), Some('b'));
/// assert_eq!(decoder.push_bit(Bit::Zero), Some('a'));
/// decoder.finish().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct Decoder<'t, S> {
    root: &'t TreeNode<S>,
    cursor: &'t TreeNode<S>,
    /// Bits consumed so far
    consumed: usize,
    /// Bits consumed since the cursor last left the root
    dangling: usize,
}

impl<'t, S: Symbol> Decoder<'t, S> {
    pub fn new(root: &'t TreeNode<S>) -> Self {
        Self {
            root,
            cursor: root,
            consumed: 0,
            dangling: 0,
        }
    }

    /// Feed one bit; returns the symbol completed by it, if any.
    pub fn push_bit(&mut self, bit: Bit) -> Option<S> {
        self.consumed += 1;

        let next = match self.cursor {
            // only reachable when the root itself is a leaf
            TreeNode::Leaf { symbol, .. } => return Some(*symbol),
            TreeNode::Internal { left, right, .. } => match bit {
                Bit::Zero => &**left,
                Bit::One => &**right,
            },
        };

        match next {
            TreeNode::Leaf { symbol, .. } => {
                self.cursor = self.root;
                self.dangling = 0;
                Some(*symbol)
            }
            TreeNode::Internal { .. } => {
                self.cursor = next;
                self.dangling += 1;
                None
            }
        }
    }

    /// Whether the cursor sits at the root (between codewords).
    pub fn at_boundary(&self) -> bool {
        self.dangling == 0
    }

    /// Total bits consumed.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Declare the input finished.
    ///
    /// # Errors
    /// Returns `CodeError::TruncatedCode` if the last codeword is incomplete.
    pub fn finish(self) -> Result<()> {
        if self.at_boundary() {
            Ok(())
        } else {
            Err(CodeError::TruncatedCode {
                consumed: self.consumed,
                dangling: self.dangling,
            }
            .into())
        }
    }
}

/// Decode a complete bit sequence against `root`.
///
/// # Errors
/// Returns `CodeError::TruncatedCode` if `bits` ends mid-codeword. There is
/// no partial result.
pub fn decode<S: Symbol>(bits: &[Bit], root: &TreeNode<S>) -> Result<Vec<S>> {
    let mut decoder = Decoder::new(root);
    let symbols: Vec<S> = bits.iter().filter_map(|&bit| decoder.push_bit(bit)).collect();
    decoder.finish()?;
    debug!(bits = bits.len(), symbols = symbols.len(), "decoded sequence");
    Ok(symbols)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bit::parse_bits;
    use crate::error::Error;
    use crate::tree::build_tree;

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    fn decode_str(bits: &str, root: &TreeNode<char>) -> Result<String> {
        let bits = parse_bits(bits)?;
        Ok(decode(&bits, root)?.into_iter().collect())
    }

    #[test]
    fn test_decode_abracadabra() {
        let root = build_tree(&chars("abracadabra")).unwrap();
        let text = decode_str("01101110100010101101110", &root).unwrap();
        assert_eq!(text, "abracadabra");
    }

    #[test]
    fn test_decode_other_message_same_tree() {
        let root = build_tree(&chars("abracadabra")).unwrap();
        // c=100 a=0 b=110
        assert_eq!(decode_str("1000110", &root).unwrap(), "cab");
    }

    #[test]
    fn test_single_leaf_every_bit_is_the_symbol() {
        let root = build_tree(&chars("aaaa")).unwrap();
        assert_eq!(decode_str("0000", &root).unwrap(), "aaaa");
        assert_eq!(decode_str("01", &root).unwrap(), "aa");
    }

    #[test]
    fn test_empty_bits() {
        let root = build_tree(&chars("abc")).unwrap();
        assert_eq!(decode_str("", &root).unwrap(), "");
    }

    #[test]
    fn test_truncated() {
        let root = build_tree(&chars("abracadabra")).unwrap();
        // "0" (a) then "11" stops inside b/r
        let result = decode_str("011", &root);
        assert!(matches!(
            result,
            Err(Error::Code(CodeError::TruncatedCode {
                consumed: 3,
                dangling: 2
            }))
        ));
    }

    #[test]
    fn test_incremental_boundaries() {
        let root = build_tree(&chars("abracadabra")).unwrap();
        let mut decoder = Decoder::new(&root);
        assert!(decoder.at_boundary());
        assert_eq!(decoder.push_bit(Bit::One), None);
        assert!(!decoder.at_boundary());
        assert_eq!(decoder.push_bit(Bit::Zero), None);
        assert_eq!(decoder.push_bit(Bit::One), Some('d'));
        assert!(decoder.at_boundary());
        assert_eq!(decoder.consumed(), 3);
        decoder.finish().unwrap();
    }

    #[test]
    fn test_leaf_aligned_corruption_is_not_detected() {
        let root = build_tree(&chars("ab")).unwrap();
        // "01" is "ab"; flipping both bits still decodes cleanly
        assert_eq!(decode_str("10", &root).unwrap(), "ba");
    }
}
