//! A built tree and its code table, kept together.
//!
//! Most callers want the whole pipeline for one input: count, build, derive,
//! then encode and decode against the same tree. [`HuffmanCodec`] owns both
//! artifacts so they cannot drift apart.

use crate::bit::Bit;
use crate::code::{derive_codes, CodeTable};
use crate::decode::decode;
use crate::encode::encode;
use crate::error::Result;
use crate::frequency::FrequencyTable;
use crate::symbol::Symbol;
use crate::tie_break::TieBreakPolicy;
use crate::tree::{TreeBuilder, TreeNode};

/// Owns the tree and code table derived from one input.
#[derive(Debug, Clone)]
pub struct HuffmanCodec<S> {
    frequencies: FrequencyTable<S>,
    tree: TreeNode<S>,
    table: CodeTable<S>,
}

impl<S: Symbol> HuffmanCodec<S> {
    /// Build a codec for `symbols` with the default tie-break policy.
    ///
    /// # Errors
    /// Returns `CodeError::EmptyInput` on an empty sequence.
    pub fn from_symbols(symbols: &[S]) -> Result<Self> {
        Self::with_builder(symbols, &TreeBuilder::new())
    }

    /// Build a codec for `symbols` using `policy` for equal-weight ties.
    pub fn with_policy<P: TieBreakPolicy<S>>(symbols: &[S], policy: P) -> Result<Self> {
        Self::with_builder(symbols, &TreeBuilder::with_policy(policy))
    }

    fn with_builder<P: TieBreakPolicy<S>>(symbols: &[S], builder: &TreeBuilder<P>) -> Result<Self> {
        let frequencies = FrequencyTable::from_symbols(symbols)?;
        let tree = builder.build(&frequencies)?;
        let table = derive_codes(&tree);
        Ok(Self {
            frequencies,
            tree,
            table,
        })
    }

    pub fn frequencies(&self) -> &FrequencyTable<S> {
        &self.frequencies
    }

    pub fn tree(&self) -> &TreeNode<S> {
        &self.tree
    }

    pub fn table(&self) -> &CodeTable<S> {
        &self.table
    }

    /// Encode any sequence drawn from this codec's alphabet.
    pub fn encode(&self, symbols: &[S]) -> Result<Vec<Bit>> {
        encode(symbols, &self.table)
    }

    /// Decode a bit sequence produced by [`HuffmanCodec::encode`].
    pub fn decode(&self, bits: &[Bit]) -> Result<Vec<S>> {
        decode(bits, &self.tree)
    }

    /// Bits needed to encode the input this codec was built from.
    pub fn encoded_len(&self) -> usize {
        self.table.weighted_length(&self.frequencies)
    }

    /// Release the tree, e.g. to hand it to a separate decoder.
    pub fn into_tree(self) -> TreeNode<S> {
        self.tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tie_break::LeavesBySymbol;

    #[test]
    fn test_codec_round_trip() {
        let data = b"hello world! this is a test of the codec.";
        let codec = HuffmanCodec::from_symbols(data).unwrap();

        let bits = codec.encode(data).unwrap();
        assert_eq!(bits.len(), codec.encoded_len());

        let decoded = codec.decode(&bits).unwrap();
        assert_eq!(decoded, data.to_vec());
    }

    #[test]
    fn test_codec_encodes_subsequence_of_alphabet() {
        let text: Vec<char> = "mississippi".chars().collect();
        let codec = HuffmanCodec::from_symbols(&text).unwrap();
        let message: Vec<char> = "psi".chars().collect();
        let bits = codec.encode(&message).unwrap();
        assert_eq!(codec.decode(&bits).unwrap(), message);
    }

    #[test]
    fn test_policies_agree_on_cost() {
        let text: Vec<char> = "the rain in spain stays mainly in the plain".chars().collect();
        let by_insertion = HuffmanCodec::from_symbols(&text).unwrap();
        let by_symbol = HuffmanCodec::with_policy(&text, LeavesBySymbol).unwrap();
        // tie-breaks change shape, never total cost
        assert_eq!(by_insertion.encoded_len(), by_symbol.encoded_len());
    }

    #[test]
    fn test_into_tree() {
        let codec = HuffmanCodec::from_symbols(&[1u8, 1, 2]).unwrap();
        let tree = codec.into_tree();
        assert_eq!(tree.weight(), 3);
    }
}
