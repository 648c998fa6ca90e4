//! huffcode-core: optimal prefix codes by Huffman's algorithm
//!
//! This library computes a Huffman code for the alphabet of an input
//! sequence, encodes the sequence into a sequence of bits, and decodes it
//! back losslessly:
//! - Counts symbol frequencies
//! - Builds a binary tree by greedy priority-queue merging
//! - Derives a prefix-free codeword for every leaf
//! - Encodes by codeword concatenation, decodes by walking the tree
//!
//! # Architecture
//!
//! Data flows strictly left to right:
//! - `frequency`: symbol counts in first-occurrence order
//! - `tie_break`: explicit ordering of equal-weight nodes
//! - `min_heap`: comparator-driven priority queue
//! - `tree`: node type and the greedy builder
//! - `code`: codeword derivation and the code table
//! - `encode` / `decode`: the two directions of the transform
//! - `codec`: tree and table bundled for one input
//!
//! # Design Principles
//!
//! - **No panics**: all errors are structured and returned
//! - **Deterministic**: tie-breaking is a policy, never hash order
//! - **Tree-shaped by construction**: nodes own their children, no back-pointers
//! - **Bits, not bytes**: packing into bytes is left to the caller
//!
//! # Example
//!
//! ```
//! use huffcode_core::{build_tree, decode, derive_codes, encode};
//!
//! let text: Vec<char> = "abracadabra".chars().collect();
//! let root = build_tree(&text).unwrap();
//! let table = derive_codes(&root);
//! let bits = encode(&text, &table).unwrap();
//! assert_eq!(decode(&bits, &root).unwrap(), text);
//! ```

pub mod bit;
pub mod code;
pub mod codec;
pub mod decode;
pub mod encode;
pub mod error;
pub mod frequency;
pub mod min_heap;
pub mod symbol;
pub mod tie_break;
pub mod tree;

// Re-export commonly used types
pub use bit::Bit;
pub use code::{derive_codes, CodeTable, Codeword};
pub use codec::HuffmanCodec;
pub use decode::{decode, Decoder};
pub use encode::encode;
pub use error::{CodeError, Error, Result};
pub use frequency::{FrequencyEntry, FrequencyTable};
pub use symbol::Symbol;
pub use tie_break::{InsertionOrder, LeavesBySymbol, TieBreakPolicy};
pub use tree::{build_tree, TreeBuilder, TreeNode};
