//! The alphabet abstraction.
//!
//! A symbol is an opaque, comparable, copyable value. `char` and `u8` are
//! the usual choices; anything meeting the bounds works.

use std::fmt::Debug;
use std::hash::Hash;

/// An atomic unit of the input alphabet.
///
/// `Ord` gives a natural total order used by [`LeavesBySymbol`] and for
/// stable iteration of a [`CodeTable`]. `Hash` backs frequency counting.
///
/// [`LeavesBySymbol`]: crate::tie_break::LeavesBySymbol
/// [`CodeTable`]: crate::code::CodeTable
pub trait Symbol: Copy + Ord + Hash + Debug {}

impl<T: Copy + Ord + Hash + Debug> Symbol for T {}
