//! Symbol frequency analysis.
//!
//! A [`FrequencyTable`] counts how often each symbol occurs in an input
//! sequence. Entries are kept in first-occurrence order so that everything
//! downstream is reproducible without depending on hash iteration order.
//!
//! # Seed Order
//!
//! The tree builder consumes entries in [`FrequencyTable::seed_order`]:
//! ascending by count, ties broken by first occurrence in the input.

use std::collections::HashMap;

use crate::error::{CodeError, Result};
use crate::symbol::Symbol;

/// One symbol and the number of times it occurs.
///
/// # Invariants
/// - `count >= 1`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrequencyEntry<S> {
    pub symbol: S,
    pub count: usize,
}

/// Occurrence counts for every distinct symbol of an input.
///
/// # Invariants
/// - every symbol of the input has exactly one entry
/// - the counts sum to the input length
#[derive(Debug, Clone)]
pub struct FrequencyTable<S> {
    /// Entries in first-occurrence order
    entries: Vec<FrequencyEntry<S>>,
    /// Symbol -> index into `entries`
    index: HashMap<S, usize>,
    /// Total number of symbols counted
    total: usize,
}

impl<S: Symbol> FrequencyTable<S> {
    /// Count the symbols of `symbols`.
    ///
    /// # Errors
    /// Returns `CodeError::EmptyInput` if the sequence is empty.
    pub fn from_symbols(symbols: &[S]) -> Result<Self> {
        Self::from_iter_checked(symbols.iter().copied())
    }

    /// Count the symbols produced by an iterator.
    ///
    /// # Errors
    /// Returns `CodeError::EmptyInput` if the iterator yields nothing.
    pub fn from_iter_checked<I>(symbols: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
    {
        let mut entries: Vec<FrequencyEntry<S>> = Vec::new();
        let mut index = HashMap::new();
        let mut total = 0usize;

        for symbol in symbols {
            let slot = *index.entry(symbol).or_insert_with(|| {
                entries.push(FrequencyEntry { symbol, count: 0 });
                entries.len() - 1
            });
            entries[slot].count += 1;
            total += 1;
        }

        if total == 0 {
            return Err(CodeError::EmptyInput.into());
        }

        Ok(Self {
            entries,
            index,
            total,
        })
    }

    /// Entries in first-occurrence order.
    pub fn entries(&self) -> &[FrequencyEntry<S>] {
        &self.entries
    }

    /// Entries in the order the tree builder seeds its queue: ascending by
    /// count, equal counts in first-occurrence order.
    pub fn seed_order(&self) -> Vec<FrequencyEntry<S>> {
        let mut ordered = self.entries.clone();
        // stable: equal counts keep first-occurrence order
        ordered.sort_by_key(|entry| entry.count);
        ordered
    }

    /// Occurrence count for `symbol`, or 0 if it never occurs.
    pub fn count(&self, symbol: &S) -> usize {
        self.index
            .get(symbol)
            .map_or(0, |&slot| self.entries[slot].count)
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a constructed table; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Length of the counted input (sum of all counts).
    pub fn total(&self) -> usize {
        self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_counts_and_total() {
        let text: Vec<char> = "abracadabra".chars().collect();
        let table = FrequencyTable::from_symbols(&text).unwrap();

        assert_eq!(table.len(), 5);
        assert_eq!(table.total(), 11);
        assert_eq!(table.count(&'a'), 5);
        assert_eq!(table.count(&'b'), 2);
        assert_eq!(table.count(&'r'), 2);
        assert_eq!(table.count(&'c'), 1);
        assert_eq!(table.count(&'d'), 1);
        assert_eq!(table.count(&'z'), 0);
    }

    #[test]
    fn test_first_occurrence_order() {
        let table = FrequencyTable::from_symbols(b"banana").unwrap();
        let symbols: Vec<u8> = table.entries().iter().map(|e| e.symbol).collect();
        assert_eq!(symbols, b"ban".to_vec());
    }

    #[test]
    fn test_seed_order_is_count_then_first_occurrence() {
        // counts: r=3, a=5, b=2, c=1, d=1
        let text: Vec<char> = "rabracadabra".chars().collect();
        let table = FrequencyTable::from_symbols(&text).unwrap();
        let order: Vec<char> = table.seed_order().iter().map(|e| e.symbol).collect();
        assert_eq!(order, vec!['c', 'd', 'b', 'r', 'a']);
    }

    #[test]
    fn test_sum_of_counts_is_input_length() {
        let data = b"the quick brown fox jumps over the lazy dog";
        let table = FrequencyTable::from_symbols(data).unwrap();
        let sum: usize = table.entries().iter().map(|e| e.count).sum();
        assert_eq!(sum, data.len());
        assert!(table.entries().iter().all(|e| e.count >= 1));
    }

    #[test]
    fn test_empty_input() {
        let result = FrequencyTable::<u8>::from_symbols(&[]);
        assert!(matches!(result, Err(Error::Code(CodeError::EmptyInput))));
    }
}
