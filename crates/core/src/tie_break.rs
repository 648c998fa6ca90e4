//! Ordering of equal-weight nodes during greedy merging.
//!
//! When two queued nodes carry the same weight, which one is popped first
//! decides which becomes a left child, and so fixes tree shape and codeword
//! assignment. Leaving this to hash iteration order produces trees that
//! differ between platforms and runs, so the choice is an explicit policy.
//!
//! # Contract
//!
//! A policy only ever sees candidates of equal weight. It must be a total,
//! consistent order (antisymmetric and transitive). The builder applies the
//! insertion sequence as a last resort, so a policy returning `Equal` still
//! yields a deterministic tree.
//!
//! # Provided Policies
//!
//! - [`InsertionOrder`] (default): the node queued earlier wins. Leaves are
//!   queued before any internal node, in seed order (ascending count, then
//!   first occurrence), so equal-weight leaves beat internal nodes.
//! - [`LeavesBySymbol`]: leaves before internal nodes, leaves compared by
//!   the natural order of their symbol, internal nodes by insertion.

use std::cmp::Ordering;

use crate::tree::TreeNode;

/// A queued node as seen by a tie-break policy.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a, S> {
    /// Position in queue insertion order (leaves first, then merges)
    pub seq: usize,
    /// The node itself
    pub node: &'a TreeNode<S>,
}

impl<S> Candidate<'_, S> {
    /// Weight of the underlying node.
    pub fn weight(&self) -> usize {
        self.node.weight()
    }
}

/// Total order over equal-weight candidates.
pub trait TieBreakPolicy<S> {
    /// Short name used in logs and configuration.
    fn name(&self) -> &'static str;

    /// Order two candidates of equal weight; `Less` means `a` is merged first.
    fn tie_break(&self, a: &Candidate<'_, S>, b: &Candidate<'_, S>) -> Ordering;
}

/// Earlier-queued node first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InsertionOrder;

impl<S> TieBreakPolicy<S> for InsertionOrder {
    fn name(&self) -> &'static str {
        "insertion"
    }

    fn tie_break(&self, a: &Candidate<'_, S>, b: &Candidate<'_, S>) -> Ordering {
        a.seq.cmp(&b.seq)
    }
}

/// Leaves first, ordered by symbol; internal nodes by insertion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LeavesBySymbol;

impl<S: Ord> TieBreakPolicy<S> for LeavesBySymbol {
    fn name(&self) -> &'static str {
        "symbol"
    }

    fn tie_break(&self, a: &Candidate<'_, S>, b: &Candidate<'_, S>) -> Ordering {
        match (a.node, b.node) {
            (TreeNode::Leaf { symbol: x, .. }, TreeNode::Leaf { symbol: y, .. }) => x.cmp(y),
            (TreeNode::Leaf { .. }, TreeNode::Internal { .. }) => Ordering::Less,
            (TreeNode::Internal { .. }, TreeNode::Leaf { .. }) => Ordering::Greater,
            (TreeNode::Internal { .. }, TreeNode::Internal { .. }) => a.seq.cmp(&b.seq),
        }
    }
}

impl<S, P: TieBreakPolicy<S> + ?Sized> TieBreakPolicy<S> for &P {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn tie_break(&self, a: &Candidate<'_, S>, b: &Candidate<'_, S>) -> Ordering {
        (**self).tie_break(a, b)
    }
}

impl<S, P: TieBreakPolicy<S> + ?Sized> TieBreakPolicy<S> for Box<P> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn tie_break(&self, a: &Candidate<'_, S>, b: &Candidate<'_, S>) -> Ordering {
        (**self).tie_break(a, b)
    }
}

/// Full queue order: weight, then the policy, then insertion sequence.
pub(crate) fn queue_order<S, P>(policy: &P, a: &Candidate<'_, S>, b: &Candidate<'_, S>) -> Ordering
where
    P: TieBreakPolicy<S> + ?Sized,
{
    a.weight()
        .cmp(&b.weight())
        .then_with(|| policy.tie_break(a, b))
        .then_with(|| a.seq.cmp(&b.seq))
}
