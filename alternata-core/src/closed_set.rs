//! An upward- or downward-closed family of nodes, represented by its antichain.
//!
//! A node is an ordered set of states. An upward-closed family contains every
//! superset of each of its members and is uniquely determined by its minimal
//! elements; a downward-closed family dually by its maximal elements. Only
//! those extremal elements are stored, so the operations here are really
//! antichain manipulations: insertion drops dominated nodes, union combines
//! antichains, intersection combines nodes pairwise and re-minimizes.

use std::fmt;

use thiserror::Error;

use crate::{Node, Nodes, State};

/// The direction in which a [`ClosedSet`] is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClosureKind {
    /// Closed under supersets, represented by its minimal elements.
    Upward,
    /// Closed under subsets, represented by its maximal elements.
    Downward,
}

impl fmt::Display for ClosureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClosureKind::Upward => write!(f, "upward-closed"),
            ClosureKind::Downward => write!(f, "downward-closed"),
        }
    }
}

/// Errors that can occur when manipulating a [`ClosedSet`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClosedSetError {
    /// A node mentioned a state outside the universe of the closed set.
    #[error("state {state} lies outside of the universe [{lo}, {hi}]")]
    OutOfUniverse {
        /// The offending state.
        state: State,
        /// Lower bound of the universe, inclusive.
        lo: State,
        /// Upper bound of the universe, inclusive.
        hi: State,
    },
}

/// A closed family of nodes over the universe of states `[lo, hi]`, stored
/// only through its antichain.
///
/// The empty antichain denotes the empty family. For an upward-closed set the
/// antichain `{∅}` instead denotes the universal family, since every node is a
/// superset of the empty node; the two must not be confused.
#[derive(Debug, Clone)]
pub struct ClosedSet {
    kind: ClosureKind,
    lo: State,
    hi: State,
    antichain: Nodes,
}

/// Whether the closure generated by `dominator` contains `node`.
fn dominates(kind: ClosureKind, dominator: &Node, node: &Node) -> bool {
    match kind {
        ClosureKind::Upward => dominator.is_subset_of(node),
        ClosureKind::Downward => node.is_subset_of(dominator),
    }
}

impl ClosedSet {
    /// Creates the empty family of the given kind over `[lo, hi]`.
    pub fn new(kind: ClosureKind, lo: State, hi: State) -> Self {
        Self {
            kind,
            lo,
            hi,
            antichain: Nodes::new(),
        }
    }

    /// Creates a closed set seeded with the given nodes. The nodes need not
    /// form an antichain, insertion re-establishes minimality (resp.
    /// maximality).
    pub fn with_antichain(
        kind: ClosureKind,
        lo: State,
        hi: State,
        nodes: Nodes,
    ) -> Result<Self, ClosedSetError> {
        let mut result = Self::new(kind, lo, hi);
        for node in nodes {
            result.insert(node)?;
        }
        Ok(result)
    }

    /// Returns an empty family with the same kind and universe as `self`.
    pub fn empty_like(&self) -> Self {
        Self::new(self.kind, self.lo, self.hi)
    }

    /// The direction in which this set is closed.
    pub fn kind(&self) -> ClosureKind {
        self.kind
    }

    /// The stored antichain.
    pub fn antichain(&self) -> &Nodes {
        &self.antichain
    }

    /// Consumes the set and returns its antichain.
    pub fn into_antichain(self) -> Nodes {
        self.antichain
    }

    /// Returns true iff the family contains no node at all.
    pub fn is_empty(&self) -> bool {
        self.antichain.is_empty()
    }

    fn check_universe(&self, node: &Node) -> Result<(), ClosedSetError> {
        if let Some(&state) = node.iter().find(|&&state| state < self.lo || state > self.hi) {
            return Err(ClosedSetError::OutOfUniverse {
                state,
                lo: self.lo,
                hi: self.hi,
            });
        }
        Ok(())
    }

    /// Insertion point shared by all mutating operations. The node is assumed
    /// to lie within the universe.
    fn insert_canonical(&mut self, node: Node) {
        let kind = self.kind;
        if self.antichain.iter().any(|a| dominates(kind, a, &node)) {
            return;
        }
        self.antichain.retain(|a| !dominates(kind, &node, a));
        self.antichain.insert(node);
    }

    /// Adds the closure of the given node to the family.
    ///
    /// If the node is dominated by a stored antichain element it is dropped;
    /// otherwise it evicts every stored element it dominates and becomes part
    /// of the antichain itself.
    pub fn insert(&mut self, node: Node) -> Result<(), ClosedSetError> {
        self.check_universe(&node)?;
        self.insert_canonical(node);
        Ok(())
    }

    /// Adds the closure of the singleton node `{state}`.
    pub fn insert_state(&mut self, state: State) -> Result<(), ClosedSetError> {
        self.insert(Node::singleton(state))
    }

    /// Inserts every node of the given set. The result does not depend on the
    /// iteration order.
    pub fn insert_node_set(&mut self, nodes: &Nodes) -> Result<(), ClosedSetError> {
        for node in nodes {
            self.insert(node.clone())?;
        }
        Ok(())
    }

    /// Returns true iff the family contains the given node, that is iff some
    /// antichain element dominates it in the direction of closure.
    pub fn contains(&self, node: &Node) -> bool {
        self.antichain
            .iter()
            .any(|a| dominates(self.kind, a, node))
    }

    /// Combines two closed families of the same kind into their union.
    pub fn union(&self, other: &ClosedSet) -> ClosedSet {
        debug_assert_eq!(self.kind, other.kind);
        debug_assert_eq!((self.lo, self.hi), (other.lo, other.hi));
        let mut result = self.clone();
        for node in &other.antichain {
            result.insert_canonical(node.clone());
        }
        result
    }

    /// Combines two closed families of the same kind into their intersection.
    ///
    /// For upward-closed sets a node lies in both families iff it dominates
    /// the union of an element of either antichain, so the result antichain
    /// consists of those pairwise unions, re-minimized. Downward-closed sets
    /// use the pairwise intersections, re-maximized.
    pub fn intersection(&self, other: &ClosedSet) -> ClosedSet {
        debug_assert_eq!(self.kind, other.kind);
        debug_assert_eq!((self.lo, self.hi), (other.lo, other.hi));
        let mut result = self.empty_like();
        for a in &self.antichain {
            for b in &other.antichain {
                let combined = match self.kind {
                    ClosureKind::Upward => a.union(b),
                    ClosureKind::Downward => a.intersection(b),
                };
                result.insert_canonical(combined);
            }
        }
        result
    }

    /// Returns true iff every node of `self` also belongs to `other`. Since
    /// both families are closed it suffices to check the antichain elements.
    pub fn is_subset_of(&self, other: &ClosedSet) -> bool {
        debug_assert_eq!(self.kind, other.kind);
        self.antichain.iter().all(|a| other.contains(a))
    }
}

impl PartialEq for ClosedSet {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.is_subset_of(other) && other.is_subset_of(self)
    }
}

impl Eq for ClosedSet {}
