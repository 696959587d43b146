//! Core primitives for antichain-based reasoning about alternating automata:
//! the sorted-set building block, closed families of nodes represented by
//! their antichain, and an on-the-fly alphabet.

/// Alphabets which assign dense symbol identifiers to symbol names on the fly.
pub mod alphabet;

/// Closed families of nodes, stored through their antichain of minimal
/// (upward) or maximal (downward) elements.
pub mod closed_set;

/// Defines the mathematical objects everything else is built from, most
/// importantly the sorted-vector set.
pub mod math;

/// Alias for the type used to identify states. Identifiers are dense, an
/// automaton with `n` states uses exactly `0..n`.
pub type State = u32;

/// Alias for the type used to identify alphabet symbols.
pub type Symbol = u32;

/// The reserved epsilon symbol. It is the largest possible symbol value, so in
/// a transition list ordered by symbol the epsilon entry is always the last.
pub const EPSILON: Symbol = Symbol::MAX;

/// A node is an ordered set of states. In an alternating automaton it stands
/// for one conjunctive clause of a successor formula: a configuration
/// satisfies the node by containing all of its states.
pub type Node = math::OrdSet<State>;

/// An ordered set of nodes, read disjunctively: the DNF successor set of a
/// transition, or the antichain of a closed set.
pub type Nodes = math::OrdSet<Node>;

/// Everything needed to use the crate, i.e. `use alternata_core::prelude::*;`.
pub mod prelude {
    pub use crate::alphabet::OnTheFlyAlphabet;
    pub use crate::closed_set::{ClosedSet, ClosedSetError, ClosureKind};
    pub use crate::math::{self, OrdSet};
    pub use crate::{Node, Nodes, State, Symbol, EPSILON};
}
