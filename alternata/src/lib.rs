//! Alternating finite automata over dense integer states and symbols,
//! analyzed through antichain-represented closed sets, together with the
//! synchronous product construction for nondeterministic automata.
//!
//! The two algorithmic kernels of the crate are
//! - the predicate transformers `post` and `pre` on closed sets of nodes and
//!   the four antichain-based emptiness tests built on them, and
//! - the on-the-fly NFA product construction with its synchronized scan of
//!   symbol-ordered transition lists, classic and epsilon-preserving.

/// Alternating finite automata: transition relations, predicate transformers
/// and the antichain emptiness tests.
pub mod afa;

/// The boundary towards the textual automaton format.
pub mod format;

/// Nondeterministic finite automata and their product construction.
pub mod nfa;

pub use alternata_core::{alphabet, closed_set, math, Node, Nodes, State, Symbol, EPSILON};

/// Everything needed to use the crate, i.e. `use alternata::prelude::*;`.
pub mod prelude {
    pub use alternata_core::prelude::*;

    pub use crate::afa::emptiness::{
        is_lang_empty_backward_fixpoint, is_lang_empty_backward_worklist,
        is_lang_empty_forward_fixpoint, is_lang_empty_forward_worklist,
    };
    pub use crate::afa::{Afa, AfaError, InverseResults, InverseTrans, Trans};
    pub use crate::format::{
        construct, construct_with_symbol_map, serialize, FormatError, ParsedSection, TYPE_AFA,
    };
    pub use crate::nfa::{intersection, Move, Nfa};
}
