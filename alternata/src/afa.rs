//! Alternating finite automata over dense state and symbol identifiers.
//!
//! A transition maps a source state and a symbol to a set of nodes, read as a
//! positive Boolean formula in DNF: the automaton moves to one of the nodes
//! and must then satisfy all of its states simultaneously. Next to the forward
//! relation the automaton keeps an inverse relation for the backward predicate
//! transformer; both are only consistent if every transition is registered
//! with [`Afa::add_trans`] and [`Afa::add_inverse_trans`], no mirroring
//! happens behind the caller's back.

pub mod emptiness;

use std::fmt;

use thiserror::Error;

use crate::prelude::*;

/// Errors surfaced by transition lookups and the predicate transformers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AfaError {
    /// A node mentioned a state outside the universe of the automaton.
    #[error(transparent)]
    OutOfUniverse(#[from] ClosedSetError),
    /// `post` was applied to a downward-closed set or `pre` to an
    /// upward-closed one.
    #[error("the predicate transformer expects an {expected} set, got an {found} set")]
    WrongClosureKind {
        /// The closure direction the transformer works on.
        expected: ClosureKind,
        /// The closure direction of the argument.
        found: ClosureKind,
    },
    /// A transition was performed from a state the automaton does not have.
    #[error("state {state} does not exist, the automaton has {num_states} states")]
    NoSuchSourceState {
        /// The offending state.
        state: State,
        /// The number of states of the automaton.
        num_states: usize,
    },
}

/// A forward transition: from `src`, on `symb`, the automaton moves to one of
/// the conjunctive clauses of `dst`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trans {
    /// The source state.
    pub src: State,
    /// The symbol the transition is taken on.
    pub symb: Symbol,
    /// The DNF successor set.
    pub dst: Nodes,
}

impl Trans {
    /// Creates a new transition.
    pub fn new(src: State, symb: Symbol, dst: Nodes) -> Self {
        Self { src, symb, dst }
    }
}

impl fmt::Display for Trans {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {:?})", self.src, self.symb, self.dst)
    }
}

/// One stored result of the inverse transition relation: every state of
/// `result_nodes` has, on the symbol the entry is filed under, a transition
/// whose successor set contains the clause `sharing_list`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InverseResults {
    /// The source states sharing the clause.
    pub result_nodes: Node,
    /// The shared clause itself.
    pub sharing_list: Node,
}

impl InverseResults {
    /// Creates an inverse result for a single source state.
    pub fn new(src: State, sharing_list: Node) -> Self {
        Self {
            result_nodes: Node::singleton(src),
            sharing_list,
        }
    }
}

/// The inverse results stored under one representative state and symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InverseTrans {
    /// The symbol the inverse results belong to.
    pub symb: Symbol,
    /// All shared clauses filed under the representative, with the states
    /// that reach them.
    pub inverse_results: Vec<InverseResults>,
}

/// An alternating finite automaton.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Afa {
    /// Forward transitions of every state, at most one entry per symbol.
    trans_relation: Vec<Vec<Trans>>,
    /// Inverse transitions, filed under the minimum state of the shared
    /// clause so that each clause is stored exactly once.
    inverse_trans_relation: Vec<Vec<InverseTrans>>,
    initial_states: Node,
    final_states: Node,
}

impl Afa {
    /// Creates an automaton with `num_states` states and no transitions.
    pub fn new(num_states: usize) -> Self {
        Self {
            trans_relation: vec![Vec::new(); num_states],
            inverse_trans_relation: vec![Vec::new(); num_states],
            initial_states: Node::new(),
            final_states: Node::new(),
        }
    }

    /// Adds a fresh state and returns its identifier.
    pub fn add_state(&mut self) -> State {
        let state = self.trans_relation.len() as State;
        self.trans_relation.push(Vec::new());
        self.inverse_trans_relation.push(Vec::new());
        state
    }

    /// The number of states of the automaton.
    pub fn num_of_states(&self) -> usize {
        self.trans_relation.len()
    }

    /// Marks the given state as initial.
    pub fn add_initial(&mut self, state: State) {
        debug_assert!((state as usize) < self.num_of_states());
        self.initial_states.insert(state);
    }

    /// Marks the given state as final.
    pub fn add_final(&mut self, state: State) {
        debug_assert!((state as usize) < self.num_of_states());
        self.final_states.insert(state);
    }

    /// Returns true iff the given state is initial.
    pub fn has_initial(&self, state: State) -> bool {
        self.initial_states.contains(&state)
    }

    /// Returns true iff the given state is final.
    pub fn has_final(&self, state: State) -> bool {
        self.final_states.contains(&state)
    }

    /// The set of initial states.
    pub fn initial_states(&self) -> &Node {
        &self.initial_states
    }

    /// The set of final states.
    pub fn final_states(&self) -> &Node {
        &self.final_states
    }

    /// Returns true iff the automaton accepts the empty word, i.e. some
    /// initial state is also final.
    pub fn accepts_epsilon(&self) -> bool {
        !self.initial_states.is_disjoint_from(&self.final_states)
    }

    /// Iterates over all forward transitions in order of their source state.
    pub fn transitions(&self) -> impl Iterator<Item = &Trans> + '_ {
        self.trans_relation.iter().flatten()
    }

    /// The total number of forward transition entries.
    pub fn trans_size(&self) -> usize {
        self.trans_relation.iter().map(|row| row.len()).sum()
    }

    /// The inclusive range of states all closed sets produced by this
    /// automaton live over.
    fn universe(&self) -> (State, State) {
        (0, self.trans_relation.len().saturating_sub(1) as State)
    }

    fn upward_empty(&self) -> ClosedSet {
        let (lo, hi) = self.universe();
        ClosedSet::new(ClosureKind::Upward, lo, hi)
    }

    fn downward_empty(&self) -> ClosedSet {
        let (lo, hi) = self.universe();
        ClosedSet::new(ClosureKind::Downward, lo, hi)
    }

    fn check_state(&self, state: State) -> Result<(), AfaError> {
        if (state as usize) < self.num_of_states() {
            Ok(())
        } else {
            Err(AfaError::NoSuchSourceState {
                state,
                num_states: self.num_of_states(),
            })
        }
    }

    /// Looks up the successor set stored for `(src, symb)`, if any.
    fn dst_nodes(&self, src: State, symb: Symbol) -> Result<Option<&Nodes>, AfaError> {
        self.check_state(src)?;
        Ok(self.trans_relation[src as usize]
            .iter()
            .find(|trans| trans.symb == symb)
            .map(|trans| &trans.dst))
    }

    /// Looks up the inverse results filed under `(src, symb)`. The lookup is
    /// partial by design, it only finds clauses whose minimum state is `src`.
    fn inverse_results_of(&self, src: State, symb: Symbol) -> Result<&[InverseResults], AfaError> {
        self.check_state(src)?;
        Ok(self.inverse_trans_relation[src as usize]
            .iter()
            .find(|entry| entry.symb == symb)
            .map(|entry| entry.inverse_results.as_slice())
            .unwrap_or(&[]))
    }

    /// Adds a transition to the forward relation.
    ///
    /// If an entry for `(src, symb)` already exists, its successor set is
    /// merged with the new clauses by routing both through an upward closed
    /// set, which drops every clause dominated by another one. The stored
    /// successor set is therefore always an antichain.
    pub fn add_trans(&mut self, trans: &Trans) -> Result<(), AfaError> {
        self.check_state(trans.src)?;
        let (lo, hi) = self.universe();

        let row = &self.trans_relation[trans.src as usize];
        let seed = row
            .iter()
            .find(|existing| existing.symb == trans.symb)
            .map(|existing| existing.dst.clone())
            .unwrap_or_default();

        let mut closed = ClosedSet::with_antichain(ClosureKind::Upward, lo, hi, seed)?;
        for node in &trans.dst {
            closed.insert(node.clone())?;
        }
        let dst = closed.into_antichain();

        let row = &mut self.trans_relation[trans.src as usize];
        match row.iter().position(|existing| existing.symb == trans.symb) {
            Some(position) => row[position].dst = dst,
            None => row.push(Trans::new(trans.src, trans.symb, dst)),
        }
        Ok(())
    }

    /// Adds a transition to the inverse relation.
    ///
    /// Every clause of the successor set is filed under its minimum state.
    /// If the clause is already stored there for the given symbol, the source
    /// state joins the existing result; otherwise a fresh result is appended.
    /// Clauses without states have no representative and are skipped.
    pub fn add_inverse_trans(&mut self, trans: &Trans) -> Result<(), AfaError> {
        self.check_state(trans.src)?;
        for node in &trans.dst {
            let Some(&representative) = node.first() else {
                continue;
            };
            self.check_state(representative)?;

            let row = &mut self.inverse_trans_relation[representative as usize];
            let Some(position) = row.iter().position(|entry| entry.symb == trans.symb) else {
                row.push(InverseTrans {
                    symb: trans.symb,
                    inverse_results: vec![InverseResults::new(trans.src, node.clone())],
                });
                continue;
            };
            let entry = &mut row[position];
            match entry
                .inverse_results
                .iter()
                .position(|result| result.sharing_list == *node)
            {
                Some(shared) => {
                    entry.inverse_results[shared].result_nodes.insert(trans.src);
                }
                None => entry
                    .inverse_results
                    .push(InverseResults::new(trans.src, node.clone())),
            }
        }
        Ok(())
    }

    /// Returns true iff the automaton has a transition for `(src, symb)`
    /// whose entire successor set is covered by the given one.
    pub fn has_trans(&self, trans: &Trans) -> Result<bool, AfaError> {
        Ok(match self.dst_nodes(trans.src, trans.symb)? {
            Some(dst) => !dst.is_empty() && dst.is_subset_of(&trans.dst),
            None => false,
        })
    }

    /// One-step successors of a single state under the given symbol, as an
    /// upward-closed set. Without a stored transition the result is the empty
    /// family.
    pub fn post_state(&self, state: State, symb: Symbol) -> Result<ClosedSet, AfaError> {
        let (lo, hi) = self.universe();
        match self.dst_nodes(state, symb)? {
            Some(dst) if !dst.is_empty() => Ok(ClosedSet::with_antichain(
                ClosureKind::Upward,
                lo,
                hi,
                dst.clone(),
            )?),
            _ => Ok(self.upward_empty()),
        }
    }

    /// One-step successors of a node under the given symbol.
    ///
    /// A conjunctive clause is satisfied next only by configurations reachable
    /// from every one of its states simultaneously, so the per-state results
    /// are intersected. The empty node yields the universal family `{∅}`.
    pub fn post_node(&self, node: &Node, symb: Symbol) -> Result<ClosedSet, AfaError> {
        let mut states = node.iter();
        let Some(&first) = states.next() else {
            let mut result = self.upward_empty();
            result.insert(Node::new())?;
            return Ok(result);
        };
        let mut result = self.post_state(first, symb)?;
        for &state in states {
            result = result.intersection(&self.post_state(state, symb)?);
        }
        Ok(result)
    }

    /// One-step successors of a set of nodes under the given symbol, the
    /// union of the per-node results.
    pub fn post_nodes(&self, nodes: &Nodes, symb: Symbol) -> Result<ClosedSet, AfaError> {
        let mut result = self.upward_empty();
        for node in nodes {
            result.insert_node_set(self.post_node(node, symb)?.antichain())?;
        }
        Ok(result)
    }

    /// One-step successors of an upward-closed set under the given symbol.
    pub fn post(&self, closed_set: &ClosedSet, symb: Symbol) -> Result<ClosedSet, AfaError> {
        if closed_set.kind() != ClosureKind::Upward {
            return Err(AfaError::WrongClosureKind {
                expected: ClosureKind::Upward,
                found: closed_set.kind(),
            });
        }
        self.post_nodes(closed_set.antichain(), symb)
    }

    /// One-step successors of a node under every symbol.
    ///
    /// Only the symbols present on the first state of the node are tried: a
    /// symbol missing there makes the intersection empty anyway.
    pub fn post_node_all(&self, node: &Node) -> Result<ClosedSet, AfaError> {
        let Some(&first) = node.first() else {
            let mut result = self.upward_empty();
            result.insert(Node::new())?;
            return Ok(result);
        };
        self.check_state(first)?;
        let mut result = self.upward_empty();
        for trans in &self.trans_relation[first as usize] {
            result.insert_node_set(self.post_node(node, trans.symb)?.antichain())?;
        }
        Ok(result)
    }

    /// One-step successors of a set of nodes under every symbol.
    pub fn post_nodes_all(&self, nodes: &Nodes) -> Result<ClosedSet, AfaError> {
        let mut result = self.upward_empty();
        for node in nodes {
            result.insert_node_set(self.post_node_all(node)?.antichain())?;
        }
        Ok(result)
    }

    /// One-step successors of an upward-closed set under every symbol.
    pub fn post_all(&self, closed_set: &ClosedSet) -> Result<ClosedSet, AfaError> {
        if closed_set.kind() != ClosureKind::Upward {
            return Err(AfaError::WrongClosureKind {
                expected: ClosureKind::Upward,
                found: closed_set.kind(),
            });
        }
        self.post_nodes_all(closed_set.antichain())
    }

    /// One-step predecessors of a node under the given symbol, as a
    /// downward-closed set.
    ///
    /// Every state of the node may hold inverse results; a stored clause
    /// contributes its sources iff it is entirely inside the queried node.
    pub fn pre_node(&self, node: &Node, symb: Symbol) -> Result<ClosedSet, AfaError> {
        let mut sources = Node::new();
        for &state in node {
            for candidate in self.inverse_results_of(state, symb)? {
                if candidate.sharing_list.is_subset_of(node) {
                    for &source in &candidate.result_nodes {
                        sources.insert(source);
                    }
                }
            }
        }
        if sources.is_empty() {
            return Ok(self.downward_empty());
        }
        let mut result = self.downward_empty();
        result.insert(sources)?;
        Ok(result)
    }

    /// One-step predecessors of a set of nodes under the given symbol.
    pub fn pre_nodes(&self, nodes: &Nodes, symb: Symbol) -> Result<ClosedSet, AfaError> {
        let mut result = self.downward_empty();
        for node in nodes {
            result = result.union(&self.pre_node(node, symb)?);
        }
        Ok(result)
    }

    /// One-step predecessors of a downward-closed set under the given symbol.
    pub fn pre(&self, closed_set: &ClosedSet, symb: Symbol) -> Result<ClosedSet, AfaError> {
        if closed_set.kind() != ClosureKind::Downward {
            return Err(AfaError::WrongClosureKind {
                expected: ClosureKind::Downward,
                found: closed_set.kind(),
            });
        }
        self.pre_nodes(closed_set.antichain(), symb)
    }

    /// One-step predecessors of a node under every symbol, analogous to
    /// [`Afa::post_node_all`] with the inverse entries of the first state.
    pub fn pre_node_all(&self, node: &Node) -> Result<ClosedSet, AfaError> {
        let Some(&first) = node.first() else {
            let mut result = self.downward_empty();
            result.insert(Node::new())?;
            return Ok(result);
        };
        self.check_state(first)?;
        let mut result = self.downward_empty();
        for entry in &self.inverse_trans_relation[first as usize] {
            result.insert_node_set(self.pre_node(node, entry.symb)?.antichain())?;
        }
        Ok(result)
    }

    /// One-step predecessors of a set of nodes under every symbol.
    pub fn pre_nodes_all(&self, nodes: &Nodes) -> Result<ClosedSet, AfaError> {
        let mut result = self.downward_empty();
        for node in nodes {
            result.insert_node_set(self.pre_node_all(node)?.antichain())?;
        }
        Ok(result)
    }

    /// One-step predecessors of a downward-closed set under every symbol.
    pub fn pre_all(&self, closed_set: &ClosedSet) -> Result<ClosedSet, AfaError> {
        if closed_set.kind() != ClosureKind::Downward {
            return Err(AfaError::WrongClosureKind {
                expected: ClosureKind::Downward,
                found: closed_set.kind(),
            });
        }
        self.pre_nodes_all(closed_set.antichain())
    }

    /// The upward-closed set generated by the singleton nodes of all initial
    /// states.
    pub fn get_initial_nodes(&self) -> Result<ClosedSet, AfaError> {
        let mut result = self.upward_empty();
        for state in 0..self.num_of_states() as State {
            if self.has_initial(state) {
                result.insert_state(state)?;
            }
        }
        Ok(result)
    }

    /// The downward-closed set generated by the single node of all
    /// non-initial states.
    pub fn get_non_initial_nodes(&self) -> Result<ClosedSet, AfaError> {
        let node: Node = (0..self.num_of_states() as State)
            .filter(|&state| !self.has_initial(state))
            .collect();
        let mut result = self.downward_empty();
        result.insert(node)?;
        Ok(result)
    }

    /// The downward-closed set generated by the single node of all final
    /// states.
    pub fn get_final_nodes(&self) -> Result<ClosedSet, AfaError> {
        let node: Node = (0..self.num_of_states() as State)
            .filter(|&state| self.has_final(state))
            .collect();
        let mut result = self.downward_empty();
        result.insert(node)?;
        Ok(result)
    }

    /// The upward-closed set generated by the singleton nodes of all
    /// non-final states.
    pub fn get_non_final_nodes(&self) -> Result<ClosedSet, AfaError> {
        let mut result = self.upward_empty();
        for state in 0..self.num_of_states() as State {
            if !self.has_final(state) {
                result.insert_state(state)?;
            }
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn node(states: &[State]) -> Node {
        states.iter().copied().collect()
    }

    pub(crate) fn nodes(clauses: &[&[State]]) -> Nodes {
        clauses.iter().map(|states| node(states)).collect()
    }

    /// States {0, 1, 2}, initial {0}, final {2}, one conjunctive transition
    /// (0, a, {{1, 2}}).
    pub(crate) fn conjunctive_step() -> Afa {
        let mut aut = Afa::new(3);
        aut.add_initial(0);
        aut.add_final(2);
        let trans = Trans::new(0, 'a' as Symbol, nodes(&[&[1, 2]]));
        aut.add_trans(&trans).unwrap();
        aut.add_inverse_trans(&trans).unwrap();
        aut
    }

    #[test]
    fn post_of_conjunctive_step() {
        let aut = conjunctive_step();
        let a = 'a' as Symbol;

        let post = aut.post_node(&node(&[0]), a).unwrap();
        assert_eq!(post.antichain(), &nodes(&[&[1, 2]]));

        // no transition on another symbol
        assert!(aut.post_node(&node(&[0]), 'b' as Symbol).unwrap().is_empty());
        // no transition from state 1 at all
        assert!(aut.post_node(&node(&[1]), a).unwrap().is_empty());
    }

    #[test]
    fn pre_of_conjunctive_step() {
        let aut = conjunctive_step();
        let a = 'a' as Symbol;

        let pre = aut.pre_node(&node(&[1, 2]), a).unwrap();
        assert!(pre.contains(&node(&[0])));

        // the clause {1, 2} is not contained in {1}, so nothing is reachable
        assert!(aut.pre_node(&node(&[1]), a).unwrap().is_empty());
    }

    #[test]
    fn post_intersects_over_the_states_of_a_node() {
        let mut aut = Afa::new(4);
        let a = 0;
        for trans in [
            Trans::new(0, a, nodes(&[&[2]])),
            Trans::new(1, a, nodes(&[&[3]])),
        ] {
            aut.add_trans(&trans).unwrap();
            aut.add_inverse_trans(&trans).unwrap();
        }

        // {0, 1} must reach a configuration covering both successor formulas
        let post = aut.post_node(&node(&[0, 1]), a).unwrap();
        assert_eq!(post.antichain(), &nodes(&[&[2, 3]]));

        // a disjunct shared with one side collapses the intersection onto it
        let trans = Trans::new(0, a, nodes(&[&[3]]));
        aut.add_trans(&trans).unwrap();
        aut.add_inverse_trans(&trans).unwrap();
        let post = aut.post_node(&node(&[0, 1]), a).unwrap();
        assert_eq!(post.antichain(), &nodes(&[&[3]]));
    }

    #[test]
    fn post_of_the_empty_node_is_universal() {
        let aut = conjunctive_step();
        let post = aut.post_node(&node(&[]), 'a' as Symbol).unwrap();
        assert!(post.contains(&node(&[])));
        assert!(post.contains(&node(&[0, 1, 2])));
    }

    #[test]
    fn add_trans_keeps_the_successor_set_minimal() {
        let mut aut = Afa::new(3);
        let a = 0;
        aut.add_trans(&Trans::new(0, a, nodes(&[&[1]]))).unwrap();
        aut.add_trans(&Trans::new(0, a, nodes(&[&[1, 2]]))).unwrap();

        // the clause {1, 2} is dominated by {1} and must have been dropped
        let post = aut.post_state(0, a).unwrap();
        assert_eq!(post.antichain(), &nodes(&[&[1]]));
        assert_eq!(aut.trans_size(), 1);

        // distinct symbols get distinct entries
        aut.add_trans(&Trans::new(0, 1, nodes(&[&[2]]))).unwrap();
        assert_eq!(aut.trans_size(), 2);
    }

    #[test]
    fn inverse_results_are_shared_under_the_minimum() {
        let mut aut = Afa::new(3);
        let a = 0;
        // two sources share the clause {1, 2}
        for src in [0, 1] {
            aut.add_inverse_trans(&Trans::new(src, a, nodes(&[&[1, 2]])))
                .unwrap();
        }

        // the clause is filed under its minimum state 1, so a node covering
        // it finds both sources at once
        let pre = aut.pre_node(&node(&[1, 2]), a).unwrap();
        assert_eq!(pre.antichain(), &nodes(&[&[0, 1]]));

        // a lookup that only covers state 2 finds nothing
        assert!(aut.pre_node(&node(&[2]), a).unwrap().is_empty());
    }

    #[test]
    fn has_trans_checks_coverage() {
        let aut = conjunctive_step();
        let a = 'a' as Symbol;

        assert!(aut.has_trans(&Trans::new(0, a, nodes(&[&[1, 2]]))).unwrap());
        assert!(aut
            .has_trans(&Trans::new(0, a, nodes(&[&[1, 2], &[0]])))
            .unwrap());
        assert!(!aut.has_trans(&Trans::new(0, a, nodes(&[&[1]]))).unwrap());
        assert!(!aut.has_trans(&Trans::new(1, a, nodes(&[&[1]]))).unwrap());
    }

    #[test]
    fn initial_and_final_node_sets() {
        let mut aut = Afa::new(3);
        aut.add_initial(0);
        aut.add_final(1);
        aut.add_final(2);

        let initial = aut.get_initial_nodes().unwrap();
        assert_eq!(initial.kind(), ClosureKind::Upward);
        assert_eq!(initial.antichain(), &nodes(&[&[0]]));

        let non_final = aut.get_non_final_nodes().unwrap();
        assert_eq!(non_final.antichain(), &nodes(&[&[0]]));

        let final_nodes = aut.get_final_nodes().unwrap();
        assert_eq!(final_nodes.kind(), ClosureKind::Downward);
        assert_eq!(final_nodes.antichain(), &nodes(&[&[1, 2]]));

        let non_initial = aut.get_non_initial_nodes().unwrap();
        assert_eq!(non_initial.antichain(), &nodes(&[&[1, 2]]));
    }

    #[test]
    fn epsilon_acceptance() {
        let mut aut = Afa::new(2);
        aut.add_initial(0);
        aut.add_final(1);
        assert!(!aut.accepts_epsilon());
        aut.add_final(0);
        assert!(aut.accepts_epsilon());
    }

    #[test]
    fn transitions_from_unknown_states_are_rejected() {
        let mut aut = conjunctive_step();
        assert_eq!(
            aut.post_state(7, 0),
            Err(AfaError::NoSuchSourceState {
                state: 7,
                num_states: 3
            })
        );
        assert!(matches!(
            aut.add_trans(&Trans::new(0, 0, nodes(&[&[9]]))),
            Err(AfaError::OutOfUniverse(_))
        ));
    }

    #[test]
    fn predicate_transformers_reject_the_wrong_closure_kind() {
        let aut = conjunctive_step();
        let downward = aut.get_final_nodes().unwrap();
        assert!(matches!(
            aut.post(&downward, 0),
            Err(AfaError::WrongClosureKind { .. })
        ));
        let upward = aut.get_initial_nodes().unwrap();
        assert!(matches!(
            aut.pre(&upward, 0),
            Err(AfaError::WrongClosureKind { .. })
        ));
    }

    #[test]
    fn post_is_monotone_on_closed_sets() {
        let aut = conjunctive_step();
        let a = 'a' as Symbol;

        let smaller = aut.get_initial_nodes().unwrap();
        let mut bigger = smaller.clone();
        bigger.insert(node(&[1])).unwrap();

        assert!(smaller.is_subset_of(&bigger));
        let post_smaller = aut.post(&smaller, a).unwrap();
        let post_bigger = aut.post(&bigger, a).unwrap();
        assert!(post_smaller.is_subset_of(&post_bigger));
    }
}
