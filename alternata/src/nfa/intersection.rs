//! Synchronous product construction of two NFAs.
//!
//! Product states are allocated on the fly for the pairs of original states
//! that are actually reachable, starting from the pairs of initial states. For
//! every pending pair the two symbol-ordered move lists are scanned in
//! lockstep, so only the symbols both sides can take are ever considered.
//! Optionally the construction preserves epsilon transitions: since the
//! reserved epsilon is the largest symbol value, it can only sit at the very
//! end of a move list, and an epsilon step of one side is paired with the
//! unchanged state of the other.

use itertools::iproduct;
use tracing::trace;

use crate::prelude::*;

use super::{Move, Nfa};

/// Runs the two symbol-ordered move lists in lockstep and yields the pairs
/// of moves that carry the same symbol.
struct SynchronizedMoves<'a> {
    lhs: &'a [Move],
    rhs: &'a [Move],
}

impl<'a> Iterator for SynchronizedMoves<'a> {
    type Item = (&'a Move, &'a Move);

    fn next(&mut self) -> Option<Self::Item> {
        while let (Some(left), Some(right)) = (self.lhs.first(), self.rhs.first()) {
            if left.symbol < right.symbol {
                self.lhs = &self.lhs[1..];
            } else if right.symbol < left.symbol {
                self.rhs = &self.rhs[1..];
            } else {
                self.lhs = &self.lhs[1..];
                self.rhs = &self.rhs[1..];
                return Some((left, right));
            }
        }
        None
    }
}

/// Bookkeeping shared by the product construction helpers.
struct ProductBuilder<'a> {
    lhs: &'a Nfa,
    rhs: &'a Nfa,
    product: Nfa,
    product_map: math::Map<(State, State), State>,
    pairs_to_process: Vec<(State, State)>,
}

impl<'a> ProductBuilder<'a> {
    fn new(lhs: &'a Nfa, rhs: &'a Nfa) -> Self {
        Self {
            lhs,
            rhs,
            product: Nfa::new(0),
            product_map: math::Map::default(),
            pairs_to_process: Vec::new(),
        }
    }

    /// Returns the product state of the given pair, allocating a fresh one
    /// and scheduling the pair for processing if it has not been seen yet.
    fn state_of(&mut self, pair: (State, State)) -> State {
        if let Some(&state) = self.product_map.get(&pair) {
            return state;
        }
        let state = self.product.add_state();
        self.product_map.insert(pair, state);
        self.pairs_to_process.push(pair);
        if self.lhs.has_final(pair.0) && self.rhs.has_final(pair.1) {
            self.product.add_final(state);
        }
        trace!("product state {state} represents the pair {pair:?}");
        state
    }

    /// Merges the collected move into the product, unless it has no targets.
    fn add_product_move(&mut self, from_pair: (State, State), mv: Move) {
        if mv.states_to.is_empty() {
            return;
        }
        let src = self.product_map[&from_pair];
        self.product.add_move(src, mv);
    }
}

/// Computes an NFA for the intersection of the languages of `lhs` and `rhs`.
///
/// With `preserve_epsilon` the reserved [`EPSILON`] symbol is treated as an
/// internal step rather than an ordinary letter: an epsilon move of either
/// side is carried over into the product while the other side stays put.
/// When a `prod_map` is supplied it receives the mapping from pairs of
/// original states to product states.
pub fn intersection(
    lhs: &Nfa,
    rhs: &Nfa,
    preserve_epsilon: bool,
    prod_map: Option<&mut math::Map<(State, State), State>>,
) -> Nfa {
    let mut builder = ProductBuilder::new(lhs, rhs);

    for (&p, &q) in iproduct!(lhs.initial_states(), rhs.initial_states()) {
        let state = builder.state_of((p, q));
        builder.product.add_initial(state);
    }

    while let Some(pair) = builder.pairs_to_process.pop() {
        let (p, q) = pair;
        let synchronized = SynchronizedMoves {
            lhs: lhs.moves_from(p),
            rhs: rhs.moves_from(q),
        };
        for (left, right) in synchronized {
            let mut mv = Move::new(left.symbol);
            for (&p_to, &q_to) in iproduct!(&left.states_to, &right.states_to) {
                mv.states_to.insert(builder.state_of((p_to, q_to)));
            }
            builder.add_product_move(pair, mv);
        }

        if preserve_epsilon {
            // epsilon is the largest symbol, so it can only be the last move
            if let Some(last) = lhs.moves_from(p).last().filter(|mv| mv.symbol == EPSILON) {
                let mut mv = Move::new(EPSILON);
                for &p_to in &last.states_to {
                    mv.states_to.insert(builder.state_of((p_to, q)));
                }
                builder.add_product_move(pair, mv);
            }
            if let Some(last) = rhs.moves_from(q).last().filter(|mv| mv.symbol == EPSILON) {
                let mut mv = Move::new(EPSILON);
                for &q_to in &last.states_to {
                    mv.states_to.insert(builder.state_of((p, q_to)));
                }
                builder.add_product_move(pair, mv);
            }
        }
    }

    if let Some(map) = prod_map {
        *map = builder.product_map;
    }
    builder.product
}

#[cfg(test)]
mod tests {
    use super::*;

    /// An NFA accepting exactly the word built from the given symbols, using
    /// the states `0..=symbols.len()`.
    fn word_nfa(symbols: &[Symbol]) -> Nfa {
        let mut nfa = Nfa::new(symbols.len() + 1);
        nfa.add_initial(0);
        nfa.add_final(symbols.len() as State);
        for (position, &symbol) in symbols.iter().enumerate() {
            nfa.add_trans(position as State, symbol, position as State + 1);
        }
        nfa
    }

    #[test]
    fn product_of_two_single_letter_automata() {
        let lhs = word_nfa(&[0]);
        let rhs = word_nfa(&[0]);

        let mut map = math::Map::default();
        let product = intersection(&lhs, &rhs, false, Some(&mut map));

        assert_eq!(product.num_of_states(), 2);
        let start = map[&(0, 0)];
        let end = map[&(1, 1)];
        assert!(product.has_initial(start));
        assert!(!product.has_final(start));
        assert!(product.has_final(end));

        let moves = product.moves_from(start);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].symbol, 0);
        assert_eq!(moves[0].states_to, Node::singleton(end));
        assert!(product.moves_from(end).is_empty());
    }

    #[test]
    fn mismatching_symbols_produce_no_transitions() {
        let lhs = word_nfa(&[0]);
        let rhs = word_nfa(&[1]);

        let product = intersection(&lhs, &rhs, false, None);
        assert_eq!(product.num_of_states(), 1);
        assert_eq!(product.trans_size(), 0);
        assert!(product.final_states().is_empty());
    }

    #[test]
    fn synchronized_scan_only_meets_on_common_symbols() {
        let mut lhs = Nfa::new(2);
        lhs.add_initial(0);
        lhs.add_final(1);
        for symbol in [0, 2, 4] {
            lhs.add_trans(0, symbol, 1);
        }
        let mut rhs = Nfa::new(2);
        rhs.add_initial(0);
        rhs.add_final(1);
        for symbol in [2, 3, 4, 5] {
            rhs.add_trans(0, symbol, 1);
        }

        let product = intersection(&lhs, &rhs, false, None);
        let symbols: Vec<Symbol> = product
            .moves_from(product.initial_states().iter().next().copied().unwrap())
            .iter()
            .map(|mv| mv.symbol)
            .collect();
        assert_eq!(symbols, vec![2, 4]);
    }

    #[test]
    fn nondeterministic_targets_are_paired() {
        let mut lhs = Nfa::new(3);
        lhs.add_initial(0);
        lhs.add_trans(0, 7, 1);
        lhs.add_trans(0, 7, 2);
        lhs.add_final(2);
        let mut rhs = Nfa::new(3);
        rhs.add_initial(0);
        rhs.add_trans(0, 7, 1);
        rhs.add_trans(0, 7, 2);
        rhs.add_final(2);

        let mut map = math::Map::default();
        let product = intersection(&lhs, &rhs, false, Some(&mut map));

        // all four target pairs exist, only (2, 2) is final
        assert_eq!(product.num_of_states(), 5);
        assert_eq!(product.final_states().len(), 1);
        assert!(product.has_final(map[&(2, 2)]));
        let start = map[&(0, 0)];
        assert_eq!(product.moves_from(start)[0].states_to.len(), 4);
    }

    #[test]
    fn epsilon_preserving_product() {
        let mut lhs = word_nfa(&[0]);
        lhs.add_trans(0, EPSILON, 0);
        let rhs = word_nfa(&[0]);

        let mut map = math::Map::default();
        let product = intersection(&lhs, &rhs, true, Some(&mut map));

        // every pair (0, q) carries the self epsilon loop of the left side
        for (&(p, q), &state) in &map {
            let moves = product.moves_from(state);
            if p == 0 {
                let last = moves.last().unwrap();
                assert_eq!(last.symbol, EPSILON);
                assert_eq!(last.states_to, Node::singleton(map[&(0, q)]));
            } else {
                assert!(moves.iter().all(|mv| mv.symbol != EPSILON));
            }
        }

        // the ordinary letter still reaches the final pair
        let end = map[&(1, 1)];
        assert!(product.has_final(end));
    }

    #[test]
    fn epsilon_ignored_without_preservation() {
        let mut lhs = word_nfa(&[0]);
        lhs.add_trans(0, EPSILON, 0);
        let rhs = word_nfa(&[0]);

        let product = intersection(&lhs, &rhs, false, None);
        // only the epsilon-free part survives: lhs epsilon has no counterpart
        assert!(product
            .moves_from(product.initial_states().iter().next().copied().unwrap())
            .iter()
            .all(|mv| mv.symbol != EPSILON));
    }

    #[test]
    fn duplicate_epsilon_insertions_do_not_change_the_product() {
        let mut lhs = word_nfa(&[0]);
        lhs.add_trans(0, EPSILON, 0);
        let once = intersection(&lhs, &word_nfa(&[0]), true, None);

        lhs.add_trans(0, EPSILON, 0);
        let twice = intersection(&lhs, &word_nfa(&[0]), true, None);

        assert_eq!(once.num_of_states(), twice.num_of_states());
        assert_eq!(once.trans_size(), twice.trans_size());
    }
}
