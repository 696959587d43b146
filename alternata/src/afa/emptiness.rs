//! Antichain-based emptiness tests for alternating automata, working in the
//! concrete domain.
//!
//! The language is empty iff no reachable node escapes the non-final set
//! (forward) iff no co-reachable node escapes the non-initial set (backward).
//! Each direction comes in a fixpoint form, iterating the predicate
//! transformer on whole closed sets until stabilization, and a worklist form
//! that expands one antichain node at a time and never recomputes the image
//! of an already processed node. The transformers are monotone and the
//! lattice of closed sets is finite, so both iterations terminate; the four
//! tests agree on every automaton.

use tracing::trace;

use crate::prelude::*;

use super::{Afa, AfaError};

/// Decides language emptiness by iterating `post` to a fixpoint.
pub fn is_lang_empty_forward_fixpoint(aut: &Afa) -> Result<bool, AfaError> {
    let goal = aut.get_non_final_nodes()?;
    let mut next = aut.get_initial_nodes()?;
    let mut current = next.empty_like();

    while current != next {
        current = next;
        next = current.union(&aut.post_all(&current)?);
        trace!("reachable antichain grew to {:?}", next.antichain());
        if !next.is_subset_of(&goal) {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Decides language emptiness by a forward worklist over antichain nodes.
pub fn is_lang_empty_forward_worklist(aut: &Afa) -> Result<bool, AfaError> {
    let goal = aut.get_non_final_nodes()?;
    let mut result = aut.get_initial_nodes()?;
    if !result.is_subset_of(&goal) {
        return Ok(false);
    }

    let mut processed: math::Set<Node> = math::Set::default();
    let mut worklist: Vec<Node> = result.antichain().iter().cloned().collect();

    while let Some(current) = worklist.pop() {
        trace!("expanding node {:?}", current);
        let post_current = aut.post_node_all(&current)?;
        result = result.union(&post_current);
        for node in post_current.antichain() {
            if !goal.contains(node) {
                return Ok(false);
            }
            if !processed.contains(node) {
                worklist.push(node.clone());
            }
        }
        processed.insert(current);
    }
    Ok(true)
}

/// Decides language emptiness by iterating `pre` to a fixpoint, the dual of
/// [`is_lang_empty_forward_fixpoint`].
pub fn is_lang_empty_backward_fixpoint(aut: &Afa) -> Result<bool, AfaError> {
    let goal = aut.get_non_initial_nodes()?;
    let mut next = aut.get_final_nodes()?;
    let mut current = next.empty_like();

    while current != next {
        current = next;
        next = current.union(&aut.pre_all(&current)?);
        trace!("co-reachable antichain grew to {:?}", next.antichain());
        if !next.is_subset_of(&goal) {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Decides language emptiness by a backward worklist over antichain nodes.
pub fn is_lang_empty_backward_worklist(aut: &Afa) -> Result<bool, AfaError> {
    let goal = aut.get_non_initial_nodes()?;
    let mut result = aut.get_final_nodes()?;
    if !result.is_subset_of(&goal) {
        return Ok(false);
    }

    let mut processed: math::Set<Node> = math::Set::default();
    let mut worklist: Vec<Node> = result.antichain().iter().cloned().collect();

    while let Some(current) = worklist.pop() {
        trace!("expanding node {:?}", current);
        let pre_current = aut.pre_node_all(&current)?;
        result = result.union(&pre_current);
        for node in pre_current.antichain() {
            if !goal.contains(node) {
                return Ok(false);
            }
            if !processed.contains(node) {
                worklist.push(node.clone());
            }
        }
        processed.insert(current);
    }
    Ok(true)
}
