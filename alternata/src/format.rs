//! The boundary between the core and the textual automaton format.
//!
//! The concrete syntax is the business of an external parser; this module
//! only consumes and produces an abstract [`ParsedSection`]. A body line has
//! the shape `SRC SYMB FORMULA...`: the first token names the source state,
//! the second the symbol, and the remaining tokens spell a positive Boolean
//! formula over state names with infix `&` (binding tighter), infix `|` and
//! parentheses. The formula is translated into DNF by distributing
//! conjunctions over disjunctions; antichain normalization happens when the
//! transition is added to the automaton.

use itertools::iproduct;
use tracing::debug;

use thiserror::Error;

use crate::afa::{Afa, AfaError, Trans};
use crate::prelude::*;

/// The type string of parsed sections describing alternating automata.
pub const TYPE_AFA: &str = "AFA";

/// An abstract parsed section of the textual automaton format.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedSection {
    /// The type string, `"AFA"` for alternating automata.
    pub ty: String,
    /// Key-value pairs; recognized keys are `"Initial"` and `"Final"`, each
    /// listing state names.
    pub dict: math::Map<String, Vec<String>>,
    /// The transition lines, already split into tokens.
    pub body: Vec<Vec<String>>,
}

impl ParsedSection {
    /// Creates an empty section of the given type.
    pub fn new(ty: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            dict: math::Map::default(),
            body: Vec::new(),
        }
    }
}

/// Errors of the construction and serialization boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The parsed section does not describe an alternating automaton.
    #[error("expecting a section of type \"{TYPE_AFA}\", found \"{found}\"")]
    TypeMismatch {
        /// The type string of the offending section.
        found: String,
    },
    /// A body line is too short to carry a transition.
    #[error("invalid transition line {line:?}")]
    InvalidTransitionLine {
        /// The tokens of the offending line.
        line: Vec<String>,
    },
    /// The successor formula of a body line does not follow the grammar.
    #[error("malformed successor formula: {reason}")]
    MalformedFormula {
        /// What went wrong.
        reason: String,
    },
    /// A name mapper refused to translate a state or symbol.
    #[error("cannot translate {what}")]
    TranslationFailure {
        /// The untranslatable entity.
        what: String,
    },
    /// Registering a translated transition failed.
    #[error(transparent)]
    Afa(#[from] AfaError),
}

/// Returns the dense identifier registered for the given state name,
/// assigning a fresh state of the automaton on first sight.
fn intern_state(aut: &mut Afa, state_map: &mut math::Map<String, State>, name: &str) -> State {
    if let Some(&state) = state_map.get(name) {
        // a caller-supplied map may know states the automaton does not have yet
        while aut.num_of_states() <= state as usize {
            aut.add_state();
        }
        return state;
    }
    let state = aut.add_state();
    state_map.insert(name.to_owned(), state);
    state
}

/// Recursive-descent translation of a token stream into a DNF node set.
struct FormulaParser<'t, F> {
    tokens: &'t [String],
    position: usize,
    intern: F,
}

impl<'t, F: FnMut(&str) -> State> FormulaParser<'t, F> {
    fn peek(&self) -> Option<&'t str> {
        let tokens: &'t [String] = self.tokens;
        tokens.get(self.position).map(|token| token.as_str())
    }

    fn advance(&mut self) -> Option<&'t str> {
        let token = self.peek()?;
        self.position += 1;
        Some(token)
    }

    fn disjunction(&mut self) -> Result<Nodes, FormatError> {
        let mut clauses = self.conjunction()?;
        while self.peek() == Some("|") {
            self.position += 1;
            clauses.extend(self.conjunction()?);
        }
        Ok(clauses)
    }

    fn conjunction(&mut self) -> Result<Nodes, FormatError> {
        let mut clauses = self.atom()?;
        while self.peek() == Some("&") {
            self.position += 1;
            let other = self.atom()?;
            // distribute the conjunction over both operand disjunctions
            let mut combined = Nodes::new();
            for (left, right) in iproduct!(&clauses, &other) {
                combined.insert(left.union(right));
            }
            clauses = combined;
        }
        Ok(clauses)
    }

    fn atom(&mut self) -> Result<Nodes, FormatError> {
        match self.advance() {
            None => Err(FormatError::MalformedFormula {
                reason: "formula ends unexpectedly".to_string(),
            }),
            Some("(") => {
                let inner = self.disjunction()?;
                match self.advance() {
                    Some(")") => Ok(inner),
                    _ => Err(FormatError::MalformedFormula {
                        reason: "missing closing parenthesis".to_string(),
                    }),
                }
            }
            Some(token @ (")" | "&" | "|")) => Err(FormatError::MalformedFormula {
                reason: format!("unexpected `{token}`"),
            }),
            Some(name) => Ok(Nodes::singleton(Node::singleton((self.intern)(name)))),
        }
    }
}

fn parse_formula<F: FnMut(&str) -> State>(
    tokens: &[String],
    intern: F,
) -> Result<Nodes, FormatError> {
    let mut parser = FormulaParser {
        tokens,
        position: 0,
        intern,
    };
    let clauses = parser.disjunction()?;
    if parser.position != tokens.len() {
        return Err(FormatError::MalformedFormula {
            reason: format!("unexpected trailing `{}`", tokens[parser.position]),
        });
    }
    Ok(clauses)
}

/// Builds an alternating automaton from a parsed section.
///
/// State names are assigned dense identifiers on first sight through the
/// given state map; passing `None` uses a map that is dropped afterwards,
/// also when construction fails. Every body line registers its transition in
/// both the forward and the inverse relation.
pub fn construct(
    parsec: &ParsedSection,
    alphabet: &mut OnTheFlyAlphabet,
    state_map: Option<&mut math::Map<String, State>>,
) -> Result<Afa, FormatError> {
    if parsec.ty != TYPE_AFA {
        return Err(FormatError::TypeMismatch {
            found: parsec.ty.clone(),
        });
    }

    let mut local_map = math::Map::default();
    let state_map = state_map.unwrap_or(&mut local_map);

    let mut aut = Afa::new(0);

    if let Some(names) = parsec.dict.get("Initial") {
        for name in names {
            let state = intern_state(&mut aut, state_map, name);
            aut.add_initial(state);
        }
    }
    if let Some(names) = parsec.dict.get("Final") {
        for name in names {
            let state = intern_state(&mut aut, state_map, name);
            aut.add_final(state);
        }
    }

    for body_line in &parsec.body {
        if body_line.len() < 2 {
            return Err(FormatError::InvalidTransitionLine {
                line: body_line.clone(),
            });
        }
        let src = intern_state(&mut aut, state_map, &body_line[0]);
        let symb = alphabet.translate_symbol(&body_line[1]);
        let dst = {
            let mut intern = |name: &str| intern_state(&mut aut, state_map, name);
            parse_formula(&body_line[2..], &mut intern)?
        };

        let trans = Trans::new(src, symb, dst);
        aut.add_trans(&trans)?;
        aut.add_inverse_trans(&trans)?;
    }

    debug!(
        "constructed an AFA with {} states and {} transitions",
        aut.num_of_states(),
        aut.trans_size()
    );
    Ok(aut)
}

/// Like [`construct`], with the alphabet built on the fly from a plain
/// name-to-symbol map. Symbols encountered for the first time are written
/// back into the map.
pub fn construct_with_symbol_map(
    parsec: &ParsedSection,
    symbol_map: &mut math::Map<String, Symbol>,
    state_map: Option<&mut math::Map<String, State>>,
) -> Result<Afa, FormatError> {
    let mut alphabet = OnTheFlyAlphabet::from_symbol_map(symbol_map);
    let result = construct(parsec, &mut alphabet, state_map);
    *symbol_map = alphabet.into_symbol_map();
    result
}

/// Produces a parsed section describing the given automaton.
///
/// States and symbols are rendered through the supplied name maps; without a
/// map the defaults `q{n}` and `a{n}` are used. A map without an entry for a
/// mentioned state or symbol refuses the translation.
pub fn serialize(
    aut: &Afa,
    symbol_map: Option<&math::Map<Symbol, String>>,
    state_map: Option<&math::Map<State, String>>,
) -> Result<ParsedSection, FormatError> {
    let state_name = |state: State| -> Result<String, FormatError> {
        match state_map {
            None => Ok(format!("q{state}")),
            Some(map) => map
                .get(&state)
                .cloned()
                .ok_or_else(|| FormatError::TranslationFailure {
                    what: format!("state {state}"),
                }),
        }
    };
    let symbol_name = |symbol: Symbol| -> Result<String, FormatError> {
        match symbol_map {
            None => Ok(format!("a{symbol}")),
            Some(map) => map
                .get(&symbol)
                .cloned()
                .ok_or_else(|| FormatError::TranslationFailure {
                    what: format!("symbol {symbol}"),
                }),
        }
    };

    let mut parsec = ParsedSection::new(TYPE_AFA);
    parsec.dict.insert(
        "Initial".to_string(),
        aut.initial_states()
            .iter()
            .map(|&state| state_name(state))
            .collect::<Result<_, _>>()?,
    );
    parsec.dict.insert(
        "Final".to_string(),
        aut.final_states()
            .iter()
            .map(|&state| state_name(state))
            .collect::<Result<_, _>>()?,
    );

    for trans in aut.transitions() {
        if trans.dst.is_empty() {
            continue;
        }
        let mut line = vec![state_name(trans.src)?, symbol_name(trans.symb)?];
        for (clause_index, clause) in trans.dst.iter().enumerate() {
            if clause_index > 0 {
                line.push("|".to_string());
            }
            for (state_index, &state) in clause.iter().enumerate() {
                if state_index > 0 {
                    line.push("&".to_string());
                }
                line.push(state_name(state)?);
            }
        }
        parsec.body.push(line);
    }
    Ok(parsec)
}
