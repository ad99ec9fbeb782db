
use std::collections::HashMap;
use std::sync::Arc;

// we will use a fast hashing algo for the symbol tables, whose keys are names
use core::hash::BuildHasherDefault;
use seahash::SeaHasher;

// used to print out readable forms of a construct
use std::fmt;

use tracing::debug;

use crate::datalog::{TermParser, tokenize};
use crate::error::Result;

pub type SymbolHasher = BuildHasherDefault<SeaHasher>;

// keeps first occurrences, in order
fn uniq(values: Vec<String>) -> Vec<String> {
    let mut result: Vec<String> = Vec::new();
    for value in values {
        if !result.contains(&value) {
            result.push(value);
        }
    }
    result
}

// ------------- Parameter -------------
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parameter {
    Constant(String),
    Variable(String),
}
impl Parameter {
    pub fn name(&self) -> &str {
        match self {
            Parameter::Constant(name) | Parameter::Variable(name) => name,
        }
    }
}
impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ------------- Atom -------------
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Atom {
    predicate: String,
    parameters: Vec<Parameter>,
    negated: bool,
}
impl Atom {
    pub fn new(predicate: String, parameters: Vec<Parameter>, negated: bool) -> Self {
        Self {
            predicate,
            parameters,
            negated,
        }
    }
    // It's intentional to encapsulate the fields in the struct
    // and only expose them using "getters", because this yields
    // true immutability for atoms after creation.
    pub fn predicate(&self) -> &str {
        &self.predicate
    }
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }
    pub fn negated(&self) -> bool {
        self.negated
    }
    pub fn predicates(&self) -> Vec<String> {
        vec![self.predicate.clone()]
    }
    pub fn constants(&self) -> Vec<String> {
        uniq(
            self.parameters
                .iter()
                .filter_map(|parameter| match parameter {
                    Parameter::Constant(name) => Some(name.clone()),
                    Parameter::Variable(_) => None,
                })
                .collect(),
        )
    }
    pub fn variables(&self) -> Vec<String> {
        uniq(
            self.parameters
                .iter()
                .filter_map(|parameter| match parameter {
                    Parameter::Variable(name) => Some(name.clone()),
                    Parameter::Constant(_) => None,
                })
                .collect(),
        )
    }
}
impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.negated {
            write!(f, "~")?;
        }
        f.write_str(&self.predicate)?;
        if !self.parameters.is_empty() {
            let mut s = String::new();
            for parameter in &self.parameters {
                s += &(parameter.to_string() + ",");
            }
            s.pop();
            write!(f, "({})", s)?;
        }
        Ok(())
    }
}

// ------------- Term -------------
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    EnterWriteMode,
    EnterQuestionMode,
    Atom(Atom),
    Formula(Vec<Atom>),
    Rule { head: Atom, body: Vec<Atom> },
}
impl Term {
    /// All distinct predicate names mentioned by the term.
    pub fn predicates(&self) -> Vec<String> {
        match self {
            Term::EnterWriteMode | Term::EnterQuestionMode => Vec::new(),
            Term::Atom(atom) => atom.predicates(),
            Term::Formula(atoms) => uniq(atoms.iter().flat_map(Atom::predicates).collect()),
            Term::Rule { head, body } => uniq(
                head.predicates()
                    .into_iter()
                    .chain(body.iter().flat_map(Atom::predicates))
                    .collect(),
            ),
        }
    }
    /// All distinct constant names mentioned by the term.
    pub fn constants(&self) -> Vec<String> {
        match self {
            Term::EnterWriteMode | Term::EnterQuestionMode => Vec::new(),
            Term::Atom(atom) => atom.constants(),
            Term::Formula(atoms) => uniq(atoms.iter().flat_map(Atom::constants).collect()),
            Term::Rule { head, body } => uniq(
                head.constants()
                    .into_iter()
                    .chain(body.iter().flat_map(Atom::constants))
                    .collect(),
            ),
        }
    }
    /// All distinct variable names mentioned by the term.
    pub fn variables(&self) -> Vec<String> {
        match self {
            Term::EnterWriteMode | Term::EnterQuestionMode => Vec::new(),
            Term::Atom(atom) => atom.variables(),
            Term::Formula(atoms) => uniq(atoms.iter().flat_map(Atom::variables).collect()),
            Term::Rule { head, body } => uniq(
                head.variables()
                    .into_iter()
                    .chain(body.iter().flat_map(Atom::variables))
                    .collect(),
            ),
        }
    }
}
impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn join(atoms: &[Atom]) -> String {
            let mut s = String::new();
            for atom in atoms {
                s += &(atom.to_string() + ",");
            }
            s.pop();
            s
        }
        match self {
            Term::EnterWriteMode => write!(f, "+"),
            Term::EnterQuestionMode => write!(f, "-"),
            Term::Atom(atom) => write!(f, "{}.", atom),
            Term::Formula(atoms) => write!(f, "{}.", join(atoms)),
            Term::Rule { head, body } => write!(f, "{} :- {}.", head, join(body)),
        }
    }
}

// ------------- SymbolIndex -------------
/// A multimap from a symbol name to the terms that mention it, in insertion
/// order. The same term is listed at most once per symbol.
#[derive(Debug, Default)]
pub struct SymbolIndex {
    index: HashMap<String, Vec<Arc<Term>>, SymbolHasher>,
}
impl SymbolIndex {
    pub fn new() -> Self {
        Self {
            index: HashMap::default(),
        }
    }
    pub fn add(&mut self, symbol: &str, term: &Arc<Term>) {
        let terms = self.index.entry(symbol.to_owned()).or_default();
        if !terms.iter().any(|kept| Arc::ptr_eq(kept, term)) {
            terms.push(Arc::clone(term));
        }
    }
    pub fn remove(&mut self, symbol: &str, term: &Arc<Term>) {
        if let Some(terms) = self.index.get_mut(symbol) {
            terms.retain(|kept| !Arc::ptr_eq(kept, term));
        }
    }
    // a symbol stays known once seen, even if removals empty its term list
    pub fn includes(&self, symbol: &str) -> bool {
        self.index.contains_key(symbol)
    }
    pub fn get(&self, symbol: &str) -> &[Arc<Term>] {
        self.index.get(symbol).map(Vec::as_slice).unwrap_or_default()
    }
    pub fn len(&self) -> usize {
        self.index.len()
    }
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

// ------------- Mode -------------
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Write,
    Query,
}

// ------------- Database -------------
// This sets up the database with the necessary structures
pub struct Database {
    // owns the growing list of parsed terms
    terms: Vec<Arc<Term>>,
    // owns lookups from symbol names to terms (similar to database indexes)
    predicates: SymbolIndex,
    constants: SymbolIndex,
    variables: SymbolIndex,
    // mode directives toggle this; interpreting it belongs to a resolution
    // engine outside this crate
    mode: Mode,
}

impl Database {
    pub fn new() -> Self {
        Self {
            terms: Vec::new(),
            predicates: SymbolIndex::new(),
            constants: SymbolIndex::new(),
            variables: SymbolIndex::new(),
            mode: Mode::default(),
        }
    }
    /// Tokenizes `text`, parses each sentence in input order, appends every
    /// parsed term to the term list and registers its symbols.
    ///
    /// The call is not atomic: each sentence commits before the next one is
    /// parsed, so when sentence `k` fails, sentences `1..k-1` of the same
    /// call remain in the database and the error aborts only the rest.
    pub fn insert(&mut self, text: &str) -> Result<Vec<Arc<Term>>> {
        let groups = tokenize(text)?;
        let mut inserted = Vec::new();
        for group in &groups {
            let term = Arc::new(TermParser::parse(group)?);
            self.keep(&term);
            inserted.push(term);
        }
        debug!(
            "inserted {} term(s), {} in total",
            inserted.len(),
            self.terms.len()
        );
        Ok(inserted)
    }
    // appends the term and registers each of its distinct symbol names in
    // the corresponding lookup; mode directives only flip the mode
    fn keep(&mut self, term: &Arc<Term>) {
        for name in term.predicates() {
            self.predicates.add(&name, term);
        }
        for name in term.constants() {
            self.constants.add(&name, term);
        }
        for name in term.variables() {
            self.variables.add(&name, term);
        }
        match **term {
            Term::EnterWriteMode => self.mode = Mode::Write,
            Term::EnterQuestionMode => self.mode = Mode::Query,
            _ => (),
        }
        self.terms.push(Arc::clone(term));
    }
    // functions to access the owned term list and lookups
    pub fn terms(&self) -> &[Arc<Term>] {
        &self.terms
    }
    pub fn len(&self) -> usize {
        self.terms.len()
    }
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
    pub fn predicates(&self) -> &SymbolIndex {
        &self.predicates
    }
    pub fn constants(&self) -> &SymbolIndex {
        &self.constants
    }
    pub fn variables(&self) -> &SymbolIndex {
        &self.variables
    }
    pub fn current_mode(&self) -> Mode {
        self.mode
    }
    pub fn is_entering(&self) -> bool {
        self.mode == Mode::Write
    }
    pub fn is_asking(&self) -> bool {
        self.mode == Mode::Query
    }
}
impl Default for Database {
    fn default() -> Self {
        Self::new()
    }
}
