//! Datalect – a small knowledge-base core for a Datalog-like notation.
//!
//! Datalect turns flat text into structured *terms* while indexing every
//! predicate, constant, and variable name that appears:
//! * An [`construct::Atom`] applies a predicate to zero or more parameters
//!   and may be negated (`~p(a,X)`).
//! * A [`construct::Parameter`] is a `Constant` (lowercase-initial) or a
//!   `Variable` (uppercase-initial).
//! * A [`construct::Term`] is a whole sentence: a fact, a conjunctive
//!   formula, a rule, or one of the two mode directives (`+`, `-`).
//! * The [`construct::SymbolIndex`] tables map each symbol name to the
//!   terms mentioning it, enabling lookup by predicate, constant, or
//!   variable.
//! * The [`construct::Database`] owns the term list, the three index
//!   tables, and the current mode, and is the sole entry point for
//!   inserting new text.
//!
//! ## Notation
//! ```text
//! input          ::= '+' | '-' | atom { ':-' formula } '.'
//! formula        ::= atom { ',' formula }
//! atom           ::= ['~'] predicate ['(' parameterlist ')']
//! parameterlist  ::= parameter { (',' | '&') parameterlist }
//! parameter      ::= variable | name
//! predicate,name ::= lowercase letter, then letters/digits/underscores
//! variable       ::= uppercase letter, then letters/digits/underscores
//! ```
//! `,` and `&` both separate conjuncts, `~` negates the atom it precedes,
//! and `/*...*/` comments are stripped (first occurrence per insertion).
//!
//! ## Modules
//! * [`datalog`] – The notation front-end: token model, tokenizer, and the
//!   recursive-descent term parser.
//! * [`construct`] – Terms and their symbol derivations, the symbol index
//!   tables, and the database.
//! * [`error`] – The crate-wide error enum and `Result` alias.
//!
//! ## Quick Start
//! ```
//! use datalect::construct::{Database, Mode};
//! let mut db = Database::new();
//! let terms = db.insert("parent(tom,bob). ancestor(X,Y) :- parent(X,Y).").unwrap();
//! assert_eq!(terms.len(), 2);
//! assert!(db.predicates().includes("parent"));
//! assert!(db.variables().includes("X"));
//! assert_eq!(db.current_mode(), Mode::Write);
//! ```
//!
//! ## Status & Roadmap
//! This crate is the parsing and indexing core only. Resolution (unification,
//! fixpoint evaluation, negation-as-failure) and persistence are external
//! collaborators consuming the parsed terms and index tables; the mode flag
//! is stored here but interpreted there.

pub mod construct;
pub mod datalog;
pub mod error;
