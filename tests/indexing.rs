use std::sync::Arc;

use datalect::construct::{Atom, Database, SymbolIndex, Term};

#[test]
fn table_key_counts_across_inserts() {
    let mut db = Database::new();
    db.insert("p(a,b,c).").expect("insert ok");
    db.insert("q(X,Y).").expect("insert ok");
    assert_eq!(db.predicates().len(), 2);
    assert_eq!(db.constants().len(), 3);
    assert_eq!(db.variables().len(), 2);
    assert_eq!(db.predicates().get("p").len(), 1);
    assert_eq!(db.predicates().get("q").len(), 1);
}

#[test]
fn repeated_facts_index_as_distinct_terms() {
    let mut db = Database::new();
    let first = db.insert("p(a).").expect("insert ok");
    let second = db.insert("p(a).").expect("insert ok");
    assert!(!Arc::ptr_eq(&first[0], &second[0]));
    assert_eq!(db.len(), 2);
    // both terms appear under each of their symbols, in insertion order
    let kept = db.constants().get("a");
    assert_eq!(kept.len(), 2);
    assert!(Arc::ptr_eq(&kept[0], &first[0]));
    assert!(Arc::ptr_eq(&kept[1], &second[0]));
    assert_eq!(db.predicates().get("p").len(), 2);
}

#[test]
fn repeated_names_within_one_term_index_once() {
    let mut db = Database::new();
    let terms = db.insert("p(a,a,b).").expect("insert ok");
    assert_eq!(db.constants().get("a").len(), 1);
    assert_eq!(terms[0].constants(), vec!["a".to_owned(), "b".to_owned()]);

    let terms = db.insert("r(X) :- q(X,X),p(X,b).").expect("insert ok");
    assert_eq!(db.variables().get("X").len(), 1);
    assert_eq!(terms[0].variables(), vec!["X".to_owned()]);
    assert_eq!(
        terms[0].predicates(),
        vec!["r".to_owned(), "q".to_owned(), "p".to_owned()]
    );
}

#[test]
fn unknown_symbols() {
    let db = Database::new();
    assert!(!db.predicates().includes("nothing"));
    assert!(db.predicates().get("nothing").is_empty());
}

#[test]
fn removal_keeps_the_symbol_known() {
    let term = Arc::new(Term::Atom(Atom::new("p".to_owned(), Vec::new(), false)));
    let mut index = SymbolIndex::new();
    index.add("p", &term);
    assert!(index.includes("p"));
    index.remove("p", &term);
    assert!(index.get("p").is_empty());
    // the key survives an emptying removal
    assert!(index.includes("p"));
    assert_eq!(index.len(), 1);
}

#[test]
fn add_is_idempotent_per_symbol_and_term() {
    let term = Arc::new(Term::Atom(Atom::new("p".to_owned(), Vec::new(), false)));
    let mut index = SymbolIndex::new();
    index.add("p", &term);
    index.add("p", &term);
    assert_eq!(index.get("p").len(), 1);
}

#[test]
fn removal_is_by_exact_pair() {
    let first = Arc::new(Term::Atom(Atom::new("p".to_owned(), Vec::new(), false)));
    let second = Arc::new(Term::Atom(Atom::new("p".to_owned(), Vec::new(), false)));
    let mut index = SymbolIndex::new();
    index.add("p", &first);
    index.add("p", &second);
    index.remove("p", &first);
    let kept = index.get("p");
    assert_eq!(kept.len(), 1);
    assert!(Arc::ptr_eq(&kept[0], &second));
}
