use criterion::{Criterion, black_box, criterion_group, criterion_main};

use datalect::construct::Database;

// a script of n facts plus a rule chaining every tenth predicate
fn script(n: usize) -> String {
    let mut text = String::new();
    for i in 0..n {
        text += &format!("edge{}(node{},node{}). ", i % 100, i, i + 1);
    }
    for i in (0..n).step_by(10) {
        text += &format!("path{}(X,Y) :- edge{}(X,Y). ", i % 100, i % 100);
    }
    text
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let small = script(10);
    c.bench_function("insert 10", |b| {
        b.iter(|| {
            let mut db = Database::new();
            db.insert(black_box(&small)).unwrap();
            db.len()
        })
    });
    let medium = script(1000);
    c.bench_function("insert 1k", |b| {
        b.iter(|| {
            let mut db = Database::new();
            db.insert(black_box(&medium)).unwrap();
            db.len()
        })
    });
    let large = script(10000);
    c.bench_function("insert 10k", |b| {
        b.iter(|| {
            let mut db = Database::new();
            db.insert(black_box(&large)).unwrap();
            db.len()
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
