//! Benchmarks for the completion engines, in the style of the teacher's
//! `mathhook-benchmarks` suite: one criterion group per engine, run
//! against a handful of small fixed systems rather than a generated
//! corpus, since Gröbner completion cost is dominated by the input
//! ideal's structure rather than its raw size.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use groebner_core::field::PrimeField;
use groebner_core::groebner::{buchberger_plain, buchberger_with_criteria, buchberger_with_criteria_retiring, f4};
use groebner_core::ordering::MonomialOrder;
use groebner_core::polynomial::{Monomial, Polynomial};
use groebner_core::term::Term;
use groebner_core::EngineConfig;

type F31 = PrimeField<31>;

fn mono(exps: Vec<u32>, c: i64) -> Monomial<F31> {
    Monomial::new(Term::new(exps), F31::new(c))
}

fn poly(monos: Vec<Monomial<F31>>, num_vars: usize) -> Polynomial<F31> {
    Polynomial::new(monos, num_vars, MonomialOrder::Grevlex)
}

/// A small two-variable system with a nontrivial completion: a handful
/// of new S-polynomials are generated before the process converges.
fn sample_system() -> Vec<Polynomial<F31>> {
    vec![
        poly(vec![mono(vec![2, 0], 1), mono(vec![0, 1], -1)], 2),
        poly(vec![mono(vec![0, 2], 1), mono(vec![1, 0], -1)], 2),
    ]
}

fn bench_buchberger_plain(c: &mut Criterion) {
    let config = EngineConfig::default();
    c.bench_function("buchberger_plain/2var_quadratic", |b| {
        b.iter(|| buchberger_plain(black_box(sample_system()), &config).unwrap())
    });
}

fn bench_buchberger_with_criteria(c: &mut Criterion) {
    let config = EngineConfig::default();
    c.bench_function("buchberger_with_criteria/2var_quadratic", |b| {
        b.iter(|| buchberger_with_criteria(black_box(sample_system()), &config).unwrap())
    });
}

fn bench_buchberger_with_criteria_retiring(c: &mut Criterion) {
    let config = EngineConfig::default();
    c.bench_function("buchberger_with_criteria_retiring/2var_quadratic", |b| {
        b.iter(|| buchberger_with_criteria_retiring(black_box(sample_system()), &config).unwrap())
    });
}

fn bench_f4(c: &mut Criterion) {
    let config = EngineConfig::default();
    c.bench_function("f4/2var_quadratic", |b| {
        b.iter(|| f4(black_box(sample_system()), &config).unwrap())
    });
}

criterion_group!(
    benches,
    bench_buchberger_plain,
    bench_buchberger_with_criteria,
    bench_buchberger_with_criteria_retiring,
    bench_f4
);
criterion_main!(benches);
