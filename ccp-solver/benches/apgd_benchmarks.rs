//! Benchmarks for the APGD solver.
//!
//! Run with: cargo bench -p ccp-solver

#![allow(missing_docs, clippy::wildcard_imports)]

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nalgebra::{DMatrix, DVector};
use rand::{Rng, SeedableRng};

use ccp_solver::{ApgdSolver, ApgdSolverConfig, DenseDescriptor};
use ccp_types::{ConstraintGroup, ConstraintSet};

/// Generate a random frictional stacking problem with `num_contacts`
/// contacts. The operator is diagonally dominant (hence positive definite)
/// with random nearest-neighbour coupling, mimicking the Schur complement
/// of a loosely connected contact graph.
fn random_contact_problem(num_contacts: usize, seed: u64) -> DenseDescriptor {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);

    let groups: Vec<ConstraintGroup> = (0..num_contacts)
        .map(|_| ConstraintGroup::contact(0.3 + rng.gen::<f64>() * 0.5))
        .collect();
    let set = ConstraintSet::new(groups).expect("valid constraint set");
    let n = set.dimension();

    let mut operator = DMatrix::zeros(n, n);
    for i in 0..n {
        operator[(i, i)] = 4.0 + rng.gen::<f64>();
        if i + 3 < n {
            let coupling = rng.gen::<f64>() - 0.5;
            operator[(i, i + 3)] = coupling;
            operator[(i + 3, i)] = coupling;
        }
    }

    let rhs = DVector::from_fn(n, |_, _| rng.gen::<f64>() * 2.0 - 0.5);
    DenseDescriptor::new(operator, rhs, set).expect("valid descriptor")
}

fn bench_cold_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("apgd_cold");

    for num_contacts in [16, 64, 256] {
        let descriptor = random_contact_problem(num_contacts, 42);
        group.throughput(Throughput::Elements(num_contacts as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(num_contacts),
            &descriptor,
            |b, descriptor| {
                let mut solver = ApgdSolver::new(ApgdSolverConfig::realtime());
                b.iter(|| solver.solve(descriptor, None).expect("solve"));
            },
        );
    }

    group.finish();
}

fn bench_warm_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("apgd_warm");

    for num_contacts in [16, 64, 256] {
        let descriptor = random_contact_problem(num_contacts, 42);

        // Converged solution to seed from, as a stepper would retain.
        let mut setup = ApgdSolver::new(ApgdSolverConfig::high_accuracy());
        let previous = setup.solve(&descriptor, None).expect("setup solve");

        group.throughput(Throughput::Elements(num_contacts as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(num_contacts),
            &descriptor,
            |b, descriptor| {
                let mut solver =
                    ApgdSolver::new(ApgdSolverConfig::realtime().with_warm_starting(true));
                b.iter(|| {
                    solver
                        .solve(descriptor, Some(&previous.multipliers))
                        .expect("solve")
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_cold_solve, bench_warm_solve);
criterion_main!(benches);
