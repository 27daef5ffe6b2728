//! Benchmarks for gate application across register sizes and backends.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ndarray::Array2;
use num_complex::Complex64;
use std::f64::consts::FRAC_1_SQRT_2;

use statevec::{apply_diagonal_with, apply_gate_multi_with, apply_gate_with, Parallel, Serial, State};

fn hadamard() -> Array2<Complex64> {
    let s = Complex64::new(FRAC_1_SQRT_2, 0.0);
    Array2::from_shape_vec((2, 2), vec![s, s, s, -s]).unwrap()
}

fn cnot() -> Array2<Complex64> {
    let zero = Complex64::new(0.0, 0.0);
    let one = Complex64::new(1.0, 0.0);
    Array2::from_shape_vec(
        (4, 4),
        vec![
            one, zero, zero, zero,
            zero, one, zero, zero,
            zero, zero, zero, one,
            zero, zero, one, zero,
        ],
    )
    .unwrap()
}

fn bench_single_qubit(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_qubit");
    let h = hadamard();

    for nqubits in [10usize, 14, 18] {
        // Low target: many small chunks
        let target = 0;
        group.bench_with_input(BenchmarkId::new("serial", nqubits), &nqubits, |b, &n| {
            let mut state: State = State::zero_state(n);
            b.iter(|| {
                apply_gate_with(&Serial, state.as_mut_slice(), &h, n, black_box(target)).unwrap()
            });
        });
        group.bench_with_input(BenchmarkId::new("parallel", nqubits), &nqubits, |b, &n| {
            let mut state: State = State::zero_state(n);
            b.iter(|| {
                apply_gate_with(&Parallel, state.as_mut_slice(), &h, n, black_box(target)).unwrap()
            });
        });
    }
    group.finish();
}

fn bench_target_position(c: &mut Criterion) {
    // Chunk size grows with the target; the parallel grain follows it
    let mut group = c.benchmark_group("target_position");
    let h = hadamard();
    let nqubits = 16;

    for target in [0usize, 7, 15] {
        group.bench_with_input(BenchmarkId::new("serial", target), &target, |b, &t| {
            let mut state: State = State::zero_state(nqubits);
            b.iter(|| apply_gate_with(&Serial, state.as_mut_slice(), &h, nqubits, t).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("parallel", target), &target, |b, &t| {
            let mut state: State = State::zero_state(nqubits);
            b.iter(|| apply_gate_with(&Parallel, state.as_mut_slice(), &h, nqubits, t).unwrap());
        });
    }
    group.finish();
}

fn bench_two_qubit(c: &mut Criterion) {
    let mut group = c.benchmark_group("two_qubit");
    let gate = cnot();

    for nqubits in [10usize, 14, 18] {
        let targets = [0usize, 1];
        group.bench_with_input(BenchmarkId::new("serial", nqubits), &nqubits, |b, &n| {
            let mut state: State = State::zero_state(n);
            b.iter(|| {
                apply_gate_multi_with(&Serial, state.as_mut_slice(), &gate, n, &targets).unwrap()
            });
        });
        group.bench_with_input(BenchmarkId::new("parallel", nqubits), &nqubits, |b, &n| {
            let mut state: State = State::zero_state(n);
            b.iter(|| {
                apply_gate_multi_with(&Parallel, state.as_mut_slice(), &gate, n, &targets).unwrap()
            });
        });
    }
    group.finish();
}

fn bench_diagonal(c: &mut Criterion) {
    // The diagonal fast path against the dense 2x2 path for a Z gate
    let mut group = c.benchmark_group("diagonal_vs_dense");
    let nqubits = 16;
    let target = 4;

    let zero = Complex64::new(0.0, 0.0);
    let one = Complex64::new(1.0, 0.0);
    let z_dense = Array2::from_shape_vec((2, 2), vec![one, zero, zero, -one]).unwrap();
    let z_phases = [one, -one];

    group.bench_function("dense", |b| {
        let mut state: State = State::zero_state(nqubits);
        b.iter(|| {
            apply_gate_with(&Serial, state.as_mut_slice(), &z_dense, nqubits, target).unwrap()
        });
    });
    group.bench_function("diagonal", |b| {
        let mut state: State = State::zero_state(nqubits);
        b.iter(|| {
            apply_diagonal_with(&Serial, state.as_mut_slice(), &z_phases, nqubits, target).unwrap()
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_single_qubit,
    bench_target_position,
    bench_two_qubit,
    bench_diagonal
);
criterion_main!(benches);
