//! Shared test utilities for statevec integration tests.
#![allow(dead_code)]

use ndarray::Array2;
use num_complex::Complex64;
use rand::rngs::StdRng;
use rand::Rng;
use std::f64::consts::FRAC_1_SQRT_2;

pub const ATOL: f64 = 1e-10;

pub fn identity() -> Array2<Complex64> {
    let zero = Complex64::new(0.0, 0.0);
    let one = Complex64::new(1.0, 0.0);
    Array2::from_shape_vec((2, 2), vec![one, zero, zero, one]).unwrap()
}

pub fn pauli_x() -> Array2<Complex64> {
    let zero = Complex64::new(0.0, 0.0);
    let one = Complex64::new(1.0, 0.0);
    Array2::from_shape_vec((2, 2), vec![zero, one, one, zero]).unwrap()
}

pub fn pauli_z() -> Array2<Complex64> {
    let zero = Complex64::new(0.0, 0.0);
    let one = Complex64::new(1.0, 0.0);
    Array2::from_shape_vec((2, 2), vec![one, zero, zero, -one]).unwrap()
}

pub fn hadamard() -> Array2<Complex64> {
    let s = Complex64::new(FRAC_1_SQRT_2, 0.0);
    Array2::from_shape_vec((2, 2), vec![s, s, s, -s]).unwrap()
}

/// SWAP under the convention that bit b of the gate index is targets[b].
pub fn swap() -> Array2<Complex64> {
    let zero = Complex64::new(0.0, 0.0);
    let one = Complex64::new(1.0, 0.0);
    Array2::from_shape_vec(
        (4, 4),
        vec![
            one, zero, zero, zero,
            zero, zero, one, zero,
            zero, one, zero, zero,
            zero, zero, zero, one,
        ],
    )
    .unwrap()
}

/// General single-qubit unitary U(theta, phi, lambda).
pub fn random_unitary(rng: &mut StdRng) -> Array2<Complex64> {
    let theta: f64 = rng.gen_range(0.0..std::f64::consts::PI);
    let phi: f64 = rng.gen_range(0.0..2.0 * std::f64::consts::PI);
    let lam: f64 = rng.gen_range(0.0..2.0 * std::f64::consts::PI);
    let (c, s) = ((theta / 2.0).cos(), (theta / 2.0).sin());
    Array2::from_shape_vec(
        (2, 2),
        vec![
            Complex64::new(c, 0.0),
            -Complex64::from_polar(s, lam),
            Complex64::from_polar(s, phi),
            Complex64::from_polar(c, phi + lam),
        ],
    )
    .unwrap()
}

/// Random square complex matrix, not necessarily unitary.
pub fn random_matrix(rng: &mut StdRng, dim: usize) -> Array2<Complex64> {
    let entries: Vec<Complex64> = (0..dim * dim)
        .map(|_| Complex64::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
        .collect();
    Array2::from_shape_vec((dim, dim), entries).unwrap()
}

/// Random normalized state vector on `nqubits` qubits.
pub fn random_state(rng: &mut StdRng, nqubits: usize) -> Vec<Complex64> {
    let dim = 1usize << nqubits;
    let mut state: Vec<Complex64> = (0..dim)
        .map(|_| Complex64::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
        .collect();
    let norm: f64 = state.iter().map(|c| c.norm_sqr()).sum::<f64>().sqrt();
    for amp in &mut state {
        *amp /= norm;
    }
    state
}

pub fn norm_sqr(state: &[Complex64]) -> f64 {
    state.iter().map(|c| c.norm_sqr()).sum()
}

pub fn assert_states_close(result: &[Complex64], expected: &[Complex64]) {
    assert_eq!(result.len(), expected.len());
    for (i, (r, e)) in result.iter().zip(expected.iter()).enumerate() {
        assert!(
            (r - e).norm() < ATOL,
            "state mismatch at index {}: got {:?}, expected {:?}",
            i,
            r,
            e
        );
    }
}
