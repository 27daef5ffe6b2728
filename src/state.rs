//! State-buffer construction helpers.
//!
//! The kernels in [`crate::apply`] operate on plain `&mut [Complex<T>]`
//! slices owned by the caller; `State` is a convenience owner of such a
//! buffer for callers that do not already have one (tests, benchmarks,
//! small drivers).

use num_complex::Complex;
use num_traits::Float;

/// A dense register of `nqubits` qubits: `2^nqubits` complex amplitudes.
#[derive(Debug, Clone, PartialEq)]
pub struct State<T = f64> {
    pub nqubits: usize,
    pub data: Vec<Complex<T>>,
}

impl<T: Float> State<T> {
    /// Creates the `|00...0⟩` state (first amplitude 1, rest 0).
    pub fn zero_state(nqubits: usize) -> Self {
        Self::basis_state(nqubits, 0)
    }

    /// Creates the computational basis state at the given flat index.
    ///
    /// Bit `t` of `index` is the value of qubit `t` (see the crate docs).
    ///
    /// # Panics
    /// Panics if `nqubits` is zero or `index >= 2^nqubits`.
    pub fn basis_state(nqubits: usize, index: usize) -> Self {
        assert!(nqubits >= 1, "state must have at least one qubit");
        let dim = 1usize << nqubits;
        assert!(
            index < dim,
            "basis index {} out of range for {} qubits",
            index,
            nqubits
        );
        let mut data = vec![Complex::new(T::zero(), T::zero()); dim];
        data[index] = Complex::new(T::one(), T::zero());
        State { nqubits, data }
    }

    /// L2 norm of the amplitude vector; 1 for any normalized state.
    pub fn norm(&self) -> T {
        self.data
            .iter()
            .fold(T::zero(), |acc, c| acc + c.norm_sqr())
            .sqrt()
    }

    /// Measurement probabilities of all basis states.
    pub fn probabilities(&self) -> Vec<T> {
        self.data.iter().map(|c| c.norm_sqr()).collect()
    }

    /// Number of amplitudes (`2^nqubits`).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[Complex<T>] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [Complex<T>] {
        &mut self.data
    }
}
