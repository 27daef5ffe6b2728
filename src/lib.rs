//! In-place gate-application kernels for dense state-vector simulation.
//!
//! The state of `n` qubits is a dense buffer of `2^n` complex amplitudes.
//! Applying a gate to a target qubit rewrites the buffer in place according
//! to the tensor-product semantics `(I ⊗ ... ⊗ G ⊗ ... ⊗ I) |ψ⟩`.
//!
//! # Bit-ordering convention
//!
//! Qubit `t` corresponds to bit position `t` of the flat amplitude index,
//! counting from the least-significant bit: the basis state
//! `|q_{n-1} ... q_1 q_0⟩` lives at index `Σ q_t · 2^t`. For example with
//! `nqubits = 2`, applying X to target 1 maps `|00⟩` (index 0) to `|10⟩`
//! (index 2). All index arithmetic in [`index`] and all worked examples in
//! the test suite are pinned to this convention.
//!
//! # Execution backends
//!
//! The same indexing and transform code runs on every backend; only the
//! "execute these independent chunks" step is specialized, through the
//! [`Backend`] trait. [`Serial`] iterates chunks one at a time, [`Parallel`]
//! distributes them over a rayon thread pool. Amplitude groups never share
//! an index, so the two produce bit-identical results.
//!
//! # Example
//!
//! ```
//! use ndarray::Array2;
//! use num_complex::Complex64;
//! use statevec::{apply_gate, State};
//!
//! // Apply a Hadamard to the single qubit of |0⟩.
//! let s = Complex64::new(std::f64::consts::FRAC_1_SQRT_2, 0.0);
//! let h = Array2::from_shape_vec((2, 2), vec![s, s, s, -s]).unwrap();
//!
//! let mut state: State = State::zero_state(1);
//! apply_gate(state.as_mut_slice(), &h, 1, 0).unwrap();
//! assert!((state.data[0] - s).norm() < 1e-10);
//! assert!((state.data[1] - s).norm() < 1e-10);
//! ```

pub mod apply;
pub mod backend;
pub mod index;
pub mod instruct;
pub mod state;

pub use apply::{
    apply_controlled, apply_controlled_with, apply_diagonal, apply_diagonal_with, apply_gate,
    apply_gate_multi, apply_gate_multi_with, apply_gate_with, ApplyError,
};
pub use backend::{Backend, Parallel, Serial};
pub use state::State;
