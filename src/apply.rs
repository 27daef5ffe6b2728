//! Gate dispatchers: validate inputs, enumerate amplitude groups, and drive
//! the per-group transforms in place.
//!
//! All entry points share the same control flow: fail-fast validation at
//! the boundary (before any amplitude is touched), then a pass over the
//! state buffer in aligned chunks of `2^(target+1)` amplitudes driven by a
//! [`Backend`]. Each chunk contains complete amplitude groups only, so
//! chunks are independent and any backend yields bit-identical results.
//!
//! The `*_with` variants take an explicit backend; the plain variants run
//! on [`Serial`].

use std::fmt;

use ndarray::Array2;
use num_complex::Complex;
use num_traits::Float;

use crate::backend::{Backend, Serial};
use crate::index::{group_indices, pair_indices};
use crate::instruct::{scale_row, transform_group, transform_pair};

/// Precondition violations detected before any mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyError {
    /// `nqubits` is zero
    NoQubits,
    /// `2^nqubits` does not fit in `usize`
    TooManyQubits { nqubits: usize },
    /// State buffer length is not `2^nqubits`
    StateLengthMismatch { expected: usize, actual: usize },
    /// A target or control qubit index is out of range
    LocOutOfRange { loc: usize, nqubits: usize },
    /// A qubit index appears twice among targets and controls
    OverlappingLocs { loc: usize },
    /// The target slice of a multi-qubit application is empty
    NoTargets,
    /// Gate matrix is not square with dimension `2^k`
    GateShapeMismatch { expected: usize, rows: usize, cols: usize },
    /// Diagonal phase slice does not have one entry per basis value
    PhaseLengthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for ApplyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplyError::NoQubits => write!(f, "state must have at least one qubit"),
            ApplyError::TooManyQubits { nqubits } => {
                write!(f, "2^{} amplitudes do not fit in usize", nqubits)
            }
            ApplyError::StateLengthMismatch { expected, actual } => write!(
                f,
                "state buffer has {} amplitudes, expected {}",
                actual, expected
            ),
            ApplyError::LocOutOfRange { loc, nqubits } => {
                write!(f, "qubit {} is out of range (nqubits = {})", loc, nqubits)
            }
            ApplyError::OverlappingLocs { loc } => {
                write!(f, "qubit {} appears more than once", loc)
            }
            ApplyError::NoTargets => write!(f, "gate must act on at least one target"),
            ApplyError::GateShapeMismatch {
                expected,
                rows,
                cols,
            } => write!(
                f,
                "gate matrix is {}x{}, expected {}x{}",
                rows, cols, expected, expected
            ),
            ApplyError::PhaseLengthMismatch { expected, actual } => write!(
                f,
                "phase slice has {} entries, expected {}",
                actual, expected
            ),
        }
    }
}

impl std::error::Error for ApplyError {}

/// Check `nqubits` and the state buffer length. Returns nothing; all
/// dispatchers call this before touching the buffer.
fn validate_register<T>(state: &[Complex<T>], nqubits: usize) -> Result<(), ApplyError> {
    if nqubits == 0 {
        return Err(ApplyError::NoQubits);
    }
    let expected = 1usize
        .checked_shl(nqubits as u32)
        .ok_or(ApplyError::TooManyQubits { nqubits })?;
    if state.len() != expected {
        return Err(ApplyError::StateLengthMismatch {
            expected,
            actual: state.len(),
        });
    }
    Ok(())
}

fn validate_loc(loc: usize, nqubits: usize) -> Result<(), ApplyError> {
    if loc >= nqubits {
        return Err(ApplyError::LocOutOfRange { loc, nqubits });
    }
    Ok(())
}

fn validate_gate_shape<T>(gate: &Array2<Complex<T>>, dim: usize) -> Result<(), ApplyError> {
    if gate.nrows() != dim || gate.ncols() != dim {
        return Err(ApplyError::GateShapeMismatch {
            expected: dim,
            rows: gate.nrows(),
            cols: gate.ncols(),
        });
    }
    Ok(())
}

/// Apply a 2x2 gate to `target`, sequentially.
///
/// Equivalent to `apply_gate_with(&Serial, ...)`. The buffer is mutated in
/// place; on error nothing has been written.
///
/// # Example
/// ```
/// use ndarray::Array2;
/// use num_complex::Complex64;
/// use statevec::apply_gate;
///
/// // X on qubit 1 of |00⟩ gives |10⟩ (index 2)
/// let zero = Complex64::new(0.0, 0.0);
/// let one = Complex64::new(1.0, 0.0);
/// let x = Array2::from_shape_vec((2, 2), vec![zero, one, one, zero]).unwrap();
/// let mut state = vec![one, zero, zero, zero];
/// apply_gate(&mut state, &x, 2, 1).unwrap();
/// assert!((state[2] - one).norm() < 1e-10);
/// ```
pub fn apply_gate<T: Float + Send + Sync>(
    state: &mut [Complex<T>],
    gate: &Array2<Complex<T>>,
    nqubits: usize,
    target: usize,
) -> Result<(), ApplyError> {
    apply_gate_with(&Serial, state, gate, nqubits, target)
}

/// Apply a 2x2 gate to `target` on the given backend.
///
/// After return the buffer holds `(I ⊗ ... ⊗ G ⊗ ... ⊗ I) |ψ⟩` with `G` at
/// bit position `target` (see the crate docs for the ordering convention).
/// Validation happens once, before any mutation; the hot loop performs no
/// checks.
pub fn apply_gate_with<B: Backend, T: Float + Send + Sync>(
    backend: &B,
    state: &mut [Complex<T>],
    gate: &Array2<Complex<T>>,
    nqubits: usize,
    target: usize,
) -> Result<(), ApplyError> {
    validate_register(state, nqubits)?;
    validate_loc(target, nqubits)?;
    validate_gate_shape(gate, 2)?;

    let chunk_len = 1usize << (target + 1);
    // Pairs local to one chunk; every chunk has the same internal layout.
    let pairs = pair_indices(target + 1, target);
    backend.run_chunks(state, chunk_len, |_, chunk| {
        for (i0, i1) in pairs.clone() {
            transform_pair(chunk, i0, i1, gate);
        }
    });
    Ok(())
}

/// Apply a `2^k x 2^k` gate to `k` distinct targets, sequentially.
///
/// Bit `b` of the gate's basis index corresponds to `targets[b]`, matching
/// the global convention (qubit `t` is bit `t` of the flat index). So for
/// `targets = [t0, t1]`, column `0b10` of the gate addresses the local
/// state with qubit `t1` set and `t0` cleared.
pub fn apply_gate_multi<T: Float + Send + Sync>(
    state: &mut [Complex<T>],
    gate: &Array2<Complex<T>>,
    nqubits: usize,
    targets: &[usize],
) -> Result<(), ApplyError> {
    apply_gate_multi_with(&Serial, state, gate, nqubits, targets)
}

/// Apply a `2^k x 2^k` gate to `k` distinct targets on the given backend.
///
/// Chunks cover `2^(max(targets)+1)` amplitudes so that every amplitude
/// group is chunk-local; within a chunk, groups are gathered, multiplied
/// through the gate, and scattered back one at a time.
pub fn apply_gate_multi_with<B: Backend, T: Float + Send + Sync>(
    backend: &B,
    state: &mut [Complex<T>],
    gate: &Array2<Complex<T>>,
    nqubits: usize,
    targets: &[usize],
) -> Result<(), ApplyError> {
    validate_register(state, nqubits)?;
    if targets.is_empty() {
        return Err(ApplyError::NoTargets);
    }
    for &t in targets {
        validate_loc(t, nqubits)?;
    }
    let mut sorted = targets.to_vec();
    sorted.sort_unstable();
    for w in sorted.windows(2) {
        if w[0] == w[1] {
            return Err(ApplyError::OverlappingLocs { loc: w[0] });
        }
    }
    validate_gate_shape(gate, 1usize << targets.len())?;

    let chunk_bits = sorted[sorted.len() - 1] + 1;
    let chunk_len = 1usize << chunk_bits;
    let groups = group_indices(chunk_bits, targets);
    backend.run_chunks(state, chunk_len, |_, chunk| {
        for group in groups.clone() {
            transform_group(chunk, &group, gate);
        }
    });
    Ok(())
}

/// Apply a 2x2 gate to `target`, conditioned on all `controls` being 1,
/// sequentially.
pub fn apply_controlled<T: Float + Send + Sync>(
    state: &mut [Complex<T>],
    gate: &Array2<Complex<T>>,
    nqubits: usize,
    controls: &[usize],
    target: usize,
) -> Result<(), ApplyError> {
    apply_controlled_with(&Serial, state, gate, nqubits, controls, target)
}

/// Apply a 2x2 gate to `target`, conditioned on all `controls` being 1, on
/// the given backend.
///
/// Pairs whose control bits are not all set are left untouched. The two
/// indices of a pair agree on every non-target bit, so the control mask is
/// checked once per pair against the pair's low index.
pub fn apply_controlled_with<B: Backend, T: Float + Send + Sync>(
    backend: &B,
    state: &mut [Complex<T>],
    gate: &Array2<Complex<T>>,
    nqubits: usize,
    controls: &[usize],
    target: usize,
) -> Result<(), ApplyError> {
    validate_register(state, nqubits)?;
    validate_loc(target, nqubits)?;
    let mut cmask = 0usize;
    for &c in controls {
        validate_loc(c, nqubits)?;
        if c == target || cmask & (1 << c) != 0 {
            return Err(ApplyError::OverlappingLocs { loc: c });
        }
        cmask |= 1 << c;
    }
    validate_gate_shape(gate, 2)?;

    let chunk_len = 1usize << (target + 1);
    let pairs = pair_indices(target + 1, target);
    backend.run_chunks(state, chunk_len, |c, chunk| {
        // Control bits above the target come from the chunk's position.
        let base = c * chunk_len;
        for (i0, i1) in pairs.clone() {
            if (base | i0) & cmask == cmask {
                transform_pair(chunk, i0, i1, gate);
            }
        }
    });
    Ok(())
}

/// Multiply each amplitude by `phases[b]`, where `b` is the value of the
/// target qubit in that amplitude's basis state. Sequential.
///
/// This is the fast path for diagonal gates (Z, S, T, phase shifts): no
/// amplitude pairs are gathered, each slot is scaled independently.
pub fn apply_diagonal<T: Float + Send + Sync>(
    state: &mut [Complex<T>],
    phases: &[Complex<T>],
    nqubits: usize,
    target: usize,
) -> Result<(), ApplyError> {
    apply_diagonal_with(&Serial, state, phases, nqubits, target)
}

/// Diagonal fast path on the given backend. `phases` must have exactly two
/// entries, one per basis value of the target qubit.
pub fn apply_diagonal_with<B: Backend, T: Float + Send + Sync>(
    backend: &B,
    state: &mut [Complex<T>],
    phases: &[Complex<T>],
    nqubits: usize,
    target: usize,
) -> Result<(), ApplyError> {
    validate_register(state, nqubits)?;
    validate_loc(target, nqubits)?;
    if phases.len() != 2 {
        return Err(ApplyError::PhaseLengthMismatch {
            expected: 2,
            actual: phases.len(),
        });
    }

    let stride = 1usize << target;
    let (p0, p1) = (phases[0], phases[1]);
    backend.run_chunks(state, stride << 1, |_, chunk| {
        for k in 0..stride {
            scale_row(chunk, k, p0);
            scale_row(chunk, k + stride, p1);
        }
    });
    Ok(())
}
