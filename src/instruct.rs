//! Primitive amplitude operations for state-vector simulation.
//!
//! These functions rewrite a handful of amplitudes at given indices with a
//! small complex matrix-vector product. They are the per-group workhorse of
//! the dispatchers in [`crate::apply`] and are generic over the scalar
//! width, so both `f32` and `f64` state vectors are supported.

use ndarray::Array2;
use num_complex::Complex;
use num_traits::Float;

/// Apply a 2x2 gate to the pair of amplitudes at indices `i` and `j`.
///
/// With gate `[[a, b], [c, d]]` the pair `(state[i], state[j])` becomes
/// `(a*state[i] + b*state[j], c*state[i] + d*state[j])`. Both old values
/// are read before either slot is written, since each output depends on
/// both inputs.
///
/// # Example
/// ```
/// use ndarray::Array2;
/// use num_complex::Complex64;
/// use statevec::instruct::transform_pair;
///
/// // Apply X to |0⟩: the two amplitudes swap
/// let mut state = vec![Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)];
/// let zero = Complex64::new(0.0, 0.0);
/// let one = Complex64::new(1.0, 0.0);
/// let x = Array2::from_shape_vec((2, 2), vec![zero, one, one, zero]).unwrap();
/// transform_pair(&mut state, 0, 1, &x);
/// assert!((state[0].norm() - 0.0).abs() < 1e-10);
/// assert!((state[1].norm() - 1.0).abs() < 1e-10);
/// ```
#[inline]
pub fn transform_pair<T: Float>(
    state: &mut [Complex<T>],
    i: usize,
    j: usize,
    gate: &Array2<Complex<T>>,
) {
    debug_assert_eq!(gate.nrows(), 2);
    debug_assert_eq!(gate.ncols(), 2);

    let a0 = state[i];
    let a1 = state[j];

    state[i] = gate[[0, 0]] * a0 + gate[[0, 1]] * a1;
    state[j] = gate[[1, 0]] * a0 + gate[[1, 1]] * a1;
}

/// Apply a `d x d` gate to the `d` amplitudes at the given indices.
///
/// The amplitudes transform as `new = gate * old`: the old values are
/// gathered first, then each slot receives its row of the matrix-vector
/// product. Indices must be distinct; this is the caller's contract.
///
/// # Example
/// ```
/// use ndarray::Array2;
/// use num_complex::Complex64;
/// use statevec::instruct::transform_group;
///
/// // A 4x4 permutation sending |00⟩ to |11⟩
/// let zero = Complex64::new(0.0, 0.0);
/// let one = Complex64::new(1.0, 0.0);
/// let perm = Array2::from_shape_vec((4, 4), vec![
///     zero, zero, zero, one,
///     zero, zero, one, zero,
///     zero, one, zero, zero,
///     one, zero, zero, zero,
/// ]).unwrap();
/// let mut state = vec![one, zero, zero, zero];
/// transform_group(&mut state, &[0, 1, 2, 3], &perm);
/// assert!((state[3].norm() - 1.0).abs() < 1e-10);
/// ```
pub fn transform_group<T: Float>(
    state: &mut [Complex<T>],
    indices: &[usize],
    gate: &Array2<Complex<T>>,
) {
    let d = indices.len();
    debug_assert_eq!(gate.nrows(), d);
    debug_assert_eq!(gate.ncols(), d);

    let old: Vec<Complex<T>> = indices.iter().map(|&idx| state[idx]).collect();

    for (row, &out_idx) in indices.iter().enumerate() {
        let mut acc = Complex::new(T::zero(), T::zero());
        for (col, &amp) in old.iter().enumerate() {
            acc = acc + gate[[row, col]] * amp;
        }
        state[out_idx] = acc;
    }
}

/// Multiply the amplitude at index `i` by a scalar factor.
///
/// The primitive behind diagonal gates (Z, S, T, phase shifts), where only
/// per-amplitude phases matter and no gather is needed.
#[inline]
pub fn scale_row<T: Float>(state: &mut [Complex<T>], i: usize, factor: Complex<T>) {
    state[i] = state[i] * factor;
}
