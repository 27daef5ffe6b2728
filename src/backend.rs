//! Execution backends for the gate dispatchers.
//!
//! A gate application decomposes the state buffer into aligned chunks of
//! `2^(target+1)` amplitudes; every amplitude group falls entirely inside
//! one chunk, so chunks are independent units of work. The [`Backend`]
//! trait abstracts "run a closure once per chunk" and is the only thing a
//! backend specializes: indexing and arithmetic live in [`crate::index`]
//! and [`crate::instruct`] and are shared by all implementations.
//!
//! Chunks are handed out as disjoint mutable sub-slices, so the parallel
//! backend needs no locking and the borrow checker rules out data races.
//! Which backend a given buffer should run on is the caller's decision;
//! this crate only publishes the seam.

use num_complex::Complex;
use rayon::prelude::*;

/// An execution strategy for independent chunks of the state buffer.
///
/// Implementations must invoke `work` exactly once per aligned chunk of
/// `chunk_len` amplitudes (with the chunk's position as first argument)
/// and return only after every invocation has completed, so the caller
/// observes a fully updated buffer.
pub trait Backend {
    fn run_chunks<T, F>(&self, state: &mut [Complex<T>], chunk_len: usize, work: F)
    where
        T: Send + Sync,
        F: Fn(usize, &mut [Complex<T>]) + Send + Sync;
}

/// Sequential backend: one chunk at a time, in index order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Serial;

impl Backend for Serial {
    fn run_chunks<T, F>(&self, state: &mut [Complex<T>], chunk_len: usize, work: F)
    where
        T: Send + Sync,
        F: Fn(usize, &mut [Complex<T>]) + Send + Sync,
    {
        for (c, chunk) in state.chunks_exact_mut(chunk_len).enumerate() {
            work(c, chunk);
        }
    }
}

/// Parallel backend: chunks are distributed over the rayon thread pool.
///
/// Chunk contents are processed exactly as in [`Serial`], so results are
/// bit-identical; only the order in which chunks run differs. `run_chunks`
/// does not return until the pool has finished every chunk. Note that the
/// parallel grain is the chunk: a gate on the highest qubit produces a
/// single chunk and therefore runs on one worker.
#[derive(Debug, Clone, Copy, Default)]
pub struct Parallel;

impl Backend for Parallel {
    fn run_chunks<T, F>(&self, state: &mut [Complex<T>], chunk_len: usize, work: F)
    where
        T: Send + Sync,
        F: Fn(usize, &mut [Complex<T>]) + Send + Sync,
    {
        state
            .par_chunks_exact_mut(chunk_len)
            .enumerate()
            .for_each(|(c, chunk)| work(c, chunk));
    }
}
