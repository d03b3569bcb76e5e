//! Heap-backed square bit matrix used as adjacency storage.

use bitvec::prelude::*;

/// An `N×N` boolean matrix stored as a single contiguous bit vector.
///
/// The storage lives on the heap: an adjacency relation over `N` vertices
/// costs `N²` bits, which for large `N` must not be placed on the call
/// stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BitMatrix<const N: usize> {
    bits: BitVec,
}

impl<const N: usize> BitMatrix<N> {
    pub fn new() -> Self {
        Self {
            bits: bitvec![0; N * N],
        }
    }

    /// Reads the bit at `(row, column)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `column` is not below `N`.
    #[inline]
    pub fn get(&self, row: usize, column: usize) -> bool {
        assert!(column < N, "column {column} out of bounds for size {N}");
        self.bits[row * N + column]
    }

    /// Writes the bit at `(row, column)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `column` is not below `N`.
    #[inline]
    pub fn set(&mut self, row: usize, column: usize, value: bool) {
        assert!(column < N, "column {column} out of bounds for size {N}");
        self.bits.set(row * N + column, value);
    }

    /// Borrows a whole row as a bit slice.
    ///
    /// # Panics
    ///
    /// Panics if `row` is not below `N`.
    #[inline]
    pub fn row(&self, row: usize) -> &BitSlice {
        &self.bits[row * N..(row + 1) * N]
    }

    /// The number of set bits in the whole matrix.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones()
    }
}

impl<const N: usize> Default for BitMatrix<N> {
    fn default() -> Self {
        Self::new()
    }
}
