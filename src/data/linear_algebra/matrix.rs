//! # Triangular matrix
//!
//! A square matrix storing only its upper-triangular part: row `i` is a `BoundedVector` holding
//! columns `i..n`, addressed in matrix coordinates through the row's start index. The matrix is
//! composed of row vectors rather than derived from one, such that each row carries its own
//! window invariant and a below-diagonal access fails the row's own range check. Nothing is
//! mirrored or zero-filled below the diagonal.
use std::fmt;
use std::fmt::Display;
use std::ops::{Add, Index, IndexMut, Sub};

use itertools::Itertools;
use num_traits::Zero;

use crate::data::linear_algebra::MAX_MATRIX_SIZE;
use crate::data::linear_algebra::error::Error;
use crate::data::linear_algebra::vector::BoundedVector;

/// Uses a `Vec` of `BoundedVector` rows as underlying data structure. Dimension is fixed at
/// creation.
///
/// Row `i` has size `n - i` and start index `i`, so element `(i, j)` is stored exactly when
/// `j >= i`. Rows are exclusively owned; cloning the matrix deep-copies every row.
#[derive(Debug, Eq, PartialEq)]
pub struct TriangularMatrix<T> {
    rows: Vec<BoundedVector<T>>,
}

impl<T: Zero + Clone> TriangularMatrix<T> {
    /// Create a zero-initialized square matrix of the given dimension.
    ///
    /// # Arguments
    ///
    /// * `size`: Matrix dimension, at least `1` and at most `MAX_MATRIX_SIZE`.
    ///
    /// # Return value
    ///
    /// A matrix with `size` default-initialized rows of shrinking size, or an
    /// `Error::InvalidSize` when the dimension is outside the allowed range.
    pub fn new(size: usize) -> Result<Self, Error> {
        if size == 0 || size > MAX_MATRIX_SIZE {
            return Err(Error::InvalidSize { size, maximum: MAX_MATRIX_SIZE });
        }

        // Row windows always fit: size - i <= MAX_MATRIX_SIZE <= MAX_VECTOR_SIZE.
        let rows = (0..size)
            .map(|i| BoundedVector::with_start_index(size - i, i))
            .collect::<Result<_, _>>()?;

        Ok(Self { rows, })
    }
}

impl<T> TriangularMatrix<T> {
    /// The dimension of this matrix.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Rows are addressed like a zero-based vector of size `n`.
    fn check_row(&self, row: usize) -> Result<(), Error> {
        if row < self.rows.len() {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange { index: row, start_index: 0, size: self.rows.len(), })
        }
    }

    /// Retrieve row `row` of this matrix.
    ///
    /// The row's own window determines which columns can be accessed through it: exactly
    /// `row..n`.
    pub fn row(&self, row: usize) -> Result<&BoundedVector<T>, Error> {
        self.check_row(row)?;

        Ok(&self.rows[row])
    }

    /// Retrieve row `row` of this matrix for in-place mutation.
    pub fn row_mut(&mut self, row: usize) -> Result<&mut BoundedVector<T>, Error> {
        self.check_row(row)?;

        Ok(&mut self.rows[row])
    }

    /// Retrieve the value at coordinate (`row`, `column`).
    ///
    /// # Errors
    ///
    /// `Error::IndexOutOfRange` when the row does not exist or the column lies outside the row's
    /// window, which includes every below-diagonal coordinate.
    pub fn get(&self, row: usize, column: usize) -> Result<&T, Error> {
        self.row(row)?.get(column)
    }

    /// Retrieve the value at coordinate (`row`, `column`) for in-place mutation.
    pub fn get_mut(&mut self, row: usize, column: usize) -> Result<&mut T, Error> {
        self.row_mut(row)?.get_mut(column)
    }

    /// Set the value at coordinate (`row`, `column`).
    pub fn set(&mut self, row: usize, column: usize, value: T) -> Result<(), Error> {
        self.row_mut(row)?.set(column, value)
    }

    /// Binary arithmetic requires operands of equal dimension; assignment does not.
    fn check_equal_size(&self, other: &Self) -> Result<(), Error> {
        if self.size() == other.size() {
            Ok(())
        } else {
            Err(Error::SizeMismatch { left: self.size(), right: other.size(), })
        }
    }

    /// Add another matrix of the same dimension, row-wise elementwise.
    ///
    /// Corresponding rows always have equal size and start index by construction, so the
    /// per-row addition cannot fail once the dimensions match.
    ///
    /// # Errors
    ///
    /// `Error::SizeMismatch` when the operands' dimensions differ.
    pub fn try_add(&self, other: &Self) -> Result<Self, Error>
    where
        for<'r> &'r T: Add<&'r T, Output = T>,
    {
        self.check_equal_size(other)?;

        let rows = self.rows.iter()
            .zip_eq(&other.rows)
            .map(|(row, rhs)| row.try_add(rhs))
            .collect::<Result<_, _>>()?;

        Ok(Self { rows, })
    }

    /// Subtract another matrix of the same dimension, row-wise elementwise.
    ///
    /// # Errors
    ///
    /// `Error::SizeMismatch` when the operands' dimensions differ.
    pub fn try_sub(&self, other: &Self) -> Result<Self, Error>
    where
        for<'r> &'r T: Sub<&'r T, Output = T>,
    {
        self.check_equal_size(other)?;

        let rows = self.rows.iter()
            .zip_eq(&other.rows)
            .map(|(row, rhs)| row.try_sub(rhs))
            .collect::<Result<_, _>>()?;

        Ok(Self { rows, })
    }
}

impl<T: Clone> Clone for TriangularMatrix<T> {
    fn clone(&self) -> Self {
        Self { rows: self.rows.clone(), }
    }

    /// Assignment: reshape this matrix to the source's dimension and row shapes and deep-copy
    /// every row. Never fails on a size difference.
    fn clone_from(&mut self, source: &Self) {
        self.rows.clone_from(&source.rows);
    }
}

impl<T> Index<usize> for TriangularMatrix<T> {
    type Output = BoundedVector<T>;

    /// Row sugar over [`TriangularMatrix::row`]; panics with the typed error's message when the
    /// row does not exist. `m[i][j]` composes with the row's own index sugar.
    fn index(&self, row: usize) -> &Self::Output {
        match self.row(row) {
            Ok(row) => row,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<T> IndexMut<usize> for TriangularMatrix<T> {
    fn index_mut(&mut self, row: usize) -> &mut Self::Output {
        match self.row_mut(row) {
            Ok(row) => row,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<T: Display> Display for TriangularMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{}", row.iter_values().format(" "))?;
        }
        writeln!(f)
    }
}
