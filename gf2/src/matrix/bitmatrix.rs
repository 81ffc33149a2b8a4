use std::fmt;

use num_bigint::{BigUint, RandBigInt};
use num_traits::{One, Zero};
use rand::Rng;

use crate::error::MatrixError;

/// Matrix over GF(2) with one [`BigUint`] per row.
///
/// Column 0 is the most significant bit of a row, column `ncols - 1` the
/// least significant. Row order matters: it decides pivot tie-breaks during
/// reduction and which vectors are kept by the independent-subset search.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BitMatrix {
    pub(crate) nrows: usize,
    pub(crate) ncols: usize,
    pub(crate) rows: Vec<BigUint>,
}

impl BitMatrix {
    /// Zero matrix of the given shape.
    pub fn new(nrows: usize, ncols: usize) -> Self {
        Self {
            nrows,
            ncols,
            rows: vec![BigUint::zero(); nrows],
        }
    }

    /// Builds a matrix from leading rows; missing rows are zero.
    pub fn from_rows<I, T>(nrows: usize, ncols: usize, rows: I) -> Result<Self, MatrixError>
    where
        I: IntoIterator<Item = T>,
        T: Into<BigUint>,
    {
        let mut given: Vec<BigUint> = rows.into_iter().map(Into::into).collect();
        if given.len() > nrows {
            return Err(MatrixError::Dimension(format!(
                "{} rows specified, but {} rows found",
                nrows,
                given.len()
            )));
        }
        for row in &given {
            check_width(row, ncols)?;
        }
        given.resize(nrows, BigUint::zero());
        Ok(Self { nrows, ncols, rows: given })
    }

    /// Caller guarantees every row fits in `ncols` bits.
    pub(crate) fn from_rows_unchecked(ncols: usize, rows: Vec<BigUint>) -> Self {
        Self {
            nrows: rows.len(),
            ncols,
            rows,
        }
    }

    /// Square identity of dimension `n`.
    pub fn identity(n: usize) -> Self {
        let mut matrix = Self::new(n, n);
        matrix.fill_identity();
        matrix
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    pub fn rows(&self) -> &[BigUint] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&BigUint> {
        self.rows.get(index)
    }

    /// Sets row `i` to the vector with only column `i` set.
    ///
    /// A non-square matrix is rejected unless `relaxed`, in which case the
    /// leading `min(nrows, ncols)` rows form a partial identity and the rest
    /// are cleared.
    pub fn set_identity(&mut self, relaxed: bool) -> Result<(), MatrixError> {
        if !relaxed && self.nrows != self.ncols {
            return Err(MatrixError::Dimension(format!(
                "cannot compute identity of non-square {}x{} matrix",
                self.nrows, self.ncols
            )));
        }
        self.fill_identity();
        Ok(())
    }

    fn fill_identity(&mut self) {
        let ncols = self.ncols;
        for (i, row) in self.rows.iter_mut().enumerate() {
            *row = if i < ncols {
                BigUint::one() << (ncols - 1 - i)
            } else {
                BigUint::zero()
            };
        }
    }

    /// Fills every row with `ncols` uniformly random bits.
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let bits = self.ncols as u64;
        for row in self.rows.iter_mut() {
            *row = rng.gen_biguint(bits);
        }
    }

    pub fn randomize(&mut self) {
        self.randomize_with(&mut rand::thread_rng());
    }

    /// Random linearly independent rows: a relaxed identity scrambled by
    /// `4 * nrows` row additions, none of which can lower the rank.
    pub fn set_random_basis_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), MatrixError> {
        if self.nrows > self.ncols {
            return Err(MatrixError::Dimension(format!(
                "{} {}-bit rows cannot all be independent",
                self.nrows, self.ncols
            )));
        }
        self.fill_identity();
        if self.nrows < 2 {
            return Ok(());
        }
        for _ in 0..4 * self.nrows {
            let a = rng.gen_range(0..self.nrows);
            let b = rng.gen_range(0..self.nrows);
            if a != b {
                xor_rows(&mut self.rows, a, b);
            }
        }
        Ok(())
    }

    pub fn set_random_basis(&mut self) -> Result<(), MatrixError> {
        self.set_random_basis_with(&mut rand::thread_rng())
    }

    pub(crate) fn column_bit(&self, col: usize) -> u64 {
        (self.ncols - 1 - col) as u64
    }

    /// Column `col` read top to bottom: row 0 lands in the most significant
    /// bit of an `nrows`-bit value.
    pub fn get_column(&self, col: usize) -> Result<BigUint, MatrixError> {
        if col >= self.ncols {
            return Err(MatrixError::column(col, self.ncols));
        }
        let bit = self.column_bit(col);
        let mut value = BigUint::zero();
        for (i, row) in self.rows.iter().enumerate() {
            if row.bit(bit) {
                value.set_bit((self.nrows - 1 - i) as u64, true);
            }
        }
        Ok(value)
    }

    /// Inverse of [`get_column`](Self::get_column).
    pub fn set_column(&mut self, col: usize, value: &BigUint) -> Result<(), MatrixError> {
        if col >= self.ncols {
            return Err(MatrixError::column(col, self.ncols));
        }
        if value.bits() > self.nrows as u64 {
            return Err(MatrixError::Dimension(format!(
                "column value 0x{:X} is wider than {} rows",
                value, self.nrows
            )));
        }
        self.write_column(col, value);
        Ok(())
    }

    pub(crate) fn write_column(&mut self, col: usize, value: &BigUint) {
        let bit = self.column_bit(col);
        let nrows = self.nrows;
        for (i, row) in self.rows.iter_mut().enumerate() {
            row.set_bit(bit, value.bit((nrows - 1 - i) as u64));
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Result<bool, MatrixError> {
        self.check_cell(row, col)?;
        Ok(self.rows[row].bit(self.column_bit(col)))
    }

    pub fn set(&mut self, row: usize, col: usize, value: bool) -> Result<(), MatrixError> {
        self.check_cell(row, col)?;
        let bit = self.column_bit(col);
        self.rows[row].set_bit(bit, value);
        Ok(())
    }

    fn check_cell(&self, row: usize, col: usize) -> Result<(), MatrixError> {
        if row >= self.nrows {
            return Err(MatrixError::row(row, self.nrows));
        }
        if col >= self.ncols {
            return Err(MatrixError::column(col, self.ncols));
        }
        Ok(())
    }

    pub fn row_append<T: Into<BigUint>>(&mut self, row: T) -> Result<(), MatrixError> {
        let row = row.into();
        check_width(&row, self.ncols)?;
        self.push_row(row);
        Ok(())
    }

    pub fn row_pop(&mut self) -> Result<BigUint, MatrixError> {
        let row = self.rows.pop().ok_or_else(|| {
            MatrixError::Dimension("attempting to pop a row from an empty matrix".to_string())
        })?;
        self.nrows -= 1;
        Ok(row)
    }

    pub(crate) fn push_row(&mut self, row: BigUint) {
        self.rows.push(row);
        self.nrows += 1;
    }

    /// Drops the last row, if any.
    pub(crate) fn truncate_last(&mut self) {
        if self.rows.pop().is_some() {
            self.nrows -= 1;
        }
    }

    /// Number of nonzero rows. Equals the rank once the matrix is in
    /// echelon form.
    pub fn rank(&self) -> usize {
        self.rows.iter().filter(|row| !row.is_zero()).count()
    }
}

impl fmt::Display for BitMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{:0width$b}", row, width = self.ncols)?;
        }
        Ok(())
    }
}

fn check_width(row: &BigUint, ncols: usize) -> Result<(), MatrixError> {
    if row.bits() > ncols as u64 {
        return Err(MatrixError::Dimension(format!(
            "{} columns specified, but 0x{:X} is wider",
            ncols, row
        )));
    }
    Ok(())
}

/// `rows[dst] ^= rows[src]`, with `dst != src`.
pub(crate) fn xor_rows(rows: &mut [BigUint], dst: usize, src: usize) {
    debug_assert_ne!(dst, src);
    if dst < src {
        let (low, high) = rows.split_at_mut(src);
        low[dst] ^= &high[0];
    } else {
        let (low, high) = rows.split_at_mut(dst);
        high[0] ^= &low[src];
    }
}
