use crate::error::MatrixError;

use super::bitmatrix::BitMatrix;

impl BitMatrix {
    pub fn transpose(&self) -> BitMatrix {
        let mut transposed = BitMatrix::new(self.ncols, self.nrows);
        for (i, row) in self.rows.iter().enumerate() {
            transposed.write_column(i, row);
        }
        transposed
    }

    /// GF(2) product `self * rhs`: entry `[y][x]` is the parity of
    /// `self.row[y] & rhs.column[x]`.
    pub fn multiply(&self, rhs: &BitMatrix) -> Result<BitMatrix, MatrixError> {
        if self.ncols != rhs.nrows {
            return Err(MatrixError::Dimension(format!(
                "cannot multiply {}x{} by {}x{}",
                self.nrows, self.ncols, rhs.nrows, rhs.ncols
            )));
        }

        // Rows of the transpose line up bit-for-bit with rows of `self`.
        let columns = rhs.transpose().rows;
        let mut product = BitMatrix::new(self.nrows, rhs.ncols);
        for (y, row) in self.rows.iter().enumerate() {
            for (x, column) in columns.iter().enumerate() {
                if (row & column).count_ones() % 2 == 1 {
                    product.rows[y].set_bit((rhs.ncols - 1 - x) as u64, true);
                }
            }
        }

        Ok(product)
    }
}
