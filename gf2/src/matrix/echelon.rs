use crate::error::MatrixError;

use super::bitmatrix::{xor_rows, BitMatrix};

impl BitMatrix {
    /// Reduced row-echelon form of `self`, leaving `self` untouched.
    ///
    /// Every row swap and row addition is replayed on `record`, which must
    /// have the same number of rows. Starting from the identity, `record`
    /// ends as the product of the elementary operations, i.e. the inverse
    /// when `self` is square and of full rank.
    pub fn row_echelon(&self, record: Option<&mut BitMatrix>) -> Result<BitMatrix, MatrixError> {
        let mut echelon = self.clone();
        echelon.reduce(record)?;
        Ok(echelon)
    }

    /// In-place form of [`row_echelon`](Self::row_echelon). Returns the
    /// number of pivot rows.
    pub fn reduce(&mut self, record: Option<&mut BitMatrix>) -> Result<usize, MatrixError> {
        if let Some(rec) = record.as_deref() {
            if rec.nrows != self.nrows {
                return Err(MatrixError::Dimension(format!(
                    "record matrix has {} rows, mismatch our {} rows",
                    rec.nrows, self.nrows
                )));
            }
        }
        Ok(self.eliminate(record))
    }

    /// Gauss-Jordan elimination, most significant column first. Pivot rows
    /// end up in the leading positions in the order their columns were
    /// found; all other rows become zero.
    pub(crate) fn eliminate(&mut self, mut record: Option<&mut BitMatrix>) -> usize {
        let nrows = self.nrows;
        let mut pos = 0;

        for col in 0..self.ncols {
            if pos >= nrows {
                break;
            }
            let bit = self.column_bit(col);
            let Some(found) = (pos..nrows).find(|&i| self.rows[i].bit(bit)) else {
                continue;
            };

            if found != pos {
                self.rows.swap(found, pos);
                if let Some(rec) = record.as_deref_mut() {
                    rec.rows.swap(found, pos);
                }
            }

            for i in 0..nrows {
                if i != pos && self.rows[i].bit(bit) {
                    xor_rows(&mut self.rows, i, pos);
                    if let Some(rec) = record.as_deref_mut() {
                        xor_rows(&mut rec.rows, i, pos);
                    }
                }
            }

            pos += 1;
        }

        pos
    }

    pub fn inverse(&self) -> Result<BitMatrix, MatrixError> {
        if self.nrows != self.ncols {
            return Err(MatrixError::Dimension(format!(
                "inversion impossible since rows != columns, {} != {}",
                self.nrows, self.ncols
            )));
        }

        let mut record = BitMatrix::identity(self.nrows);
        let echelon = self.row_echelon(Some(&mut record))?;
        let rank = echelon.rank();
        if rank != self.nrows {
            return Err(MatrixError::NotInvertible {
                rank,
                nrows: self.nrows,
            });
        }

        Ok(record)
    }
}
