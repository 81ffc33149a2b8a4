use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// Shapes do not fit the requested operation.
    #[error("dimension mismatch: {0}")]
    Dimension(String),

    /// A row or column index lies outside the matrix.
    #[error("{what} {index} is out of range (limit {limit})")]
    Range {
        what: &'static str,
        index: usize,
        limit: usize,
    },

    #[error("matrix is not invertible: rank {rank} != nrows {nrows}")]
    NotInvertible { rank: usize, nrows: usize },
}

impl MatrixError {
    pub(crate) fn column(index: usize, limit: usize) -> Self {
        MatrixError::Range { what: "column", index, limit }
    }

    pub(crate) fn row(index: usize, limit: usize) -> Self {
        MatrixError::Range { what: "row", index, limit }
    }
}
