use gf2::{BitMatrix, MatrixError};
use num_bigint::BigUint;
use quickcheck::{quickcheck, TestResult};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn big(x: u64) -> BigUint {
    BigUint::from(x)
}

fn rows_of(m: &BitMatrix) -> Vec<u64> {
    m.rows().iter().map(|r| r.iter_u64_digits().next().unwrap_or(0)).collect()
}

#[test]
fn test_new_is_zero() {
    let m = BitMatrix::new(3, 5);
    assert_eq!(m.nrows(), 3);
    assert_eq!(m.ncols(), 5);
    assert_eq!(rows_of(&m), vec![0, 0, 0]);
    assert_eq!(m.rank(), 0);
}

#[test]
fn test_from_rows_pads_missing_rows() {
    let m = BitMatrix::from_rows(4, 4, [0xAu8, 0x3]).unwrap();
    assert_eq!(rows_of(&m), vec![0xA, 0x3, 0, 0]);
}

#[test]
fn test_from_rows_rejects_too_many_rows() {
    let err = BitMatrix::from_rows(1, 4, [0x1u8, 0x2]).unwrap_err();
    assert!(matches!(err, MatrixError::Dimension(_)));
}

#[test]
fn test_from_rows_rejects_wide_row() {
    let err = BitMatrix::from_rows(2, 4, [0x10u8]).unwrap_err();
    assert!(matches!(err, MatrixError::Dimension(_)));
}

#[test]
fn test_identity_square() {
    let mut m = BitMatrix::new(3, 3);
    m.set_identity(false).unwrap();
    assert_eq!(rows_of(&m), vec![0b100, 0b010, 0b001]);
    assert_eq!(m, BitMatrix::identity(3));
}

#[test]
fn test_identity_non_square_requires_relaxed() {
    let mut m = BitMatrix::new(2, 3);
    assert!(matches!(m.set_identity(false), Err(MatrixError::Dimension(_))));

    m.set_identity(true).unwrap();
    assert_eq!(rows_of(&m), vec![0b100, 0b010]);

    let mut tall = BitMatrix::from_rows(3, 2, [0b11u8, 0b11, 0b11]).unwrap();
    tall.set_identity(true).unwrap();
    assert_eq!(rows_of(&tall), vec![0b10, 0b01, 0]);
}

#[test]
fn test_get_column() {
    let m = BitMatrix::from_rows(3, 4, [0xBu8, 0xC, 0xF]).unwrap();
    assert_eq!(m.get_column(0).unwrap(), big(0b111));
    assert_eq!(m.get_column(1).unwrap(), big(0b011));
    assert_eq!(m.get_column(3).unwrap(), big(0b101));
}

#[test]
fn test_set_column() {
    let mut m = BitMatrix::from_rows(3, 4, [0xBu8, 0xC, 0xF]).unwrap();
    m.set_column(1, &big(0b100)).unwrap();
    assert_eq!(rows_of(&m), vec![0xF, 0x8, 0xB]);
}

#[test]
fn test_column_out_of_range() {
    let mut m = BitMatrix::new(2, 4);
    assert!(matches!(m.get_column(4), Err(MatrixError::Range { index: 4, limit: 4, .. })));
    assert!(matches!(m.set_column(7, &big(1)), Err(MatrixError::Range { .. })));
}

#[test]
fn test_set_column_rejects_wide_value() {
    let mut m = BitMatrix::new(2, 4);
    assert!(matches!(m.set_column(0, &big(0b111)), Err(MatrixError::Dimension(_))));
}

#[test]
fn test_get_and_set_cells() {
    let mut m = BitMatrix::new(2, 3);
    m.set(0, 0, true).unwrap();
    m.set(1, 2, true).unwrap();
    assert!(m.get(0, 0).unwrap());
    assert!(!m.get(0, 2).unwrap());
    assert_eq!(rows_of(&m), vec![0b100, 0b001]);

    m.set(0, 0, false).unwrap();
    assert_eq!(rows_of(&m), vec![0, 0b001]);

    assert!(matches!(m.get(2, 0), Err(MatrixError::Range { what: "row", .. })));
    assert!(matches!(m.set(0, 3, true), Err(MatrixError::Range { what: "column", .. })));
}

#[test]
fn test_row_append_and_pop() {
    let mut m = BitMatrix::new(0, 4);
    m.row_append(0xAu8).unwrap();
    m.row_append(0x5u8).unwrap();
    assert_eq!(m.nrows(), 2);
    assert_eq!(m.row(1), Some(&big(0x5)));

    assert!(matches!(m.row_append(0x1Fu8), Err(MatrixError::Dimension(_))));
    assert_eq!(m.nrows(), 2);

    assert_eq!(m.row_pop().unwrap(), big(0x5));
    assert_eq!(m.row_pop().unwrap(), big(0xA));
    assert_eq!(m.nrows(), 0);
    assert!(m.row_pop().is_err());
}

#[test]
fn test_transpose() {
    let m = BitMatrix::from_rows(2, 3, [0b101u8, 0b011]).unwrap();
    let t = m.transpose();
    assert_eq!((t.nrows(), t.ncols()), (3, 2));
    assert_eq!(rows_of(&t), vec![0b10, 0b01, 0b11]);
    assert_eq!(t.transpose(), m);
}

#[test]
fn test_multiply() {
    let a = BitMatrix::from_rows(2, 3, [0b101u8, 0b011]).unwrap();
    let b = a.transpose();
    let product = a.multiply(&b).unwrap();
    assert_eq!((product.nrows(), product.ncols()), (2, 2));
    assert_eq!(rows_of(&product), vec![0b01, 0b10]);
}

#[test]
fn test_multiply_dimension_mismatch() {
    let a = BitMatrix::new(2, 3);
    let b = BitMatrix::new(2, 3);
    assert!(matches!(a.multiply(&b), Err(MatrixError::Dimension(_))));
}

#[test]
fn test_multiply_by_identity() {
    let a = BitMatrix::from_rows(3, 3, [0b110u8, 0b011, 0b111]).unwrap();
    let id = BitMatrix::identity(3);
    assert_eq!(a.multiply(&id).unwrap(), a);
    assert_eq!(id.multiply(&a).unwrap(), a);
}

#[test]
fn test_display() {
    let m = BitMatrix::from_rows(2, 4, [0b0011u8, 0b1000]).unwrap();
    assert_eq!(m.to_string(), "0011\n1000");
}

#[test]
fn test_equality_is_structural() {
    let a = BitMatrix::from_rows(2, 4, [0x1u8]).unwrap();
    let b = BitMatrix::from_rows(2, 4, [0x1u8, 0x0]).unwrap();
    let c = BitMatrix::from_rows(2, 5, [0x1u8]).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_clone_is_independent() {
    let a = BitMatrix::from_rows(2, 4, [0x1u8, 0x2]).unwrap();
    let mut b = a.clone();
    b.set(0, 0, true).unwrap();
    assert_ne!(a, b);
    assert_eq!(a.row(0), Some(&big(0x1)));
}

#[test]
fn test_random_basis_rejects_tall_matrix() {
    let mut m = BitMatrix::new(5, 4);
    assert!(matches!(m.set_random_basis(), Err(MatrixError::Dimension(_))));
}

#[test]
fn test_random_rows_fit_width() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut m = BitMatrix::new(16, 9);
    m.randomize_with(&mut rng);
    assert!(m.rows().iter().all(|r| r.bits() <= 9));
}

quickcheck! {
    fn prop_identity_rows(n: u8) -> bool {
        let n = (n % 80) as usize;
        let m = BitMatrix::identity(n);
        m.rows()
            .iter()
            .enumerate()
            .all(|(i, row)| *row == BigUint::from(1u8) << (n - 1 - i))
    }

    fn prop_random_basis_has_full_rank(seed: u64, nrows: u8, extra: u8) -> TestResult {
        let nrows = (nrows % 48) as usize;
        let ncols = nrows + (extra % 16) as usize;
        let mut rng = StdRng::seed_from_u64(seed);
        let mut m = BitMatrix::new(nrows, ncols);
        m.set_random_basis_with(&mut rng).unwrap();
        let echelon = m.row_echelon(None).unwrap();
        TestResult::from_bool(echelon.rank() == nrows)
    }

    fn prop_column_roundtrip(seed: u64, nrows: u8, ncols: u8) -> TestResult {
        let (nrows, ncols) = ((nrows % 20) as usize + 1, (ncols % 20) as usize + 1);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut m = BitMatrix::new(nrows, ncols);
        m.randomize_with(&mut rng);

        let mut rebuilt = BitMatrix::new(nrows, ncols);
        for col in 0..ncols {
            let column = m.get_column(col).unwrap();
            rebuilt.set_column(col, &column).unwrap();
        }
        TestResult::from_bool(rebuilt == m)
    }
}
