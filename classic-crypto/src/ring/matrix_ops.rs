use crate::errors::ClassicCryptoError;
use crate::ring::{Matrix, Ring, Vector};

/// Column width of `matrix`, checking that every row agrees.
fn width(matrix: &Matrix) -> Result<usize, ClassicCryptoError> {
    let cols = matrix.first().map_or(0, Vec::len);
    match matrix.iter().position(|row| row.len() != cols) {
        Some(i) => Err(ClassicCryptoError::DimensionMismatch(format!(
            "ragged matrix: row {} has {} entries, row 0 has {}",
            i,
            matrix[i].len(),
            cols
        ))),
        None => Ok(cols),
    }
}

fn dot(row: &[i64], column: impl Iterator<Item = i64>, ring: &Ring) -> i64 {
    row.iter()
        .zip(column)
        .fold(0, |acc, (&lhs, rhs)| ring.add(acc, ring.mul(lhs, rhs)))
}

/// `M · v` over the ring. This is how the Hill cipher maps one block.
///
/// # Errors
///
/// Returns `ClassicCryptoError::DimensionMismatch` for a ragged matrix or a
/// vector whose length differs from the matrix width.
pub fn matrix_vector_mul(
    matrix: &Matrix,
    vector: &Vector,
    ring: &Ring,
) -> Result<Vector, ClassicCryptoError> {
    if matrix.is_empty() {
        return Ok(Vector::new());
    }
    let cols = width(matrix)?;
    if vector.len() != cols {
        return Err(ClassicCryptoError::DimensionMismatch(format!(
            "cannot multiply a {}-column matrix by a vector of length {}",
            cols,
            vector.len()
        )));
    }

    Ok(matrix
        .iter()
        .map(|row| dot(row, vector.iter().copied(), ring))
        .collect())
}

/// `A · B` over the ring.
///
/// # Errors
///
/// Returns `ClassicCryptoError::DimensionMismatch` for ragged operands or when
/// the width of `a` differs from the height of `b`.
pub fn matrix_mul(a: &Matrix, b: &Matrix, ring: &Ring) -> Result<Matrix, ClassicCryptoError> {
    if a.is_empty() {
        return Ok(Matrix::new());
    }
    let inner = width(a)?;
    if b.len() != inner {
        return Err(ClassicCryptoError::DimensionMismatch(format!(
            "cannot multiply a {}-column matrix by a {}-row matrix",
            inner,
            b.len()
        )));
    }
    let b_cols = width(b)?;

    Ok(a.iter()
        .map(|row| {
            (0..b_cols)
                .map(|j| dot(row, b.iter().map(|b_row| b_row[j]), ring))
                .collect()
        })
        .collect())
}

/// The `n × n` identity.
pub fn identity_matrix(n: usize) -> Matrix {
    (0..n)
        .map(|i| (0..n).map(|j| i64::from(i == j)).collect())
        .collect()
}

/// Rejects anything that is not a rectangular 2×2 matrix.
pub fn ensure_2x2(matrix: &Matrix) -> Result<(), ClassicCryptoError> {
    let rows = matrix.len();
    let cols = matrix.first().map_or(0, Vec::len);
    if rows != 2 || matrix.iter().any(|row| row.len() != 2) {
        return Err(ClassicCryptoError::UnsupportedMatrixSize { rows, cols });
    }
    Ok(())
}

/// `m00·m11 − m01·m10` normalized into `[0, modulus)`.
pub fn determinant_2x2(matrix: &Matrix, ring: &Ring) -> Result<i64, ClassicCryptoError> {
    ensure_2x2(matrix)?;
    let main = ring.mul(matrix[0][0], matrix[1][1]);
    let anti = ring.mul(matrix[0][1], matrix[1][0]);
    Ok(ring.sub(main, anti))
}

/// Inverts a 2×2 matrix over the ring with the adjugate formula.
///
/// `A^-1 = det^-1 · [[d, -b], [-c, a]]` for `A = [[a, b], [c, d]]`, every
/// entry reduced into `[0, modulus)`. Over `Ring::latin()` this is the Hill
/// cipher's decryption key.
///
/// # Errors
///
/// Returns `ClassicCryptoError::UnsupportedMatrixSize` for anything but 2×2.
/// Returns `ClassicCryptoError::MatrixNotInvertible` if the determinant is not a unit.
pub fn invert_2x2(matrix: &Matrix, ring: &Ring) -> Result<Matrix, ClassicCryptoError> {
    let det = determinant_2x2(matrix, ring)?;
    let det_inv = ring
        .inv(det)
        .map_err(|_| ClassicCryptoError::MatrixNotInvertible {
            determinant: det,
            modulus: ring.modulus(),
        })?;

    Ok(vec![
        vec![
            ring.mul(matrix[1][1], det_inv),
            ring.mul(ring.neg(matrix[0][1]), det_inv),
        ],
        vec![
            ring.mul(ring.neg(matrix[1][0]), det_inv),
            ring.mul(matrix[0][0], det_inv),
        ],
    ])
}
