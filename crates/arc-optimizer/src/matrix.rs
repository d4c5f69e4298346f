//! Dense row-major matrix and Gaussian elimination.
//!
//! The systems solved here are tiny (n = face count, usually ≤ 10), so a
//! flat `Vec<f64>` with explicit dimensions is all the machinery needed.

/// Pivot magnitudes below this are replaced rather than divided by.
///
/// A face no sample ever unlocks produces an all-zero column and with it
/// a near-zero pivot; substituting the floor keeps elimination defined
/// and yields a near-zero value for the unconstrained face instead of an
/// error. The solver must return *some* value for every face.
pub const MIN_PIVOT: f64 = 1e-10;

/// A dense row-major matrix of `f64`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Create a zero-filled matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Read the entry at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    /// Write the entry at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.cols + col] = value;
    }

    /// Swap two rows in place.
    fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for col in 0..self.cols {
            self.data.swap(a * self.cols + col, b * self.cols + col);
        }
    }
}

/// Solve the square system `A x = b` by Gaussian elimination with
/// partial pivoting.
///
/// Never fails: pivots smaller in magnitude than [`MIN_PIVOT`] are
/// replaced by the floor, so singular systems produce a finite (if
/// arbitrary near-zero) solution for the unconstrained unknowns.
pub fn solve_system(a: &Matrix, b: &[f64]) -> Vec<f64> {
    let n = a.rows();
    debug_assert_eq!(a.cols(), n);
    debug_assert_eq!(b.len(), n);

    let mut m = a.clone();
    let mut rhs = b.to_vec();

    for col in 0..n {
        // Partial pivot: largest-magnitude entry among the remaining rows.
        let mut pivot_row = col;
        for row in (col + 1)..n {
            if m.get(row, col).abs() > m.get(pivot_row, col).abs() {
                pivot_row = row;
            }
        }
        m.swap_rows(col, pivot_row);
        rhs.swap(col, pivot_row);

        let mut pivot = m.get(col, col);
        if pivot.abs() < MIN_PIVOT {
            pivot = MIN_PIVOT;
            m.set(col, col, pivot);
        }

        for row in (col + 1)..n {
            let factor = m.get(row, col) / pivot;
            if factor == 0.0 {
                continue;
            }
            for k in col..n {
                m.set(row, k, m.get(row, k) - factor * m.get(col, k));
            }
            rhs[row] -= factor * rhs[col];
        }
    }

    // Back-substitution.
    let mut x = vec![0.0; n];
    for col in (0..n).rev() {
        let mut sum = rhs[col];
        for k in (col + 1)..n {
            sum -= m.get(col, k) * x[k];
        }
        x[col] = sum / m.get(col, col);
    }
    x
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_rows(rows: &[&[f64]]) -> Matrix {
        let mut m = Matrix::zeros(rows.len(), rows[0].len());
        for (i, row) in rows.iter().enumerate() {
            for (j, &v) in row.iter().enumerate() {
                m.set(i, j, v);
            }
        }
        m
    }

    #[test]
    fn solves_identity() {
        let a = from_rows(&[&[1.0, 0.0], &[0.0, 1.0]]);
        let x = solve_system(&a, &[3.0, -2.0]);
        assert!((x[0] - 3.0).abs() < 1e-12);
        assert!((x[1] + 2.0).abs() < 1e-12);
    }

    #[test]
    fn solves_system_needing_pivoting() {
        // First pivot is zero; partial pivoting must swap rows.
        let a = from_rows(&[&[0.0, 2.0], &[3.0, 1.0]]);
        let x = solve_system(&a, &[4.0, 5.0]);
        // 3x + y = 5, 2y = 4 -> y = 2, x = 1.
        assert!((x[0] - 1.0).abs() < 1e-12);
        assert!((x[1] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn solves_three_by_three() {
        let a = from_rows(&[
            &[2.0, 1.0, -1.0],
            &[-3.0, -1.0, 2.0],
            &[-2.0, 1.0, 2.0],
        ]);
        let x = solve_system(&a, &[8.0, -11.0, -3.0]);
        assert!((x[0] - 2.0).abs() < 1e-9);
        assert!((x[1] - 3.0).abs() < 1e-9);
        assert!((x[2] + 1.0).abs() < 1e-9);
    }

    #[test]
    fn singular_system_stays_finite() {
        // Second row is a multiple of the first: rank 1.
        let a = from_rows(&[&[1.0, 1.0], &[2.0, 2.0]]);
        let x = solve_system(&a, &[2.0, 4.0]);
        assert!(x.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn all_zero_system_stays_finite() {
        let a = Matrix::zeros(3, 3);
        let x = solve_system(&a, &[1.0, 2.0, 3.0]);
        assert_eq!(x.len(), 3);
        assert!(x.iter().all(|v| v.is_finite()));
    }
}
