/// Row-major dense matrix.  The softmax transform only ever builds a single
/// row (`1 × n`), but element-wise and reduction operations apply to any shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix{
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>
}

impl Matrix{
    /// Wraps a slice as a `1 × n` row vector.  The slice is copied.
    pub fn from_row(row: &[f64]) -> Matrix {
        Matrix {
            rows: 1,
            cols: row.len(),
            data: vec![row.to_vec()]
        }
    }

    pub fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        let cols = data.first().map_or(0, |row| row.len());
        Matrix {
            rows: data.len(),
            cols,
            data
        }
    }

    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix::from_data(
            self.data
                .iter()
                .map(|row| row.iter().map(|&x| functor(x)).collect())
                .collect()
        )
    }

    /// Sum of every element.
    pub fn sum(&self) -> f64 {
        self.data.iter().flat_map(|row| row.iter()).sum()
    }

    /// Largest element, or `None` for an empty matrix.
    ///
    /// NaN elements are skipped by `f64::max`, so a matrix holding at least
    /// one number never reports NaN.
    pub fn max(&self) -> Option<f64> {
        self.data
            .iter()
            .flat_map(|row| row.iter().copied())
            .reduce(f64::max)
    }

    /// Consumes a `1 × n` matrix and returns its only row.
    pub fn into_row(self) -> Vec<f64> {
        self.data.into_iter().next().unwrap_or_default()
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix { rows: 0, cols: 0, data: vec![] }
    }
}
