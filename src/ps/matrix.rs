//! Row-growable dense matrix of percept→action edge values

/// Row-major `rows × cols` matrix that only ever grows by appending rows.
///
/// Storage is a single `Vec<f64>`, so appending rows reallocates geometrically.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeMatrix {
    values: Vec<f64>,
    cols: usize,
}

impl EdgeMatrix {
    /// Create a matrix with a single row of `fill`.
    pub fn with_row(cols: usize, fill: f64) -> Self {
        Self {
            values: vec![fill; cols],
            cols,
        }
    }

    pub fn rows(&self) -> usize {
        if self.cols == 0 {
            0
        } else {
            self.values.len() / self.cols
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Borrow row `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.rows()`.
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.cols;
        &self.values[start..start + self.cols]
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if col >= self.cols {
            return None;
        }
        self.values.get(row * self.cols + col).copied()
    }

    /// Overwrite a single cell.
    ///
    /// # Panics
    ///
    /// Panics if the cell is out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        assert!(col < self.cols, "column {col} out of bounds");
        self.values[row * self.cols + col] = value;
    }

    /// Append a row of `fill`.
    pub fn push_row(&mut self, fill: f64) {
        self.values.resize(self.values.len() + self.cols, fill);
    }

    /// All cells in row-major order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn values_mut(&mut self) -> &mut [f64] {
        &mut self.values
    }
}
