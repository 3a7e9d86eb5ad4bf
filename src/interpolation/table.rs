//! Triangular divided-difference table.
//!
//! Row `i` holds `i + 1` entries; entry `(i, j)` is the order-`j` quantity
//! anchored at sample `i`. Rows are packed into one flat buffer, row `i`
//! starting at offset `i(i+1)/2`, so building a table of `n` rows is a
//! single allocation.
//!
//! The same layout backs three different tables:
//! - Newton divided differences ([`crate::interpolation::newton`])
//! - Neville iterated values ([`crate::interpolation::neville`])
//! - Hermite doubled-node differences ([`crate::interpolation::hermite`])

use std::ops::Index;


#[derive(Debug, Clone, PartialEq)]
pub struct DividedDifferenceTable {
    size: usize,
    data: Vec<f64>,
}

#[inline]
const fn row_offset(i: usize) -> usize {
    i * (i + 1) / 2
}

impl DividedDifferenceTable {
    /// Zero-filled table with `size` rows.
    pub(crate) fn zeros(size: usize) -> Self {
        Self { size, data: vec![0.0; row_offset(size)] }
    }

    /// Table whose first column is `seed` and everything else is zero.
    pub(crate) fn seeded(seed: &[f64]) -> Self {
        let mut table = Self::zeros(seed.len());
        for (i, &v) in seed.iter().enumerate() {
            table.set(i, 0, v);
        }
        table
    }

    #[inline]
    pub(crate) fn set(&mut self, i: usize, j: usize, v: f64) {
        debug_assert!(j <= i && i < self.size);
        self.data[row_offset(i) + j] = v;
    }

    /// Number of rows (equivalently, of samples the table was built from).
    pub fn size(&self) -> usize { self.size }
    pub fn is_empty(&self) -> bool { self.size == 0 }

    /// Entry `(i, j)`, or `None` outside the triangle.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i < self.size && j <= i {
            Some(self.data[row_offset(i) + j])
        } else {
            None
        }
    }

    /// Row `i` as a slice of length `i + 1`.
    ///
    /// # Panics
    /// If `i >= self.size()`.
    pub fn row(&self, i: usize) -> &[f64] {
        assert!(i < self.size, "row {i} out of range for table of size {}", self.size);
        let start = row_offset(i);
        &self.data[start..start + i + 1]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.size).map(move |i| self.row(i))
    }

    /// Entries `(i, i)`; the Newton-form coefficients for a difference table.
    pub fn diagonal(&self) -> Vec<f64> {
        (0..self.size).map(|i| self.data[row_offset(i) + i]).collect()
    }

    /// Bottom-right corner `(n-1, n-1)`.
    pub fn last(&self) -> Option<f64> {
        self.data.last().copied()
    }
}

impl Index<(usize, usize)> for DividedDifferenceTable {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        assert!(
            i < self.size && j <= i,
            "entry ({i}, {j}) outside triangular table of size {}", self.size
        );
        &self.data[row_offset(i) + j]
    }
}


/// Fills every entry of order `>= from_order` with the divided-difference
/// recurrence over nodes `z`:
///
/// ```text
/// t[i][j] = (t[i][j-1] - t[i-1][j-1]) / (z[i] - z[i-j])
/// ```
///
/// Entries of lower order must already be seeded. Plain Newton tables
/// start at order 1; the Hermite table seeds order 1 itself and starts at 2.
pub(crate) fn fill_divided_differences(
    table: &mut DividedDifferenceTable,
    z: &[f64],
    from_order: usize,
) {
    debug_assert_eq!(table.size(), z.len());
    let from = from_order.max(1);

    for i in 1..table.size() {
        for j in from..=i {
            let v = (table[(i, j - 1)] - table[(i - 1, j - 1)]) / (z[i] - z[i - j]);
            table.set(i, j, v);
        }
    }
}
