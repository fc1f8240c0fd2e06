// ---------------------------------------------------------------------------
// NumericTable – column-major view of a numeric CSV file
// ---------------------------------------------------------------------------

/// All values of a CSV file, grouped by field position across rows.
///
/// Built row by row. Rows may be ragged: a longer row simply opens new
/// columns, so columns can differ in length.
#[derive(Debug, Clone, Default)]
pub struct NumericTable {
    /// One `Vec<f64>` per field position.
    pub columns: Vec<Vec<f64>>,
}

impl NumericTable {
    /// Append one value to the column at `index`, growing the table if that
    /// column does not exist yet.
    pub fn push(&mut self, index: usize, value: f64) {
        if self.columns.len() <= index {
            self.columns.resize_with(index + 1, Vec::new);
        }
        self.columns[index].push(value);
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the table holds no columns at all.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
