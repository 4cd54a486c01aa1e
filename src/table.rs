//! In-memory tabular dataset.
//!
//! A [`Table`] is an ordered list of named [`Column`]s sharing one row count.
//! Array-valued columns keep their elements flattened in row-major order, so a
//! column of `n` rows with cell shape `[3]` holds `3 * n` values.

use crate::error::{Error, Result};

/// Shape of a single cell in a column
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellShape {
    /// One value per row
    Scalar,
    /// Fixed-size array per row, outermost dimension first
    Fixed(Vec<usize>),
}

impl CellShape {
    /// Number of elements stored per row (None if the product overflows)
    pub fn elements_per_row(&self) -> Option<usize> {
        match self {
            Self::Scalar => Some(1),
            Self::Fixed(dims) => dims
                .iter()
                .try_fold(1usize, |acc, &dim| acc.checked_mul(dim)),
        }
    }
}

/// Column storage
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    /// Logical values
    Bool(Vec<bool>),
    /// Integers (scaled by `TZERO` when present); `None` is a `TNULL` value
    Int(Vec<Option<i64>>),
    /// Single-precision floats; NaN is a null
    Float32(Vec<f32>),
    /// Double-precision floats; NaN is a null
    Float64(Vec<f64>),
    /// Raw byte strings, not yet decoded
    Bytes(Vec<Vec<u8>>),
    /// Decoded text
    Text(Vec<String>),
}

impl ColumnData {
    /// Number of stored elements
    pub fn len(&self) -> usize {
        match self {
            Self::Bool(v) => v.len(),
            Self::Int(v) => v.len(),
            Self::Float32(v) => v.len(),
            Self::Float64(v) => v.len(),
            Self::Bytes(v) => v.len(),
            Self::Text(v) => v.len(),
        }
    }

    /// Returns true if no elements are stored
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Short name of the storage type, used in logs
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float32(_) => "float32",
            Self::Float64(_) => "float64",
            Self::Bytes(_) => "bytes",
            Self::Text(_) => "str",
        }
    }
}

/// A named column
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Column name
    pub name: String,
    /// Shape of each cell
    pub shape: CellShape,
    /// Flattened values
    pub data: ColumnData,
}

impl Column {
    /// Create a scalar column
    pub fn scalar(name: impl Into<String>, data: ColumnData) -> Self {
        Self {
            name: name.into(),
            shape: CellShape::Scalar,
            data,
        }
    }

    /// Dimensionality of the column as a whole: 1 for scalar cells, plus one per
    /// cell dimension
    pub fn rank(&self) -> usize {
        match &self.shape {
            CellShape::Scalar => 1,
            CellShape::Fixed(dims) => 1 + dims.len(),
        }
    }

    /// Returns true if every row holds exactly one value
    pub fn is_scalar(&self) -> bool {
        self.rank() <= 1
    }

    /// Number of rows in this column
    pub fn num_rows(&self) -> usize {
        match self.shape.elements_per_row() {
            Some(0) | None => 0,
            Some(per_row) => self.data.len() / per_row,
        }
    }
}

/// Ordered collection of equally long columns
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
    num_rows: usize,
}

impl Table {
    /// Create an empty table with a fixed row count
    pub fn new(num_rows: usize) -> Self {
        Self {
            columns: Vec::new(),
            num_rows,
        }
    }

    /// Append a column, checking that its length matches the table
    pub fn push_column(&mut self, column: Column) -> Result<()> {
        let expected_len = column
            .shape
            .elements_per_row()
            .and_then(|per_row| per_row.checked_mul(self.num_rows));
        if expected_len != Some(column.data.len()) {
            let actual = column.num_rows();
            return Err(Error::ColumnLength {
                column: column.name,
                expected: self.num_rows,
                actual,
            });
        }
        self.columns.push(column);
        Ok(())
    }

    /// Number of rows
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Columns in order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Mutable access to the columns (lengths must be preserved)
    pub fn columns_mut(&mut self) -> &mut [Column] {
        &mut self.columns
    }

    /// Column names in order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Look up a column by name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }
}
