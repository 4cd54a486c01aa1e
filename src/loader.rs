//! FITS binary table → [`Table`], keeping only scalar columns.
//!
//! The file itself is parsed by cfitsio through the `fitsio` crate. This module
//! decides from the column descriptions which columns hold one value per row,
//! reads those, and skips the rest without touching their data.

use crate::error::{Error, Result};
use crate::table::{CellShape, Column, ColumnData, Table};
use fitsio::FitsFile;
use fitsio::hdu::{FitsHdu, HduInfo};
use fitsio::tables::ColumnDataType;
use std::path::Path;
use tracing::{debug, info, warn};

/// Rust type a scalar column is read into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReadAs {
    Bool,
    Int,
    Float32,
    Float64,
    Bytes,
}

/// What to do with one column of the HDU
#[derive(Debug, Clone, PartialEq)]
struct ColumnPlan {
    name: String,
    shape: CellShape,
    /// `None` for types with no scalar representation here
    read_as: Option<ReadAs>,
    null: Option<i64>,
}

impl ColumnPlan {
    fn rank(&self) -> usize {
        match &self.shape {
            CellShape::Scalar => 1,
            CellShape::Fixed(dims) => 1 + dims.len(),
        }
    }
}

/// Load HDU `hdu` of the FITS file at `path` as a table of scalar columns
///
/// Columns whose cells are arrays (rank above one) are dropped; the rest keep
/// their original order.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read by cfitsio, or if the
/// HDU is missing or holds an image.
pub fn load_table(path: &Path, hdu: usize) -> Result<Table> {
    let fits_error = |source: fitsio::errors::Error| Error::Fits {
        path: path.to_path_buf(),
        source,
    };

    let mut fptr = FitsFile::open(path).map_err(fits_error)?;
    let table_hdu = fptr.hdu(hdu).map_err(fits_error)?;

    let (descriptions, num_rows) = match &table_hdu.info {
        HduInfo::TableInfo {
            column_descriptions,
            num_rows,
        } => (column_descriptions, *num_rows),
        _ => {
            return Err(Error::NotATable {
                path: path.to_path_buf(),
                hdu,
            });
        }
    };

    let mut table = Table::new(num_rows);
    let mut dropped = Vec::new();
    for (index, description) in descriptions.iter().enumerate() {
        let plan = plan_column(
            &mut fptr,
            &table_hdu,
            index + 1,
            &description.name,
            &description.data_type.typ,
            description.data_type.repeat,
        );

        let read_as = match plan.read_as {
            Some(read_as) if plan.rank() <= 1 => read_as,
            Some(_) => {
                dropped.push(plan.name);
                continue;
            }
            None => {
                warn!(column = %plan.name, "skipping column with unsupported type");
                dropped.push(plan.name);
                continue;
            }
        };

        let data = read_column(&mut fptr, &table_hdu, &plan, read_as).map_err(fits_error)?;
        debug!(
            column = %plan.name,
            dtype = data.type_name(),
            rows = data.len(),
            "read column"
        );
        table.push_column(Column::scalar(plan.name, data))?;
    }

    if !dropped.is_empty() {
        debug!(count = dropped.len(), columns = ?dropped, "dropped array-valued columns");
    }

    info!(
        rows = table.num_rows(),
        columns = table.columns().len(),
        "loaded FITS table"
    );
    Ok(table)
}

/// Work out the cell shape and read type of column `index` (1-based)
fn plan_column(
    fptr: &mut FitsFile,
    hdu: &FitsHdu,
    index: usize,
    name: &str,
    typ: &ColumnDataType,
    repeat: usize,
) -> ColumnPlan {
    let tdim_key = format!("TDIM{}", index);
    let dims = hdu
        .read_key::<String>(fptr, &tdim_key)
        .ok()
        .and_then(|value| {
            let dims = parse_tdim(&value);
            if dims.is_none() {
                warn!(column = name, keyword = %tdim_key, value = %value, "ignoring malformed TDIM");
            }
            dims
        });

    let scale = hdu
        .read_key::<f64>(fptr, &format!("TSCAL{}", index))
        .unwrap_or(1.0);
    let zero = hdu
        .read_key::<f64>(fptr, &format!("TZERO{}", index))
        .unwrap_or(0.0);
    let null = hdu.read_key::<i64>(fptr, &format!("TNULL{}", index)).ok();

    let is_text = matches!(typ, ColumnDataType::String);
    ColumnPlan {
        name: name.to_string(),
        shape: cell_shape(is_text, repeat, dims.as_deref()),
        read_as: read_type(typ, scale != 1.0 || zero.fract() != 0.0),
        null,
    }
}

/// Parse a `TDIMn` value such as `(20,5)`; dimensions are fastest-varying first
fn parse_tdim(value: &str) -> Option<Vec<usize>> {
    let inner = value
        .trim()
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))?;
    inner
        .split(',')
        .map(|d| d.trim().parse::<usize>().ok())
        .collect()
}

/// Cell shape from the repeat count and optional `TDIMn`
///
/// For character columns the first `TDIM` axis is the string width, so a plain
/// `nA` column is one string per row.
fn cell_shape(is_text: bool, repeat: usize, dims: Option<&[usize]>) -> CellShape {
    // TDIM lists the fastest axis first; cell shapes are outermost first
    let outer_first = |dims: &[usize]| {
        if dims.is_empty() {
            CellShape::Scalar
        } else {
            CellShape::Fixed(dims.iter().rev().copied().collect())
        }
    };

    match (is_text, dims) {
        (true, Some(dims)) if !dims.is_empty() => outer_first(&dims[1..]),
        (true, _) => CellShape::Scalar,
        (false, Some(dims)) => outer_first(dims),
        (false, None) if repeat == 1 => CellShape::Scalar,
        (false, None) => CellShape::Fixed(vec![repeat]),
    }
}

/// Rust type for a column; integer columns with non-integral scaling become floats
fn read_type(typ: &ColumnDataType, scaled: bool) -> Option<ReadAs> {
    let read_as = match typ {
        ColumnDataType::Logical | ColumnDataType::Bit => ReadAs::Bool,
        ColumnDataType::Byte
        | ColumnDataType::Short
        | ColumnDataType::Int
        | ColumnDataType::Long
            if scaled =>
        {
            ReadAs::Float64
        }
        ColumnDataType::Byte
        | ColumnDataType::Short
        | ColumnDataType::Int
        | ColumnDataType::Long => ReadAs::Int,
        ColumnDataType::Float if scaled => ReadAs::Float64,
        ColumnDataType::Float => ReadAs::Float32,
        ColumnDataType::Double => ReadAs::Float64,
        ColumnDataType::String => ReadAs::Bytes,
        #[allow(unreachable_patterns)]
        _ => return None,
    };
    Some(read_as)
}

fn read_column(
    fptr: &mut FitsFile,
    hdu: &FitsHdu,
    plan: &ColumnPlan,
    read_as: ReadAs,
) -> std::result::Result<ColumnData, fitsio::errors::Error> {
    let name = plan.name.as_str();
    Ok(match read_as {
        ReadAs::Bool => ColumnData::Bool(hdu.read_col::<bool>(fptr, name)?),
        ReadAs::Int => ColumnData::Int(
            hdu.read_col::<i64>(fptr, name)?
                .into_iter()
                .map(|v| (plan.null != Some(v)).then_some(v))
                .collect(),
        ),
        ReadAs::Float32 => ColumnData::Float32(hdu.read_col::<f32>(fptr, name)?),
        ReadAs::Float64 => ColumnData::Float64(hdu.read_col::<f64>(fptr, name)?),
        ReadAs::Bytes => ColumnData::Bytes(
            hdu.read_col::<String>(fptr, name)?
                .into_iter()
                .map(String::into_bytes)
                .collect(),
        ),
    })
}
