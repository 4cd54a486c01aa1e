//! Text rendering of table cells.
//!
//! Values are written the way pandas' `to_csv` writes the equivalent numpy
//! values: missing → empty, booleans as `True`/`False`, floats in their
//! shortest round-trip form (positional between 1e-4 and 1e16, scientific
//! with a two-digit exponent otherwise).

use crate::error::{Error, Result};
use crate::table::{Column, ColumnData};
use std::borrow::Cow;
use std::fmt::{Display, LowerExp};

/// Render one cell of a scalar column
pub(crate) fn format_cell(column: &Column, row: usize) -> Result<Cow<'_, str>> {
    let text = match &column.data {
        ColumnData::Bool(values) => Cow::Borrowed(if values[row] { "True" } else { "False" }),
        ColumnData::Int(values) => values[row].map_or(Cow::Borrowed(""), |v| v.to_string().into()),
        ColumnData::Float32(values) => float_field(values[row]).into(),
        ColumnData::Float64(values) => float_field(values[row]).into(),
        ColumnData::Text(values) => Cow::Borrowed(values[row].as_str()),
        ColumnData::Bytes(values) => {
            Cow::Borrowed(
                std::str::from_utf8(&values[row]).map_err(|source| Error::Decode {
                    column: column.name.clone(),
                    row,
                    source,
                })?,
            )
        }
    };
    Ok(text)
}

/// A float as a CSV field: NaN is a missing value
fn float_field<F: Copy + Display + LowerExp + Into<f64>>(v: F) -> String {
    if v.into().is_nan() {
        String::new()
    } else {
        float_repr(v)
    }
}

/// Shortest round-trip representation of a float.
///
/// Integral positional values get a trailing `.0`.
pub(crate) fn float_repr<F: Copy + Display + LowerExp + Into<f64>>(v: F) -> String {
    let wide: f64 = v.into();
    if wide.is_nan() {
        return "nan".to_string();
    }
    if wide.is_infinite() {
        return if wide > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = wide.abs();
    if magnitude == 0.0 || (1e-4..1e16).contains(&magnitude) {
        let positional = v.to_string();
        if !positional.contains('.') {
            positional + ".0"
        } else {
            positional
        }
    } else {
        let scientific = format!("{:e}", v);
        let (mantissa, exponent) = scientific
            .split_once('e')
            .unwrap_or((scientific.as_str(), "0"));
        let (sign, digits) = exponent
            .strip_prefix('-')
            .map_or(("+", exponent), |digits| ("-", digits));
        format!("{}e{}{:0>2}", mantissa, sign, digits)
    }
}
