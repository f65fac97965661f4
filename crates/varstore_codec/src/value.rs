//! Wire encoding for values and tables.
//!
//! ```text
//! value: F2 ver kind payload F2
//!   number/array/matrix: rows(u32) cols(u32) cells(f32 * rows * cols)
//!   table:               nested table encoding
//!   string:              len(u32) utf8
//!   invalid:             nothing
//! table: F9 ver count(u32) { name(string) value }* F9
//! ```

use std::io::{self, Read, Write};

use tracing::warn;
use varstore_foundation::{Kind, Matrix, Table, Value};

use crate::error::DecodeError;
use crate::frame::Unit;
use crate::persist::{Decode, Encode};
use crate::wire::{WireReader, WireWriter};

fn encode_cells<W: Write>(
    w: &mut WireWriter<W>,
    rows: usize,
    cols: usize,
    cells: &[f32],
) -> io::Result<()> {
    w.length(rows)?;
    w.length(cols)?;
    for x in cells {
        w.f32(*x)?;
    }
    Ok(())
}

impl Encode for Value {
    fn encode<W: Write>(&self, w: &mut WireWriter<W>) -> io::Result<()> {
        w.open(Unit::Value)?;
        w.u8(self.kind().code())?;
        match self {
            Value::Invalid => {}
            Value::Number(n) => encode_cells(w, 1, 1, std::slice::from_ref(n))?,
            Value::Array(a) => encode_cells(w, 1, a.len(), a)?,
            Value::Matrix(m) => encode_cells(w, m.rows(), m.cols(), m.as_slice())?,
            Value::Table(t) => t.encode(w)?,
            Value::String(s) => w.string(s)?,
        }
        w.close(Unit::Value)
    }
}

impl Decode for Value {
    fn decode<R: Read>(r: &mut WireReader<R>) -> Result<Self, DecodeError> {
        r.open(Unit::Value)?;
        let code = u32::from(r.u8()?);
        let kind = Kind::from_code(code).ok_or(DecodeError::UnknownKind(code))?;

        let value = match kind {
            Kind::Invalid => Value::Invalid,
            Kind::Number | Kind::Array | Kind::Matrix => decode_numeric(r, kind)?,
            Kind::Table => Value::Table(r.nested(Table::decode)?),
            Kind::String => Value::String(r.string()?),
        };

        r.close(Unit::Value)?;
        Ok(value)
    }
}

fn decode_numeric<R: Read>(r: &mut WireReader<R>, kind: Kind) -> Result<Value, DecodeError> {
    let rows = r.u32()?;
    let cols = r.u32()?;
    let n = u64::from(rows) * u64::from(cols);
    if n < 1 {
        return Err(DecodeError::InvalidDimensions { rows, cols });
    }
    let cells = r.cells(n)?;

    Ok(match kind {
        Kind::Number => Value::Number(cells[0]),
        Kind::Array => Value::Array(cells),
        _ => Value::Matrix(
            Matrix::new(rows as usize, cols as usize, cells)
                .map_err(|_| DecodeError::InvalidDimensions { rows, cols })?,
        ),
    })
}

impl Encode for Table {
    fn encode<W: Write>(&self, w: &mut WireWriter<W>) -> io::Result<()> {
        w.open(Unit::Table)?;
        w.length(self.len())?;
        for (name, value) in self.iter() {
            w.string(name)?;
            value.encode(w)?;
        }
        w.close(Unit::Table)
    }
}

impl Decode for Table {
    /// Duplicate names keep their first occurrence.
    fn decode<R: Read>(r: &mut WireReader<R>) -> Result<Self, DecodeError> {
        r.open(Unit::Table)?;
        let n = r.count()?;
        let mut table = Table::new();
        for _ in 0..n {
            let name = r.string()?;
            let value = Value::decode(r)?;
            if !table.insert_new(&name, value) {
                warn!(%name, "duplicate table entry in stream, keeping the first");
            }
        }
        r.close(Unit::Table)?;
        Ok(table)
    }
}
