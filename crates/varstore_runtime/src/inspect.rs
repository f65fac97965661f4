//! Decoding files of unknown unit type and printing their contents.

use std::fmt::{self, Write as _};
use std::path::Path;

use tracing::debug;
use varstore_codec::{Decode, DecodeError, Unit, WireReader};
use varstore_foundation::{Error, ErrorContext, ErrorKind, Result, Table, Value};
use varstore_schema::{Database, VarInfo};

use crate::msgpack::to_msgpack;

/// Any top-level unit a file may hold.
#[derive(Clone, Debug, PartialEq)]
pub enum Document {
    /// A single value.
    Value(Value),
    /// A table.
    Table(Table),
    /// One metadata record.
    VarInfo(VarInfo),
    /// A metadata registry.
    Database(Database),
}

impl Document {
    /// The unit identified by the first byte of `bytes`.
    #[must_use]
    pub fn detect(bytes: &[u8]) -> Option<Unit> {
        bytes.first().copied().and_then(Unit::from_tag)
    }

    /// Decodes whichever unit `bytes` holds. The unit must span all of `bytes`.
    ///
    /// # Errors
    ///
    /// Returns `Decode` if the leading tag is unknown, the unit is corrupt,
    /// or bytes follow the unit.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let unit = Self::detect(bytes).ok_or_else(|| {
            let what = bytes.first().map_or_else(
                || "empty input".to_owned(),
                |t| format!("unrecognized leading tag {t:#04x}"),
            );
            Error::new(ErrorKind::Decode(what))
        })?;
        debug!(%unit, len = bytes.len(), "decoding document");

        let mut reader = WireReader::new(bytes);
        let doc = Self::decode_unit(unit, &mut reader)?;
        let rest = reader.into_inner();
        if !rest.is_empty() {
            return Err(Error::new(ErrorKind::Decode(format!(
                "{} trailing bytes after {unit}",
                rest.len()
            ))));
        }
        Ok(doc)
    }

    fn decode_unit(
        unit: Unit,
        r: &mut WireReader<&[u8]>,
    ) -> std::result::Result<Self, DecodeError> {
        Ok(match unit {
            Unit::Value => Self::Value(Value::decode(r)?),
            Unit::Table => Self::Table(Table::decode(r)?),
            Unit::VarInfo => Self::VarInfo(VarInfo::decode(r)?),
            Unit::Database => Self::Database(Database::decode(r)?),
        })
    }

    /// Reads and decodes a file.
    ///
    /// # Errors
    ///
    /// Returns `IoError` if the file cannot be read, `Decode` if it is corrupt.
    pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            Error::new(ErrorKind::IoError(format!(
                "failed to read file '{}': {e}",
                path.display()
            )))
        })?;
        Self::from_bytes(&bytes).map_err(|e| {
            e.with_context(ErrorContext::new().with_source(path.display().to_string()))
        })
    }

    /// The unit type held.
    #[must_use]
    pub fn unit(&self) -> Unit {
        match self {
            Self::Value(_) => Unit::Value,
            Self::Table(_) => Unit::Table,
            Self::VarInfo(_) => Unit::VarInfo,
            Self::Database(_) => Unit::Database,
        }
    }

    /// A one-line description, e.g. `table (3 entries)`.
    #[must_use]
    pub fn summary(&self) -> String {
        match self {
            Self::Value(v) => format!("value ({})", v.kind()),
            Self::Table(t) => format!("table ({} entries)", t.len()),
            Self::VarInfo(i) => format!("varinfo ({})", i.name),
            Self::Database(db) => format!("database ({} variables)", db.len()),
        }
    }

    /// Encodes the held unit as `MessagePack`.
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` if serialization fails.
    pub fn to_msgpack(&self) -> Result<Vec<u8>> {
        match self {
            Self::Value(v) => to_msgpack(v),
            Self::Table(t) => to_msgpack(t),
            Self::VarInfo(i) => to_msgpack(i),
            Self::Database(db) => to_msgpack(db),
        }
    }
}

fn indent(f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        f.write_str("  ")?;
    }
    Ok(())
}

fn write_entry(f: &mut fmt::Formatter<'_>, name: &str, value: &Value, depth: usize) -> fmt::Result {
    indent(f, depth)?;
    match value {
        Value::Table(t) => {
            writeln!(f, "{name}: table ({} entries)", t.len())?;
            write_table(f, t, depth + 1)
        }
        Value::Matrix(m) => writeln!(f, "{name}: matrix {}x{} {m}", m.rows(), m.cols()),
        Value::Invalid => writeln!(f, "{name}: invalid"),
        v => writeln!(f, "{name}: {} {v}", v.kind()),
    }
}

fn write_table(f: &mut fmt::Formatter<'_>, table: &Table, depth: usize) -> fmt::Result {
    for (name, value) in table.iter() {
        write_entry(f, name, value, depth)?;
    }
    Ok(())
}

fn write_info(f: &mut fmt::Formatter<'_>, name: &str, info: &VarInfo, depth: usize) -> fmt::Result {
    indent(f, depth)?;
    write!(f, "{name}: {} {:?}", info.var_type, info.label)?;
    if !info.units.is_empty() {
        write!(f, " [{}]", info.units)?;
    }
    if !info.group.is_empty() {
        write!(f, " group={}", info.group)?;
    }
    if !info.index_labels.is_empty() {
        write!(f, " labels={}", info.index_labels.join(","))?;
    }
    if !info.flags.is_empty() {
        let mut names = String::new();
        for (i, (flag, _)) in info.flags.iter_names().enumerate() {
            if i > 0 {
                names.push('|');
            }
            names.push_str(flag);
        }
        let unnamed = info.flags.bits() & !varstore_schema::VarFlags::all().bits();
        if unnamed != 0 {
            if !names.is_empty() {
                names.push('|');
            }
            let _ = write!(names, "{unnamed:#x}");
        }
        write!(f, " flags={names}")?;
    }
    if !info.default_value.is_invalid() {
        write!(f, " default={}", info.default_value)?;
    }
    writeln!(f)
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.summary())?;
        match self {
            Self::Value(Value::Table(t)) | Self::Table(t) => write_table(f, t, 1),
            Self::Value(v) => write_entry(f, "value", v, 1),
            Self::VarInfo(info) => write_info(f, &info.name, info, 1),
            Self::Database(db) => {
                for (name, info) in db.iter() {
                    write_info(f, name, info, 1)?;
                }
                Ok(())
            }
        }
    }
}
