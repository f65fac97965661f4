//! Typed reads and writes of table entries.

use varstore_foundation::{Error, ErrorContext, Kind, Matrix, Result, Table, Value};

/// Rust types that map onto a value kind.
pub trait VarType: Sized {
    /// The kind this type is stored as.
    const KIND: Kind;

    /// Extracts `Self` if `value` holds [`Self::KIND`].
    fn from_value(value: &Value) -> Option<Self>;

    /// Converts into a value of [`Self::KIND`].
    fn into_value(self) -> Value;
}

impl VarType for f32 {
    const KIND: Kind = Kind::Number;

    fn from_value(value: &Value) -> Option<Self> {
        value.try_number().ok()
    }

    fn into_value(self) -> Value {
        Value::Number(self)
    }
}

/// Truncates toward zero on read.
impl VarType for i32 {
    const KIND: Kind = Kind::Number;

    fn from_value(value: &Value) -> Option<Self> {
        value.try_integer().ok()
    }

    #[allow(clippy::cast_precision_loss)]
    fn into_value(self) -> Value {
        Value::Number(self as f32)
    }
}

/// Any non-zero number reads as true.
impl VarType for bool {
    const KIND: Kind = Kind::Number;

    fn from_value(value: &Value) -> Option<Self> {
        value.try_number().ok().map(|n| n != 0.0)
    }

    fn into_value(self) -> Value {
        Value::from(self)
    }
}

impl VarType for Vec<f32> {
    const KIND: Kind = Kind::Array;

    fn from_value(value: &Value) -> Option<Self> {
        value.try_array().ok().map(<[f32]>::to_vec)
    }

    fn into_value(self) -> Value {
        Value::Array(self)
    }
}

impl VarType for Matrix {
    const KIND: Kind = Kind::Matrix;

    fn from_value(value: &Value) -> Option<Self> {
        value.try_matrix().ok().cloned()
    }

    fn into_value(self) -> Value {
        Value::Matrix(self)
    }
}

impl VarType for String {
    const KIND: Kind = Kind::String;

    fn from_value(value: &Value) -> Option<Self> {
        value.try_string().ok().map(str::to_owned)
    }

    fn into_value(self) -> Value {
        Value::String(self)
    }
}

impl VarType for Table {
    const KIND: Kind = Kind::Table;

    fn from_value(value: &Value) -> Option<Self> {
        value.try_table().ok().cloned()
    }

    fn into_value(self) -> Value {
        Value::Table(self)
    }
}

/// Reads `name` from `table` as `T`.
///
/// # Errors
///
/// Returns `NotFound` if the entry is absent, `TypeMismatch` if it holds
/// another kind.
pub fn get<T: VarType>(table: &Table, name: &str) -> Result<T> {
    let value = table.get(name).ok_or_else(|| Error::not_found(name))?;
    T::from_value(value).ok_or_else(|| {
        Error::type_mismatch(T::KIND, value.kind())
            .with_context(ErrorContext::new().with_name(name))
    })
}

/// Writes `value` into `table` under `name`, replacing any previous entry.
pub fn set<'a, T: VarType>(table: &'a mut Table, name: &str, value: T) -> &'a mut Value {
    table.set(name, value.into_value())
}
