//! The tagged value cell.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::kind::Kind;
use crate::matrix::Matrix;
use crate::table::Table;

static EMPTY_MATRIX: Matrix = Matrix::EMPTY;
static EMPTY_TABLE: LazyLock<Table> = LazyLock::new(Table::new);

/// A single variable value.
///
/// Values are mutated in place through the `set_*` family, which also
/// switch the kind; the previous payload is dropped. Clones are deep: a
/// nested table is never shared between two values.
#[derive(Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    /// No value assigned.
    #[default]
    Invalid,
    /// A single number.
    Number(f32),
    /// A list of numbers.
    Array(Vec<f32>),
    /// A row-major grid of numbers.
    Matrix(Matrix),
    /// A nested table.
    Table(Table),
    /// Text.
    String(String),
}

impl Value {
    /// Returns the kind of this value.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Invalid => Kind::Invalid,
            Self::Number(_) => Kind::Number,
            Self::Array(_) => Kind::Array,
            Self::Matrix(_) => Kind::Matrix,
            Self::Table(_) => Kind::Table,
            Self::String(_) => Kind::String,
        }
    }

    /// Returns true if no value has been assigned.
    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid)
    }

    /// Creates a matrix value by copying `rows * cols` row-major cells.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the slice does not fill the shape.
    pub fn matrix_from_slice(data: &[f32], rows: usize, cols: usize) -> Result<Self> {
        Matrix::from_slice(data, rows, cols).map(Self::Matrix)
    }

    // Mutation

    /// Replaces this value with anything convertible into a value.
    pub fn set(&mut self, value: impl Into<Value>) {
        *self = value.into();
    }

    /// Sets a number.
    pub fn set_number(&mut self, n: f32) {
        *self = Self::Number(n);
    }

    /// Sets an array by copying `data`.
    pub fn set_array(&mut self, data: &[f32]) {
        *self = Self::Array(data.to_vec());
    }

    /// Sets a matrix.
    pub fn set_matrix(&mut self, m: Matrix) {
        *self = Self::Matrix(m);
    }

    /// Sets a string.
    pub fn set_string(&mut self, s: impl Into<String>) {
        *self = Self::String(s.into());
    }

    /// Sets a nested table by copying `t`.
    pub fn set_table(&mut self, t: &Table) {
        *self = Self::Table(t.clone());
    }

    /// Makes this value a deep copy of `other`.
    pub fn copy_from(&mut self, other: &Value) {
        self.clone_from(other);
    }

    /// Resets to `Invalid`.
    pub fn clear(&mut self) {
        *self = Self::Invalid;
    }

    // Lenient accessors. These never fail; a kind mismatch yields an empty
    // result, so callers needing precision must check `kind()` first.

    /// The number truncated toward zero, or 0 if not a number.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn integer(&self) -> i32 {
        match self {
            Self::Number(n) => *n as i32,
            _ => 0,
        }
    }

    /// The number, or NaN if not a number.
    #[must_use]
    pub fn number(&self) -> f32 {
        match self {
            Self::Number(n) => *n,
            _ => f32::NAN,
        }
    }

    /// The array cells, or an empty slice if not an array.
    #[must_use]
    pub fn array(&self) -> &[f32] {
        match self {
            Self::Array(a) => a,
            _ => &[],
        }
    }

    /// The matrix, or the 0x0 matrix if not a matrix.
    #[must_use]
    pub fn matrix(&self) -> &Matrix {
        match self {
            Self::Matrix(m) => m,
            _ => &EMPTY_MATRIX,
        }
    }

    /// The string, or `""` if not a string.
    #[must_use]
    pub fn string(&self) -> &str {
        match self {
            Self::String(s) => s,
            _ => "",
        }
    }

    /// The nested table, or an empty table if not a table.
    #[must_use]
    pub fn table(&self) -> &Table {
        match self {
            Self::Table(t) => t,
            _ => &EMPTY_TABLE,
        }
    }

    /// Mutable array cells, if this is an array.
    pub fn array_mut(&mut self) -> Option<&mut Vec<f32>> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Mutable matrix, if this is a matrix.
    pub fn matrix_mut(&mut self) -> Option<&mut Matrix> {
        match self {
            Self::Matrix(m) => Some(m),
            _ => None,
        }
    }

    /// Mutable nested table, if this is a table.
    pub fn table_mut(&mut self) -> Option<&mut Table> {
        match self {
            Self::Table(t) => Some(t),
            _ => None,
        }
    }

    // Checked accessors.

    /// The number.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if this is not a number.
    pub fn try_number(&self) -> Result<f32> {
        match self {
            Self::Number(n) => Ok(*n),
            _ => Err(self.mismatch(Kind::Number)),
        }
    }

    /// The number truncated toward zero.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if this is not a number.
    #[allow(clippy::cast_possible_truncation)]
    pub fn try_integer(&self) -> Result<i32> {
        self.try_number().map(|n| n as i32)
    }

    /// The array cells.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if this is not an array.
    pub fn try_array(&self) -> Result<&[f32]> {
        match self {
            Self::Array(a) => Ok(a),
            _ => Err(self.mismatch(Kind::Array)),
        }
    }

    /// The matrix.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if this is not a matrix.
    pub fn try_matrix(&self) -> Result<&Matrix> {
        match self {
            Self::Matrix(m) => Ok(m),
            _ => Err(self.mismatch(Kind::Matrix)),
        }
    }

    /// The string.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if this is not a string.
    pub fn try_string(&self) -> Result<&str> {
        match self {
            Self::String(s) => Ok(s),
            _ => Err(self.mismatch(Kind::String)),
        }
    }

    /// The nested table.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if this is not a table.
    pub fn try_table(&self) -> Result<&Table> {
        match self {
            Self::Table(t) => Ok(t),
            _ => Err(self.mismatch(Kind::Table)),
        }
    }

    fn mismatch(&self, expected: Kind) -> Error {
        Error::type_mismatch(expected, self.kind())
    }

    /// Every numeric cell held, in row-major order. Empty for non-numeric kinds.
    #[must_use]
    pub fn cells(&self) -> &[f32] {
        match self {
            Self::Number(n) => std::slice::from_ref(n),
            Self::Array(a) => a,
            Self::Matrix(m) => m.as_slice(),
            _ => &[],
        }
    }
}

// Floats compare by bit pattern so that Eq is reflexive and a decoded value
// equals the value that was encoded, NaN included.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Invalid, Self::Invalid) => true,
            (Self::Number(a), Self::Number(b)) => a.to_bits() == b.to_bits(),
            (Self::Array(a), Self::Array(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.to_bits() == y.to_bits())
            }
            (Self::Matrix(a), Self::Matrix(b)) => a.bit_eq(b),
            (Self::Table(a), Self::Table(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Invalid => {}
            Self::Number(n) => n.to_bits().hash(state),
            Self::Array(a) => {
                a.len().hash(state);
                for x in a {
                    x.to_bits().hash(state);
                }
            }
            Self::Matrix(m) => {
                m.dims().hash(state);
                for x in m.as_slice() {
                    x.to_bits().hash(state);
                }
            }
            Self::Table(t) => {
                for (name, value) in t.iter() {
                    name.hash(state);
                    value.hash(state);
                }
            }
            Self::String(s) => s.hash(state),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid => write!(f, "invalid"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Array(a) => write!(f, "{a:?}"),
            Self::Matrix(m) => write!(f, "{m:?}"),
            Self::Table(t) => write!(f, "{t:?}"),
            Self::String(s) => write!(f, "{s:?}"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid => write!(f, "<invalid>"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Array(a) => {
                write!(f, "[")?;
                for (i, x) in a.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{x}")?;
                }
                write!(f, "]")
            }
            Self::Matrix(m) => write!(f, "{m}"),
            Self::Table(t) => write!(f, "{t}"),
            Self::String(s) => write!(f, "{s:?}"),
        }
    }
}

// Convenience From implementations

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Self::Number(n)
    }
}

impl From<f64> for Value {
    #[allow(clippy::cast_possible_truncation)]
    fn from(n: f64) -> Self {
        Self::Number(n as f32)
    }
}

impl From<i32> for Value {
    #[allow(clippy::cast_precision_loss)]
    fn from(n: i32) -> Self {
        Self::Number(n as f32)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Number(if b { 1.0 } else { 0.0 })
    }
}

impl From<Vec<f32>> for Value {
    fn from(v: Vec<f32>) -> Self {
        Self::Array(v)
    }
}

impl From<&[f32]> for Value {
    fn from(v: &[f32]) -> Self {
        Self::Array(v.to_vec())
    }
}

impl<const N: usize> From<[f32; N]> for Value {
    fn from(v: [f32; N]) -> Self {
        Self::Array(v.to_vec())
    }
}

impl From<Matrix> for Value {
    fn from(m: Matrix) -> Self {
        Self::Matrix(m)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Table> for Value {
    fn from(t: Table) -> Self {
        Self::Table(t)
    }
}

impl From<&Table> for Value {
    fn from(t: &Table) -> Self {
        Self::Table(t.clone())
    }
}

impl From<&Value> for Value {
    fn from(v: &Value) -> Self {
        v.clone()
    }
}
