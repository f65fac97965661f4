//! Conversion between [`Value`] and a host's dynamic value type.
//!
//! An embedding scripting layer exposes its values through [`HostValue`];
//! [`DynValue`] is a ready-made implementation for hosts without one.
//!
//! Reading infers the kind from the host value's shape:
//! - number becomes `Number`, string becomes `String`
//! - a flat list becomes `Array`
//! - a list containing lists becomes `Matrix`, as wide as its longest row,
//!   with short rows and non-list rows zero-filled
//! - a hash becomes `Table`, recursively
//!
//! With `change_type` off, a read only lands if it fits the existing kind;
//! a flat list read into a `Matrix` becomes an `n x 1` column.

use std::collections::BTreeMap;

use crate::kind::Kind;
use crate::matrix::Matrix;
use crate::table::Table;
use crate::value::Value;

/// Shape of a host value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostKind {
    /// Absent / undefined.
    Null,
    /// A number.
    Number,
    /// A string.
    String,
    /// An indexed list of values.
    List,
    /// A map from names to values.
    Hash,
}

/// A host language's dynamic value, as seen by the bridge.
pub trait HostValue: Sized {
    /// The shape of this value.
    fn host_kind(&self) -> HostKind;

    /// Numeric conversion (hosts decide how strings or lists convert).
    fn to_number(&self) -> f64;

    /// String conversion.
    fn to_text(&self) -> String;

    /// Number of list elements (0 for non-lists).
    fn len(&self) -> usize;

    /// Returns true if this has no list elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// List element by index.
    fn item(&self, index: usize) -> Option<&Self>;

    /// Hash entries.
    fn entries(&self) -> Box<dyn Iterator<Item = (&str, &Self)> + '_>;

    /// Constructs the host null.
    fn null() -> Self;

    /// Constructs a host number.
    fn from_number(n: f64) -> Self;

    /// Constructs a host string.
    fn from_text(s: String) -> Self;

    /// Constructs a host list.
    fn from_list(items: Vec<Self>) -> Self;

    /// Constructs a host hash.
    fn from_entries(entries: Vec<(String, Self)>) -> Self;
}

/// A plain dynamic value.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DynValue {
    /// Absent.
    #[default]
    Null,
    /// Double-precision number.
    Number(f64),
    /// Text.
    String(String),
    /// List of values.
    List(Vec<DynValue>),
    /// Name-keyed map.
    Hash(BTreeMap<String, DynValue>),
}

impl HostValue for DynValue {
    fn host_kind(&self) -> HostKind {
        match self {
            Self::Null => HostKind::Null,
            Self::Number(_) => HostKind::Number,
            Self::String(_) => HostKind::String,
            Self::List(_) => HostKind::List,
            Self::Hash(_) => HostKind::Hash,
        }
    }

    fn to_number(&self) -> f64 {
        match self {
            Self::Number(n) => *n,
            Self::String(s) => s.trim().parse().unwrap_or(0.0),
            _ => 0.0,
        }
    }

    fn to_text(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::Number(n) => n.to_string(),
            Self::String(s) => s.clone(),
            Self::List(items) => format!("<list {}>", items.len()),
            Self::Hash(map) => format!("<hash {}>", map.len()),
        }
    }

    fn len(&self) -> usize {
        match self {
            Self::List(items) => items.len(),
            _ => 0,
        }
    }

    fn item(&self, index: usize) -> Option<&Self> {
        match self {
            Self::List(items) => items.get(index),
            _ => None,
        }
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&str, &Self)> + '_> {
        match self {
            Self::Hash(map) => Box::new(map.iter().map(|(k, v)| (k.as_str(), v))),
            _ => Box::new(std::iter::empty()),
        }
    }

    fn null() -> Self {
        Self::Null
    }

    fn from_number(n: f64) -> Self {
        Self::Number(n)
    }

    fn from_text(s: String) -> Self {
        Self::String(s)
    }

    fn from_list(items: Vec<Self>) -> Self {
        Self::List(items)
    }

    fn from_entries(entries: Vec<(String, Self)>) -> Self {
        Self::Hash(entries.into_iter().collect())
    }
}

#[allow(clippy::cast_possible_truncation)]
fn cell<H: HostValue>(h: &H) -> f32 {
    h.to_number() as f32
}

fn host_list<H: HostValue>(cells: &[f32]) -> H {
    H::from_list(cells.iter().map(|x| H::from_number(f64::from(*x))).collect())
}

impl Value {
    /// Builds a value from a host value, taking whatever kind it implies.
    #[must_use]
    pub fn from_host<H: HostValue>(host: &H) -> Self {
        let mut v = Self::Invalid;
        v.read_host(host, true);
        v
    }

    /// Updates this value from a host value.
    ///
    /// Returns true if the value was updated. When `change_type` is false
    /// and the host value does not fit the current kind, nothing changes.
    pub fn read_host<H: HostValue>(&mut self, host: &H, change_type: bool) -> bool {
        let kind = self.kind();
        match host.host_kind() {
            HostKind::Null => false,
            HostKind::Number => {
                if kind == Kind::Number || change_type {
                    self.set_number(cell(host));
                    true
                } else {
                    false
                }
            }
            HostKind::String => {
                if kind == Kind::String || change_type {
                    self.set_string(host.to_text());
                    true
                } else {
                    false
                }
            }
            HostKind::List => self.read_host_list(host, change_type),
            HostKind::Hash => {
                if kind != Kind::Table && !change_type {
                    return false;
                }
                let mut table = Table::new();
                for (name, item) in host.entries() {
                    // a fresh entry has no kind to preserve
                    table.create(name).read_host(item, true);
                }
                *self = Self::Table(table);
                true
            }
        }
    }

    fn read_host_list<H: HostValue>(&mut self, host: &H, change_type: bool) -> bool {
        let kind = self.kind();
        let rows = host.len();
        let cols = (0..rows)
            .filter_map(|i| host.item(i))
            .filter(|row| row.host_kind() == HostKind::List)
            .map(|row| row.len())
            .max()
            .unwrap_or(0);

        if rows == 0 {
            return false;
        }

        if cols == 0 {
            let data: Vec<f32> = (0..rows)
                .map(|i| host.item(i).map_or(0.0, cell))
                .collect();
            if kind == Kind::Array || change_type {
                *self = Self::Array(data);
                true
            } else if kind == Kind::Matrix {
                *self = Self::Matrix(Matrix::column(&data));
                true
            } else {
                false
            }
        } else if kind == Kind::Matrix || change_type {
            let mut m = Matrix::filled(rows, cols, 0.0);
            for r in 0..rows {
                let Some(row) = host.item(r) else { continue };
                if row.host_kind() != HostKind::List {
                    continue;
                }
                for c in 0..row.len() {
                    if let Some(x) = row.item(c) {
                        m.set(r, c, cell(x));
                    }
                }
            }
            *self = Self::Matrix(m);
            true
        } else {
            false
        }
    }

    /// Projects this value onto the host value representation.
    #[must_use]
    pub fn to_host<H: HostValue>(&self) -> H {
        match self {
            Self::Invalid => H::null(),
            Self::Number(n) => H::from_number(f64::from(*n)),
            Self::String(s) => H::from_text(s.clone()),
            Self::Array(a) => host_list::<H>(a),
            Self::Matrix(m) => H::from_list(m.iter_rows().map(host_list::<H>).collect()),
            Self::Table(t) => H::from_entries(
                t.iter()
                    .map(|(name, v)| (name.to_owned(), v.to_host()))
                    .collect(),
            ),
        }
    }
}
