//! Registry of variable metadata, keyed by name.
//!
//! ```text
//! database: F8 ver count(u32) { name(string) varinfo }* F8
//! ```
//!
//! Names are case-sensitive. The lookup helpers return a sentinel when the
//! name is not registered instead of failing.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::io::{self, Read, Write};
use std::path::Path;

use tracing::debug;
use varstore_codec::{Decode, DecodeError, Encode, Unit, WireReader, WireWriter};
use varstore_foundation::{Kind, Table, Value};

use crate::flags::VarFlags;
use crate::info::{VarInfo, split_comma_labels};
use crate::schema::{FieldSpec, Problem, Violation};

/// Label reported for a name that is not registered.
pub const NOT_FOUND_LABEL: &str = "<not found>";

static NOT_FOUND_VALUE: Value = Value::Invalid;

/// Name-keyed collection of [`VarInfo`] records.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Database {
    entries: BTreeMap<String, VarInfo>,
}

impl Database {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `name`, replacing any existing record.
    ///
    /// `index_labels` is comma-separated; an empty string gives no labels and a
    /// trailing comma adds no empty label.
    #[allow(clippy::too_many_arguments)]
    pub fn add(
        &mut self,
        name: &str,
        var_type: Kind,
        label: &str,
        units: &str,
        group: &str,
        index_labels: &str,
        flags: VarFlags,
        default_value: impl Into<Value>,
    ) -> &mut VarInfo {
        let info = VarInfo {
            name: name.to_owned(),
            var_type,
            label: label.to_owned(),
            units: units.to_owned(),
            group: group.to_owned(),
            index_labels: split_comma_labels(index_labels),
            flags,
            default_value: default_value.into(),
        };
        self.insert(name, info)
    }

    /// Registers a prepared record under `name`, replacing any existing one.
    pub fn insert(&mut self, name: &str, info: VarInfo) -> &mut VarInfo {
        debug!(%name, kind = %info.var_type, "registering variable");
        match self.entries.entry(name.to_owned()) {
            Entry::Occupied(mut e) => {
                e.insert(info);
                e.into_mut()
            }
            Entry::Vacant(e) => e.insert(info),
        }
    }

    /// Removes `name`. Returns false if it was not registered.
    pub fn delete(&mut self, name: &str) -> bool {
        let removed = self.entries.remove(name).is_some();
        if removed {
            debug!(%name, "deleted variable");
        }
        removed
    }

    /// Moves the record at `old` to `new`. The record's own `name` field is
    /// left as it was.
    ///
    /// Returns false, changing nothing, if `old` is absent or `new` is taken.
    pub fn rename(&mut self, old: &str, new: &str) -> bool {
        if self.entries.contains_key(new) {
            return false;
        }
        let Some(info) = self.entries.remove(old) else {
            return false;
        };
        self.entries.insert(new.to_owned(), info);
        debug!(%old, %new, "renamed variable");
        true
    }

    /// The record for `name`.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&VarInfo> {
        self.entries.get(name)
    }

    /// The record for `name`, mutably.
    pub fn lookup_mut(&mut self, name: &str) -> Option<&mut VarInfo> {
        self.entries.get_mut(name)
    }

    /// Returns true if `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Declared kind, or [`Kind::Invalid`].
    #[must_use]
    pub fn var_type(&self, name: &str) -> Kind {
        self.lookup(name).map_or(Kind::Invalid, |i| i.var_type)
    }

    /// Label, or [`NOT_FOUND_LABEL`].
    #[must_use]
    pub fn label(&self, name: &str) -> &str {
        self.lookup(name).map_or(NOT_FOUND_LABEL, |i| i.label.as_str())
    }

    /// Group, or `""`.
    #[must_use]
    pub fn group(&self, name: &str) -> &str {
        self.lookup(name).map_or("", |i| i.group.as_str())
    }

    /// Units, or `""`.
    #[must_use]
    pub fn units(&self, name: &str) -> &str {
        self.lookup(name).map_or("", |i| i.units.as_str())
    }

    /// Index labels, or none.
    #[must_use]
    pub fn index_labels(&self, name: &str) -> &[String] {
        match self.lookup(name) {
            Some(i) => &i.index_labels,
            None => &[],
        }
    }

    /// Flags, or empty.
    #[must_use]
    pub fn flags(&self, name: &str) -> VarFlags {
        self.lookup(name).map_or(VarFlags::empty(), |i| i.flags)
    }

    /// Default value, or an invalid value.
    #[must_use]
    pub fn default_value(&self, name: &str) -> &Value {
        self.lookup(name).map_or(&NOT_FOUND_VALUE, |i| &i.default_value)
    }

    /// All registered names, sorted.
    #[must_use]
    pub fn list_all(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    /// Iterates over `(name, record)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &VarInfo)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every record.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// A table holding each variable's default value. Variables whose
    /// default is invalid are skipped.
    #[must_use]
    pub fn seed_table(&self) -> Table {
        let mut table = Table::new();
        for (name, info) in self.iter() {
            if !info.default_value.is_invalid() {
                table.set(name, &info.default_value);
            }
        }
        table
    }

    /// Checks `table` against the registered kinds and `REQUIRED` flags.
    /// Entries the registry does not know about are reported too.
    #[must_use]
    pub fn check_table(&self, table: &Table) -> Vec<Violation> {
        let mut out: Vec<Violation> = self
            .iter()
            .filter_map(|(name, info)| FieldSpec::from_info(name, info).check(table))
            .collect();
        out.extend(
            table
                .iter()
                .filter(|(name, _)| !self.contains(name))
                .map(|(name, value)| Violation {
                    name: name.to_owned(),
                    problem: Problem::Unregistered(value.kind()),
                }),
        );
        out
    }

    /// Replaces this registry with the one stored at `path`. On failure the
    /// registry is left empty and false is returned.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> bool {
        varstore_codec::load_file(self, path)
    }

    /// Writes this registry to `path`. Returns false on failure.
    pub fn save_file<P: AsRef<Path>>(&self, path: P) -> bool {
        varstore_codec::save_file(self, path)
    }
}

impl<'a> IntoIterator for &'a Database {
    type Item = (&'a String, &'a VarInfo);
    type IntoIter = std::collections::btree_map::Iter<'a, String, VarInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Encode for Database {
    fn encode<W: Write>(&self, w: &mut WireWriter<W>) -> io::Result<()> {
        w.open(Unit::Database)?;
        w.length(self.len())?;
        for (name, info) in self.iter() {
            w.string(name)?;
            info.encode(w)?;
        }
        w.close(Unit::Database)
    }
}

impl Decode for Database {
    /// Duplicate names keep their last occurrence.
    fn decode<R: Read>(r: &mut WireReader<R>) -> Result<Self, DecodeError> {
        r.open(Unit::Database)?;
        let n = r.count()?;
        let mut db = Self::new();
        for _ in 0..n {
            let name = r.string()?;
            let info = VarInfo::decode(r)?;
            db.entries.insert(name, info);
        }
        r.close(Unit::Database)?;
        Ok(db)
    }
}
