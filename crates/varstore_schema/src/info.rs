//! Per-variable metadata records.
//!
//! ```text
//! varinfo: E1 ver name(string) type(u32) label units group
//!          index_labels(string, '|'-joined) flags(u32) default(value) E1
//! ```

use std::io::{self, Read, Write};

use varstore_codec::{Decode, DecodeError, Encode, Unit, WireReader, WireWriter};
use varstore_foundation::{Kind, Value};

use crate::flags::VarFlags;

/// Separator used when index labels are stored as one string.
pub const INDEX_LABEL_SEPARATOR: &str = "|";

/// Metadata describing one named variable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VarInfo {
    /// Name recorded when the variable was added.
    pub name: String,
    /// Kind the variable is expected to hold.
    pub var_type: Kind,
    /// Human-readable label.
    pub label: String,
    /// Units of measure.
    pub units: String,
    /// Grouping used for presentation.
    pub group: String,
    /// Labels for the entries of an array or matrix axis.
    pub index_labels: Vec<String>,
    /// Role flags.
    pub flags: VarFlags,
    /// Value seeded when nothing is supplied.
    pub default_value: Value,
}

impl VarInfo {
    /// Creates a record with empty descriptive fields.
    #[must_use]
    pub fn new(name: impl Into<String>, var_type: Kind) -> Self {
        Self {
            name: name.into(),
            var_type,
            ..Self::default()
        }
    }

    /// Sets the label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Sets the units.
    #[must_use]
    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.units = units.into();
        self
    }

    /// Sets the group.
    #[must_use]
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    /// Sets the index labels.
    #[must_use]
    pub fn with_index_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.index_labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the flags.
    #[must_use]
    pub fn with_flags(mut self, flags: VarFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Sets the default value.
    #[must_use]
    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default_value = value.into();
        self
    }
}

/// Splits a separated label list. An empty string yields no labels.
pub(crate) fn split_labels(s: &str, sep: &str) -> Vec<String> {
    if s.is_empty() {
        Vec::new()
    } else {
        s.split(sep).map(str::to_owned).collect()
    }
}

/// Splits a comma-separated label list, dropping one trailing empty label.
pub(crate) fn split_comma_labels(s: &str) -> Vec<String> {
    let mut labels = split_labels(s, ",");
    if labels.last().is_some_and(String::is_empty) {
        labels.pop();
    }
    labels
}

impl Encode for VarInfo {
    fn encode<W: Write>(&self, w: &mut WireWriter<W>) -> io::Result<()> {
        w.open(Unit::VarInfo)?;
        w.string(&self.name)?;
        w.u32(u32::from(self.var_type.code()))?;
        w.string(&self.label)?;
        w.string(&self.units)?;
        w.string(&self.group)?;
        w.string(&self.index_labels.join(INDEX_LABEL_SEPARATOR))?;
        w.u32(self.flags.bits())?;
        self.default_value.encode(w)?;
        w.close(Unit::VarInfo)
    }
}

impl Decode for VarInfo {
    fn decode<R: Read>(r: &mut WireReader<R>) -> Result<Self, DecodeError> {
        r.open(Unit::VarInfo)?;
        let name = r.string()?;
        let code = r.u32()?;
        let var_type = Kind::from_code(code).ok_or(DecodeError::UnknownKind(code))?;
        let label = r.string()?;
        let units = r.string()?;
        let group = r.string()?;
        let index_labels = split_labels(&r.string()?, INDEX_LABEL_SEPARATOR);
        let flags = VarFlags::from_raw(r.u32()?);
        let default_value = Value::decode(r)?;
        r.close(Unit::VarInfo)?;

        Ok(Self {
            name,
            var_type,
            label,
            units,
            group,
            index_labels,
            flags,
            default_value,
        })
    }
}
