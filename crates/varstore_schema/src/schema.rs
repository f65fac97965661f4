//! Field declarations and table validation.
//!
//! A [`Schema`] lists the variables a model reads, with the kind, the
//! constraints, and the requirement rule of each. Validation reports every
//! problem at once rather than stopping at the first.

use std::fmt;

use varstore_foundation::{Error, ErrorContext, Kind, Result, Table};

use crate::access::{self, VarType};
use crate::constraint::Constraints;
use crate::flags::VarFlags;
use crate::info::VarInfo;
use crate::requirement::Requirement;

/// Declaration of one variable.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSpec {
    /// Variable name.
    pub name: String,
    /// Presentation group.
    pub group: String,
    /// Expected kind.
    pub kind: Kind,
    /// Constraints on the value.
    pub constraints: Constraints,
    /// When the value must be supplied.
    pub requirement: Requirement,
}

impl FieldSpec {
    /// An optional, unconstrained field.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: Kind) -> Self {
        Self {
            name: name.into(),
            group: String::new(),
            kind,
            constraints: Constraints::none(),
            requirement: Requirement::default(),
        }
    }

    /// A field declared with textual constraint and requirement rules.
    ///
    /// # Errors
    ///
    /// Returns `ConstraintViolation` if either rule does not parse.
    pub fn parse(
        name: impl Into<String>,
        kind: Kind,
        constraints: &str,
        requirement: &str,
    ) -> Result<Self> {
        Ok(Self::new(name, kind)
            .with_constraints(constraints.parse()?)
            .with_requirement(requirement.parse()?))
    }

    /// A field derived from a registry record. `REQUIRED` maps to
    /// [`Requirement::Always`].
    #[must_use]
    pub fn from_info(name: &str, info: &VarInfo) -> Self {
        let requirement = if info.flags.contains(VarFlags::REQUIRED) {
            Requirement::Always
        } else {
            Requirement::default()
        };
        Self::new(name, info.var_type)
            .in_group(info.group.clone())
            .with_requirement(requirement)
    }

    /// Sets the group.
    #[must_use]
    pub fn in_group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    /// Sets the constraints.
    #[must_use]
    pub fn with_constraints(mut self, constraints: Constraints) -> Self {
        self.constraints = constraints;
        self
    }

    /// Sets the requirement rule.
    #[must_use]
    pub fn with_requirement(mut self, requirement: Requirement) -> Self {
        self.requirement = requirement;
        self
    }

    /// Reads this field from `table`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` or `TypeMismatch` as [`access::get`] does.
    pub fn get<T: VarType>(&self, table: &Table) -> Result<T> {
        access::get(table, &self.name)
    }

    /// Writes this field into `table` after checking kind and constraints.
    /// The table is untouched on error.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if `T` is not stored as this field's kind,
    /// `ConstraintViolation` if the value breaks a constraint.
    pub fn set<T: VarType>(&self, table: &mut Table, value: T) -> Result<()> {
        if T::KIND != self.kind {
            return Err(Error::type_mismatch(self.kind, T::KIND)
                .with_context(ErrorContext::new().with_name(&self.name)));
        }
        let value = value.into_value();
        self.constraints.check(&self.name, &value)?;
        table.set(&self.name, value);
        Ok(())
    }

    /// Problems with this field's entry in `table`, if any.
    #[must_use]
    pub fn check(&self, table: &Table) -> Option<Violation> {
        let problem = match table.get(&self.name) {
            None => self.requirement.is_required(table).then_some(Problem::Missing)?,
            Some(v) if v.kind() != self.kind => Problem::WrongKind {
                expected: self.kind,
                actual: v.kind(),
            },
            Some(v) => match self.constraints.check(&self.name, v) {
                Ok(()) => return None,
                Err(e) => Problem::Constraint(e.kind.to_string()),
            },
        };
        Some(Violation {
            name: self.name.clone(),
            problem,
        })
    }
}

/// What is wrong with one entry.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Problem {
    /// A required entry is absent.
    #[error("missing required value")]
    Missing,

    /// The entry holds the wrong kind.
    #[error("expected {expected}, found {actual}")]
    WrongKind {
        /// Declared kind.
        expected: Kind,
        /// Kind found.
        actual: Kind,
    },

    /// The entry names no registered variable.
    #[error("not a registered variable (holds {0})")]
    Unregistered(Kind),

    /// The entry breaks a constraint.
    #[error("{0}")]
    Constraint(String),
}

/// A problem found while validating a table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Violation {
    /// Entry name.
    pub name: String,
    /// What is wrong.
    pub problem: Problem,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.problem)
    }
}

/// An ordered list of field declarations.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Schema {
    fields: Vec<FieldSpec>,
}

impl Schema {
    /// Creates an empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field.
    #[must_use]
    pub fn with_field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    /// Adds a field in place.
    pub fn push(&mut self, field: FieldSpec) {
        self.fields.push(field);
    }

    /// Returns the field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Iterates over fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter()
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if there are no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Every problem with `table`, in declaration order.
    #[must_use]
    pub fn validate(&self, table: &Table) -> Vec<Violation> {
        self.fields.iter().filter_map(|f| f.check(table)).collect()
    }

    /// A table holding every field's requirement default.
    #[must_use]
    pub fn seed(&self) -> Table {
        let mut table = Table::new();
        for f in &self.fields {
            if let Some(v) = f.requirement.default_value() {
                table.set(&f.name, v);
            }
        }
        table
    }
}
