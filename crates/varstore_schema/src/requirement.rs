//! When a variable must be supplied.
//!
//! ```text
//! *          always required
//! ?          optional
//! ?=0.5      optional, defaults to 0.5
//! mode=2     required when `mode` is the number 2
//! ```

use std::fmt;
use std::str::FromStr;

use varstore_foundation::{Error, Kind, Result, Table, Value};

/// A variable's requirement rule.
#[derive(Clone, Debug, PartialEq)]
pub enum Requirement {
    /// Must always be present.
    Always,
    /// May be omitted, optionally seeding a numeric default.
    Optional {
        /// Seeded when the variable is absent.
        default: Option<f32>,
    },
    /// Must be present when another variable holds a given number.
    When {
        /// The variable tested.
        name: String,
        /// The number it must equal.
        equals: f32,
    },
}

impl Default for Requirement {
    fn default() -> Self {
        Self::Optional { default: None }
    }
}

impl Requirement {
    /// Parses a requirement rule. `""` and `"None"` mean optional.
    ///
    /// # Errors
    ///
    /// Returns `ConstraintViolation` for a malformed rule.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        let bad = |what: &str| Error::constraint(s, what.to_owned());

        match s {
            "*" => Ok(Self::Always),
            "" | "?" => Ok(Self::default()),
            _ if s.eq_ignore_ascii_case("none") => Ok(Self::default()),
            _ => {
                let (lhs, rhs) = s
                    .split_once('=')
                    .ok_or_else(|| bad("expected '*', '?', '?=value' or 'name=value'"))?;
                let (lhs, rhs) = (lhs.trim(), rhs.trim());
                let value = rhs
                    .parse::<f32>()
                    .map_err(|_| bad("expected a numeric value"))?;
                match lhs {
                    "?" => Ok(Self::Optional {
                        default: Some(value),
                    }),
                    "" => Err(bad("missing variable name")),
                    name => Ok(Self::When {
                        name: name.to_owned(),
                        equals: value,
                    }),
                }
            }
        }
    }

    /// Returns true if the rule demands a value given the rest of `table`.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_required(&self, table: &Table) -> bool {
        match self {
            Self::Always => true,
            Self::Optional { .. } => false,
            Self::When { name, equals } => table
                .get(name)
                .is_some_and(|v| v.kind() == Kind::Number && v.number() == *equals),
        }
    }

    /// The value to seed when the variable is absent, if any.
    #[must_use]
    pub fn default_value(&self) -> Option<Value> {
        match self {
            Self::Optional { default: Some(d) } => Some(Value::Number(*d)),
            _ => None,
        }
    }
}

impl FromStr for Requirement {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Always => write!(f, "*"),
            Self::Optional { default: None } => write!(f, "?"),
            Self::Optional { default: Some(d) } => write!(f, "?={d}"),
            Self::When { name, equals } => write!(f, "{name}={equals}"),
        }
    }
}
