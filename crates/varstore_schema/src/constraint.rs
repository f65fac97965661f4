//! Value constraints written as comma-separated tokens.
//!
//! ```text
//! INTEGER,MIN=0,MAX=24
//! BOOLEAN
//! LENGTH=12
//! ```
//!
//! Numeric constraints apply to every cell of a number, array, or matrix.
//! `LENGTH` applies to arrays only.

use std::fmt;
use std::str::FromStr;

use varstore_foundation::{Error, Kind, Result, Value};

/// One constraint token.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Constraint {
    /// Every cell is a whole number.
    Integer,
    /// Every cell is 0 or 1.
    Boolean,
    /// Every cell is greater than zero.
    Positive,
    /// Every cell is at least this.
    Min(f32),
    /// Every cell is at most this.
    Max(f32),
    /// An array has exactly this many entries.
    Length(usize),
}

impl Constraint {
    #[allow(clippy::float_cmp)]
    fn check_cell(self, x: f32) -> bool {
        match self {
            Self::Integer => x.fract() == 0.0,
            Self::Boolean => x == 0.0 || x == 1.0,
            Self::Positive => x > 0.0,
            Self::Min(min) => x >= min,
            Self::Max(max) => x <= max,
            Self::Length(_) => true,
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => write!(f, "INTEGER"),
            Self::Boolean => write!(f, "BOOLEAN"),
            Self::Positive => write!(f, "POSITIVE"),
            Self::Min(v) => write!(f, "MIN={v}"),
            Self::Max(v) => write!(f, "MAX={v}"),
            Self::Length(n) => write!(f, "LENGTH={n}"),
        }
    }
}

/// A set of constraints a value must satisfy.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Constraints(Vec<Constraint>);

impl Constraints {
    /// No constraints.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Parses a comma-separated token list. `""` and `"None"` parse to no
    /// constraints; keys are case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns `ConstraintViolation` for an unknown token or a bad argument.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("none") {
            return Ok(Self::none());
        }

        let mut out = Vec::new();
        for token in s.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            out.push(parse_token(token)?);
        }
        Ok(Self(out))
    }

    /// Adds a constraint.
    #[must_use]
    pub fn with(mut self, c: Constraint) -> Self {
        self.0.push(c);
        self
    }

    /// Returns true if there are no constraints.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the constraints in order.
    pub fn iter(&self) -> impl Iterator<Item = &Constraint> {
        self.0.iter()
    }

    /// Checks `value` against every constraint. Non-numeric values pass
    /// everything except `LENGTH`.
    ///
    /// # Errors
    ///
    /// Returns `ConstraintViolation` naming `name` and the first failed token.
    pub fn check(&self, name: &str, value: &Value) -> Result<()> {
        for c in &self.0 {
            if let Constraint::Length(n) = *c {
                let len = value.array().len();
                if value.kind() != Kind::Array || len != n {
                    return Err(Error::constraint(
                        name,
                        format!("{c} not satisfied by {} of length {len}", value.kind()),
                    ));
                }
                continue;
            }
            if let Some(x) = value.cells().iter().copied().find(|x| !c.check_cell(*x)) {
                return Err(Error::constraint(name, format!("{c} not satisfied by {x}")));
            }
        }
        Ok(())
    }
}

fn parse_token(token: &str) -> Result<Constraint> {
    let (key, arg) = match token.split_once('=') {
        Some((k, a)) => (k.trim().to_ascii_uppercase(), Some(a.trim())),
        None => (token.to_ascii_uppercase(), None),
    };

    let bad = |what: &str| Error::constraint(token, what.to_owned());
    let number = |a: Option<&str>| -> Result<f32> {
        a.and_then(|a| a.parse::<f32>().ok())
            .ok_or_else(|| bad("expected a numeric argument"))
    };

    match (key.as_str(), arg) {
        ("INTEGER", None) => Ok(Constraint::Integer),
        ("BOOLEAN", None) => Ok(Constraint::Boolean),
        ("POSITIVE", None) => Ok(Constraint::Positive),
        ("MIN", a) => Ok(Constraint::Min(number(a)?)),
        ("MAX", a) => Ok(Constraint::Max(number(a)?)),
        ("LENGTH", a) => a
            .and_then(|a| a.parse::<usize>().ok())
            .map(Constraint::Length)
            .ok_or_else(|| bad("expected a length")),
        _ => Err(bad("unknown constraint")),
    }
}

impl FromStr for Constraints {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Constraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
