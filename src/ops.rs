use std::num::ParseIntError;

use thiserror::Error;

use crate::int_set::IntSet;

/// One step of a `setops` script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add(i64),
    Remove(i64),
    Contains(i64),
    Size,
    Empty,
}

#[derive(Debug, Error)]
pub enum ParseOpError {
    #[error("unknown operation `{0}`")]
    UnknownOp(String),
    #[error("operation `{0}` needs a value, e.g. `{0}:1`")]
    MissingValue(String),
    #[error("bad value in `{token}`")]
    BadValue {
        token: String,
        #[source]
        source: ParseIntError,
    },
}

impl Op {
    /// Parses `add:<n>`, `remove:<n>`, `contains:<n>`, `size` or `empty`.
    pub fn parse(token: &str) -> Result<Op, ParseOpError> {
        let (name, arg) = match token.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (token, None),
        };

        let value = |name: &str| -> Result<i64, ParseOpError> {
            let arg = arg.ok_or_else(|| ParseOpError::MissingValue(name.to_string()))?;
            arg.trim().parse().map_err(|source| ParseOpError::BadValue {
                token: token.to_string(),
                source,
            })
        };

        match name {
            "add" => Ok(Op::Add(value(name)?)),
            "remove" => Ok(Op::Remove(value(name)?)),
            "contains" => Ok(Op::Contains(value(name)?)),
            "size" if arg.is_none() => Ok(Op::Size),
            "empty" if arg.is_none() => Ok(Op::Empty),
            _ => Err(ParseOpError::UnknownOp(token.to_string())),
        }
    }

    /// Runs the op against `set`. Queries return the line to print.
    pub fn apply(&self, set: &mut IntSet) -> Option<String> {
        match *self {
            Op::Add(v) => {
                set.add(v);
                None
            }
            Op::Remove(v) => {
                set.remove(v);
                None
            }
            Op::Contains(v) => Some(set.contains(v).to_string()),
            Op::Size => Some(set.len().to_string()),
            Op::Empty => Some(set.is_empty().to_string()),
        }
    }
}
