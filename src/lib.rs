pub mod error;
pub mod int_set;
pub mod ops;

use std::env::{self, VarError};

use anyhow::Context;

pub use error::SetError;
pub use int_set::{DEFAULT_CAPACITY, IntSet};

pub const CAPACITY_ENV: &str = "SIMPLE_SET_CAPACITY";

/// Pick the initial capacity using the following priority:
/// 1. Explicit value (the `--capacity` flag)
/// 2. SIMPLE_SET_CAPACITY environment variable
/// 3. DEFAULT_CAPACITY
pub fn resolve_capacity(explicit: Option<usize>) -> anyhow::Result<usize> {
    capacity_from(explicit, env::var(CAPACITY_ENV))
}

fn capacity_from(explicit: Option<usize>, env: Result<String, VarError>) -> anyhow::Result<usize> {
    if let Some(capacity) = explicit {
        return Ok(capacity);
    }

    match env {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} is not a valid capacity: {:?}", CAPACITY_ENV, raw)),
        Err(VarError::NotPresent) => Ok(DEFAULT_CAPACITY),
        Err(err @ VarError::NotUnicode(_)) => {
            Err(err).with_context(|| format!("{} is not a valid capacity", CAPACITY_ENV))
        }
    }
}
