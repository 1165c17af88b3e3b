use std::str::FromStr;

use anyhow::{Context, Result};

/// Read the n-th positional argument, falling back to `default` when absent.
pub fn arg_or<T>(n: usize, name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    parse_arg(std::env::args().nth(n), name, default)
}

pub fn parse_arg<T>(raw: Option<String>, name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("invalid {} argument '{}'", name, raw)),
        None => Ok(default),
    }
}
