// Copyright 2025 the Sapling Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parsing of comma-separated value lists.
//!
//! A list such as `"1, 2, 3"` becomes the level-order values of a tree. Every
//! token must be a strictly positive base-10 integer; a single bad token
//! rejects the whole input so a tree is never built from a partial list.
//! Empty (or whitespace-only) input is valid and yields no values.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::num::IntErrorKind;

use crate::types::Value;

/// Options for [`parse_values`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum number of values accepted, or `None` for no limit.
    ///
    /// Hosts exposed to untrusted input can use this to bound the size of the
    /// tree that is built and drawn.
    pub max_values: Option<usize>,
}

impl ParseOptions {
    /// Options with no length limit.
    pub const UNBOUNDED: Self = Self { max_values: None };

    /// Options accepting at most `max` values.
    pub const fn with_max_values(max: usize) -> Self {
        Self {
            max_values: Some(max),
        }
    }
}

/// Reasons a value list is rejected.
///
/// `index` is the 0-based position of the offending token.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// A token was empty, e.g. `"1,,2"` or a trailing comma.
    #[error("value {index} is empty")]
    Empty {
        /// Position of the token.
        index: usize,
    },
    /// A token is not an integer.
    #[error("value {index} ({token:?}) is not an integer")]
    NotANumber {
        /// Position of the token.
        index: usize,
        /// The trimmed token.
        token: String,
    },
    /// A token is zero or negative, however large its magnitude.
    #[error("value {index} ({token:?}) is not a positive integer")]
    NotPositive {
        /// Position of the token.
        index: usize,
        /// The trimmed token.
        token: String,
    },
    /// A token is an integer too large to store.
    #[error("value {index} ({token:?}) is too large")]
    OutOfRange {
        /// Position of the token.
        index: usize,
        /// The trimmed token.
        token: String,
    },
    /// More values than [`ParseOptions::max_values`] allows.
    #[error("{count} values exceed the limit of {max}")]
    TooManyValues {
        /// Number of tokens in the input.
        count: usize,
        /// Configured maximum.
        max: usize,
    },
}

/// Parse a comma-separated list of positive integers.
///
/// ```
/// use sapling_heap_tree::{InputError, ParseOptions, parse_values};
///
/// let values = parse_values(" 4, 8 ,15", &ParseOptions::default()).unwrap();
/// assert_eq!(values.iter().map(|v| v.get()).collect::<Vec<_>>(), [4, 8, 15]);
///
/// assert!(parse_values("", &ParseOptions::default()).unwrap().is_empty());
/// assert_eq!(
///     parse_values("0,1", &ParseOptions::default()),
///     Err(InputError::NotPositive { index: 0, token: "0".into() }),
/// );
/// ```
pub fn parse_values(input: &str, options: &ParseOptions) -> Result<Vec<Value>, InputError> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }

    if let Some(max) = options.max_values {
        let count = input.split(',').count();
        if count > max {
            return Err(InputError::TooManyValues { count, max });
        }
    }

    let values = input
        .split(',')
        .enumerate()
        .map(|(index, raw)| parse_token(index, raw.trim()))
        .collect::<Result<Vec<_>, _>>()?;
    tracing::trace!(count = values.len(), "parsed value list");
    Ok(values)
}

fn parse_token(index: usize, token: &str) -> Result<Value, InputError> {
    if token.is_empty() {
        return Err(InputError::Empty { index });
    }
    let wide: i64 = token.parse().map_err(|e: core::num::ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow => InputError::OutOfRange {
            index,
            token: token.to_string(),
        },
        IntErrorKind::NegOverflow => InputError::NotPositive {
            index,
            token: token.to_string(),
        },
        _ => InputError::NotANumber {
            index,
            token: token.to_string(),
        },
    })?;
    if wide <= 0 {
        return Err(InputError::NotPositive {
            index,
            token: token.to_string(),
        });
    }
    u32::try_from(wide)
        .ok()
        .and_then(Value::new)
        .ok_or_else(|| InputError::OutOfRange {
            index,
            token: token.to_string(),
        })
}
