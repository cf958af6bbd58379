//! Parser replies and the surfaced error type.

use alloc::string::String;

use thiserror::Error;

use crate::scan::{ScanKind, ScanOutcome, ScanState};

/// Failure produced by running a parser.
///
/// Scan-derived variants pair the combinator's configured `expected` text
/// with the specific [`ScanKind`], so neither is lost in the surfaced
/// message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A parser's own failure message, verbatim (see [`fail`](crate::fail)).
    #[error("{0}")]
    Message(String),
    /// The remaining input was too short to reach the scan minimum.
    #[error("{expected}: unexpected end of input")]
    EndOfStream {
        /// What the failing combinator was configured to expect.
        expected: String,
    },
    /// End of input after a partial match.
    #[error("{expected}: unexpected end of input after a partial match")]
    EndOfStreamAfterConsumption {
        /// What the failing combinator was configured to expect.
        expected: String,
    },
    /// The predicate rejected the first character.
    #[error("{expected}: predicate rejected input")]
    SatisfyFailed {
        /// What the failing combinator was configured to expect.
        expected: String,
    },
    /// The predicate rejected after a partial match.
    #[error("{expected}: predicate rejected input after a partial match")]
    SatisfyFailedAfterConsumption {
        /// What the failing combinator was configured to expect.
        expected: String,
    },
}

/// The result of running a parser against a [`ScanState`].
///
/// The state is threaded by value: a reply hands the (possibly advanced)
/// cursor back to the caller together with the produced value or the failure.
/// `Result` enforces that a value and an error are mutually exclusive.
#[derive(Debug)]
pub struct Reply<'buf, T> {
    /// The cursor after the parser ran.
    pub state: ScanState<'buf>,
    /// The produced value, or the failure.
    pub result: Result<T, ParseError>,
}

impl<'buf, T> Reply<'buf, T> {
    /// A success reply carrying `value`.
    #[must_use]
    pub fn ok(state: ScanState<'buf>, value: T) -> Self {
        Self {
            state,
            result: Ok(value),
        }
    }

    /// A failure reply carrying `error`.
    #[must_use]
    pub fn err(state: ScanState<'buf>, error: ParseError) -> Self {
        Self {
            state,
            result: Err(error),
        }
    }

    /// Whether the reply is a success.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    /// Drops the state, keeping only the value-or-error.
    #[must_use]
    pub fn into_result(self) -> Result<T, ParseError> {
        self.result
    }
}

/// Adapts a [`ScanOutcome`] into a [`Reply`].
///
/// On success the value comes from the zero-argument `value` constructor
/// (typically a closure capturing the matched range); every failure kind is
/// paired with the combinator's `expected` text.
pub fn make_reply<'buf, T>(
    state: ScanState<'buf>,
    outcome: &ScanOutcome<'buf>,
    expected: &str,
    value: impl FnOnce() -> T,
) -> Reply<'buf, T> {
    let result = match outcome.kind {
        ScanKind::Success => Ok(value()),
        ScanKind::EndOfStream => Err(ParseError::EndOfStream {
            expected: expected.into(),
        }),
        ScanKind::EndOfStreamAfterConsumption => Err(ParseError::EndOfStreamAfterConsumption {
            expected: expected.into(),
        }),
        ScanKind::SatisfyFailed => Err(ParseError::SatisfyFailed {
            expected: expected.into(),
        }),
        ScanKind::SatisfyFailedAfterConsumption => {
            Err(ParseError::SatisfyFailedAfterConsumption {
                expected: expected.into(),
            })
        }
    };
    Reply { state, result }
}
