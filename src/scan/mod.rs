//! The stateful scan primitive.
//!
//! What it does
//! - [`ScanState`] is the single mutable cursor over one [`InputRange`] for
//!   the duration of a parse. [`advance`](ScanState::advance) walks characters
//!   under a caller-supplied predicate within repetition [`Bounds`] and
//!   reports a classified [`ScanOutcome`].
//! - The predicate receives each character together with its offset relative
//!   to the start of the call, so "nth-character" logic restarts on every
//!   `advance` invocation.
//!
//! Invariants
//! - A failed `advance` is a no-op on the cursor: any characters accepted
//!   before the rejection are given back, and the outcome's range is the
//!   pre-call range. The outcome kind still records whether consumption had
//!   happened before the failure.
//! - One `advance` call examines at most `bounds.max` characters, bounding
//!   the work of a single call to O(max).

use crate::input::InputRange;

/// Default cap on the number of characters a single
/// [`advance`](ScanState::advance) call may examine.
pub const MAX_SCAN: usize = 10_000;

/// Repetition bounds for one scan call.
///
/// `min` is the number of acceptances required for the scan to succeed; `max`
/// caps how many characters are examined. By choice of bounds and predicate a
/// single `advance` expresses "exactly one of class C", "one or more of class
/// C", or "zero or more of class C up to a cap" without a backtracking engine.
///
/// # Default
///
/// `{ min: 0, max: MAX_SCAN }`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    /// Minimum number of acceptances required for success.
    pub min: usize,
    /// Maximum number of characters examined.
    pub max: usize,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            min: 0,
            max: MAX_SCAN,
        }
    }
}

impl Bounds {
    /// At least `min` acceptances, up to the default cap.
    #[must_use]
    pub const fn at_least(min: usize) -> Self {
        Self { min, max: MAX_SCAN }
    }

    /// Exactly `count` acceptances.
    #[must_use]
    pub const fn exactly(count: usize) -> Self {
        Self {
            min: count,
            max: count,
        }
    }

    /// Between `min` and `max` acceptances.
    #[must_use]
    pub const fn between(min: usize, max: usize) -> Self {
        Self { min, max }
    }
}

/// Classification of one scan attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanKind {
    /// The minimum was met; the outcome's range is the matched span.
    Success,
    /// The remaining input was too short to ever reach the minimum. Detected
    /// up front, before any character is examined.
    EndOfStream,
    /// The predicate rejected the first character, before the minimum was met.
    SatisfyFailed,
    /// End of input reached after characters were already accepted. Kept for
    /// classification completeness; `advance` checks the minimum up front and
    /// never produces it.
    EndOfStreamAfterConsumption,
    /// The predicate rejected after at least one acceptance, before the
    /// minimum was met.
    SatisfyFailedAfterConsumption,
}

impl ScanKind {
    /// Whether this kind is [`ScanKind::Success`].
    #[must_use]
    pub fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

/// The result of one [`advance`](ScanState::advance) call.
#[derive(Debug, Clone, Copy)]
pub struct ScanOutcome<'buf> {
    /// How the scan ended.
    pub kind: ScanKind,
    /// The matched span on success; the pre-call range on failure.
    pub range: InputRange<'buf>,
}

impl ScanOutcome<'_> {
    /// Whether the scan succeeded.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.kind.is_success()
    }
}

/// The single mutable cursor over one [`InputRange`].
///
/// Deliberately neither `Clone` nor `Copy`: exactly one live cursor exists
/// per parse, and [`advance`](Self::advance) mutates it in place. A combinator
/// that wants to retry from the same position captures the pre-call
/// [`InputRange`] (which is `Copy`), never the state.
#[derive(Debug)]
pub struct ScanState<'buf> {
    input: InputRange<'buf>,
}

impl<'buf> ScanState<'buf> {
    /// Wraps `input` as the cursor for a new parse.
    #[must_use]
    pub fn new(input: InputRange<'buf>) -> Self {
        Self { input }
    }

    /// The current range, for callers that need to capture it before a scan.
    #[must_use]
    pub fn input(&self) -> InputRange<'buf> {
        self.input
    }

    /// Whether the cursor has reached the end of the buffer.
    #[must_use]
    pub fn at_end(&self) -> bool {
        self.input.is_empty()
    }

    /// Scans forward under `satisfy`, consuming accepted characters.
    ///
    /// If the remainder cannot reach `bounds.min` the scan fails with
    /// [`ScanKind::EndOfStream`] without examining anything. Otherwise up to
    /// `min(bounds.max, remaining)` characters are examined in order; each
    /// acceptance consumes one character. A rejection before `bounds.min`
    /// acceptances fails with [`ScanKind::SatisfyFailed`] (or its
    /// after-consumption variant) and restores the cursor; a rejection at or
    /// past the minimum succeeds with the span matched so far.
    pub fn advance<P>(&mut self, mut satisfy: P, bounds: Bounds) -> ScanOutcome<'buf>
    where
        P: FnMut(char, usize) -> bool,
    {
        if self.input.position() + bounds.min > self.input.total_len() {
            return ScanOutcome {
                kind: ScanKind::EndOfStream,
                range: self.input,
            };
        }

        let start = self.input.position();
        let length = bounds.max.min(self.input.remaining());

        for offset in 0..length {
            if !satisfy(self.input.char_at_cursor(), offset) {
                if offset < bounds.min {
                    // Give back anything consumed so far; the kind keeps the
                    // record of whether consumption happened.
                    self.input.rewind_to(start);
                    let kind = if offset == 0 {
                        ScanKind::SatisfyFailed
                    } else {
                        ScanKind::SatisfyFailedAfterConsumption
                    };
                    return ScanOutcome {
                        kind,
                        range: self.input,
                    };
                }
                return ScanOutcome {
                    kind: ScanKind::Success,
                    range: InputRange::span(self.input.buffer(), start, offset),
                };
            }
            self.input.bump();
        }

        let matched = self.input.position() - start;
        ScanOutcome {
            kind: ScanKind::Success,
            range: InputRange::span(self.input.buffer(), start, matched),
        }
    }

    /// [`advance`](Self::advance) with the matched range discarded.
    pub fn skip<P>(&mut self, satisfy: P, bounds: Bounds) -> ScanKind
    where
        P: FnMut(char, usize) -> bool,
    {
        self.advance(satisfy, bounds).kind
    }
}
