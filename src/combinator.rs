//! The parser functor and the three primitive combinators.
//!
//! A [`Parser`] is the unit of composition: an opaque, reusable function from
//! a [`ScanState`] to a [`Reply`]. The primitives here construct parsers from
//! simple arguments; anything richer (sequencing, alternation, repetition of
//! whole parsers) belongs in a layer above and composes these without
//! touching the scan kernel.

use alloc::{boxed::Box, string::String};

use crate::{
    input::InputRange,
    reply::{ParseError, Reply, make_reply},
    scan::{Bounds, ScanState},
};

/// An opaque, reusable parser computation.
///
/// A parser owns whatever it captured at construction (a fixed value, a
/// message, a predicate and bounds) and nothing else; it may be run any
/// number of times against different states.
pub struct Parser<'buf, T> {
    run: Box<dyn Fn(ScanState<'buf>) -> Reply<'buf, T> + 'buf>,
}

impl<'buf, T> Parser<'buf, T> {
    /// Wraps a function as a parser.
    pub fn from_fn(run: impl Fn(ScanState<'buf>) -> Reply<'buf, T> + 'buf) -> Self {
        Self { run: Box::new(run) }
    }

    /// Runs the parser, consuming the cursor and handing it back in the
    /// reply.
    #[must_use]
    pub fn run(&self, state: ScanState<'buf>) -> Reply<'buf, T> {
        (self.run)(state)
    }
}

/// A parser that always succeeds with a clone of `value`, consuming nothing.
pub fn pure<'buf, T>(value: T) -> Parser<'buf, T>
where
    T: Clone + 'buf,
{
    Parser::from_fn(move |state| Reply::ok(state, value.clone()))
}

/// A parser that always fails with `message`, consuming nothing.
pub fn fail<'buf, T: 'buf>(message: &str) -> Parser<'buf, T> {
    let message = String::from(message);
    Parser::from_fn(move |state| Reply::err(state, ParseError::Message(message.clone())))
}

/// A parser that consumes a run of characters accepted by `satisfy`, within
/// `bounds`, producing the matched range.
///
/// The predicate receives each character together with its offset relative to
/// the start of the run. On failure the reply's error pairs `expected` with
/// the scan classification; see [`ScanState::advance`] for the boundary and
/// repetition semantics.
pub fn satisfy<'buf, P>(
    satisfy: P,
    expected: &str,
    bounds: Bounds,
) -> Parser<'buf, InputRange<'buf>>
where
    P: Fn(char, usize) -> bool + 'buf,
{
    let expected = String::from(expected);
    Parser::from_fn(move |mut state| {
        let outcome = state.advance(&satisfy, bounds);
        make_reply(state, &outcome, &expected, || outcome.range)
    })
}
