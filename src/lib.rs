//! A minimal character-scanning parser kernel.
//!
//! The kernel scans an in-memory character buffer position by position under
//! a caller-supplied predicate and reports a classified [`ScanOutcome`] that
//! combinators adapt into [`Reply`]s. Three primitive combinators are built
//! on top of it: [`pure`] (always succeeds with a fixed value), [`fail`]
//! (always fails with a message), and [`satisfy`] (consumes a bounded run of
//! characters accepted by a predicate).
//!
//! The buffer is borrowed, never copied: every [`InputRange`] ties itself to
//! the caller-owned `&[char]` for its lifetime, and a single move-only
//! [`ScanState`] is the one authoritative cursor per parse.
//!
//! ```
//! use scankit::{Bounds, InputRange, ScanState, satisfy};
//!
//! let buffer: Vec<char> = "ab3".chars().collect();
//! let letters = satisfy(|ch, _| ch.is_ascii_alphabetic(), "letters", Bounds::at_least(1));
//! let reply = letters.run(ScanState::new(InputRange::new(&buffer)));
//! let matched = reply.result.unwrap();
//! assert_eq!(matched.to_string(), "ab");
//! assert_eq!(reply.state.input().position(), 2);
//! ```

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod combinator;
mod input;
mod reply;
mod scan;


pub use combinator::{Parser, fail, pure, satisfy};
pub use input::InputRange;
pub use reply::{ParseError, Reply, make_reply};
pub use scan::{Bounds, MAX_SCAN, ScanKind, ScanOutcome, ScanState};
