//! The forced-access failure.
//!
//! This is the only runtime error in the crate. Malformed catalogs and
//! duplicate dispatch registrations have no runtime representation: both
//! fail to compile.

use core::fmt;

use thiserror::Error;

/// Returned by [`force_as_case`](crate::AsEnum::force_as_case) when the
/// requested case differs from the one the value holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("requested case {requested:?} on a value holding {actual:?}")]
pub struct InvalidCase<E: fmt::Debug> {
    /// The case the caller asked for.
    pub requested: E,
    /// The case the value actually holds.
    pub actual: E,
}
