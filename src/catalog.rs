//! Catalogs: ordered, non-empty type lists of case markers sharing one
//! enumeration.
//!
//! A catalog is a nested tuple list in declaration order, `(A, (B, (C, ())))`,
//! normally spelled with [`Cases!`](crate::Cases). The impl structure carries
//! the catalog invariants: the empty list is not a catalog, and every member
//! must name the same enumeration as the head.
//!
//! ```compile_fail
//! // the empty list is not a catalog
//! fn catalog<C: asenum::CaseList>() {}
//! catalog::<()>();
//! ```
//!
//! ```compile_fail
//! // cases of two different enumerations cannot share a catalog
//! use asenum::{Assoc, Cases, EnumCase};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! enum Left { A }
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! enum Right { B }
//!
//! struct A;
//! impl EnumCase for A {
//!     type Enum = Left;
//!     type Kind = Assoc<u8>;
//!     const CASE: Left = Left::A;
//! }
//!
//! struct B;
//! impl EnumCase for B {
//!     type Enum = Right;
//!     type Kind = Assoc<u8>;
//!     const CASE: Right = Right::B;
//! }
//!
//! fn catalog<C: asenum::CaseList>() {}
//! catalog::<Cases![A, B]>();
//! ```

use alloc::vec::Vec;

use crate::{
    case::EnumCase,
    index::{Here, Index, There},
};

/// An ordered, non-empty list of case markers forming one union type.
pub trait CaseList {
    /// The discriminant enumeration shared by every case of the catalog.
    type Enum: Copy + Eq;

    /// The number of declared cases.
    const LEN: usize;

    #[doc(hidden)]
    fn push_cases(out: &mut Vec<Self::Enum>);
}

impl<X: EnumCase> CaseList for (X, ()) {
    type Enum = X::Enum;

    const LEN: usize = 1;

    fn push_cases(out: &mut Vec<Self::Enum>) {
        out.push(X::CASE);
    }
}

impl<X: EnumCase, Head, Tail> CaseList for (X, (Head, Tail))
where
    (Head, Tail): CaseList<Enum = X::Enum>,
{
    type Enum = X::Enum;

    const LEN: usize = 1 + <(Head, Tail) as CaseList>::LEN;

    fn push_cases(out: &mut Vec<Self::Enum>) {
        out.push(X::CASE);
        <(Head, Tail)>::push_cases(out);
    }
}

/// Membership of case `X` in a catalog, located by the type-level index `I`.
///
/// `I` is always inferred. An unsatisfied `Resolve` bound is how querying a
/// case outside the catalog fails to compile, and likewise registering a
/// case twice in one dispatch chain:
///
/// ```compile_fail
/// use asenum::cases;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Health { Hurt, Dead }
///
/// cases! {
///     type Status = Health {
///         Hurt => u32,
///     }
/// }
///
/// cases! {
///     type Terminal = Health {
///         Dead,
///     }
/// }
///
/// let status = Status::create(Hurt, 20);
/// status.is_case(Dead); // `Dead` is not a case of `Status`
/// ```
pub trait Resolve<X, I: Index>: CaseList {
    /// The catalog left after removing `X`.
    type Remainder;
}

impl<X: EnumCase, Tail> Resolve<X, Here> for (X, Tail)
where
    (X, Tail): CaseList,
{
    type Remainder = Tail;
}

impl<X, Head, Tail, I: Index> Resolve<X, There<I>> for (Head, Tail)
where
    (Head, Tail): CaseList,
    Tail: Resolve<X, I>,
{
    type Remainder = (Head, <Tail as Resolve<X, I>>::Remainder);
}
