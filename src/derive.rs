//! Per-kind and per-catalog dispatch behind the relational and formatting
//! impls on [`AsEnum`](crate::AsEnum).
//!
//! The traits mirror the standard library's lattice: `PartialEq` payloads
//! give `==`, `Ord` payloads give the total order, and so on. Each catalog
//! trait recurses through the case list until it reaches the entry whose
//! discriminant matches, then compares the two erased payloads with that
//! case's native comparison. Void cases compare equal by definition.

use core::{cmp::Ordering, fmt};

use crate::{
    case::{downcast, Assoc, CaseKind, EnumCase, Erased, Unit},
    catalog::CaseList,
};

pub trait KindEq: CaseKind {
    fn erased_eq(a: Option<&Erased>, b: Option<&Erased>) -> bool;
}

impl<T: PartialEq + Send + Sync + 'static> KindEq for Assoc<T> {
    fn erased_eq(a: Option<&Erased>, b: Option<&Erased>) -> bool {
        downcast::<T>(a) == downcast::<T>(b)
    }
}

impl KindEq for Unit {
    fn erased_eq(_: Option<&Erased>, _: Option<&Erased>) -> bool {
        true
    }
}

pub trait KindExactEq: KindEq {}

impl<T: Eq + Send + Sync + 'static> KindExactEq for Assoc<T> {}
impl KindExactEq for Unit {}

pub trait KindPartialOrd: KindEq {
    fn erased_partial_cmp(a: Option<&Erased>, b: Option<&Erased>) -> Option<Ordering>;
}

impl<T: PartialOrd + Send + Sync + 'static> KindPartialOrd for Assoc<T> {
    fn erased_partial_cmp(a: Option<&Erased>, b: Option<&Erased>) -> Option<Ordering> {
        downcast::<T>(a).partial_cmp(downcast::<T>(b))
    }
}

impl KindPartialOrd for Unit {
    fn erased_partial_cmp(_: Option<&Erased>, _: Option<&Erased>) -> Option<Ordering> {
        Some(Ordering::Equal)
    }
}

pub trait KindOrd: KindPartialOrd + KindExactEq {
    fn erased_cmp(a: Option<&Erased>, b: Option<&Erased>) -> Ordering;
}

impl<T: Ord + Send + Sync + 'static> KindOrd for Assoc<T> {
    fn erased_cmp(a: Option<&Erased>, b: Option<&Erased>) -> Ordering {
        downcast::<T>(a).cmp(downcast::<T>(b))
    }
}

impl KindOrd for Unit {
    fn erased_cmp(_: Option<&Erased>, _: Option<&Erased>) -> Ordering {
        Ordering::Equal
    }
}

pub trait KindDebug: CaseKind {
    fn erased_fmt(slot: Option<&Erased>, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl<T: fmt::Debug + Send + Sync + 'static> KindDebug for Assoc<T> {
    fn erased_fmt(slot: Option<&Erased>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?})", downcast::<T>(slot))
    }
}

impl KindDebug for Unit {
    fn erased_fmt(_: Option<&Erased>, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}

pub trait CatalogEq: CaseList {
    fn payload_eq(case: Self::Enum, a: Option<&Erased>, b: Option<&Erased>) -> bool;
}

impl<X: EnumCase> CatalogEq for (X, ())
where
    X::Kind: KindEq,
{
    fn payload_eq(case: Self::Enum, a: Option<&Erased>, b: Option<&Erased>) -> bool {
        if case == X::CASE {
            <X::Kind as KindEq>::erased_eq(a, b)
        } else {
            unreachable!("discriminant is not part of the catalog")
        }
    }
}

impl<X: EnumCase, Head, Tail> CatalogEq for (X, (Head, Tail))
where
    X::Kind: KindEq,
    (Head, Tail): CatalogEq<Enum = X::Enum>,
{
    fn payload_eq(case: Self::Enum, a: Option<&Erased>, b: Option<&Erased>) -> bool {
        if case == X::CASE {
            <X::Kind as KindEq>::erased_eq(a, b)
        } else {
            <(Head, Tail)>::payload_eq(case, a, b)
        }
    }
}

pub trait CatalogExactEq: CatalogEq {}

impl<X: EnumCase> CatalogExactEq for (X, ()) where X::Kind: KindExactEq {}

impl<X: EnumCase, Head, Tail> CatalogExactEq for (X, (Head, Tail))
where
    X::Kind: KindExactEq,
    (Head, Tail): CatalogExactEq<Enum = X::Enum>,
{
}

pub trait CatalogPartialOrd: CatalogEq {
    fn payload_partial_cmp(
        case: Self::Enum,
        a: Option<&Erased>,
        b: Option<&Erased>,
    ) -> Option<Ordering>;
}

impl<X: EnumCase> CatalogPartialOrd for (X, ())
where
    X::Kind: KindPartialOrd,
{
    fn payload_partial_cmp(
        case: Self::Enum,
        a: Option<&Erased>,
        b: Option<&Erased>,
    ) -> Option<Ordering> {
        if case == X::CASE {
            <X::Kind as KindPartialOrd>::erased_partial_cmp(a, b)
        } else {
            unreachable!("discriminant is not part of the catalog")
        }
    }
}

impl<X: EnumCase, Head, Tail> CatalogPartialOrd for (X, (Head, Tail))
where
    X::Kind: KindPartialOrd,
    (Head, Tail): CatalogPartialOrd<Enum = X::Enum>,
{
    fn payload_partial_cmp(
        case: Self::Enum,
        a: Option<&Erased>,
        b: Option<&Erased>,
    ) -> Option<Ordering> {
        if case == X::CASE {
            <X::Kind as KindPartialOrd>::erased_partial_cmp(a, b)
        } else {
            <(Head, Tail)>::payload_partial_cmp(case, a, b)
        }
    }
}

pub trait CatalogOrd: CatalogPartialOrd + CatalogExactEq {
    fn payload_cmp(case: Self::Enum, a: Option<&Erased>, b: Option<&Erased>) -> Ordering;
}

impl<X: EnumCase> CatalogOrd for (X, ())
where
    X::Kind: KindOrd,
{
    fn payload_cmp(case: Self::Enum, a: Option<&Erased>, b: Option<&Erased>) -> Ordering {
        if case == X::CASE {
            <X::Kind as KindOrd>::erased_cmp(a, b)
        } else {
            unreachable!("discriminant is not part of the catalog")
        }
    }
}

impl<X: EnumCase, Head, Tail> CatalogOrd for (X, (Head, Tail))
where
    X::Kind: KindOrd,
    (Head, Tail): CatalogOrd<Enum = X::Enum>,
{
    fn payload_cmp(case: Self::Enum, a: Option<&Erased>, b: Option<&Erased>) -> Ordering {
        if case == X::CASE {
            <X::Kind as KindOrd>::erased_cmp(a, b)
        } else {
            <(Head, Tail)>::payload_cmp(case, a, b)
        }
    }
}

pub trait CatalogDebug: CaseList {
    fn payload_fmt(
        case: Self::Enum,
        slot: Option<&Erased>,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result;
}

impl<X: EnumCase> CatalogDebug for (X, ())
where
    X::Kind: KindDebug,
{
    fn payload_fmt(
        case: Self::Enum,
        slot: Option<&Erased>,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        if case == X::CASE {
            <X::Kind as KindDebug>::erased_fmt(slot, f)
        } else {
            unreachable!("discriminant is not part of the catalog")
        }
    }
}

impl<X: EnumCase, Head, Tail> CatalogDebug for (X, (Head, Tail))
where
    X::Kind: KindDebug,
    (Head, Tail): CatalogDebug<Enum = X::Enum>,
{
    fn payload_fmt(
        case: Self::Enum,
        slot: Option<&Erased>,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        if case == X::CASE {
            <X::Kind as KindDebug>::erased_fmt(slot, f)
        } else {
            <(Head, Tail)>::payload_fmt(case, slot, f)
        }
    }
}
