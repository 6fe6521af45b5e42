//! Catalog entries: the association between one discriminant and its payload
//! type.
//!
//! A case is a zero-sized marker type implementing [`EnumCase`]. The marker
//! names one variant of the caller's enumeration (`CASE`) and declares what
//! travels with it (`Kind`): either an associated payload type, [`Assoc<T>`],
//! or nothing at all, [`Unit`]. Markers are ordinary values, so call sites
//! pass them as arguments (`value.is_case(Timeout)`) instead of spelling the
//! discriminant as a type parameter.

use core::{any::Any, marker::PhantomData};

/// The type-erased payload slot shared by every clone of a value.
pub type Erased = dyn Any + Send + Sync;

/// One entry of a catalog: a discriminant paired with its payload kind.
///
/// Usually generated by [`cases!`](crate::cases); hand-written impls work the
/// same way. The `CASE` values of the markers forming one catalog must be
/// pairwise distinct: payload types are resolved by discriminant, so two
/// markers sharing a discriminant under different payload types make every
/// comparison and access on that catalog meaningless. `cases!` cannot emit
/// such a catalog.
///
/// ```rust
/// use asenum::{AsEnum, Assoc, Cases, EnumCase, Unit};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Health {
///     Hurt,
///     Dead,
/// }
///
/// struct Hurt;
/// impl EnumCase for Hurt {
///     type Enum = Health;
///     type Kind = Assoc<u32>;
///     const CASE: Health = Health::Hurt;
/// }
///
/// struct Dead;
/// impl EnumCase for Dead {
///     type Enum = Health;
///     type Kind = Unit;
///     const CASE: Health = Health::Dead;
/// }
///
/// type Status = AsEnum<Cases![Hurt, Dead]>;
/// let status = Status::create(Hurt, 20);
/// assert_eq!(status.get(Hurt), Some(&20));
/// ```
pub trait EnumCase {
    /// The discriminant enumeration this case belongs to.
    type Enum: Copy + Eq;

    /// What the case carries: [`Assoc<T>`] or [`Unit`].
    type Kind: CaseKind;

    /// The discriminant value identifying this case.
    const CASE: Self::Enum;
}

/// Payload kind of a case carrying a value of type `T`.
pub struct Assoc<T>(PhantomData<fn() -> T>);

/// Payload kind of a case carrying nothing.
pub struct Unit;

mod sealed {
    pub trait Sealed {}

    impl<T> Sealed for super::Assoc<T> {}
    impl Sealed for super::Unit {}
}

/// The closed set of payload kinds.
///
/// Payloads live behind a shared [`Arc`](alloc::sync::Arc), so associated
/// types must be `Send + Sync + 'static`.
pub trait CaseKind: sealed::Sealed {}

impl<T: Send + Sync + 'static> CaseKind for Assoc<T> {}
impl CaseKind for Unit {}

/// View of an [`EnumCase`] whose kind is [`Assoc`]: the catalog's
/// discriminant-to-payload-type resolver.
///
/// Void cases do not implement this trait, which is what statically rejects
/// `create`, `get` and `force_as_case` for them.
pub trait AssocCase: EnumCase {
    /// The payload type declared for this case.
    type Payload: Send + Sync + 'static;
}

impl<X, T> AssocCase for X
where
    X: EnumCase<Kind = Assoc<T>>,
    T: Send + Sync + 'static,
{
    type Payload = T;
}

/// View of an [`EnumCase`] whose kind is [`Unit`].
pub trait UnitCase: EnumCase {}

impl<X: EnumCase<Kind = Unit>> UnitCase for X {}

/// A case handler, invoked with `&T` for [`Assoc<T>`] cases and with no
/// arguments for [`Unit`] cases.
pub trait CaseHandler<K: CaseKind, R> {
    #[doc(hidden)]
    fn invoke(self, slot: Option<&Erased>) -> R;
}

impl<T, R, F> CaseHandler<Assoc<T>, R> for F
where
    T: Send + Sync + 'static,
    F: FnOnce(&T) -> R,
{
    fn invoke(self, slot: Option<&Erased>) -> R {
        self(downcast::<T>(slot))
    }
}

impl<R, F> CaseHandler<Unit, R> for F
where
    F: FnOnce() -> R,
{
    fn invoke(self, _slot: Option<&Erased>) -> R {
        self()
    }
}

pub(crate) fn downcast<T: Send + Sync + 'static>(slot: Option<&Erased>) -> &T {
    match slot.and_then(|slot| slot.downcast_ref::<T>()) {
        Some(value) => value,
        None => unreachable!("stored payload does not match the catalog's payload type"),
    }
}
