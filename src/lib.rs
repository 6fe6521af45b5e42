#![doc = include_str!("../README.md")]
#![no_std]
#![deny(future_incompatible)]
#![deny(rust_2018_idioms)]

extern crate alloc;

use alloc::{sync::Arc, vec::Vec};
use core::{fmt, marker::PhantomData};

pub mod case;
pub mod catalog;
mod derive;
pub mod dispatch;
pub mod error;
pub mod index;
mod macros;

pub use self::{
    case::{Assoc, AssocCase, CaseHandler, CaseKind, EnumCase, Erased, Unit, UnitCase},
    catalog::{CaseList, Resolve},
    dispatch::{AsMap, AsSwitch},
    error::InvalidCase,
};
use self::{case::downcast, index::Index};

/// A value of the union type described by the catalog `C`: one discriminant
/// of the catalog's enumeration plus the payload declared for it.
///
/// Both are fixed at construction. Clones share the payload through an
/// atomically reference-counted slot, so cloning is O(1) and the payload is
/// dropped exactly when the last clone goes away.
pub struct AsEnum<C: CaseList> {
    tag: C::Enum,
    slot: Option<Arc<Erased>>,
    _cases: PhantomData<fn() -> C>,
}

impl<C: CaseList> AsEnum<C> {
    /// Constructs a value of case `X`, moving `value` into the shared slot.
    ///
    /// Only declared cases with an associated payload type are accepted;
    /// the payload must have that exact type.
    ///
    /// ```rust
    /// use asenum::cases;
    ///
    /// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    /// enum Health {
    ///     Hurt,
    ///     Dead,
    /// }
    ///
    /// cases! {
    ///     type Status = Health {
    ///         Hurt => u32,
    ///         Dead,
    ///     }
    /// }
    ///
    /// let status = Status::create(Hurt, 20);
    /// assert_eq!(status.enum_case(), Health::Hurt);
    /// ```
    ///
    /// A payload of any other type is rejected:
    ///
    /// ```compile_fail
    /// # use asenum::cases;
    /// # #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    /// # enum Health { Hurt, Dead }
    /// # cases! {
    /// #     type Status = Health {
    /// #         Hurt => u32,
    /// #         Dead,
    /// #     }
    /// # }
    /// let status = Status::create(Hurt, "oops"); // `Hurt` carries a `u32`
    /// ```
    pub fn create<X, I>(_: X, value: X::Payload) -> Self
    where
        C: Resolve<X, I>,
        X: AssocCase<Enum = C::Enum>,
        I: Index,
    {
        AsEnum {
            tag: X::CASE,
            slot: Some(Arc::new(value)),
            _cases: PhantomData,
        }
    }

    /// Constructs a value of the void case `X`. No payload is allocated.
    pub fn create_void<X, I>(_: X) -> Self
    where
        C: Resolve<X, I>,
        X: UnitCase<Enum = C::Enum>,
        I: Index,
    {
        AsEnum {
            tag: X::CASE,
            slot: None,
            _cases: PhantomData,
        }
    }

    /// Every declared discriminant, in catalog declaration order.
    pub fn all_cases() -> Vec<C::Enum> {
        let mut cases = Vec::with_capacity(C::LEN);
        C::push_cases(&mut cases);
        cases
    }

    /// The discriminant this value holds.
    pub fn enum_case(&self) -> C::Enum {
        self.tag
    }

    /// Whether this value holds case `X`.
    pub fn is_case<X, I>(&self, _: X) -> bool
    where
        C: Resolve<X, I>,
        X: EnumCase<Enum = C::Enum>,
        I: Index,
    {
        self.tag == X::CASE
    }

    /// Runs `handler` iff this value holds case `X`, and reports the match.
    ///
    /// The handler receives `&Payload` for associated cases and no arguments
    /// for void cases. This is the primary safe-access path: it never fails,
    /// a mismatch is just `false`.
    pub fn if_case<X, I, F>(&self, case: X, handler: F) -> bool
    where
        C: Resolve<X, I>,
        X: EnumCase<Enum = C::Enum>,
        I: Index,
        F: CaseHandler<X::Kind, ()>,
    {
        let matched = self.is_case(case);
        if matched {
            handler.invoke(self.erased());
        }
        matched
    }

    /// The payload of case `X`, if this value holds it.
    pub fn get<X, I>(&self, _: X) -> Option<&X::Payload>
    where
        C: Resolve<X, I>,
        X: AssocCase<Enum = C::Enum>,
        I: Index,
    {
        (self.tag == X::CASE).then(|| downcast::<X::Payload>(self.erased()))
    }

    /// The payload of case `X`, or [`InvalidCase`] naming the case this value
    /// actually holds.
    ///
    /// Meant for callers that already branched on [`enum_case`]; prefer
    /// [`if_case`] or [`get`] otherwise. Void cases have no payload to force:
    ///
    /// ```compile_fail
    /// # use asenum::cases;
    /// # #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    /// # enum Health { Hurt, Dead }
    /// # cases! {
    /// #     type Status = Health {
    /// #         Hurt => u32,
    /// #         Dead,
    /// #     }
    /// # }
    /// let status = Status::create_void(Dead);
    /// status.force_as_case(Dead); // void case: nothing to extract
    /// ```
    ///
    /// [`enum_case`]: Self::enum_case
    /// [`if_case`]: Self::if_case
    /// [`get`]: Self::get
    pub fn force_as_case<X, I>(&self, case: X) -> Result<&X::Payload, InvalidCase<C::Enum>>
    where
        C: Resolve<X, I>,
        X: AssocCase<Enum = C::Enum>,
        I: Index,
        C::Enum: fmt::Debug,
    {
        match self.get(case) {
            Some(value) => Ok(value),
            None => Err(InvalidCase {
                requested: X::CASE,
                actual: self.tag,
            }),
        }
    }

    /// Starts a void-returning dispatch chain over this value.
    ///
    /// See [`AsSwitch`] for the chain semantics.
    pub fn do_switch(&self) -> AsSwitch<'_, C, C> {
        AsSwitch {
            value: self,
            handled: false,
            _remaining: PhantomData,
        }
    }

    /// Starts a value-returning dispatch chain producing an `R`.
    ///
    /// See [`AsMap`] for the chain semantics.
    pub fn do_map<R>(&self) -> AsMap<'_, C, C, R> {
        AsMap {
            value: self,
            result: None,
            _remaining: PhantomData,
        }
    }

    pub(crate) fn erased(&self) -> Option<&Erased> {
        self.slot.as_deref()
    }
}

impl<C: CaseList> Clone for AsEnum<C> {
    fn clone(&self) -> Self {
        AsEnum {
            tag: self.tag,
            slot: self.slot.clone(),
            _cases: PhantomData,
        }
    }
}

impl<C: derive::CatalogDebug> fmt::Debug for AsEnum<C>
where
    C::Enum: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.tag)?;
        C::payload_fmt(self.tag, self.erased(), f)
    }
}

impl<C: derive::CatalogEq> PartialEq for AsEnum<C> {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag && C::payload_eq(self.tag, self.erased(), other.erased())
    }
}

impl<C: derive::CatalogExactEq> Eq for AsEnum<C> {}

impl<C: derive::CatalogPartialOrd> PartialOrd for AsEnum<C>
where
    C::Enum: Ord,
{
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        match self.tag.cmp(&other.tag) {
            core::cmp::Ordering::Equal => {
                C::payload_partial_cmp(self.tag, self.erased(), other.erased())
            }
            order => Some(order),
        }
    }
}

impl<C: derive::CatalogOrd> Ord for AsEnum<C>
where
    C::Enum: Ord,
{
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.tag
            .cmp(&other.tag)
            .then_with(|| C::payload_cmp(self.tag, self.erased(), other.erased()))
    }
}

#[cfg(test)]
mod tests {
    use alloc::{borrow::ToOwned, format, string::String, vec};
    use core::cell::Cell;

    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum TestEnum {
        StringOpt1,
        VoidOpt2,
        Unknown3,
    }

    crate::cases! {
        type TestAsEnum = TestEnum {
            Unknown3 => i32,
            StringOpt1 => String,
            VoidOpt2,
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum SomeVoidEnum {
        Opt1,
        Opt2,
    }

    crate::cases! {
        type SomeVoidAsEnum = SomeVoidEnum {
            Opt1,
            Opt2,
        }
    }

    fn samples() -> (TestAsEnum, TestAsEnum, TestAsEnum) {
        (
            TestAsEnum::create(StringOpt1, "test".to_owned()),
            TestAsEnum::create_void(VoidOpt2),
            TestAsEnum::create(Unknown3, -100500),
        )
    }

    #[test]
    fn catalog_order_and_resolver() {
        assert_eq!(
            TestAsEnum::all_cases(),
            vec![TestEnum::Unknown3, TestEnum::StringOpt1, TestEnum::VoidOpt2]
        );
        assert_eq!(SomeVoidAsEnum::all_cases().len(), 2);

        // payload types resolved per case
        let _: <Unknown3 as AssocCase>::Payload = 0i32;
        let _: <StringOpt1 as AssocCase>::Payload = String::new();
        fn void<X: UnitCase>() {}
        void::<VoidOpt2>();
    }

    #[test]
    fn is_case() {
        let (value1, value2, value3) = samples();

        assert_eq!(value1.enum_case(), TestEnum::StringOpt1);
        assert_eq!(value2.enum_case(), TestEnum::VoidOpt2);
        assert_eq!(value3.enum_case(), TestEnum::Unknown3);

        assert!(value1.is_case(StringOpt1));
        assert!(!value1.is_case(VoidOpt2));
        assert!(!value1.is_case(Unknown3));

        assert!(!value2.is_case(StringOpt1));
        assert!(value2.is_case(VoidOpt2));
        assert!(!value2.is_case(Unknown3));

        assert!(!value3.is_case(StringOpt1));
        assert!(!value3.is_case(VoidOpt2));
        assert!(value3.is_case(Unknown3));
    }

    #[test]
    fn if_case() {
        let (value1, value2, value3) = samples();
        let hits = Cell::new(0);

        assert!(value1.if_case(StringOpt1, |value: &String| {
            assert_eq!(value, "test");
            hits.set(hits.get() + 1);
        }));
        assert!(!value1.if_case(VoidOpt2, || hits.set(hits.get() + 100)));
        assert!(!value1.if_case(Unknown3, |_: &i32| hits.set(hits.get() + 100)));

        assert!(!value2.if_case(StringOpt1, |_: &String| hits.set(hits.get() + 100)));
        assert!(value2.if_case(VoidOpt2, || hits.set(hits.get() + 1)));

        assert!(value3.if_case(Unknown3, |value: &i32| {
            assert_eq!(*value, -100500);
            hits.set(hits.get() + 1);
        }));

        assert_eq!(hits.get(), 3);
    }

    #[test]
    fn get() {
        let (value1, _, value3) = samples();

        assert_eq!(value1.get(StringOpt1), Some(&"test".to_owned()));
        assert_eq!(value1.get(Unknown3), None);
        assert_eq!(value3.get(Unknown3), Some(&-100500));
    }

    #[test]
    fn force_as_case() {
        let (value1, _, value3) = samples();

        assert_eq!(value1.force_as_case(StringOpt1).unwrap(), "test");
        assert_eq!(
            value1.force_as_case(Unknown3),
            Err(InvalidCase {
                requested: TestEnum::Unknown3,
                actual: TestEnum::StringOpt1,
            })
        );

        assert_eq!(value3.force_as_case(Unknown3), Ok(&-100500));
        assert!(value3.force_as_case(StringOpt1).is_err());

        let error = value1.force_as_case(Unknown3).unwrap_err();
        assert_eq!(
            format!("{error}"),
            "requested case Unknown3 on a value holding StringOpt1"
        );
    }

    #[test]
    fn clone_shares_the_payload() {
        let value = TestAsEnum::create(StringOpt1, "test".to_owned());
        let copy = value.clone();

        assert_eq!(value, copy);
        let original: *const String = value.force_as_case(StringOpt1).unwrap();
        let shared: *const String = copy.force_as_case(StringOpt1).unwrap();
        assert_eq!(original, shared);
    }

    #[test]
    fn equality() {
        let value1 = TestAsEnum::create(StringOpt1, "test".to_owned());
        let value2 = TestAsEnum::create(StringOpt1, "test".to_owned());
        let value3 = TestAsEnum::create(StringOpt1, "test2".to_owned());
        let value4 = TestAsEnum::create_void(VoidOpt2);
        let value5 = TestAsEnum::create(Unknown3, -100500);

        assert_eq!(value1, value1);
        assert_eq!(value1, value2);
        assert_ne!(value1, value3);
        assert_ne!(value1, value4);
        assert_ne!(value1, value5);

        assert_eq!(value4, TestAsEnum::create_void(VoidOpt2));
    }

    #[test]
    fn equality_void() {
        let value1 = SomeVoidAsEnum::create_void(Opt1);
        let value2 = SomeVoidAsEnum::create_void(Opt1);
        let value3 = SomeVoidAsEnum::create_void(Opt2);

        assert_eq!(value1, value1);
        assert_eq!(value1, value2);
        assert_ne!(value1, value3);
    }

    #[test]
    fn compare_same_case() {
        let value1 = TestAsEnum::create(StringOpt1, "test".to_owned());
        let value2 = TestAsEnum::create(StringOpt1, "test".to_owned());
        let value3 = TestAsEnum::create(StringOpt1, "test2".to_owned());

        assert!(value1 < value3);
        assert!(value1 <= value2);
        assert!(value3 > value1);
        assert!(value1 >= value2);
    }

    #[test]
    fn compare_same_case_void() {
        let value1 = SomeVoidAsEnum::create_void(Opt1);
        let value2 = SomeVoidAsEnum::create_void(Opt1);
        let value3 = SomeVoidAsEnum::create_void(Opt2);

        assert!(value1 < value3);
        assert!(value1 <= value2);
        assert!(value3 > value1);
        assert!(value1 >= value2);
    }

    #[test]
    fn compare_random_case() {
        // Ordered by the enumeration itself, not by catalog declaration
        // order: StringOpt1 < VoidOpt2 < Unknown3.
        let value1 = TestAsEnum::create(StringOpt1, "test".to_owned());
        let value2 = TestAsEnum::create_void(VoidOpt2);
        let value3 = TestAsEnum::create(Unknown3, -100500);

        assert!(value1 < value2);
        assert!(value2 < value3);

        assert!(value1 <= value1);
        assert!(value1 <= value2);
        assert!(value1 <= value3);
        assert!(value2 <= value3);

        assert!(value3 > value2);
        assert!(value3 > value1);

        assert!(value3 >= value3);
        assert!(value3 >= value2);
        assert!(value3 >= value1);
        assert!(value2 >= value1);
    }

    #[test]
    fn debug_renders_case_and_payload() {
        let (value1, value2, value3) = samples();

        assert_eq!(format!("{value1:?}"), "StringOpt1(\"test\")");
        assert_eq!(format!("{value2:?}"), "VoidOpt2");
        assert_eq!(format!("{value3:?}"), "Unknown3(-100500)");
    }

    #[test]
    fn values_are_send_and_sync() {
        fn check<T: Send + Sync>() {}
        check::<TestAsEnum>();
        check::<SomeVoidAsEnum>();
    }
}
