//! Chained case analysis: the side-effecting switch and the value-producing
//! map.
//!
//! Both builders carry the list of not-yet-registered cases in their type.
//! Every `if_case` removes the registered case from that remainder through
//! [`Resolve`], so registering a case twice leaves nothing to remove and the
//! chain fails to compile:
//!
//! ```compile_fail
//! use asenum::cases;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! enum Health { Hurt, Dead }
//!
//! cases! {
//!     type Status = Health {
//!         Hurt => u32,
//!         Dead,
//!     }
//! }
//!
//! let status = Status::create(Hurt, 20);
//! status
//!     .do_switch()
//!     .if_case(Hurt, |_: &u32| {})
//!     .if_case(Hurt, |_: &u32| {}); // `Hurt` is already registered
//! ```
//!
//! For [`AsMap`] the remainder also decides the return type of `if_case`:
//! while cases are left the call returns the next builder, and the call that
//! registers the last remaining case returns the mapped value itself.

use core::marker::PhantomData;

use crate::{
    case::{CaseHandler, EnumCase},
    catalog::{CaseList, Resolve},
    index::Index,
    AsEnum,
};

/// The void-returning matcher built by
/// [`do_switch`](crate::AsEnum::do_switch).
///
/// At most one handler runs per chain: the first registered case that matches
/// the value flips the internal handled flag, and everything after it is
/// skipped. A chain may be partial; without [`if_default`](Self::if_default)
/// a non-matching value simply does nothing.
pub struct AsSwitch<'a, C: CaseList, Rem> {
    pub(crate) value: &'a AsEnum<C>,
    pub(crate) handled: bool,
    pub(crate) _remaining: PhantomData<fn() -> Rem>,
}

impl<'a, C: CaseList, Rem> AsSwitch<'a, C, Rem> {
    /// Runs `handler` if no earlier case matched and the value holds case
    /// `X`, then threads the handled state into the rest of the chain.
    pub fn if_case<X, I, F>(
        self,
        _: X,
        handler: F,
    ) -> AsSwitch<'a, C, <Rem as Resolve<X, I>>::Remainder>
    where
        Rem: Resolve<X, I>,
        X: EnumCase<Enum = C::Enum>,
        I: Index,
        F: CaseHandler<X::Kind, ()>,
    {
        let mut handled = self.handled;
        if !handled && self.value.enum_case() == X::CASE {
            handled = true;
            handler.invoke(self.value.erased());
        }
        AsSwitch {
            value: self.value,
            handled,
            _remaining: PhantomData,
        }
    }

    /// Terminates the chain, running `handler` iff no registered case
    /// matched.
    pub fn if_default<F: FnOnce()>(self, handler: F) {
        if !self.handled {
            handler();
        }
    }
}

/// The value-returning mapper built by [`do_map`](crate::AsEnum::do_map).
///
/// The first matching case computes the pending result, exactly once. The
/// chain terminates either through [`if_default`](Self::if_default) or by
/// registering every catalog case, in which case the final
/// [`if_case`](Self::if_case) returns the result directly.
pub struct AsMap<'a, C: CaseList, Rem, R> {
    pub(crate) value: &'a AsEnum<C>,
    pub(crate) result: Option<R>,
    pub(crate) _remaining: PhantomData<fn() -> Rem>,
}

/// Continuation of a map chain after one more case was registered: another
/// [`AsMap`] while cases remain, the plain result once the catalog is
/// exhausted.
pub trait MapNext<'a, C: CaseList, R> {
    /// The next chain state.
    type Output;

    #[doc(hidden)]
    fn resume(value: &'a AsEnum<C>, result: Option<R>) -> Self::Output;
}

impl<'a, C: CaseList, R> MapNext<'a, C, R> for () {
    type Output = R;

    fn resume(_: &'a AsEnum<C>, result: Option<R>) -> R {
        match result {
            Some(result) => result,
            // The value's case is a catalog member and every member was
            // registered, so one handler must have produced the result.
            None => unreachable!("exhaustive map chain produced no result"),
        }
    }
}

impl<'a, C: CaseList + 'a, R, Head, Tail> MapNext<'a, C, R> for (Head, Tail)
where
    (Head, Tail): CaseList<Enum = C::Enum>,
{
    type Output = AsMap<'a, C, (Head, Tail), R>;

    fn resume(value: &'a AsEnum<C>, result: Option<R>) -> Self::Output {
        AsMap {
            value,
            result,
            _remaining: PhantomData,
        }
    }
}

impl<'a, C: CaseList, Rem, R> AsMap<'a, C, Rem, R> {
    /// Computes `handler(…)` as the pending result if no earlier case matched
    /// and the value holds case `X`.
    ///
    /// Returns the next builder, or the result itself when `X` was the last
    /// unregistered case of the catalog.
    pub fn if_case<X, I, F>(
        mut self,
        _: X,
        handler: F,
    ) -> <<Rem as Resolve<X, I>>::Remainder as MapNext<'a, C, R>>::Output
    where
        Rem: Resolve<X, I>,
        X: EnumCase<Enum = C::Enum>,
        I: Index,
        F: CaseHandler<X::Kind, R>,
        <Rem as Resolve<X, I>>::Remainder: MapNext<'a, C, R>,
    {
        if self.result.is_none() && self.value.enum_case() == X::CASE {
            self.result = Some(handler.invoke(self.value.erased()));
        }
        <<Rem as Resolve<X, I>>::Remainder as MapNext<'a, C, R>>::resume(self.value, self.result)
    }

    /// Returns the pending result, or `handler()` if no registered case
    /// matched. Valid at any point in the chain.
    pub fn if_default<F: FnOnce() -> R>(self, handler: F) -> R {
        self.result.unwrap_or_else(handler)
    }
}

#[cfg(test)]
mod tests {
    use alloc::{
        borrow::ToOwned,
        string::{String, ToString},
    };
    use core::cell::Cell;

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

    #[test]
    fn switch_full() {
        let value = TestAsEnum::create(StringOpt1, "test".to_owned());
        let hits = Cell::new(0);

        value
            .do_switch()
            .if_case(StringOpt1, |value: &String| {
                assert_eq!(value, "test");
                hits.set(hits.get() + 1);
            })
            .if_case(VoidOpt2, || panic!("VoidOpt2 must not match"))
            .if_case(Unknown3, |_: &i32| panic!("Unknown3 must not match"))
            .if_default(|| panic!("default must not run"));

        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn switch_partial() {
        let value = TestAsEnum::create(StringOpt1, "test".to_owned());
        let hits = Cell::new(0);

        value
            .do_switch()
            .if_case(StringOpt1, |value: &String| {
                assert_eq!(value, "test");
                hits.set(hits.get() + 1);
            })
            .if_case(VoidOpt2, || panic!("VoidOpt2 must not match"));

        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn switch_skips_everything_once_handled() {
        let value = TestAsEnum::create_void(VoidOpt2);
        let order = Cell::new(0);

        value
            .do_switch()
            .if_case(VoidOpt2, || order.set(1))
            .if_case(StringOpt1, |_: &String| panic!("already handled"))
            .if_case(Unknown3, |_: &i32| panic!("already handled"))
            .if_default(|| panic!("already handled"));

        assert_eq!(order.get(), 1);
    }

    #[test]
    fn switch_default() {
        let value = TestAsEnum::create(StringOpt1, "test".to_owned());
        let hits = Cell::new(0);

        value
            .do_switch()
            .if_case(Unknown3, |_: &i32| panic!("Unknown3 must not match"))
            .if_case(VoidOpt2, || panic!("VoidOpt2 must not match"))
            .if_default(|| hits.set(hits.get() + 1));

        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn map_with_default() {
        let value = TestAsEnum::create(StringOpt1, "test".to_owned());

        let mapped = value
            .do_map::<bool>()
            .if_case(StringOpt1, |value: &String| {
                assert_eq!(value, "test");
                true
            })
            .if_case(VoidOpt2, || false)
            .if_default(|| false);

        assert!(mapped);
    }

    #[test]
    fn map_default_fires_without_match() {
        let value = TestAsEnum::create_void(VoidOpt2);

        let mapped = value
            .do_map::<&str>()
            .if_case(Unknown3, |_: &i32| "unknown")
            .if_default(|| "fallback");

        assert_eq!(mapped, "fallback");
    }

    #[test]
    fn map_all_cases_returns_directly() {
        let value = TestAsEnum::create(StringOpt1, "test".to_owned());

        // The third `if_case` covers the whole catalog, so it yields the
        // mapped value instead of another builder.
        let mapped: bool = value
            .do_map()
            .if_case(Unknown3, |_: &i32| false)
            .if_case(VoidOpt2, || false)
            .if_case(StringOpt1, |value: &String| {
                assert_eq!(value, "test");
                true
            });

        assert!(mapped);
    }

    #[test]
    fn map_keeps_first_result() {
        let value = TestAsEnum::create(Unknown3, -100500);

        let mapped = value
            .do_map::<String>()
            .if_case(Unknown3, |value: &i32| value.to_string())
            .if_case(StringOpt1, |_: &String| panic!("already resolved"))
            .if_case(VoidOpt2, || panic!("already resolved"));

        assert_eq!(mapped, "-100500");
    }
}
