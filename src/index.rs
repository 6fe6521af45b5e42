//! Type-level indices locating a case within a catalog.
//!
//! These types never exist at runtime. They only guide inference when
//! [`Resolve`](crate::catalog::Resolve) walks a catalog looking for a case
//! marker: `Here` points at the head, `There<I>` skips it.

use core::marker::PhantomData;

/// The index of the catalog head.
pub struct Here;

/// The index one position past `I`.
pub struct There<I>(PhantomData<I>);

/// Well-formed type-level indices.
pub trait Index {}

impl Index for Here {}
impl<I: Index> Index for There<I> {}
