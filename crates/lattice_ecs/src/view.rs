//! # Views
//!
//! Mask-filtered, forward-only traversal of the entity table.
//!
//! A view fixes its query mask, its typed pools, and its dense index range
//! when it is built, then lazily yields `(entity, component references)`
//! for every slot whose presence mask is a superset of the query mask, in
//! ascending index order. Because a view holds a shared borrow of the
//! registry, structural mutation during traversal is a compile error rather
//! than a runtime hazard.

use crate::component::{Component, TypeRegistry};
use crate::entity::{Entity, HandleRepr};
use crate::pool::{ComponentPool, PoolRegistry};
use crate::table::Slot;

/// A fixed set of component types a [`View`] requires.
///
/// Implemented for tuples of [`Component`] types up to arity 8; the
/// single-type form is the one-element tuple `(A,)`. The trait cannot be
/// implemented outside this crate.
pub trait ViewSet {
    /// Typed pool references, resolved once when the view is built.
    type Pools<'a>: Copy;
    /// The component references yielded per matching entity.
    type Refs<'a>;

    /// Combined presence mask of every type in the set.
    fn query_mask(types: &TypeRegistry) -> u64;

    /// Resolves every pool in the set; `None` until each type has one,
    /// which also means no entity can match yet.
    fn pools(pools: &PoolRegistry) -> Option<Self::Pools<'_>>;

    /// Fetches the set's references at a matched slot index.
    fn fetch<'a>(pools: Self::Pools<'a>, index: usize) -> Self::Refs<'a>;
}

macro_rules! impl_view_set {
    ($($ty:ident),+) => {
        impl<$($ty: Component),+> ViewSet for ($($ty,)+) {
            type Pools<'a> = ($(&'a ComponentPool<$ty>,)+);
            type Refs<'a> = ($(&'a $ty,)+);

            fn query_mask(types: &TypeRegistry) -> u64 {
                0 $(| types.id_of::<$ty>().bit())+
            }

            fn pools(pools: &PoolRegistry) -> Option<Self::Pools<'_>> {
                Some(($(pools.get::<$ty>()?,)+))
            }

            #[allow(non_snake_case)]
            fn fetch<'a>(pools: Self::Pools<'a>, index: usize) -> Self::Refs<'a> {
                let ($($ty,)+) = pools;
                ($($ty.get(index),)+)
            }
        }
    };
}

impl_view_set!(A);
impl_view_set!(A, B);
impl_view_set!(A, B, C);
impl_view_set!(A, B, C, D);
impl_view_set!(A, B, C, D, E);
impl_view_set!(A, B, C, D, E, F);
impl_view_set!(A, B, C, D, E, F, G);
impl_view_set!(A, B, C, D, E, F, G, H);

/// A lazy, forward-only sequence over every entity owning all of `S`'s
/// component types.
///
/// Built by [`Registry::view`](crate::Registry::view); yields
/// `(Entity, (&T1, ..., &Tn))` in ascending index order. Single-pass: a
/// fresh traversal needs a fresh view.
pub struct View<'r, E: HandleRepr, S: ViewSet> {
    slots: &'r [Slot<E>],
    pools: Option<S::Pools<'r>>,
    mask: u64,
    cursor: usize,
}

impl<'r, E: HandleRepr, S: ViewSet> View<'r, E, S> {
    pub(crate) fn new(slots: &'r [Slot<E>], pools: Option<S::Pools<'r>>, mask: u64) -> Self {
        Self {
            slots,
            pools,
            mask,
            cursor: 0,
        }
    }
}

impl<'r, E: HandleRepr, S: ViewSet> Iterator for View<'r, E, S> {
    type Item = (Entity<E>, S::Refs<'r>);

    fn next(&mut self) -> Option<Self::Item> {
        let pools = self.pools?;
        while self.cursor < self.slots.len() {
            let index = self.cursor;
            self.cursor += 1;
            let slot = &self.slots[index];
            // Dead slots carry a zero mask and fall through here.
            if slot.mask & self.mask == self.mask {
                return Some((slot.id, S::fetch(pools, index)));
            }
        }
        None
    }
}
