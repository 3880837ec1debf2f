//! # Entity Table
//!
//! The authoritative list of live and retired entity slots. Each slot pairs
//! the handle currently occupying it with a presence mask; retired slots sit
//! on a FIFO free queue until they are reissued with a bumped version.

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::entity::{Entity, HandleRepr};

/// First allocation size for the slot array; component pools use the same
/// doubling policy.
pub(crate) const GROWTH_START: usize = 32;

/// One entity slot.
pub(crate) struct Slot<E: HandleRepr> {
    /// Handle stored in the slot; [`Entity::NULL`] while the slot is dead.
    pub(crate) id: Entity<E>,
    /// Bit `k` set: the entity owns the component type with id `k`.
    pub(crate) mask: u64,
}

/// Dense slot storage plus the recycling free queue.
pub(crate) struct EntityTable<E: HandleRepr> {
    slots: Vec<Slot<E>>,
    free: VecDeque<Entity<E>>,
    /// Dense indices handed out so far; the view traversal bound.
    allocated: usize,
    live: usize,
}

impl<E: HandleRepr> EntityTable<E> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: VecDeque::new(),
            allocated: 0,
            live: 0,
        }
    }

    /// Issues a handle: the oldest retired slot with its version bumped, or
    /// a brand-new dense index at version 0.
    ///
    /// Oldest-first reuse bounds how quickly any one slot's version climbs.
    pub(crate) fn create(&mut self) -> Entity<E> {
        self.live += 1;

        if let Some(retired) = self.free.pop_front() {
            let index = retired.index();
            let handle = retired.with_version(retired.version() + 1);
            let slot = &mut self.slots[index];
            debug_assert!(slot.id.is_null(), "recycled slot is still occupied");
            slot.id = handle;
            slot.mask = 0;
            trace!(index, version = handle.version(), "recycled entity");
            return handle;
        }

        assert!(
            self.allocated < E::INDEX_LIMIT,
            "entity table exhausted: {}-bit handles cap dense indices at {}",
            E::BITS,
            E::INDEX_LIMIT
        );
        if self.allocated >= self.slots.len() {
            let capacity = (self.allocated * 2).max(GROWTH_START);
            debug!(capacity, "grew entity table");
            self.slots.resize_with(capacity, || Slot {
                id: Entity::NULL,
                mask: 0,
            });
        }

        let handle = Entity::from_parts(self.allocated, 0);
        self.slots[self.allocated] = Slot { id: handle, mask: 0 };
        self.allocated += 1;
        trace!(index = handle.index(), "created entity");
        handle
    }

    /// Invalidates the slot and queues the handle for reuse.
    ///
    /// A slot at the version ceiling is retired for good: re-enqueueing it
    /// would wrap the counter and alias a previously issued handle.
    pub(crate) fn destroy(&mut self, entity: Entity<E>) {
        debug_assert!(self.is_live(entity), "destroy of a dead, stale, or foreign handle");
        let slot = &mut self.slots[entity.index()];
        slot.id = Entity::NULL;
        slot.mask = 0;
        self.live -= 1;
        if entity.version() < E::VERSION_LIMIT {
            self.free.push_back(entity);
        }
        trace!(index = entity.index(), "destroyed entity");
    }

    /// Checks whether `entity` currently occupies its slot.
    pub(crate) fn is_live(&self, entity: Entity<E>) -> bool {
        !entity.is_null()
            && self
                .slots
                .get(entity.index())
                .is_some_and(|slot| slot.id == entity)
    }

    pub(crate) fn mask(&self, index: usize) -> u64 {
        debug_assert!(index < self.allocated, "entity index out of range");
        self.slots[index].mask
    }

    pub(crate) fn mask_mut(&mut self, index: usize) -> &mut u64 {
        debug_assert!(index < self.allocated, "entity index out of range");
        &mut self.slots[index].mask
    }

    /// Every slot handed out so far, dead ones included (their masks are
    /// zero, so mask-filtered traversal skips them).
    pub(crate) fn slots(&self) -> &[Slot<E>] {
        &self.slots[..self.allocated]
    }

    pub(crate) fn len(&self) -> usize {
        self.live
    }
}
