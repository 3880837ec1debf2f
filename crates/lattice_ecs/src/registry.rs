//! # Registry Facade
//!
//! The single front-facing object: entity lifecycle, component assignment,
//! and view construction, composed from the entity table, the pool
//! directory, and the type-to-bit assignment service.

use crate::component::{Component, TypeRegistry};
use crate::entity::{Entity, HandleRepr};
use crate::pool::PoolRegistry;
use crate::table::EntityTable;
use crate::view::{View, ViewSet};

/// The entity registry.
///
/// Owns all entity and component state. Component preconditions (`assign`
/// on an entity that already has the type, `get`/`unassign` on one that
/// does not, operations on dead handles) are caller contract violations:
/// they assert in debug builds and cost nothing in release, matching the
/// zero-overhead design of the hot path. Stale handles are the caller's
/// responsibility; [`Registry::is_alive`] is the explicit probe.
///
/// The handle width is a compile-time choice: `Registry<u32>` (the default)
/// supports 2^16 - 1 entity slots, `Registry<u64>` supports 2^32 - 1.
///
/// # Example
///
/// ```rust,ignore
/// let mut registry: Registry = Registry::new();
/// let player = registry.spawn();
/// registry.assign(player, Position::new(0.0, 0.0, 0.0));
/// registry.assign(player, Health(100));
///
/// for (entity, (position, health)) in registry.view::<(Position, Health)>() {
///     // every entity owning both components, in index order
/// }
/// ```
pub struct Registry<E: HandleRepr = u32> {
    types: TypeRegistry,
    table: EntityTable<E>,
    pools: PoolRegistry,
}

impl<E: HandleRepr> Registry<E> {
    /// Creates a registry using the process-wide shared type table.
    #[must_use]
    pub fn new() -> Self {
        Self::with_types(TypeRegistry::global())
    }

    /// Creates a registry with an injected type table.
    ///
    /// Registries sharing a [`TypeRegistry`] agree on component ids; an
    /// isolated table keeps independent subsystems (and tests) from
    /// spending each other's 64-type budget.
    #[must_use]
    pub fn with_types(types: TypeRegistry) -> Self {
        Self {
            types,
            table: EntityTable::new(),
            pools: PoolRegistry::new(),
        }
    }

    /// Creates a new entity with no components.
    pub fn spawn(&mut self) -> Entity<E> {
        self.table.create()
    }

    /// Destroys an entity and releases every component it held.
    ///
    /// The handle must be live (debug-asserted); afterwards it is
    /// permanently stale.
    pub fn despawn(&mut self, entity: Entity<E>) {
        let index = entity.index();
        self.table.destroy(entity);
        self.pools.release_all(index);
    }

    /// Checks whether `entity` still refers to a live slot.
    #[must_use]
    pub fn is_alive(&self, entity: Entity<E>) -> bool {
        self.table.is_live(entity)
    }

    /// Number of currently live entities.
    #[must_use]
    pub fn alive_count(&self) -> usize {
        self.table.len()
    }

    /// Checks whether the entity currently owns a `C`.
    #[must_use]
    pub fn has<C: Component>(&self, entity: Entity<E>) -> bool {
        let id = self.types.id_of::<C>();
        self.table.mask(entity.index()) & id.bit() != 0
    }

    /// Attaches `value` to the entity and returns the stored reference.
    ///
    /// The entity must be live and must not already own a `C`
    /// (debug-asserted); replacing a component goes through
    /// [`Registry::get_mut`].
    pub fn assign<C: Component>(&mut self, entity: Entity<E>, value: C) -> &C {
        debug_assert!(self.is_alive(entity), "assign on a dead or stale handle");
        debug_assert!(!self.has::<C>(entity), "component already assigned");
        let id = self.types.id_of::<C>();
        *self.table.mask_mut(entity.index()) |= id.bit();
        self.pools.get_or_create::<C>().insert(entity.index(), value)
    }

    /// Detaches the entity's `C` and releases its pool slot.
    ///
    /// The entity must currently own a `C` (debug-asserted).
    pub fn unassign<C: Component>(&mut self, entity: Entity<E>) {
        debug_assert!(self.has::<C>(entity), "unassign of a component not assigned");
        let id = self.types.id_of::<C>();
        *self.table.mask_mut(entity.index()) &= !id.bit();
        if let Some(pool) = self.pools.get_mut::<C>() {
            pool.release(entity.index());
        }
    }

    /// Reference to the entity's `C`.
    ///
    /// The entity must currently own a `C` (debug-asserted). The reference
    /// lives until the component is unassigned or the entity despawned.
    #[must_use]
    pub fn get<C: Component>(&self, entity: Entity<E>) -> &C {
        debug_assert!(self.has::<C>(entity), "get of a component not assigned");
        self.pools
            .get::<C>()
            .expect("assigned component type has a pool")
            .get(entity.index())
    }

    /// Mutable reference to the entity's `C`.
    ///
    /// The entity must currently own a `C` (debug-asserted).
    #[must_use]
    pub fn get_mut<C: Component>(&mut self, entity: Entity<E>) -> &mut C {
        debug_assert!(self.has::<C>(entity), "get of a component not assigned");
        self.pools
            .get_mut::<C>()
            .expect("assigned component type has a pool")
            .get_mut(entity.index())
    }

    /// Builds a view over every entity owning all of `S`'s component types.
    ///
    /// ```rust,ignore
    /// for (entity, (position, velocity)) in registry.view::<(Position, Velocity)>() {
    ///     // ...
    /// }
    /// ```
    #[must_use]
    pub fn view<S: ViewSet>(&self) -> View<'_, E, S> {
        View::new(
            self.table.slots(),
            S::pools(&self.pools),
            S::query_mask(&self.types),
        )
    }

    /// Applies `apply` to every entity owning all of `S`'s component types.
    ///
    /// Sugar over [`Registry::view`]; same traversal order, same
    /// restrictions.
    pub fn for_each<'r, S: ViewSet>(&'r self, mut apply: impl FnMut(Entity<E>, S::Refs<'r>)) {
        for (entity, refs) in self.view::<S>() {
            apply(entity, refs);
        }
    }
}

impl<E: HandleRepr> Default for Registry<E> {
    fn default() -> Self {
        Self::new()
    }
}
