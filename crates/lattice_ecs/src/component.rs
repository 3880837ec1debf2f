//! # Component Types
//!
//! The component marker trait, mask-bit identifiers, and the first-use
//! type-to-bit assignment service.
//!
//! Every component type referenced through a [`TypeRegistry`] receives a
//! stable small integer - its bit position in entity presence masks. Ids are
//! assigned monotonically on first reference and never reused.

use std::any::{type_name, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;
use tracing::debug;

/// Maximum number of distinct component types one [`TypeRegistry`] assigns.
///
/// Presence masks are 64-bit: one bit per component type. Exceeding the
/// ceiling is a programming error, not a recoverable condition.
pub const MAX_COMPONENT_TYPES: usize = 64;

/// Marker trait for component types.
///
/// Components are caller-defined data with no behavior the registry relies
/// on. `Default` is required because pool slots are reset to the default
/// value when a component is unassigned or its entity despawned.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Default)]
/// struct Position {
///     x: f32,
///     y: f32,
/// }
///
/// impl Component for Position {}
/// ```
pub trait Component: Default + Send + Sync + 'static {}

/// Identifier for a component type: its bit position (0-63) in presence
/// masks.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ComponentId(u8);

impl ComponentId {
    /// This id's bit position.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// This id's single-bit presence mask.
    #[inline]
    #[must_use]
    pub const fn bit(self) -> u64 {
        1 << self.0
    }
}

/// Assigns a stable [`ComponentId`] to each component type on first
/// reference.
///
/// Cloning a `TypeRegistry` yields another handle to the same table, so a
/// registry can be shared between [`Registry`](crate::Registry) instances
/// whose component ids must agree. [`TypeRegistry::global`] is the
/// process-wide table every registry uses by default; [`TypeRegistry::new`]
/// creates an isolated table, which keeps tests and independent subsystems
/// from spending each other's 64-type budget.
#[derive(Clone, Default)]
pub struct TypeRegistry {
    ids: Arc<RwLock<HashMap<TypeId, ComponentId>>>,
}

impl TypeRegistry {
    /// Creates an isolated registry with no assignments.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide shared registry.
    #[must_use]
    pub fn global() -> Self {
        static GLOBAL: OnceLock<TypeRegistry> = OnceLock::new();
        GLOBAL.get_or_init(TypeRegistry::new).clone()
    }

    /// Returns `C`'s id, assigning the next free bit on first reference.
    ///
    /// # Panics
    ///
    /// Panics if this registry has already assigned
    /// [`MAX_COMPONENT_TYPES`] distinct component types.
    pub fn id_of<C: 'static>(&self) -> ComponentId {
        let key = TypeId::of::<C>();
        if let Some(&id) = self.ids.read().get(&key) {
            return id;
        }
        let mut ids = self.ids.write();
        let next = ids.len();
        *ids.entry(key).or_insert_with(|| {
            assert!(
                next < MAX_COMPONENT_TYPES,
                "component type ceiling ({MAX_COMPONENT_TYPES}) exceeded"
            );
            debug!(component = type_name::<C>(), id = next, "assigned component id");
            ComponentId(next as u8)
        })
    }

    /// Number of component types assigned so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.read().len()
    }

    /// Checks if no component type has been referenced yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.read().is_empty()
    }
}
