//! # LATTICE ECS - Bitmask Entity Registry
//!
//! An in-process registry associating opaque entity handles with
//! caller-defined component values, built for simulation code that asks
//! "every entity with components {A, B, ...}" instead of dispatching on
//! objects.
//!
//! ## Design Philosophy
//!
//! - Entity handles pack a dense index and a generation counter; slots are
//!   recycled oldest-first with a version bump, so stale handles never
//!   alias a live entity
//! - Component presence is one bit per type in a 64-bit mask; queries are
//!   a single mask comparison per slot
//! - Each component type owns a dense, slot-indexed pool behind a
//!   type-erased directory; storage grows by doubling, never moves ids
//! - Contract violations assert in debug builds and cost nothing in
//!   release
//!
//! ## Example
//!
//! ```rust,ignore
//! use lattice_ecs::{Component, Registry};
//!
//! #[derive(Default)]
//! struct Position { x: f32, y: f32 }
//! impl Component for Position {}
//!
//! #[derive(Default)]
//! struct Velocity { dx: f32, dy: f32 }
//! impl Component for Velocity {}
//!
//! let mut registry: Registry = Registry::new();
//! let e = registry.spawn();
//! registry.assign(e, Position { x: 0.0, y: 0.0 });
//! registry.assign(e, Velocity { dx: 1.0, dy: 0.0 });
//!
//! for (entity, (position, velocity)) in registry.view::<(Position, Velocity)>() {
//!     // every live entity owning both, in ascending index order
//! }
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

mod component;
mod entity;
mod pool;
mod registry;
mod table;
mod view;

pub use component::{Component, ComponentId, TypeRegistry, MAX_COMPONENT_TYPES};
pub use entity::{Entity, HandleRepr};
pub use registry::Registry;
pub use view::{View, ViewSet};
