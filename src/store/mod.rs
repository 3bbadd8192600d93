//! Component store: entities plus one sorted table per component kind.
//!
//! Entities are append-only and numbered in creation order, so the entity
//! list is always sorted. Every [`ComponentTable`] is sorted by owner as
//! well, which lets [`World::for_each_with`] visit matching entities with a
//! single forward merge-join over the tables instead of per-entity lookups.
//!
//! - [`entity`] – entity IDs, component kinds and masks
//! - [`table`] – sorted parallel arrays and their forward cursors
//! - [`world`] – the registry, attachment and the merge-join scan

pub mod entity;
pub mod table;
pub mod world;

pub use entity::{ComponentKind, ComponentMask, EntityId};
pub use table::ComponentTable;
pub use world::{Component, Row, World};

use thiserror::Error;

/// Caller mistakes detected while attaching components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("entity {0} does not exist")]
    UnknownEntity(EntityId),
    #[error("entity {entity} already has a {kind:?} component")]
    AlreadyAttached {
        entity: EntityId,
        kind: ComponentKind,
    },
}
