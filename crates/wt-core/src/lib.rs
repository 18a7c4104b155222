//! Core types for Worldtick: the entity store and the tile grid.
//!
//! These are the collaborators that simulation managers read from (and, for
//! tile effects, write to). Nothing in this crate knows about managers; a
//! [`World`] and an [`EntityManager`] can be built by hand or from a
//! [`Scenario`] file.

/// Entity identifiers, typed components, and the component store.
pub mod entity;
/// Error types used throughout the crate.
pub mod error;
/// Serializable scenario descriptions that build a world and its entities.
pub mod scenario;
/// The tile grid and terrain types.
pub mod world;

/// Re-export entity store types.
pub use entity::{ComponentKind, ComponentSet, EntityId, EntityManager};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export scenario types.
pub use scenario::Scenario;
/// Re-export tile grid types.
pub use world::{TileType, World};
