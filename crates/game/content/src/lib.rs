//! Data-driven battle content and its loaders.
//!
//! This crate reads the files a battle is built from:
//! - Item catalogs (RON or JSON, one record per weapon/item/upgrade)
//! - Set definitions (RON)
//! - Combatant loadouts (RON)
//! - Battle configuration (TOML)
//!
//! Content is handed to the engine through `duel-core` types and never
//! changes during a battle.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    CatalogLoader, ConfigLoader, ContentFactory, LoadResult, LoadoutLoader, SetLoader,
};
