//! Data-driven character content and loaders.
//!
//! This crate houses the duel's static content and its persistence:
//! - Built-in fighters (data-driven via RON)
//! - Custom fighters (semicolon roster text file)
//! - Game configuration (data-driven via TOML)
//!
//! [`CharacterRegistry`] is always available; the file loaders sit behind the
//! default `loaders` feature.

pub mod registry;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use registry::CharacterRegistry;

#[cfg(feature = "loaders")]
pub use loaders::{
    BuiltinLoader, ConfigLoader, ContentFactory, LoadResult, LoadedRegistry, RosterLoad,
    RosterRecord, RosterStore, SkippedRecord,
};
