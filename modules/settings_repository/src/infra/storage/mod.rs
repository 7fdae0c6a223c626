//! Storage layer - settings store implementations

pub mod memory;

pub use memory::{InMemoryScopeStores, InMemorySettingsStore};
