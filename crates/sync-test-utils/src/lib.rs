//! Shared test utilities for the sync-manager workspace
//!
//! [`TestTree`] builds throwaway directory trees for sync scenarios and
//! [`MockStore`] scripts per-key store behavior without touching a real
//! destination.

pub mod store;
pub mod tree;

pub use store::MockStore;
pub use tree::TestTree;
