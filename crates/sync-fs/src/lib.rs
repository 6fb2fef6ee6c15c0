//! Filesystem layer for sync-manager
//!
//! Provides the two filesystem-facing building blocks of the engine:
//!
//! - **Listing**: recursive directory walks with extension and glob
//!   filtering, producing one [`FileRecord`] per discovered file.
//! - **Fingerprinting**: size, modification time, and SHA-256 content hash
//!   in the workspace-canonical `sha256:<hex>` form.

pub mod error;
pub mod fingerprint;
pub mod listing;

pub use error::{Error, Result};
pub use fingerprint::{Fingerprint, fingerprint, hash_bytes, hash_file};
pub use listing::{FileRecord, ListingOptions, list_files};
