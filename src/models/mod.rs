//! Wire and domain models.
//!
//! Remote payloads are parsed into typed records at the API boundary;
//! everything past that boundary works with owned, immutable snapshots.

pub mod folder;
pub mod permission;

pub use folder::{ContentsEnvelope, FolderEntry, ItemAttributes, RawItem};
pub use permission::{PermissionRecord, PermissionsPayload};
