//! Storage module for attachment management
//!
//! Provides the local-disk storage client that writes uploaded
//! attachments under timestamp-prefixed names.

mod disk_storage;

pub use disk_storage::{storage_filename, DiskStorage};
