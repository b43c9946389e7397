//! Modules layer - Infrastructure components for external integrations
//!
//! Contains clients and adapters for things outside the process, like
//! attachment storage.

pub mod storage;
