//! Thin wrappers over the hosted backend's storage REST endpoints.
//!
//! Docs:
//! https://supabase.com/docs/reference/api/storage

pub mod storage;

pub use storage::{ListObjectsRequest, StorageObject, list_objects, public_object_url};
