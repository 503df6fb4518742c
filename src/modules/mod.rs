//! Modules layer - Infrastructure components for external integrations
//!
//! Contains adapters for the object storage service.

pub mod storage;
