//! Core traits shared by the domain models
//!
//! Record identifiers are free-form strings (`JOB-2024-001`, `emp-…`), so the
//! id type is `String` rather than a numeric key.

use chrono::{DateTime, Utc};

/// Primary key type
pub type Id = String;

/// Trait for entities that have a primary key
pub trait Identifiable {
    fn id(&self) -> &str;
}

/// Trait for entities with timestamps (created_at, updated_at)
pub trait Timestamped {
    fn created_at(&self) -> Option<DateTime<Utc>>;
    fn updated_at(&self) -> Option<DateTime<Utc>>;
}

/// Base trait for all domain entities
pub trait Entity: Identifiable + Send + Sync {
    /// The durable-store collection this entity lives in
    const COLLECTION: &'static str;

    /// Human-readable type name for error messages
    const TYPE_NAME: &'static str;
}
