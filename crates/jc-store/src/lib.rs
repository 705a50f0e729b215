//! # jc-store
//!
//! The Job Record Store: CRUD and status lifecycle over the Job, Employee
//! and Team collections, with write-through persistence to a durable
//! key-value store (one JSON document per collection).
//!
//! The in-memory state is authoritative; persistence failures are reported
//! and logged but never roll back a mutation.

pub mod backend;
pub mod records;
pub mod seed;

pub use backend::{DurableStore, JsonFileStore, MemoryStore, StoreError, StoreResult};
pub use records::RecordStore;
