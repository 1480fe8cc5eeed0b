//! Health Centre Member System core library.
//!
//! Manages a roster of health-centre members: registration with validated
//! intake, per-member health metrics (blood pressure, weight, age, visits,
//! consultation status), and filtered views for clinical review.
//!
//! # Architecture
//!
//! ```text
//! Menu driver (hc-members-cli)
//!       │ validated intake + accessors
//!       ▼
//! MemberRegistry ── owns records + id counter
//!       │                    │
//!       │ load_all /         │ filters, lookups
//!       │ insert_one         ▼
//!       ▼              clinical review listings
//! MemberStore (Database over SQLite)
//! ```
//!
//! # Core Principle
//!
//! Every mutation goes through the validators in [`models`]; the registry
//! never re-validates and never rolls back. Persistence failures degrade the
//! system to in-memory-only operation instead of crashing it.
//!
//! # Modules
//!
//! - [`models`]: domain types (MemberRecord, Gender, BpCategory) and the
//!   validation/classification rules (Limits, BpThresholds)
//! - [`db`]: SQLite persistence layer
//! - [`registry`]: the in-memory registry, id allocation, and filters

pub mod db;
pub mod models;
pub mod registry;

// Re-export commonly used types
pub use db::Database;
pub use models::{BpCategory, BpThresholds, Gender, InvalidReading, Limits, MemberRecord};
pub use registry::{AddedMember, MemberRegistry, MemberStore, NewMember, StoreError, BASE_ID};
