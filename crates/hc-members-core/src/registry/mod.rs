//! In-memory member registry.
//!
//! The registry is the authoritative collection: it owns the records, the
//! id counter, and the load/save boundary to the persistence collaborator.
//! Read and filter operations never touch persistence; they run over the
//! in-memory snapshot in registration order.

use thiserror::Error;
use tracing::{info, warn};

use crate::models::{BpCategory, Gender, MemberRecord};

/// First health-centre number ever allocated.
pub const BASE_ID: u32 = 100_001;

/// Persistence collaborator failures. Neither variant is fatal: the registry
/// degrades to in-memory-only operation instead of propagating.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("member store unavailable: {0}")]
    Unavailable(String),
    #[error("member store write failed: {0}")]
    WriteFailed(String),
}

/// Contract the registry needs from a persistence backend.
pub trait MemberStore {
    /// Load every stored member, in insertion order.
    fn load_all(&self) -> Result<Vec<MemberRecord>, StoreError>;

    /// Durably store one newly registered member.
    fn insert_one(&self, member: &MemberRecord) -> Result<(), StoreError>;
}

/// Validated intake fields for a new registration.
///
/// The intake layer checks these against [`crate::models::Limits`] before
/// calling [`MemberRegistry::add_member`]; the registry does not re-validate.
#[derive(Debug, Clone)]
pub struct NewMember {
    pub forename: String,
    pub surname: String,
    pub gender: Gender,
    pub age: u32,
    pub weight: f64,
    pub address: String,
}

/// Result of a registration. A write failure is non-fatal: the member is
/// kept in memory and the failure surfaced for the caller to report.
#[derive(Debug)]
pub struct AddedMember {
    pub record: MemberRecord,
    pub write_error: Option<StoreError>,
}

/// The authoritative in-memory collection of members.
pub struct MemberRegistry<S> {
    store: S,
    records: Vec<MemberRecord>,
    next_id: u32,
}

impl<S: MemberStore> MemberRegistry<S> {
    /// Load the registry from the store.
    ///
    /// If the store is unavailable the registry starts empty so the system
    /// stays usable offline. The next id is derived from the maximum loaded
    /// id, not the last row, so load order does not matter.
    pub fn open(store: S) -> Self {
        let records = match store.load_all() {
            Ok(records) => {
                info!(count = records.len(), "member store loaded");
                records
            }
            Err(err) => {
                warn!(%err, "starting with empty registry");
                Vec::new()
            }
        };

        let next_id = records
            .iter()
            .filter_map(|m| m.id().parse::<u32>().ok())
            .max()
            .map(|max| max + 1)
            .unwrap_or(BASE_ID);

        Self {
            store,
            records,
            next_id,
        }
    }

    /// Register a new member.
    ///
    /// Allocates the next id, appends the record, and forwards it to the
    /// store. On a write failure the record stays in memory and the error is
    /// returned in [`AddedMember::write_error`]; there is no rollback and no
    /// retry.
    pub fn add_member(&mut self, new: NewMember) -> AddedMember {
        let id = self.next_id.to_string();
        self.next_id += 1;

        let record = MemberRecord::new(
            id,
            new.forename,
            new.surname,
            new.gender,
            new.age,
            new.weight,
            new.address,
        );

        let write_error = self.store.insert_one(&record).err();
        if let Some(err) = &write_error {
            warn!(%err, id = record.id(), "member kept in memory only");
        }

        self.records.push(record.clone());
        AddedMember {
            record,
            write_error,
        }
    }

    /// Look up a member by health-centre number.
    pub fn find_by_id(&self, id: &str) -> Option<&MemberRecord> {
        self.records.iter().find(|m| m.id() == id)
    }

    /// Mutable lookup for per-member operations (visits, readings, updates).
    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut MemberRecord> {
        self.records.iter_mut().find(|m| m.id() == id)
    }

    /// All members, in registration order.
    pub fn members(&self) -> &[MemberRecord] {
        &self.records
    }

    /// Members of the given gender, in registration order.
    pub fn filter_by_gender(&self, gender: Gender) -> Vec<&MemberRecord> {
        self.records
            .iter()
            .filter(|m| m.gender() == gender)
            .collect()
    }

    /// Members classified with high blood pressure.
    pub fn filter_high_blood_pressure(&self) -> Vec<&MemberRecord> {
        self.records
            .iter()
            .filter(|m| m.blood_pressure() == BpCategory::High)
            .collect()
    }

    /// Members still due their yearly face-to-face consultation.
    pub fn filter_due_for_consultation(&self) -> Vec<&MemberRecord> {
        self.records
            .iter()
            .filter(|m| !m.consultation_done())
            .collect()
    }

    /// Members with fewer than `threshold` recorded visits.
    pub fn filter_low_visits(&self, threshold: u32) -> Vec<&MemberRecord> {
        self.records
            .iter()
            .filter(|m| m.visit_tally() < threshold)
            .collect()
    }

    /// Mark every member's consultation as not done. In-memory only: the
    /// store contract has no row-update operation.
    pub fn reset_all_consultations(&mut self) {
        for member in &mut self.records {
            member.set_consultation_done(false);
        }
    }

    /// Total number of registered members.
    pub fn count(&self) -> usize {
        self.records.len()
    }
}
