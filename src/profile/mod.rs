//! Per-user medical profiles behind a narrow document-store seam.
//!
//! The production store is Firestore's REST surface; the in-memory store
//! covers local runs without credentials and doubles as the test store.

pub mod firestore;
pub mod routes;
pub mod store;
pub mod types;

pub use firestore::FirestoreStore;
pub use routes::ProfileState;
pub use store::{MemoryStore, ProfileStore, StoreError};
pub use types::{FamilyMember, MedicalProfile};
