//! Remote and browser-local collaborator interfaces.
//!
//! The core never talks to a concrete identity or document SDK; it goes
//! through [`DocumentStore`] (remote, authoritative for accounts, wishlists
//! and order history) and [`LocalStore`] (browser-local, cache-only). Both
//! traits are mockable, and in-memory implementations are provided for
//! headless runs and tests.

mod documents;
mod errors;
mod local;

pub use documents::{DocumentStore, MemoryDocumentStore, MockDocumentStore};
pub use errors::{LocalStoreError, RemoteSyncError};
pub use local::{LocalStore, MemoryLocalStore, MockLocalStore};
