//! State store for the betting ledger.
//!
//! Exactly one [`LedgerState`] value exists per deployment. The
//! [`StateStore`] trait is the two-operation contract handlers are written
//! against; [`MemoryStore`] is the in-process implementation. A production
//! deployment that needs durability or multiple instances injects a
//! different implementation behind the same contract.
mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;
use stork_ledger::LedgerState;

/// Two-operation store contract: read a consistent snapshot, replace the
/// whole value. Mutating handlers must not interleave load and save around
/// foreign writes; see [`MemoryStore::update`] for the serialized path.
#[async_trait]
pub trait StateStore: Send + Sync {
    async fn load(&self) -> LedgerState;
    async fn save(&self, state: LedgerState);
}
