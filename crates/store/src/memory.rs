use super::StateStore;
use async_trait::async_trait;
use stork_ledger::LedgerState;
use stork_ledger::Result;
use tokio::sync::RwLock;

/// In-process store holding the single ledger value.
///
/// Mutations go through [`MemoryStore::update`], which holds the write lock
/// across load, compute, and store, so concurrent placements serialize
/// instead of overwriting each other. Readers take the read lock and clone
/// a consistent snapshot without blocking behind one another.
pub struct MemoryStore {
    state: RwLock<LedgerState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(LedgerState::default()),
        }
    }

    /// Atomic read-modify-write: applies a pure transition to the current
    /// state and commits the successor, or leaves the state untouched when
    /// the transition fails.
    pub async fn update<F>(&self, transition: F) -> Result<LedgerState>
    where
        F: FnOnce(&LedgerState) -> Result<LedgerState>,
    {
        let mut guard = self.state.write().await;
        let next = transition(&guard)?;
        *guard = next.clone();
        log::debug!("[store] committed state with {} bets", next.bets().len());
        Ok(next)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StateStore for MemoryStore {
    async fn load(&self) -> LedgerState {
        self.state.read().await.clone()
    }
    async fn save(&self, state: LedgerState) {
        *self.state.write().await = state;
    }
}
