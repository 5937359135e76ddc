//! Betting ledger for the gender reveal pool.
//!
//! The ledger is a pure value: an insertion-ordered list of accepted bets
//! plus a one-shot reveal latch. Pools, odds, and player counts are always
//! derived from the bet list, never stored alongside it, so they cannot
//! drift. Every mutation returns a fresh [`LedgerState`] and leaves the
//! original untouched; callers decide where the value lives (see the
//! `stork-store` crate).

mod bet;
mod error;
mod odds;
mod outcome;
mod state;

pub use bet::Bet;
pub use bet::Wager;
pub use error::LedgerError;
pub use error::Result;
pub use odds::compute as compute_odds;
pub use outcome::Outcome;
pub use state::LedgerState;
