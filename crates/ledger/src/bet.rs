use crate::Outcome;
use stork_core::ID;
use stork_core::Millis;
use stork_core::Odds;
use stork_core::Tokens;
use stork_core::Unique;

/// Client-supplied bet fields, validated but not yet accepted.
#[derive(Debug, Clone)]
pub struct Wager {
    pub user: String,
    pub name: String,
    pub outcome: Outcome,
    pub amount: Tokens,
}

/// An accepted bet. Immutable once the ledger returns it.
///
/// The server assigns the id and timestamp at acceptance and stamps the bet
/// with the quote for its outcome at that moment, so clients can show the
/// multiplier each bettor saw when they committed.
#[derive(Debug, Clone, PartialEq)]
pub struct Bet {
    id: ID<Self>,
    user: String,
    name: String,
    outcome: Outcome,
    amount: Tokens,
    timestamp: Millis,
    odds: Odds,
}

impl Bet {
    pub(crate) fn accept(wager: &Wager, odds: Odds) -> Self {
        Self {
            id: ID::default(),
            user: wager.user.clone(),
            name: wager.name.clone(),
            outcome: wager.outcome,
            amount: wager.amount,
            timestamp: stork_core::now(),
            odds,
        }
    }
    /// Restamp the quote once pools including this bet are known.
    pub(crate) fn quote(&mut self, odds: Odds) {
        self.odds = odds;
    }
    pub fn user(&self) -> &str {
        &self.user
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
    pub fn amount(&self) -> Tokens {
        self.amount
    }
    pub fn timestamp(&self) -> Millis {
        self.timestamp
    }
    /// Payout multiplier quoted when the bet was accepted.
    pub fn odds(&self) -> Odds {
        self.odds
    }
}

impl Unique for Bet {
    fn id(&self) -> ID<Self> {
        self.id
    }
}
