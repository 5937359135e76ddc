use crate::Bet;
use crate::LedgerError;
use crate::Outcome;
use crate::Result;
use crate::Wager;
use crate::odds;
use std::collections::HashSet;
use stork_core::MAX_WAGER;
use stork_core::Odds;
use stork_core::Tokens;

/// The reveal latch: the fixed outcome plus the closing quotes frozen at the
/// moment betting shut. Payouts read the frozen pair, never a recomputation.
#[derive(Debug, Clone, PartialEq)]
struct Reveal {
    outcome: Outcome,
    closing: (Odds, Odds),
}

/// The whole betting ledger as one value.
///
/// Holds the insertion-ordered bet list and the reveal latch. The latch is an
/// `Option`: `None` while hidden, `Some` once revealed, so a revealed ledger
/// without an outcome is unrepresentable. Pools, odds, and the player count
/// are recomputed from the bet list on demand.
///
/// Mutations (`place`, `reveal`) are pure: they validate against `self` and
/// return the successor state, so the caller can apply them as an atomic
/// read-modify-write against whatever store holds the current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LedgerState {
    bets: Vec<Bet>,
    revealed: Option<Reveal>,
}

impl LedgerState {
    pub fn bets(&self) -> &[Bet] {
        &self.bets
    }
    /// The fixed outcome, or `None` while betting is still open.
    pub fn revealed(&self) -> Option<Outcome> {
        self.revealed.as_ref().map(|r| r.outcome)
    }
    /// Sum of wager amounts placed on one outcome, over the full bet list.
    pub fn pool(&self, outcome: Outcome) -> Tokens {
        Self::pool_over(&self.bets, outcome)
    }
    /// Current quotes for both outcomes, derived from live pools.
    pub fn odds(&self) -> (Odds, Odds) {
        odds::compute(self.pool(Outcome::Boy), self.pool(Outcome::Girl))
    }
    /// Cardinality of the set of distinct bettors.
    pub fn players(&self) -> usize {
        self.bets
            .iter()
            .map(Bet::user)
            .collect::<HashSet<_>>()
            .len()
    }

    /// Accepts a wager and returns the successor ledger.
    ///
    /// Rejects with [`LedgerError::AlreadyRevealed`] once the latch is set
    /// and with [`LedgerError::Validation`] on empty identity fields or an
    /// amount outside `1..=MAX_WAGER` (the cap keeps pool sums well clear
    /// of integer range). Both pools are recomputed over the full bet list
    /// including the newcomer, and the new bet is stamped with the quote
    /// its bettor observes once the placement lands.
    pub fn place(&self, wager: &Wager) -> Result<Self> {
        if self.revealed.is_some() {
            return Err(LedgerError::AlreadyRevealed);
        }
        if wager.user.is_empty() || wager.name.is_empty() {
            return Err(LedgerError::Validation("missing bettor identity".to_string()));
        }
        if wager.amount <= 0 {
            return Err(LedgerError::Validation(format!(
                "non-positive amount {}",
                wager.amount
            )));
        }
        if wager.amount > MAX_WAGER {
            return Err(LedgerError::Validation(format!(
                "amount {} exceeds the {} cap",
                wager.amount, MAX_WAGER
            )));
        }
        let mut bets = self.bets.clone();
        bets.push(Bet::accept(wager, 0.0));
        let boy = Self::pool_over(&bets, Outcome::Boy);
        let girl = Self::pool_over(&bets, Outcome::Girl);
        let (on_boy, on_girl) = odds::compute(boy, girl);
        let quote = match wager.outcome {
            Outcome::Boy => on_boy,
            Outcome::Girl => on_girl,
        };
        if let Some(bet) = bets.last_mut() {
            bet.quote(quote);
        }
        Ok(Self {
            bets,
            revealed: None,
        })
    }

    /// Fixes the outcome and freezes the closing quotes. One-shot: a second
    /// call fails with [`LedgerError::AlreadyRevealed`] whatever the
    /// outcome. Irreversible except by replacing the whole ledger.
    pub fn reveal(&self, outcome: Outcome) -> Result<Self> {
        match self.revealed {
            Some(_) => Err(LedgerError::AlreadyRevealed),
            None => Ok(Self {
                bets: self.bets.clone(),
                revealed: Some(Reveal {
                    outcome,
                    closing: self.odds(),
                }),
            }),
        }
    }

    /// Payout owed to one bet under the revealed outcome.
    ///
    /// Zero before the reveal and for losing bets. Winning bets pay
    /// `round(amount * odds)`, floored at zero, from the closing quote
    /// frozen into the latch. A corrupt frozen quote (possible only through
    /// a defective store implementation) is a data-integrity failure, not
    /// something to recompute around.
    pub fn winnings(&self, bet: &Bet) -> Result<Tokens> {
        let Some(reveal) = &self.revealed else {
            return Ok(0);
        };
        if bet.outcome() != reveal.outcome {
            return Ok(0);
        }
        let odds = match reveal.outcome {
            Outcome::Boy => reveal.closing.0,
            Outcome::Girl => reveal.closing.1,
        };
        if !odds.is_finite() || odds < 1.0 {
            return Err(LedgerError::Integrity(reveal.outcome.to_string()));
        }
        Ok(((bet.amount() as Odds) * odds).round().max(0.0) as Tokens)
    }

    fn pool_over(bets: &[Bet], outcome: Outcome) -> Tokens {
        bets.iter()
            .filter(|b| b.outcome() == outcome)
            .map(Bet::amount)
            .sum()
    }
}
