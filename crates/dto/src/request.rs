use stork_core::Tokens;
use stork_ledger::LedgerError;
use stork_ledger::Outcome;
use stork_ledger::Wager;
use serde::Deserialize;
use serde::Serialize;

/// Body of `POST /bets`: `{"bet": {...}}`.
///
/// Every field is optional at the serde layer so that presence checks land
/// in [`PlaceBet::wager`] and report `Validation` instead of a framework
/// deserialization error.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PlaceBet {
    #[serde(default)]
    pub bet: Option<BetForm>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BetForm {
    pub user_id: Option<String>,
    pub user_name: Option<String>,
    pub gender: Option<String>,
    pub amount: Option<Tokens>,
}

impl PlaceBet {
    /// Validates field presence and produces a domain wager.
    /// An unknown gender string on this path is malformed bet data, not an
    /// outcome error; only the reveal route reports "Invalid gender".
    pub fn wager(self) -> Result<Wager, LedgerError> {
        let missing = |field: &str| LedgerError::Validation(format!("missing {}", field));
        let form = self.bet.ok_or_else(|| missing("bet"))?;
        let user = form.user_id.ok_or_else(|| missing("userId"))?;
        let name = form.user_name.ok_or_else(|| missing("userName"))?;
        let gender = form.gender.ok_or_else(|| missing("gender"))?;
        let amount = form.amount.ok_or_else(|| missing("amount"))?;
        let outcome = gender
            .parse::<Outcome>()
            .map_err(|_| LedgerError::Validation(format!("unknown gender {}", gender)))?;
        Ok(Wager {
            user,
            name,
            outcome,
            amount,
        })
    }
}

/// Body of `POST /reveal`: `{"gender": "boy" | "girl"}`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RevealRequest {
    #[serde(default)]
    pub gender: Option<String>,
}

impl RevealRequest {
    pub fn outcome(self) -> Result<Outcome, LedgerError> {
        self.gender
            .ok_or_else(|| LedgerError::InvalidOutcome("missing".to_string()))?
            .parse()
    }
}
