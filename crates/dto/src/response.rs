use stork_core::Millis;
use stork_core::Odds;
use stork_core::Tokens;
use stork_core::Unique;
use stork_ledger::Bet;
use stork_ledger::LedgerState;
use stork_ledger::Outcome;
use serde::Deserialize;
use serde::Serialize;

/// Full ledger snapshot returned by `GET /bets` and successful mutations.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiState {
    pub bets: Vec<ApiBet>,
    pub boy_pool: Tokens,
    pub girl_pool: Tokens,
    pub boy_coefficient: Odds,
    pub girl_coefficient: Odds,
    pub gender_revealed: bool,
    pub revealed_gender: Option<Outcome>,
    pub total_players: usize,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiBet {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub gender: Outcome,
    pub amount: Tokens,
    pub timestamp: Millis,
    pub odds: Odds,
}

impl From<&LedgerState> for ApiState {
    fn from(state: &LedgerState) -> Self {
        let (boy_coefficient, girl_coefficient) = state.odds();
        Self {
            bets: state.bets().iter().map(ApiBet::from).collect(),
            boy_pool: state.pool(Outcome::Boy),
            girl_pool: state.pool(Outcome::Girl),
            boy_coefficient,
            girl_coefficient,
            gender_revealed: state.revealed().is_some(),
            revealed_gender: state.revealed(),
            total_players: state.players(),
        }
    }
}

impl From<&Bet> for ApiBet {
    fn from(bet: &Bet) -> Self {
        Self {
            id: bet.id().to_string(),
            user_id: bet.user().to_string(),
            user_name: bet.name().to_string(),
            gender: bet.outcome(),
            amount: bet.amount(),
            timestamp: bet.timestamp(),
            odds: bet.odds(),
        }
    }
}

/// `GET /reveal` payload.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevealStatus {
    pub gender_revealed: bool,
    pub revealed_gender: Option<Outcome>,
}

impl From<&LedgerState> for RevealStatus {
    fn from(state: &LedgerState) -> Self {
        Self {
            gender_revealed: state.revealed().is_some(),
            revealed_gender: state.revealed(),
        }
    }
}

/// `POST /reset` payload.
#[derive(Debug, Serialize, Deserialize)]
pub struct ResetResponse {
    pub success: bool,
    pub message: String,
    pub state: ApiState,
}

/// Per-user payout breakdown for `GET /winnings/{userId}`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WinningsReport {
    pub gender_revealed: bool,
    pub revealed_gender: Option<Outcome>,
    pub winnings: Vec<WinningEntry>,
    pub total: Tokens,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WinningEntry {
    pub id: String,
    pub gender: Outcome,
    pub amount: Tokens,
    pub won: bool,
    pub payout: Tokens,
}

/// Structured error body: `{"error": "..."}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

impl ApiError {
    pub fn new(message: &str) -> Self {
        Self {
            error: message.to_string(),
        }
    }
}
