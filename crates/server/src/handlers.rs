use stork_core::Unique;
use stork_dto::ApiError;
use stork_dto::ApiState;
use stork_dto::PlaceBet;
use stork_dto::ResetResponse;
use stork_dto::RevealRequest;
use stork_dto::RevealStatus;
use stork_dto::WinningEntry;
use stork_dto::WinningsReport;
use stork_ledger::LedgerError;
use stork_ledger::LedgerState;
use stork_store::MemoryStore;
use stork_store::StateStore;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;

pub async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

pub async fn state(store: web::Data<MemoryStore>) -> impl Responder {
    HttpResponse::Ok().json(ApiState::from(&store.load().await))
}

/// `POST /bets`. The body is taken as raw bytes and parsed here, so both
/// syntax and shape errors map to the wire message "Invalid bet data"
/// instead of a framework 400 that leaks parser internals.
pub async fn place(store: web::Data<MemoryStore>, body: web::Bytes) -> impl Responder {
    let wager = match serde_json::from_slice::<PlaceBet>(&body)
        .map_err(|e| LedgerError::Validation(e.to_string()))
        .and_then(PlaceBet::wager)
    {
        Ok(wager) => wager,
        Err(e) => return failure(e, "Failed to place bet"),
    };
    match store.update(|s| s.place(&wager)).await {
        Ok(next) => {
            log::info!(
                "[ledger] accepted {} bet of {} from {} ({} bets, {} players)",
                wager.outcome,
                wager.amount,
                wager.user,
                next.bets().len(),
                next.players(),
            );
            HttpResponse::Ok().json(ApiState::from(&next))
        }
        Err(e) => failure(e, "Failed to place bet"),
    }
}

pub async fn status(store: web::Data<MemoryStore>) -> impl Responder {
    HttpResponse::Ok().json(RevealStatus::from(&store.load().await))
}

pub async fn reveal(store: web::Data<MemoryStore>, body: web::Bytes) -> impl Responder {
    let outcome = match serde_json::from_slice::<RevealRequest>(&body)
        .map_err(|e| LedgerError::InvalidOutcome(e.to_string()))
        .and_then(RevealRequest::outcome)
    {
        Ok(outcome) => outcome,
        Err(e) => return failure(e, "Failed to reveal gender"),
    };
    match store.update(|s| s.reveal(outcome)).await {
        Ok(next) => {
            log::info!("[ledger] outcome revealed: {}", outcome);
            HttpResponse::Ok().json(ApiState::from(&next))
        }
        Err(e) => failure(e, "Failed to reveal gender"),
    }
}

pub async fn reset(store: web::Data<MemoryStore>) -> impl Responder {
    let fresh = LedgerState::default();
    store.save(fresh.clone()).await;
    log::info!("[ledger] state reset");
    HttpResponse::Ok().json(ResetResponse {
        success: true,
        message: "State reset successfully".to_string(),
        state: ApiState::from(&fresh),
    })
}

/// `GET /winnings/{user_id}`: per-bet payout breakdown for one bettor.
/// Before the reveal every entry reports zero, matching the ledger.
pub async fn winnings(store: web::Data<MemoryStore>, path: web::Path<String>) -> impl Responder {
    let user = path.into_inner();
    let state = store.load().await;
    let revealed = state.revealed();
    let entries: Result<Vec<WinningEntry>, LedgerError> = state
        .bets()
        .iter()
        .filter(|b| b.user() == user)
        .map(|b| {
            state.winnings(b).map(|payout| WinningEntry {
                id: b.id().to_string(),
                gender: b.outcome(),
                amount: b.amount(),
                won: revealed == Some(b.outcome()),
                payout,
            })
        })
        .collect();
    match entries {
        Ok(winnings) => {
            let total = winnings.iter().map(|w| w.payout).sum();
            HttpResponse::Ok().json(WinningsReport {
                gender_revealed: revealed.is_some(),
                revealed_gender: revealed,
                winnings,
                total,
            })
        }
        Err(e) => failure(e, "Failed to compute winnings"),
    }
}

/// Maps ledger errors to the wire-compatible status and message. Anything
/// unexpected collapses to the generic fallback so internals never leak.
fn failure(e: LedgerError, fallback: &str) -> HttpResponse {
    match e {
        LedgerError::Validation(ref detail) => {
            log::debug!("rejected request: {}", detail);
            HttpResponse::BadRequest().json(ApiError::new("Invalid bet data"))
        }
        LedgerError::AlreadyRevealed => {
            HttpResponse::BadRequest().json(ApiError::new("Gender has already been revealed"))
        }
        LedgerError::InvalidOutcome(_) => {
            HttpResponse::BadRequest().json(ApiError::new("Invalid gender"))
        }
        LedgerError::Integrity(ref detail) => {
            log::error!("data integrity failure: {}", detail);
            HttpResponse::InternalServerError().json(ApiError::new(fallback))
        }
    }
}
