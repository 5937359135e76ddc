//! Betting Pool Server
//!
//! Serves the gender-reveal betting API over actix-web: ledger reads,
//! bet placement, the one-shot reveal, the administrative reset, and
//! per-user winnings. All state lives in an injected [`MemoryStore`];
//! the handlers never touch a global.

pub mod handlers;

use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpServer;
use actix_web::middleware::Logger;
use actix_web::web;
use clap::Parser;
use stork_store::MemoryStore;

/// Command-line configuration for the server binary.
#[derive(Debug, Parser)]
#[command(name = "storkpool", about = "Gender reveal betting pool server")]
pub struct Args {
    /// Address to bind, e.g. 127.0.0.1:8080. Falls back to $BIND_ADDR.
    #[arg(long, default_value_t = default_bind())]
    pub bind: String,
    /// Number of HTTP worker threads.
    #[arg(long, default_value_t = 2)]
    pub workers: usize,
}

fn default_bind() -> String {
    std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string())
}

/// Route table, shared between the binary and the test harness.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(handlers::health))
        .route("/bets", web::get().to(handlers::state))
        .route("/bets", web::post().to(handlers::place))
        .route("/reveal", web::get().to(handlers::status))
        .route("/reveal", web::post().to(handlers::reveal))
        .route("/reset", web::post().to(handlers::reset))
        .route("/winnings/{user_id}", web::get().to(handlers::winnings));
}

pub async fn run(args: Args) -> Result<(), std::io::Error> {
    let store = web::Data::new(MemoryStore::new());
    log::info!("starting betting pool server on {}", args.bind);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%r %s %Ts"))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .app_data(store.clone())
            .configure(routes)
    })
    .workers(args.workers)
    .bind(args.bind)?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test;

    fn store() -> web::Data<MemoryStore> {
        web::Data::new(MemoryStore::new())
    }

    macro_rules! service {
        ($store:expr) => {
            test::init_service(App::new().app_data($store.clone()).configure(routes)).await
        };
    }

    #[actix_web::test]
    async fn health_is_ok() {
        let app = service!(store());
        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
        assert!(resp.status().is_success());
    }

    #[actix_web::test]
    async fn fresh_ledger_snapshot() {
        let app = service!(store());
        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/bets").to_request()).await;
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["bets"], serde_json::json!([]));
        assert_eq!(body["boyCoefficient"], 1.5);
        assert_eq!(body["girlCoefficient"], 1.5);
        assert_eq!(body["genderRevealed"], false);
        assert_eq!(body["revealedGender"], serde_json::Value::Null);
    }

    #[actix_web::test]
    async fn placing_a_bet_updates_pools_and_odds() {
        let app = service!(store());
        let req = test::TestRequest::post()
            .uri("/bets")
            .set_json(serde_json::json!({
                "bet": {"userId": "u1", "userName": "Ann", "gender": "boy", "amount": 100}
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["boyPool"], 100);
        assert_eq!(body["girlPool"], 0);
        assert_eq!(body["totalPlayers"], 1);
        assert_eq!(body["bets"][0]["userName"], "Ann");
        assert!(body["bets"][0]["id"].is_string());
        assert!(body["bets"][0]["timestamp"].is_u64());
    }

    #[actix_web::test]
    async fn malformed_bet_is_rejected_with_the_wire_message() {
        let app = service!(store());
        let req = test::TestRequest::post()
            .uri("/bets")
            .set_json(serde_json::json!({"bet": {"userId": "u1"}}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Invalid bet data");
    }

    #[actix_web::test]
    async fn reveal_closes_betting() {
        let app = service!(store());
        let req = test::TestRequest::post()
            .uri("/reveal")
            .set_json(serde_json::json!({"gender": "girl"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
        let status =
            test::call_service(&app, test::TestRequest::get().uri("/reveal").to_request()).await;
        let body: serde_json::Value = test::read_body_json(status).await;
        assert_eq!(body["genderRevealed"], true);
        assert_eq!(body["revealedGender"], "girl");
        // second reveal fails
        let req = test::TestRequest::post()
            .uri("/reveal")
            .set_json(serde_json::json!({"gender": "boy"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Gender has already been revealed");
        // and so do further bets
        let req = test::TestRequest::post()
            .uri("/bets")
            .set_json(serde_json::json!({
                "bet": {"userId": "u1", "userName": "Ann", "gender": "boy", "amount": 100}
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Gender has already been revealed");
    }

    #[actix_web::test]
    async fn unparseable_bodies_get_the_wire_messages() {
        let app = service!(store());
        let req = test::TestRequest::post()
            .uri("/bets")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Invalid bet data");
        let req = test::TestRequest::post()
            .uri("/reveal")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Invalid gender");
    }

    #[actix_web::test]
    async fn invalid_gender_is_rejected() {
        let app = service!(store());
        let req = test::TestRequest::post()
            .uri("/reveal")
            .set_json(serde_json::json!({"gender": "unknown"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Invalid gender");
    }

    #[actix_web::test]
    async fn reset_restores_the_fresh_state() {
        let app = service!(store());
        let req = test::TestRequest::post()
            .uri("/bets")
            .set_json(serde_json::json!({
                "bet": {"userId": "u1", "userName": "Ann", "gender": "boy", "amount": 100}
            }))
            .to_request();
        test::call_service(&app, req).await;
        let resp =
            test::call_service(&app, test::TestRequest::post().uri("/reset").to_request()).await;
        assert!(resp.status().is_success());
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["state"]["bets"], serde_json::json!([]));
        assert_eq!(body["state"]["boyPool"], 0);
        assert_eq!(body["state"]["genderRevealed"], false);
    }

    #[actix_web::test]
    async fn winnings_flow_end_to_end() {
        let app = service!(store());
        for (user, name, gender, amount) in [
            ("u1", "Ann", "boy", 100),
            ("u2", "Bob", "boy", 100),
            ("u3", "Cat", "girl", 200),
        ] {
            let req = test::TestRequest::post()
                .uri("/bets")
                .set_json(serde_json::json!({
                    "bet": {"userId": user, "userName": name, "gender": gender, "amount": amount}
                }))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert!(resp.status().is_success());
        }
        let req = test::TestRequest::post()
            .uri("/reveal")
            .set_json(serde_json::json!({"gender": "boy"}))
            .to_request();
        test::call_service(&app, req).await;
        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/winnings/u2").to_request(),
        )
        .await;
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["genderRevealed"], true);
        assert_eq!(body["total"], 200);
        assert_eq!(body["winnings"][0]["won"], true);
        assert_eq!(body["winnings"][0]["payout"], 200);
        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/winnings/u3").to_request(),
        )
        .await;
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["total"], 0);
        assert_eq!(body["winnings"][0]["won"], false);
    }
}
